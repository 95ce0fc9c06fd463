use axum::response::{IntoResponse, Redirect, Response};
use models::{Identity, Role};
use session::SessionContext;

/// Outcome of checking a protected view against the current identity.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Unauthenticated,
    WrongRole { home: &'static str },
    Authorized(Identity),
}

/// Decides whether a view requiring `required` may render. Evaluated on
/// every request; the decision is never cached, since the identity can
/// change (logout) while a view stays mounted on the client.
pub fn evaluate(current: Option<&Identity>, required: Role) -> GuardDecision {
    match current {
        None => GuardDecision::Unauthenticated,
        Some(identity) if identity.role == required => GuardDecision::Authorized(identity.clone()),
        Some(identity) => GuardDecision::WrongRole {
            home: identity.role.home_path(),
        },
    }
}

/// Redirect issued when the guard refuses to render: to `/login` when no
/// one is logged in, to the identity's own home subtree on a role mismatch.
#[derive(Debug)]
pub struct GuardRedirect(Redirect);

impl GuardRedirect {
    pub fn to(path: &str) -> Self {
        Self(Redirect::to(path))
    }
}

impl IntoResponse for GuardRedirect {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

/// Gate a handler on a role with a single `?`.
pub async fn require_role(
    session: &SessionContext,
    required: Role,
) -> Result<Identity, GuardRedirect> {
    match evaluate(session.current().await.as_ref(), required) {
        GuardDecision::Authorized(identity) => Ok(identity),
        GuardDecision::Unauthenticated => Err(GuardRedirect::to("/login")),
        GuardDecision::WrongRole { home } => Err(GuardRedirect::to(home)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            email: "someone@demo.com".to_string(),
            role,
            name: "Someone".to_string(),
        }
    }

    #[test]
    fn test_no_identity_is_unauthenticated() {
        assert_eq!(evaluate(None, Role::Investor), GuardDecision::Unauthenticated);
        assert_eq!(evaluate(None, Role::Admin), GuardDecision::Unauthenticated);
    }

    #[test]
    fn test_matching_role_is_authorized() {
        let admin = identity(Role::Admin);
        match evaluate(Some(&admin), Role::Admin) {
            GuardDecision::Authorized(id) => assert_eq!(id.role, Role::Admin),
            other => panic!("expected Authorized, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_role_redirects_to_own_home() {
        let investor = identity(Role::Investor);
        assert_eq!(
            evaluate(Some(&investor), Role::Admin),
            GuardDecision::WrongRole { home: "/investor" }
        );

        let admin = identity(Role::Admin);
        assert_eq!(
            evaluate(Some(&admin), Role::Investor),
            GuardDecision::WrongRole { home: "/admin" }
        );
    }
}
