use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use demo_data::{format_currency, format_date};
use models::{
    AdminInvestor, AdminWithdrawal, CredentialRecord, DistributionSlice, Identity, Investment,
    InvestorProfile, InvestorStatPoint, PlatformStats, ProfitPoint, Role, Scheme, Transaction,
    Withdrawal, WithdrawalStatus,
};
use session::SessionContext;
use view_models::{NewInvestor, SaveOutcome, SchemeForm};

use crate::{
    error::ApiError,
    guard::require_role,
    repository::PlatformRepository,
};

/// Fixed artificial pauses emulating network latency on the two submitting
/// forms. Nothing else in the demo awaits anything but lock acquisition.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDelays {
    pub login: Duration,
    pub withdrawal: Duration,
}

impl SimulatedDelays {
    pub fn from_millis(login_ms: u64, withdrawal_ms: u64) -> Self {
        Self {
            login: Duration::from_millis(login_ms),
            withdrawal: Duration::from_millis(withdrawal_ms),
        }
    }

    pub fn none() -> Self {
        Self::from_millis(0, 0)
    }
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        Self::from_millis(500, 1000)
    }
}

/// Shared application state, created once at the root and handed to the
/// router. The session is the only cross-page state in the whole demo.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionContext>,
    pub repo: Arc<dyn PlatformRepository>,
    pub delays: SimulatedDelays,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// A pre-formatted dashboard tile.
#[derive(Debug, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

impl StatCard {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// Public pages

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub schemes: Vec<Scheme>,
    pub stats: PlatformStats,
}

/// GET /
/// Public landing payload: the scheme catalog and platform statistics.
pub async fn landing() -> impl IntoResponse {
    Json(LandingPage {
        schemes: demo_data::investment_schemes(),
        stats: demo_data::platform_stats(),
    })
}

/// GET /terms
pub async fn terms() -> impl IntoResponse {
    Json(serde_json::json!({
        "title": "Terms of Service",
        "sections": [
            "This platform is a demonstration. All figures, schemes and returns are illustrative.",
            "No real money is accepted, invested or paid out.",
            "Accounts, balances and transactions reset whenever the demo is reloaded.",
        ],
    }))
}

/// GET /privacy
pub async fn privacy() -> impl IntoResponse {
    Json(serde_json::json!({
        "title": "Privacy Policy",
        "sections": [
            "The demo stores no personal data. Nothing entered here leaves process memory.",
            "There are no cookies, no analytics and no persistence of any kind.",
        ],
    }))
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "investment-demo-api"
    }))
}

// ---------------------------------------------------------------------------
// Session

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: Identity,
    /// The home route for the logged-in role.
    pub redirect: String,
}

#[derive(Debug, Serialize)]
pub struct LoginHints {
    pub message: String,
    pub investor: CredentialRecord,
    pub admin: CredentialRecord,
}

/// GET /login
/// The in-app "click to fill" demo credential shortcuts.
pub async fn login_hints() -> impl IntoResponse {
    let [investor, admin] = demo_data::demo_credentials();
    Json(LoginHints {
        message: "Demo credentials (click to fill)".to_string(),
        investor,
        admin,
    })
}

/// POST /login
/// Validates against the two fixed credential pairs after the simulated
/// network delay. Failure is always the same generic message.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> axum::response::Result<impl IntoResponse> {
    tokio::time::sleep(state.delays.login).await;

    let user = state
        .session
        .login(&req.email, &req.password)
        .await
        .map_err(ApiError::from)?;

    let redirect = user.role.home_path().to_string();
    Ok(Json(LoginResponse { user, redirect }))
}

/// POST /logout
/// Clears the identity slot; idempotent.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.session.logout().await;
    StatusCode::NO_CONTENT
}

// ---------------------------------------------------------------------------
// Investor pages

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorDashboard {
    pub profile: InvestorProfile,
    pub stats: Vec<StatCard>,
    pub member_since: String,
    pub profit_chart: Vec<ProfitPoint>,
}

/// GET /investor
pub async fn investor_dashboard(
    State(state): State<AppState>,
) -> axum::response::Result<impl IntoResponse> {
    require_role(&state.session, Role::Investor).await?;

    let profile = demo_data::demo_investor();
    let stats = vec![
        StatCard::new("Total Invested", format_currency(profile.total_invested)),
        StatCard::new("Active Schemes", profile.active_schemes.to_string()),
        StatCard::new("Current Profit", format_currency(profile.current_profit)),
        StatCard::new("Wallet Balance", format_currency(profile.wallet_balance)),
    ];
    let member_since = format_date(&profile.joined_date);

    Ok(Json(InvestorDashboard {
        profile,
        stats,
        member_since,
        profit_chart: demo_data::profit_chart(),
    }))
}

/// GET /investor/investments
pub async fn investor_investments(
    State(state): State<AppState>,
) -> axum::response::Result<Json<Vec<Investment>>> {
    require_role(&state.session, Role::Investor).await?;
    Ok(Json(demo_data::investor_investments()))
}

/// GET /investor/transactions
pub async fn investor_transactions(
    State(state): State<AppState>,
) -> axum::response::Result<Json<Vec<Transaction>>> {
    require_role(&state.session, Role::Investor).await?;
    Ok(Json(demo_data::investor_transactions()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalsPage {
    pub wallet_balance: f64,
    pub wallet_balance_display: String,
    pub minimum_display: String,
    pub records: Vec<Withdrawal>,
}

/// GET /investor/withdrawals
pub async fn investor_withdrawals(
    State(state): State<AppState>,
) -> axum::response::Result<impl IntoResponse> {
    require_role(&state.session, Role::Investor).await?;

    let (wallet_balance, records) = state.repo.investor_withdrawals().await;
    Ok(Json(WithdrawalsPage {
        wallet_balance,
        wallet_balance_display: format_currency(wallet_balance),
        minimum_display: format!("Minimum: {}", format_currency(100.0)),
        records,
    }))
}

#[derive(Debug, Deserialize)]
pub struct WithdrawalRequest {
    pub amount: f64,
}

/// POST /investor/withdrawals
/// Validates the amount against the wallet balance; invalid amounts fail
/// immediately, a valid request resolves as Pending after the simulated
/// delay.
pub async fn submit_withdrawal(
    State(state): State<AppState>,
    Json(req): Json<WithdrawalRequest>,
) -> axum::response::Result<impl IntoResponse> {
    require_role(&state.session, Role::Investor).await?;

    let record = state.repo.submit_withdrawal(req.amount, today()).await?;
    tokio::time::sleep(state.delays.withdrawal).await;
    Ok((StatusCode::CREATED, Json(record)))
}

// ---------------------------------------------------------------------------
// Admin pages

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub stats: Vec<StatCard>,
    pub pending_withdrawals: Vec<AdminWithdrawal>,
    pub recent_investors: Vec<AdminInvestor>,
    pub profit_distribution: Vec<DistributionSlice>,
    pub investor_stats: Vec<InvestorStatPoint>,
}

/// GET /admin
/// Aggregates are computed from fresh seeds: the dashboard page does not
/// see mutations made on the other admin pages.
pub async fn admin_dashboard(
    State(state): State<AppState>,
) -> axum::response::Result<impl IntoResponse> {
    require_role(&state.session, Role::Admin).await?;

    let investors = demo_data::all_investors();
    let withdrawals = demo_data::all_withdrawals();
    let platform = demo_data::platform_stats();

    let pending_withdrawals: Vec<AdminWithdrawal> = withdrawals
        .into_iter()
        .filter(|w| w.status == WithdrawalStatus::Pending)
        .collect();

    let stats = vec![
        StatCard::new("Total Investors", investors.len().to_string()),
        StatCard::new("Capital Managed", platform.capital_managed.clone()),
        StatCard::new("Pending Withdrawals", pending_withdrawals.len().to_string()),
        StatCard::new("Avg Monthly Return", platform.avg_monthly_return.clone()),
        StatCard::new(
            "Total Profit Generated",
            format_currency(platform.total_profit_generated),
        ),
        StatCard::new("Paid Payouts", format_currency(platform.paid_payouts)),
        StatCard::new("Pending Payouts", format_currency(platform.pending_payouts)),
        StatCard::new(
            "Net Profit After Distribution",
            format_currency(platform.net_profit_after_distribution),
        ),
    ];

    let recent_investors: Vec<AdminInvestor> = investors.into_iter().take(5).collect();

    Ok(Json(AdminDashboard {
        stats,
        pending_withdrawals,
        recent_investors,
        profit_distribution: demo_data::profit_distribution(),
        investor_stats: demo_data::investor_stats(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct InvestorSearch {
    pub search: Option<String>,
}

/// GET /admin/investors?search=
pub async fn admin_investors(
    State(state): State<AppState>,
    Query(params): Query<InvestorSearch>,
) -> axum::response::Result<Json<Vec<AdminInvestor>>> {
    require_role(&state.session, Role::Admin).await?;
    let investors = state.repo.investors(params.search.as_deref()).await;
    Ok(Json(investors))
}

/// POST /admin/investors
pub async fn add_investor(
    State(state): State<AppState>,
    Json(new): Json<NewInvestor>,
) -> axum::response::Result<impl IntoResponse> {
    require_role(&state.session, Role::Admin).await?;
    let investor = state.repo.add_investor(new, today()).await?;
    Ok((StatusCode::CREATED, Json(investor)))
}

/// GET /admin/schemes
pub async fn admin_schemes(
    State(state): State<AppState>,
) -> axum::response::Result<Json<Vec<Scheme>>> {
    require_role(&state.session, Role::Admin).await?;
    Ok(Json(state.repo.schemes().await))
}

/// POST /admin/schemes
/// Creates a scheme, or updates in place when the form carries an id.
pub async fn save_scheme(
    State(state): State<AppState>,
    Json(form): Json<SchemeForm>,
) -> axum::response::Result<impl IntoResponse> {
    require_role(&state.session, Role::Admin).await?;

    let (outcome, scheme) = state.repo.save_scheme(form).await?;
    let status = match outcome {
        SaveOutcome::Created => StatusCode::CREATED,
        SaveOutcome::Updated => StatusCode::OK,
    };
    Ok((status, Json(scheme)))
}

/// DELETE /admin/schemes/:id
/// Remove-by-id; deleting an absent id is a quiet no-op.
pub async fn delete_scheme(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Result<impl IntoResponse> {
    require_role(&state.session, Role::Admin).await?;
    state.repo.delete_scheme(&id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /admin/withdrawals
pub async fn admin_withdrawals(
    State(state): State<AppState>,
) -> axum::response::Result<Json<Vec<AdminWithdrawal>>> {
    require_role(&state.session, Role::Admin).await?;
    Ok(Json(state.repo.admin_withdrawals().await))
}

/// POST /admin/withdrawals/:id/approve
pub async fn approve_withdrawal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Result<impl IntoResponse> {
    require_role(&state.session, Role::Admin).await?;
    let updated = state.repo.approve_withdrawal(&id).await?;
    Ok(Json(updated))
}

/// POST /admin/withdrawals/:id/reject
pub async fn reject_withdrawal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Result<impl IntoResponse> {
    require_role(&state.session, Role::Admin).await?;
    let updated = state.repo.reject_withdrawal(&id).await?;
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Demo mode

/// POST /api/demo/reset
/// Re-seeds every page and clears the session, the closest server-side
/// analog of reloading the SPA.
pub async fn reset_demo(State(state): State<AppState>) -> impl IntoResponse {
    state.repo.reset().await;
    state.session.logout().await;

    Json(serde_json::json!({
        "status": "success",
        "message": "Demo state reset. All pages are back to their seeded defaults.",
    }))
}

/// Fallback for unmatched paths.
pub async fn not_found() -> impl IntoResponse {
    ApiError::PageNotFound
}
