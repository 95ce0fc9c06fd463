use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{self, AppState};

/// Create the main application router, mirroring the demo's navigation
/// surface: public pages, the session endpoints, and the two role-gated
/// dashboard subtrees.
pub fn create_router(state: AppState) -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    Router::new()
        // Public pages
        .route("/", get(handlers::landing))
        .route("/terms", get(handlers::terms))
        .route("/privacy", get(handlers::privacy))
        // Health check
        .route("/health", get(handlers::health_check))
        // Session
        .route("/login", get(handlers::login_hints).post(handlers::login))
        .route("/logout", post(handlers::logout))
        // Investor subtree
        .route("/investor", get(handlers::investor_dashboard))
        .route("/investor/investments", get(handlers::investor_investments))
        .route("/investor/transactions", get(handlers::investor_transactions))
        .route(
            "/investor/withdrawals",
            get(handlers::investor_withdrawals).post(handlers::submit_withdrawal),
        )
        // Admin subtree
        .route("/admin", get(handlers::admin_dashboard))
        .route(
            "/admin/investors",
            get(handlers::admin_investors).post(handlers::add_investor),
        )
        .route(
            "/admin/schemes",
            get(handlers::admin_schemes).post(handlers::save_scheme),
        )
        .route("/admin/schemes/:id", delete(handlers::delete_scheme))
        .route("/admin/withdrawals", get(handlers::admin_withdrawals))
        .route(
            "/admin/withdrawals/:id/approve",
            post(handlers::approve_withdrawal),
        )
        .route(
            "/admin/withdrawals/:id/reject",
            post(handlers::reject_withdrawal),
        )
        // Demo mode
        .route("/api/demo/reset", post(handlers::reset_demo))
        // Unmatched paths render the not-found view
        .fallback(handlers::not_found)
        // Add shared state
        .with_state(state)
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
