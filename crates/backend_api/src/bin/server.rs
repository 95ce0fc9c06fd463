use backend_api::{run_server, AppState, InMemoryPlatformRepository, SimulatedDelays};
use session::SessionContext;
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse environment variables (with sane defaults)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);
    let login_delay_ms: u64 = env::var("LOGIN_DELAY_MS")
        .unwrap_or_else(|_| "500".to_string())
        .parse()
        .unwrap_or(500);
    let withdrawal_delay_ms: u64 = env::var("WITHDRAWAL_DELAY_MS")
        .unwrap_or_else(|_| "1000".to_string())
        .parse()
        .unwrap_or(1000);

    println!("Investment Platform Demo API");
    println!("============================");
    println!("Listening on: {}:{}", host, port);
    println!(
        "Simulated latency: login {}ms, withdrawal {}ms",
        login_delay_ms, withdrawal_delay_ms
    );
    println!("Demo credentials: investor@demo.com / demo123, admin@demo.com / admin123");
    println!("Changes are not persisted after a reset (demo mode)");
    println!();

    let state = AppState {
        session: Arc::new(SessionContext::new(demo_data::demo_credentials())),
        repo: Arc::new(InMemoryPlatformRepository::new()),
        delays: SimulatedDelays::from_millis(login_delay_ms, withdrawal_delay_ms),
    };

    // Start the server
    run_server(state, &host, port).await?;

    Ok(())
}
