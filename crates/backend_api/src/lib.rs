pub mod error;
pub mod guard;
pub mod handlers;
pub mod repository;
pub mod router;
pub mod server;

pub use error::{ApiError, Result};
pub use handlers::{AppState, SimulatedDelays};
pub use repository::{InMemoryPlatformRepository, PlatformRepository};
pub use router::create_router;
pub use server::run_server;
