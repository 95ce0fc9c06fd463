//! Per-page in-memory state for the demo dashboards.
//!
//! Each view-model seeds itself from `demo_data` on construction and owns
//! its records outright. Mutations touch only that instance; a page that is
//! re-seeded is back to the defaults. Validation failures leave the state
//! untouched and carry the user-visible message.

pub mod error;
pub mod investors;
pub mod schemes;
pub mod withdrawals;

pub use error::ValidationError;
pub use investors::{AdminInvestors, NewInvestor};
pub use schemes::{SaveOutcome, SchemeCatalog, SchemeForm};
pub use withdrawals::{AdminWithdrawals, InvestorWithdrawals};
