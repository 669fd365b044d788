pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::PopulaceConfig;
pub use error::{PopulaceError, Result};
pub use types::{CitizenId, KingdomId, PlayerId, WorkerId};
