pub mod classify;
pub mod error;
pub mod events;
pub mod host;
pub mod record;
pub mod status;

pub use classify::{Outcome, classify, classify_value};
pub use error::DomainError;
pub use events::RunnerEvent;
pub use host::HostName;
pub use record::{Message, ResultRecord};
pub use status::Status;
