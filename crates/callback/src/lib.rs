mod context;
mod error;
mod reporter;
mod stream;

pub use context::RunContext;
pub use error::CallbackError;
pub use reporter::{Reporter, RunStats};
pub use stream::run_event_stream;
