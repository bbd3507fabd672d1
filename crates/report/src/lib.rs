mod config;
mod entry;
mod error;
mod sink;

pub use config::ReportConfig;
pub use entry::{HostEntry, SummaryEntry};
pub use error::ReportError;
pub use sink::ReportSink;
