mod sink;

pub use sink::FsReportSink;
