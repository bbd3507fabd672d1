mod sink;

pub use sink::MemoryReportSink;
