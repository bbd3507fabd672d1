use std::path::PathBuf;

use taskaudit_domain::HostName;

/// Where and how report files are written.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory holding every report file. Must already exist.
    pub output_dir: PathBuf,
    /// File name of the cross-host summary report.
    pub summary_file: String,
    /// Extension of per-host report files.
    pub host_file_extension: String,
    /// Terminate each summary line with a single quote, as existing audit
    /// tooling expects.
    pub summary_trailing_quote: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            summary_file: "summary_report.csv".to_string(),
            host_file_extension: "csv".to_string(),
            summary_trailing_quote: true,
        }
    }
}

impl ReportConfig {
    /// File name of the report for `host`, e.g. `web1.csv`.
    pub fn host_file_name(&self, host: &HostName) -> String {
        if self.host_file_extension.is_empty() {
            host.to_string()
        } else {
            format!("{host}.{}", self.host_file_extension)
        }
    }

    pub fn host_path(&self, host: &HostName) -> PathBuf {
        self.output_dir.join(self.host_file_name(host))
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file)
    }
}
