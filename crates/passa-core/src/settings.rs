use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Analyse password and account age data from a CSV export.
///
/// The CSV file must contain the columns Domain, Name, Last Logon,
/// Last Password Change and Account Creation Date.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "passa",
    about = "Analyse password and account age data from a CSV export",
    version,
    after_help = "Example usage:\n    passa -f data.csv\n    passa --file data.csv --output results/"
)]
pub struct Settings {
    /// Path to the input CSV file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Output directory for results
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", env = "PASSA_LOG_LEVEL", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Skip writing the JSON statistics, account and chart-data exports
    #[arg(long)]
    pub no_export: bool,
}

impl Settings {
    /// Parse settings from an explicit argument list.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Path of the detailed findings report inside the output directory.
    pub fn detailed_report_path(&self) -> PathBuf {
        self.output.join("detailed_findings.txt")
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_args(["passa", "-f", "data.csv"]).unwrap();
        assert_eq!(settings.file, PathBuf::from("data.csv"));
        assert_eq!(settings.output, PathBuf::from("output"));
        assert_eq!(settings.log_level, "INFO");
        assert!(!settings.no_export);
    }

    #[test]
    fn test_long_flags() {
        let settings = Settings::from_args([
            "passa",
            "--file",
            "accounts.csv",
            "--output",
            "results",
            "--log-level",
            "DEBUG",
            "--no-export",
        ])
        .unwrap();
        assert_eq!(settings.file, PathBuf::from("accounts.csv"));
        assert_eq!(settings.output, PathBuf::from("results"));
        assert_eq!(settings.log_level, "DEBUG");
        assert!(settings.no_export);
        assert_eq!(
            settings.detailed_report_path(),
            PathBuf::from("results").join("detailed_findings.txt")
        );
    }

    #[test]
    fn test_file_is_required() {
        assert!(Settings::from_args(["passa"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Settings::from_args(["passa", "-f", "a.csv", "--log-level", "LOUD"]).is_err());
    }
}
