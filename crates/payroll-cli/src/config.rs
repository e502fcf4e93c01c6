//! Runtime configuration
//!
//! Resolved from command-line flags, environment variables, and an optional
//! `.env` file (loaded before argument parsing).

use std::path::PathBuf;

use clap::ValueEnum;
use payroll_core::logging_facility::Profile;

/// Default SQLite file, relative to the working directory
pub const DEFAULT_DB_PATH: &str = ".payroll/payroll.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfileArg {
    Console,
    Development,
    Production,
}

impl From<LogProfileArg> for Profile {
    fn from(arg: LogProfileArg) -> Self {
        match arg {
            LogProfileArg::Console => Profile::Console,
            LogProfileArg::Development => Profile::Development,
            LogProfileArg::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub seed_on_empty: bool,
    pub log_profile: Profile,
}

impl AppConfig {
    pub fn new(db_path: PathBuf, no_seed: bool, log_profile: LogProfileArg) -> Self {
        Self {
            db_path,
            seed_on_empty: !no_seed,
            log_profile: log_profile.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_seed_flag_inverts() {
        let config = AppConfig::new(PathBuf::from("x.db"), true, LogProfileArg::Console);
        assert!(!config.seed_on_empty);
        assert_eq!(config.log_profile, Profile::Console);
    }

    #[test]
    fn test_profile_mapping() {
        assert_eq!(
            Profile::from(LogProfileArg::Production),
            Profile::Production
        );
        assert_eq!(
            Profile::from(LogProfileArg::Development),
            Profile::Development
        );
    }
}
