//! Fixed file locations.

use std::path::PathBuf;

/// Ranges file read at startup.
pub const DEFAULT_CIDR_FILE: &str = "cidrs.txt";
/// Addresses file read at startup.
pub const DEFAULT_IP_FILE: &str = "ips.txt";
/// log4rs configuration, relative to the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Input files for one matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cidr_file: PathBuf,
    pub ip_file: PathBuf,
}

impl Config {
    pub fn new(cidr_file: impl Into<PathBuf>, ip_file: impl Into<PathBuf>) -> Config {
        Config {
            cidr_file: cidr_file.into(),
            ip_file: ip_file.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_CIDR_FILE, DEFAULT_IP_FILE)
    }
}
