use std::path::PathBuf;

use clap::Args;

use crate::api::DEFAULT_API_BASE;

/// Runtime options shared by the binary and its tests.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Catalog API base URL
    #[arg(long, env = "POKEDEX_API_BASE")]
    pub api_base: Option<String>,

    /// Directory for favorites and the log file
    #[arg(long, env = "POKEDEX_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log file path (defaults to pokedex.log in the data directory)
    #[arg(long, env = "POKEDEX_LOG")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_args(args: &ConfigArgs) -> Self {
        let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
        let log_file = args
            .log_file
            .clone()
            .unwrap_or_else(|| data_dir.join("pokedex.log"));
        let api_base = args
            .api_base
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();
        Self {
            api_base,
            data_dir,
            log_file,
        }
    }

    /// Root of the key-value store holding favorites.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }
}

fn default_data_dir() -> PathBuf {
    dirs_next::data_local_dir()
        .map(|dir| dir.join("pokedex"))
        .unwrap_or_else(|| PathBuf::from(".pokedex"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    #[test]
    fn explicit_paths_win() {
        let cli = TestCli::try_parse_from([
            "pokedex",
            "--data-dir",
            "/tmp/dex",
            "--api-base",
            "http://localhost:9000/api/v2/",
        ])
        .unwrap();
        let config = Config::from_args(&cli.config);
        assert_eq!(config.api_base, "http://localhost:9000/api/v2");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/dex"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/dex/pokedex.log"));
        assert_eq!(config.store_dir(), PathBuf::from("/tmp/dex/store"));
    }

    #[test]
    fn log_file_can_live_elsewhere() {
        let args = ConfigArgs {
            data_dir: Some(PathBuf::from("/tmp/dex")),
            log_file: Some(PathBuf::from("/var/log/dex.log")),
            ..Default::default()
        };
        let config = Config::from_args(&args);
        assert_eq!(config.log_file, PathBuf::from("/var/log/dex.log"));
    }

    #[test]
    fn blank_api_base_uses_default() {
        let args = ConfigArgs {
            api_base: Some("  ".into()),
            data_dir: Some(PathBuf::from("/tmp/dex")),
            ..Default::default()
        };
        assert_eq!(Config::from_args(&args).api_base, DEFAULT_API_BASE);
    }
}
