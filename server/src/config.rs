use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use serde::Deserialize;
use sweeper_core::Coord;
use sweeper_protocol::UserId;
use thiserror::Error;

use crate::auth::GAME_SCOPE;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on, overrides the configuration file
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub limits: BoardLimits,
    pub tokens: Vec<TokenEntry>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            limits: BoardLimits::default(),
            tokens: Vec::new(),
        }
    }
}

/// Largest board a client may create.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardLimits {
    pub max_width: Coord,
    pub max_height: Coord,
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self {
            max_width: 200,
            max_height: 200,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenEntry {
    pub token: String,
    pub user_id: UserId,
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_scope() -> String {
    GAME_SCOPE.to_string()
}

impl ServerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Configuration file (if any) with command line overrides applied.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(bind) = args.bind {
            config.bind = bind;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn parses_limits_and_tokens() {
        let config = ServerConfig::from_toml_str(
            r#"
            bind = "0.0.0.0:9000"

            [limits]
            max_width = 50

            [[tokens]]
            token = "secret"
            user_id = 7

            [[tokens]]
            token = "refresh"
            user_id = 7
            scope = "refresh"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind, SocketAddr::from(([0, 0, 0, 0], 9000)));
        assert_eq!(config.limits.max_width, 50);
        assert_eq!(config.limits.max_height, 200);
        assert_eq!(config.tokens.len(), 2);
        assert_eq!(config.tokens[0].scope, GAME_SCOPE);
        assert_eq!(config.tokens[1].scope, "refresh");
    }

    #[test]
    fn bind_flag_overrides_file() {
        let args = Args::parse_from(["sweeper-server", "--bind", "127.0.0.1:1234"]);

        let config = ServerConfig::resolve(&args).unwrap();

        assert_eq!(config.bind, SocketAddr::from(([127, 0, 0, 1], 1234)));
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(matches!(
            ServerConfig::from_toml_str("limits = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
