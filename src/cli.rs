//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// petalshop - flower shop ordering backend
#[derive(Parser, Debug)]
#[command(name = "petalshop")]
#[command(version)]
#[command(about = "Flower shop ordering backend with trackable short links", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Override server.host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(long, short = 'p', global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Write a sample configuration file
    GenerateConfig {
        /// Output path (default: stdout)
        path: Option<PathBuf>,
    },

    /// Load and validate the configuration, then print it
    CheckConfig,
}

impl Cli {
    /// The command to run, `serve` when none is given
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }

    /// Apply `--host`/`--port` on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut crate::config::StaticConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticConfig;

    #[test]
    fn test_default_command_is_serve() {
        let cli = Cli::parse_from(["petalshop"]);
        assert_eq!(cli.command(), &Commands::Serve);
    }

    #[test]
    fn test_global_flags_and_subcommand() {
        let cli = Cli::parse_from(["petalshop", "generate-config", "out.toml", "-c", "shop.toml"]);

        assert_eq!(cli.config, Some(PathBuf::from("shop.toml")));
        assert_eq!(
            cli.command(),
            &Commands::GenerateConfig {
                path: Some(PathBuf::from("out.toml"))
            }
        );
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["petalshop", "--host", "0.0.0.0", "-p", "9000", "serve"]);
        let mut config = StaticConfig::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.base_url(), "http://0.0.0.0:9000/");
    }
}
