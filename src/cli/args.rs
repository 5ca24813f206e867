//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Probe, cache, and serve the list of available camera devices
#[derive(Parser, Debug)]
#[command(name = "camscan")]
#[command(version, about = "Camera discovery with cached parallel probing", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras {
        /// Probe device indices 0..MAX_INDEX (exclusive)
        #[arg(long)]
        max_index: Option<u32>,
        /// Print machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Serve the camera list over HTTP (GET /cameras)
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_subcommand() {
        let args = Args::try_parse_from(["camscan"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_list_cameras_with_overrides() {
        let args =
            Args::try_parse_from(["camscan", "list-cameras", "--max-index", "5", "--json"])
                .unwrap();
        match args.command {
            Some(Command::ListCameras { max_index, json }) => {
                assert_eq!(max_index, Some(5));
                assert!(json);
            }
            other => panic!("Expected ListCameras, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_with_bind_overrides() {
        let args =
            Args::try_parse_from(["camscan", "serve", "--host", "0.0.0.0", "--port", "9000"])
                .unwrap();
        match args.command {
            Some(Command::Serve { host, port }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(9000));
            }
            other => panic!("Expected Serve, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_path() {
        let args = Args::try_parse_from(["camscan", "config", "path"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Path
            })
        ));
    }

    #[test]
    fn test_invalid_max_index_rejected() {
        assert!(Args::try_parse_from(["camscan", "list-cameras", "--max-index", "-1"]).is_err());
    }
}
