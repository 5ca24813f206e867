use clap::Parser;

use camscan::cli::{self, Args, Command};
use camscan::config;
use camscan::registry::{CameraRegistry, NokhwaProbe, SystemClock};
use camscan::server;

fn main() {
    env_logger::init();

    let args = Args::parse();

    let cfg = match config::Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        Some(Command::ListCameras { max_index, json }) => {
            cli::list_cameras(&cfg, max_index, json);
        }
        Some(Command::Serve { host, port }) => {
            if let Err(e) = run_server(&cfg, host, port) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Command::Config { action }) => {
            cli::handle_config_action(&cfg, action);
        }
        // Bare `camscan` behaves like `camscan list-cameras`.
        None => {
            cli::list_cameras(&cfg, None, false);
        }
    }
}

fn run_server(
    cfg: &config::Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), server::ServerError> {
    // CLI args > config file > built-in defaults
    let mut server_cfg = cfg.server.clone();
    if let Some(host) = host {
        server_cfg.host = host;
    }
    if let Some(port) = port {
        server_cfg.port = port;
    }

    let registry = CameraRegistry::new(NokhwaProbe, SystemClock, cfg.discovery.cache_ttl());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(
        &server_cfg,
        registry,
        cfg.discovery.max_index,
    ))
}
