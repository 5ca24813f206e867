//! Subcommand handlers for list-cameras and config actions.

use super::args::ConfigAction;
use crate::config::{default_path as get_config_path, Config};
use crate::registry::{CameraListResponse, CameraRegistry, NokhwaProbe, SystemClock};

/// List available cameras and print them to stdout.
pub fn list_cameras(config: &Config, max_index: Option<u32>, json: bool) {
    let max_index = max_index.unwrap_or(config.discovery.max_index);
    let registry =
        CameraRegistry::new(NokhwaProbe, SystemClock, config.discovery.cache_ttl());
    let cameras = registry.list_available_cameras(max_index);

    if json {
        let response = CameraListResponse { cameras };
        match serde_json::to_string_pretty(&response) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if cameras.is_empty() {
        println!("No cameras found in indices 0..{}.", max_index);
        println!();
        println!("Make sure your camera is connected and permissions are granted.");
        println!("Use --max-index <N> to probe a wider index range.");
    } else {
        println!("Available cameras:");
        for device in cameras {
            println!("  {}", device);
        }
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(config: &Config, action: ConfigAction) {
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Max probe index: {}", config.discovery.max_index);
            println!("  Cache TTL: {}s", config.discovery.cache_ttl_secs);
            println!("  Server bind: {}:{}", config.server.host, config.server.port);
            println!();

            let config_path = get_config_path();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Path => {
            println!("{}", get_config_path().display());
        }
    }
}
