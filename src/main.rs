use std::process::ExitCode;

use catnap::app::App;
use catnap::asset::set_asset_root;
use catnap::config::{Config, USAGE};
use catnap::platform;
use tracing::{error, info};

pub fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if config.show_help {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    platform::init_tracing();
    set_asset_root(config.assets_dir.clone());
    info!(version = env!("CARGO_PKG_VERSION"), "Starting");

    let mut app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to start: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Starting game loop ({:?})", catnap::constants::LOOP_TIME);
    while app.run() {}

    info!("Exited game loop");
    ExitCode::SUCCESS
}
