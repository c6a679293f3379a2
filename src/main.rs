use std::process;

use dotenv::dotenv;
use log::{error, info};
use tile_metadata::Config;

fn main() {
    dotenv().ok();
    pretty_env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };
    info!("Loading {} from {}", config.metadata_file, config.base_url);

    let loader = match config.loader() {
        Ok(loader) => loader,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };

    match loader.read_metadata() {
        Ok(Some(metadata)) => match serde_json::to_string_pretty(&metadata) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("{}", e);
                process::exit(2);
            }
        },
        Ok(None) => process::exit(1),
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    }
}
