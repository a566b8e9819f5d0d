use log::{debug, error};
use robotics_cicd_demo::config::ServiceConfig;
use robotics_cicd_demo::{logging, server, APPLICATION_NAME};
use std::process::ExitCode;

#[actix_web::main]
async fn main() -> ExitCode {
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e.report());
            return ExitCode::FAILURE;
        }
    };

    logging::init(config.debug);
    debug!("Loaded configuration: {config:?}");

    println!("Starting {APPLICATION_NAME} v{}", config.version);
    println!("Server running on port {}", config.port);

    match server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let report = e.report();
            eprintln!("{report}");
            error!("{report}");
            ExitCode::FAILURE
        }
    }
}
