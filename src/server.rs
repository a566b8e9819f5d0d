use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use log::info;

use crate::application::greeting::index;
use crate::application::status::{health, version};
use crate::config::ServiceConfig;
use crate::errors::StartupError;

/// Registers the public routes. Shared by the binary and the test harness.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .route("/version", web::get().to(version));
}

/// Binds the listener on `0.0.0.0:<port>` and returns the server, ready to
/// be awaited or spawned.
pub fn build(config: ServiceConfig) -> Result<Server, StartupError> {
    let (host, port) = config.listen_address();
    let workers = config.workers;
    let config = Data::new(config);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(config.clone())
            .configure(routes)
    });
    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    let server = server
        .bind((host, port))
        .map_err(|source| StartupError::Bind {
            address: format!("{host}:{port}"),
            source,
        })?;

    info!("Listening on {host}:{port}");
    Ok(server.run())
}

pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    build(config)?.await.map_err(StartupError::Server)
}
