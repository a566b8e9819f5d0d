use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::APPLICATION_NAME;

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct VersionResponse {
    pub version: String,
    pub build_date: String,
    pub application: String,
}

/// Liveness probe for container orchestration. There are no dependencies to
/// check, so the answer is always healthy.
pub async fn health(config: Data<ServiceConfig>) -> impl Responder {
    debug!("Health check");

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: config.version.clone(),
        timestamp: Utc::now(),
    })
}

pub async fn version(config: Data<ServiceConfig>) -> impl Responder {
    HttpResponse::Ok().json(VersionResponse {
        version: config.version.clone(),
        build_date: config.build_date.clone(),
        application: APPLICATION_NAME.to_string(),
    })
}
