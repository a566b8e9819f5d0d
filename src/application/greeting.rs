use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::APPLICATION_NAME;

pub const GREETING: &str = "Hello from CI/CD!";

#[derive(Serialize, Deserialize, Debug)]
pub struct GreetingResponse {
    pub message: String,
    pub application: String,
    pub version: String,
    pub build_date: String,
    pub environment: String,
    pub timestamp: DateTime<Utc>,
}

pub async fn index(config: Data<ServiceConfig>) -> impl Responder {
    debug!("Serving greeting for environment {}", config.environment);

    HttpResponse::Ok().json(GreetingResponse {
        message: GREETING.to_string(),
        application: APPLICATION_NAME.to_string(),
        version: config.version.clone(),
        build_date: config.build_date.clone(),
        environment: config.environment.clone(),
        timestamp: Utc::now(),
    })
}
