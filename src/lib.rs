pub mod application {
    pub mod greeting;
    pub mod status;
}
pub mod config;
pub mod errors;
pub mod logging;
pub mod server;

pub const APPLICATION_NAME: &str = "robotics-cicd-demo";
