// Core application wiring: logging and server assembly

pub mod logging;
pub mod server;
