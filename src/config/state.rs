// Application state shared by all handlers

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }

    /// Builds the state from the process environment (and `.env`)
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::instance()?.clone();
        Ok(Self::new(environment))
    }
}
