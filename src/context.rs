//! Application Context
//!
//! Shared dependencies provided via Leptos Context API.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::guard::SubmissionGuard;
use crate::store::StorePort;
use crate::templates::Templates;

/// Everything a submission needs, injected once at mount
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    /// Compiled once, shared by every submission
    pub templates: Arc<Templates>,
    pub guard: SubmissionGuard,
    pub port: StorePort,
}

impl AppContext {
    pub fn new(config: AppConfig, port: StorePort) -> Self {
        let templates = Templates::compile(&config);
        Self {
            config: Arc::new(config),
            templates: Arc::new(templates),
            guard: SubmissionGuard::new(),
            port,
        }
    }
}
