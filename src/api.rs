//! HTTP API for the IVR
//!
//! Telephony webhooks plus health and session diagnostics.

mod handlers;
mod types;

pub use handlers::create_router;

use crate::runtime::CallRuntime;
use crate::twiml::TwimlRenderer;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<CallRuntime>,
    pub renderer: Arc<TwimlRenderer>,
}

impl AppState {
    pub fn new(runtime: CallRuntime, renderer: TwimlRenderer) -> Self {
        Self {
            runtime: Arc::new(runtime),
            renderer: Arc::new(renderer),
        }
    }
}
