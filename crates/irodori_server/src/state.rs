use std::sync::Arc;

use crate::gateway::PaletteGateway;

/// Shared handler state
#[derive(Clone, Debug)]
pub struct AppState {
    pub gateway: Arc<PaletteGateway>,
}

impl AppState {
    pub fn new(gateway: PaletteGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}
