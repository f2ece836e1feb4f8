use griddle_business::{BusinessConfig, build_ctx};
use griddle_states::StateCtx;
use log::error;

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::init().unwrap_or_else(|err| {
            error!("Invalid configuration, using defaults: {err:#}");
            BusinessConfig::default()
        });

        Self {
            ctx: build_ctx(config),
        }
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            ctx: build_ctx(config),
        }
    }

    /// State talking to a mock backend at `base_url`.
    pub fn test(base_url: impl Into<String>) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}
