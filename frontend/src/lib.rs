pub mod analytics;
pub mod app;
pub mod config;
pub mod mount;
pub mod styles;

pub use app::App;

use shared::{AnalyticsConfig, Bootstrap, MountError, StartupError};
use yew::AppHandle;

/// Wires the startup sequence to the real SDK and DOM.
pub struct BrowserBootstrap;

impl Bootstrap for BrowserBootstrap {
    type Handle = AppHandle<App>;
    type AnalyticsError = analytics::AnalyticsError;

    fn init_analytics(&mut self, config: &AnalyticsConfig) -> Result<(), Self::AnalyticsError> {
        analytics::init(config)
    }

    fn mount(&mut self, target_id: &str) -> Result<Self::Handle, MountError> {
        mount::mount(target_id)
    }
}

pub fn start() -> Result<AppHandle<App>, StartupError> {
    shared::start(&mut BrowserBootstrap, &config::public_env())
}
