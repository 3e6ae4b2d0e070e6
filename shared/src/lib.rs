pub mod analytics;
pub mod constants;
pub mod env;
pub mod startup;

pub use analytics::{AnalyticsConfig, CaptureOptions};
pub use env::PublicEnv;
pub use startup::{start, Bootstrap, MountError, StartupError};
