mod logging;
mod monitor_settings;

pub use logging::init_logging;
pub use monitor_settings::{MonitorSettings, ThresholdPolicy};
