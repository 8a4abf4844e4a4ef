//! Context providers mounted around the selected root view.

pub mod alerts;
pub mod api;
pub mod app_config;

pub use alerts::{AlertsHandle, AlertsProvider, use_alerts};
pub use api::{ApiProvider, use_api_client};
pub use app_config::{AppConfigProvider, use_app_config};
