pub mod actions;
pub mod boot;
pub mod config;
pub mod contact;
pub mod content;
pub mod interpreter;
pub mod notifications;
pub mod reducer;
pub mod schedule;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod terminal;

pub use actions::*;
pub use reducer::*;
pub use state::*;
pub use store::*;

pub use config::Config;
pub use config::ConfigError;
pub use config::DeliveryMode;
