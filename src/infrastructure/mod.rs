pub mod config;
pub mod container;
pub mod database;
pub mod memory;
pub mod seed;
pub mod system_clock;

pub use config::AppConfig;
pub use container::AppContainer;
