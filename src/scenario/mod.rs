pub mod config;
pub mod report;

pub use config::ScenarioConfig;
pub use report::ScenarioReport;
