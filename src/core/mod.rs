pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod models;
pub mod tasks;

pub use client::AnalysisClient;
pub use config::AppConfig;
pub use errors::CloudError;
pub use models::{
    AnalyzeOutcome,
    WordItem,
};
