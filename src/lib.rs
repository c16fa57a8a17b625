pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::analyzer::WebhookAnalyzer;
pub use core::engine::SubmissionEngine;
pub use core::session::{FormSession, FormState};
pub use utils::error::{MatchError, Result};
