pub mod analyzer;
pub mod encoder;
pub mod engine;
pub mod session;
pub mod validator;

pub use crate::domain::model::{AnalysisResult, FileCandidate, MediaType, SelectedFile};
pub use crate::domain::ports::{Analyzer, ConfigProvider, Storage};
pub use crate::utils::error::Result;
