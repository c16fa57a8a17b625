use crate::domain::model::AnalysisResult;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn webhook_url(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// The remote analysis service. One call per submission, no retry.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, resume_base64: &str, job_description: &str)
        -> Result<AnalysisResult>;
}
