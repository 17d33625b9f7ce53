use crate::domain::model::{ComposeDocument, ServiceCatalog};
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
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ComposeDocument>;
    async fn transform(&self, document: ComposeDocument) -> Result<ServiceCatalog>;
    async fn load(&self, catalog: ServiceCatalog) -> Result<String>;
}
