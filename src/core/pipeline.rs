use crate::core::projection::project_services;
use crate::core::{ComposeDocument, ConfigProvider, Pipeline, ServiceCatalog, Storage};
use crate::utils::error::{EtlError, Result};

pub struct ComposePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ComposePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Parses compose file contents and applies `<<` merge keys. Blank input is
/// an empty document.
pub fn parse_compose(source: &str, data: &[u8]) -> Result<ComposeDocument> {
    let parse_error = |e: serde_yaml::Error| EtlError::YamlParseError {
        path: source.to_string(),
        source: e,
    };

    let root = if data.iter().all(u8::is_ascii_whitespace) {
        serde_yaml::Value::Null
    } else {
        let mut root: serde_yaml::Value = serde_yaml::from_slice(data).map_err(parse_error)?;
        root.apply_merge().map_err(parse_error)?;
        root
    };

    Ok(ComposeDocument::new(source, root))
}

/// Renders the catalog as 2-space indented JSON without a trailing newline.
pub fn render_catalog(catalog: &ServiceCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ComposePipeline<S, C> {
    async fn extract(&self) -> Result<ComposeDocument> {
        let input_path = self.config.input_path();

        tracing::debug!("Reading compose file: {}", input_path);
        let data = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), input_path);

        parse_compose(input_path, &data)
    }

    async fn transform(&self, document: ComposeDocument) -> Result<ServiceCatalog> {
        project_services(&document)
    }

    async fn load(&self, catalog: ServiceCatalog) -> Result<String> {
        let output_path = self.config.output_path();
        let json = render_catalog(&catalog)?;

        tracing::debug!("Writing {} bytes to {}", json.len(), output_path);
        self.storage.write_file(output_path, json.as_bytes()).await?;

        Ok(output_path.to_string())
    }
}
