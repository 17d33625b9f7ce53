pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, ExtractorConfig};

pub use crate::core::{etl::EtlEngine, pipeline::ComposePipeline};
pub use crate::domain::model::{ComposeDocument, ServiceCatalog, ServiceRecord};
pub use crate::utils::error::{EtlError, Result};
