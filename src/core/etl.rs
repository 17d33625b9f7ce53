use crate::core::{Pipeline, ServiceCatalog};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting compose extraction...");

        let catalog = self.preview().await?;

        // Load
        tracing::info!("Writing service catalog...");
        let output_path = self.pipeline.load(catalog).await?;
        self.monitor.log_stats("Load");
        tracing::info!("Output saved to: {}", output_path);

        self.monitor.log_final_stats();
        Ok(output_path)
    }

    /// Runs extract and transform only. Nothing is written.
    pub async fn preview(&self) -> Result<ServiceCatalog> {
        // Extract
        tracing::info!("Reading compose file...");
        let document = self.pipeline.extract().await?;
        self.monitor.log_stats("Extract");

        // Transform
        tracing::info!("Projecting services...");
        let catalog = self.pipeline.transform(document).await?;
        tracing::info!("Projected {} services", catalog.len());
        self.monitor.log_stats("Transform");

        Ok(catalog)
    }
}
