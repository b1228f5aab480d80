use crate::core::{SweepPipeline, SweepReport};
use crate::utils::error::Result;

pub struct SweepEngine<P: SweepPipeline> {
    pipeline: P,
}

impl<P: SweepPipeline> SweepEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<SweepReport> {
        tracing::info!("Fetching venue listing...");
        let controls = self.pipeline.scan().await?;
        tracing::info!("Found {} delete controls", controls.len());

        tracing::info!("Sweeping venues...");
        let report = self.pipeline.sweep(controls).await?;
        tracing::info!(
            "Sweep finished: {} delivered, {} skipped, {} failed",
            report.delivered(),
            report.skipped(),
            report.failed()
        );

        Ok(report)
    }
}
