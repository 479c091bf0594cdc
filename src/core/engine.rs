use crate::core::Pipeline;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct SimEngine<P: Pipeline> {
    pipeline: P,
    #[cfg(feature = "cli")]
    monitor: Option<SystemMonitor>,
}

impl<P: Pipeline> SimEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            #[cfg(feature = "cli")]
            monitor: None,
        }
    }

    #[cfg(feature = "cli")]
    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: enabled.then(SystemMonitor::new),
        }
    }

    #[cfg(feature = "cli")]
    fn sample_monitor(&self) {
        if let Some(monitor) = &self.monitor {
            monitor.sample();
        }
    }

    #[cfg(not(feature = "cli"))]
    fn sample_monitor(&self) {}

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting dial simulation...");

        // Extract
        tracing::info!("Extracting instructions...");
        let instructions = self.pipeline.extract().await?;
        tracing::info!("Extracted {} instructions", instructions.len());
        self.sample_monitor();

        // Transform
        tracing::info!("Running simulation...");
        let result = self.pipeline.transform(instructions).await?;
        tracing::info!(
            "Simulated {} unit steps, final position {}",
            result.total_steps,
            result.final_position
        );
        self.sample_monitor();

        // Load
        let answer = self.pipeline.load(result).await?;
        tracing::info!("Output: {}", answer);

        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_summary();
        }

        Ok(answer)
    }
}
