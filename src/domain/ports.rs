use crate::domain::model::{CountingMode, Instruction, SimulationResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn counting_mode(&self) -> CountingMode;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Instruction>>;
    async fn transform(&self, instructions: Vec<Instruction>) -> Result<SimulationResult>;
    async fn load(&self, result: SimulationResult) -> Result<String>;
}
