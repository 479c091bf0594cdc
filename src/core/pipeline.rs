use crate::core::simulator;
use crate::core::{ConfigProvider, Instruction, Pipeline, SimulationResult, Storage};
use crate::utils::error::{DialError, Result};

pub struct SimplePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SimplePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SimplePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Instruction>> {
        tracing::debug!("Reading instructions from: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path()).await?;

        let text = String::from_utf8(raw).map_err(|e| DialError::ProcessingError {
            message: format!("input is not valid UTF-8: {}", e),
        })?;

        // 去掉前後空白再逐行解析，空行直接略過
        let mut instructions = Vec::new();
        for (index, line) in text.trim().lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            instructions.push(Instruction::parse_line(index + 1, line)?);
        }

        if instructions.is_empty() {
            tracing::warn!("No instructions found in input; the answer will be 0");
        }

        Ok(instructions)
    }

    async fn transform(&self, instructions: Vec<Instruction>) -> Result<SimulationResult> {
        tracing::debug!("Simulating {} instructions", instructions.len());
        let result = simulator::simulate(&instructions);
        tracing::debug!(
            "Simulation done: {} unit steps, {} crossings, {} landings, final position {}",
            result.total_steps,
            result.zero_crossings,
            result.zero_landings,
            result.final_position
        );
        Ok(result)
    }

    async fn load(&self, result: SimulationResult) -> Result<String> {
        let mode = self.config.counting_mode();
        let answer = result.answer(mode);
        tracing::debug!("Answer metric {:?}: {}", mode, answer);
        Ok(format!("Answer {}", answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CountingMode, Direction};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                DialError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }
    }

    struct MockConfig {
        input_path: String,
        counting_mode: CountingMode,
    }

    impl MockConfig {
        fn new(input_path: &str) -> Self {
            Self {
                input_path: input_path.to_string(),
                counting_mode: CountingMode::Crossings,
            }
        }

        fn with_mode(input_path: &str, counting_mode: CountingMode) -> Self {
            Self {
                input_path: input_path.to_string(),
                counting_mode,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            &self.input_path
        }

        fn counting_mode(&self) -> CountingMode {
            self.counting_mode
        }
    }

    async fn pipeline_with(
        content: &[u8],
    ) -> SimplePipeline<MockStorage, MockConfig> {
        let storage = MockStorage::new();
        storage.put_file("input.txt", content).await;
        SimplePipeline::new(storage, MockConfig::new("input.txt"))
    }

    #[tokio::test]
    async fn test_extract_parses_instruction_lines() {
        let pipeline = pipeline_with(b"L48\nR100\nL7\n").await;

        let instructions = pipeline.extract().await.unwrap();

        assert_eq!(instructions.len(), 3);
        assert_eq!(instructions[0].direction, Direction::Left);
        assert_eq!(instructions[0].magnitude, 48);
        assert_eq!(instructions[1].direction, Direction::Right);
        assert_eq!(instructions[1].magnitude, 100);
    }

    #[tokio::test]
    async fn test_extract_discards_blank_and_trailing_lines() {
        let pipeline = pipeline_with(b"R10\n\nL5\n\n\n").await;

        let instructions = pipeline.extract().await.unwrap();

        assert_eq!(instructions.len(), 2);
        assert_eq!(instructions[1].magnitude, 5);
    }

    #[tokio::test]
    async fn test_extract_empty_file_yields_no_instructions() {
        let pipeline = pipeline_with(b"\n\n").await;

        let instructions = pipeline.extract().await.unwrap();

        assert!(instructions.is_empty());
    }

    #[tokio::test]
    async fn test_extract_missing_file_is_io_error() {
        let storage = MockStorage::new();
        let pipeline = SimplePipeline::new(storage, MockConfig::new("input.txt"));

        let err = pipeline.extract().await.unwrap_err();

        assert!(matches!(err, DialError::IoError(_)));
    }

    #[tokio::test]
    async fn test_extract_invalid_utf8_is_processing_error() {
        let pipeline = pipeline_with(&[0x4c, 0xff, 0xfe, 0x31]).await;

        let err = pipeline.extract().await.unwrap_err();

        assert!(matches!(err, DialError::ProcessingError { .. }));
    }

    #[tokio::test]
    async fn test_extract_malformed_line_reports_line_number() {
        let pipeline = pipeline_with(b"R10\nLabc\nR5\n").await;

        let err = pipeline.extract().await.unwrap_err();

        match err {
            DialError::InstructionError { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "Labc");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transform_counts_zero_crossings() {
        let pipeline = pipeline_with(b"").await;
        let instructions = vec![
            "R50".parse().unwrap(),
            "R50".parse().unwrap(),
        ];

        let result = pipeline.transform(instructions).await.unwrap();

        assert_eq!(result.zero_crossings, 1);
        assert_eq!(result.final_position, 50);
        assert_eq!(result.total_steps, 100);
    }

    #[tokio::test]
    async fn test_transform_empty_instructions() {
        let pipeline = pipeline_with(b"").await;

        let result = pipeline.transform(Vec::new()).await.unwrap();

        assert_eq!(result.zero_crossings, 0);
        assert_eq!(result.final_position, 50);
    }

    #[tokio::test]
    async fn test_load_formats_answer_line() {
        let pipeline = pipeline_with(b"").await;
        let result = SimulationResult {
            zero_crossings: 42,
            zero_landings: 3,
            final_position: 0,
            total_steps: 4221,
            instruction_count: 10,
        };

        let line = pipeline.load(result).await.unwrap();

        assert_eq!(line, "Answer 42");
    }

    #[tokio::test]
    async fn test_load_respects_landings_mode() {
        let storage = MockStorage::new();
        let config = MockConfig::with_mode("input.txt", CountingMode::Landings);
        let pipeline = SimplePipeline::new(storage, config);
        let result = SimulationResult {
            zero_crossings: 42,
            zero_landings: 3,
            final_position: 0,
            total_steps: 4221,
            instruction_count: 10,
        };

        let line = pipeline.load(result).await.unwrap();

        assert_eq!(line, "Answer 3");
    }

    #[tokio::test]
    async fn test_full_pipeline_spec_trace() {
        let pipeline = pipeline_with(b"L50\n").await;

        let instructions = pipeline.extract().await.unwrap();
        let result = pipeline.transform(instructions).await.unwrap();
        let line = pipeline.load(result).await.unwrap();

        assert_eq!(line, "Answer 1");
    }
}
