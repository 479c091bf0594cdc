use crate::utils::error::{DialError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed unit-step offset on the dial.
    pub fn offset(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// One input line: a direction marker and a step count.
///
/// The first character is always consumed as the marker; `L` turns left,
/// anything else turns right. The magnitude is the run of leading ASCII
/// digits in the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub direction: Direction,
    pub magnitude: u64,
}

impl Instruction {
    pub fn parse_line(line_number: usize, text: &str) -> Result<Self> {
        let mut chars = text.chars();
        let marker = chars.next().ok_or_else(|| DialError::InstructionError {
            line: line_number,
            content: text.to_string(),
            reason: "empty instruction".to_string(),
        })?;

        let direction = if marker == 'L' {
            Direction::Left
        } else {
            Direction::Right
        };

        let rest = chars.as_str();
        let digit_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let digits = &rest[..digit_end];

        if digits.is_empty() {
            return Err(DialError::InstructionError {
                line: line_number,
                content: text.to_string(),
                reason: "missing magnitude digits".to_string(),
            });
        }

        let magnitude = digits
            .parse::<u64>()
            .map_err(|e| DialError::InstructionError {
                line: line_number,
                content: text.to_string(),
                reason: format!("invalid magnitude: {}", e),
            })?;

        Ok(Self {
            direction,
            magnitude,
        })
    }
}

impl FromStr for Instruction {
    type Err = DialError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse_line(0, s)
    }
}

/// Which metric of a run becomes the printed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CountingMode {
    /// Count every unit-step that lands on position 0.
    #[default]
    Crossings,
    /// Count instructions after which the dial rests on position 0.
    Landings,
}

/// Aggregate of one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub zero_crossings: u64,
    pub zero_landings: u64,
    pub final_position: i64,
    pub total_steps: u64,
    pub instruction_count: usize,
}

impl SimulationResult {
    pub fn answer(&self, mode: CountingMode) -> u64 {
        match mode {
            CountingMode::Crossings => self.zero_crossings,
            CountingMode::Landings => self.zero_landings,
        }
    }
}
