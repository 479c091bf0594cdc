use crate::domain::model::{Direction, Instruction, SimulationResult};

/// Number of positions on the dial face.
pub const DIAL_POSITIONS: i64 = 100;
/// Position the dial starts at before any instruction is applied.
pub const START_POSITION: i64 = 50;

/// The circular dial. Position is always in `[0, DIAL_POSITIONS)`.
#[derive(Debug, Clone)]
pub struct Dial {
    position: i64,
}

impl Dial {
    pub fn new() -> Self {
        Self::starting_at(START_POSITION)
    }

    pub fn starting_at(position: i64) -> Self {
        Self {
            position: position.rem_euclid(DIAL_POSITIONS),
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Turn the dial one unit and return the new position.
    pub fn step(&mut self, direction: Direction) -> i64 {
        self.position = (self.position + direction.offset()).rem_euclid(DIAL_POSITIONS);
        self.position
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply every instruction one unit-step at a time, counting both answer
/// metrics in a single pass.
pub fn simulate(instructions: &[Instruction]) -> SimulationResult {
    let mut dial = Dial::new();
    let mut zero_crossings = 0u64;
    let mut zero_landings = 0u64;
    let mut total_steps = 0u64;

    for instruction in instructions {
        for _ in 0..instruction.magnitude {
            if dial.step(instruction.direction) == 0 {
                zero_crossings += 1;
            }
        }
        total_steps += instruction.magnitude;
        if dial.position() == 0 {
            zero_landings += 1;
        }
        tracing::trace!(
            "{:?} {} -> position {}, crossings {}",
            instruction.direction,
            instruction.magnitude,
            dial.position(),
            zero_crossings
        );
    }

    SimulationResult {
        zero_crossings,
        zero_landings,
        final_position: dial.position(),
        total_steps,
        instruction_count: instructions.len(),
    }
}
