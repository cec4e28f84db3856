use crate::error::DomainError;
use crate::orbit::CircularOrbit;
use crate::trail::DEFAULT_TRAIL_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything that parameterizes a run: the two orbits, the observer
/// view ring, trail depth, and the capture frame rate. Loads from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub inner: CircularOrbit,
    pub outer: CircularOrbit,
    pub view_radius: f32,
    pub trail_capacity: usize,
    pub frame_rate: u32,
}

impl Scenario {
    pub fn validate(&self) -> Result<(), DomainError> {
        self.inner.validate()?;
        self.outer.validate()?;
        if self.frame_rate == 0 {
            return Err(DomainError::ZeroFrameRate);
        }
        Ok(())
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            inner: CircularOrbit::mercury(),
            outer: CircularOrbit::earth(),
            view_radius: 150.0,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            frame_rate: 30,
        }
    }
}

pub fn load_scenario(path: &Path) -> Result<Scenario, Box<dyn std::error::Error>> {
    let s = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&s)?;
    scenario.validate()?;
    Ok(scenario)
}
