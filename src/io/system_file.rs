//! JSON system files.
//!
//! ```json
//! {
//!   "simulation": { "time_step": 3600.0, "steps": 8766 },
//!   "bodies": [
//!     { "name": "Sun", "mass": 1.989e30, "position": [0, 0, 0], "velocity": [0, 0, 0] }
//!   ]
//! }
//! ```
//!
//! The `simulation` block is optional and falls back to [`SimulationConfig::default`].

use crate::bodies::CelestialBody;
use crate::core::SimulationConfig;
use crate::error::PhysicsError;
use crate::Result;

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Top-level contents of a system file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemFile {
    #[serde(default)]
    pub simulation: SimulationConfig,

    pub bodies: Vec<CelestialBody>,
}

impl SystemFile {
    /// Parses a system file from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parses a system file from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a system file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let system = Self::from_reader(BufReader::new(file))?;
        log::info!("loaded {} bodies from {}", system.bodies.len(), path.display());
        Ok(system)
    }

    /// Writes the system file as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Checks that the system can be simulated.
    ///
    /// Non-positive masses are reported with a warning and otherwise accepted.
    pub fn validate(&self) -> Result<()> {
        if self.bodies.is_empty() {
            return Err(PhysicsError::InvalidParameter(
                "system contains no bodies".to_string(),
            ));
        }

        for body in &self.bodies {
            if !body.mass.is_finite() || !body.position.is_finite() || !body.velocity.is_finite() {
                return Err(PhysicsError::InvalidParameter(format!(
                    "body '{}' has a non-finite mass, position or velocity",
                    body.name
                )));
            }

            if body.mass <= 0.0 {
                log::warn!("body '{}' has non-positive mass {}", body.name, body.mass);
            }
        }

        self.simulation.validate()
    }
}

/// Loads and validates a system file, returning its bodies and run configuration
pub fn load_system(path: impl AsRef<Path>) -> Result<(Vec<CelestialBody>, SimulationConfig)> {
    let system = SystemFile::load(path)?;
    system.validate()?;
    Ok((system.bodies, system.simulation))
}
