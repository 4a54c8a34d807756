pub mod config;
pub mod simulation;

pub use self::config::{PhysicalConstants, SimulationConfig};
pub use self::simulation::Simulation;
