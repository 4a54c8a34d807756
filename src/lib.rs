pub mod math;
pub mod core;
pub mod bodies;
pub mod forces;
pub mod integration;
pub mod diagnostics;
pub mod io;

/// Re-export common types for easier usage
pub use crate::core::{PhysicalConstants, Simulation, SimulationConfig};
pub use crate::bodies::{normalize_to_barycenter, CelestialBody};
pub use crate::diagnostics::{
    compute_conservations, compute_eclipse, ConservationDrift, Conservations, EclipseResult,
    EclipseType,
};
pub use crate::forces::{ForceModel, NewtonianGravity};
pub use crate::integration::{Integrator, RungeKuttaIntegrator};
pub use crate::math::Vector3;

/// Error types for the simulation engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Simulation stability error: {0}")]
        SimulationError(String),

        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Malformed system file: {0}")]
        Json(#[from] serde_json::Error),

        #[error("CSV output error: {0}")]
        Csv(#[from] csv::Error),
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
