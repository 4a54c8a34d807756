mod conservation;
mod eclipse;

pub use self::conservation::{compute_conservations, ConservationDrift, Conservations};
pub use self::eclipse::{compute_eclipse, EclipseResult, EclipseType};
