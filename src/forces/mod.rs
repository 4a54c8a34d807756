mod force_model;
mod gravity;

pub use self::force_model::ForceModel;
pub use self::gravity::NewtonianGravity;
