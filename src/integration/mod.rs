mod integrator;
mod runge_kutta;
mod symplectic_euler;

pub use self::integrator::Integrator;
pub use self::runge_kutta::{RungeKuttaIntegrator, StateDerivative};
pub use self::symplectic_euler::SymplecticEulerIntegrator;
