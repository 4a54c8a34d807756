use crate::bodies::CelestialBody;
use crate::forces::ForceModel;
use crate::integration::Integrator;
use crate::math::Vector3;

/// Symplectic Euler integrator (semi-implicit Euler).
///
/// First order: velocities are kicked with the current accelerations, then
/// positions drift with the *new* velocities. One force evaluation per step.
/// Kept for comparison against [`RungeKuttaIntegrator`](super::RungeKuttaIntegrator).
pub struct SymplecticEulerIntegrator<F: ForceModel> {
    force_model: F,
    masses: Vec<f64>,
    positions: Vec<Vector3>,
    accelerations: Vec<Vector3>,
}

impl<F: ForceModel> SymplecticEulerIntegrator<F> {
    /// Creates a new Symplectic Euler integrator
    pub fn new(force_model: F) -> Self {
        Self {
            force_model,
            masses: Vec::new(),
            positions: Vec::new(),
            accelerations: Vec::new(),
        }
    }
}

impl<F: ForceModel> Integrator for SymplecticEulerIntegrator<F> {
    fn step(&mut self, bodies: &mut [CelestialBody], dt: f64) {
        if bodies.is_empty() {
            return;
        }

        self.masses.clear();
        self.masses.extend(bodies.iter().map(|b| b.mass));
        self.positions.clear();
        self.positions.extend(bodies.iter().map(|b| b.position));
        self.accelerations.resize(bodies.len(), Vector3::ZERO);

        self.force_model
            .accumulate(&self.masses, &self.positions, &mut self.accelerations);

        for (body, a) in bodies.iter_mut().zip(self.accelerations.iter()) {
            body.velocity += *a * dt;
            body.position += body.velocity * dt;
        }
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}
