use crate::bodies::CelestialBody;
use crate::forces::ForceModel;
use crate::integration::Integrator;
use crate::math::Vector3;

/// Time derivative of the whole collection at one Runge-Kutta stage.
///
/// `velocities[i]` is dx/dt and `accelerations[i]` is dv/dt of body `i`.
#[derive(Debug, Clone, Default)]
pub struct StateDerivative {
    pub velocities: Vec<Vector3>,
    pub accelerations: Vec<Vector3>,
}

impl StateDerivative {
    fn resize(&mut self, n: usize) {
        self.velocities.resize(n, Vector3::ZERO);
        self.accelerations.resize(n, Vector3::ZERO);
    }
}

/// Classical fourth-order Runge-Kutta integrator.
///
/// Every stage evaluates the force model on its own intermediate snapshot. The
/// snapshot and derivative storage is allocated once and reused across steps.
pub struct RungeKuttaIntegrator<F: ForceModel> {
    force_model: F,
    masses: Vec<f64>,
    base_positions: Vec<Vector3>,
    base_velocities: Vec<Vector3>,
    stage_positions: Vec<Vector3>,
    stage_velocities: Vec<Vector3>,
    stages: [StateDerivative; 4],
}

impl<F: ForceModel> RungeKuttaIntegrator<F> {
    /// Creates a new Runge-Kutta integrator driven by `force_model`
    pub fn new(force_model: F) -> Self {
        Self {
            force_model,
            masses: Vec::new(),
            base_positions: Vec::new(),
            base_velocities: Vec::new(),
            stage_positions: Vec::new(),
            stage_velocities: Vec::new(),
            stages: Default::default(),
        }
    }

    /// Returns the force model
    pub fn force_model(&self) -> &F {
        &self.force_model
    }

    /// Accelerations from the k4 stage of the most recent step.
    ///
    /// These belong to the last intermediate snapshot, not to the state the bodies
    /// were left in. Useful for debugging only.
    pub fn last_stage_accelerations(&self) -> &[Vector3] {
        &self.stages[3].accelerations
    }

    fn prepare(&mut self, bodies: &[CelestialBody]) {
        let n = bodies.len();
        if self.masses.len() != n {
            log::debug!("resizing RK4 buffers from {} to {} bodies", self.masses.len(), n);
            self.base_positions.resize(n, Vector3::ZERO);
            self.base_velocities.resize(n, Vector3::ZERO);
            self.stage_positions.resize(n, Vector3::ZERO);
            self.stage_velocities.resize(n, Vector3::ZERO);
            for stage in self.stages.iter_mut() {
                stage.resize(n);
            }
        }

        self.masses.clear();
        self.masses.extend(bodies.iter().map(|b| b.mass));
        for (i, body) in bodies.iter().enumerate() {
            self.base_positions[i] = body.position;
            self.base_velocities[i] = body.velocity;
        }
    }

    /// Evaluates the derivative of the current stage snapshot into `stages[k]`
    fn evaluate(&mut self, k: usize) {
        let out = &mut self.stages[k];
        out.velocities.copy_from_slice(&self.stage_velocities);
        self.force_model
            .accumulate(&self.masses, &self.stage_positions, &mut out.accelerations);
    }

    /// Sets the stage snapshot to `base + h * stages[k]`
    fn advance_stage(&mut self, k: usize, h: f64) {
        let derivative = &self.stages[k];
        for i in 0..self.masses.len() {
            self.stage_positions[i] = self.base_positions[i] + derivative.velocities[i] * h;
            self.stage_velocities[i] = self.base_velocities[i] + derivative.accelerations[i] * h;
        }
    }
}

impl<F: ForceModel> Integrator for RungeKuttaIntegrator<F> {
    fn step(&mut self, bodies: &mut [CelestialBody], dt: f64) {
        if bodies.is_empty() {
            return;
        }

        self.prepare(bodies);
        let half_dt = 0.5 * dt;

        // k1 at the base state
        self.stage_positions.copy_from_slice(&self.base_positions);
        self.stage_velocities.copy_from_slice(&self.base_velocities);
        self.evaluate(0);

        // k2 at base + dt/2 * k1
        self.advance_stage(0, half_dt);
        self.evaluate(1);

        // k3 at base + dt/2 * k2
        self.advance_stage(1, half_dt);
        self.evaluate(2);

        // k4 at base + dt * k3
        self.advance_stage(2, dt);
        self.evaluate(3);

        let sixth_dt = dt / 6.0;
        let [k1, k2, k3, k4] = &self.stages;
        for (i, body) in bodies.iter_mut().enumerate() {
            let dx = k1.velocities[i]
                + k2.velocities[i] * 2.0
                + k3.velocities[i] * 2.0
                + k4.velocities[i];
            let dv = k1.accelerations[i]
                + k2.accelerations[i] * 2.0
                + k3.accelerations[i] * 2.0
                + k4.accelerations[i];

            body.position = self.base_positions[i] + dx * sixth_dt;
            body.velocity = self.base_velocities[i] + dv * sixth_dt;
        }
    }

    fn name(&self) -> &str {
        "RungeKutta4"
    }
}
