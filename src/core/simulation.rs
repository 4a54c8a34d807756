use crate::bodies::{find_body, normalize_to_barycenter, CelestialBody};
use crate::core::SimulationConfig;
use crate::diagnostics::{
    compute_conservations, compute_eclipse, ConservationDrift, Conservations, EclipseResult,
};
use crate::error::PhysicsError;
use crate::forces::NewtonianGravity;
use crate::integration::{Integrator, RungeKuttaIntegrator};
use crate::Result;

/// Name the eclipse lookup uses for the light source
pub const SUN_NAME: &str = "Sun";

/// Name the eclipse lookup uses for the shadowed body
pub const EARTH_NAME: &str = "Earth";

/// Name the eclipse lookup uses for the occluder
pub const MOON_NAME: &str = "Moon";

/// Owns a body collection and drives it forward with a fixed time step
pub struct Simulation {
    /// All bodies, in input order
    bodies: Vec<CelestialBody>,

    /// The stepper
    integrator: Box<dyn Integrator>,

    /// Configuration for the run
    config: SimulationConfig,

    /// The total elapsed simulation time in seconds
    time: f64,

    /// Number of completed steps
    step_count: u64,

    /// Conservations captured when the simulation was created
    baseline: Conservations,
}

impl Simulation {
    /// Creates a simulation advanced by RK4 under Newtonian gravity
    pub fn new(bodies: Vec<CelestialBody>, config: SimulationConfig) -> Result<Self> {
        let gravity = NewtonianGravity::from_constants(&config.constants)
            .with_min_distance_squared(config.min_distance_squared);
        Self::with_integrator(bodies, config, Box::new(RungeKuttaIntegrator::new(gravity)))
    }

    /// Creates a simulation with a caller-supplied integrator
    pub fn with_integrator(
        mut bodies: Vec<CelestialBody>,
        config: SimulationConfig,
        integrator: Box<dyn Integrator>,
    ) -> Result<Self> {
        config.validate()?;

        for body in bodies.iter().filter(|b| b.mass <= 0.0) {
            log::warn!("body '{}' has non-positive mass {}", body.name, body.mass);
        }

        if config.normalize_barycenter {
            normalize_to_barycenter(&mut bodies);
        }

        let baseline = compute_conservations(&bodies, &config.constants);
        log::debug!(
            "simulation ready: {} bodies, integrator {}, dt = {} s, E0 = {:e} J",
            bodies.len(),
            integrator.name(),
            config.time_step,
            baseline.total_energy
        );

        Ok(Self {
            bodies,
            integrator,
            config,
            time: 0.0,
            step_count: 0,
            baseline,
        })
    }

    /// Returns the bodies
    pub fn get_bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Returns the bodies for in-place edits between steps
    pub fn get_bodies_mut(&mut self) -> &mut [CelestialBody] {
        &mut self.bodies
    }

    /// Consumes the simulation, returning its bodies
    pub fn into_bodies(self) -> Vec<CelestialBody> {
        self.bodies
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f64 {
        self.time
    }

    /// Returns the number of completed steps
    pub fn get_step_count(&self) -> u64 {
        self.step_count
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the conservations captured at construction
    pub fn get_baseline(&self) -> &Conservations {
        &self.baseline
    }

    /// Returns the name of the integrator in use
    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    /// Finds a body by name, ignoring ASCII case
    pub fn find_body(&self, name: &str) -> Result<&CelestialBody> {
        find_body(&self.bodies, name)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body named '{}' not found", name)))
    }

    /// Advances the simulation by one time step
    pub fn step(&mut self) {
        self.integrator.step(&mut self.bodies, self.config.time_step);
        self.time += self.config.time_step;
        self.step_count += 1;
    }

    /// Runs the configured number of steps.
    ///
    /// `observer` sees the initial state and then the state after every
    /// `diagnostics_interval`-th step, plus the final state. The run stops with
    /// [`PhysicsError::SimulationError`] as soon as any position or velocity stops
    /// being finite.
    pub fn run<F>(&mut self, mut observer: F) -> Result<()>
    where
        F: FnMut(&Simulation) -> Result<()>,
    {
        let steps = self.config.steps;
        let interval = self.config.diagnostics_interval;
        log::info!(
            "running {} steps of {} s ({} bodies, {})",
            steps,
            self.config.time_step,
            self.bodies.len(),
            self.integrator.name()
        );

        observer(&*self)?;

        for i in 1..=steps {
            self.step();
            self.check_finite()?;

            if i % interval == 0 || i == steps {
                observer(&*self)?;
            }
        }

        let drift = self.drift();
        log::info!(
            "finished at t = {} s: dE/E0 = {:e}, dL/L0 = {:e}, dP/P0 = {:e}",
            self.time,
            drift.energy,
            drift.angular_momentum,
            drift.linear_momentum
        );

        Ok(())
    }

    /// Conservations of the current state
    pub fn conservations(&self) -> Conservations {
        compute_conservations(&self.bodies, &self.config.constants)
    }

    /// Drift of the current conservations against the baseline
    pub fn drift(&self) -> ConservationDrift {
        ConservationDrift::between(&self.baseline, &self.conservations())
    }

    /// Eclipse geometry for the bodies named Sun, Earth and Moon.
    ///
    /// `None` when any of the three is missing from the collection.
    pub fn eclipse(&self) -> Option<EclipseResult> {
        let sun = find_body(&self.bodies, SUN_NAME)?;
        let earth = find_body(&self.bodies, EARTH_NAME)?;
        let moon = find_body(&self.bodies, MOON_NAME)?;

        let result = compute_eclipse(sun.position, earth.position, moon.position, &self.config.constants);
        if result == EclipseResult::degenerate(earth.position) {
            log::warn!("degenerate eclipse geometry at step {}", self.step_count);
        }

        Some(result)
    }

    fn check_finite(&self) -> Result<()> {
        match self
            .bodies
            .iter()
            .find(|b| !b.position.is_finite() || !b.velocity.is_finite())
        {
            Some(body) => Err(PhysicsError::SimulationError(format!(
                "state of body '{}' is no longer finite after step {}",
                body.name, self.step_count
            ))),
            None => Ok(()),
        }
    }
}
