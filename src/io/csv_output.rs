//! Per-step CSV trajectory and diagnostics output.

use crate::bodies::{find_body, CelestialBody};
use crate::core::simulation::{EARTH_NAME, MOON_NAME, SUN_NAME};
use crate::core::Simulation;
use crate::diagnostics::ConservationDrift;
use crate::error::PhysicsError;
use crate::Result;

use std::fs::File;
use std::io::Write;
use std::path::Path;

const CONSERVATION_COLUMNS: [&str; 12] = [
    "KE", "PE", "E_total", "dE_rel", "Px", "Py", "Pz", "Lx", "Ly", "Lz", "dL_rel", "dP_rel",
];

const ECLIPSE_COLUMNS: [&str; 3] = ["umbra_radius", "penumbra_radius", "eclipse_type"];

/// Writes one CSV row per observed simulation state
pub struct CsvRecorder<W: Write> {
    writer: csv::Writer<W>,
    body_count: usize,
    with_eclipse: bool,
    rows: u64,
}

impl CsvRecorder<File> {
    /// Creates the output file and writes the header for `bodies`
    pub fn create(path: impl AsRef<Path>, bodies: &[CelestialBody]) -> Result<Self> {
        Self::new(File::create(path)?, bodies)
    }
}

impl<W: Write> CsvRecorder<W> {
    /// Wraps `writer` and writes the header for `bodies`.
    ///
    /// Eclipse columns are included when bodies named Sun, Earth and Moon are present.
    pub fn new(writer: W, bodies: &[CelestialBody]) -> Result<Self> {
        let with_eclipse = [SUN_NAME, EARTH_NAME, MOON_NAME]
            .iter()
            .all(|name| find_body(bodies, name).is_some());

        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(header(bodies, with_eclipse))?;

        Ok(Self {
            writer,
            body_count: bodies.len(),
            with_eclipse,
            rows: 0,
        })
    }

    /// Returns true if the eclipse columns are written
    pub fn has_eclipse_columns(&self) -> bool {
        self.with_eclipse
    }

    /// Number of data rows written so far
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Appends the current state of `simulation`
    pub fn record(&mut self, simulation: &Simulation) -> Result<()> {
        let bodies = simulation.get_bodies();
        if bodies.len() != self.body_count {
            return Err(PhysicsError::InvalidParameter(format!(
                "CSV header has {} bodies but the simulation has {}",
                self.body_count,
                bodies.len()
            )));
        }

        let mut row = Vec::with_capacity(2 + 6 * bodies.len() + CONSERVATION_COLUMNS.len() + ECLIPSE_COLUMNS.len());
        row.push(simulation.get_step_count().to_string());
        row.push(simulation.get_time().to_string());

        for body in bodies {
            row.push(body.position.x.to_string());
            row.push(body.position.y.to_string());
            row.push(body.position.z.to_string());
            row.push(body.velocity.x.to_string());
            row.push(body.velocity.y.to_string());
            row.push(body.velocity.z.to_string());
        }

        let c = simulation.conservations();
        let drift = ConservationDrift::between(simulation.get_baseline(), &c);
        row.extend(
            [
                c.kinetic_energy,
                c.potential_energy,
                c.total_energy,
                drift.energy,
                c.linear_momentum.x,
                c.linear_momentum.y,
                c.linear_momentum.z,
                c.angular_momentum.x,
                c.angular_momentum.y,
                c.angular_momentum.z,
                drift.angular_momentum,
                drift.linear_momentum,
            ]
            .iter()
            .map(f64::to_string),
        );

        if self.with_eclipse {
            let eclipse = simulation.eclipse().ok_or_else(|| {
                PhysicsError::ResourceNotFound("Sun, Earth or Moon missing from simulation".to_string())
            })?;
            row.push(eclipse.umbra_radius.to_string());
            row.push(eclipse.penumbra_radius.to_string());
            row.push(eclipse.eclipse_type.as_code().to_string());
        }

        self.writer.write_record(&row)?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes buffered rows to the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| PhysicsError::Io(e.into_error()))
    }
}

/// Column names for `bodies`
pub fn header(bodies: &[CelestialBody], with_eclipse: bool) -> Vec<String> {
    let mut columns = vec!["step".to_string(), "time".to_string()];
    for body in bodies {
        for axis in ["x", "y", "z", "vx", "vy", "vz"] {
            columns.push(format!("{}_{}", body.name, axis));
        }
    }
    columns.extend(CONSERVATION_COLUMNS.iter().map(|c| c.to_string()));
    if with_eclipse {
        columns.extend(ECLIPSE_COLUMNS.iter().map(|c| c.to_string()));
    }
    columns
}
