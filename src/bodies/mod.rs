mod celestial_body;
mod barycenter;

pub use self::celestial_body::{find_body, CelestialBody};
pub use self::barycenter::{center_of_mass, normalize_to_barycenter};
