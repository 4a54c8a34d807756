mod csv_output;
mod system_file;

pub use self::csv_output::{header, CsvRecorder};
pub use self::system_file::{load_system, SystemFile};
