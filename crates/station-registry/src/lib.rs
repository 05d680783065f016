//! Station Registry - file-based presence and discovery for test stations.
//!
//! A running test station publishes a small JSON record of itself (identity,
//! script, control endpoint, pid) into a shared run directory, one file per
//! station named after its station id. Independent reader processes enumerate
//! that directory to locate stations, then probe each record's pid before
//! trusting it; files are never deleted by this crate, so presence on disk
//! alone proves nothing.
//!
//! There is no coordination between writers and readers. Each writer only
//! ever overwrites its own station-id-named file, and readers tolerate the
//! partial state that concurrent overwrites can produce by skipping files
//! they cannot parse and retrying later.
//!
//! # Example
//!
//! ```rust,no_run
//! use station_registry::{enumerate_run_directory, RegistryConfig, StationRecord};
//! use std::path::Path;
//!
//! fn main() -> station_registry::Result<()> {
//!     let run_dir = Path::new(RegistryConfig::DEFAULT_RUN_DIR);
//!
//!     // Writer side: publish this process as a station.
//!     let record = StationRecord::new(
//!         "station-a",
//!         "smoke.py",
//!         "localhost",
//!         8080,
//!         std::process::id(),
//!     );
//!     record.save_to_file(run_dir)?;
//!
//!     // Reader side: discover every station and check it is still up.
//!     for station in enumerate_run_directory(run_dir)? {
//!         println!("{} alive={}", station.station_id, station.is_alive());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod platform;
pub mod record;
pub mod scan;

// Re-export commonly used types
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use record::StationRecord;
pub use scan::enumerate_run_directory;
