//! Station presence records.
//!
//! A running station publishes one JSON file describing itself into a shared
//! run directory. The file is named after the station id and overwritten
//! whole on every refresh; readers re-parse it and must probe the recorded
//! pid for liveness rather than trust file presence, since stale files are
//! never cleaned up. Readers must not delete or rename a record file even
//! when its process looks dead: the owning writer may be about to overwrite
//! it, and retrying later is the prescribed recovery.

use crate::error::{RegistryError, Result};
use crate::platform;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single station's presence record.
///
/// Immutable value semantics: constructed once by the owning station process,
/// compared field for field. Within one run directory two records with the
/// same `station_id` overwrite each other; last writer wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationRecord {
    /// Unique station identity; also the filename the record persists under.
    pub station_id: String,
    /// Name of the test script the station is running.
    pub script_name: String,
    /// Control endpoint hostname. Always the loopback hostname by convention.
    pub http_host: String,
    /// Control endpoint TCP port.
    pub http_port: u16,
    /// OS process id of the station, used only for liveness probing.
    pub pid: u32,
}

impl StationRecord {
    pub fn new(
        station_id: impl Into<String>,
        script_name: impl Into<String>,
        http_host: impl Into<String>,
        http_port: u16,
        pid: u32,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            script_name: script_name.into(),
            http_host: http_host.into(),
            http_port,
            pid,
        }
    }

    /// Read a record from a run file.
    ///
    /// Strict field matching: the file must contain exactly the five record
    /// fields. A missing, unknown, or wrong-shaped field fails with
    /// [`RegistryError::Schema`]; content that is not JSON at all fails with
    /// [`RegistryError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| RegistryError::io_with_path(e, path))?;

        let value: serde_json::Value =
            serde_json::from_str(&contents).map_err(|e| RegistryError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let record: StationRecord =
            serde_json::from_value(value).map_err(|e| RegistryError::Schema {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!("Parsed station record {}", path.display());
        Ok(record)
    }

    /// Canonical JSON encoding of this record.
    ///
    /// Keys are sorted ascending, indentation is 4 spaces, separators are
    /// `": "` and `","`. Output is byte-identical for equal records, so a
    /// refresh of an unchanged station produces no diff.
    pub fn as_json(&self) -> Result<String> {
        // serde_json's Map is a BTreeMap, so going through a Value yields
        // sorted keys regardless of field declaration order.
        let value = serde_json::to_value(self)?;

        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        value.serialize(&mut ser)?;

        Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
    }

    /// Persist this record into `directory`, overwriting any previous file.
    ///
    /// The file is named exactly after `station_id`. This is a whole-file
    /// overwrite, not an atomic rename: a concurrent reader may observe a
    /// partially written file, which it is expected to skip and retry.
    /// Returns the full path written.
    pub fn save_to_file(&self, directory: &Path) -> Result<PathBuf> {
        let path = directory.join(&self.station_id);
        let json = self.as_json()?;

        fs::write(&path, json).map_err(|e| RegistryError::io_with_path(e, &path))?;

        debug!("Published station record {}", path.display());
        Ok(path)
    }

    /// Probe whether the process that published this record is still alive.
    ///
    /// Never errors: every OS-level probe failure (no such process, pid
    /// recycled, process owned by another user) collapses to `false`, so
    /// callers need no OS-specific error handling.
    pub fn is_alive(&self) -> bool {
        platform::is_process_alive(self.pid)
    }

    /// Liveness check through an injected probe, for callers that need a
    /// platform-neutral or fake process table.
    pub fn is_alive_with<F>(&self, probe: F) -> bool
    where
        F: Fn(u32) -> bool,
    {
        probe(self.pid)
    }
}
