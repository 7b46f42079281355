//! A [`DataProvider`] over a directory of CSV files.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::debug;
use parking_lot::Mutex;

use rd_dispatch::{DataProvider, EdgeRecord, HospitalRecord, ProviderResult};

use crate::loader::{read_edges, read_hospitals, read_nodes, write_hospitals};
use crate::DataResult;

pub const NODES_FILE:     &str = "nodes.csv";
pub const EDGES_FILE:     &str = "edges.csv";
pub const HOSPITALS_FILE: &str = "hospitals.csv";

/// Reads `nodes.csv`, `edges.csv`, and `hospitals.csv` from a directory on
/// every call, so each snapshot sees the files as they are at load time.
///
/// Occupancy updates rewrite `hospitals.csv` through a temporary file and a
/// rename; concurrent readers see either the old or the new file, never a
/// partial one.
#[derive(Debug)]
pub struct CsvDirProvider {
    dir:        PathBuf,
    write_lock: Mutex<()>,
}

impl CsvDirProvider {
    /// Fails if `dir` is not an existing directory.  The CSV files themselves
    /// are only opened when a snapshot is loaded.
    pub fn open(dir: impl Into<PathBuf>) -> DataResult<Self> {
        let dir = dir.into();
        if !fs::metadata(&dir)?.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                format!("{} is not a directory", dir.display()),
            )
            .into());
        }
        Ok(Self { dir, write_lock: Mutex::new(()) })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn open_file(&self, name: &str) -> DataResult<File> {
        let path = self.dir.join(name);
        debug!("reading {}", path.display());
        Ok(File::open(path)?)
    }

    fn rewrite_hospitals(&self, hospitals: &[HospitalRecord]) -> DataResult<()> {
        let target = self.dir.join(HOSPITALS_FILE);
        let tmp = self.dir.join(format!("{HOSPITALS_FILE}.tmp"));
        write_hospitals(BufWriter::new(File::create(&tmp)?), hospitals)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}

impl DataProvider for CsvDirProvider {
    fn list_nodes(&self) -> ProviderResult<Vec<String>> {
        Ok(read_nodes(self.open_file(NODES_FILE)?)?)
    }

    fn list_edges(&self) -> ProviderResult<Vec<EdgeRecord>> {
        Ok(read_edges(self.open_file(EDGES_FILE)?)?)
    }

    fn list_hospitals(&self) -> ProviderResult<Vec<HospitalRecord>> {
        Ok(read_hospitals(self.open_file(HOSPITALS_FILE)?)?)
    }

    fn apply_occupancy_update(
        &self,
        hospital_id:   &str,
        new_occupancy: i64,
    ) -> ProviderResult<bool> {
        let _guard = self.write_lock.lock();
        let mut hospitals = read_hospitals(self.open_file(HOSPITALS_FILE)?)?;
        let Some(record) = hospitals.iter_mut().find(|h| h.hospital_id == hospital_id) else {
            return Ok(false);
        };
        if record.current_occupancy == new_occupancy {
            return Ok(false);
        }
        record.current_occupancy = new_occupancy;
        self.rewrite_hospitals(&hospitals)?;
        Ok(true)
    }
}
