//! The bundled sample city: six intersections, four hospitals.
//!
//! From `A` the nearest hospital by road is `H1` (7 min), but it is nearly
//! full; `H4` is farther (12 min) with a short queue and wins at 15.75 min.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::info;

use rd_dispatch::{EdgeRecord, HospitalRecord, InMemoryProvider};

use crate::csv_dir::{EDGES_FILE, HOSPITALS_FILE, NODES_FILE};
use crate::loader::{write_edges, write_hospitals, write_nodes};
use crate::DataResult;

pub const SAMPLE_NODES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "H1", "H2", "H3", "H4"];

/// `(from, to, minutes)`; every road is two-way.
pub const SAMPLE_ROADS: [(&str, &str, f64); 11] = [
    ("A", "B",  5.0),
    ("A", "C",  8.0),
    ("B", "D",  3.0),
    ("C", "D",  4.0),
    ("C", "E",  6.0),
    ("D", "F",  7.0),
    ("E", "F",  2.0),
    ("B", "H1", 2.0),
    ("E", "H2", 4.0),
    ("F", "H3", 3.0),
    ("A", "H4", 12.0),
];

/// `(id, name, capacity, current_occupancy)`.
pub const SAMPLE_HOSPITALS: [(&str, &str, i64, i64); 4] = [
    ("H1", "Central Med",      50,  45),
    ("H2", "City General",     100, 20),
    ("H3", "Northside Care",   30,  29),
    ("H4", "Southwest Clinic", 40,  15),
];

fn sample_edges() -> Vec<EdgeRecord> {
    SAMPLE_ROADS
        .iter()
        .map(|&(from, to, minutes)| EdgeRecord::new(from, to, minutes))
        .collect()
}

fn sample_hospitals() -> Vec<HospitalRecord> {
    SAMPLE_HOSPITALS
        .iter()
        .map(|&(id, name, cap, occ)| HospitalRecord::new(id, name, cap, occ))
        .collect()
}

/// The sample city as an in-memory provider.
pub fn sample_city() -> InMemoryProvider {
    InMemoryProvider::new(
        SAMPLE_NODES.map(str::to_owned).to_vec(),
        sample_edges(),
        sample_hospitals(),
    )
}

/// Write the sample city's three CSV files into `dir`, creating it if
/// needed.  Existing files are overwritten.
pub fn seed_dir(dir: &Path) -> DataResult<()> {
    std::fs::create_dir_all(dir)?;
    write_nodes(BufWriter::new(File::create(dir.join(NODES_FILE))?), &SAMPLE_NODES)?;
    write_edges(BufWriter::new(File::create(dir.join(EDGES_FILE))?), &sample_edges())?;
    write_hospitals(
        BufWriter::new(File::create(dir.join(HOSPITALS_FILE))?),
        &sample_hospitals(),
    )?;
    info!("seeded sample city into {}", dir.display());
    Ok(())
}
