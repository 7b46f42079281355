//! CSV readers and writers for network and hospital records.
//!
//! Readers accept any `Read` source (pass a `std::io::Cursor` in tests),
//! trim whitespace around fields, and fail on the first malformed row.

use std::io::{Read, Write};

use csv::{ReaderBuilder, Trim, Writer, WriterBuilder};
use serde::Deserialize;

use rd_dispatch::{EdgeRecord, HospitalRecord};

use crate::DataResult;

#[derive(Deserialize)]
struct NodeRow {
    node_id: String,
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(source)
}

// ── Readers ───────────────────────────────────────────────────────────────────

/// Read `node_id` rows.
pub fn read_nodes<R: Read>(source: R) -> DataResult<Vec<String>> {
    let mut rdr = reader(source);
    let mut nodes = Vec::new();
    for row in rdr.deserialize::<NodeRow>() {
        nodes.push(row?.node_id);
    }
    Ok(nodes)
}

/// Read `source,target,weight` rows.  Weights are not validated here.
pub fn read_edges<R: Read>(source: R) -> DataResult<Vec<EdgeRecord>> {
    let mut rdr = reader(source);
    rdr.deserialize::<EdgeRecord>()
        .map(|row| row.map_err(Into::into))
        .collect()
}

/// Read `hospital_id,name,capacity,current_occupancy` rows.
pub fn read_hospitals<R: Read>(source: R) -> DataResult<Vec<HospitalRecord>> {
    let mut rdr = reader(source);
    rdr.deserialize::<HospitalRecord>()
        .map(|row| row.map_err(Into::into))
        .collect()
}

// ── Writers ───────────────────────────────────────────────────────────────────

/// Writer that emits `header` up front, so an empty table still has one.
fn headed_writer<W: Write>(sink: W, header: &[&str]) -> DataResult<Writer<W>> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(sink);
    w.write_record(header)?;
    Ok(w)
}

pub fn write_nodes<W: Write, S: AsRef<str>>(sink: W, nodes: &[S]) -> DataResult<()> {
    let mut w = headed_writer(sink, &["node_id"])?;
    for node in nodes {
        w.write_record([node.as_ref()])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_edges<W: Write>(sink: W, edges: &[EdgeRecord]) -> DataResult<()> {
    let mut w = headed_writer(sink, &["source", "target", "weight"])?;
    for edge in edges {
        w.serialize(edge)?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_hospitals<W: Write>(sink: W, hospitals: &[HospitalRecord]) -> DataResult<()> {
    let mut w = headed_writer(sink, &["hospital_id", "name", "capacity", "current_occupancy"])?;
    for hospital in hospitals {
        w.serialize(hospital)?;
    }
    w.flush()?;
    Ok(())
}
