//! `rd-data` — concrete data sources for `rd-dispatch`.
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`loader`]  | CSV readers/writers for nodes, edges, and hospitals         |
//! | [`csv_dir`] | `CsvDirProvider`: a `DataProvider` over a directory of CSVs |
//! | [`sample`]  | The bundled sample city and `seed_dir`                      |
//! | [`error`]   | `DataError`, `DataResult<T>`                                |
//!
//! # Directory layout
//!
//! ```text
//! <dir>/nodes.csv      node_id
//! <dir>/edges.csv      source,target,weight
//! <dir>/hospitals.csv  hospital_id,name,capacity,current_occupancy
//! ```

pub mod csv_dir;
pub mod error;
pub mod loader;
pub mod sample;

#[cfg(test)]
mod tests;

pub use csv_dir::CsvDirProvider;
pub use error::{DataError, DataResult};
pub use loader::{
    read_edges, read_hospitals, read_nodes, write_edges, write_hospitals, write_nodes,
};
pub use sample::{sample_city, seed_dir};
