//! Unit tests for rd-data.

use std::io::Cursor;

use rd_core::DispatchConfig;
use rd_dispatch::{
    DataProvider, DispatchError, DispatchService, EdgeRecord, HospitalRecord, ProviderError,
};

use crate::{
    CsvDirProvider, DataError, read_edges, read_hospitals, read_nodes, sample_city, seed_dir,
    write_edges, write_hospitals, write_nodes,
};

// ── loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn reads_nodes_with_whitespace() {
        let csv = "node_id\n A \nB\n  H1\n";
        assert_eq!(read_nodes(Cursor::new(csv)).unwrap(), vec!["A", "B", "H1"]);
    }

    #[test]
    fn reads_edges() {
        let csv = "source,target,weight\nA, B, 5\nB,H1,2.5\n";
        let edges = read_edges(Cursor::new(csv)).unwrap();
        assert_eq!(edges, vec![EdgeRecord::new("A", "B", 5.0), EdgeRecord::new("B", "H1", 2.5)]);
    }

    #[test]
    fn reads_hospitals() {
        let csv = "hospital_id,name,capacity,current_occupancy\nH1, Central Med ,50,45\n";
        let hospitals = read_hospitals(Cursor::new(csv)).unwrap();
        assert_eq!(hospitals, vec![HospitalRecord::new("H1", "Central Med", 50, 45)]);
    }

    #[test]
    fn negative_values_parse_for_later_validation() {
        let csv = "hospital_id,name,capacity,current_occupancy\nH1,X,-3,5\n";
        let hospitals = read_hospitals(Cursor::new(csv)).unwrap();
        assert_eq!(hospitals[0].capacity, -3);
    }

    #[test]
    fn non_numeric_weight_is_malformed() {
        let csv = "source,target,weight\nA,B,fast\n";
        let err = read_edges(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
        assert!(matches!(ProviderError::from(err), ProviderError::Malformed(_)));
    }

    #[test]
    fn missing_column_is_malformed() {
        let csv = "hospital_id,name,capacity\nH1,X,10\n";
        let err = read_hospitals(Cursor::new(csv)).unwrap_err();
        assert!(matches!(ProviderError::from(err), ProviderError::Malformed(_)));
    }

    #[test]
    fn empty_tables_keep_headers() {
        let mut buf = Vec::new();
        write_hospitals(&mut buf, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "hospital_id,name,capacity,current_occupancy\n"
        );

        let mut buf = Vec::new();
        write_edges(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "source,target,weight\n");
    }

    #[test]
    fn written_tables_read_back() {
        let mut nodes = Vec::new();
        write_nodes(&mut nodes, &["A", "H1"]).unwrap();
        assert_eq!(read_nodes(Cursor::new(nodes)).unwrap(), vec!["A", "H1"]);

        let hospitals = vec![HospitalRecord::new("H1", "Central, Med", 50, 45)];
        let mut buf = Vec::new();
        write_hospitals(&mut buf, &hospitals).unwrap();
        assert_eq!(read_hospitals(Cursor::new(buf)).unwrap(), hospitals);
    }
}

// ── csv_dir ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_dir {
    use super::*;

    fn seeded() -> (tempfile::TempDir, CsvDirProvider) {
        let dir = tempfile::tempdir().unwrap();
        seed_dir(dir.path()).unwrap();
        let provider = CsvDirProvider::open(dir.path()).unwrap();
        (dir, provider)
    }

    #[test]
    fn open_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(CsvDirProvider::open(&missing), Err(DataError::Io(_))));
    }

    #[test]
    fn seeded_dir_matches_sample_city() {
        let (_dir, provider) = seeded();
        let sample = sample_city();
        assert_eq!(provider.list_nodes().unwrap(), sample.list_nodes().unwrap());
        assert_eq!(provider.list_edges().unwrap(), sample.list_edges().unwrap());
        assert_eq!(provider.list_hospitals().unwrap(), sample.list_hospitals().unwrap());
    }

    #[test]
    fn update_persists_to_disk() {
        let (dir, provider) = seeded();
        assert!(provider.apply_occupancy_update("H2", 90).unwrap());

        let reopened = CsvDirProvider::open(dir.path()).unwrap();
        let h2 = reopened
            .list_hospitals()
            .unwrap()
            .into_iter()
            .find(|h| h.hospital_id == "H2")
            .unwrap();
        assert_eq!(h2.current_occupancy, 90);
        assert!(!dir.path().join("hospitals.csv.tmp").exists());
    }

    #[test]
    fn unchanged_or_unknown_update_is_noop() {
        let (_dir, provider) = seeded();
        assert!(!provider.apply_occupancy_update("H1", 45).unwrap());
        assert!(!provider.apply_occupancy_update("H9", 10).unwrap());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let (dir, provider) = seeded();
        std::fs::remove_file(dir.path().join("edges.csv")).unwrap();
        assert!(matches!(provider.list_edges(), Err(ProviderError::Unavailable(_))));
    }

    #[test]
    fn corrupt_file_is_malformed() {
        let (dir, provider) = seeded();
        let corrupt = "hospital_id,name,capacity,current_occupancy\nH1,X,lots,1\n";
        std::fs::write(dir.path().join("hospitals.csv"), corrupt).unwrap();
        assert!(matches!(provider.list_hospitals(), Err(ProviderError::Malformed(_))));
    }
}

// ── end to end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod end_to_end {
    use super::*;

    #[test]
    fn sample_city_dispatch() {
        let svc = DispatchService::new(sample_city(), DispatchConfig::default()).unwrap();
        let r = svc.find_optimal_hospital("A").unwrap();
        assert_eq!(r.hospital.id, "H4");
        assert_eq!(r.route, vec!["A", "H4"]);
        assert_eq!(r.metrics.travel_time_mins, 12.0);
        assert_eq!(r.metrics.waiting_time_mins, 3.75);
        assert_eq!(r.metrics.total_response_time_mins, 15.75);
    }

    #[test]
    fn csv_dir_service_sees_updates() {
        let dir = tempfile::tempdir().unwrap();
        seed_dir(dir.path()).unwrap();
        let provider = CsvDirProvider::open(dir.path()).unwrap();
        let svc = DispatchService::new(provider, DispatchConfig::default()).unwrap();

        assert_eq!(svc.list_locations(), vec!["A", "B", "C", "D", "E", "F"]);
        assert_eq!(svc.find_optimal_hospital("a").unwrap().hospital.id, "H4");

        assert!(svc.update_occupancy("H4", 40).unwrap());
        assert!(svc.update_occupancy("H1", 50).unwrap());
        let r = svc.find_optimal_hospital("A").unwrap();
        assert_eq!(r.hospital.id, "H2");
        assert_eq!(r.route, vec!["A", "C", "E", "H2"]);
        assert_eq!(r.metrics.total_response_time_mins, 20.0);
        assert_eq!(r.snapshot_version, 3);
    }

    #[test]
    fn broken_dir_keeps_serving_last_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        seed_dir(dir.path()).unwrap();
        let provider = CsvDirProvider::open(dir.path()).unwrap();
        let svc = DispatchService::new(provider, DispatchConfig::default()).unwrap();

        std::fs::remove_file(dir.path().join("nodes.csv")).unwrap();
        assert!(matches!(svc.refresh(), Err(DispatchError::DataSourceUnavailable(_))));
        assert_eq!(svc.find_optimal_hospital("A").unwrap().hospital.id, "H4");
        assert_eq!(svc.snapshot().version(), 1);
    }
}
