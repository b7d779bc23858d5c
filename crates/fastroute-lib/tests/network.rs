mod common;

use std::fs;

use fastroute_lib::{Error, TransitNetwork};
use tempfile::tempdir;

use common::sample_network_json;

#[test]
fn empty_matrix_is_rejected() {
    let error = TransitNetwork::from_lengths(&[]).expect_err("empty network");
    assert!(matches!(error, Error::EmptyNetwork));
}

#[test]
fn ragged_lengths_are_rejected() {
    let lengths = vec![vec![0, 1, 2], vec![1, 0], vec![2, 1, 0]];
    let error = TransitNetwork::from_lengths(&lengths).expect_err("ragged matrix");
    assert!(matches!(
        error,
        Error::NonSquareMatrix {
            matrix: "lengths",
            row: 1,
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn schedule_matrices_must_match_lengths() {
    let lengths = vec![vec![0, 1], vec![1, 0]];
    let first = vec![vec![0, 0], vec![0, 0]];
    let freq = vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]];
    let error = TransitNetwork::from_matrices(&lengths, &first, &freq).expect_err("freq too big");
    assert_eq!(
        error.to_string(),
        "freq matrix has 3 rows but the network has 2 stations"
    );
}

#[test]
fn negative_length_is_rejected() {
    let lengths = vec![vec![0, -4], vec![1, 0]];
    let error = TransitNetwork::from_lengths(&lengths).expect_err("negative length");
    assert_eq!(error.to_string(), "edge 0 -> 1 has negative length -4");
}

#[test]
fn negative_frequency_is_rejected() {
    let lengths = vec![vec![0, 4], vec![1, 0]];
    let first = vec![vec![0, 0], vec![0, 0]];
    let freq = vec![vec![0, 0], vec![-3, 0]];
    let error = TransitNetwork::from_matrices(&lengths, &first, &freq).expect_err("negative freq");
    assert!(matches!(
        error,
        Error::NegativeFrequency {
            from: 1,
            to: 0,
            value: -3
        }
    ));
}

#[test]
fn json_network_round_trips_sample() {
    let network = TransitNetwork::from_json_str(&sample_network_json()).expect("valid json");
    assert_eq!(network.station_count(), 9);

    let edge = network.edge(3, 5).expect("edge 3 -> 5");
    assert_eq!(edge.length, 14);
    assert_eq!(edge.first_departure, 14);
    assert_eq!(edge.frequency, 14);
}

#[test]
fn json_schedule_matrices_are_optional() {
    let network = TransitNetwork::from_json_str(r#"{"lengths": [[0, 2], [0, 0]]}"#)
        .expect("lengths-only network");
    let edge = network.edge(0, 1).expect("edge 0 -> 1");
    assert_eq!(edge.first_departure, 0);
    assert_eq!(edge.frequency, 0);
}

#[test]
fn invalid_json_reports_parse_error() {
    let error = TransitNetwork::from_json_str("{\"lengths\": 3}").expect_err("bad json");
    assert!(matches!(error, Error::NetworkParse(_)));
}

#[test]
fn network_loads_from_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("network.json");
    fs::write(&path, sample_network_json()).expect("write network");

    let network = TransitNetwork::load(&path).expect("load network");
    assert_eq!(network.neighbours(0).len(), 2);
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempdir().expect("create temp dir");
    let error = TransitNetwork::load(&dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(error, Error::Io(_)));
}
