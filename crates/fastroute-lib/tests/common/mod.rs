#![allow(dead_code)]

use fastroute_lib::{sample, TransitNetwork};

/// Sample network including its timetable.
pub fn sample_network() -> TransitNetwork {
    sample::network().expect("sample network is valid")
}

/// Sample network serialized in the on-disk JSON shape.
pub fn sample_network_json() -> String {
    serde_json::json!({
        "lengths": sample::lengths(),
        "first": sample::first_departures(),
        "freq": sample::frequencies(),
    })
    .to_string()
}
