// Shared test helpers

#![allow(dead_code)]

use chrono::Utc;
use monitor_mock::models::MetricsUpdate;
use monitor_mock::seed::default_roster;
use monitor_mock::store::MetricsStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn seeded_store(seed: u64) -> MetricsStore {
    MetricsStore::with_rng(default_roster(Utc::now()), StdRng::seed_from_u64(seed))
}

pub fn update(name: &str, cpu: f64, ram: f64, disk: f64, network: f64) -> MetricsUpdate {
    MetricsUpdate {
        server_name: name.into(),
        cpu,
        ram,
        disk,
        network,
    }
}
