// Mutex-serialized handle so concurrent requests never interleave a read-modify-write

use parking_lot::Mutex;
use std::sync::Arc;

use super::{MetricsStore, UpdateOutcome};
use crate::models::{Alert, History, MetricsSnapshot, MetricsUpdate, Server};

/// Cheap to clone; all clones share one [`MetricsStore`].
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<MetricsStore>>,
}

impl SharedStore {
    pub fn new(store: MetricsStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn advance_and_snapshot(&self) -> MetricsSnapshot {
        self.inner.lock().advance_and_snapshot()
    }

    pub fn apply_external_update(&self, update: &MetricsUpdate) -> UpdateOutcome {
        self.inner.lock().apply_external_update(update)
    }

    pub fn snapshot_history(&self) -> History {
        self.inner.lock().snapshot_history()
    }

    /// Current roster without drifting it.
    pub fn servers(&self) -> Vec<Server> {
        self.inner.lock().servers().to_vec()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.inner.lock().alerts().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_roster;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parallel_polls_and_pushes_keep_invariants() {
        let store = SharedStore::new(MetricsStore::with_rng(
            default_roster(Utc::now()),
            StdRng::seed_from_u64(42),
        ));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        if i % 2 == 0 {
                            store.advance_and_snapshot();
                        } else {
                            store.apply_external_update(&MetricsUpdate {
                                server_name: "Database Server".into(),
                                cpu: 90.0,
                                ram: 90.0,
                                disk: 50.0,
                                network: 100.0,
                            });
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let alerts = store.alerts();
        assert!(alerts.len() <= 6);
        for (i, a) in alerts.iter().enumerate() {
            assert!(
                alerts[i + 1..]
                    .iter()
                    .all(|b| !b.matches(&a.server, a.kind)),
                "duplicate alert for {} {:?}",
                a.server,
                a.kind
            );
        }
        assert_eq!(store.servers().len(), 3);
    }
}
