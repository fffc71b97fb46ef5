//! Drives the mandatory periodic schedule (spec §4.6), polling
//! `tiled_worker::SCHEDULE` against wall-clock time and submitting the due
//! entries whose task names have a registered handler.
//!
//! Grounded in the same "single-process scheduler with a fixed pool" choice
//! `tiled_worker::Runtime` itself documents: one loop, one tick interval,
//! no distributed lock.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use timestamp::Timestamp;
use tiled_worker::{Runtime, TaskEnvelope, SCHEDULE};
use tracing::{debug, info};

const TICK_INTERVAL: Duration = Duration::from_secs(30);

/// Runs forever, checking every [`TICK_INTERVAL`] whether any schedule
/// entry is due. Intended to be spawned once alongside the worker pool.
pub async fn run(runtime: Arc<Runtime>) {
    let mut last_fired: HashMap<&'static str, Timestamp> = HashMap::new();

    loop {
        let now = Timestamp::now();
        for entry in SCHEDULE {
            if !runtime.has_handler(entry.task_name) {
                debug!(task = entry.task_name, "schedule entry has no registered handler, skipping");
                continue;
            }

            if entry.cadence.is_due(last_fired.get(entry.task_name).copied(), now) {
                info!(task = entry.task_name, "schedule firing");
                runtime.submit(TaskEnvelope::new(entry.task_name, serde_json::json!({})));
                last_fired.insert(entry.task_name, now);
            }
        }

        tokio::time::sleep(TICK_INTERVAL).await;
    }
}
