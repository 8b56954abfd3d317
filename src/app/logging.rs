//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs throughput for the domains processed so far.
///
/// # Arguments
///
/// * `start_time` - When the first request was issued
/// * `completed` - Number of domains processed
pub fn log_progress(start_time: Instant, completed: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    #[allow(clippy::cast_precision_loss)]
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {} domain{} in {:.2} seconds (~{:.2} domains/sec)",
        completed,
        if completed == 1 { "" } else { "s" },
        elapsed_secs,
        rate
    );
}
