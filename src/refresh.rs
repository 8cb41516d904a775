//! Fixed-interval monitoring of the attendance source.
//!
//! Pages refresh themselves in the browser; this loop is the server's view
//! of source health. Each tick reloads the workbook, logs what it found and
//! publishes the resulting [`CycleReport`] on a watch channel, which
//! `GET /health` reads. It keeps no table between ticks and never stops
//! because one tick failed.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use crate::aggregation::resolve_filter_options;
use crate::config::DashboardConfig;
use crate::models::FilterSelection;
use crate::source::{SourceState, load_table};

/// What one refresh tick observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    /// Tick number, starting at zero.
    pub tick: u64,
    /// When the tick finished.
    pub finished_at: DateTime<Utc>,
    /// The load outcome.
    pub state: SourceState,
    /// Records read.
    pub rows: usize,
    /// Distinct grades in the table.
    pub grades: usize,
    /// Failure description, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Sending half of the latest-report channel.
pub type ReportSender = watch::Sender<Option<CycleReport>>;

/// Receiving half of the latest-report channel.
pub type ReportReceiver = watch::Receiver<Option<CycleReport>>;

/// Creates the channel the refresh loop publishes its latest report on.
pub fn report_channel() -> (ReportSender, ReportReceiver) {
    watch::channel(None)
}

/// Runs one tick: reloads the workbook and summarizes it.
pub fn run_tick(config: &DashboardConfig, tick: u64) -> CycleReport {
    let outcome = load_table(&config.source);
    let status = outcome.status();
    let grades = outcome
        .table()
        .map(|table| resolve_filter_options(table, &FilterSelection::default()).grades.len())
        .unwrap_or(0);

    CycleReport {
        tick,
        finished_at: Utc::now(),
        state: status.state,
        rows: status.rows,
        grades,
        detail: status.detail,
    }
}

/// Spawns the refresh loop on the current tokio runtime.
///
/// The first tick fires immediately. Each tick runs on the blocking pool and
/// its report replaces the previous one in `reports`. A tick that panics is
/// logged, the previous report stays published and the loop carries on.
pub fn spawn_refresh_loop(config: Arc<DashboardConfig>, reports: ReportSender) -> JoinHandle<()> {
    let period = Duration::from_secs(config.refresh.interval_secs.max(1));

    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick: u64 = 0;

        loop {
            ticker.tick().await;

            let cycle_config = Arc::clone(&config);
            match tokio::task::spawn_blocking(move || run_tick(&cycle_config, tick)).await {
                Ok(report) => {
                    if report.state == SourceState::Loaded {
                        info!(
                            tick = report.tick,
                            rows = report.rows,
                            grades = report.grades,
                            "Refresh cycle completed"
                        );
                    } else {
                        warn!(
                            tick = report.tick,
                            state = %report.state,
                            detail = report.detail.as_deref().unwrap_or(""),
                            "Refresh cycle found no usable data"
                        );
                    }
                    reports.send_replace(Some(report));
                }
                Err(err) => {
                    warn!(tick, error = %err, "Refresh cycle aborted");
                }
            }

            tick += 1;
        }
    })
}
