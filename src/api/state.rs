//! Shared application state for the dashboard server.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::refresh::{CycleReport, ReportReceiver, report_channel};

/// Shared application state.
///
/// Holds the immutable configuration and a read handle on the refresh
/// loop's latest report. The attendance table is never cached here; every
/// request reloads it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<DashboardConfig>,
    reports: ReportReceiver,
}

impl AppState {
    /// Creates a state with no refresh loop attached.
    pub fn new(config: Arc<DashboardConfig>) -> Self {
        let (_, reports) = report_channel();
        Self { config, reports }
    }

    /// Creates a state that reports the refresh loop's latest cycle.
    pub fn with_reports(config: Arc<DashboardConfig>, reports: ReportReceiver) -> Self {
        Self { config, reports }
    }

    /// Returns the dashboard configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Returns a new handle to the shared configuration.
    pub fn shared_config(&self) -> Arc<DashboardConfig> {
        Arc::clone(&self.config)
    }

    /// Returns the most recent refresh report, if a tick has completed.
    pub fn last_refresh(&self) -> Option<CycleReport> {
        self.reports.borrow().clone()
    }
}

impl From<DashboardConfig> for AppState {
    fn from(config: DashboardConfig) -> Self {
        Self::new(Arc::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh::run_tick;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_config() {
        let state = AppState::from(DashboardConfig::default());
        let other = state.clone();
        assert!(Arc::ptr_eq(&state.shared_config(), &other.shared_config()));
        assert_eq!(other.config().refresh.interval_secs, 60);
        assert_eq!(other.last_refresh(), None);
    }

    #[test]
    fn test_last_refresh_follows_sender() {
        let config = Arc::new(DashboardConfig::default());
        let (sender, receiver) = report_channel();
        let state = AppState::with_reports(Arc::clone(&config), receiver);

        let report = run_tick(&config, 7);
        sender.send_replace(Some(report.clone()));
        assert_eq!(state.last_refresh(), Some(report));
    }
}
