//! Host configuration.
//!
//! A [`HostConfig`] is built once with `with_*` setters and handed to
//! [`crate::Dispatcher::new`]; the constants below match its documented
//! defaults by name.

use std::time::Duration;

/// Number of device table slots (fixed-size array, default 8 slots).
pub const DEFAULT_DEVICE_TABLE_SIZE: usize = 8;

/// Bounded outgoing-report queue depth per device (implementation-defined, >= 8).
pub const DEFAULT_OUTGOING_QUEUE_DEPTH: usize = 8;

/// Depth of the cross-execution-context SPSC command queue (default depth 16).
pub const DEFAULT_PLATFORM_QUEUE_DEPTH: usize = 16;

/// GAP inquiry interval multiplier N in `N x 1.28s` (default N=3).
pub const DEFAULT_INQUIRY_INTERVAL_N: u32 = 3;

/// Mandatory single-shot pause after an inquiry round completes, before the
/// next one may start ("1280 ms").
pub const DEFAULT_INQUIRY_PAUSE: Duration = Duration::from_millis(1280);

/// SDP query timeout margin subtracted from the connection timeout
/// ("connection-timeout - 4500 ms").
pub const DEFAULT_SDP_TIMEOUT_MARGIN: Duration = Duration::from_millis(4500);

/// Overall connection timeout the SDP margin is subtracted from. The
/// upstream `btstack` default for an SDP-capable Classic connection is 15s;
/// BLE connect timeouts are shorter ("BLE 10s").
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(15);

/// BLE connection timeout.
pub const DEFAULT_BLE_CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Host-wide tunables for the dispatcher and connection FSM.
///
/// Plain struct with `with_*` builder setters; every field has a sensible
/// default so `HostConfig::default()` alone is a valid configuration.
#[derive(Clone, Debug)]
pub struct HostConfig {
    device_table_size: usize,
    outgoing_queue_depth: usize,
    platform_queue_depth: usize,
    inquiry_interval_n: u32,
    inquiry_pause: Duration,
    sdp_timeout_margin: Duration,
    connection_timeout: Duration,
    ble_connection_timeout: Duration,
    accept_incoming: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            device_table_size: DEFAULT_DEVICE_TABLE_SIZE,
            outgoing_queue_depth: DEFAULT_OUTGOING_QUEUE_DEPTH,
            platform_queue_depth: DEFAULT_PLATFORM_QUEUE_DEPTH,
            inquiry_interval_n: DEFAULT_INQUIRY_INTERVAL_N,
            inquiry_pause: DEFAULT_INQUIRY_PAUSE,
            sdp_timeout_margin: DEFAULT_SDP_TIMEOUT_MARGIN,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
            ble_connection_timeout: DEFAULT_BLE_CONNECTION_TIMEOUT,
            accept_incoming: true,
        }
    }
}

impl HostConfig {
    /// Returns the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device table size (number of simultaneous connections).
    #[must_use]
    pub const fn with_device_table_size(mut self, n: usize) -> Self {
        self.device_table_size = n;
        self
    }

    /// Sets the per-device outgoing queue depth.
    #[must_use]
    pub const fn with_outgoing_queue_depth(mut self, n: usize) -> Self {
        self.outgoing_queue_depth = n;
        self
    }

    /// Sets the platform-bridge SPSC queue depth.
    #[must_use]
    pub const fn with_platform_queue_depth(mut self, n: usize) -> Self {
        self.platform_queue_depth = n;
        self
    }

    /// Sets the GAP inquiry interval multiplier N (interval = N x 1.28s).
    #[must_use]
    pub const fn with_inquiry_interval_n(mut self, n: u32) -> Self {
        self.inquiry_interval_n = n;
        self
    }

    /// Sets whether incoming connections are accepted at startup. Can also
    /// be toggled at runtime through the platform bridge.
    #[must_use]
    pub const fn with_accept_incoming(mut self, accept: bool) -> Self {
        self.accept_incoming = accept;
        self
    }

    #[must_use]
    pub const fn device_table_size(&self) -> usize {
        self.device_table_size
    }

    #[must_use]
    pub const fn outgoing_queue_depth(&self) -> usize {
        self.outgoing_queue_depth
    }

    #[must_use]
    pub const fn platform_queue_depth(&self) -> usize {
        self.platform_queue_depth
    }

    /// Returns the configured GAP inquiry interval as a [`Duration`].
    #[must_use]
    pub fn inquiry_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.inquiry_interval_n) * 1280)
    }

    #[must_use]
    pub const fn inquiry_pause(&self) -> Duration {
        self.inquiry_pause
    }

    #[must_use]
    pub const fn sdp_timeout_margin(&self) -> Duration {
        self.sdp_timeout_margin
    }

    #[must_use]
    pub const fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    #[must_use]
    pub const fn ble_connection_timeout(&self) -> Duration {
        self.ble_connection_timeout
    }

    /// The SDP query timer duration: `connection_timeout - sdp_timeout_margin`
    ///.
    #[must_use]
    pub fn sdp_timeout(&self) -> Duration {
        self.connection_timeout.saturating_sub(self.sdp_timeout_margin)
    }

    #[must_use]
    pub const fn accept_incoming_default(&self) -> bool {
        self.accept_incoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_constants() {
        let cfg = HostConfig::default();
        assert_eq!(cfg.device_table_size(), 8);
        assert_eq!(cfg.outgoing_queue_depth(), 8);
        assert_eq!(cfg.platform_queue_depth(), 16);
        assert_eq!(cfg.inquiry_interval(), Duration::from_millis(3840));
    }

    #[test]
    fn sdp_timeout_is_connection_timeout_minus_margin() {
        let cfg = HostConfig::default();
        assert_eq!(cfg.sdp_timeout(), Duration::from_millis(10_500));
    }

    #[test]
    fn builder_overrides_take_effect() {
        let cfg = HostConfig::new().with_device_table_size(4).with_inquiry_interval_n(1);
        assert_eq!(cfg.device_table_size(), 4);
        assert_eq!(cfg.inquiry_interval(), Duration::from_millis(1280));
    }
}
