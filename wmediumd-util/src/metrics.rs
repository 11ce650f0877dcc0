use std::fmt;

/// Process-wide running counters used for the status line.
///
/// Mutated only by the single event-loop thread (see spec §5); no
/// synchronization is required. The event loop owns one instance and
/// passes it by `&mut` into [`wmediumd_core`]'s pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct Metrics {
    /// `TX_FRAME` requests accepted by the codec.
    pub received: u64,
    /// `RX_FRAME` copies successfully handed to `DriverLink::send_rx`.
    pub sent: u64,
    /// Attempts where the random draw lost the link.
    pub dropped: u64,
    /// Frames whose `TX_STATUS` carried the ACK bit.
    pub acked: u64,
    /// Inbound driver messages the codec rejected (missing field, bad
    /// version) before they ever reached the pipeline.
    pub dropped_requests: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "received: {} tried: {} sent: {} acked: {}",
            self.received,
            self.dropped + self.sent,
            self.sent,
            self.acked
        )
    }
}
