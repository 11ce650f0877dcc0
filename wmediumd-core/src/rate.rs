/// Fixed monotonic rate-index-to-signal-strength table (spec §3).
///
/// Purely a cosmetic mapping used to populate the `signal` field of
/// `RX_FRAME` and `TX_STATUS`; it plays no part in the loss decision.
const RATE_SIGNAL_DBM: [i32; 12] = [
    -80, -77, -74, -71, -69, -66, -64, -62, -59, -56, -53, -50,
];

/// Maps a rate index to a receive signal strength, in dBm.
pub struct RateModel;

impl RateModel {
    /// Looks up the signal strength for `rate_idx`. Out-of-range indices
    /// (including the `-1` sentinel) yield `0`, matching the original
    /// implementation's `get_signal_by_rate`.
    pub fn signal_for(rate_idx: i32) -> i32 {
        RATE_SIGNAL_DBM
            .get(usize::try_from(rate_idx).unwrap_or(usize::MAX))
            .copied()
            .unwrap_or(0)
    }
}
