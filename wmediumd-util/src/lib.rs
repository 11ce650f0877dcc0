//! Generic utilities the other `wmediumd-rs` crates depend upon but that
//! are not themselves part of the simulated-medium protocol.
//!
//! The main purpose of this crate is to keep the address value type, the
//! shared error kinds, and the process-wide metrics counters in one place
//! so `wmediumd-proto`, `wmediumd-netlink`, and `wmediumd-core` agree on
//! them without depending on each other.

mod address;
mod error;
mod metrics;
mod schedule;

pub use address::Address;
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use schedule::{
    AttemptLog, AttemptLogEntry, RateRetrySchedule, ScheduleEntry, MAX_RATES_PER_TX,
    RATE_IDX_INVALID,
};
