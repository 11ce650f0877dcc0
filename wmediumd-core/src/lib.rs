//! The transmission pipeline: the state machine that turns one inbound
//! `TX_FRAME` into zero or more `RX_FRAME` deliveries and exactly one
//! `TX_STATUS`, by iterating a driver-supplied rate-retry schedule against
//! a [`Topology`]'s per-link loss probabilities.
//!
//! This crate carries none of the ambient plumbing (no sockets, no config
//! file I/O, no CLI) — only the algorithm spec.md calls "the entire
//! interesting engineering".

mod medium;
mod random;
mod rate;
mod topology;

pub use medium::{DriverSink, Medium, ProcessOutcome};
pub use random::{FixedRandomSource, OsRandomSource, RandomSource};
pub use rate::RateModel;
pub use topology::{Topology, TopologyConfig};
