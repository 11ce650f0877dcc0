//! The `mac80211_hwsim` driver link: generic-netlink transport wiring
//! [`wmediumd_proto::FrameCodec`] onto a real socket.
//!
//! Everything socket-specific lives here so `wmediumd-core` and
//! `wmediumd-proto` stay testable without a `mac80211_hwsim` kernel
//! module loaded.

mod link;

pub use link::DriverLink;
