//! Message types and codec for the `mac80211_hwsim` driver protocol.
//!
//! This crate knows the shape of the four message kinds that flow across
//! the driver link (`REGISTER`, `TX_FRAME`, `RX_FRAME`, `TX_STATUS`) and
//! how to read `addr1` out of a frame. It does not own a socket —
//! `wmediumd-netlink` does — so every function here takes and returns
//! plain values and can be exercised without a `mac80211_hwsim` driver
//! present.

pub mod codec;
pub mod hwsim;
pub mod message;

pub use codec::FrameCodec;
pub use hwsim::{HwsimAttr, HwsimCmd, FAMILY_NAME, PROTOCOL_VERSION};
pub use message::{Cookie, RawAttr, TxFrameRequest};
