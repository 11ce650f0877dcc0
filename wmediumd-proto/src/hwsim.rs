//! Command and attribute vocabulary of the `mac80211_hwsim` generic
//! netlink (genl) family, as exercised by this daemon.
//!
//! These constants are only defined in the kernel driver's header; there
//! is no published userspace crate for them, so — like the handful of
//! other genl-based tools that talk to this driver — we declare our own
//! copy here, scoped to the commands and attributes this daemon actually
//! uses.
use neli::neli_enum;

/// Name of the generic netlink family registered by `mac80211_hwsim`.
pub const FAMILY_NAME: &str = "MAC80211_HWSIM";

/// The protocol version this daemon speaks. Carried in every message;
/// mismatches are rejected by [`crate::codec::FrameCodec`].
pub const PROTOCOL_VERSION: u32 = 1;

#[neli_enum(serialized_type = "u8")]
pub enum HwsimCmd {
    Unspec = 0,
    /// Register to receive every frame broadcast by any hwsim radio.
    Register = 1,
    /// A frame delivered to, or broadcast from, a radio.
    Frame = 2,
    /// Transmission status report for a previously sent frame.
    TxInfoFrame = 3,
}
impl neli::consts::genl::Cmd for HwsimCmd {}

#[neli_enum(serialized_type = "u16")]
pub enum HwsimAttr {
    Unspec = 0,
    /// MAC address of the radio a frame is delivered to.
    AddrReceiver = 1,
    /// MAC address of the radio a frame originated from.
    AddrTransmitter = 2,
    /// The frame payload.
    Frame = 3,
    /// Opaque per-frame control flags, echoed back in `TX_STATUS`.
    Flags = 4,
    /// Rate index the receiver is told the frame arrived at.
    RxRate = 5,
    /// Signal strength (dBm) reported alongside a frame.
    Signal = 6,
    /// The rate-retry schedule / attempt log, depending on direction.
    TxInfo = 7,
    /// Opaque callback cookie, echoed back verbatim in `TX_STATUS`.
    Cookie = 8,
}
impl neli::consts::genl::NlAttrType for HwsimAttr {}

/// Bit set by this daemon on the outbound `TX_STATUS` once a unicast has
/// been acknowledged (spec §4.6's "ACK bit"): matches
/// `IEEE80211_TX_STAT_ACK` from the mac80211 header this driver mirrors.
/// `Flags` (see [`HwsimAttr::Flags`]) is otherwise an opaque word this
/// daemon only forwards, per spec §4.4.
pub const STAT_ACK_BIT: u32 = 1 << 2;
