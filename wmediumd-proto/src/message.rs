use wmediumd_util::{Address, RateRetrySchedule};

use crate::hwsim::HwsimAttr;

/// One decoded attribute, transport-agnostic: whatever carried the bytes
/// off the wire (netlink, in `wmediumd-netlink`'s case) has already been
/// unwrapped down to a `(type, payload)` pair by the time it reaches this
/// crate.
#[derive(Debug, Clone)]
pub struct RawAttr {
    pub attr_type: HwsimAttr,
    pub payload: Vec<u8>,
}

/// The fixed-size opaque blob the driver requires echoed back verbatim
/// in `TX_STATUS`. Its contents are never interpreted, only carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie(pub Vec<u8>);

/// A decoded inbound `TX_FRAME` request.
#[derive(Debug, Clone)]
pub struct TxFrameRequest {
    pub src: Address,
    pub frame: Vec<u8>,
    pub flags: u32,
    pub schedule: RateRetrySchedule,
    pub cookie: Cookie,
}
