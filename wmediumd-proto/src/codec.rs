use wmediumd_util::{
    AttemptLog, AttemptLogEntry, Error, Result, RateRetrySchedule, ScheduleEntry, Address,
    MAX_RATES_PER_TX,
};

use crate::{
    hwsim::{HwsimAttr, PROTOCOL_VERSION},
    message::{Cookie, RawAttr, TxFrameRequest},
};

/// Size in bytes of the 802.11 MAC header prefix this daemon looks at.
/// `addr1` (the link-layer destination) lives at offset 4, 6 bytes wide.
const ADDR1_OFFSET: usize = 4;
const ADDR1_LEN: usize = 6;
const MIN_FRAME_LEN: usize = 24;

/// Wire width of one schedule / attempt-log entry: `i8` rate index,
/// `u8` attempt count, `u32` flags (little-endian).
const ENTRY_WIRE_LEN: usize = 6;

/// Reads and writes the driver's request/response message format and
/// extracts the 802.11 destination address (`addr1`) from a frame.
///
/// This codec never touches a socket: it operates on attributes already
/// unwrapped from whatever transport carried them (see
/// [`crate::message::RawAttr`]), so it can be exercised in tests without a
/// `mac80211_hwsim` driver present.
pub struct FrameCodec;

impl FrameCodec {
    /// Extracts `addr1` from a frame's MAC header.
    ///
    /// Returns `None` if the frame is shorter than the 24-byte header this
    /// daemon requires (spec §3: `Frame` is opaque, length `L >= 24`).
    pub fn addr1(frame: &[u8]) -> Option<Address> {
        if frame.len() < MIN_FRAME_LEN {
            return None;
        }
        let mut bytes = [0u8; 6];
        bytes.copy_from_slice(&frame[ADDR1_OFFSET..ADDR1_OFFSET + ADDR1_LEN]);
        Some(Address::new(bytes))
    }

    /// Decodes an inbound `TX_FRAME` request from its raw attributes.
    ///
    /// Any missing required attribute causes the message to be dropped
    /// (spec §4.4): the caller should log and increment the dropped-request
    /// counter rather than propagate this further.
    pub fn decode_tx_frame(attrs: &[RawAttr], version: u32) -> Result<TxFrameRequest> {
        if version != PROTOCOL_VERSION {
            return Err(Error::Codec(format!(
                "protocol version mismatch: got {version}, expected {PROTOCOL_VERSION}"
            )));
        }

        let src = find_addr(attrs, HwsimAttr::AddrTransmitter)
            .ok_or_else(|| Error::Codec("missing AddrTransmitter".into()))?;
        let frame = find_bytes(attrs, HwsimAttr::Frame)
            .ok_or_else(|| Error::Codec("missing Frame".into()))?
            .to_vec();
        if frame.len() < MIN_FRAME_LEN {
            return Err(Error::Codec(format!(
                "frame too short: {} bytes, need at least {MIN_FRAME_LEN}",
                frame.len()
            )));
        }
        let flags = find_u32(attrs, HwsimAttr::Flags)
            .ok_or_else(|| Error::Codec("missing Flags".into()))?;
        let schedule_bytes = find_bytes(attrs, HwsimAttr::TxInfo)
            .ok_or_else(|| Error::Codec("missing TxInfo".into()))?;
        let schedule = decode_schedule(schedule_bytes)?;
        let cookie = find_bytes(attrs, HwsimAttr::Cookie)
            .ok_or_else(|| Error::Codec("missing Cookie".into()))?
            .to_vec();

        Ok(TxFrameRequest {
            src,
            frame,
            flags,
            schedule,
            cookie: Cookie(cookie),
        })
    }

    /// Builds the attribute set for the one-shot `REGISTER` command.
    pub fn encode_register() -> Vec<RawAttr> {
        Vec::new()
    }

    /// Builds the attribute set for one `RX_FRAME` delivery.
    pub fn encode_rx_frame(
        dst: Address,
        frame: &[u8],
        rate_idx: i32,
        signal: i32,
    ) -> Vec<RawAttr> {
        vec![
            attr(HwsimAttr::AddrReceiver, dst.as_bytes().to_vec()),
            attr(HwsimAttr::Frame, frame.to_vec()),
            attr(HwsimAttr::RxRate, (rate_idx as u32).to_le_bytes().to_vec()),
            attr(HwsimAttr::Signal, (signal as u32).to_le_bytes().to_vec()),
        ]
    }

    /// Builds the attribute set for one `TX_STATUS` completion.
    pub fn encode_tx_status(
        src: Address,
        frame: &[u8],
        flags: u32,
        signal: i32,
        log: &AttemptLog,
        cookie: &Cookie,
    ) -> Vec<RawAttr> {
        vec![
            attr(HwsimAttr::AddrTransmitter, src.as_bytes().to_vec()),
            attr(HwsimAttr::Frame, frame.to_vec()),
            attr(HwsimAttr::Flags, flags.to_le_bytes().to_vec()),
            attr(HwsimAttr::Signal, (signal as u32).to_le_bytes().to_vec()),
            attr(HwsimAttr::TxInfo, encode_attempt_log(log)),
            attr(HwsimAttr::Cookie, cookie.0.clone()),
        ]
    }
}

fn attr(attr_type: HwsimAttr, payload: Vec<u8>) -> RawAttr {
    RawAttr { attr_type, payload }
}

fn find<'a>(attrs: &'a [RawAttr], ty: HwsimAttr) -> Option<&'a RawAttr> {
    attrs.iter().find(|a| a.attr_type == ty)
}

fn find_bytes<'a>(attrs: &'a [RawAttr], ty: HwsimAttr) -> Option<&'a [u8]> {
    find(attrs, ty).map(|a| a.payload.as_slice())
}

fn find_addr(attrs: &[RawAttr], ty: HwsimAttr) -> Option<Address> {
    let bytes = find_bytes(attrs, ty)?;
    if bytes.len() != 6 {
        return None;
    }
    let mut out = [0u8; 6];
    out.copy_from_slice(bytes);
    Some(Address::new(out))
}

fn find_u32(attrs: &[RawAttr], ty: HwsimAttr) -> Option<u32> {
    let bytes = find_bytes(attrs, ty)?;
    if bytes.len() != 4 {
        return None;
    }
    Some(u32::from_le_bytes(bytes.try_into().unwrap()))
}

fn decode_schedule(bytes: &[u8]) -> Result<RateRetrySchedule> {
    if bytes.len() != ENTRY_WIRE_LEN * MAX_RATES_PER_TX {
        return Err(Error::Codec(format!(
            "bad TxInfo length: {} bytes, expected {}",
            bytes.len(),
            ENTRY_WIRE_LEN * MAX_RATES_PER_TX
        )));
    }
    let mut entries = [ScheduleEntry::INVALID; MAX_RATES_PER_TX];
    for (i, chunk) in bytes.chunks_exact(ENTRY_WIRE_LEN).enumerate() {
        let rate_idx = chunk[0] as i8;
        let max_attempts = chunk[1];
        let flags = u32::from_le_bytes(chunk[2..6].try_into().unwrap());
        entries[i] = ScheduleEntry {
            rate_idx,
            flags,
            max_attempts,
        };
    }
    Ok(RateRetrySchedule::from_entries(entries))
}

fn encode_attempt_log(log: &AttemptLog) -> Vec<u8> {
    let mut out = Vec::with_capacity(ENTRY_WIRE_LEN * MAX_RATES_PER_TX);
    for entry in &log.entries {
        out.push(entry.rate_idx as u8);
        out.push(entry.attempts_used);
        out.extend_from_slice(&entry.flags.to_le_bytes());
    }
    out
}

/// Reconstructs the decoded form of an attempt-log entry from its wire
/// bytes; exposed for `wmediumd-netlink` when replaying logs in tests.
pub fn decode_attempt_log_entry(chunk: &[u8; ENTRY_WIRE_LEN]) -> AttemptLogEntry {
    AttemptLogEntry {
        rate_idx: chunk[0] as i8,
        attempts_used: chunk[1],
        flags: u32::from_le_bytes([chunk[2], chunk[3], chunk[4], chunk[5]]),
    }
}
