use neli::{
    consts::{nl::NlmF, socket::NlFamily},
    genl::{Genlmsghdr, Nlattr},
    nl::{NlPayload, Nlmsghdr},
    socket::NlSocketHandle,
    types::GenlBuffer,
};

use wmediumd_core::DriverSink;
use wmediumd_proto::{
    hwsim::{HwsimAttr, HwsimCmd, FAMILY_NAME, PROTOCOL_VERSION},
    Cookie, FrameCodec, RawAttr, TxFrameRequest,
};
use wmediumd_util::{Address, AttemptLog, Error, Result};

/// Bidirectional channel to the host `mac80211_hwsim` driver.
///
/// All sends and receives happen on whichever thread owns this value;
/// spec §5 requires that to be the single event-loop thread, so
/// `DriverLink` does not attempt to be `Sync`.
pub struct DriverLink {
    socket: NlSocketHandle,
    family_id: u16,
}

impl DriverLink {
    /// Opens a generic-netlink socket and resolves the `mac80211_hwsim`
    /// family. Returns [`Error::DriverUnavailable`] if either step fails,
    /// which is fatal at startup (spec §7).
    pub fn open() -> Result<Self> {
        let mut socket = NlSocketHandle::connect(NlFamily::Generic, None, &[])
            .map_err(|e| Error::DriverUnavailable(format!("failed to open netlink socket: {e}")))?;
        let family_id = socket
            .resolve_genl_family(FAMILY_NAME)
            .map_err(|e| Error::DriverUnavailable(format!("{FAMILY_NAME} family not registered: {e}")))?;

        Ok(Self { socket, family_id })
    }

    /// Sends the one-shot `REGISTER` command. Failure is fatal (spec
    /// §4.5): without registration the driver never hands us a frame.
    pub fn register(&mut self) -> Result<()> {
        self.send(HwsimCmd::Register, FrameCodec::encode_register())
            .map_err(|e| Error::DriverUnavailable(format!("REGISTER failed: {e}")))
    }

    /// Blocks until the next `TX_FRAME` request arrives and decodes it.
    /// Malformed messages are reported as [`Error::Codec`] so the caller
    /// can log, bump the dropped-request counter, and keep looping (spec
    /// §4.4, §7) rather than tearing down the link.
    pub fn recv(&mut self) -> Result<TxFrameRequest> {
        let msg: Nlmsghdr<u16, Genlmsghdr<HwsimCmd, HwsimAttr>> = self
            .socket
            .recv()
            .map_err(|e| Error::Codec(format!("netlink recv failed: {e}")))?
            .ok_or_else(|| Error::Codec("netlink socket closed".into()))?;

        let genl = msg
            .get_payload()
            .ok_or_else(|| Error::Codec("empty generic netlink payload".into()))?;

        if *genl.cmd() != HwsimCmd::Frame {
            return Err(Error::Codec(format!("unexpected command {:?}", genl.cmd())));
        }

        let attrs = genl
            .attrs()
            .iter()
            .map(|nla| RawAttr {
                attr_type: *nla.nla_type().type_(),
                payload: nla.payload().as_ref().to_vec(),
            })
            .collect::<Vec<_>>();

        FrameCodec::decode_tx_frame(&attrs, genl.version() as u32)
    }

    fn send(&mut self, cmd: HwsimCmd, attrs: Vec<RawAttr>) -> std::result::Result<(), neli::err::NlError> {
        let mut buffer = GenlBuffer::new();
        for attr in attrs {
            buffer.push(Nlattr::new(None, false, false, attr.attr_type, attr.payload)?);
        }

        let genl = Genlmsghdr::new(cmd, PROTOCOL_VERSION as u8, buffer);
        let msg = Nlmsghdr::new(
            None,
            self.family_id,
            NlmF::new(&[NlmF::Request]),
            None,
            None,
            NlPayload::Payload(genl),
        );
        self.socket.send(msg)?;
        Ok(())
    }
}

impl DriverSink for DriverLink {
    fn send_rx(&mut self, dst: Address, frame: &[u8], rate_idx: i32, signal: i32) {
        let attrs = FrameCodec::encode_rx_frame(dst, frame, rate_idx, signal);
        if let Err(e) = self.send(HwsimCmd::Frame, attrs) {
            log::warn!("RX_FRAME to {dst} dropped: {e}");
        }
    }

    fn send_status(
        &mut self,
        src: Address,
        frame: &[u8],
        flags: u32,
        signal: i32,
        log_entries: &AttemptLog,
        cookie: &Cookie,
    ) {
        let attrs = FrameCodec::encode_tx_status(src, frame, flags, signal, log_entries, cookie);
        if let Err(e) = self.send(HwsimCmd::TxInfoFrame, attrs) {
            log::warn!("TX_STATUS for {src} dropped: {e}");
        }
    }
}
