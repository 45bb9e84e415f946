//! Connection finite state machine (spec.md §4.7).
//!
//! [`Connection::state`](crate::device::Connection) only ever advances along
//! the linear order [`ConnectionState`] declares (testable property 4); the
//! functions here are the sole place that writes it. [`Dispatcher`](crate::dispatcher::Dispatcher)
//! owns the [`SdpArbiter`] (the single global SDP query slot, spec.md §4.7
//! "SDP serialization") and calls into this module once per relevant
//! [`crate::bt::Event`].

use std::collections::VecDeque;

use crate::bt::{Addr, ClassOfDevice, HciTransport, Psm, SdpAttribute};
use crate::device::{Connection, ConnectionFlags, ConnectionState};
use crate::error::{Error, Result};
use crate::platform::Platform;

/// Owns the single global SDP query slot. Only one device may have an SDP
/// query in flight at a time; others queue and are serviced in FIFO order as
/// the holder releases.
#[derive(Debug, Default)]
pub struct SdpArbiter {
    current: Option<Addr>,
    waiters: VecDeque<Addr>,
}

impl SdpArbiter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The device currently holding the SDP slot, if any.
    #[must_use]
    pub fn current(&self) -> Option<Addr> {
        self.current
    }

    /// Attempts to grab the slot for `addr`. Returns `true` if `addr` now
    /// holds it (immediately, or because it already did); otherwise `addr`
    /// is enqueued to try again once the current holder releases.
    pub fn acquire(&mut self, addr: Addr) -> bool {
        match self.current {
            None => {
                self.current = Some(addr);
                self.waiters.retain(|&a| a != addr);
                true
            }
            Some(held) if held == addr => true,
            Some(_) => {
                if !self.waiters.contains(&addr) {
                    self.waiters.push_back(addr);
                }
                false
            }
        }
    }

    /// Releases the slot if `addr` holds it, returning (without removing)
    /// the FIFO's next waiter, if any. The waiter stays queued until
    /// something actually calls [`SdpArbiter::acquire`] for it — the
    /// released device may immediately reacquire the slot for itself to
    /// continue its own SDP sequence (HID descriptor then vendor record),
    /// in which case the waiter must keep waiting. No-op if `addr` is not
    /// the holder.
    pub fn release(&mut self, addr: Addr) -> Option<Addr> {
        if self.current != Some(addr) {
            return None;
        }
        self.current = None;
        self.waiters.front().copied()
    }

    /// Drops `addr` from the wait queue, e.g. on disconnect.
    pub fn forget(&mut self, addr: Addr) {
        self.waiters.retain(|&a| a != addr);
        if self.current == Some(addr) {
            self.current = None;
        }
    }
}

/// Issues the next queued SDP attribute query for `conn`'s current state,
/// acquiring the arbiter slot first. A no-op if the slot is held elsewhere
/// (the arbiter will hand it over on release). `pub(crate)` so the
/// dispatcher can call it directly when granting the slot to a FIFO waiter.
pub(crate) fn request_next_sdp_attribute(
    conn: &mut Connection,
    transport: &dyn HciTransport,
    sdp: &mut SdpArbiter,
) {
    if !sdp.acquire(conn.remote_addr) {
        return;
    }
    conn.sdp_scratch.clear();
    let attribute = if conn.flags.contains(ConnectionFlags::SDP_PRECONNECT_PENDING) {
        SdpAttribute::PnpVendorProduct
    } else {
        match conn.state {
            ConnectionState::SdpHidDescriptorRequested => SdpAttribute::HidDescriptor,
            ConnectionState::SdpVendorRequested => SdpAttribute::PnpVendorProduct,
            _ => return,
        }
    };
    transport.sdp_query(conn.remote_addr, attribute);
}

/// Begins the outgoing (host-initiated) flow for a freshly discovered
/// device, per spec.md §4.7. `cod`/`name` come from the GAP inquiry result
/// that triggered discovery.
pub fn begin_outgoing(
    conn: &mut Connection,
    cod: ClassOfDevice,
    name: Option<String>,
    transport: &dyn HciTransport,
    sdp: &mut SdpArbiter,
) {
    conn.class_of_device = cod;
    conn.flags |= ConnectionFlags::HAS_COD;
    if let Some(name) = name {
        conn.set_name(name);
    }

    if conn.needs_sdp_before_connect() {
        conn.sdp_query_before_connect = true;
        conn.flags |= ConnectionFlags::SDP_PRECONNECT_PENDING;
        if sdp.acquire(conn.remote_addr) {
            conn.sdp_scratch.clear();
            transport.sdp_query(conn.remote_addr, SdpAttribute::PnpVendorProduct);
        }
        return;
    }
    connect(conn, transport);
}

fn connect(conn: &mut Connection, transport: &dyn HciTransport) {
    transport.connect(conn.remote_addr);
    conn.state = ConnectionState::L2capControlConnectionRequested;
}

/// Accepts an incoming L2CAP connection request, beginning the incoming
/// flow. Caller (the dispatcher) has already checked `accept_incoming` and
/// device table capacity.
pub fn begin_incoming(conn: &mut Connection, cod: ClassOfDevice) {
    conn.flags |= ConnectionFlags::INCOMING;
    conn.class_of_device = cod;
    conn.flags |= ConnectionFlags::HAS_COD;
}

/// Handles an L2CAP channel finishing its open handshake (success or
/// error), advancing `state` along both flows.
pub fn on_l2cap_channel_opened(
    conn: &mut Connection,
    psm: Psm,
    status: std::result::Result<(), String>,
    transport: &dyn HciTransport,
) -> Result<()> {
    if let Err(reason) = status {
        return Err(Error::L2capOpenFailed { addr: conn.remote_addr, reason });
    }
    match psm {
        Psm::HidControl => {
            conn.state = ConnectionState::L2capControlConnected;
            // Incoming devices open the interrupt channel toward us on
            // their own initiative; only the outgoing flow requests it.
            if !conn.flags.contains(ConnectionFlags::INCOMING) {
                transport.l2cap_connect(conn.remote_addr, Psm::HidInterrupt);
                conn.state = ConnectionState::L2capInterruptConnectionRequested;
            }
        }
        Psm::HidInterrupt => {
            conn.state = ConnectionState::L2capInterruptConnected;
            if conn.flags.contains(ConnectionFlags::INCOMING) {
                transport.remote_name_request(conn.remote_addr);
                conn.state = ConnectionState::RemoteNameRequest;
            } else {
                conn.state = ConnectionState::SdpHidDescriptorRequested;
            }
        }
    }
    Ok(())
}

/// Handles the remote-name query completing, relevant only to the incoming
/// flow (spec.md §4.7's `RemoteNameFetched` step). Applies the
/// PlayStation(R)3-clone shortcut: such devices skip SDP entirely.
pub fn on_remote_name_complete(
    conn: &mut Connection,
    name: Option<String>,
    transport: &dyn HciTransport,
    sdp: &mut SdpArbiter,
) {
    conn.state = ConnectionState::RemoteNameInquired;
    if let Some(name) = name {
        conn.set_name(name);
    }
    conn.state = ConnectionState::RemoteNameFetched;

    if conn.is_ps3_clone() {
        conn.set_vid_pid(0x054C, 0x0268);
        conn.state = ConnectionState::DeviceReady;
        return;
    }
    conn.state = ConnectionState::SdpHidDescriptorRequested;
    request_next_sdp_attribute(conn, transport, sdp);
}

/// Accumulates one byte of an in-flight SDP attribute response.
pub fn on_sdp_attribute_byte(conn: &mut Connection, byte: u8) {
    conn.sdp_scratch.push(byte);
}

fn parse_pnp_record(bytes: &[u8]) -> Option<(u16, u16)> {
    if bytes.len() < 4 {
        return None;
    }
    let vid = u16::from_be_bytes([bytes[0], bytes[1]]);
    let pid = u16::from_be_bytes([bytes[2], bytes[3]]);
    Some((vid, pid))
}

/// Handles an SDP query completing (success, failure, or — via the
/// dispatcher's timer — timeout). Drives the pre-connect probe, the
/// HID-descriptor fetch, and the vendor (PnP) fetch in sequence. Returns
/// the FIFO's next waiter address if the slot is now truly free (the
/// dispatcher must look that device up and call
/// [`request_next_sdp_attribute`] on it); returns `None` when `conn`
/// immediately reacquired the slot itself to continue its own sequence.
pub fn on_sdp_query_complete(
    conn: &mut Connection,
    status: std::result::Result<(), String>,
    transport: &dyn HciTransport,
    sdp: &mut SdpArbiter,
) -> Option<Addr> {
    let next_waiter = sdp.release(conn.remote_addr);

    if conn.flags.contains(ConnectionFlags::SDP_PRECONNECT_PENDING) {
        conn.flags.remove(ConnectionFlags::SDP_PRECONNECT_PENDING);
        // Best-effort probe: proceed to connect regardless of outcome.
        connect(conn, transport);
        return next_waiter;
    }
    if status.is_err() {
        conn.try_heuristics = true;
        return next_waiter;
    }
    match conn.state {
        ConnectionState::SdpHidDescriptorRequested => {
            conn.set_hid_descriptor(std::mem::take(&mut conn.sdp_scratch));
            conn.state = ConnectionState::SdpHidDescriptorFetched;
            conn.state = ConnectionState::SdpVendorRequested;
            request_next_sdp_attribute(conn, transport, sdp);
            None
        }
        ConnectionState::SdpVendorRequested => {
            if let Some((vid, pid)) = parse_pnp_record(&conn.sdp_scratch) {
                conn.set_vid_pid(vid, pid);
            }
            conn.sdp_scratch.clear();
            conn.state = ConnectionState::SdpVendorFetched;
            conn.state = ConnectionState::DeviceReady;
            next_waiter
        }
        _ => next_waiter,
    }
}

/// Marks `conn` as having timed out its SDP query (the dispatcher's SDP
/// timer fired); the next inbound interrupt report is handed to
/// `vendor::classify_by_packet` instead (spec.md §4.7, §7).
pub fn on_sdp_timeout(conn: &mut Connection, sdp: &mut SdpArbiter) -> Option<Addr> {
    conn.try_heuristics = true;
    conn.flags.remove(ConnectionFlags::SDP_PRECONNECT_PENDING);
    sdp.release(conn.remote_addr)
}

/// Ready-entry side effects (spec.md §4.7): platform `on_device_ready`,
/// parser `setup`, seat allocation, and the initial LED emission. Returns
/// the parser's handshake payload (if any) to send on the control channel,
/// and the allocated seat's LED payload.
pub fn enter_ready(
    conn: &mut Connection,
    seat: crate::device::Seat,
    platform: &mut dyn Platform,
) -> (Option<Vec<u8>>, Option<Vec<u8>>) {
    conn.seat = Some(seat);
    platform.on_device_ready(conn.remote_addr, conn.controller_type);
    let handshake = crate::parser::setup(conn);
    let led_report = crate::parser::set_player_leds(conn, seat.led_bit());
    (handshake, led_report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bt::{mock::MockTransport, Addr};

    fn new_conn() -> Connection {
        Connection::new(Addr([1, 0, 0, 0, 0, 0]), 8)
    }

    #[test]
    fn sdp_arbiter_serializes_across_devices() {
        let mut sdp = SdpArbiter::new();
        let a = Addr([1, 0, 0, 0, 0, 0]);
        let b = Addr([2, 0, 0, 0, 0, 0]);
        assert!(sdp.acquire(a));
        assert!(!sdp.acquire(b));
        assert_eq!(sdp.release(a), Some(b));
        assert!(sdp.acquire(b));
    }

    #[test]
    fn outgoing_flow_skips_sdp_preconnect_by_default() {
        let mut conn = new_conn();
        let mut sdp = SdpArbiter::new();
        let transport = MockTransport::new();
        begin_outgoing(&mut conn, ClassOfDevice::default(), Some("Pad".into()), &transport, &mut sdp);
        assert_eq!(conn.state, ConnectionState::L2capControlConnectionRequested);
        assert!(transport.calls.lock().iter().any(|c| matches!(c, crate::bt::mock::Call::Connect(_))));
    }

    #[test]
    fn ds4_v1_name_takes_sdp_preconnect_branch() {
        let mut conn = new_conn();
        let mut sdp = SdpArbiter::new();
        let transport = MockTransport::new();
        begin_outgoing(
            &mut conn,
            ClassOfDevice::default(),
            Some(crate::device::DS4_V1_NAME.to_string()),
            &transport,
            &mut sdp,
        );
        assert_eq!(conn.state, ConnectionState::DeviceDiscovered);
        assert!(conn.flags.contains(ConnectionFlags::SDP_PRECONNECT_PENDING));
        on_sdp_query_complete(&mut conn, Ok(()), &transport, &mut sdp);
        assert_eq!(conn.state, ConnectionState::L2capControlConnectionRequested);
        assert!(!conn.flags.contains(ConnectionFlags::SDP_PRECONNECT_PENDING));
    }

    #[test]
    fn ps3_clone_name_skips_sdp_entirely() {
        let mut conn = new_conn();
        conn.flags |= ConnectionFlags::INCOMING;
        let mut sdp = SdpArbiter::new();
        let transport = MockTransport::new();
        on_remote_name_complete(
            &mut conn,
            Some("PLAYSTATION(R)3 Controller".to_string()),
            &transport,
            &mut sdp,
        );
        assert_eq!(conn.state, ConnectionState::DeviceReady);
        assert_eq!(conn.vid, 0x054C);
        assert_eq!(conn.pid, 0x0268);
        assert!(transport.calls.lock().iter().all(|c| !matches!(c, crate::bt::mock::Call::SdpQuery(..))));
    }

    #[test]
    fn sdp_fetch_sequences_descriptor_then_vendor() {
        let mut conn = new_conn();
        conn.state = ConnectionState::SdpHidDescriptorRequested;
        let mut sdp = SdpArbiter::new();
        let transport = MockTransport::new();
        request_next_sdp_attribute(&mut conn, &transport, &mut sdp);
        conn.sdp_scratch = vec![1, 2, 3];
        on_sdp_query_complete(&mut conn, Ok(()), &transport, &mut sdp);
        assert_eq!(conn.state, ConnectionState::SdpVendorRequested);
        assert_eq!(conn.hid_descriptor, vec![1, 2, 3]);

        conn.sdp_scratch = vec![0x05, 0x4C, 0x02, 0x68];
        on_sdp_query_complete(&mut conn, Ok(()), &transport, &mut sdp);
        assert_eq!(conn.state, ConnectionState::DeviceReady);
        assert_eq!(conn.vid, 0x054C);
        assert_eq!(conn.pid, 0x0268);
    }

    #[test]
    fn sdp_timeout_sets_try_heuristics_and_releases_slot() {
        let mut conn = new_conn();
        let mut sdp = SdpArbiter::new();
        sdp.acquire(conn.remote_addr);
        on_sdp_timeout(&mut conn, &mut sdp);
        assert!(conn.try_heuristics);
        assert_eq!(sdp.current(), None);
    }

    #[test]
    fn state_sequence_is_monotonic_through_outgoing_flow() {
        let mut conn = new_conn();
        let mut sdp = SdpArbiter::new();
        let transport = MockTransport::new();
        let mut observed = vec![conn.state];
        begin_outgoing(&mut conn, ClassOfDevice::default(), Some("Pad".into()), &transport, &mut sdp);
        observed.push(conn.state);
        on_l2cap_channel_opened(&mut conn, Psm::HidControl, Ok(()), &transport).unwrap();
        observed.push(conn.state);
        on_l2cap_channel_opened(&mut conn, Psm::HidInterrupt, Ok(()), &transport).unwrap();
        observed.push(conn.state);
        assert!(observed.windows(2).all(|w| w[0] <= w[1]));
    }
}
