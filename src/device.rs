//! Per-connection state: the [`Connection`] record, the device table that
//! owns them, and the seat-allocation helper used for LED indication.

use std::collections::VecDeque;

use bitflags::bitflags;

use crate::bt::{Addr, Cid, ClassOfDevice, ConnHandle};
use crate::config::HostConfig;
use crate::error::{Error, Result};
use crate::gamepad::VirtualGamepad;
use crate::parser::ParserState;
use crate::vendor::ControllerType;

/// Connection lifecycle state, §3's total order from discovery to ready.
///
/// Declaration order is the linear order spec.md defines; `PartialOrd`/`Ord`
/// are derived from it so FSM monotonicity (testable property 4) can be
/// checked as `observed.windows(2).all(|w| w[0] <= w[1])`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum ConnectionState {
    DeviceDiscovered,
    RemoteNameRequest,
    RemoteNameInquired,
    RemoteNameFetched,
    L2capControlConnectionRequested,
    L2capControlConnected,
    L2capInterruptConnectionRequested,
    L2capInterruptConnected,
    SdpHidDescriptorRequested,
    SdpHidDescriptorFetched,
    SdpVendorRequested,
    SdpVendorFetched,
    DeviceReady,
}

bitflags! {
    /// Per-connection flags tracked alongside `state`.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct ConnectionFlags: u16 {
        /// Peripheral-initiated (entered partway through the state order).
        const INCOMING       = 1 << 0;
        const CONNECTED      = 1 << 1;
        const HAS_COD        = 1 << 2;
        const HAS_NAME       = 1 << 3;
        const HAS_DESCRIPTOR = 1 << 4;
        const HAS_VID        = 1 << 5;
        const HAS_PID        = 1 << 6;
        const HAS_TYPE       = 1 << 7;
        /// An SDP query issued before the control channel opens (the
        /// DualShock-4-v1 workaround) is in flight; its completion must
        /// trigger `gap_connect` rather than the post-connect SDP fetch.
        const SDP_PRECONNECT_PENDING = 1 << 8;
    }
}

/// Logical LED-indicator slot assigned at `DeviceReady` and freed at
/// disconnect. Testable property 6 requires no two connected devices ever
/// share one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Seat {
    A,
    B,
    C,
    D,
}

impl Seat {
    const ALL: [Seat; 4] = [Seat::A, Seat::B, Seat::C, Seat::D];

    /// The LED bitmask convention used by `set_player_leds` hooks: bit N
    /// set for seat N.
    #[must_use]
    pub const fn led_bit(self) -> u8 {
        1 << match self {
            Seat::A => 0,
            Seat::B => 1,
            Seat::C => 2,
            Seat::D => 3,
        }
    }
}

/// Name prefix that identifies a DualShock 3 clone lacking SDP support; the
/// FSM synthesizes `vid=0x054C, pid=0x0268` and skips SDP entirely when a
/// remote name starts with this.
pub const PS3_CLONE_NAME_PREFIX: &str = "PLAYSTATION(R)3";

/// Bluetooth name of first-generation DualShock 4 controllers, which must
/// take the "SDP before connect" branch of the outgoing FSM or the control
/// channel opens but no reports are ever sent.
pub const DS4_V1_NAME: &str = "Wireless Controller";

/// Per-connection record: address, transport state, classification, parser
/// scratch, outgoing queue and normalized snapshot.
#[derive(Debug)]
pub struct Connection {
    pub remote_addr: Addr,
    pub connection_handle: ConnHandle,
    pub class_of_device: ClassOfDevice,
    pub vid: u16,
    pub pid: u16,
    /// Remote device name, truncated to 240 bytes per spec.md §3.
    pub name: String,
    /// Raw HID report descriptor, truncated to 512 bytes per spec.md §3.
    pub hid_descriptor: Vec<u8>,
    pub control_cid: Cid,
    pub interrupt_cid: Cid,
    pub state: ConnectionState,
    pub flags: ConnectionFlags,
    /// DualShock 4 v1 workaround: query SDP before opening L2CAP.
    pub sdp_query_before_connect: bool,
    /// Set when an SDP query times out; the next inbound interrupt report
    /// is handed to `vendor::classify_by_packet` instead.
    pub try_heuristics: bool,
    pub controller_type: ControllerType,
    pub parser_scratch: ParserState,
    pub virtual_gamepad: VirtualGamepad,
    pub seat: Option<Seat>,
    outgoing_queue: VecDeque<(Cid, Vec<u8>)>,
    outgoing_queue_depth: usize,
    /// Opaque storage for platform-adapter use (e.g. GPIO pin assignment).
    pub platform_data: [u8; 16],
    /// Accumulates `SdpQueryAttributeByte` bytes for the attribute currently
    /// in flight; parsed and cleared when the query completes.
    pub sdp_scratch: Vec<u8>,
}

const MAX_NAME_LEN: usize = 240;
const MAX_DESCRIPTOR_LEN: usize = 512;

impl Connection {
    /// Creates a fresh, unclassified connection record for `addr`,
    /// discovered via GAP inquiry or an incoming HCI connection request.
    #[must_use]
    pub fn new(addr: Addr, outgoing_queue_depth: usize) -> Self {
        Self {
            remote_addr: addr,
            connection_handle: ConnHandle::INVALID,
            class_of_device: ClassOfDevice::default(),
            vid: 0,
            pid: 0,
            name: String::new(),
            hid_descriptor: Vec::new(),
            control_cid: Cid::NONE,
            interrupt_cid: Cid::NONE,
            state: ConnectionState::DeviceDiscovered,
            flags: ConnectionFlags::empty(),
            sdp_query_before_connect: false,
            try_heuristics: false,
            controller_type: ControllerType::Unknown,
            parser_scratch: ParserState::None,
            virtual_gamepad: VirtualGamepad::new(),
            seat: None,
            outgoing_queue: VecDeque::new(),
            outgoing_queue_depth,
            platform_data: [0; 16],
            sdp_scratch: Vec::new(),
        }
    }

    /// Returns whether this slot holds a live connection (non-zero
    /// address). Used by [`DeviceTable`] to find free slots.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.remote_addr.is_zero()
    }

    /// Sets the remote name, truncating to the 240-byte limit, and flags
    /// the PS3-clone / DualShock-4-v1 name quirks for the FSM to consult.
    pub fn set_name(&mut self, mut name: String) {
        name.truncate(MAX_NAME_LEN);
        self.name = name;
        self.flags |= ConnectionFlags::HAS_NAME;
    }

    /// Returns whether the stored name marks this as an SDP-less
    /// DualShock-3 clone.
    #[must_use]
    pub fn is_ps3_clone(&self) -> bool {
        self.name.starts_with(PS3_CLONE_NAME_PREFIX)
    }

    /// Returns whether the stored name marks this as a DualShock-4-v1-style
    /// pad that must take the "SDP before connect" branch.
    #[must_use]
    pub fn needs_sdp_before_connect(&self) -> bool {
        self.name == DS4_V1_NAME
    }

    /// Sets the HID report descriptor, truncating to the 512-byte limit.
    pub fn set_hid_descriptor(&mut self, mut descriptor: Vec<u8>) {
        descriptor.truncate(MAX_DESCRIPTOR_LEN);
        self.hid_descriptor = descriptor;
        self.flags |= ConnectionFlags::HAS_DESCRIPTOR;
    }

    /// Sets VID/PID from an SDP PnP record (or a classification heuristic),
    /// classifies the controller type, and assigns its parser scratch.
    /// Classification is one-shot: calling this again on an
    /// already-classified connection is the "reassignment is illegal"
    /// case spec.md §3 describes, so callers must only reach this once
    /// per connection (or via `reset()`, which starts a fresh slot).
    pub fn set_vid_pid(&mut self, vid: u16, pid: u16) {
        self.vid = vid;
        self.pid = pid;
        self.flags |= ConnectionFlags::HAS_VID | ConnectionFlags::HAS_PID;
        let mut controller_type = crate::vendor::classify_by_vid_pid(vid, pid);
        if controller_type == ControllerType::Unknown && self.flags.contains(ConnectionFlags::HAS_COD) {
            controller_type = crate::vendor::classify_fallback(self.class_of_device);
        }
        self.controller_type = controller_type;
        self.flags |= ConnectionFlags::HAS_TYPE;
        self.parser_scratch = crate::parser::initial_state(self.controller_type, vid, pid);
    }

    /// Enqueues an outgoing report on `cid`. Returns an error (and drops
    /// the newest entry) if the per-device queue is already at capacity.
    pub fn enqueue_outgoing(&mut self, cid: Cid, payload: Vec<u8>) -> Result<()> {
        if self.outgoing_queue.len() >= self.outgoing_queue_depth {
            return Err(Error::OutgoingQueueFull(self.remote_addr));
        }
        self.outgoing_queue.push_back((cid, payload));
        Ok(())
    }

    /// Pops the next queued outgoing report for `cid`, if any is at the
    /// front for that channel's turn. Callers drain one entry per
    /// `CanSendNow` callback per spec.md §4.6.
    pub fn pop_outgoing(&mut self, cid: Cid) -> Option<Vec<u8>> {
        let idx = self.outgoing_queue.iter().position(|(c, _)| *c == cid)?;
        self.outgoing_queue.remove(idx).map(|(_, payload)| payload)
    }

    /// Returns whether any outgoing report remains queued for `cid`.
    #[must_use]
    pub fn has_pending_outgoing(&self, cid: Cid) -> bool {
        self.outgoing_queue.iter().any(|(c, _)| *c == cid)
    }

    /// Resets this slot to the "free" state, releasing its seat. Called
    /// once the last L2CAP channel closes and no pending state depends on
    /// the slot (spec.md §3 Ownership).
    pub fn reset(&mut self) {
        let depth = self.outgoing_queue_depth;
        *self = Self::new(Addr::ZERO, depth);
    }
}

/// Fixed-size table of connections; the sole mutable shared structure the
/// event loop touches. Zero-address slots are free.
#[derive(Debug)]
pub struct DeviceTable {
    slots: Vec<Connection>,
}

impl DeviceTable {
    /// Creates a table with `config.device_table_size()` slots, all free.
    #[must_use]
    pub fn new(config: &HostConfig) -> Self {
        let depth = config.outgoing_queue_depth();
        let slots =
            (0..config.device_table_size()).map(|_| Connection::new(Addr::ZERO, depth)).collect();
        Self { slots }
    }

    /// Allocates a free slot for `addr`, returning its index, or
    /// [`Error::DeviceTableFull`] if none remain.
    pub fn allocate(&mut self, addr: Addr) -> Result<usize> {
        if let Some(idx) = self.find_index(addr) {
            return Ok(idx);
        }
        let depth = self.slots.first().map_or(8, |c| c.outgoing_queue_depth);
        let idx = self
            .slots
            .iter()
            .position(Connection::is_free)
            .ok_or(Error::DeviceTableFull { capacity: self.slots.len() })?;
        self.slots[idx] = Connection::new(addr, depth);
        Ok(idx)
    }

    /// Finds the slot index for `addr`, if connected.
    #[must_use]
    pub fn find_index(&self, addr: Addr) -> Option<usize> {
        self.slots.iter().position(|c| !c.is_free() && c.remote_addr == addr)
    }

    /// Finds the slot index for a connection handle.
    #[must_use]
    pub fn find_by_handle(&self, handle: ConnHandle) -> Option<usize> {
        self.slots.iter().position(|c| !c.is_free() && c.connection_handle == handle)
    }

    /// Finds the slot index owning `cid` (control or interrupt).
    #[must_use]
    pub fn find_by_cid(&self, cid: Cid) -> Option<usize> {
        self.slots
            .iter()
            .position(|c| !c.is_free() && (c.control_cid == cid || c.interrupt_cid == cid))
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Connection> {
        self.slots.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Connection> {
        self.slots.get_mut(idx)
    }

    /// Returns every connected slot.
    pub fn connected(&self) -> impl Iterator<Item = &Connection> {
        self.slots.iter().filter(|c| !c.is_free())
    }

    /// Frees the slot at `idx`, releasing its seat.
    pub fn free(&mut self, idx: usize) {
        if let Some(c) = self.slots.get_mut(idx) {
            c.reset();
        }
    }

    /// Allocates the lowest free seat not already held by a connected
    /// device, and assigns it to the slot at `idx`.
    pub fn allocate_seat(&mut self, idx: usize) -> Result<Seat> {
        let taken: Vec<Seat> = self.slots.iter().filter_map(|c| c.seat).collect();
        let seat = Seat::ALL
            .into_iter()
            .find(|s| !taken.contains(s))
            .ok_or(Error::NoFreeSeat)?;
        if let Some(c) = self.slots.get_mut(idx) {
            c.seat = Some(seat);
        }
        Ok(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> HostConfig {
        HostConfig::new().with_device_table_size(2)
    }

    #[test]
    fn allocate_reuses_existing_slot_for_same_addr() {
        let mut table = DeviceTable::new(&cfg());
        let addr = Addr([1, 0, 0, 0, 0, 0]);
        let a = table.allocate(addr).unwrap();
        let b = table.allocate(addr).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn allocate_errors_when_table_full() {
        let mut table = DeviceTable::new(&cfg());
        table.allocate(Addr([1, 0, 0, 0, 0, 0])).unwrap();
        table.allocate(Addr([2, 0, 0, 0, 0, 0])).unwrap();
        let err = table.allocate(Addr([3, 0, 0, 0, 0, 0])).unwrap_err();
        assert!(matches!(err, Error::DeviceTableFull { capacity: 2 }));
    }

    #[test]
    fn seat_allocation_is_unique_across_connections() {
        let mut table = DeviceTable::new(&HostConfig::new().with_device_table_size(4));
        let mut seats = Vec::new();
        for i in 0..4u8 {
            let idx = table.allocate(Addr([i, 0, 0, 0, 0, 0])).unwrap();
            seats.push(table.allocate_seat(idx).unwrap());
        }
        let unique: std::collections::HashSet<_> = seats.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn free_releases_seat_and_slot() {
        let mut table = DeviceTable::new(&cfg());
        let idx = table.allocate(Addr([9, 0, 0, 0, 0, 0])).unwrap();
        table.allocate_seat(idx).unwrap();
        table.free(idx);
        assert!(table.get(idx).unwrap().is_free());
        assert!(table.get(idx).unwrap().seat.is_none());
    }

    #[test]
    fn outgoing_queue_drops_newest_when_full() {
        let mut conn = Connection::new(Addr([1, 0, 0, 0, 0, 0]), 1);
        conn.enqueue_outgoing(Cid(1), vec![1]).unwrap();
        let err = conn.enqueue_outgoing(Cid(1), vec![2]).unwrap_err();
        assert!(matches!(err, Error::OutgoingQueueFull(_)));
    }

    #[test]
    fn state_order_matches_spec_linear_order() {
        assert!(ConnectionState::DeviceDiscovered < ConnectionState::L2capControlConnected);
        assert!(ConnectionState::L2capControlConnected < ConnectionState::DeviceReady);
    }

    #[test]
    fn name_quirks_detected() {
        let mut conn = Connection::new(Addr([1, 0, 0, 0, 0, 0]), 8);
        conn.set_name("PLAYSTATION(R)3 Controller".to_string());
        assert!(conn.is_ps3_clone());

        let mut conn2 = Connection::new(Addr([2, 0, 0, 0, 0, 0]), 8);
        conn2.set_name("Wireless Controller".to_string());
        assert!(conn2.needs_sdp_before_connect());
    }
}
