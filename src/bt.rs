//! Bluetooth transport boundary.
//!
//! The raw HCI/L2CAP/SDP/GATT/SM stack is an external
//! collaborator. This module defines the plain data types the rest of the
//! crate speaks in, the inbound [`Event`] vocabulary,
//! and the [`HciTransport`] trait the dispatcher issues outbound requests
//! through. Production wiring against a real controller (USB/UART HCI) is
//! out of scope; [`mock`] is an in-memory implementation used by this
//! crate's own tests and by platform integrators driving the core
//! synchronously in integration tests.

use std::fmt;

/// 6-byte Bluetooth device address.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct Addr(pub [u8; 6]);

impl Addr {
    /// The all-zero address, used as a "no device" sentinel for free device
    /// table slots.
    pub const ZERO: Self = Self([0; 6]);

    /// Returns whether this is the zero sentinel.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        let [a, b, c, d, e, f] = self.0;
        (a as u16 + b as u16 + c as u16 + d as u16 + e as u16 + f as u16) == 0
    }

    /// Returns the address with its bytes reversed, used to derive the
    /// legacy Wii Remote pairing PIN.
    #[must_use]
    pub fn reversed(self) -> [u8; 6] {
        let mut out = self.0;
        out.reverse();
        out
    }
}

impl fmt::Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

/// HCI connection handle. `0xFFFF` is the invalid sentinel.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
#[repr(transparent)]
pub struct ConnHandle(pub u16);

impl ConnHandle {
    /// Invalid-sentinel handle.
    pub const INVALID: Self = Self(0xFFFF);

    /// Returns whether this handle is the invalid sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

/// L2CAP Protocol/Service Multiplexer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, num_enum::IntoPrimitive, num_enum::TryFromPrimitive)]
#[repr(u16)]
pub enum Psm {
    /// HID control channel: feature/output reports and slow control.
    HidControl = 0x0011,
    /// HID interrupt channel: input reports.
    HidInterrupt = 0x0013,
}

/// L2CAP Channel Identifier. `0` means "none".
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
#[repr(transparent)]
pub struct Cid(pub u16);

impl Cid {
    /// The "no channel" sentinel.
    pub const NONE: Self = Self(0);

    /// Returns whether this is a real, open channel id.
    #[must_use]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }
}

/// 24-bit Bluetooth Class of Device bitfield.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
#[repr(transparent)]
pub struct ClassOfDevice(pub u32);

impl ClassOfDevice {
    /// Major Device Class: Peripheral (keyboard/mouse/joystick...).
    pub const MAJOR_PERIPHERAL: u32 = 0x0500;
    /// Minor Device Class bit: pointing device.
    pub const MINOR_POINT_DEVICE: u32 = 0x0080;
    /// Minor Device Class bit: keyboard.
    pub const MINOR_KEYBOARD: u32 = 0x0040;
    /// Mask covering the Major Device Class field.
    const MAJOR_MASK: u32 = 0x1F00;
    /// Mask covering the Minor Device Class field (peripheral subtype bits).
    const MINOR_MASK: u32 = 0x00C0;

    /// Returns whether the Major Device Class field equals Peripheral.
    #[must_use]
    pub const fn is_peripheral(self) -> bool {
        self.0 & Self::MAJOR_MASK == Self::MAJOR_PERIPHERAL
    }

    /// Returns whether the Minor Device Class marks a pointing device.
    #[must_use]
    pub const fn is_pointing_device(self) -> bool {
        self.0 & Self::MINOR_MASK & Self::MINOR_POINT_DEVICE != 0
    }

    /// Returns whether the Minor Device Class marks a keyboard.
    #[must_use]
    pub const fn is_keyboard(self) -> bool {
        self.0 & Self::MINOR_MASK & Self::MINOR_KEYBOARD != 0
    }
}

/// Bluetooth Classic vs. BLE discovery/connect transport.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkType {
    /// Bluetooth Classic (BR/EDR), used by most gamepads in this fleet.
    BrEdr,
    /// Bluetooth Low Energy, used by e.g. Switch Joy-Cons, MFi pads.
    Le,
}

/// SDP attribute identifiers the core queries for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SdpAttribute {
    /// HID report descriptor (SDP attribute 0x0206 in the HID profile).
    HidDescriptor,
    /// PnP Vendor ID / Product ID record (SDP attribute 0x0201/0x0202).
    PnpVendorProduct,
}

/// The event vocabulary consumed by [`crate::dispatcher::Dispatcher`] from
/// the Bluetooth stack.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Event {
    // --- HCI ---
    /// Peripheral is requesting an incoming Classic connection.
    ConnectionRequest { addr: Addr, cod: ClassOfDevice },
    /// An outgoing or incoming ACL connection finished (success or error).
    ConnectionComplete {
        addr: Addr,
        handle: ConnHandle,
        status: Result<(), String>,
    },
    /// Legacy pairing PIN requested by the controller.
    PinCodeRequest { addr: Addr },
    /// Authentication (pairing) finished.
    AuthenticationComplete { handle: ConnHandle, status: Result<(), String> },
    /// Remote device name query finished.
    RemoteNameRequestComplete { addr: Addr, name: Option<String> },
    /// One inquiry-scan result.
    InquiryResult { addr: Addr, cod: ClassOfDevice, name: Option<String> },
    /// A queued HCI command completed.
    CommandComplete { opcode: u16, status: Result<(), String> },
    /// Link encryption state changed.
    EncryptionChange { handle: ConnHandle, encrypted: bool },
    /// ACL link disconnected.
    DisconnectionComplete { handle: ConnHandle, reason: String },

    // --- L2CAP ---
    /// Peer is opening an L2CAP channel toward us.
    L2capIncomingConnection { addr: Addr, psm: Psm, cid: Cid },
    /// An L2CAP channel (ours or theirs) finished opening.
    L2capChannelOpened { addr: Addr, psm: Psm, cid: Cid, status: Result<(), String> },
    /// An L2CAP channel closed.
    L2capChannelClosed { cid: Cid },
    /// The channel that previously reported "busy" can accept a send again.
    L2capCanSendNow { cid: Cid },
    /// Inbound data on an open channel (control or interrupt).
    L2capData { cid: Cid, data: Vec<u8> },

    // --- SDP ---
    /// One attribute byte of the SDP response stream (malformed/empty
    /// responses surface as `Query-Complete` with no preceding bytes).
    SdpQueryAttributeByte { addr: Addr, attribute: SdpAttribute, byte: u8 },
    /// SDP query finished (success or timeout/error).
    SdpQueryComplete { addr: Addr, status: Result<(), String> },

    // --- GAP ---
    /// GAP inquiry scan produced a result (Classic).
    GapInquiryResult { addr: Addr, cod: ClassOfDevice, name: Option<String> },
    /// GAP inquiry round finished; dispatcher schedules the mandatory pause
    /// before the next one starts.
    GapInquiryComplete,
    /// BLE advertising report.
    AdvertisingReport { addr: Addr, data: Vec<u8> },

    // --- SM ---
    /// "Just Works" pairing confirmation requested.
    JustWorksRequest { addr: Addr },
    /// Security Manager pairing finished.
    PairingComplete { addr: Addr, status: Result<(), String> },
}

/// Outbound requests the core issues into the Bluetooth stack.
///
/// Implemented once per platform against a real HCI transport; [`mock`]
/// provides an in-memory implementation for tests.
pub trait HciTransport: Send + Sync {
    /// Starts (or restarts) a GAP inquiry scan.
    fn le_inquiry(&self, interval: std::time::Duration);

    /// Initiates an outgoing Classic connection to `addr`.
    fn connect(&self, addr: Addr);

    /// Cancels a pending outgoing connection attempt.
    fn connect_cancel(&self, addr: Addr);

    /// Issues an SDP query for `attribute` against `addr`. Only one may be
    /// in flight at a time across the whole stack.
    fn sdp_query(&self, addr: Addr, attribute: SdpAttribute);

    /// Requests an L2CAP connection to `psm` on `addr`.
    fn l2cap_connect(&self, addr: Addr, psm: Psm);

    /// Sends `data` on `cid`. Returns `false` if the channel reported busy;
    /// the caller must queue and await `L2capCanSendNow`.
    fn l2cap_send(&self, cid: Cid, data: &[u8]) -> bool;

    /// Requests the remote device's user-friendly name.
    fn remote_name_request(&self, addr: Addr);

    /// Replies to a `PinCodeRequest` with a 16-byte (max) PIN.
    fn pin_code_reply(&self, addr: Addr, pin: &[u8]);

    /// Deletes the stored link key for `addr`, if any.
    fn delete_link_key(&self, addr: Addr);
}

/// An in-memory [`HciTransport`] that records calls instead of touching
/// real hardware. Used by the dispatcher's own unit tests and available to
/// platform integrators for synchronous integration tests.
pub mod mock {
    use parking_lot::Mutex;

    use super::{Addr, Cid, Psm, SdpAttribute};

    /// One recorded outbound call.
    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        Inquiry,
        Connect(Addr),
        ConnectCancel(Addr),
        SdpQuery(Addr, SdpAttribute),
        L2capConnect(Addr, Psm),
        L2capSend(Cid, Vec<u8>),
        RemoteNameRequest(Addr),
        PinCodeReply(Addr, Vec<u8>),
        DeleteLinkKey(Addr),
    }

    /// Mock transport: records every call; `l2cap_send` always succeeds
    /// unless the cid is in `busy_cids`.
    #[derive(Debug, Default)]
    pub struct MockTransport {
        pub calls: Mutex<Vec<Call>>,
        pub busy_cids: Mutex<std::collections::HashSet<u16>>,
    }

    impl MockTransport {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Marks `cid` as reporting "busy" on the next send.
        pub fn set_busy(&self, cid: Cid) {
            self.busy_cids.lock().insert(cid.0);
        }

        /// Clears the busy flag, simulating `L2capCanSendNow`.
        pub fn clear_busy(&self, cid: Cid) {
            self.busy_cids.lock().remove(&cid.0);
        }
    }

    impl super::HciTransport for MockTransport {
        fn le_inquiry(&self, _interval: std::time::Duration) {
            self.calls.lock().push(Call::Inquiry);
        }

        fn connect(&self, addr: Addr) {
            self.calls.lock().push(Call::Connect(addr));
        }

        fn connect_cancel(&self, addr: Addr) {
            self.calls.lock().push(Call::ConnectCancel(addr));
        }

        fn sdp_query(&self, addr: Addr, attribute: SdpAttribute) {
            self.calls.lock().push(Call::SdpQuery(addr, attribute));
        }

        fn l2cap_connect(&self, addr: Addr, psm: Psm) {
            self.calls.lock().push(Call::L2capConnect(addr, psm));
        }

        fn l2cap_send(&self, cid: Cid, data: &[u8]) -> bool {
            if self.busy_cids.lock().contains(&cid.0) {
                return false;
            }
            self.calls.lock().push(Call::L2capSend(cid, data.to_vec()));
            true
        }

        fn remote_name_request(&self, addr: Addr) {
            self.calls.lock().push(Call::RemoteNameRequest(addr));
        }

        fn pin_code_reply(&self, addr: Addr, pin: &[u8]) {
            self.calls.lock().push(Call::PinCodeReply(addr, pin.to_vec()));
        }

        fn delete_link_key(&self, addr: Addr) {
            self.calls.lock().push(Call::DeleteLinkKey(addr));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_display_is_colon_hex() {
        let a = Addr([0x00, 0x1A, 0x7D, 0xDA, 0x71, 0x13]);
        assert_eq!(a.to_string(), "00:1A:7D:DA:71:13");
    }

    #[test]
    fn addr_zero_is_zero() {
        assert!(Addr::ZERO.is_zero());
        assert!(!Addr([1, 0, 0, 0, 0, 0]).is_zero());
    }

    #[test]
    fn conn_handle_invalid_sentinel() {
        assert!(!ConnHandle::INVALID.is_valid());
        assert!(ConnHandle(0).is_valid());
    }

    #[test]
    fn cod_classification() {
        let mouse = ClassOfDevice(ClassOfDevice::MAJOR_PERIPHERAL | ClassOfDevice::MINOR_POINT_DEVICE);
        assert!(mouse.is_peripheral());
        assert!(mouse.is_pointing_device());
        assert!(!mouse.is_keyboard());
    }
}
