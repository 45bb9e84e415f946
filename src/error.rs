//! Crate-wide error type.

use crate::bt::Addr;

/// Errors produced by the core while driving a connection or decoding a
/// report.
///
/// Most are recoverable at the level of a single connection (transient,
/// retryable, or fatal-for-that-connection-only); [`Dispatcher`](crate::Dispatcher)
/// and [`fsm`](crate::fsm) decide what to do with each variant rather than
/// unwinding the event loop.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The device table has no free slot for a new connection.
    #[error("device table is full ({capacity} slots)")]
    DeviceTableFull {
        /// Configured table size.
        capacity: usize,
    },

    /// A lookup by address or connection handle found nothing.
    #[error("no connection for {0}")]
    UnknownDevice(Addr),

    /// A HID report descriptor could not be walked.
    #[error("malformed HID descriptor at byte {offset}")]
    MalformedDescriptor {
        /// Byte offset at which parsing failed.
        offset: usize,
    },

    /// An inbound input report had an id or length the assigned parser did
    /// not expect.
    #[error("unexpected report id=0x{report_id:02x} len={len} (wanted {expected})")]
    UnexpectedReport {
        /// Report id as received.
        report_id: u8,
        /// Received length.
        len: usize,
        /// Description of what was expected, e.g. `"78"` or `">= 7"`.
        expected: &'static str,
    },

    /// The single global SDP query slot is already in use by another device.
    #[error("SDP query already in progress for {0}")]
    SdpBusy(Addr),

    /// An SDP query did not complete before the per-query timeout.
    #[error("SDP query timed out for {0}")]
    SdpTimeout(Addr),

    /// An L2CAP channel reported `send` as busy; the payload was queued.
    #[error("L2CAP channel 0x{cid:04x} busy, queued")]
    L2capBusy {
        /// Channel the send was attempted on.
        cid: u16,
    },

    /// The per-device outgoing queue is at capacity; newest entry was
    /// dropped.
    #[error("outgoing queue full for {0}, dropping newest entry")]
    OutgoingQueueFull(Addr),

    /// L2CAP connection establishment failed fatally (RTX timeout or
    /// baseband disconnect); the caller should delete the stored link key.
    #[error("L2CAP open failed for {addr}: {reason}")]
    L2capOpenFailed {
        /// Peer address.
        addr: Addr,
        /// Human-readable failure reason from the transport.
        reason: String,
    },

    /// A parser's scratch storage was already assigned to a different
    /// controller type; reassignment is illegal.
    #[error("parser scratch already assigned for {0}")]
    ParserAlreadyAssigned(Addr),

    /// Two devices would otherwise be assigned to the same seat.
    #[error("no free seat available")]
    NoFreeSeat,

    /// `set_rumble` was called while a rumble pulse is already in flight.
    #[error("rumble already in progress for {0}")]
    RumbleInProgress(Addr),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
