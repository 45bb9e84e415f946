//! Bluetooth gamepad host core.
//!
//! Discovers, classifies and decodes input from Bluetooth Classic and BLE
//! game controllers, normalizing each vendor's report format into a single
//! [`gamepad::VirtualGamepad`] snapshot that a platform adapter consumes.
//!
//! The raw Bluetooth transport (HCI/L2CAP/SDP/GATT/SM) is not implemented
//! here; it is consumed through the [`bt`] module's [`bt::HciTransport`]
//! trait.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod bt;
pub mod config;
pub mod device;
pub mod dispatcher;
pub mod error;
pub mod fsm;
pub mod gamepad;
pub mod hid;
pub mod normalize;
pub mod parser;
pub mod platform;
pub mod vendor;

pub use config::HostConfig;
pub use device::{Connection, ConnectionState, Seat};
pub use dispatcher::Dispatcher;
pub use error::Error;
pub use gamepad::VirtualGamepad;
pub use vendor::ControllerType;
