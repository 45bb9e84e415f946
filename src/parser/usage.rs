//! USB-HID usage page/usage constants shared across descriptor-driven
//! parsers.

/// Generic Desktop page (0x01).
pub mod generic_desktop {
    pub const PAGE: u16 = 0x01;
    pub const X: u16 = 0x30;
    pub const Y: u16 = 0x31;
    pub const Z: u16 = 0x32;
    pub const RX: u16 = 0x33;
    pub const RY: u16 = 0x34;
    pub const RZ: u16 = 0x35;
    pub const HAT_SWITCH: u16 = 0x39;
    pub const DPAD_UP: u16 = 0x90;
    pub const DPAD_DOWN: u16 = 0x91;
    pub const DPAD_RIGHT: u16 = 0x92;
    pub const DPAD_LEFT: u16 = 0x93;
    pub const SYSTEM_MAIN_MENU: u16 = 0x85;
}

/// Simulation Controls page (0x02) — some descriptors put brake/accelerator
/// here instead of as generic-desktop Z/Rz axes (Xbox One firmware 3.1).
pub mod simulation {
    pub const PAGE: u16 = 0x02;
    pub const ACCELERATOR: u16 = 0xC4;
    pub const BRAKE: u16 = 0xC5;
}

/// Button page (0x09): usage N is button N, 1-indexed.
pub const BUTTON_PAGE: u16 = 0x09;

/// Consumer page (0x0C).
pub mod consumer {
    pub const PAGE: u16 = 0x0C;
    /// "AC Back" — firmware-4.8 Xbox One descriptors map the Back/View
    /// button here instead of a generic-desktop usage.
    pub const AC_BACK: u16 = 0x0224;
}
