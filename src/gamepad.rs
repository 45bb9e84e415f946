//! The normalized virtual gamepad snapshot.
//!
//! Every per-vendor parser in [`crate::parser`] writes into a
//! [`VirtualGamepad`] instead of exposing its own report shape; this is the
//! single type the platform adapter ([`crate::platform::Platform`]) ever
//! sees. Parsers flagged [`crate::ControllerType::is_full_report`] set
//! [`VirtualGamepad::updated_states`] once at `init_report` time and leave
//! it constant; all others must or the corresponding field every time they
//! touch it, since a consumer may only read a field whose bit is set.

use bitflags::bitflags;

bitflags! {
    /// D-pad direction bitmask.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Dpad: u8 {
        const UP    = 0b0001;
        const DOWN  = 0b0010;
        const RIGHT = 0b0100;
        const LEFT  = 0b1000;
    }

    /// Main face/shoulder/stick-click button bitmask.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Buttons: u16 {
        const A          = 1 << 0;
        const B          = 1 << 1;
        const X          = 1 << 2;
        const Y          = 1 << 3;
        const SHOULDER_L = 1 << 4;
        const SHOULDER_R = 1 << 5;
        const TRIGGER_L  = 1 << 6;
        const TRIGGER_R  = 1 << 7;
        const THUMB_L    = 1 << 8;
        const THUMB_R    = 1 << 9;
    }

    /// System/menu button bitmask.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct MiscButtons: u8 {
        const SYSTEM = 1 << 0;
        const BACK   = 1 << 1;
        const HOME   = 1 << 2;
        const MENU   = 1 << 3;
    }

    /// Which [`VirtualGamepad`] fields a given report touched.
    ///
    /// A "full report" parser (PS4/PS5/SwitchPro) sets every bit once at
    /// `init_report` and never clears it; every other parser clears this to
    /// empty in `init_report` and sets exactly the bits for the fields it
    /// writes while decoding that report.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct UpdatedStates: u16 {
        const DPAD        = 1 << 0;
        const BUTTONS     = 1 << 1;
        const MISC_BUTTONS= 1 << 2;
        const BATTERY     = 1 << 3;
        const AXIS_X      = 1 << 4;
        const AXIS_Y      = 1 << 5;
        const AXIS_RX     = 1 << 6;
        const AXIS_RY     = 1 << 7;
        const BRAKE       = 1 << 8;
        const ACCELERATOR = 1 << 9;

        const ALL = Self::DPAD.bits() | Self::BUTTONS.bits() | Self::MISC_BUTTONS.bits()
            | Self::BATTERY.bits() | Self::AXIS_X.bits() | Self::AXIS_Y.bits()
            | Self::AXIS_RX.bits() | Self::AXIS_RY.bits() | Self::BRAKE.bits()
            | Self::ACCELERATOR.bits();
    }
}

/// Half the normalized axis resolution (`R = 1024`), i.e. the magnitude of
/// the signed axis range `±(R/2)`.
pub const AXIS_RESOLUTION: i32 = 1024;

/// Normalized input snapshot shared by every controller family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VirtualGamepad {
    pub dpad: Dpad,
    /// Signed, normalized to `-512..=511` (center 0).
    pub axis_x: i32,
    pub axis_y: i32,
    pub axis_rx: i32,
    pub axis_ry: i32,
    /// Unsigned, normalized to `0..1024`.
    pub brake: u32,
    pub accelerator: u32,
    pub buttons: Buttons,
    pub misc_buttons: MiscButtons,
    /// Opaque 0..255 battery level; 0 means "unknown" for most families.
    pub battery: u8,
    pub updated_states: UpdatedStates,
}

impl VirtualGamepad {
    /// A freshly zeroed snapshot with no fields marked updated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears `updated_states`. Called from `init_report` by every parser
    /// that is not a "full report" family.
    pub fn clear_updated(&mut self) {
        self.updated_states = UpdatedStates::empty();
    }

    /// Sets `axis_x` and marks it updated.
    pub fn set_axis_x(&mut self, v: i32) {
        self.axis_x = v;
        self.updated_states |= UpdatedStates::AXIS_X;
    }

    /// Sets `axis_y` and marks it updated.
    pub fn set_axis_y(&mut self, v: i32) {
        self.axis_y = v;
        self.updated_states |= UpdatedStates::AXIS_Y;
    }

    /// Sets `axis_rx` and marks it updated.
    pub fn set_axis_rx(&mut self, v: i32) {
        self.axis_rx = v;
        self.updated_states |= UpdatedStates::AXIS_RX;
    }

    /// Sets `axis_ry` and marks it updated.
    pub fn set_axis_ry(&mut self, v: i32) {
        self.axis_ry = v;
        self.updated_states |= UpdatedStates::AXIS_RY;
    }

    /// Sets `brake` and marks it updated.
    pub fn set_brake(&mut self, v: u32) {
        self.brake = v;
        self.updated_states |= UpdatedStates::BRAKE;
    }

    /// Sets `accelerator` and marks it updated.
    pub fn set_accelerator(&mut self, v: u32) {
        self.accelerator = v;
        self.updated_states |= UpdatedStates::ACCELERATOR;
    }

    /// Sets `dpad` and marks it updated.
    pub fn set_dpad(&mut self, v: Dpad) {
        self.dpad = v;
        self.updated_states |= UpdatedStates::DPAD;
    }

    /// Sets `buttons` and marks it updated.
    pub fn set_buttons(&mut self, v: Buttons) {
        self.buttons = v;
        self.updated_states |= UpdatedStates::BUTTONS;
    }

    /// Sets `misc_buttons` and marks it updated.
    pub fn set_misc_buttons(&mut self, v: MiscButtons) {
        self.misc_buttons = v;
        self.updated_states |= UpdatedStates::MISC_BUTTONS;
    }

    /// Sets `battery` and marks it updated.
    pub fn set_battery(&mut self, v: u8) {
        self.battery = v;
        self.updated_states |= UpdatedStates::BATTERY;
    }

    /// Marks every field as updated, for "full report" families that set
    /// the mask once at `init_report` and keep it constant thereafter.
    pub fn mark_all_updated(&mut self) {
        self.updated_states = UpdatedStates::ALL;
    }
}

/// The threshold, in normalized axis units, above which an analog stick
/// axis is treated as a digital direction by the §4.4 reducers
/// (`1024 / 8`).
pub const AXIS_THRESHOLD: i32 = AXIS_RESOLUTION / 8;

/// Normalized state of a single 9-pin Atari-style joystick port: four
/// direction switches, a fire button, an auto-fire line, and two
/// potentiometer-style analog lines (paddle/throttle).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Joystick {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub auto_fire: bool,
    /// 8-bit potentiometer reading derived from `brake`.
    pub pot_x: u8,
    /// 8-bit potentiometer reading derived from `accelerator`.
    pub pot_y: u8,
}

/// Normalized state of a simple two-axis, three-button mouse.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Mouse {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub button_left: bool,
    pub button_middle: bool,
    pub button_right: bool,
}

fn axis_directions(x: i32, y: i32) -> (bool, bool, bool, bool) {
    (y < -AXIS_THRESHOLD, y > AXIS_THRESHOLD, x < -AXIS_THRESHOLD, x > AXIS_THRESHOLD)
}

/// Maps a [`VirtualGamepad`] onto a single retro-computer joystick port:
/// `A`/`ThumbL` is fire, `ShoulderR` is auto-fire, the D-pad and left stick
/// both drive direction (clamped through [`AXIS_THRESHOLD`]), and
/// `brake`/`accelerator` are exposed on the two potentiometer lines.
#[must_use]
pub fn to_single_joystick(gp: &VirtualGamepad) -> Joystick {
    let (up, down, left, right) = axis_directions(gp.axis_x, gp.axis_y);
    Joystick {
        up: up || gp.dpad.contains(Dpad::UP),
        down: down || gp.dpad.contains(Dpad::DOWN),
        left: left || gp.dpad.contains(Dpad::LEFT),
        right: right || gp.dpad.contains(Dpad::RIGHT),
        fire: gp.buttons.contains(Buttons::A) || gp.buttons.contains(Buttons::THUMB_L),
        auto_fire: gp.buttons.contains(Buttons::SHOULDER_R),
        pot_x: (gp.brake.min(1023) >> 2) as u8,
        pot_y: (gp.accelerator.min(1023) >> 2) as u8,
    }
}

/// Maps a [`VirtualGamepad`] onto two joystick ports: the left stick/`A`
/// drive joystick 1, the right stick/`B` drive joystick 2, and the two
/// shoulder buttons split across the two ports' auto-fire lines.
#[must_use]
pub fn to_combo_joy_joy(gp: &VirtualGamepad) -> (Joystick, Joystick) {
    let (up1, down1, left1, right1) = axis_directions(gp.axis_x, gp.axis_y);
    let (up2, down2, left2, right2) = axis_directions(gp.axis_rx, gp.axis_ry);
    let joy1 = Joystick {
        up: up1 || gp.dpad.contains(Dpad::UP),
        down: down1 || gp.dpad.contains(Dpad::DOWN),
        left: left1 || gp.dpad.contains(Dpad::LEFT),
        right: right1 || gp.dpad.contains(Dpad::RIGHT),
        fire: gp.buttons.contains(Buttons::A) || gp.buttons.contains(Buttons::THUMB_L),
        auto_fire: gp.buttons.contains(Buttons::SHOULDER_L),
        pot_x: (gp.brake.min(1023) >> 2) as u8,
        pot_y: (gp.accelerator.min(1023) >> 2) as u8,
    };
    let joy2 = Joystick {
        up: up2,
        down: down2,
        left: left2,
        right: right2,
        fire: gp.buttons.contains(Buttons::B) || gp.buttons.contains(Buttons::THUMB_R),
        auto_fire: gp.buttons.contains(Buttons::SHOULDER_R),
        pot_x: 0,
        pot_y: 0,
    };
    (joy1, joy2)
}

/// Maps a [`VirtualGamepad`] onto one joystick port (left stick/D-pad/`A`)
/// plus a mouse driven by the right stick and the `B`/`X`/`Y` buttons.
#[must_use]
pub fn to_combo_joy_mouse(gp: &VirtualGamepad) -> (Joystick, Mouse) {
    let (up, down, left, right) = axis_directions(gp.axis_x, gp.axis_y);
    let joy = Joystick {
        up: up || gp.dpad.contains(Dpad::UP),
        down: down || gp.dpad.contains(Dpad::DOWN),
        left: left || gp.dpad.contains(Dpad::LEFT),
        right: right || gp.dpad.contains(Dpad::RIGHT),
        fire: gp.buttons.contains(Buttons::A) || gp.buttons.contains(Buttons::THUMB_L),
        auto_fire: gp.buttons.contains(Buttons::SHOULDER_R),
        pot_x: (gp.brake.min(1023) >> 2) as u8,
        pot_y: (gp.accelerator.min(1023) >> 2) as u8,
    };
    let (mup, mdown, mleft, mright) = axis_directions(gp.axis_rx, gp.axis_ry);
    let mouse = Mouse {
        up: mup,
        down: mdown,
        left: mleft,
        right: mright,
        button_left: gp.buttons.contains(Buttons::B),
        button_middle: gp.buttons.contains(Buttons::X),
        button_right: gp.buttons.contains(Buttons::Y),
    };
    (joy, mouse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_updated_resets_mask_not_fields() {
        let mut gp = VirtualGamepad::new();
        gp.set_axis_x(100);
        assert!(gp.updated_states.contains(UpdatedStates::AXIS_X));
        gp.clear_updated();
        assert!(gp.updated_states.is_empty());
        assert_eq!(gp.axis_x, 100);
    }

    #[test]
    fn full_report_mark_all_is_constant() {
        let mut gp = VirtualGamepad::new();
        gp.mark_all_updated();
        assert_eq!(gp.updated_states, UpdatedStates::ALL);
    }

    #[test]
    fn single_joystick_fire_from_a_or_thumb_l() {
        let mut gp = VirtualGamepad::new();
        gp.set_buttons(Buttons::A);
        assert!(to_single_joystick(&gp).fire);
        let mut gp2 = VirtualGamepad::new();
        gp2.set_buttons(Buttons::THUMB_L);
        assert!(to_single_joystick(&gp2).fire);
    }

    #[test]
    fn single_joystick_direction_from_dpad_and_axis() {
        let mut gp = VirtualGamepad::new();
        gp.set_dpad(Dpad::LEFT);
        assert!(to_single_joystick(&gp).left);

        let mut gp2 = VirtualGamepad::new();
        gp2.set_axis_x(-500);
        assert!(to_single_joystick(&gp2).left);
        assert!(!to_single_joystick(&gp2).right);
    }

    #[test]
    fn combo_joy_joy_splits_sticks_and_shoulders() {
        let mut gp = VirtualGamepad::new();
        gp.set_axis_rx(500);
        gp.set_buttons(Buttons::B | Buttons::SHOULDER_L);
        let (joy1, joy2) = to_combo_joy_joy(&gp);
        assert!(joy2.right);
        assert!(joy2.fire);
        assert!(joy1.auto_fire);
    }

    #[test]
    fn combo_joy_mouse_buttons_map_left_middle_right() {
        let mut gp = VirtualGamepad::new();
        gp.set_buttons(Buttons::B | Buttons::X | Buttons::Y);
        let (_, mouse) = to_combo_joy_mouse(&gp);
        assert!(mouse.button_left && mouse.button_middle && mouse.button_right);
    }
}
