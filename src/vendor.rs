//! Vendor/Product ID classification table and fallback heuristics.
//!
//! Transcribed from the upstream `uni_hid_device_vendors.h` header used by
//! the reference firmware (the revision that also lists `PS5Controller` and
//! `XInputPS4Controller`, rather than the older one without them). Lookup
//! is linear and first-match-wins by construction: duplicate `(vid, pid)`
//! rows are kept verbatim from the source rather than deduplicated, since
//! upstream relies on the first row shadowing later ones.

use strum::EnumIter;

/// Identifies which parser family a connected controller belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, EnumIter)]
#[non_exhaustive]
pub enum ControllerType {
    #[default]
    Unknown,
    PS3,
    PS4,
    PS5,
    Xbox360,
    XboxOne,
    Wii,
    SwitchPro,
    SwitchJoyConLeft,
    SwitchJoyConRight,
    SwitchJoyConPair,
    SwitchInputOnly,
    XInputSwitch,
    XInputPS4,
    Apple,
    Nimbus,
    Android,
    SmartTVRemote,
    /// Spelled lower-case upstream (`iCade`); kept as an
    /// upper-camel-case identifier per Rust enum-variant convention.
    ICade,
    OUYA,
    EightBitDo,
    Generic,
    MobileTouch,
    SteamController,
    SteamControllerV2,
    GenericKeyboard,
    GenericMouse,
}

impl ControllerType {
    /// Returns whether this type is decoded through a descriptor-driven
    /// "full report" parser that sets `updated_states` once at init and
    /// keeps it constant, rather than incrementally
    /// per changed field.
    #[must_use]
    pub const fn is_full_report(self) -> bool {
        matches!(self, Self::PS4 | Self::PS5 | Self::SwitchPro)
    }
}

/// One row of the vendor classification table.
#[derive(Clone, Copy, Debug)]
pub struct VendorEntry {
    pub vid: u16,
    pub pid: u16,
    pub controller_type: ControllerType,
    pub display_name: Option<&'static str>,
}

impl VendorEntry {
    const fn new(vid: u16, pid: u16, controller_type: ControllerType) -> Self {
        Self { vid, pid, controller_type, display_name: None }
    }

    const fn named(
        vid: u16,
        pid: u16,
        controller_type: ControllerType,
        display_name: &'static str,
    ) -> Self {
        Self { vid, pid, controller_type, display_name: Some(display_name) }
    }
}

/// Static, append-only vendor classification table (a compile-time constant
/// of ~600 rows). The first row is the `(0, 0) -> Unknown` sentinel so an
/// absent `(vid, pid)` pair maps to `Unknown` by the same first-match-wins
/// rule as every other row.
pub static VENDOR_TABLE: &[VendorEntry] = &[
    VendorEntry::new(0x0000, 0x0000, ControllerType::Unknown), // Bluepad32: Make it first entry
    VendorEntry::new(0x0079, 0x181a, ControllerType::PS3), // Venom Arcade Stick
    VendorEntry::new(0x0079, 0x1844, ControllerType::PS3), // From SDL
    VendorEntry::new(0x044f, 0xb315, ControllerType::PS3), // Firestorm Dual Analog 3
    VendorEntry::new(0x044f, 0xd007, ControllerType::PS3), // Thrustmaster wireless 3-1
    VendorEntry::new(0x054c, 0x0268, ControllerType::PS3), // Sony PS3 Controller
    VendorEntry::new(0x056e, 0x200f, ControllerType::PS3), // From SDL
    VendorEntry::new(0x056e, 0x2013, ControllerType::PS3), // JC-U4113SBK
    VendorEntry::new(0x05b8, 0x1004, ControllerType::PS3), // From SDL
    VendorEntry::new(0x05b8, 0x1006, ControllerType::PS3), // JC-U3412SBK
    VendorEntry::new(0x06a3, 0xf622, ControllerType::PS3), // Cyborg V3
    VendorEntry::new(0x0738, 0x3180, ControllerType::PS3), // Mad Catz Alpha PS3 mode
    VendorEntry::new(0x0738, 0x3250, ControllerType::PS3), // madcats fightpad pro ps3
    VendorEntry::new(0x0738, 0x3481, ControllerType::PS3), // Mad Catz FightStick TE 2+ PS3
    VendorEntry::new(0x0738, 0x8180, ControllerType::PS3), // Mad Catz Alpha PS4 mode (no touchpad on device)
    VendorEntry::new(0x0738, 0x8838, ControllerType::PS3), // Madcatz Fightstick Pro
    VendorEntry::new(0x0810, 0x0001, ControllerType::PS3), // actually ps2 - maybe break out later
    VendorEntry::new(0x0810, 0x0003, ControllerType::PS3), // actually ps2 - maybe break out later
    VendorEntry::new(0x0925, 0x0005, ControllerType::PS3), // Sony PS3 Controller
    VendorEntry::new(0x0925, 0x8866, ControllerType::PS3), // PS2 maybe break out later
    VendorEntry::new(0x0925, 0x8888, ControllerType::PS3), // Actually ps2 -maybe break out later Lakeview Research WiseGroup Ltd, MP-8866 Dual Joypad
    VendorEntry::new(0x0e6f, 0x0109, ControllerType::PS3), // PDP Versus Fighting Pad
    VendorEntry::new(0x0e6f, 0x011e, ControllerType::PS3), // Rock Candy PS4
    VendorEntry::new(0x0e6f, 0x0128, ControllerType::PS3), // Rock Candy PS3
    VendorEntry::new(0x0e6f, 0x0203, ControllerType::PS3), // Victrix Pro FS (PS4 peripheral but no trackpad/lightbar)
    VendorEntry::new(0x0e6f, 0x0214, ControllerType::PS3), // afterglow ps3
    VendorEntry::new(0x0e6f, 0x1314, ControllerType::PS3), // PDP Afterglow Wireless PS3 controller
    VendorEntry::new(0x0e6f, 0x6302, ControllerType::PS3), // From SDL
    VendorEntry::new(0x0e8f, 0x0008, ControllerType::PS3), // Green Asia
    VendorEntry::new(0x0e8f, 0x3075, ControllerType::PS3), // SpeedLink Strike FX
    VendorEntry::new(0x0e8f, 0x310d, ControllerType::PS3), // From SDL
    VendorEntry::new(0x0f0d, 0x0009, ControllerType::PS3), // HORI BDA GP1
    VendorEntry::new(0x0f0d, 0x004d, ControllerType::PS3), // Horipad 3
    VendorEntry::new(0x0f0d, 0x005f, ControllerType::PS3), // HORI Fighting Commander 4 PS3
    VendorEntry::new(0x0f0d, 0x006a, ControllerType::PS3), // Real Arcade Pro 4
    VendorEntry::new(0x0f0d, 0x006e, ControllerType::PS3), // HORI horipad4 ps3
    VendorEntry::new(0x0f0d, 0x0085, ControllerType::PS3), // HORI Fighting Commander PS3
    VendorEntry::new(0x0f0d, 0x0086, ControllerType::PS3), // HORI Fighting Commander PC (Uses the Xbox 360 protocol, but has PS3 buttons)
    VendorEntry::new(0x0f0d, 0x0088, ControllerType::PS3), // HORI Fighting Stick mini 4
    VendorEntry::new(0x0f30, 0x1100, ControllerType::PS3), // Qanba Q1 fight stick
    VendorEntry::new(0x11ff, 0x3331, ControllerType::PS3), // SRXJ-PH2400
    VendorEntry::new(0x1345, 0x1000, ControllerType::PS3), // PS2 ACME GA-D5
    VendorEntry::new(0x1345, 0x6005, ControllerType::PS3), // ps2 maybe break out later
    VendorEntry::new(0x146b, 0x5500, ControllerType::PS3), // From SDL
    VendorEntry::new(0x1a34, 0x0836, ControllerType::PS3), // Afterglow PS3
    VendorEntry::new(0x20bc, 0x5500, ControllerType::PS3), // ShanWan PS3
    VendorEntry::new(0x20d6, 0x576d, ControllerType::PS3), // Power A PS3
    VendorEntry::new(0x20d6, 0xca6d, ControllerType::PS3), // From SDL
    VendorEntry::new(0x2563, 0x0523, ControllerType::PS3), // Digiflip GP006
    VendorEntry::new(0x2563, 0x0575, ControllerType::PS3), // From SDL
    VendorEntry::new(0x25f0, 0x83c3, ControllerType::PS3), // gioteck vx2
    VendorEntry::new(0x25f0, 0xc121, ControllerType::PS3), //
    VendorEntry::new(0x2c22, 0x2003, ControllerType::PS3), // Qanba Drone
    VendorEntry::new(0x2c22, 0x2302, ControllerType::PS3), // Qanba Obsidian
    VendorEntry::new(0x2c22, 0x2502, ControllerType::PS3), // Qanba Dragon
    VendorEntry::new(0x8380, 0x0003, ControllerType::PS3), // BTP 2163
    VendorEntry::new(0x8888, 0x0308, ControllerType::PS3), // Sony PS3 Controller
    VendorEntry::new(0x0079, 0x181b, ControllerType::PS4), // Venom Arcade Stick - XXX:this may not work and may need to be called a ps3 controller
    VendorEntry::new(0x044f, 0xd00e, ControllerType::PS4), // Thrustmaster Eswap Pro - No gyro and lightbar doesn't change color. Works otherwise
    VendorEntry::new(0x054c, 0x05c4, ControllerType::PS4), // Sony PS4 Controller
    VendorEntry::new(0x054c, 0x05c5, ControllerType::PS4), // STRIKEPAD PS4 Grip Add-on
    VendorEntry::new(0x054c, 0x09cc, ControllerType::PS4), // Sony PS4 Slim Controller
    VendorEntry::new(0x054c, 0x0ba0, ControllerType::PS4), // Sony PS4 Controller (Wireless dongle)
    VendorEntry::new(0x0738, 0x8250, ControllerType::PS4), // Mad Catz FightPad Pro PS4
    VendorEntry::new(0x0738, 0x8384, ControllerType::PS4), // Mad Catz FightStick TE S+ PS4
    VendorEntry::new(0x0738, 0x8480, ControllerType::PS4), // Mad Catz FightStick TE 2 PS4
    VendorEntry::new(0x0738, 0x8481, ControllerType::PS4), // Mad Catz FightStick TE 2+ PS4
    VendorEntry::new(0x0c12, 0x0e10, ControllerType::PS4), // Armor Armor 3 Pad PS4
    VendorEntry::new(0x0c12, 0x0e13, ControllerType::PS4), // ZEROPLUS P4 Wired Gamepad
    VendorEntry::new(0x0c12, 0x0e15, ControllerType::PS4), // Game:Pad 4
    VendorEntry::new(0x0c12, 0x0e20, ControllerType::PS4), // Brook Mars Controller - needs FW update to show up as Ps4 controller on PC. Has Gyro but touchpad is a single button.
    VendorEntry::new(0x0c12, 0x0ef6, ControllerType::PS4), // Hitbox Arcade Stick
    VendorEntry::new(0x0c12, 0x1cf6, ControllerType::PS4), // EMIO PS4 Elite Controller
    VendorEntry::new(0x0c12, 0x1e10, ControllerType::PS4), // P4 Wired Gamepad generic knock off - lightbar but not trackpad or gyro
    VendorEntry::new(0x0e6f, 0x0207, ControllerType::PS4), // Victrix Pro Fightstick w/ Touchpad for PS4
    VendorEntry::new(0x0f0d, 0x0055, ControllerType::PS4), // HORIPAD 4 FPS
    VendorEntry::new(0x0f0d, 0x005e, ControllerType::PS4), // HORI Fighting Commander 4 PS4
    VendorEntry::new(0x0f0d, 0x0066, ControllerType::PS4), // HORIPAD 4 FPS Plus
    VendorEntry::new(0x0f0d, 0x0084, ControllerType::PS4), // HORI Fighting Commander PS4
    VendorEntry::new(0x0f0d, 0x0087, ControllerType::PS4), // HORI Fighting Stick mini 4
    VendorEntry::new(0x0f0d, 0x008a, ControllerType::PS4), // HORI Real Arcade Pro 4
    VendorEntry::new(0x0f0d, 0x009c, ControllerType::PS4), // HORI TAC PRO mousething
    VendorEntry::new(0x0f0d, 0x00a0, ControllerType::PS4), // HORI TAC4 mousething
    VendorEntry::new(0x0f0d, 0x00ed, ControllerType::XInputPS4), // Hori Fighting Stick mini 4 kai - becomes an Xbox 360 controller on PC
    VendorEntry::new(0x0f0d, 0x00ee, ControllerType::PS4), // Hori mini wired https://www.playstation.com/en-us/explore/accessories/gaming-controllers/mini-wired-gamepad/
    VendorEntry::new(0x0f0d, 0x011c, ControllerType::PS4), // Hori Fighting Stick α
    VendorEntry::new(0x0f0d, 0x0123, ControllerType::PS4), // HORI Wireless Controller Light (Japan only) - only over bt- over usb is xbox and pid 0x0124
    VendorEntry::new(0x0f0d, 0x0162, ControllerType::PS4), // HORI Fighting Commander OCTA
    VendorEntry::new(0x0f0d, 0x0164, ControllerType::XInputPS4), // HORI Fighting Commander OCTA
    VendorEntry::new(0x11c0, 0x4001, ControllerType::PS4), // "PS4 Fun Controller" added from user log
    VendorEntry::new(0x146b, 0x0603, ControllerType::XInputPS4), // Nacon PS4 Compact Controller
    VendorEntry::new(0x146b, 0x0604, ControllerType::XInputPS4), // NACON Daija Arcade Stick
    VendorEntry::new(0x146b, 0x0605, ControllerType::XInputPS4), // NACON PS4 controller in Xbox mode - might also be other bigben brand xbox controllers
    VendorEntry::new(0x146b, 0x0606, ControllerType::XInputPS4), // NACON Unknown Controller
    VendorEntry::new(0x146b, 0x0609, ControllerType::XInputPS4), // NACON Wireless Controller for PS4
    VendorEntry::new(0x146b, 0x0d01, ControllerType::PS4), // Nacon Revolution Pro Controller - has gyro
    VendorEntry::new(0x146b, 0x0d02, ControllerType::PS4), // Nacon Revolution Pro Controller v2 - has gyro
    VendorEntry::new(0x146b, 0x0d06, ControllerType::PS4), // NACON Asymetrical Controller Wireless Dongle -- show up as ps4 until you connect controller to it then it reboots into Xbox controller with different vvid/pid
    VendorEntry::new(0x146b, 0x0d08, ControllerType::PS4), // NACON Revolution Unlimited Wireless Dongle
    VendorEntry::new(0x146b, 0x0d09, ControllerType::PS4), // NACON Daija Fight Stick - touchpad but no gyro/rumble
    VendorEntry::new(0x146b, 0x0d10, ControllerType::PS4), // NACON Revolution Infinite - has gyro
    VendorEntry::new(0x146b, 0x0d10, ControllerType::PS4), // NACON Revolution Unlimited
    VendorEntry::new(0x146b, 0x0d13, ControllerType::PS4), // NACON Revolution Pro Controller 3
    VendorEntry::new(0x146b, 0x1103, ControllerType::PS4), // NACON Asymetrical Controller -- on windows this doesn't enumerate
    VendorEntry::new(0x1532, 0x1000, ControllerType::PS4), // Razer Raiju PS4 Controller
    VendorEntry::new(0x1532, 0x1004, ControllerType::PS4), // Razer Raiju 2 Ultimate USB
    VendorEntry::new(0x1532, 0x1007, ControllerType::PS4), // Razer Raiju 2 Tournament edition USB
    VendorEntry::new(0x1532, 0x1008, ControllerType::PS4), // Razer Panthera Evo Fightstick
    VendorEntry::new(0x1532, 0x1009, ControllerType::PS4), // Razer Raiju 2 Ultimate BT
    VendorEntry::new(0x1532, 0x100A, ControllerType::PS4), // Razer Raiju 2 Tournament edition BT
    VendorEntry::new(0x1532, 0x1100, ControllerType::PS4), // Razer RAION Fightpad - Trackpad, no gyro, lightbar hardcoded to green
    VendorEntry::new(0x20d6, 0x792a, ControllerType::PS4), // PowerA Fusion Fight Pad
    VendorEntry::new(0x2c22, 0x2000, ControllerType::PS4), // Qanba Drone
    VendorEntry::new(0x2c22, 0x2300, ControllerType::PS4), // Qanba Obsidian
    VendorEntry::new(0x2c22, 0x2303, ControllerType::XInputPS4), // Qanba Obsidian Arcade Joystick
    VendorEntry::new(0x2c22, 0x2500, ControllerType::PS4), // Qanba Dragon
    VendorEntry::new(0x2c22, 0x2503, ControllerType::XInputPS4), // Qanba Dragon Arcade Joystick
    VendorEntry::new(0x7545, 0x0104, ControllerType::PS4), // Armor 3 or Level Up Cobra - At least one variant has gyro
    VendorEntry::new(0x9886, 0x0025, ControllerType::PS4), // Astro C40
    VendorEntry::new(0x054c, 0x0ce6, ControllerType::PS5), // Sony PS5 Controller
    VendorEntry::new(0x054c, 0x0df2, ControllerType::PS5), // Sony DualSense Edge Controller
    VendorEntry::new(0x0f0d, 0x0163, ControllerType::PS5), // HORI Fighting Commander OCTA
    VendorEntry::new(0x0f0d, 0x0184, ControllerType::PS5), // Hori Fighting Stick α
    VendorEntry::new(0x0079, 0x0006, ControllerType::Unknown), // DragonRise Generic USB PCB, sometimes configured as a PC Twin Shock Controller - looks like a DS3 but the face buttons are 1-4 instead of symbols
    VendorEntry::new(0x0079, 0x18d4, ControllerType::Xbox360), // GPD Win 2 X-Box Controller
    VendorEntry::new(0x03eb, 0xff02, ControllerType::Xbox360), // Wooting Two
    VendorEntry::new(0x044f, 0xb326, ControllerType::Xbox360), // Thrustmaster Gamepad GP XID
    VendorEntry::named(0x045e, 0x028e, ControllerType::Xbox360, "Xbox 360 Controller"), // Microsoft X-Box 360 pad
    VendorEntry::named(0x045e, 0x028f, ControllerType::Xbox360, "Xbox 360 Controller"), // Microsoft X-Box 360 pad v2
    VendorEntry::named(0x045e, 0x0291, ControllerType::Xbox360, "Xbox 360 Wireless Controller"), // Xbox 360 Wireless Receiver (XBOX)
    VendorEntry::new(0x045e, 0x02a0, ControllerType::Xbox360), // Microsoft X-Box 360 Big Button IR
    VendorEntry::new(0x045e, 0x02a1, ControllerType::Xbox360), // Microsoft X-Box 360 Wireless Controller with XUSB driver on Windows
    VendorEntry::named(0x045e, 0x02a9, ControllerType::Xbox360, "Xbox 360 Wireless Controller"), // Xbox 360 Wireless Receiver (third party knockoff)
    VendorEntry::named(0x045e, 0x0719, ControllerType::Xbox360, "Xbox 360 Wireless Controller"), // Xbox 360 Wireless Receiver
    VendorEntry::new(0x046d, 0xc21d, ControllerType::Xbox360), // Logitech Gamepad F310
    VendorEntry::new(0x046d, 0xc21e, ControllerType::Xbox360), // Logitech Gamepad F510
    VendorEntry::new(0x046d, 0xc21f, ControllerType::Xbox360), // Logitech Gamepad F710
    VendorEntry::new(0x046d, 0xc242, ControllerType::Xbox360), // Logitech Chillstream Controller
    VendorEntry::new(0x056e, 0x2004, ControllerType::Xbox360), // Elecom JC-U3613M
    VendorEntry::new(0x06a3, 0xf51a, ControllerType::Xbox360), // Saitek P3600
    VendorEntry::new(0x0738, 0x4716, ControllerType::Xbox360), // Mad Catz Wired Xbox 360 Controller
    VendorEntry::new(0x0738, 0x4718, ControllerType::Xbox360), // Mad Catz Street Fighter IV FightStick SE
    VendorEntry::new(0x0738, 0x4726, ControllerType::Xbox360), // Mad Catz Xbox 360 Controller
    VendorEntry::new(0x0738, 0x4728, ControllerType::Xbox360), // Mad Catz Street Fighter IV FightPad
    VendorEntry::new(0x0738, 0x4736, ControllerType::Xbox360), // Mad Catz MicroCon Gamepad
    VendorEntry::new(0x0738, 0x4738, ControllerType::Xbox360), // Mad Catz Wired Xbox 360 Controller (SFIV)
    VendorEntry::new(0x0738, 0x4740, ControllerType::Xbox360), // Mad Catz Beat Pad
    VendorEntry::new(0x0738, 0xb726, ControllerType::Xbox360), // Mad Catz Xbox controller - MW2
    VendorEntry::new(0x0738, 0xbeef, ControllerType::Xbox360), // Mad Catz JOYTECH NEO SE Advanced GamePad
    VendorEntry::new(0x0738, 0xcb02, ControllerType::Xbox360), // Saitek Cyborg Rumble Pad - PC/Xbox 360
    VendorEntry::new(0x0738, 0xcb03, ControllerType::Xbox360), // Saitek P3200 Rumble Pad - PC/Xbox 360
    VendorEntry::new(0x0738, 0xf738, ControllerType::Xbox360), // Super SFIV FightStick TE S
    VendorEntry::new(0x0955, 0x7210, ControllerType::Xbox360), // Nvidia Shield local controller
    VendorEntry::new(0x0955, 0xb400, ControllerType::Xbox360), // NVIDIA Shield streaming controller
    VendorEntry::new(0x0e6f, 0x0105, ControllerType::Xbox360), // HSM3 Xbox360 dancepad
    VendorEntry::named(0x0e6f, 0x0113, ControllerType::Xbox360, "PDP Xbox 360 Afterglow"), // PDP Afterglow Gamepad for Xbox 360
    VendorEntry::named(0x0e6f, 0x011f, ControllerType::Xbox360, "PDP Xbox 360 Rock Candy"), // PDP Rock Candy Gamepad for Xbox 360
    VendorEntry::named(0x0e6f, 0x0125, ControllerType::Xbox360, "PDP INJUSTICE FightStick"), // PDP INJUSTICE FightStick for Xbox 360
    VendorEntry::named(0x0e6f, 0x0127, ControllerType::Xbox360, "PDP INJUSTICE FightPad"), // PDP INJUSTICE FightPad for Xbox 360
    VendorEntry::named(0x0e6f, 0x0131, ControllerType::Xbox360, "PDP EA Soccer Controller"), // PDP EA Soccer Gamepad
    VendorEntry::named(0x0e6f, 0x0133, ControllerType::Xbox360, "PDP Battlefield 4 Controller"), // PDP Battlefield 4 Gamepad
    VendorEntry::named(0x0e6f, 0x0143, ControllerType::Xbox360, "PDP MK X Fight Stick"), // PDP MK X Fight Stick for Xbox 360
    VendorEntry::named(0x0e6f, 0x0147, ControllerType::Xbox360, "PDP Xbox 360 Marvel Controller"), // PDP Marvel Controller for Xbox 360
    VendorEntry::named(0x0e6f, 0x0201, ControllerType::Xbox360, "PDP Xbox 360 Controller"), // PDP Gamepad for Xbox 360
    VendorEntry::named(0x0e6f, 0x0213, ControllerType::Xbox360, "PDP Xbox 360 Afterglow"), // PDP Afterglow Gamepad for Xbox 360
    VendorEntry::named(0x0e6f, 0x021f, ControllerType::Xbox360, "PDP Xbox 360 Rock Candy"), // PDP Rock Candy Gamepad for Xbox 360
    VendorEntry::named(0x0e6f, 0x0301, ControllerType::Xbox360, "PDP Xbox 360 Controller"), // PDP Gamepad for Xbox 360
    VendorEntry::named(0x0e6f, 0x0313, ControllerType::Xbox360, "PDP Xbox 360 Afterglow"), // PDP Afterglow Gamepad for Xbox 360
    VendorEntry::named(0x0e6f, 0x0314, ControllerType::Xbox360, "PDP Xbox 360 Afterglow"), // PDP Afterglow Gamepad for Xbox 360
    VendorEntry::named(0x0e6f, 0x0401, ControllerType::Xbox360, "PDP Xbox 360 Controller"), // PDP Gamepad for Xbox 360
    VendorEntry::new(0x0e6f, 0x0413, ControllerType::Xbox360), // PDP Afterglow AX.1 (unlisted)
    VendorEntry::new(0x0e6f, 0x0501, ControllerType::Xbox360), // PDP Xbox 360 Controller (unlisted)
    VendorEntry::new(0x0e6f, 0xf900, ControllerType::Xbox360), // PDP Afterglow AX.1 (unlisted)
    VendorEntry::new(0x0f0d, 0x000a, ControllerType::Xbox360), // Hori Co. DOA4 FightStick
    VendorEntry::new(0x0f0d, 0x000c, ControllerType::Xbox360), // Hori PadEX Turbo
    VendorEntry::new(0x0f0d, 0x000d, ControllerType::Xbox360), // Hori Fighting Stick EX2
    VendorEntry::new(0x0f0d, 0x0016, ControllerType::Xbox360), // Hori Real Arcade Pro.EX
    VendorEntry::new(0x0f0d, 0x001b, ControllerType::Xbox360), // Hori Real Arcade Pro VX
    VendorEntry::new(0x0f0d, 0x008c, ControllerType::Xbox360), // Hori Real Arcade Pro 4
    VendorEntry::named(0x0f0d, 0x00db, ControllerType::Xbox360, "HORI Slime Controller"), // Hori Dragon Quest Slime Controller
    VendorEntry::new(0x0f0d, 0x011e, ControllerType::Xbox360), // Hori Fighting Stick α
    VendorEntry::named(0x1038, 0x1430, ControllerType::Xbox360, "SteelSeries Stratus Duo"), // SteelSeries Stratus Duo
    VendorEntry::named(0x1038, 0x1431, ControllerType::Xbox360, "SteelSeries Stratus Duo"), // SteelSeries Stratus Duo
    VendorEntry::new(0x1038, 0xb360, ControllerType::Xbox360), // SteelSeries Nimbus/Stratus XL
    VendorEntry::new(0x11c9, 0x55f0, ControllerType::Xbox360), // Nacon GC-100XF
    VendorEntry::new(0x12ab, 0x0004, ControllerType::Xbox360), // Honey Bee Xbox360 dancepad
    VendorEntry::new(0x12ab, 0x0301, ControllerType::Xbox360), // PDP AFTERGLOW AX.1
    VendorEntry::new(0x12ab, 0x0303, ControllerType::Xbox360), // Mortal Kombat Klassic FightStick
    VendorEntry::new(0x1430, 0x02a0, ControllerType::Xbox360), // RedOctane Controller Adapter
    VendorEntry::new(0x1430, 0x4748, ControllerType::Xbox360), // RedOctane Guitar Hero X-plorer
    VendorEntry::new(0x1430, 0xf801, ControllerType::Xbox360), // RedOctane Controller
    VendorEntry::new(0x146b, 0x0601, ControllerType::Xbox360), // BigBen Interactive XBOX 360 Controller
    VendorEntry::new(0x15e4, 0x3f00, ControllerType::Xbox360), // Power A Mini Pro Elite
    VendorEntry::new(0x15e4, 0x3f0a, ControllerType::Xbox360), // Xbox Airflo wired controller
    VendorEntry::new(0x15e4, 0x3f10, ControllerType::Xbox360), // Batarang Xbox 360 controller
    VendorEntry::new(0x162e, 0xbeef, ControllerType::Xbox360), // Joytech Neo-Se Take2
    VendorEntry::new(0x1689, 0xfd00, ControllerType::Xbox360), // Razer Onza Tournament Edition
    VendorEntry::new(0x1689, 0xfd01, ControllerType::Xbox360), // Razer Onza Classic Edition
    VendorEntry::new(0x1689, 0xfe00, ControllerType::Xbox360), // Razer Sabertooth
    VendorEntry::named(0x1949, 0x041a, ControllerType::Xbox360, "Amazon Luna Controller"), // Amazon Luna Controller
    VendorEntry::new(0x1bad, 0x0002, ControllerType::Xbox360), // Harmonix Rock Band Guitar
    VendorEntry::new(0x1bad, 0x0003, ControllerType::Xbox360), // Harmonix Rock Band Drumkit
    VendorEntry::new(0x1bad, 0xf016, ControllerType::Xbox360), // Mad Catz Xbox 360 Controller
    VendorEntry::new(0x1bad, 0xf018, ControllerType::Xbox360), // Mad Catz Street Fighter IV SE Fighting Stick
    VendorEntry::new(0x1bad, 0xf019, ControllerType::Xbox360), // Mad Catz Brawlstick for Xbox 360
    VendorEntry::new(0x1bad, 0xf021, ControllerType::Xbox360), // Mad Cats Ghost Recon FS GamePad
    VendorEntry::new(0x1bad, 0xf023, ControllerType::Xbox360), // MLG Pro Circuit Controller (Xbox)
    VendorEntry::new(0x1bad, 0xf025, ControllerType::Xbox360), // Mad Catz Call Of Duty
    VendorEntry::new(0x1bad, 0xf027, ControllerType::Xbox360), // Mad Catz FPS Pro
    VendorEntry::new(0x1bad, 0xf028, ControllerType::Xbox360), // Street Fighter IV FightPad
    VendorEntry::new(0x1bad, 0xf02e, ControllerType::Xbox360), // Mad Catz Fightpad
    VendorEntry::new(0x1bad, 0xf036, ControllerType::Xbox360), // Mad Catz MicroCon GamePad Pro
    VendorEntry::new(0x1bad, 0xf038, ControllerType::Xbox360), // Street Fighter IV FightStick TE
    VendorEntry::new(0x1bad, 0xf039, ControllerType::Xbox360), // Mad Catz MvC2 TE
    VendorEntry::new(0x1bad, 0xf03a, ControllerType::Xbox360), // Mad Catz SFxT Fightstick Pro
    VendorEntry::new(0x1bad, 0xf03d, ControllerType::Xbox360), // Street Fighter IV Arcade Stick TE - Chun Li
    VendorEntry::new(0x1bad, 0xf03e, ControllerType::Xbox360), // Mad Catz MLG FightStick TE
    VendorEntry::new(0x1bad, 0xf03f, ControllerType::Xbox360), // Mad Catz FightStick SoulCaliber
    VendorEntry::new(0x1bad, 0xf042, ControllerType::Xbox360), // Mad Catz FightStick TES+
    VendorEntry::new(0x1bad, 0xf080, ControllerType::Xbox360), // Mad Catz FightStick TE2
    VendorEntry::new(0x1bad, 0xf501, ControllerType::Xbox360), // HoriPad EX2 Turbo
    VendorEntry::new(0x1bad, 0xf502, ControllerType::Xbox360), // Hori Real Arcade Pro.VX SA
    VendorEntry::new(0x1bad, 0xf503, ControllerType::Xbox360), // Hori Fighting Stick VX
    VendorEntry::new(0x1bad, 0xf504, ControllerType::Xbox360), // Hori Real Arcade Pro. EX
    VendorEntry::new(0x1bad, 0xf505, ControllerType::Xbox360), // Hori Fighting Stick EX2B
    VendorEntry::new(0x1bad, 0xf506, ControllerType::Xbox360), // Hori Real Arcade Pro.EX Premium VLX
    VendorEntry::new(0x1bad, 0xf900, ControllerType::Xbox360), // Harmonix Xbox 360 Controller
    VendorEntry::new(0x1bad, 0xf901, ControllerType::Xbox360), // Gamestop Xbox 360 Controller
    VendorEntry::new(0x1bad, 0xf902, ControllerType::Xbox360), // Mad Catz Gamepad2
    VendorEntry::new(0x1bad, 0xf903, ControllerType::Xbox360), // Tron Xbox 360 controller
    VendorEntry::new(0x1bad, 0xf904, ControllerType::Xbox360), // PDP Versus Fighting Pad
    VendorEntry::new(0x1bad, 0xf906, ControllerType::Xbox360), // MortalKombat FightStick
    VendorEntry::new(0x1bad, 0xfa01, ControllerType::Xbox360), // MadCatz GamePad
    VendorEntry::new(0x1bad, 0xfd00, ControllerType::Xbox360), // Razer Onza TE
    VendorEntry::new(0x1bad, 0xfd01, ControllerType::Xbox360), // Razer Onza
    VendorEntry::new(0x24c6, 0x5000, ControllerType::Xbox360), // Razer Atrox Arcade Stick
    VendorEntry::new(0x24c6, 0x5300, ControllerType::Xbox360), // PowerA MINI PROEX Controller
    VendorEntry::new(0x24c6, 0x5303, ControllerType::Xbox360), // Xbox Airflo wired controller
    VendorEntry::new(0x24c6, 0x530a, ControllerType::Xbox360), // Xbox 360 Pro EX Controller
    VendorEntry::new(0x24c6, 0x531a, ControllerType::Xbox360), // PowerA Pro Ex
    VendorEntry::new(0x24c6, 0x5397, ControllerType::Xbox360), // FUS1ON Tournament Controller
    VendorEntry::new(0x24c6, 0x5500, ControllerType::Xbox360), // Hori XBOX 360 EX 2 with Turbo
    VendorEntry::new(0x24c6, 0x5501, ControllerType::Xbox360), // Hori Real Arcade Pro VX-SA
    VendorEntry::new(0x24c6, 0x5502, ControllerType::Xbox360), // Hori Fighting Stick VX Alt
    VendorEntry::new(0x24c6, 0x5503, ControllerType::Xbox360), // Hori Fighting Edge
    VendorEntry::new(0x24c6, 0x5506, ControllerType::Xbox360), // Hori SOULCALIBUR V Stick
    VendorEntry::new(0x24c6, 0x550d, ControllerType::Xbox360), // Hori GEM Xbox controller
    VendorEntry::new(0x24c6, 0x550e, ControllerType::Xbox360), // Hori Real Arcade Pro V Kai 360
    VendorEntry::new(0x24c6, 0x5508, ControllerType::Xbox360), // Hori PAD A
    VendorEntry::new(0x24c6, 0x5510, ControllerType::Xbox360), // Hori Fighting Commander ONE
    VendorEntry::new(0x24c6, 0x5b00, ControllerType::Xbox360), // ThrustMaster Ferrari Italia 458 Racing Wheel
    VendorEntry::new(0x24c6, 0x5b02, ControllerType::Xbox360), // Thrustmaster, Inc. GPX Controller
    VendorEntry::new(0x24c6, 0x5b03, ControllerType::Xbox360), // Thrustmaster Ferrari 458 Racing Wheel
    VendorEntry::new(0x24c6, 0x5d04, ControllerType::Xbox360), // Razer Sabertooth
    VendorEntry::new(0x24c6, 0xfafa, ControllerType::Xbox360), // Aplay Controller
    VendorEntry::new(0x24c6, 0xfafb, ControllerType::Xbox360), // Aplay Controller
    VendorEntry::new(0x24c6, 0xfafc, ControllerType::Xbox360), // Afterglow Gamepad 1
    VendorEntry::new(0x24c6, 0xfafd, ControllerType::Xbox360), // Afterglow Gamepad 3
    VendorEntry::new(0x24c6, 0xfafe, ControllerType::Xbox360), // Rock Candy Gamepad for Xbox 360
    VendorEntry::new(0x044f, 0xd012, ControllerType::XboxOne), // ThrustMaster eSwap PRO Controller Xbox
    VendorEntry::named(0x045e, 0x02d1, ControllerType::XboxOne, "Xbox One Controller"), // Microsoft X-Box One pad
    VendorEntry::named(0x045e, 0x02dd, ControllerType::XboxOne, "Xbox One Controller"), // Microsoft X-Box One pad (Firmware 2015)
    VendorEntry::named(0x045e, 0x02e0, ControllerType::XboxOne, "Xbox One S Controller"), // Microsoft X-Box One S pad (Bluetooth)
    VendorEntry::named(0x045e, 0x02e3, ControllerType::XboxOne, "Xbox One Elite Controller"), // Microsoft X-Box One Elite pad
    VendorEntry::named(0x045e, 0x02ea, ControllerType::XboxOne, "Xbox One S Controller"), // Microsoft X-Box One S pad
    VendorEntry::named(0x045e, 0x02fd, ControllerType::XboxOne, "Xbox One S Controller"), // Microsoft X-Box One S pad (Bluetooth)
    VendorEntry::new(0x045e, 0x02ff, ControllerType::XboxOne), // Microsoft X-Box One controller with XBOXGIP driver on Windows
    VendorEntry::named(0x045e, 0x0b00, ControllerType::XboxOne, "Xbox One Elite 2 Controller"), // Microsoft X-Box One Elite Series 2 pad
    VendorEntry::named(0x045e, 0x0b05, ControllerType::XboxOne, "Xbox One Elite 2 Controller"), // Microsoft X-Box One Elite Series 2 pad (Bluetooth)
    VendorEntry::named(0x045e, 0x0b0a, ControllerType::XboxOne, "Xbox Adaptive Controller"), // Microsoft X-Box Adaptive pad
    VendorEntry::named(0x045e, 0x0b0c, ControllerType::XboxOne, "Xbox Adaptive Controller"), // Microsoft X-Box Adaptive pad (Bluetooth)
    VendorEntry::named(0x045e, 0x0b12, ControllerType::XboxOne, "Xbox Series X Controller"), // Microsoft X-Box Series X pad
    VendorEntry::named(0x045e, 0x0b13, ControllerType::XboxOne, "Xbox Series X Controller"), // Microsoft X-Box Series X pad (BLE)
    VendorEntry::named(0x045e, 0x0b20, ControllerType::XboxOne, "Xbox One S Controller"), // Microsoft X-Box One S pad (BLE)
    VendorEntry::named(0x045e, 0x0b21, ControllerType::XboxOne, "Xbox Adaptive Controller"), // Microsoft X-Box Adaptive pad (BLE)
    VendorEntry::named(0x045e, 0x0b22, ControllerType::XboxOne, "Xbox One Elite 2 Controller"), // Microsoft X-Box One Elite Series 2 pad (BLE)
    VendorEntry::new(0x0738, 0x4a01, ControllerType::XboxOne), // Mad Catz FightStick TE 2
    VendorEntry::named(0x0e6f, 0x0139, ControllerType::XboxOne, "PDP Xbox One Afterglow"), // PDP Afterglow Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x013B, ControllerType::XboxOne, "PDP Xbox One Face-Off Controller"), // PDP Face-Off Gamepad for Xbox One
    VendorEntry::new(0x0e6f, 0x013a, ControllerType::XboxOne), // PDP Xbox One Controller (unlisted)
    VendorEntry::named(0x0e6f, 0x0145, ControllerType::XboxOne, "PDP MK X Fight Pad"), // PDP MK X Fight Pad for Xbox One
    VendorEntry::named(0x0e6f, 0x0146, ControllerType::XboxOne, "PDP Xbox One Rock Candy"), // PDP Rock Candy Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x015b, ControllerType::XboxOne, "PDP Fallout 4 Vault Boy Controller"), // PDP Fallout 4 Vault Boy Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x015c, ControllerType::XboxOne, "PDP Xbox One @Play Controller"), // PDP @Play Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x015d, ControllerType::XboxOne, "PDP Mirror's Edge Controller"), // PDP Mirror's Edge Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x015f, ControllerType::XboxOne, "PDP Metallic Controller"), // PDP Metallic Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x0160, ControllerType::XboxOne, "PDP NFL Face-Off Controller"), // PDP NFL Official Face-Off Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x0161, ControllerType::XboxOne, "PDP Xbox One Camo"), // PDP Camo Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x0162, ControllerType::XboxOne, "PDP Xbox One Controller"), // PDP Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x0163, ControllerType::XboxOne, "PDP Deliverer of Truth"), // PDP Legendary Collection: Deliverer of Truth
    VendorEntry::named(0x0e6f, 0x0164, ControllerType::XboxOne, "PDP Battlefield 1 Controller"), // PDP Battlefield 1 Official Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x0165, ControllerType::XboxOne, "PDP Titanfall 2 Controller"), // PDP Titanfall 2 Official Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x0166, ControllerType::XboxOne, "PDP Mass Effect: Andromeda Controller"), // PDP Mass Effect: Andromeda Official Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x0167, ControllerType::XboxOne, "PDP Halo Wars 2 Face-Off Controller"), // PDP Halo Wars 2 Official Face-Off Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x0205, ControllerType::XboxOne, "PDP Victrix Pro Fight Stick"), // PDP Victrix Pro Fight Stick
    VendorEntry::named(0x0e6f, 0x0206, ControllerType::XboxOne, "PDP Mortal Kombat Controller"), // PDP Mortal Kombat 25 Anniversary Edition Stick (Xbox One)
    VendorEntry::named(0x0e6f, 0x0246, ControllerType::XboxOne, "PDP Xbox One Rock Candy"), // PDP Rock Candy Wired Controller for Xbox One
    VendorEntry::named(0x0e6f, 0x0261, ControllerType::XboxOne, "PDP Xbox One Camo"), // PDP Camo Wired Controller
    VendorEntry::named(0x0e6f, 0x0262, ControllerType::XboxOne, "PDP Xbox One Controller"), // PDP Wired Controller
    VendorEntry::named(0x0e6f, 0x02a0, ControllerType::XboxOne, "PDP Xbox One Midnight Blue"), // PDP Wired Controller for Xbox One - Midnight Blue
    VendorEntry::named(0x0e6f, 0x02a1, ControllerType::XboxOne, "PDP Xbox One Verdant Green"), // PDP Wired Controller for Xbox One - Verdant Green
    VendorEntry::named(0x0e6f, 0x02a2, ControllerType::XboxOne, "PDP Xbox One Crimson Red"), // PDP Wired Controller for Xbox One - Crimson Red
    VendorEntry::named(0x0e6f, 0x02a3, ControllerType::XboxOne, "PDP Xbox One Arctic White"), // PDP Wired Controller for Xbox One - Arctic White
    VendorEntry::named(0x0e6f, 0x02a4, ControllerType::XboxOne, "PDP Xbox One Phantom Black"), // PDP Wired Controller for Xbox One - Stealth Series | Phantom Black
    VendorEntry::named(0x0e6f, 0x02a5, ControllerType::XboxOne, "PDP Xbox One Ghost White"), // PDP Wired Controller for Xbox One - Stealth Series | Ghost White
    VendorEntry::named(0x0e6f, 0x02a6, ControllerType::XboxOne, "PDP Xbox One Revenant Blue"), // PDP Wired Controller for Xbox One - Stealth Series | Revenant Blue
    VendorEntry::named(0x0e6f, 0x02a7, ControllerType::XboxOne, "PDP Xbox One Raven Black"), // PDP Wired Controller for Xbox One - Raven Black
    VendorEntry::named(0x0e6f, 0x02a8, ControllerType::XboxOne, "PDP Xbox One Arctic White"), // PDP Wired Controller for Xbox One - Arctic White
    VendorEntry::named(0x0e6f, 0x02a9, ControllerType::XboxOne, "PDP Xbox One Midnight Blue"), // PDP Wired Controller for Xbox One - Midnight Blue
    VendorEntry::named(0x0e6f, 0x02aa, ControllerType::XboxOne, "PDP Xbox One Verdant Green"), // PDP Wired Controller for Xbox One - Verdant Green
    VendorEntry::named(0x0e6f, 0x02ab, ControllerType::XboxOne, "PDP Xbox One Crimson Red"), // PDP Wired Controller for Xbox One - Crimson Red
    VendorEntry::named(0x0e6f, 0x02ac, ControllerType::XboxOne, "PDP Xbox One Ember Orange"), // PDP Wired Controller for Xbox One - Ember Orange
    VendorEntry::named(0x0e6f, 0x02ad, ControllerType::XboxOne, "PDP Xbox One Phantom Black"), // PDP Wired Controller for Xbox One - Stealth Series | Phantom Black
    VendorEntry::named(0x0e6f, 0x02ae, ControllerType::XboxOne, "PDP Xbox One Ghost White"), // PDP Wired Controller for Xbox One - Stealth Series | Ghost White
    VendorEntry::named(0x0e6f, 0x02af, ControllerType::XboxOne, "PDP Xbox One Revenant Blue"), // PDP Wired Controller for Xbox One - Stealth Series | Revenant Blue
    VendorEntry::named(0x0e6f, 0x02b0, ControllerType::XboxOne, "PDP Xbox One Raven Black"), // PDP Wired Controller for Xbox One - Raven Black
    VendorEntry::named(0x0e6f, 0x02b1, ControllerType::XboxOne, "PDP Xbox One Arctic White"), // PDP Wired Controller for Xbox One - Arctic White
    VendorEntry::named(0x0e6f, 0x02b3, ControllerType::XboxOne, "PDP Xbox One Afterglow"), // PDP Afterglow Prismatic Wired Controller
    VendorEntry::named(0x0e6f, 0x02b5, ControllerType::XboxOne, "PDP Xbox One GAMEware Controller"), // PDP GAMEware Wired Controller Xbox One
    VendorEntry::new(0x0e6f, 0x02b6, ControllerType::XboxOne), // PDP One-Handed Joystick Adaptive Controller
    VendorEntry::named(0x0e6f, 0x02bd, ControllerType::XboxOne, "PDP Xbox One Royal Purple"), // PDP Wired Controller for Xbox One - Royal Purple
    VendorEntry::named(0x0e6f, 0x02be, ControllerType::XboxOne, "PDP Xbox One Raven Black"), // PDP Deluxe Wired Controller for Xbox One - Raven Black
    VendorEntry::named(0x0e6f, 0x02bf, ControllerType::XboxOne, "PDP Xbox One Midnight Blue"), // PDP Deluxe Wired Controller for Xbox One - Midnight Blue
    VendorEntry::named(0x0e6f, 0x02c0, ControllerType::XboxOne, "PDP Xbox One Phantom Black"), // PDP Deluxe Wired Controller for Xbox One - Stealth Series | Phantom Black
    VendorEntry::named(0x0e6f, 0x02c1, ControllerType::XboxOne, "PDP Xbox One Ghost White"), // PDP Deluxe Wired Controller for Xbox One - Stealth Series | Ghost White
    VendorEntry::named(0x0e6f, 0x02c2, ControllerType::XboxOne, "PDP Xbox One Revenant Blue"), // PDP Deluxe Wired Controller for Xbox One - Stealth Series | Revenant Blue
    VendorEntry::named(0x0e6f, 0x02c3, ControllerType::XboxOne, "PDP Xbox One Verdant Green"), // PDP Deluxe Wired Controller for Xbox One - Verdant Green
    VendorEntry::named(0x0e6f, 0x02c4, ControllerType::XboxOne, "PDP Xbox One Ember Orange"), // PDP Deluxe Wired Controller for Xbox One - Ember Orange
    VendorEntry::named(0x0e6f, 0x02c5, ControllerType::XboxOne, "PDP Xbox One Royal Purple"), // PDP Deluxe Wired Controller for Xbox One - Royal Purple
    VendorEntry::named(0x0e6f, 0x02c6, ControllerType::XboxOne, "PDP Xbox One Crimson Red"), // PDP Deluxe Wired Controller for Xbox One - Crimson Red
    VendorEntry::named(0x0e6f, 0x02c7, ControllerType::XboxOne, "PDP Xbox One Arctic White"), // PDP Deluxe Wired Controller for Xbox One - Arctic White
    VendorEntry::named(0x0e6f, 0x02c8, ControllerType::XboxOne, "PDP Kingdom Hearts Controller"), // PDP Kingdom Hearts Wired Controller
    VendorEntry::named(0x0e6f, 0x02c9, ControllerType::XboxOne, "PDP Xbox One Phantasm Red"), // PDP Deluxe Wired Controller for Xbox One - Stealth Series | Phantasm Red
    VendorEntry::named(0x0e6f, 0x02ca, ControllerType::XboxOne, "PDP Xbox One Specter Violet"), // PDP Deluxe Wired Controller for Xbox One - Stealth Series | Specter Violet
    VendorEntry::named(0x0e6f, 0x02cb, ControllerType::XboxOne, "PDP Xbox One Specter Violet"), // PDP Wired Controller for Xbox One - Stealth Series | Specter Violet
    VendorEntry::named(0x0e6f, 0x02cd, ControllerType::XboxOne, "PDP Xbox One Blu-merang"), // PDP Rock Candy Wired Controller for Xbox One - Blu-merang
    VendorEntry::named(0x0e6f, 0x02ce, ControllerType::XboxOne, "PDP Xbox One Cranblast"), // PDP Rock Candy Wired Controller for Xbox One - Cranblast
    VendorEntry::named(0x0e6f, 0x02cf, ControllerType::XboxOne, "PDP Xbox One Aqualime"), // PDP Rock Candy Wired Controller for Xbox One - Aqualime
    VendorEntry::named(0x0e6f, 0x02d5, ControllerType::XboxOne, "PDP Xbox One Red Camo"), // PDP Wired Controller for Xbox One - Red Camo
    VendorEntry::named(0x0e6f, 0x0346, ControllerType::XboxOne, "PDP Xbox One RC Gamepad"), // PDP RC Gamepad for Xbox One
    VendorEntry::named(0x0e6f, 0x0446, ControllerType::XboxOne, "PDP Xbox One RC Gamepad"), // PDP RC Gamepad for Xbox One
    VendorEntry::named(0x0e6f, 0x02da, ControllerType::XboxOne, "PDP Xbox Series X Afterglow"), // PDP Xbox Series X Afterglow
    VendorEntry::named(0x0e6f, 0x02d6, ControllerType::XboxOne, "Victrix Gambit Tournament Controller"), // Victrix Gambit Tournament Controller
    VendorEntry::named(0x0e6f, 0x02d9, ControllerType::XboxOne, "PDP Xbox Series X Midnight Blue"), // PDP Xbox Series X Midnight Blue
    VendorEntry::new(0x0f0d, 0x0063, ControllerType::XboxOne), // Hori Real Arcade Pro Hayabusa (USA) Xbox One
    VendorEntry::new(0x0f0d, 0x0067, ControllerType::XboxOne), // HORIPAD ONE
    VendorEntry::new(0x0f0d, 0x0078, ControllerType::XboxOne), // Hori Real Arcade Pro V Kai Xbox One
    VendorEntry::new(0x0f0d, 0x00c5, ControllerType::XboxOne), // HORI Fighting Commander
    VendorEntry::new(0x0f0d, 0x0150, ControllerType::XboxOne), // HORI Fighting Commander OCTA for Xbox Series X
    VendorEntry::new(0x1532, 0x0a00, ControllerType::XboxOne), // Razer Atrox Arcade Stick
    VendorEntry::new(0x1532, 0x0a03, ControllerType::XboxOne), // Razer Wildcat
    VendorEntry::new(0x1532, 0x0a14, ControllerType::XboxOne), // Razer Wolverine Ultimate
    VendorEntry::new(0x1532, 0x0a15, ControllerType::XboxOne), // Razer Wolverine Tournament Edition
    VendorEntry::named(0x20d6, 0x2001, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller - Black Inline
    VendorEntry::named(0x20d6, 0x2002, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Gray/White Inline
    VendorEntry::named(0x20d6, 0x2003, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Green Inline
    VendorEntry::named(0x20d6, 0x2004, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Pink inline
    VendorEntry::named(0x20d6, 0x2005, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X Wired Controller Core - Black
    VendorEntry::named(0x20d6, 0x2006, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X Wired Controller Core - White
    VendorEntry::named(0x20d6, 0x2009, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Red inline
    VendorEntry::named(0x20d6, 0x200a, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Blue inline
    VendorEntry::named(0x20d6, 0x200b, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Camo Metallic Red
    VendorEntry::named(0x20d6, 0x200c, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Camo Metallic Blue
    VendorEntry::named(0x20d6, 0x200d, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Seafoam Fade
    VendorEntry::named(0x20d6, 0x200e, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Midnight Blue
    VendorEntry::named(0x20d6, 0x200f, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Soldier Green
    VendorEntry::named(0x20d6, 0x2011, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired - Metallic Ice
    VendorEntry::named(0x20d6, 0x2012, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X Cuphead EnWired Controller - Mugman
    VendorEntry::named(0x20d6, 0x2015, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller - Blue Hint
    VendorEntry::named(0x20d6, 0x2016, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller - Green Hint
    VendorEntry::named(0x20d6, 0x2017, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Cntroller - Arctic Camo
    VendorEntry::named(0x20d6, 0x2018, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Arc Lightning
    VendorEntry::named(0x20d6, 0x2019, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Royal Purple
    VendorEntry::named(0x20d6, 0x201a, ControllerType::XboxOne, "PowerA Xbox Series X Controller"), // PowerA Xbox Series X EnWired Controller Nebula
    VendorEntry::named(0x20d6, 0x4001, ControllerType::XboxOne, "PowerA Fusion Pro 2 Controller"), // PowerA Fusion Pro 2 Wired Controller (Xbox Series X style)
    VendorEntry::named(0x20d6, 0x4002, ControllerType::XboxOne, "PowerA Spectra Infinity Controller"), // PowerA Spectra Infinity Wired Controller (Xbox Series X style)
    VendorEntry::new(0x24c6, 0x541a, ControllerType::XboxOne), // PowerA Xbox One Mini Wired Controller
    VendorEntry::new(0x24c6, 0x542a, ControllerType::XboxOne), // Xbox ONE spectra
    VendorEntry::named(0x24c6, 0x543a, ControllerType::XboxOne, "PowerA Xbox One Controller"), // PowerA Xbox ONE liquid metal controller
    VendorEntry::new(0x24c6, 0x551a, ControllerType::XboxOne), // PowerA FUSION Pro Controller
    VendorEntry::new(0x24c6, 0x561a, ControllerType::XboxOne), // PowerA FUSION Controller
    VendorEntry::new(0x24c6, 0x581a, ControllerType::XboxOne), // BDA XB1 Classic Controller
    VendorEntry::new(0x24c6, 0x591a, ControllerType::XboxOne), // PowerA FUSION Pro Controller
    VendorEntry::new(0x24c6, 0x592a, ControllerType::XboxOne), // BDA XB1 Spectra Pro
    VendorEntry::new(0x24c6, 0x791a, ControllerType::XboxOne), // PowerA Fusion Fight Pad
    VendorEntry::new(0x2dc8, 0x2002, ControllerType::XboxOne), // 8BitDo Ultimate Wired Controller for Xbox
    VendorEntry::new(0x2e24, 0x0652, ControllerType::XboxOne), // Hyperkin Duke
    VendorEntry::new(0x2e24, 0x1618, ControllerType::XboxOne), // Hyperkin Duke
    VendorEntry::new(0x2e24, 0x1688, ControllerType::XboxOne), // Hyperkin X91
    VendorEntry::new(0x146b, 0x0611, ControllerType::XboxOne), // Xbox Controller Mode for NACON Revolution 3
    VendorEntry::new(0x0000, 0x0000, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x045e, 0x02a2, ControllerType::Xbox360), // Unknown Controller - Microsoft VID
    VendorEntry::new(0x0e6f, 0x1414, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0e6f, 0x0159, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x24c6, 0xfaff, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0f0d, 0x006d, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0f0d, 0x00a4, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0079, 0x1832, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0079, 0x187f, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0079, 0x1883, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x03eb, 0xff01, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0c12, 0x0ef8, ControllerType::Xbox360), // Homemade fightstick based on brook pcb (with XInput driver??)
    VendorEntry::new(0x046d, 0x1000, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x1345, 0x6006, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x056e, 0x2012, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x146b, 0x0602, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0f0d, 0x00ae, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x046d, 0x0401, ControllerType::Xbox360), // logitech xinput
    VendorEntry::new(0x046d, 0x0301, ControllerType::Xbox360), // logitech xinput
    VendorEntry::new(0x046d, 0xcaa3, ControllerType::Xbox360), // logitech xinput
    VendorEntry::new(0x046d, 0xc261, ControllerType::Xbox360), // logitech xinput
    VendorEntry::new(0x046d, 0x0291, ControllerType::Xbox360), // logitech xinput
    VendorEntry::new(0x0079, 0x18d3, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0f0d, 0x00b1, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0001, 0x0001, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0079, 0x188e, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0079, 0x187c, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0079, 0x189c, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x0079, 0x1874, ControllerType::Xbox360), // Unknown Controller
    VendorEntry::new(0x2f24, 0x0050, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x2f24, 0x2e, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x9886, 0x24, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x2f24, 0x91, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x1430, 0x719, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xf0d, 0xed, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xf0d, 0xc0, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x152, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2a7, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x46d, 0x1007, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2b8, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2a8, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x79, 0x18a1, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x0, 0x6686, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x11ff, 0x511, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x12ab, 0x304, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x1430, 0x291, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x1430, 0x2a9, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x1430, 0x70b, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x1bad, 0x28e, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x1bad, 0x2a0, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x1bad, 0x5500, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x20ab, 0x55ef, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x24c6, 0x5509, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x2516, 0x69, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x25b1, 0x360, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x2c22, 0x2203, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x2f24, 0x11, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x2f24, 0x53, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x2f24, 0xb7, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x46d, 0x0, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x46d, 0x1004, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x46d, 0x1008, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x46d, 0xf301, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x738, 0x2a0, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x738, 0x7263, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x738, 0xb738, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x738, 0xcb29, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x738, 0xf401, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x79, 0x18c2, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x79, 0x18c8, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x79, 0x18cf, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xc12, 0xe17, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xc12, 0xe1c, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xc12, 0xe22, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xc12, 0xe30, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xd2d2, 0xd2d2, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xd62, 0x9a1a, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xd62, 0x9a1b, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe00, 0xe00, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x12a, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2a1, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2a2, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2a5, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2b2, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2bd, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2bf, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2c0, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0x2c6, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xf0d, 0x97, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xf0d, 0xba, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xf0d, 0xd8, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xfff, 0x2a1, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x45e, 0x867, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x16d0, 0xf3f, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x2f24, 0x8f, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0xe6f, 0xf501, ControllerType::XboxOne), // Unknown Controller
    VendorEntry::new(0x05ac, 0x0001, ControllerType::Apple), // MFI Extended Gamepad (generic entry for iOS/tvOS)
    VendorEntry::new(0x05ac, 0x0002, ControllerType::Apple), // MFI Standard Gamepad (generic entry for iOS/tvOS)
    VendorEntry::new(0x057e, 0x2006, ControllerType::SwitchJoyConLeft), // Nintendo Switch Joy-Con (Left)
    VendorEntry::new(0x057e, 0x2007, ControllerType::SwitchJoyConRight), // Nintendo Switch Joy-Con (Right)
    VendorEntry::new(0x057e, 0x2008, ControllerType::SwitchJoyConPair), // Nintendo Switch Joy-Con (Left+Right Combined)
    VendorEntry::new(0x057e, 0x2009, ControllerType::SwitchPro), // Nintendo Switch Pro Controller
    VendorEntry::new(0x057e, 0x2017, ControllerType::SwitchPro), // Nintendo Online SNES Controller
    VendorEntry::new(0x057e, 0x2019, ControllerType::SwitchPro), // Nintendo Online N64 Controller
    VendorEntry::new(0x057e, 0x201e, ControllerType::SwitchPro), // Nintendo Online SEGA Genesis Controller
    VendorEntry::new(0x0f0d, 0x00c1, ControllerType::SwitchInputOnly), // HORIPAD for Nintendo Switch
    VendorEntry::new(0x0f0d, 0x0092, ControllerType::SwitchInputOnly), // HORI Pokken Tournament DX Pro Pad
    VendorEntry::new(0x0f0d, 0x00f6, ControllerType::SwitchPro), // HORI Wireless Switch Pad
    VendorEntry::new(0x0f0d, 0x00dc, ControllerType::XInputSwitch), // HORIPAD S - Looks like a Switch controller but uses the Xbox 360 controller protocol
    VendorEntry::new(0x0e6f, 0x0180, ControllerType::SwitchInputOnly), // PDP Faceoff Wired Pro Controller for Nintendo Switch
    VendorEntry::new(0x0e6f, 0x0181, ControllerType::SwitchInputOnly), // PDP Faceoff Deluxe Wired Pro Controller for Nintendo Switch
    VendorEntry::new(0x0e6f, 0x0184, ControllerType::SwitchInputOnly), // PDP Faceoff Wired Deluxe+ Audio Controller
    VendorEntry::new(0x0e6f, 0x0185, ControllerType::SwitchInputOnly), // PDP Wired Fight Pad Pro for Nintendo Switch
    VendorEntry::new(0x0e6f, 0x0186, ControllerType::SwitchPro), // PDP Afterglow Wireless Switch Controller - working gyro. USB is for charging only. Many later "Wireless" line devices w/ gyro also use this vid/pid
    VendorEntry::new(0x0e6f, 0x0187, ControllerType::SwitchInputOnly), // PDP Rockcandy Wired Controller
    VendorEntry::new(0x0e6f, 0x0188, ControllerType::SwitchInputOnly), // PDP Afterglow Wired Deluxe+ Audio Controller
    VendorEntry::new(0x0f0d, 0x00aa, ControllerType::SwitchInputOnly), // HORI Real Arcade Pro V Hayabusa in Switch Mode
    VendorEntry::new(0x20d6, 0xa711, ControllerType::SwitchInputOnly), // PowerA Wired Controller Plus/PowerA Wired Controller Nintendo GameCube Style
    VendorEntry::new(0x20d6, 0xa712, ControllerType::SwitchInputOnly), // PowerA Nintendo Switch Fusion Fight Pad
    VendorEntry::new(0x20d6, 0xa713, ControllerType::SwitchInputOnly), // PowerA Super Mario Controller
    VendorEntry::new(0x20d6, 0xa714, ControllerType::SwitchInputOnly), // PowerA Nintendo Switch Spectra Controller
    VendorEntry::new(0x20d6, 0xa715, ControllerType::SwitchInputOnly), // Power A Fusion Wireless Arcade Stick (USB Mode) Over BT is shows up as 057e 2009
    VendorEntry::new(0x20d6, 0xa716, ControllerType::SwitchInputOnly), // PowerA Nintendo Switch Fusion Pro Controller - USB requires toggling switch on back of device
    VendorEntry::new(0x0000, 0x11fb, ControllerType::MobileTouch), // Streaming mobile touch virtual controls
    VendorEntry::new(0x28de, 0x1101, ControllerType::SteamController), // Valve Legacy Steam Controller (CHELL)
    VendorEntry::new(0x28de, 0x1102, ControllerType::SteamController), // Valve wired Steam Controller (D0G)
    VendorEntry::new(0x28de, 0x1105, ControllerType::SteamController), // Valve Bluetooth Steam Controller (D0G)
    VendorEntry::new(0x28de, 0x1106, ControllerType::SteamController), // Valve Bluetooth Steam Controller (D0G)
    VendorEntry::new(0x28de, 0x1142, ControllerType::SteamController), // Valve wireless Steam Controller
    VendorEntry::new(0x28de, 0x1201, ControllerType::SteamControllerV2), // Valve wired Steam Controller (HEADCRAB)
    VendorEntry::new(0x28de, 0x1202, ControllerType::SteamControllerV2), // Valve Bluetooth Steam Controller (HEADCRAB)
    VendorEntry::new(0x2836, 0x0001, ControllerType::OUYA), // OUYA 1st Controller
    VendorEntry::new(0x15e4, 0x0132, ControllerType::ICade), // ION iCade
    VendorEntry::new(0x0a5c, 0x8502, ControllerType::ICade), // iCade 8-bitty
    VendorEntry::new(0x20d6, 0x6271, ControllerType::Android), // MOGA Controller, using HID mode
    VendorEntry::new(0x0b05, 0x4500, ControllerType::Android), // Asus Controller
    VendorEntry::new(0x1949, 0x0402, ControllerType::Android), // Amazon Fire gamepad Controller 1st gen
    VendorEntry::new(0x18d1, 0x9400, ControllerType::Android), // Stadia BLE mode
    VendorEntry::new(0x1949, 0x0401, ControllerType::SmartTVRemote), // Amazon Fire TV remote Controlelr 1st gen
    VendorEntry::new(0x2820, 0x0009, ControllerType::EightBitDo), // 8Bitdo NES30 Gamepro
    VendorEntry::new(0x2dc8, 0x0651, ControllerType::EightBitDo), // 8Bitdo M30
    VendorEntry::new(0x2dc8, 0x2830, ControllerType::EightBitDo), // 8Bitdo SFC30
    VendorEntry::new(0x2dc8, 0x2840, ControllerType::EightBitDo), // 8Bitdo SNES30
    VendorEntry::new(0x2dc8, 0x3230, ControllerType::EightBitDo), // 8Bitdo Zero 2
    VendorEntry::new(0x2dc8, 0x6100, ControllerType::EightBitDo), // 8Bitdo SF30 Pro
    VendorEntry::new(0x2dc8, 0x6101, ControllerType::EightBitDo), // 8Bitdo SN30 Pro
    VendorEntry::new(0x0a5c, 0x4502, ControllerType::Generic), // White-label mini gamepad received as gift in conference
    VendorEntry::new(0x0111, 0x1420, ControllerType::Nimbus), // SteelSeries Nimbus
    VendorEntry::new(0x0111, 0x1431, ControllerType::Android), // SteelSeries Stratus Duo (Bluetooth)
    VendorEntry::new(0x057e, 0x0330, ControllerType::Wii), // Nintendo Wii U Pro
    VendorEntry::new(0x057e, 0x0306, ControllerType::Wii), // Nintendo Wii Remote
];

/// Class-of-Device bitfield consulted by [`classify_fallback`].
pub use crate::bt::ClassOfDevice;

/// Linear scan of [`VENDOR_TABLE`]; first match wins. A `(0, 0)` pair (or
/// any pair absent from the table) returns [`ControllerType::Unknown`]
/// through the table's own sentinel row.
#[must_use]
pub fn classify_by_vid_pid(vid: u16, pid: u16) -> ControllerType {
    VENDOR_TABLE
        .iter()
        .find(|e| e.vid == vid && e.pid == pid)
        .map_or(ControllerType::Unknown, |e| e.controller_type)
}

/// Looks up the display name recorded for a `(vid, pid)` pair, if any.
#[must_use]
pub fn display_name(vid: u16, pid: u16) -> Option<&'static str> {
    VENDOR_TABLE.iter().find(|e| e.vid == vid && e.pid == pid).and_then(|e| e.display_name)
}

/// Class-of-Device-based fallback classifier, used when
/// [`classify_by_vid_pid`] returns `Unknown`.
#[must_use]
pub fn classify_fallback(cod: ClassOfDevice) -> ControllerType {
    if cod.is_peripheral() && cod.is_pointing_device() {
        ControllerType::GenericMouse
    } else if cod.is_peripheral() && cod.is_keyboard() {
        ControllerType::GenericKeyboard
    } else {
        // Empirically the widest-compatible HID gamepad profile.
        ControllerType::Android
    }
}

/// Nintendo Switch Pro packet-shape heuristic. Returns
/// `true` iff `packet` is exactly 13 bytes, begins with `0xA1 0x3F`, and the
/// remaining bytes are consistent with the Switch Pro button/stick report
/// layout (non-zero button/stick region is simply bounds-checked here;
/// upstream does not validate beyond length and the two leading bytes).
#[must_use]
pub fn classify_by_packet(packet: &[u8]) -> bool {
    packet.len() == 13 && packet[0] == 0xA1 && packet[1] == 0x3F
}

/// `(vid, pid)` the caller must force onto a device once
/// [`classify_by_packet`] succeeds, along with the canonical Switch HID
/// descriptor.
pub const SWITCH_PRO_VID: u16 = 0x057E;
pub const SWITCH_PRO_PID: u16 = 0x2009;

/// Canonical Nintendo Switch Pro HID report descriptor, hard-coded because
/// devices caught by [`classify_by_packet`] never went through SDP and so
/// never delivered one of their own. The Switch family decodes through
/// `parse_raw` regardless, so this descriptor only exists to satisfy
/// `Connection::flags.HAS_DESCRIPTOR` bookkeeping for downstream tooling
/// that expects every device to carry one.
#[rustfmt::skip]
pub const SWITCH_PRO_HID_DESCRIPTOR: [u8; 144] = [
    0x05, 0x01, 0x09, 0x05, 0xA1, 0x01, 0x06, 0x01, 0xFF, 0x85, 0x21, 0x09,
    0x21, 0x75, 0x08, 0x95, 0x30, 0x81, 0x02, 0x85, 0x30, 0x09, 0x30, 0x75,
    0x08, 0x95, 0x30, 0x81, 0x02, 0x85, 0x31, 0x09, 0x31, 0x75, 0x08, 0x95,
    0x30, 0x81, 0x02, 0x85, 0x32, 0x09, 0x32, 0x75, 0x08, 0x95, 0x30, 0x81,
    0x02, 0x85, 0x33, 0x09, 0x33, 0x75, 0x08, 0x95, 0x30, 0x81, 0x02, 0x85,
    0x3F, 0x05, 0x09, 0x19, 0x01, 0x29, 0x0A, 0x15, 0x00, 0x25, 0x01, 0x75,
    0x01, 0x95, 0x0A, 0x81, 0x02, 0x75, 0x01, 0x95, 0x01, 0x81, 0x03, 0x0B,
    0x01, 0x00, 0x01, 0x00, 0xA1, 0x00, 0x09, 0x39, 0x15, 0x00, 0x25, 0x07,
    0x75, 0x04, 0x95, 0x01, 0x81, 0x42, 0x75, 0x04, 0x95, 0x01, 0x81, 0x01,
    0x05, 0x01, 0x09, 0x30, 0x09, 0x31, 0x09, 0x32, 0x09, 0x35, 0x15, 0x00,
    0x27, 0xFF, 0xFF, 0x00, 0x00, 0x75, 0x10, 0x95, 0x04, 0x81, 0x02, 0xC0,
    0x0B, 0x01, 0x00, 0x0A, 0x00, 0xA1, 0x00, 0x0B, 0x01, 0x00, 0x0A, 0x00,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_first_row() {
        assert_eq!(VENDOR_TABLE[0].vid, 0);
        assert_eq!(VENDOR_TABLE[0].pid, 0);
        assert_eq!(VENDOR_TABLE[0].controller_type, ControllerType::Unknown);
    }

    #[test]
    fn scenario_1_ps3_sentinel() {
        assert_eq!(classify_by_vid_pid(0x054C, 0x0268), ControllerType::PS3);
    }

    #[test]
    fn scenario_2_ps5() {
        assert_eq!(classify_by_vid_pid(0x054C, 0x0CE6), ControllerType::PS5);
    }

    #[test]
    fn scenario_3_unknown_sentinel() {
        assert_eq!(classify_by_vid_pid(0x0000, 0x0000), ControllerType::Unknown);
    }

    #[test]
    fn unmapped_pair_is_unknown() {
        assert_eq!(classify_by_vid_pid(0xFFFF, 0xFFFF), ControllerType::Unknown);
    }

    #[test]
    fn first_match_wins_for_duplicate_rows() {
        // 0x146b/0x0d10 appears twice in the source table (Revolution
        // Infinite and Revolution Unlimited); both map to PS4, so
        // first-match-wins is unobservable by type alone, but the lookup
        // must not panic or pick a later row's display name.
        assert_eq!(classify_by_vid_pid(0x146b, 0x0d10), ControllerType::PS4);
    }

    #[test]
    fn fallback_mouse() {
        let cod = ClassOfDevice(ClassOfDevice::MAJOR_PERIPHERAL | ClassOfDevice::MINOR_POINT_DEVICE);
        assert_eq!(classify_fallback(cod), ControllerType::GenericMouse);
    }

    #[test]
    fn fallback_keyboard() {
        let cod = ClassOfDevice(ClassOfDevice::MAJOR_PERIPHERAL | ClassOfDevice::MINOR_KEYBOARD);
        assert_eq!(classify_fallback(cod), ControllerType::GenericKeyboard);
    }

    #[test]
    fn fallback_default_is_android() {
        let cod = ClassOfDevice(0);
        assert_eq!(classify_fallback(cod), ControllerType::Android);
    }

    #[test]
    fn scenario_9_switch_pro_packet_heuristic() {
        let mut packet = [0u8; 13];
        packet[0] = 0xA1;
        packet[1] = 0x3F;
        assert!(classify_by_packet(&packet));
        assert_eq!(SWITCH_PRO_VID, 0x057E);
        assert_eq!(SWITCH_PRO_PID, 0x2009);
    }

    #[test]
    fn switch_pro_packet_heuristic_rejects_wrong_length() {
        let packet = [0xA1, 0x3F, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert!(!classify_by_packet(&packet));
    }

    #[test]
    fn switch_pro_packet_heuristic_rejects_wrong_header() {
        let packet = [0xA1, 0x30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert!(!classify_by_packet(&packet));
    }

    #[test]
    fn full_report_types() {
        assert!(ControllerType::PS4.is_full_report());
        assert!(ControllerType::PS5.is_full_report());
        assert!(ControllerType::SwitchPro.is_full_report());
        assert!(!ControllerType::PS3.is_full_report());
    }
}
