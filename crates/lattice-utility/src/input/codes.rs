//! Raw keyboard codes.
//!
//! `ScanCode` values are USB HID usage ids and name a physical key position.
//! `KeyCode` values name the symbol produced under the current layout:
//! printable keys use their character value, the rest carry the scancode
//! with `SCANCODE_MASK` set.

use std::fmt;

/// Bit set on every `KeyCode` derived from a scancode.
pub const SCANCODE_MASK: u32 = 0x4000_0000;

macro_rules! raw_code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $( $variant:ident = $value:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            #[default]
            $( $variant = $value, )*
        }

        impl $name {
            /// Raw integer value of this code.
            pub const fn raw(self) -> $repr {
                self as $repr
            }

            /// Maps a raw integer back to its code, `None` for unassigned values.
            pub const fn from_raw(raw: $repr) -> Option<Self> {
                match raw {
                    $( $value => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }

        impl TryFrom<$repr> for $name {
            type Error = $repr;

            fn try_from(raw: $repr) -> Result<Self, Self::Error> {
                Self::from_raw(raw).ok_or(raw)
            }
        }

        impl From<$name> for $repr {
            fn from(code: $name) -> Self {
                code.raw()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}", self)
            }
        }
    };
}

raw_code_enum! {
    /// Physical key position, independent of keyboard layout.
    pub enum ScanCode : u16 {
        Unknown = 0,
        A = 4,
        B = 5,
        C = 6,
        D = 7,
        E = 8,
        F = 9,
        G = 10,
        H = 11,
        I = 12,
        J = 13,
        K = 14,
        L = 15,
        M = 16,
        N = 17,
        O = 18,
        P = 19,
        Q = 20,
        R = 21,
        S = 22,
        T = 23,
        U = 24,
        V = 25,
        W = 26,
        X = 27,
        Y = 28,
        Z = 29,
        Num1 = 30,
        Num2 = 31,
        Num3 = 32,
        Num4 = 33,
        Num5 = 34,
        Num6 = 35,
        Num7 = 36,
        Num8 = 37,
        Num9 = 38,
        Num0 = 39,
        Return = 40,
        Escape = 41,
        Backspace = 42,
        Tab = 43,
        Space = 44,
        Minus = 45,
        Equals = 46,
        LeftBracket = 47,
        RightBracket = 48,
        Backslash = 49,
        NonUsHash = 50,
        Semicolon = 51,
        Apostrophe = 52,
        Grave = 53,
        Comma = 54,
        Period = 55,
        Slash = 56,
        CapsLock = 57,
        F1 = 58,
        F2 = 59,
        F3 = 60,
        F4 = 61,
        F5 = 62,
        F6 = 63,
        F7 = 64,
        F8 = 65,
        F9 = 66,
        F10 = 67,
        F11 = 68,
        F12 = 69,
        PrintScreen = 70,
        ScrollLock = 71,
        Pause = 72,
        Insert = 73,
        Home = 74,
        PageUp = 75,
        Delete = 76,
        End = 77,
        PageDown = 78,
        Right = 79,
        Left = 80,
        Down = 81,
        Up = 82,
        NumLockClear = 83,
        KpDivide = 84,
        KpMultiply = 85,
        KpMinus = 86,
        KpPlus = 87,
        KpEnter = 88,
        Kp1 = 89,
        Kp2 = 90,
        Kp3 = 91,
        Kp4 = 92,
        Kp5 = 93,
        Kp6 = 94,
        Kp7 = 95,
        Kp8 = 96,
        Kp9 = 97,
        Kp0 = 98,
        KpPeriod = 99,
        NonUsBackslash = 100,
        Application = 101,
        Power = 102,
        KpEquals = 103,
        F13 = 104,
        F14 = 105,
        F15 = 106,
        F16 = 107,
        F17 = 108,
        F18 = 109,
        F19 = 110,
        F20 = 111,
        F21 = 112,
        F22 = 113,
        F23 = 114,
        F24 = 115,
        Execute = 116,
        Help = 117,
        Menu = 118,
        Select = 119,
        Stop = 120,
        Again = 121,
        Undo = 122,
        Cut = 123,
        Copy = 124,
        Paste = 125,
        Find = 126,
        Mute = 127,
        VolumeUp = 128,
        VolumeDown = 129,
        KpComma = 133,
        KpEqualsAs400 = 134,
        International1 = 135,
        International2 = 136,
        International3 = 137,
        International4 = 138,
        International5 = 139,
        International6 = 140,
        International7 = 141,
        International8 = 142,
        International9 = 143,
        Lang1 = 144,
        Lang2 = 145,
        Lang3 = 146,
        Lang4 = 147,
        Lang5 = 148,
        Lang6 = 149,
        Lang7 = 150,
        Lang8 = 151,
        Lang9 = 152,
        AltErase = 153,
        SysReq = 154,
        Cancel = 155,
        Clear = 156,
        Prior = 157,
        Return2 = 158,
        Separator = 159,
        Out = 160,
        Oper = 161,
        ClearAgain = 162,
        CrSel = 163,
        ExSel = 164,
        Kp00 = 176,
        Kp000 = 177,
        ThousandsSeparator = 178,
        DecimalSeparator = 179,
        CurrencyUnit = 180,
        CurrencySubunit = 181,
        KpLeftParen = 182,
        KpRightParen = 183,
        KpLeftBrace = 184,
        KpRightBrace = 185,
        KpTab = 186,
        KpBackspace = 187,
        KpA = 188,
        KpB = 189,
        KpC = 190,
        KpD = 191,
        KpE = 192,
        KpF = 193,
        KpXor = 194,
        KpPower = 195,
        KpPercent = 196,
        KpLess = 197,
        KpGreater = 198,
        KpAmpersand = 199,
        KpDblAmpersand = 200,
        KpVerticalBar = 201,
        KpDblVerticalBar = 202,
        KpColon = 203,
        KpHash = 204,
        KpSpace = 205,
        KpAt = 206,
        KpExclam = 207,
        KpMemStore = 208,
        KpMemRecall = 209,
        KpMemClear = 210,
        KpMemAdd = 211,
        KpMemSubtract = 212,
        KpMemMultiply = 213,
        KpMemDivide = 214,
        KpPlusMinus = 215,
        KpClear = 216,
        KpClearEntry = 217,
        KpBinary = 218,
        KpOctal = 219,
        KpDecimal = 220,
        KpHexadecimal = 221,
        LeftCtrl = 224,
        LeftShift = 225,
        LeftAlt = 226,
        LeftGui = 227,
        RightCtrl = 228,
        RightShift = 229,
        RightAlt = 230,
        RightGui = 231,
        Mode = 257,
        Sleep = 258,
        Wake = 259,
        ChannelIncrement = 260,
        ChannelDecrement = 261,
        MediaPlay = 262,
        MediaPause = 263,
        MediaRecord = 264,
        MediaFastForward = 265,
        MediaRewind = 266,
        MediaNextTrack = 267,
        MediaPreviousTrack = 268,
        MediaStop = 269,
        MediaEject = 270,
        MediaPlayPause = 271,
        MediaSelect = 272,
        AcNew = 273,
        AcOpen = 274,
        AcClose = 275,
        AcExit = 276,
        AcSave = 277,
        AcPrint = 278,
        AcProperties = 279,
        AcSearch = 280,
        AcHome = 281,
        AcBack = 282,
        AcForward = 283,
        AcStop = 284,
        AcRefresh = 285,
        AcBookmarks = 286,
        SoftLeft = 287,
        SoftRight = 288,
        Call = 289,
        EndCall = 290,
    }
}

raw_code_enum! {
    /// Layout-dependent key symbol.
    pub enum KeyCode : u32 {
        Unknown = 0x0000_0000,
        Return = 0x0000_000D,
        Escape = 0x0000_001B,
        Backspace = 0x0000_0008,
        Tab = 0x0000_0009,
        Space = 0x0000_0020,
        Exclaim = 0x0000_0021,
        DblApostrophe = 0x0000_0022,
        Hash = 0x0000_0023,
        Dollar = 0x0000_0024,
        Percent = 0x0000_0025,
        Ampersand = 0x0000_0026,
        Apostrophe = 0x0000_0027,
        LeftParen = 0x0000_0028,
        RightParen = 0x0000_0029,
        Asterisk = 0x0000_002A,
        Plus = 0x0000_002B,
        Comma = 0x0000_002C,
        Minus = 0x0000_002D,
        Period = 0x0000_002E,
        Slash = 0x0000_002F,
        Num0 = 0x0000_0030,
        Num1 = 0x0000_0031,
        Num2 = 0x0000_0032,
        Num3 = 0x0000_0033,
        Num4 = 0x0000_0034,
        Num5 = 0x0000_0035,
        Num6 = 0x0000_0036,
        Num7 = 0x0000_0037,
        Num8 = 0x0000_0038,
        Num9 = 0x0000_0039,
        Colon = 0x0000_003A,
        Semicolon = 0x0000_003B,
        Less = 0x0000_003C,
        Equals = 0x0000_003D,
        Greater = 0x0000_003E,
        Question = 0x0000_003F,
        At = 0x0000_0040,
        LeftBracket = 0x0000_005B,
        Backslash = 0x0000_005C,
        RightBracket = 0x0000_005D,
        Caret = 0x0000_005E,
        Underscore = 0x0000_005F,
        Grave = 0x0000_0060,
        A = 0x0000_0061,
        B = 0x0000_0062,
        C = 0x0000_0063,
        D = 0x0000_0064,
        E = 0x0000_0065,
        F = 0x0000_0066,
        G = 0x0000_0067,
        H = 0x0000_0068,
        I = 0x0000_0069,
        J = 0x0000_006A,
        K = 0x0000_006B,
        L = 0x0000_006C,
        M = 0x0000_006D,
        N = 0x0000_006E,
        O = 0x0000_006F,
        P = 0x0000_0070,
        Q = 0x0000_0071,
        R = 0x0000_0072,
        S = 0x0000_0073,
        T = 0x0000_0074,
        U = 0x0000_0075,
        V = 0x0000_0076,
        W = 0x0000_0077,
        X = 0x0000_0078,
        Y = 0x0000_0079,
        Z = 0x0000_007A,
        LeftBrace = 0x0000_007B,
        Pipe = 0x0000_007C,
        RightBrace = 0x0000_007D,
        Tilde = 0x0000_007E,
        Delete = 0x0000_007F,
        PlusMinus = 0x0000_00B1,
        CapsLock = 0x4000_0039,
        F1 = 0x4000_003A,
        F2 = 0x4000_003B,
        F3 = 0x4000_003C,
        F4 = 0x4000_003D,
        F5 = 0x4000_003E,
        F6 = 0x4000_003F,
        F7 = 0x4000_0040,
        F8 = 0x4000_0041,
        F9 = 0x4000_0042,
        F10 = 0x4000_0043,
        F11 = 0x4000_0044,
        F12 = 0x4000_0045,
        PrintScreen = 0x4000_0046,
        ScrollLock = 0x4000_0047,
        Pause = 0x4000_0048,
        Insert = 0x4000_0049,
        Home = 0x4000_004A,
        PageUp = 0x4000_004B,
        End = 0x4000_004D,
        PageDown = 0x4000_004E,
        Right = 0x4000_004F,
        Left = 0x4000_0050,
        Down = 0x4000_0051,
        Up = 0x4000_0052,
        NumLockClear = 0x4000_0053,
        KpDivide = 0x4000_0054,
        KpMultiply = 0x4000_0055,
        KpMinus = 0x4000_0056,
        KpPlus = 0x4000_0057,
        KpEnter = 0x4000_0058,
        Kp1 = 0x4000_0059,
        Kp2 = 0x4000_005A,
        Kp3 = 0x4000_005B,
        Kp4 = 0x4000_005C,
        Kp5 = 0x4000_005D,
        Kp6 = 0x4000_005E,
        Kp7 = 0x4000_005F,
        Kp8 = 0x4000_0060,
        Kp9 = 0x4000_0061,
        Kp0 = 0x4000_0062,
        KpPeriod = 0x4000_0063,
        Application = 0x4000_0065,
        Power = 0x4000_0066,
        KpEquals = 0x4000_0067,
        F13 = 0x4000_0068,
        F14 = 0x4000_0069,
        F15 = 0x4000_006A,
        F16 = 0x4000_006B,
        F17 = 0x4000_006C,
        F18 = 0x4000_006D,
        F19 = 0x4000_006E,
        F20 = 0x4000_006F,
        F21 = 0x4000_0070,
        F22 = 0x4000_0071,
        F23 = 0x4000_0072,
        F24 = 0x4000_0073,
        Execute = 0x4000_0074,
        Help = 0x4000_0075,
        Menu = 0x4000_0076,
        Select = 0x4000_0077,
        Stop = 0x4000_0078,
        Again = 0x4000_0079,
        Undo = 0x4000_007A,
        Cut = 0x4000_007B,
        Copy = 0x4000_007C,
        Paste = 0x4000_007D,
        Find = 0x4000_007E,
        Mute = 0x4000_007F,
        VolumeUp = 0x4000_0080,
        VolumeDown = 0x4000_0081,
        KpComma = 0x4000_0085,
        KpEqualsAs400 = 0x4000_0086,
        AltErase = 0x4000_0099,
        SysReq = 0x4000_009A,
        Cancel = 0x4000_009B,
        Clear = 0x4000_009C,
        Prior = 0x4000_009D,
        Return2 = 0x4000_009E,
        Separator = 0x4000_009F,
        Out = 0x4000_00A0,
        Oper = 0x4000_00A1,
        ClearAgain = 0x4000_00A2,
        CrSel = 0x4000_00A3,
        ExSel = 0x4000_00A4,
        Kp00 = 0x4000_00B0,
        Kp000 = 0x4000_00B1,
        ThousandsSeparator = 0x4000_00B2,
        DecimalSeparator = 0x4000_00B3,
        CurrencyUnit = 0x4000_00B4,
        CurrencySubunit = 0x4000_00B5,
        KpLeftParen = 0x4000_00B6,
        KpRightParen = 0x4000_00B7,
        KpLeftBrace = 0x4000_00B8,
        KpRightBrace = 0x4000_00B9,
        KpTab = 0x4000_00BA,
        KpBackspace = 0x4000_00BB,
        KpA = 0x4000_00BC,
        KpB = 0x4000_00BD,
        KpC = 0x4000_00BE,
        KpD = 0x4000_00BF,
        KpE = 0x4000_00C0,
        KpF = 0x4000_00C1,
        KpXor = 0x4000_00C2,
        KpPower = 0x4000_00C3,
        KpPercent = 0x4000_00C4,
        KpLess = 0x4000_00C5,
        KpGreater = 0x4000_00C6,
        KpAmpersand = 0x4000_00C7,
        KpDblAmpersand = 0x4000_00C8,
        KpVerticalBar = 0x4000_00C9,
        KpDblVerticalBar = 0x4000_00CA,
        KpColon = 0x4000_00CB,
        KpHash = 0x4000_00CC,
        KpSpace = 0x4000_00CD,
        KpAt = 0x4000_00CE,
        KpExclam = 0x4000_00CF,
        KpMemStore = 0x4000_00D0,
        KpMemRecall = 0x4000_00D1,
        KpMemClear = 0x4000_00D2,
        KpMemAdd = 0x4000_00D3,
        KpMemSubtract = 0x4000_00D4,
        KpMemMultiply = 0x4000_00D5,
        KpMemDivide = 0x4000_00D6,
        KpPlusMinus = 0x4000_00D7,
        KpClear = 0x4000_00D8,
        KpClearEntry = 0x4000_00D9,
        KpBinary = 0x4000_00DA,
        KpOctal = 0x4000_00DB,
        KpDecimal = 0x4000_00DC,
        KpHexadecimal = 0x4000_00DD,
        LeftCtrl = 0x4000_00E0,
        LeftShift = 0x4000_00E1,
        LeftAlt = 0x4000_00E2,
        LeftGui = 0x4000_00E3,
        RightCtrl = 0x4000_00E4,
        RightShift = 0x4000_00E5,
        RightAlt = 0x4000_00E6,
        RightGui = 0x4000_00E7,
        Mode = 0x4000_0101,
        Sleep = 0x4000_0102,
        Wake = 0x4000_0103,
        ChannelIncrement = 0x4000_0104,
        ChannelDecrement = 0x4000_0105,
        MediaPlay = 0x4000_0106,
        MediaPause = 0x4000_0107,
        MediaRecord = 0x4000_0108,
        MediaFastForward = 0x4000_0109,
        MediaRewind = 0x4000_010A,
        MediaNextTrack = 0x4000_010B,
        MediaPreviousTrack = 0x4000_010C,
        MediaStop = 0x4000_010D,
        MediaEject = 0x4000_010E,
        MediaPlayPause = 0x4000_010F,
        MediaSelect = 0x4000_0110,
        AcNew = 0x4000_0111,
        AcOpen = 0x4000_0112,
        AcClose = 0x4000_0113,
        AcExit = 0x4000_0114,
        AcSave = 0x4000_0115,
        AcPrint = 0x4000_0116,
        AcProperties = 0x4000_0117,
        AcSearch = 0x4000_0118,
        AcHome = 0x4000_0119,
        AcBack = 0x4000_011A,
        AcForward = 0x4000_011B,
        AcStop = 0x4000_011C,
        AcRefresh = 0x4000_011D,
        AcBookmarks = 0x4000_011E,
        SoftLeft = 0x4000_011F,
        SoftRight = 0x4000_0120,
        Call = 0x4000_0121,
        EndCall = 0x4000_0122,
        LeftTab = 0x2000_0001,
        Level5Shift = 0x2000_0002,
        MultiKeyCompose = 0x2000_0003,
        LeftMeta = 0x2000_0004,
        RightMeta = 0x2000_0005,
        LeftHyper = 0x2000_0006,
        RightHyper = 0x2000_0007,
    }
}

impl KeyCode {
    /// Whether this key symbol was derived from a scancode rather than a character.
    pub const fn is_scancode_derived(self) -> bool {
        self.raw() & SCANCODE_MASK != 0
    }
}

impl ScanCode {
    /// The key symbol a non-character scancode produces (`scancode | SCANCODE_MASK`).
    ///
    /// Returns `None` when no such symbol is defined.
    pub const fn to_keycode(self) -> Option<KeyCode> {
        KeyCode::from_raw(self.raw() as u32 | SCANCODE_MASK)
    }
}
