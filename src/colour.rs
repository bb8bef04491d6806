//! Colour model for a three-channel RGB LED.
//!
//! Each colour is a 3-bit mask: bit 0 = red, bit 1 = green, bit 2 = blue.
//! The eight values are closed under bitwise OR, so mixing is just `|`.

use core::fmt;
use core::ops::BitOr;

/// One of the three LED channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in write order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// The channel's bit in a [`Colour`] mask.
    pub const fn mask(self) -> u8 {
        match self {
            Self::Red => 0b001,
            Self::Green => 0b010,
            Self::Blue => 0b100,
        }
    }

    /// Lower-case name as accepted on the `led_select` command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Exact, case-sensitive lookup by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Green => write!(f, "Green"),
            Self::Blue => write!(f, "Blue"),
        }
    }
}

/// LED colour as a closed set of channel combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Colour {
    Off = 0b000,
    Red = 0b001,
    Green = 0b010,
    Yellow = 0b011,
    Blue = 0b100,
    Magenta = 0b101,
    Cyan = 0b110,
    White = 0b111,
}

impl Colour {
    /// Every colour, ordered by mask value.
    pub const ALL: [Colour; 8] = [
        Colour::Off,
        Colour::Red,
        Colour::Green,
        Colour::Yellow,
        Colour::Blue,
        Colour::Magenta,
        Colour::Cyan,
        Colour::White,
    ];

    /// Raw 3-bit mask.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// Rebuild a colour from the low three bits of `mask`.
    pub const fn from_mask(mask: u8) -> Self {
        match mask & 0b111 {
            0b000 => Self::Off,
            0b001 => Self::Red,
            0b010 => Self::Green,
            0b011 => Self::Yellow,
            0b100 => Self::Blue,
            0b101 => Self::Magenta,
            0b110 => Self::Cyan,
            _ => Self::White,
        }
    }

    /// Whether `channel` is lit in this colour.
    pub const fn has_channel(self, channel: Channel) -> bool {
        self.mask() & channel.mask() != 0
    }

    /// `1` if `channel` is lit, else `0`.
    pub const fn level(self, channel: Channel) -> i32 {
        if self.has_channel(channel) { 1 } else { 0 }
    }
}

impl From<Channel> for Colour {
    fn from(channel: Channel) -> Self {
        Self::from_mask(channel.mask())
    }
}

impl BitOr for Colour {
    type Output = Colour;

    fn bitor(self, rhs: Colour) -> Colour {
        Colour::from_mask(self.mask() | rhs.mask())
    }
}

/// The sequence shown by the free-run and software-fade demos.
pub const COLOUR_SEQUENCE: [Colour; 8] = [
    Colour::Red,
    Colour::Blue,
    Colour::Green,
    Colour::Blue,
    Colour::Cyan,
    Colour::Magenta,
    Colour::Yellow,
    Colour::White,
];

/// Index of the entry after `index`, wrapping at the end of the sequence.
pub const fn next_index(index: usize) -> usize {
    (index + 1) % COLOUR_SEQUENCE.len()
}
