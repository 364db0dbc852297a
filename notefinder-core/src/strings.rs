//! Guitar string definitions for standard tuning.

use crate::scale::NoteName;

/// The six strings of a standard-tuned guitar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GuitarString {
    /// High E (1st string)
    HighE,
    /// B (2nd string)
    B,
    /// G (3rd string)
    G,
    /// D (4th string)
    D,
    /// A (5th string)
    A,
    /// Low E (6th string)
    LowE,
}

impl GuitarString {
    /// All six strings, highest pitch first.
    pub const ALL: [GuitarString; 6] = [
        GuitarString::HighE,
        GuitarString::B,
        GuitarString::G,
        GuitarString::D,
        GuitarString::A,
        GuitarString::LowE,
    ];

    /// Stable ordinal of this string: 0 = highest pitch, 5 = lowest.
    pub const fn string_num(self) -> usize {
        self as usize
    }

    /// The note sounded by this string played open.
    pub const fn open_note(self) -> NoteName {
        match self {
            GuitarString::HighE | GuitarString::LowE => NoteName::E,
            GuitarString::B => NoteName::B,
            GuitarString::G => NoteName::G,
            GuitarString::D => NoteName::D,
            GuitarString::A => NoteName::A,
        }
    }

    /// Short label for this string, as shown next to its filter checkbox.
    pub fn label(self) -> &'static str {
        self.open_note().label()
    }
}
