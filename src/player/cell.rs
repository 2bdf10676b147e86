//! Pattern cell decoding
//!
//! Each cell is two bytes. Byte 1 carries the note in its top 7 bits and
//! the high bit of the effect code in its low bit; byte 0 carries the
//! remaining two effect-code bits and the two 3-bit effect arguments:
//!
//! ```text
//! byte 1: NNNNNNN E   byte 0: EE XXX YYY
//! ```

/// Note value that mutes a track instead of playing a pitch.
pub const NOTE_OFF: u8 = 0x7F;

/// The eight per-track effects, by 3-bit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Cycle between base note and two offsets, one step per tick.
    Arpeggiate,
    /// Raise pitch by `xy` Hz per tick, unbounded above.
    PortamentoUp,
    /// Lower pitch by `xy` Hz per tick, floored at zero.
    PortamentoDown,
    /// Glide toward the last note's pitch by `xy` Hz per tick.
    PortamentoToNote,
    /// Reserved; decoded but never alters pitch.
    Vibrato,
    /// Jump to order position `xy` at the end of the row.
    PatternJump,
    /// Jump to row `xy` of the next order position at the end of the row.
    RowJump,
    /// Set the ticks-per-row rate to `xy`.
    SetSpeed,
}

impl Effect {
    fn from_code(code: u8) -> Self {
        match code & 0b111 {
            0 => Effect::Arpeggiate,
            1 => Effect::PortamentoUp,
            2 => Effect::PortamentoDown,
            3 => Effect::PortamentoToNote,
            4 => Effect::Vibrato,
            5 => Effect::PatternJump,
            6 => Effect::RowJump,
            _ => Effect::SetSpeed,
        }
    }
}

/// A decoded pattern cell: note plus effect and its two arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// 7-bit note index; 0 = no note this row, [`NOTE_OFF`] = mute.
    pub note: u8,
    /// Effect to apply on every tick of this row.
    pub effect: Effect,
    /// First 3-bit effect argument.
    pub x: u8,
    /// Second 3-bit effect argument.
    pub y: u8,
}

impl Cell {
    /// Decode the two raw cell bytes.
    pub fn decode(bytes: [u8; 2]) -> Self {
        Cell {
            note: bytes[1] >> 1,
            effect: Effect::from_code((bytes[1] & 1) << 2 | bytes[0] >> 6),
            x: bytes[0] >> 3 & 0b111,
            y: bytes[0] & 0b111,
        }
    }

    /// Encode a cell back into its two-byte wire form.
    pub fn encode(note: u8, effect: Effect, x: u8, y: u8) -> [u8; 2] {
        let code = effect as u8;
        [
            (code & 0b11) << 6 | (x & 0b111) << 3 | (y & 0b111),
            (note & 0x7F) << 1 | code >> 2,
        ]
    }

    /// The combined 6-bit effect argument, `x << 3 | y` (0..=63).
    pub fn xy(&self) -> u32 {
        u32::from(self.x) << 3 | u32::from(self.y)
    }
}
