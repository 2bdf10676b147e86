//! Per-voice track state

use super::cell::NOTE_OFF;

/// Mutable state of one voice for the duration of a playback session.
///
/// Frequencies are fixed-point centihertz (Hz x 100). `hz` may drift
/// past the tuned note grid under portamento; that is intentional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Track {
    pub(crate) hz: u32,
    pub(crate) note: u8,
    pub(crate) target_hz: u32,
}

impl Track {
    /// Current oscillator frequency in centihertz.
    pub fn hz(&self) -> u32 {
        self.hz
    }

    /// Last note index applied (0 = none yet, 127 = note off).
    pub fn note(&self) -> u8 {
        self.note
    }

    /// Glide destination in centihertz; meaningful only after a
    /// portamento-to-note effect has fired.
    pub fn target_hz(&self) -> u32 {
        self.target_hz
    }

    /// Whether this voice is muted by a note-off marker.
    pub fn is_muted(&self) -> bool {
        self.note == NOTE_OFF
    }
}
