//! Note frequency table
//!
//! Maps the 7-bit note index from a pattern cell to a fixed-point
//! frequency in centihertz (Hz x 100). Index 0 is silence; indices
//! 1..=100 cover A0 through C9 in semitone steps.

/// Number of populated entries in [`NOTE_CENTIHZ`].
pub const NOTE_COUNT: usize = 101;

/// Fixed-point note frequencies in centihertz, indexed by note number.
pub const NOTE_CENTIHZ: [u32; NOTE_COUNT] = [
    0,      // ---
    2750,   // A0
    2914,   // A#0
    3087,   // B0
    3270,   // C1
    3465,   // C#1
    3671,   // D1
    3889,   // D#1
    4120,   // E1
    4365,   // F1
    4625,   // F#1
    4900,   // G1
    5191,   // G#1
    5500,   // A1
    5827,   // A#1
    6174,   // B1
    6541,   // C2
    6930,   // C#2
    7342,   // D2
    7778,   // D#2
    8241,   // E2
    8731,   // F2
    9250,   // F#2
    9800,   // G2
    10383,  // G#2
    11000,  // A2
    11654,  // A#2
    12347,  // B2
    13081,  // C3
    13859,  // C#3
    14683,  // D3
    15556,  // D#3
    16481,  // E3
    17461,  // F3
    18500,  // F#3
    19600,  // G3
    20765,  // G#3
    22000,  // A3
    23308,  // A#3
    24694,  // B3
    26163,  // C4
    27718,  // C#4
    29366,  // D4
    31113,  // D#4
    32963,  // E4
    34923,  // F4
    36999,  // F#4
    39200,  // G4
    41530,  // G#4
    44000,  // A4
    46616,  // A#4
    49388,  // B4
    52325,  // C5
    55437,  // C#5
    58733,  // D5
    62225,  // D#5
    65925,  // E5
    69846,  // F5
    73999,  // F#5
    78399,  // G5
    83061,  // G#5
    88000,  // A5
    93233,  // A#5
    98777,  // B5
    104650, // C6
    110873, // C#6
    117466, // D6
    124451, // D#6
    131851, // E6
    139691, // F6
    147998, // F#6
    156798, // G6
    166122, // G#6
    176000, // A6
    186466, // A#6
    197553, // B6
    209300, // C7
    221746, // C#7
    234932, // D7
    248902, // D#7
    263702, // E7
    279383, // F7
    295996, // F#7
    313596, // G7
    332244, // G#7
    352000, // A7
    372931, // A#7
    395107, // B7
    418601, // C8
    443492, // C#8
    469864, // D8
    497803, // D#8
    527404, // E8
    558765, // F8
    591991, // F#8
    627193, // G8
    664488, // G#8
    704000, // A8
    745862, // A#8
    790213, // B8
    837202, // C9
];

/// Look up a note's frequency, clamping out-of-range indices to the top note.
///
/// Arpeggio offsets can push `note + x` past the end of the table; the
/// lookup saturates at C9 rather than reading past the data.
pub fn note_centihz(note: u8) -> u32 {
    NOTE_CENTIHZ[(note as usize).min(NOTE_COUNT - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_is_440_hz() {
        assert_eq!(note_centihz(49), 44_000);
    }

    #[test]
    fn index_zero_is_silence() {
        assert_eq!(note_centihz(0), 0);
    }

    #[test]
    fn out_of_range_clamps_to_top_note() {
        assert_eq!(note_centihz(100), 837_202);
        assert_eq!(note_centihz(101), 837_202);
        assert_eq!(note_centihz(0x7F), 837_202);
    }

    #[test]
    fn semitone_ratio_holds_across_octaves() {
        // One octave up doubles the frequency (within rounding).
        for (low, high) in [(1u8, 13u8), (49, 61), (88, 100)] {
            let ratio = note_centihz(high) as f64 / note_centihz(low) as f64;
            assert!((ratio - 2.0).abs() < 0.001, "{low}->{high} ratio {ratio}");
        }
    }
}
