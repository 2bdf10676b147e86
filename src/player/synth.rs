//! Square-wave synthesis and mixing
//!
//! All arithmetic is integer fixed-point. Phase is derived from the
//! absolute sample counter, so pitch changes never reset a voice's
//! phase and tracks do not pop at tick boundaries.

use crate::player::track::Track;

/// Square-wave level (0 or 255) for one voice at absolute sample `time`.
///
/// `hz` is centihertz; the x5 / (rate x 2) scale folds the x100
/// fixed-point factor into the phase step. The waveform is high for
/// 127 of every 256 phase units, a 50%-ish duty cycle.
pub(crate) fn square_level(time: u64, hz: u32, sample_rate: u32) -> u32 {
    let phase = time
        .wrapping_mul(u64::from(hz))
        .wrapping_mul(5)
        / (u64::from(sample_rate) * 2);
    if phase % 256 < 127 {
        255
    } else {
        0
    }
}

/// Mix one output sample across all voices: sum active square levels,
/// then divide by the voice count. Muted (note-off) voices are skipped
/// entirely, never consulted for a level.
pub(crate) fn mix_frame(tracks: &[Track], time: u64, sample_rate: u32) -> u8 {
    let mut sum: u32 = 0;
    for track in tracks {
        if track.is_muted() {
            continue;
        }
        sum += square_level(time, track.hz(), sample_rate);
    }
    (sum / tracks.len() as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::cell::NOTE_OFF;

    fn voice(hz: u32) -> Track {
        Track {
            hz,
            note: 49,
            target_hz: 0,
        }
    }

    #[test]
    fn zero_frequency_is_flat_high() {
        // Phase never advances, so the level stays at the waveform's
        // first half.
        for time in 0..100 {
            assert_eq!(square_level(time, 0, 44_100), 255);
        }
    }

    #[test]
    fn waveform_alternates_between_rails() {
        let hz = 44_000; // A4 in centihertz
        let mut seen_high = false;
        let mut seen_low = false;
        for time in 0..1000 {
            match square_level(time, hz, 44_100) {
                255 => seen_high = true,
                0 => seen_low = true,
                other => panic!("level must be 0 or 255, got {other}"),
            }
        }
        assert!(seen_high && seen_low);
    }

    #[test]
    fn period_matches_frequency() {
        // One full waveform cycle spans 256 phase units. At 440 Hz and
        // 44100 Hz output, that is 44100 * 256 * 2 / (44000 * 5) ~ 102
        // samples per cycle.
        let hz = 44_000;
        let rate = 44_100;
        let mut transitions = 0;
        let mut prev = square_level(0, hz, rate);
        let span = 10_200; // ~100 cycles
        for time in 1..span {
            let level = square_level(time, hz, rate);
            if level != prev {
                transitions += 1;
                prev = level;
            }
        }
        // Two transitions per cycle.
        assert!((190..=210).contains(&transitions), "{transitions}");
    }

    #[test]
    fn single_silent_track_mixes_to_rail() {
        // hz = 0 contributes the high rail; averaging over one track
        // keeps it there.
        let tracks = [voice(0)];
        assert_eq!(mix_frame(&tracks, 0, 44_100), 255);
    }

    #[test]
    fn mix_averages_across_tracks() {
        // Both tracks at hz 0 sit on the high rail; the average of two
        // highs is still 255, and muting one halves it.
        let mut tracks = [voice(0), voice(0)];
        assert_eq!(mix_frame(&tracks, 0, 44_100), 255);

        tracks[1].note = NOTE_OFF;
        assert_eq!(mix_frame(&tracks, 0, 44_100), 127);
    }

    #[test]
    fn muted_track_contributes_nothing() {
        let mut track = voice(44_000);
        track.note = NOTE_OFF;
        let tracks = [track];
        for time in 0..500 {
            assert_eq!(mix_frame(&tracks, time, 44_100), 0);
        }
    }
}
