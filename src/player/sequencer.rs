//! Transport state machine and effect processing
//!
//! One call to [`advance`] is one tick: roll the (tick, row, order
//! position) counters forward, then decode and apply every track's cell
//! at the new position. Jump effects mutate the transport in place;
//! later tracks in the same tick see the updated state, which is how
//! the pattern-jump / row-jump arbitration falls out.

use crate::notes::note_centihz;
use crate::player::cell::{Cell, Effect, NOTE_OFF};
use crate::player::track::Track;
use crate::song::{Song, END_OF_SONG, ORDER_LEN, ROWS_PER_PATTERN};

const HZ_FIXED_POINT: u32 = 100;

/// Transport position within the song, persisting across the session.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Transport {
    /// Ticks elapsed within the current row, `0..tick_rate`.
    pub tick: u32,
    /// Ticks per row; mutable at runtime via the set-speed effect.
    pub tick_rate: u32,
    /// Current row within the pattern, `0..64`.
    pub row: usize,
    /// Index into the order table, `0..256`, wraps past the end.
    pub order_position: usize,
    /// Absolute sample counter used as oscillator phase; never reset.
    pub time: u64,
}

impl Transport {
    pub fn new(tick_rate: u32) -> Self {
        Transport {
            tick: 0,
            tick_rate,
            row: 0,
            order_position: 0,
            time: 0,
        }
    }
}

/// Result of advancing the sequencer by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    /// Effects were processed; the song continues.
    Playing,
    /// The order table hit the end sentinel; all voices were silenced.
    EndOfSong,
}

/// Advance the transport by one tick and apply every track's effects.
pub(crate) fn advance(song: &Song, transport: &mut Transport, tracks: &mut [Track]) -> TickOutcome {
    // >= rather than ==: a mid-row speed drop must not strand the tick
    // counter above the new rate.
    if transport.tick >= transport.tick_rate {
        transport.tick = 0;
        transport.row += 1;
    }
    if transport.row == ROWS_PER_PATTERN {
        transport.row = 0;
        transport.order_position += 1;
    }
    if transport.order_position == ORDER_LEN {
        transport.order_position = 0;
    }

    // An entry past the stored pattern count cannot be addressed;
    // treat it like the sentinel instead of reading out of bounds.
    let pattern = song.order_entry(transport.order_position);
    if pattern == END_OF_SONG || pattern as usize >= song.total_patterns() {
        for track in tracks.iter_mut() {
            track.hz = 0;
        }
        return TickOutcome::EndOfSong;
    }

    let mut pattern_jumped = false;
    for (index, track) in tracks.iter_mut().enumerate() {
        let cell = Cell::decode(song.cell_bytes(pattern as usize, transport.row, index));
        apply_note(track, &cell);
        apply_effect(track, &cell, transport, &mut pattern_jumped);
    }

    transport.tick += 1;
    TickOutcome::Playing
}

/// Apply the cell's note, if any, before its effect.
///
/// Note-off mutes the voice without ever consulting the frequency
/// table; a portamento-to-note cell sets the glide target instead of
/// the pitch itself.
fn apply_note(track: &mut Track, cell: &Cell) {
    if cell.note == NOTE_OFF {
        track.note = NOTE_OFF;
        return;
    }
    if cell.note != 0 && cell.note != track.note {
        if cell.effect == Effect::PortamentoToNote {
            track.target_hz = note_centihz(cell.note);
        } else {
            track.hz = note_centihz(cell.note);
        }
        track.note = cell.note;
    }
}

fn apply_effect(track: &mut Track, cell: &Cell, transport: &mut Transport, pattern_jumped: &mut bool) {
    match cell.effect {
        Effect::Arpeggiate => {
            if cell.xy() != 0 && track.note != NOTE_OFF {
                track.hz = match transport.tick % 3 {
                    1 => note_centihz(track.note.saturating_add(cell.x)),
                    2 => note_centihz(track.note.saturating_add(cell.y)),
                    _ => note_centihz(track.note),
                };
            }
        }
        Effect::PortamentoUp => {
            track.hz = track.hz.saturating_add(cell.xy() * HZ_FIXED_POINT);
        }
        Effect::PortamentoDown => {
            track.hz = track.hz.saturating_sub(cell.xy() * HZ_FIXED_POINT);
        }
        Effect::PortamentoToNote => {
            let step = cell.xy() * HZ_FIXED_POINT;
            if track.hz < track.target_hz {
                track.hz = track.hz.saturating_add(step).min(track.target_hz);
            } else if track.hz > track.target_hz {
                track.hz = track.hz.saturating_sub(step).max(track.target_hz);
            }
        }
        Effect::Vibrato => {
            // Reserved. Must not alter pitch.
        }
        Effect::PatternJump => {
            if transport.tick == transport.tick_rate - 1 {
                transport.order_position = cell.xy() as usize;
                transport.tick = 0;
                transport.row = 0;
                *pattern_jumped = true;
            }
        }
        Effect::RowJump => {
            if transport.tick == transport.tick_rate - 1 {
                transport.tick = 0;
                transport.row = cell.xy() as usize;
                if !*pattern_jumped {
                    // Wrap past 256 happens at the top of the next tick.
                    transport.order_position += 1;
                }
            }
        }
        Effect::SetSpeed => {
            // A zero rate would stall row advancement; ignore it.
            if cell.xy() != 0 {
                transport.tick_rate = cell.xy();
            }
        }
    }
}
