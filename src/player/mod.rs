//! Playback session
//!
//! A [`Player`] owns the per-voice track state and the transport
//! position for one playback of a [`Song`]. Sample generation is
//! synchronous and deterministic: the caller asks for a batch of
//! samples, the player groups them into ticks, advances the sequencer
//! once per tick, and renders the tick's samples from current track
//! state.

pub mod cell;
mod sequencer;
mod synth;
mod track;

pub use track::Track;

use crate::song::Song;
use crate::{MonotoneError, Result};
use sequencer::{TickOutcome, Transport};
use serde::{Deserialize, Serialize};

/// Default playback sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default ticks per row.
pub const DEFAULT_TICK_RATE: u32 = 4;

/// Session configuration, applied at player construction.
///
/// Zero values fall back to the defaults, mirroring the file format's
/// "unset means default" convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Playback sample rate in Hz (default 44100).
    pub sample_rate: u32,
    /// Ticks per row (default 4).
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sample_rate: DEFAULT_SAMPLE_RATE,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

/// Whether a session is still producing samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// The sequencer has not yet reached the end sentinel.
    Playing,
    /// The end sentinel was reached; no further samples are generated.
    Finished,
}

/// A playback session over a borrowed [`Song`].
pub struct Player<'a> {
    song: Song<'a>,
    tracks: Vec<Track>,
    transport: Transport,
    sample_rate: u32,
    state: PlaybackState,
}

impl<'a> Player<'a> {
    /// Create a session with freshly zeroed track state.
    ///
    /// Fails with [`MonotoneError::OutOfMemory`] only if the track
    /// array cannot be allocated.
    pub fn new(song: Song<'a>, config: Config) -> Result<Self> {
        let sample_rate = if config.sample_rate == 0 {
            DEFAULT_SAMPLE_RATE
        } else {
            config.sample_rate
        };
        let tick_rate = if config.tick_rate == 0 {
            DEFAULT_TICK_RATE
        } else {
            config.tick_rate
        };

        let mut tracks = Vec::new();
        tracks
            .try_reserve_exact(song.total_tracks())
            .map_err(|_| MonotoneError::OutOfMemory)?;
        tracks.resize(song.total_tracks(), Track::default());

        Ok(Player {
            song,
            tracks,
            transport: Transport::new(tick_rate),
            sample_rate,
            state: PlaybackState::Playing,
        })
    }

    /// Advance the sequencer by one tick. Returns `false` once the end
    /// sentinel has been reached; further calls stay `false`.
    pub fn advance_tick(&mut self) -> bool {
        if self.state == PlaybackState::Finished {
            return false;
        }
        match sequencer::advance(&self.song, &mut self.transport, &mut self.tracks) {
            TickOutcome::Playing => true,
            TickOutcome::EndOfSong => {
                self.state = PlaybackState::Finished;
                false
            }
        }
    }

    /// Generate up to `sample_count` stereo samples.
    ///
    /// Samples are produced in whole ticks of `samples_per_tick`; a
    /// trailing partial tick is not rendered. The returned buffer holds
    /// interleaved unsigned 8-bit left/right pairs (currently identical
    /// per pair), so its length is twice the samples generated. An
    /// empty buffer signals end of song.
    pub fn generate_samples(&mut self, sample_count: usize, samples_per_tick: usize) -> Vec<u8> {
        let mut out = Vec::new();
        if samples_per_tick == 0 {
            return out;
        }
        let tick_count = sample_count / samples_per_tick;
        out.reserve(tick_count * samples_per_tick * 2);

        for _ in 0..tick_count {
            if !self.advance_tick() {
                break;
            }
            for _ in 0..samples_per_tick {
                let level = synth::mix_frame(&self.tracks, self.transport.time, self.sample_rate);
                out.push(level);
                out.push(level);
                self.transport.time += 1;
            }
        }
        out
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Per-voice track state, in track index order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Current row within the pattern (0..64).
    pub fn row(&self) -> usize {
        self.transport.row
    }

    /// Current index into the order table.
    pub fn order_position(&self) -> usize {
        self.transport.order_position
    }

    /// Current ticks-per-row rate.
    pub fn tick_rate(&self) -> u32 {
        self.transport.tick_rate
    }

    /// Configured sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
