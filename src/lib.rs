//! Monotone tracker decoder and PCM renderer
//!
//! Decodes the compact Monotone binary tracker format (`.mon`) and
//! renders it to interleaved stereo 8-bit unsigned PCM. Built for
//! small-footprint playback: a fixed square-wave oscillator per track,
//! integer fixed-point pitch handling, and no allocation beyond the
//! per-voice state.
//!
//! # Quick start
//! ```no_run
//! use monotone::{Config, Player, Song};
//!
//! # fn main() -> monotone::Result<()> {
//! let data = std::fs::read("song.mon")?;
//! let song = Song::parse(&data)?;
//! let mut player = Player::new(song, Config::default())?;
//! loop {
//!     let pcm = player.generate_samples(735, 735);
//!     if pcm.is_empty() {
//!         break; // end of song
//!     }
//!     // feed interleaved stereo u8 samples downstream
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Domain modules
pub mod notes; // Note index -> centihertz table
pub mod player; // Sequencer, effects, synthesis
pub mod song; // Song file parsing

/// Error types for Monotone operations
#[derive(thiserror::Error, Debug)]
pub enum MonotoneError {
    /// Magic marker mismatch or buffer too small to be a song.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Track state allocation failed during load.
    #[error("out of memory allocating track state")]
    OutOfMemory,

    /// IO error from the filesystem (CLI paths only; the core operates
    /// on in-memory buffers).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Monotone operations
pub type Result<T> = std::result::Result<T, MonotoneError>;

// Public API exports
pub use player::{Config, PlaybackState, Player, Track, DEFAULT_SAMPLE_RATE, DEFAULT_TICK_RATE};
pub use song::Song;
