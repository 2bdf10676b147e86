//! Monotone song file parsing
//!
//! A `.mon` file is a flat fixed-offset layout:
//!
//! - Byte `0x00`: format flag byte (always 8 in files seen in the wild)
//! - Bytes `0x01..0x09`: ASCII magic marker `"monotone"`
//! - Byte `0x5C`: number of patterns
//! - Byte `0x5D`: number of tracks
//! - Bytes `0x5F..0x15F`: 256-entry order table (`0xFF` = end of song)
//! - Bytes `0x15F..`: pattern payload, 64 rows x tracks x 2 bytes per pattern
//!
//! The parsed [`Song`] borrows the caller's buffer; order and pattern
//! bytes are never copied.

use crate::{MonotoneError, Result};

/// ASCII magic marker at offset 1.
pub const MAGIC: &[u8; 8] = b"monotone";

/// Rows in every pattern.
pub const ROWS_PER_PATTERN: usize = 64;

/// Number of entries in the order table.
pub const ORDER_LEN: usize = 256;

/// Order-table sentinel that terminates playback.
pub const END_OF_SONG: u8 = 0xFF;

/// Bytes per pattern cell (note + effect).
pub const CELL_SIZE: usize = 2;

const OFFSET_MAGIC: usize = 0x01;
const OFFSET_TOTAL_PATTERNS: usize = 0x5C;
const OFFSET_TOTAL_TRACKS: usize = 0x5D;
const OFFSET_ORDER: usize = 0x5F;
const OFFSET_PATTERN_DATA: usize = 0x15F;

/// Minimum file size: header plus the full order table, even with zero patterns.
pub const MIN_FILE_SIZE: usize = OFFSET_PATTERN_DATA;

/// An immutable view over a Monotone song buffer.
///
/// Holds header fields plus borrowed slices into the caller's data. The
/// buffer must outlive the song and any [`Player`](crate::Player) built
/// from it.
#[derive(Debug, Clone, Copy)]
pub struct Song<'a> {
    total_patterns: usize,
    total_tracks: usize,
    pattern_size: usize,
    order: &'a [u8],
    pattern_data: &'a [u8],
}

impl<'a> Song<'a> {
    /// Parse a song from a raw byte buffer.
    ///
    /// Validation is minimal by design: the magic marker, the minimum
    /// header size, a nonzero track count, and that the buffer actually
    /// holds the pattern payload the header promises.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < MIN_FILE_SIZE {
            return Err(MonotoneError::InvalidFormat(format!(
                "file too small: {} bytes, need at least {}",
                data.len(),
                MIN_FILE_SIZE
            )));
        }
        if &data[OFFSET_MAGIC..OFFSET_MAGIC + MAGIC.len()] != MAGIC {
            return Err(MonotoneError::InvalidFormat(
                "missing \"monotone\" magic marker".into(),
            ));
        }

        let total_patterns = data[OFFSET_TOTAL_PATTERNS] as usize;
        let total_tracks = data[OFFSET_TOTAL_TRACKS] as usize;
        if total_tracks == 0 {
            return Err(MonotoneError::InvalidFormat(
                "song declares zero tracks".into(),
            ));
        }

        let pattern_size = ROWS_PER_PATTERN * total_tracks * CELL_SIZE;
        let payload_len = pattern_size * total_patterns;
        if data.len() < OFFSET_PATTERN_DATA + payload_len {
            return Err(MonotoneError::InvalidFormat(format!(
                "pattern payload truncated: need {} bytes past header, have {}",
                payload_len,
                data.len() - OFFSET_PATTERN_DATA
            )));
        }

        Ok(Song {
            total_patterns,
            total_tracks,
            pattern_size,
            order: &data[OFFSET_ORDER..OFFSET_ORDER + ORDER_LEN],
            pattern_data: &data[OFFSET_PATTERN_DATA..OFFSET_PATTERN_DATA + payload_len],
        })
    }

    /// Number of distinct patterns stored in the payload.
    pub fn total_patterns(&self) -> usize {
        self.total_patterns
    }

    /// Number of simultaneous voices.
    pub fn total_tracks(&self) -> usize {
        self.total_tracks
    }

    /// Size of one pattern in bytes.
    pub fn pattern_size(&self) -> usize {
        self.pattern_size
    }

    /// Order-table entry at `position` (0..256): a pattern index or
    /// [`END_OF_SONG`].
    pub fn order_entry(&self, position: usize) -> u8 {
        self.order[position]
    }

    /// The two cell bytes for `track` at `row` of `pattern`.
    pub fn cell_bytes(&self, pattern: usize, row: usize, track: usize) -> [u8; 2] {
        let offset =
            pattern * self.pattern_size + row * self.total_tracks * CELL_SIZE + track * CELL_SIZE;
        [self.pattern_data[offset], self.pattern_data[offset + 1]]
    }
}
