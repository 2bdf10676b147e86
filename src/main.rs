//! Monotone CLI
//!
//! Renders a `.mon` song to raw interleaved stereo 8-bit PCM:
//! `monotone <input.mon> <output.pcm>`

use std::env;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};

use monotone::{Config, Player, Song};

/// Samples per tick: 44100 Hz at 60 ticks per second.
const SAMPLES_PER_TICK: usize = 735;

fn main() -> monotone::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <input.mon> <output.pcm>", args[0]);
        std::process::exit(1);
    }
    let input_path = &args[1];
    let output_path = &args[2];

    let data = fs::read(input_path)?;
    let song = Song::parse(&data)?;
    println!(
        "Loaded {}: {} patterns, {} tracks",
        input_path,
        song.total_patterns(),
        song.total_tracks()
    );

    let mut player = Player::new(song, Config::default())?;
    let mut writer = BufWriter::new(File::create(output_path)?);

    let mut samples_written: usize = 0;
    loop {
        let chunk = player.generate_samples(SAMPLES_PER_TICK, SAMPLES_PER_TICK);
        if chunk.is_empty() {
            break;
        }
        writer.write_all(&chunk)?;
        samples_written += chunk.len() / 2;
    }
    writer.flush()?;

    println!(
        "Wrote {} samples ({} bytes) to {}",
        samples_written,
        samples_written * 2,
        output_path
    );
    Ok(())
}
