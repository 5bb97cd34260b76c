//! Plays a synthesized three-word "narration" and prints the transcript with
//! read-along highlighting as playback advances.
//!
//! Run with `cargo run --example readalong_demo`.

use readalong::{CharacterAlignment, RodioPlayer, TranscriptViewer};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const SAMPLE_RATE: u32 = 44100;

fn main() -> readalong::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let wav_path = std::env::temp_dir().join("readalong_demo.wav");
    write_demo_wav(&wav_path)?;

    let alignment = demo_alignment();
    let player = RodioPlayer::with_duration(&wav_path, alignment.duration_seconds())?;
    let mut viewer = TranscriptViewer::new(alignment, player);

    println!("Transcript: {}", viewer.segments().iter().map(|s| s.text()).collect::<String>());
    viewer.play();

    let started = Instant::now();
    while started.elapsed() < Duration::from_secs(4) {
        viewer.controller_mut().resource_mut().tick();
        viewer.process_events();

        let partition = viewer.partition();
        let spoken: String = partition.spoken.iter().map(|s| s.text()).collect();
        let current = viewer
            .current_word()
            .map(|word| word.text.as_str())
            .unwrap_or("");
        print!(
            "\r[{:5.2}s] spoken: {:<12} current: {:<5}",
            viewer.current_time(),
            spoken,
            current
        );
        std::io::stdout().flush()?;

        if !viewer.is_playing() && viewer.current_time() > 0.0 {
            break;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    println!();

    Ok(())
}

/// Three tones separated by silence, standing in for three spoken words.
fn write_demo_wav(path: &std::path::Path) -> readalong::Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .map_err(|e| readalong::ReadalongError::AudioOutput(e.to_string()))?;

    let tones = [
        (440.0, 0.0, 0.4),
        (0.0, 0.4, 0.6),
        (554.0, 0.6, 1.0),
        (0.0, 1.0, 1.2),
        (659.0, 1.2, 1.8),
    ];
    for (freq, start, end) in tones {
        let samples = ((end - start) * SAMPLE_RATE as f64) as usize;
        for n in 0..samples {
            let t = n as f64 / SAMPLE_RATE as f64;
            let amplitude = if freq == 0.0 { 0.0 } else { 0.25 };
            let value = (t * freq * 2.0 * std::f64::consts::PI).sin() * amplitude;
            writer
                .write_sample((value * i16::MAX as f64) as i16)
                .map_err(|e| readalong::ReadalongError::AudioOutput(e.to_string()))?;
        }
    }
    writer
        .finalize()
        .map_err(|e| readalong::ReadalongError::AudioOutput(e.to_string()))?;
    Ok(())
}

/// Hand-built alignment matching the tone layout of the demo WAV.
fn demo_alignment() -> CharacterAlignment {
    let characters = "bip bop boop".chars().collect();
    let start_times = vec![
        0.00, 0.13, 0.26, 0.40, 0.60, 0.73, 0.86, 1.00, 1.20, 1.35, 1.50, 1.65,
    ];
    let end_times = vec![
        0.13, 0.26, 0.40, 0.60, 0.73, 0.86, 1.00, 1.20, 1.35, 1.50, 1.65, 1.80,
    ];
    CharacterAlignment::new(characters, start_times, end_times)
}
