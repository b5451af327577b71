use std::f64::consts::PI;

use pitchsnail::config::PumpConfig;
use pitchsnail::pump::FramePump;
use pitchsnail::source::{BufferedSource, SampleSink};

const SAMPLE_RATE: u32 = 44_100;

/// stands in for an audio output, only counts what it would play
struct CountingSink {
    samples: usize,
}

impl SampleSink for CountingSink {
    fn write_chunk(&mut self, samples: &[i32]) -> pitchsnail::Result<()> {
        self.samples += samples.len();
        Ok(())
    }
}

/// a major chord, A4 C#5 E5, three seconds long
fn chord() -> Vec<i32> {
    let frequencies = [440.0, 554.37, 659.26];
    (0..SAMPLE_RATE as usize * 3)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE as f64;
            let value: f64 = frequencies
                .iter()
                .map(|f| (2.0 * PI * f * t).sin())
                .sum();
            (value * 4.0e8) as i32
        })
        .collect()
}

fn main() -> pitchsnail::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let source = BufferedSource::new(chord(), SAMPLE_RATE);
    let mut pump = FramePump::new(PumpConfig::default(), source)?
        .with_sink(Box::new(CountingSink { samples: 0 }));
    let naming = pump.config().notes.naming;

    while let Some(frame) = pump.tick()? {
        let notes: Vec<String> = frame
            .notes
            .iter()
            .map(|n| format!("{}({:.2})", n.name(naming), n.amplitude))
            .collect();
        log::info!(
            "{:.2}s tuning {} hz: {} peaks on the spiral, notes [{}], shine {:?}",
            frame.time,
            frame.tuning,
            frame.peak_points.len(),
            notes.join(" "),
            frame.shine
        );

        // nudges the reference tuning like a slider would
        if frame.index == 7 {
            pump.set_tuning(415.0);
        }
    }

    let history = pump.history();
    log::info!(
        "history holds {} of {} entries, trail has {} layers",
        history.amplitude().len(),
        history.capacity(),
        pump.trail().len()
    );
    Ok(())
}
