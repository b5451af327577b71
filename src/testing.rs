//! synthetic signals shared by the unit tests

use std::f64::consts::PI;

use crate::source::SampleChunk;

/// sampled sine, `sample_rate == len` puts every integer frequency on its own bin
pub(crate) fn sine(frequency: f32, amplitude: f32, len: usize, sample_rate: u32) -> SampleChunk {
    SampleChunk::new(sine_samples(frequency, amplitude, len, sample_rate), sample_rate)
}

pub(crate) fn sine_samples(
    frequency: f32,
    amplitude: f32,
    len: usize,
    sample_rate: u32,
) -> Vec<i32> {
    (0..len)
        .map(|i| {
            // phase in f64, f32 drifts too much over a whole chunk
            let t = i as f64 / sample_rate as f64;
            (amplitude as f64 * (2.0 * PI * frequency as f64 * t).sin()) as i32
        })
        .collect()
}
