//! ## Example without the pump
//! ```
//! use pitchsnail::source::SampleChunk;
//! use pitchsnail::spectrum::{analyzer::SpectralAnalyzer, config::AnalyzerConfig};
//!
//! let chunk = SampleChunk::new(vec![0, 1_000, 0, -1_000, 0, 1_000, 0, -1_000], 8);
//!
//! let mut analyzer = SpectralAnalyzer::new(AnalyzerConfig::default());
//! let analysis = analyzer.analyze(&chunk);
//!
//! assert_eq!(analysis.spectrum.len(), 4);
//! assert_eq!(analysis.spectrum.max_magnitude(), 1.0);
//! ```

use crate::fft::Fft;
use crate::source::SampleChunk;
use crate::spectrum::config::{AnalyzerConfig, Window};
use crate::spectrum::SpectrumFrame;
use crate::utils;

/// Spectrum of one chunk together with its loudness
#[derive(Clone, Debug, Default)]
pub struct Analysis {
    pub spectrum: SpectrumFrame,

    /// in range (0..=1), derived from the spectrum before normalisation
    pub loudness: f32,
}

/// struct that turns raw chunks into normalized spectra with the help of Fast Fourier Transform
pub struct SpectralAnalyzer {
    config: AnalyzerConfig,
    fft: Fft,
}

impl SpectralAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            fft: Fft::new(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&mut self, chunk: &SampleChunk) -> Analysis {
        if chunk.is_empty() {
            return Analysis::default();
        }
        let duration = chunk.duration();

        let mut raw_buffer = utils::to_f32(&chunk.samples);
        if self.config.window == Window::Hanning {
            utils::apodize(&mut raw_buffer);
        }
        let mut magnitudes = self.fft.magnitudes(&raw_buffer);

        let raw_max = magnitudes.iter().copied().fold(0.0, f32::max);
        normalize(&mut magnitudes, raw_max);

        let frequencies = (0..magnitudes.len())
            .map(|i| i as f32 / duration)
            .collect();

        Analysis {
            spectrum: SpectrumFrame {
                frequencies,
                magnitudes,
                raw_max,
                duration,
            },
            loudness: self.loudness(raw_max),
        }
    }

    /// maps the loudest raw bin to (0..=1), used to scale marker sizes
    pub fn loudness(&self, raw_max: f32) -> f32 {
        if self.config.loudness_reference <= 0.0 {
            return 0.0;
        }
        let loudness =
            (raw_max / self.config.loudness_reference).powf(self.config.loudness_exponent);
        if loudness.is_nan() {
            return 0.0;
        }
        loudness.clamp(0.0, 1.0)
    }
}

/// divides by `max`, silence stays all zero
fn normalize(magnitudes: &mut [f32], max: f32) {
    if max <= 0.0 {
        magnitudes.iter_mut().for_each(|m| *m = 0.0);
        return;
    }
    for m in magnitudes.iter_mut() {
        *m /= max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sine;

    #[test]
    fn half_length_and_unit_maximum() {
        let mut analyzer = SpectralAnalyzer::new(AnalyzerConfig::default());
        for len in [64usize, 65, 1000, 8192].iter() {
            let analysis = analyzer.analyze(&sine(100.0, 1.0e6, *len, 8192));
            assert_eq!(analysis.spectrum.len(), len / 2);
            assert!((analysis.spectrum.max_magnitude() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn silence_stays_zero() {
        let mut analyzer = SpectralAnalyzer::new(AnalyzerConfig::default());
        let analysis = analyzer.analyze(&SampleChunk::new(vec![0; 1024], 44_100));

        assert_eq!(analysis.spectrum.len(), 512);
        assert!(analysis.spectrum.is_silent());
        assert_eq!(analysis.spectrum.max_magnitude(), 0.0);
        assert!(analysis.spectrum.magnitudes.iter().all(|m| !m.is_nan()));
        assert_eq!(analysis.loudness, 0.0);
    }

    #[test]
    fn empty_chunk_gives_empty_frame() {
        let mut analyzer = SpectralAnalyzer::new(AnalyzerConfig::default());
        let analysis = analyzer.analyze(&SampleChunk::new(Vec::new(), 44_100));
        assert!(analysis.spectrum.is_empty());
    }

    #[test]
    fn frequency_axis_follows_duration() {
        let mut analyzer = SpectralAnalyzer::new(AnalyzerConfig::default());
        let analysis = analyzer.analyze(&sine(440.0, 1.0e6, 4096, 8192));

        // 4096 samples at 8192 hz last half a second, so bins are 2 hz apart
        assert!((analysis.spectrum.duration - 0.5).abs() < 1e-6);
        assert_eq!(analysis.spectrum.frequencies[0], 0.0);
        assert!((analysis.spectrum.frequencies[1] - 2.0).abs() < 1e-6);
        assert!((analysis.spectrum.frequencies[220] - 440.0).abs() < 1e-3);
    }

    #[test]
    fn loudness_is_cubic_and_clamped() {
        let analyzer = SpectralAnalyzer::new(AnalyzerConfig::default());
        assert_eq!(analyzer.loudness(0.0), 0.0);
        assert!((analyzer.loudness(26_000_000.0) - 0.125).abs() < 1e-6);
        assert_eq!(analyzer.loudness(1.0e12), 1.0);
    }

    #[test]
    fn hanning_window_keeps_the_peak_bin() {
        let config = AnalyzerConfig {
            window: Window::Hanning,
            ..Default::default()
        };
        let mut analyzer = SpectralAnalyzer::new(config);
        let analysis = analyzer.analyze(&sine(440.0, 1.0e6, 8192, 8192));

        let loudest = analysis
            .spectrum
            .magnitudes
            .iter()
            .enumerate()
            .fold((0, 0.0), |acc, (i, m)| if *m > acc.1 { (i, *m) } else { acc });
        assert_eq!(loudest.0, 440);
    }
}
