/// turns raw sample chunks into normalized spectra
#[cfg(feature = "spectrum")]
pub mod analyzer;

/// configs for `analyzer::SpectralAnalyzer` and `peaks::PeakDetector`
pub mod config;

/// finds the dominant frequencies of a spectrum
pub mod peaks;

/// Half spectrum of one chunk
///
/// `frequencies[i]` is the center of bin `i` in hz and `magnitudes[i]` its volume,
/// normalized so that the loudest bin is exactly 1.0.
/// A silent chunk keeps all magnitudes at 0.0
#[derive(Clone, Debug, Default)]
pub struct SpectrumFrame {
    pub frequencies: Vec<f32>,
    pub magnitudes: Vec<f32>,

    /// loudest bin before normalisation
    pub raw_max: f32,

    /// length of the chunk in seconds, `frequencies[i] = i / duration`
    pub duration: f32,
}
impl SpectrumFrame {
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    pub fn is_silent(&self) -> bool {
        self.raw_max <= 0.0
    }

    /// (frequency, magnitude) pairs in ascending frequency order
    pub fn bins(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }

    /// loudest normalized magnitude, 1.0 for any non silent frame
    pub fn max_magnitude(&self) -> f32 {
        self.magnitudes.iter().copied().fold(0.0, f32::max)
    }
}

/// Single dominant frequency of a spectrum
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    /// in hz
    pub frequency: f32,

    /// magnitude as found in the `SpectrumFrame`, not renormalized against other peaks
    pub magnitude: f32,
}
