#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// window applied to the raw chunk before the fft
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Window {
    /// samples are transformed as they are
    Rectangular,

    /// hanning window, trades frequency resolution for less leakage between bins
    Hanning,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalyzerConfig {
    pub window: Window,

    /// raw spectrum maximum that maps to a loudness of 1.0
    ///
    /// tuned for 32 bit integer samples and chunks of 8192 samples
    pub loudness_reference: f32,

    /// loudness = (raw_max / loudness_reference) ^ loudness_exponent
    pub loudness_exponent: f32,
}
impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            window: Window::Rectangular,
            loudness_reference: 52_000_000.0,
            loudness_exponent: 3.0,
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeakConfig {
    /// a local maximum only counts as peak if it is louder than
    /// `relative_threshold` * loudest bin of the frame
    pub relative_threshold: f32,
}
impl Default for PeakConfig {
    fn default() -> Self {
        PeakConfig {
            relative_threshold: 0.25,
        }
    }
}
