use crate::spectrum::config::PeakConfig;
use crate::spectrum::{Peak, SpectrumFrame};

/// finds strict local maxima that are loud enough compared to the loudest bin
#[derive(Clone, Debug, Default)]
pub struct PeakDetector {
    pub config: PeakConfig,
}

impl PeakDetector {
    pub fn new(config: PeakConfig) -> Self {
        Self { config }
    }

    /// peaks in ascending frequency order
    ///
    /// flat tops are not strict maxima and therefore never reported
    pub fn detect(&self, spectrum: &SpectrumFrame) -> Vec<Peak> {
        let magnitudes = &spectrum.magnitudes;
        if magnitudes.len() < 3 {
            return Vec::new();
        }
        let threshold = self.config.relative_threshold * spectrum.max_magnitude();

        magnitudes
            .windows(3)
            .enumerate()
            .filter(|(_, w)| w[1] > w[0] && w[1] > w[2] && w[1] > threshold)
            .map(|(i, w)| Peak {
                frequency: spectrum.frequencies[i + 1],
                magnitude: w[1],
            })
            .collect()
    }
}
