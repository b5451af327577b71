//! Brightness of a sound, estimated as the energy weighted mean frequency (spectral centroid)
//! of an audible band, on a logarithmic scale

use crate::config::ShineConfig;
use crate::spectrum::SpectrumFrame;

#[derive(Clone, Debug, Default)]
pub struct ShineEstimator {
    pub config: ShineConfig,
}

impl ShineEstimator {
    pub fn new(config: ShineConfig) -> Self {
        Self { config }
    }

    /// `ln(Σ f·m² / Σ m²)` over the bins strictly inside the band
    ///
    /// `None` if the band holds no energy, e.g. during silence
    pub fn estimate(&self, spectrum: &SpectrumFrame) -> Option<f32> {
        let [low, high] = self.config.band;

        let (weighted, energy) = spectrum
            .bins()
            .filter(|(frequency, _)| *frequency > low && *frequency < high)
            .fold((0.0f64, 0.0f64), |(weighted, energy), (frequency, magnitude)| {
                let power = magnitude as f64 * magnitude as f64;
                (weighted + frequency as f64 * power, energy + power)
            });

        if energy <= 0.0 || weighted <= 0.0 {
            return None;
        }
        Some((weighted / energy).ln() as f32)
    }
}
