use rustfft::{num_complex::Complex, FftPlanner};

/// forward fft that keeps its planner, so plans get reused between chunks of equal length
pub struct Fft {
    planner: FftPlanner<f32>,
}

impl Fft {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// magnitudes of the first half of the spectrum of `data`
    ///
    /// input is real, so the second half would only mirror the first one
    pub fn magnitudes(&mut self, data: &[f32]) -> Vec<f32> {
        if data.is_empty() {
            return Vec::new();
        }

        let mut complex_buffer: Vec<Complex<f32>> = data
            .iter()
            .map(|x| Complex { re: *x, im: 0.0 })
            .collect();

        let fft = self.planner.plan_fft_forward(complex_buffer.len());
        fft.process(&mut complex_buffer[..]);

        // remove mirroring
        complex_buffer[0..data.len() / 2]
            .iter()
            .map(|x| x.norm())
            .collect()
    }
}

impl Default for Fft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_half_of_the_spectrum() {
        let mut fft = Fft::new();
        assert_eq!(fft.magnitudes(&[0.0; 16]).len(), 8);
        assert_eq!(fft.magnitudes(&[0.0; 15]).len(), 7);
        assert!(fft.magnitudes(&[]).is_empty());
    }

    #[test]
    fn constant_signal_lands_in_first_bin() {
        let mut fft = Fft::new();
        let magnitudes = fft.magnitudes(&[1.0; 8]);
        assert!((magnitudes[0] - 8.0).abs() < 1e-4);
        assert!(magnitudes[1..].iter().all(|m| m.abs() < 1e-4));
    }
}
