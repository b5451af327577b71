//! Projection of frequencies onto the pitch spiral
//!
//! One revolution of the spiral is one octave, the reference tuning sits at the top (angle 0)
//! and the radius grows by `spiral_pitch` per revolution:
//! ```text
//!                 tuning
//!                   *
//!              .    |    .
//!           .       |       .
//!          .        +        .   <- radius 1 + pitch * octaves
//!           .               .
//!              .    .    .
//! ```
//! Raw peaks keep their octave on the spiral, notes are drawn on the unit circle
//! and only show their pitch class.

use std::f32::consts::PI;

use crate::config::HelixConfig;
use crate::notes::Note;
use crate::spectrum::Peak;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixPoint {
    pub x: f32,
    pub y: f32,

    /// amplitude carried along, used for marker size and colour
    pub z: f32,
}

#[derive(Clone, Debug, Default)]
pub struct HelicoidalMapper {
    pub config: HelixConfig,
}

impl HelicoidalMapper {
    pub fn new(config: HelixConfig) -> Self {
        Self { config }
    }

    /// angle on the spiral in radians, `None` if the frequency is out of the drawn octave range
    pub fn angle(&self, frequency: f32, tuning: f32) -> Option<f32> {
        let normalized = frequency / tuning;
        let lowest = 2f32.powi(-self.config.octaves_below);
        let highest = 2f32.powi(self.config.octaves_above);
        if !(normalized >= lowest && normalized <= highest) {
            return None;
        }
        Some(2.0 * PI * normalized.log2())
    }

    pub fn spiral_radius(&self, angle: f32) -> f32 {
        1.0 + self.config.spiral_pitch * angle / (2.0 * PI)
    }

    /// peaks on the rising spiral, out of range peaks are dropped
    pub fn map_peaks(&self, peaks: &[Peak], tuning: f32) -> Vec<HelixPoint> {
        peaks
            .iter()
            .filter_map(|peak| {
                let angle = self.angle(peak.frequency, tuning)?;
                Some(polar(self.spiral_radius(angle), angle, peak.magnitude))
            })
            .collect()
    }

    /// notes on the unit circle, out of range notes are dropped
    pub fn map_notes(&self, notes: &[Note], tuning: f32) -> Vec<HelixPoint> {
        notes
            .iter()
            .filter_map(|note| {
                let angle = self.angle(note.frequency, tuning)?;
                Some(polar(1.0, angle, note.amplitude))
            })
            .collect()
    }

    /// `points` evenly spread samples of the spiral over the whole octave range
    ///
    /// used as guide line behind the peaks
    pub fn guide_spiral(&self, points: usize) -> Vec<HelixPoint> {
        let below = self.config.octaves_below as f32;
        let span = (self.config.octaves_below + self.config.octaves_above) as f32;
        (0..points)
            .map(|i| {
                let ratio = if points > 1 {
                    i as f32 / (points - 1) as f32
                } else {
                    0.0
                };
                let angle = 2.0 * PI * (-below + ratio * span);
                polar(self.spiral_radius(angle), angle, 0.0)
            })
            .collect()
    }
}

/// end points of the twelve semitone spokes, the first one points at the reference tuning
pub fn semitone_spokes(radius: f32) -> [HelixPoint; 12] {
    let mut spokes = [HelixPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    }; 12];
    for (i, spoke) in spokes.iter_mut().enumerate() {
        *spoke = polar(radius, 2.0 * PI * i as f32 / 12.0, 0.0);
    }
    spokes
}

/// `z` of every point divided by the largest one, for colour mapping
pub fn relative_intensities(points: &[HelixPoint]) -> Vec<f32> {
    let max = points.iter().map(|p| p.z).fold(0.0, f32::max);
    let ratio = if max > 0.0 { 1.0 / max } else { 1.0 };
    points.iter().map(|p| p.z * ratio).collect()
}

fn polar(radius: f32, angle: f32, z: f32) -> HelixPoint {
    HelixPoint {
        x: radius * angle.sin(),
        y: radius * angle.cos(),
        z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(frequency: f32, magnitude: f32) -> Peak {
        Peak {
            frequency,
            magnitude,
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn tuning_sits_on_top() {
        let mapper = HelicoidalMapper::default();
        let points = mapper.map_peaks(&[peak(440.0, 0.7)], 440.0);

        assert_eq!(points.len(), 1);
        assert!(close(points[0].x, 0.0));
        assert!(close(points[0].y, 1.0));
        assert_eq!(points[0].z, 0.7);
    }

    #[test]
    fn octaves_climb_the_spiral() {
        let mapper = HelicoidalMapper::default();
        let points = mapper.map_peaks(&[peak(880.0, 1.0), peak(220.0, 1.0)], 440.0);

        assert!(close(points[0].x, 0.0));
        assert!(close(points[0].y, 1.15));
        assert!(close(points[1].y, 0.85));
    }

    #[test]
    fn quarter_octave_is_quarter_turn() {
        let mapper = HelicoidalMapper::default();
        let frequency = 440.0 * 2f32.powf(0.25);
        let points = mapper.map_peaks(&[peak(frequency, 1.0)], 440.0);

        assert!(close(points[0].x, 1.0 + 0.15 * 0.25));
        assert!(close(points[0].y, 0.0));
    }

    #[test]
    fn out_of_range_peaks_are_dropped() {
        let mapper = HelicoidalMapper::default();
        let peaks = [
            peak(440.0 / 16.0, 1.0),
            peak(440.0 / 17.0, 1.0),
            peak(440.0 * 16.0, 1.0),
            peak(440.0 * 17.0, 1.0),
            peak(0.0, 1.0),
        ];
        let points = mapper.map_peaks(&peaks, 440.0);
        assert_eq!(points.len(), 2);

        for tuning in [0.0, f32::NAN].iter() {
            assert!(mapper.map_peaks(&peaks, *tuning).is_empty());
        }
    }

    #[test]
    fn notes_stay_on_unit_circle() {
        let mapper = HelicoidalMapper::default();
        let notes = [
            Note {
                frequency: 880.0,
                amplitude: 1.0,
                semitone: 12,
            },
            Note {
                frequency: 440.0 * 2f32.powf(3.0 / 12.0),
                amplitude: 0.5,
                semitone: 3,
            },
        ];
        let points = mapper.map_notes(&notes, 440.0);

        assert!(close(points[0].x, 0.0));
        assert!(close(points[0].y, 1.0));
        for point in points.iter() {
            assert!(close((point.x * point.x + point.y * point.y).sqrt(), 1.0));
        }
        assert_eq!(points[1].z, 0.5);
    }

    #[test]
    fn guide_spiral_spans_all_octaves() {
        let mapper = HelicoidalMapper::default();
        let guide = mapper.guide_spiral(1000);

        assert_eq!(guide.len(), 1000);
        assert!(close(guide[0].y, 1.0 - 0.15 * 4.0));
        assert!(close(guide[999].y, 1.0 + 0.15 * 4.0));
        assert_eq!(mapper.guide_spiral(1).len(), 1);
    }

    #[test]
    fn spokes_and_intensities() {
        let spokes = semitone_spokes(1.6);
        assert!(close(spokes[0].y, 1.6));
        assert!(close(spokes[3].x, 1.6));

        let points = [
            HelixPoint {
                x: 0.0,
                y: 0.0,
                z: 0.5,
            },
            HelixPoint {
                x: 0.0,
                y: 0.0,
                z: 0.25,
            },
        ];
        assert_eq!(relative_intensities(&points), vec![1.0, 0.5]);
        assert!(relative_intensities(&[]).is_empty());
    }
}
