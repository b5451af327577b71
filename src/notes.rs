//! Snaps detected peaks onto the equal-tempered semitone grid of the current reference tuning
//!
//! the grid moves with the tuning, so changing it between two frames immediately
//! changes which semitone a peak is attributed to

use crate::config::{NoteConfig, NoteNaming};
use crate::spectrum::Peak;

const ENGLISH_NAMES: [&str; 12] = ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"];
const FRENCH_NAMES: [&str; 12] = [
    "La", "La#", "Si", "Do", "Do#", "Re", "Re#", "Mi", "Fa", "Fa#", "Sol", "Sol#",
];

/// name of the pitch class that lies `semitone` semitones away from the reference pitch (A)
pub fn pitch_class_name(semitone: i32, naming: NoteNaming) -> &'static str {
    let index = semitone.rem_euclid(12) as usize;
    match naming {
        NoteNaming::English => ENGLISH_NAMES[index],
        NoteNaming::French => FRENCH_NAMES[index],
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    /// quantized frequency in hz
    pub frequency: f32,

    /// relative to the loudest note of the frame, in range (0..=1]
    pub amplitude: f32,

    /// distance to the reference tuning in semitones, 0 is the reference pitch itself
    pub semitone: i32,
}
impl Note {
    pub fn name(&self, naming: NoteNaming) -> &'static str {
        pitch_class_name(self.semitone, naming)
    }
}

#[derive(Clone, Debug, Default)]
pub struct NoteQuantizer {
    pub config: NoteConfig,
}

impl NoteQuantizer {
    pub fn new(config: NoteConfig) -> Self {
        Self { config }
    }

    /// semitone index of `frequency` on the grid of `tuning`, after transposition and folding
    pub fn semitone(&self, frequency: f32, tuning: f32) -> i32 {
        // the cast saturates for degenerate ratios
        let index = ((12.0 * (frequency / tuning).log2()).round() as i32)
            .saturating_add(self.config.transposition);
        if self.config.fold_octaves {
            // (tuning / 2, tuning]
            -(index.saturating_neg().rem_euclid(12))
        } else {
            index
        }
    }

    /// notes in the order of `peaks`, notes sharing a semitone are kept separately
    ///
    /// a tuning that is not a finite positive frequency has no grid and gives no notes
    pub fn quantize(&self, peaks: &[Peak], tuning: f32) -> Vec<Note> {
        if !(tuning > 0.0 && tuning.is_finite()) {
            return Vec::new();
        }
        let candidates: Vec<(i32, f32)> = peaks
            .iter()
            .filter(|peak| peak.frequency > self.config.frequency_floor)
            .map(|peak| (self.semitone(peak.frequency, tuning), peak.magnitude))
            .collect();

        let max_magnitude = candidates.iter().map(|c| c.1).fold(0.0, f32::max);
        if max_magnitude <= 0.0 {
            return Vec::new();
        }
        let threshold = self.config.relative_threshold * max_magnitude;

        candidates
            .into_iter()
            .filter(|(_, magnitude)| *magnitude > threshold)
            .map(|(semitone, magnitude)| Note {
                frequency: note_frequency(semitone, tuning),
                amplitude: magnitude / max_magnitude,
                semitone,
            })
            .collect()
    }
}

/// frequency of the note `semitone` semitones away from `tuning`
///
/// counted from one octave below the tuning, where the reference pitch sits at index 12
pub fn note_frequency(semitone: i32, tuning: f32) -> f32 {
    (tuning / 2.0) * 2f32.powf((semitone as f32 + 12.0) / 12.0)
}
