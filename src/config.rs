#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::spectrum::config::{AnalyzerConfig, PeakConfig};
use crate::error::{Error, Result};

/// default reference tuning, A4 in hz
pub const DEFAULT_TUNING: f32 = 440.0;

/// range the reference tuning is usually adjusted in,
/// finite positive values outside of it are accepted nevertheless
pub const TUNING_RANGE: [f32; 2] = [400.0, 480.0];

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoteNaming {
    /// A, A#, B, C ...
    English,

    /// La, La#, Si, Do ...
    French,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoteConfig {
    /// peaks at or below this frequency are ignored, default is the lowest key of a piano
    pub frequency_floor: f32,

    /// notes quieter than `relative_threshold` * loudest note of the frame get dropped
    pub relative_threshold: f32,

    /// moves every note by this amount of semitones, e.g. -3 for transposing instruments
    pub transposition: i32,

    /// folds every note into the octave right below the reference tuning
    pub fold_octaves: bool,

    pub naming: NoteNaming,
}
impl Default for NoteConfig {
    fn default() -> Self {
        NoteConfig {
            frequency_floor: 27.5,
            relative_threshold: 0.05,
            transposition: 0,
            fold_octaves: false,
            naming: NoteNaming::French,
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HelixConfig {
    /// frequencies more than this many octaves below the tuning are not drawn
    pub octaves_below: i32,

    /// frequencies more than this many octaves above the tuning are not drawn
    pub octaves_above: i32,

    /// radius gained per revolution of the spiral
    pub spiral_pitch: f32,
}
impl Default for HelixConfig {
    fn default() -> Self {
        HelixConfig {
            octaves_below: 4,
            octaves_above: 4,
            spiral_pitch: 0.15,
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShineConfig {
    /// exclusive band in hz, bins outside of it do not count
    pub band: [f32; 2],
}
impl Default for ShineConfig {
    fn default() -> Self {
        ShineConfig {
            band: [20.0, 3000.0],
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryConfig {
    /// only every `sampling_ratio`th sample of a chunk ends up in the history
    pub sampling_ratio: usize,

    /// how many chunks the history remembers
    pub memory_chunks: usize,

    /// samples get divided by it before they are stored
    pub amplitude_scale: f32,

    /// shine gets divided by it before it is stored
    pub shine_divisor: f32,

    /// flips the sign of every other amplitude entry, so the trace looks like a waveform
    pub alternate_sign: bool,
}
impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            sampling_ratio: 10,
            memory_chunks: 9,
            amplitude_scale: 4_294_967_296.0, // 2^32
            shine_divisor: 10.0,
            alternate_sign: true,
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PumpConfig {
    /// samples requested from the source on every tick
    pub chunk_size: usize,

    /// initial reference tuning in hz, can be changed while running
    pub tuning: f32,

    /// how many past peak sets are kept for afterimages
    pub trail_depth: usize,

    pub analyzer: AnalyzerConfig,
    pub peaks: PeakConfig,
    pub notes: NoteConfig,
    pub helix: HelixConfig,
    pub shine: ShineConfig,
    pub history: HistoryConfig,
}
impl Default for PumpConfig {
    fn default() -> Self {
        PumpConfig {
            chunk_size: 8192,
            tuning: DEFAULT_TUNING,
            trail_depth: 4,
            analyzer: AnalyzerConfig::default(),
            peaks: PeakConfig::default(),
            notes: NoteConfig::default(),
            helix: HelixConfig::default(),
            shine: ShineConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl PumpConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(invalid("chunk_size must be greater than 0"));
        }
        if !(self.tuning > 0.0) {
            return Err(invalid("tuning must be a positive frequency"));
        }
        if self.history.sampling_ratio == 0 {
            return Err(invalid("history.sampling_ratio must be greater than 0"));
        }
        if self.history.memory_chunks == 0 {
            return Err(invalid("history.memory_chunks must be greater than 0"));
        }
        if self.history.amplitude_scale == 0.0 || self.history.shine_divisor == 0.0 {
            return Err(invalid("history scaling factors must not be 0"));
        }
        if self.shine.band[0] >= self.shine.band[1] {
            return Err(invalid("shine.band must be ascending"));
        }
        if self.helix.octaves_below < 0 || self.helix.octaves_above < 0 {
            return Err(invalid("helix octave range must not be negative"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> Error {
    Error::InvalidConfig(reason.to_string())
}
