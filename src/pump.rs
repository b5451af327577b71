//! # How it works
//! ```text
//!     ┌──────────────────────────┐       ┌──────────────┐
//!     │       SampleSource       │       │  SampleSink  │ (optional playback)
//!     └──────────────────────────┘       └──────────────┘
//!           |                                   ↑
//!           | one chunk per `tick()`            |
//!           ↓                                   |
//! ┌───────────────────┐ ----------------------┘
//! │     FramePump     │ -----> SpectralAnalyzer -----> ShineEstimator -> RollingHistory
//! |  (owns tuning)    │              |
//! └───────────────────┘              ↓
//!           ↑               PeakDetector -> NoteQuantizer -> HelicoidalMapper -> PeakTrail
//!           |                                                     |
//!           └------------------- `Frame` -------------------------┘
//! ```
//! Everything runs on the thread calling `tick()`,
//! the only blocking part is reading from the source.

use crate::config::{PumpConfig, TUNING_RANGE};
use crate::error::{Error, Result};
use crate::helix::{HelicoidalMapper, HelixPoint};
use crate::history::RollingHistory;
use crate::notes::{Note, NoteQuantizer};
use crate::shine::ShineEstimator;
use crate::source::{SampleChunk, SampleSink, SampleSource};
use crate::spectrum::analyzer::SpectralAnalyzer;
use crate::spectrum::peaks::PeakDetector;
use crate::spectrum::{Peak, SpectrumFrame};
use crate::trail::PeakTrail;

/// everything derived from a single chunk
#[derive(Clone, Debug)]
pub struct Frame {
    /// counts from 0
    pub index: u64,

    /// start of the chunk in seconds since the first one
    pub time: f32,

    pub spectrum: SpectrumFrame,

    /// in range (0..=1), used to scale peak markers
    pub loudness: f32,

    pub peaks: Vec<Peak>,
    pub notes: Vec<Note>,

    /// peaks on the pitch spiral
    pub peak_points: Vec<HelixPoint>,

    /// notes on the unit circle
    pub note_points: Vec<HelixPoint>,

    /// `None` if the shine band was empty
    pub shine: Option<f32>,

    /// reference tuning the notes were quantized with
    pub tuning: f32,
}

impl Frame {
    /// marker areas of the peaks, louder chunks give bigger markers
    pub fn peak_marker_sizes(&self, scale: f32) -> Vec<f32> {
        self.peak_points
            .iter()
            .map(|p| self.loudness * scale * p.z)
            .collect()
    }
}

/// pulls chunks from a `SampleSource` and turns each of them into a `Frame`
pub struct FramePump<S: SampleSource> {
    config: PumpConfig,
    source: Option<S>,
    sink: Option<Box<dyn SampleSink>>,
    sample_rate: u32,
    tuning: f32,

    analyzer: SpectralAnalyzer,
    detector: PeakDetector,
    quantizer: NoteQuantizer,
    mapper: HelicoidalMapper,
    estimator: ShineEstimator,
    history: RollingHistory,
    trail: PeakTrail,

    ticks: u64,
    time: f32,
}

impl<S: SampleSource> FramePump<S> {
    pub fn new(config: PumpConfig, source: S) -> Result<Self> {
        config.validate()?;
        let sample_rate = source.sample_rate();
        if sample_rate == 0 {
            return Err(Error::InvalidConfig("source reports a sample rate of 0".to_string()));
        }

        log::info!(
            "starting pump: {} samples per chunk at {} hz, tuning {} hz",
            config.chunk_size,
            sample_rate,
            config.tuning
        );

        Ok(Self {
            sink: None,
            sample_rate,
            tuning: config.tuning,
            analyzer: SpectralAnalyzer::new(config.analyzer.clone()),
            detector: PeakDetector::new(config.peaks.clone()),
            quantizer: NoteQuantizer::new(config.notes.clone()),
            mapper: HelicoidalMapper::new(config.helix.clone()),
            estimator: ShineEstimator::new(config.shine.clone()),
            history: RollingHistory::new(config.history.clone(), config.chunk_size),
            trail: PeakTrail::new(config.trail_depth),
            source: Some(source),
            config,
            ticks: 0,
            time: 0.0,
        })
    }

    /// every analysed chunk is also written to `sink`, its errors are logged and otherwise ignored
    pub fn with_sink(mut self, sink: Box<dyn SampleSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn config(&self) -> &PumpConfig {
        &self.config
    }

    pub fn tuning(&self) -> f32 {
        self.tuning
    }

    /// takes effect on the next tick
    ///
    /// a tuning that is not a finite positive frequency is ignored and the previous one is kept
    pub fn set_tuning(&mut self, tuning: f32) {
        if !(tuning > 0.0 && tuning.is_finite()) {
            log::warn!("ignoring tuning of {} hz, keeping {} hz", tuning, self.tuning);
            return;
        }
        if tuning < TUNING_RANGE[0] || tuning > TUNING_RANGE[1] {
            log::debug!(
                "tuning of {} hz is outside of the usual range {:?}",
                tuning,
                TUNING_RANGE
            );
        }
        self.tuning = tuning;
    }

    pub fn history(&self) -> &RollingHistory {
        &self.history
    }

    pub fn trail(&self) -> &PeakTrail {
        &self.trail
    }

    pub fn mapper(&self) -> &HelicoidalMapper {
        &self.mapper
    }

    /// false once the source signalled end of stream or failed
    pub fn is_running(&self) -> bool {
        self.source.is_some()
    }

    /// processes the next chunk
    ///
    /// `Ok(None)` once the stream has ended, a failing source is released and its error returned
    pub fn tick(&mut self) -> Result<Option<Frame>> {
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(None),
        };

        let samples = match source.read_chunk(self.config.chunk_size) {
            Ok(samples) => samples,
            Err(e) => {
                log::error!("sample source failed after {} chunks: {}", self.ticks, e);
                self.source = None;
                return Err(e);
            }
        };
        if samples.is_empty() {
            log::info!("end of stream after {} chunks ({:.2}s)", self.ticks, self.time);
            self.source = None;
            return Ok(None);
        }

        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.write_chunk(&samples) {
                log::warn!("sample sink failed: {}", e);
            }
        }

        let chunk = SampleChunk::new(samples, self.sample_rate);
        Ok(Some(self.process(chunk)))
    }

    fn process(&mut self, chunk: SampleChunk) -> Frame {
        let tuning = self.tuning;

        let analysis = self.analyzer.analyze(&chunk);
        let peaks = self.detector.detect(&analysis.spectrum);
        let notes = self.quantizer.quantize(&peaks, tuning);
        let peak_points = self.mapper.map_peaks(&peaks, tuning);
        let note_points = self.mapper.map_notes(&notes, tuning);

        let shine = self.estimator.estimate(&analysis.spectrum);
        self.history.update(&chunk.samples, shine);
        self.trail.push(peak_points.clone());

        log::debug!(
            "chunk {}: {} peaks, {} notes, loudness {:.3}, shine {:?}",
            self.ticks,
            peaks.len(),
            notes.len(),
            analysis.loudness,
            shine
        );

        let frame = Frame {
            index: self.ticks,
            time: self.time,
            spectrum: analysis.spectrum,
            loudness: analysis.loudness,
            peaks,
            notes,
            peak_points,
            note_points,
            shine,
            tuning,
        };
        self.ticks += 1;
        self.time += chunk.duration();
        frame
    }
}

/// yields frames until the stream ends, a source error is yielded once and ends iteration too
impl<S: SampleSource> Iterator for FramePump<S> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick().transpose()
    }
}
