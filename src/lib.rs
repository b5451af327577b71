//! Pitchsnail turns a stream of raw audio samples into data for a pitch-spiral visualisation
//!
//! Every chunk of samples goes through a Fast Fourier Transform, its dominant frequencies get
//! snapped onto the semitone grid of an adjustable reference tuning and are placed on a
//! spiral where one revolution is one octave. Alongside, a brightness value ("shine") and short
//! rolling histories of amplitude and shine are kept for trend plots.
//!
//! Drawing is left to the caller, the crate only produces plain coordinates and values.
//!
//!# Code Example with a buffered source
//!```
//!use pitchsnail::config::PumpConfig;
//!use pitchsnail::pump::FramePump;
//!use pitchsnail::source::BufferedSource;
//!
//!fn main() -> Result<(), pitchsnail::Error> {
//!    // samples could come from a decoded file or `audio_capture::capture::CaptureSource`
//!    let samples: Vec<i32> = vec![0; 8192 * 4];
//!    let source = BufferedSource::new(samples, 44_100);
//!
//!    let mut pump = FramePump::new(PumpConfig::default(), source)?;
//!
//!    // one tick per animation frame, `None` once the source ran dry
//!    while let Some(frame) = pump.tick()? {
//!        for note in frame.notes.iter() {
//!            println!("{} at {:.1} hz", note.name(pump.config().notes.naming), note.frequency);
//!        }
//!        // reference tuning can be changed between ticks, e.g. by a slider
//!        pump.set_tuning(442.0);
//!    }
//!    Ok(())
//!}
//!```

pub mod config;
pub mod error;

/// peaks and notes on the pitch spiral
pub mod helix;

/// rolling amplitude and shine traces
pub mod history;

/// quantisation of peaks to equal-tempered notes
pub mod notes;

/// drives the analysis one chunk at a time
#[cfg(feature = "spectrum")]
pub mod pump;

/// spectral brightness
pub mod shine;

/// where samples come from and go to
pub mod source;

/// seperates chunks of audio-data into their frequencies
pub mod spectrum;

/// fading afterimages of past peaks
pub mod trail;

pub mod utils;

/// captures audio from the default input device using cpal
#[cfg(feature = "audio_capture")]
pub mod audio_capture;

#[cfg(feature = "fft")]
pub mod fft;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
