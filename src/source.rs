//! Seams between the analysis and whatever delivers or plays back the samples
//!
//! a source can be a live capture (see `audio_capture`), a decoded file or just a buffer.
//! It signals the end of the stream by returning an empty chunk.

use crate::error::Result;

/// consecutive mono samples together with their sample rate
#[derive(Clone, Debug, PartialEq)]
pub struct SampleChunk {
    pub samples: Vec<i32>,

    /// in hz
    pub sample_rate: u32,
}

impl SampleChunk {
    pub fn new(samples: Vec<i32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// in seconds
    pub fn duration(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

pub trait SampleSource {
    fn sample_rate(&self) -> u32;

    /// up to `n` samples, blocks until they are available
    ///
    /// fewer samples mean the stream is about to end, none mean it has ended
    fn read_chunk(&mut self, n: usize) -> Result<Vec<i32>>;
}

impl<S: SampleSource + ?Sized> SampleSource for Box<S> {
    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }

    fn read_chunk(&mut self, n: usize) -> Result<Vec<i32>> {
        (**self).read_chunk(n)
    }
}

/// receives every chunk the pump analyses, e.g. to play it back at the same time
pub trait SampleSink {
    fn write_chunk(&mut self, samples: &[i32]) -> Result<()>;
}

/// source over samples that are already in memory, behaves like a file
#[derive(Clone, Debug)]
pub struct BufferedSource {
    samples: Vec<i32>,
    sample_rate: u32,
    position: usize,
}

impl BufferedSource {
    pub fn new(samples: Vec<i32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            position: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.samples.len() - self.position
    }
}

impl SampleSource for BufferedSource {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn read_chunk(&mut self, n: usize) -> Result<Vec<i32>> {
        let end = (self.position + n).min(self.samples.len());
        let chunk = self.samples[self.position..end].to_vec();
        self.position = end;
        Ok(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_source_runs_dry() {
        let mut source = BufferedSource::new((0..25).collect(), 44_100);

        assert_eq!(source.read_chunk(10).unwrap().len(), 10);
        assert_eq!(source.read_chunk(10).unwrap(), (10..20).collect::<Vec<i32>>());
        assert_eq!(source.read_chunk(10).unwrap().len(), 5);
        assert!(source.read_chunk(10).unwrap().is_empty());
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn chunk_duration() {
        let chunk = SampleChunk::new(vec![0; 22_050], 44_100);
        assert_eq!(chunk.duration(), 0.5);
        assert_eq!(SampleChunk::new(vec![0; 10], 0).duration(), 0.0);
    }
}
