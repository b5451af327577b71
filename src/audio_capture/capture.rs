use std::collections::VecDeque;
use std::sync::mpsc;
use std::thread;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::audio_capture::config::Config;
use crate::audio_capture::converter::f32_to_i32;
use crate::error::{Error, Result};
use crate::source::SampleSource;

/// what the cpal callbacks send, device buffers or the error that ended the stream
type Message = Result<Vec<f32>>;

/// mono capture from the default input device
///
/// the cpal callbacks send every device buffer and every stream error over a channel,
/// `read_chunk()` blocks on that channel until enough samples arrived or the stream failed
#[derive(Debug)]
pub struct CaptureSource {
    receiver: mpsc::Receiver<Message>,
    buffer: VecDeque<i32>,
    sample_rate: u32,
    max_buffer_size: usize,

    // dropping it ends the thread that keeps the cpal stream alive
    _shutdown: mpsc::Sender<()>,
}

impl CaptureSource {
    pub fn init(config: Config) -> Result<Self> {
        let sample_rate = config.sample_rate.unwrap_or(44_100);
        let (sender, receiver) = mpsc::channel();
        let (shutdown_sender, shutdown_receiver) = mpsc::channel::<()>();
        let (ready_sender, ready_receiver) = mpsc::channel();

        // cpal streams can not be moved between threads on every platform,
        // so the stream lives on its own thread until the source is dropped
        let c = config.clone();
        thread::spawn(move || match build_stream(sender, &c) {
            Ok(stream) => {
                ready_sender.send(Ok(())).ok();
                shutdown_receiver.recv().ok();
                drop(stream);
            }
            Err(e) => {
                ready_sender.send(Err(e)).ok();
            }
        });

        match ready_receiver.recv() {
            Ok(Ok(())) => (),
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(Error::Disconnected),
        }
        log::info!("capturing default input device at {} hz", sample_rate);

        Ok(Self::from_channel(
            receiver,
            sample_rate,
            config.max_buffer_size,
            shutdown_sender,
        ))
    }

    fn from_channel(
        receiver: mpsc::Receiver<Message>,
        sample_rate: u32,
        max_buffer_size: usize,
        shutdown: mpsc::Sender<()>,
    ) -> Self {
        Self {
            receiver,
            buffer: VecDeque::new(),
            sample_rate,
            max_buffer_size,
            _shutdown: shutdown,
        }
    }

    /// appends captured data, keeping at most `max_buffer_size` or `wanted` samples
    fn receive(&mut self, data: Vec<f32>, wanted: usize) {
        self.buffer.extend(f32_to_i32(&data));

        // prevents buffer to grow indefinetly when chunks are read too slowly
        let limit = self.max_buffer_size.max(wanted);
        if self.buffer.len() > limit {
            let oversize = self.buffer.len() - limit;
            log::warn!("capture buffer overflow, dropping {} samples", oversize);
            self.buffer.drain(..oversize);
        }
    }
}

impl SampleSource for CaptureSource {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn read_chunk(&mut self, n: usize) -> Result<Vec<i32>> {
        while self.buffer.len() < n {
            match self.receiver.recv() {
                Ok(Ok(data)) => self.receive(data, n),
                Ok(Err(e)) => return Err(e),
                Err(_) => return Err(Error::Disconnected),
            }
        }
        Ok(self.buffer.drain(..n).collect())
    }
}

fn stream_error(err: cpal::StreamError) -> Error {
    match err {
        cpal::StreamError::DeviceNotAvailable => Error::Disconnected,
        e => Error::Stream(e.to_string()),
    }
}

fn build_stream(sender: mpsc::Sender<Message>, config: &Config) -> Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host.default_input_device().ok_or(Error::DeviceNotFound)?;

    let device_config = cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(config.sample_rate.unwrap_or(44_100)),
        buffer_size: match config.latency {
            Some(latency) => cpal::BufferSize::Fixed(latency),
            None => cpal::BufferSize::Default,
        },
    };

    let error_sender = sender.clone();
    let stream = device
        .build_input_stream(
            &device_config,
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                // receiver is gone once the source got dropped
                sender.send(Ok(data.to_vec())).ok();
            },
            move |err| {
                log::error!("audio stream error: {}", err);
                error_sender.send(Err(stream_error(err))).ok();
            },
        )
        .map_err(|e| Error::Stream(e.to_string()))?;

    stream.play().map_err(|e| Error::Stream(e.to_string()))?;

    Ok(stream)
}
