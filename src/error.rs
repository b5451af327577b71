use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("sample source i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("no default input device available")]
    DeviceNotFound,

    /// building or starting the capture stream failed
    #[error("audio stream error: {0}")]
    Stream(String),

    /// the live source stopped delivering data without signalling end of stream
    #[error("sample source disconnected")]
    Disconnected,

    #[error("sample sink rejected chunk: {0}")]
    Sink(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
