/// live `SampleSource` on the default input device
pub mod capture;

/// config for `capture::CaptureSource`
pub mod config;

/// sample format conversion
pub mod converter;
