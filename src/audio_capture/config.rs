#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// sample rate requested from the device, 44_100hz if not set
    pub sample_rate: Option<u32>,

    /// the buffersize from the audiobackend
    pub latency: Option<u32>,

    /// samples waiting to be read are dropped, oldest first, once there are more than this,
    /// acts as an emergency stop when chunks are read slower than they are captured,
    /// a read of more samples than this raises the limit to its own size
    pub max_buffer_size: usize,
}
impl Default for Config {
    fn default() -> Self {
        Config {
            sample_rate: None,
            latency: None,
            max_buffer_size: 8192 * 8,
        }
    }
}
