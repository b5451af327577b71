//! general utilities that help to process audio data

/// converts integer samples to floats without rescaling them
pub fn to_f32(samples: &[i32]) -> Vec<f32> {
    samples.iter().map(|s| *s as f32).collect()
}

/// every `ratio`th element of `data`, starting with the first one
///
/// a ratio of 0 is treated like 1
pub fn downsample<T: Copy>(data: &[T], ratio: usize) -> impl Iterator<Item = T> + '_ {
    data.iter().step_by(ratio.max(1)).copied()
}

/// number of elements `downsample()` yields for `len` elements
pub fn downsampled_len(len: usize, ratio: usize) -> usize {
    let ratio = ratio.max(1);
    (len + ratio - 1) / ratio
}

/// applies hanning windowing to `data`
#[cfg(feature = "apodize")]
pub fn apodize(data: &mut [f32]) {
    // the window is undefined for less than two points
    if data.len() < 2 {
        return;
    }
    let window = apodize::hanning_iter(data.len()).collect::<Vec<f64>>();
    for (i, value) in data.iter_mut().enumerate() {
        *value *= window[i] as f32;
    }
}
