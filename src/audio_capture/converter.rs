/// maps float samples in (-1..=1) onto the full `i32` range, louder samples are clipped
pub fn f32_to_i32(samples: &[f32]) -> Vec<i32> {
    samples
        .iter()
        .map(|x| (x.clamp(-1.0, 1.0) * i32::MAX as f32) as i32)
        .collect()
}
