use std::collections::VecDeque;

use crate::helix::HelixPoint;

/// Peak sets of the last few frames, so that moving peaks leave a fading afterimage
#[derive(Clone, Debug)]
pub struct PeakTrail {
    layers: VecDeque<Vec<HelixPoint>>,
    depth: usize,
}

impl PeakTrail {
    pub fn new(depth: usize) -> Self {
        Self {
            layers: VecDeque::with_capacity(depth),
            depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn push(&mut self, points: Vec<HelixPoint>) {
        if self.depth == 0 {
            return;
        }
        if self.layers.len() == self.depth {
            self.layers.pop_front();
        }
        self.layers.push_back(points);
    }

    /// layers from oldest to newest with their opacity
    ///
    /// the newest layer is fully opaque, every older one has half the opacity of its successor
    pub fn layers(&self) -> impl Iterator<Item = (f32, &[HelixPoint])> + '_ {
        let newest = self.layers.len().saturating_sub(1);
        self.layers
            .iter()
            .enumerate()
            .map(move |(i, points)| (0.5f32.powi((newest - i) as i32), points.as_slice()))
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(z: f32) -> Vec<HelixPoint> {
        vec![HelixPoint { x: 0.0, y: 1.0, z }]
    }

    #[test]
    fn keeps_only_the_newest_layers() {
        let mut trail = PeakTrail::new(4);
        for i in 0..6 {
            trail.push(layer(i as f32));
        }
        assert_eq!(trail.len(), 4);

        let oldest: Vec<f32> = trail.layers().map(|(_, points)| points[0].z).collect();
        assert_eq!(oldest, vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn opacity_halves_with_age() {
        let mut trail = PeakTrail::new(4);
        for i in 0..4 {
            trail.push(layer(i as f32));
        }
        let opacity: Vec<f32> = trail.layers().map(|(alpha, _)| alpha).collect();
        assert_eq!(opacity, vec![0.125, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn cleared_trail_starts_over() {
        let mut trail = PeakTrail::new(4);
        trail.push(layer(1.0));
        trail.push(layer(2.0));
        trail.clear();
        assert!(trail.is_empty());

        trail.push(layer(3.0));
        let layers: Vec<(f32, &[HelixPoint])> = trail.layers().collect();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].0, 1.0);
        assert_eq!(layers[0].1[0].z, 3.0);
    }

    #[test]
    fn zero_depth_keeps_nothing() {
        let mut trail = PeakTrail::new(0);
        trail.push(layer(1.0));
        assert!(trail.is_empty());
    }
}
