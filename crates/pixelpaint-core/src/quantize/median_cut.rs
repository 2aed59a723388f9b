use tracing::debug;

use crate::color::Lab;
use crate::error::{PaintError, Result};

/// A box of Lab points together with its per-axis bounds.
#[derive(Clone, Debug)]
struct Bucket {
    points: Vec<Lab>,
    min: [f64; 3],
    max: [f64; 3],
}

impl Bucket {
    fn new(points: Vec<Lab>) -> Self {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for p in &points {
            for axis in 0..3 {
                let v = p.axis(axis);
                min[axis] = min[axis].min(v);
                max[axis] = max[axis].max(v);
            }
        }
        Self { points, min, max }
    }

    fn ranges(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    fn range_sum(&self) -> f64 {
        self.ranges().iter().sum()
    }

    /// Axis with the largest range; the first axis wins ties.
    fn widest_axis(&self) -> usize {
        let ranges = self.ranges();
        let mut best = 0;
        for axis in 1..3 {
            if ranges[axis] > ranges[best] {
                best = axis;
            }
        }
        best
    }

    /// A bucket can be split only if it holds at least two distinct points,
    /// which for finite coordinates is exactly a non-zero range.
    fn is_splittable(&self) -> bool {
        self.points.len() > 1 && self.range_sum() > 0.0
    }

    /// Sort along the widest axis and cut at `floor(n / 2)`.
    fn split(mut self) -> (Bucket, Bucket) {
        let axis = self.widest_axis();
        self.points
            .sort_by(|a, b| a.axis(axis).total_cmp(&b.axis(axis)));
        let upper = self.points.split_off(self.points.len() / 2);
        (Bucket::new(self.points), Bucket::new(upper))
    }

    fn mean(&self) -> Lab {
        let n = self.points.len() as f64;
        let (l, a, b) = self
            .points
            .iter()
            .fold((0.0, 0.0, 0.0), |(l, a, b), p| (l + p.l, a + p.a, b + p.b));
        Lab::new(l / n, a / n, b / n)
    }
}

/// Reduce `points` to at most `k` representative colors by median cut.
///
/// Buckets live in a work-list: each round the splittable bucket with the
/// largest summed L/a/b range (first in list order on ties) is removed and
/// its two halves are appended. Splitting stops at `k` buckets or when no
/// bucket holds two distinct points, so fewer than `k` colors may come
/// back. Output order follows the final work-list and is deterministic for
/// a given input.
pub fn median_cut(points: &[Lab], k: usize) -> Result<Vec<Lab>> {
    if points.is_empty() {
        return Err(PaintError::EmptyImage);
    }
    if k < 1 {
        return Err(PaintError::InvalidInput(
            "palette size must be at least 1".into(),
        ));
    }

    let mut buckets = vec![Bucket::new(points.to_vec())];

    while buckets.len() < k {
        let mut target: Option<(usize, f64)> = None;
        for (i, bucket) in buckets.iter().enumerate() {
            if !bucket.is_splittable() {
                continue;
            }
            let spread = bucket.range_sum();
            if target.map_or(true, |(_, best)| spread > best) {
                target = Some((i, spread));
            }
        }

        let Some((index, _)) = target else {
            debug!(buckets = buckets.len(), requested = k, "No splittable bucket left");
            break;
        };

        let (lower, upper) = buckets.remove(index).split();
        buckets.push(lower);
        buckets.push(upper);
    }

    debug!(
        points = points.len(),
        colors = buckets.len(),
        "Median cut complete"
    );
    Ok(buckets.iter().map(Bucket::mean).collect())
}
