//! Built-in Gaussian-mixture energy minimizer
//!
//! Models each class (background, foreground) as a mixture of
//! diagonal-covariance Gaussians over BGR color, fitted with k-means
//! on the pixels currently assigned to the class. Each iteration
//! refits both models and reassigns every probable cell to the class
//! with the lower negative log-likelihood; definite cells never move.
//! The loop exits early once an iteration changes nothing.
//!
//! Cluster seeding draws from a caller-controlled seed, so results are
//! reproducible run to run.

use crate::{EnergyMinimizer, InitMode, SegmentError, SegmentResult};
use cutout_core::{ChannelLayout, Raster, Trimap, TrimapLabel};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Variance floor keeping uniform-color clusters well-conditioned.
const VAR_FLOOR: f32 = 4.0;

/// Gaussian-mixture color-model minimizer
#[derive(Debug, Clone)]
pub struct MixtureMinimizer {
    components: usize,
    kmeans_rounds: u32,
    seed: u64,
}

impl Default for MixtureMinimizer {
    fn default() -> Self {
        Self {
            components: 5,
            kmeans_rounds: 10,
            seed: 0,
        }
    }
}

impl MixtureMinimizer {
    /// Create a minimizer with `components` Gaussians per class and a
    /// fixed seed for cluster initialization.
    pub fn new(components: usize, seed: u64) -> Self {
        Self {
            components: components.max(1),
            kmeans_rounds: 10,
            seed,
        }
    }
}

/// One diagonal-covariance Gaussian with a mixture weight
#[derive(Debug, Clone)]
struct Component {
    mean: [f32; 3],
    var: [f32; 3],
    weight: f32,
}

impl Component {
    /// Negative log-likelihood of a color under this component,
    /// dropping terms constant across all components.
    fn cost(&self, color: [f32; 3]) -> f32 {
        let mut log_det = 0.0;
        let mut dist = 0.0;
        for c in 0..3 {
            log_det += self.var[c].ln();
            let d = color[c] - self.mean[c];
            dist += d * d / self.var[c];
        }
        -self.weight.ln() + 0.5 * log_det + 0.5 * dist
    }
}

/// A per-class mixture model
#[derive(Debug, Clone)]
struct ColorModel {
    components: Vec<Component>,
}

impl ColorModel {
    /// Fit a mixture to `samples` with seeded k-means. Returns `None`
    /// for an empty sample set.
    fn fit(samples: &[[f32; 3]], k: usize, rounds: u32, rng: &mut StdRng) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let k = k.min(samples.len());

        // Seed centers with distinct random samples.
        let mut centers: Vec<[f32; 3]> = Vec::with_capacity(k);
        let mut taken = std::collections::HashSet::new();
        let mut attempts = 0;
        while centers.len() < k {
            let idx = rng.random_range(0..samples.len());
            attempts += 1;
            if taken.insert(idx) || attempts > 16 * k {
                centers.push(samples[idx]);
            }
        }

        let mut assignment = vec![0usize; samples.len()];
        for _ in 0..rounds {
            let mut moved = false;

            for (i, sample) in samples.iter().enumerate() {
                let nearest = nearest_center(&centers, *sample);
                if assignment[i] != nearest {
                    assignment[i] = nearest;
                    moved = true;
                }
            }

            let mut sums = vec![[0.0f32; 3]; centers.len()];
            let mut counts = vec![0usize; centers.len()];
            for (i, sample) in samples.iter().enumerate() {
                let a = assignment[i];
                counts[a] += 1;
                for c in 0..3 {
                    sums[a][c] += sample[c];
                }
            }
            for (j, center) in centers.iter_mut().enumerate() {
                if counts[j] > 0 {
                    for c in 0..3 {
                        center[c] = sums[j][c] / counts[j] as f32;
                    }
                }
            }

            if !moved {
                break;
            }
        }

        // Collapse clusters into weighted Gaussians.
        let mut components = Vec::with_capacity(centers.len());
        for (j, center) in centers.iter().enumerate() {
            let members: Vec<_> = samples
                .iter()
                .zip(&assignment)
                .filter(|&(_, &a)| a == j)
                .map(|(s, _)| *s)
                .collect();
            if members.is_empty() {
                continue;
            }

            let mut var = [0.0f32; 3];
            for member in &members {
                for c in 0..3 {
                    let d = member[c] - center[c];
                    var[c] += d * d;
                }
            }
            for v in &mut var {
                *v = (*v / members.len() as f32).max(VAR_FLOOR);
            }

            components.push(Component {
                mean: *center,
                var,
                weight: members.len() as f32 / samples.len() as f32,
            });
        }

        Some(Self { components })
    }

    /// Cost of a color under the best-matching component; lower is a
    /// better fit.
    fn cost(&self, color: [f32; 3]) -> f32 {
        self.components
            .iter()
            .map(|component| component.cost(color))
            .fold(f32::INFINITY, f32::min)
    }
}

fn nearest_center(centers: &[[f32; 3]], sample: [f32; 3]) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (j, center) in centers.iter().enumerate() {
        let mut dist = 0.0;
        for c in 0..3 {
            let d = sample[c] - center[c];
            dist += d * d;
        }
        if dist < best_dist {
            best_dist = dist;
            best = j;
        }
    }
    best
}

/// Read a pixel as a BGR triple regardless of layout.
#[inline]
fn pixel_color(data: &[u8], idx: usize, layout: ChannelLayout) -> [f32; 3] {
    match layout {
        ChannelLayout::Gray => {
            let v = data[idx] as f32;
            [v, v, v]
        }
        ChannelLayout::Bgr => {
            let off = idx * 3;
            [data[off] as f32, data[off + 1] as f32, data[off + 2] as f32]
        }
        ChannelLayout::Bgra => {
            let off = idx * 4;
            [data[off] as f32, data[off + 1] as f32, data[off + 2] as f32]
        }
    }
}

impl EnergyMinimizer for MixtureMinimizer {
    fn minimize(
        &mut self,
        image: &Raster,
        trimap: &Trimap,
        mode: InitMode,
        iterations: u32,
    ) -> SegmentResult<Trimap> {
        if trimap.dimensions() != image.dimensions() {
            return Err(SegmentError::DimensionMismatch {
                trimap: trimap.dimensions(),
                image: image.dimensions(),
            });
        }

        let layout = image.layout();
        let data = image.data();
        let mut labels = trimap.labels().to_vec();
        let probable_count = labels.iter().filter(|l| !l.is_definite()).count();

        tracing::debug!(?mode, iterations, probable_count, "fitting color models");

        let mut rng = StdRng::seed_from_u64(self.seed);
        let iterations = iterations.max(1);
        let mut last_changed = 0usize;
        let mut settled = false;

        for round in 0..iterations {
            let mut bg_samples = Vec::new();
            let mut fg_samples = Vec::new();
            for (idx, label) in labels.iter().enumerate() {
                let color = pixel_color(data, idx, layout);
                if label.is_foreground() {
                    fg_samples.push(color);
                } else {
                    bg_samples.push(color);
                }
            }

            let bg_model = ColorModel::fit(&bg_samples, self.components, self.kmeans_rounds, &mut rng)
                .ok_or(SegmentError::DegenerateTrimap {
                    missing: "background",
                })?;
            let fg_model = ColorModel::fit(&fg_samples, self.components, self.kmeans_rounds, &mut rng)
                .ok_or(SegmentError::DegenerateTrimap {
                    missing: "foreground",
                })?;

            let mut changed = 0usize;
            for (idx, label) in labels.iter_mut().enumerate() {
                if label.is_definite() {
                    continue;
                }
                let color = pixel_color(data, idx, layout);
                // Ties resolve to background.
                let new_label = if fg_model.cost(color) < bg_model.cost(color) {
                    TrimapLabel::ProbableForeground
                } else {
                    TrimapLabel::ProbableBackground
                };
                if *label != new_label {
                    *label = new_label;
                    changed += 1;
                }
            }

            last_changed = changed;
            tracing::debug!(round, changed, "relabeled probable cells");
            if changed == 0 {
                settled = true;
                break;
            }
        }

        // A labeling still flipping most of the probable area after the
        // full iteration budget is oscillating, not converging.
        if !settled && last_changed * 2 > probable_count.max(1) {
            return Err(SegmentError::NotConverged {
                changed: last_changed,
                iterations,
            });
        }

        let mut out = trimap.clone();
        out.labels_mut().copy_from_slice(&labels);
        Ok(out)
    }
}
