use crate::entities::{Rule, Set};
use crate::opt::score::{score_arrangement_with, score_breakdown};
use crate::opt::shelf_pack::shelf_pack;
use crate::opt::{Canvas, FixedIds};
use crate::util::{FPA, LayoutConfig};
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;
use thousands::Separable;

/// Optimized arrangement together with some statistics of the run that produced it.
#[derive(Clone, Debug)]
pub struct LayoutSolution {
    /// On-plan sets (optimized) followed by the off-plan sets (untouched)
    pub sets: Vec<Set>,
    pub stats: LayoutStats,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutStats {
    /// Score right after shelf packing
    pub initial_score: f64,
    pub final_score: f64,
    /// Number of perturbations which were evaluated
    pub n_iterations: usize,
    /// Number of perturbations which improved on the best arrangement
    pub n_improvements: usize,
}

/// Shelf packing followed by hill-climbing: every iteration perturbs all movable sets of the best
/// arrangement found so far with a shrinking radius and keeps the result only if it strictly improves the score.
pub struct LayoutOptimizer<R: Rng> {
    pub config: LayoutConfig,
    pub rng: R,
    /// Total number of candidate arrangements scored by this optimizer
    pub n_evaluations: usize,
}

impl<R: Rng> LayoutOptimizer<R> {
    pub fn new(config: LayoutConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            n_evaluations: 0,
        }
    }

    /// Optimizes the on-plan sets with [`LayoutConfig::n_iterations`] perturbations.
    pub fn solve(&mut self, sets: &[Set], rules: &[Rule], canvas: Canvas) -> LayoutSolution {
        self.solve_with_iterations(sets, rules, canvas, self.config.n_iterations)
    }

    /// Same as [`LayoutOptimizer::solve`], but on a shuffled input order and with
    /// [`LayoutConfig::n_alternate_iterations`] perturbations.
    /// Only the on-plan sets are shuffled, off-plan sets keep their relative order.
    pub fn solve_alternate(&mut self, sets: &[Set], rules: &[Rule], canvas: Canvas) -> LayoutSolution {
        let (mut shuffled, off_plan): (Vec<Set>, Vec<Set>) = sets.iter().cloned().partition(|s| s.on_plan);
        shuffled.shuffle(&mut self.rng);
        shuffled.extend(off_plan);
        self.solve_with_iterations(&shuffled, rules, canvas, self.config.n_alternate_iterations)
    }

    pub fn solve_with_iterations(
        &mut self,
        sets: &[Set],
        rules: &[Rule],
        canvas: Canvas,
        n_iterations: usize,
    ) -> LayoutSolution {
        let start = Instant::now();
        let (on_plan, off_plan): (Vec<Set>, Vec<Set>) = sets.iter().cloned().partition(|s| s.on_plan);

        if on_plan.is_empty() {
            info!("[LAYOUT] no sets on the plan, nothing to optimize");
            return LayoutSolution {
                sets: sets.to_vec(),
                stats: LayoutStats::default(),
            };
        }

        let fixed = FixedIds::derive(&on_plan, rules);
        let weights = self.config.weights;

        let mut best = shelf_pack(&on_plan, &fixed, canvas.scale, canvas.width, self.config.padding);
        debug_assert!(assertions::fixed_sets_unmoved(&on_plan, &best, &fixed));

        let packed_height = best
            .iter()
            .map(|s| s.aabb(canvas.scale).y_max)
            .fold(0.0, f64::max);
        if FPA(packed_height) > FPA(canvas.height) {
            warn!(
                "[LAYOUT] packed sets reach y={packed_height:.1}, beyond the canvas height of {:.1}",
                canvas.height
            );
        }

        let mut best_score = score_arrangement_with(&best, rules, canvas.scale, &weights);
        let mut stats = LayoutStats {
            initial_score: best_score,
            ..LayoutStats::default()
        };
        info!(
            "[LAYOUT] packed {} sets ({} fixed, {} off-plan), initial score: {}",
            on_plan.len(),
            fixed.len(),
            off_plan.len(),
            score_breakdown(&best, rules, canvas.scale, &weights)
        );

        for i in 0..n_iterations {
            if best_score <= 0.0 {
                //no candidate can strictly improve on a perfect arrangement
                debug!("[LAYOUT] perfect arrangement after {i} iterations");
                break;
            }
            let magnitude = self.magnitude(i, n_iterations);
            let candidate = self.perturb(&best, &fixed, magnitude);
            let candidate_score = score_arrangement_with(&candidate, rules, canvas.scale, &weights);
            stats.n_iterations += 1;
            self.n_evaluations += 1;

            if candidate_score < best_score {
                debug!(
                    "[LAYOUT] [{i}/{n_iterations}] better: {candidate_score:.3} (magnitude {magnitude:.1})"
                );
                best = candidate;
                best_score = candidate_score;
                stats.n_improvements += 1;
            }
        }
        stats.final_score = best_score;
        debug_assert!(assertions::fixed_sets_unmoved(&on_plan, &best, &fixed));

        info!(
            "[LAYOUT] optimization finished in {:.3}ms ({} iterations, {} improvements), final score: {:.3}",
            start.elapsed().as_secs_f64() * 1000.0,
            stats.n_iterations.separate_with_commas(),
            stats.n_improvements,
            best_score
        );

        best.extend(off_plan);
        debug_assert!(assertions::same_sets(sets, &best));
        LayoutSolution { sets: best, stats }
    }

    /// Perturbation radius at iteration `i`, decaying linearly from `max_magnitude` and bounded below by `min_magnitude`.
    fn magnitude(&self, i: usize, n_iterations: usize) -> f64 {
        let progress = i as f64 / n_iterations as f64;
        f64::max(self.config.min_magnitude, self.config.max_magnitude * (1.0 - progress))
    }

    /// Offsets x and y of every non-fixed set independently by a uniform sample in [-magnitude/2, magnitude/2].
    /// Coordinates are clamped to stay non-negative.
    fn perturb(&mut self, arrangement: &[Set], fixed: &FixedIds, magnitude: f64) -> Vec<Set> {
        //negative or NaN magnitudes collapse to no offset
        let half = magnitude.max(0.0).min(f64::MAX) / 2.0;
        arrangement
            .iter()
            .map(|s| {
                let mut s = s.clone();
                if !fixed.contains(&s.id) {
                    s.x = (s.x + self.rng.random_range(-half..=half)).max(0.0);
                    s.y = (s.y + self.rng.random_range(-half..=half)).max(0.0);
                }
                s
            })
            .collect_vec()
    }
}

/// Computes an improved arrangement of the on-plan sets with the default [`LayoutConfig`].
/// Fixed and locked sets keep their position, off-plan sets are appended untouched.
pub fn compute_layout<R: Rng + ?Sized>(
    sets: &[Set],
    rules: &[Rule],
    canvas: Canvas,
    n_iterations: usize,
    rng: &mut R,
) -> Vec<Set> {
    LayoutOptimizer::new(LayoutConfig::default(), rng)
        .solve_with_iterations(sets, rules, canvas, n_iterations)
        .sets
}

/// Like [`compute_layout`], on a shuffled input order and with more iterations.
/// There is no guarantee that the result differs from, or improves on, a regular layout.
pub fn compute_alternate_layout<R: Rng + ?Sized>(
    sets: &[Set],
    rules: &[Rule],
    canvas: Canvas,
    rng: &mut R,
) -> Vec<Set> {
    LayoutOptimizer::new(LayoutConfig::default(), rng)
        .solve_alternate(sets, rules, canvas)
        .sets
}
