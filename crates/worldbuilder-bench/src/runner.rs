use std::time::Instant;

use worldbuilder_core::settings::BuilderSettings;
use worldbuilder_shapes::ShapeBuilder;
use worldbuilder_world::{GridBounds, RecordingSink, VoxelGrid};

use crate::scenes::SceneConfig;

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    /// Affected count reported by the last build.
    pub affected: u64,
    /// Non-air cells left in the grid after the last build.
    pub cells_stored: usize,
    pub iterations: u32,
    pub timings: TimingSeries,
}

/// Builds every scene into a fresh grid, `iterations` times.
pub struct BenchmarkRunner {
    builder: ShapeBuilder,
    iterations: u32,
}

impl BenchmarkRunner {
    pub fn new(iterations: u32) -> Self {
        Self::with_settings(iterations, BuilderSettings::default())
    }

    pub fn with_settings(iterations: u32, settings: BuilderSettings) -> Self {
        Self {
            builder: ShapeBuilder::with_settings(BuilderSettings {
                // No per-build parameter reports
                debug: false,
                auto_clear_marks: false,
                ..settings
            }),
            iterations,
        }
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, config: &SceneConfig) -> BenchmarkResult {
        log::info!(
            "Running scene '{}' ({} {})...",
            config.name,
            config.kind,
            config.args.join(" ")
        );

        let bounds = GridBounds::from(self.builder.settings());
        let mut build_times = Vec::with_capacity(self.iterations as usize);
        let mut affected = 0;
        let mut cells_stored = 0;
        let mut rejected = 0u32;

        for _ in 0..self.iterations {
            let mut grid = VoxelGrid::with_bounds(bounds);
            let mut marks = config.marks();
            let mut sink = RecordingSink::new();

            let build_start = Instant::now();
            let report = self.builder.build(
                &mut grid,
                &mut marks,
                &mut sink,
                config.kind,
                config.args,
                config.origin(),
            );
            build_times.push(build_start.elapsed().as_secs_f64() * 1000.0);

            if !sink.errors.is_empty() {
                rejected += 1;
            }
            affected = report.affected;
            cells_stored = grid.len();
        }

        if rejected > 0 {
            log::warn!("  Scene '{}' rejected {rejected} times", config.name);
        }

        let timings = compute_timings(&build_times);
        log::info!(
            "  Done: {} affected, mean={:.3}ms, p95={:.3}ms, p99={:.3}ms",
            affected,
            timings.mean_ms,
            timings.p95_ms,
            timings.p99_ms
        );

        BenchmarkResult {
            scene_name: config.name.to_string(),
            affected,
            cells_stored,
            iterations: self.iterations,
            timings,
        }
    }
}

/// Compute timing statistics from a list of build times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
