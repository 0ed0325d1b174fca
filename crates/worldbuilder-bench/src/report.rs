use std::path::Path;

use crate::runner::BenchmarkResult;

/// A complete baseline containing results from all scenes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub timestamp: String,
    pub results: Vec<BenchmarkResult>,
}

/// Load a baseline from a JSON file. Returns None if the file doesn't exist
/// or can't be parsed.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents)
        .map_err(|e| log::warn!("Baseline {} is not valid JSON: {e}", path.display()))
        .ok()
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// A scene whose mean build time grew past the threshold, or whose affected
/// count no longer matches the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Regression {
    Slower { scene: String, pct_change: f64 },
    CountChanged { scene: String, baseline: u64, current: u64 },
}

/// Compare current results against a baseline.
pub fn compare(
    current: &[BenchmarkResult],
    baseline: &Baseline,
    threshold_pct: f64,
) -> Vec<Regression> {
    let mut regressions = Vec::new();

    for result in current {
        let Some(base) = baseline
            .results
            .iter()
            .find(|b| b.scene_name == result.scene_name)
        else {
            continue;
        };

        if result.affected != base.affected {
            regressions.push(Regression::CountChanged {
                scene: result.scene_name.clone(),
                baseline: base.affected,
                current: result.affected,
            });
        }

        if base.timings.mean_ms > 0.0 {
            let pct_change =
                (result.timings.mean_ms - base.timings.mean_ms) / base.timings.mean_ms * 100.0;
            if pct_change > threshold_pct {
                regressions.push(Regression::Slower {
                    scene: result.scene_name.clone(),
                    pct_change,
                });
            }
        }
    }

    regressions
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Affected | Cells | Mean (ms) | Median (ms) | P95 (ms) | P99 (ms) | Min (ms) | Max (ms) |\n");
    out.push_str("|-------|----------|-------|-----------|-------------|----------|----------|----------|----------|\n");

    for r in results {
        out.push_str(&format!(
            "| {} | {} | {} | {:.3} | {:.3} | {:.3} | {:.3} | {:.3} | {:.3} |\n",
            r.scene_name,
            r.affected,
            r.cells_stored,
            r.timings.mean_ms,
            r.timings.median_ms,
            r.timings.p95_ms,
            r.timings.p99_ms,
            r.timings.min_ms,
            r.timings.max_ms,
        ));
    }

    out
}

/// Format a comparison report showing regressions.
pub fn format_comparison(regressions: &[Regression], threshold_pct: f64) -> String {
    if regressions.is_empty() {
        return format!(
            "All scenes within {:.0}% threshold. No regressions detected.\n",
            threshold_pct
        );
    }

    let mut out = String::new();
    out.push_str(&format!(
        "REGRESSIONS DETECTED (>{:.0}% threshold):\n",
        threshold_pct
    ));
    for regression in regressions {
        match regression {
            Regression::Slower { scene, pct_change } => {
                out.push_str(&format!("  - {}: +{:.1}%\n", scene, pct_change));
            }
            Regression::CountChanged {
                scene,
                baseline,
                current,
            } => {
                out.push_str(&format!(
                    "  - {}: affected {} (baseline {})\n",
                    scene, current, baseline
                ));
            }
        }
    }
    out
}
