use std::process;

use worldbuilder_bench::cli::{BenchArgs, Invocation, USAGE};
use worldbuilder_bench::report;
use worldbuilder_bench::runner::BenchmarkRunner;
use worldbuilder_bench::scenes;
use worldbuilder_config::loader::load_settings_file;
use worldbuilder_core::settings::BuilderSettings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match BenchArgs::parse(std::env::args().skip(1)) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(message) => {
            eprintln!("shape-bench: {message}\n\n{USAGE}");
            process::exit(2);
        }
    };

    let settings = match args.config {
        Some(ref path) => load_settings_file(path).unwrap_or_else(|e| {
            eprintln!("ERROR: {e}");
            process::exit(1);
        }),
        None => BuilderSettings::default(),
    };

    let runner = BenchmarkRunner::with_settings(args.iterations, settings);

    let scene_configs = scenes::standard_scenes();
    let mut results = Vec::new();

    for config in &scene_configs {
        let result = runner.run_scene(config);
        results.push(result);
    }

    // Print markdown summary
    println!("\n## Benchmark Results\n");
    println!("{}", report::format_markdown(&results));

    // Save output baseline
    if let Some(ref path) = args.output {
        let baseline = report::Baseline {
            timestamp: run_timestamp(),
            results: results.clone(),
        };
        if let Err(e) = report::save_baseline(path, &baseline) {
            eprintln!("ERROR: failed to save baseline to {}: {e}", path.display());
            process::exit(1);
        }
        log::info!("Saved baseline to {}", path.display());
    }

    // Compare against baseline
    if let Some(ref path) = args.baseline {
        if let Some(baseline) = report::load_baseline(path) {
            let regressions = report::compare(&results, &baseline, args.regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, args.regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!(
                    "ERROR: {} regressions detected, exiting with code 1",
                    regressions.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Benchmark complete.");
}

/// Seconds since the Unix epoch, tagged for the baseline file.
fn run_timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("bench-{secs}")
}
