use std::path::PathBuf;

pub const USAGE: &str = "\
shape-bench: time every standard scene through the shape builder

usage: shape-bench [--iterations N] [--config FILE]
                   [--output FILE] [--baseline FILE] [--regression-threshold PCT]

  --iterations N              builds timed per scene (50)
  --config FILE               builder settings in RON, replacing the defaults
  --output FILE               write this run to FILE as a JSON baseline
  --baseline FILE             compare against FILE and exit 1 on regressions
  --regression-threshold PCT  slowdown in percent that counts as a regression (10)";

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Run(BenchArgs),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchArgs {
    pub iterations: u32,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub baseline: Option<PathBuf>,
    pub regression_threshold: f64,
}

impl Default for BenchArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchArgs {
    pub fn new() -> Self {
        Self {
            iterations: 50,
            config: None,
            output: None,
            baseline: None,
            regression_threshold: 10.0,
        }
    }

    /// Parse the arguments after the program name. A later flag overrides
    /// an earlier one.
    pub fn parse<I, S>(args: I) -> Result<Invocation, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::new();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let flag = flag.as_ref();
            if matches!(flag, "-h" | "--help") {
                return Ok(Invocation::Help);
            }
            let mut value = || {
                args.next()
                    .map(|v| v.as_ref().to_owned())
                    .ok_or_else(|| format!("{flag} expects a value"))
            };
            match flag {
                "--iterations" => {
                    let raw = value()?;
                    parsed.iterations = match raw.parse::<u32>() {
                        Ok(n) if n > 0 => n,
                        _ => return Err(format!("--iterations: '{raw}' is not a positive count")),
                    };
                }
                "--regression-threshold" => {
                    let raw = value()?;
                    parsed.regression_threshold = match raw.parse::<f64>() {
                        Ok(pct) if pct.is_finite() && pct >= 0.0 => pct,
                        _ => {
                            return Err(format!(
                                "--regression-threshold: '{raw}' is not a percentage"
                            ))
                        }
                    };
                }
                "--config" => parsed.config = Some(value()?.into()),
                "--output" => parsed.output = Some(value()?.into()),
                "--baseline" => parsed.baseline = Some(value()?.into()),
                other => return Err(format!("unrecognised argument '{other}'")),
            }
        }
        Ok(Invocation::Run(parsed))
    }
}
