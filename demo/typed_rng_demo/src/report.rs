//! The demonstration sequence.
//!
//! Prints one line per sampling operation, grouped in sections:
//!
//! ```text
//! Generating random integers...
//!  <i32> -1535478126
//!  <u32> 3219760411
//! Generating random bounded integers...
//!  <i32 [-10, 10]> 4
//!  <u32 [0, 10]> 9
//! Generating random reals...
//!  <f64> 0.2417535421380089
//! Generating random bounded reals...
//!  <f64 [0.0, π)> 2.0133592233049497
//! Generating random booleans...
//!  <true 50%, false 50%> false
//!  <true 75%, false 25%> true
//!  <true 25%, false 75%> false
//! ```

use std::f64::consts::PI;
use std::fmt::Display;
use std::io::Write;

use rand::rngs::{SmallRng, StdRng};
use tracing::info;
use typed_rng::{Engine, RandomGenerator};

use crate::config::{DemoConfig, EngineKind};
use crate::error::DemoError;

/// Runs the demonstration with the configured engine and writes it to `out`.
///
/// Returns the seed the generator was built from, so an entropy-seeded run
/// can be replayed with `--seed`.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<u64, DemoError> {
    match config.engine {
        EngineKind::Std => run_with::<StdRng, W>(config, out),
        EngineKind::Small => run_with::<SmallRng, W>(config, out),
    }
}

fn run_with<E, W>(config: &DemoConfig, out: &mut W) -> Result<u64, DemoError>
where
    E: Engine<Seed = u64>,
    W: Write,
{
    let seed = config.seed.unwrap_or_else(E::entropy_seed);
    info!(seed, engine = ?config.engine, "Generating values");

    let mut rng = RandomGenerator::<E>::from_seed(seed);
    write_report(&mut rng, config.samples, out)?;
    Ok(seed)
}

/// Writes every section of the demonstration, `samples` values per line.
pub fn write_report<E: Engine, W: Write>(
    rng: &mut RandomGenerator<E>,
    samples: usize,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "Generating random integers...")?;
    line(out, "<i32>", samples, || rng.integer::<i32>())?;
    line(out, "<u32>", samples, || rng.integer::<u32>())?;

    writeln!(out, "Generating random bounded integers...")?;
    line(out, "<i32 [-10, 10]>", samples, || rng.integer_in(-10i32, 10))?;
    line(out, "<u32 [0, 10]>", samples, || rng.integer_in(0u32, 10))?;

    writeln!(out, "Generating random reals...")?;
    line(out, "<f64>", samples, || rng.real::<f64>())?;

    writeln!(out, "Generating random bounded reals...")?;
    line(out, "<f64 [0.0, π)>", samples, || rng.real_in(0.0, PI))?;

    writeln!(out, "Generating random booleans...")?;
    line(out, "<true 50%, false 50%>", samples, || rng.boolean())?;
    line(out, "<true 75%, false 25%>", samples, || rng.boolean_with(0.75))?;
    line(out, "<true 25%, false 75%>", samples, || rng.boolean_with(0.25))?;

    Ok(())
}

fn line<W, T, F>(out: &mut W, label: &str, samples: usize, mut draw: F) -> std::io::Result<()>
where
    W: Write,
    T: Display,
    F: FnMut() -> T,
{
    write!(out, " {}", label)?;
    for _ in 0..samples {
        write!(out, " {}", draw())?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: &DemoConfig) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_layout() {
        let config = DemoConfig {
            seed: Some(42),
            ..DemoConfig::default()
        };
        let text = render(&config);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "Generating random integers...");
        assert!(lines[4].starts_with(" <i32 [-10, 10]> "));
        assert!(lines[13].starts_with(" <true 25%, false 75%> "));
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        for engine in [EngineKind::Std, EngineKind::Small] {
            let config = DemoConfig {
                seed: Some(7),
                engine,
                samples: 5,
                ..DemoConfig::default()
            };
            assert_eq!(render(&config), render(&config));
        }
    }

    #[test]
    fn test_returns_seed_used() {
        let config = DemoConfig::default();
        let mut first = Vec::new();
        let seed = run(&config, &mut first).unwrap();

        let replay = DemoConfig {
            seed: Some(seed),
            ..config
        };
        let mut second = Vec::new();
        assert_eq!(run(&replay, &mut second).unwrap(), seed);
        assert_eq!(first, second);
    }
}
