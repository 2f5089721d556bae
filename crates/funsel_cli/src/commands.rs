//! Subcommand implementations

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use funsel_animation::SpringInterpolator;
use funsel_widgets::FunSelector;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{FunselConfig, SpringConfig, DEFAULT_CONFIG_FILE};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Arguments of `funsel curve`
#[derive(Args, Debug, Default)]
pub struct CurveArgs {
    /// Number of intervals; prints samples + 1 points from t = 0 to t = 1
    #[arg(long, default_value_t = 20)]
    pub samples: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long)]
    pub amplitude: Option<f64>,

    #[arg(long)]
    pub mass: Option<f64>,

    #[arg(long)]
    pub stiffness: Option<f64>,

    /// Phase offset in radians
    #[arg(long, allow_hyphen_values = true)]
    pub phase: Option<f64>,

    #[arg(long)]
    pub bounce: Option<bool>,
}

impl CurveArgs {
    /// Layer the command-line overrides on top of the configured spring
    fn apply(&self, base: SpringConfig) -> SpringConfig {
        SpringConfig {
            amplitude: self.amplitude.unwrap_or(base.amplitude),
            mass: self.mass.unwrap_or(base.mass),
            stiffness: self.stiffness.unwrap_or(base.stiffness),
            phase: self.phase.unwrap_or(base.phase),
            bounce: self.bounce.unwrap_or(base.bounce),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSample {
    pub t: f64,
    pub value: f64,
}

#[derive(Debug, Serialize)]
struct CurveReport {
    amplitude: f64,
    mass: f64,
    stiffness: f64,
    phase: f64,
    bounce: bool,
    pulsation: f64,
    samples: Vec<CurveSample>,
}

/// Evenly spaced samples over [0, 1], both ends included
pub fn sample_curve(spring: &SpringInterpolator, intervals: u32) -> Vec<CurveSample> {
    (0..=intervals)
        .map(|i| {
            let t = i as f64 / intervals as f64;
            CurveSample {
                t,
                value: spring.curve(t),
            }
        })
        .collect()
}

/// `funsel curve`
pub fn curve(config: &FunselConfig, args: &CurveArgs) -> Result<()> {
    if args.samples == 0 {
        bail!("--samples must be at least 1");
    }

    let spring = args.apply(config.spring).build()?;
    let samples = sample_curve(&spring, args.samples);

    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Table => {
            writeln!(out, "{:>8} {:>12}", "t", "curve(t)")?;
            for sample in &samples {
                writeln!(out, "{:>8.4} {:>12.6}", sample.t, sample.value)?;
            }
        }
        OutputFormat::Json => {
            let report = CurveReport {
                amplitude: spring.amplitude(),
                mass: spring.mass(),
                stiffness: spring.stiffness(),
                phase: spring.phase(),
                bounce: spring.is_bounce(),
                pulsation: spring.pulsation(),
                samples,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// `funsel toggle`
pub fn toggle(config: &FunselConfig, presses: u32, fps: Option<u32>) -> Result<()> {
    simulate(&mut io::stdout().lock(), config, presses, fps)
}

/// Press the selector `presses` times, writing one row per frame to `out`
pub fn simulate(out: &mut impl Write, config: &FunselConfig, presses: u32, fps: Option<u32>) -> Result<()> {
    let fps = fps.unwrap_or(config.simulation.fps);
    if fps == 0 {
        bail!("fps must be at least 1");
    }
    let dt_ms = 1000.0 / fps as f32;

    let mut selector = FunSelector::with_style(config.style.build()?).spring_easing(config.spring.build()?);
    selector.on_selection_changed(|upper| {
        info!(selected = if upper { "upper" } else { "lower" }, "selection changed");
    });

    writeln!(
        out,
        "{:>5} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "press", "time_ms", "upper_h", "upper_ty", "lower_h", "lower_ty"
    )?;

    for press in 1..=presses {
        selector.press();

        let mut elapsed = 0.0f32;
        write_frame(out, press, elapsed, &selector)?;
        while selector.is_animating() {
            selector.tick(dt_ms);
            elapsed = (elapsed + dt_ms).min(selector.transition_ms() as f32);
            write_frame(out, press, elapsed, &selector)?;
        }

        let slot = if selector.is_upper_selected() { "upper" } else { "lower" };
        writeln!(out, "# {slot} selected")?;
    }

    Ok(())
}

fn write_frame(out: &mut impl Write, press: u32, elapsed: f32, selector: &FunSelector) -> io::Result<()> {
    let upper = selector.upper_rect();
    let lower = selector.lower_rect();
    writeln!(
        out,
        "{:>5} {:>9.1} {:>9.3} {:>9.3} {:>9.3} {:>9.3}",
        press, elapsed, upper.height, upper.translate_y, lower.height, lower.translate_y
    )
}

/// `funsel init`
pub fn init(path: &Path) -> Result<()> {
    let target = config_target(path);
    if target.exists() {
        bail!("{} already exists", target.display());
    }

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    fs::write(&target, FunselConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    info!(path = %target.display(), "wrote default configuration");
    Ok(())
}

fn config_target(path: &Path) -> PathBuf {
    if path.is_dir() || path.extension().is_none() {
        path.join(DEFAULT_CONFIG_FILE)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_curve_covers_both_ends() {
        let spring = SpringInterpolator::default();
        let samples = sample_curve(&spring, 4);

        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].t, 0.0);
        assert_eq!(samples[4].t, 1.0);
        assert!(samples[0].value.abs() < 1e-12);
        assert!((samples[2].value - 0.6926395313028448).abs() < 1e-12);
        assert_eq!(samples[4].value, 1.0);
    }

    #[test]
    fn test_overrides_layer_on_config() {
        let args = CurveArgs {
            stiffness: Some(12.0),
            bounce: Some(false),
            ..Default::default()
        };
        let spring = args.apply(SpringConfig::default());

        assert_eq!(spring.stiffness, 12.0);
        assert!(!spring.bounce);
        assert_eq!(spring.amplitude, 0.75);
        assert_eq!(spring.mass, 0.058);
    }

    #[test]
    fn test_invalid_override_surfaces_error() {
        let args = CurveArgs {
            samples: 10,
            mass: Some(0.0),
            ..Default::default()
        };
        assert!(curve(&FunselConfig::default(), &args).is_err());
    }

    #[test]
    fn test_toggle_rejects_zero_fps() {
        assert!(toggle(&FunselConfig::default(), 1, Some(0)).is_err());
    }

    #[test]
    fn test_simulate_single_press() {
        let mut out = Vec::new();
        simulate(&mut out, &FunselConfig::default(), 1, Some(60)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("upper_ty"));
        assert_eq!(lines.last(), Some(&"# upper selected"));

        // Header, the press frame, ~90 ticks, then the summary line
        let frames = &lines[1..lines.len() - 1];
        assert!((91..=92).contains(&frames.len()), "{} frames", frames.len());

        let last: Vec<f32> = frames[frames.len() - 1]
            .split_whitespace()
            .map(|field| field.parse().unwrap())
            .collect();
        assert_eq!(last[1], 1500.0);
        assert_eq!(last[2], 20.0);
        assert_eq!(last[3], 30.0);
        assert_eq!(last[5], -30.0);
    }

    #[test]
    fn test_init_writes_once() {
        let dir = std::env::temp_dir().join(format!("funsel-init-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        init(&dir).unwrap();
        let written = fs::read_to_string(dir.join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(FunselConfig::from_toml(&written).unwrap(), FunselConfig::default());

        // Never overwrite an existing file
        assert!(init(&dir).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
