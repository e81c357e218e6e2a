//! Command-line configuration for the launcher.
//!
//! Every flag has a default, so running with no arguments reproduces the
//! stock launch: a 160x44 grid with the cube at half-extent 10, shifted right
//! by its own width.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::types::{
    RenderConfig, DEFAULT_DISTANCE, DEFAULT_HEIGHT, DEFAULT_INCREMENT, DEFAULT_K1, DEFAULT_WIDTH,
    LAUNCH_CUBE_WIDTH, MAX_CUBE_WIDTH, MIN_CUBE_WIDTH, TICK_MS,
};

/// Rotating ASCII cube rendered in the terminal.
///
/// Keys: h/l move left/right, k/j move up/down, +/- resize, q quits.
#[derive(Parser, Debug, Clone)]
#[command(name = "tui-cube", version)]
pub struct Args {
    /// Screen width in columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u16,

    /// Screen height in rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u16,

    /// Initial cube half-extent
    #[arg(long, default_value_t = LAUNCH_CUBE_WIDTH)]
    pub cube_width: f32,

    /// Camera distance from the cube center
    #[arg(long, default_value_t = DEFAULT_DISTANCE)]
    pub distance: f32,

    /// Perspective scale constant
    #[arg(long, default_value_t = DEFAULT_K1)]
    pub k1: f32,

    /// Face sample grid step
    #[arg(long, default_value_t = DEFAULT_INCREMENT)]
    pub step: f32,

    /// Background fill character
    #[arg(long, default_value_t = ' ')]
    pub background: char,

    /// Initial horizontal offset in columns
    #[arg(long, default_value_t = LAUNCH_CUBE_WIDTH, allow_negative_numbers = true)]
    pub h_offset: f32,

    /// Initial vertical offset in rows
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub v_offset: f32,

    /// Smallest cube half-extent reachable with `-`
    #[arg(long, default_value_t = MIN_CUBE_WIDTH)]
    pub min_cube_width: f32,

    /// Largest cube half-extent reachable with `+`
    #[arg(long, default_value_t = MAX_CUBE_WIDTH)]
    pub max_cube_width: f32,

    /// Frame period in milliseconds
    #[arg(long, default_value_t = TICK_MS)]
    pub frame_ms: u32,

    /// Write logs to this file (filtered by RUST_LOG, default `info`)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Renderer configuration described by these flags.
    pub fn render_config(&self) -> Result<RenderConfig> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            bail!("--step must be a positive number, got {}", self.step);
        }
        for (flag, value) in [
            ("--cube-width", self.cube_width),
            ("--distance", self.distance),
            ("--k1", self.k1),
            ("--h-offset", self.h_offset),
            ("--v-offset", self.v_offset),
            ("--min-cube-width", self.min_cube_width),
            ("--max-cube-width", self.max_cube_width),
        ] {
            if !value.is_finite() {
                bail!("{flag} must be a finite number, got {value}");
            }
        }
        if -self.max_cube_width + self.step == -self.max_cube_width {
            bail!(
                "--step {} is too small for --max-cube-width {}",
                self.step,
                self.max_cube_width
            );
        }
        if self.min_cube_width > self.max_cube_width {
            bail!(
                "--min-cube-width ({}) exceeds --max-cube-width ({})",
                self.min_cube_width,
                self.max_cube_width
            );
        }
        if self.width == 0 || self.height == 0 {
            bail!("screen must be at least 1x1, got {}x{}", self.width, self.height);
        }

        Ok(RenderConfig {
            width: self.width,
            height: self.height,
            cube_width: self.cube_width,
            distance: self.distance,
            k1: self.k1,
            step: self.step,
            background: self.background,
            h_offset: self.h_offset,
            v_offset: self.v_offset,
            min_cube_width: self.min_cube_width,
            max_cube_width: self.max_cube_width,
        })
    }
}
