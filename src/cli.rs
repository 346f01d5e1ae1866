use crate::engine::config::{Config, SourceConfig};
use clap::Parser;
use std::path::PathBuf;

/// Side-by-side, word-by-word replay of two text generators
#[derive(Parser, Debug, Clone)]
#[command(name = "tandem", version)]
#[command(about = "Replays two generators' output side by side at their relative speeds")]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command producing the left pane's text, split on whitespace
    #[arg(long)]
    pub left_cmd: Option<String>,

    /// Previously captured text for the left pane
    #[arg(long)]
    pub left_file: Option<PathBuf>,

    /// Seconds the left text took to generate (used with --left-file)
    #[arg(long)]
    pub left_elapsed: Option<f64>,

    #[arg(long)]
    pub left_title: Option<String>,

    /// Command producing the right pane's text, split on whitespace
    #[arg(long)]
    pub right_cmd: Option<String>,

    /// Previously captured text for the right pane
    #[arg(long)]
    pub right_file: Option<PathBuf>,

    /// Seconds the right text took to generate (used with --right-file)
    #[arg(long)]
    pub right_elapsed: Option<f64>,

    #[arg(long)]
    pub right_title: Option<String>,

    /// Seconds of real time shown at 1x
    #[arg(long)]
    pub normal_duration: Option<f64>,

    /// Multiplier after the normal phase
    #[arg(long)]
    pub speedup_factor: Option<f64>,

    /// Seconds to hold the finished frame
    #[arg(long)]
    pub pause_duration: Option<f64>,

    /// Maximum characters per line
    #[arg(long)]
    pub wrap_width: Option<usize>,

    #[arg(long)]
    pub frame_interval_ms: Option<u64>,

    /// Characters requested from each generator
    #[arg(long)]
    pub target_chars: Option<usize>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

struct SideArgs<'a> {
    cmd: Option<&'a String>,
    file: Option<&'a PathBuf>,
    elapsed: Option<f64>,
    title: Option<&'a String>,
}

impl Args {
    /// Layers command-line values over `config`.
    pub fn apply(&self, config: &mut Config) {
        let animation = &mut config.animation;
        if let Some(value) = self.normal_duration {
            animation.normal_duration = value;
        }
        if let Some(value) = self.speedup_factor {
            animation.speedup_factor = value;
        }
        if let Some(value) = self.pause_duration {
            animation.pause_duration = value;
        }
        if let Some(value) = self.wrap_width {
            animation.wrap_width = value;
        }
        if let Some(value) = self.frame_interval_ms {
            animation.frame_interval_ms = value;
        }
        if let Some(value) = self.target_chars {
            config.target_chars = value;
        }

        apply_side(
            &mut config.left,
            SideArgs {
                cmd: self.left_cmd.as_ref(),
                file: self.left_file.as_ref(),
                elapsed: self.left_elapsed,
                title: self.left_title.as_ref(),
            },
        );
        apply_side(
            &mut config.right,
            SideArgs {
                cmd: self.right_cmd.as_ref(),
                file: self.right_file.as_ref(),
                elapsed: self.right_elapsed,
                title: self.right_title.as_ref(),
            },
        );
    }
}

fn apply_side(source: &mut SourceConfig, side: SideArgs<'_>) {
    if let Some(title) = side.title {
        source.title = Some(title.clone());
    }
    if let Some(elapsed) = side.elapsed {
        source.elapsed = Some(elapsed);
    }
    if let Some(file) = side.file {
        source.file = Some(file.clone());
        // A file given here replaces a command from the config file
        if side.cmd.is_none() {
            source.command.clear();
        }
    }
    if let Some(cmd) = side.cmd {
        source.command = cmd.split_whitespace().map(str::to_string).collect();
    }
}
