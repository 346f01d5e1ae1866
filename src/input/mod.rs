use crate::engine::config::SourceConfig;
use crate::engine::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("empty command")]
    EmptyCommand,

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("failed to read recorded output {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("inference failed: {0}")]
    Inference(String),
}

/// Finished output of one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub text: String,
    /// Seconds spent generating; `0.0` when the source did not report it.
    pub elapsed: f64,
    /// Lines the generator printed after its text (timing, per-level stats).
    pub diagnostics: Vec<String>,
}

/// Produces one stream's text and timing, once, before the animation starts.
pub trait Generator {
    fn generate(&mut self, target_chars: usize) -> Result<Generation, GeneratorError>;
}

/// Builds the generator described by one pane's source section.
///
/// A command wins over a recorded file when both are given.
pub fn generator_for(
    side: &'static str,
    source: &SourceConfig,
) -> Result<Box<dyn Generator>, ConfigError> {
    if let Some((program, args)) = source.command.split_first() {
        let mut generator = CommandGenerator::new(program.clone(), args.to_vec());
        if let Some(dir) = &source.working_dir {
            generator = generator.current_dir(dir.clone());
        }
        return Ok(Box::new(generator));
    }

    if let Some(path) = &source.file {
        return Ok(Box::new(RecordedGenerator::new(
            path.clone(),
            source.elapsed.unwrap_or(0.0),
        )));
    }

    Err(ConfigError::MissingSource(side))
}

pub mod command;
pub mod recorded;
pub mod timed;

pub use command::{parse_generation_output, CommandGenerator, ParsedOutput};
pub use recorded::RecordedGenerator;
pub use timed::TimedGenerator;
