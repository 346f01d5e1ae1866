use super::{Generation, Generator, GeneratorError};
use std::path::PathBuf;
use tracing::info;

/// Replays text captured from an earlier run, with its measured elapsed time.
///
/// Purpose: lets a pane show output from a generator that cannot run here
/// (a model that needs weights or a GPU) at the pace it originally ran.
#[derive(Debug, Clone)]
pub struct RecordedGenerator {
    path: PathBuf,
    elapsed: f64,
}

impl RecordedGenerator {
    pub fn new(path: PathBuf, elapsed: f64) -> Self {
        Self { path, elapsed }
    }
}

impl Generator for RecordedGenerator {
    fn generate(&mut self, target_chars: usize) -> Result<Generation, GeneratorError> {
        info!(path = %self.path.display(), target_chars, "loading recorded output");
        let text = std::fs::read_to_string(&self.path).map_err(|source| GeneratorError::Read {
            path: self.path.clone(),
            source,
        })?;

        Ok(Generation {
            text: text.trim().to_string(),
            elapsed: self.elapsed,
            diagnostics: Vec::new(),
        })
    }
}
