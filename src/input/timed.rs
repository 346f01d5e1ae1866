use super::{Generation, Generator, GeneratorError};
use std::time::Instant;
use tracing::info;

/// Wraps an in-process generation loop and measures its wall-clock time.
///
/// The closure receives the requested character count and returns the
/// generated text.
pub struct TimedGenerator<F> {
    label: String,
    generate: F,
}

impl<F> TimedGenerator<F>
where
    F: FnMut(usize) -> Result<String, GeneratorError>,
{
    pub fn new(label: impl Into<String>, generate: F) -> Self {
        Self {
            label: label.into(),
            generate,
        }
    }
}

impl<F> Generator for TimedGenerator<F>
where
    F: FnMut(usize) -> Result<String, GeneratorError>,
{
    fn generate(&mut self, target_chars: usize) -> Result<Generation, GeneratorError> {
        let start = Instant::now();
        let text = (self.generate)(target_chars)?;
        let elapsed = start.elapsed().as_secs_f64();
        info!(label = %self.label, elapsed, "in-process generation finished");

        Ok(Generation {
            text,
            elapsed,
            diagnostics: Vec::new(),
        })
    }
}
