use crate::app::mode::AppMode;
use crate::engine::{Phase, STREAM_COUNT};

/// One pane's share of a frame
#[derive(Debug, Clone, PartialEq)]
pub struct PaneState {
    pub title: String,
    /// Seconds the stream's generator took
    pub elapsed: f64,
    /// Revealed text, already wrapped to the configured width
    pub text: String,
    pub revealed: usize,
    pub total: usize,
}

impl PaneState {
    /// Title line shown on the pane border
    pub fn heading(&self) -> String {
        format!("{} (Generated in {:.2}s)", self.title, self.elapsed)
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }
}

/// Everything the UI needs to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub panes: [PaneState; STREAM_COUNT],
    /// Label for the speed badge; `None` hides it
    pub badge: Option<String>,
    pub phase: Phase,
    pub finished: bool,
    pub cycle: u64,
}
