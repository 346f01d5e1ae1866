/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Quit,
    /// Drop the current cycle and start revealing from the beginning
    Restart,
    None,
}
