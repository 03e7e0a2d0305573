//! Application state types.

/// Application mode representing the current UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    /// Help overlay is open; only closing keys are handled.
    Help,
    Quit,
}
