use crate::ScreenSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Pause a running simulation, or resume a paused one
    TogglePause,

    /// Advance the world by a single generation
    Step,

    /// Kill every cell
    Clear,

    /// Flip the cell under terminal character `(col, row)`
    ToggleCell { col: ScreenSize, row: ScreenSize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The terminal changed size
    Resize { cols: ScreenSize, rows: ScreenSize },

    /// Exit the application
    Exit,
}
