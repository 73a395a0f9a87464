//! Game state types.

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for players to join.
    Setup,
    /// Turns are being played.
    InProgress,
    /// One player remains.
    Finished,
}
