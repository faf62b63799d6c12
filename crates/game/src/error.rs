use blokus_core::Player;

/// Rejected game commands. A returned error always leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid placement of {player} piece {piece_index} at ({row},{col})")]
    InvalidPlacement {
        player: Player,
        piece_index: usize,
        row: usize,
        col: usize,
    },

    #[error("no moves to undo")]
    NothingToUndo,

    #[error("game is over, {winner} won")]
    GameOver { winner: Player },

    #[error("{player} has no piece {index} (pool holds {len})")]
    PieceIndexOutOfRange {
        player: Player,
        index: usize,
        len: usize,
    },

    #[error("{player} piece {index} has already been used")]
    PieceUnavailable { player: Player, index: usize },

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: Player },

    #[error("no piece selected")]
    NoSelection,

    #[error("waiting for {player}'s automatic move")]
    AiTurnPending { player: Player },

    #[error("no automatic move is scheduled")]
    NoPendingAiTurn,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
