//! Error codes for the Stratego backend.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in rejection responses.

use core::fmt;

use crate::errors::domain::ValidationKind;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Caller is neither host nor guest
    NotAPlayer,

    // Request Validation
    /// Malformed payload
    BadRequest,
    /// Invalid game ID provided
    InvalidGameId,
    /// Invalid player ID provided
    InvalidPlayerId,
    /// Cell index off the board
    OutOfBounds,
    /// No piece on the source cell
    NoPiece,
    /// Bomb or Flag asked to move
    ImmovablePiece,
    /// Piece belongs to the other side
    NotOwner,
    /// Source and destination are the same cell
    MustMove,
    /// Diagonal move
    IllegalDiagonal,
    /// Non-scout moving more than one cell
    TooFar,
    /// Path crosses a lake
    BlockedByWater,
    /// Path crosses another piece
    BlockedByPiece,
    /// Destination holds own piece
    DestinationOccupiedBySelf,
    /// Setup is missing a home cell
    MissingPiece,
    /// Setup uses a non-placeable rank
    InvalidRank,
    /// Setup counts do not match the army
    InvalidArmyComposition,
    /// Rank name did not parse
    ParseRank,
    /// Out of turn
    NotYourTurn,
    /// Game still waiting for a guest
    GameNotStarted,
    /// Game has ended
    GameAlreadyOver,
    /// Phase mismatch
    PhaseMismatch,
    /// Host tried to join their own game
    AlreadyJoined,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Collaborator Errors
    /// Persistence failure
    StorageError,
    /// Notification failure
    DeliveryError,
    /// Data corruption detected
    DataCorruption,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Authentication & Authorization
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotAPlayer => "NOT_A_PLAYER",

            // Request Validation
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidPlayerId => "INVALID_PLAYER_ID",
            Self::OutOfBounds => "OUT_OF_BOUNDS",
            Self::NoPiece => "NO_PIECE",
            Self::ImmovablePiece => "IMMOVABLE_PIECE",
            Self::NotOwner => "NOT_OWNER",
            Self::MustMove => "MUST_MOVE",
            Self::IllegalDiagonal => "ILLEGAL_DIAGONAL",
            Self::TooFar => "TOO_FAR",
            Self::BlockedByWater => "BLOCKED_BY_WATER",
            Self::BlockedByPiece => "BLOCKED_BY_PIECE",
            Self::DestinationOccupiedBySelf => "DESTINATION_OCCUPIED_BY_SELF",
            Self::MissingPiece => "MISSING_PIECE",
            Self::InvalidRank => "INVALID_RANK",
            Self::InvalidArmyComposition => "INVALID_ARMY_COMPOSITION",
            Self::ParseRank => "PARSE_RANK",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::GameAlreadyOver => "GAME_ALREADY_OVER",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::AlreadyJoined => "ALREADY_JOINED",
            Self::ValidationError => "VALIDATION_ERROR",

            // Resource Not Found
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Conflicts
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            // Collaborator Errors
            Self::StorageError => "STORAGE_ERROR",
            Self::DeliveryError => "DELIVERY_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::OutOfBounds => Self::OutOfBounds,
            ValidationKind::NoPiece => Self::NoPiece,
            ValidationKind::ImmovablePiece => Self::ImmovablePiece,
            ValidationKind::NotOwner => Self::NotOwner,
            ValidationKind::MustMove => Self::MustMove,
            ValidationKind::IllegalDiagonal => Self::IllegalDiagonal,
            ValidationKind::TooFar => Self::TooFar,
            ValidationKind::BlockedByWater => Self::BlockedByWater,
            ValidationKind::BlockedByPiece => Self::BlockedByPiece,
            ValidationKind::DestinationOccupiedBySelf => Self::DestinationOccupiedBySelf,
            ValidationKind::MissingPiece(_) => Self::MissingPiece,
            ValidationKind::InvalidRank(_) => Self::InvalidRank,
            ValidationKind::InvalidArmyComposition(_) => Self::InvalidArmyComposition,
            ValidationKind::ParseRank => Self::ParseRank,
            ValidationKind::NotYourTurn => Self::NotYourTurn,
            ValidationKind::NotAPlayer => Self::NotAPlayer,
            ValidationKind::GameNotStarted => Self::GameNotStarted,
            ValidationKind::GameAlreadyOver => Self::GameAlreadyOver,
            ValidationKind::PhaseMismatch => Self::PhaseMismatch,
            ValidationKind::AlreadyJoined => Self::AlreadyJoined,
            ValidationKind::InvalidPlayerId => Self::InvalidPlayerId,
            ValidationKind::InvalidGameId => Self::InvalidGameId,
            ValidationKind::MalformedPayload => Self::BadRequest,
            ValidationKind::Other(_) => Self::ValidationError,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
