//! Errors raised by the board-state collaborator.

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the cell is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),
}

impl std::error::Error for MoveError {}

/// Error that can occur when parsing a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseGameError {
    /// The snapshot does not hold exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// The snapshot contains a symbol other than `X`, `O`, `.` or space.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for ParseGameError {}
