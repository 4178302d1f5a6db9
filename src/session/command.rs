//! Commands understood by the text session, one per line.

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    /// Click on the cell `(row, col)`. The coordinates are checked by the game,
    /// not by the parser.
    Click { row: u8, col: u8 },
    Moves,
    Board,
    Status,
    NewGame,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();

        let Some(&command) = parts.first() else {
            return Self::Empty;
        };

        match (command, parts.len()) {
            ("click", 3) => match (parts[1].parse(), parts[2].parse()) {
                (Ok(row), Ok(col)) => Self::Click { row, col },
                _ => Self::Unknown(input.trim().to_string()),
            },
            ("moves", 1) => Self::Moves,
            ("board" | "d", 1) => Self::Board,
            ("status", 1) => Self::Status,
            ("new", 1) => Self::NewGame,
            ("quit", 1) => Self::Quit,
            _ => Self::Unknown(input.trim().to_string()),
        }
    }
}
