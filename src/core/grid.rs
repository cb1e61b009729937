use crate::core::models::{BaseKind, Cell, Occupant, Position};
use crate::error::{FormatError, ParseError};

/// Row-major grid of two-layer cells. Rows keep the length they had in the
/// source text, so the grid may be ragged; bounds checks are per row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MapGrid {
    rows: Vec<Vec<Cell>>,
}

impl MapGrid {
    /// Parses a map text into a grid plus the player's starting position.
    ///
    /// Symbols: `' '` floor, `W` wall, `B` box, `P` player, `G` goal. Any
    /// other character fails with [`ParseError::UnknownSymbol`]; nothing is
    /// skipped or guessed. A map with zero or more than one `P` fails too.
    pub fn parse(s: &str) -> Result<(MapGrid, Position), ParseError> {
        let mut rows = Vec::new();
        let mut player: Option<Position> = None;

        for (y, line) in s.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    ' ' => Cell {
                        base: BaseKind::Floor,
                        occupant: None,
                    },
                    'W' => Cell {
                        base: BaseKind::Floor,
                        occupant: Some(Occupant::Wall),
                    },
                    'B' => Cell {
                        base: BaseKind::Floor,
                        occupant: Some(Occupant::Box),
                    },
                    'P' => {
                        let position = Position {
                            x: x as i32,
                            y: y as i32,
                        };
                        if player.replace(position).is_some() {
                            return Err(ParseError::MultiplePlayers);
                        }
                        Cell {
                            base: BaseKind::Floor,
                            occupant: Some(Occupant::Player),
                        }
                    }
                    'G' => Cell {
                        base: BaseKind::Goal,
                        occupant: None,
                    },
                    other => {
                        return Err(ParseError::UnknownSymbol {
                            symbol: other,
                            row: y,
                            column: x,
                        });
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }

        let player = player.ok_or(ParseError::MissingPlayer)?;
        Ok((MapGrid { rows }, player))
    }

    /// Inverse of [`MapGrid::parse`]. Only the five combinations the parser
    /// produces have a symbol; anything else (a box or player sitting on a
    /// goal) is unrepresentable and fails fast. Only pristine template grids
    /// are ever persisted, so hitting that error means a logic bug upstream.
    pub fn format(&self) -> Result<String, FormatError> {
        let mut lines = Vec::with_capacity(self.rows.len());
        for (y, row) in self.rows.iter().enumerate() {
            let mut line = String::with_capacity(row.len());
            for (x, cell) in row.iter().enumerate() {
                let symbol = match (cell.base, cell.occupant) {
                    (BaseKind::Floor, None) => ' ',
                    (BaseKind::Floor, Some(Occupant::Wall)) => 'W',
                    (BaseKind::Floor, Some(Occupant::Box)) => 'B',
                    (BaseKind::Floor, Some(Occupant::Player)) => 'P',
                    (BaseKind::Goal, None) => 'G',
                    _ => {
                        return Err(FormatError::Unrepresentable {
                            x: x as i32,
                            y: y as i32,
                        });
                    }
                };
                line.push(symbol);
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    pub fn contains(&self, position: Position) -> bool {
        position.y >= 0
            && (position.y as usize) < self.rows.len()
            && position.x >= 0
            && (position.x as usize) < self.rows[position.y as usize].len()
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        if !self.contains(position) {
            return None;
        }
        Some(&self.rows[position.y as usize][position.x as usize])
    }

    pub fn occupant(&self, position: Position) -> Option<Occupant> {
        self.cell(position).and_then(|cell| cell.occupant)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Moves the occupant of `from` into `to`. Both positions must be in
    /// bounds and `to` must be empty; the move resolver checks both before
    /// calling.
    pub(crate) fn move_occupant(&mut self, from: Position, to: Position) {
        let occupant = self.rows[from.y as usize][from.x as usize].occupant.take();
        let dest = &mut self.rows[to.y as usize][to.x as usize];
        debug_assert!(dest.occupant.is_none(), "destination cell must be empty");
        dest.occupant = occupant;
    }
}
