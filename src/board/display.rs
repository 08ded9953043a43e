use std::fmt;

use super::{Board, Square, COLS, ROWS};

impl fmt::Display for Board {
    /// Text grid, uppercase for White and lowercase for Black, with row
    /// labels on the left and column labels (mod 10) underneath.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            write!(f, "{row:>2} ")?;
            for col in 0..COLS {
                let ch = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |piece| piece.to_char());
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..COLS {
            write!(f, " {}", col % 10)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;

    #[test]
    fn test_initial_board_rendering() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], " 0  r b q b r n b r q n k b q r b n r b q r");
        assert_eq!(lines[3], " 3  p p p p p p p p p p p p p p p p p p p p");
        assert_eq!(lines[7], " 7  . . . . . . . . . . . . . . . . . . . .");
        assert_eq!(lines[14], "14  R B Q B R N B R Q N K B Q R B N R B Q R");
    }

    #[test]
    fn test_empty_board_rendering() {
        let text = Board::empty().to_string();
        assert!(!text.contains(|c: char| c.is_ascii_alphabetic()));
    }
}
