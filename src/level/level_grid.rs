// src/level/level_grid.rs

use crate::board::Coordinate;

/// Rows of level symbols, top of the file first.
///
/// Rows are split on `'\n'` only, so text ending in a newline has a final
/// empty row, and that row still counts when mapping rows to board
/// coordinates. A `'\r'` ending a row is dropped. Rows may have different
/// lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGrid {
    rows: Vec<Vec<char>>,
}

impl LevelGrid {
    pub fn parse(text: &str) -> Self {
        let rows: Vec<Vec<char>> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        LevelGrid { rows }
    }

    /// Number of rows, including empty ones.
    pub fn total_lines(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    fn row(&self, index: usize) -> Option<&[char]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Board coordinate of the symbol at `line` (from the top) and `column`.
    ///
    /// The file is read top to bottom but the board grows upwards, shifted by
    /// (-1, -2): the top row lands on `y = total_lines - 2` and the bottom
    /// row on `y = -1`.
    pub fn coordinate_of(&self, line: usize, column: usize) -> Coordinate {
        let total = self.rows.len() as i32;
        Coordinate::new(column as i32 - 1, (total - line as i32) - 2)
    }

    /// Every symbol with its board coordinate, row by row from the top.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, char)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &symbol)| (self.coordinate_of(i, j), symbol))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let grid = LevelGrid::parse("X F");
        assert_eq!(grid.total_lines(), 1);
        let cells: Vec<(Coordinate, char)> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Coordinate::new(-1, -1), 'X'),
                (Coordinate::new(0, -1), ' '),
                (Coordinate::new(1, -1), 'F'),
            ]
        );
    }

    #[test]
    fn test_top_and_bottom_rows() {
        let grid = LevelGrid::parse("aaa\nbbb\nccc\nddd");
        assert_eq!(grid.total_lines(), 4);
        assert_eq!(grid.coordinate_of(0, 0).y, 2);
        assert_eq!(grid.coordinate_of(3, 0).y, -1);
        assert_eq!(grid.coordinate_of(3, 2), Coordinate::new(1, -1));
    }

    #[test]
    fn test_trailing_newline_counts_as_row() {
        let grid = LevelGrid::parse("XX\n");
        assert_eq!(grid.total_lines(), 2);
        assert_eq!(grid.row(1), Some(&[][..]));
        assert!(grid.cells().all(|(c, _)| c.y == 0));
    }

    #[test]
    fn test_crlf_rows() {
        let grid = LevelGrid::parse("XF\r\nE\r\n");
        assert_eq!(grid.row(0), Some(&['X', 'F'][..]));
        assert_eq!(grid.row(1), Some(&['E'][..]));
        assert_eq!(grid.cells().count(), 3);
    }

    #[test]
    fn test_ragged_rows_keep_their_length() {
        let grid = LevelGrid::parse("X\nXXXX\nXX");
        let per_row: Vec<usize> = (0..3).map(|i| grid.row(i).unwrap().len()).collect();
        assert_eq!(per_row, vec![1, 4, 2]);
        assert_eq!(grid.cells().count(), 7);
    }

    #[test]
    fn test_columns_count_chars() {
        let grid = LevelGrid::parse("éX");
        let cells: Vec<(Coordinate, char)> = grid.cells().collect();
        assert_eq!(cells[1], (Coordinate::new(0, -1), 'X'));
    }
}
