use super::{Score, ScanMode, Territory};
use rayon::prelude::*;

/// Grid owns the territory of every cell on the playfield.
/// Mutated in place by the collision resolver, scanned once per frame for the score.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: u32,
    cells: Vec<Territory>,
}

impl Grid {
    /// Create a grid where every cell belongs to one territory
    pub fn filled(width: usize, height: usize, cell_size: u32, territory: Territory) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        Self {
            width,
            height,
            cell_size,
            cells: vec![territory; width * height],
        }
    }

    /// Left half day, right half night (columns >= width / 2 are night)
    pub fn split(width: usize, height: usize, cell_size: u32) -> Self {
        let mut grid = Self::filled(width, height, cell_size, Territory::Day);
        for row in 0..height {
            for col in width / 2..width {
                grid.set_color(col, row, Territory::Night);
            }
        }
        grid
    }

    /// Grid sized to cover a playfield in device pixels, floored to whole cells
    pub fn for_playfield(playfield_width: u32, playfield_height: u32, cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        Self::split(
            (playfield_width / cell_size) as usize,
            (playfield_height / cell_size) as usize,
            cell_size,
        )
    }

    /// Grid dimensions in cells
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    const fn get_index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    fn checked_index(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.width && row < self.height,
            "cell ({col}, {row}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.get_index(col, row)
    }

    /// Territory of a cell. Out-of-range coordinates are a caller bug and panic.
    pub fn color_at(&self, col: usize, row: usize) -> Territory {
        self.cells[self.checked_index(col, row)]
    }

    /// Unconditional overwrite. Out-of-range coordinates panic.
    pub fn set_color(&mut self, col: usize, row: usize, territory: Territory) {
        let idx = self.checked_index(col, row);
        self.cells[idx] = territory;
    }

    /// Map a device-pixel point to the cell containing it.
    /// Division truncates toward zero, so points just left of or above the
    /// origin still land in column/row 0. Returns None outside the grid.
    pub fn cell_at_point(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let size = self.cell_size as f32;
        let col = (x / size) as i64;
        let row = (y / size) as i64;

        (col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height)
            .then_some((col as usize, row as usize))
    }

    /// Count cells per territory with a single serial walk
    pub fn score_by_color(&self) -> Score {
        self.cells.iter().fold(Score::default(), |mut score, &cell| {
            score.add(cell);
            score
        })
    }

    /// Same counts as `score_by_color`, split across the rayon pool
    pub fn score_by_color_parallel(&self) -> Score {
        self.cells
            .par_iter()
            .fold(Score::default, |mut score, &cell| {
                score.add(cell);
                score
            })
            .reduce(Score::default, Score::merge)
    }

    pub fn score(&self, mode: ScanMode) -> Score {
        match mode {
            ScanMode::Serial => self.score_by_color(),
            ScanMode::Parallel => self.score_by_color_parallel(),
        }
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Territory)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_seeds_halves() {
        let grid = Grid::split(4, 3, 10);
        assert_eq!(grid.color_at(0, 0), Territory::Day);
        assert_eq!(grid.color_at(1, 2), Territory::Day);
        assert_eq!(grid.color_at(2, 0), Territory::Night);
        assert_eq!(grid.color_at(3, 2), Territory::Night);
        assert_eq!(grid.score_by_color(), Score::new(6, 6));
    }

    #[test]
    fn test_odd_width_gives_night_the_middle_column() {
        let grid = Grid::split(5, 1, 10);
        assert_eq!(grid.score_by_color(), Score::new(2, 3));
    }

    #[test]
    fn test_for_playfield_floors_dimensions() {
        let grid = Grid::for_playfield(610, 599, 25);
        assert_eq!(grid.dimensions(), (24, 23));
        assert_eq!(grid.cell_size(), 25);
    }

    #[test]
    fn test_set_color_overwrites() {
        let mut grid = Grid::split(4, 4, 10);
        grid.set_color(3, 3, Territory::Day);
        assert_eq!(grid.color_at(3, 3), Territory::Day);
        grid.set_color(3, 3, Territory::Day);
        assert_eq!(grid.color_at(3, 3), Territory::Day);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_color_at_out_of_range_panics() {
        let grid = Grid::split(4, 4, 10);
        grid.color_at(4, 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_color_out_of_range_panics() {
        let mut grid = Grid::split(4, 4, 10);
        grid.set_color(0, 4, Territory::Night);
    }

    #[test]
    fn test_cell_at_point() {
        let grid = Grid::split(4, 4, 10);
        assert_eq!(grid.cell_at_point(0.0, 0.0), Some((0, 0)));
        assert_eq!(grid.cell_at_point(19.9, 35.0), Some((1, 3)));
        assert_eq!(grid.cell_at_point(40.0, 5.0), None);
        assert_eq!(grid.cell_at_point(5.0, 41.0), None);
        assert_eq!(grid.cell_at_point(-10.5, 5.0), None);
    }

    #[test]
    fn test_cell_at_point_truncates_toward_zero() {
        let grid = Grid::split(4, 4, 10);
        // -0.4 truncates to column 0, not -1
        assert_eq!(grid.cell_at_point(-4.0, -4.0), Some((0, 0)));
    }

    #[test]
    fn test_parallel_score_matches_serial() {
        let mut grid = Grid::split(37, 23, 4);
        for i in 0..23 {
            grid.set_color(i, i, Territory::Night);
            grid.set_color(36 - i, i, Territory::Day);
        }
        assert_eq!(grid.score_by_color(), grid.score_by_color_parallel());
        assert_eq!(grid.score(ScanMode::Parallel).total(), grid.cell_count());
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let grid = Grid::split(2, 2, 10);
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, Territory::Day),
                (1, 0, Territory::Night),
                (0, 1, Territory::Day),
                (1, 1, Territory::Night),
            ]
        );
    }

    #[test]
    fn test_empty_grid_scores_zero() {
        let grid = Grid::split(0, 0, 10);
        assert_eq!(grid.score_by_color().total(), 0);
        assert_eq!(grid.iter_cells().count(), 0);
    }
}
