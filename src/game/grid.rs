//! Board, cell and coordinate types.

use serde::Serialize;

/// Player identifier. `0` marks an unclaimed cell.
pub type PlayerId = u8;

/// Owner value of a cell that belongs to nobody.
pub const UNCLAIMED: PlayerId = 0;

/// A coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    /// X coordinate (outer iteration axis, one rendered line per x).
    pub x: u16,
    /// Y coordinate (inner iteration axis).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate in `direction`, if it lies on a board of
    /// side `size`.
    #[must_use]
    #[inline]
    pub fn step(self, direction: Direction, size: u16) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < size && y < size).then_some(Coord::new(x, y))
    }

    /// Manhattan distance to another coordinate.
    #[must_use]
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }
}

/// Direction a cell can send its size in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Stay in place.
    None,
    /// Towards `y - 1`.
    Up,
    /// Towards `x + 1`.
    Right,
    /// Towards `y + 1`.
    Down,
    /// Towards `x - 1`.
    Left,
}

impl Direction {
    /// Candidate move directions in tie-break order.
    pub const MOVES: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Unit offset `(dx, dy)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Ownership and strength at one board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Cell {
    /// Owning player, or [`UNCLAIMED`].
    pub owner: PlayerId,
    /// Strength. Grows by one each tick, spent when moving.
    pub size: i32,
}

impl Cell {
    /// Create a cell.
    #[must_use]
    pub const fn new(owner: PlayerId, size: i32) -> Self {
        Self { owner, size }
    }

    /// An unclaimed cell of size zero.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(UNCLAIMED, 0)
    }

    /// Whether nobody owns this cell.
    #[must_use]
    pub const fn is_unclaimed(self) -> bool {
        self.owner == UNCLAIMED
    }

    /// Whether this cell may choose a move on behalf of `player`.
    ///
    /// Only claimed cells above size one act.
    #[must_use]
    pub const fn can_act_for(self, player: PlayerId) -> bool {
        player != UNCLAIMED && self.owner == player && self.size > 1
    }

    /// The cell after one growth step.
    ///
    /// Negative sizes are a sentinel and reset to zero instead of growing.
    #[must_use]
    pub const fn grown(self) -> Self {
        let size = if self.size >= 0 { self.size + 1 } else { 0 };
        Self::new(self.owner, size)
    }
}

/// The square game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Side length.
    size: u16,
    /// Cells stored x-major: `index = x * size + y`.
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of unclaimed, zero-size cells.
    ///
    /// Returns `None` if `size` is zero.
    #[must_use]
    pub fn new(size: u16) -> Option<Self> {
        if size == 0 {
            return None;
        }
        let len = usize::from(size) * usize::from(size);
        Some(Self {
            size,
            cells: vec![Cell::empty(); len],
        })
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Raw cells in iteration order (x outer, y inner).
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check if a coordinate is on the board.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| usize::from(coord.x) * usize::from(self.size) + usize::from(coord.y))
    }

    /// The cell at `coord`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Mutable access to the cell at `coord`.
    #[must_use]
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index(coord).map(|idx| &mut self.cells[idx])
    }

    /// Overwrite the cell at `coord`.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        if let Some(slot) = self.get_mut(coord) {
            *slot = cell;
            true
        } else {
            false
        }
    }

    /// Iterate over coordinates and cells, x outer and y inner.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = usize::from(self.size);
        self.cells.iter().enumerate().map(move |(idx, cell)| {
            #[allow(clippy::cast_possible_truncation)]
            let coord = Coord::new((idx / size) as u16, (idx % size) as u16);
            (coord, *cell)
        })
    }

    /// Iterate over mutable cells in storage order.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Number of cells owned by `player`.
    #[must_use]
    pub fn count_owned(&self, player: PlayerId) -> usize {
        self.cells.iter().filter(|cell| cell.owner == player).count()
    }

    /// Sum of the sizes of cells owned by `player`.
    #[must_use]
    pub fn total_size(&self, player: PlayerId) -> i64 {
        self.cells
            .iter()
            .filter(|cell| cell.owner == player)
            .map(|cell| i64::from(cell.size))
            .sum()
    }
}

/// Directions from `coord` whose target lies on the board, in
/// [`Direction::MOVES`] order.
#[must_use]
pub fn legal_directions(board: &Board, coord: Coord) -> Vec<Direction> {
    Direction::MOVES
        .into_iter()
        .filter(|&dir| coord.step(dir, board.size()).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::None.delta(), (0, 0));
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
    }

    #[test]
    fn test_coord_step_bounds() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.step(Direction::Left, 10), None);
        assert_eq!(origin.step(Direction::Up, 10), None);
        assert_eq!(origin.step(Direction::Right, 10), Some(Coord::new(1, 0)));
        assert_eq!(origin.step(Direction::Down, 10), Some(Coord::new(0, 1)));

        let corner = Coord::new(9, 9);
        assert_eq!(corner.step(Direction::Right, 10), None);
        assert_eq!(corner.step(Direction::Down, 10), None);
        assert_eq!(corner.step(Direction::None, 10), Some(corner));
    }

    #[test]
    fn test_legal_directions_interior() {
        let board = Board::new(10).unwrap();
        assert_eq!(
            legal_directions(&board, Coord::new(5, 5)),
            vec![Direction::Left, Direction::Up, Direction::Right, Direction::Down]
        );
    }

    #[test]
    fn test_legal_directions_edges() {
        let board = Board::new(10).unwrap();
        assert_eq!(
            legal_directions(&board, Coord::new(0, 5)),
            vec![Direction::Up, Direction::Right, Direction::Down]
        );
        assert_eq!(
            legal_directions(&board, Coord::new(9, 0)),
            vec![Direction::Left, Direction::Down]
        );
    }

    #[test]
    fn test_legal_directions_single_cell_board() {
        let board = Board::new(1).unwrap();
        assert!(legal_directions(&board, Coord::new(0, 0)).is_empty());
    }

    #[test]
    fn test_board_zero_size() {
        assert!(Board::new(0).is_none());
    }

    #[test]
    fn test_board_get_set() {
        let mut board = Board::new(4).unwrap();
        assert_eq!(board.get(Coord::new(2, 3)), Some(Cell::empty()));
        assert!(board.set(Coord::new(2, 3), Cell::new(1, 7)));
        assert_eq!(board.get(Coord::new(2, 3)), Some(Cell::new(1, 7)));
        assert!(!board.set(Coord::new(4, 0), Cell::new(1, 7)));
        assert_eq!(board.get(Coord::new(0, 4)), None);
    }

    #[test]
    fn test_board_iteration_order() {
        let board = Board::new(3).unwrap();
        let coords: Vec<_> = board.iter().map(|(coord, _)| coord).take(4).collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_eligibility() {
        assert!(Cell::new(1, 2).can_act_for(1));
        assert!(!Cell::new(1, 1).can_act_for(1));
        assert!(!Cell::new(1, 0).can_act_for(1));
        assert!(!Cell::new(2, 9).can_act_for(1));
        assert!(!Cell::new(0, 9).can_act_for(0));
    }

    #[test]
    fn test_growth() {
        assert_eq!(Cell::new(1, 0).grown(), Cell::new(1, 1));
        assert_eq!(Cell::new(0, 4).grown(), Cell::new(0, 5));
        assert_eq!(Cell::new(2, -1).grown(), Cell::new(2, 0));
    }

    #[test]
    fn test_owner_totals() {
        let mut board = Board::new(5).unwrap();
        board.set(Coord::new(0, 0), Cell::new(1, 3));
        board.set(Coord::new(1, 0), Cell::new(1, 4));
        board.set(Coord::new(4, 4), Cell::new(2, 9));
        assert_eq!(board.count_owned(1), 2);
        assert_eq!(board.total_size(1), 7);
        assert_eq!(board.count_owned(2), 1);
        assert_eq!(board.count_owned(0), 22);
    }
}
