use std::collections::VecDeque;

use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right))
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// One square of the board. Signed, so a head that ran off the board can
/// still be represented.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

/// Head at the front, tail at the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Cell, direction: Direction) -> Self {
        Snake { body: VecDeque::from(vec![head]), direction }
    }

    /// Builds a snake from explicit cells, head first. Falls back to a single
    /// cell at the origin if `cells` is empty, since a snake is never empty.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I, direction: Direction) -> Self {
        let mut body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            body.push_back(Cell::new(0, 0));
        }
        Snake { body, direction }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Whether `cell` is covered by anything but the head
    pub fn body_contains(&self, cell: Cell) -> bool {
        self.body.iter().skip(1).any(|c| *c == cell)
    }

    /// The cell the head moves into on the next step
    pub fn next_head(&self) -> Cell {
        self.head().step(self.direction)
    }

    /// Pushes `new_head` and drops the tail unless growing. Returns the cell
    /// that was freed, if any.
    pub fn move_to(&mut self, new_head: Cell, grow: bool) -> Option<Cell> {
        self.body.push_front(new_head);

        if grow {
            None
        } else {
            self.body.pop_back()
        }
    }

    /// Ignores a direct reversal; returns whether the direction was taken.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction.is_opposite(self.direction) {
            return false;
        }

        self.direction = new_direction;
        true
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_opposites() {
        assert!(Up.is_opposite(Down));
        assert!(Down.is_opposite(Up));
        assert!(Left.is_opposite(Right));
        assert!(Right.is_opposite(Left));
        assert!(!Up.is_opposite(Left));
        assert!(!Right.is_opposite(Right));
    }

    #[test]
    fn test_step() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.step(Up), Cell::new(5, 4));
        assert_eq!(cell.step(Down), Cell::new(5, 6));
        assert_eq!(cell.step(Left), Cell::new(4, 5));
        assert_eq!(cell.step(Right), Cell::new(6, 5));
    }

    #[test]
    fn test_move_without_growing() {
        let mut snake = Snake::from_cells(cells(&[(6, 5), (5, 5), (4, 5)]), Right);
        let freed = snake.move_to(snake.next_head(), false);

        assert_eq!(freed, Some(Cell::new(4, 5)));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(7, 5));
    }

    #[test]
    fn test_move_growing() {
        let mut snake = Snake::new(Cell::new(5, 5), Right);
        let freed = snake.move_to(snake.next_head(), true);

        assert_eq!(freed, None);
        let body: Vec<Cell> = snake.cells().copied().collect();
        assert_eq!(body, cells(&[(6, 5), (5, 5)]));
    }

    #[test]
    fn test_reversal_ignored() {
        let mut snake = Snake::new(Cell::new(5, 5), Right);
        assert!(!snake.set_direction(Left));
        assert_eq!(snake.get_direction(), Right);

        assert!(snake.set_direction(Up));
        assert_eq!(snake.get_direction(), Up);
        assert_eq!(snake.head_char(), '^');
    }

    #[test]
    fn test_body_contains_skips_head() {
        let snake = Snake::from_cells(cells(&[(6, 5), (5, 5)]), Right);
        assert!(!snake.body_contains(Cell::new(6, 5)));
        assert!(snake.body_contains(Cell::new(5, 5)));
        assert!(snake.contains(Cell::new(6, 5)));
    }

    #[test]
    fn test_empty_cells_still_make_a_snake() {
        let snake = Snake::from_cells(Vec::new(), Down);
        assert_eq!(snake.len(), 1);
    }
}
