use crate::config::GameConfig;
use crate::snake::Cell;
use crate::state::GameState;
use crate::TermInt;

/// Each board cell is this many terminal columns wide, since terminal
/// characters are about twice as tall as they are wide.
pub const CELL_WIDTH: TermInt = 2;

const SNAKE_BODY_CHAR: char = '█';
const DEAD_SNAKE_CHAR: char = 'X';
const FOOD_CHARS: [char; 2] = ['(', ')'];

pub const GAME_OVER_MESSAGE: &str = "Game Over! Press Enter to Restart";
pub const PAUSED_MESSAGE: &str = "Paused! Press 'P' to Resume";

/// Off-screen character grid. The renderer paints a whole frame into it and
/// the terminal layer only has to print what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: TermInt,
    height: TermInt,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        Canvas { width, height, cells: vec![' '; width as usize * height as usize] }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn clear(&mut self) {
        for ch in self.cells.iter_mut() {
            *ch = ' ';
        }
    }

    /// Anything outside the canvas is silently dropped.
    pub fn put(&mut self, x: TermInt, y: TermInt, ch: char) {
        if x < self.width && y < self.height {
            self.cells[self.width as usize * y as usize + x as usize] = ch;
        }
    }

    pub fn get(&self, x: TermInt, y: TermInt) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[self.width as usize * y as usize + x as usize])
        } else {
            None
        }
    }

    pub fn text(&mut self, x: TermInt, y: TermInt, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as TermInt, y, ch);
        }
    }

    pub fn row(&self, y: TermInt) -> String {
        (0..self.width).filter_map(|x| self.get(x, y)).collect()
    }

    /// Prints `lines` centered on `center` inside a blank box with a line of
    /// padding above and below.
    pub fn message_box(&mut self, center: (TermInt, TermInt), lines: &[&str]) {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.put(top_left.0 + x_diff, *y, ' ');
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.text(top_left.0, top_left.1 + i as TermInt + 1, &padded_line);
        }
    }
}

/// Draws a read-only snapshot of the game into a [`Canvas`].
#[derive(Debug, Clone)]
pub struct Renderer {
    cols: i32,
    rows: i32,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Renderer { cols: config.cols, rows: config.rows }
    }

    /// Terminal size needed to show the whole board including its border
    pub fn board_size(&self) -> (TermInt, TermInt) {
        (self.cols as TermInt * CELL_WIDTH + 2, self.rows as TermInt + 2)
    }

    pub fn draw<R>(&self, state: &GameState<R>, canvas: &mut Canvas) {
        canvas.clear();

        let (board_w, board_h) = self.board_size();
        let origin = (
            canvas.width().saturating_sub(board_w) / 2,
            canvas.height().saturating_sub(board_h) / 2,
        );

        self.draw_borders(canvas, origin);

        let snake = state.snake();
        let dead = state.is_game_over();
        for (i, cell) in snake.cells().enumerate() {
            let ch = if dead {
                DEAD_SNAKE_CHAR
            } else if i == 0 {
                snake.head_char()
            } else {
                SNAKE_BODY_CHAR
            };
            self.fill_cell(canvas, origin, *cell, [ch, ch]);
        }

        self.fill_cell(canvas, origin, state.food(), FOOD_CHARS);

        canvas.text(origin.0 + 2, origin.1, &format!(" Score: {} ", state.score()));

        let center = (origin.0 + board_w / 2, origin.1 + board_h / 2);
        if dead {
            canvas.message_box(center, &[GAME_OVER_MESSAGE]);
        } else if state.is_paused() {
            canvas.message_box(center, &[PAUSED_MESSAGE]);
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&self, canvas: &mut Canvas, origin: (TermInt, TermInt)) {
        let (width, height) = self.board_size();
        let end_x = origin.0 + width - 1;
        let end_y = origin.1 + height - 1;

        for x in origin.0..=end_x {
            let ch = if x == origin.0 || x == end_x {'+'} else {'-'};
            canvas.put(x, origin.1, ch);
            canvas.put(x, end_y, ch);
        }

        for y in origin.1 + 1..end_y {
            canvas.put(origin.0, y, '|');
            canvas.put(end_x, y, '|');
        }
    }

    fn fill_cell(&self, canvas: &mut Canvas, origin: (TermInt, TermInt), cell: Cell, chars: [char; 2]) {
        // A head that went through the wall is not drawn
        if cell.x < 0 || cell.x >= self.cols || cell.y < 0 || cell.y >= self.rows {
            return;
        }

        let x = origin.0 + 1 + cell.x as TermInt * CELL_WIDTH;
        let y = origin.1 + 1 + cell.y as TermInt;
        canvas.put(x, y, chars[0]);
        canvas.put(x + 1, y, chars[1]);
    }
}
