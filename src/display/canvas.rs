use super::text::char_width;
use crate::geometry::{Rect, Size};
use crate::Color;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub underline: bool,
}

/// The character a wide glyph leaves in the cell to its right.
pub const CONTINUATION: char = '\0';

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

/// An off screen grid of styled cells. Frames are composed here and then diffed against the
/// previous frame before anything is written to the terminal.
#[derive(Clone, PartialEq, Debug)]
pub struct Canvas {
    size: Size,
    cells: Vec<Cell>,
}

impl Style {
    pub const fn new(fg: Color, bg: Color) -> Self {
        return Self {
            fg,
            bg,
            bold: false,
            underline: false,
        };
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        return self;
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        return self;
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        return self;
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        return self;
    }
}

impl Cell {
    pub fn blank(style: Style) -> Self {
        return Self { ch: ' ', style };
    }
}

impl Canvas {
    pub fn new(size: Size, background: Style) -> Self {
        return Self {
            size,
            cells: vec![Cell::blank(background); size.area()],
        };
    }

    pub fn size(&self) -> Size {
        return self.size;
    }

    pub fn bounds(&self) -> Rect {
        return Rect::new(0, 0, self.size);
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0
            || row < 0
            || col >= self.size.get_cols() as i32
            || row >= self.size.get_rows() as i32
        {
            return None;
        }

        return Some(row as usize * self.size.get_cols() as usize + col as usize);
    }

    pub fn get(&self, col: i32, row: i32) -> Option<&Cell> {
        let index = self.index(col, row)?;
        return self.cells.get(index);
    }

    pub fn row(&self, row: u16) -> &[Cell] {
        let cols = self.size.get_cols() as usize;
        let start = (row as usize * cols).min(self.cells.len());
        let end = (start + cols).min(self.cells.len());

        return &self.cells[start..end];
    }

    /// The visible text of a row, used by tests and logging.
    pub fn row_text(&self, row: u16) -> String {
        return self
            .row(row)
            .iter()
            .filter(|c| c.ch != CONTINUATION)
            .map(|c| c.ch)
            .collect();
    }

    fn set(&mut self, col: i32, row: i32, cell: Cell) {
        let index = match self.index(col, row) {
            Some(i) => i,
            None => return,
        };

        // Overwriting either half of a wide glyph blanks the other half.
        let old = self.cells[index].ch;

        if old == CONTINUATION && cell.ch != CONTINUATION {
            if let Some(left) = self.index(col - 1, row) {
                self.cells[left].ch = ' ';
            }
        } else if old != CONTINUATION && char_width(old) == 2 {
            if let Some(right) = self.index(col + 1, row) {
                if self.cells[right].ch == CONTINUATION {
                    self.cells[right].ch = ' ';
                }
            }
        }

        self.cells[index] = cell;
    }

    /// Write `text` starting at `(col, row)` without leaving `clip`. Returns the number of
    /// columns advanced, including clipped ones.
    pub fn put_str(&mut self, col: i32, row: i32, text: &str, style: Style, clip: &Rect) -> i32 {
        let mut x = col;

        for ch in text.chars() {
            let w = char_width(ch) as i32;

            if w == 0 {
                continue;
            }

            let inside = |c: i32| clip.contains(crate::geometry::Position::new(c, row));

            if w == 2 {
                if inside(x) && inside(x + 1) {
                    self.set(x, row, Cell { ch, style });
                    self.set(
                        x + 1,
                        row,
                        Cell {
                            ch: CONTINUATION,
                            style,
                        },
                    );
                } else {
                    if inside(x) {
                        self.set(x, row, Cell::blank(style));
                    }

                    if inside(x + 1) {
                        self.set(x + 1, row, Cell::blank(style));
                    }
                }
            } else if inside(x) {
                self.set(x, row, Cell { ch, style });
            }

            x += w;
        }

        return x - col;
    }

    pub fn fill(&mut self, rect: &Rect, style: Style, clip: &Rect) {
        let area = match rect.intersect(clip) {
            Some(a) => a,
            None => return,
        };

        for row in area.y()..area.bottom() {
            for col in area.x()..area.right() {
                self.set(col, row, Cell::blank(style));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, Style, CONTINUATION};
    use crate::geometry::{Rect, Size};
    use crate::Color;

    fn style() -> Style {
        return Style::new(Color::BLACK, Color::WHITE);
    }

    #[test]
    fn text_is_clipped() {
        let mut canvas = Canvas::new(Size::new(2, 8), style());
        let clip = Rect::new(2, 0, Size::new(1, 4));

        let advanced = canvas.put_str(0, 0, "abcdefgh", style(), &clip);

        assert_eq!(advanced, 8);
        assert_eq!(canvas.row_text(0), "  cdef  ");
        assert_eq!(canvas.row_text(1), "        ");
    }

    #[test]
    fn wide_glyphs_use_a_continuation_cell() {
        let mut canvas = Canvas::new(Size::new(1, 6), style());
        let clip = canvas.bounds();

        canvas.put_str(0, 0, "a👀b", style(), &clip);
        assert_eq!(canvas.get(2, 0).map(|c| c.ch), Some(CONTINUATION));
        assert_eq!(canvas.row_text(0), "a👀b  ");

        // Overwriting the right half clears the glyph.
        canvas.put_str(2, 0, "x", style(), &clip);
        assert_eq!(canvas.row_text(0), "a xb  ");
    }

    #[test]
    fn wide_glyph_at_clip_edge_is_blanked() {
        let mut canvas = Canvas::new(Size::new(1, 4), style());
        let clip = Rect::new(0, 0, Size::new(1, 3));

        canvas.put_str(2, 0, "👀", style(), &clip);
        assert_eq!(canvas.row_text(0), "    ");
    }
}
