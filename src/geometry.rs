use num_traits::PrimInt;
use std::fmt::Display;
use std::ops::{Add, Sub};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A size measured in terminal cells.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default)]
pub struct Size {
    rows: u16,
    cols: u16,
}

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default)]
pub struct Point<T: PrimInt> {
    x: T,
    y: T,
}

/// Signed cell coordinates. Panels may sit partially outside the visible area so positions
/// are allowed to go negative.
pub type Position = Point<i32>;

/// An axis aligned rectangle of cells. `x` and `y` are the top left cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Rect {
    x: i32,
    y: i32,
    size: Size,
}

impl Direction {
    /// The unit step for this direction, rows grow downwards.
    pub fn delta(&self) -> Position {
        return match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        };
    }

    pub fn try_from_string(value: &str) -> Result<Self, String> {
        return match value.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(format!("Unknown direction: {}", value)),
        };
    }

    pub fn as_str(&self) -> &'static str {
        return match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
    }
}

impl Size {
    pub const fn new(rows: u16, cols: u16) -> Self {
        return Self { rows, cols };
    }

    pub fn get_cols(&self) -> u16 {
        return self.cols;
    }

    pub fn get_rows(&self) -> u16 {
        return self.rows;
    }

    /// Component wise minimum of the two sizes.
    pub fn min(&self, other: Size) -> Size {
        return Size::new(self.rows.min(other.rows), self.cols.min(other.cols));
    }

    pub fn saturating_sub(&self, rows: u16, cols: u16) -> Size {
        return Size::new(
            self.rows.saturating_sub(rows),
            self.cols.saturating_sub(cols),
        );
    }

    pub fn is_empty(&self) -> bool {
        return self.rows == 0 || self.cols == 0;
    }

    pub fn area(&self) -> usize {
        return self.rows as usize * self.cols as usize;
    }
}

impl Sub for Size {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        return Self::new(
            self.rows.saturating_sub(rhs.rows),
            self.cols.saturating_sub(rhs.cols),
        );
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{{width: {}, height: {}}}", self.cols, self.rows);
    }
}

impl<T: PrimInt> Point<T> {
    /// Treats (0, 0) as the origin.
    pub fn new(column: T, row: T) -> Self {
        return Self {
            x: column,
            y: row,
        };
    }

    /// Get, the x component of this point
    pub fn column(&self) -> T {
        return self.x;
    }

    /// Get, the y component of this point
    pub fn row(&self) -> T {
        return self.y;
    }
}

impl Position {
    pub fn from_cell(column: u16, row: u16) -> Self {
        return Self::new(column as i32, row as i32);
    }
}

impl<T: PrimInt> Add for Point<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        return Self::new(self.x + rhs.x, self.y + rhs.y);
    }
}

impl<T: PrimInt> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        return Self::new(self.x - rhs.x, self.y - rhs.y);
    }
}

impl<T: PrimInt + Display> Display for Point<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "(x: {}, y: {})", self.column(), self.row());
    }
}

impl Rect {
    pub const fn new(x: i32, y: i32, size: Size) -> Self {
        return Self { x, y, size };
    }

    pub fn at(position: Position, size: Size) -> Self {
        return Self::new(position.column(), position.row(), size);
    }

    pub fn x(&self) -> i32 {
        return self.x;
    }

    pub fn y(&self) -> i32 {
        return self.y;
    }

    pub fn width(&self) -> i32 {
        return self.size.get_cols() as i32;
    }

    pub fn height(&self) -> i32 {
        return self.size.get_rows() as i32;
    }

    /// One past the last column.
    pub fn right(&self) -> i32 {
        return self.x + self.width();
    }

    /// One past the last row.
    pub fn bottom(&self) -> i32 {
        return self.y + self.height();
    }

    pub fn size(&self) -> Size {
        return self.size;
    }

    pub fn position(&self) -> Position {
        return Position::new(self.x, self.y);
    }

    pub fn contains(&self, point: Position) -> bool {
        return point.column() >= self.x
            && point.column() < self.right()
            && point.row() >= self.y
            && point.row() < self.bottom();
    }

    pub fn translate(&self, offset: Position) -> Rect {
        return Rect::new(self.x + offset.column(), self.y + offset.row(), self.size);
    }

    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= x || bottom <= y {
            return None;
        }

        return Some(Rect::new(
            x,
            y,
            Size::new((bottom - y) as u16, (right - x) as u16),
        ));
    }

    /// The same rectangle with `rows` removed from the top.
    pub fn below(&self, rows: u16) -> Rect {
        let rows = rows.min(self.size.get_rows());

        return Rect::new(
            self.x,
            self.y + rows as i32,
            Size::new(self.size.get_rows() - rows, self.size.get_cols()),
        );
    }

    /// Shrink by `cols` on the left and right and `rows` on the top and bottom.
    pub fn inset(&self, rows: u16, cols: u16) -> Rect {
        let rows = rows.min(self.size.get_rows() / 2);
        let cols = cols.min(self.size.get_cols() / 2);

        return Rect::new(
            self.x + cols as i32,
            self.y + rows as i32,
            self.size.saturating_sub(rows * 2, cols * 2),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, Rect, Size};

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(2, 3, Size::new(4, 10));

        assert!(rect.contains(Position::new(2, 3)));
        assert!(rect.contains(Position::new(11, 6)));
        assert!(!rect.contains(Position::new(12, 6)));
        assert!(!rect.contains(Position::new(11, 7)));
        assert!(!rect.contains(Position::new(1, 3)));
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0, 0, Size::new(10, 10));
        let b = Rect::new(5, -2, Size::new(4, 20));

        assert_eq!(a.intersect(&b), Some(Rect::new(5, 0, Size::new(2, 5))));
        assert_eq!(a.intersect(&Rect::new(10, 0, Size::new(1, 1))), None);
    }

    #[test]
    fn size_sub_saturates() {
        assert_eq!(Size::new(2, 3) - Size::new(5, 1), Size::new(0, 2));
    }
}
