mod canvas;
mod compositor;
mod display;
mod painter;
pub mod text;

pub use canvas::{Canvas, Cell, Style, CONTINUATION};
pub use compositor::compose;
pub use display::Display;
pub use painter::Painter;
