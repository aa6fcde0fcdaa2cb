pub mod cell;
pub mod text;

pub use cell::{cell_text, header_text};
pub use text::{pad_right, truncate};
