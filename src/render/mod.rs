//! Presentation of a game session: display rows and terminal output

pub mod colors;
pub mod table;
pub mod terminal;

pub use colors::category_color;
pub use table::{
    category_tables, guess_rows, pretty_move_name, sprite_url, summary_rows, CategoryTable,
    GuessRow, SummaryRow,
};
pub use terminal::{write_guess, write_knowledge, write_session};
