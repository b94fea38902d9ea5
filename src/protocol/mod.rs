//! Text protocol handling.
//!
//! Location, direction and move notation, the compact board layout string,
//! console command parsing, and board rendering for the text front end.

pub mod layout;
pub mod notation;
pub mod parser;
pub mod render;

pub use layout::{encode_layout, parse_layout, LayoutError};
pub use notation::{
    describe_move, format_location, format_move, parse_direction, parse_location, parse_move,
    NotationError,
};
pub use parser::{parse_command, parse_side_choice, Command};
pub use render::{render_board, INSTRUCTIONS};
