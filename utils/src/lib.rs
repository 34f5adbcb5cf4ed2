pub mod board_metrics;
pub mod masks;
pub mod material;
mod position;
pub mod zobrist;

pub use material::{game_phase, has_non_pawn_material, majors, minors};
pub use position::Position;
