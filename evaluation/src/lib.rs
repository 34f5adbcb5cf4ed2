pub mod def;
mod score;
pub mod trace;

pub use def::HCE;
pub use score::Score;
pub use trace::{Breakdown, Checkpoint, Term, Tracer};
