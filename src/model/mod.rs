pub mod course;
pub mod decode;
pub mod format;
pub mod hole;
pub mod player;
pub mod status;

pub use course::*;
pub use decode::*;
pub use format::*;
pub use hole::*;
pub use player::*;
pub use status::*;

pub const HOLES_PER_ROUND: usize = 18;
