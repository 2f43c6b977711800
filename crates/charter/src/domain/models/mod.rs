mod cell;
mod characters;
mod theme;
mod ticks;
mod xaxis;

pub use cell::*;
pub use characters::*;
pub use theme::*;
pub use ticks::*;
pub use xaxis::*;
