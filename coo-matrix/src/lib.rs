mod base;
mod err;

pub use base::*;
pub use err::*;

pub mod sparse;
pub mod io;
pub mod util;
