mod helper;
mod dispatch;
mod optype;

pub use helper::*;
pub use dispatch::*;
pub use optype::*;
