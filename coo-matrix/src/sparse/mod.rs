pub use crate::MatTrait;

mod entry;
mod sp_mat;
mod ops;
pub mod sort;

pub use entry::Entry;
pub use sp_mat::SpMat;
