use std::fmt::{Debug, Display};
use std::str::FromStr;
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Signed};

pub trait MatTrait {
    fn shape(&self) -> (usize, usize);
    fn nrows(&self) -> usize { self.shape().0 }
    fn ncols(&self) -> usize { self.shape().1 }
    fn is_square(&self) -> bool { 
        let (m, n) = self.shape();
        m == n
    }
}

// signed integer types that can be stored in a matrix.
// arithmetic goes through the checked ops, so fixed-width types report overflow.
pub trait Int: Integer + Signed + CheckedAdd + CheckedSub + CheckedMul + Clone + Send + Sync + Debug + Display + FromStr {}

impl<T> Int for T
where T: Integer + Signed + CheckedAdd + CheckedSub + CheckedMul + Clone + Send + Sync + Debug + Display + FromStr {}
