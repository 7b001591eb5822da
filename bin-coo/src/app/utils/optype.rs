use derive_more::Display;
use coo_matrix::MatError;
use coo_matrix::sparse::SpMat;
use super::Int;

#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
pub enum Op { 
    #[display("add")]
    Add, 
    #[display("subtract")]
    Sub, 
    #[display("multiply")]
    Mul
}

impl Op { 
    // "1", "2", "3" as listed by the prompt.
    pub fn from_choice(choice: &str) -> Option<Self> { 
        match choice.trim() { 
            "1" => Some(Op::Add),
            "2" => Some(Op::Sub),
            "3" => Some(Op::Mul),
            _   => None
        }
    }

    pub fn apply(&self, a: &SpMat<Int>, b: &SpMat<Int>) -> Result<SpMat<Int>, MatError> { 
        match self { 
            Op::Add => a.add(b),
            Op::Sub => a.subtract(b),
            Op::Mul => a.multiply(b),
        }
    }
}
