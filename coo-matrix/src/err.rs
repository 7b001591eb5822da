use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum MatError { 
    #[display("invalid matrix position ({row}, {col}) for shape {}x{}", shape.0, shape.1)]
    InvalidPosition { 
        row: usize, 
        col: usize, 
        shape: (usize, usize) 
    },

    #[display("matrix dimensions do not match for {op}: {}x{} and {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch { 
        op: &'static str, 
        lhs: (usize, usize), 
        rhs: (usize, usize) 
    },

    #[display("input has wrong format at line {line}: {msg}")]
    MalformedInput { 
        line: usize, 
        msg: String 
    },

    #[display("integer overflow in {op} at ({row}, {col})")]
    Overflow { 
        op: &'static str, 
        row: usize, 
        col: usize 
    },
}

impl MatError { 
    pub(crate) fn malformed<S>(line: usize, msg: S) -> Self
    where S: Into<String> { 
        MatError::MalformedInput { line, msg: msg.into() }
    }
}

impl std::error::Error for MatError {}
