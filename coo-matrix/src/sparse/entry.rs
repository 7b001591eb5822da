use derive_more::Display;
use num_traits::Zero;

// a single (row, col, value) triple.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display)]
#[display("({row}, {col}, {value})")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<R> { 
    pub row: usize,
    pub col: usize,
    pub value: R,
}

impl<R> Entry<R> { 
    pub fn new(row: usize, col: usize, value: R) -> Self { 
        Self { row, col, value }
    }

    pub fn key(&self) -> (usize, usize) { 
        (self.row, self.col)
    }

    pub fn transpose(self) -> Self { 
        Self::new(self.col, self.row, self.value)
    }

    pub fn is_zero(&self) -> bool 
    where R: Zero { 
        self.value.is_zero()
    }

    pub fn map<S, F>(self, f: F) -> Entry<S>
    where F: FnOnce(R) -> S { 
        Entry::new(self.row, self.col, f(self.value))
    }
}

impl<R> From<(usize, usize, R)> for Entry<R> { 
    fn from((row, col, value): (usize, usize, R)) -> Self {
        Self::new(row, col, value)
    }
}

impl<R> From<Entry<R>> for (usize, usize, R) { 
    fn from(e: Entry<R>) -> Self {
        (e.row, e.col, e.value)
    }
}
