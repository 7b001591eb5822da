use ahash::AHashMap;
use itertools::{EitherOrBoth, Itertools};
use log::{debug, trace};
use crate::{Int, MatError, MatTrait};
use super::{Entry, SpMat};

type Acc<R> = AHashMap<(usize, usize), R>;
type RowIndex<'a, R> = AHashMap<usize, Vec<&'a Entry<R>>>;

const MULTIPLY: &str = "multiply";

impl<R> SpMat<R>
where R: Int { 
    pub fn add(&self, other: &Self) -> Result<Self, MatError> { 
        self.merge_with(other, "add", 
            |a, b| a.checked_add(b), 
            |b| Some(b.clone())
        )
    }

    pub fn subtract(&self, other: &Self) -> Result<Self, MatError> { 
        self.merge_with(other, "subtract", 
            |a, b| a.checked_sub(b), 
            |b| R::zero().checked_sub(b)
        )
    }

    pub fn multiply(&self, other: &Self) -> Result<Self, MatError> { 
        if self.ncols() != other.nrows() { 
            return Err(self.mismatch(other, MULTIPLY))
        }

        let shape = (self.nrows(), other.ncols());
        let index = row_index(other.entries());
        let acc: Acc<R>;

        cfg_if::cfg_if! { 
            if #[cfg(feature = "multithread")] { 
                acc = accumulate_m(self.entries(), &index)?;
            } else { 
                acc = accumulate_s(self.entries(), &index)?;
            }
        }

        let entries = acc.into_iter().filter_map(|((i, j), a)| 
            (!a.is_zero()).then(|| Entry::new(i, j, a))
        ).collect_vec();

        let mut res = SpMat::from_raw(shape, entries);
        res.sort();

        debug!("multiply: {:?} * {:?} -> {:?}, nnz: {} * {} -> {}", 
            self.shape(), other.shape(), res.shape(), 
            self.nnz(), other.nnz(), res.nnz()
        );

        Ok(res)
    }

    // merge-join of the two sorted entry lists. `f` combines entries at 
    // a common position, `g` maps entries found only in `other`.
    // both return `None` on overflow.
    fn merge_with<F, G>(&self, other: &Self, op: &'static str, f: F, g: G) -> Result<Self, MatError>
    where F: Fn(&R, &R) -> Option<R>, G: Fn(&R) -> Option<R> { 
        if self.shape() != other.shape() { 
            return Err(self.mismatch(other, op))
        }

        let (a, b) = (self.sorted_entries(), other.sorted_entries());
        let overflow = |e: &Entry<R>| MatError::Overflow { op, row: e.row, col: e.col };

        let entries: Vec<_> = a.iter().merge_join_by(b.iter(), |x, y| 
            x.key().cmp(&y.key())
        ).filter_map(|e| match e { 
            EitherOrBoth::Left(x) => Some(Ok(x.clone())),
            EitherOrBoth::Right(y) => Some(
                g(&y.value).map(|v| Entry::new(y.row, y.col, v)).ok_or_else(|| overflow(y))
            ),
            EitherOrBoth::Both(x, y) => match f(&x.value, &y.value) { 
                Some(v) => (!v.is_zero()).then(|| Ok(Entry::new(x.row, x.col, v))),
                None => Some(Err(overflow(x)))
            }
        }).try_collect()?;

        let res = SpMat::from_raw(self.shape(), entries);

        trace!("{op}: {:?}, nnz: {} + {} -> {}", res.shape(), self.nnz(), other.nnz(), res.nnz());

        Ok(res)
    }

    fn mismatch(&self, other: &Self, op: &'static str) -> MatError { 
        MatError::DimensionMismatch { op, lhs: self.shape(), rhs: other.shape() }
    }
}

fn row_index<R>(entries: &[Entry<R>]) -> RowIndex<'_, R> { 
    entries.iter().fold(AHashMap::new(), |mut res, e| { 
        res.entry(e.row).or_insert_with(Vec::new).push(e);
        res
    })
}

fn add_to<R>(acc: &mut Acc<R>, key: (usize, usize), r: R) -> Result<(), MatError>
where R: Int { 
    let a = acc.entry(key).or_insert_with(R::zero);
    let Some(s) = a.checked_add(&r) else { 
        return Err(MatError::Overflow { op: MULTIPLY, row: key.0, col: key.1 })
    };
    *a = s;
    Ok(())
}

// adds a * b for every b in the row of `index` matching a's column.
fn add_products<R>(acc: &mut Acc<R>, a: &Entry<R>, index: &RowIndex<'_, R>) -> Result<(), MatError>
where R: Int { 
    let Some(row) = index.get(&a.col) else { 
        return Ok(())
    };

    for b in row { 
        let key = (a.row, b.col);
        let Some(p) = a.value.checked_mul(&b.value) else { 
            return Err(MatError::Overflow { op: MULTIPLY, row: key.0, col: key.1 })
        };
        add_to(acc, key, p)?;
    }
    Ok(())
}

#[allow(unused)]
fn accumulate_s<R>(lhs: &[Entry<R>], index: &RowIndex<'_, R>) -> Result<Acc<R>, MatError>
where R: Int { 
    let mut acc = Acc::new();
    for a in lhs { 
        add_products(&mut acc, a, index)?;
    }
    Ok(acc)
}

#[cfg(feature = "multithread")]
fn accumulate_m<R>(lhs: &[Entry<R>], index: &RowIndex<'_, R>) -> Result<Acc<R>, MatError>
where R: Int { 
    use rayon::prelude::*;

    lhs.par_iter().try_fold(Acc::new, |mut acc, a| { 
        add_products(&mut acc, a, index)?;
        Ok(acc)
    }).try_reduce(Acc::new, |mut acc, other| { 
        for (key, r) in other { 
            add_to(&mut acc, key, r)?;
        }
        Ok(acc)
    })
}
