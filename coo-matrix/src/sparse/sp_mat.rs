use std::borrow::Cow;
use std::fmt::Display;
use std::ops::Neg;
use itertools::Itertools;
use nalgebra_sparse::CooMatrix;
use nalgebra_sparse::na::DMatrix;
use num_traits::ToPrimitive;
use crate::{Int, MatError, MatTrait};
use super::{sort, Entry};

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpMat<R> { 
    rows: usize,
    cols: usize,
    entries: Vec<Entry<R>>,
}

impl<R> MatTrait for SpMat<R> {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl<R> SpMat<R> { 
    pub fn new(rows: usize, cols: usize) -> Self { 
        Self { rows, cols, entries: vec![] }
    }

    pub fn zero(shape: (usize, usize)) -> Self {
        Self::new(shape.0, shape.1)
    }

    // entries must already satisfy the bounds and zero-free invariants.
    pub(crate) fn from_raw(shape: (usize, usize), entries: Vec<Entry<R>>) -> Self { 
        debug_assert!(entries.iter().all(|e| e.row < shape.0 && e.col < shape.1));
        Self { rows: shape.0, cols: shape.1, entries }
    }

    pub fn entries(&self) -> &[Entry<R>] { 
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry<R>> { 
        self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> { 
        self.entries.iter().map(|e| (e.row, e.col, &e.value))
    }

    pub fn nnz(&self) -> usize { 
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool { 
        self.entries.is_empty()
    }

    pub fn density(&self) -> f64 { 
        let (m, n) = self.shape();
        if m == 0 || n == 0 { 
            return 0.0
        }

        let nnz = self.nnz().to_f64().unwrap();
        let total = (m * n).to_f64().unwrap();

        nnz / total
    }

    pub fn is_sorted(&self) -> bool { 
        sort::is_sorted(&self.entries)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MatError> { 
        if row >= self.rows || col >= self.cols { 
            Err(MatError::InvalidPosition { row, col, shape: self.shape() })
        } else { 
            Ok(())
        }
    }
}

impl<R> SpMat<R>
where R: Int { 
    pub fn from_entries<T>(shape: (usize, usize), entries: T) -> Result<Self, MatError>
    where T: IntoIterator<Item = (usize, usize, R)> { 
        let mut a = Self::zero(shape);
        for (i, j, r) in entries { 
            a.insert(i, j, r)?;
        }
        Ok(a)
    }

    // appends unconditionally: a second insert at the same position
    // leaves two entries there.
    pub fn insert(&mut self, row: usize, col: usize, value: R) -> Result<(), MatError> { 
        self.check_bounds(row, col)?;

        if !value.is_zero() { 
            self.entries.push(Entry::new(row, col, value));
        }
        Ok(())
    }

    // sum of the entries stored at (row, col).
    pub fn get(&self, row: usize, col: usize) -> R { 
        self.entries.iter()
            .filter(|e| e.key() == (row, col))
            .fold(R::zero(), |res, e| res + e.value.clone())
    }

    pub fn sort(&mut self) { 
        sort::sort(&mut self.entries)
    }

    pub(crate) fn sorted_entries(&self) -> Cow<'_, [Entry<R>]> { 
        if self.is_sorted() { 
            Cow::Borrowed(&self.entries)
        } else { 
            let mut entries = self.entries.clone();
            sort::sort(&mut entries);
            Cow::Owned(entries)
        }
    }

    // ascending (row, col, value).
    pub fn canonical_entries(&self) -> impl Iterator<Item = &Entry<R>> { 
        self.entries.iter().sorted_by(|a, b| 
            Ord::cmp(&(a.row, a.col, &a.value), &(b.row, b.col, &b.value))
        )
    }

    pub fn transpose(&self) -> Self { 
        let entries = self.entries.iter().cloned().map(Entry::transpose).collect();
        Self::from_raw((self.cols, self.rows), entries)
    }

    pub fn negated(&self) -> Self { 
        let entries = self.entries.iter().cloned().map(|e| e.map(R::neg)).collect();
        Self::from_raw(self.shape(), entries)
    }

    pub fn dump(&self) -> String { 
        let head = format!("Dimension: {} x {}\nSparse Matrix: Row Column Value", self.rows, self.cols);
        let lines = self.canonical_entries().map(|e| 
            format!("{} {} {}", e.row, e.col, e.value)
        );
        std::iter::once(head).chain(lines).join("\n")
    }

    pub fn into_dense(self) -> DMatrix<R>
    where R: 'static { 
        let mut m = DMatrix::from_element(self.rows, self.cols, R::zero());
        for e in self.entries { 
            let a = &mut m[(e.row, e.col)];
            *a = a.clone() + e.value;
        }
        m
    }
}

impl<R> PartialEq for SpMat<R>
where R: Int {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && 
        Iterator::eq(self.canonical_entries(), other.canonical_entries())
    }
}

impl<R> Eq for SpMat<R>
where R: Int {}

impl<R> Default for SpMat<R> {
    fn default() -> Self {
        Self::zero((0, 0))
    }
}

impl<R> Neg for SpMat<R>
where R: Int {
    type Output = Self;
    fn neg(self) -> Self::Output {
        let entries = self.entries.into_iter().map(|e| e.map(R::neg)).collect();
        Self::from_raw((self.rows, self.cols), entries)
    }
}

impl<R> Neg for &SpMat<R>
where R: Int {
    type Output = SpMat<R>;
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl<R> Display for SpMat<R>
where R: Int {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dump())
    }
}

impl<R> From<&SpMat<R>> for CooMatrix<R>
where R: Int + 'static {
    fn from(a: &SpMat<R>) -> Self {
        let mut coo = CooMatrix::new(a.rows, a.cols);
        for e in a.entries.iter() { 
            coo.push(e.row, e.col, e.value.clone());
        }
        coo
    }
}

impl<R> TryFrom<&CooMatrix<R>> for SpMat<R>
where R: Int + 'static {
    type Error = MatError;
    fn try_from(coo: &CooMatrix<R>) -> Result<Self, Self::Error> {
        let shape = (coo.nrows(), coo.ncols());
        Self::from_entries(shape, coo.triplet_iter().map(|(i, j, a)| 
            (i, j, a.clone())
        ))
    }
}

#[cfg(feature = "serde")]
impl<'de, R> serde::Deserialize<'de> for SpMat<R>
where R: Int + serde::Deserialize<'de> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        #[derive(serde::Deserialize)]
        struct Data<T> { 
            rows: usize,
            cols: usize,
            entries: Vec<Entry<T>>
        }

        let data = Data::<R>::deserialize(deserializer)?;
        let shape = (data.rows, data.cols);
        Self::from_entries(shape, data.entries.into_iter().map(Into::into)).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
impl SpMat<i64> { 
    pub fn rand(shape: (usize, usize), density: f64) -> Self {
        use cartesian::cartesian;
        use rand::Rng;
        use rand::seq::SliceRandom;
    
        let (m, n) = shape;
        let range = cartesian!(0..m, 0..n);
        let mut rng = rand::thread_rng();
    
        let mut entries = range.filter_map(|(i, j)|
            if rng.gen::<f64>() < density { 
                Some((i, j, rng.gen_range(-9..=9)))
            } else { 
                None
            }
        ).collect_vec();

        entries.shuffle(&mut rng);

        Self::from_entries(shape, entries).unwrap()
    }
}

#[cfg(test)]
pub(super) mod tests { 
    use num_bigint::BigInt;
    use super::*;

    #[test]
    fn init() { 
        let a = SpMat::from_entries((2, 3), [
            (0, 0, 1),
            (1, 2, -4),
            (0, 1, 2),
        ]).unwrap();

        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a.nnz(), 3);
        assert!(!a.is_sorted());
        assert_eq!(a.get(1, 2), -4);
        assert_eq!(a.get(1, 1), 0);
    }

    #[test]
    fn insert_zero_is_noop() { 
        let mut a = SpMat::new(3, 3);
        a.insert(0, 0, 0).unwrap();
        a.insert(2, 1, 0).unwrap();
        assert!(a.is_zero());
        assert_eq!(a.nnz(), 0);
    }

    #[test]
    fn insert_out_of_bounds() { 
        let mut a = SpMat::new(2, 3);
        assert_eq!(
            a.insert(2, 0, 1), 
            Err(MatError::InvalidPosition { row: 2, col: 0, shape: (2, 3) })
        );
        assert_eq!(
            a.insert(0, 3, 1), 
            Err(MatError::InvalidPosition { row: 0, col: 3, shape: (2, 3) })
        );
        // bounds are checked before zero-elision.
        assert!(a.insert(5, 5, 0).is_err());
        assert!(a.is_zero());
    }

    #[test]
    fn insert_duplicate_appends() { 
        let mut a = SpMat::new(2, 2);
        a.insert(1, 1, 3).unwrap();
        a.insert(1, 1, 4).unwrap();

        assert_eq!(a.nnz(), 2);
        assert_eq!(a.get(1, 1), 7);
    }

    #[test]
    fn sort() { 
        let mut a = SpMat::from_entries((3, 3), [
            (2, 2, 1),
            (0, 2, 2),
            (0, 1, 3),
        ]).unwrap();
        a.sort();

        assert!(a.is_sorted());
        assert_eq!(a.entries(), &[
            Entry::new(0, 1, 3),
            Entry::new(0, 2, 2),
            Entry::new(2, 2, 1),
        ]);
    }

    #[test]
    fn eq_ignores_order() { 
        let a = SpMat::from_entries((2, 2), [(0, 0, 1), (1, 1, 2)]).unwrap();
        let b = SpMat::from_entries((2, 2), [(1, 1, 2), (0, 0, 1)]).unwrap();
        let c = SpMat::from_entries((2, 3), [(1, 1, 2), (0, 0, 1)]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn transpose() { 
        let a = SpMat::from_entries((2, 3), [
            (0, 1, 1),
            (1, 2, 2),
            (1, 0, 3),
        ]).unwrap();
        let b = a.transpose();

        assert_eq!(b.shape(), (3, 2));
        assert_eq!(b.entries(), &[
            Entry::new(1, 0, 1),
            Entry::new(2, 1, 2),
            Entry::new(0, 1, 3),
        ]);
    }

    #[test]
    fn transpose_involution() { 
        for _ in 0..10 { 
            let a = SpMat::rand((5, 7), 0.3);
            let b = a.transpose().transpose();
            assert_eq!(a.shape(), b.shape());
            assert_eq!(a.entries(), b.entries());
        }
    }

    #[test]
    fn neg() { 
        let a = SpMat::from_entries((2, 2), [(0, 1, 5), (1, 0, -2)]).unwrap();
        let b = SpMat::from_entries((2, 2), [(0, 1, -5), (1, 0, 2)]).unwrap();
        assert_eq!(a.negated(), b);
        assert_eq!(-&a, b);
        assert_eq!(-a, b);
    }

    #[test]
    fn dump() { 
        let a = SpMat::from_entries((3, 2), [
            (2, 1, 7),
            (0, 0, -1),
            (1, 1, 4),
        ]).unwrap();

        assert_eq!(a.dump(), "\
Dimension: 3 x 2
Sparse Matrix: Row Column Value
0 0 -1
1 1 4
2 1 7");
        assert_eq!(a.to_string(), a.dump());
    }

    #[test]
    fn dump_empty() { 
        let a = SpMat::<i64>::new(4, 1);
        assert_eq!(a.dump(), "Dimension: 4 x 1\nSparse Matrix: Row Column Value");
    }

    #[test]
    fn density() { 
        let a = SpMat::from_entries((2, 5), [(0, 0, 1), (1, 4, 1)]).unwrap();
        assert_eq!(a.density(), 0.2);
        assert_eq!(SpMat::<i64>::zero((0, 3)).density(), 0.0);
    }

    #[test]
    fn to_dense() { 
        let a = SpMat::from_entries((2, 2), [
            (0, 0, 1),
            (1, 0, 3),
            (1, 1, 4),
            (1, 1, 1),
        ]).unwrap();

        let d = a.into_dense();
        assert_eq!(d, DMatrix::from_row_slice(2, 2, &[1, 0, 3, 5]));
    }

    #[test]
    fn coo_interop() { 
        let a = SpMat::from_entries((3, 4), [
            (0, 3, 1),
            (2, 0, -2),
        ]).unwrap();

        let coo = CooMatrix::from(&a);
        assert_eq!(coo.nnz(), 2);

        let b = SpMat::try_from(&coo).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bigint() { 
        let big = BigInt::from(i64::MAX) * BigInt::from(4);
        let a = SpMat::from_entries((2, 2), [
            (0, 0, big.clone()),
            (1, 1, BigInt::from(0)),
        ]).unwrap();

        assert_eq!(a.nnz(), 1);
        assert_eq!(a.get(0, 0), big);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() { 
        let a = SpMat::from_entries((3, 4), [(2, 3, 5), (0, 1, -1)]).unwrap();
        let ser = serde_json::to_string(&a).unwrap();
        let des: SpMat<i64> = serde_json::from_str(&ser).unwrap();
        assert_eq!(a, des);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserialize_out_of_bounds() { 
        let json = r#"{"rows":2,"cols":2,"entries":[{"row":2,"col":0,"value":1}]}"#;
        let res = serde_json::from_str::<SpMat<i64>>(json);
        assert!(res.is_err());
    }
}
