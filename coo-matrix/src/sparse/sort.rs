use std::ops::RangeInclusive;
use itertools::Itertools;
use super::Entry;

pub fn sort<R>(entries: &mut [Entry<R>])
where R: Clone { 
    if entries.len() < 2 { 
        return
    }
    let end = entries.len() - 1;
    sort_range(entries, 0 ..= end)
}

// stable merge sort on `entries[begin ..= end]`, keyed by (row, col).
pub fn sort_range<R>(entries: &mut [Entry<R>], range: RangeInclusive<usize>)
where R: Clone { 
    let (begin, end) = range.into_inner();
    if begin >= end { 
        return
    }

    assert!(end < entries.len(), "range {begin}..={end} out of bounds for {} entries", entries.len());

    let mid = begin + (end - begin) / 2;
    sort_range(entries, begin ..= mid);
    sort_range(entries, mid + 1 ..= end);
    merge(entries, begin, mid, end);
}

fn merge<R>(entries: &mut [Entry<R>], begin: usize, mid: usize, end: usize)
where R: Clone { 
    let left = entries[begin ..= mid].to_vec();
    let right = entries[mid + 1 ..= end].to_vec();

    // ties are taken from the left half.
    let merged = left.into_iter().merge_by(right, |a, b| a.key() <= b.key());

    for (slot, e) in Iterator::zip(entries[begin ..= end].iter_mut(), merged) { 
        *slot = e;
    }
}

pub fn is_sorted<R>(entries: &[Entry<R>]) -> bool { 
    entries.iter().tuple_windows().all(|(a, b)| a.key() <= b.key())
}

#[cfg(test)]
mod tests { 
    use rand::Rng;
    use super::*;

    fn entries<const N: usize>(data: [(usize, usize, i32); N]) -> Vec<Entry<i32>> { 
        data.into_iter().map(Entry::from).collect()
    }

    #[test]
    fn sort_empty() { 
        let mut v: Vec<Entry<i32>> = vec![];
        sort(&mut v);
        assert!(v.is_empty());

        let mut v = entries([(3, 1, 2)]);
        sort(&mut v);
        assert_eq!(v, entries([(3, 1, 2)]));
    }

    #[test]
    fn sort_row_major() { 
        let mut v = entries([
            (2, 0, 1),
            (0, 3, 2),
            (1, 1, 3),
            (0, 1, 4),
            (2, 2, 5),
        ]);
        sort(&mut v);

        assert_eq!(v, entries([
            (0, 1, 4),
            (0, 3, 2),
            (1, 1, 3),
            (2, 0, 1),
            (2, 2, 5),
        ]));
        assert!(is_sorted(&v));
    }

    #[test]
    fn sort_is_stable() { 
        let mut v = entries([
            (1, 1, 10),
            (0, 0, 1),
            (1, 1, 20),
            (0, 0, 2),
            (1, 1, 30),
        ]);
        sort(&mut v);

        assert_eq!(v, entries([
            (0, 0, 1),
            (0, 0, 2),
            (1, 1, 10),
            (1, 1, 20),
            (1, 1, 30),
        ]));
    }

    #[test]
    fn sort_sub_range() { 
        let mut v = entries([
            (5, 5, 0),
            (3, 0, 1),
            (1, 0, 2),
            (2, 0, 3),
            (0, 0, 4),
        ]);
        sort_range(&mut v, 1 ..= 3);

        assert_eq!(v, entries([
            (5, 5, 0),
            (1, 0, 2),
            (2, 0, 3),
            (3, 0, 1),
            (0, 0, 4),
        ]));
        assert!(!is_sorted(&v));
    }

    #[test]
    fn sort_reversed_range_is_noop() { 
        let mut v = entries([(1, 0, 1), (0, 0, 2)]);
        #[allow(clippy::reversed_empty_ranges)]
        sort_range(&mut v, 1 ..= 0);
        assert_eq!(v, entries([(1, 0, 1), (0, 0, 2)]));
    }

    #[test]
    fn sort_random() { 
        let mut rng = rand::thread_rng();

        for _ in 0..20 { 
            let n = rng.gen_range(0..200);
            let mut v = (0..n).map(|k| 
                Entry::new(rng.gen_range(0..10), rng.gen_range(0..10), k)
            ).collect_vec();

            let mut expected = v.clone();
            expected.sort_by_key(|e| e.key());

            sort(&mut v);
            assert_eq!(v, expected);
        }
    }
}
