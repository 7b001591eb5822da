use std::io::Write;
use log::info;
use crate::{Int, MatTrait};
use crate::sparse::SpMat;

// The inverse of `read_str`. Entries are written in (row, col) order.
pub fn write_str<R>(a: &SpMat<R>) -> String
where R: Int { 
    let mut res = format!("rows={}\ncols={}\n", a.nrows(), a.ncols());
    for e in a.sorted_entries().iter() { 
        res.push_str(&e.to_string());
        res.push('\n');
    }
    res
}

pub fn write<R, W>(a: &SpMat<R>, mut writer: W) -> std::io::Result<()>
where R: Int, W: Write { 
    writer.write_all(write_str(a).as_bytes())?;
    writer.flush()
}

pub fn save<R>(a: &SpMat<R>, path: &str) -> Result<(), Box<dyn std::error::Error>>
where R: Int { 
    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(path)?;
    write(a, BufWriter::new(file))?;

    info!("saved {}x{} ({} entries): {path}", a.nrows(), a.ncols(), a.nnz());

    Ok(())
}

#[cfg(test)]
mod tests { 
    use crate::io::read_str;
    use super::*;

    #[test]
    fn write() { 
        let a = SpMat::from_entries((3, 4), [
            (2, 0, 1),
            (0, 3, -2),
            (0, 1, 7),
        ]).unwrap();

        assert_eq!(write_str(&a), "\
rows=3
cols=4
(0, 1, 7)
(0, 3, -2)
(2, 0, 1)
");
    }

    #[test]
    fn write_empty() { 
        let a = SpMat::<i64>::new(0, 2);
        assert_eq!(write_str(&a), "rows=0\ncols=2\n");
    }

    #[test]
    fn round_trip() { 
        for _ in 0..10 { 
            let a = SpMat::rand((6, 9), 0.3);
            let b = read_str::<i64>(&write_str(&a)).unwrap();

            assert_eq!(a, b);
            assert!(b.is_sorted());
        }
    }

    #[test]
    fn save_and_load() { 
        let a = SpMat::from_entries((2, 5), [(1, 4, 3), (0, 0, -8)]).unwrap();
        let path = std::env::temp_dir().join(format!("coo-matrix-save-{}.txt", std::process::id()));
        let path = path.to_str().unwrap();

        save(&a, path).unwrap();
        let b = crate::io::load::<i64>(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(a, b);
    }
}
