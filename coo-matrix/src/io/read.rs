use std::io::Read;
use std::str::FromStr;
use log::{info, trace};
use regex::Regex;
use crate::{Int, MatError};
use crate::sparse::SpMat;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dims { 
    pub rows: usize,
    pub cols: usize,
}

pub fn load<R>(path: &str) -> Result<SpMat<R>, Box<dyn std::error::Error>>
where R: Int { 
    info!("load: {path}");
    let text = std::fs::read_to_string(path)?;
    let a = read_str(&text)?;
    Ok(a)
}

pub fn read<R, T>(mut reader: T) -> Result<SpMat<R>, Box<dyn std::error::Error>>
where R: Int, T: Read { 
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let a = read_str(&text)?;
    Ok(a)
}

// Reads
//
//   rows=<int>
//   cols=<int>
//   (<row>, <col>, <value>)
//   ...
//
// Entries outside of the declared shape are dropped.
pub fn read_str<R>(input: &str) -> Result<SpMat<R>, MatError>
where R: Int { 
    let mut lines = input.lines().enumerate().map(|(k, l)| 
        (k + 1, l.trim())
    ).filter(|(_, l)| !l.is_empty());

    let eof = input.lines().count() + 1;
    let mut header = [(); 2].map(|_| lines.next().unwrap_or((eof, "")));
    header.sort_by_key(|(_, l)| !l.starts_with("rows"));

    let dims = parse_header(header)?;
    let mut a = SpMat::new(dims.rows, dims.cols);

    let parser = EntryParser::new();
    let mut count = 0;
    let mut skipped = 0;

    for (n, line) in lines { 
        let (i, j, r) = parser.parse::<R>(n, line)?;
        count += 1;

        let res = match (usize::try_from(i), usize::try_from(j)) { 
            (Ok(i), Ok(j)) => a.insert(i, j, r).map_err(|e| e.to_string()),
            _ => Err(format!("negative matrix position ({i}, {j})"))
        };

        if let Err(msg) = res { 
            trace!("line {n}: {msg}, skipped.");
            skipped += 1;
        }
    }

    info!("read {}x{}: {count} entries, {} stored, {skipped} skipped.", dims.rows, dims.cols, a.nnz());

    Ok(a)
}

fn parse_header(lines: [(usize, &str); 2]) -> Result<Dims, MatError> { 
    let r = Regex::new(r"^(\w*)\s*=\s*(.*)$").unwrap();
    let mut dims = [None, None];

    for (key, (n, line)) in Iterator::zip(["rows", "cols"].into_iter(), lines) { 
        let Some(m) = r.captures(line) else { 
            return Err(MatError::malformed(n, format!("expected `{key}=<int>`, found '{line}'")))
        };

        if &m[1] != key { 
            return Err(MatError::malformed(n, format!("expected `{key}`, found '{}'", &m[1])))
        }

        let Ok(d) = usize::from_str(m[2].trim()) else { 
            return Err(MatError::malformed(n, format!("invalid dimension '{}'", &m[2])))
        };

        dims[if key == "rows" { 0 } else { 1 }] = Some(d);
    }

    let [Some(rows), Some(cols)] = dims else { 
        unreachable!()
    };

    Ok(Dims { rows, cols })
}

struct EntryParser { 
    regex: Regex
}

impl EntryParser { 
    fn new() -> Self { 
        let regex = Regex::new(r"^\((.*)\)$").unwrap();
        Self { regex }
    }

    fn parse<R>(&self, n: usize, line: &str) -> Result<(isize, isize, R), MatError>
    where R: FromStr { 
        let Some(m) = self.regex.captures(line) else { 
            return Err(MatError::malformed(n, format!("expected `(<row>, <col>, <value>)`, found '{line}'")))
        };

        let tokens: Vec<_> = m[1].split(',').map(|s| s.trim()).collect();
        let &[i, j, r] = &tokens[..] else { 
            return Err(MatError::malformed(n, format!("expected 3 values, found {}", tokens.len())))
        };

        Ok((
            Self::parse_token(n, i)?, 
            Self::parse_token(n, j)?, 
            Self::parse_token(n, r)?
        ))
    }

    fn parse_token<T>(n: usize, token: &str) -> Result<T, MatError>
    where T: FromStr { 
        T::from_str(token).map_err(|_| 
            MatError::malformed(n, format!("'{token}' is not an integer"))
        )
    }
}
