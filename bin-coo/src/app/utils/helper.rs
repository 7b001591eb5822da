use crate::app::err::*;
use coo_matrix::MatTrait;
use coo_matrix::sparse::SpMat;
use coo_matrix::io;
use super::Int;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration) 
where F: FnOnce() -> Res { 
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

pub fn load_mat(path: &str) -> Result<SpMat<Int>, Box<dyn std::error::Error>> { 
    ensure!(std::path::Path::new(path).is_file(), "no such file: '{path}'");
    io::load::<Int>(path).or_else(|e| 
        err!("failed to load '{path}': {e}")
    )
}

// loads both operands, reading the file only once if the paths agree.
pub fn load_pair(first: &str, second: &str) -> Result<(SpMat<Int>, SpMat<Int>), Box<dyn std::error::Error>> { 
    let a = load_mat(first)?;
    let b = if first == second { 
        a.clone()
    } else { 
        load_mat(second)?
    };
    Ok((a, b))
}

pub fn mat2str(a: &SpMat<Int>, json: bool) -> Result<String, Box<dyn std::error::Error>> { 
    if json { 
        let s = serde_json::to_string(a)?;
        Ok(s)
    } else { 
        Ok(io::write_str(a))
    }
}

// writes `a` to `output` if given, otherwise returns it as the command output.
pub fn emit(a: &SpMat<Int>, output: Option<&str>, json: bool) -> Result<String, Box<dyn std::error::Error>> { 
    let text = mat2str(a, json)?;
    let Some(path) = output else { 
        return Ok(text.trim_end().to_string())
    };

    std::fs::write(path, text)?;

    let (m, n) = a.shape();
    Ok(format!("{m}x{n} matrix with {} entries written to {path}", a.nnz()))
}
