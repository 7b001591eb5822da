// error raised by the command line layer itself. 
// errors from `coo_matrix` are passed through as they are.
#[derive(Debug, derive_more::Display)]
#[display("{msg}")]
pub struct Error { 
    pub msg: String
}

impl Error { 
    pub fn new<S>(msg: S) -> Self
    where S: Into<String> { 
        Self { msg: msg.into() }
    }
}

impl std::error::Error for Error {}

macro_rules! err {
    ($($arg:tt)*) => {{
        use crate::app::err::*;
        let e = Error::new(format!($($arg)*));
        Err( e.into() )
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond { 
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
