use std::error;
use std::fmt::{self, Display};
use std::result;

pub type Result<T> = result::Result<T, Error>;

/// Failure raised by a joke store. `Io` covers the backing medium,
/// `Malformed` covers a joke record that does not parse.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Malformed(serde_json::error::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref e) => write!(f, "joke store I/O failure: {}", e),
            Error::Malformed(ref e) => write!(f, "malformed joke record: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            Error::Malformed(ref e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<serde_json::error::Error> for Error {
    fn from(value: serde_json::error::Error) -> Self {
        Error::Malformed(value)
    }
}
