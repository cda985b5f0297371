use crate::models::CatalogueWriteError;
use std::error;
use std::fmt::{self, Display};
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub code: ErrorCode,
    source: Option<ErrorSource>,
}

#[derive(Debug)]
pub enum ErrorCode {
    CatalogueEmpty,
    IdMismatch,
    Other,
    Storage,
}

impl Error {
    pub fn new(code: ErrorCode, source: Option<ErrorSource>) -> Error {
        Error { code, source }
    }

    pub fn classify(&self) -> ErrorCategory {
        match self.code {
            ErrorCode::IdMismatch => ErrorCategory::BadRequest,
            ErrorCode::CatalogueEmpty | ErrorCode::Other | ErrorCode::Storage => {
                ErrorCategory::Internal
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&format!("code={:?}, source={:?}", self.code, self.source))
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.source {
            Some(ref e) => Some(e),
            None => None,
        }
    }
}

impl From<CatalogueWriteError> for Error {
    fn from(e: CatalogueWriteError) -> Self {
        match e {
            CatalogueWriteError::Storage(_) => Error::new(ErrorCode::Storage, Some(e.into())),
        }
    }
}

#[derive(Debug)]
pub enum ErrorSource {
    Catalogue(CatalogueWriteError),
}

impl Display for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorSource::Catalogue(ref e) => Display::fmt(e, f),
        }
    }
}

impl error::Error for ErrorSource {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ErrorSource::Catalogue(e) => Some(e),
        }
    }
}

impl From<CatalogueWriteError> for ErrorSource {
    fn from(e: CatalogueWriteError) -> Self {
        ErrorSource::Catalogue(e)
    }
}

pub enum ErrorCategory {
    BadRequest,
    Internal,
}
