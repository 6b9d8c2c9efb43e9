use std::{error, fmt, io};

/// Failure of the `lw` command line: either a value it refuses, or an I/O
/// failure tagged with the step that was running.
#[derive(Debug)]
pub enum Error {
    Invalid(String),
    Io(&'static str, io::Error),
}

impl Error {
    pub fn message(&self) -> &str {
        match self {
            Error::Invalid(message) => message.as_str(),
            Error::Io(step, _) => *step,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Invalid(message) => write!(f, "{}", message),
            Error::Io(step, err) => write!(f, "{}: {}", step, err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Invalid(_) => None,
            Error::Io(_, err) => Some(err),
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Invalid(message)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Invalid(message.into())
    }
}

impl From<(&'static str, io::Error)> for Error {
    fn from((step, err): (&'static str, io::Error)) -> Self {
        Error::Io(step, err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
