use std::{error, fmt, io};

type Source = Box<dyn error::Error + Send + Sync>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Reading the snapshot or writing the exposition failed.
    Io,
    /// The snapshot could not be decoded.
    Input,
    /// A metric family broke the naming or labeling rules.
    Invalid,
    Other,
}

pub struct Error {
    kind: ErrorKind,
    message: String,
    source: Option<Source>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn invalid<M: Into<String>>(message: M) -> Self {
        Self {
            kind: ErrorKind::Invalid,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source<E>(kind: ErrorKind, message: &str, err: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} error: {}", self.kind, self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(err) => write!(f, "{}: {}", self.message, err),
            None => write!(f, "{}", self.message),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.source {
            Some(ref err) => Some(&**err),
            None => None,
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self {
            kind: ErrorKind::Other,
            message,
            source: None,
        }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(ErrorKind::Other, message)
    }
}

impl From<(&str, io::Error)> for Error {
    fn from((message, err): (&str, io::Error)) -> Self {
        Self::with_source(ErrorKind::Io, message, err)
    }
}

impl From<(&str, serde_json::Error)> for Error {
    fn from((message, err): (&str, serde_json::Error)) -> Self {
        let kind = if err.is_io() {
            ErrorKind::Io
        } else {
            ErrorKind::Input
        };
        Self::with_source(kind, message, err)
    }
}

impl From<(&str, chrono::ParseError)> for Error {
    fn from((message, err): (&str, chrono::ParseError)) -> Self {
        Self::with_source(ErrorKind::Input, message, err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::with_source(ErrorKind::Io, "I/O failure", err)
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        format!("{}", err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_keep_their_kind() {
        let err: Error = ("writing exposition failed", io::Error::from(io::ErrorKind::BrokenPipe)).into();
        assert_eq!(ErrorKind::Io, err.kind());
        assert!(error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("writing exposition failed: "));
    }

    #[test]
    fn test_plain_messages() {
        let err: Error = "boom".into();
        assert_eq!(ErrorKind::Other, err.kind());
        assert_eq!("boom", err.message());
        assert_eq!("boom", String::from(err));
    }

    #[test]
    fn test_json_errors_are_input_errors() {
        let json_err = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        let err: Error = ("decoding snapshot failed", json_err).into();
        assert_eq!(ErrorKind::Input, err.kind());
    }
}
