use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer ended before a declared field or section was complete.
    OutOfData { needed: usize, remaining: usize },
    /// The payload is not decodable: bad base64 alphabet, unrecognized link
    /// shape, or a mandatory version/class field outside the dialect's range.
    InvalidEncoding(String),
}

impl CodecError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidEncoding(message.into())
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfData { needed, remaining } => {
                write!(f, "payload too short: needed {needed} bytes, {remaining} remaining")
            }
            Self::InvalidEncoding(message) => write!(f, "invalid encoding: {message}"),
        }
    }
}

impl Error for CodecError {}

/// Non-fatal conditions observed while importing a link. The decode still
/// produces a usable selection; callers decide whether to surface these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportIssue {
    UnknownTreeVersion { major: u16, code: u16 },
}

impl fmt::Display for ImportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnknownTreeVersion { major, code } => {
                write!(f, "unrecognized tree version code {major}/{code}")
            }
        }
    }
}
