use std::fmt;

/// The error type returned by fallible [`Trie`](crate::Trie) operations.
#[derive(Debug)]
pub enum Error {
    /// The supplied network or address belongs to a different address
    /// family than the trie itself.
    VersionMismatch,
    /// The supplied network was malformed (out-of-range prefix length, or
    /// a parse failure upstream in [`ip`]).
    InvalidNetwork(ip::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VersionMismatch => {
                write!(f, "network or address does not match the trie's address family")
            }
            Self::InvalidNetwork(err) => write!(f, "invalid network: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::VersionMismatch => None,
            Self::InvalidNetwork(err) => Some(err),
        }
    }
}

impl From<ip::Error> for Error {
    fn from(err: ip::Error) -> Self {
        Self::InvalidNetwork(err)
    }
}
