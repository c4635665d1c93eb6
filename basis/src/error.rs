use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("atomic number {0} is not supported (expected 1..={max})", max = crate::element::MAX_ATOMIC_NUMBER)]
    UnsupportedElement(i64),

    #[error("'{0}' is not a known element symbol")]
    UnknownSymbol(String),

    #[error("inconsistent basis record for '{symbol}': {reason}")]
    InconsistentBasisRecord { symbol: String, reason: String },

    #[error("no '{basis}' basis set available for element '{symbol}'")]
    MissingBasis { symbol: String, basis: String },

    #[error("angular momentum l = {0} is beyond the supported shells")]
    UnsupportedAngularMomentum(u32),

    #[error("cannot lay out {len} values as a {rows}x{cols} row-major matrix")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to decode JSON basis data: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("pickle serialization failed: {source}")]
    Pickle {
        #[from]
        source: serde_pickle::Error,
    },
}

impl Error {
    pub(crate) fn inconsistent(symbol: &str, reason: impl Into<String>) -> Self {
        Self::InconsistentBasisRecord {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
