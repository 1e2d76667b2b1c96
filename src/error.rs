use core::fmt::{Display, Formatter};

pub type Result<T> = core::result::Result<T, Error>;

/// Scalar kind targeted by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Nullable 64-bit signed integer.
    Integer,

    /// Nullable text.
    Text,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Kind::Integer => write!(f, "integer"),
            Kind::Text => write!(f, "text"),
        }
    }
}

/// Error type for codec operations.
///
/// Only the decoding directions can fail: parsing JSON text and
/// populating a value from a scanned database column.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON input is neither `null` nor a valid literal of the kind.
    #[error("invalid JSON for nullable {kind}: {source}")]
    Parse {
        kind: Kind,
        #[source]
        source: serde_json::Error,
    },

    /// Scanned value cannot be coerced to the kind.
    #[error("cannot convert {found} to nullable {kind}")]
    Conversion { kind: Kind, found: &'static str },
}

impl Error {
    /// Returns the kind the failed conversion was targeting.
    pub fn kind(&self) -> Kind {
        match self {
            Error::Parse { kind, .. } | Error::Conversion { kind, .. } => *kind,
        }
    }
}
