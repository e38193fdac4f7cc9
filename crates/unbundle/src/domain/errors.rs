//! Domain-specific errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Structural problems with a bundle or with materializing its files.
///
/// A path listed in the index without a matching header is not represented
/// here; that is a normal inventory finding.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Bundle not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read bundle {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No file entries found in bundle.")]
    EmptyBundle,

    #[error("Bundle has no INDEX: marker; cannot isolate index section.")]
    IndexMarkerMissing,

    #[error("Bundle has no file headers; cannot bound index section.")]
    NoHeaders,

    #[error("refusing to write outside the extraction root: '{path}'")]
    UnsafePath { path: String },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
