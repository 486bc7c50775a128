use std::path::PathBuf;
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkinError>;

#[derive(Debug, Error)]
pub enum SkinError {
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SkinError {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        SkinError::Io { path: path.to_path_buf(), source }
    }
}
