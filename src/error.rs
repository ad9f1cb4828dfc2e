//! Error types for the template-logo-eraser crate.

use std::path::PathBuf;

/// Errors that can occur while erasing the bottom strip of a template.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source image could not be opened or decoded.
    #[error("failed to load {}: {source}", path.display())]
    Load {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying decoder or I/O error.
        source: image::ImageError,
    },

    /// The modified image could not be encoded.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// An encoded image could not be written to its destination.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let write = Error::Write {
            path: PathBuf::from("public/template-news.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        let msg = write.to_string();
        assert!(msg.contains("public/template-news.png"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn load_error_names_the_path() {
        let load = Error::Load {
            path: PathBuf::from("missing.png"),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "gone",
            )),
        };
        let msg = load.to_string();
        assert!(msg.starts_with("failed to load missing.png"));
        assert!(msg.contains("gone"));
    }
}
