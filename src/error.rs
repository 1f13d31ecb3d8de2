use std::path::PathBuf;

/// Errors produced by the try-on library.
#[derive(Debug, thiserror::Error)]
pub enum TryOnError {
    #[error("no image was provided")]
    EmptyImage,

    #[error("image is not a valid data URL: {0}")]
    MalformedImage(String),

    #[error("image is {size} bytes, the limit is {limit} bytes")]
    ImageTooLarge { size: usize, limit: usize },

    #[error("the upload is larger than the {limit} byte image limit")]
    UploadTooLarge { limit: usize },

    #[error("the upload could not be read: {0}")]
    UnreadableUpload(String),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    #[error("failed to read settings from {}", path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings from {}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = TryOnError> = std::result::Result<T, E>;
