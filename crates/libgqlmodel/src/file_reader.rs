use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Reads a schema file into a UTF-8 string.
pub fn read_schema_file<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::NotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadContentError::Io {
        file_path: file_path.to_path_buf(),
        err,
    })?;

    String::from_utf8(bytes).map_err(|err| ReadContentError::InvalidUtf8 {
        file_path: file_path.to_path_buf(),
        err,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ReadContentError {
    #[error("Schema file {file_path:?} is not valid UTF-8: {err}")]
    InvalidUtf8 {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Unable to read schema file {file_path:?}: {err}")]
    Io {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Schema path {0:?} does not point at a file")]
    NotAFile(PathBuf),
}
impl ReadContentError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::InvalidUtf8 { file_path, .. }
            | Self::Io { file_path, .. }
            | Self::NotAFile(file_path) => file_path.as_path(),
        }
    }
}
