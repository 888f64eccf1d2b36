use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum XxError {
    #[error("line {line}: cannot decode {hex:?} as hex")]
    UndecodableLine { line: usize, hex: String },
    #[error("cannot read input {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot open config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl XxError {
    /// Process exit status for this kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UndecodableLine { .. } => 3,
            Self::WriteOutput { .. } => 2,
            Self::ReadInput { .. } | Self::ReadConfig { .. } | Self::ParseConfig { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, XxError>;
