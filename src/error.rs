//! Unified error types for hosthunter

use thiserror::Error;

/// Main error type for hosthunter operations
#[derive(Error, Debug)]
pub enum HostHunterError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("IP ranges are not supported: {0}")]
    CidrNotSupported(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("Certificate error: {0}")]
    Certificate(String),

    #[error("DNS error: {0}")]
    Dns(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("File error: {0}")]
    File(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl From<rustls::Error> for HostHunterError {
    fn from(err: rustls::Error) -> Self {
        HostHunterError::Tls(err.to_string())
    }
}

impl From<x509_parser::error::X509Error> for HostHunterError {
    fn from(err: x509_parser::error::X509Error) -> Self {
        HostHunterError::Certificate(err.to_string())
    }
}

impl From<hickory_resolver::error::ResolveError> for HostHunterError {
    fn from(err: hickory_resolver::error::ResolveError) -> Self {
        HostHunterError::Dns(err.to_string())
    }
}

impl From<serde_json::Error> for HostHunterError {
    fn from(err: serde_json::Error) -> Self {
        HostHunterError::Output(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HostHunterError>;
