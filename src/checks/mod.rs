//! Per-target network checks
//!
//! Each checker gathers one slice of information about a target address:
//! reverse-DNS hostnames, TLS certificate metadata, HTTP response headers.
//! All of them degrade to an empty/default record on failure; a check never
//! aborts the batch.

pub mod certificate;
pub mod dns;
pub mod headers;

pub use certificate::CertificateProbe;
pub use dns::ReverseDnsChecker;
pub use headers::HeaderChecker;
