//! TLS certificate probe
//!
//! Connects with a verifier that accepts any certificate; the goal is to
//! read peer certificate metadata, not to establish trust. Port 443 is
//! always tried first, then the configured list in order, stopping at the
//! first port that yields a certificate.

use crate::error::{HostHunterError, Result};
use crate::models::CertificateSummary;
use chrono::{DateTime, TimeZone, Utc};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use x509_parser::prelude::*;

/// A certificate verifier that accepts any certificate.
/// The probe only reads metadata; trust is never established.
#[derive(Debug)]
struct AcceptAnyCertVerifier;

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Certificate probe with a configurable fallback port list
pub struct CertificateProbe {
    ports: Vec<u16>,
    timeout: Duration,
}

impl CertificateProbe {
    pub fn new(ports: Vec<u16>, timeout: Duration) -> Self {
        Self { ports, timeout }
    }

    /// Probe a target, trying each candidate port until one yields a
    /// certificate. Returns the default summary when none does.
    pub async fn probe(&self, host: &str) -> CertificateSummary {
        for port in probe_order(&self.ports) {
            let host = host.to_string();
            let timeout = self.timeout;

            let attempt =
                tokio::task::spawn_blocking(move || fetch_certificate(&host, port, timeout)).await;

            match attempt {
                Ok(Ok(summary)) => return summary,
                Ok(Err(e)) => debug!("No certificate on port {}: {}", port, e),
                Err(e) => debug!("Certificate probe task failed on port {}: {}", port, e),
            }
        }

        CertificateSummary::default()
    }
}

/// Candidate ports in probe order: 443 first, then the configured list,
/// no port tried twice.
pub fn probe_order(configured: &[u16]) -> Vec<u16> {
    let mut ports = vec![443];
    for &port in configured {
        if !ports.contains(&port) {
            ports.push(port);
        }
    }
    ports
}

/// Perform a TLS handshake and read the leaf certificate. Blocking;
/// callers run this on the blocking thread pool.
fn fetch_certificate(host: &str, port: u16, timeout: Duration) -> Result<CertificateSummary> {
    let config = rustls::ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
        .with_no_client_auth();

    let server_name: ServerName<'static> = host
        .to_string()
        .try_into()
        .map_err(|_| HostHunterError::InvalidAddress(host.to_string()))?;

    let mut conn = rustls::ClientConnection::new(Arc::new(config), server_name)
        .map_err(|e| HostHunterError::Tls(format!("Failed to create TLS connection: {}", e)))?;

    let socket_addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|_| HostHunterError::InvalidAddress(host.to_string()))?;

    let mut sock = TcpStream::connect_timeout(&socket_addr, timeout).map_err(|e| {
        HostHunterError::Connection(format!("Failed to connect to {}: {}", socket_addr, e))
    })?;

    sock.set_read_timeout(Some(timeout))?;
    sock.set_write_timeout(Some(timeout))?;

    // Drive the handshake far enough to receive the peer certificates
    let mut tls = rustls::Stream::new(&mut conn, &mut sock);
    tls.flush()?;
    let mut buf = [0u8; 1];
    let _ = tls.read(&mut buf);

    let peer_certs = conn.peer_certificates().ok_or_else(|| {
        HostHunterError::Certificate("No certificates received from server".to_string())
    })?;

    let leaf = peer_certs
        .first()
        .ok_or_else(|| HostHunterError::Certificate("Empty certificate chain".to_string()))?;

    let mut summary = parse_leaf_certificate(leaf.as_ref())?;
    summary.port = Some(port);
    Ok(summary)
}

/// Extract issuer and validity from a DER-encoded certificate
fn parse_leaf_certificate(der: &[u8]) -> Result<CertificateSummary> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| {
        HostHunterError::Certificate(format!("Failed to parse certificate: {:?}", e))
    })?;

    let issuer = issuer_display_name(cert.issuer());
    let valid_from = asn1_time_to_datetime(cert.validity().not_before)?;
    let valid_to = asn1_time_to_datetime(cert.validity().not_after)?;

    Ok(CertificateSummary {
        issuer,
        valid_from: Some(valid_from),
        valid_to: Some(valid_to),
        port: None,
    })
}

/// Issuer organization, falling back to common name
fn issuer_display_name(name: &X509Name) -> Option<String> {
    let organization = name
        .iter_organization()
        .next()
        .and_then(|attr| attr.as_str().ok());
    let common_name = name
        .iter_common_name()
        .next()
        .and_then(|attr| attr.as_str().ok());

    organization.or(common_name).map(|s| s.to_string())
}

fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or_else(|| {
            HostHunterError::Certificate("Certificate validity timestamp out of range".to_string())
        })
}
