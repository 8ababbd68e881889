//! Credential redaction for MySQL connection URLs

pub mod redactor;

pub use redactor::{REDACTED, RedactionInfo, Redactor, redact};
