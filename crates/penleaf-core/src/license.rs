//! License key handling
//!
//! A license key is a PEM-style envelope around a base64-encoded JSON
//! payload. The key is set once per process, before any document work, and
//! is never reset. Saving through the facade crate requires a key to be set.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::error::{Error, Result};

const KEY_HEADER: &str = "-----BEGIN PENLEAF LICENSE KEY-----";
const KEY_FOOTER: &str = "-----END PENLEAF LICENSE KEY-----";

static LICENSE: OnceCell<LicenseKey> = OnceCell::new();

/// A parsed license key payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LicenseKey {
    pub license_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub tier: String,
    /// Issue time (unix seconds)
    pub created_at: i64,
    /// Expiry time (unix seconds); enforced for trial keys
    pub expires_at: i64,
    #[serde(default)]
    pub trial: bool,
}

impl LicenseKey {
    /// Parse a key from its envelope form
    pub fn parse(key: &str) -> Result<Self> {
        let key = key.trim();
        let start = key
            .find(KEY_HEADER)
            .ok_or_else(|| Error::License("missing key header".into()))?;
        let end = key
            .find(KEY_FOOTER)
            .ok_or_else(|| Error::License("missing key footer".into()))?;
        if end < start {
            return Err(Error::License("malformed key envelope".into()));
        }

        let body: String = key[start + KEY_HEADER.len()..end]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if body.is_empty() {
            return Err(Error::License("empty key body".into()));
        }

        let raw = BASE64
            .decode(body.as_bytes())
            .map_err(|e| Error::License(format!("undecodable key body: {}", e)))?;

        serde_json::from_slice(&raw)
            .map_err(|e| Error::License(format!("invalid key payload: {}", e)))
    }

    /// Check the key against the claimed customer and the clock
    pub fn verify(&self, customer_name: &str) -> Result<()> {
        if self.customer_name != customer_name {
            return Err(Error::License(format!(
                "key issued to '{}', not '{}'",
                self.customer_name, customer_name
            )));
        }
        if self.trial && Utc::now().timestamp() > self.expires_at {
            return Err(Error::License("trial key has expired".into()));
        }
        Ok(())
    }
}

/// Set the process-wide license key
///
/// Must be called before any save. Calling again with the same key is a
/// no-op; a conflicting key is an error (the key is never reset).
pub fn set_license_key(key: &str, customer_name: &str) -> Result<()> {
    let parsed = LicenseKey::parse(key)?;
    parsed.verify(customer_name)?;

    match LICENSE.get() {
        None => {
            // A racing set with an identical key is fine either way.
            let _ = LICENSE.set(parsed);
            Ok(())
        }
        Some(existing) if *existing == parsed => Ok(()),
        Some(_) => Err(Error::License("a different license key is already set".into())),
    }
}

/// The license key set for this process, if any
pub fn license() -> Option<&'static LicenseKey> {
    LICENSE.get()
}

/// Error unless a license key has been set
pub fn ensure_licensed() -> Result<()> {
    if LICENSE.get().is_some() {
        Ok(())
    } else {
        Err(Error::License(
            "no license key set; call set_license_key before saving".into(),
        ))
    }
}
