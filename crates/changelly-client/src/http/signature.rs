/*
[INPUT]:  Serialized request body and API secret
[OUTPUT]: Hex HMAC-SHA512 signature for the `sign` header
[POS]:    HTTP layer - request signing for every RPC call
[UPDATE]: When changing signing algorithm or header format
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::http::{ChangellyError, Result};

pub type HmacSha512 = Hmac<Sha512>;

/// Signs request bodies with the account's API secret.
///
/// The key is absorbed into the HMAC state at construction; the raw secret
/// is not kept.
#[derive(Clone)]
pub struct RequestSigner {
    mac: HmacSha512,
}

impl RequestSigner {
    /// Create a new request signer keyed by the API secret
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self> {
        let mac = HmacSha512::new_from_slice(secret.as_ref())
            .map_err(|err| ChangellyError::Config(format!("invalid signing key: {err}")))?;
        Ok(Self { mac })
    }

    /// Sign the exact bytes that go on the wire.
    ///
    /// Returns lowercase hex of HMAC-SHA512(secret, body).
    pub fn sign(&self, body: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Check a signature against a body in constant time
    pub fn verify(&self, body: &[u8], signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(body);
        mac.verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
