use crate::errors::{DeployError, DeployResult};
use ed25519_dalek::SigningKey;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::path::Path;

/// ed25519 key pair in the SDK's JSON layout: `{"public": "<hex>", "secret": "<hex>"}`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub public: String,
    pub secret: String,
}

impl KeyPair {
    pub fn new<P: Into<String>, S: Into<String>>(public: P, secret: S) -> Self {
        Self {
            public: public.into(),
            secret: secret.into(),
        }
    }

    /// Derives the public half from a 32-byte hex secret
    pub fn from_secret_hex(secret: &str) -> DeployResult<Self> {
        let signing_key = SigningKey::from_bytes(&decode_key_half("secret", secret)?);
        Ok(Self::new(hex::encode(signing_key.verifying_key().to_bytes()), secret.to_lowercase()))
    }

    /// Checks both halves are 32-byte hex and `public` belongs to `secret`
    pub fn validate(&self) -> DeployResult<()> {
        let public = decode_key_half("public", &self.public)?;
        let secret = decode_key_half("secret", &self.secret)?;
        let derived = SigningKey::from_bytes(&secret).verifying_key().to_bytes();
        if derived != public {
            return Err(DeployError::InvalidKeys(format!(
                "public key {} doesn't match the secret key",
                self.public
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> DeployResult<Self> {
        let keys: KeyPair = serde_json::from_str(json)?;
        keys.validate()?;
        Ok(keys)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> DeployResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DeployError::KeysFileMissing(path.to_path_buf()));
        }
        log::debug!("Reading keys from {}", path.display());
        KeyPair::from_json(&std::fs::read_to_string(path)?)
    }
}

// secret must never reach the logs
impl Debug for KeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair").field("public", &self.public).field("secret", &"***").finish()
    }
}

fn decode_key_half(name: &str, value: &str) -> DeployResult<[u8; 32]> {
    let bytes = hex::decode(value).map_err(|err| DeployError::InvalidKeys(format!("{name}: {err}")))?;
    match bytes.try_into() {
        Ok(key) => Ok(key),
        Err(bytes) => Err(DeployError::InvalidKeys(format!("{name}: expected 32 bytes, got {}", bytes.len()))),
    }
}
