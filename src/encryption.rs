// Strategy: the encryptor delegates to whichever transform was set last.

use std::io::{self, Write};
use std::rc::Rc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use crate::error::EncryptionError;

/// Key used by [`XorEncryption::default`].
pub const XOR_KEY: u8 = 0x5A;

pub trait EncryptionStrategy {
    fn encrypt(&self, text: &str) -> String;
    fn name(&self) -> &'static str;
}

// ============================================================================
// Strategies
// ============================================================================

/// Standard padded Base64 of the UTF-8 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Encryption;

impl EncryptionStrategy for Base64Encryption {
    fn encrypt(&self, text: &str) -> String {
        STANDARD.encode(text.as_bytes())
    }

    fn name(&self) -> &'static str {
        "Base64"
    }
}

/// XOR every UTF-8 byte with `key`, then Base64 the result.
#[derive(Debug, Clone, Copy)]
pub struct XorEncryption {
    key: u8,
}

impl XorEncryption {
    pub fn key(&self) -> u8 {
        self.key
    }
}

impl Default for XorEncryption {
    fn default() -> Self {
        Self { key: XOR_KEY }
    }
}

pub fn xor_bytes(bytes: &[u8], key: u8) -> Vec<u8> {
    bytes.iter().map(|b| b ^ key).collect()
}

impl EncryptionStrategy for XorEncryption {
    fn encrypt(&self, text: &str) -> String {
        STANDARD.encode(xor_bytes(text.as_bytes(), self.key))
    }

    fn name(&self) -> &'static str {
        "XOR"
    }
}

/// Reverses UTF-16 code units, not characters. A surrogate pair comes out
/// split and each half is replaced by U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseEncryption;

impl EncryptionStrategy for ReverseEncryption {
    fn encrypt(&self, text: &str) -> String {
        let mut units: Vec<u16> = text.encode_utf16().collect();
        units.reverse();
        String::from_utf16_lossy(&units)
    }

    fn name(&self) -> &'static str {
        "Reverse"
    }
}

/// Names a strategy in the demo scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Base64,
    Xor,
    Reverse,
}

impl StrategyKind {
    pub fn strategy(self) -> Rc<dyn EncryptionStrategy> {
        match self {
            StrategyKind::Base64 => Rc::new(Base64Encryption),
            StrategyKind::Xor => Rc::new(XorEncryption::default()),
            StrategyKind::Reverse => Rc::new(ReverseEncryption),
        }
    }
}

// ============================================================================
// Context
// ============================================================================

#[derive(Default)]
pub struct Encryptor {
    strategy: Option<Rc<dyn EncryptionStrategy>>,
}

impl Encryptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strategy(&mut self, strategy: Rc<dyn EncryptionStrategy>) {
        tracing::debug!(strategy = strategy.name(), "strategy set");
        self.strategy = Some(strategy);
    }

    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    pub fn try_encrypt(&self, text: &str) -> Result<String, EncryptionError> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or(EncryptionError::StrategyNotSet)?;
        tracing::debug!(strategy = strategy.name(), len = text.len(), "encrypting");
        Ok(strategy.encrypt(text))
    }

    /// Write the original and transformed text, or the notice when no
    /// strategy has been set.
    pub fn encrypt_data(&self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        match self.try_encrypt(text) {
            Ok(encrypted) => {
                writeln!(out, "Original: {text}")?;
                writeln!(out, "Encrypted: {encrypted}")
            }
            Err(err) => {
                tracing::debug!("{err}");
                writeln!(out, "{err}")
            }
        }
    }
}
