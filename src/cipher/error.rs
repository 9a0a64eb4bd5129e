// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for cipher collaborators.

/// Errors a [`SymmetricCipher`](super::SymmetricCipher) may report.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CipherError {
    /// The key or password does not match the one used to encrypt.
    ///
    /// Detected through the integrity tag embedded in the ciphertext, so a
    /// wrong key never yields garbage plaintext.
    #[error("Wrong key or password")]
    WrongKey,

    /// The ciphertext token is not in the expected layout.
    #[error("Malformed ciphertext: {0}")]
    Malformed(String),

    /// Any other failure inside the cipher implementation.
    #[error("Cipher failure: {0}")]
    Internal(String),
}

impl CipherError {
    /// Returns `true` when decryption failed because of the key.
    pub fn is_wrong_key(&self) -> bool {
        matches!(self, Self::WrongKey)
    }
}

/// Result type for cipher operations
pub type CipherResult<T> = std::result::Result<T, CipherError>;
