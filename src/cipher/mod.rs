// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Interface of a password-based symmetric cipher.
//!
//! Niihau does not ship a cipher. Callers that pair a prefix trie with an
//! encryption helper (for example to seal the values a route resolves to)
//! program against [`SymmetricCipher`], and the helper they plug in must
//! honour this contract:
//!
//! - every ciphertext embeds a fresh random initialization vector, so
//!   encrypting the same plaintext twice gives different tokens;
//! - every ciphertext carries a content-integrity tag, so decrypting with the
//!   wrong key fails with [`CipherError::WrongKey`] rather than returning
//!   garbage;
//! - other failures are reported as [`CipherError::Malformed`] or
//!   [`CipherError::Internal`].

mod error;

pub use error::{CipherError, CipherResult};

/// Key material accepted by a cipher.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// A raw symmetric key.
    Raw(Vec<u8>),

    /// A salt and password from which the key is derived.
    Password {
        /// Salt fed to the key derivation function
        salt: String,
        /// Secret password
        password: String,
    },
}

impl KeyMaterial {
    /// Creates key material from a raw key.
    pub fn raw<K: Into<Vec<u8>>>(key: K) -> Self {
        Self::Raw(key.into())
    }

    /// Creates key material from a salt and a password.
    pub fn password<S: Into<String>, P: Into<String>>(salt: S, password: P) -> Self {
        Self::Password {
            salt: salt.into(),
            password: password.into(),
        }
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw(key) => f.debug_tuple("Raw").field(&format_args!("{} bytes", key.len())).finish(),
            Self::Password { salt, .. } => f
                .debug_struct("Password")
                .field("salt", salt)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// A symmetric cipher producing self-describing ciphertext tokens.
#[cfg_attr(test, mockall::automock)]
pub trait SymmetricCipher: Send + Sync {
    /// Encrypts `plaintext` into a token that embeds the IV and integrity tag.
    fn encrypt(&self, key: &KeyMaterial, plaintext: &str) -> CipherResult<String>;

    /// Decrypts a token produced by [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// [`CipherError::WrongKey`] when `key` differs from the encryption key.
    fn decrypt(&self, key: &KeyMaterial, ciphertext: &str) -> CipherResult<String>;
}
