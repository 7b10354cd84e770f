//! Authenticated encryption for data at rest, with canonical context binding.
//!
//! If you want to encrypt a blob under a symmetric key, store it somewhere, and later
//! get it back *knowing* that nobody has tampered with it or quietly swapped it for a
//! different record's blob, this crate is for you.  Encryption is AES-256-GCM, an AEAD
//! cipher: the ciphertext comes with an authentication tag that covers both the
//! ciphertext and whatever Additional Authenticated Data (AAD) you supply, and
//! decryption fails outright unless everything still matches.
//!
//! The AAD is what binds a ciphertext to its *context*.  Say you're encrypting a column
//! in a database: if you authenticate the row's owner and purpose along with the data,
//! then an attacker with write access to the database can't move the blob to a
//! different row and have it decrypt there.  [This Security StackExchange
//! answer](https://security.stackexchange.com/a/179279/167630) is an excellent
//! explanation of why an encryption context is useful.
//!
//! Contexts are usually assembled from a handful of fields, and the same bytes must be
//! presented at encryption and decryption time, so [`aad`] canonicalizes a flat record
//! into deterministic bytes: keys sorted, compact JSON, UTF-8.  Build the record in any
//! order on either side and the bytes come out identical.
//!
//! [`encrypt`] returns a [`CipherBundle`] of nonce, ciphertext, and tag; all three go
//! back into [`decrypt`], alongside the AAD and the key.  For stashing a bundle in
//! JSON-ish storage there is a base64 [`TransportBundle`] form that round-trips
//! losslessly and tolerates any extra metadata fields you staple on.
//!
//! Keys are yours to manage: this crate never creates (outside of [`generate_key`],
//! for tests and experiments), stores, or rotates them.
//!
//! # Example
//!
//! ```rust
//! use data_at_rest::{Error, aad, decrypt, encrypt};
//! use serde_json::json;
//! # fn main() -> Result<(), Error> {
//!
//! let key = data_at_rest::generate_key();
//!
//! let context = aad(&json!({ "owner": "user-31337", "purpose": "api-credentials" }))?;
//! let bundle = encrypt(b"hunter2", &context, &key)?;
//!
//! // The same context decrypts...
//! assert_eq!(b"hunter2".to_vec(), decrypt(&bundle, &context, &key)?);
//!
//! // ...a different one does not
//! let wrong = aad(&json!({ "owner": "user-1", "purpose": "api-credentials" }))?;
//! assert!(matches!(decrypt(&bundle, &wrong, &key), Err(Error::Decryption)));
//! # Ok(())
//! # }
//! ```
mod aad;
mod bundle;
mod cipher;
mod codec;
mod error;
mod key;

pub use aad::aad;
pub use bundle::{CipherBundle, TransportBundle};
pub use cipher::{ALGORITHM, AeadPrimitive, Aes256Gcm, KEY_LEN, NONCE_LEN, TAG_LEN};
pub use codec::{decrypt, encrypt};
pub use error::Error;
pub use key::{Key, generate_key};
