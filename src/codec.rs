use rand::{RngCore, rng};
use std::fmt::Debug;

use super::{
	CipherBundle, Error, Key,
	cipher::{AeadPrimitive as _, Aes256Gcm, NONCE_LEN},
};

/// Encrypt secret data, binding it to the supplied AAD.
///
/// A fresh random nonce is drawn for every call -- nonce reuse under the same key is
/// catastrophic for GCM, so there is deliberately no way to supply your own.  The
/// returned bundle authenticates both the ciphertext and the exact AAD bytes, so the
/// same AAD (see [`aad`](super::aad)) must be presented again at decryption time.
///
/// # Errors
///
/// Will return [`Error::Encryption`] in the (extremely unlikely) event the cipher
/// itself fails.
#[tracing::instrument(level = "debug", skip(plaintext, key))]
pub fn encrypt(
	plaintext: impl AsRef<[u8]>,
	aad: impl AsRef<[u8]> + Debug,
	key: &Key,
) -> Result<CipherBundle, Error> {
	let mut nonce = [0u8; NONCE_LEN];
	rng().fill_bytes(&mut nonce);

	let (ciphertext, auth_tag) = Aes256Gcm::seal(key, &nonce, aad.as_ref(), plaintext.as_ref())?;

	Ok(CipherBundle {
		nonce,
		ciphertext,
		auth_tag,
	})
}

/// Decrypt a [`CipherBundle`], verifying it against the supplied AAD.
///
/// # Errors
///
/// Will return [`Error::Decryption`] if the nonce, ciphertext, tag, AAD, or key differ
/// in any way from the values used at encryption time.  Which one was wrong is
/// deliberately not reported, and no plaintext is released.  Don't retry: the failure
/// is not transient, the data is simply not what it claims to be.
#[tracing::instrument(level = "debug", skip(bundle, key))]
pub fn decrypt(
	bundle: &CipherBundle,
	aad: impl AsRef<[u8]> + Debug,
	key: &Key,
) -> Result<Vec<u8>, Error> {
	Aes256Gcm::open(
		key,
		&bundle.nonce,
		aad.as_ref(),
		&bundle.ciphertext,
		&bundle.auth_tag,
	)
}
