use aes_gcm::{
	Aes256Gcm as Gcm,
	aead::{AeadInPlace as _, KeyInit as _},
};

use super::{Error, Key};

/// Identifier of the AEAD construction this crate uses.
pub const ALGORITHM: &str = "aes-256-gcm";

/// Key length required by [`ALGORITHM`], in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Nonce length required by [`ALGORITHM`], in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Authentication tag length produced by [`ALGORITHM`], in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// The AEAD primitive that [`encrypt`](super::encrypt) and [`decrypt`](super::decrypt) drive.
///
/// The codec itself only ever needs "seal" and "open"; everything cipher-specific lives
/// behind this trait, so swapping the underlying library out (say, for a platform with a
/// hardware AES engine) doesn't touch the rest of the crate.
pub trait AeadPrimitive {
	/// Encrypt `plaintext` and authenticate it together with `aad`, returning the
	/// ciphertext (same length as the plaintext) and the detached authentication tag.
	///
	/// # Errors
	///
	/// Will return [`Error::Encryption`] in the (extremely unlikely) event the cipher
	/// itself fails.
	fn seal(
		key: &Key,
		nonce: &[u8; NONCE_LEN],
		aad: &[u8],
		plaintext: &[u8],
	) -> Result<(Vec<u8>, [u8; TAG_LEN]), Error>;

	/// Verify `tag` over `aad` and `ciphertext`, and decrypt if and only if it matches.
	///
	/// # Errors
	///
	/// Will return [`Error::Decryption`] if the tag does not match; no plaintext is
	/// released in that case.
	fn open(
		key: &Key,
		nonce: &[u8; NONCE_LEN],
		aad: &[u8],
		ciphertext: &[u8],
		tag: &[u8; TAG_LEN],
	) -> Result<Vec<u8>, Error>;
}

/// AES-256-GCM, as supplied by the RustCrypto `aes-gcm` crate.
///
/// The tag comparison inside `open` is constant-time; this crate never compares tags
/// itself.
pub struct Aes256Gcm;

impl AeadPrimitive for Aes256Gcm {
	fn seal(
		key: &Key,
		nonce: &[u8; NONCE_LEN],
		aad: &[u8],
		plaintext: &[u8],
	) -> Result<(Vec<u8>, [u8; TAG_LEN]), Error> {
		let cipher = Gcm::new(key.expose_secret().into());
		let mut buffer = plaintext.to_vec();

		let tag = cipher
			.encrypt_in_place_detached(nonce.into(), aad, &mut buffer)
			.map_err(|_| Error::Encryption)?;

		Ok((buffer, tag.into()))
	}

	fn open(
		key: &Key,
		nonce: &[u8; NONCE_LEN],
		aad: &[u8],
		ciphertext: &[u8],
		tag: &[u8; TAG_LEN],
	) -> Result<Vec<u8>, Error> {
		let cipher = Gcm::new(key.expose_secret().into());
		let mut buffer = ciphertext.to_vec();

		cipher
			.decrypt_in_place_detached(nonce.into(), aad, &mut buffer, tag.into())
			.map_err(|_| Error::Decryption)?;

		Ok(buffer)
	}
}
