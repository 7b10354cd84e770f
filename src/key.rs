use secrecy::ExposeSecret as _;

use super::{Error, cipher::KEY_LEN};

/// A key used for encrypting and decrypting data at rest.
///
/// The key material is wrapped in a [`secrecy::SecretBox`], so it won't end up in debug
/// output or accidental copies.  This crate never creates, stores, or rotates keys on your
/// behalf; you obtain the 32 bytes from wherever you keep your keys, and hand them over
/// with [`Key::try_from`].
#[derive(Debug)]
pub struct Key(secrecy::SecretBox<[u8; KEY_LEN]>);

impl Key {
	pub fn new(k: [u8; KEY_LEN]) -> Self {
		Box::new(k).into()
	}

	pub fn expose_secret(&self) -> &[u8; KEY_LEN] {
		self.0.expose_secret()
	}
}

impl Clone for Key {
	fn clone(&self) -> Self {
		Self(Box::new(*self.expose_secret()).into())
	}
}

impl From<[u8; KEY_LEN]> for Key {
	fn from(k: [u8; KEY_LEN]) -> Self {
		Key::new(k)
	}
}

impl From<Box<[u8; KEY_LEN]>> for Key {
	fn from(k: Box<[u8; KEY_LEN]>) -> Self {
		Key(k.into())
	}
}

impl TryFrom<&[u8]> for Key {
	type Error = Error;

	/// Accept caller-supplied key material, as long as it's exactly the right length.
	///
	/// # Errors
	///
	/// Will return [`Error::InvalidKey`] if the slice is anything other than 32 bytes long.
	fn try_from(k: &[u8]) -> Result<Self, Self::Error> {
		let k: [u8; KEY_LEN] = k
			.try_into()
			.map_err(|_| Error::invalid_key(format!("expected {KEY_LEN} bytes, got {}", k.len())))?;
		Ok(Key::new(k))
	}
}

/// Create a key suitable for use with [`encrypt`](super::encrypt) / [`decrypt`](super::decrypt).
///
/// This isn't usually required in real-world usage, as you'll *usually* have your keys
/// stored somewhere out of the way.  However, for testing use, or the odd occasion when
/// encryption/decryption is very temporary, a simple function to generate a secure key
/// is useful to have laying around.
#[tracing::instrument(level = "debug")]
pub fn generate_key() -> Key {
	use rand::{RngCore, rng};

	let mut k = [0u8; KEY_LEN];

	rng().fill_bytes(&mut k);

	Box::new(k).into()
}
