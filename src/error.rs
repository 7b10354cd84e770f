#[derive(Debug, thiserror::Error, thiserror_ext::Construct)]
#[non_exhaustive]
pub enum Error {
	#[error("failed to decrypt ciphertext")]
	Decryption,

	#[error("failed to encrypt plaintext")]
	Encryption,

	#[error("AAD record is not a flat object: {0}")]
	InvalidRecord(String),

	#[error("AAD does not accept nested objects or arrays (field {0:?})")]
	NestedValue(String),

	#[error("cipher bundle decoding failure on {element}: {cause}")]
	Decoding {
		element: String,
		cause: base64::DecodeError,
	},

	#[error("invalid cipher bundle: {0}")]
	InvalidBundle(String),

	#[error("invalid key: {0}")]
	InvalidKey(String),

	#[error("CAN'T HAPPEN: {0}")]
	Insanity(String),
}
