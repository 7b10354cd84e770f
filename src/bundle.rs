use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use super::{
	Error,
	cipher::{NONCE_LEN, TAG_LEN},
};

/// Everything [`encrypt`](super::encrypt) produces, and everything
/// [`decrypt`](super::decrypt) needs (besides the key and the AAD).
///
/// The ciphertext is exactly as long as the plaintext was; integrity lives entirely in
/// the tag.  All three fields travel together -- lose any one of them and the data is
/// gone.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CipherBundle {
	pub nonce: [u8; NONCE_LEN],
	pub ciphertext: Vec<u8>,
	pub auth_tag: [u8; TAG_LEN],
}

impl CipherBundle {
	/// Re-encode this bundle for storage or transport in JSON-ish formats.
	pub fn to_transport_form(&self) -> TransportBundle {
		TransportBundle {
			nonce: STANDARD.encode(self.nonce),
			ciphertext: STANDARD.encode(&self.ciphertext),
			auth_tag: STANDARD.encode(self.auth_tag),
		}
	}

	/// Recover a raw bundle from its transport form.
	///
	/// # Errors
	///
	/// Will return [`Error::Decoding`] if any field is not valid base64, or
	/// [`Error::InvalidBundle`] if the decoded nonce or tag is the wrong length.
	pub fn from_transport_form(transport: &TransportBundle) -> Result<Self, Error> {
		let nonce: [u8; NONCE_LEN] = decode("nonce", &transport.nonce)?
			.try_into()
			.map_err(|v: Vec<u8>| {
				Error::invalid_bundle(format!("nonce is {} bytes, expected {NONCE_LEN}", v.len()))
			})?;
		let auth_tag: [u8; TAG_LEN] = decode("authTag", &transport.auth_tag)?
			.try_into()
			.map_err(|v: Vec<u8>| {
				Error::invalid_bundle(format!("authTag is {} bytes, expected {TAG_LEN}", v.len()))
			})?;

		Ok(Self {
			nonce,
			ciphertext: decode("ciphertext", &transport.ciphertext)?,
			auth_tag,
		})
	}
}

/// A [`CipherBundle`] with each field base64-encoded, ready for JSON.
///
/// The wire field names are `nonce`, `ciphertext`, and `authTag` (standard base64, not
/// the URL-safe variant).  Parsing tolerates and ignores any extra fields, so callers
/// are free to staple their own metadata alongside.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TransportBundle {
	pub nonce: String,
	pub ciphertext: String,
	#[serde(rename = "authTag")]
	pub auth_tag: String,
}

impl TransportBundle {
	/// See [`CipherBundle::from_transport_form`].
	///
	/// # Errors
	///
	/// As for [`CipherBundle::from_transport_form`].
	pub fn to_bundle(&self) -> Result<CipherBundle, Error> {
		CipherBundle::from_transport_form(self)
	}
}

impl From<&CipherBundle> for TransportBundle {
	fn from(bundle: &CipherBundle) -> Self {
		bundle.to_transport_form()
	}
}

impl TryFrom<&TransportBundle> for CipherBundle {
	type Error = Error;

	fn try_from(transport: &TransportBundle) -> Result<Self, Self::Error> {
		CipherBundle::from_transport_form(transport)
	}
}

fn decode(element: &str, b64: &str) -> Result<Vec<u8>, Error> {
	STANDARD.decode(b64).map_err(|e| Error::decoding(element, e))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bundle() -> CipherBundle {
		CipherBundle {
			nonce: [7u8; NONCE_LEN],
			ciphertext: b"definitely encrypted".to_vec(),
			auth_tag: [9u8; TAG_LEN],
		}
	}

	#[test]
	fn transport_round_trip() {
		let original = bundle();

		let recovered = CipherBundle::from_transport_form(&original.to_transport_form())
			.expect("round trip failed");

		assert_eq!(original, recovered);
	}

	#[test]
	fn wire_form_uses_expected_field_names() {
		let json = serde_json::to_string(&bundle().to_transport_form()).unwrap();

		assert!(json.contains(r#""nonce":"#));
		assert!(json.contains(r#""ciphertext":"#));
		assert!(json.contains(r#""authTag":"#));
	}

	#[test]
	fn parsing_ignores_extra_fields() {
		let mut json = serde_json::to_value(bundle().to_transport_form()).unwrap();
		json["someExtraKeyField"] = "in case you want metadata in things".into();

		let transport: TransportBundle = serde_json::from_value(json).unwrap();

		assert_eq!(bundle(), transport.to_bundle().expect("decoding failed"));
	}

	#[test]
	fn rejects_garbage_base64() {
		let mut transport = bundle().to_transport_form();
		transport.ciphertext = "not!base64!at!all".to_string();

		let result = transport.to_bundle();
		assert!(matches!(result, Err(Error::Decoding { .. })));
	}

	#[test]
	fn rejects_wrong_length_nonce() {
		let mut transport = bundle().to_transport_form();
		transport.nonce = STANDARD.encode([7u8; NONCE_LEN - 1]);

		let result = transport.to_bundle();
		assert!(matches!(result, Err(Error::InvalidBundle(_))));
	}

	#[test]
	fn rejects_wrong_length_tag() {
		let mut transport = bundle().to_transport_form();
		transport.auth_tag = STANDARD.encode([9u8; TAG_LEN + 1]);

		let result = transport.to_bundle();
		assert!(matches!(result, Err(Error::InvalidBundle(_))));
	}
}
