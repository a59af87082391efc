use crate::error::LocatorError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Text encoding applied when a config file is read.
///
/// Names parse case-insensitively, from the CLI and from serde alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Encoding {
	Ascii,

	#[default]
	Utf8,

	Utf16Le,

	/// Same byte layout as [`Encoding::Utf16Le`].
	Ucs2,

	/// Raw bytes rendered as standard padded base64.
	Base64,
}

impl Encoding {
	/// Canonical name of the encoding.
	pub fn name(self) -> &'static str {
		match self {
			Encoding::Ascii => "ascii",
			Encoding::Utf8 => "utf-8",
			Encoding::Utf16Le => "utf-16le",
			Encoding::Ucs2 => "ucs-2",
			Encoding::Base64 => "base64",
		}
	}

	/// Decode raw file bytes into text.
	pub fn decode(self, bytes: &[u8]) -> String {
		match self {
			Encoding::Ascii => bytes.iter().map(|b| char::from(b & 0x7f)).collect(),
			Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
			Encoding::Utf16Le | Encoding::Ucs2 => {
				// A trailing odd byte is dropped
				let units = bytes
					.chunks_exact(2)
					.map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
				char::decode_utf16(units)
					.map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
					.collect()
			}
			Encoding::Base64 => STANDARD.encode(bytes),
		}
	}
}

impl fmt::Display for Encoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Encoding {
	type Err = LocatorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"ascii" => Ok(Encoding::Ascii),
			"utf8" | "utf-8" => Ok(Encoding::Utf8),
			"utf16le" | "utf-16le" => Ok(Encoding::Utf16Le),
			"ucs2" | "ucs-2" => Ok(Encoding::Ucs2),
			"base64" => Ok(Encoding::Base64),
			_ => Err(LocatorError::UnknownEncoding {
				name: s.to_string(),
			}),
		}
	}
}

impl TryFrom<String> for Encoding {
	type Error = LocatorError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}
