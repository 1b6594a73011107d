use std::sync::Arc;

use base64::Engine as _;

use crate::{
    assets::decode::{PreparedImage, decode_image},
    foundation::error::{ShalomError, ShalomResult},
};

/// An uploaded photo: the original encoded file bytes plus their decoded pixels.
///
/// The upload is decoded once on acceptance and never re-encoded.
#[derive(Clone, PartialEq, Eq)]
pub struct Photo {
    mime: &'static str,
    bytes: Arc<Vec<u8>>,
    image: PreparedImage,
}

impl std::fmt::Debug for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Photo")
            .field("mime", &self.mime)
            .field("bytes_len", &self.bytes.len())
            .field("width", &self.image.width)
            .field("height", &self.image.height)
            .finish()
    }
}

impl Photo {
    /// Accept the bytes of one image file.
    ///
    /// The format is sniffed from the content and the whole file must decode; a valid
    /// signature followed by corrupt data is rejected.
    pub fn from_bytes(bytes: Vec<u8>) -> ShalomResult<Self> {
        let format = image::guess_format(&bytes)
            .map_err(|e| ShalomError::validation(format!("unrecognised photo format: {e}")))?;
        let image = decode_image(&bytes)
            .map_err(|e| ShalomError::validation(format!("photo could not be decoded: {e:#}")))?;
        Ok(Self {
            mime: format.to_mime_type(),
            bytes: Arc::new(bytes),
            image,
        })
    }

    /// Parse a `data:<mime>;base64,<payload>` URL.
    pub fn from_data_url(url: &str) -> ShalomResult<Self> {
        let rest = url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| ShalomError::validation("photo data URL must start with 'data:'"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ShalomError::validation("photo data URL has no payload"))?;
        if !header.ends_with(";base64") {
            return Err(ShalomError::validation(
                "photo data URL must be base64-encoded",
            ));
        }
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| ShalomError::validation(format!("invalid base64 photo payload: {e}")))?;
        Self::from_bytes(bytes)
    }

    /// Encode as a data URL, the representation the page embeds in the canvas.
    pub fn to_data_url(&self) -> String {
        let payload = base64::engine::general_purpose::STANDARD.encode(self.bytes.as_slice());
        format!("data:{};base64,{payload}", self.mime)
    }

    /// MIME type sniffed from the upload.
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Original encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Decoded pixels, premultiplied RGBA8.
    pub fn image(&self) -> &PreparedImage {
        &self.image
    }
}

impl serde::Serialize for Photo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_data_url())
    }
}

impl<'de> serde::Deserialize<'de> for Photo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_data_url(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/photo.rs"]
mod tests;
