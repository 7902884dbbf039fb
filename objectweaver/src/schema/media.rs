use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caption and transcript formats accepted by [`SpeechToText::format`].
pub mod caption_format {
    pub const TEXT: &str = "text";
    pub const SRT: &str = "srt";
    pub const VTT: &str = "vtt";
    pub const JSON: &str = "json";
    pub const VERBOSE_JSON: &str = "verbose-json";
}

/// Sizes accepted by [`Image::size`].
pub mod image_size {
    pub const SIZE_256X256: &str = "256x256";
    pub const SIZE_512X512: &str = "512x512";
    pub const SIZE_1024X1024: &str = "1024x1024";
    /// Only supported by `dall-e-3`.
    pub const SIZE_1792X1024: &str = "1792x1024";
    /// Only supported by `dall-e-3`.
    pub const SIZE_1024X1792: &str = "1024x1792";
}

/// Audio synthesis for a [`super::DataType::BYTE`] node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextToSpeech {
    pub model: String,
    pub string_to_audio: String,
    pub voice: String,
    pub format: String,
}

/// Transcription of audio into a [`super::DataType::STRING`] node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeechToText {
    pub model: String,
    #[serde(with = "base64_bytes", skip_serializing_if = "Vec::is_empty")]
    pub audio_to_transcribe: Vec<u8>,
    /// ISO-639-1 code, the service falls back to `en`.
    pub language: String,
    pub format: String,
    pub to_string: bool,
    pub to_captions: bool,
    pub chunking_strategy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_body: Option<Map<String, Value>>,
}

/// Image generation. Use [`super::DataType::STRING`] to receive a URL and
/// [`super::DataType::BYTE`] to receive the image itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub model: String,
    pub size: String,
}

/// Images handed to a multi-modal model alongside the prompt.
///
/// Check how many images the selected model accepts; some only take one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendImage {
    #[serde(with = "base64_bytes::list", skip_serializing_if = "Vec::is_empty")]
    pub images_data: Vec<Vec<u8>>,
}

/// Binary payloads travel through JSON as standard padded base64 strings, `null` reads as empty.
mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        decode(Option::<String>::deserialize(deserializer)?).map_err(D::Error::custom)
    }

    fn decode(encoded: Option<String>) -> Result<Vec<u8>, base64::DecodeError> {
        encoded.map_or(Ok(Vec::new()), |encoded| STANDARD.decode(encoded))
    }

    pub mod list {
        use super::{STANDARD, decode};
        use base64::Engine;
        use serde::de::Error;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(list: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(list.iter().map(|bytes| STANDARD.encode(bytes)))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<Vec<u8>>, D::Error> {
            Option::<Vec<Option<String>>>::deserialize(deserializer)?
                .unwrap_or_default()
                .into_iter()
                .map(decode)
                .collect::<Result<_, _>>()
                .map_err(D::Error::custom)
        }
    }
}
