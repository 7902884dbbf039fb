use super::structured::{self, StructuredValueError};
use crate::pb;
use crate::schema::{Image, SendImage, SpeechToText, TextToSpeech};

impl From<&TextToSpeech> for pb::TextToSpeech {
    fn from(tts: &TextToSpeech) -> Self {
        Self {
            model: tts.model.clone(),
            string_to_audio: tts.string_to_audio.clone(),
            voice: tts.voice.clone(),
            format: tts.format.clone(),
        }
    }
}

impl From<pb::TextToSpeech> for TextToSpeech {
    fn from(tts: pb::TextToSpeech) -> Self {
        Self {
            model: tts.model,
            string_to_audio: tts.string_to_audio,
            voice: tts.voice,
            format: tts.format,
        }
    }
}

impl From<&SpeechToText> for pb::SpeechToText {
    fn from(stt: &SpeechToText) -> Self {
        Self {
            model: stt.model.clone(),
            audio_to_transcribe: stt.audio_to_transcribe.clone(),
            language: stt.language.clone(),
            format: stt.format.clone(),
            to_string: stt.to_string,
            to_captions: stt.to_captions,
            chunking_strategy: stt.chunking_strategy.clone(),
            extra_body: stt.extra_body.as_ref().map(structured::map_to_struct),
        }
    }
}

impl TryFrom<pb::SpeechToText> for SpeechToText {
    type Error = StructuredValueError;

    fn try_from(stt: pb::SpeechToText) -> Result<Self, Self::Error> {
        Ok(Self {
            model: stt.model,
            audio_to_transcribe: stt.audio_to_transcribe,
            language: stt.language,
            format: stt.format,
            to_string: stt.to_string,
            to_captions: stt.to_captions,
            chunking_strategy: stt.chunking_strategy,
            extra_body: stt
                .extra_body
                .map(structured::struct_to_map)
                .transpose()?,
        })
    }
}

impl From<&Image> for pb::Image {
    fn from(image: &Image) -> Self {
        Self {
            model: image.model.clone(),
            size: image.size.clone(),
        }
    }
}

impl From<pb::Image> for Image {
    fn from(image: pb::Image) -> Self {
        Self {
            model: image.model,
            size: image.size,
        }
    }
}

impl From<&SendImage> for pb::SendImage {
    fn from(send: &SendImage) -> Self {
        Self {
            images_data: send.images_data.clone(),
        }
    }
}

impl From<pb::SendImage> for SendImage {
    fn from(send: pb::SendImage) -> Self {
        Self {
            images_data: send.images_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{caption_format, image_size};
    use serde_json::json;

    #[test]
    fn speech_to_text_keeps_audio_and_extra_body() {
        let stt = SpeechToText {
            model: "whisper-1".to_string(),
            audio_to_transcribe: vec![0x52, 0x49, 0x46, 0x46],
            language: "de".to_string(),
            format: caption_format::VERBOSE_JSON.to_string(),
            to_captions: true,
            chunking_strategy: "auto".to_string(),
            extra_body: structured::to_map(&json!({ "prompt": "names: Ana", "beam": 5 })).ok(),
            ..Default::default()
        };

        let back = SpeechToText::try_from(pb::SpeechToText::from(&stt)).unwrap();

        assert_eq!(back, stt);
    }

    #[test]
    fn images_round_trip() {
        let image = Image {
            model: "dall-e-3".to_string(),
            size: image_size::SIZE_1792X1024.to_string(),
        };
        let send = SendImage {
            images_data: vec![vec![1, 2], vec![], vec![3]],
        };

        assert_eq!(Image::from(pb::Image::from(&image)), image);
        assert_eq!(SendImage::from(pb::SendImage::from(&send)), send);
    }
}
