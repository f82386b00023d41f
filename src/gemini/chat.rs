use super::client::GeminiHttpClient;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
};
use crate::models::{ChatTurn, ImagePayload};
use crate::{Error, Result};

/// Deterministic sampling parameters applied to every chat turn.
const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 8192;

/// A single-use chat session: persona instruction plus prior history, ready
/// to accept exactly one new user turn.
pub struct GeminiChatSession {
    http: GeminiHttpClient,
    system_instruction: String,
    history: Vec<Content>,
}

impl GeminiChatSession {
    pub fn new(
        http: GeminiHttpClient,
        system_instruction: impl Into<String>,
        history: &[ChatTurn],
    ) -> Self {
        Self {
            http,
            system_instruction: system_instruction.into(),
            history: history.iter().map(Content::from).collect(),
        }
    }

    /// Sends a text-only turn and returns the generated reply.
    pub async fn send_message(&self, message: &str) -> Result<String> {
        self.dispatch(vec![Part::Text {
            text: message.to_string(),
        }])
        .await
    }

    /// Sends an image turn with an accompanying caption. The inline payload
    /// precedes the caption, matching the order Gemini expects for vision
    /// requests.
    pub async fn send_message_with_image(
        &self,
        image: &ImagePayload,
        caption: &str,
    ) -> Result<String> {
        self.dispatch(vec![
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                },
            },
            Part::Text {
                text: caption.to_string(),
            },
        ])
        .await
    }

    async fn dispatch(&self, parts: Vec<Part>) -> Result<String> {
        let mut contents = self.history.clone();
        contents.push(Content {
            role: Some("user".to_string()),
            parts,
        });

        let request = GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::Text {
                    text: self.system_instruction.clone(),
                }],
            }),
            contents,
            generation_config: Some(GenerationConfig {
                temperature: Some(TEMPERATURE),
                max_output_tokens: Some(MAX_OUTPUT_TOKENS),
            }),
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        Self::extract_text(&response)
            .ok_or_else(|| Error::AiProvider("No text in Gemini chat response".to_string()))
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response.candidates.first().and_then(|c| {
            c.content.parts.iter().find_map(|p| match p {
                Part::Text { text } => Some(text.clone()),
                Part::InlineData { .. } => None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, TurnPart};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "gemini-1.5-flash";
    const GENERATE_CONTENT_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    fn make_session(server: &MockServer, history: &[ChatTurn]) -> GeminiChatSession {
        let http = GeminiHttpClient::new("test-key".to_string(), MODEL.to_string())
            .with_base_url(server.uri());
        GeminiChatSession::new(http, "Kamu adalah Golem AI", history)
    }

    fn reply_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": text }]
                }
            }]
        })
    }

    #[tokio::test]
    async fn test_send_message_parses_reply() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("Halo dunia")))
            .mount(&server)
            .await;

        let session = make_session(&server, &[]);
        let reply = session.send_message("Halo").await.unwrap();
        assert_eq!(reply, "Halo dunia");
    }

    #[tokio::test]
    async fn test_request_carries_persona_history_and_config() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .and(body_string_contains("Kamu adalah Golem AI"))
            .and(body_string_contains("Siapa kamu?"))
            .and(body_string_contains("\"temperature\":0.7"))
            .and(body_string_contains("\"maxOutputTokens\":8192"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("Saya Golem AI")))
            .expect(1)
            .mount(&server)
            .await;

        let history = vec![ChatTurn {
            role: Role::User,
            parts: vec![TurnPart {
                text: "Siapa kamu?".to_string(),
            }],
        }];

        let session = make_session(&server, &history);
        session.send_message("Lanjutkan").await.unwrap();
    }

    #[tokio::test]
    async fn test_image_turn_sends_inline_data_before_caption() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .and(body_string_contains("\"inlineData\""))
            .and(body_string_contains("\"mimeType\":\"image/png\""))
            .and(body_string_contains("Jelaskan gambar ini"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("Sebuah gambar")))
            .expect(1)
            .mount(&server)
            .await;

        let image = ImagePayload {
            data: "aGFsbw==".to_string(),
            mime_type: "image/png".to_string(),
        };

        let session = make_session(&server, &[]);
        let reply = session
            .send_message_with_image(&image, "Jelaskan gambar ini")
            .await
            .unwrap();
        assert_eq!(reply, "Sebuah gambar");
    }

    #[tokio::test]
    async fn test_api_error_surfaces_upstream_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string("API key not valid. Please pass a valid API key."),
            )
            .mount(&server)
            .await;

        let session = make_session(&server, &[]);
        let err = session.send_message("Halo").await.unwrap_err();

        match err {
            Error::AiProvider(message) => assert!(message.contains("API key not valid")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let session = make_session(&server, &[]);
        let err = session.send_message("Halo").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }
}
