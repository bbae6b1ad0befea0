//! Google Gemini driver implementation.
//!
//! This module implements every generation operation behind
//! [`LuminaDriver`] and [`Assistant`] with support for:
//! - Tier-based model routing (content and image synthesis follow the
//!   request tier, auxiliary operations ride the efficient text model)
//! - Client pooling with lazy initialization (one SDK client per model)
//! - REST dispatch for image synthesis, image-input style analysis, and
//!   search-grounded chat streaming
//! - Stage-local degradation: transport and parse failures resolve to each
//!   operation's documented fallback, and only authorization failures
//!   surface as errors

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_stream::stream;
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use gemini_rust::{Gemini, client::Model};
use tracing::{debug, error, instrument, warn};

use lumina_core::{
    AnalyzedStyle, Callout, ImageState, ModelTier, OutlineItem, Slide, outline_item_id,
    parse_or_fallback, stamp_millis,
};
use lumina_error::{BuilderError, DriverError, DriverErrorKind, LuminaError, LuminaResult};
use lumina_interface::{
    Assistant, ChartInsightRequest, ChatChunk, ChatStream, ImageRequest, LuminaDriver,
    OutlineRequest, SlideContentRequest, TextStream, VisualPlan, VisualPlanRequest,
};

use super::DriverResult;
use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    OutlineReply, Part, Tool,
};
use super::prompts;
use crate::GeminiConfig;

/// Aspect ratio requested for every slide visual.
const IMAGE_ASPECT_RATIO: &str = "16:9";
/// MIME type requested for JSON replies over the REST surface.
const JSON_MIME_TYPE: &str = "application/json";

/// Driver for the Google Gemini API with per-model client pooling.
///
/// SDK clients are created lazily, one per model, and cached for reuse
/// across operations. Image synthesis, image-input style analysis, and
/// search-grounded chat go through the REST endpoint on a shared
/// [`reqwest::Client`], since the SDK does not cover those surfaces.
pub struct GeminiDriver {
    /// Cache of model-specific SDK clients
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    /// Shared HTTP client for REST dispatch
    http: reqwest::Client,
    /// Resolved API credential
    api_key: String,
    /// Backend settings
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self.clients.lock().map(|clients| clients.len()).unwrap_or(0);
        f.debug_struct("GeminiDriver")
            .field("base_url", &self.config.base_url())
            .field("cached_clients", &cached)
            .finish_non_exhaustive()
    }
}

impl GeminiDriver {
    /// Creates a driver from explicit settings.
    ///
    /// Fails with a missing-key error when neither the settings nor the
    /// `GEMINI_API_KEY` / `GOOGLE_API_KEY` environment variables carry a
    /// credential.
    #[instrument(name = "gemini_driver_new", skip(config))]
    pub fn new(config: GeminiConfig) -> LuminaResult<Self> {
        let api_key = config.resolve_api_key()?;
        debug!(base_url = %config.base_url(), "creating Gemini driver");
        Ok(Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            http: reqwest::Client::new(),
            api_key,
            config,
        })
    }

    /// Creates a driver from the config file and environment.
    pub fn from_env() -> LuminaResult<Self> {
        Self::new(GeminiConfig::load()?)
    }

    /// Converts a model name string to a gemini-rust Model variant.
    ///
    /// Preview models and anything else unrecognized become `Model::Custom`
    /// with the `models/` prefix the API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{other}"))
                }
            }
        }
    }

    /// Returns the cached SDK client for a model, creating it on first use.
    fn pooled_client(&self, model_name: &str) -> DriverResult<Gemini> {
        let mut clients = self.clients.lock().map_err(|_| {
            DriverError::new(DriverErrorKind::ClientCreation(
                "client pool lock poisoned".to_string(),
            ))
        })?;
        if let Some(client) = clients.get(model_name) {
            return Ok(client.clone());
        }
        let model_enum = Self::model_name_to_enum(model_name);
        let client = Gemini::with_model(&self.api_key, model_enum)
            .map_err(|e| DriverError::new(DriverErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_name.to_string(), client.clone());
        Ok(client)
    }

    /// Runs one SDK text generation against the given model.
    ///
    /// The optional `format` message pins the expected reply shape as a
    /// system prompt.
    async fn text_generate(
        &self,
        model_name: &str,
        prompt: &str,
        format: Option<&str>,
    ) -> DriverResult<String> {
        let client = self.pooled_client(model_name)?;
        let mut builder = client.generate_content().with_user_message(prompt);
        if let Some(format) = format {
            builder = builder.with_system_prompt(format);
        }
        let response = builder.execute().await.map_err(Self::parse_api_error)?;
        Ok(response.text())
    }

    /// Sends one request to the REST `generateContent` endpoint.
    async fn generate_rest(
        &self,
        model_name: &str,
        request: &GenerateContentRequest,
    ) -> DriverResult<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url(),
            model_name
        );
        debug!(model = model_name, "sending request to Gemini REST API");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini REST API");
                DriverError::new(DriverErrorKind::ApiRequest(format!("Request failed: {e}")))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini REST API returned error");
            return Err(DriverError::new(DriverErrorKind::Http {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        let decoded: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            DriverError::new(DriverErrorKind::UnexpectedResponse(format!(
                "Failed to parse response: {e}"
            )))
        })?;
        Ok(decoded)
    }

    /// Parses gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured errors with
    /// status codes when available, so authorization and transient
    /// classification can see them.
    fn parse_api_error(err: impl std::fmt::Display) -> DriverError {
        let err_msg = err.to_string();
        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            DriverError::new(DriverErrorKind::Http {
                status_code,
                message: err_msg,
            })
        } else {
            DriverError::new(DriverErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extracts an HTTP status code from an error message string.
    ///
    /// Parses strings like "bad response from server; code 503;
    /// description: ..." and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }

    /// Resolves a failed operation into its stage fallback.
    ///
    /// Authorization failures always surface as errors; any other failure
    /// resolves to the fallback.
    fn fall_back<T>(err: DriverError, operation: &'static str, fallback: T) -> LuminaResult<T> {
        if err.is_authorization() {
            error!(error = %err, operation, "authorization failure");
            return Err(err.into());
        }
        warn!(error = %err, operation, "substituting stage fallback");
        Ok(fallback)
    }

    /// Splits a data URI into its MIME type and base64 payload.
    ///
    /// The MIME type defaults to `image/png` when the head carries none.
    fn split_data_uri(uri: &str) -> Option<(&str, &str)> {
        let (head, data) = uri.split_once("base64,")?;
        let mime = head
            .split(';')
            .next()
            .and_then(|scheme| scheme.strip_prefix("data:"))
            .filter(|mime| !mime.is_empty())
            .unwrap_or("image/png");
        Some((mime, data))
    }

    /// Decodes one SSE line into a chat chunk.
    ///
    /// Grounding URIs already emitted earlier in the stream are filtered
    /// through `seen`. Keep-alive lines and undecodable events yield
    /// nothing.
    fn chat_chunk_from_line(line: &str, seen: &mut Vec<String>) -> Option<ChatChunk> {
        let payload = line.strip_prefix("data:")?.trim();
        if payload.is_empty() {
            return None;
        }
        let response: GenerateContentResponse = match serde_json::from_str(payload) {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "skipping undecodable stream event");
                return None;
            }
        };
        let mut sources = Vec::new();
        for uri in response.grounding_uris() {
            if !seen.contains(&uri) {
                seen.push(uri.clone());
                sources.push(uri);
            }
        }
        Some(ChatChunk {
            text: response.text(),
            sources,
        })
    }

    /// Single-fragment stream substituted when brainstorm cannot start.
    fn error_text_stream() -> TextStream {
        let fragment: LuminaResult<String> = Ok("Error.".to_string());
        Box::pin(futures_util::stream::once(async move { fragment }))
    }

    /// Single-chunk stream substituted when chat cannot start.
    fn error_chat_stream() -> ChatStream {
        let chunk: LuminaResult<ChatChunk> = Ok(ChatChunk {
            text: "Error.".to_string(),
            sources: Vec::new(),
        });
        Box::pin(futures_util::stream::once(async move { chunk }))
    }
}

#[async_trait]
impl LuminaDriver for GeminiDriver {
    #[instrument(skip(self, req), fields(slides = %req.slide_count()))]
    async fn synthesize_outline(&self, req: &OutlineRequest) -> LuminaResult<Vec<OutlineItem>> {
        let prompt = prompts::outline(req);
        let raw = match self
            .text_generate(
                self.config.models().auxiliary(),
                &prompt,
                Some(prompts::OUTLINE_FORMAT),
            )
            .await
        {
            Ok(raw) => raw,
            Err(e) => return Self::fall_back(e, "outline synthesis", Vec::new()),
        };
        let replies: Vec<OutlineReply> = parse_or_fallback(&raw, Vec::new());
        let stamp = stamp_millis();
        Ok(replies
            .into_iter()
            .enumerate()
            .map(|(index, reply)| OutlineItem {
                id: outline_item_id(stamp, index),
                title: if reply.title.is_empty() {
                    format!("Slide {}", index + 1)
                } else {
                    reply.title
                },
                intent: if reply.intent.is_empty() {
                    "Details".to_string()
                } else {
                    reply.intent
                },
            })
            .collect())
    }

    #[instrument(skip(self, req), fields(slide = %req.item().title))]
    async fn plan_slide_visual(&self, req: &VisualPlanRequest) -> LuminaResult<VisualPlan> {
        let prompt = prompts::visual_plan(req);
        let raw = match self
            .text_generate(
                self.config.models().auxiliary(),
                &prompt,
                Some(&prompts::plan_format()),
            )
            .await
        {
            Ok(raw) => raw,
            Err(e) => return Self::fall_back(e, "visual planning", VisualPlan::default()),
        };
        Ok(parse_or_fallback(&raw, VisualPlan::default()))
    }

    #[instrument(skip(self, req), fields(slide = %req.item().title, tier = %req.tier()))]
    async fn synthesize_slide_content(&self, req: &SlideContentRequest) -> LuminaResult<Slide> {
        let model = self.config.models().content(*req.tier());
        let prompt = prompts::slide_content(req);
        let raw = match self
            .text_generate(model, &prompt, Some(&prompts::content_format()))
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                let mut fallback = Slide::stub(req.item().id.clone(), req.item().title.clone());
                fallback.content_points = vec!["Error generating content.".to_string()];
                return Self::fall_back(e, "content synthesis", fallback);
            }
        };
        let stub = Slide::stub(req.item().id.clone(), req.item().title.clone());
        let mut slide: Slide = parse_or_fallback(&raw, stub);
        slide.id = req.item().id.clone();
        if slide.title.is_empty() {
            slide.title = req.item().title.clone();
        }
        Ok(slide)
    }

    #[instrument(skip(self, req), fields(size = %req.size(), tier = %req.tier()))]
    async fn synthesize_image(&self, req: &ImageRequest) -> LuminaResult<ImageState> {
        let model = self.config.models().image(*req.tier());
        let mut parts = vec![Part::text(prompts::image(req.prompt()))];
        if let Some(reference) = req.style_reference() {
            if let Some((mime, data)) = Self::split_data_uri(reference) {
                parts.push(Part::inline(mime, data));
            }
        }
        let image_config = ImageConfig {
            aspect_ratio: IMAGE_ASPECT_RATIO.to_string(),
            image_size: (*req.tier() == ModelTier::Quality).then_some(*req.size()),
        };
        let generation_config = GenerationConfig::builder()
            .image_config(image_config)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;
        let request = GenerateContentRequest::builder()
            .contents(vec![Content::user(parts)])
            .generation_config(generation_config)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        let response = match self.generate_rest(model, &request).await {
            Ok(response) => response,
            Err(e) => return Self::fall_back(e, "image synthesis", ImageState::Failed),
        };
        match response.inline_image() {
            Some(inline) => match STANDARD.decode(&inline.data) {
                Ok(bytes) => {
                    debug!(bytes = bytes.len(), "image synthesized");
                    Ok(ImageState::Ready(format!(
                        "data:image/png;base64,{}",
                        inline.data
                    )))
                }
                Err(e) => {
                    let err = DriverError::new(DriverErrorKind::Base64Decode(e.to_string()));
                    warn!(error = %err, "discarding undecodable image payload");
                    Ok(ImageState::Failed)
                }
            },
            None => {
                warn!("response carried no inline image");
                Ok(ImageState::Failed)
            }
        }
    }

    #[instrument(skip(self, image_base64))]
    async fn analyze_style_from_image(&self, image_base64: &str) -> LuminaResult<AnalyzedStyle> {
        let model = self.config.models().auxiliary();
        let parts = vec![
            Part::inline("image/png", image_base64),
            Part::text(prompts::STYLE_IMAGE_PROMPT),
        ];
        let generation_config = GenerationConfig::builder()
            .response_mime_type(JSON_MIME_TYPE.to_string())
            .response_schema(prompts::style_response_schema())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;
        let request = GenerateContentRequest::builder()
            .contents(vec![Content::user(parts)])
            .generation_config(generation_config)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        let fallback = AnalyzedStyle::fallback("Corporate");
        let response = match self.generate_rest(model, &request).await {
            Ok(response) => response,
            Err(e) => return Self::fall_back(e, "style analysis", fallback),
        };
        Ok(parse_or_fallback(&response.text(), fallback))
    }

    #[instrument(skip(self, prompt))]
    async fn analyze_style_from_text(&self, prompt: &str) -> LuminaResult<AnalyzedStyle> {
        let fallback = AnalyzedStyle::fallback(prompt);
        let raw = match self
            .text_generate(
                self.config.models().auxiliary(),
                &prompts::style_from_text(prompt),
                Some(prompts::STYLE_FORMAT),
            )
            .await
        {
            Ok(raw) => raw,
            Err(e) => return Self::fall_back(e, "style synthesis", fallback),
        };
        Ok(parse_or_fallback(&raw, fallback))
    }

    #[instrument(skip(self, req), fields(chart = %req.chart_title()))]
    async fn suggest_chart_insights(
        &self,
        req: &ChartInsightRequest,
    ) -> LuminaResult<Vec<Callout>> {
        let prompt = prompts::chart_insights(req);
        let raw = match self
            .text_generate(
                self.config.models().auxiliary(),
                &prompt,
                Some(prompts::INSIGHT_FORMAT),
            )
            .await
        {
            Ok(raw) => raw,
            Err(e) => return Self::fall_back(e, "chart insights", Vec::new()),
        };
        Ok(parse_or_fallback(&raw, Vec::new()))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.models().content(ModelTier::default())
    }
}

#[async_trait]
impl Assistant for GeminiDriver {
    #[instrument(skip(self, query, context))]
    async fn stream_chat(&self, query: &str, context: &str) -> LuminaResult<ChatStream> {
        use futures_util::StreamExt;

        let model = self.config.models().auxiliary();
        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.config.base_url(),
            model
        );
        let request = GenerateContentRequest::builder()
            .contents(vec![Content::user(vec![Part::text(prompts::chat(
                query, context,
            ))])])
            .tools(vec![Tool::google_search()])
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        let response = match self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let err = DriverError::new(DriverErrorKind::ApiRequest(e.to_string()));
                warn!(error = %err, "substituting error chunk stream");
                return Ok(Self::error_chat_stream());
            }
        };
        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            let err = DriverError::new(DriverErrorKind::Http {
                status_code,
                message,
            });
            if err.is_authorization() {
                error!(error = %err, "authorization failure");
                return Err(err.into());
            }
            warn!(error = %err, "substituting error chunk stream");
            return Ok(Self::error_chat_stream());
        }

        let chunks = stream! {
            let mut buffer = String::new();
            let mut seen: Vec<String> = Vec::new();
            let mut bytes = response.bytes_stream();
            while let Some(next) = bytes.next().await {
                match next {
                    Ok(data) => {
                        buffer.push_str(&String::from_utf8_lossy(&data));
                        while let Some(offset) = buffer.find('\n') {
                            let line: String = buffer.drain(..=offset).collect();
                            if let Some(chunk) = Self::chat_chunk_from_line(line.trim(), &mut seen)
                            {
                                yield Ok(chunk);
                            }
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "chat stream interrupted");
                        yield Err(LuminaError::from(DriverError::new(
                            DriverErrorKind::StreamInterrupted(e.to_string()),
                        )));
                        return;
                    }
                }
            }
            if let Some(chunk) = Self::chat_chunk_from_line(buffer.trim(), &mut seen) {
                yield Ok(chunk);
            }
        };
        Ok(Box::pin(chunks))
    }

    #[instrument(skip(self, query))]
    async fn stream_brainstorm(&self, query: &str) -> LuminaResult<TextStream> {
        use futures_util::{StreamExt, TryStreamExt};

        let prompt = prompts::brainstorm(query);
        let client = match self.pooled_client(self.config.models().auxiliary()) {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, "substituting error fragment stream");
                return Ok(Self::error_text_stream());
            }
        };
        let gemini_stream = match client
            .generate_content()
            .with_user_message(&prompt)
            .execute_stream()
            .await
        {
            Ok(gemini_stream) => gemini_stream,
            Err(e) => {
                let err = Self::parse_api_error(e);
                if err.is_authorization() {
                    error!(error = %err, "authorization failure");
                    return Err(err.into());
                }
                warn!(error = %err, "substituting error fragment stream");
                return Ok(Self::error_text_stream());
            }
        };

        let fragments = gemini_stream
            .into_stream()
            .map(|result| -> LuminaResult<String> {
                match result {
                    Ok(response) => Ok(response.text()),
                    Err(e) => Err(DriverError::new(DriverErrorKind::StreamInterrupted(
                        e.to_string(),
                    ))
                    .into()),
                }
            });
        Ok(Box::pin(fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    fn driver() -> GeminiDriver {
        let config = GeminiConfig::builder()
            .api_key("test-key".to_string())
            .build()
            .unwrap();
        GeminiDriver::new(config).unwrap()
    }

    #[test]
    fn model_names_map_to_custom_with_prefix() {
        match GeminiDriver::model_name_to_enum("gemini-3-flash-preview") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-3-flash-preview"),
            _ => panic!("expected custom model"),
        }
        match GeminiDriver::model_name_to_enum("models/gemini-3-pro-preview") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-3-pro-preview"),
            _ => panic!("expected custom model"),
        }
        assert!(matches!(
            GeminiDriver::model_name_to_enum("gemini-2.5-flash"),
            Model::Gemini25Flash
        ));
    }

    #[test]
    fn status_codes_extracted_from_sdk_errors() {
        assert_eq!(
            GeminiDriver::extract_status_code(
                "bad response from server; code 503; description: overloaded"
            ),
            Some(503)
        );
        assert_eq!(GeminiDriver::extract_status_code("connection refused"), None);
    }

    #[test]
    fn auth_status_codes_classify_as_authorization() {
        let err = GeminiDriver::parse_api_error("bad response from server; code 403; denied");
        assert!(err.is_authorization());
        let err = GeminiDriver::parse_api_error("bad response from server; code 503; busy");
        assert!(!err.is_authorization());
        assert!(err.is_transient());
    }

    #[test]
    fn data_uris_split_into_mime_and_payload() {
        assert_eq!(
            GeminiDriver::split_data_uri("data:image/jpeg;base64,QUJD"),
            Some(("image/jpeg", "QUJD"))
        );
        assert_eq!(
            GeminiDriver::split_data_uri("base64,QUJD"),
            Some(("image/png", "QUJD"))
        );
        assert_eq!(GeminiDriver::split_data_uri("no marker here"), None);
    }

    #[test]
    fn sse_lines_decode_and_dedupe_sources() {
        let mut seen = Vec::new();
        let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"Hi"}]},"groundingMetadata":{"groundingChunks":[{"web":{"uri":"https://a"}},{"web":{"uri":"https://b"}}]}}]}"#;
        let chunk = GeminiDriver::chat_chunk_from_line(line, &mut seen).unwrap();
        assert_eq!(chunk.text, "Hi");
        assert_eq!(chunk.sources, vec!["https://a", "https://b"]);

        let repeat = GeminiDriver::chat_chunk_from_line(line, &mut seen).unwrap();
        assert_eq!(repeat.text, "Hi");
        assert!(repeat.sources.is_empty());

        assert!(GeminiDriver::chat_chunk_from_line(": keep-alive", &mut seen).is_none());
        assert!(GeminiDriver::chat_chunk_from_line("data:", &mut seen).is_none());
        assert!(GeminiDriver::chat_chunk_from_line("data: not json", &mut seen).is_none());
    }

    #[tokio::test]
    async fn error_streams_yield_a_single_fragment() {
        let mut texts = GeminiDriver::error_text_stream();
        assert_eq!(texts.next().await.unwrap().unwrap(), "Error.");
        assert!(texts.next().await.is_none());

        let mut chunks = GeminiDriver::error_chat_stream();
        let chunk = chunks.next().await.unwrap().unwrap();
        assert_eq!(chunk.text, "Error.");
        assert!(chunk.sources.is_empty());
        assert!(chunks.next().await.is_none());
    }

    #[test]
    fn debug_output_never_leaks_the_credential() {
        let driver = driver();
        let rendered = format!("{driver:?}");
        assert!(!rendered.contains("test-key"));
        assert!(rendered.contains("cached_clients"));
    }

    #[test]
    fn model_name_reports_the_quality_content_model() {
        let driver = driver();
        assert_eq!(driver.model_name(), crate::TEXT_PRO_MODEL);
        assert_eq!(driver.provider_name(), "gemini");
    }
}
