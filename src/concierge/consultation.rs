//! AI grooming consultation
//!
//! The visitor describes what they want, optionally with a photo, and gets
//! back a structured recommendation: a short analysis, services to book and
//! styling tips.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::client::{GenerationRequest, InlineImage, TextGenerator, DEFAULT_MODEL};
use super::error::{ConciergeError, ConciergeResult};
use crate::catalog::Language;

/// Structured consultation answer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationResult {
    pub recommendation: String,
    #[serde(default)]
    pub suggested_services: Vec<String>,
    #[serde(default)]
    pub style_tips: Vec<String>,
}

impl ConsultationResult {
    /// Parse the model output, tolerating a fenced ```json block
    pub fn parse(raw: &str) -> ConciergeResult<Self> {
        let trimmed = raw.trim();
        let body = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .and_then(|rest| rest.strip_suffix("```"))
            .unwrap_or(trimmed);
        serde_json::from_str(body.trim()).map_err(ConciergeError::from)
    }
}

/// Response schema requested from the model
pub fn consultation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recommendation": { "type": "STRING" },
            "suggestedServices": { "type": "ARRAY", "items": { "type": "STRING" } },
            "styleTips": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["recommendation", "suggestedServices", "styleTips"]
    })
}

/// Prompt sent for a consultation
pub fn consultation_prompt(description: &str, lang: Language, has_image: bool) -> String {
    let description = description.trim();
    let mut prompt = String::from(
        "You are a master barber and grooming consultant at LuxeCut, a luxury barbershop.\n",
    );
    if has_image {
        prompt.push_str("Study the attached photo of the client: face shape, hair texture and beard.\n");
    }
    if description.is_empty() {
        prompt.push_str("The client gave no description.\n");
    } else {
        prompt.push_str(&format!("The client says: {}\n", description));
    }
    prompt.push_str(&format!(
        "Recommend a look that suits them, list the barbershop services they should book \
         (haircut, fade, shave, beard sculpting, facial) and give practical styling tips. \
         Answer in {}.",
        lang.prompt_name()
    ));
    prompt
}

/// Runs consultations against a text generator
pub struct Consultant<G: TextGenerator> {
    generator: G,
    model: String,
}

impl<G: TextGenerator> Consultant<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Builder method: use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn consult(
        &self,
        description: &str,
        lang: Language,
        image: Option<InlineImage>,
    ) -> ConciergeResult<ConsultationResult> {
        let prompt = consultation_prompt(description, lang, image.is_some());
        let request = GenerationRequest::text(&self.model, prompt)
            .with_image(image)
            .with_schema(consultation_schema());

        let raw = self.generator.generate(request).await?;
        let result = ConsultationResult::parse(&raw)?;
        tracing::info!(
            suggestions = result.suggested_services.len(),
            tips = result.style_tips.len(),
            "Consultation complete"
        );
        Ok(result)
    }
}

/// Inputs captured by [`ConsultationSession::begin`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultationInput {
    pub description: String,
    pub image: Option<InlineImage>,
}

/// The consultation panel: inputs, loading flag and outcome
#[derive(Debug, Clone, Default)]
pub struct ConsultationSession {
    description: String,
    image: Option<InlineImage>,
    loading: bool,
    result: Option<ConsultationResult>,
    error: Option<String>,
}

impl ConsultationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn image(&self) -> Option<&InlineImage> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<InlineImage>) {
        self.image = image;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&ConsultationResult> {
        self.result.as_ref()
    }

    /// Localized failure message from the last attempt
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a request. `None` when there is nothing to send or one is pending.
    pub fn begin(&mut self) -> Option<ConsultationInput> {
        if self.loading || (self.description.trim().is_empty() && self.image.is_none()) {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(ConsultationInput {
            description: self.description.clone(),
            image: self.image.clone(),
        })
    }

    /// Record the outcome and return to idle
    pub fn finish(&mut self, outcome: ConciergeResult<ConsultationResult>, fallback: &str) {
        self.loading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(e) => {
                tracing::warn!(error = %e, "Consultation failed");
                self.error = Some(fallback.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Generator returning a canned answer and recording requests
    struct FakeGenerator {
        reply: Result<String, u16>,
        requests: RefCell<Vec<GenerationRequest>>,
    }

    impl FakeGenerator {
        fn replying(reply: Result<&str, u16>) -> Self {
            Self {
                reply: reply.map(str::to_string),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, request: GenerationRequest) -> ConciergeResult<String> {
            self.requests.borrow_mut().push(request);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(ConciergeError::Api {
                    status: *status,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    const ANSWER: &str = r#"{
        "recommendation": "A textured crop balances a square jaw.",
        "suggestedServices": ["Signature Cut", "Beard Sculpting"],
        "styleTips": ["Use matte clay", "Trim every 3 weeks"]
    }"#;

    #[tokio::test]
    async fn test_consult_parses_structured_answer() {
        let consultant = Consultant::new(FakeGenerator::replying(Ok(ANSWER)));
        let image = InlineImage::from_bytes("image/jpeg", b"photo").unwrap();

        let result = consultant
            .consult("Thick hair, square face", Language::En, Some(image.clone()))
            .await
            .unwrap();

        assert_eq!(result.suggested_services, vec!["Signature Cut", "Beard Sculpting"]);
        assert_eq!(result.style_tips.len(), 2);

        let requests = consultant.generator.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, DEFAULT_MODEL);
        assert_eq!(requests[0].image, Some(image));
        assert!(requests[0].response_schema.is_some());
        assert!(requests[0].prompt.contains("Thick hair, square face"));
        assert!(requests[0].prompt.contains("English"));
    }

    #[tokio::test]
    async fn test_consult_reports_malformed_answer() {
        let consultant = Consultant::new(FakeGenerator::replying(Ok("I think a fade.")));
        let result = consultant.consult("fade?", Language::Vi, None).await;
        assert!(matches!(result, Err(ConciergeError::Parse(_))));
    }

    #[test]
    fn test_parse_fenced_answer() {
        let fenced = format!("```json\n{}\n```", ANSWER);
        let result = ConsultationResult::parse(&fenced).unwrap();
        assert_eq!(result.recommendation, "A textured crop balances a square jaw.");
    }

    #[test]
    fn test_prompt_language() {
        let prompt = consultation_prompt("", Language::Vi, true);
        assert!(prompt.contains("Vietnamese"));
        assert!(prompt.contains("attached photo"));
        assert!(prompt.contains("no description"));
    }

    #[test]
    fn test_session_needs_input() {
        let mut session = ConsultationSession::new();
        assert!(session.begin().is_none());

        session.set_description("   ");
        assert!(session.begin().is_none());

        session.set_image(InlineImage::from_bytes("image/png", b"x").ok());
        let input = session.begin().unwrap();
        assert!(input.image.is_some());
        assert!(session.is_loading());
    }

    #[test]
    fn test_session_blocks_while_loading() {
        let mut session = ConsultationSession::new();
        session.set_description("Short sides please");
        assert!(session.begin().is_some());
        assert!(session.begin().is_none());

        session.finish(ConsultationResult::parse(ANSWER), "Sorry");
        assert!(!session.is_loading());
        assert!(session.result().is_some());
        assert!(session.error().is_none());
        assert!(session.begin().is_some());
    }

    #[tokio::test]
    async fn test_session_failure_shows_fallback_and_recovers() {
        let consultant = Consultant::new(FakeGenerator::replying(Err(503)));
        let mut session = ConsultationSession::new();
        session.set_description("Beard advice");

        let input = session.begin().unwrap();
        let outcome = consultant
            .consult(&input.description, Language::En, input.image)
            .await;
        session.finish(outcome, "Our consultant is unavailable.");

        assert_eq!(session.error(), Some("Our consultant is unavailable."));
        assert!(!session.is_loading());
        // retry is allowed
        assert!(session.begin().is_some());
        assert!(session.error().is_none());
    }
}
