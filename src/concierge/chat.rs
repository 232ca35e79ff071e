//! Concierge chat
//!
//! A floating chat assistant that knows the current service menu. Each send
//! is a single prompt; earlier turns are shown to the visitor but not
//! replayed to the model.

use serde::{Deserialize, Serialize};

use super::client::{GenerationRequest, TextGenerator};
use super::error::ConciergeResult;
use crate::catalog::{Language, Service};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// `title: price VND` for every service, comma separated
pub fn service_context(services: &[Service], lang: Language) -> String {
    services
        .iter()
        .map(|s| format!("{}: {} VND", s.title_in(lang), s.price))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prompt for one chat turn
pub fn concierge_prompt(input: &str, services: &[Service], lang: Language) -> String {
    format!(
        "You are a luxury concierge for LuxeCut Barbershop.\n\
         Context: We offer these services: {}.\n\
         Rules: Be polite, aristocratic, and helpful. Use {}.\n\
         User asks: {}",
        service_context(services, lang),
        lang.prompt_name(),
        input
    )
}

/// Chat transcript plus the in-flight flag
#[derive(Debug, Clone, Default)]
pub struct ConciergeChat {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ConciergeChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record the visitor's message and build the prompt.
    ///
    /// Returns `None` (and records nothing) for blank input or while a reply
    /// is pending.
    pub fn begin(&mut self, input: &str, services: &[Service], lang: Language) -> Option<String> {
        if input.trim().is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage::user(input));
        self.loading = true;
        Some(concierge_prompt(input, services, lang))
    }

    /// Append the reply, or `fallback` if the call failed
    pub fn finish(&mut self, outcome: ConciergeResult<String>, fallback: &str) -> &ChatMessage {
        self.loading = false;
        let reply = match outcome {
            Ok(text) => ChatMessage::model(text),
            Err(e) => {
                tracing::warn!(error = %e, "Concierge reply failed");
                ChatMessage::model(fallback)
            }
        };
        self.messages.push(reply);
        &self.messages[self.messages.len() - 1]
    }

    /// `begin`, generate and `finish` in one go
    pub async fn send<G: TextGenerator + ?Sized>(
        &mut self,
        generator: &G,
        model: &str,
        input: &str,
        services: &[Service],
        lang: Language,
        fallback: &str,
    ) -> Option<&ChatMessage> {
        let prompt = self.begin(input, services, lang)?;
        let outcome = generator
            .generate(GenerationRequest::text(model, prompt))
            .await;
        Some(self.finish(outcome, fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_services;
    use crate::concierge::{ConciergeError, DEFAULT_MODEL};
    use std::cell::RefCell;

    struct EchoGenerator {
        prompts: RefCell<Vec<String>>,
        fail: bool,
    }

    #[async_trait::async_trait(?Send)]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, request: GenerationRequest) -> ConciergeResult<String> {
            self.prompts.borrow_mut().push(request.prompt);
            if self.fail {
                Err(ConciergeError::EmptyResponse)
            } else {
                Ok("Certainly, sir.".to_string())
            }
        }
    }

    #[test]
    fn test_prompt_lists_services_with_prices() {
        let services = default_services();
        let prompt = concierge_prompt("Do you do fades?", &services[..2], Language::En);

        assert!(prompt.contains(
            "We offer these services: Signature Cut: 250000 VND, Classic Fade: 200000 VND."
        ));
        assert!(prompt.contains("Use English."));
        assert!(prompt.ends_with("User asks: Do you do fades?"));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut chat = ConciergeChat::new();
        assert!(chat.begin("   ", &default_services(), Language::Vi).is_none());
        assert!(chat.messages().is_empty());
    }

    #[test]
    fn test_second_send_blocked_while_loading() {
        let services = default_services();
        let mut chat = ConciergeChat::new();

        assert!(chat.begin("Hello", &services, Language::Vi).is_some());
        assert!(chat.is_loading());
        assert!(chat.begin("Anyone?", &services, Language::Vi).is_none());
        assert_eq!(chat.messages().len(), 1);

        chat.finish(Ok("Xin chào".to_string()), "Lỗi");
        assert!(!chat.is_loading());
        assert_eq!(chat.messages()[1], ChatMessage::model("Xin chào"));
    }

    #[tokio::test]
    async fn test_send_appends_reply() {
        let generator = EchoGenerator {
            prompts: RefCell::new(Vec::new()),
            fail: false,
        };
        let mut chat = ConciergeChat::new();

        let reply = chat
            .send(&generator, DEFAULT_MODEL, "Book me in", &default_services(), Language::En, "err")
            .await
            .cloned();

        assert_eq!(reply, Some(ChatMessage::model("Certainly, sir.")));
        assert_eq!(chat.messages()[0], ChatMessage::user("Book me in"));
        assert_eq!(generator.prompts.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_send_shows_fallback() {
        let generator = EchoGenerator {
            prompts: RefCell::new(Vec::new()),
            fail: true,
        };
        let mut chat = ConciergeChat::new();

        chat.send(&generator, DEFAULT_MODEL, "Hi", &default_services(), Language::En, "Sorry, try again.")
            .await;

        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[1].text, "Sorry, try again.");
        assert_eq!(chat.messages()[1].role, ChatRole::Model);
        assert!(!chat.is_loading());
    }
}
