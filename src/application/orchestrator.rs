//! Chat Orchestrator - domain gate, fallback chain and provenance tagging.
//!
//! `handle` is the single externally visible operation of the assistant core:
//!
//! 1. Classify the query; out-of-domain text gets the scope message.
//! 2. Walk the fallback chain in order. Each step builds its own prompt,
//!    calls its source and stops at the first viable answer.
//! 3. If no step produced a viable answer, or the chain ran past its
//!    overall deadline, return the exhaustion message.
//!
//! Steps run strictly one after another. A panic anywhere in the routing
//! future is caught at this boundary and becomes an `internal-error` reply.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::assistant::{
    build_prompt, classify, is_viable, templates, AssistantReply, PromptTarget, ResponseSource,
};
use crate::ports::SourceAdapter;

/// Default bound on a single source call.
pub const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_secs(60);

/// One link of the fallback chain.
#[derive(Clone)]
pub struct FallbackStep {
    adapter: Arc<dyn SourceAdapter>,
    target: PromptTarget,
    source: ResponseSource,
}

impl FallbackStep {
    /// Creates a step that prompts `adapter` for `target` and tags hits with `source`.
    pub fn new(adapter: Arc<dyn SourceAdapter>, target: PromptTarget, source: ResponseSource) -> Self {
        Self {
            adapter,
            target,
            source,
        }
    }

    pub fn source(&self) -> ResponseSource {
        self.source
    }

    pub fn adapter_name(&self) -> &str {
        self.adapter.name()
    }
}

impl std::fmt::Debug for FallbackStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackStep")
            .field("adapter", &self.adapter.name())
            .field("target", &self.target)
            .field("source", &self.source)
            .finish()
    }
}

/// Composes classifier, prompt builder and sources into one request/response call.
///
/// Holds no per-request state, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct ChatOrchestrator {
    chain: Vec<FallbackStep>,
    step_timeout: Option<Duration>,
    deadline: Option<Duration>,
}

impl ChatOrchestrator {
    /// Creates the standard primary → secondary chain.
    pub fn new(primary: Arc<dyn SourceAdapter>, secondary: Arc<dyn SourceAdapter>) -> Self {
        Self {
            chain: vec![
                FallbackStep::new(primary, PromptTarget::Primary, ResponseSource::PrimaryModel),
                FallbackStep::new(
                    secondary,
                    PromptTarget::Secondary,
                    ResponseSource::SecondaryModel,
                ),
            ],
            step_timeout: Some(DEFAULT_STEP_TIMEOUT),
            deadline: None,
        }
    }

    /// Appends a step to the end of the chain.
    pub fn then(mut self, step: FallbackStep) -> Self {
        self.chain.push(step);
        self
    }

    /// Bounds each source call. `None` lets calls run unbounded.
    pub fn with_step_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.step_timeout = timeout;
        self
    }

    /// Bounds the whole chain walk. When it expires the caller gets the
    /// exhaustion message rather than waiting on the remaining steps.
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// The chain, in the order it is tried.
    pub fn steps(&self) -> &[FallbackStep] {
        &self.chain
    }

    /// Fixed introductory reply for the start of a conversation.
    pub fn welcome() -> AssistantReply {
        AssistantReply::new(templates::WELCOME_MESSAGE, ResponseSource::Welcome)
    }

    /// Answers one query.
    ///
    /// Never fails: every outcome, including a panicking source, is a
    /// complete reply carrying its source tag.
    #[instrument(name = "chat.handle", skip_all, fields(query_len = query.chars().count()))]
    pub async fn handle(&self, query: &str) -> AssistantReply {
        match AssertUnwindSafe(self.route(query)).catch_unwind().await {
            Ok(reply) => reply,
            Err(payload) => {
                let detail = panic_detail(payload.as_ref());
                error!(diagnostic = %detail, "routing failed unexpectedly");
                AssistantReply::new(templates::INTERNAL_ERROR_MESSAGE, ResponseSource::InternalError)
                    .with_diagnostic(detail)
            }
        }
    }

    async fn route(&self, query: &str) -> AssistantReply {
        if !classify(query) {
            info!(source = %ResponseSource::DomainRejected, "query outside construction domain");
            return AssistantReply::new(templates::SCOPE_MESSAGE, ResponseSource::DomainRejected);
        }

        let walk = self.walk_chain(query);
        let answer = match self.deadline {
            None => walk.await,
            Some(limit) => match tokio::time::timeout(limit, walk).await {
                Ok(answer) => answer,
                Err(_) => {
                    warn!(deadline_ms = limit.as_millis() as u64, "fallback chain ran out of time");
                    None
                }
            },
        };
        if let Some(reply) = answer {
            return reply;
        }

        info!(source = %ResponseSource::ExhaustedFallback, "all sources declined");
        AssistantReply::new(templates::EXHAUSTED_MESSAGE, ResponseSource::ExhaustedFallback)
    }

    async fn walk_chain(&self, query: &str) -> Option<AssistantReply> {
        for (position, step) in self.chain.iter().enumerate() {
            let prompt = build_prompt(query, step.target);

            match self.attempt(step, &prompt).await {
                Some(text) if is_viable(&text) => {
                    info!(
                        source = %step.source,
                        adapter = step.adapter.name(),
                        position,
                        "answered"
                    );
                    return Some(AssistantReply::new(text, step.source));
                }
                Some(text) => debug!(
                    adapter = step.adapter.name(),
                    chars = text.chars().count(),
                    "answer below viability threshold"
                ),
                None => debug!(adapter = step.adapter.name(), "no answer"),
            }
        }
        None
    }

    async fn attempt(&self, step: &FallbackStep, prompt: &str) -> Option<String> {
        let call = step.adapter.generate(prompt);
        match self.step_timeout {
            None => call.await,
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(
                        adapter = step.adapter.name(),
                        timeout_ms = limit.as_millis() as u64,
                        "source timed out"
                    );
                    None
                }
            },
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError, ProviderSource, UnconfiguredSource};
    use crate::domain::assistant::templates::{
        EXHAUSTED_MESSAGE, INTERNAL_ERROR_MESSAGE, PRIMARY_PREAMBLE, SCOPE_MESSAGE,
        SECONDARY_PREAMBLE, WELCOME_MESSAGE,
    };

    const VIABLE: &str = "Use OPC 53 grade cement with a water-cement ratio of 0.45 for slabs.";

    fn source(provider: &MockAIProvider) -> Arc<dyn SourceAdapter> {
        Arc::new(ProviderSource::new(provider.clone()))
    }

    fn orchestrator(primary: &MockAIProvider, secondary: &MockAIProvider) -> ChatOrchestrator {
        ChatOrchestrator::new(source(primary), source(secondary))
    }

    #[tokio::test]
    async fn out_of_domain_query_never_calls_sources() {
        let primary = MockAIProvider::new().with_response(VIABLE);
        let secondary = MockAIProvider::new().with_response(VIABLE);

        let reply = orchestrator(&primary, &secondary)
            .handle("Tell me a joke about cats")
            .await;

        assert_eq!(reply.source, ResponseSource::DomainRejected);
        assert_eq!(reply.content, SCOPE_MESSAGE);
        assert_eq!(primary.call_count(), 0);
        assert_eq!(secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_query_is_rejected() {
        let primary = MockAIProvider::new();
        let secondary = MockAIProvider::new();

        let reply = orchestrator(&primary, &secondary).handle("").await;

        assert_eq!(reply.source, ResponseSource::DomainRejected);
        assert_eq!(primary.call_count() + secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn weather_question_gets_scope_message_whatever_the_sources_do() {
        let primary = MockAIProvider::new().with_panic("should not run");
        let secondary = MockAIProvider::new().with_response(VIABLE);

        let reply = orchestrator(&primary, &secondary)
            .handle("What's the weather today?")
            .await;

        assert_eq!(reply.source, ResponseSource::DomainRejected);
        assert_eq!(reply.content, SCOPE_MESSAGE);
    }

    #[tokio::test]
    async fn viable_primary_answer_wins_and_skips_secondary() {
        let primary = MockAIProvider::new().with_response(VIABLE);
        let secondary = MockAIProvider::new().with_response("never used, never used");

        let reply = orchestrator(&primary, &secondary)
            .handle("Which cement suits a concrete slab?")
            .await;

        assert_eq!(reply.source, ResponseSource::PrimaryModel);
        assert_eq!(reply.content, VIABLE);
        assert_eq!(secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn answer_is_returned_verbatim() {
        let padded = "  Keep the leading spaces and the trailing newline.\n";
        let primary = MockAIProvider::new().with_response(padded);
        let secondary = MockAIProvider::new();

        let reply = orchestrator(&primary, &secondary)
            .handle("How do I cure concrete?")
            .await;

        assert_eq!(reply.content, padded);
    }

    #[tokio::test]
    async fn short_primary_answer_falls_through_to_secondary() {
        let primary = MockAIProvider::new().with_response("exactly twenty chars");
        let secondary = MockAIProvider::new().with_response(VIABLE);

        let reply = orchestrator(&primary, &secondary)
            .handle("steel rebar spacing")
            .await;

        assert_eq!("exactly twenty chars".chars().count(), 20);
        assert_eq!(reply.source, ResponseSource::SecondaryModel);
        assert_eq!(reply.content, VIABLE);
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 1);
    }

    #[tokio::test]
    async fn failed_primary_falls_through_to_secondary() {
        let primary = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "local model down".into(),
        });
        let secondary = MockAIProvider::new().with_response(VIABLE);

        let reply = orchestrator(&primary, &secondary)
            .handle("brick masonry mortar ratio")
            .await;

        assert_eq!(reply.source, ResponseSource::SecondaryModel);
    }

    #[tokio::test]
    async fn each_step_gets_its_own_prompt() {
        let primary = MockAIProvider::new().with_response("no");
        let secondary = MockAIProvider::new().with_response(VIABLE);
        let query = "What is the curing time for M30 concrete?";

        orchestrator(&primary, &secondary).handle(query).await;

        let primary_prompt = &primary.prompts()[0];
        let secondary_prompt = &secondary.prompts()[0];
        assert!(primary_prompt.starts_with(PRIMARY_PREAMBLE));
        assert!(secondary_prompt.starts_with(SECONDARY_PREAMBLE));
        assert!(primary_prompt.ends_with(query));
        assert!(secondary_prompt.ends_with(query));
    }

    #[tokio::test]
    async fn both_sources_declining_gives_exhausted_fallback() {
        let primary = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let secondary = MockAIProvider::new().with_response("");

        let reply = orchestrator(&primary, &secondary)
            .handle("foundation design for clay soil")
            .await;

        assert_eq!(reply.source, ResponseSource::ExhaustedFallback);
        assert_eq!(reply.content, EXHAUSTED_MESSAGE);
        assert!(reply.diagnostic.is_none());
    }

    #[tokio::test]
    async fn unconfigured_primary_defers_to_secondary() {
        let secondary = MockAIProvider::new().with_response("x".repeat(200));
        let orchestrator = ChatOrchestrator::new(
            Arc::new(UnconfiguredSource::new("local-llm")),
            source(&secondary),
        );

        let reply = orchestrator
            .handle("What slump value should I use for M25 grade concrete?")
            .await;

        assert_eq!(reply.source, ResponseSource::SecondaryModel);
        assert_eq!(reply.content.chars().count(), 200);
    }

    #[tokio::test]
    async fn panicking_source_becomes_internal_error() {
        let primary = MockAIProvider::new().with_error(MockError::Network {
            message: "reset".into(),
        });
        let secondary = MockAIProvider::new().with_panic("secret stack detail");

        let reply = orchestrator(&primary, &secondary)
            .handle("construction site safety checklist")
            .await;

        assert_eq!(reply.source, ResponseSource::InternalError);
        assert_eq!(reply.content, INTERNAL_ERROR_MESSAGE);
        assert!(!reply.content.contains("secret stack detail"));
        assert_eq!(reply.diagnostic.as_deref(), Some("secret stack detail"));
    }

    #[tokio::test]
    async fn orchestrator_survives_a_panic() {
        let primary = MockAIProvider::new().with_panic("boom").with_response(VIABLE);
        let secondary = MockAIProvider::new();
        let orchestrator = orchestrator(&primary, &secondary);

        let first = orchestrator.handle("plaster thickness for brick walls").await;
        let second = orchestrator.handle("plaster thickness for brick walls").await;

        assert_eq!(first.source, ResponseSource::InternalError);
        assert_eq!(second.source, ResponseSource::PrimaryModel);
    }

    #[tokio::test]
    async fn slow_source_times_out_and_chain_continues() {
        let primary = MockAIProvider::new()
            .with_response(VIABLE)
            .with_delay(Duration::from_millis(500));
        let secondary = MockAIProvider::new().with_response(VIABLE);

        let reply = orchestrator(&primary, &secondary)
            .with_step_timeout(Some(Duration::from_millis(20)))
            .handle("scaffolding inspection")
            .await;

        assert_eq!(reply.source, ResponseSource::SecondaryModel);
    }

    #[tokio::test]
    async fn chain_deadline_cuts_slow_steps_short() {
        let primary = MockAIProvider::new()
            .with_response(VIABLE)
            .with_delay(Duration::from_millis(300));
        let secondary = MockAIProvider::new()
            .with_response(VIABLE)
            .with_delay(Duration::from_millis(300));

        let reply = orchestrator(&primary, &secondary)
            .with_step_timeout(Some(Duration::from_millis(250)))
            .with_deadline(Some(Duration::from_millis(400)))
            .handle("scaffolding inspection")
            .await;

        assert_eq!(reply.source, ResponseSource::ExhaustedFallback);
        assert_eq!(reply.content, EXHAUSTED_MESSAGE);
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 1);
    }

    #[tokio::test]
    async fn answer_inside_deadline_is_kept() {
        let primary = MockAIProvider::new().with_response(VIABLE);
        let secondary = MockAIProvider::new();

        let reply = orchestrator(&primary, &secondary)
            .with_deadline(Some(Duration::from_secs(5)))
            .handle("scaffolding inspection")
            .await;

        assert_eq!(reply.source, ResponseSource::PrimaryModel);
    }

    #[tokio::test]
    async fn extra_steps_are_tried_in_order() {
        let primary = MockAIProvider::new().with_response("");
        let secondary = MockAIProvider::new().with_response("");
        let backup = MockAIProvider::new().with_response(VIABLE);

        let orchestrator = orchestrator(&primary, &secondary).then(FallbackStep::new(
            source(&backup),
            PromptTarget::Secondary,
            ResponseSource::SecondaryModel,
        ));

        let reply = orchestrator.handle("tender documents for a road project").await;

        assert_eq!(orchestrator.steps().len(), 3);
        assert_eq!(reply.source, ResponseSource::SecondaryModel);
        assert_eq!(backup.call_count(), 1);
    }

    #[test]
    fn welcome_is_stable() {
        let first = ChatOrchestrator::welcome();
        let second = ChatOrchestrator::welcome();

        assert_eq!(first.content, WELCOME_MESSAGE);
        assert_eq!(first.content, second.content);
        assert_eq!(first.source, ResponseSource::Welcome);
        assert_eq!(second.source, ResponseSource::Welcome);
    }

    #[test]
    fn panic_detail_reads_common_payloads() {
        assert_eq!(panic_detail(&"static"), "static");
        assert_eq!(panic_detail(&String::from("owned")), "owned");
        assert_eq!(panic_detail(&42_u8), "unknown panic");
    }
}
