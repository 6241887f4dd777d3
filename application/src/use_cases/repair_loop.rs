//! Repair loop
//!
//! Drives the bounded generate → validate → review/fix → validate cycle.
//! Every collaborator output is untrusted and goes through the
//! [`SetValidator`] before it can be returned.

use crate::ports::collaborators::{CollaboratorError, SetFixer, SetGenerator};
use crate::ports::progress::{NoProgress, PassStep, RepairProgressNotifier};
use crate::ports::transcript::{NoTranscript, TranscriptEvent, TranscriptLogger};
use pasalacabra_domain::{FixerVerdict, GameContext, QuestionSet, SetValidator, ValidationError};
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a single pass did not produce an accepted set.
#[derive(Error, Debug)]
pub enum PassError {
    #[error("Validation failed ({kind}): {0}", kind = .0.kind())]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// Errors that can occur while running the repair loop
#[derive(Error, Debug)]
pub enum RepairError {
    #[error("No valid set after {passes} passes; last error (pass {last_attempt}): {source}")]
    Exhausted {
        passes: u32,
        last_attempt: u32,
        #[source]
        source: PassError,
    },

    #[error("Repair policy must allow at least one pass")]
    InvalidPolicy,
}

/// Where a pass currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairState {
    NeedGenerate,
    ValidatingCandidate,
    NeedFix,
    ValidatingFixed,
}

impl RepairState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairState::NeedGenerate => "need_generate",
            RepairState::ValidatingCandidate => "validating_candidate",
            RepairState::NeedFix => "need_fix",
            RepairState::ValidatingFixed => "validating_fixed",
        }
    }
}

/// A set accepted by the loop, with the pass that produced it.
#[derive(Debug, Clone)]
pub struct RepairOutcome {
    pub set: QuestionSet,
    pub attempts: u32,
}

/// Bounded generate/fix controller.
pub struct RepairLoop<Gen: SetGenerator, Fix: SetFixer> {
    generator: Arc<Gen>,
    fixer: Arc<Fix>,
    validator: SetValidator,
    max_passes: u32,
    transcript: Arc<dyn TranscriptLogger>,
}

impl<Gen: SetGenerator, Fix: SetFixer> RepairLoop<Gen, Fix> {
    pub fn new(
        generator: Arc<Gen>,
        fixer: Arc<Fix>,
        validator: SetValidator,
        max_passes: u32,
    ) -> Self {
        Self {
            generator,
            fixer,
            validator,
            max_passes,
            transcript: Arc::new(NoTranscript),
        }
    }

    pub fn with_transcript(mut self, transcript: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = transcript;
        self
    }

    /// Run with default (no-op) progress
    pub async fn run(&self, ctx: &GameContext) -> Result<RepairOutcome, RepairError> {
        self.run_with_progress(ctx, &NoProgress).await
    }

    /// Run with progress callbacks
    pub async fn run_with_progress(
        &self,
        ctx: &GameContext,
        progress: &dyn RepairProgressNotifier,
    ) -> Result<RepairOutcome, RepairError> {
        if self.max_passes == 0 {
            return Err(RepairError::InvalidPolicy);
        }

        info!(
            "Generating set for {} (topics: {}), up to {} passes",
            ctx.date,
            ctx.topics_joined(),
            self.max_passes
        );
        progress.on_start(ctx, self.max_passes);

        let mut candidate: Option<Value> = None;
        let mut last_error: Option<(u32, PassError)> = None;

        for attempt in 1..=self.max_passes {
            progress.on_pass_start(attempt, self.max_passes);

            match self.run_pass(ctx, attempt, &mut candidate, progress).await {
                Ok(set) => {
                    info!("Set accepted on pass {}", attempt);
                    self.transcript.log(TranscriptEvent::new(
                        "set_accepted",
                        json!({ "attempt": attempt, "id": set.id, "title": set.title }),
                    ));
                    progress.on_accepted(attempt);
                    return Ok(RepairOutcome {
                        set,
                        attempts: attempt,
                    });
                }
                Err(e) => {
                    warn!("Pass {}/{} failed: {}", attempt, self.max_passes, e);
                    progress.on_pass_failed(attempt, &e.to_string());
                    last_error = Some((attempt, e));
                }
            }
        }

        match last_error {
            Some((last_attempt, source)) => Err(RepairError::Exhausted {
                passes: self.max_passes,
                last_attempt,
                source,
            }),
            None => Err(RepairError::InvalidPolicy),
        }
    }

    /// One pass. Once generated, a candidate is kept for every later pass;
    /// the generator only runs again while none exists.
    async fn run_pass(
        &self,
        ctx: &GameContext,
        attempt: u32,
        candidate: &mut Option<Value>,
        progress: &dyn RepairProgressNotifier,
    ) -> Result<QuestionSet, PassError> {
        let current = match candidate.as_ref() {
            Some(value) => {
                debug!("Pass {}: reusing retained candidate", attempt);
                value.clone()
            }
            None => {
                self.trace_state(attempt, RepairState::NeedGenerate);
                progress.on_step(attempt, PassStep::Generating);
                let generated = self.generator.generate(ctx).await?;
                *candidate = Some(generated.clone());
                generated
            }
        };

        self.trace_state(attempt, RepairState::ValidatingCandidate);
        if let Err(e) = self.validator.validate_set(&current) {
            self.log_validation_failure(attempt, "candidate", &e);
            return Err(e.into());
        }

        self.trace_state(attempt, RepairState::NeedFix);
        progress.on_step(attempt, PassStep::Reviewing);
        let verdict = self.fixer.review_or_fix(ctx, &current).await?;

        let fixed = match verdict {
            FixerVerdict::Unchanged => {
                self.log_verdict(attempt, "unchanged");
                current
            }
            FixerVerdict::Replacement(replacement) => {
                self.log_verdict(attempt, "replacement");
                replacement
            }
        };

        self.trace_state(attempt, RepairState::ValidatingFixed);
        self.validator.validate_set(&fixed).map_err(|e| {
            self.log_validation_failure(attempt, "fixed", &e);
            PassError::from(e)
        })
    }

    fn trace_state(&self, attempt: u32, state: RepairState) {
        debug!("Pass {}: {}", attempt, state.as_str());
    }

    fn log_validation_failure(&self, attempt: u32, stage: &str, err: &ValidationError) {
        debug!("Pass {}: {} rejected: {}", attempt, stage, err);
        self.transcript.log(TranscriptEvent::new(
            "validation_failed",
            json!({
                "attempt": attempt,
                "stage": stage,
                "kind": err.kind().as_str(),
                "error": err.to_string(),
            }),
        ));
    }

    fn log_verdict(&self, attempt: u32, verdict: &str) {
        debug!("Pass {}: fixer verdict {}", attempt, verdict);
        self.transcript.log(TranscriptEvent::new(
            "fixer_verdict",
            json!({ "attempt": attempt, "verdict": verdict }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use pasalacabra_domain::{Alphabet, ErrorKind, GameRules, PrefixTemplates};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    // ==================== Fixtures ====================

    fn rules() -> GameRules {
        GameRules::new(
            "set_01",
            Alphabet::new(["A", "Ñ", "R"], 'Ñ').unwrap(),
            PrefixTemplates::spanish(),
        )
    }

    fn validator() -> SetValidator {
        SetValidator::new(rules()).unwrap()
    }

    fn ctx() -> GameContext {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        GameContext::new(date, start, vec!["Geografía".to_string()])
    }

    fn valid_set() -> Value {
        json!({
            "id": "set_01",
            "title": "Pasalacabra 2026-01-05 · No. 5",
            "questions": [
                { "letter": "A", "question": "Empieza por A: Ave rapaz de gran tamaño", "answer": "Águila" },
                { "letter": "Ñ", "question": "Contiene la Ñ: Ave corredora sudamericana", "answer": "Ñandú" },
                { "letter": "R", "question": "Empieza por R: Capital de Italia", "answer": "Roma" },
            ],
        })
    }

    /// Valid shape, but the answer for R leaks into its question.
    fn leaky_set() -> Value {
        let mut set = valid_set();
        set["questions"][2]["question"] = json!("Empieza por R: Roma es la capital de Italia");
        set
    }

    /// Letters out of order.
    fn permuted_set() -> Value {
        let mut set = valid_set();
        let questions = set["questions"].as_array_mut().unwrap();
        questions.swap(0, 2);
        set
    }

    // ==================== Mock collaborators ====================

    struct MockGenerator {
        responses: Mutex<VecDeque<Result<Value, CollaboratorError>>>,
        calls: AtomicU32,
    }

    impl MockGenerator {
        fn new(responses: Vec<Result<Value, CollaboratorError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SetGenerator for MockGenerator {
        async fn generate(&self, _ctx: &GameContext) -> Result<Value, CollaboratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string()).into()))
        }
    }

    struct MockFixer {
        responses: Mutex<VecDeque<Result<FixerVerdict, CollaboratorError>>>,
        seen: Mutex<Vec<Value>>,
    }

    impl MockFixer {
        fn new(responses: Vec<Result<FixerVerdict, CollaboratorError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SetFixer for MockFixer {
        async fn review_or_fix(
            &self,
            _ctx: &GameContext,
            candidate: &Value,
        ) -> Result<FixerVerdict, CollaboratorError> {
            self.seen.lock().unwrap().push(candidate.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string()).into()))
        }
    }

    struct RecordingTranscript {
        events: Mutex<Vec<&'static str>>,
    }

    impl TranscriptLogger for RecordingTranscript {
        fn log(&self, event: TranscriptEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn repair_loop(
        generator: &Arc<MockGenerator>,
        fixer: &Arc<MockFixer>,
        passes: u32,
    ) -> RepairLoop<MockGenerator, MockFixer> {
        RepairLoop::new(Arc::clone(generator), Arc::clone(fixer), validator(), passes)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_accepts_on_first_pass_when_fixer_says_ok() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(valid_set())]));
        let fixer = Arc::new(MockFixer::new(vec![Ok(FixerVerdict::Unchanged)]));

        let outcome = repair_loop(&generator, &fixer, 3).run(&ctx()).await.unwrap();

        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.set.questions.len(), 3);
        assert_eq!(outcome.set.questions[1].answer, "Ñandú");
        assert_eq!(generator.calls(), 1);
        assert_eq!(fixer.calls(), 1);
    }

    #[tokio::test]
    async fn test_replacement_is_returned_when_valid() {
        let mut replacement = valid_set();
        replacement["questions"][2]["question"] = json!("Empieza por R: Animal que lleva carga");
        replacement["questions"][2]["answer"] = json!("Reno");

        let generator = Arc::new(MockGenerator::new(vec![Ok(valid_set())]));
        let fixer = Arc::new(MockFixer::new(vec![Ok(FixerVerdict::Replacement(
            replacement,
        ))]));

        let outcome = repair_loop(&generator, &fixer, 3).run(&ctx()).await.unwrap();
        assert_eq!(outcome.set.questions[2].answer, "Reno");
    }

    #[tokio::test]
    async fn test_invalid_candidate_is_retained_not_regenerated() {
        let generator = Arc::new(MockGenerator::new(vec![
            Ok(permuted_set()),
            Ok(valid_set()),
        ]));
        let fixer = Arc::new(MockFixer::new(vec![Ok(FixerVerdict::Unchanged)]));

        let err = repair_loop(&generator, &fixer, 3)
            .run(&ctx())
            .await
            .unwrap_err();

        assert_eq!(generator.calls(), 1);
        // The fixer never sees an invalid candidate.
        assert_eq!(fixer.calls(), 0);
        match err {
            RepairError::Exhausted {
                passes: 3,
                last_attempt: 3,
                source: PassError::Validation(e),
            } => assert_eq!(e.kind(), ErrorKind::Schema),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generator_failure_leads_to_regeneration() {
        let generator = Arc::new(MockGenerator::new(vec![
            Err(CollaboratorError::EmptyResponse),
            Ok(valid_set()),
        ]));
        let fixer = Arc::new(MockFixer::new(vec![Ok(FixerVerdict::Unchanged)]));

        let outcome = repair_loop(&generator, &fixer, 3).run(&ctx()).await.unwrap();

        assert_eq!(outcome.attempts, 2);
        assert_eq!(generator.calls(), 2);
        assert_eq!(fixer.calls(), 1);
    }

    #[tokio::test]
    async fn test_valid_candidate_is_kept_when_fix_is_invalid() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(valid_set())]));
        let fixer = Arc::new(MockFixer::new(vec![
            Ok(FixerVerdict::Replacement(leaky_set())),
            Ok(FixerVerdict::Unchanged),
        ]));

        let outcome = repair_loop(&generator, &fixer, 3).run(&ctx()).await.unwrap();

        assert_eq!(outcome.attempts, 2);
        assert_eq!(generator.calls(), 1);
        let seen = fixer.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
    }

    #[tokio::test]
    async fn test_valid_candidate_survives_fixer_transport_failure() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(valid_set())]));
        let fixer = Arc::new(MockFixer::new(vec![
            Err(GatewayError::Timeout.into()),
            Ok(FixerVerdict::Unchanged),
        ]));

        let outcome = repair_loop(&generator, &fixer, 2).run(&ctx()).await.unwrap();
        assert_eq!(outcome.attempts, 2);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_exhaustion_after_exactly_max_passes() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(leaky_set()), Ok(valid_set())]));
        let fixer = Arc::new(MockFixer::new(vec![Ok(FixerVerdict::Unchanged)]));

        let err = repair_loop(&generator, &fixer, 3)
            .run(&ctx())
            .await
            .unwrap_err();

        assert_eq!(generator.calls(), 1);
        assert_eq!(fixer.calls(), 0);
        match err {
            RepairError::Exhausted {
                passes,
                last_attempt,
                source: PassError::Validation(e),
            } => {
                assert_eq!(passes, 3);
                assert_eq!(last_attempt, 3);
                assert_eq!(e.kind(), ErrorKind::Leakage);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reported_error_is_the_one_from_the_last_pass() {
        let generator = Arc::new(MockGenerator::new(vec![
            Err(CollaboratorError::EmptyResponse),
            Ok(permuted_set()),
        ]));
        let fixer = Arc::new(MockFixer::new(vec![]));

        let err = repair_loop(&generator, &fixer, 2)
            .run(&ctx())
            .await
            .unwrap_err();

        match err {
            RepairError::Exhausted {
                last_attempt,
                source: PassError::Validation(e),
                ..
            } => {
                assert_eq!(last_attempt, 2);
                assert_eq!(e.kind(), ErrorKind::Schema);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_collaborator_error_as_last_error() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(valid_set())]));
        let fixer = Arc::new(MockFixer::new(vec![
            Ok(FixerVerdict::Replacement(leaky_set())),
            Err(CollaboratorError::EmptyResponse),
        ]));

        let err = repair_loop(&generator, &fixer, 2)
            .run(&ctx())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RepairError::Exhausted {
                last_attempt: 2,
                source: PassError::Collaborator(CollaboratorError::EmptyResponse),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_external_calls_bounded_by_twice_the_passes() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(valid_set())]));
        let fixer = Arc::new(MockFixer::new(vec![
            Ok(FixerVerdict::Replacement(leaky_set())),
            Ok(FixerVerdict::Replacement(permuted_set())),
            Err(CollaboratorError::EmptyResponse),
        ]));

        let err = repair_loop(&generator, &fixer, 3)
            .run(&ctx())
            .await
            .unwrap_err();

        assert!(matches!(err, RepairError::Exhausted { passes: 3, .. }));
        let calls = generator.calls() as usize + fixer.calls();
        assert!(calls <= 6);
    }

    #[tokio::test]
    async fn test_zero_passes_is_invalid_policy() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(valid_set())]));
        let fixer = Arc::new(MockFixer::new(vec![Ok(FixerVerdict::Unchanged)]));

        let err = repair_loop(&generator, &fixer, 0)
            .run(&ctx())
            .await
            .unwrap_err();

        assert!(matches!(err, RepairError::InvalidPolicy));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_transcript_records_pass_events() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(valid_set())]));
        let fixer = Arc::new(MockFixer::new(vec![
            Ok(FixerVerdict::Replacement(leaky_set())),
            Ok(FixerVerdict::Unchanged),
        ]));
        let transcript = Arc::new(RecordingTranscript {
            events: Mutex::new(Vec::new()),
        });

        repair_loop(&generator, &fixer, 3)
            .with_transcript(transcript.clone())
            .run(&ctx())
            .await
            .unwrap();

        let events = transcript.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                "fixer_verdict",
                "validation_failed",
                "fixer_verdict",
                "set_accepted"
            ]
        );
    }

    #[test]
    fn test_validation_pass_error_display_names_kind() {
        let err: PassError = ValidationError::DuplicateAnswer {
            answer: "Roma".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Validation failed (duplicate_answer): Duplicate answer detected: Roma"
        );
    }

    #[test]
    fn test_exhausted_display_mentions_last_pass() {
        let err = RepairError::Exhausted {
            passes: 3,
            last_attempt: 3,
            source: PassError::Collaborator(CollaboratorError::EmptyResponse),
        };
        let msg = err.to_string();
        assert!(msg.contains("3 passes"));
        assert!(msg.contains("pass 3"));
        assert!(msg.contains("Empty response"));
    }
}
