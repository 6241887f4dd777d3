//! Publish Daily Set use case
//!
//! Runs the repair loop for a round and persists the accepted set.

use crate::ports::collaborators::{SetFixer, SetGenerator};
use crate::ports::progress::{NoProgress, RepairProgressNotifier};
use crate::ports::set_store::{SetStore, StoreError};
use crate::use_cases::repair_loop::{RepairError, RepairLoop};
use pasalacabra_domain::{GameContext, QuestionSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while publishing a set
#[derive(Error, Debug)]
pub enum PublishError {
    #[error(transparent)]
    Repair(#[from] RepairError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input for the PublishDailySet use case
#[derive(Debug, Clone)]
pub struct PublishInput {
    pub context: GameContext,
    /// Skip persistence and only return the accepted set
    pub dry_run: bool,
}

impl PublishInput {
    pub fn new(context: GameContext) -> Self {
        Self {
            context,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct PublishOutput {
    pub set: QuestionSet,
    /// Where the set was written; `None` on dry runs
    pub location: Option<String>,
    pub topics: Vec<String>,
    pub attempts: u32,
}

/// Use case for generating, validating and writing the daily set
pub struct PublishDailySetUseCase<Gen: SetGenerator, Fix: SetFixer> {
    repair: RepairLoop<Gen, Fix>,
    store: Arc<dyn SetStore>,
}

impl<Gen: SetGenerator, Fix: SetFixer> PublishDailySetUseCase<Gen, Fix> {
    pub fn new(repair: RepairLoop<Gen, Fix>, store: Arc<dyn SetStore>) -> Self {
        Self { repair, store }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: PublishInput) -> Result<PublishOutput, PublishError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: PublishInput,
        progress: &dyn RepairProgressNotifier,
    ) -> Result<PublishOutput, PublishError> {
        let outcome = self
            .repair
            .run_with_progress(&input.context, progress)
            .await?;

        let location = if input.dry_run {
            info!("Dry run: not writing {}", outcome.set.id);
            None
        } else {
            let location = self.store.save(&outcome.set)?;
            info!("Wrote {} to {}", outcome.set.id, location);
            Some(location)
        };

        Ok(PublishOutput {
            set: outcome.set,
            location,
            topics: input.context.topics,
            attempts: outcome.attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::collaborators::CollaboratorError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use pasalacabra_domain::{Alphabet, FixerVerdict, GameRules, PrefixTemplates, SetValidator};
    use serde_json::{Value, json};
    use std::sync::Mutex;

    struct FixedGenerator(Value);

    #[async_trait]
    impl SetGenerator for FixedGenerator {
        async fn generate(&self, _ctx: &GameContext) -> Result<Value, CollaboratorError> {
            Ok(self.0.clone())
        }
    }

    struct OkFixer;

    #[async_trait]
    impl SetFixer for OkFixer {
        async fn review_or_fix(
            &self,
            _ctx: &GameContext,
            _candidate: &Value,
        ) -> Result<FixerVerdict, CollaboratorError> {
            Ok(FixerVerdict::Unchanged)
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        saved: Mutex<Vec<QuestionSet>>,
    }

    impl SetStore for MemoryStore {
        fn save(&self, set: &QuestionSet) -> Result<String, StoreError> {
            self.saved.lock().unwrap().push(set.clone());
            Ok("memory://set_01".to_string())
        }
    }

    fn rules() -> GameRules {
        GameRules::new(
            "set_01",
            Alphabet::new(["A", "Ñ", "R"], 'Ñ').unwrap(),
            PrefixTemplates::spanish(),
        )
    }

    fn context() -> GameContext {
        GameContext::new(
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            vec!["Naturaleza".to_string()],
        )
    }

    fn set_json(third_question: &str) -> Value {
        json!({
            "id": "set_01",
            "title": "Pasalacabra 2026-02-01 · No. 32",
            "questions": [
                { "letter": "A", "question": "Empieza por A: Ave rapaz de gran tamaño", "answer": "Águila" },
                { "letter": "Ñ", "question": "Contiene la Ñ: Ave corredora sudamericana", "answer": "Ñandú" },
                { "letter": "R", "question": third_question, "answer": "Rana" },
            ],
        })
    }

    fn use_case(
        generated: Value,
        store: Arc<MemoryStore>,
    ) -> PublishDailySetUseCase<FixedGenerator, OkFixer> {
        let repair = RepairLoop::new(
            Arc::new(FixedGenerator(generated)),
            Arc::new(OkFixer),
            SetValidator::new(rules()).unwrap(),
            2,
        );
        PublishDailySetUseCase::new(repair, store)
    }

    #[tokio::test]
    async fn test_accepted_set_is_saved() {
        let store = Arc::new(MemoryStore::default());
        let output = use_case(
            set_json("Empieza por R: Anfibio que croa"),
            Arc::clone(&store),
        )
        .execute(PublishInput::new(context()))
        .await
        .unwrap();

        assert_eq!(output.location.as_deref(), Some("memory://set_01"));
        assert_eq!(output.topics, vec!["Naturaleza".to_string()]);
        assert_eq!(output.attempts, 1);
        assert_eq!(store.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let store = Arc::new(MemoryStore::default());
        let output = use_case(
            set_json("Empieza por R: Anfibio que croa"),
            Arc::clone(&store),
        )
        .execute(PublishInput::new(context()).dry_run())
        .await
        .unwrap();

        assert!(output.location.is_none());
        assert!(store.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_exhaustion_writes_nothing() {
        let store = Arc::new(MemoryStore::default());
        let err = use_case(
            set_json("Empieza por R: La rana croa en la charca"),
            Arc::clone(&store),
        )
        .execute(PublishInput::new(context()))
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            PublishError::Repair(RepairError::Exhausted { passes: 2, .. })
        ));
        assert!(store.saved.lock().unwrap().is_empty());
    }
}
