//! Quiz flow: answering, attempt submission, coin award and badges.

use std::sync::Arc;

use wildora_core::achievement::{Achievement, evaluate_quiz};
use wildora_core::activity::{ActivityApi, QuizAttempt};
use wildora_core::quiz::{QuizKind, QuizProgress, QuizResult, QuizSession, questions_for};
use wildora_core::user::UserProfile;
use wildora_core::{Result, WildoraError};

use crate::achievement_service::AchievementService;
use crate::notification_center::NotificationCenter;
use crate::profile_store::ProfileStore;

/// Side effects of one completed quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub result: QuizResult,
    /// Coins credited after the attempt was accepted
    pub coins_earned: Option<u64>,
    /// Badges granted by this completion, in grant order
    pub granted: Vec<&'static Achievement>,
    /// Profile after all updates, if one is loaded
    pub profile: Option<UserProfile>,
}

pub struct QuizUseCase {
    store: Arc<ProfileStore>,
    activity: Arc<dyn ActivityApi>,
    achievements: Arc<AchievementService>,
    notifications: Option<NotificationCenter>,
}

impl QuizUseCase {
    pub fn new(
        store: Arc<ProfileStore>,
        activity: Arc<dyn ActivityApi>,
        achievements: Arc<AchievementService>,
    ) -> Self {
        Self {
            store,
            activity,
            achievements,
            notifications: None,
        }
    }

    pub fn with_notifications(mut self, notifications: NotificationCenter) -> Self {
        self.notifications = Some(notifications);
        self
    }

    /// New session over the built-in questions.
    pub fn start(&self, kind: QuizKind) -> Result<QuizSession> {
        QuizSession::new(kind, questions_for(kind))
    }

    /// Records an answer; the answer that completes the quiz also runs
    /// [`QuizUseCase::complete`].
    pub async fn answer(
        &self,
        session: &mut QuizSession,
        choice: usize,
    ) -> Result<(QuizProgress, Option<QuizOutcome>)> {
        let progress = session.answer(choice)?;
        let outcome = match progress {
            QuizProgress::Completed(_) => Some(self.complete(session).await?),
            QuizProgress::Next { .. } => None,
        };
        Ok((progress, outcome))
    }

    /// Submits the attempt, awards coins, grants badges and queues the
    /// unlock notifications.
    ///
    /// Nothing is sent when no profile is loaded. A failed submission or
    /// coin award is logged and the badges are still evaluated.
    pub async fn complete(&self, session: &QuizSession) -> Result<QuizOutcome> {
        let result = session
            .result()
            .cloned()
            .ok_or_else(|| WildoraError::validation("quiz is not completed"))?;

        if self.store.profile().await.is_none() {
            tracing::debug!("[QuizUseCase] No profile loaded, result kept local");
            return Ok(QuizOutcome {
                result,
                coins_earned: None,
                granted: Vec::new(),
                profile: None,
            });
        }

        let attempt = QuizAttempt::from_result(session.kind(), &result, session.questions().len());
        let coins_earned = match self.activity.submit_quiz_attempt(&attempt).await {
            Ok(receipt) => self.award_coins(receipt.coins_earned).await,
            Err(e) => {
                tracing::warn!("[QuizUseCase] Failed to submit quiz attempt: {}", e);
                None
            }
        };

        let existing = self
            .store
            .profile()
            .await
            .map(|p| p.achievement_badges)
            .unwrap_or_default();
        let earned = evaluate_quiz(&result, existing.as_slice());
        let granted = self.achievements.grant_all(earned).await;

        if let Some(center) = &self.notifications {
            center.enqueue(granted.iter().map(|a| (*a).clone()).collect());
        }

        tracing::info!(
            "[QuizUseCase] Quiz completed: {}/{} in {}s, {} badge(s)",
            result.score,
            result.total_points,
            result.time_taken_secs,
            granted.len()
        );

        Ok(QuizOutcome {
            result,
            coins_earned,
            granted,
            profile: self.store.profile().await,
        })
    }

    async fn award_coins(&self, coins: u64) -> Option<u64> {
        if coins == 0 {
            return Some(0);
        }
        match self.store.add_swift_coins(coins).await {
            Ok(Some(_)) => Some(coins),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("[QuizUseCase] Failed to award {} coins: {}", coins, e);
                None
            }
        }
    }
}
