#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use wildora_core::activity::{AchievementRecord, ActivityApi, QuizAttempt, QuizAttemptReceipt};
use wildora_core::user::{NewProfile, ProfileApi, ProfileUpdate, UserProfile};
use wildora_core::{Result, WildoraError};

pub fn profile(coins: u64, badges: &[&str]) -> UserProfile {
    UserProfile {
        id: 1,
        user_id: "user-1".to_string(),
        favorite_era: "midnights".to_string(),
        swift_coins: coins,
        achievement_badges: badges.iter().map(|b| b.to_string()).collect(),
        created_at: "2025-07-15T10:15:00Z".to_string(),
        updated_at: "2025-07-15T10:15:00Z".to_string(),
    }
}

/// In-memory profile endpoint that counts calls.
pub struct MockProfileApi {
    stored: Mutex<Option<UserProfile>>,
    pub fetch_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub updates: Mutex<Vec<ProfileUpdate>>,
    fail_fetch_with: Mutex<Option<WildoraError>>,
    fail_updates: Mutex<bool>,
    update_delay: Option<Duration>,
}

impl MockProfileApi {
    pub fn new(stored: Option<UserProfile>) -> Self {
        Self {
            stored: Mutex::new(stored),
            fetch_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            updates: Mutex::new(Vec::new()),
            fail_fetch_with: Mutex::new(None),
            fail_updates: Mutex::new(false),
            update_delay: None,
        }
    }

    pub fn with_update_delay(mut self, delay: Duration) -> Self {
        self.update_delay = Some(delay);
        self
    }

    pub fn fail_fetch(&self, err: WildoraError) {
        *self.fail_fetch_with.lock().unwrap() = Some(err);
    }

    pub fn fail_updates(&self, fail: bool) {
        *self.fail_updates.lock().unwrap() = fail;
    }

    pub fn stored(&self) -> Option<UserProfile> {
        self.stored.lock().unwrap().clone()
    }

    pub fn updates(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileApi for MockProfileApi {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_fetch_with.lock().unwrap().clone() {
            return Err(err);
        }
        self.stored
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| WildoraError::not_found("user_profile", "current user"))
    }

    async fn create_profile(&self, new: &NewProfile) -> Result<UserProfile> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut created = profile(new.swift_coins, &[]);
        created.favorite_era = new.favorite_era.clone();
        created.achievement_badges = new.achievement_badges.clone();
        *self.stored.lock().unwrap() = Some(created.clone());
        Ok(created)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.updates.lock().unwrap().push(update.clone());
        if let Some(delay) = self.update_delay {
            tokio::time::sleep(delay).await;
        }
        if *self.fail_updates.lock().unwrap() {
            return Err(WildoraError::network(Some(500), "Failed to update profile"));
        }

        let mut stored = self.stored.lock().unwrap();
        let current = stored
            .as_mut()
            .ok_or_else(|| WildoraError::not_found("user_profile", "current user"))?;
        if let Some(era) = &update.favorite_era {
            current.favorite_era = era.clone();
        }
        if let Some(coins) = update.swift_coins {
            current.swift_coins = coins;
        }
        if let Some(badges) = &update.achievement_badges {
            current.achievement_badges = badges.clone();
        }
        current.updated_at = "2025-07-16T09:00:00Z".to_string();
        Ok(current.clone())
    }
}

/// Activity endpoint that pays a fixed reward and records achievements.
pub struct MockActivityApi {
    coins_earned: u64,
    fail_attempts: bool,
    record_delay: Option<Duration>,
    pub attempts: Mutex<Vec<QuizAttempt>>,
    pub records: Mutex<Vec<AchievementRecord>>,
}

impl MockActivityApi {
    pub fn new(coins_earned: u64) -> Self {
        Self {
            coins_earned,
            fail_attempts: false,
            record_delay: None,
            attempts: Mutex::new(Vec::new()),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_attempts: true,
            ..Self::new(0)
        }
    }

    /// Round trip of `record_achievement`; the record lands after the delay.
    pub fn with_record_delay(mut self, delay: Duration) -> Self {
        self.record_delay = Some(delay);
        self
    }

    pub fn recorded_ids(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.achievement_id.clone())
            .collect()
    }
}

#[async_trait]
impl ActivityApi for MockActivityApi {
    async fn submit_quiz_attempt(&self, attempt: &QuizAttempt) -> Result<QuizAttemptReceipt> {
        self.attempts.lock().unwrap().push(attempt.clone());
        if self.fail_attempts {
            return Err(WildoraError::network(None, "connection refused"));
        }
        Ok(QuizAttemptReceipt {
            coins_earned: self.coins_earned,
        })
    }

    async fn record_achievement(&self, record: &AchievementRecord) -> Result<()> {
        if let Some(delay) = self.record_delay {
            tokio::time::sleep(delay).await;
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Lets spawned fire-and-forget tasks run.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
