use chrono::{DateTime, TimeZone, Utc};

use super::model::{Comment, TheoryCategory, Thread, VoteType};
use crate::error::{Result, WildoraError};

#[derive(Debug, Clone, Default)]
pub struct NewThread {
    pub title: String,
    pub content: String,
    pub category: TheoryCategory,
    pub vote_type: VoteType,
}

#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone, Default)]
pub struct TheoryBoard {
    threads: Vec<Thread>,
}

impl TheoryBoard {
    pub fn new(threads: Vec<Thread>) -> Self {
        Self { threads }
    }

    pub fn sample() -> Self {
        Self::new(sample_threads())
    }

    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    pub fn thread(&self, thread_id: &str) -> Option<&Thread> {
        self.threads.iter().find(|t| t.id == thread_id)
    }

    /// Adds `delta` to the thread's votes. Returns the new total.
    pub fn vote(&mut self, thread_id: &str, delta: i64) -> Option<i64> {
        let thread = self.threads.iter_mut().find(|t| t.id == thread_id)?;
        thread.votes = thread.votes.saturating_add(delta);
        Some(thread.votes)
    }

    pub fn submit_thread(&mut self, request: NewThread) -> Result<&Thread> {
        self.submit_thread_at(request, Utc::now())
    }

    /// Appends a thread with zero votes. Title and content are required.
    pub fn submit_thread_at(&mut self, request: NewThread, now: DateTime<Utc>) -> Result<&Thread> {
        if request.title.trim().is_empty() || request.content.trim().is_empty() {
            return Err(WildoraError::validation(
                "theory thread needs a title and content",
            ));
        }
        let id = (self.threads.len() + 1).to_string();
        self.threads.push(Thread {
            id,
            title: request.title,
            content: request.content,
            category: request.category,
            votes: 0,
            vote_type: request.vote_type,
            comments: Vec::new(),
            created_at: now,
        });
        Ok(&self.threads[self.threads.len() - 1])
    }

    pub fn submit_comment(&mut self, thread_id: &str, request: NewComment) -> Result<&Comment> {
        self.submit_comment_at(thread_id, request, Utc::now())
    }

    /// Appends a comment to the thread. Content and author are required.
    pub fn submit_comment_at(
        &mut self,
        thread_id: &str,
        request: NewComment,
        now: DateTime<Utc>,
    ) -> Result<&Comment> {
        if request.content.trim().is_empty() || request.author.trim().is_empty() {
            return Err(WildoraError::validation(
                "comment needs content and an author",
            ));
        }
        let thread = self
            .threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or_else(|| WildoraError::not_found("theory_thread", thread_id))?;

        let id = format!("c{}", thread.comments.len() + 1);
        thread.comments.push(Comment {
            id,
            content: request.content,
            author: request.author,
            created_at: now,
        });
        Ok(&thread.comments[thread.comments.len() - 1])
    }
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn sample_threads() -> Vec<Thread> {
    vec![
        Thread {
            id: "1".to_string(),
            title: "TTPD Fortnight Video: Chessboard Symbolism".to_string(),
            content: "The black-and-white chessboard in the \"Fortnight\" video could symbolize a \
                      battle of duality. The 13 chess pieces might hint at a July 13 announcement."
                .to_string(),
            category: TheoryCategory::MusicVideo,
            votes: 67,
            vote_type: VoteType::Hearts,
            comments: vec![Comment {
                id: "c1".to_string(),
                content: "The typewriter font in the video screams poetry!".to_string(),
                author: "PoetSwiftie".to_string(),
                created_at: at(2025, 7, 17, 14, 20),
            }],
            created_at: at(2025, 7, 16, 9, 0),
        },
        Thread {
            id: "2".to_string(),
            title: "Reputation TV Easter Eggs in Recent Posts".to_string(),
            content: "A recent post had a snake emoji in the caption. Could this confirm the \
                      re-recording is dropping on the album's anniversary?"
                .to_string(),
            category: TheoryCategory::EasterEgg,
            votes: 123,
            vote_type: VoteType::SnakeRings,
            comments: Vec::new(),
            created_at: at(2025, 7, 15, 18, 45),
        },
        Thread {
            id: "3".to_string(),
            title: "Secret Message in TTPD Album Booklet".to_string(),
            content: "The lyric booklet has hidden initials in the artwork on page 13.".to_string(),
            category: TheoryCategory::SecretMessage,
            votes: 45,
            vote_type: VoteType::Hearts,
            comments: vec![Comment {
                id: "c2".to_string(),
                content: "I saw that too! Maybe it's a nod to a debut album re-record!".to_string(),
                author: "EasterEggHunter".to_string(),
                created_at: at(2025, 7, 16, 11, 30),
            }],
            created_at: at(2025, 7, 15, 10, 15),
        },
    ]
}
