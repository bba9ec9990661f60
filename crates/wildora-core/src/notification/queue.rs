//! Sequencing of achievement unlock notifications.
//!
//! The queue is a pure state machine over a caller-supplied clock expressed
//! as a `Duration` since an arbitrary origin. Drivers call [`NotificationQueue::advance`]
//! at or after [`NotificationQueue::next_deadline`] and forward the emitted
//! events to the view.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::achievement::Achievement;
use crate::config::NotificationSettings;

/// Delays that drive the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    /// Extra delay per position inside one batch (+0, +stagger, +2*stagger, ...)
    pub stagger: Duration,
    /// How long a notification stays fully visible
    pub display: Duration,
    /// Fade-out before removal
    pub fade: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(2000),
            display: Duration::from_millis(4000),
            fade: Duration::from_millis(300),
        }
    }
}

impl From<&NotificationSettings> for NotificationTiming {
    fn from(settings: &NotificationSettings) -> Self {
        Self {
            stagger: Duration::from_millis(settings.stagger_ms),
            display: Duration::from_millis(settings.display_ms),
            fade: Duration::from_millis(settings.fade_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "achievement")]
pub enum NotificationEvent {
    /// Notification slides in
    Shown(Achievement),
    /// Auto-dismiss or user dismissal started the fade-out
    FadingOut(Achievement),
    /// Notification left the view; the slot is free
    Removed(Achievement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visible { hide_at: Duration },
    FadingOut { remove_at: Duration },
}

#[derive(Debug, Clone)]
struct Active {
    achievement: Achievement,
    phase: Phase,
}

#[derive(Debug, Clone)]
struct Pending {
    achievement: Achievement,
    not_before: Duration,
}

/// Shows at most one notification at a time.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    timing: NotificationTiming,
    pending: VecDeque<Pending>,
    active: Option<Active>,
    /// When the display slot last became free
    free_since: Duration,
}

impl NotificationQueue {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            timing,
            pending: VecDeque::new(),
            active: None,
            free_since: Duration::ZERO,
        }
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    /// Queues the achievements of one evaluation pass, staggered by position.
    pub fn enqueue_batch<I>(&mut self, now: Duration, achievements: I)
    where
        I: IntoIterator<Item = Achievement>,
    {
        for (position, achievement) in achievements.into_iter().enumerate() {
            let not_before = now + self.timing.stagger * position as u32;
            self.pending.push_back(Pending {
                achievement,
                not_before,
            });
        }
    }

    /// User dismissal: starts the fade-out of the visible notification.
    pub fn dismiss(&mut self, now: Duration) -> Option<NotificationEvent> {
        let active = self.active.as_mut()?;
        match active.phase {
            Phase::Visible { .. } => {
                active.phase = Phase::FadingOut {
                    remove_at: now + self.timing.fade,
                };
                Some(NotificationEvent::FadingOut(active.achievement.clone()))
            }
            Phase::FadingOut { .. } => None,
        }
    }

    /// Applies every transition due at or before `now`, in order.
    pub fn advance(&mut self, now: Duration) -> Vec<NotificationEvent> {
        let mut events = Vec::new();

        loop {
            match self.active.as_mut() {
                Some(active) => match active.phase {
                    Phase::Visible { hide_at } if hide_at <= now => {
                        active.phase = Phase::FadingOut {
                            remove_at: hide_at + self.timing.fade,
                        };
                        events.push(NotificationEvent::FadingOut(active.achievement.clone()));
                    }
                    Phase::FadingOut { remove_at } if remove_at <= now => {
                        if let Some(done) = self.active.take() {
                            events.push(NotificationEvent::Removed(done.achievement));
                        }
                        self.free_since = remove_at;
                    }
                    _ => break,
                },
                None => {
                    let Some(show_at) = self.next_show_time() else {
                        break;
                    };
                    if show_at > now {
                        break;
                    }
                    let Some(next) = self.pending.pop_front() else {
                        break;
                    };
                    events.push(NotificationEvent::Shown(next.achievement.clone()));
                    self.active = Some(Active {
                        achievement: next.achievement,
                        phase: Phase::Visible {
                            hide_at: show_at + self.timing.display,
                        },
                    });
                }
            }
        }

        events
    }

    /// Time of the next transition, `None` when idle.
    pub fn next_deadline(&self) -> Option<Duration> {
        match &self.active {
            Some(Active {
                phase: Phase::Visible { hide_at },
                ..
            }) => Some(*hide_at),
            Some(Active {
                phase: Phase::FadingOut { remove_at },
                ..
            }) => Some(*remove_at),
            None => self.next_show_time(),
        }
    }

    /// The notification currently on screen (visible or fading).
    pub fn current(&self) -> Option<&Achievement> {
        self.active.as_ref().map(|a| &a.achievement)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.pending.is_empty()
    }

    fn next_show_time(&self) -> Option<Duration> {
        self.pending
            .front()
            .map(|p| p.not_before.max(self.free_since))
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(NotificationTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::{FIRST_QUIZ, PERFECT_SCORE, SPEED_DEMON, find_achievement};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn achievement(id: &str) -> Achievement {
        find_achievement(id).unwrap().clone()
    }

    fn timing(stagger: u64, display: u64, fade: u64) -> NotificationTiming {
        NotificationTiming {
            stagger: ms(stagger),
            display: ms(display),
            fade: ms(fade),
        }
    }

    #[test]
    fn test_single_notification_lifecycle() {
        let mut queue = NotificationQueue::default();
        queue.enqueue_batch(ms(0), [achievement(FIRST_QUIZ)]);

        assert_eq!(
            queue.advance(ms(0)),
            vec![NotificationEvent::Shown(achievement(FIRST_QUIZ))]
        );
        assert_eq!(queue.next_deadline(), Some(ms(4000)));
        assert!(queue.advance(ms(3999)).is_empty());

        assert_eq!(
            queue.advance(ms(4000)),
            vec![NotificationEvent::FadingOut(achievement(FIRST_QUIZ))]
        );
        assert_eq!(
            queue.advance(ms(4300)),
            vec![NotificationEvent::Removed(achievement(FIRST_QUIZ))]
        );
        assert!(queue.is_idle());
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn test_batch_never_overlaps() {
        // Short display so the stagger, not the slot, decides when each shows.
        let mut queue = NotificationQueue::new(timing(2000, 1000, 300));
        queue.enqueue_batch(
            ms(0),
            [
                achievement(FIRST_QUIZ),
                achievement(PERFECT_SCORE),
                achievement(SPEED_DEMON),
            ],
        );

        let mut shown = Vec::new();
        let mut visible = 0i32;
        let mut max_visible = 0;
        let mut t = 0;
        while t <= 10_000 {
            for event in queue.advance(ms(t)) {
                match event {
                    NotificationEvent::Shown(a) => {
                        visible += 1;
                        shown.push((t, a.id));
                    }
                    NotificationEvent::Removed(_) => visible -= 1,
                    NotificationEvent::FadingOut(_) => {}
                }
                max_visible = max_visible.max(visible);
            }
            t += 100;
        }

        assert_eq!(max_visible, 1);
        assert_eq!(
            shown,
            vec![
                (0, FIRST_QUIZ.to_string()),
                (2000, PERFECT_SCORE.to_string()),
                (4000, SPEED_DEMON.to_string()),
            ]
        );
    }

    #[test]
    fn test_staggered_item_waits_for_the_slot() {
        let mut queue = NotificationQueue::default();
        queue.enqueue_batch(ms(0), [achievement(FIRST_QUIZ), achievement(PERFECT_SCORE)]);

        queue.advance(ms(0));
        // perfect_score is due at 2000 but first_quiz holds the slot until 4300
        assert!(queue.advance(ms(2000)).is_empty());
        assert_eq!(queue.current().map(|a| a.id.as_str()), Some(FIRST_QUIZ));

        let events = queue.advance(ms(4300));
        assert_eq!(
            events,
            vec![
                NotificationEvent::FadingOut(achievement(FIRST_QUIZ)),
                NotificationEvent::Removed(achievement(FIRST_QUIZ)),
                NotificationEvent::Shown(achievement(PERFECT_SCORE)),
            ]
        );
        assert_eq!(queue.next_deadline(), Some(ms(8300)));
    }

    #[test]
    fn test_dismiss_fades_out_early() {
        let mut queue = NotificationQueue::default();
        queue.enqueue_batch(ms(0), [achievement(FIRST_QUIZ), achievement(PERFECT_SCORE)]);
        queue.advance(ms(0));

        assert_eq!(
            queue.dismiss(ms(1000)),
            Some(NotificationEvent::FadingOut(achievement(FIRST_QUIZ)))
        );
        // a second dismissal while fading is ignored
        assert_eq!(queue.dismiss(ms(1100)), None);
        assert_eq!(queue.next_deadline(), Some(ms(1300)));

        assert_eq!(
            queue.advance(ms(1300)),
            vec![NotificationEvent::Removed(achievement(FIRST_QUIZ))]
        );
        // slot is free but the staggered item is not due before 2000
        assert_eq!(queue.next_deadline(), Some(ms(2000)));
        assert_eq!(
            queue.advance(ms(2000)),
            vec![NotificationEvent::Shown(achievement(PERFECT_SCORE))]
        );
    }

    #[test]
    fn test_dismiss_when_idle_is_noop() {
        let mut queue = NotificationQueue::default();
        assert_eq!(queue.dismiss(ms(0)), None);
    }
}
