//! Toast notification queue.
//!
//! Toasts are born invisible, revealed shortly after insertion so the
//! entrance transition has a frame to start from, auto-dismissed when
//! their duration elapses, and removed in two phases: dismissal marks a
//! toast invisible, physical removal follows after a fixed exit delay so
//! the departure transition can play. Only insertion order is guaranteed
//! for overlapping toasts.
//!
//! The queue takes the current `Instant` as an argument instead of
//! reading the clock itself, so the driving loop owns time and tests are
//! deterministic.

use std::time::{Duration, Instant};

/// Default time a toast stays on screen.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Delay before a freshly-shown toast becomes visible.
const REVEAL_DELAY: Duration = Duration::from_millis(50);

/// Delay between dismissal and physical removal.
const EXIT_DELAY: Duration = Duration::from_millis(300);

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Inserted but not yet revealed.
    Pending { reveal_at: Instant },
    Visible,
    /// Dismissed, waiting out the exit transition.
    Leaving { remove_at: Instant },
}

/// One queued notification.
#[derive(Debug)]
pub struct Toast {
    id: u64,
    message: String,
    kind: ToastKind,
    phase: Phase,
    expires_at: Instant,
}

impl Toast {
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Whether the toast is currently shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible)
    }
}

/// Insertion-ordered toast queue.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast; returns its id.
    pub fn show(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            phase: Phase::Pending {
                reveal_at: now + REVEAL_DELAY,
            },
            expires_at: now + duration,
        });
        id
    }

    pub fn success(&mut self, now: Instant, message: impl Into<String>) -> u64 {
        self.show(now, message, ToastKind::Success, DEFAULT_DURATION)
    }

    pub fn error(&mut self, now: Instant, message: impl Into<String>) -> u64 {
        self.show(now, message, ToastKind::Error, DEFAULT_DURATION)
    }

    pub fn warning(&mut self, now: Instant, message: impl Into<String>) -> u64 {
        self.show(now, message, ToastKind::Warning, DEFAULT_DURATION)
    }

    pub fn info(&mut self, now: Instant, message: impl Into<String>) -> u64 {
        self.show(now, message, ToastKind::Info, DEFAULT_DURATION)
    }

    /// Phase one of removal: mark the toast invisible and schedule its
    /// physical removal. Unknown ids and already-leaving toasts are
    /// ignored.
    pub fn dismiss(&mut self, now: Instant, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id)
            && !matches!(toast.phase, Phase::Leaving { .. })
        {
            toast.phase = Phase::Leaving {
                remove_at: now + EXIT_DELAY,
            };
        }
    }

    /// Advance the queue: reveal pending toasts, auto-dismiss expired
    /// ones, and drop toasts whose exit delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            if let Phase::Pending { reveal_at } = toast.phase
                && now >= reveal_at
            {
                toast.phase = Phase::Visible;
            }
        }

        let expired: Vec<u64> = self
            .toasts
            .iter()
            .filter(|toast| {
                !matches!(toast.phase, Phase::Leaving { .. }) && now >= toast.expires_at
            })
            .map(Toast::id)
            .collect();
        for id in expired {
            self.dismiss(now, id);
        }

        self.toasts
            .retain(|toast| !matches!(toast.phase, Phase::Leaving { remove_at } if now >= remove_at));
    }

    /// The queued toasts, in insertion order.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}
