//! Transient on-screen notifications.
//!
//! The queue is owned by the grid state and rendered declaratively by the UI every
//! frame. A notification goes through create → mount (push) → fade out → unmount
//! (prune). Pushing removes any live notification of the same class, so at most
//! one validation message is visible at a time.

use chrono::{DateTime, TimeDelta, Utc};

use crate::CellRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationClass {
    CellValidation,
}

/// Screen position the notification is drawn next to, in UI points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenAnchor {
    pub x: f32,
    pub y: f32,
}

impl ScreenAnchor {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub class: NotificationClass,
    pub cell: CellRef,
    pub anchor: ScreenAnchor,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationPhase {
    Visible,
    /// `alpha` goes from 1.0 down to 0.0 over the fade window.
    FadingOut { alpha: f32 },
    Expired,
}

impl NotificationPhase {
    pub fn alpha(&self) -> f32 {
        match self {
            Self::Visible => 1.0,
            Self::FadingOut { alpha } => *alpha,
            Self::Expired => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    /// Fully visible time.
    pub ttl: TimeDelta,
    /// Fade-out after `ttl`; the notification unmounts at `ttl + fade`.
    pub fade: TimeDelta,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            ttl: TimeDelta::seconds(10),
            fade: TimeDelta::milliseconds(250),
        }
    }
}

impl NotificationTiming {
    pub fn phase_at(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> NotificationPhase {
        let elapsed = now.signed_duration_since(created_at);
        if elapsed < self.ttl {
            return NotificationPhase::Visible;
        }

        let fading = elapsed - self.ttl;
        if fading >= self.fade {
            return NotificationPhase::Expired;
        }

        let total = self.fade.num_milliseconds().max(1) as f32;
        let alpha = 1.0 - fading.num_milliseconds() as f32 / total;
        NotificationPhase::FadingOut {
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    next_id: u64,
    timing: NotificationTiming,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            next_id: 0,
            timing,
            items: Vec::new(),
        }
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    pub fn push(
        &mut self,
        class: NotificationClass,
        cell: CellRef,
        anchor: ScreenAnchor,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> NotificationId {
        self.items.retain(|item| item.class != class);

        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.items.push(Notification {
            id,
            class,
            cell,
            anchor,
            message: message.into(),
            created_at: now,
        });
        id
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Unmount expired notifications; returns how many were removed.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let timing = self.timing;
        let before = self.items.len();
        self.items
            .retain(|item| timing.phase_at(item.created_at, now) != NotificationPhase::Expired);
        before - self.items.len()
    }

    pub fn visible(
        &self,
        now: DateTime<Utc>,
    ) -> impl Iterator<Item = (&Notification, NotificationPhase)> + '_ {
        self.items.iter().filter_map(move |item| {
            match self.timing.phase_at(item.created_at, now) {
                NotificationPhase::Expired => None,
                phase => Some((item, phase)),
            }
        })
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
