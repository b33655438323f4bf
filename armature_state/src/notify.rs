// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronous, per-widget change broadcast.

use alloc::boxed::Box;
use smallvec::SmallVec;

use crate::state::Change;

/// Handle to a subscription, used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Change)>;

/// A per-widget subscriber list with synchronous delivery.
///
/// One notifier belongs to one widget instance; parts interested in that
/// widget subscribe once at attach time and unsubscribe at detach. Delivery
/// is synchronous and unbatched: one [`Change`] in, one call per subscriber,
/// in subscription order. There is no queue, so a subscriber must not
/// re-enter mutation from inside delivery — hosts that need that defer the
/// second mutation (see the widget layer's deferred queue).
///
/// # Example
///
/// ```rust
/// use armature_state::{Change, ChangeDetail, Notifier};
///
/// let mut notifier = Notifier::new();
/// let id = notifier.subscribe(|change| {
///     assert!(matches!(change.detail, ChangeDetail::Open { open: true }));
/// });
///
/// notifier.broadcast(&Change {
///     revision: 1,
///     detail: ChangeDetail::Open { open: true },
/// });
///
/// assert!(notifier.unsubscribe(id));
/// // A removed subscription is never fired again.
/// assert!(!notifier.unsubscribe(id));
/// ```
#[derive(Default)]
pub struct Notifier {
    next: u64,
    subscribers: SmallVec<[(SubscriptionId, Subscriber); 2]>,
}

impl core::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Notifier {
    /// Creates a notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber; returns its handle.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Change) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether there are no live subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Delivers `change` to every subscriber, in subscription order.
    pub fn broadcast(&mut self, change: &Change) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(change);
        }
    }
}
