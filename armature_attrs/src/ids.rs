// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generated element ids for trigger/content pairing.

use core::fmt;

/// A generated, process-unique element id.
///
/// Rendered as `armature-<n>`. Ids are allocated once per content instance
/// and stay stable for its lifetime, so `aria-controls` and
/// `aria-labelledby` references never need rewriting while the instance
/// lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "armature-{}", self.0)
    }
}

/// The two ids binding a trigger to the content it controls.
///
/// The trigger carries `id = trigger` and `aria-controls = content`; the
/// content carries `id = content` and `aria-labelledby = trigger`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdPair {
    /// Id of the trigger element.
    pub trigger: ElementId,
    /// Id of the content element.
    pub content: ElementId,
}

/// Monotonic allocator for [`ElementId`]s.
///
/// # Example
///
/// ```rust
/// use armature_attrs::IdAllocator;
///
/// let mut ids = IdAllocator::new();
/// let pair = ids.pair();
/// assert_ne!(pair.trigger, pair.content);
///
/// // Ids never repeat.
/// let other = ids.pair();
/// assert_ne!(pair.trigger, other.trigger);
/// ```
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocates a single id.
    pub fn single(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }

    /// Allocates a trigger/content pair.
    pub fn pair(&mut self) -> IdPair {
        IdPair {
            trigger: self.single(),
            content: self.single(),
        }
    }
}
