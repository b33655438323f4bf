// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ownership registry: generational arenas for widgets and parts.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::types::{
    AttachError, Orientation, PartDesc, PartId, PartRole, WidgetConfig, WidgetId, WidgetKind,
};

struct WidgetSlot {
    generation: u32,
    config: WidgetConfig,
    /// Attached parts in attachment order.
    parts: SmallVec<[PartId; 8]>,
    /// Item lookup by value. Last attach wins; detach restores an earlier
    /// holder if one is still attached.
    by_value: HashMap<String, PartId>,
}

struct PartSlot {
    generation: u32,
    owner: WidgetId,
    role: PartRole,
    value: Option<String>,
    disabled: bool,
    autofocus: bool,
}

#[expect(clippy::cast_possible_truncation, reason = "arena indices fit in u32")]
const fn slot_index(idx: usize) -> u32 {
    idx as u32
}

/// An item part of a widget, as yielded by [`Registry::items_of`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemRef<'a> {
    /// The item's part id.
    pub part: PartId,
    /// The item's selection value.
    pub value: &'a str,
    /// Whether the item is individually disabled.
    pub disabled: bool,
}

/// Generational arenas for widget instances and their parts.
///
/// The registry is the single source of truth for *structure*: which widgets
/// exist, which parts belong to which widget, and in what order. It holds no
/// interaction state; state containers key off the ids handed out here.
///
/// # Example
///
/// ```rust
/// use armature_registry::{PartDesc, PartRole, Registry, WidgetConfig};
///
/// let mut registry = Registry::new();
/// let widget = registry.create_widget(WidgetConfig::default());
///
/// let trigger = registry
///     .attach_part(widget, PartDesc::new(PartRole::Trigger))
///     .unwrap();
/// let content = registry
///     .attach_part(widget, PartDesc::new(PartRole::Content))
///     .unwrap();
///
/// assert_eq!(registry.owner_of(trigger), Some(widget));
/// assert_eq!(registry.parts_of(widget).count(), 2);
///
/// registry.detach_part(content);
/// assert_eq!(registry.parts_of(widget).count(), 1);
/// ```
#[derive(Default)]
pub struct Registry {
    widgets: Vec<Option<WidgetSlot>>,
    /// Last generation per widget slot (persists across frees).
    widget_generations: Vec<u32>,
    widget_free: Vec<usize>,
    parts: Vec<Option<PartSlot>>,
    /// Last generation per part slot (persists across frees).
    part_generations: Vec<u32>,
    part_free: Vec<usize>,
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("widgets", &self.widgets.len())
            .field("parts", &self.parts.len())
            .field("widget_free", &self.widget_free.len())
            .field("part_free", &self.part_free.len())
            .finish()
    }
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a widget instance with the given configuration.
    pub fn create_widget(&mut self, config: WidgetConfig) -> WidgetId {
        let slot = WidgetSlot {
            generation: 0, // patched below
            config,
            parts: SmallVec::new(),
            by_value: HashMap::new(),
        };

        let (idx, generation) = if let Some(idx) = self.widget_free.pop() {
            let generation = self.widget_generations[idx].saturating_add(1);
            self.widget_generations[idx] = generation;
            self.widgets[idx] = Some(slot);
            (slot_index(idx), generation)
        } else {
            let generation = 1_u32;
            self.widgets.push(Some(slot));
            self.widget_generations.push(generation);
            (slot_index(self.widgets.len() - 1), generation)
        };

        if let Some(Some(slot)) = self.widgets.get_mut(idx as usize) {
            slot.generation = generation;
        }
        WidgetId::new(idx, generation)
    }

    /// Destroys a widget instance, orphaning its parts.
    ///
    /// Parts stay allocated and resolve to no owner until detached; this
    /// mirrors a subtree whose root was removed while descendants linger.
    /// Returns `false` if the id was already dead.
    pub fn destroy_widget(&mut self, id: WidgetId) -> bool {
        if !self.widget_is_live(id) {
            return false;
        }
        self.widgets[id.idx()] = None;
        self.widget_free.push(id.idx());
        true
    }

    /// Returns `true` if `id` refers to a live widget.
    ///
    /// A `WidgetId` is live if its slot is occupied and its generation
    /// matches the slot's current generation.
    #[must_use]
    pub fn widget_is_live(&self, id: WidgetId) -> bool {
        self.widgets
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .is_some_and(|slot| slot.generation == id.1)
    }

    /// Returns the configuration of a live widget.
    #[must_use]
    pub fn config(&self, id: WidgetId) -> Option<&WidgetConfig> {
        self.widget(id).map(|slot| &slot.config)
    }

    /// Returns the kind of a live widget.
    #[must_use]
    pub fn kind(&self, id: WidgetId) -> Option<WidgetKind> {
        self.widget(id).map(|slot| slot.config.kind)
    }

    /// Returns the orientation of a live widget.
    #[must_use]
    pub fn orientation(&self, id: WidgetId) -> Option<Orientation> {
        self.widget(id).map(|slot| slot.config.orientation)
    }

    /// Attaches a part to a widget.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError`] if `owner` is not live. All other part misuse
    /// degrades silently at query time; a dead owner at attach time is
    /// reported because the part would otherwise be born an orphan.
    pub fn attach_part(&mut self, owner: WidgetId, desc: PartDesc) -> Result<PartId, AttachError> {
        if !self.widget_is_live(owner) {
            return Err(AttachError { owner });
        }

        let slot = PartSlot {
            generation: 0, // patched below
            owner,
            role: desc.role,
            value: desc.value,
            disabled: desc.disabled,
            autofocus: desc.autofocus,
        };

        let (idx, generation) = if let Some(idx) = self.part_free.pop() {
            let generation = self.part_generations[idx].saturating_add(1);
            self.part_generations[idx] = generation;
            self.parts[idx] = Some(slot);
            (slot_index(idx), generation)
        } else {
            let generation = 1_u32;
            self.parts.push(Some(slot));
            self.part_generations.push(generation);
            (slot_index(self.parts.len() - 1), generation)
        };

        let id = PartId::new(idx, generation);
        let value = if let Some(Some(slot)) = self.parts.get_mut(idx as usize) {
            slot.generation = generation;
            slot.value.clone()
        } else {
            None
        };

        let widget = self.widgets[owner.idx()]
            .as_mut()
            .expect("liveness checked above");
        widget.parts.push(id);
        if let Some(value) = value {
            // Last attach wins for value lookup.
            widget.by_value.insert(value, id);
        }

        Ok(id)
    }

    /// Detaches a part, freeing its slot.
    ///
    /// Returns `false` if the id was already dead.
    pub fn detach_part(&mut self, id: PartId) -> bool {
        if !self.part_is_live(id) {
            return false;
        }
        let slot = self.parts[id.idx()].take().expect("liveness checked above");
        self.part_free.push(id.idx());

        if self.widget_is_live(slot.owner) {
            let widget = self.widgets[slot.owner.idx()]
                .as_mut()
                .expect("owner liveness checked above");
            widget.parts.retain(|part| *part != id);
            if let Some(value) = &slot.value
                && widget.by_value.get(value) == Some(&id)
            {
                widget.by_value.remove(value);
                // Restore an earlier holder of the same value, if any.
                let earlier = widget.parts.iter().rev().copied().find(|&part| {
                    self.parts
                        .get(part.idx())
                        .and_then(|slot| slot.as_ref())
                        .is_some_and(|slot| slot.value.as_deref() == Some(value))
                });
                if let Some(part) = earlier {
                    widget.by_value.insert(value.clone(), part);
                }
            }
        }
        true
    }

    /// Moves a live part under a different widget, as after re-parenting.
    ///
    /// Ownership is re-resolved from scratch: the part leaves its previous
    /// widget's records and enters the new one's, including value lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError`] if `new_owner` is not live. The part is left
    /// attached to its previous owner in that case.
    pub fn reattach_part(&mut self, id: PartId, new_owner: WidgetId) -> Result<(), AttachError> {
        if !self.widget_is_live(new_owner) {
            return Err(AttachError { owner: new_owner });
        }
        if !self.part_is_live(id) {
            // A dead part is inert; nothing to move.
            return Ok(());
        }

        let desc = {
            let slot = self.parts[id.idx()].as_ref().expect("liveness checked above");
            PartDesc {
                role: slot.role,
                value: slot.value.clone(),
                disabled: slot.disabled,
                autofocus: slot.autofocus,
            }
        };
        self.detach_part(id);
        // The slot id changes on reattach; callers that cached the old id
        // observe it as dead, which is the intended stale-handle behavior.
        self.attach_part(new_owner, desc).map(|_| ())
    }

    /// Returns `true` if `id` refers to a live part.
    #[must_use]
    pub fn part_is_live(&self, id: PartId) -> bool {
        self.parts
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .is_some_and(|slot| slot.generation == id.1)
    }

    /// Resolves the owning widget of a part.
    ///
    /// Returns `None` when the part is dead *or* its owner is dead. Callers
    /// treat `None` as "inert": no attributes, no interaction.
    #[must_use]
    pub fn owner_of(&self, id: PartId) -> Option<WidgetId> {
        let slot = self.part(id)?;
        self.widget_is_live(slot.owner).then_some(slot.owner)
    }

    /// Returns the role of a live part.
    #[must_use]
    pub fn role_of(&self, id: PartId) -> Option<PartRole> {
        self.part(id).map(|slot| slot.role)
    }

    /// Returns the selection value of a live item part.
    #[must_use]
    pub fn value_of(&self, id: PartId) -> Option<&str> {
        self.part(id).and_then(|slot| slot.value.as_deref())
    }

    /// Returns whether a live part is individually disabled.
    ///
    /// Dead parts report `true`: an unresolvable part must not attract
    /// interaction.
    #[must_use]
    pub fn part_disabled(&self, id: PartId) -> bool {
        self.part(id).is_none_or(|slot| slot.disabled)
    }

    /// Returns whether a live part prefers initial focus on open.
    #[must_use]
    pub fn part_autofocus(&self, id: PartId) -> bool {
        self.part(id).is_some_and(|slot| slot.autofocus)
    }

    /// Sets the disabled flag of a live part.
    pub fn set_part_disabled(&mut self, id: PartId, disabled: bool) {
        if self.part_is_live(id)
            && let Some(Some(slot)) = self.parts.get_mut(id.idx())
        {
            slot.disabled = disabled;
        }
    }

    /// Iterates the parts of a widget in attachment order.
    ///
    /// Yields nothing for a dead widget.
    pub fn parts_of(&self, id: WidgetId) -> impl Iterator<Item = PartId> + '_ {
        self.widget(id)
            .map(|slot| slot.parts.as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
    }

    /// Iterates the item parts of a widget in attachment order.
    ///
    /// Attachment order doubles as roving-navigation order.
    pub fn items_of(&self, id: WidgetId) -> impl Iterator<Item = ItemRef<'_>> + '_ {
        self.parts_of(id).filter_map(|part| {
            let slot = self.part(part)?;
            if slot.role != PartRole::Item {
                return None;
            }
            Some(ItemRef {
                part,
                value: slot.value.as_deref()?,
                disabled: slot.disabled,
            })
        })
    }

    /// Looks up the item holding `value` within a widget.
    ///
    /// On duplicate values, the most recently attached item wins.
    #[must_use]
    pub fn item_by_value(&self, id: WidgetId, value: &str) -> Option<PartId> {
        self.widget(id)?.by_value.get(value).copied()
    }

    fn widget(&self, id: WidgetId) -> Option<&WidgetSlot> {
        let slot = self.widgets.get(id.idx())?.as_ref()?;
        (slot.generation == id.1).then_some(slot)
    }

    fn part(&self, id: PartId) -> Option<&PartSlot> {
        let slot = self.parts.get(id.idx())?.as_ref()?;
        (slot.generation == id.1).then_some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn single() -> WidgetConfig {
        WidgetConfig {
            kind: WidgetKind::SingleSelect { collapsible: false },
            ..WidgetConfig::default()
        }
    }

    #[test]
    fn create_attach_resolve() {
        let mut registry = Registry::new();
        let widget = registry.create_widget(WidgetConfig::default());
        let trigger = registry
            .attach_part(widget, PartDesc::new(PartRole::Trigger))
            .unwrap();

        assert!(registry.widget_is_live(widget));
        assert!(registry.part_is_live(trigger));
        assert_eq!(registry.owner_of(trigger), Some(widget));
        assert_eq!(registry.role_of(trigger), Some(PartRole::Trigger));
    }

    #[test]
    fn attach_to_dead_widget_errors() {
        let mut registry = Registry::new();
        let widget = registry.create_widget(WidgetConfig::default());
        registry.destroy_widget(widget);

        let err = registry
            .attach_part(widget, PartDesc::new(PartRole::Trigger))
            .unwrap_err();
        assert_eq!(err.owner, widget);
    }

    #[test]
    fn orphaned_part_resolves_to_none() {
        let mut registry = Registry::new();
        let widget = registry.create_widget(WidgetConfig::default());
        let content = registry
            .attach_part(widget, PartDesc::new(PartRole::Content))
            .unwrap();

        registry.destroy_widget(widget);

        // The part is still live but has no owner.
        assert!(registry.part_is_live(content));
        assert_eq!(registry.owner_of(content), None);
    }

    #[test]
    fn stale_widget_id_does_not_alias_reused_slot() {
        let mut registry = Registry::new();
        let first = registry.create_widget(WidgetConfig::default());
        registry.destroy_widget(first);
        let second = registry.create_widget(single());

        // Same slot, new generation.
        assert_ne!(first, second);
        assert!(!registry.widget_is_live(first));
        assert!(registry.widget_is_live(second));
        assert_eq!(registry.config(first), None);
    }

    #[test]
    fn items_in_attachment_order() {
        let mut registry = Registry::new();
        let widget = registry.create_widget(single());
        registry.attach_part(widget, PartDesc::item("a")).unwrap();
        registry
            .attach_part(widget, PartDesc::item("b").disabled())
            .unwrap();
        registry.attach_part(widget, PartDesc::item("c")).unwrap();
        // Non-item parts do not show up in items_of.
        registry
            .attach_part(widget, PartDesc::new(PartRole::Indicator))
            .unwrap();

        let items: Vec<_> = registry.items_of(widget).collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].value, "a");
        assert!(items[1].disabled);
        assert_eq!(items[2].value, "c");
    }

    #[test]
    fn duplicate_value_last_attach_wins_and_detach_restores() {
        let mut registry = Registry::new();
        let widget = registry.create_widget(single());
        let first = registry.attach_part(widget, PartDesc::item("x")).unwrap();
        let second = registry.attach_part(widget, PartDesc::item("x")).unwrap();

        assert_eq!(registry.item_by_value(widget, "x"), Some(second));

        registry.detach_part(second);
        assert_eq!(registry.item_by_value(widget, "x"), Some(first));

        registry.detach_part(first);
        assert_eq!(registry.item_by_value(widget, "x"), None);
    }

    #[test]
    fn reattach_moves_value_lookup() {
        let mut registry = Registry::new();
        let a = registry.create_widget(single());
        let b = registry.create_widget(single());
        let item = registry.attach_part(a, PartDesc::item("v")).unwrap();

        registry.reattach_part(item, b).unwrap();

        // The old id is dead (reattachment allocates a fresh slot).
        assert!(!registry.part_is_live(item));
        assert_eq!(registry.item_by_value(a, "v"), None);
        let moved = registry.item_by_value(b, "v").unwrap();
        assert_eq!(registry.owner_of(moved), Some(b));
    }

    #[test]
    fn dead_part_reports_disabled() {
        let mut registry = Registry::new();
        let widget = registry.create_widget(WidgetConfig::default());
        let part = registry
            .attach_part(widget, PartDesc::new(PartRole::Trigger))
            .unwrap();
        registry.detach_part(part);

        assert!(registry.part_disabled(part));
    }
}
