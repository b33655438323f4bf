// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered attribute map produced by projection.

use alloc::string::String;
use core::fmt;
use smallvec::SmallVec;

use crate::ids::ElementId;

/// Names of the attributes projection can emit.
///
/// The discriminant order is the rendering order, which makes [`AttrSet`]
/// deterministic without any hashing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttrName {
    /// `id`
    Id,
    /// `role`
    Role,
    /// `tabindex`
    TabIndex,
    /// `aria-expanded`
    AriaExpanded,
    /// `aria-selected`
    AriaSelected,
    /// `aria-checked`
    AriaChecked,
    /// `aria-pressed`
    AriaPressed,
    /// `aria-controls`
    AriaControls,
    /// `aria-labelledby`
    AriaLabelledBy,
    /// `aria-hidden`
    AriaHidden,
    /// `aria-disabled`
    AriaDisabled,
    /// `aria-modal`
    AriaModal,
    /// `aria-haspopup`
    AriaHasPopup,
    /// `aria-orientation`
    AriaOrientation,
    /// `aria-valuemin`
    AriaValueMin,
    /// `aria-valuemax`
    AriaValueMax,
    /// `aria-valuenow`
    AriaValueNow,
    /// `data-state`
    DataState,
    /// `data-disabled`
    DataDisabled,
    /// `data-orientation`
    DataOrientation,
}

impl AttrName {
    /// The attribute name as written on an element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Role => "role",
            Self::TabIndex => "tabindex",
            Self::AriaExpanded => "aria-expanded",
            Self::AriaSelected => "aria-selected",
            Self::AriaChecked => "aria-checked",
            Self::AriaPressed => "aria-pressed",
            Self::AriaControls => "aria-controls",
            Self::AriaLabelledBy => "aria-labelledby",
            Self::AriaHidden => "aria-hidden",
            Self::AriaDisabled => "aria-disabled",
            Self::AriaModal => "aria-modal",
            Self::AriaHasPopup => "aria-haspopup",
            Self::AriaOrientation => "aria-orientation",
            Self::AriaValueMin => "aria-valuemin",
            Self::AriaValueMax => "aria-valuemax",
            Self::AriaValueNow => "aria-valuenow",
            Self::DataState => "data-state",
            Self::DataDisabled => "data-disabled",
            Self::DataOrientation => "data-orientation",
        }
    }
}

/// An attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// `"true"` / `"false"`.
    Bool(bool),
    /// A static string such as `"open"` or `"vertical"`.
    Static(&'static str),
    /// An owned string (item values echoed into attributes).
    Text(String),
    /// A generated element id.
    Id(ElementId),
    /// A small integer (`tabindex`).
    Int(i32),
    /// A float (`aria-valuenow` and friends).
    Num(f64),
    /// Present with an empty value (`data-disabled`).
    Present,
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Static(value) => f.write_str(value),
            Self::Text(value) => f.write_str(value),
            Self::Id(id) => write!(f, "{id}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Num(value) => write!(f, "{value}"),
            Self::Present => Ok(()),
        }
    }
}

/// An ordered attribute map.
///
/// Entries are kept sorted by [`AttrName`]; inserting a name twice replaces
/// the earlier value instead of accumulating, so projection output for a
/// given input is a single canonical set.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AttrSet {
    entries: SmallVec<[(AttrName, AttrValue); 8]>,
}

impl AttrSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an attribute.
    pub fn set(&mut self, name: AttrName, value: AttrValue) {
        match self.entries.binary_search_by_key(&name, |(n, _)| *n) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (name, value)),
        }
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn get(&self, name: AttrName) -> Option<&AttrValue> {
        self.entries
            .binary_search_by_key(&name, |(n, _)| *n)
            .ok()
            .map(|idx| &self.entries[idx].1)
    }

    /// Whether the attribute is present.
    #[must_use]
    pub fn contains(&self, name: AttrName) -> bool {
        self.get(name).is_some()
    }

    /// Number of attributes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (AttrName, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }
}

impl<'a> IntoIterator for &'a AttrSet {
    type Item = (AttrName, &'a AttrValue);
    type IntoIter = alloc::boxed::Box<dyn Iterator<Item = (AttrName, &'a AttrValue)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        alloc::boxed::Box::new(self.iter())
    }
}
