// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key vocabulary and routing verdicts for widget interaction.

use armature_nav::NavKey;

/// Named keys the widget layer understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter: activate the focused part.
    Enter,
    /// Space: activate the focused part.
    Space,
    /// Escape: request dismissal.
    Escape,
    /// The Up arrow.
    ArrowUp,
    /// The Down arrow.
    ArrowDown,
    /// The Left arrow.
    ArrowLeft,
    /// The Right arrow.
    ArrowRight,
    /// Home: jump to the first enabled item.
    Home,
    /// End: jump to the last enabled item.
    End,
}

impl Key {
    /// The roving-navigation key this maps to, if any.
    #[must_use]
    pub const fn nav(self) -> Option<NavKey> {
        match self {
            Self::ArrowUp => Some(NavKey::ArrowUp),
            Self::ArrowDown => Some(NavKey::ArrowDown),
            Self::ArrowLeft => Some(NavKey::ArrowLeft),
            Self::ArrowRight => Some(NavKey::ArrowRight),
            Self::Home => Some(NavKey::Home),
            Self::End => Some(NavKey::End),
            Self::Enter | Self::Space | Self::Escape => None,
        }
    }

    /// Whether the key activates the focused or clicked part.
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Whether an interaction was consumed by the widget layer.
///
/// `Ignored` means the widget performed no state mutation — because the
/// part is orphaned, the widget disabled, or the key meaningless for it —
/// and the host should let its default handling (such as normal focus
/// traversal) proceed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RouterVerdict {
    /// The interaction mutated widget state; suppress default handling.
    Handled,
    /// The interaction was not consumed.
    Ignored,
}
