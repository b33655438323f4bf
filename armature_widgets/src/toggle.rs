// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggle: a standalone pressed/unpressed button.

use armature_attrs::StateWording;
use armature_registry::{PartDesc, PartId, PartRole, WidgetConfig, WidgetId, WidgetKind};

use crate::stage::{FamilyProfile, OpenEventKind, Stage};

/// One two-state toggle button.
///
/// Boolean state surfaced as `pressed-change` rather than `open-change`,
/// with the `on`/`off` data-state vocabulary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Toggle {
    widget: WidgetId,
    button: PartId,
}

impl Toggle {
    /// Creates an unpressed toggle.
    pub fn create(stage: &mut Stage) -> Self {
        let widget = stage.create_widget(
            WidgetConfig {
                kind: WidgetKind::Toggle,
                ..WidgetConfig::default()
            },
            FamilyProfile {
                wording: StateWording::OnOff,
                open_event: OpenEventKind::Pressed,
                ..FamilyProfile::default()
            },
        );
        let button = stage
            .attach_part(widget, PartDesc::new(PartRole::Trigger))
            .expect("widget created above is live");
        Self { widget, button }
    }

    /// The widget id.
    #[must_use]
    pub fn id(self) -> WidgetId {
        self.widget
    }

    /// The button part.
    #[must_use]
    pub fn button(self) -> PartId {
        self.button
    }

    /// Whether the toggle is pressed.
    #[must_use]
    pub fn is_pressed(self, stage: &Stage) -> bool {
        stage.state(self.widget).is_some_and(|state| state.is_open())
    }

    /// Presses the toggle (flips its state).
    pub fn press(self, stage: &mut Stage, now: u64) -> bool {
        stage.toggle_open(self.widget, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_attrs::{AttrName, AttrValue};
    use crate::events::ChangeEvent;
    use crate::stage::StageEvent;

    #[test]
    fn press_flips_state_and_emits_pressed_change() {
        let mut stage = Stage::new();
        let toggle = Toggle::create(&mut stage);

        toggle.press(&mut stage, 0);
        assert!(toggle.is_pressed(&stage));
        let events = stage.drain_events();
        assert!(events.iter().any(|event| matches!(
            event,
            StageEvent::Change {
                event: ChangeEvent::PressedChange { pressed: true },
                ..
            }
        )));

        let attrs = stage.attrs_for(toggle.button()).unwrap();
        assert_eq!(attrs.get(AttrName::DataState), Some(&AttrValue::Static("on")));

        toggle.press(&mut stage, 1);
        let attrs = stage.attrs_for(toggle.button()).unwrap();
        assert_eq!(attrs.get(AttrName::DataState), Some(&AttrValue::Static("off")));
    }

    #[test]
    fn disabled_toggle_does_not_press() {
        let mut stage = Stage::new();
        let toggle = Toggle::create(&mut stage);
        stage.set_disabled(toggle.id(), true);

        assert!(!toggle.press(&mut stage, 0));
        assert!(!toggle.is_pressed(&stage));
    }
}
