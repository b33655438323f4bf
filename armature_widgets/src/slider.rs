// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider: a stepped numeric value with directional keyboard control.

use armature_attrs::{AttrName, AttrSet, AttrValue};
use armature_registry::Orientation;

use crate::events::{ChangeEvent, EventValue};
use crate::router::Key;

/// Range and stepping of a slider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Step size; values snap to `min + n * step`.
    pub step: f64,
    /// Primary axis, projected as `aria-orientation`.
    pub orientation: Orientation,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            orientation: Orientation::Horizontal,
        }
    }
}

/// One slider.
///
/// Self-contained value state (a number is not a selection set, so this
/// family does not go through the shared snapshot): values are clamped to
/// the range and snapped to the step grid. Up/Right increase and
/// Down/Left decrease regardless of orientation, Home/End jump to the
/// bounds, matching slider keyboard conventions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slider {
    config: SliderConfig,
    value: f64,
    disabled: bool,
}

impl Slider {
    /// Creates a slider at its minimum value.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            value: config.min,
            disabled: false,
        }
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether the slider is disabled.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Sets the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Sets the value, clamped to the range and snapped to the step grid.
    ///
    /// Returns the `value-change` to emit, or `None` when disabled or when
    /// the snapped value equals the current one.
    pub fn set_value(&mut self, value: f64) -> Option<ChangeEvent> {
        if self.disabled {
            return None;
        }
        let snapped = self.snap(value);
        if snapped == self.value {
            return None;
        }
        self.value = snapped;
        Some(ChangeEvent::ValueChange {
            value: EventValue::Number(snapped),
        })
    }

    /// Routes a key press on the slider thumb.
    pub fn handle_key(&mut self, key: Key) -> Option<ChangeEvent> {
        if self.disabled {
            return None;
        }
        let target = match key {
            Key::ArrowUp | Key::ArrowRight => self.value + self.config.step,
            Key::ArrowDown | Key::ArrowLeft => self.value - self.config.step,
            Key::Home => self.config.min,
            Key::End => self.config.max,
            Key::Enter | Key::Space | Key::Escape => return None,
        };
        self.set_value(target)
    }

    /// Projects the thumb's attributes.
    #[must_use]
    pub fn attrs(&self) -> AttrSet {
        let mut attrs = AttrSet::new();
        attrs.set(AttrName::Role, AttrValue::Static("slider"));
        attrs.set(AttrName::AriaValueMin, AttrValue::Num(self.config.min));
        attrs.set(AttrName::AriaValueMax, AttrValue::Num(self.config.max));
        attrs.set(AttrName::AriaValueNow, AttrValue::Num(self.value));
        let orientation = if self.config.orientation.is_horizontal() {
            "horizontal"
        } else {
            "vertical"
        };
        attrs.set(AttrName::AriaOrientation, AttrValue::Static(orientation));
        attrs.set(AttrName::DataOrientation, AttrValue::Static(orientation));
        attrs.set(
            AttrName::TabIndex,
            AttrValue::Int(if self.disabled { -1 } else { 0 }),
        );
        if self.disabled {
            attrs.set(AttrName::DataDisabled, AttrValue::Present);
            attrs.set(AttrName::AriaDisabled, AttrValue::Bool(true));
        }
        attrs
    }

    fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.config.min, self.config.max);
        if self.config.step <= 0.0 {
            return clamped;
        }
        // Round to the nearest step without `f64::round`, which is
        // unavailable in `no_std` builds: the offset is non-negative, so
        // truncation of `x + 0.5` is round-half-up.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the offset is clamped and non-negative"
        )]
        let steps = ((clamped - self.config.min) / self.config.step + 0.5) as u64;
        let snapped = self.config.min + steps as f64 * self.config.step;
        snapped.clamp(self.config.min, self.config.max)
    }
}
