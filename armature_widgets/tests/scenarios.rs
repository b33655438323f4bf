// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end interaction scenarios across widget families.

use armature_registry::Orientation;
use armature_widgets::accordion::{Accordion, AccordionKind};
use armature_widgets::dialog::Dialog;
use armature_widgets::events::ChangeEvent;
use armature_widgets::hover_card::HoverCard;
use armature_widgets::router::Key;
use armature_widgets::stage::{Stage, StageEvent};
use armature_widgets::tabs::{Activation, Tabs};
use armature_widgets::toast::Toast;
use armature_widgets::toggle_group::{ToggleGroup, ToggleGroupKind};

fn open_changes(events: &[StageEvent], open: bool) -> usize {
    events
        .iter()
        .filter(|event| {
            matches!(
                event,
                StageEvent::Change {
                    event: ChangeEvent::OpenChange { open: o },
                    ..
                } if *o == open
            )
        })
        .count()
}

#[test]
fn accordion_single_non_collapsible_switches_b_to_a() {
    let mut stage = Stage::new();
    let accordion = Accordion::create(
        &mut stage,
        AccordionKind::Single { collapsible: false },
        Orientation::Vertical,
    );
    for value in ["a", "b", "c"] {
        accordion.add_item(&mut stage, value);
    }
    assert_eq!(accordion.value(&stage), None);

    accordion.toggle_item(&mut stage, "b", 0);
    assert_eq!(accordion.value(&stage).as_deref(), Some("b"));

    accordion.toggle_item(&mut stage, "a", 1);
    assert_eq!(accordion.value(&stage).as_deref(), Some("a"));
}

#[test]
fn dialog_round_trip_returns_focus_to_the_opening_button() {
    let mut stage = Stage::new();
    let dialog = Dialog::create(&mut stage);

    // Button X has focus and opens the dialog.
    stage.note_focus(Some(dialog.trigger()));
    stage.handle_key(dialog.trigger(), Key::Enter, 0);
    assert!(dialog.is_open(&stage));

    // Focus moved into the content...
    let events = stage.drain_events();
    assert!(events.iter().any(|event| matches!(
        event,
        StageEvent::Focus { target, .. } if *target == dialog.content()
    )));

    // ...and returns to X on close.
    stage.handle_key(dialog.content(), Key::Escape, 1);
    assert!(!dialog.is_open(&stage));
    let events = stage.drain_events();
    assert!(events.iter().any(|event| matches!(
        event,
        StageEvent::Focus { target, .. } if *target == dialog.trigger()
    )));
}

#[test]
fn toast_auto_dismiss_fires_once_and_cancel_prevents_it() {
    let mut stage = Stage::new();
    let toast = Toast::create_with_duration(&mut stage, 5_000);

    toast.show(&mut stage, 0);
    stage.drain_events();

    // After the full lifetime, exactly one close.
    stage.tick(5_000);
    stage.tick(6_000);
    let events = stage.drain_events();
    assert_eq!(open_changes(&events, false), 1);

    // Shown again, dismissed at t+2000: the pending timer is cancelled and
    // there is no second close at the would-be deadline.
    toast.show(&mut stage, 10_000);
    stage.drain_events();
    toast.dismiss(&mut stage, 12_000);
    stage.tick(15_000);
    let events = stage.drain_events();
    assert_eq!(open_changes(&events, false), 1);
}

#[test]
fn toggle_group_single_releases_on_second_press() {
    let mut stage = Stage::new();
    let group = ToggleGroup::create(&mut stage, ToggleGroupKind::Single, Orientation::Horizontal);
    for value in ["left", "center", "right"] {
        group.add_item(&mut stage, value);
    }

    group.press_item(&mut stage, "center", 0);
    assert_eq!(group.value(&stage).as_deref(), Some("center"));

    group.press_item(&mut stage, "center", 1);
    assert_eq!(group.value(&stage), None);
}

#[test]
fn hover_card_closed_before_the_delay_never_opens() {
    let mut stage = Stage::new();
    let card = HoverCard::create(&mut stage);

    card.pointer_enter(&mut stage, 0);
    card.pointer_leave(&mut stage, 500);

    stage.tick(u64::MAX);
    assert!(!card.is_open(&stage));
    assert!(stage.drain_events().is_empty());
}

#[test]
fn tabs_full_arrow_cycle_returns_to_the_first_tab() {
    let mut stage = Stage::new();
    let tabs = Tabs::create(&mut stage, Activation::Automatic, Orientation::Horizontal);
    let first = tabs.add_tab(&mut stage, "one");
    tabs.add_disabled_tab(&mut stage, "two");
    tabs.add_tab(&mut stage, "three");

    tabs.select(&mut stage, "one", 0);
    stage.set_focused(tabs.id(), 0, 0);

    // Two enabled tabs: two "next" presses cycle back to the start,
    // skipping the disabled tab both times.
    tabs.handle_key(&mut stage, first.trigger, Key::ArrowRight, 0);
    assert_eq!(tabs.value(&stage).as_deref(), Some("three"));
    tabs.handle_key(&mut stage, first.trigger, Key::ArrowRight, 0);
    assert_eq!(tabs.value(&stage).as_deref(), Some("one"));
    assert_eq!(stage.state(tabs.id()).unwrap().focused(), Some(0));
}

#[test]
fn disabled_widget_state_is_untouched_by_every_entry_point() {
    let mut stage = Stage::new();
    let tabs = Tabs::create(&mut stage, Activation::Manual, Orientation::Horizontal);
    let first = tabs.add_tab(&mut stage, "one");
    tabs.add_tab(&mut stage, "two");
    tabs.select(&mut stage, "one", 0);

    stage.set_disabled(tabs.id(), true);
    stage.drain_events();
    let before = stage.state(tabs.id()).unwrap().clone();

    stage.handle_key(first.trigger, Key::ArrowRight, 1);
    stage.handle_key(first.trigger, Key::Enter, 2);
    stage.pointer_press(&[first.trigger], None, 3);
    tabs.select(&mut stage, "two", 4);

    assert_eq!(stage.state(tabs.id()).unwrap(), &before);
    assert!(stage.drain_events().is_empty());
}

#[test]
fn orphaned_part_is_inert_everywhere() {
    let mut stage = Stage::new();
    let tabs = Tabs::create(&mut stage, Activation::Manual, Orientation::Horizontal);
    let tab = tabs.add_tab(&mut stage, "one");

    stage.destroy_widget(tabs.id());

    // No attributes, no interaction, no panic.
    assert!(stage.attrs_for(tab.trigger).is_none());
    assert_eq!(
        stage.handle_key(tab.trigger, Key::Enter, 0),
        armature_widgets::router::RouterVerdict::Ignored
    );
}

#[test]
fn broadcast_carries_the_post_mutation_snapshot() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut stage = Stage::new();
    let tabs = Tabs::create(&mut stage, Activation::Manual, Orientation::Horizontal);
    tabs.add_tab(&mut stage, "one");

    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        stage.subscribe(tabs.id(), move |change| {
            seen.borrow_mut().push(change.clone());
        });
    }

    tabs.select(&mut stage, "one", 0);
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(matches!(
        &seen[0].detail,
        armature_state::ChangeDetail::Single { value: Some(v) } if v == "one"
    ));
}
