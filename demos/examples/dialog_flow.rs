// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks a dialog through its open/dismiss/focus-return lifecycle.

use armature_widgets::dialog::Dialog;
use armature_widgets::router::Key;
use armature_widgets::stage::{Stage, StageEvent};

fn report(stage: &mut Stage, label: &str) {
    println!("-- {label}");
    for event in stage.drain_events() {
        match event {
            StageEvent::Change { widget, event } => {
                println!("   emit {} on {widget:?}: {event:?}", event.name());
            }
            StageEvent::Focus { target, .. } => {
                println!("   focus -> {target:?}");
            }
        }
    }
}

fn main() {
    let mut stage = Stage::new();
    let dialog = Dialog::create(&mut stage);
    let save_button = dialog.add_content_part(&mut stage, true);

    // The trigger has focus; Enter opens the dialog.
    stage.note_focus(Some(dialog.trigger()));
    stage.handle_key(dialog.trigger(), Key::Enter, 0);
    report(&mut stage, "opened from the trigger");
    println!(
        "   autofocus target is the save button: {:?}",
        save_button
    );
    println!("   trigger attrs: {:?}", stage.attrs_for(dialog.trigger()).unwrap());
    println!("   content attrs: {:?}", stage.attrs_for(dialog.content()).unwrap());

    // Escape dismisses; focus returns to the trigger.
    stage.handle_key(dialog.content(), Key::Escape, 1_000);
    report(&mut stage, "escape pressed inside the content");

    // Re-open, then press outside: same close path, different reason.
    stage.handle_key(dialog.trigger(), Key::Enter, 2_000);
    stage.drain_events();
    stage.pointer_press(&[], None, 3_000);
    report(&mut stage, "pressed outside the content");
}
