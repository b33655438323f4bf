// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives an accordion with the keyboard and prints each header's attrs.

use armature_registry::Orientation;
use armature_widgets::accordion::{Accordion, AccordionKind};
use armature_widgets::router::Key;
use armature_widgets::stage::Stage;

fn main() {
    let mut stage = Stage::new();
    let accordion = Accordion::create(
        &mut stage,
        AccordionKind::Single { collapsible: true },
        Orientation::Vertical,
    );
    let items = [
        accordion.add_item(&mut stage, "shipping"),
        accordion.add_item(&mut stage, "returns"),
        accordion.add_item(&mut stage, "support"),
    ];

    let dump = |stage: &Stage, label: &str| {
        println!("-- {label}");
        for (item, name) in items.iter().zip(["shipping", "returns", "support"]) {
            println!("   {name}: {:?}", stage.attrs_for(item.trigger).unwrap());
        }
    };

    dump(&stage, "initial (everything closed)");

    // Enter on the first header opens its panel.
    stage.set_focused(accordion.id(), 0, 0);
    accordion.handle_key(&mut stage, items[0].trigger, Key::Enter, 0);
    dump(&stage, "opened \"shipping\" with Enter");

    // Arrow down twice, then open the focused header.
    accordion.handle_key(&mut stage, items[0].trigger, Key::ArrowDown, 100);
    accordion.handle_key(&mut stage, items[1].trigger, Key::ArrowDown, 200);
    accordion.handle_key(&mut stage, items[2].trigger, Key::Enter, 300);
    dump(&stage, "arrowed to \"support\" and opened it");

    // A collapsible accordion closes on re-toggle.
    accordion.toggle_item(&mut stage, "support", 400);
    dump(&stage, "re-toggled \"support\" closed");
}
