// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draggable basics.
//!
//! Drive two draggable cards with a scripted pointer gesture and print the
//! emitted events and per-frame styles.
//!
//! Run:
//! - `cargo run -p understory_draggable_demos --example draggable_basics`
//! - `RUST_LOG=understory_draggable=trace cargo run -p understory_draggable_demos --example draggable_basics`

use kurbo::{Point, Vec2};
use understory_draggable::{DragHandler, DragHost, dispatch};

struct Printer;

impl DragHandler<&'static str> for Printer {
    fn on_drag(&mut self, translation: Vec2, id: &&'static str) {
        println!("  on_drag({id}): ({}, {})", translation.x, translation.y);
    }

    fn on_drag_end(&mut self, id: &&'static str) {
        println!("  on_drag_end({id})");
    }
}

fn main() {
    understory_draggable_demos::init_tracing();

    let mut host = DragHost::new();
    host.mount("left", "Left card");
    host.mount("right", "Right card");

    let mut printer = Printer;

    // Caller-side hit test picked "right" for the press.
    println!("down on right at (10, 10)");
    host.pointer_down(&"right", Point::new(10.0, 10.0));

    for pos in [
        Point::new(15.0, 20.0),
        Point::new(40.0, 25.0),
        Point::new(40.0, 25.0),
    ] {
        println!("move to ({}, {})", pos.x, pos.y);
        dispatch(&host.pointer_move(pos), &mut printer);
        if let Some(card) = host.get(&"right") {
            println!("  style: {}", card.style());
        }
    }

    println!("up");
    dispatch(&host.pointer_up(), &mut printer);
    for id in ["left", "right"] {
        if let Some(card) = host.get(&id) {
            println!("{id} ({}): {}", card.children(), card.style());
        }
    }
}
