// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_draggable` crate.
//!
//! These drive whole drag gestures through `Draggable` and `DragHost` and check
//! the emitted events, the surface listeners, and the resulting style.

use kurbo::{Point, Vec2};
use understory_draggable::{
    Cursor, DragEvent, DragHandler, DragHost, DragState, DragSurface, Draggable, Position,
    Transition, dispatch,
};

#[derive(Default)]
struct Callbacks {
    drags: Vec<(Vec2, u32)>,
    ends: usize,
}

impl DragHandler<u32> for Callbacks {
    fn on_drag(&mut self, translation: Vec2, id: &u32) {
        self.drags.push((translation, *id));
    }

    fn on_drag_end(&mut self, _id: &u32) {
        self.ends += 1;
    }
}

#[test]
fn down_move_up_scenario() {
    let surface = DragSurface::new();
    let mut card = Draggable::new(&surface, 7_u32, ());
    let mut callbacks = Callbacks::default();

    card.pointer_down(Point::new(10.0, 10.0));
    let moved = card.pointer_move(Point::new(15.0, 20.0));
    let ended = card.pointer_up();
    dispatch(moved.iter().chain(ended.iter()), &mut callbacks);

    assert_eq!(callbacks.drags, vec![(Vec2::new(5.0, 10.0), 7)]);
    assert_eq!(callbacks.ends, 1);
    assert_eq!(card.style().translate().to_string(), "translate(0px, 0px)");
}

#[test]
fn pointer_down_enters_dragging_at_origin() {
    let surface = DragSurface::new();
    let mut card = Draggable::new(&surface, 1_u32, ());

    for (x, y) in [(0.0, 0.0), (-4.0, 12.5), (300.0, 200.0)] {
        card.pointer_down(Point::new(x, y));
        assert_eq!(
            *card.state(),
            DragState::Dragging {
                origin: Point::new(x, y),
                translation: Vec2::ZERO,
            }
        );
        card.pointer_up();
    }
}

#[test]
fn translation_tracks_pointer_minus_origin() {
    let surface = DragSurface::new();
    let mut card = Draggable::new(&surface, 3_u32, ());
    card.pointer_down(Point::new(100.0, 50.0));

    for (x, y) in [(101.0, 50.0), (90.0, 70.0), (100.0, 50.0), (0.0, 0.0)] {
        let expected = Vec2::new(x - 100.0, y - 50.0);
        assert_eq!(
            card.pointer_move(Point::new(x, y)),
            Some(DragEvent::Drag {
                id: 3,
                translation: expected,
            })
        );
        assert_eq!(card.translation(), expected);
        assert_eq!(card.style().translation, expected);
    }
}

#[test]
fn identical_moves_are_not_deduplicated() {
    let surface = DragSurface::new();
    let mut card = Draggable::new(&surface, 1_u32, ());
    card.pointer_down(Point::new(0.0, 0.0));

    let events: Vec<_> = (0..3)
        .filter_map(|_| card.pointer_move(Point::new(2.0, 2.0)))
        .collect();

    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.translation() == Some(Vec2::new(2.0, 2.0))));
}

#[test]
fn pointer_up_ends_exactly_once() {
    let surface = DragSurface::new();
    let mut card = Draggable::new(&surface, 1_u32, ());
    card.pointer_down(Point::new(5.0, 5.0));
    card.pointer_move(Point::new(9.0, 9.0));

    assert_eq!(card.pointer_up(), Some(DragEvent::DragEnd { id: 1 }));
    assert_eq!(card.pointer_up(), None);
    assert_eq!(*card.state(), DragState::Idle);
    assert_eq!(card.translation(), Vec2::ZERO);
    assert!(surface.is_empty());

    let style = card.style();
    assert_eq!(style.position, Position::Relative);
    assert_eq!(style.cursor, Cursor::Grab);
    assert!(matches!(style.transition, Transition::Transform(_)));
}

#[test]
fn unmount_mid_drag_leaves_no_listeners() {
    let mut host = DragHost::new();
    host.mount(1_u32, ());
    let mut callbacks = Callbacks::default();

    host.pointer_down(&1, Point::new(0.0, 0.0));
    dispatch(&host.pointer_move(Point::new(1.0, 1.0)), &mut callbacks);
    host.unmount(&1);

    assert!(host.surface().is_empty());
    dispatch(&host.pointer_move(Point::new(2.0, 2.0)), &mut callbacks);
    dispatch(&host.pointer_up(), &mut callbacks);

    assert_eq!(callbacks.drags, vec![(Vec2::new(1.0, 1.0), 1)]);
    assert_eq!(callbacks.ends, 0);
}

#[test]
fn several_instances_share_one_surface() {
    let mut host = DragHost::new();
    for id in 0..4_u32 {
        host.mount(id, ());
    }

    host.pointer_down(&2, Point::new(10.0, 10.0));
    assert_eq!(host.surface().listener_count(), 1);

    let events = host.pointer_move(Point::new(12.0, 10.0));
    assert_eq!(events.len(), 1);
    assert_eq!(*events[0].id(), 2);

    host.pointer_up();
    for id in 0..4_u32 {
        let card = host.get(&id).unwrap();
        assert!(!card.is_dragging());
    }
}

#[test]
fn drag_can_restart_after_release() {
    let surface = DragSurface::new();
    let mut card = Draggable::new(&surface, 1_u32, ());

    card.pointer_down(Point::new(0.0, 0.0));
    card.pointer_move(Point::new(50.0, 50.0));
    card.pointer_up();

    card.pointer_down(Point::new(50.0, 50.0));
    assert_eq!(
        card.pointer_move(Point::new(55.0, 45.0)),
        Some(DragEvent::Drag {
            id: 1,
            translation: Vec2::new(5.0, -5.0),
        })
    );
    assert_eq!(surface.listener_count(), 1);
}
