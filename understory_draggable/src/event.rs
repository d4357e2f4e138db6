// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output events and the callback seam.
//!
//! A [`Draggable`](crate::Draggable) never calls back into the embedder. It
//! returns [`DragEvent`] values from its input methods, and the embedder decides
//! when to deliver them. [`dispatch`] forwards a batch to a [`DragHandler`],
//! which mirrors the usual `on_drag` / `on_drag_end` callback pair.
//!
//! ```
//! use kurbo::Vec2;
//! use understory_draggable::event::{DragEvent, FnHandler, dispatch};
//!
//! let events = [
//!     DragEvent::Drag { id: 7, translation: Vec2::new(5.0, 10.0) },
//!     DragEvent::DragEnd { id: 7 },
//! ];
//!
//! let mut moves = Vec::new();
//! let mut ends = 0;
//! dispatch(
//!     &events,
//!     &mut FnHandler::new(
//!         |t: Vec2, id: &i32| moves.push((t, *id)),
//!         |_: &i32| ends += 1,
//!     ),
//! );
//! assert_eq!(moves, vec![(Vec2::new(5.0, 10.0), 7)]);
//! assert_eq!(ends, 1);
//! ```

use kurbo::Vec2;

/// Progress reported by a draggable element.
#[derive(Clone, Debug, PartialEq)]
pub enum DragEvent<K> {
    /// The pointer moved during a drag. Emitted for every move, including
    /// moves that do not change the translation.
    Drag {
        /// Id of the dragged element.
        id: K,
        /// Offset from the drag origin.
        translation: Vec2,
    },
    /// The drag ended. Emitted once per drag.
    DragEnd {
        /// Id of the element that was dragged.
        id: K,
    },
}

impl<K> DragEvent<K> {
    /// Id of the element this event concerns.
    pub fn id(&self) -> &K {
        match self {
            Self::Drag { id, .. } | Self::DragEnd { id } => id,
        }
    }

    /// Translation carried by a [`DragEvent::Drag`].
    pub fn translation(&self) -> Option<Vec2> {
        match self {
            Self::Drag { translation, .. } => Some(*translation),
            Self::DragEnd { .. } => None,
        }
    }
}

/// Receiver for drag progress, the callback side of a draggable.
pub trait DragHandler<K> {
    /// Called for every pointer move during a drag.
    fn on_drag(&mut self, translation: Vec2, id: &K);

    /// Called once when a drag ends.
    fn on_drag_end(&mut self, id: &K);
}

/// Adapt a pair of closures into a [`DragHandler`].
#[derive(Debug)]
pub struct FnHandler<D, E> {
    on_drag: D,
    on_drag_end: E,
}

impl<D, E> FnHandler<D, E> {
    /// Wrap `on_drag` and `on_drag_end`.
    pub fn new(on_drag: D, on_drag_end: E) -> Self {
        Self {
            on_drag,
            on_drag_end,
        }
    }
}

impl<K, D, E> DragHandler<K> for FnHandler<D, E>
where
    D: FnMut(Vec2, &K),
    E: FnMut(&K),
{
    fn on_drag(&mut self, translation: Vec2, id: &K) {
        (self.on_drag)(translation, id);
    }

    fn on_drag_end(&mut self, id: &K) {
        (self.on_drag_end)(id);
    }
}

/// Deliver `events` to `handler` in order.
pub fn dispatch<'a, K: 'a>(
    events: impl IntoIterator<Item = &'a DragEvent<K>>,
    handler: &mut impl DragHandler<K>,
) {
    for event in events {
        match event {
            DragEvent::Drag { id, translation } => handler.on_drag(*translation, id),
            DragEvent::DragEnd { id } => handler.on_drag_end(id),
        }
    }
}
