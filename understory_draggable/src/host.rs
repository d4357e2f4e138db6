// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host for many draggables sharing one drag surface.
//!
//! [`DragHost`] owns the mounted elements keyed by id and routes surface-level
//! pointer events to whichever of them currently have listeners attached.
//! Hit testing stays with the caller: pass the id of the pressed element to
//! [`DragHost::pointer_down`].
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_draggable::{DragEvent, DragHost};
//!
//! let mut host = DragHost::new();
//! host.mount("a", ());
//! host.mount("b", ());
//!
//! host.pointer_down(&"b", Point::new(0.0, 0.0));
//! assert_eq!(
//!     host.pointer_move(Point::new(2.0, 3.0)),
//!     vec![DragEvent::Drag { id: "b", translation: Vec2::new(2.0, 3.0) }],
//! );
//!
//! // Unmounting mid-drag releases the listener; later events go nowhere.
//! host.unmount(&"b");
//! assert!(host.pointer_up().is_empty());
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Point;

use crate::draggable::Draggable;
use crate::event::DragEvent;
use crate::surface::{DragSurface, ListenerKinds};

/// Mounted draggables routed through a shared [`DragSurface`].
#[derive(Debug)]
pub struct DragHost<K, C> {
    surface: DragSurface<K>,
    items: HashMap<K, Draggable<K, C>>,
}

impl<K, C> Default for DragHost<K, C> {
    fn default() -> Self {
        Self {
            surface: DragSurface::new(),
            items: HashMap::new(),
        }
    }
}

impl<K, C> DragHost<K, C>
where
    K: Clone + Eq + Hash,
{
    /// Create an empty host with its own surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `children` under `id`. Returns `false` if `id` is already mounted.
    pub fn mount(&mut self, id: K, children: C) -> bool {
        if self.items.contains_key(&id) {
            return false;
        }
        let draggable = Draggable::new(&self.surface, id.clone(), children);
        self.items.insert(id, draggable);
        true
    }

    /// Unmount `id`, releasing its listeners, and return its content.
    pub fn unmount(&mut self, id: &K) -> Option<C> {
        self.items.remove(id).map(Draggable::into_children)
    }

    /// Move a mounted element to a new id, keeping any drag in progress.
    ///
    /// Returns `false` if `from` is not mounted or `to` is taken.
    pub fn rekey(&mut self, from: &K, to: K) -> bool {
        if self.items.contains_key(&to) {
            return false;
        }
        let Some(mut draggable) = self.items.remove(from) else {
            return false;
        };
        draggable.set_id(to.clone());
        self.items.insert(to, draggable);
        true
    }

    /// Pointer pressed on element `id`. Returns `false` if `id` is not mounted.
    pub fn pointer_down(&mut self, id: &K, pos: Point) -> bool {
        match self.items.get_mut(id) {
            Some(draggable) => {
                draggable.pointer_down(pos);
                true
            }
            None => false,
        }
    }

    /// Pointer moved on the surface; delivered to move listeners in attach order.
    pub fn pointer_move(&mut self, pos: Point) -> Vec<DragEvent<K>> {
        self.route(ListenerKinds::MOVE, |d| d.pointer_move(pos))
    }

    /// Pointer released on the surface; delivered to up listeners in attach order.
    pub fn pointer_up(&mut self) -> Vec<DragEvent<K>> {
        self.route(ListenerKinds::UP, Draggable::pointer_up)
    }

    /// Mounted element `id`.
    pub fn get(&self, id: &K) -> Option<&Draggable<K, C>> {
        self.items.get(id)
    }

    /// Mounted element `id`, mutably.
    pub fn get_mut(&mut self, id: &K) -> Option<&mut Draggable<K, C>> {
        self.items.get_mut(id)
    }

    /// Number of mounted elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The shared surface.
    pub fn surface(&self) -> &DragSurface<K> {
        &self.surface
    }

    fn route(
        &mut self,
        kind: ListenerKinds,
        mut deliver: impl FnMut(&mut Draggable<K, C>) -> Option<DragEvent<K>>,
    ) -> Vec<DragEvent<K>> {
        // Snapshot first: delivering an up detaches the listener being visited.
        let targets = self.surface.listeners(kind);
        targets
            .iter()
            .filter_map(|id| self.items.get_mut(id).and_then(&mut deliver))
            .collect()
    }
}
