// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draggable element: drag state, surface listeners, and style.
//!
//! ## Lifecycle
//!
//! - [`Draggable::pointer_down`] on the element starts a drag: the pointer
//!   position becomes the origin and move/up listeners are attached to the
//!   [`DragSurface`].
//! - [`Draggable::pointer_move`] while dragging recomputes the translation and
//!   emits [`DragEvent::Drag`].
//! - [`Draggable::pointer_up`] ends the drag: listeners are detached, the
//!   translation snaps back to zero, and [`DragEvent::DragEnd`] is emitted.
//!
//! The surface listener is held exactly while dragging. Dropping the draggable
//! mid-drag drops the listener with it.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_draggable::{DragEvent, DragSurface, Draggable};
//!
//! let surface = DragSurface::new();
//! let mut card = Draggable::new(&surface, "card", ());
//!
//! card.pointer_down(Point::new(10.0, 10.0));
//! assert_eq!(surface.listener_count(), 1);
//!
//! let ev = card.pointer_move(Point::new(15.0, 20.0));
//! assert_eq!(ev, Some(DragEvent::Drag { id: "card", translation: Vec2::new(5.0, 10.0) }));
//!
//! assert_eq!(card.pointer_up(), Some(DragEvent::DragEnd { id: "card" }));
//! assert!(surface.is_empty());
//! assert_eq!(card.style().translate().to_string(), "translate(0px, 0px)");
//! ```

use kurbo::{Point, Vec2};

use crate::event::DragEvent;
use crate::state::DragState;
use crate::style::{DragConfig, DragStyle};
use crate::surface::{DragSurface, ListenerKinds, SurfaceListener};

/// A draggable element wrapping caller-owned `children`.
///
/// `K` identifies the element in emitted events and on the surface.
#[derive(Debug)]
pub struct Draggable<K, C> {
    id: K,
    children: C,
    config: DragConfig,
    state: DragState,
    surface: DragSurface<K>,
    // Some exactly while `state` is dragging.
    listener: Option<SurfaceListener<K>>,
}

impl<K: Clone, C> Draggable<K, C> {
    /// Mount a draggable on `surface`. It starts idle with no listeners.
    pub fn new(surface: &DragSurface<K>, id: K, children: C) -> Self {
        Self {
            id,
            children,
            config: DragConfig::default(),
            state: DragState::Idle,
            surface: surface.clone(),
            listener: None,
        }
    }

    /// Replace the visual configuration.
    #[must_use]
    pub fn with_config(mut self, config: DragConfig) -> Self {
        self.config = config;
        self
    }

    /// Pointer pressed on the element at `pos`.
    ///
    /// Pressing again mid-drag re-captures the origin without attaching a
    /// second listener.
    pub fn pointer_down(&mut self, pos: Point) {
        self.state.begin(pos);
        if self.listener.is_none() {
            self.listener = Some(self.attach());
        }
        crate::log_debug!(x = pos.x, y = pos.y, "drag started");
    }

    /// Pointer moved on the surface. Ignored while idle.
    pub fn pointer_move(&mut self, pos: Point) -> Option<DragEvent<K>> {
        let translation = self.state.update(pos)?;
        crate::log_trace!(dx = translation.x, dy = translation.y, "drag moved");
        Some(DragEvent::Drag {
            id: self.id.clone(),
            translation,
        })
    }

    /// Pointer released on the surface. Ignored while idle.
    pub fn pointer_up(&mut self) -> Option<DragEvent<K>> {
        if !self.release() {
            return None;
        }
        crate::log_debug!("drag ended");
        Some(DragEvent::DragEnd {
            id: self.id.clone(),
        })
    }

    /// Abandon a drag without emitting [`DragEvent::DragEnd`].
    ///
    /// Returns `true` if a drag was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.release();
        crate::log_debug!(was_dragging, "drag cancelled");
        was_dragging
    }

    /// Change the element id.
    ///
    /// Mid-drag, the surface listener is re-attached under the new id so the
    /// surface never routes to a stale id.
    pub fn set_id(&mut self, id: K) {
        self.id = id;
        if self.listener.take().is_some() {
            self.listener = Some(self.attach());
        }
    }

    /// Replace the visual configuration.
    pub fn set_config(&mut self, config: DragConfig) {
        self.config = config;
    }

    /// Style for the current frame.
    #[must_use]
    pub fn style(&self) -> DragStyle {
        match self.state {
            DragState::Idle => DragStyle::resting(&self.config),
            DragState::Dragging { translation, .. } => {
                DragStyle::dragging(&self.config, translation)
            }
        }
    }

    /// Element id.
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Wrapped content.
    pub fn children(&self) -> &C {
        &self.children
    }

    /// Wrapped content, mutably.
    pub fn children_mut(&mut self) -> &mut C {
        &mut self.children
    }

    /// Unmount, releasing any surface listener and returning the content.
    pub fn into_children(self) -> C {
        self.children
    }

    /// Current drag state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns `true` while dragging.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Current translation; zero while idle.
    pub fn translation(&self) -> Vec2 {
        self.state.translation()
    }

    /// Visual configuration.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    fn attach(&self) -> SurfaceListener<K> {
        self.surface
            .attach(self.id.clone(), ListenerKinds::MOVE | ListenerKinds::UP)
    }

    // Leave Dragging: reset the translation and detach in the same step.
    fn release(&mut self) -> bool {
        self.listener = None;
        self.state.end().is_some()
    }
}
