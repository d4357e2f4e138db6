// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag surface: the window-level input source that receives pointer moves and
//! releases for the duration of a drag.
//!
//! A drag keeps tracking the pointer after it leaves the element that was
//! pressed, so move and up listeners are attached to a shared surface rather
//! than to the element. Listeners are scoped resources: [`DragSurface::attach`]
//! returns a [`SurfaceListener`] guard, and dropping the guard detaches it.
//!
//! ```
//! use understory_draggable::surface::{DragSurface, ListenerKinds};
//!
//! let surface = DragSurface::new();
//! let listener = surface.attach("card", ListenerKinds::MOVE | ListenerKinds::UP);
//! assert_eq!(surface.listeners(ListenerKinds::MOVE).as_slice(), &["card"]);
//!
//! drop(listener);
//! assert!(surface.is_empty());
//! ```

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Pointer event kinds a surface listener subscribes to.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerKinds: u8 {
        /// Pointer moves anywhere on the surface.
        const MOVE = 1;
        /// Pointer releases anywhere on the surface.
        const UP = 1 << 1;
    }
}

#[derive(Debug)]
struct Entry<K> {
    token: u64,
    id: K,
    kinds: ListenerKinds,
}

#[derive(Debug)]
struct Registry<K> {
    next_token: u64,
    entries: Vec<Entry<K>>,
}

/// Shared registry of listeners attached to the global drag surface.
///
/// Cloning a `DragSurface` yields another handle to the same registry. The
/// surface is single-threaded (`!Send`), matching the UI thread it models.
#[derive(Debug)]
pub struct DragSurface<K> {
    inner: Rc<RefCell<Registry<K>>>,
}

impl<K> Clone for DragSurface<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K> Default for DragSurface<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DragSurface<K> {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_token: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Attach a listener for `id`, returning a guard that detaches on drop.
    pub fn attach(&self, id: K, kinds: ListenerKinds) -> SurfaceListener<K> {
        let mut registry = self.inner.borrow_mut();
        let token = registry.next_token;
        registry.next_token += 1;
        registry.entries.push(Entry { token, id, kinds });
        crate::log_trace!(token, ?kinds, "surface listener attached");
        SurfaceListener {
            registry: Rc::downgrade(&self.inner),
            token,
            kinds,
        }
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Returns `true` if nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Ids of listeners subscribed to any of `kinds`, in attach order.
    #[must_use]
    pub fn listeners(&self, kinds: ListenerKinds) -> SmallVec<[K; 2]>
    where
        K: Clone,
    {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.kinds.intersects(kinds))
            .map(|e| e.id.clone())
            .collect()
    }

    /// Returns `true` if a listener is attached for `id`.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool
    where
        K: PartialEq,
    {
        self.inner.borrow().entries.iter().any(|e| e.id == *id)
    }
}

/// Scoped registration on a [`DragSurface`]; detaches when dropped.
#[derive(Debug)]
#[must_use = "dropping a SurfaceListener detaches it immediately"]
pub struct SurfaceListener<K> {
    registry: Weak<RefCell<Registry<K>>>,
    token: u64,
    kinds: ListenerKinds,
}

impl<K> SurfaceListener<K> {
    /// Event kinds this listener receives.
    #[must_use]
    pub fn kinds(&self) -> ListenerKinds {
        self.kinds
    }

    /// Returns `true` while the surface this listener was attached to is alive.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.registry.strong_count() > 0
    }

    /// Detach now. Equivalent to dropping the guard.
    pub fn detach(self) {
        drop(self);
    }
}

impl<K> Drop for SurfaceListener<K> {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let token = self.token;
        registry.borrow_mut().entries.retain(|e| e.token != token);
        crate::log_trace!(token, "surface listener detached");
    }
}
