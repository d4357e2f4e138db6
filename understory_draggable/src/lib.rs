// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_draggable --heading-base-level=0

//! Understory Draggable: a headless drag-to-translate element.
//!
//! This crate models one UI interaction: press an element, drag it around, and
//! let go. While the pointer is held the element follows it by a translation
//! measured from the press position; on release it snaps back to its layout
//! position (visually, with a return animation).
//!
//! It does not own a window, event loop, or renderer. Callers feed it pointer
//! positions and read back:
//!
//! - [`DragEvent`]s describing drag progress and completion, and
//! - a [`DragStyle`] describing how to draw the element this frame.
//!
//! ## Pieces
//!
//! - [`state`]: the [`DragState`] lifecycle, `Idle` or `Dragging { origin, translation }`.
//! - [`surface`]: the window-level [`DragSurface`] that receives moves and
//!   releases during a drag, with scoped [`SurfaceListener`] guards.
//! - [`draggable`]: the [`Draggable`] element tying state, listeners, and style together.
//! - [`event`]: output events and the [`DragHandler`] callback seam.
//! - [`style`]: the visual contract, [`DragStyle`] and [`DragConfig`].
//! - [`host`]: [`DragHost`], routing surface events to many mounted draggables.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_draggable::{DragEvent, DragHost};
//!
//! let mut host = DragHost::new();
//! host.mount(42_u32, "Drag me");
//!
//! // The caller hit-tests the press and routes it to element 42.
//! host.pointer_down(&42, Point::new(10.0, 10.0));
//!
//! // Moves and releases arrive from the surface, wherever the pointer is.
//! let moved = host.pointer_move(Point::new(15.0, 20.0));
//! assert_eq!(moved, vec![DragEvent::Drag { id: 42, translation: Vec2::new(5.0, 10.0) }]);
//!
//! let ended = host.pointer_up();
//! assert_eq!(ended, vec![DragEvent::DragEnd { id: 42 }]);
//!
//! let style = host.get(&42).unwrap().style();
//! assert_eq!(style.translate().to_string(), "translate(0px, 0px)");
//! ```
//!
//! ## Features
//!
//! - `std` (default): compile Kurbo against the standard library.
//! - `libm`: use `libm` for Kurbo in `no_std` builds.
//! - `tracing`: emit `tracing` events for drag transitions and listener attach/detach.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub(crate) use {log_debug, log_trace};

pub mod draggable;
pub mod event;
pub mod host;
pub mod state;
pub mod style;
pub mod surface;

pub use draggable::Draggable;
pub use event::{DragEvent, DragHandler, FnHandler, dispatch};
pub use host::DragHost;
pub use state::DragState;
pub use style::{Cursor, DragConfig, DragStyle, Position, Transition, Translate};
pub use surface::{DragSurface, ListenerKinds, SurfaceListener};
