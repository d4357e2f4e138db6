// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state: idle, or dragging from a captured origin.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::begin`], passing the pointer-down position.
//! 2) On each move, call [`DragState::update`] to get the translation from the origin.
//! 3) End the drag with [`DragState::end`], which returns to [`DragState::Idle`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_draggable::state::DragState;
//!
//! let mut drag = DragState::default();
//! assert_eq!(drag.translation(), Vec2::ZERO);
//!
//! drag.begin(Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! // Translation is always measured from the origin, not the previous move.
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.update(Point::new(12.0, 22.0)), Some(Vec2::new(2.0, 2.0)));
//!
//! assert_eq!(drag.end(), Some(Vec2::new(2.0, 2.0)));
//! assert_eq!(drag.translation(), Vec2::ZERO);
//! ```

use kurbo::{Point, Vec2};

/// Drag lifecycle of a single element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress; the element rests at its layout position.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Pointer position captured at pointer-down.
        origin: Point,
        /// Offset of the pointer from `origin` at the latest move.
        translation: Vec2,
    },
}

impl DragState {
    /// Start a drag at `pos`, replacing any drag already in progress.
    pub fn begin(&mut self, pos: Point) {
        *self = Self::Dragging {
            origin: pos,
            translation: Vec2::ZERO,
        };
    }

    /// Record a pointer move, returning the translation from the origin.
    ///
    /// Returns `None` and leaves the state untouched while idle.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging {
                origin,
                translation,
            } => {
                *translation = pos - *origin;
                Some(*translation)
            }
        }
    }

    /// End the drag, returning the last translation if one was in progress.
    pub fn end(&mut self) -> Option<Vec2> {
        match core::mem::take(self) {
            Self::Idle => None,
            Self::Dragging { translation, .. } => Some(translation),
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Origin of the current drag, if any.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { origin, .. } => Some(*origin),
        }
    }

    /// Current translation; always zero while idle.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        match self {
            Self::Idle => Vec2::ZERO,
            Self::Dragging { translation, .. } => *translation,
        }
    }
}
