// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual contract for a draggable element.
//!
//! While dragging, the element is lifted out of flow (absolute positioning,
//! raised stacking order), follows the pointer without animation, and shows a
//! grabbing cursor. At rest it sits in normal flow and animates back to its
//! layout position.
//!
//! [`DragStyle`] is toolkit-neutral. Its [`Display`](core::fmt::Display) impl
//! renders CSS declarations for web-style backends:
//!
//! ```
//! use understory_draggable::style::{DragConfig, DragStyle};
//!
//! let style = DragStyle::resting(&DragConfig::default());
//! assert_eq!(
//!     style.to_string(),
//!     "cursor: grab; transform: translate(0px, 0px); transition: transform 500ms; \
//!      z-index: 1; position: relative;"
//! );
//! ```

use core::fmt;
use core::time::Duration;

use kurbo::{Affine, Vec2};

/// Tunables for the visual contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragConfig {
    /// Duration of the animated return to the layout position after release.
    pub return_duration: Duration,
    /// Stacking order while dragging.
    pub dragging_z_index: i32,
    /// Stacking order at rest.
    pub resting_z_index: i32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            return_duration: Duration::from_millis(500),
            dragging_z_index: 2,
            resting_z_index: 1,
        }
    }
}

impl DragConfig {
    /// Set the return animation duration.
    #[must_use]
    pub fn with_return_duration(mut self, duration: Duration) -> Self {
        self.return_duration = duration;
        self
    }

    /// Set the stacking order used while dragging and at rest.
    #[must_use]
    pub fn with_z_indices(mut self, dragging: i32, resting: i32) -> Self {
        self.dragging_z_index = dragging;
        self.resting_z_index = resting;
        self
    }
}

/// Layout positioning scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    /// Normal flow, offset relative to the layout position.
    Relative,
    /// Out of flow.
    Absolute,
}

/// Pointer cursor shown over the element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// Open hand: the element can be picked up.
    Grab,
    /// Closed hand: the element is being dragged.
    Grabbing,
}

/// Animation applied to changes of the transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Transform changes apply immediately.
    None,
    /// Transform changes animate over the given duration.
    Transform(Duration),
}

/// A 2D translation rendered as `translate(<x>px, <y>px)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Translate(pub Vec2);

/// Resolved style for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragStyle {
    /// Positioning scheme.
    pub position: Position,
    /// Stacking order.
    pub z_index: i32,
    /// Transform animation.
    pub transition: Transition,
    /// Pointer cursor.
    pub cursor: Cursor,
    /// Visual offset from the layout position.
    pub translation: Vec2,
}

impl DragStyle {
    /// Style for an element being dragged by `translation`.
    #[must_use]
    pub fn dragging(config: &DragConfig, translation: Vec2) -> Self {
        Self {
            position: Position::Absolute,
            z_index: config.dragging_z_index,
            transition: Transition::None,
            cursor: Cursor::Grabbing,
            translation,
        }
    }

    /// Style for an element at rest.
    #[must_use]
    pub fn resting(config: &DragConfig) -> Self {
        Self {
            position: Position::Relative,
            z_index: config.resting_z_index,
            transition: Transition::Transform(config.return_duration),
            cursor: Cursor::Grab,
            translation: Vec2::ZERO,
        }
    }

    /// The visual offset as an affine transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translation)
    }

    /// The visual offset in CSS form.
    #[must_use]
    pub fn translate(&self) -> Translate {
        Translate(self.translation)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        })
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        })
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Transform(d) => write!(f, "transform {}ms", d.as_millis()),
        }
    }
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}px, {}px)", self.0.x, self.0.y)
    }
}

impl fmt::Display for DragStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cursor: {}; transform: {}; transition: {}; z-index: {}; position: {};",
            self.cursor,
            self.translate(),
            self.transition,
            self.z_index,
            self.position,
        )
    }
}
