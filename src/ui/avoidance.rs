//! # Cursor Avoidance
//!
//! Keeps the evasive "No" button hidden whenever the mouse pointer comes
//! within a fixed radius of its center.
//!
//! ## Units
//!
//! Terminal cells are roughly twice as tall as they are wide, so distances
//! are measured in *virtual pixels*: a cell is scaled by [`CellMetrics`]
//! (8 × 16 by default) before the Euclidean distance is taken. A pointer
//! reported at cell `(c, r)` sits at the middle of that cell.
//!
//! ## Tie-break
//!
//! A pointer exactly [`DEFAULT_THRESHOLD`] away counts as far enough, so
//! the button stays visible: `visible = distance >= threshold`.

use ratatui::layout::{Position, Rect};

/// Radius (in virtual pixels) inside which the evasive button hides.
pub const DEFAULT_THRESHOLD: f64 = 140.0;

/// Size of one terminal cell in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Virtual-pixel position of the middle of the cell at `pos`.
    pub fn pointer(&self, pos: Position) -> Point {
        Point::new(
            (f64::from(pos.x) + 0.5) * self.width,
            (f64::from(pos.y) + 0.5) * self.height,
        )
    }

    /// Virtual-pixel center of a rectangle of cells.
    pub fn center_of(&self, rect: Rect) -> Point {
        Point::new(
            (f64::from(rect.x) + f64::from(rect.width) / 2.0) * self.width,
            (f64::from(rect.y) + f64::from(rect.height) / 2.0) * self.height,
        )
    }
}

/// A point in virtual-pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Whether the evasive button is shown.
///
/// Visibility and interactivity are one value: a hidden button can never
/// be clicked or activated from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    /// Visibility for a pointer `distance` away from the button center.
    pub fn for_distance(distance: f64, threshold: f64) -> Self {
        if distance >= threshold {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    pub fn is_interactive(self) -> bool {
        self.is_visible()
    }
}

/// Tracks the evasive button's visibility from pointer movement.
#[derive(Debug, Clone)]
pub struct CursorAvoidance {
    threshold: f64,
    metrics: CellMetrics,
    visibility: Visibility,
}

impl Default for CursorAvoidance {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, CellMetrics::default())
    }
}

impl CursorAvoidance {
    pub fn new(threshold: f64, metrics: CellMetrics) -> Self {
        Self {
            threshold,
            metrics,
            visibility: Visibility::Visible,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Distance in virtual pixels between the pointer cell and the center
    /// of `target`.
    pub fn distance(&self, pointer: Position, target: Rect) -> f64 {
        self.metrics
            .pointer(pointer)
            .distance_to(self.metrics.center_of(target))
    }

    /// Re-evaluate visibility for a pointer event.
    ///
    /// `target` is the button's freshly measured rectangle, or `None` when
    /// the button is not laid out; in that case the event is ignored.
    /// Returns `true` if visibility changed.
    pub fn on_pointer_move(&mut self, pointer: Position, target: Option<Rect>) -> bool {
        let Some(target) = target else {
            return false;
        };

        let next = Visibility::for_distance(self.distance(pointer, target), self.threshold);
        let changed = next != self.visibility;
        self.visibility = next;
        changed
    }
}
