//! Stroke store with a visibility cursor for undo/redo.

use super::stroke::{Point, StrokeColor, StrokeRecord};

/// Ordered collection of strokes plus the undo cursor.
///
/// Records `[0, visible)` are drawn; records `[visible, len)` are hidden but
/// can be brought back with [`redo`](Self::redo) until a new stroke is
/// started, which truncates them away.
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    /// All stored strokes in draw order (first = bottom, last = top)
    records: Vec<StrokeRecord>,
    /// Number of leading records currently visible
    visible: usize,
    /// Highest cursor value reached since the last destructive append
    high_water: usize,
    /// Whether the last record is still receiving points
    open: bool,
}

impl StrokeHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new stroke at `point`.
    ///
    /// Any redo-able records past the cursor are dropped first, then the new
    /// record becomes the open stroke and the cursor moves past it.
    pub fn begin_stroke(&mut self, point: Point, brush_size: u32, color: StrokeColor) {
        self.truncate_to(self.visible);
        self.records.push(StrokeRecord::new(point, brush_size, color));
        self.visible += 1;
        self.high_water = self.visible;
        self.open = true;
        log::debug!(
            "Began stroke #{} at ({:.1}, {:.1}), radius {}",
            self.visible,
            point.x,
            point.y,
            brush_size
        );
    }

    /// Appends a point to the open stroke.
    ///
    /// Returns `false` (and does nothing) when no stroke is open.
    pub fn append_point(&mut self, point: Point) -> bool {
        if !self.open {
            log::trace!("Ignoring point ({:.1}, {:.1}) with no open stroke", point.x, point.y);
            return false;
        }
        match self.records.last_mut() {
            Some(record) => {
                record.push(point);
                true
            }
            None => {
                self.open = false;
                false
            }
        }
    }

    /// Marks the open stroke as finished; further points are ignored.
    pub fn end_stroke(&mut self) {
        self.open = false;
    }

    /// Removes the open stroke if it still consists of its first point only.
    ///
    /// Used when a touch turns out to be a long press rather than a stroke.
    /// Returns `true` if a record was removed; calling again afterwards is a
    /// no-op because the stroke is no longer open.
    pub fn remove_open_singleton(&mut self) -> bool {
        if !self.open || !self.records.last().is_some_and(StrokeRecord::is_singleton) {
            return false;
        }
        self.records.pop();
        self.visible = self.visible.saturating_sub(1).min(self.records.len());
        self.high_water = self.visible;
        self.open = false;
        log::debug!("Discarded tap point of long press; {} strokes visible", self.visible);
        true
    }

    /// Hides the most recent visible stroke. Returns `false` if none is visible.
    pub fn undo(&mut self) -> bool {
        if self.visible == 0 {
            return false;
        }
        self.visible -= 1;
        self.open = false;
        true
    }

    /// Re-shows the next hidden stroke. Returns `false` if none is hidden.
    pub fn redo(&mut self) -> bool {
        if self.visible >= self.records.len() {
            return false;
        }
        self.visible += 1;
        self.open = false;
        true
    }

    /// Removes every stroke and resets both cursors.
    pub fn clear(&mut self) {
        self.records.clear();
        self.visible = 0;
        self.high_water = 0;
        self.open = false;
    }

    /// Drops every record at or beyond `index`.
    pub fn truncate_to(&mut self, index: usize) {
        self.records.truncate(index);
        self.visible = self.visible.min(self.records.len());
        self.high_water = self.high_water.min(self.records.len());
    }

    pub fn is_undoable(&self) -> bool {
        self.visible > 0
    }

    pub fn is_redoable(&self) -> bool {
        self.visible < self.records.len()
    }

    /// Whether there is anything on the canvas to clear.
    pub fn is_clearable(&self) -> bool {
        self.visible >= 1
    }

    /// Whether a stroke is currently receiving points.
    pub fn has_open_stroke(&self) -> bool {
        self.open
    }

    /// The records currently drawn, in draw order.
    pub fn visible(&self) -> &[StrokeRecord] {
        &self.records[..self.visible]
    }

    /// All stored records, including hidden redo-able ones.
    pub fn records(&self) -> &[StrokeRecord] {
        &self.records
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn high_water(&self) -> usize {
        self.high_water
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
