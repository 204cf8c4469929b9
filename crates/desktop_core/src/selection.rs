//! Marquee-selection geometry over measured desktop icon rectangles.

use std::collections::BTreeMap;

use crate::model::{IconId, IconRect, Point};

/// Axis-aligned rectangle between the selection anchor and the live pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl SelectionBounds {
    /// Normalizes an anchor/pointer pair into origin + extents, regardless of
    /// drag direction.
    pub fn between(origin: Point, pointer: Point) -> Self {
        Self {
            x: origin.x.min(pointer.x),
            y: origin.y.min(pointer.y),
            w: (origin.x - pointer.x).abs(),
            h: (origin.y - pointer.y).abs(),
        }
    }

    /// Strict open-interval overlap on both axes: rectangles that merely
    /// touch at an edge do not select.
    pub fn overlaps(&self, rect: IconRect) -> bool {
        rect.x - self.x < self.w
            && self.x - rect.x < rect.w
            && rect.y - self.y < self.h
            && self.y - rect.y < rect.h
    }
}

/// Side collection of measured icon rectangles keyed by icon id.
///
/// This is layout output reported by the icon layer, not reducer state; it is
/// the sole geometry source the marquee overlap test reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRectStore {
    rects: BTreeMap<IconId, IconRect>,
}

impl IconRectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first measurement for an icon. Idempotent: once an id has
    /// a rectangle, later calls are ignored (first write wins). Layout
    /// changes go through [`IconRectStore::remeasure`] instead.
    pub fn measure(&mut self, id: IconId, rect: IconRect) {
        self.rects.entry(id).or_insert(rect);
    }

    /// Replaces the measurement for an icon (last write wins). Invoked on
    /// layout/resize events so selection never operates on stale geometry.
    pub fn remeasure(&mut self, id: IconId, rect: IconRect) {
        self.rects.insert(id, rect);
    }

    pub fn rect(&self, id: IconId) -> Option<IconRect> {
        self.rects.get(&id).copied()
    }

    /// Ids of all measured icons strictly overlapping the rectangle between
    /// `origin` and `pointer`, in id order.
    pub fn selected_ids(&self, origin: Point, pointer: Point) -> Vec<IconId> {
        let bounds = SelectionBounds::between(origin, pointer);
        self.rects
            .iter()
            .filter(|(_, rect)| bounds.overlaps(**rect))
            .map(|(id, _)| *id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> IconRect {
        IconRect { x, y, w, h }
    }

    fn two_icon_store() -> IconRectStore {
        let mut store = IconRectStore::new();
        store.measure(IconId(0), rect(0, 0, 10, 10));
        store.measure(IconId(1), rect(50, 50, 10, 10));
        store
    }

    #[test]
    fn partial_overlap_selects_only_the_covered_icon() {
        let store = two_icon_store();
        let selected = store.selected_ids(Point { x: 5, y: 5 }, Point { x: 15, y: 15 });
        assert_eq!(selected, vec![IconId(0)]);
    }

    #[test]
    fn full_sweep_selects_both_icons() {
        let store = two_icon_store();
        let selected = store.selected_ids(Point { x: 0, y: 0 }, Point { x: 100, y: 100 });
        assert_eq!(selected, vec![IconId(0), IconId(1)]);
    }

    #[test]
    fn touching_edges_select_nothing() {
        let store = two_icon_store();
        let selected = store.selected_ids(Point { x: 10, y: 10 }, Point { x: 20, y: 20 });
        assert_eq!(selected, Vec::<IconId>::new());
    }

    #[test]
    fn drag_direction_does_not_matter() {
        let store = two_icon_store();
        let forward = store.selected_ids(Point { x: 5, y: 5 }, Point { x: 15, y: 15 });
        let backward = store.selected_ids(Point { x: 15, y: 15 }, Point { x: 5, y: 5 });
        assert_eq!(forward, backward);
    }

    #[test]
    fn measure_is_first_write_wins() {
        let mut store = IconRectStore::new();
        store.measure(IconId(0), rect(0, 0, 10, 10));
        store.measure(IconId(0), rect(100, 100, 10, 10));
        assert_eq!(store.rect(IconId(0)), Some(rect(0, 0, 10, 10)));
    }

    #[test]
    fn remeasure_replaces_stale_geometry() {
        let mut store = IconRectStore::new();
        store.measure(IconId(0), rect(0, 0, 10, 10));
        store.remeasure(IconId(0), rect(100, 100, 10, 10));
        assert_eq!(store.rect(IconId(0)), Some(rect(100, 100, 10, 10)));

        let selected = store.selected_ids(Point { x: 95, y: 95 }, Point { x: 120, y: 120 });
        assert_eq!(selected, vec![IconId(0)]);
    }
}
