//! Skyline bin packing.
//!
//! The skyline tracks, for every horizontal span of the container, how far
//! down the packing already reaches. Items land on the span with the lowest
//! landing height, tallest items first.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vidwall_common::types::Size;

use super::{Strategy, StrategyKind};
use crate::geometry::{
    bounds_of, center_offset, scale_cells, translate_cells, FIT_EPSILON, MIN_EXTENT,
};
use crate::layout::{Cell, LayoutItem};

/// Adjacent segments closer than this in height are merged. Absorbs drift
/// from repeated float arithmetic, so the skyline does not fragment.
pub const SKYLINE_MERGE_TOLERANCE: f64 = 1.0;

/// No single item may be wider than this fraction of the container.
pub const SKYLINE_MAX_WIDTH_FRACTION: f64 = 0.6;

/// Upper bound on the final uniform scale, so sparse packings are not
/// blown up.
pub const SKYLINE_MAX_UPSCALE: f64 = 1.2;

/// One horizontal run of the skyline. `y` is the lowest occupied point
/// under the run (screen coordinates, growing downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl Segment {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Where an item would land: the first segment it spans, and its top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub segment: usize,
    pub x: f64,
    pub y: f64,
}

/// Contiguous segments sorted by `x`, together covering `[0, width)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Skyline {
    width: f64,
    segments: Vec<Segment>,
}

impl Skyline {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            segments: vec![Segment {
                x: 0.0,
                y: 0.0,
                width,
            }],
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Deepest point of the packing so far.
    pub fn top(&self) -> f64 {
        self.segments.iter().map(|s| s.y).fold(0.0, f64::max)
    }

    /// Lowest landing position for an item of `width`.
    ///
    /// Every segment is tried as the left edge, spanning as many following
    /// segments as needed. Ties go to the first position found scanning left
    /// to right. `None` when the item is wider than the skyline.
    pub fn find_position(&self, width: f64) -> Option<Placement> {
        let mut best: Option<Placement> = None;
        for (i, start) in self.segments.iter().enumerate() {
            let mut spanned = 0.0;
            let mut landing = f64::NEG_INFINITY;
            for seg in &self.segments[i..] {
                spanned += seg.width;
                landing = landing.max(seg.y);
                if spanned + FIT_EPSILON >= width {
                    break;
                }
            }
            if spanned + FIT_EPSILON < width {
                // Runs starting further right are narrower still.
                break;
            }
            if best.map_or(true, |b| landing < b.y) {
                best = Some(Placement {
                    segment: i,
                    x: start.x,
                    y: landing,
                });
            }
        }
        best
    }

    /// Record a rectangle covering `[x, x + width)` whose lower edge is at `bottom`.
    pub fn place(&mut self, x: f64, width: f64, bottom: f64) {
        let end = x + width;
        let raised = Segment { x, y: bottom, width };
        let mut next = Vec::with_capacity(self.segments.len() + 2);
        let mut inserted = false;

        for seg in &self.segments {
            if seg.right() <= x + FIT_EPSILON {
                next.push(*seg);
                continue;
            }
            if seg.x >= end - FIT_EPSILON {
                if !inserted {
                    next.push(raised);
                    inserted = true;
                }
                next.push(*seg);
                continue;
            }
            if seg.x < x {
                next.push(Segment {
                    x: seg.x,
                    y: seg.y,
                    width: x - seg.x,
                });
            }
            if !inserted {
                next.push(raised);
                inserted = true;
            }
            if seg.right() > end {
                next.push(Segment {
                    x: end,
                    y: seg.y,
                    width: seg.right() - end,
                });
            }
        }
        if !inserted {
            next.push(raised);
        }

        self.segments = next;
        self.normalize();
        self.merge_levels();
    }

    /// Re-derive widths from neighbouring `x` values so the segments tile
    /// `[0, width)` exactly, dropping slivers.
    fn normalize(&mut self) {
        self.segments.retain(|s| s.width > FIT_EPSILON);
        if let Some(first) = self.segments.first_mut() {
            first.x = 0.0;
        }
        let count = self.segments.len();
        for i in 0..count {
            let right = if i + 1 < count {
                self.segments[i + 1].x
            } else {
                self.width
            };
            self.segments[i].width = right - self.segments[i].x;
        }
    }

    /// Merge neighbours whose heights are within [`SKYLINE_MERGE_TOLERANCE`],
    /// keeping the deeper one, until no such pair is left.
    fn merge_levels(&mut self) {
        loop {
            let before = self.segments.len();
            let mut merged: Vec<Segment> = Vec::with_capacity(before);
            for seg in self.segments.drain(..) {
                match merged.last_mut() {
                    Some(last) if (last.y - seg.y).abs() < SKYLINE_MERGE_TOLERANCE => {
                        last.y = last.y.max(seg.y);
                        last.width = seg.right() - last.x;
                    }
                    _ => merged.push(seg),
                }
            }
            self.segments = merged;
            if self.segments.len() == before {
                break;
            }
        }
    }
}

/// True 2-D packing on a skyline, then a uniform fit-and-center pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkylinePack;

impl Strategy for SkylinePack {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Skyline
    }

    fn place(&self, container: Size, items: &[LayoutItem]) -> Vec<Cell> {
        let count = items.len() as f64;
        let mean_ratio = items.iter().map(LayoutItem::ratio).sum::<f64>() / count;
        let area_per_item = container.area() / count;
        let base_height = (area_per_item / mean_ratio).sqrt();
        let max_width = container.width * SKYLINE_MAX_WIDTH_FRACTION;

        // Tallest first (largest height per unit width); stable on ties.
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| {
            let ta = 1.0 / items[a].ratio();
            let tb = 1.0 / items[b].ratio();
            tb.total_cmp(&ta)
        });

        let mut skyline = Skyline::new(container.width);
        let mut placed: Vec<(usize, Cell)> = Vec::with_capacity(items.len());

        for index in order {
            let item = &items[index];
            let ratio = item.ratio();
            let mut width = base_height * ratio;
            let mut height = base_height;
            if width > max_width {
                width = max_width;
                height = width / ratio;
            }

            let (x, y) = match skyline.find_position(width) {
                Some(p) if p.y + height <= container.height + FIT_EPSILON => (p.x, p.y),
                _ => {
                    // Nothing fits: put it along the bottom of the packing,
                    // clipped to whatever height is left.
                    let top = skyline.top();
                    let remaining = container.height - top;
                    if remaining > MIN_EXTENT && remaining < height {
                        height = remaining;
                    }
                    width = width.min(container.width);
                    debug!(
                        stream = %item.id,
                        top,
                        height,
                        "skyline: no fitting span, placing at bottom edge"
                    );
                    (0.0, top)
                }
            };

            skyline.place(x, width, y + height);
            placed.push((
                index,
                Cell {
                    stream_id: item.id.clone(),
                    x,
                    y,
                    width,
                    height,
                },
            ));
        }

        placed.sort_by_key(|(index, _)| *index);
        let mut cells: Vec<Cell> = placed.into_iter().map(|(_, cell)| cell).collect();

        let bounds = bounds_of(&cells);
        if bounds.width > 0.0 && bounds.height > 0.0 {
            let scale = (container.width / bounds.width)
                .min(container.height / bounds.height)
                .min(SKYLINE_MAX_UPSCALE);
            translate_cells(&mut cells, -bounds.min_x, -bounds.min_y);
            scale_cells(&mut cells, scale);
            translate_cells(
                &mut cells,
                center_offset(container.width, bounds.width * scale),
                center_offset(container.height, bounds.height * scale),
            );
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::contained_in;

    fn assert_well_formed(skyline: &Skyline) {
        let segs = skyline.segments();
        assert!(!segs.is_empty());
        assert_eq!(segs[0].x, 0.0);
        for pair in segs.windows(2) {
            assert!((pair[0].right() - pair[1].x).abs() < 1e-9, "gap in {segs:?}");
            assert!(
                (pair[0].y - pair[1].y).abs() >= SKYLINE_MERGE_TOLERANCE,
                "unmerged neighbours in {segs:?}"
            );
        }
        let last = segs[segs.len() - 1];
        assert!((last.right() - skyline.width()).abs() < 1e-9);
    }

    fn items(ratios: &[f64]) -> Vec<LayoutItem> {
        ratios
            .iter()
            .enumerate()
            .map(|(i, r)| LayoutItem::new(format!("s{i}"), *r))
            .collect()
    }

    #[test]
    fn new_skyline_is_one_flat_segment() {
        let skyline = Skyline::new(1000.0);
        assert_eq!(
            skyline.segments(),
            &[Segment {
                x: 0.0,
                y: 0.0,
                width: 1000.0
            }]
        );
        assert_eq!(skyline.top(), 0.0);
    }

    #[test]
    fn place_splits_segment() {
        let mut skyline = Skyline::new(1000.0);
        skyline.place(0.0, 300.0, 200.0);
        assert_eq!(skyline.segments().len(), 2);
        assert_eq!(skyline.segments()[0].y, 200.0);
        assert_eq!(skyline.segments()[1].x, 300.0);
        assert_eq!(skyline.segments()[1].y, 0.0);
        assert_well_formed(&skyline);
    }

    #[test]
    fn place_in_middle_makes_three_segments() {
        let mut skyline = Skyline::new(1000.0);
        skyline.place(400.0, 200.0, 100.0);
        let ys: Vec<f64> = skyline.segments().iter().map(|s| s.y).collect();
        assert_eq!(ys, vec![0.0, 100.0, 0.0]);
        assert_well_formed(&skyline);
    }

    #[test]
    fn equal_neighbours_merge() {
        let mut skyline = Skyline::new(1000.0);
        skyline.place(0.0, 300.0, 200.0);
        skyline.place(300.0, 300.0, 200.0);
        assert_eq!(skyline.segments().len(), 2);
        assert_eq!(skyline.segments()[0].width, 600.0);
        assert_well_formed(&skyline);
    }

    #[test]
    fn near_equal_neighbours_merge_to_the_deeper_level() {
        let mut skyline = Skyline::new(1000.0);
        skyline.place(0.0, 300.0, 200.0);
        skyline.place(300.0, 300.0, 200.6);
        assert_eq!(skyline.segments().len(), 2);
        assert_eq!(skyline.segments()[0].y, 200.6);
        assert_well_formed(&skyline);
    }

    #[test]
    fn cascading_merge_leaves_no_close_pair() {
        let mut skyline = Skyline::new(900.0);
        skyline.place(0.0, 300.0, 12.6);
        skyline.place(600.0, 300.0, 11.9);
        // 11.0 merges into 11.9 on its right, which lands within 1 of 12.6
        // on the left, so everything collapses into one level.
        skyline.place(300.0, 300.0, 11.0);
        assert_eq!(skyline.segments().len(), 1);
        assert_eq!(skyline.segments()[0].y, 12.6);
        assert_well_formed(&skyline);
    }

    #[test]
    fn find_position_prefers_lowest_landing() {
        let mut skyline = Skyline::new(1000.0);
        skyline.place(0.0, 400.0, 300.0);
        let p = skyline.find_position(300.0).unwrap();
        assert_eq!(p.x, 400.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.segment, 1);
    }

    #[test]
    fn find_position_spans_segments() {
        let mut skyline = Skyline::new(1000.0);
        skyline.place(0.0, 400.0, 300.0);
        skyline.place(400.0, 300.0, 100.0);
        // Only the full width holds 800.
        let p = skyline.find_position(800.0).unwrap();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 300.0);
        // 500 fits from segment 1 across segments 1 and 2, landing at 100.
        let p = skyline.find_position(500.0).unwrap();
        assert_eq!(p.x, 400.0);
        assert_eq!(p.y, 100.0);
    }

    #[test]
    fn find_position_ties_go_left() {
        let mut skyline = Skyline::new(1000.0);
        skyline.place(200.0, 200.0, 50.0);
        // Segments: [0,200)@0, [200,400)@50, [400,1000)@0. Both outer
        // segments land at 0; the left one wins.
        let p = skyline.find_position(150.0).unwrap();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.segment, 0);
    }

    #[test]
    fn find_position_too_wide_is_none() {
        let skyline = Skyline::new(1000.0);
        assert!(skyline.find_position(1000.5).is_none());
        assert!(skyline.find_position(1000.0).is_some());
    }

    #[test]
    fn skyline_stays_well_formed_under_many_placements() {
        let mut skyline = Skyline::new(1280.0);
        let widths = [300.0, 150.0, 420.0, 90.0, 600.0, 210.0, 333.3, 47.5, 512.0];
        for (i, w) in widths.iter().enumerate() {
            let p = skyline.find_position(*w).unwrap();
            skyline.place(p.x, *w, p.y + 40.0 + (i as f64) * 13.7);
            assert_well_formed(&skyline);
        }
    }

    #[test]
    fn mixed_orientations_pack_inside_container() {
        let container = Size::new(1000.0, 1000.0);
        let cells = SkylinePack.place(container, &items(&[16.0 / 9.0, 9.0 / 16.0, 16.0 / 9.0, 9.0 / 16.0]));
        assert_eq!(cells.len(), 4);
        assert!(contained_in(&cells, container));
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.stream_id.as_str(), format!("s{i}"));
            for other in &cells[i + 1..] {
                assert!(!cell.rect().intersects(&other.rect(), 1e-6));
            }
        }
    }

    #[test]
    fn wide_items_are_capped_then_upscaled() {
        let container = Size::new(1000.0, 1000.0);
        // Base height sqrt(1e6 / 2 / 5) = 316 gives width 1581, over the
        // 0.6 cap: both become 600 x 120 and stack to a 600 x 240 block,
        // which the final pass scales by the 1.2 cap and centers.
        let cells = SkylinePack.place(container, &items(&[5.0, 5.0]));
        let expected = [(140.0, 356.0, 720.0, 144.0), (140.0, 500.0, 720.0, 144.0)];
        assert_eq!(cells.len(), 2);
        for (cell, (x, y, w, h)) in cells.iter().zip(expected) {
            assert!((cell.x - x).abs() < 1e-6, "x {}", cell.x);
            assert!((cell.y - y).abs() < 1e-6, "y {}", cell.y);
            assert!((cell.width - w).abs() < 1e-6, "width {}", cell.width);
            assert!((cell.height - h).abs() < 1e-6, "height {}", cell.height);
        }
        assert!((cells[0].width / container.width - SKYLINE_MAX_WIDTH_FRACTION * SKYLINE_MAX_UPSCALE).abs() < 1e-9);
    }

    #[test]
    fn tall_sliver_is_clipped_and_fitted() {
        let container = Size::new(1000.0, 1000.0);
        // Base height 1000 / sqrt(0.1) overshoots; the sliver is clipped to
        // the container height and kept at scale 1.
        let cells = SkylinePack.place(container, &items(&[0.1]));
        assert_eq!(cells.len(), 1);
        assert!((cells[0].height - 1000.0).abs() < 1e-6);
        assert!(contained_in(&cells, container));
    }
}
