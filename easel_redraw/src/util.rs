// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};

/// Map an axis-aligned `Rect` through an `Affine` and return a conservative
/// axis-aligned bounding box of the result in device space.
pub(crate) fn map_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    let min_x = (a * rect.x0).min(a * rect.x1) + (c * rect.y0).min(c * rect.y1);
    let max_x = (a * rect.x0).max(a * rect.x1) + (c * rect.y0).max(c * rect.y1);
    let min_y = (b * rect.x0).min(b * rect.x1) + (d * rect.y0).min(d * rect.y1);
    let max_y = (b * rect.x0).max(b * rect.x1) + (d * rect.y0).max(d * rect.y1);
    Rect::new(min_x + e, min_y + f, max_x + e, max_y + f)
}

/// Whether two rectangles overlap. Shared edges count as overlap, so two
/// damage boxes that merely touch are redrawn as one union.
pub(crate) fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_includes_shared_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rects_overlap(a, Rect::new(5.0, 5.0, 15.0, 15.0)));
        assert!(rects_overlap(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
        assert!(!rects_overlap(a, Rect::new(11.0, 0.0, 20.0, 10.0)));
    }

    #[test]
    fn map_rect_bbox_scales_and_translates() {
        let affine = Affine::scale(2.0).then_translate(kurbo::Vec2::new(3.0, 4.0));
        let mapped = map_rect_bbox(affine, Rect::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(mapped, Rect::new(5.0, 6.0, 7.0, 8.0));
    }
}
