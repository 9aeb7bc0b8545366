// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end walkthrough of the Easel crates.
//!
//! This example shows how to combine:
//! - `easel_compound` for the document tree and its bounding boxes,
//! - `easel_navigation` for opening a compound in place, editing inside it,
//!   and splicing it back,
//! - `easel_redraw` (with its `easel_depth_index` counts cache) for
//!   painter's-algorithm redraws onto a logging surface.
//!
//! Run:
//! - `cargo run -p easel_demos --example figure_editor_walkthrough`

use easel_compound::{Bounded, Compound, Primitive, PrimitiveKind, SlotPath};
use easel_navigation::Document;
use easel_redraw::{AllActive, Canvas, DrawMode, DrawSurface, PaintStyle};
use kurbo::Rect;

/// Scene data: every primitive is just a labeled box here. A real host would
/// store arc/ellipse/line/spline/text geometry and dispatch on the kind.
#[derive(Clone, Debug, PartialEq)]
struct Shape {
    label: &'static str,
    rect: Rect,
}

impl Shape {
    fn new(label: &'static str, rect: Rect) -> Self {
        Self { label, rect }
    }
}

impl Bounded for Shape {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// A surface that logs every engine callback instead of rasterizing.
struct LoggingSurface;

impl DrawSurface<Shape> for LoggingSurface {
    fn draw_primitive(
        &mut self,
        kind: PrimitiveKind,
        geometry: &Shape,
        _mode: DrawMode,
        style: PaintStyle,
    ) {
        println!("  draw {kind:?} {:?} ({style:?})", geometry.label);
    }

    fn set_clip(&mut self, rect: Rect) {
        println!("  clip to {rect:?}");
    }

    fn clear_rect(&mut self, rect: Rect) {
        println!("  clear {rect:?}");
    }

    fn reset_clip(&mut self) {
        println!("  clip off");
    }

    fn draw_overlays(&mut self) {
        println!("  overlays");
    }
}

fn prim(label: &'static str, depth: i32, rect: Rect) -> Primitive<Shape> {
    Primitive {
        depth,
        geometry: Shape::new(label, rect),
    }
}

fn main() {
    // A root figure with a line in front (small depth) and a grouped house
    // shape behind it (larger depths).
    let mut house = Compound::new();
    house.push_primitive(
        PrimitiveKind::Line,
        prim("walls", 60, Rect::new(10.0, 20.0, 50.0, 60.0)),
    );
    house.push_primitive(
        PrimitiveKind::Line,
        prim("roof", 50, Rect::new(5.0, 0.0, 55.0, 20.0)),
    );

    let mut root = Compound::new();
    root.push_primitive(
        PrimitiveKind::Line,
        prim("horizon", 10, Rect::new(0.0, 40.0, 100.0, 40.0)),
    );
    root.push_primitive(
        PrimitiveKind::Text,
        prim("caption", 10, Rect::new(0.0, 70.0, 40.0, 80.0)),
    );
    root.add_child(house);
    root.update_bounds();

    let mut doc = Document::new(root);
    let mut canvas = Canvas::new(AllActive);
    canvas.reindex(doc.root());

    let mut surface = LoggingSurface;
    println!("full redisplay, deepest first:");
    canvas.redisplay_all(&doc, &mut surface);

    // Open the house for in-place editing, keeping the rest of the figure
    // visible (muted) behind it.
    assert!(doc.open(&SlotPath::from_slice(&[0]), true));
    canvas.reindex(doc.root());
    println!("\ninside the open compound (ancestors muted):");
    canvas.redisplay_all(&doc, &mut surface);

    // Edit inside: add a door in front of the walls.
    doc.root_mut().push_primitive(
        PrimitiveKind::Line,
        prim("door", 40, Rect::new(25.0, 40.0, 35.0, 60.0)),
    );
    canvas
        .depth_index_mut()
        .index_primitive(40, PrimitiveKind::Line);
    canvas.damage_object(&doc, &mut surface, Rect::new(25.0, 40.0, 35.0, 60.0));

    // Close back to the top; the edited house is spliced into its old slot
    // and every ancestor box is refreshed.
    assert!(doc.close_all());
    canvas.reindex(doc.root());
    println!("\nback at the top, figure bounds {:?}:", doc.root().bounds());
    canvas.redisplay_all(&doc, &mut surface);

    // A move gesture damages the old and new boxes; overlapping boxes are
    // redrawn once as their union.
    println!("\nmove damage:");
    canvas.damage_pair(
        &doc,
        &mut surface,
        Rect::new(0.0, 38.0, 100.0, 44.0),
        Rect::new(0.0, 42.0, 100.0, 48.0),
    );
}
