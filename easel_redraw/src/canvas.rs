// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The redraw engine: depth-descending traversal with counts-cache early exit.

use easel_compound::{Compound, MAX_DEPTH, MIN_DEPTH, PrimitiveKind};
use easel_depth_index::DepthIndex;
use easel_navigation::Document;
use kurbo::{Affine, Rect};

use crate::layers::{AllActive, LayerPolicy};
use crate::surface::{DrawMode, DrawSurface, PaintStyle};
use crate::util::{map_rect_bbox, rects_overlap};

bitflags::bitflags! {
    /// Canvas state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CanvasFlags: u8 {
        /// Paint primitives on inactive layers in a muted style instead of
        /// hiding them.
        const INACTIVE_MUTED      = 0b0000_0001;
        /// A preview render is in progress; redraw requests are deferred.
        const PREVIEW_IN_PROGRESS = 0b0000_0010;
        /// A redraw was requested while a preview was in progress.
        const DEFERRED_REDRAW     = 0b0000_0100;
    }
}

/// Which tree a traversal is painting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pass {
    /// A saved ancestor root: everything muted, counts cache bypassed (the
    /// cache totals describe the active tree only).
    Ancestor,
    /// The active document root: layer policy applies, cache early exit on.
    Active,
}

/// Fold a raw primitive depth into the representable range. Depths beyond
/// [`MAX_DEPTH`] collapse into the last bucket and draw with it.
#[inline]
fn fold_depth(depth: i32) -> i32 {
    depth.clamp(MIN_DEPTH, MAX_DEPTH)
}

/// The redraw engine.
///
/// Owns the counts cache and the object→device transform; reads the document
/// tree through shared references. Aside from the cache's pass counters and
/// the preview flags, a redraw is a pure function of (active root, layer
/// policy, optional clip rectangle).
#[derive(Clone, Debug)]
pub struct Canvas<L: LayerPolicy = AllActive> {
    layers: L,
    index: DepthIndex,
    object_to_device: Affine,
    flags: CanvasFlags,
}

impl<L: LayerPolicy + Default> Default for Canvas<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}

impl<L: LayerPolicy> Canvas<L> {
    /// Create a canvas with the given layer policy, an identity
    /// object→device transform, and an empty counts cache.
    pub fn new(layers: L) -> Self {
        Self {
            layers,
            index: DepthIndex::new(),
            object_to_device: Affine::IDENTITY,
            flags: CanvasFlags::empty(),
        }
    }

    /// The layer policy.
    pub fn layers(&self) -> &L {
        &self.layers
    }

    /// Mutable access to the layer policy.
    pub fn layers_mut(&mut self) -> &mut L {
        &mut self.layers
    }

    /// The counts cache. Load/merge/paste/delete collaborators keep it in
    /// sync through [`Canvas::depth_index_mut`].
    pub fn depth_index(&self) -> &DepthIndex {
        &self.index
    }

    /// Mutable access to the counts cache, for `index`/`deindex` calls on
    /// structural mutations outside the engine's control.
    pub fn depth_index_mut(&mut self) -> &mut DepthIndex {
        &mut self.index
    }

    /// Rebuild the counts cache wholesale from `root`. Called on
    /// new-document/load and whenever the active root changes (open/close).
    pub fn reindex<G>(&mut self, root: &Compound<G>) {
        self.index.clear_all();
        self.index.index_subtree(root);
    }

    /// Set the object→device transform used by zoomed-region redraws.
    pub fn set_object_to_device(&mut self, transform: Affine) {
        self.object_to_device = transform;
    }

    /// The object→device transform.
    pub fn object_to_device(&self) -> Affine {
        self.object_to_device
    }

    /// Toggle muted painting of inactive layers.
    pub fn set_show_inactive_muted(&mut self, muted: bool) {
        self.flags.set(CanvasFlags::INACTIVE_MUTED, muted);
    }

    /// Whether inactive layers paint muted instead of being hidden.
    pub fn show_inactive_muted(&self) -> bool {
        self.flags.contains(CanvasFlags::INACTIVE_MUTED)
    }

    /// A preview render is starting; redraw requests will be deferred until
    /// [`Canvas::end_preview`].
    pub fn begin_preview(&mut self) {
        self.flags.insert(CanvasFlags::PREVIEW_IN_PROGRESS);
    }

    /// The preview render finished. Returns whether a redraw was requested
    /// (and deferred) in the meantime; the caller must honor it.
    pub fn end_preview(&mut self) -> bool {
        self.flags.remove(CanvasFlags::PREVIEW_IN_PROGRESS);
        let deferred = self.flags.contains(CanvasFlags::DEFERRED_REDRAW);
        self.flags.remove(CanvasFlags::DEFERRED_REDRAW);
        deferred
    }

    /// Whether a preview render is in progress.
    pub fn preview_in_progress(&self) -> bool {
        self.flags.contains(CanvasFlags::PREVIEW_IN_PROGRESS)
    }

    /// Whether a redraw request is pending behind a preview render.
    pub fn redraw_deferred(&self) -> bool {
        self.flags.contains(CanvasFlags::DEFERRED_REDRAW)
    }

    /// Redraw the whole canvas.
    ///
    /// When the innermost open compound keeps ancestors visible, the chain of
    /// saved ancestor roots paints first, outermost inward, fully muted; the
    /// active root then paints on top under the layer policy.
    pub fn redisplay_all<G, S: DrawSurface<G>>(&mut self, doc: &Document<G>, surface: &mut S) {
        self.redisplay(doc, surface, None);
    }

    /// Redraw exactly `rect` (device space): clip, clear the rectangle, and
    /// re-run the full logical traversal. The clip makes off-rectangle draw
    /// calls cheap no-ops.
    pub fn redisplay_region<G, S: DrawSurface<G>>(
        &mut self,
        doc: &Document<G>,
        surface: &mut S,
        rect: Rect,
    ) {
        self.redisplay(doc, surface, Some(rect));
    }

    /// Redraw an object-space rectangle, mapping it through the
    /// object→device transform first.
    pub fn redisplay_zoomed_region<G, S: DrawSurface<G>>(
        &mut self,
        doc: &Document<G>,
        surface: &mut S,
        object_rect: Rect,
    ) {
        let device_rect = map_rect_bbox(self.object_to_device, object_rect);
        self.redisplay_region(doc, surface, device_rect);
    }

    /// Redraw two damage boxes: one pass over their union when they overlap
    /// (shared edges included), otherwise one independent pass per box.
    pub fn redisplay_regions<G, S: DrawSurface<G>>(
        &mut self,
        doc: &Document<G>,
        surface: &mut S,
        box_a: Rect,
        box_b: Rect,
    ) {
        if rects_overlap(box_a, box_b) {
            self.redisplay_region(doc, surface, box_a.union(box_b));
        } else {
            self.redisplay_region(doc, surface, box_a);
            self.redisplay_region(doc, surface, box_b);
        }
    }

    /// Damage helper for a single-object edit: redraw the object's box.
    pub fn damage_object<G, S: DrawSurface<G>>(
        &mut self,
        doc: &Document<G>,
        surface: &mut S,
        bounds: Rect,
    ) {
        self.redisplay_region(doc, surface, bounds);
    }

    /// Damage helper for a move/resize edit: redraw the old and new boxes.
    pub fn damage_pair<G, S: DrawSurface<G>>(
        &mut self,
        doc: &Document<G>,
        surface: &mut S,
        old_bounds: Rect,
        new_bounds: Rect,
    ) {
        self.redisplay_regions(doc, surface, old_bounds, new_bounds);
    }

    fn redisplay<G, S: DrawSurface<G>>(
        &mut self,
        doc: &Document<G>,
        surface: &mut S,
        clip: Option<Rect>,
    ) {
        if self.flags.contains(CanvasFlags::PREVIEW_IN_PROGRESS) {
            self.flags.insert(CanvasFlags::DEFERRED_REDRAW);
            return;
        }
        surface.begin_busy();
        if let Some(rect) = clip {
            surface.set_clip(rect);
            surface.clear_rect(rect);
        }
        if doc.keep_ancestors_visible() {
            for ancestor in doc.ancestor_roots() {
                self.draw_tree(ancestor, surface, Pass::Ancestor);
            }
        }
        self.index.clear_pass();
        self.draw_tree(doc.root(), surface, Pass::Active);
        if clip.is_some() {
            surface.reset_clip();
        }
        surface.draw_overlays();
        surface.end_busy();
    }

    /// One painter's-algorithm sweep over a tree: largest depth first, so
    /// nearer (smaller-depth) objects overdraw farther ones.
    fn draw_tree<G, S: DrawSurface<G>>(&mut self, root: &Compound<G>, surface: &mut S, pass: Pass) {
        let (Some(min), Some(max)) = (root.smallest_depth(), root.largest_depth()) else {
            return;
        };
        for depth in (fold_depth(min)..=fold_depth(max)).rev() {
            // Layer activity is per depth, so each depth paints in exactly
            // one style: muted for ancestors and shown-inactive layers,
            // normal for active layers, or not at all.
            let style = match pass {
                Pass::Ancestor => PaintStyle::Muted,
                Pass::Active => {
                    if self.layers.is_active(depth) {
                        PaintStyle::Normal
                    } else if self.flags.contains(CanvasFlags::INACTIVE_MUTED) {
                        PaintStyle::Muted
                    } else {
                        continue;
                    }
                }
            };
            let use_cache = pass == Pass::Active;
            if use_cache && self.index.total_at_depth(depth) == 0 {
                continue;
            }
            self.draw_compound(root, depth, style, use_cache, surface);
        }
    }

    /// Draw one compound's content at one depth, in fixed per-type order:
    /// arcs, child compounds recursively, ellipses, lines, splines, texts.
    fn draw_compound<G, S: DrawSurface<G>>(
        &mut self,
        compound: &Compound<G>,
        depth: i32,
        style: PaintStyle,
        use_cache: bool,
        surface: &mut S,
    ) {
        self.scan_list(compound, PrimitiveKind::Arc, depth, style, use_cache, surface);
        for child in compound.children() {
            self.draw_compound(child, depth, style, use_cache, surface);
        }
        for kind in [
            PrimitiveKind::Ellipse,
            PrimitiveKind::Line,
            PrimitiveKind::Spline,
            PrimitiveKind::Text,
        ] {
            self.scan_list(compound, kind, depth, style, use_cache, surface);
        }
    }

    /// Scan one kind's list for primitives at `depth`.
    ///
    /// With the cache on, the scan stops as soon as the bucket is exhausted:
    /// the exit only fires at drawn == total, so every matching primitive is
    /// visited first and none is drawn twice.
    fn scan_list<G, S: DrawSurface<G>>(
        &mut self,
        compound: &Compound<G>,
        kind: PrimitiveKind,
        depth: i32,
        style: PaintStyle,
        use_cache: bool,
        surface: &mut S,
    ) {
        for primitive in compound.primitives(kind) {
            if use_cache && self.index.is_exhausted(depth, kind) {
                break;
            }
            if fold_depth(primitive.depth) != depth {
                continue;
            }
            surface.draw_primitive(kind, &primitive.geometry, DrawMode::Paint, style);
            if use_cache {
                self.index.record_drawn(depth, kind);
            }
        }
    }
}
