// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draw-surface seam: per-primitive draw calls, clipping, busy cursor,
//! and overlays, all provided by the host.

use easel_compound::PrimitiveKind;
use kurbo::Rect;

/// How a primitive is painted onto the surface.
///
/// The redraw engine always paints; the other modes are part of the seam so
/// hosts can reuse the same per-primitive draw functions to erase a single
/// object to the background or XOR-undo a rubber-band image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Normal paint.
    Paint,
    /// Erase to the background color.
    Erase,
    /// Invert/XOR paint, its own undo.
    Invert,
}

/// Color treatment of a draw call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    /// Full-color rendering of active content.
    Normal,
    /// De-emphasized rendering of inactive layers and visible ancestors.
    Muted,
}

/// Host-side rendering backend consumed by the redraw engine.
///
/// Implementations own the per-primitive draw functions and the device
/// state the engine scopes around a pass (clip rectangle, busy indicator).
/// Every method except [`DrawSurface::draw_primitive`] and the clip trio has
/// a default no-op so minimal surfaces stay small.
pub trait DrawSurface<G> {
    /// Draw one primitive. Calls arrive in painter's order: strictly
    /// descending depth, fixed per-type order within a depth, list order
    /// within a type.
    fn draw_primitive(&mut self, kind: PrimitiveKind, geometry: &G, mode: DrawMode, style: PaintStyle);

    /// Restrict subsequent drawing to `rect` (device space).
    fn set_clip(&mut self, rect: Rect);

    /// Clear `rect` to the background. Called once per region redraw, before
    /// the traversal.
    fn clear_rect(&mut self, rect: Rect);

    /// Remove the clip set by [`DrawSurface::set_clip`].
    fn reset_clip(&mut self);

    /// A redraw pass is starting; show a busy indicator if desired.
    fn begin_busy(&mut self) {}

    /// The redraw pass finished.
    fn end_busy(&mut self) {}

    /// Draw transient UI overlays (selection handles, anchor markers). Called
    /// last, unconditionally, outside the depth model.
    fn draw_overlays(&mut self) {}
}
