//! The host-canvas seam and the layout commands composed on top of it.
//!
//! The host document model owns all shape state; this crate reaches it only
//! through [`HostCanvas`]. Each op here is a command: read bounds, run pure
//! math from [`crate::types`] or [`crate::place`], write the result back in
//! a single `set_bounds` call. A failing computation writes nothing, so the
//! canvas is never left half-updated.

use glam::DVec2;
use rand::Rng;

use crate::errors::PlacementError;
use crate::place::random_rect_within;
use crate::types::{HAlign, Rect, VAlign};

/// Narrow view of the host document model: items with readable and
/// writable bounds, nothing else.
///
/// The pure math modules never call this; only the ops below do.
pub trait HostCanvas {
    /// Opaque handle to a page item owned by the host.
    type Item;

    /// Current bounds of `item`, in points.
    fn bounds(&self, item: &Self::Item) -> Rect;

    /// Replace the bounds of `item`.
    fn set_bounds(&mut self, item: &Self::Item, rect: Rect);
}

/// Center `item` within `container`, keeping its size.
pub fn center_item<C: HostCanvas>(canvas: &mut C, item: &C::Item, container: &Rect) {
    let rect = canvas.bounds(item).centered_in(container);
    canvas.set_bounds(item, rect);
}

/// Snap `item` to the given edges of `container`, keeping its size.
pub fn align_item<C: HostCanvas>(
    canvas: &mut C,
    item: &C::Item,
    container: &Rect,
    h: HAlign,
    v: VAlign,
) {
    let rect = canvas.bounds(item).aligned_in(container, h, v);
    canvas.set_bounds(item, rect);
}

/// Move `item` by `delta`.
pub fn nudge_item<C: HostCanvas>(canvas: &mut C, item: &C::Item, delta: DVec2) {
    let rect = canvas.bounds(item).translated(delta);
    canvas.set_bounds(item, rect);
}

/// Throw `item` to a uniformly random spot within an `area`-sized page,
/// keeping `padding` clear on every side and the item's size unchanged.
///
/// On `OutOfBounds` the canvas is untouched.
pub fn scatter_item<C: HostCanvas>(
    canvas: &mut C,
    item: &C::Item,
    area: DVec2,
    padding: f64,
    rng: &mut impl Rng,
) -> Result<(), PlacementError> {
    let size = canvas.bounds(item).size();
    let rect = random_rect_within(size, area, padding, rng)?;
    canvas.set_bounds(item, rect);
    Ok(())
}
