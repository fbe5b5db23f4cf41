//! Keeps a rendering surface's backing pixel store in step with the size it
//! is displayed at.

/// A rendering surface whose displayed size and backing pixel size can
/// diverge — a canvas with CSS sizing, a window behind a scale factor.
///
/// Only the backing size is ever mutated; the displayed size belongs to the
/// presentation layer.
pub trait DisplaySurface {
    /// Size the presentation layer currently displays the surface at.
    fn display_size(&self) -> (f64, f64);
    /// Actual pixel dimensions of the backing buffer.
    fn backing_size(&self) -> (u32, u32);
    /// Replaces the backing buffer dimensions.
    fn set_backing_size(&mut self, width: u32, height: u32);
}

/// Resizes the surface's backing store to its displayed size scaled by
/// `multiplier`, returning whether anything changed.
///
/// Target dimensions are rounded and clamped to at least 1 so a collapsed
/// layout can never produce a zero-area surface. A non-positive or non-finite
/// multiplier falls back to 1. The function is idempotent: a second call with
/// an unchanged displayed size leaves the surface untouched and returns
/// `false`.
pub fn resize_to_display<S: DisplaySurface + ?Sized>(surface: &mut S, multiplier: f64) -> bool {
    let multiplier = if multiplier.is_finite() && multiplier > 0.0 {
        multiplier
    } else {
        1.0
    };
    let (display_width, display_height) = surface.display_size();
    let width = (display_width * multiplier).round().max(1.0) as u32;
    let height = (display_height * multiplier).round().max(1.0) as u32;
    if (width, height) == surface.backing_size() {
        return false;
    }
    surface.set_backing_size(width, height);
    true
}
