//! Scroll-driven fade-in of the whole layer.

/// Fraction of the viewport height scrolled before the fade starts.
pub const FADE_START: f64 = 0.2;
/// Fraction of the viewport height scrolled when the layer is fully visible.
pub const FADE_END: f64 = 0.8;

/// Layer opacity for a scroll offset, in `[0, 1]`.
pub fn scroll_opacity(scroll_y: f64, viewport_height: f64) -> f64 {
	let start = viewport_height * FADE_START;
	let end = viewport_height * FADE_END;
	let opacity = (scroll_y - start) / (end - start);
	// Zero-height viewports and NaN scroll offsets land here.
	if !opacity.is_finite() {
		return 0.0;
	}
	opacity.clamp(0.0, 1.0)
}
