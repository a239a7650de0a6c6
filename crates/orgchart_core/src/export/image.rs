//! Image export boundary.
//!
//! # Responsibility
//! - Fix the capture parameters handed to the delegated rasterizer.
//! - Guarantee the presentation-mode marker is scoped to the capture.
//!
//! # Invariants
//! - The marker is cleared on success, failure and unwind alike.
//! - No rasterization happens here; the embedding renderer does the work.

use std::cell::Cell;

/// Default file name offered for the captured chart.
pub const IMAGE_EXPORT_FILE_NAME: &str = "organizasyon-semasi.png";

/// Fixed capture parameters for the delegated rasterizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageExportOptions {
    /// Device-pixel multiplier for the capture.
    pub pixel_ratio: u32,
    /// Opaque background fill, CSS hex notation.
    pub background_color: &'static str,
}

impl Default for ImageExportOptions {
    fn default() -> Self {
        Self {
            pixel_ratio: 2,
            background_color: "#f9fafb",
        }
    }
}

/// Scope guard clearing the presentation-mode marker on drop.
///
/// While the marker is set, export-only affordances (such as the add-secretary
/// control) are hidden from the rendered output.
pub struct PresentationGuard<'a> {
    marker: &'a Cell<bool>,
}

impl<'a> PresentationGuard<'a> {
    /// Sets the marker and returns the guard that clears it.
    pub fn set(marker: &'a Cell<bool>) -> Self {
        marker.set(true);
        Self { marker }
    }
}

impl Drop for PresentationGuard<'_> {
    fn drop(&mut self) {
        self.marker.set(false);
    }
}

/// Runs a delegated capture with the presentation marker set for its duration.
pub fn capture_with_presentation<T, E>(
    marker: &Cell<bool>,
    options: &ImageExportOptions,
    capture: impl FnOnce(&ImageExportOptions) -> Result<T, E>,
) -> Result<T, E> {
    let _guard = PresentationGuard::set(marker);
    capture(options)
}
