use alloc::vec::Vec;

use snaplist::{Region, ScrollMetrics};

/// The scrollable viewport the picker drives.
///
/// Implemented by the UI layer over its real scroll container. The wrapper only ever reads
/// geometry and writes offsets; cell recycling and drawing stay on the UI side.
pub trait Viewport {
    /// Layout attributes for visible cells, as produced by the layout engine.
    type Attributes;

    /// Current scroll geometry.
    fn metrics(&self) -> ScrollMetrics;

    /// Moves the content offset. The wrapper uses this both for the direct centering write and
    /// for each frame of an animated settle.
    fn set_offset_y(&mut self, offset_y: f32);

    /// Reloads visible cells from the data source. Full reload, no incremental patch.
    fn reload(&mut self);

    /// Forces an immediate layout pass so item count and geometry are current.
    fn layout_now(&mut self);

    /// Number of rows the viewport currently knows about.
    fn item_count(&self) -> usize;

    /// Layout attributes intersecting `region`, or `None` when the layout engine has none.
    fn layout_attributes(&self, region: Region) -> Option<Vec<Self::Attributes>>;
}
