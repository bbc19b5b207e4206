use crate::{ScrollMetrics, SnapTarget};

/// The fixed-pitch snap grid of a picker list.
///
/// All alignment math lives here: given the current viewport geometry, find the nearest
/// item-aligned content offset. The grid is pure and holds no viewport state, so every query
/// recomputes from current truth.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapGrid {
    item_height: f32,
}

impl SnapGrid {
    pub fn new(item_height: f32) -> Self {
        Self { item_height }
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    /// Whether this grid/viewport pair has measurable geometry.
    ///
    /// A control that has not been laid out yet (zero item height or zero bounds) has nothing
    /// to align; callers treat that as a no-op, never an error.
    pub fn is_degenerate(&self, metrics: &ScrollMetrics) -> bool {
        !(self.item_height > 0.0
            && self.item_height.is_finite()
            && metrics.bounds_height > 0.0
            && metrics.bounds_height.is_finite()
            && metrics.offset_y.is_finite()
            && metrics.top_inset.is_finite())
    }

    /// Computes the nearest item-aligned offset for the current geometry.
    ///
    /// ```text
    /// current = offset_y + top_inset
    /// index   = round_half_up(current / item_height)
    /// target  = index * item_height - top_inset
    /// ```
    ///
    /// Ties round to the higher index. Returns `None` for degenerate geometry.
    ///
    /// Applying this to its own output yields the same target again, so repeated settle
    /// events converge instead of fighting each other.
    pub fn snap_target(&self, metrics: ScrollMetrics) -> Option<SnapTarget> {
        if self.is_degenerate(&metrics) {
            strace!(
                item_height = self.item_height,
                bounds_height = metrics.bounds_height,
                "snap_target: degenerate geometry, skipping"
            );
            return None;
        }

        let current = metrics.offset_y + metrics.top_inset;
        let index = floor_f32(current / self.item_height + 0.5) as i64;
        Some(SnapTarget {
            index,
            offset_y: self.offset_for_index(index, metrics.top_inset),
        })
    }

    /// The grid equation: the content offset that aligns `index` to the top of the visible
    /// item band, i.e. `index * item_height - top_inset`.
    pub fn offset_for_index(&self, index: i64, top_inset: f32) -> f32 {
        index as f32 * self.item_height - top_inset
    }

    /// The centering offset applied after a data reload: the middle item goes on the grid.
    ///
    /// Returns `None` when the list is empty or the grid has no measurable pitch.
    pub fn center_offset(&self, count: usize, top_inset: f32) -> Option<f32> {
        if !(self.item_height > 0.0 && self.item_height.is_finite()) {
            return None;
        }
        let middle = middle_index(count)?;
        Some(self.offset_for_index(middle as i64, top_inset))
    }
}

/// The index recentered on after every data reload: `floor(count / 2)`.
pub(crate) fn middle_index(count: usize) -> Option<usize> {
    (count > 0).then_some(count / 2)
}

// `f32::floor` lives in std, not core; this keeps the crate `no_std`-capable.
// Exact for |x| < 2^63, far beyond any plausible offset.
fn floor_f32(x: f32) -> f32 {
    let t = x as i64 as f32;
    if x < t { t - 1.0 } else { t }
}
