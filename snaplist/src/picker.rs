use alloc::sync::Arc;
use core::cell::Cell;

use crate::snap::middle_index;
use crate::{PickerOptions, ScrollMetrics, SnapGrid, SnapTarget};

/// The headless state of a picker list.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by feeding the row count and viewport geometry.
/// - Alignment/centering targets are exposed as queries; the adapter applies them to the real
///   scroll container.
///
/// For the full wrapper workflow (reload + recenter + settle tween), see the
/// `snaplist-adapter` crate.
#[derive(Clone, Debug)]
pub struct Picker {
    options: PickerOptions,
    grid: SnapGrid,
    metrics: ScrollMetrics,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Picker {
    pub fn new(options: PickerOptions) -> Self {
        sdebug!(
            item_height = options.item_height,
            count = options.count,
            "Picker::new"
        );
        let grid = SnapGrid::new(options.item_height);
        Self {
            options,
            grid,
            metrics: ScrollMetrics::default(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PickerOptions) {
        self.grid = SnapGrid::new(options.item_height);
        self.options = options;
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut PickerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Picker) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn grid(&self) -> SnapGrid {
        self.grid
    }

    pub fn item_height(&self) -> f32 {
        self.options.item_height
    }

    pub fn set_item_height(&mut self, item_height: f32) {
        if self.options.item_height == item_height {
            return;
        }
        self.options.item_height = item_height;
        self.grid = SnapGrid::new(item_height);
        self.notify();
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        strace!(count, "Picker::set_count");
        self.options.count = count;
        self.notify();
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: ScrollMetrics) {
        if self.metrics == metrics {
            return;
        }
        self.metrics = metrics;
        self.notify();
    }

    /// Total content height implied by the current count and item height.
    pub fn content_height(&self) -> f32 {
        self.options.count as f32 * self.options.item_height
    }

    /// The index recentered on after a data reload: `floor(count / 2)`.
    pub fn middle_index(&self) -> Option<usize> {
        middle_index(self.options.count)
    }

    /// The non-animated centering offset for the middle item, or `None` when the list is empty
    /// or the grid has no measurable pitch.
    pub fn center_target(&self) -> Option<f32> {
        self.grid
            .center_offset(self.options.count, self.metrics.top_inset)
    }

    /// The nearest item-aligned offset for the current metrics (see [`SnapGrid::snap_target`]).
    pub fn snap_target(&self) -> Option<SnapTarget> {
        self.grid.snap_target(self.metrics)
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical pass an adapter updates the count and the metrics together; without
    /// batching each setter fires `on_change`, which can be expensive if the callback drives
    /// rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        if depth == 0 {
            swarn!("batch_update: notify depth underflow");
        }
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }
}
