use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use snaplist::{Picker, PickerOptions, Region, SettleEvent};

use crate::{
    CellFactory, CellHost, Easing, EventSource, NotificationBridge, Tween, UiEvent, Viewport,
};

/// Replaces the wrapper's data wholesale (the original's flow-destination contract).
pub trait DataDestination<T> {
    fn process_data(&mut self, items: Vec<T>, now_ms: u64);
}

/// Owns a picker's data and runs its reload/recenter/settle workflow against a [`Viewport`].
///
/// This type does not hold any UI objects directly; the UI layer implements the collaborator
/// traits and drives the wrapper from its event loop:
/// - `set_data` when new data arrives
/// - `on_settle_event` for drag-end / deceleration-end
/// - `on_scroll` while the user is dragging
/// - `tick(now_ms)` each frame/timer tick
///
/// Rotation and keyboard-frame notifications are wired through two [`NotificationBridge`]s
/// whose callbacks mark a geometry-dirty flag; the next `tick` re-runs the centering pass.
/// Each pass recomputes from current viewport state, so reentrant or coalesced notifications
/// are harmless.
pub struct ListWrapper<T, V, F, S>
where
    V: Viewport,
    F: CellFactory<T>,
    S: EventSource,
{
    data: Vec<T>,
    viewport: V,
    factory: F,
    picker: Picker,
    tween: Option<Tween>,
    easing: Easing,
    geometry_dirty: Rc<Cell<bool>>,

    // Subscriptions are released when the wrapper drops.
    _rotation: NotificationBridge<S>,
    _keyboard: NotificationBridge<S>,
}

impl<T, V, F, S> ListWrapper<T, V, F, S>
where
    V: Viewport,
    F: CellFactory<T>,
    S: EventSource,
{
    /// Creates a wrapper and registers the rotation/keyboard subscriptions.
    ///
    /// `rotation_filter` narrows the rotation subscription to one sender (the platform's
    /// device object); keyboard-frame events are unfiltered.
    pub fn new(
        viewport: V,
        factory: F,
        options: PickerOptions,
        events: &Rc<S>,
        rotation_filter: Option<S::Sender>,
    ) -> Self {
        let geometry_dirty = Rc::new(Cell::new(false));
        let mark = |flag: &Rc<Cell<bool>>| {
            let flag = Rc::clone(flag);
            move || flag.set(true)
        };

        let rotation = NotificationBridge::new(
            Rc::clone(events),
            UiEvent::OrientationDidChange,
            rotation_filter,
            mark(&geometry_dirty),
        );
        let keyboard = NotificationBridge::new(
            Rc::clone(events),
            UiEvent::KeyboardWillChangeFrame,
            None,
            mark(&geometry_dirty),
        );

        Self {
            data: Vec::new(),
            viewport,
            factory,
            picker: Picker::new(options),
            tween: None,
            easing: Easing::SmoothStep,
            geometry_dirty,
            _rotation: rotation,
            _keyboard: keyboard,
        }
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut Picker {
        &mut self.picker
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Replaces the data sequence, reloads the viewport, and re-centers on the middle item.
    ///
    /// The centering write is direct (no animation); a settle pass follows to correct any
    /// drift, so the grid invariant holds on both paths. Empty data leaves the offset alone.
    pub fn set_data(&mut self, items: Vec<T>, now_ms: u64) {
        self.data = items;
        self.viewport.reload();
        self.viewport.layout_now();

        let count = self.data.len();
        let metrics = self.viewport.metrics();
        self.picker.batch_update(|p| {
            p.set_count(count);
            p.set_metrics(metrics);
        });

        self.update_offset(now_ms);
    }

    /// The centering pass shared by data reloads and geometry changes: put the middle item on
    /// the grid, then settle.
    fn update_offset(&mut self, now_ms: u64) {
        let count = self.viewport.item_count();
        if count == 0 {
            return;
        }
        let metrics = self.viewport.metrics();
        let Some(target) = self.picker.grid().center_offset(count, metrics.top_inset) else {
            return;
        };

        self.viewport.set_offset_y(target);
        self.align(now_ms);
    }

    /// Re-runs the centering pass without reloading: geometry changed, data did not.
    pub fn recenter(&mut self, now_ms: u64) {
        self.update_offset(now_ms);
    }

    /// Starts (or redirects) the animated settle toward the nearest item-aligned offset.
    ///
    /// Fire-and-forget: the transition is advanced by `tick`, and a newer request supersedes a
    /// running one. Degenerate geometry is a no-op.
    pub fn align(&mut self, now_ms: u64) {
        let metrics = self.viewport.metrics();
        self.picker.set_metrics(metrics);
        let Some(target) = self.picker.snap_target() else {
            return;
        };

        let duration = self.picker.options().settle_duration_ms;
        if let Some(tween) = self.tween.as_mut().filter(|t| !t.is_done(now_ms)) {
            tween.retarget(now_ms, target.offset_y, duration);
        } else {
            self.tween = Some(Tween::new(
                metrics.offset_y,
                target.offset_y,
                now_ms,
                duration,
                self.easing,
            ));
        }
    }

    /// Drag-end / deceleration-end from the viewport. Settles when the interaction is over.
    pub fn on_settle_event(&mut self, event: SettleEvent, now_ms: u64) {
        if event.should_settle() {
            self.align(now_ms);
        }
    }

    /// A user-driven scroll position change. Cancels any running settle so the wrapper never
    /// fights the platform's own scroll physics.
    pub fn on_scroll(&mut self, offset_y: f32) {
        self.cancel_animation();
        let mut metrics = self.viewport.metrics();
        metrics.offset_y = offset_y;
        self.picker.set_metrics(metrics);
    }

    /// Advances the wrapper by one event-loop turn.
    ///
    /// Consumes a pending geometry-dirty notification (re-centering), then advances the settle
    /// tween and writes the sampled offset to the viewport. Returns the applied offset while a
    /// transition is running.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if self.geometry_dirty.replace(false) {
            self.recenter(now_ms);
        }

        let tween = self.tween?;
        let offset_y = tween.sample(now_ms);
        self.viewport.set_offset_y(offset_y);
        self.picker.set_metrics(self.viewport.metrics());

        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(offset_y)
    }

    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Renders the cell for `index`.
    ///
    /// An out-of-range index is a programmer error upstream (data/count mismatch): loud in
    /// debug builds, an empty result in release.
    pub fn render_cell(&mut self, index: usize) -> Option<F::Cell> {
        let count = self.data.len();
        if index >= count {
            debug_assert!(
                index < count,
                "render_cell: index out of range (index={index}, count={count})"
            );
            return None;
        }
        Some(self.factory.make_cell(&self.data[index]))
    }

    /// Layout attributes intersecting `region`. A layout engine with nothing to report yields
    /// an empty sequence, never a failure.
    pub fn visible_attributes(&self, region: Region) -> Vec<V::Attributes> {
        self.viewport.layout_attributes(region).unwrap_or_default()
    }
}

impl<T, V, F, S> DataDestination<T> for ListWrapper<T, V, F, S>
where
    V: Viewport,
    F: CellFactory<T>,
    S: EventSource,
{
    fn process_data(&mut self, items: Vec<T>, now_ms: u64) {
        self.set_data(items, now_ms);
    }
}

impl<T, V, F, S> CellHost for ListWrapper<T, V, F, S>
where
    V: Viewport,
    F: CellFactory<T>,
    S: EventSource,
{
    type Cell = F::Cell;
    type Attributes = V::Attributes;

    fn cell_count(&self) -> usize {
        self.cell_count()
    }

    fn create_cell(&mut self, index: usize) -> Option<Self::Cell> {
        self.render_cell(index)
    }

    fn cell_attributes(&self, region: Region) -> Vec<Self::Attributes> {
        self.visible_attributes(region)
    }
}
