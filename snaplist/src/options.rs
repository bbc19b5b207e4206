use alloc::sync::Arc;

use crate::picker::Picker;

/// A callback fired when the picker's state changes (count, metrics, item height).
pub type OnChangeCallback = Arc<dyn Fn(&Picker) + Send + Sync>;

/// Configuration for [`Picker`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so adapters can tweak a field and call
/// `Picker::set_options` without reallocating closures.
pub struct PickerOptions {
    /// Fixed vertical extent of one cell; defines the snap grid pitch.
    pub item_height: f32,
    /// Number of rows in the data sequence.
    pub count: usize,
    /// Duration of the animated settle transition, in milliseconds.
    pub settle_duration_ms: u64,
    /// Optional callback fired when the picker's internal state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl PickerOptions {
    pub fn new(item_height: f32) -> Self {
        Self {
            item_height,
            count: 0,
            settle_duration_ms: 100,
            on_change: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_settle_duration_ms(mut self, settle_duration_ms: u64) -> Self {
        self.settle_duration_ms = settle_duration_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Picker) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for PickerOptions {
    fn clone(&self) -> Self {
        Self {
            item_height: self.item_height,
            count: self.count,
            settle_duration_ms: self.settle_duration_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PickerOptions")
            .field("item_height", &self.item_height)
            .field("count", &self.count)
            .field("settle_duration_ms", &self.settle_duration_ms)
            .finish_non_exhaustive()
    }
}
