/// A snapshot of the viewport geometry the snap math operates on.
///
/// Offsets are in UI points. `offset_y` may legitimately be negative: a viewport with a top
/// inset rests at `-top_inset` when the first item is centered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Current content offset along the scroll axis.
    pub offset_y: f32,
    /// Top content inset of the viewport.
    pub top_inset: f32,
    /// Height of the viewport bounds.
    pub bounds_height: f32,
}

impl ScrollMetrics {
    pub fn new(offset_y: f32, top_inset: f32, bounds_height: f32) -> Self {
        Self {
            offset_y,
            top_inset,
            bounds_height,
        }
    }
}

/// The result of one alignment computation: the item the viewport should settle on, and the
/// content offset that puts it on the snap grid.
///
/// `offset_y` always satisfies `offset_y == index * item_height - top_inset`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapTarget {
    /// Grid index of the nearest item. Not clamped to the item count; an overscrolled viewport
    /// can produce an index past either end.
    pub index: i64,
    /// Item-aligned content offset.
    pub offset_y: f32,
}

/// A rectangle in viewport coordinates, used for layout-attribute queries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A scroll settle event reported by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettleEvent {
    /// The user lifted their finger. `will_decelerate` is whether the platform will keep the
    /// content moving.
    DragEnded { will_decelerate: bool },
    /// Deceleration came to rest.
    DecelerationEnded,
}

impl SettleEvent {
    /// Whether this event ends the interaction and the viewport should snap now.
    ///
    /// A drag that hands off to deceleration does not settle; the matching
    /// `DecelerationEnded` will.
    pub fn should_settle(self) -> bool {
        match self {
            Self::DragEnded { will_decelerate } => !will_decelerate,
            Self::DecelerationEnded => true,
        }
    }
}
