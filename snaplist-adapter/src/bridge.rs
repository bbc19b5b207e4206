use alloc::boxed::Box;
use alloc::rc::Rc;

/// External UI signals the picker re-centers on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UiEvent {
    /// The device rotated; viewport geometry changed.
    OrientationDidChange,
    /// The keyboard frame is about to change; the visible band moved.
    KeyboardWillChangeFrame,
}

/// A registered event callback. Zero arguments: each invocation recomputes from current state.
pub type EventCallback = Box<dyn FnMut() + 'static>;

/// The UI layer's notification center.
///
/// `subscribe` registers a callback for an event, optionally filtered to one sender (the
/// rotation signal is typically filtered to the current device object). The returned token
/// identifies the registration for `unsubscribe`.
pub trait EventSource {
    type Token;
    type Sender;

    fn subscribe(
        &self,
        event: UiEvent,
        filter: Option<Self::Sender>,
        callback: EventCallback,
    ) -> Self::Token;

    fn unsubscribe(&self, token: Self::Token);
}

/// A scoped event subscription: construction registers, drop unregisters.
///
/// After the bridge is dropped the callback is never invoked again, even if the underlying
/// event keeps firing.
pub struct NotificationBridge<S: EventSource> {
    source: Rc<S>,
    token: Option<S::Token>,
}

impl<S: EventSource> NotificationBridge<S> {
    pub fn new(
        source: Rc<S>,
        event: UiEvent,
        filter: Option<S::Sender>,
        callback: impl FnMut() + 'static,
    ) -> Self {
        let token = source.subscribe(event, filter, Box::new(callback));
        Self {
            source,
            token: Some(token),
        }
    }
}

impl<S: EventSource> Drop for NotificationBridge<S> {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.source.unsubscribe(token);
        }
    }
}

impl<S: EventSource> core::fmt::Debug for NotificationBridge<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NotificationBridge")
            .field("registered", &self.token.is_some())
            .finish()
    }
}
