// Example: a simulated picker session without any real UI toolkit.
//
// An adapter would:
// - implement `Viewport` over its scroll container and `EventSource` over its notifications
// - hand new data to the wrapper as it arrives
// - forward drag-end/deceleration-end events
// - call tick(now_ms) in a frame loop and let the wrapper write offsets back
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use snaplist::{PickerOptions, Region, ScrollMetrics, SettleEvent};
use snaplist_adapter::{
    CellFactory, EventCallback, EventSource, ListWrapper, UiEvent, Viewport,
};

struct SimViewport {
    metrics: ScrollMetrics,
    count: usize,
}

impl Viewport for SimViewport {
    type Attributes = ();

    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn set_offset_y(&mut self, offset_y: f32) {
        self.metrics.offset_y = offset_y;
    }

    fn reload(&mut self) {}

    fn layout_now(&mut self) {}

    fn item_count(&self) -> usize {
        self.count
    }

    fn layout_attributes(&self, _region: Region) -> Option<Vec<()>> {
        None
    }
}

#[derive(Default)]
struct SimEvents {
    next_token: Cell<u64>,
    subs: RefCell<Vec<(u64, UiEvent, EventCallback)>>,
}

impl SimEvents {
    fn fire(&self, event: UiEvent) {
        for (_, subscribed, callback) in self.subs.borrow_mut().iter_mut() {
            if *subscribed == event {
                callback();
            }
        }
    }
}

impl EventSource for SimEvents {
    type Token = u64;
    type Sender = ();

    fn subscribe(&self, event: UiEvent, _filter: Option<()>, callback: EventCallback) -> u64 {
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        self.subs.borrow_mut().push((token, event, callback));
        token
    }

    fn unsubscribe(&self, token: u64) {
        self.subs.borrow_mut().retain(|(id, ..)| *id != token);
    }
}

struct Labels;

impl CellFactory<String> for Labels {
    type Cell = String;

    fn make_cell(&mut self, item: &String) -> String {
        item.clone()
    }
}

fn main() {
    let events = Rc::new(SimEvents::default());
    let viewport = SimViewport {
        metrics: ScrollMetrics::new(0.0, 10.0, 480.0),
        count: 7,
    };

    let mut wrapper = ListWrapper::new(
        viewport,
        Labels,
        PickerOptions::new(50.0),
        &events,
        None,
    );

    wrapper.set_data((0..7).map(|i| format!("item {i}")).collect(), 0);
    println!("after set_data: offset={}", wrapper.viewport().metrics().offset_y);

    // The user drags to 137 and lets go.
    wrapper.on_scroll(137.0);
    wrapper.viewport_mut().metrics.offset_y = 137.0;
    wrapper.on_settle_event(
        SettleEvent::DragEnded {
            will_decelerate: false,
        },
        1000,
    );

    let mut now_ms = 1000u64;
    while wrapper.is_animating() {
        now_ms += 16;
        if let Some(offset) = wrapper.tick(now_ms) {
            println!("t={now_ms} offset={offset:.2}");
        }
    }
    let selected = wrapper.render_cell(3);
    println!(
        "settled: offset={} cell={selected:?}",
        wrapper.viewport().metrics().offset_y
    );

    // Rotation: geometry changes, data does not.
    wrapper.viewport_mut().metrics.top_inset = 30.0;
    events.fire(UiEvent::OrientationDidChange);
    wrapper.tick(now_ms + 16);
    while wrapper.is_animating() {
        now_ms += 16;
        wrapper.tick(now_ms);
    }
    println!(
        "after rotation: offset={}",
        wrapper.viewport().metrics().offset_y
    );
}
