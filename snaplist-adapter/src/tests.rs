use crate::*;

use snaplist::{PickerOptions, Region, ScrollMetrics, SettleEvent};

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

struct MockViewport {
    metrics: ScrollMetrics,
    backing: Rc<Cell<usize>>,
    count: usize,
    attrs: Option<Vec<u32>>,
    reloads: usize,
    layouts: usize,
    offsets: Vec<f32>,
}

impl MockViewport {
    fn new(top_inset: f32, bounds_height: f32, backing: Rc<Cell<usize>>) -> Self {
        Self {
            metrics: ScrollMetrics::new(0.0, top_inset, bounds_height),
            backing,
            count: 0,
            attrs: None,
            reloads: 0,
            layouts: 0,
            offsets: Vec::new(),
        }
    }
}

impl Viewport for MockViewport {
    type Attributes = u32;

    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn set_offset_y(&mut self, offset_y: f32) {
        self.metrics.offset_y = offset_y;
        self.offsets.push(offset_y);
    }

    fn reload(&mut self) {
        // Pull the row count from the backing store, like a real viewport asking its data
        // source during reload.
        self.reloads += 1;
        self.count = self.backing.get();
    }

    fn layout_now(&mut self) {
        self.layouts += 1;
    }

    fn item_count(&self) -> usize {
        self.count
    }

    fn layout_attributes(&self, _region: Region) -> Option<Vec<u32>> {
        self.attrs.clone()
    }
}

#[derive(Default)]
struct MockEventSource {
    next_token: Cell<u64>,
    subs: RefCell<Vec<(u64, UiEvent, Option<u32>, EventCallback)>>,
}

impl MockEventSource {
    fn fire(&self, event: UiEvent) {
        for (_, subscribed, _, callback) in self.subs.borrow_mut().iter_mut() {
            if *subscribed == event {
                callback();
            }
        }
    }

    fn subscription_count(&self) -> usize {
        self.subs.borrow().len()
    }

    fn filters_for(&self, event: UiEvent) -> Vec<Option<u32>> {
        self.subs
            .borrow()
            .iter()
            .filter(|(_, subscribed, ..)| *subscribed == event)
            .map(|(_, _, filter, _)| *filter)
            .collect()
    }
}

impl EventSource for MockEventSource {
    type Token = u64;
    type Sender = u32;

    fn subscribe(
        &self,
        event: UiEvent,
        filter: Option<u32>,
        callback: EventCallback,
    ) -> u64 {
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        self.subs.borrow_mut().push((token, event, filter, callback));
        token
    }

    fn unsubscribe(&self, token: u64) {
        self.subs.borrow_mut().retain(|(id, ..)| *id != token);
    }
}

struct LabelFactory;

impl CellFactory<String> for LabelFactory {
    type Cell = String;

    fn make_cell(&mut self, item: &String) -> String {
        item.clone()
    }
}

type TestWrapper = ListWrapper<String, MockViewport, LabelFactory, MockEventSource>;

fn make_wrapper(
    count: usize,
    item_height: f32,
    top_inset: f32,
) -> (TestWrapper, Rc<MockEventSource>) {
    let events = Rc::new(MockEventSource::default());
    let backing = Rc::new(Cell::new(count));
    let viewport = MockViewport::new(top_inset, 480.0, backing);
    let wrapper = ListWrapper::new(
        viewport,
        LabelFactory,
        PickerOptions::new(item_height),
        &events,
        None,
    );
    (wrapper, events)
}

fn rows(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("row-{i}")).collect()
}

fn settle(wrapper: &mut TestWrapper, from_ms: u64) {
    let mut now_ms = from_ms;
    while wrapper.is_animating() {
        now_ms += 16;
        wrapper.tick(now_ms);
    }
}

#[test]
fn set_data_reloads_and_centers_on_middle() {
    let (mut wrapper, _events) = make_wrapper(7, 50.0, 10.0);
    wrapper.set_data(rows(7), 0);

    assert_eq!(wrapper.viewport().reloads, 1);
    assert_eq!(wrapper.viewport().layouts, 1);
    // Direct, non-animated centering write: 3 * 50 - 10.
    assert_eq!(wrapper.viewport().offsets.first().copied(), Some(140.0));
    assert_eq!(wrapper.picker().count(), 7);

    // The corrective settle converges on the same grid offset.
    assert!(wrapper.is_animating());
    settle(&mut wrapper, 0);
    assert_eq!(wrapper.viewport().metrics.offset_y, 140.0);
    assert_eq!(wrapper.tick(1000), None);
}

#[test]
fn set_data_empty_leaves_offset_alone() {
    let (mut wrapper, _events) = make_wrapper(0, 50.0, 10.0);
    wrapper.set_data(Vec::new(), 0);

    assert_eq!(wrapper.viewport().reloads, 1);
    assert!(wrapper.viewport().offsets.is_empty());
    assert!(!wrapper.is_animating());
}

#[test]
fn drag_end_without_deceleration_settles() {
    let (mut wrapper, _events) = make_wrapper(7, 50.0, 10.0);
    wrapper.set_data(rows(7), 0);
    settle(&mut wrapper, 0);

    wrapper.viewport_mut().metrics.offset_y = 137.0;
    wrapper.on_settle_event(
        SettleEvent::DragEnded {
            will_decelerate: false,
        },
        1000,
    );
    assert!(wrapper.is_animating());

    let mut last = 137.0f32;
    for now_ms in [1000u64, 1016, 1032, 1064, 1100] {
        if let Some(offset) = wrapper.tick(now_ms) {
            assert!(offset >= last, "settle must move toward the grid");
            last = offset;
        }
    }
    assert!(!wrapper.is_animating());
    assert_eq!(wrapper.viewport().metrics.offset_y, 140.0);
}

#[test]
fn drag_end_with_deceleration_waits_for_it() {
    let (mut wrapper, _events) = make_wrapper(7, 50.0, 10.0);
    wrapper.set_data(rows(7), 0);
    settle(&mut wrapper, 0);

    wrapper.viewport_mut().metrics.offset_y = 137.0;
    wrapper.on_settle_event(
        SettleEvent::DragEnded {
            will_decelerate: true,
        },
        1000,
    );
    assert!(!wrapper.is_animating());

    wrapper.on_settle_event(SettleEvent::DecelerationEnded, 1100);
    assert!(wrapper.is_animating());
    settle(&mut wrapper, 1100);
    assert_eq!(wrapper.viewport().metrics.offset_y, 140.0);
}

#[test]
fn align_converges_once_settled() {
    let (mut wrapper, _events) = make_wrapper(7, 50.0, 10.0);
    wrapper.set_data(rows(7), 0);
    settle(&mut wrapper, 0);

    let writes = wrapper.viewport().offsets.len();
    wrapper.align(5000);
    wrapper.tick(5000);
    wrapper.tick(5100);
    assert_eq!(wrapper.viewport().metrics.offset_y, 140.0);
    assert!(
        wrapper.viewport().offsets[writes..]
            .iter()
            .all(|&offset| offset == 140.0)
    );
}

#[test]
fn rotation_recenters_without_reloading() {
    let (mut wrapper, events) = make_wrapper(7, 50.0, 10.0);
    wrapper.set_data(rows(7), 0);
    settle(&mut wrapper, 0);
    assert_eq!(wrapper.viewport().reloads, 1);

    // Rotation changed the geometry but not the data.
    wrapper.viewport_mut().metrics.top_inset = 30.0;
    events.fire(UiEvent::OrientationDidChange);
    wrapper.tick(2000);
    settle(&mut wrapper, 2000);

    assert_eq!(wrapper.viewport().reloads, 1);
    assert_eq!(wrapper.viewport().metrics.offset_y, 120.0);
}

#[test]
fn keyboard_frame_change_recenters_on_next_tick() {
    let (mut wrapper, events) = make_wrapper(5, 44.0, 0.0);
    wrapper.set_data(rows(5), 0);
    settle(&mut wrapper, 0);
    assert_eq!(wrapper.viewport().metrics.offset_y, 88.0);

    // The keyboard shrank the visible band and changed the inset.
    wrapper.viewport_mut().metrics.bounds_height = 260.0;
    wrapper.viewport_mut().metrics.top_inset = 12.0;
    events.fire(UiEvent::KeyboardWillChangeFrame);
    wrapper.tick(3000);
    settle(&mut wrapper, 3000);

    assert_eq!(wrapper.viewport().metrics.offset_y, 76.0);
}

#[test]
fn later_settle_request_supersedes_a_running_one() {
    let (mut wrapper, events) = make_wrapper(7, 50.0, 10.0);
    wrapper.set_data(rows(7), 0);
    settle(&mut wrapper, 0);

    wrapper.viewport_mut().metrics.offset_y = 137.0;
    wrapper.align(0);
    assert!(wrapper.is_animating());

    // Mid-flight the keyboard moves the visible band; the recenter retargets the same tween
    // instead of queueing a second transition.
    wrapper.viewport_mut().metrics.top_inset = 20.0;
    events.fire(UiEvent::KeyboardWillChangeFrame);
    wrapper.tick(50);
    settle(&mut wrapper, 50);

    assert_eq!(wrapper.viewport().metrics.offset_y, 130.0);
    assert!(!wrapper.is_animating());
}

#[test]
fn user_scroll_cancels_the_settle() {
    let (mut wrapper, _events) = make_wrapper(7, 50.0, 10.0);
    wrapper.set_data(rows(7), 0);

    assert!(wrapper.is_animating());
    wrapper.on_scroll(87.0);
    assert!(!wrapper.is_animating());
    assert_eq!(wrapper.picker().metrics().offset_y, 87.0);
}

#[test]
fn bridge_drop_stops_callbacks_and_unsubscribes() {
    let events = Rc::new(MockEventSource::default());
    let fired = Rc::new(Cell::new(0usize));

    let counted = Rc::clone(&fired);
    let bridge = NotificationBridge::new(
        Rc::clone(&events),
        UiEvent::OrientationDidChange,
        Some(9),
        move || counted.set(counted.get() + 1),
    );
    assert_eq!(
        events.filters_for(UiEvent::OrientationDidChange),
        vec![Some(9)]
    );

    events.fire(UiEvent::OrientationDidChange);
    assert_eq!(fired.get(), 1);

    drop(bridge);
    assert_eq!(events.subscription_count(), 0);
    events.fire(UiEvent::OrientationDidChange);
    assert_eq!(fired.get(), 1);
}

#[test]
fn wrapper_drop_releases_its_subscriptions() {
    let (wrapper, events) = make_wrapper(7, 50.0, 10.0);
    assert_eq!(events.subscription_count(), 2);
    drop(wrapper);
    assert_eq!(events.subscription_count(), 0);
}

#[test]
fn render_cell_in_range_succeeds() {
    let (mut wrapper, _events) = make_wrapper(7, 50.0, 10.0);
    wrapper.set_data(rows(7), 0);

    assert_eq!(wrapper.cell_count(), 7);
    assert_eq!(wrapper.render_cell(0).as_deref(), Some("row-0"));
    assert_eq!(wrapper.render_cell(6).as_deref(), Some("row-6"));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "render_cell: index out of range")]
fn render_cell_out_of_range_is_loud() {
    let (mut wrapper, _events) = make_wrapper(7, 50.0, 10.0);
    wrapper.set_data(rows(7), 0);
    let _ = wrapper.render_cell(7);
}

#[test]
fn visible_attributes_degrade_to_empty() {
    let (mut wrapper, _events) = make_wrapper(7, 50.0, 10.0);
    let region = Region::new(0.0, 0.0, 320.0, 480.0);

    assert!(wrapper.visible_attributes(region).is_empty());

    wrapper.viewport_mut().attrs = Some(vec![11, 22]);
    assert_eq!(wrapper.visible_attributes(region), vec![11, 22]);
}

#[test]
fn data_source_holds_no_owning_edge_to_its_host() {
    let (mut wrapper, _events) = make_wrapper(7, 50.0, 10.0);
    wrapper.set_data(rows(7), 0);

    let host = Rc::new(RefCell::new(wrapper));
    let source = CellDataSource::new(&host);
    assert_eq!(source.cell_count(), 7);
    assert_eq!(source.cell_at(3).as_deref(), Some("row-3"));

    drop(host);
    assert_eq!(source.cell_count(), 0);
    assert_eq!(source.cell_at(3), None);
    assert!(
        source
            .attributes_in(Region::new(0.0, 0.0, 320.0, 480.0))
            .is_empty()
    );
}

#[test]
fn tween_samples_move_monotonically_to_the_target() {
    let tween = Tween::new(0.0, 100.0, 0, 100, Easing::SmoothStep);
    let mut last = 0.0f32;
    for now_ms in [0u64, 10, 25, 50, 75, 100, 120] {
        let sample = tween.sample(now_ms);
        assert!(sample >= last);
        last = sample;
    }
    assert_eq!(tween.sample(100), 100.0);
    assert!(tween.is_done(100));
}

#[test]
fn tween_supports_negative_offsets() {
    // An inset-heavy picker legitimately settles below zero.
    let tween = Tween::new(30.0, -10.0, 0, 100, Easing::Linear);
    assert_eq!(tween.sample(0), 30.0);
    assert_eq!(tween.sample(50), 10.0);
    assert_eq!(tween.sample(100), -10.0);
}

#[test]
fn tween_retarget_continues_from_the_current_sample() {
    let mut tween = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    tween.retarget(50, 0.0, 100);
    assert_eq!(tween.from, 50.0);
    assert_eq!(tween.to, 0.0);
    assert_eq!(tween.sample(150), 0.0);
}
