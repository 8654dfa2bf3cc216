//! DOM wiring for the scroll-reactive view state.
//!
//! A single [`ScrollHub`] per page owns the window `scroll`/`resize`
//! listeners and fans metrics out to an explicit subscriber list. Views
//! subscribe through the hooks at the bottom of this file and get a
//! [`Subscription`] guard that deregisters on drop, so nothing fires into an
//! unmounted component.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};
use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;
use crate::view_state::{RevealLatch, ScrollMetric, Throttle, ViewFlags};

type Listener<T> = Rc<dyn Fn(&T)>;

pub struct SubscriberList<T> {
    next_id: Cell<usize>,
    entries: RefCell<Vec<(usize, Listener<T>)>>,
}

impl<T: 'static> SubscriberList<T> {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        })
    }

    pub fn add(self: &Rc<Self>, callback: Listener<T>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, callback));

        let list: Weak<Self> = Rc::downgrade(self);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(list) = list.upgrade() {
                    list.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
                }
            })),
        }
    }

    /// Calls every live subscriber. No borrow is held while a callback runs,
    /// so callbacks may subscribe or drop subscriptions. Subscribers added
    /// mid-dispatch wait for the next one; subscribers dropped mid-dispatch
    /// are skipped.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<(usize, Listener<T>)> = self.entries.borrow().clone();
        for (id, callback) in snapshot {
            let live = self.entries.borrow().iter().any(|(entry_id, _)| *entry_id == id);
            if live {
                callback(value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deregisters its subscriber when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// A passive window event listener that is removed on drop.
struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    fn passive(window: &Window, event: &'static str, callback: Closure<dyn FnMut()>) -> Option<Self> {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        match window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                window: window.clone(),
                event,
                callback,
            }),
            Err(err) => {
                warn!("Failed to listen for {} events: {:?}", event, err);
                None
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event, err);
        }
    }
}

fn read_metric(window: &Window) -> Option<ScrollMetric> {
    let offset = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrollMetric::new(offset, viewport_height))
}

struct HubInner {
    window: Option<Window>,
    subscribers: Rc<SubscriberList<ScrollMetric>>,
    listeners: RefCell<Vec<WindowListener>>,
    throttle: Cell<Throttle>,
    // Dropped with the hub, which cancels a pending trailing dispatch.
    timer: RefCell<Option<Timeout>>,
}

impl HubInner {
    fn current(&self) -> Option<ScrollMetric> {
        self.window.as_ref().and_then(read_metric)
    }

    fn dispatch(&self) {
        if let Some(metric) = self.current() {
            self.subscribers.notify(&metric);
        }
    }

    fn on_event(self: &Rc<Self>) {
        let mut throttle = self.throttle.get();
        let dispatch_now = throttle.on_event();
        self.throttle.set(throttle);
        if dispatch_now {
            self.dispatch();
            self.arm_timer();
        }
    }

    fn on_elapsed(self: &Rc<Self>) {
        self.timer.borrow_mut().take();
        let mut throttle = self.throttle.get();
        let trailing = throttle.on_elapsed();
        self.throttle.set(throttle);
        if trailing {
            self.dispatch();
            self.arm_timer();
        }
    }

    fn arm_timer(self: &Rc<Self>) {
        let inner = Rc::downgrade(self);
        let timeout = Timeout::new(config::SCROLL_THROTTLE_MS, move || {
            if let Some(inner) = inner.upgrade() {
                inner.on_elapsed();
            }
        });
        *self.timer.borrow_mut() = Some(timeout);
    }
}

impl Drop for HubInner {
    fn drop(&mut self) {
        if !self.subscribers.is_empty() {
            debug!("Detaching scroll hub with {} live subscribers", self.subscribers.len());
        }
    }
}

/// Shared observable scroll position for the whole page.
#[derive(Clone)]
pub struct ScrollHub {
    inner: Rc<HubInner>,
}

impl PartialEq for ScrollHub {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollHub {
    /// Starts listening on the current window. On a wasm host that has no
    /// window (a worker, for instance) the hub is inert and subscriptions
    /// never fire. Must only be called from a wasm target.
    pub fn attach() -> Self {
        let inner = Rc::new(HubInner {
            window: web_sys::window(),
            subscribers: SubscriberList::new(),
            listeners: RefCell::new(Vec::new()),
            throttle: Cell::new(Throttle::default()),
            timer: RefCell::new(None),
        });

        if let Some(window) = inner.window.clone() {
            for event in ["scroll", "resize"] {
                let weak = Rc::downgrade(&inner);
                let callback = Closure::wrap(Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.on_event();
                    }
                }) as Box<dyn FnMut()>);
                if let Some(listener) = WindowListener::passive(&window, event, callback) {
                    inner.listeners.borrow_mut().push(listener);
                }
            }
            debug!("Scroll hub attached with {} listeners", inner.listeners.borrow().len());
        } else {
            warn!("No window available, scroll hub is inert");
        }

        Self { inner }
    }

    /// Registers `on_scroll` and calls it once right away with the current
    /// metric, so a late subscriber starts from the real position.
    pub fn subscribe(&self, on_scroll: impl Fn(&ScrollMetric) + 'static) -> Subscription {
        let on_scroll: Listener<ScrollMetric> = Rc::new(on_scroll);
        if let Some(metric) = self.inner.current() {
            on_scroll(&metric);
        }
        self.inner.subscribers.add(on_scroll)
    }
}

/// Keeps an `IntersectionObserver` alive for one element and disconnects it
/// on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Observes the element behind `node_ref` and calls `on_reveal` once, the
    /// first time it intersects. Returns `None` when the ref is not attached.
    pub fn observe(node_ref: &NodeRef, threshold: f64, on_reveal: impl Fn() + 'static) -> Option<Self> {
        let element = node_ref.cast::<Element>()?;
        let on_reveal = Rc::new(on_reveal);
        let latch = Cell::new(RevealLatch::default());

        let callback = {
            let on_reveal = on_reveal.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    // Callbacks already queued before disconnect() still arrive.
                    if latch.get().is_visible() {
                        return;
                    }
                    let intersecting = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .any(|entry| entry.is_intersecting());
                    let mut state = latch.get();
                    if state.on_intersect(intersecting) {
                        latch.set(state);
                        observer.disconnect();
                        on_reveal();
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(config::REVEAL_ROOT_MARGIN);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                warn!("IntersectionObserver unavailable ({:?}), revealing immediately", err);
                on_reveal();
                None
            }
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Subscribes for the lifetime of the calling component. A no-op outside a
/// `ScrollHub` context.
#[hook]
pub fn use_scroll_subscription<F>(on_scroll: F)
where
    F: Fn(&ScrollMetric) + 'static,
{
    let hub = use_context::<ScrollHub>();
    use_effect_with_deps(
        move |hub| {
            let subscription = hub.as_ref().map(|hub| hub.subscribe(on_scroll));
            move || drop(subscription)
        },
        hub,
    );
}

/// Latest scroll metric; re-renders on every dispatched tick.
#[hook]
pub fn use_scroll_metric() -> ScrollMetric {
    let metric = use_state_eq(ScrollMetric::default);
    {
        let setter = metric.setter();
        use_scroll_subscription(move |m| setter.set(*m));
    }
    *metric
}

/// Threshold flags; re-renders only when one of them flips.
#[hook]
pub fn use_view_flags() -> ViewFlags {
    let committed = use_state_eq(ViewFlags::default);
    let tracked = use_mut_ref(ViewFlags::default);
    {
        let setter = committed.setter();
        use_scroll_subscription(move |m| {
            let mut flags = tracked.borrow_mut();
            if flags.on_scroll(m) {
                setter.set(*flags);
            }
        });
    }
    *committed
}

/// One-way visibility of the element behind `node_ref`.
#[hook]
pub fn use_reveal(node_ref: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);
    {
        let setter = visible.setter();
        use_effect_with_deps(
            move |node_ref| {
                let observer = RevealObserver::observe(node_ref, threshold, move || {
                    debug!("Section revealed");
                    setter.set(true);
                });
                move || drop(observer)
            },
            node_ref,
        );
    }
    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    type Seen = Rc<RefCell<Vec<u32>>>;

    fn tagged(seen: &Seen, tag: u32) -> Listener<u32> {
        let seen = seen.clone();
        Rc::new(move |v: &u32| seen.borrow_mut().push(tag * 100 + *v))
    }

    #[test]
    fn unattached_ref_observes_nothing() {
        let node_ref = NodeRef::default();
        let observer = RevealObserver::observe(&node_ref, 0.1, || {
            panic!("an unattached section must never reveal")
        });
        assert!(observer.is_none());
    }

    #[test]
    fn notifies_all_subscribers_in_order() {
        let list = SubscriberList::new();
        let seen = Seen::default();
        let _a = list.add(tagged(&seen, 1));
        let _b = list.add(tagged(&seen, 2));
        list.notify(&7);
        assert_eq!(*seen.borrow(), vec![107, 207]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn dropped_subscription_stops_firing() {
        let list = SubscriberList::new();
        let seen = Seen::default();
        let a = list.add(tagged(&seen, 1));
        let _b = list.add(tagged(&seen, 2));
        drop(a);
        list.notify(&1);
        assert_eq!(*seen.borrow(), vec![201]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn subscription_outliving_list_is_harmless() {
        let list = SubscriberList::<u32>::new();
        let sub = list.add(Rc::new(|_: &u32| {}));
        drop(list);
        drop(sub);
    }

    #[test]
    fn unsubscribe_during_dispatch_skips_the_dropped_one() {
        let list = SubscriberList::new();
        let seen = Seen::default();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::default();

        let killer = victim.clone();
        let _killer = list.add(Rc::new(move |_: &u32| {
            killer.borrow_mut().take();
        }));
        *victim.borrow_mut() = Some(list.add(tagged(&seen, 9)));

        list.notify(&1);
        assert!(seen.borrow().is_empty());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn subscribe_during_dispatch_waits_for_next_round() {
        let list = SubscriberList::new();
        let seen = Seen::default();
        let late: Rc<RefCell<Vec<Subscription>>> = Rc::default();

        let _spawner = {
            let late = late.clone();
            let weak = Rc::downgrade(&list);
            let seen = seen.clone();
            list.add(Rc::new(move |_: &u32| {
                if let Some(list) = weak.upgrade() {
                    if late.borrow().is_empty() {
                        late.borrow_mut().push(list.add(tagged(&seen, 3)));
                    }
                }
            }))
        };

        list.notify(&1);
        assert!(seen.borrow().is_empty());
        list.notify(&2);
        assert_eq!(*seen.borrow(), vec![302]);
    }
}
