// src/carousel/mod.rs
// Lifecycle controller: load, render, bind, cycle, tear down
//
// A HeroSlider owns one container. `init()` brings it to life, `run()` drives
// it from interaction events, page visibility and the advance deadline, and
// `destroy()` detaches it again.

pub mod events;
pub mod state;

pub use events::{CarouselEvent, EventSender, Input, is_activation_key};
pub use state::{AdvanceTimer, CarouselState, PANEL_THEME_ATTRIBUTE, Timing};

use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};

use crate::assets::AssetResolver;
use crate::config::CarouselConfig;
use crate::error::Result;
use crate::host::{ACTIVE_CLASS, Container};
use crate::http::create_shared_client;
use crate::page::{Page, Visibility, VisibilitySubscription};
use crate::render::{Renderer, build_dots, generated_id};
use crate::source::SlideSource;

/// Snapshot of a carousel, published on every change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliderStatus {
    pub mounted: bool,
    pub busy: bool,
    pub active_index: usize,
    pub slide_count: usize,
    /// Delay of the pending advance, if one is armed
    pub pending_delay: Option<Duration>,
    pub document_visible: bool,
}

/// Subscriptions held while mounted; dropping them unbinds everything
#[derive(Debug)]
struct Bindings {
    events: mpsc::UnboundedReceiver<CarouselEvent>,
    sender: EventSender,
    visibility: VisibilitySubscription,
}

/// What woke the run loop
enum Wake {
    Event(CarouselEvent),
    Visibility(Visibility),
    PageGone,
    Timer,
    Shutdown,
    Spurious,
}

pub struct HeroSlider {
    container: Container,
    config: CarouselConfig,
    source: SlideSource,
    renderer: Renderer,
    state: CarouselState,
    page: Page,
    bindings: Option<Bindings>,
    status: watch::Sender<SliderStatus>,
}

impl HeroSlider {
    pub fn new(container: Container, config: CarouselConfig, page: &Page) -> Self {
        Self::with_client(container, config, page, create_shared_client())
    }

    /// Construct with a caller-supplied HTTP client
    pub fn with_client(
        container: Container,
        config: CarouselConfig,
        page: &Page,
        client: reqwest::Client,
    ) -> Self {
        let assets = AssetResolver::from_base_str(config.base_url.as_deref());
        let data_url = config.resolve_data_url(container.source_attribute());
        let source = SlideSource::new(client, data_url)
            .with_prefetched(config.slides.clone())
            .with_base(assets.base().cloned());

        let timing = Timing {
            auto_advance: config.resolve_auto_advance(),
            manual_pause: config.resolve_manual_pause(),
        };
        let state = CarouselState::new(timing, page.visibility());
        let (status, _) = watch::channel(SliderStatus {
            document_visible: page.visibility().is_visible(),
            ..Default::default()
        });

        Self {
            container,
            config,
            source,
            renderer: Renderer::new(assets),
            state,
            page: page.clone(),
            bindings: None,
            status,
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn into_container(self) -> Container {
        self.container
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn is_mounted(&self) -> bool {
        self.bindings.is_some()
    }

    /// Sender for interaction events; `None` until mounted
    pub fn event_sender(&self) -> Option<EventSender> {
        self.bindings.as_ref().map(|b| b.sender.clone())
    }

    pub fn status(&self) -> watch::Receiver<SliderStatus> {
        self.status.subscribe()
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Mount the carousel. Returns false when there is nothing to show.
    ///
    /// Never fails: unavailable data leaves the container empty and unbound.
    pub async fn init(&mut self) -> bool {
        if self.is_mounted() {
            debug!("Carousel already mounted");
            return true;
        }

        let initial_index = if self.container.slide_count() == 0 {
            let records = {
                let _busy = BusyGuard::acquire(&mut self.container, &self.status);
                self.source.load().await
            };
            if records.is_empty() {
                debug!(data_url = %self.source.data_url(), "No slides to show");
                return false;
            }
            self.renderer.render_into(&mut self.container, &records)
        } else {
            marked_active_index(&self.container)
        };

        if self.container.slide_count() == 0 {
            return false;
        }

        let ids = ensure_slide_ids(&mut self.container);
        if self.container.dot_count() == 0 {
            self.container.mount_dots(build_dots(&ids));
        }

        let visibility = self.page.subscribe();
        self.state.set_document_visible(visibility.current());
        self.state.initialize(&mut self.container, initial_index);

        let (sender, events) = mpsc::unbounded_channel();
        self.bindings = Some(Bindings {
            events,
            sender,
            visibility,
        });

        self.state.schedule_advance(self.state.timing().auto_advance);
        self.publish();

        info!(
            slides = self.state.slide_count(),
            initial = self.state.current_index(),
            "Carousel mounted"
        );
        true
    }

    /// Drive the carousel until shutdown is signalled or it is destroyed
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        let mut watch_page = true;

        loop {
            if *shutdown.borrow() {
                break;
            }
            let Some(bindings) = self.bindings.as_mut() else {
                break;
            };
            let deadline = self.state.timer().map(|t| t.deadline);

            let wake = tokio::select! {
                event = bindings.events.recv() => match event {
                    Some(event) => Wake::Event(event),
                    None => Wake::Shutdown,
                },
                visibility = bindings.visibility.changed(), if watch_page => match visibility {
                    Some(visibility) => Wake::Visibility(visibility),
                    None => Wake::PageGone,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => Wake::Timer,
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        Wake::Shutdown
                    } else {
                        Wake::Spurious
                    }
                }
            };

            match wake {
                Wake::Event(event) => self.dispatch(event),
                Wake::Visibility(visibility) => self.apply(Input::Visibility(visibility)),
                Wake::PageGone => {
                    debug!("Page dropped, no further visibility changes");
                    watch_page = false;
                }
                Wake::Timer => self.fire_timer(),
                Wake::Shutdown => break,
                Wake::Spurious => {}
            }
        }
    }

    /// Feed one raw interaction event through the state machine
    pub fn dispatch(&mut self, event: CarouselEvent) {
        match event.decode() {
            Some(input) => self.apply(input),
            None => debug!(?event, "Ignoring event"),
        }
    }

    pub fn apply(&mut self, input: Input) {
        if !self.is_mounted() {
            return;
        }
        self.state.handle(&mut self.container, input);
        self.publish();
    }

    /// Advance if the pending deadline has passed
    pub fn fire_timer(&mut self) {
        if !self.is_mounted() {
            return;
        }
        if self.state.fire_if_due(&mut self.container, Instant::now()) {
            self.publish();
        }
    }

    /// Detach: clear the timer, drop every subscription, remove the theme.
    ///
    /// Safe to call repeatedly and before `init()`.
    pub fn destroy(&mut self) {
        let was_mounted = self.bindings.take().is_some();
        self.state.clear_timer();
        self.container.set_theme(None);
        self.publish();

        if was_mounted {
            info!(index = self.state.current_index(), "Carousel destroyed");
        }
    }

    /// Move the carousel into a background task
    pub fn spawn(self) -> SliderHandle {
        let (shutdown, shutdown_rx) = watch::channel(false);
        let events = self.event_sender();
        let status = self.status();

        let task = tokio::spawn(async move {
            let mut slider = self;
            slider.run(shutdown_rx).await;
            slider.destroy();
            slider
        });

        SliderHandle {
            events,
            status,
            shutdown,
            task,
        }
    }

    fn publish(&self) {
        self.status.send_replace(SliderStatus {
            mounted: self.is_mounted(),
            busy: self.container.is_busy(),
            active_index: self.state.current_index(),
            slide_count: self.state.slide_count(),
            pending_delay: self.state.timer().map(|t| t.delay),
            document_visible: self.state.document_visible(),
        });
    }
}

/// Control surface for a spawned carousel
pub struct SliderHandle {
    events: Option<EventSender>,
    status: watch::Receiver<SliderStatus>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<HeroSlider>,
}

impl SliderHandle {
    /// Deliver an event. Returns false if the carousel is not listening.
    pub fn send(&self, event: CarouselEvent) -> bool {
        self.events.as_ref().is_some_and(|tx| tx.send(event).is_ok())
    }

    pub fn event_sender(&self) -> Option<EventSender> {
        self.events.clone()
    }

    pub fn status(&self) -> watch::Receiver<SliderStatus> {
        self.status.clone()
    }

    /// Stop the task and hand back the destroyed carousel
    pub async fn destroy(self) -> Result<HeroSlider> {
        // The task may already have exited
        let _ = self.shutdown.send(true);
        Ok(self.task.await?)
    }
}

/// Marks the container busy for as long as it lives
struct BusyGuard<'a> {
    container: &'a mut Container,
    status: &'a watch::Sender<SliderStatus>,
}

impl<'a> BusyGuard<'a> {
    fn acquire(container: &'a mut Container, status: &'a watch::Sender<SliderStatus>) -> Self {
        container.set_busy(true);
        status.send_modify(|s| s.busy = true);
        Self { container, status }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.container.set_busy(false);
        self.status.send_modify(|s| s.busy = false);
    }
}

/// First slide already carrying the active class, else 0
fn marked_active_index(container: &Container) -> usize {
    container
        .slides()
        .iter()
        .position(|slide| slide.has_class(ACTIVE_CLASS))
        .unwrap_or(0)
}

/// Give id-less panels a generated id and return every panel's id
fn ensure_slide_ids(container: &mut Container) -> Vec<String> {
    (0..container.slide_count())
        .map(|index| {
            let Some(slide) = container.slide_mut(index) else {
                return generated_id(index);
            };
            let existing = slide.id().filter(|id| !id.is_empty()).map(str::to_string);
            existing.unwrap_or_else(|| {
                let id = generated_id(index);
                slide.set_attribute("id", id.clone());
                id
            })
        })
        .collect()
}
