//! Browser session: init sequence, event queue and display state.
//!
//! A session starts in `Loading`, receives the descriptor result exactly once
//! and then reacts to a single-threaded queue of typed events. Every fragment
//! change re-resolves the route and re-renders one of the two views; the other
//! view stays hidden with its last content.
//!
//! # States
//!
//! ```text
//! Loading ──ok──> Ready ──> RenderedMain <──> RenderedDetail
//!    └──err──> LoadFailed (terminal)
//! ```

use anyhow::Result;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::constants::{COPIED_LABEL, COPY_FEEDBACK_MS, COPY_LABEL};
use crate::location::PageLocation;
use crate::models::Catalog;
use crate::render::{
    install_command, render_detail, render_main, DetailView, LoadFailureView, MainView,
};
use crate::router::{resolve_route, RouteIntent};

/// Lifecycle state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the descriptor
    Loading,
    /// Descriptor loaded, first route not dispatched yet
    Ready,
    /// Main view is visible
    RenderedMain,
    /// Detail view is visible
    RenderedDetail,
    /// Descriptor could not be loaded; nothing else will run
    LoadFailed(String),
}

/// Events delivered to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// The URL fragment changed
    FragmentChanged(String),
    /// The install action of an app fired
    InstallRequested(String),
    /// A gallery thumbnail was activated
    GalleryItemActivated {
        /// Image shown in the gallery modal
        image_url: String,
        /// Caption shown in the gallery modal
        title: String,
    },
    /// The copy button of the install dialog was pressed
    CopyRequested,
    /// Close the topmost overlay (gallery modal, then install dialog)
    DismissOverlay,
}

/// Side effects the host has to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put this text on the system clipboard, then report back with
    /// [`Session::copy_succeeded`]
    CopyToClipboard(String),
}

/// Which of the two views is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibleView {
    /// App gallery
    #[default]
    Main,
    /// Single app page
    Detail,
}

/// Store identity shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreHeader {
    /// Store name
    pub store_name: String,
    /// Store logo location
    pub store_logo: String,
    /// Window title
    pub title: String,
}

/// Install dialog showing the formatted command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstallDialog {
    /// Command text offered for copying
    pub command: String,
    /// Whether the dialog is open
    pub visible: bool,
}

/// Gallery modal, updated in place when a thumbnail is activated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryModal {
    /// Image source
    pub image_url: String,
    /// Caption
    pub title: String,
    /// Whether the modal is open
    pub visible: bool,
}

/// Copy button label with its pending reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyButton {
    /// Current label
    pub label: String,
    reset_at: Option<Instant>,
}

impl Default for CopyButton {
    fn default() -> Self {
        Self {
            label: COPY_LABEL.to_string(),
            reset_at: None,
        }
    }
}

impl CopyButton {
    /// Returns true while the "copied" feedback is showing.
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.reset_at.is_some()
    }
}

/// Everything the display surface shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Display {
    /// Store header, set once the descriptor is loaded
    pub header: Option<StoreHeader>,
    /// Visible view
    pub visible: VisibleView,
    /// Last rendered main view
    pub main: Option<MainView>,
    /// Last rendered detail view
    pub detail: Option<DetailView>,
    /// Load failure shown in place of the app grid
    pub load_failure: Option<LoadFailureView>,
    /// Install dialog
    pub install_dialog: InstallDialog,
    /// Gallery modal
    pub gallery_modal: GalleryModal,
    /// Copy button of the install dialog
    pub copy_button: CopyButton,
}

/// A browsing session over one store.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    catalog: Option<Catalog>,
    location: PageLocation,
    install_cli: String,
    fragment: String,
    queue: VecDeque<BrowserEvent>,
    display: Display,
}

impl Session {
    /// Creates a session waiting for its descriptor.
    ///
    /// `fragment` is the fragment the page was opened with; it is dispatched
    /// once the catalog is loaded.
    pub fn new(location: PageLocation, install_cli: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            state: SessionState::Loading,
            catalog: None,
            location,
            install_cli: install_cli.into(),
            fragment: fragment.into(),
            queue: VecDeque::new(),
            display: Display::default(),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Display state to draw.
    #[must_use]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Loaded catalog, if any.
    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Current fragment.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Page location the session renders against.
    #[must_use]
    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    /// Delivers the descriptor load result.
    ///
    /// Only the first call has an effect. On success the store header is set,
    /// the current fragment is dispatched and queued events are processed. On
    /// failure the session enters `LoadFailed` and drops queued events.
    pub fn finish_load(&mut self, result: Result<Catalog>) -> Vec<Effect> {
        if self.state != SessionState::Loading {
            warn!("Ignoring repeated store load result");
            return Vec::new();
        }

        match result {
            Ok(catalog) => {
                info!(
                    "Store {:?} ready with {} apps",
                    catalog.store_name,
                    catalog.apps.len()
                );
                self.display.header = Some(StoreHeader {
                    store_name: catalog.store_name.clone(),
                    store_logo: catalog.store_logo.clone(),
                    title: catalog.store_name.clone(),
                });
                self.catalog = Some(catalog);
                self.state = SessionState::Ready;

                // Initial synthetic route dispatch covers deep links
                self.route();
                self.run_pending()
            }
            Err(e) => {
                warn!("Store load failed: {:#}", e);
                let message = e.to_string();
                self.display.load_failure = Some(LoadFailureView::new(message.clone()));
                self.display.visible = VisibleView::Main;
                self.state = SessionState::LoadFailed(message);
                self.queue.clear();
                Vec::new()
            }
        }
    }

    /// Queues an event without processing it.
    pub fn push(&mut self, event: BrowserEvent) {
        self.queue.push_back(event);
    }

    /// Queues an event and processes the queue.
    pub fn handle(&mut self, event: BrowserEvent) -> Vec<Effect> {
        self.push(event);
        self.run_pending()
    }

    /// Processes queued events in order.
    ///
    /// While loading, events stay queued. After a load failure they are
    /// discarded.
    pub fn run_pending(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();

        match self.state {
            SessionState::Loading => return effects,
            SessionState::LoadFailed(_) => {
                self.queue.clear();
                return effects;
            }
            _ => {}
        }

        while let Some(event) = self.queue.pop_front() {
            if let Some(effect) = self.apply(event) {
                effects.push(effect);
            }
        }

        effects
    }

    /// Reports that the host copied the install command.
    pub fn copy_succeeded(&mut self, now: Instant) {
        self.display.copy_button.label = COPIED_LABEL.to_string();
        self.display.copy_button.reset_at = Some(now + Duration::from_millis(COPY_FEEDBACK_MS));
    }

    /// Advances timers; restores the copy label once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(reset_at) = self.display.copy_button.reset_at {
            if now >= reset_at {
                self.display.copy_button = CopyButton::default();
            }
        }
    }

    fn apply(&mut self, event: BrowserEvent) -> Option<Effect> {
        match event {
            BrowserEvent::FragmentChanged(fragment) => {
                self.fragment = fragment;
                self.route();
                None
            }
            BrowserEvent::InstallRequested(app_name) => {
                let command =
                    install_command(&self.install_cli, &app_name, &self.location.base_url);
                debug!("Install command for {:?}: {}", app_name, command);
                self.display.install_dialog = InstallDialog {
                    command,
                    visible: true,
                };
                None
            }
            BrowserEvent::GalleryItemActivated { image_url, title } => {
                self.display.gallery_modal = GalleryModal {
                    image_url,
                    title,
                    visible: true,
                };
                None
            }
            BrowserEvent::CopyRequested => {
                let command = &self.display.install_dialog.command;
                if command.is_empty() {
                    None
                } else {
                    Some(Effect::CopyToClipboard(command.clone()))
                }
            }
            BrowserEvent::DismissOverlay => {
                if self.display.gallery_modal.visible {
                    self.display.gallery_modal.visible = false;
                } else {
                    self.display.install_dialog.visible = false;
                }
                None
            }
        }
    }

    fn route(&mut self) {
        let Some(catalog) = self.catalog.as_ref() else {
            return;
        };

        match resolve_route(&self.fragment, catalog) {
            RouteIntent::ShowDetail(app) => {
                self.display.detail = Some(render_detail(app, &self.location));
                self.display.visible = VisibleView::Detail;
                self.state = SessionState::RenderedDetail;
            }
            RouteIntent::ShowMain => {
                self.display.main = Some(render_main(catalog));
                self.display.visible = VisibleView::Main;
                self.state = SessionState::RenderedMain;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{App, Publisher};

    fn location() -> PageLocation {
        PageLocation {
            protocol: "https".to_string(),
            host: "host".to_string(),
            base_url: "https://host/store/".to_string(),
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            store_name: "Demo".to_string(),
            store_logo: "logo.png".to_string(),
            apps: vec![App {
                name: "Calc".to_string(),
                version: "1.0".to_string(),
                description: "Calculator".to_string(),
                long_description: String::new(),
                icon_url: "calc.png".to_string(),
                category: "Utilities".to_string(),
                license: None,
                website: None,
                download_url: None,
                publisher: Publisher {
                    name: "Acme".to_string(),
                },
                featured: true,
                gallery: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_events_wait_for_load() {
        let mut session = Session::new(location(), "cli", "");
        session.push(BrowserEvent::FragmentChanged("#/app/Calc".to_string()));

        assert!(session.run_pending().is_empty());
        assert_eq!(session.state(), &SessionState::Loading);

        session.finish_load(Ok(catalog()));
        assert_eq!(session.state(), &SessionState::RenderedDetail);
        assert_eq!(session.fragment(), "#/app/Calc");
    }

    #[test]
    fn test_initial_deep_link_is_dispatched() {
        let mut session = Session::new(location(), "cli", "#/app/Calc");
        session.finish_load(Ok(catalog()));

        assert_eq!(session.display().visible, VisibleView::Detail);
        assert_eq!(session.display().detail.as_ref().unwrap().name, "Calc");
        assert_eq!(session.display().header.as_ref().unwrap().title, "Demo");
    }

    #[test]
    fn test_second_load_result_is_ignored() {
        let mut session = Session::new(location(), "cli", "");
        session.finish_load(Ok(catalog()));
        session.finish_load(Err(anyhow::anyhow!("late failure")));

        assert_eq!(session.state(), &SessionState::RenderedMain);
        assert!(session.display().load_failure.is_none());
    }

    #[test]
    fn test_dismiss_closes_gallery_before_install_dialog() {
        let mut session = Session::new(location(), "cli", "");
        session.finish_load(Ok(catalog()));
        session.handle(BrowserEvent::InstallRequested("Calc".to_string()));
        session.handle(BrowserEvent::GalleryItemActivated {
            image_url: "a.png".to_string(),
            title: "A".to_string(),
        });

        session.handle(BrowserEvent::DismissOverlay);
        assert!(!session.display().gallery_modal.visible);
        assert!(session.display().install_dialog.visible);

        session.handle(BrowserEvent::DismissOverlay);
        assert!(!session.display().install_dialog.visible);
    }

    #[test]
    fn test_copy_without_command_does_nothing() {
        let mut session = Session::new(location(), "cli", "");
        session.finish_load(Ok(catalog()));

        assert!(session.handle(BrowserEvent::CopyRequested).is_empty());
    }
}
