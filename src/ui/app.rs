use crossterm::event::KeyCode;
use tracing::info;

use crate::cli::StartScreen;
use crate::config::Config;
use crate::ui::landing::LandingState;
use crate::ui::reducer::ReducerExample;
use crate::ui::snapshot::SnapshotExample;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Landing,
    Snapshot,
    Reducer,
}

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "Overview",
            Route::Snapshot => "Snapshot example",
            Route::Reducer => "Reducer example",
        }
    }
}

impl From<StartScreen> for Route {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Landing => Route::Landing,
            StartScreen::Snapshot => Route::Snapshot,
            StartScreen::Reducer => Route::Reducer,
        }
    }
}

/// Top-level UI state: the current route and the screen it owns.
///
/// Example screens are constructed when their route is entered and dropped
/// when it is left, so collection state never survives navigation.
pub struct App {
    config: Config,
    route: Route,
    landing: LandingState,
    snapshot: Option<SnapshotExample>,
    reducer: Option<ReducerExample>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            route: Route::Landing,
            landing: LandingState::default(),
            snapshot: None,
            reducer: None,
            should_quit: false,
        }
    }

    pub fn with_start_screen(config: Config, screen: StartScreen) -> Self {
        let mut app = Self::new(config);
        app.open(Route::from(screen));
        app
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn landing(&self) -> &LandingState {
        &self.landing
    }

    pub fn snapshot(&self) -> Option<&SnapshotExample> {
        self.snapshot.as_ref()
    }

    pub fn reducer(&self) -> Option<&ReducerExample> {
        self.reducer.as_ref()
    }

    pub fn select_prev(&mut self) {
        self.landing.select_prev();
    }

    pub fn select_next(&mut self) {
        self.landing.select_next();
    }

    /// Navigate to `route`, tearing down whatever screen was mounted and
    /// seeding a fresh one from configuration.
    pub fn open(&mut self, route: Route) {
        self.snapshot = None;
        self.reducer = None;
        match route {
            Route::Landing => {}
            Route::Snapshot => self.snapshot = Some(SnapshotExample::new(&self.config.seed)),
            Route::Reducer => self.reducer = Some(ReducerExample::new(&self.config.seed)),
        }
        self.route = route;
        info!(route = route.title(), "navigated");
    }

    pub fn open_selected(&mut self) {
        self.open(self.landing.selected_route());
    }

    pub fn close_example(&mut self) {
        self.open(Route::Landing);
    }

    pub fn submit_active(&mut self) {
        match self.route {
            Route::Snapshot => {
                if let Some(example) = self.snapshot.as_mut() {
                    example.submit();
                }
            }
            Route::Reducer => {
                if let Some(example) = self.reducer.as_mut() {
                    example.submit();
                }
            }
            Route::Landing => {}
        }
    }

    /// Forward an editing key to the active screen's input field.
    pub fn key_to_field(&mut self, code: KeyCode) {
        match self.route {
            Route::Snapshot => {
                if let Some(example) = self.snapshot.as_mut() {
                    example.on_key(code);
                }
            }
            Route::Reducer => {
                if let Some(example) = self.reducer.as_mut() {
                    example.on_key(code);
                }
            }
            Route::Landing => {}
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(example) = self.snapshot.as_mut() {
            example.on_tick();
        }
        if let Some(example) = self.reducer.as_mut() {
            example.on_tick();
        }
    }
}
