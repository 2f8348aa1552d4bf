use std::time::Instant;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::controllers::community::CommunityScreen;
use crate::controllers::navigation::{Navigator, Route, Tab};
use crate::controllers::scheduler::{AppEvent, EventReceiver, EventSender, ScheduledTask};
use crate::error::{CollectError, ValidationError};
use crate::models::game::{BubbleGame, GameOutcome, GamePhase};
use crate::models::image::ImagePicker;
use crate::models::scan::ScanSession;
use crate::models::{Config, FeedStore};
use crate::views::tui;

/// Blocking message dialog. Swallows input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for Alert {
    fn from(err: ValidationError) -> Self {
        Alert::new(err.title(), err.to_string())
    }
}

/// A running game and the countdown that belongs to it.
pub struct GameScreen {
    pub game: BubbleGame,
    session: u64,
    timer: Option<ScheduledTask>,
}

impl GameScreen {
    pub fn session(&self) -> u64 {
        self.session
    }

    pub(crate) fn is_counting_down(&self) -> bool {
        self.timer.is_some()
    }
}

pub struct App {
    config: Config,
    navigator: Navigator,
    feed: FeedStore,
    community: CommunityScreen,
    picker: Box<dyn ImagePicker>,
    scan: ScanSession,
    scan_tasks: Vec<ScheduledTask>,
    game: Option<GameScreen>,
    game_sessions: u64,
    alert: Option<Alert>,
    events: EventSender,
    quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        feed: FeedStore,
        picker: Box<dyn ImagePicker>,
        events: EventSender,
        start: Tab,
    ) -> Self {
        let community = CommunityScreen::new(&feed);
        Self {
            config,
            navigator: Navigator::new(start),
            feed,
            community,
            picker,
            scan: ScanSession::new(),
            scan_tasks: Vec::new(),
            game: None,
            game_sessions: 0,
            alert: None,
            events,
            quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn active_tab(&self) -> Tab {
        self.navigator.active_tab()
    }

    pub fn feed(&self) -> &FeedStore {
        &self.feed
    }

    pub fn community(&self) -> &CommunityScreen {
        &self.community
    }

    /// Feed and screen state together, for rendering the stateful list.
    pub fn community_parts(&mut self) -> (&FeedStore, &mut CommunityScreen) {
        (&self.feed, &mut self.community)
    }

    pub fn scan(&self) -> &ScanSession {
        &self.scan
    }

    pub fn game(&self) -> Option<&GameScreen> {
        self.game.as_ref()
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            AppEvent::Key(_) | AppEvent::Resize | AppEvent::Frame => {}
            AppEvent::GameTick(session) => self.on_game_tick(session),
            AppEvent::ScanComplete(session) => {
                if self.scan.complete(session) {
                    log::info!("Scan {} complete", session);
                    self.scan_tasks.retain(|task| !task.is_finished());
                    self.scan_tasks.push(ScheduledTask::once(
                        self.config.scan.redirect_delay(),
                        self.events.clone(),
                        AppEvent::ScanRedirect(session),
                    ));
                }
            }
            AppEvent::ScanRedirect(session) => {
                if self.scan.ready_to_redirect(session) {
                    self.navigate(|nav| nav.push(Route::Game));
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return;
        }

        if self.route() == Route::Game {
            self.handle_game_key(key);
            return;
        }

        if self.route() == Route::Tab(Tab::Community) && self.community.has_modal() {
            self.handle_community_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => {
                if self.navigator.can_go_back() {
                    self.navigate(|nav| {
                        nav.back();
                    });
                } else {
                    self.quit = true;
                }
            }
            KeyCode::Tab => {
                let tab = self.active_tab().next();
                self.navigate(|nav| nav.select_tab(tab));
            }
            KeyCode::BackTab => {
                let tab = self.active_tab().previous();
                self.navigate(|nav| nav.select_tab(tab));
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = Tab::from_index(index) {
                    self.navigate(|nav| nav.select_tab(tab));
                }
            }
            _ => match self.route() {
                Route::Tab(Tab::Home) => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char('s')) {
                        self.navigate(|nav| nav.select_tab(Tab::Scan));
                    }
                }
                Route::Tab(Tab::Scan) => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.start_scan();
                    }
                }
                Route::Tab(Tab::Community) => self.handle_community_key(key),
                _ => {}
            },
        }
    }

    fn handle_community_key(&mut self, key: KeyEvent) {
        if let Some(alert) = self
            .community
            .handle_key(key, &mut self.feed, &mut *self.picker)
        {
            self.alert = Some(alert);
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let Some(screen) = self.game.as_mut() else {
            return;
        };
        match (screen.game.phase(), key.code) {
            (_, KeyCode::Esc) => self.navigate(|nav| {
                nav.back();
            }),
            (GamePhase::Playing, KeyCode::Char(c)) => {
                screen.game.tap(c);
            }
            (GamePhase::Over, KeyCode::Enter) => match screen.game.outcome() {
                Some(GameOutcome::Won) => self.navigate(|nav| nav.select_tab(Tab::Rewards)),
                _ => self.navigate(|nav| {
                    nav.back();
                }),
            },
            _ => {}
        }
    }

    fn on_game_tick(&mut self, session: u64) {
        let Some(screen) = self.game.as_mut() else {
            return;
        };
        if screen.session != session {
            return;
        }
        if screen.game.tick() == GamePhase::Over {
            log::info!("Game over with score {}", screen.game.score());
            screen.timer = None;
        }
    }

    fn start_scan(&mut self) {
        let Some(session) = self.scan.start(Instant::now()) else {
            return;
        };
        log::info!("Starting scan {}", session);
        self.scan_tasks = vec![
            ScheduledTask::every(
                self.config.frame_interval(),
                self.events.clone(),
                AppEvent::Frame,
            ),
            ScheduledTask::once(
                self.config.scan.duration(),
                self.events.clone(),
                AppEvent::ScanComplete(session),
            ),
        ];
    }

    fn start_game(&mut self) {
        self.game_sessions += 1;
        let session = self.game_sessions;
        let game = BubbleGame::new(self.config.game.rules());
        let timer = (game.phase() == GamePhase::Playing).then(|| {
            ScheduledTask::every(
                std::time::Duration::from_secs(1),
                self.events.clone(),
                AppEvent::GameTick(session),
            )
        });
        log::info!("Starting game {}", session);
        self.game = Some(GameScreen {
            game,
            session,
            timer,
        });
    }

    /// Applies a navigation change and tears down or sets up the affected screens.
    fn navigate(&mut self, change: impl FnOnce(&mut Navigator)) {
        let before = self.navigator.current();
        change(&mut self.navigator);
        let after = self.navigator.current();
        if before == after {
            return;
        }
        log::debug!("Navigating from {:?} to {:?}", before, after);

        match before {
            Route::Tab(Tab::Scan) => {
                self.scan.reset();
                self.scan_tasks.clear();
            }
            Route::Game => self.game = None,
            _ => {}
        }

        if after == Route::Game {
            self.start_game();
        }
    }
}

pub async fn start_app(
    config: Config,
    feed: FeedStore,
    picker: Box<dyn ImagePicker>,
    start: Tab,
) -> Result<(), CollectError> {
    let (events, mut receiver) = mpsc::unbounded_channel();
    let _input = forward_terminal_events(events.clone());

    let mut app = App::new(config, feed, picker, events, start);

    // Setup terminal
    let mut terminal = tui::setup_terminal()?;

    // Run the app
    let res = run_app(&mut terminal, &mut app, &mut receiver).await;

    // Restore terminal
    tui::restore_terminal(&mut terminal)?;

    res
}

fn forward_terminal_events(events: EventSender) -> ScheduledTask {
    ScheduledTask::spawn(async move {
        let mut stream = EventStream::new();
        while let Some(event) = stream.next().await {
            let app_event = match event {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    log::error!("Error reading terminal events: {}", e);
                    break;
                }
            };
            if events.send(app_event).is_err() {
                break;
            }
        }
    })
}

pub async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut EventReceiver,
) -> Result<(), CollectError> {
    loop {
        terminal.draw(|f| tui::render_ui(f, app))?;

        match events.recv().await {
            Some(event) => app.handle_event(event),
            None => return Ok(()),
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::image::DirectoryPicker;
    use crate::models::time::SystemClock;
    use crate::models::SeedRepository;

    fn app(start: Tab) -> (App, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let feed = FeedStore::new(Box::new(SeedRepository), Box::new(SystemClock));
        let app = App::new(
            Config::default(),
            feed,
            Box::new(DirectoryPicker::new(None)),
            tx,
            start,
        );
        (app, rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn enter_game(app: &mut App) -> u64 {
        press(app, KeyCode::Enter);
        let session = app.scan().session();
        app.handle_event(AppEvent::ScanComplete(session));
        app.handle_event(AppEvent::ScanRedirect(session));
        assert_eq!(app.route(), Route::Game);
        app.game().unwrap().session()
    }

    fn play(app: &mut App, taps: u32) {
        let session = app.game().unwrap().session();
        for _ in 0..taps {
            let key = app.game().unwrap().game.bubble().key;
            press(app, KeyCode::Char(key));
        }
        for _ in 0..30 {
            app.handle_event(AppEvent::GameTick(session));
        }
    }

    #[tokio::test]
    async fn winning_game_routes_to_rewards() {
        let (mut app, _rx) = app(Tab::Scan);
        enter_game(&mut app);
        play(&mut app, 15);

        let screen = app.game().unwrap();
        assert_eq!(screen.game.outcome(), Some(GameOutcome::Won));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route(), Route::Tab(Tab::Rewards));
        assert!(app.game().is_none());
    }

    #[tokio::test]
    async fn losing_game_goes_back() {
        let (mut app, _rx) = app(Tab::Scan);
        enter_game(&mut app);
        play(&mut app, 14);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route(), Route::Tab(Tab::Scan));
        assert_eq!(app.scan().phase(), crate::models::scan::ScanPhase::Idle);
    }

    #[tokio::test]
    async fn stale_game_ticks_are_ignored() {
        let (mut app, _rx) = app(Tab::Scan);
        let first = enter_game(&mut app);
        press(&mut app, KeyCode::Esc);
        let second = enter_game(&mut app);
        assert_ne!(first, second);

        app.handle_event(AppEvent::GameTick(first));
        assert_eq!(app.game().unwrap().game.time_left(), 30);
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_scan_and_countdown_drive_the_flow() {
        let (mut app, mut rx) = app(Tab::Scan);
        press(&mut app, KeyCode::Enter);

        while app.route() != Route::Game {
            let event = rx.recv().await.unwrap();
            app.handle_event(event);
        }

        while app.game().unwrap().game.phase() == GamePhase::Playing {
            let event = rx.recv().await.unwrap();
            app.handle_event(event);
        }
        assert_eq!(app.game().unwrap().game.time_left(), 0);
        assert!(!app.game().unwrap().is_counting_down());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::Tab(Tab::Scan));
    }

    #[tokio::test(start_paused = true)]
    async fn completed_scan_timer_is_released() {
        let (mut app, mut rx) = app(Tab::Scan);
        press(&mut app, KeyCode::Enter);

        while app.scan().phase() != crate::models::scan::ScanPhase::Complete {
            let event = rx.recv().await.unwrap();
            app.handle_event(event);
        }
        // frame animation plus the pending redirect
        assert_eq!(app.scan_tasks.len(), 2);
        assert!(app.scan_tasks.iter().all(|task| !task.is_finished()));
    }

    #[tokio::test]
    async fn leaving_scan_cancels_it() {
        let (mut app, _rx) = app(Tab::Scan);
        press(&mut app, KeyCode::Enter);
        let session = app.scan().session();

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        app.handle_event(AppEvent::ScanComplete(session));
        app.handle_event(AppEvent::ScanRedirect(session));

        assert_eq!(app.route(), Route::Tab(Tab::Scan));
        assert_eq!(app.scan().phase(), crate::models::scan::ScanPhase::Idle);
    }

    #[tokio::test]
    async fn alert_blocks_until_dismissed() {
        let (mut app, _rx) = app(Tab::Community);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.alert().unwrap().title, "Empty Post");

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.alert().is_none());
        assert!(app.community().compose.is_some());
    }

    #[tokio::test]
    async fn tab_keys_switch_screens() {
        let (mut app, _rx) = app(Tab::Home);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route(), Route::Tab(Tab::Scan));
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.route(), Route::Tab(Tab::Profile));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::Tab(Tab::Scan));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
