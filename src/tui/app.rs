use anyhow::Result;
use chrono::{Local, NaiveDateTime, NaiveTime};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use rusqlite::Connection;

use crate::city::resolver::MIN_QUERY_CHARS;
use crate::config::AppConfig;
use crate::db::repository::{CityRepo, CompletionRepo};
use crate::models::{Alert, AppState, PrayerName};
use crate::schedule::{due_alerts, minutes_until, next_prayer, progress, MinuteClock};
use crate::tui::events::{Event, EventHandler, NetEvent};
use crate::tui::notify::{Notifier, Toast};
use crate::tui::theme;
use crate::tui::widgets::{header, next_prayer as next_panel, prayers, progress as progress_bar, search, statusbar, toast};
use crate::tui::worker::Remote;
use crate::utils::format::format_long_date;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Search,
}

#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub suggestions: Vec<String>,
    pub selected: usize,
}

pub struct App {
    pub view: View,
    pub input_mode: InputMode,
    pub config: AppConfig,
    pub state: AppState,
    pub focus_idx: usize,
    pub should_quit: bool,
    pub search: SearchState,
    pub next: Option<PrayerName>,
    pub now: NaiveDateTime,
    pub date_label: String,
    pub toast: Option<Toast>,
    clock: MinuteClock,
    search_seq: u64,
    fetch_seq: u64,
    remote: Remote,
    notifier: Box<dyn Notifier>,
}

impl App {
    /// Purges stale daily records and loads today's state. Nothing remote
    /// happens until [`App::start`].
    pub fn new(
        conn: &Connection,
        config: AppConfig,
        remote: Remote,
        notifier: Box<dyn Notifier>,
        now: NaiveDateTime,
    ) -> Result<Self> {
        let today = now.date();
        CompletionRepo::purge_stale(conn, today)?;
        let completion = CompletionRepo::load(conn, today)?;
        let city = CityRepo::get(conn)?;
        let date_label = format_long_date(today, &config.display.locale);

        Ok(App {
            view: View::Dashboard,
            input_mode: InputMode::Normal,
            config,
            state: AppState::new(today, city, completion),
            focus_idx: 0,
            should_quit: false,
            search: SearchState::default(),
            next: None,
            now,
            date_label,
            toast: None,
            clock: MinuteClock::new(),
            search_seq: 0,
            fetch_seq: 0,
            remote,
            notifier,
        })
    }

    /// Saved city goes straight to a fetch; otherwise try the device position.
    pub fn start(&mut self) {
        match self.state.city.clone() {
            Some(city) => self.request_times(city),
            None => self.remote.locate(),
        }
    }

    fn request_times(&mut self, city: String) {
        self.fetch_seq += 1;
        self.remote.fetch_times(self.fetch_seq, city, self.state.today);
    }

    pub fn on_net(&mut self, event: NetEvent, conn: &Connection) {
        match event {
            NetEvent::Search { seq, result } => {
                if seq != self.search_seq {
                    log::debug!("Dropping stale search result #{}", seq);
                    return;
                }
                match result {
                    Ok(names) => {
                        self.search.suggestions = names;
                        self.search.selected = 0;
                    }
                    Err(e) => log::debug!("City search failed: {}", e),
                }
            }
            NetEvent::Located { result } => match result {
                // a city picked by hand while locating wins
                Ok(Some(_)) if self.state.city.is_some() => {}
                Ok(Some(city)) => {
                    log::info!("Located city: {}", city);
                    if let Err(e) = CityRepo::set(conn, &city) {
                        log::warn!("Could not save city: {}", e);
                    }
                    self.state.city = Some(city.clone());
                    self.request_times(city);
                }
                Ok(None) => log::info!("No city for the device position"),
                Err(e) => log::warn!("Reverse geocoding failed: {}", e),
            },
            NetEvent::Times { seq, result } => {
                if seq != self.fetch_seq {
                    log::debug!("Dropping stale prayer times #{}", seq);
                    return;
                }
                match result {
                    Ok(times) => {
                        if self.state.replace_times(times) {
                            self.refresh_next();
                        }
                    }
                    Err(e) => log::warn!("Prayer times lookup failed: {}", e),
                }
            }
        }
    }

    fn refresh_next(&mut self) {
        let now = self.now.time();
        self.next = self.state.times.as_ref().and_then(|t| next_prayer(t, now));
    }

    pub fn tick(&mut self, now: NaiveDateTime) {
        self.now = now;
        if self.toast.as_ref().is_some_and(|t| t.expired(now)) {
            self.toast = None;
        }
        if let Some(minute) = self.clock.advance(now) {
            self.on_minute(minute);
        }
    }

    fn on_minute(&mut self, minute: NaiveTime) {
        let Some(times) = &self.state.times else {
            return;
        };
        let alerts = due_alerts(
            times,
            &self.state.completion,
            minute,
            self.config.reminders.offset_minutes,
        );
        for alert in alerts {
            self.raise(alert);
        }
        self.refresh_next();
    }

    fn raise(&mut self, alert: Alert) {
        if !self.config.notifications.enabled {
            log::debug!("Notifications disabled, skipping {:?}", alert);
            return;
        }
        let locale = &self.config.display.locale;
        let title = alert.title(locale);
        let body = alert.body(self.config.reminders.offset_minutes, locale);
        self.notifier.notify(title, &body);
        self.toast = Some(Toast {
            title: title.to_string(),
            body,
            raised_at: self.now,
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent, conn: &Connection) {
        // Only handle actual key presses — ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key, conn),
            InputMode::Normal => match self.view {
                View::Dashboard => self.handle_dashboard_key(key, conn),
                View::Help => self.handle_help_key(key),
            },
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent, conn: &Connection) {
        // any key dismisses a visible toast, then acts as usual
        self.toast = None;

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.reset_search();
            }
            KeyCode::Char('r') => {
                if let Some(city) = self.state.city.clone() {
                    self.request_times(city);
                }
            }
            KeyCode::Up => {
                self.focus_idx = self.focus_idx.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.focus_idx + 1 < PrayerName::ALL.len() {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Char('m') | KeyCode::Enter => {
                self.toggle_focused(conn);
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.reset_search();
            }
            KeyCode::Enter => {
                if let Some(city) = self.search.suggestions.get(self.search.selected).cloned() {
                    self.select_city(conn, city);
                }
            }
            KeyCode::Up => {
                self.search.selected = self.search.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.search.selected + 1 < self.search.suggestions.len() {
                    self.search.selected += 1;
                }
            }
            KeyCode::Backspace => {
                self.search.query.pop();
                self.on_query_changed();
            }
            KeyCode::Char(c) => {
                self.search.query.push(c);
                self.on_query_changed();
            }
            _ => {}
        }
    }

    fn reset_search(&mut self) {
        // bumping the sequence orphans any lookup still in flight
        self.search_seq += 1;
        self.search = SearchState::default();
    }

    fn on_query_changed(&mut self) {
        self.search_seq += 1;
        if self.search.query.trim().chars().count() < MIN_QUERY_CHARS {
            self.search.suggestions.clear();
            self.search.selected = 0;
            return;
        }
        self.remote.search(self.search_seq, self.search.query.clone());
    }

    pub fn select_city(&mut self, conn: &Connection, city: String) {
        log::info!("Selected city: {}", city);
        if let Err(e) = CityRepo::set(conn, &city) {
            log::warn!("Could not save city: {}", e);
        }
        self.state.city = Some(city.clone());
        self.input_mode = InputMode::Normal;
        self.reset_search();
        self.request_times(city);
    }

    fn toggle_focused(&mut self, conn: &Connection) {
        let Some(prayer) = PrayerName::ALL.get(self.focus_idx).copied() else {
            return;
        };
        let value = !self.state.completion.is_done(prayer);
        match CompletionRepo::set(conn, self.state.today, prayer, value) {
            Ok(completion) => self.state.completion = completion,
            Err(e) => log::warn!("Could not save {}: {}", prayer, e),
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);

        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }

        if let Some(t) = &self.toast {
            let area = frame.area();
            toast::render(frame, area, t);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Length(3), // search bar
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            self.state.city.as_deref(),
            &self.date_label,
        );

        let searching = self.input_mode == InputMode::Search;
        search::render_bar(frame, outer_chunks[1], &self.search.query, searching);

        statusbar::render(frame, outer_chunks[3], searching);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer_chunks[2]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // prayers
                Constraint::Length(4), // progress
                Constraint::Min(0),
            ])
            .split(columns[0]);

        prayers::render(
            frame,
            left_chunks[0],
            self.state.times.as_ref(),
            &self.state.completion,
            self.next,
            self.focus_idx,
            !searching,
        );
        progress_bar::render(frame, left_chunks[1], progress(&self.state.completion));

        let countdown = match (&self.state.times, self.next) {
            (Some(times), Some(prayer)) => Some((prayer, minutes_until(times, prayer, self.now.time()))),
            _ => None,
        };
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(columns[1]);
        next_panel::render(
            frame,
            right_chunks[0],
            countdown,
            self.state.times.is_some(),
        );

        // Suggestions drop down over the body, right under the search bar
        if searching && !self.search.suggestions.is_empty() {
            let body = outer_chunks[2];
            let height = (self.search.suggestions.len() as u16 + 2).min(body.height);
            let list_area = Rect {
                x: body.x,
                y: body.y,
                width: body.width.min(48),
                height,
            };
            search::render_suggestions(frame, list_area, &self.search.suggestions, self.search.selected);
        }
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        // Center a help box
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let keys = [
            ("  [Space] / m ", "Tick prayer done / undone"),
            ("  [↑ ↓]       ", "Move between prayers"),
            ("  [/]         ", "Search a city"),
            ("  [r]         ", "Reload prayer times"),
            ("  [?]         ", "Toggle help"),
            ("  [Esc] / q   ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in keys {
            help_text.push(Line::from(vec![
                Span::styled(key, theme::gold()),
                Span::styled(label, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(
    conn: Connection,
    config: AppConfig,
    build_remote: impl FnOnce(std::sync::mpsc::Sender<Event>) -> Remote,
    notifier: Box<dyn Notifier>,
) -> Result<()> {
    let events = EventHandler::new(config.reminders.tick_rate_ms);
    let remote = build_remote(events.sender());
    let mut app = App::new(&conn, config, remote, notifier, Local::now().naive_local())?;
    app.start();

    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, &conn);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.tick(Local::now().naive_local());
            }
            Event::Net(net) => {
                app.on_net(net, &conn);
            }
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::resolver::fakes::{CountingLocator, FakeGeocoder, FakeSearch};
    use crate::city::resolver::{CitySearch, Locator, ReverseGeocoder};
    use crate::db::migrations::run_migrations;
    use crate::error::LookupFailure;
    use crate::models::PrayerTimes;
    use crate::prayer_times::provider::fakes::FakeProvider;
    use crate::prayer_times::PrayerTimeProvider;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::Ordering;
    use std::sync::mpsc::{self, Receiver};
    use std::sync::Arc;
    use std::time::Duration;

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Notifier for Recorder {
        fn notify(&mut self, _title: &str, body: &str) {
            self.0.borrow_mut().push(body.to_string());
        }
    }

    struct Harness {
        app: App,
        conn: Connection,
        rx: Receiver<Event>,
        search: Arc<FakeSearch>,
        provider: Arc<FakeProvider>,
        notes: Rc<RefCell<Vec<String>>>,
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn harness(saved_city: Option<&str>, position: Option<(f64, f64)>, now: NaiveDateTime) -> Harness {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        if let Some(city) = saved_city {
            CityRepo::set(&conn, city).unwrap();
        }

        let (tx, rx) = mpsc::channel();
        let search = Arc::new(FakeSearch::default());
        let provider = Arc::new(FakeProvider::new([(5, 0), (12, 0), (15, 0), (18, 0), (20, 0)]));
        let cities: Arc<dyn CitySearch> = search.clone();
        let geocoder: Arc<dyn ReverseGeocoder> = Arc::new(FakeGeocoder::returning(Some("Lyon")));
        let locator: Arc<dyn Locator> = Arc::new(CountingLocator::at(position));
        let times: Arc<dyn PrayerTimeProvider> = provider.clone();
        let remote = Remote::new(cities, geocoder, locator, times, 20, tx);

        let notes = Rc::new(RefCell::new(Vec::new()));
        let app = App::new(
            &conn,
            AppConfig::default(),
            remote,
            Box::new(Recorder(notes.clone())),
            now,
        )
        .unwrap();
        Harness {
            app,
            conn,
            rx,
            search,
            provider,
            notes,
        }
    }

    impl Harness {
        fn pump(&mut self, n: usize) {
            for _ in 0..n {
                match self.rx.recv_timeout(Duration::from_secs(5)).unwrap() {
                    Event::Net(net) => self.app.on_net(net, &self.conn),
                    other => panic!("unexpected event {:?}", other),
                }
            }
        }

        fn key(&mut self, code: KeyCode) {
            self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &self.conn);
        }

        fn type_str(&mut self, s: &str) {
            for c in s.chars() {
                self.key(KeyCode::Char(c));
            }
        }
    }

    #[test]
    fn saved_city_is_fetched_and_next_prayer_highlighted() {
        let mut h = harness(Some("Paris"), None, at(11, 59));
        h.app.start();
        h.pump(1);

        assert_eq!(*h.provider.requested.lock().unwrap(), vec!["Paris".to_string()]);
        assert_eq!(h.app.state.times.as_ref().unwrap().city, "Paris");
        assert_eq!(h.app.next, Some(PrayerName::Dhuhr));
    }

    #[test]
    fn located_city_is_saved_then_fetched() {
        let mut h = harness(None, Some((45.76, 4.84)), at(9, 0));
        h.app.start();
        h.pump(2);

        assert_eq!(CityRepo::get(&h.conn).unwrap().as_deref(), Some("Lyon"));
        assert_eq!(h.app.state.city.as_deref(), Some("Lyon"));
        assert!(h.app.state.times.is_some());
    }

    #[test]
    fn no_city_and_no_position_fetches_nothing() {
        let mut h = harness(None, None, at(9, 0));
        h.app.start();
        h.pump(1);
        assert!(h.app.state.city.is_none());
        assert!(h.provider.requested.lock().unwrap().is_empty());
    }

    #[test]
    fn short_query_does_not_search() {
        let mut h = harness(Some("Paris"), None, at(9, 0));
        h.key(KeyCode::Char('/'));
        h.type_str("L");
        assert_eq!(h.search.calls.load(Ordering::SeqCst), 0);
        assert!(h.rx.try_recv().is_err());
    }

    #[test]
    fn older_search_result_is_dropped() {
        let mut h = harness(Some("Paris"), None, at(9, 0));
        h.key(KeyCode::Char('/'));
        h.type_str("Ly");
        let older = h.app.search_seq;
        h.pump(1);
        h.type_str("o");
        h.pump(1);
        assert_eq!(h.search.calls.load(Ordering::SeqCst), 2);
        assert_eq!(h.app.search.suggestions[0], "Lyo 0");

        // "Ly" answers after "Lyo" already has
        h.app.on_net(
            NetEvent::Search {
                seq: older,
                result: Ok(vec!["Lyon".to_string()]),
            },
            &h.conn,
        );
        assert_eq!(h.app.search.suggestions.len(), 20);
        assert_eq!(h.app.search.suggestions[0], "Lyo 0");
    }

    #[test]
    fn failed_search_keeps_the_previous_suggestions() {
        let mut h = harness(Some("Paris"), None, at(9, 0));
        h.key(KeyCode::Char('/'));
        h.type_str("Ly");
        h.pump(1);
        h.key(KeyCode::Down);

        let current = h.app.search_seq;
        h.app.on_net(
            NetEvent::Search {
                seq: current,
                result: Err(LookupFailure::malformed("unreachable")),
            },
            &h.conn,
        );
        assert_eq!(h.app.search.suggestions.len(), 20);
        assert_eq!(h.app.search.suggestions[0], "Ly 0");
        assert_eq!(h.app.search.selected, 1);
        assert_eq!(h.app.input_mode, InputMode::Search);
    }

    #[test]
    fn picking_a_suggestion_persists_and_fetches() {
        let mut h = harness(Some("Paris"), None, at(9, 0));
        h.key(KeyCode::Char('/'));
        h.type_str("Ly");
        h.pump(1);
        h.key(KeyCode::Down);
        h.key(KeyCode::Enter);
        h.pump(1);

        assert_eq!(CityRepo::get(&h.conn).unwrap().as_deref(), Some("Ly 1"));
        assert_eq!(h.app.input_mode, InputMode::Normal);
        assert!(h.app.search.query.is_empty());
        assert!(h.app.search.suggestions.is_empty());
        assert_eq!(h.app.state.times.as_ref().unwrap().city, "Ly 1");
    }

    #[test]
    fn toggling_writes_through_without_moving_the_highlight() {
        let mut h = harness(Some("Paris"), None, at(11, 59));
        h.app.start();
        h.pump(1);

        h.key(KeyCode::Down); // Dhuhr
        h.key(KeyCode::Char(' '));
        assert!(h.app.state.completion.is_done(PrayerName::Dhuhr));
        assert_eq!(progress(&h.app.state.completion).completed, 1);
        assert_eq!(h.app.next, Some(PrayerName::Dhuhr));

        let stored = CompletionRepo::load(&h.conn, h.app.state.today).unwrap();
        assert!(stored.is_done(PrayerName::Dhuhr));

        h.key(KeyCode::Char(' '));
        assert!(!h.app.state.completion.is_done(PrayerName::Dhuhr));
    }

    #[test]
    fn minute_tick_raises_advance_and_on_time_alerts() {
        let mut h = harness(Some("Paris"), None, at(11, 50));
        h.app.start();
        h.pump(1);

        h.app.tick(at(11, 55));
        h.app.tick(at(11, 55) + chrono::Duration::seconds(30));
        assert_eq!(*h.notes.borrow(), vec!["Dhuhr dans 5 minutes".to_string()]);
        assert!(h.app.toast.is_some());

        h.app.tick(at(12, 0));
        assert_eq!(h.notes.borrow().last().map(String::as_str), Some("Il est l'heure de Dhuhr"));
        assert_eq!(h.app.next, Some(PrayerName::Dhuhr));

        h.app.tick(at(12, 1));
        assert_eq!(h.app.next, Some(PrayerName::Asr));
        assert_eq!(h.notes.borrow().len(), 2);
    }

    #[test]
    fn completed_or_disabled_means_silent() {
        let mut h = harness(Some("Paris"), None, at(11, 50));
        h.app.start();
        h.pump(1);
        h.key(KeyCode::Down);
        h.key(KeyCode::Enter);
        h.app.tick(at(11, 55));
        h.app.tick(at(12, 0));
        assert!(h.notes.borrow().is_empty());

        h.app.config.notifications.enabled = false;
        h.app.tick(at(15, 0));
        assert!(h.notes.borrow().is_empty());
        assert!(h.app.toast.is_none());
    }

    #[test]
    fn older_times_fetch_is_dropped() {
        let mut h = harness(Some("Paris"), None, at(9, 0));
        h.app.start();
        let older = h.app.fetch_seq;
        h.app.select_city(&h.conn, "Nice".to_string());
        h.pump(2);

        // Paris answers after Nice already has
        let date = h.app.state.today;
        let slot = |hour| NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
        h.app.on_net(
            NetEvent::Times {
                seq: older,
                result: Ok(PrayerTimes::new(
                    "Paris",
                    date,
                    [slot(6), slot(13), slot(16), slot(19), slot(21)],
                )),
            },
            &h.conn,
        );
        assert_eq!(h.app.state.times.as_ref().unwrap().city, "Nice");
        assert_eq!(h.app.state.times.as_ref().unwrap().at(PrayerName::Fajr), slot(5));
        assert_eq!(h.app.state.city.as_deref(), Some("Nice"));
    }

    #[test]
    fn late_location_does_not_replace_a_picked_city() {
        let mut h = harness(None, None, at(9, 0));
        h.app.select_city(&h.conn, "Nice".to_string());
        h.pump(1);

        h.app.on_net(
            NetEvent::Located {
                result: Ok(Some("Lyon".to_string())),
            },
            &h.conn,
        );
        assert_eq!(CityRepo::get(&h.conn).unwrap().as_deref(), Some("Nice"));
        assert_eq!(h.app.state.city.as_deref(), Some("Nice"));
        assert_eq!(*h.provider.requested.lock().unwrap(), vec!["Nice".to_string()]);
        assert!(h.rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn key_during_a_toast_dismisses_it_and_still_acts() {
        let mut h = harness(Some("Paris"), None, at(11, 50));
        h.app.start();
        h.pump(1);
        h.app.tick(at(11, 55));
        assert!(h.app.toast.is_some());

        h.key(KeyCode::Down);
        assert!(h.app.toast.is_none());
        assert_eq!(h.app.focus_idx, 1);

        h.key(KeyCode::Char(' '));
        assert!(h.app.state.completion.is_done(PrayerName::Dhuhr));
    }
}
