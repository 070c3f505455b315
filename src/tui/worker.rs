use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;

use crate::city::resolver::{self, CitySearch, Locator, ReverseGeocoder};
use crate::prayer_times::PrayerTimeProvider;
use crate::tui::events::{Event, NetEvent};

/// Runs each remote lookup on its own thread and posts the outcome back as an
/// [`Event::Net`]. Requests are never cancelled; the UI decides whether a
/// late answer still matters.
#[derive(Clone)]
pub struct Remote {
    pub cities: Arc<dyn CitySearch>,
    pub geocoder: Arc<dyn ReverseGeocoder>,
    pub locator: Arc<dyn Locator>,
    pub provider: Arc<dyn PrayerTimeProvider>,
    pub search_limit: usize,
    tx: Sender<Event>,
}

impl Remote {
    pub fn new(
        cities: Arc<dyn CitySearch>,
        geocoder: Arc<dyn ReverseGeocoder>,
        locator: Arc<dyn Locator>,
        provider: Arc<dyn PrayerTimeProvider>,
        search_limit: usize,
        tx: Sender<Event>,
    ) -> Self {
        Self {
            cities,
            geocoder,
            locator,
            provider,
            search_limit,
            tx,
        }
    }

    fn post(tx: &Sender<Event>, event: NetEvent) {
        if tx.send(Event::Net(event)).is_err() {
            log::debug!("UI loop gone, dropping remote result");
        }
    }

    pub fn search(&self, seq: u64, query: String) {
        let cities = Arc::clone(&self.cities);
        let limit = self.search_limit;
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = resolver::search(cities.as_ref(), &query, limit);
            Self::post(&tx, NetEvent::Search { seq, result });
        });
    }

    /// Device position → city. Posts `Ok(None)` when no position is available.
    pub fn locate(&self) {
        let locator = Arc::clone(&self.locator);
        let geocoder = Arc::clone(&self.geocoder);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = match locator.current_position() {
                Some((lat, lon)) => resolver::resolve_from_coordinates(geocoder.as_ref(), lat, lon),
                None => Ok(None),
            };
            Self::post(&tx, NetEvent::Located { result });
        });
    }

    pub fn fetch_times(&self, seq: u64, city: String, date: NaiveDate) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = provider.fetch(&city, date);
            Self::post(&tx, NetEvent::Times { seq, result });
        });
    }
}
