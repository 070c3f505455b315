use super::PrayerName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// The prayer's minute has arrived.
    OnTime,
    /// The reminder offset before the prayer's minute.
    Advance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub prayer: PrayerName,
}

fn is_french(locale: &str) -> bool {
    locale.trim().to_lowercase().starts_with("fr")
}

impl Alert {
    pub fn title(&self, locale: &str) -> &'static str {
        if is_french(locale) {
            "Rappel Salat"
        } else {
            "Salat reminder"
        }
    }

    pub fn body(&self, offset_minutes: u32, locale: &str) -> String {
        let french = is_french(locale);
        match (self.kind, french) {
            (AlertKind::OnTime, true) => format!("Il est l'heure de {}", self.prayer),
            (AlertKind::OnTime, false) => format!("It is time for {}", self.prayer),
            (AlertKind::Advance, true) => format!("{} dans {} minutes", self.prayer, offset_minutes),
            (AlertKind::Advance, false) => format!("{} in {} minutes", self.prayer, offset_minutes),
        }
    }
}
