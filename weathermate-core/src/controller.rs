//! View state for a single search form.
//!
//! The controller is synchronous: [`ViewController::submit`] hands out a
//! [`Ticket`] for the lookup it wants performed, and the caller reports the
//! outcome back through [`ViewController::resolve`]. Only the most recently
//! issued ticket can change the state, so a slow response for an older query
//! never overwrites a newer one.

use tracing::debug;

use crate::{
    WeatherError, WeatherRecord,
    error::MSG_EMPTY_CITY,
    provider::validate_city,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading { city: String },
    Success(WeatherRecord),
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        match self {
            ViewState::Success(record) => Some(record),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading { .. } => "loading",
            ViewState::Success(_) => "success",
            ViewState::Failed(_) => "failed",
        }
    }
}

/// Permission to perform one lookup and report its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    city: String,
}

impl Ticket {
    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; the validation notice is set and nothing should be fetched.
    Rejected,
    /// Same city is already loading, or blank input while loading.
    Ignored,
    /// Fetch `ticket.city()` and pass the result to [`ViewController::resolve`].
    Started(Ticket),
}

#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    notice: Option<&'static str>,
    generation: u64,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self { state: ViewState::Idle, notice: None, generation: 0 }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Validation message left by a blank submission, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Message to display: the validation notice, or the failure message.
    pub fn error_message(&self) -> Option<&str> {
        match (&self.notice, &self.state) {
            (Some(notice), _) => Some(*notice),
            (None, ViewState::Failed(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn submit(&mut self, input: &str) -> Submission {
        let city = match validate_city(input) {
            Ok(city) => city,
            Err(_) if self.state.is_loading() => return Submission::Ignored,
            Err(_) => {
                self.notice = Some(MSG_EMPTY_CITY);
                return Submission::Rejected;
            }
        };

        if let ViewState::Loading { city: in_flight } = &self.state {
            if in_flight == city {
                debug!(city, "ignoring duplicate submission while loading");
                return Submission::Ignored;
            }
        }

        self.generation += 1;
        self.notice = None;
        self.transition(ViewState::Loading { city: city.to_string() });

        Submission::Started(Ticket { generation: self.generation, city: city.to_string() })
    }

    /// Apply the outcome of `ticket`'s lookup. Returns `false` and leaves the
    /// state untouched if a newer submission has been made since.
    pub fn resolve(&mut self, ticket: &Ticket, result: Result<WeatherRecord, WeatherError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                city = %ticket.city,
                ticket = ticket.generation,
                latest = self.generation,
                "dropping stale response"
            );
            return false;
        }

        let next = match result {
            Ok(record) => ViewState::Success(record),
            Err(err) => {
                debug!(city = %ticket.city, error = %err, "lookup failed");
                ViewState::Failed(err.user_message().to_string())
            }
        };
        self.transition(next);
        true
    }

    fn transition(&mut self, next: ViewState) {
        debug!(from = self.state.name(), to = next.name(), "view state transition");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        category::Category,
        error::{MSG_NOT_FOUND, MSG_RETRY_LATER},
        model::Observation,
    };

    fn record(city: &str, temp: f64) -> WeatherRecord {
        WeatherRecord::from_observation(Observation {
            city: city.into(),
            country_code: "XX".into(),
            temperature_c: temp,
            feels_like_c: temp,
            condition_main: "Clear".into(),
            condition_description: "clear sky".into(),
            condition_icon_code: "01d".into(),
            humidity_pct: 50,
            wind_speed_mps: 1.0,
            observed_at: None,
        })
    }

    fn started(submission: Submission) -> Ticket {
        match submission {
            Submission::Started(ticket) => ticket,
            other => panic!("expected Started, got {other:?}"),
        }
    }

    #[test]
    fn starts_idle() {
        let vc = ViewController::new();
        assert_eq!(vc.state(), &ViewState::Idle);
        assert!(vc.error_message().is_none());
    }

    #[test]
    fn blank_input_is_rejected_and_keeps_state() {
        let mut vc = ViewController::new();

        assert_eq!(vc.submit(""), Submission::Rejected);
        assert_eq!(vc.state(), &ViewState::Idle);
        assert_eq!(vc.error_message(), Some("Please enter a city name"));

        let ticket = started(vc.submit("Oslo"));
        assert!(vc.resolve(&ticket, Ok(record("Oslo", 3.0))));

        assert_eq!(vc.submit("   "), Submission::Rejected);
        assert_eq!(vc.state().record().map(|r| r.city.as_str()), Some("Oslo"));
        assert_eq!(vc.notice(), Some(MSG_EMPTY_CITY));
    }

    #[test]
    fn valid_submit_clears_notice_and_loads() {
        let mut vc = ViewController::new();
        vc.submit(" ");

        let ticket = started(vc.submit("  Paris  "));

        assert_eq!(ticket.city(), "Paris");
        assert_eq!(vc.state(), &ViewState::Loading { city: "Paris".into() });
        assert!(vc.notice().is_none());
    }

    #[test]
    fn success_stores_record() {
        let mut vc = ViewController::new();
        let ticket = started(vc.submit("London"));

        assert!(vc.resolve(&ticket, Ok(record("London", 18.4))));

        let rec = vc.state().record().unwrap();
        assert_eq!(rec.temperature_category, Category::Mild);
        assert!(vc.error_message().is_none());
    }

    #[test]
    fn failure_clears_record_and_sets_message() {
        let mut vc = ViewController::new();
        let ticket = started(vc.submit("London"));
        vc.resolve(&ticket, Ok(record("London", 18.0)));

        let ticket = started(vc.submit("Nowhereville"));
        vc.resolve(&ticket, Err(WeatherError::NotFound { city: "Nowhereville".into() }));

        assert!(vc.state().record().is_none());
        assert_eq!(vc.state(), &ViewState::Failed(MSG_NOT_FOUND.to_string()));
        assert!(vc.error_message().unwrap().contains("not found"));
    }

    #[test]
    fn provider_failure_shows_retry_message() {
        let mut vc = ViewController::new();
        let ticket = started(vc.submit("London"));
        vc.resolve(&ticket, Err(WeatherError::Provider { status: 500, body: String::new() }));

        assert_eq!(vc.error_message(), Some(MSG_RETRY_LATER));
    }

    #[test]
    fn duplicate_submission_while_loading_is_ignored() {
        let mut vc = ViewController::new();
        let first = started(vc.submit("Paris"));

        assert_eq!(vc.submit("Paris"), Submission::Ignored);
        assert_eq!(vc.submit(""), Submission::Ignored);
        assert!(vc.notice().is_none());

        assert!(vc.resolve(&first, Ok(record("Paris", 22.0))));
    }

    #[test]
    fn newer_submission_wins_over_stale_response() {
        let mut vc = ViewController::new();
        let paris = started(vc.submit("Paris"));
        let tokyo = started(vc.submit("Tokyo"));

        assert!(vc.resolve(&tokyo, Ok(record("Tokyo", 27.0))));
        assert!(!vc.resolve(&paris, Ok(record("Paris", 12.0))));

        assert_eq!(vc.state().record().unwrap().city, "Tokyo");
    }

    #[test]
    fn stale_failure_does_not_clear_newer_success() {
        let mut vc = ViewController::new();
        let paris = started(vc.submit("Paris"));
        let tokyo = started(vc.submit("Tokyo"));

        vc.resolve(&tokyo, Ok(record("Tokyo", 27.0)));
        vc.resolve(&paris, Err(WeatherError::Parse("bad".into())));

        assert_eq!(vc.state().record().unwrap().city, "Tokyo");
    }

    #[test]
    fn machine_is_reentrant() {
        let mut vc = ViewController::new();
        for i in 0..5 {
            let ticket = started(vc.submit(&format!("City {i}")));
            let result = if i % 2 == 0 {
                Ok(record("X", f64::from(i) * 7.0))
            } else {
                Err(WeatherError::Parse("bad".into()))
            };
            assert!(vc.resolve(&ticket, result));
            assert!(!vc.state().is_loading());
        }
    }
}
