use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use gloo_timers::callback::Interval;
use log::{error, info};
use yew::prelude::*;

use crate::config;
use crate::errors::SiteError;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Time left until the target, already split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Anything at or past the target collapses to all zeros.
    pub fn between(target_ms: i64, now_ms: i64) -> Self {
        let delta = target_ms - now_ms;
        if delta < 0 {
            return Self::default();
        }

        Self {
            days: delta / MS_PER_DAY,
            hours: (delta % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (delta % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (delta % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Days, hours, minutes and seconds as zero-padded strings. Days are not
    /// clamped, so a far-off target renders with three or more digits.
    pub fn fields(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

pub fn parse_local_target(raw: &str) -> Result<DateTime<Local>, SiteError> {
    let naive = NaiveDateTime::parse_from_str(raw, config::RACE_START_FORMAT)
        .map_err(|_| SiteError::InvalidDate(raw.to_string()))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| SiteError::InvalidDate(raw.to_string()))
}

/// Repeating one-second tick driving the countdown display.
///
/// The first tick runs synchronously inside `start`. Dropping the ticker
/// cancels the underlying interval just like `stop`.
pub struct CountdownTicker {
    interval: Option<Interval>,
}

impl CountdownTicker {
    pub fn start<F>(mut tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        tick();
        Self {
            interval: Some(Interval::new(config::COUNTDOWN_TICK_MS, tick)),
        }
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    #[prop_or(config::RACE_START.to_string())]
    pub target: String,
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let remaining = use_state(Remaining::default);

    {
        let remaining = remaining.clone();
        use_effect_with_deps(
            move |target: &String| {
                let mut ticker = match parse_local_target(target) {
                    Ok(target) => {
                        info!("Counting down to {}", target);
                        let target_ms = target.timestamp_millis();
                        Some(CountdownTicker::start(move || {
                            let now_ms = Local::now().timestamp_millis();
                            remaining.set(Remaining::between(target_ms, now_ms));
                        }))
                    }
                    Err(err) => {
                        error!("Countdown disabled: {}", err);
                        None
                    }
                };

                move || {
                    if let Some(ticker) = ticker.as_mut() {
                        ticker.stop();
                    }
                }
            },
            props.target.clone(),
        );
    }

    let [days, hours, minutes, seconds] = remaining.fields();

    html! {
        <div class="countdown">
            <div class="countdown-item">
                <span id="days" class="countdown-number">{days}</span>
                <span class="countdown-label">{"Days"}</span>
            </div>
            <div class="countdown-item">
                <span id="hours" class="countdown-number">{hours}</span>
                <span class="countdown-label">{"Hours"}</span>
            </div>
            <div class="countdown-item">
                <span id="minutes" class="countdown-number">{minutes}</span>
                <span class="countdown-label">{"Minutes"}</span>
            </div>
            <div class="countdown-item">
                <span id="seconds" class="countdown-number">{seconds}</span>
                <span class="countdown-label">{"Seconds"}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ms(date: (i32, u32, u32), time: (u32, u32, u32)) -> i64 {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, time.2)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }

    #[test]
    fn test_two_days_before_race() {
        let target = ms((2026, 3, 6), (14, 0, 0));
        let now = ms((2026, 3, 4), (14, 0, 0));
        let remaining = Remaining::between(target, now);
        assert_eq!(remaining.fields(), ["02", "00", "00", "00"]);
    }

    #[test]
    fn test_mixed_units_are_padded() {
        let target = ms((2026, 3, 6), (14, 0, 0));
        let now = ms((2026, 3, 5), (10, 54, 51));
        let remaining = Remaining::between(target, now);
        assert_eq!(remaining.fields(), ["01", "03", "05", "09"]);
    }

    #[test]
    fn test_past_target_renders_zeros() {
        let target = ms((2026, 3, 6), (14, 0, 0));
        for now in [target, target + 1, target + 86_400_000 * 40] {
            assert_eq!(Remaining::between(target, now).fields(), ["00", "00", "00", "00"]);
        }
    }

    #[test]
    fn test_days_are_not_clamped() {
        let remaining = Remaining::between(MS_PER_DAY * 123 + 5, 0);
        assert_eq!(remaining.days, 123);
        assert_eq!(remaining.fields()[0], "123");
    }

    #[test]
    fn test_decomposition_stays_within_one_second() {
        let target = ms((2026, 3, 6), (14, 0, 0));
        for delta in [1, 999, 1_000, 59_999, 3_600_001, 86_399_999, 90_061_500, 777_777_777] {
            let r = Remaining::between(target, target - delta);
            let covered = r.days * MS_PER_DAY
                + r.hours * MS_PER_HOUR
                + r.minutes * MS_PER_MINUTE
                + r.seconds * MS_PER_SECOND;
            assert!(covered <= delta && delta < covered + 1_000, "delta {}", delta);
            assert!(r.hours < 24 && r.minutes < 60 && r.seconds < 60);
            for field in &r.fields()[1..] {
                assert_eq!(field.len(), 2);
            }
        }
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut ticker = CountdownTicker { interval: None };
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_parse_local_target() {
        let target = parse_local_target("2026-03-06 14:00:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2026, 3, 6)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        assert_eq!(target.naive_local(), expected);
    }

    #[test]
    fn test_parse_rejects_malformed_target() {
        assert!(matches!(
            parse_local_target("March 6, 2026 14:00:00"),
            Err(SiteError::InvalidDate(_))
        ));
    }
}
