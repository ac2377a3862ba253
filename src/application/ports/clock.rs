use chrono::{DateTime, Duration, NaiveTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Half-open bounds `[00:00, next 00:00)` of the current UTC calendar day.
    fn today_bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.now().date_naive().and_time(NaiveTime::MIN).and_utc();
        (start, start + Duration::days(1))
    }
}

#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_today_bounds_cover_the_utc_day() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 59).unwrap());
        let (start, end) = clock.today_bounds();

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_midnight_starts_a_new_day() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap());
        let (start, _) = clock.today_bounds();

        assert_eq!(start, clock.now());
    }
}
