use chrono::{Datelike, Duration, NaiveDate, Utc};

/// Current calendar date in UTC. No local timezone is ever consulted.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Monday and Sunday of the week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
    let sunday = monday + Duration::days(6);
    (monday, sunday)
}
