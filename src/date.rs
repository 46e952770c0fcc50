use time::{Date, Month, OffsetDateTime, Weekday};

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u8;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }
}

/// Discards the time-of-day of an instant, yielding its wall-clock calendar
/// day in the instant's own offset.  Two normalized instants compare equal
/// exactly when they denote the same calendar day.
pub(crate) fn normalize(instant: OffsetDateTime) -> Date {
    instant.date()
}

// `lo <= date < hi`
pub(crate) fn within_half_open(date: Date, lo: Date, hi: Date) -> bool {
    (lo..hi).contains(&date)
}

// Single-pass min/max scan.  The slice is left untouched, so callers may keep
// relying on its insertion order.
pub(crate) fn span(dates: &[Date]) -> Option<(Date, Date)> {
    let (&first, rest) = dates.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &d| (lo.min(d), hi.max(d))),
    )
}

/// Zero-based month index (January is 0).
pub(crate) fn month0(month: Month) -> u8 {
    u8::from(month) - 1
}

pub(crate) fn first_of_month(date: Date) -> Date {
    Date::from_calendar_date(date.year(), date.month(), 1).unwrap_or(date)
}

pub(crate) fn first_of_next_month(date: Date) -> Option<Date> {
    let (year, month) = match date.month() {
        Month::December => (date.year().checked_add(1)?, Month::January),
        m => (date.year(), m.next()),
    };
    Date::from_calendar_date(year, month, 1).ok()
}

// Steps `days` forwards (or backwards, if negative) through the calendar,
// returning `None` past the ends of representable time.
pub(crate) fn day_offset(date: Date, days: i32) -> Option<Date> {
    let julian = date.to_julian_day().checked_add(days)?;
    Date::from_julian_day(julian).ok()
}
