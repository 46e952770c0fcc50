use crate::date::{first_of_month, month0};
use time::Date;

/// One calendar month of the pickable range.
///
/// Month and year identify the page uniquely; the label comes from the
/// injected [`Localizer`](crate::Localizer) and is recomputed when the locale
/// changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthPage {
    month: u8,
    year: i32,
    first: Date,
    label: String,
}

impl MonthPage {
    pub(crate) fn new(date: Date, label: String) -> MonthPage {
        let first = first_of_month(date);
        MonthPage {
            month: month0(first.month()),
            year: first.year(),
            first,
            label,
        }
    }

    /// Zero-based month index (January is 0).
    pub fn month0(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// First day of the month, the page's representative date.
    pub fn first(&self) -> Date {
        self.first
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn relabel(&mut self, label: String) {
        self.label = label;
    }

    /// Whether `date` falls inside this calendar month.
    pub fn contains(&self, date: Date) -> bool {
        month0(date.month()) == self.month && date.year() == self.year
    }

    // Linear month ordinal, used to intersect pages with date spans.
    pub(crate) fn key(&self) -> i64 {
        month_key(self.first)
    }
}

pub(crate) fn month_key(date: Date) -> i64 {
    i64::from(date.year()) * 12 + i64::from(month0(date.month()))
}
