use time::{Date, Weekday};

/// Locale capabilities the grid computation consumes: which day a week starts
/// on, plus human-readable month and weekday names.
///
/// The core never formats names itself and never reads ambient locale state,
/// so hosts can plug in whatever i18n machinery they already have.
pub trait Localizer {
    fn first_day_of_week(&self) -> Weekday;

    /// Label for the month containing `date`, e.g. "November 2012".
    fn month_label(&self, date: Date) -> String;

    /// Header label for a day-of-week column.
    fn weekday_label(&self, weekday: Weekday) -> String;
}

/// Built-in English locale with Sunday-first weeks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct English;

impl Localizer for English {
    fn first_day_of_week(&self) -> Weekday {
        Weekday::Sunday
    }

    fn month_label(&self, date: Date) -> String {
        format!("{} {}", date.month(), date.year())
    }

    fn weekday_label(&self, weekday: Weekday) -> String {
        let name = match weekday {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        };
        name.to_owned()
    }
}
