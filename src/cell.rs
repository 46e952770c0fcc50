use crate::date::within_half_open;
use crate::month::MonthPage;
use crate::weeks::CellContext;
use time::Date;

/// Position of a day inside a multi-date selection, used by renderers to
/// draw a connected bar across the picked interval.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangeState {
    None,
    First,
    Middle,
    Last,
}

/// One cell of the week grid: a day of the page's month, or a padding day
/// borrowed from an adjacent month to complete a row.
///
/// Cells are plain values, built fresh on every grid (re)build and never
/// mutated in place.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DayCell {
    date: Date,
    value: u8,
    current_month: bool,
    selectable: bool,
    selected: bool,
    today: bool,
    highlighted: bool,
    range_state: RangeState,
}

impl DayCell {
    // Derives a cell's full state from the build-time snapshot in `ctx`.
    // Pure: same inputs, same cell.
    pub(crate) fn describe(date: Date, page: &MonthPage, ctx: &CellContext<'_>) -> DayCell {
        let current_month = page.contains(date);
        DayCell {
            date,
            value: date.day(),
            current_month,
            selectable: current_month && within_half_open(date, ctx.min_day, ctx.max_day),
            selected: current_month && ctx.selected.contains(&date),
            today: date == ctx.today,
            highlighted: ctx.highlighted.contains(&date),
            // Padding cells never join a range bar, even when their date
            // duplicates a selected day shown on another page.
            range_state: if current_month {
                ctx.range_state(date)
            } else {
                RangeState::None
            },
        }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    /// Numeric day-of-month, the figure a renderer prints in the cell.
    pub fn day(&self) -> u8 {
        self.value
    }

    pub fn is_current_month(&self) -> bool {
        self.current_month
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_today(&self) -> bool {
        self.today
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn range_state(&self) -> RangeState {
        self.range_state
    }
}
