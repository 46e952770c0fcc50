use crate::cell::{DayCell, RangeState};
use crate::date::{day_offset, month0, span, WeekdayExt};
use crate::month::MonthPage;
use time::{Date, Weekday};

pub const DAYS_IN_WEEK: usize = 7;

/// One display row of the grid: exactly seven day cells, ordered from the
/// locale's first day of week.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeekRow([DayCell; DAYS_IN_WEEK]);

impl WeekRow {
    pub fn days(&self) -> &[DayCell; DAYS_IN_WEEK] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayCell> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a WeekRow {
    type Item = &'a DayCell;
    type IntoIter = std::slice::Iter<'a, DayCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Snapshot of the picker state a grid build reads: week start, bounds,
/// today, the selection and highlight sets, and the selection's min/max
/// span (computed once per build rather than once per cell).
#[derive(Clone, Copy, Debug)]
pub(crate) struct CellContext<'a> {
    pub(crate) week_start: Weekday,
    pub(crate) min_day: Date,
    /// Exclusive upper bound of the selectable interval.
    pub(crate) max_day: Date,
    pub(crate) today: Date,
    pub(crate) selected: &'a [Date],
    pub(crate) highlighted: &'a [Date],
    selection_span: Option<(Date, Date)>,
}

impl<'a> CellContext<'a> {
    pub(crate) fn new(
        week_start: Weekday,
        min_day: Date,
        max_day: Date,
        today: Date,
        selected: &'a [Date],
        highlighted: &'a [Date],
    ) -> CellContext<'a> {
        // Range bars only exist for multi-date selections.
        let selection_span = if selected.len() > 1 {
            span(selected)
        } else {
            None
        };
        CellContext {
            week_start,
            min_day,
            max_day,
            today,
            selected,
            highlighted,
            selection_span,
        }
    }

    // First beats Last when the selection collapses to a single distinct day.
    pub(crate) fn range_state(&self, date: Date) -> RangeState {
        match self.selection_span {
            Some((first, _)) if date == first => RangeState::First,
            Some((_, last)) if date == last => RangeState::Last,
            Some((first, last)) if first < date && date < last => RangeState::Middle,
            _ => RangeState::None,
        }
    }
}

/// Builds the week grid for one month page.
///
/// Starts from the first cell of the month's first display row (walking back
/// across the month boundary as far as the locale's week start requires) and
/// emits rows of seven days until the month, plus whatever trailing padding
/// completes its final row, is covered.
pub(crate) fn build_weeks(page: &MonthPage, ctx: &CellContext<'_>) -> Vec<WeekRow> {
    let first = page.first();
    let mut offset = i32::from(ctx.week_start.index0()) - i32::from(first.weekday().index0());
    if offset > 0 {
        offset -= 7;
    }
    let mut rows = Vec::new();
    let Some(mut cursor) = day_offset(first, offset) else {
        return rows;
    };
    while row_continues(cursor, page) {
        log::trace!("building week row starting at {cursor}");
        let mut cells = Vec::with_capacity(DAYS_IN_WEEK);
        let mut next = Some(cursor);
        for _ in 0..DAYS_IN_WEEK {
            let Some(day) = next else { break };
            cells.push(DayCell::describe(day, page, ctx));
            next = day.next_day();
        }
        let Ok(cells) = <[DayCell; DAYS_IN_WEEK]>::try_from(cells) else {
            // Ran off the end of representable time mid-row.
            break;
        };
        rows.push(WeekRow(cells));
        let Some(following) = next else {
            break;
        };
        cursor = following;
    }
    rows
}

// A row is emitted while its first day has not moved past the target month.
// The month test alone never terminates a December page; the year test does,
// right after the trailing January padding row.
fn row_continues(cursor: Date, page: &MonthPage) -> bool {
    (i32::from(month0(cursor.month())) <= i32::from(page.month0()) || cursor.year() < page.year())
        && cursor.year() <= page.year()
}
