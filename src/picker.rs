use crate::date::{first_of_month, first_of_next_month, month0, normalize, span};
use crate::locale::Localizer;
use crate::month::{month_key, MonthPage};
use crate::select::DateSet;
use crate::weeks::{build_weeks, CellContext, WeekRow, DAYS_IN_WEEK};
use thiserror::Error;
use time::{Date, OffsetDateTime};

/// Rejected range bounds.  Raised synchronously by [`CalendarPicker::new`];
/// nothing else in the crate can fail.
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub enum RangeError {
    /// A bound sits exactly on the zero Unix epoch instant, which in
    /// practice means an unset value was passed through.
    #[error("range bounds must not be at the zero epoch")]
    ZeroEpoch,
    /// The minimum bound does not fall strictly before the maximum.
    #[error("minimum date must be before maximum date")]
    Unordered,
}

/// One month of the grid: its descriptor plus the week rows that render it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGrid {
    page: MonthPage,
    weeks: Vec<WeekRow>,
}

impl MonthGrid {
    pub fn page(&self) -> &MonthPage {
        &self.page
    }

    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }
}

/// Core state of a date picker: the pickable range partitioned into months
/// of week rows, plus the selection and highlight sets the cells reflect.
///
/// Everything is computed over explicit state: "today" is a parameter rather
/// than a clock read, and every (re)build is synchronous and bounded.  A
/// single control thread is assumed; there is no interior synchronization.
#[derive(Clone, Debug)]
pub struct CalendarPicker<L> {
    localizer: L,
    today: Date,
    min_day: Date,
    /// Exclusive: the day after the last selectable one.
    max_day: Date,
    months: Vec<MonthGrid>,
    selected: DateSet,
    highlighted: DateSet,
}

impl<L: Localizer> CalendarPicker<L> {
    /// Initializes the pickable range `[min, max)`.
    ///
    /// Time-of-day on both bounds is ignored.  `max` is exclusive: a bound
    /// of 2013-11-16 4:30am makes 2013-11-15 the last selectable day, and a
    /// bound falling on the first instant of a month keeps that whole month
    /// out of the grid.
    pub fn new(
        min: OffsetDateTime,
        max: OffsetDateTime,
        today: Date,
        localizer: L,
    ) -> Result<CalendarPicker<L>, RangeError> {
        if min.unix_timestamp() == 0 || max.unix_timestamp() == 0 {
            return Err(RangeError::ZeroEpoch);
        }
        if min >= max {
            return Err(RangeError::Unordered);
        }
        let mut picker = CalendarPicker {
            localizer,
            today,
            min_day: normalize(min),
            max_day: normalize(max),
            months: Vec::new(),
            selected: DateSet::new(),
            highlighted: DateSet::new(),
        };
        picker.reinit();
        Ok(picker)
    }

    // Rebuilds the month list from the bounds.  The exclusive max steps back
    // one day first, so a max on the first of a month contributes no page.
    fn reinit(&mut self) {
        self.months.clear();
        let Some(last) = self.max_day.previous_day() else {
            return;
        };
        let max_month = i32::from(month0(last.month()));
        let max_year = last.year();
        let mut cursor = first_of_month(self.min_day);
        // The month test alone never terminates within a year; the year
        // clauses do, and the cap at max_year + 1 bounds the walk at the
        // December -> January rollover.
        while (i32::from(month0(cursor.month())) <= max_month || cursor.year() < max_year)
            && cursor.year() < max_year + 1
        {
            let label = self.localizer.month_label(cursor);
            log::debug!("adding month {label}");
            let page = MonthPage::new(cursor, label);
            let weeks = build_weeks(&page, &self.snapshot());
            self.months.push(MonthGrid { page, weeks });
            let Some(next) = first_of_next_month(cursor) else {
                break;
            };
            cursor = next;
        }
    }

    fn snapshot(&self) -> CellContext<'_> {
        CellContext::new(
            self.localizer.first_day_of_week(),
            self.min_day,
            self.max_day,
            self.today,
            self.selected.as_slice(),
            self.highlighted.as_slice(),
        )
    }

    // Regenerates the week rows of every month `affected` matches.
    fn rebuild_where<F>(&mut self, affected: F)
    where
        F: Fn(&MonthPage) -> bool,
    {
        let CalendarPicker {
            localizer,
            today,
            min_day,
            max_day,
            months,
            selected,
            highlighted,
        } = self;
        let ctx = CellContext::new(
            localizer.first_day_of_week(),
            *min_day,
            *max_day,
            *today,
            selected.as_slice(),
            highlighted.as_slice(),
        );
        for grid in &mut *months {
            if affected(&grid.page) {
                grid.weeks = build_weeks(&grid.page, &ctx);
            }
        }
    }

    // Months whose cells could change when `touched` dates move in or out
    // of a set, plus every month the selection span crossed before or after
    // the change (range bars reach across whole months).  A touched date is
    // visible on its own page and possibly as padding on the page either
    // side of it.
    fn rebuild_touched(&mut self, touched: &[Date], spans: &[Option<(Date, Date)>]) {
        let touched_keys: Vec<i64> = touched.iter().copied().map(month_key).collect();
        let span_keys: Vec<(i64, i64)> = spans
            .iter()
            .flatten()
            .map(|&(lo, hi)| (month_key(lo), month_key(hi)))
            .collect();
        self.rebuild_where(|page| {
            let key = page.key();
            touched_keys.iter().any(|&k| (key - k).abs() <= 1)
                || span_keys.iter().any(|&(lo, hi)| lo <= key && key <= hi)
        });
    }

    fn selection_span(&self) -> Option<(Date, Date)> {
        let dates = self.selected.as_slice();
        if dates.len() > 1 {
            span(dates)
        } else {
            None
        }
    }

    /// Adds `date` to the selection set, returning `false` if it was
    /// already selected.
    ///
    /// Eligibility (capacity, within-bounds) is the host's policy: an
    /// out-of-range date still lands in the set and shows as selected
    /// without becoming selectable, so filter before calling.
    pub fn select(&mut self, date: Date) -> bool {
        let before = self.selection_span();
        if !self.selected.insert(date) {
            return false;
        }
        self.rebuild_touched(&[date], &[before, self.selection_span()]);
        true
    }

    /// Drops `date` from the selection set, returning `false` if it was not
    /// selected.
    pub fn deselect(&mut self, date: Date) -> bool {
        let before = self.selection_span();
        if !self.selected.remove(date) {
            return false;
        }
        self.rebuild_touched(&[date], &[before, self.selection_span()]);
        true
    }

    /// Empties the selection set.
    pub fn clear_selection(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let before = self.selection_span();
        let touched: Vec<Date> = self.selected.as_slice().to_vec();
        self.selected.clear();
        self.rebuild_touched(&touched, &[before]);
    }

    /// Replaces the highlight set wholesale.
    pub fn set_highlighted<I>(&mut self, dates: I)
    where
        I: IntoIterator<Item = Date>,
    {
        let mut touched: Vec<Date> = self.highlighted.as_slice().to_vec();
        self.highlighted.replace(dates);
        touched.extend_from_slice(self.highlighted.as_slice());
        self.rebuild_touched(&touched, &[]);
    }

    /// Moves the "today" marker, rebuilding the months it leaves and enters.
    pub fn set_today(&mut self, today: Date) {
        if self.today == today {
            return;
        }
        let touched = [self.today, today];
        self.today = today;
        self.rebuild_touched(&touched, &[]);
    }

    /// Swaps in a different locale: every month is relabeled and the grid
    /// rebuilt, since the first day of week may have moved as well.
    pub fn set_locale(&mut self, localizer: L) {
        self.localizer = localizer;
        let CalendarPicker {
            localizer, months, ..
        } = self;
        for grid in &mut *months {
            grid.page.relabel(localizer.month_label(grid.page.first()));
        }
        self.rebuild_where(|_| true);
    }

    /// Recomputes one month's week rows from explicit inputs, leaving the
    /// picker untouched.  `today` is a parameter so hosts can pin the clock
    /// in tests.
    pub fn rebuild_month(
        &self,
        page: &MonthPage,
        selected: &[Date],
        highlighted: &[Date],
        today: Date,
    ) -> Vec<WeekRow> {
        let ctx = CellContext::new(
            self.localizer.first_day_of_week(),
            self.min_day,
            self.max_day,
            today,
            selected,
            highlighted,
        );
        build_weeks(page, &ctx)
    }

    /// The grid: every month intersecting the range, in chronological order.
    pub fn months(&self) -> &[MonthGrid] {
        &self.months
    }

    /// Selected days in the order they were picked.
    pub fn selected_dates(&self) -> &[Date] {
        self.selected.as_slice()
    }

    pub fn highlighted_dates(&self) -> &[Date] {
        self.highlighted.as_slice()
    }

    pub fn today(&self) -> Date {
        self.today
    }

    /// Earliest selectable day (the inclusive bound of the range).
    pub fn first_selectable_day(&self) -> Date {
        self.min_day
    }

    /// The day before the exclusive maximum bound, i.e. the latest day that
    /// can be selectable.
    pub fn last_selectable_day(&self) -> Option<Date> {
        self.max_day.previous_day()
    }

    /// Seven weekday header labels, starting from the locale's first day of
    /// week.
    pub fn weekday_labels(&self) -> Vec<String> {
        let mut weekday = self.localizer.first_day_of_week();
        let mut labels = Vec::with_capacity(DAYS_IN_WEEK);
        for _ in 0..DAYS_IN_WEEK {
            labels.push(self.localizer.weekday_label(weekday));
            weekday = weekday.next();
        }
        labels
    }
}
