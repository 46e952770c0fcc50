//! Locale-aware month & week grid computation for selectable date pickers.
//!
//! Given an inclusive minimum and exclusive maximum instant plus a
//! [`Localizer`], a [`CalendarPicker`] partitions the range into months and
//! 7-cell week rows, each cell carrying its selection, range, highlight,
//! today, and selectability state.  Rendering, paging, and input policy stay
//! with the host; this crate only computes.
//!
//! ```
//! use pickcal::{CalendarPicker, English, RangeState};
//! use time::macros::{date, datetime};
//!
//! let mut picker = CalendarPicker::new(
//!     datetime!(2012-11-16 17:15 UTC),
//!     datetime!(2013-11-16 4:30 UTC),
//!     date!(2012 - 11 - 16),
//!     English,
//! )?;
//! assert_eq!(picker.months().len(), 13);
//! assert_eq!(picker.months()[0].page().label(), "November 2012");
//!
//! picker.select(date!(2013 - 01 - 05));
//! picker.select(date!(2013 - 01 - 10));
//! let january = &picker.months()[2];
//! let cell = january
//!     .weeks()
//!     .iter()
//!     .flat_map(|week| week.iter())
//!     .find(|cell| cell.date() == date!(2013 - 01 - 07))
//!     .unwrap();
//! assert_eq!(cell.range_state(), RangeState::Middle);
//! # Ok::<(), pickcal::RangeError>(())
//! ```

mod cell;
mod date;
mod locale;
mod month;
mod picker;
mod select;
mod weeks;

pub use crate::cell::{DayCell, RangeState};
pub use crate::locale::{English, Localizer};
pub use crate::month::MonthPage;
pub use crate::picker::{CalendarPicker, MonthGrid, RangeError};
pub use crate::weeks::{WeekRow, DAYS_IN_WEEK};
