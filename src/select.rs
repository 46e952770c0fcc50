use time::Date;

/// Insertion-ordered set of calendar days.
///
/// Keeps the order dates were picked in, so hosts can tell "first picked"
/// apart from "range-earliest", while refusing duplicates.  Lookups are
/// linear; selections are at most a handful of dates.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct DateSet(Vec<Date>);

impl DateSet {
    pub(crate) fn new() -> DateSet {
        DateSet(Vec::new())
    }

    /// Returns `false` if `date` was already present.
    pub(crate) fn insert(&mut self, date: Date) -> bool {
        if self.contains(date) {
            false
        } else {
            self.0.push(date);
            true
        }
    }

    /// Returns `false` if `date` was not present.
    pub(crate) fn remove(&mut self, date: Date) -> bool {
        let Some(i) = self.0.iter().position(|&d| d == date) else {
            return false;
        };
        self.0.remove(i);
        true
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    /// Replaces the whole set, keeping the first occurrence of any duplicate.
    pub(crate) fn replace<I: IntoIterator<Item = Date>>(&mut self, dates: I) {
        self.0.clear();
        for date in dates {
            self.insert(date);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn as_slice(&self) -> &[Date] {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
