//! Fixed-capacity timetable storage
//!
//! Rows are appended through [`TimetableBuilder`] during startup only.
//! The builder never sorts: the literal data must already be in departure
//! order, and [`TimetableBuilder::finish`] rejects it otherwise.

use heapless::Vec;

use super::record::{DepartureRecord, TimetableRow};
use crate::error::ConfigError;

/// Maximum number of departures in a timetable
pub const TIMETABLE_CAPACITY: usize = 50;

/// Immutable, time-sorted, non-empty list of departures
#[derive(Debug, Clone)]
pub struct TimetableStore {
    rows: Vec<DepartureRecord, TIMETABLE_CAPACITY>,
}

impl TimetableStore {
    /// Build a store from literal rows, validating every row
    pub fn from_rows(rows: &[TimetableRow]) -> Result<Self, ConfigError> {
        let mut builder = TimetableBuilder::new();
        for (index, row) in rows.iter().enumerate() {
            builder.push(row.to_record(index)?)?;
        }
        builder.finish()
    }

    /// Number of departures
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a finished store; kept for slice-like ergonomics
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the last departure of the day
    pub fn last_index(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&DepartureRecord> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DepartureRecord> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[DepartureRecord] {
        &self.rows
    }

    pub const fn capacity(&self) -> usize {
        TIMETABLE_CAPACITY
    }
}

/// Startup-only builder with a bounds-checked append
#[derive(Debug, Default)]
pub struct TimetableBuilder {
    rows: Vec<DepartureRecord, TIMETABLE_CAPACITY>,
}

impl TimetableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a departure, returning the new row count
    pub fn push(&mut self, record: DepartureRecord) -> Result<usize, ConfigError> {
        self.rows
            .push(record)
            .map_err(|_| ConfigError::CapacityExceeded)?;
        Ok(self.rows.len())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check the rows and freeze them into a store
    pub fn finish(self) -> Result<TimetableStore, ConfigError> {
        if self.rows.is_empty() {
            return Err(ConfigError::Empty);
        }
        if let Some(index) = self
            .rows
            .windows(2)
            .position(|pair| pair[1].minute_of_day() < pair[0].minute_of_day())
        {
            return Err(ConfigError::Unsorted { index: index + 1 });
        }
        Ok(TimetableStore { rows: self.rows })
    }
}

/// Check literal rows at compile time
///
/// Performs the same checks as [`TimetableStore::from_rows`] so the station
/// data can be asserted in a `const` block and a bad table fails the build.
pub const fn check_rows(rows: &[TimetableRow]) -> Result<(), ConfigError> {
    if rows.is_empty() {
        return Err(ConfigError::Empty);
    }
    if rows.len() > TIMETABLE_CAPACITY {
        return Err(ConfigError::CapacityExceeded);
    }
    let mut i = 0;
    while i < rows.len() {
        if rows[i].hours >= 24 || rows[i].minutes >= 60 {
            return Err(ConfigError::InvalidTime { index: i });
        }
        if i > 0 && rows[i].minute_of_day() < rows[i - 1].minute_of_day() {
            return Err(ConfigError::Unsorted { index: i });
        }
        i += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::MessageId;

    fn row(hours: u8, minutes: u8, platform: u8, message: MessageId) -> TimetableRow {
        TimetableRow::new(hours, minutes, platform, message)
    }

    #[test]
    fn test_build_small_table() {
        let rows = [
            row(6, 0, 5, MessageId::RE22),
            row(7, 45, 1, MessageId::IC35),
            row(7, 59, 3, MessageId::IC34),
        ];
        let store = TimetableStore::from_rows(&rows).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.last_index(), 2);
        assert_eq!(store.get(0).unwrap().minute_of_day(), 360);
        assert_eq!(store.get(1).unwrap().minute_of_day(), 465);
        assert_eq!(store.get(2).unwrap().minute_of_day(), 479);
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_equal_times_are_sorted() {
        let rows = [
            row(9, 45, 4, MessageId::RB88),
            row(9, 45, 2, MessageId::RB89),
        ];
        assert!(TimetableStore::from_rows(&rows).is_ok());
    }

    #[test]
    fn test_unsorted_table_rejected() {
        let rows = [
            row(6, 0, 5, MessageId::RE22),
            row(7, 59, 3, MessageId::IC34),
            row(7, 45, 1, MessageId::IC35),
        ];
        assert_eq!(
            TimetableStore::from_rows(&rows).unwrap_err(),
            ConfigError::Unsorted { index: 2 }
        );
        assert_eq!(check_rows(&rows), Err(ConfigError::Unsorted { index: 2 }));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(
            TimetableStore::from_rows(&[]).unwrap_err(),
            ConfigError::Empty
        );
        assert_eq!(check_rows(&[]), Err(ConfigError::Empty));
    }

    #[test]
    fn test_invalid_time_rejected() {
        let rows = [row(6, 0, 5, MessageId::RE22), row(6, 75, 5, MessageId::RE22)];
        assert_eq!(
            TimetableStore::from_rows(&rows).unwrap_err(),
            ConfigError::InvalidTime { index: 1 }
        );
        assert_eq!(check_rows(&rows), Err(ConfigError::InvalidTime { index: 1 }));
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut builder = TimetableBuilder::new();
        for i in 0..TIMETABLE_CAPACITY {
            let record = DepartureRecord::new(i as u8 / 4, 0, 1, MessageId::RB11).unwrap();
            assert_eq!(builder.push(record), Ok(i + 1));
        }

        let extra = DepartureRecord::new(23, 0, 1, MessageId::RB12).unwrap();
        assert_eq!(builder.push(extra), Err(ConfigError::CapacityExceeded));
        assert_eq!(builder.len(), TIMETABLE_CAPACITY);
        assert_eq!(builder.finish().unwrap().len(), TIMETABLE_CAPACITY);
    }

    #[test]
    fn test_check_rows_rejects_oversized_table() {
        let rows = [row(12, 0, 1, MessageId::RB11); TIMETABLE_CAPACITY + 1];
        assert_eq!(check_rows(&rows), Err(ConfigError::CapacityExceeded));
        assert_eq!(
            TimetableStore::from_rows(&rows).unwrap_err(),
            ConfigError::CapacityExceeded
        );
    }
}
