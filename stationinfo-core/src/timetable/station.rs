//! Compiled-in station timetable
//!
//! Edit [`STATION_ROWS`] and rebuild to change the board. Rows must stay in
//! departure order; the `const` check below fails the build otherwise.

use super::messages::MessageId;
use super::record::TimetableRow;
use super::store::{check_rows, TimetableStore};
use crate::error::ConfigError;

/// Timetable data version, logged at startup
pub const DATA_VERSION: u8 = 1;

const fn row(hours: u8, minutes: u8, platform: u8, message: MessageId) -> TimetableRow {
    TimetableRow::new(hours, minutes, platform, message)
}

/// Departures in time order: time, platform, train
pub const STATION_ROWS: &[TimetableRow] = &[
    row(6, 0, 5, MessageId::RE22),
    row(7, 45, 1, MessageId::IC35),
    row(7, 59, 3, MessageId::IC34),
    row(8, 10, 2, MessageId::NO_BOARD),
    row(8, 32, 5, MessageId::RE23),
    row(9, 45, 4, MessageId::RB88),
    row(10, 3, 1, MessageId::RB89),
    row(12, 25, 5, MessageId::RE22),
    row(13, 45, 1, MessageId::RE23),
    row(13, 59, 3, MessageId::IC34),
    row(14, 10, 2, MessageId::IC35),
    row(14, 32, 5, MessageId::RE23),
    row(14, 45, 4, MessageId::RB88),
    row(15, 3, 1, MessageId::RB89),
    row(16, 10, 2, MessageId::NO_SERVICE),
    row(16, 32, 5, MessageId::RE23),
    row(17, 36, 4, MessageId::RB88),
    row(18, 3, 1, MessageId::RB89),
];

const _: () = assert!(check_rows(STATION_ROWS).is_ok(), "station timetable invalid");

/// Build the station timetable
pub fn build() -> Result<TimetableStore, ConfigError> {
    TimetableStore::from_rows(STATION_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_table_builds() {
        let store = build().unwrap();
        assert_eq!(store.len(), 18);
        assert_eq!(store.get(0).unwrap().time(), (6, 0));
        assert_eq!(store.get(store.last_index()).unwrap().time(), (18, 3));
    }

    #[test]
    fn test_station_messages_are_known() {
        let store = build().unwrap();
        for record in store.iter() {
            assert_ne!(record.message().text(), crate::timetable::UNKNOWN_MESSAGE);
        }
    }
}
