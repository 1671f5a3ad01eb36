//! Timetable model
//!
//! A timetable is a short, time-sorted list of departures that is built once
//! at startup from the compiled-in station data and never changes afterwards.

pub mod messages;
pub mod record;
pub mod station;
pub mod store;

pub use messages::{message_text, MessageId, MAX_MESSAGE_LEN, UNKNOWN_MESSAGE};
pub use record::{minutes_from_hr_min, split_minute_of_day, DepartureRecord, TimetableRow, MINUTES_PER_DAY};
pub use station::{build, DATA_VERSION, STATION_ROWS};
pub use store::{check_rows, TimetableBuilder, TimetableStore, TIMETABLE_CAPACITY};
