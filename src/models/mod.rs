pub mod schedule;

pub use schedule::{ScheduleDocument, WeekBody};
