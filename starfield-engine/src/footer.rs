// footer.rs - Copyright year

use chrono::{DateTime, Datelike, TimeZone};

pub fn year_text<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.year().to_string()
}
