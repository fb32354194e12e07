use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Calendar date. Components are stored as given; nothing here checks that
/// the month or day actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Date {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Most significant component first.
    pub const fn as_tuple(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.as_tuple().cmp(&other.as_tuple())
    }

    pub fn equals(&self, other: &Self) -> bool {
        self.as_tuple() == other.as_tuple()
    }

    /// `YYYY-MM-DD`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // fill goes before the sign: -5 at width 4 is "00-5"
        write!(
            f,
            "{:0>4}-{:0>2}-{:0>2}",
            self.year.to_string(),
            self.month.to_string(),
            self.day.to_string()
        )
    }
}

/// Time of day, hours and minutes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Time {
    pub hours: i32,
    pub minutes: i32,
}

impl Time {
    pub const fn new(hours: i32, minutes: i32) -> Self {
        Self { hours, minutes }
    }

    pub const fn as_tuple(&self) -> (i32, i32) {
        (self.hours, self.minutes)
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.as_tuple().cmp(&other.as_tuple())
    }

    pub fn equals(&self, other: &Self) -> bool {
        self.as_tuple() == other.as_tuple()
    }

    /// `HH:MM`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0>2}:{:0>2}",
            self.hours.to_string(),
            self.minutes.to_string()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineTicket {
    pub from: String,
    pub to: String,
    pub airline: String,
    pub departure_date: Date,
    pub departure_time: Time,
    pub arrival_date: Date,
    pub arrival_time: Time,
    pub price: i32,
}
