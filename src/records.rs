//! Read-only booking and schedule records
//!
//! Lookups are total: an unknown key is `None`, never an error.

mod tables;

use serde::Serialize;

/// Length of a PNR number
pub const PNR_LENGTH: usize = 10;
/// Length of a train number
pub const TRAIN_NUMBER_LENGTH: usize = 5;

/// A passenger booking, keyed by its 10-digit PNR
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub pnr: &'static str,
    pub train_name: &'static str,
    pub train_number: &'static str,
    pub from_station: &'static str,
    pub to_station: &'static str,
    pub journey_date: &'static str,
    pub status: &'static str,
    pub coach: &'static str,
    pub berth: &'static str,
    pub passenger: &'static str,
    pub travel_class: &'static str,
}

/// An intermediate commercial halt on a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Halt {
    pub station: &'static str,
    pub arrival: &'static str,
    pub departure: &'static str,
}

/// A train timetable, keyed by its 5-digit train number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub number: &'static str,
    pub name: &'static str,
    pub source: &'static str,
    pub destination: &'static str,
    pub departure: &'static str,
    pub arrival: &'static str,
    pub days: &'static str,
    pub duration: &'static str,
    pub halts: &'static [Halt],
}

/// Source of booking and schedule records
pub trait RecordStore: Send + Sync {
    fn lookup_booking(&self, pnr: &str) -> Option<Booking>;

    fn lookup_schedule(&self, train_number: &str) -> Option<Schedule>;
}

/// Records compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticRecords;

#[cfg(test)]
impl StaticRecords {
    /// All known PNR numbers
    pub fn booking_keys(self) -> Vec<&'static str> {
        tables::BOOKINGS.iter().map(|b| b.pnr).collect()
    }

    /// All known train numbers
    pub fn schedule_keys(self) -> Vec<&'static str> {
        tables::SCHEDULES.iter().map(|s| s.number).collect()
    }
}

impl RecordStore for StaticRecords {
    fn lookup_booking(&self, pnr: &str) -> Option<Booking> {
        let pnr = pnr.trim();
        tables::BOOKINGS.iter().find(|b| b.pnr == pnr).cloned()
    }

    fn lookup_schedule(&self, train_number: &str) -> Option<Schedule> {
        let train_number = train_number.trim();
        tables::SCHEDULES
            .iter()
            .find(|s| s.number == train_number)
            .cloned()
    }
}
