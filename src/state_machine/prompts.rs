//! Fixed phrasings spoken to the caller

use crate::records::{Booking, Schedule};

pub const GREETING: &str = "Namaste!";

pub const MAIN_MENU: &str = "Welcome to I.R.C.T.C. Passenger Services. \
    Press 1 for P.N.R. Status. \
    Press 2 for Train Information. \
    Press 9 to exit.";

pub const PNR_GATHER: &str =
    "Please enter your 10-digit P.N.R. number, followed by the hash key.";

pub const TRAIN_GATHER: &str =
    "Please enter the 5-digit train number, followed by the hash key.";

pub const PNR_OPTIONS: &str = "To check another P.N.R., press 1. \
    To return to the main menu, press 2. \
    To exit, press 9.";

pub const TRAIN_OPTIONS: &str = "To check another train, press 1. \
    To return to the main menu, press 2. \
    To exit, press 9.";

pub const PNR_NOT_FOUND: &str = "Sorry, no record was found for the P.N.R. number you entered. \
    Please check the number and try again.";

pub const TRAIN_NOT_FOUND: &str =
    "Sorry, no information was found for the train number you entered. \
    Please verify the number and try again.";

pub const INVALID_INPUT: &str = "Sorry, I did not understand your input. Please try again.";

pub const GOODBYE: &str = "Thank you for using I.R.C.T.C. Passenger Services. \
    Have a comfortable journey. Goodbye!";

/// Read a number one digit at a time: "12952" becomes "1 2 9 5 2"
pub fn spell_digits(number: &str) -> String {
    let mut spelled = String::with_capacity(number.len() * 2);
    for (i, c) in number.chars().enumerate() {
        if i > 0 {
            spelled.push(' ');
        }
        spelled.push(c);
    }
    spelled
}

pub fn booking_status(booking: &Booking) -> String {
    format!(
        "P.N.R. number {pnr}. \
         Passenger: {passenger}. \
         Train: {train}, number {number}. \
         Status: {status}. \
         Class: {class}. Coach: {coach}, Berth: {berth}. \
         Journey date: {date}. \
         From {from} to {to}.",
        pnr = spell_digits(booking.pnr),
        passenger = booking.passenger,
        train = booking.train_name,
        number = spell_digits(booking.train_number),
        status = booking.status,
        class = booking.travel_class,
        coach = booking.coach,
        berth = booking.berth,
        date = booking.journey_date,
        from = booking.from_station,
        to = booking.to_station,
    )
}

pub fn schedule_info(schedule: &Schedule) -> String {
    let mut text = format!(
        "Train number {number}, {name}. \
         Runs from {source} to {destination}. \
         Departure: {departure}. Arrival: {arrival}. \
         Journey time: {duration}. \
         Days of operation: {days}.",
        number = spell_digits(schedule.number),
        name = schedule.name,
        source = schedule.source,
        destination = schedule.destination,
        departure = schedule.departure,
        arrival = schedule.arrival,
        duration = schedule.duration,
        days = schedule.days,
    );

    if !schedule.halts.is_empty() {
        let halts: Vec<String> = schedule
            .halts
            .iter()
            .enumerate()
            .map(|(i, halt)| {
                format!(
                    "Halt {}: {}, arrives {}, departs {}",
                    i + 1,
                    halt.station,
                    halt.arrival,
                    halt.departure
                )
            })
            .collect();
        text.push_str(&format!(" Schedule: {}.", halts.join(". ")));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{RecordStore, StaticRecords};

    #[test]
    fn test_spell_digits() {
        assert_eq!(spell_digits("2154673890"), "2 1 5 4 6 7 3 8 9 0");
        assert_eq!(spell_digits("7"), "7");
        assert_eq!(spell_digits(""), "");
    }

    #[test]
    fn test_booking_status_reads_every_field() {
        let booking = StaticRecords.lookup_booking("7893214560").unwrap();
        let text = booking_status(&booking);
        assert!(text.starts_with("P.N.R. number 7 8 9 3 2 1 4 5 6 0."));
        for field in [
            "Mr. Anil Kumar",
            "Duronto Express",
            "1 2 2 1 3",
            "Confirmed",
            "SL",
            "B3",
            "47, Side Upper",
            "28 February 2026",
            "Patna Junction",
            "Mumbai LTT",
        ] {
            assert!(text.contains(field), "missing {field:?} in {text:?}");
        }
    }

    #[test]
    fn test_schedule_info_lists_halts_in_order() {
        let schedule = StaticRecords.lookup_schedule("12001").unwrap();
        let text = schedule_info(&schedule);
        assert!(text.contains(
            "Schedule: Halt 1: Agra Cantt, arrives 8:19 AM, departs 8:22 AM. Halt 2: Gwalior"
        ));
        assert!(text.ends_with("Halt 4: Lalitpur, arrives 11:05 AM, departs 11:07 AM."));
    }

    #[test]
    fn test_schedule_info_without_halts_has_no_schedule_section() {
        let schedule = StaticRecords.lookup_schedule("12213").unwrap();
        let text = schedule_info(&schedule);
        assert!(!text.contains("Schedule:"));
        assert!(text.ends_with("Days of operation: Tuesday, Thursday, Sunday."));
    }
}
