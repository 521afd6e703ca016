//! Seed booking and schedule data

use super::{Booking, Halt, Schedule};

pub(super) static BOOKINGS: &[Booking] = &[
    Booking {
        pnr: "2154673890",
        train_name: "Rajdhani Express",
        train_number: "12952",
        from_station: "New Delhi",
        to_station: "Mumbai Central",
        journey_date: "25 February 2026",
        status: "Confirmed",
        coach: "A1",
        berth: "23, Lower",
        passenger: "Mr. Ramesh Sharma",
        travel_class: "1A",
    },
    Booking {
        pnr: "4521987630",
        train_name: "Shatabdi Express",
        train_number: "12001",
        from_station: "Bhopal Junction",
        to_station: "New Delhi",
        journey_date: "26 February 2026",
        status: "Waitlisted — WL 4",
        coach: "Not Assigned",
        berth: "Not Assigned",
        passenger: "Ms. Priya Verma",
        travel_class: "CC",
    },
    Booking {
        pnr: "7893214560",
        train_name: "Duronto Express",
        train_number: "12213",
        from_station: "Patna Junction",
        to_station: "Mumbai LTT",
        journey_date: "28 February 2026",
        status: "Confirmed",
        coach: "B3",
        berth: "47, Side Upper",
        passenger: "Mr. Anil Kumar",
        travel_class: "SL",
    },
    Booking {
        pnr: "3347821905",
        train_name: "Vande Bharat Express",
        train_number: "22439",
        from_station: "Varanasi Junction",
        to_station: "New Delhi",
        journey_date: "27 February 2026",
        status: "RAC — RAC 2",
        coach: "C1",
        berth: "RAC 2",
        passenger: "Dr. Sunita Patel",
        travel_class: "CC",
    },
    Booking {
        pnr: "9012345678",
        train_name: "Garib Rath Express",
        train_number: "12216",
        from_station: "Chandigarh",
        to_station: "Mumbai Bandra Terminus",
        journey_date: "01 March 2026",
        status: "Confirmed",
        coach: "GR-3",
        berth: "12, Upper",
        passenger: "Mr. Vikas Singh",
        travel_class: "3A",
    },
];

pub(super) static SCHEDULES: &[Schedule] = &[
    Schedule {
        number: "12952",
        name: "Mumbai Rajdhani Express",
        source: "New Delhi",
        destination: "Mumbai Central",
        departure: "4:55 PM",
        arrival: "8:35 AM (next day)",
        days: "Monday, Wednesday, Friday, Saturday",
        duration: "15 hours 40 minutes",
        halts: &[
            Halt {
                station: "Kota Junction",
                arrival: "9:40 PM",
                departure: "9:45 PM",
            },
            Halt {
                station: "Vadodara Junction",
                arrival: "4:20 AM",
                departure: "4:25 AM",
            },
            Halt {
                station: "Surat",
                arrival: "5:55 AM",
                departure: "5:57 AM",
            },
        ],
    },
    Schedule {
        number: "12001",
        name: "Bhopal Shatabdi Express",
        source: "New Delhi",
        destination: "Bhopal Junction",
        departure: "6:00 AM",
        arrival: "2:30 PM",
        days: "Daily except Tuesday",
        duration: "8 hours 30 minutes",
        halts: &[
            Halt {
                station: "Agra Cantt",
                arrival: "8:19 AM",
                departure: "8:22 AM",
            },
            Halt {
                station: "Gwalior",
                arrival: "9:27 AM",
                departure: "9:29 AM",
            },
            Halt {
                station: "Jhansi",
                arrival: "10:29 AM",
                departure: "10:32 AM",
            },
            Halt {
                station: "Lalitpur",
                arrival: "11:05 AM",
                departure: "11:07 AM",
            },
        ],
    },
    // Duronto services make no intermediate commercial halts
    Schedule {
        number: "12213",
        name: "Patna Duronto Express",
        source: "Patna Junction",
        destination: "Mumbai LTT",
        departure: "3:30 PM",
        arrival: "10:00 AM (next day)",
        days: "Tuesday, Thursday, Sunday",
        duration: "18 hours 30 minutes",
        halts: &[],
    },
    Schedule {
        number: "22439",
        name: "Vande Bharat Express",
        source: "New Delhi",
        destination: "Varanasi Junction",
        departure: "8:00 AM",
        arrival: "2:00 PM",
        days: "Daily except Wednesday",
        duration: "8 hours",
        halts: &[Halt {
            station: "Prayagraj Junction",
            arrival: "12:48 PM",
            departure: "12:50 PM",
        }],
    },
    Schedule {
        number: "12216",
        name: "Garib Rath Express",
        source: "Chandigarh",
        destination: "Mumbai Bandra Terminus",
        departure: "9:10 PM",
        arrival: "11:50 PM (next day)",
        days: "Monday, Friday",
        duration: "26 hours 40 minutes",
        halts: &[
            Halt {
                station: "Ambala Cantt",
                arrival: "10:09 PM",
                departure: "10:12 PM",
            },
            Halt {
                station: "New Delhi",
                arrival: "12:55 AM",
                departure: "1:10 AM",
            },
            Halt {
                station: "Mathura Junction",
                arrival: "3:00 AM",
                departure: "3:02 AM",
            },
            Halt {
                station: "Kota Junction",
                arrival: "7:15 AM",
                departure: "7:18 AM",
            },
            Halt {
                station: "Vadodara Junction",
                arrival: "3:40 PM",
                departure: "3:45 PM",
            },
        ],
    },
];
