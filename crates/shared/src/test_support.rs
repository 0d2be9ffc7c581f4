//! Fixture builders for tests in this and dependent crates.

use crate::domain::{
    DateOfBirth, EmployeeRecord, Location, PersonName, Picture, Postcode, Street,
};

pub fn employee(first: &str, last: &str) -> EmployeeRecord {
    let slug = format!("{}.{}", first.to_lowercase(), last.to_lowercase());
    EmployeeRecord {
        name: PersonName {
            title: "Mx".to_string(),
            first: first.to_string(),
            last: last.to_string(),
        },
        email: format!("{slug}@example.com"),
        phone: "(555) 010-0199".to_string(),
        cell: "(555) 010-0100".to_string(),
        picture: Picture {
            large: format!("https://randomuser.me/api/portraits/{slug}.jpg"),
            medium: String::new(),
            thumbnail: String::new(),
        },
        location: Location {
            street: Street {
                number: 42,
                name: "Main St".to_string(),
            },
            city: "Springfield".to_string(),
            state: "Oregon".to_string(),
            country: "United States".to_string(),
            postcode: Postcode("97403".to_string()),
        },
        dob: DateOfBirth {
            date: "1990-05-03T08:12:44.120Z".to_string(),
            age: 34,
        },
        login: None,
        nat: Some("US".to_string()),
    }
}
