use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

impl PersonName {
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: i64,
    pub name: String,
}

/// randomuser.me sends numeric postcodes for some nationalities and strings
/// (e.g. "EC1A 1BB") for others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Postcode(pub String);

impl<'de> Deserialize<'de> for Postcode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Postcode(text),
            Raw::Number(number) => Postcode(number.to_string()),
        })
    }
}

impl std::fmt::Display for Postcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub country: String,
    pub postcode: Postcode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    /// ISO 8601 timestamp, e.g. `1990-05-03T08:12:44.120Z`.
    pub date: String,
    #[serde(default)]
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub uuid: Uuid,
}

/// One profile as returned by the random user API. Never mutated after fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: PersonName,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub cell: String,
    pub picture: Picture,
    pub location: Location,
    pub dob: DateOfBirth,
    #[serde(default)]
    pub login: Option<Login>,
    #[serde(default)]
    pub nat: Option<String>,
}

impl EmployeeRecord {
    pub fn full_name(&self) -> String {
        self.name.full()
    }

    /// "number, street, city, state postcode"
    pub fn full_address(&self) -> String {
        let loc = &self.location;
        format!(
            "{}, {}, {}, {} {}",
            loc.street.number, loc.street.name, loc.city, loc.state, loc.postcode
        )
    }

    pub fn city_state(&self) -> String {
        format!("{}, {}", self.location.city, self.location.state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    #[serde(default)]
    pub seed: String,
    #[serde(default)]
    pub results: usize,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<EmployeeRecord>,
    #[serde(default)]
    pub info: Option<ResponseInfo>,
}
