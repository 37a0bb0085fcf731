use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

#[derive(Debug, PartialEq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "gender", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    #[sqlx(rename = "MAN")]
    Man,
    #[sqlx(rename = "WOMAN")]
    Woman,
}

#[derive(Debug, PartialEq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "looking_for", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum LookingFor {
    #[sqlx(rename = "MEN")]
    Men,
    #[sqlx(rename = "WOMEN")]
    Women,
    #[sqlx(rename = "BOTH")]
    Both,
}

impl LookingFor {
    /// Gender the candidate feed filters on; `Both` means no filter.
    pub fn preferred_gender(&self) -> Option<Gender> {
        match self {
            LookingFor::Men => Some(Gender::Man),
            LookingFor::Women => Some(Gender::Woman),
            LookingFor::Both => None,
        }
    }
}

#[allow(unused)]
#[derive(Debug, Clone, FromRow)]
pub struct ProfileEntity {
    pub id: Uuid,
    pub first_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub bio: Option<String>,
    pub last_latitude: f64,
    pub last_longitude: f64,
    pub looking_for: LookingFor,
    pub search_distance: i32,
    pub age_range_minimum: i32,
    pub age_range_maximum: i32,
    pub swipes_left: i32,
    pub wait_until: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ProfileEntity {
    /// Birth dates whose age falls inside the profile's age range,
    /// oldest bound first. Candidates are kept when their date of birth
    /// lies between the two.
    pub fn birth_date_window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let oldest = today - Months::new(12 * self.age_range_maximum as u32);
        let youngest = today - Months::new(12 * self.age_range_minimum as u32);
        (oldest, youngest)
    }
}
