use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::modules::profile::schema::{Gender, LookingFor, ProfileEntity};

fn birth_date_in_past(date_of_birth: &NaiveDate) -> Result<(), ValidationError> {
    if *date_of_birth < chrono::Utc::now().date_naive() {
        Ok(())
    } else {
        Err(ValidationError::new("date_of_birth_must_be_in_the_past"))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationBody {
    #[validate(length(min = 2, max = 20, message = "The first name must be 2 to 20 characters"))]
    pub first_name: String,
    #[validate(custom(function = birth_date_in_past))]
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    #[validate(length(max = 500, message = "The bio can't be longer than 500 characters"))]
    pub bio: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "The latitude must be between -90 and 90"))]
    pub last_latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "The longitude must be between -180 and 180"
    ))]
    pub last_longitude: f64,
    pub looking_for: LookingFor,
    #[validate(range(min = 1, max = 100, message = "The search distance must be between 1 and 100"))]
    pub search_distance: i32,
    #[validate(range(min = 18, max = 100, message = "The minimum age must be between 18 and 100"))]
    pub age_range_minimum: i32,
    #[validate(range(min = 18, max = 100, message = "The maximum age must be between 18 and 100"))]
    pub age_range_maximum: i32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileBody {
    #[validate(length(max = 500, message = "The bio can't be longer than 500 characters"))]
    pub bio: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "The latitude must be between -90 and 90"))]
    pub last_latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "The longitude must be between -180 and 180"
    ))]
    pub last_longitude: f64,
    pub looking_for: LookingFor,
    #[validate(range(min = 1, max = 100, message = "The search distance must be between 1 and 100"))]
    pub search_distance: i32,
    #[validate(range(min = 18, max = 100, message = "The minimum age must be between 18 and 100"))]
    pub age_range_minimum: i32,
    #[validate(range(min = 18, max = 100, message = "The maximum age must be between 18 and 100"))]
    pub age_range_maximum: i32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LocationBody {
    #[validate(range(min = -90.0, max = 90.0, message = "The latitude must be between -90 and 90"))]
    pub last_latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "The longitude must be between -180 and 180"
    ))]
    pub last_longitude: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
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

impl From<ProfileEntity> for ProfileResponse {
    fn from(entity: ProfileEntity) -> Self {
        ProfileResponse {
            id: entity.id,
            first_name: entity.first_name,
            date_of_birth: entity.date_of_birth,
            gender: entity.gender,
            bio: entity.bio,
            last_latitude: entity.last_latitude,
            last_longitude: entity.last_longitude,
            looking_for: entity.looking_for,
            search_distance: entity.search_distance,
            age_range_minimum: entity.age_range_minimum,
            age_range_maximum: entity.age_range_maximum,
            swipes_left: entity.swipes_left,
            wait_until: entity.wait_until,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipesLeftResponse {
    pub swipes_left: i32,
}

/// Raw candidate projection: age and distance come computed from the query.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub first_name: String,
    pub age: i32,
    pub gender: Gender,
    pub bio: Option<String>,
    pub distance: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    pub id: Uuid,
    pub first_name: String,
    pub age: i32,
    pub gender: Gender,
    pub bio: Option<String>,
    pub distance_away: i32,
}

impl From<CandidateRow> for CandidateResponse {
    fn from(row: CandidateRow) -> Self {
        CandidateResponse {
            id: row.id,
            first_name: row.first_name,
            age: row.age,
            gender: row.gender,
            bio: row.bio,
            distance_away: row.distance as i32,
        }
    }
}

pub struct InsertProfile {
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
}

pub struct UpdateProfile {
    pub bio: Option<String>,
    pub last_latitude: f64,
    pub last_longitude: f64,
    pub looking_for: LookingFor,
    pub search_distance: i32,
    pub age_range_minimum: i32,
    pub age_range_maximum: i32,
}
