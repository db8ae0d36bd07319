use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::schema::{likes, profiles};

mod lenient;

// --- Profile ---

/// A stored profile. Credentials never leave the service: the password hash
/// is skipped on serialization.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Insertable, AsChangeset, Serialize)]
#[diesel(table_name = profiles)]
pub struct Profile {
    pub id: Uuid,
    pub name: Option<String>,
    pub age: Option<i32>,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub religion: Option<String>,
    pub occupation: Option<String>,
    pub qualification: Option<String>,
    pub hobbies: Option<String>,
    #[serde(rename = "maritalStatus")]
    pub marital_status: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub time_of_birth: Option<String>,
    pub p_gender: Option<String>,
    pub p_age: Option<i32>,
    pub p_height: Option<f64>,
    pub p_religion: Option<String>,
    pub p_occupation: Option<String>,
    pub p_qualification: Option<String>,
    #[serde(rename = "p_maritalStatus")]
    pub p_marital_status: Option<String>,
    pub p_place: Option<String>,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The partner-preference half of a profile, compared field by field when
/// computing matches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartnerPreferences {
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub religion: Option<String>,
    pub occupation: Option<String>,
    pub qualification: Option<String>,
    pub marital_status: Option<String>,
    pub place: Option<String>,
}

impl Profile {
    pub fn preferences(&self) -> PartnerPreferences {
        PartnerPreferences {
            gender: self.p_gender.clone(),
            age: self.p_age,
            height: self.p_height,
            religion: self.p_religion.clone(),
            occupation: self.p_occupation.clone(),
            qualification: self.p_qualification.clone(),
            marital_status: self.p_marital_status.clone(),
            place: self.p_place.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfileRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub age: Option<i32>,
    #[serde(default, rename = "imageURL", alias = "imageUrl")]
    pub image_url: Option<String>,
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub height: Option<f64>,
    pub religion: Option<String>,
    pub occupation: Option<String>,
    pub qualification: Option<String>,
    pub hobbies: Option<String>,
    #[serde(default, rename = "maritalStatus")]
    pub marital_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub birthdate: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub time_of_birth: Option<String>,
    pub p_gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub p_age: Option<i32>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub p_height: Option<f64>,
    pub p_religion: Option<String>,
    pub p_occupation: Option<String>,
    pub p_qualification: Option<String>,
    #[serde(default, rename = "p_maritalStatus")]
    pub p_marital_status: Option<String>,
    pub p_place: Option<String>,
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl CreateProfileRequest {
    /// Builds the record to insert. `password_hash` must already be hashed.
    pub fn into_profile(self, password_hash: String) -> Profile {
        let now = Utc::now();
        Profile {
            id: Uuid::now_v7(),
            name: self.name,
            age: self.age,
            image_url: self.image_url,
            gender: self.gender,
            height: self.height,
            religion: self.religion,
            occupation: self.occupation,
            qualification: self.qualification,
            hobbies: self.hobbies,
            marital_status: self.marital_status,
            birthdate: self.birthdate,
            birthplace: self.birthplace,
            time_of_birth: self.time_of_birth,
            p_gender: self.p_gender,
            p_age: self.p_age,
            p_height: self.p_height,
            p_religion: self.p_religion,
            p_occupation: self.p_occupation,
            p_qualification: self.p_qualification,
            p_marital_status: self.p_marital_status,
            p_place: self.p_place,
            username: self.username,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update. Credentials cannot be changed through it.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub age: Option<i32>,
    #[serde(default, rename = "imageURL", alias = "imageUrl")]
    pub image_url: Option<String>,
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub height: Option<f64>,
    pub religion: Option<String>,
    pub occupation: Option<String>,
    pub qualification: Option<String>,
    pub hobbies: Option<String>,
    #[serde(default, rename = "maritalStatus")]
    pub marital_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub birthdate: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub time_of_birth: Option<String>,
    pub p_gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub p_age: Option<i32>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub p_height: Option<f64>,
    pub p_religion: Option<String>,
    pub p_occupation: Option<String>,
    pub p_qualification: Option<String>,
    #[serde(default, rename = "p_maritalStatus")]
    pub p_marital_status: Option<String>,
    pub p_place: Option<String>,
}

/// Values that count as "set" for a partial update. Empty strings and zero
/// never overwrite a stored value.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for i32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for NaiveDate {
    fn is_truthy(&self) -> bool {
        true
    }
}

fn overwrite_if_truthy<T: Truthy>(slot: &mut Option<T>, incoming: Option<T>) {
    if let Some(value) = incoming.filter(T::is_truthy) {
        *slot = Some(value);
    }
}

impl UpdateProfileRequest {
    pub fn apply_to(self, profile: &mut Profile) {
        overwrite_if_truthy(&mut profile.name, self.name);
        overwrite_if_truthy(&mut profile.age, self.age);
        overwrite_if_truthy(&mut profile.image_url, self.image_url);
        overwrite_if_truthy(&mut profile.gender, self.gender);
        overwrite_if_truthy(&mut profile.height, self.height);
        overwrite_if_truthy(&mut profile.religion, self.religion);
        overwrite_if_truthy(&mut profile.occupation, self.occupation);
        overwrite_if_truthy(&mut profile.qualification, self.qualification);
        overwrite_if_truthy(&mut profile.hobbies, self.hobbies);
        overwrite_if_truthy(&mut profile.marital_status, self.marital_status);
        overwrite_if_truthy(&mut profile.birthdate, self.birthdate);
        overwrite_if_truthy(&mut profile.birthplace, self.birthplace);
        overwrite_if_truthy(&mut profile.time_of_birth, self.time_of_birth);
        overwrite_if_truthy(&mut profile.p_gender, self.p_gender);
        overwrite_if_truthy(&mut profile.p_age, self.p_age);
        overwrite_if_truthy(&mut profile.p_height, self.p_height);
        overwrite_if_truthy(&mut profile.p_religion, self.p_religion);
        overwrite_if_truthy(&mut profile.p_occupation, self.p_occupation);
        overwrite_if_truthy(&mut profile.p_qualification, self.p_qualification);
        overwrite_if_truthy(&mut profile.p_marital_status, self.p_marital_status);
        overwrite_if_truthy(&mut profile.p_place, self.p_place);
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// --- Like ---

/// Directed edge: `profile_id` liked `liked_profile_id`.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Insertable, Serialize)]
#[diesel(table_name = likes)]
pub struct Like {
    pub id: Uuid,
    #[serde(rename = "likedProfileId")]
    pub liked_profile_id: Uuid,
    #[serde(rename = "profileId")]
    pub profile_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(profile_id: Uuid, liked_profile_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            liked_profile_id,
            profile_id,
            created_at: Utc::now(),
        }
    }
}
