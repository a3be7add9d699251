use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Coarse role of an account. Admins implicitly hold every capability;
/// regular users carry explicit permission flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Admin,
    User,
}

/// Fine-grained capability flags. Only meaningful for `Profile::User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Permissions {
    pub can_access_vaccination: bool,
    pub can_access_reports: bool,
    pub can_manage_pets: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub profile: Profile,
    pub active: bool,
    #[serde(default)]
    pub permissions: Permissions,
    /// Last successful login (RFC 3339), if any.
    #[serde(default)]
    pub last_login: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.profile == Profile::Admin
    }

    pub fn can_access_vaccinations(&self) -> bool {
        self.is_admin() || self.permissions.can_access_vaccination
    }

    pub fn can_manage_pets(&self) -> bool {
        self.is_admin() || self.permissions.can_manage_pets
    }

    pub fn can_access_reports(&self) -> bool {
        self.is_admin() || self.permissions.can_access_reports
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn label(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }

    pub fn parse(value: &str) -> Option<Species> {
        match value {
            "dog" => Some(Species::Dog),
            "cat" => Some(Species::Cat),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    /// ISO date (YYYY-MM-DD).
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub weight: Option<f64>,
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
    pub owner_email: Option<String>,
}

/// Minimal pet reference the backend embeds in vaccination records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaccination {
    pub id: i64,
    pub pet_id: i64,
    pub vaccine_name: String,
    pub vaccine_type: Option<String>,
    pub dose_number: Option<u32>,
    /// ISO date (YYYY-MM-DD).
    pub application_date: String,
    pub next_dose_date: Option<String>,
    pub weight_at_vaccination: Option<f64>,
    pub veterinarian: Option<String>,
    pub batch_number: Option<String>,
    pub observations: Option<String>,
    #[serde(default)]
    pub pet: Option<PetRef>,
}

/// One row of the upcoming-vaccination report (fixed 30-day window,
/// filtered server-side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub pet_name: String,
    pub vaccine_name: String,
    pub next_dose_date: String,
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
}

// --- Auth contract ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCheckResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Error body every mutating endpoint returns on non-2xx.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// --- Mutation payloads ---

/// Create/update body for a pet. Optionals serialize as explicit nulls,
/// matching what the backend expects for cleared fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetPayload {
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub weight: Option<f64>,
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
    pub owner_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationPayload {
    pub vaccine_name: String,
    pub vaccine_type: Option<String>,
    pub dose_number: Option<u32>,
    pub application_date: String,
    pub next_dose_date: Option<String>,
    pub weight_at_vaccination: Option<f64>,
    pub veterinarian: Option<String>,
    pub batch_number: Option<String>,
    pub observations: Option<String>,
}

/// Create/update body for a user account.
///
/// `password` is present only when creating, or when editing with a
/// non-empty replacement typed in (absent means "keep the current one").
/// The permission flags are present only for `Profile::User`; admins get
/// every capability implicitly and the flags are not sent at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub profile: Profile,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_access_vaccination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_access_reports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_pets: Option<bool>,
}

// --- Date display helpers ---

/// Format an ISO date (YYYY-MM-DD) for table display, falling back to the
/// raw value if it does not parse.
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Format an RFC 3339 timestamp (e.g. `last_login`) for display.
pub fn format_date_time(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(ts) => ts.format("%b %d, %Y %H:%M").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_user(permissions: Permissions) -> User {
        User {
            id: 2,
            username: "clerk".to_string(),
            email: "clerk@example.com".to_string(),
            profile: Profile::User,
            active: true,
            permissions,
            last_login: None,
        }
    }

    #[test]
    fn test_admin_implies_all_capabilities() {
        let admin = User {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            profile: Profile::Admin,
            active: true,
            permissions: Permissions::default(),
            last_login: None,
        };

        assert!(admin.is_admin());
        assert!(admin.can_access_vaccinations());
        assert!(admin.can_manage_pets());
        assert!(admin.can_access_reports());
    }

    #[test]
    fn test_user_capabilities_follow_flags() {
        let user = plain_user(Permissions {
            can_access_vaccination: true,
            can_access_reports: false,
            can_manage_pets: false,
        });

        assert!(!user.is_admin());
        assert!(user.can_access_vaccinations());
        assert!(!user.can_manage_pets());
        assert!(!user.can_access_reports());
    }

    #[test]
    fn test_profile_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Profile::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Profile::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Species::Dog).unwrap(), "\"dog\"");
    }

    #[test]
    fn test_session_check_without_user_parses() {
        let response: SessionCheckResponse =
            serde_json::from_str("{\"authenticated\":false}").unwrap();
        assert!(!response.authenticated);
        assert!(response.user.is_none());
    }

    #[test]
    fn test_user_without_permissions_field_parses() {
        let json = r#"{
            "id": 1,
            "username": "admin",
            "email": "admin@example.com",
            "profile": "admin",
            "active": true,
            "last_login": "2025-06-01T10:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.permissions, Permissions::default());
    }

    #[test]
    fn test_user_payload_omits_password_when_none() {
        let payload = UserPayload {
            username: "clerk".to_string(),
            email: "clerk@example.com".to_string(),
            profile: Profile::User,
            active: true,
            password: None,
            can_access_vaccination: Some(true),
            can_access_reports: Some(false),
            can_manage_pets: Some(true),
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert_eq!(object["can_access_vaccination"], true);
        assert_eq!(object["can_access_reports"], false);
    }

    #[test]
    fn test_user_payload_omits_permission_flags_for_admin() {
        let payload = UserPayload {
            username: "root".to_string(),
            email: "root@example.com".to_string(),
            profile: Profile::Admin,
            active: true,
            password: Some("secret".to_string()),
            can_access_vaccination: None,
            can_access_reports: None,
            can_manage_pets: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["password"], "secret");
        assert!(!object.contains_key("can_access_vaccination"));
        assert!(!object.contains_key("can_access_reports"));
        assert!(!object.contains_key("can_manage_pets"));
    }

    #[test]
    fn test_pet_payload_keeps_explicit_nulls() {
        let payload = PetPayload {
            name: "Rex".to_string(),
            species: Species::Dog,
            breed: None,
            birth_date: None,
            gender: None,
            weight: None,
            owner_name: Some("Ana".to_string()),
            owner_phone: None,
            owner_email: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("breed"));
        assert!(object["breed"].is_null());
        assert_eq!(object["species"], "dog");
    }

    #[test]
    fn test_vaccination_with_embedded_pet_parses() {
        let json = r#"{
            "id": 9,
            "pet_id": 5,
            "vaccine_name": "Rabies",
            "vaccine_type": null,
            "dose_number": 2,
            "application_date": "2025-05-10",
            "next_dose_date": "2025-06-09",
            "weight_at_vaccination": 12.5,
            "veterinarian": "Dr. Souza",
            "batch_number": null,
            "observations": null,
            "pet": {"id": 5, "name": "Rex"}
        }"#;
        let vaccination: Vaccination = serde_json::from_str(json).unwrap();
        assert_eq!(vaccination.pet_id, 5);
        assert_eq!(vaccination.pet.as_ref().unwrap().name, "Rex");
        assert_eq!(vaccination.dose_number, Some(2));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-06-09"), "Jun 09, 2025");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_format_date_time_falls_back_on_garbage() {
        assert_eq!(format_date_time("never"), "never");
        assert_eq!(
            format_date_time("2025-06-01T10:30:00Z"),
            "Jun 01, 2025 10:30"
        );
    }
}
