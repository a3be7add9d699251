use shared::{
    ChangePasswordRequest, Pet, PetPayload, Profile, User, UserPayload, Vaccination,
    VaccinationPayload,
};

use super::editing::FormMode;

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Raw input state of the pet modal. Fields are strings straight from
/// the inputs; `to_payload` does the parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct PetForm {
    pub name: String,
    pub species: shared::Species,
    pub breed: String,
    pub birth_date: String,
    pub gender: String,
    pub weight: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_email: String,
}

impl Default for PetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: shared::Species::Dog,
            breed: String::new(),
            birth_date: String::new(),
            gender: String::new(),
            weight: String::new(),
            owner_name: String::new(),
            owner_phone: String::new(),
            owner_email: String::new(),
        }
    }
}

impl PetForm {
    /// Populate the form from a fetched record; null optionals become
    /// empty inputs.
    pub fn from_pet(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            species: pet.species,
            breed: or_empty(&pet.breed),
            birth_date: or_empty(&pet.birth_date),
            gender: or_empty(&pet.gender),
            weight: pet.weight.map(|w| w.to_string()).unwrap_or_default(),
            owner_name: or_empty(&pet.owner_name),
            owner_phone: or_empty(&pet.owner_phone),
            owner_email: or_empty(&pet.owner_email),
        }
    }

    pub fn to_payload(&self) -> PetPayload {
        PetPayload {
            name: self.name.trim().to_string(),
            species: self.species,
            breed: blank_to_none(&self.breed),
            birth_date: blank_to_none(&self.birth_date),
            gender: blank_to_none(&self.gender),
            weight: self.weight.trim().parse().ok(),
            owner_name: blank_to_none(&self.owner_name),
            owner_phone: blank_to_none(&self.owner_phone),
            owner_email: blank_to_none(&self.owner_email),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VaccinationForm {
    pub vaccine_name: String,
    pub vaccine_type: String,
    pub dose_number: String,
    pub application_date: String,
    pub next_dose_date: String,
    pub weight_at_vaccination: String,
    pub veterinarian: String,
    pub batch_number: String,
    pub observations: String,
}

impl VaccinationForm {
    pub fn from_vaccination(vaccination: &Vaccination) -> Self {
        Self {
            vaccine_name: vaccination.vaccine_name.clone(),
            vaccine_type: or_empty(&vaccination.vaccine_type),
            dose_number: vaccination
                .dose_number
                .map(|d| d.to_string())
                .unwrap_or_default(),
            application_date: vaccination.application_date.clone(),
            next_dose_date: or_empty(&vaccination.next_dose_date),
            weight_at_vaccination: vaccination
                .weight_at_vaccination
                .map(|w| w.to_string())
                .unwrap_or_default(),
            veterinarian: or_empty(&vaccination.veterinarian),
            batch_number: or_empty(&vaccination.batch_number),
            observations: or_empty(&vaccination.observations),
        }
    }

    pub fn to_payload(&self) -> VaccinationPayload {
        VaccinationPayload {
            vaccine_name: self.vaccine_name.trim().to_string(),
            vaccine_type: blank_to_none(&self.vaccine_type),
            dose_number: self.dose_number.trim().parse().ok(),
            application_date: self.application_date.trim().to_string(),
            next_dose_date: blank_to_none(&self.next_dose_date),
            weight_at_vaccination: self.weight_at_vaccination.trim().parse().ok(),
            veterinarian: blank_to_none(&self.veterinarian),
            batch_number: blank_to_none(&self.batch_number),
            observations: blank_to_none(&self.observations),
        }
    }
}

/// Raw input state of the user modal.
#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile: Profile,
    pub active: bool,
    pub can_access_vaccination: bool,
    pub can_access_reports: bool,
    pub can_manage_pets: bool,
}

impl Default for UserForm {
    // Defaults for a fresh "add user" form.
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            profile: Profile::User,
            active: true,
            can_access_vaccination: true,
            can_access_reports: false,
            can_manage_pets: true,
        }
    }
}

impl UserForm {
    /// Populate from a fetched record. The password field starts blank;
    /// leaving it blank on submit keeps the existing password.
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: String::new(),
            profile: user.profile,
            active: user.active,
            can_access_vaccination: user.permissions.can_access_vaccination,
            can_access_reports: user.permissions.can_access_reports,
            can_manage_pets: user.permissions.can_manage_pets,
        }
    }

    /// Apply the payload rules: the password is sent when creating, or
    /// when editing with a non-empty replacement; permission flags are
    /// sent only for the `user` profile.
    pub fn to_payload(&self, mode: FormMode) -> UserPayload {
        let password = match mode {
            FormMode::Create => Some(self.password.clone()),
            FormMode::Edit(_) if !self.password.is_empty() => Some(self.password.clone()),
            FormMode::Edit(_) => None,
        };

        let (can_access_vaccination, can_access_reports, can_manage_pets) =
            if self.profile == Profile::User {
                (
                    Some(self.can_access_vaccination),
                    Some(self.can_access_reports),
                    Some(self.can_manage_pets),
                )
            } else {
                (None, None, None)
            };

        UserPayload {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            profile: self.profile,
            active: self.active,
            password,
            can_access_vaccination,
            can_access_reports,
            can_manage_pets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordForm {
    /// Local check only; a mismatch never reaches the network.
    pub fn validate(&self) -> Result<ChangePasswordRequest, String> {
        if self.new_password != self.confirm_password {
            return Err("New passwords do not match".to_string());
        }
        Ok(ChangePasswordRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Species;

    fn sample_pet() -> Pet {
        Pet {
            id: 5,
            name: "Rex".to_string(),
            species: Species::Dog,
            breed: Some("Labrador".to_string()),
            birth_date: Some("2020-01-15".to_string()),
            gender: None,
            weight: Some(24.5),
            owner_name: Some("Ana".to_string()),
            owner_phone: None,
            owner_email: None,
        }
    }

    #[test]
    fn test_pet_form_round_trip_preserves_untouched_fields() {
        let mut form = PetForm::from_pet(&sample_pet());
        form.breed = "Golden Retriever".to_string();

        let payload = form.to_payload();
        assert_eq!(payload.breed.as_deref(), Some("Golden Retriever"));
        assert_eq!(payload.name, "Rex");
        assert_eq!(payload.species, Species::Dog);
        assert_eq!(payload.birth_date.as_deref(), Some("2020-01-15"));
        assert_eq!(payload.weight, Some(24.5));
        assert_eq!(payload.owner_name.as_deref(), Some("Ana"));
        assert_eq!(payload.gender, None);
        assert_eq!(payload.owner_phone, None);
    }

    #[test]
    fn test_pet_form_blank_and_unparsable_inputs_become_none() {
        let form = PetForm {
            name: " Mia ".to_string(),
            species: Species::Cat,
            weight: "heavy".to_string(),
            ..PetForm::default()
        };
        let payload = form.to_payload();
        assert_eq!(payload.name, "Mia");
        assert_eq!(payload.breed, None);
        assert_eq!(payload.weight, None);
    }

    #[test]
    fn test_vaccination_form_parses_numbers() {
        let form = VaccinationForm {
            vaccine_name: "Rabies".to_string(),
            dose_number: "2".to_string(),
            application_date: "2025-05-10".to_string(),
            weight_at_vaccination: "12.5".to_string(),
            ..VaccinationForm::default()
        };
        let payload = form.to_payload();
        assert_eq!(payload.dose_number, Some(2));
        assert_eq!(payload.weight_at_vaccination, Some(12.5));
        assert_eq!(payload.next_dose_date, None);
    }

    #[test]
    fn test_user_create_includes_password() {
        let form = UserForm {
            username: "clerk".to_string(),
            email: "clerk@example.com".to_string(),
            password: "hunter2".to_string(),
            ..UserForm::default()
        };
        let payload = form.to_payload(FormMode::Create);
        assert_eq!(payload.password.as_deref(), Some("hunter2"));
        assert_eq!(payload.can_access_vaccination, Some(true));
        assert_eq!(payload.can_access_reports, Some(false));
        assert_eq!(payload.can_manage_pets, Some(true));
    }

    #[test]
    fn test_user_edit_with_blank_password_omits_it() {
        let form = UserForm {
            username: "clerk".to_string(),
            email: "clerk@example.com".to_string(),
            ..UserForm::default()
        };
        let payload = form.to_payload(FormMode::Edit(4));
        assert_eq!(payload.password, None);
    }

    #[test]
    fn test_user_edit_with_typed_password_sends_it() {
        let form = UserForm {
            password: "newpass".to_string(),
            ..UserForm::default()
        };
        let payload = form.to_payload(FormMode::Edit(4));
        assert_eq!(payload.password.as_deref(), Some("newpass"));
    }

    #[test]
    fn test_admin_profile_sends_no_permission_flags() {
        let form = UserForm {
            profile: Profile::Admin,
            ..UserForm::default()
        };
        let payload = form.to_payload(FormMode::Create);
        assert_eq!(payload.can_access_vaccination, None);
        assert_eq!(payload.can_access_reports, None);
        assert_eq!(payload.can_manage_pets, None);
    }

    #[test]
    fn test_password_mismatch_fails_before_any_request_is_built() {
        let form = ChangePasswordForm {
            current_password: "old".to_string(),
            new_password: "new1".to_string(),
            confirm_password: "new2".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_matching_passwords_build_the_request() {
        let form = ChangePasswordForm {
            current_password: "old".to_string(),
            new_password: "new".to_string(),
            confirm_password: "new".to_string(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.current_password, "old");
        assert_eq!(request.new_password, "new");
    }
}
