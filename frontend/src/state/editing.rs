/// Create-vs-edit intent for the next submit of an entity modal.
///
/// The modal title and the request plan are both derived from this value,
/// so the two can never disagree. `Create` means the next submit inserts
/// a new record; `Edit(id)` means it updates exactly that record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn title(&self, entity: &str) -> String {
        match self {
            FormMode::Create => format!("Add {}", entity),
            FormMode::Edit(_) => format!("Edit {}", entity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

/// Method and path for the next modal submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPlan {
    pub method: Method,
    pub path: String,
}

pub fn pet_submit_plan(mode: FormMode) -> SubmitPlan {
    match mode {
        FormMode::Create => SubmitPlan {
            method: Method::Post,
            path: "/api/pets".to_string(),
        },
        FormMode::Edit(id) => SubmitPlan {
            method: Method::Put,
            path: format!("/api/pets/{}", id),
        },
    }
}

/// Creation posts under the currently selected pet; editing addresses the
/// vaccination directly, regardless of which pet is selected. Creating
/// with no pet selected has no valid target and yields `None`.
pub fn vaccination_submit_plan(mode: FormMode, current_pet: Option<i64>) -> Option<SubmitPlan> {
    match mode {
        FormMode::Create => current_pet.map(|pet_id| SubmitPlan {
            method: Method::Post,
            path: format!("/api/pets/{}/vaccinations", pet_id),
        }),
        FormMode::Edit(id) => Some(SubmitPlan {
            method: Method::Put,
            path: format!("/api/vaccinations/{}", id),
        }),
    }
}

pub fn user_submit_plan(mode: FormMode) -> SubmitPlan {
    match mode {
        FormMode::Create => SubmitPlan {
            method: Method::Post,
            path: "/api/users".to_string(),
        },
        FormMode::Edit(id) => SubmitPlan {
            method: Method::Put,
            path: format!("/api/users/{}", id),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode_always_posts() {
        assert_eq!(pet_submit_plan(FormMode::Create).method, Method::Post);
        assert_eq!(pet_submit_plan(FormMode::Create).path, "/api/pets");
        assert_eq!(user_submit_plan(FormMode::Create).method, Method::Post);
        assert_eq!(user_submit_plan(FormMode::Create).path, "/api/users");
    }

    #[test]
    fn test_edit_mode_puts_to_exact_id() {
        let plan = pet_submit_plan(FormMode::Edit(42));
        assert_eq!(plan.method, Method::Put);
        assert_eq!(plan.path, "/api/pets/42");

        let plan = user_submit_plan(FormMode::Edit(9));
        assert_eq!(plan.method, Method::Put);
        assert_eq!(plan.path, "/api/users/9");
    }

    #[test]
    fn test_vaccination_create_targets_selected_pet() {
        let plan = vaccination_submit_plan(FormMode::Create, Some(5)).unwrap();
        assert_eq!(plan.method, Method::Post);
        assert_eq!(plan.path, "/api/pets/5/vaccinations");
    }

    #[test]
    fn test_vaccination_create_without_pet_has_no_target() {
        assert_eq!(vaccination_submit_plan(FormMode::Create, None), None);
    }

    #[test]
    fn test_vaccination_edit_ignores_selected_pet() {
        let with_pet = vaccination_submit_plan(FormMode::Edit(11), Some(5)).unwrap();
        let without_pet = vaccination_submit_plan(FormMode::Edit(11), None).unwrap();
        assert_eq!(with_pet, without_pet);
        assert_eq!(with_pet.method, Method::Put);
        assert_eq!(with_pet.path, "/api/vaccinations/11");
    }

    #[test]
    fn test_title_matches_mode() {
        assert_eq!(FormMode::Create.title("Pet"), "Add Pet");
        assert_eq!(FormMode::Edit(3).title("User"), "Edit User");
    }
}
