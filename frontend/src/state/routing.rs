use shared::User;

/// The five top-level tabs. Exactly one is active at a time; activating
/// one deactivates the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Pets,
    Vaccinations,
    Users,
    Reports,
}

/// Data refresh that activating a tab triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabLoad {
    Dashboard,
    Pets,
    /// The vaccinations tab only loads the pet selector; vaccinations
    /// themselves wait until a pet is chosen.
    PetSelect,
    Users,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Pets,
        Tab::Vaccinations,
        Tab::Users,
        Tab::Reports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Pets => "Pets",
            Tab::Vaccinations => "Vaccinations",
            Tab::Users => "Users",
            Tab::Reports => "Reports",
        }
    }

    /// Whether the tab is rendered for the given user. Visibility only:
    /// the backend remains the authority on authorization.
    pub fn visible_to(&self, user: &User) -> bool {
        match self {
            Tab::Dashboard => true,
            Tab::Pets => user.can_manage_pets(),
            Tab::Vaccinations => user.can_access_vaccinations(),
            Tab::Users => user.is_admin(),
            Tab::Reports => user.can_access_reports(),
        }
    }

    /// Which refresh activating this tab triggers. The users tab is a
    /// data no-op for non-admins, and reports load only on demand.
    pub fn load_on_activate(&self, user: &User) -> Option<TabLoad> {
        match self {
            Tab::Dashboard => Some(TabLoad::Dashboard),
            Tab::Pets => Some(TabLoad::Pets),
            Tab::Vaccinations => Some(TabLoad::PetSelect),
            Tab::Users if user.is_admin() => Some(TabLoad::Users),
            Tab::Users => None,
            Tab::Reports => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Permissions, Profile};

    fn user_with(permissions: Permissions) -> User {
        User {
            id: 3,
            username: "clerk".to_string(),
            email: "clerk@example.com".to_string(),
            profile: Profile::User,
            active: true,
            permissions,
            last_login: None,
        }
    }

    fn admin() -> User {
        User {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            profile: Profile::Admin,
            active: true,
            permissions: Permissions::default(),
            last_login: None,
        }
    }

    #[test]
    fn test_admin_sees_every_tab() {
        let admin = admin();
        for tab in Tab::ALL {
            assert!(tab.visible_to(&admin), "admin should see {:?}", tab);
        }
    }

    #[test]
    fn test_user_without_pet_permission_never_sees_pets_tab() {
        let user = user_with(Permissions {
            can_access_vaccination: true,
            can_access_reports: true,
            can_manage_pets: false,
        });
        assert!(!Tab::Pets.visible_to(&user));
        assert!(Tab::Vaccinations.visible_to(&user));
        assert!(Tab::Reports.visible_to(&user));
        assert!(!Tab::Users.visible_to(&user));
    }

    #[test]
    fn test_users_tab_is_a_data_noop_for_non_admin() {
        let user = user_with(Permissions::default());
        assert_eq!(Tab::Users.load_on_activate(&user), None);
        assert_eq!(Tab::Users.load_on_activate(&admin()), Some(TabLoad::Users));
    }

    #[test]
    fn test_reports_tab_loads_nothing_automatically() {
        assert_eq!(Tab::Reports.load_on_activate(&admin()), None);
    }

    #[test]
    fn test_vaccinations_tab_only_loads_pet_selector() {
        assert_eq!(
            Tab::Vaccinations.load_on_activate(&admin()),
            Some(TabLoad::PetSelect)
        );
    }
}
