use shared::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct UsersState {
    pub users: Vec<User>,
}

pub struct UseUsersResult {
    pub state: UsersState,
    pub actions: UseUsersActions,
}

#[derive(Clone, PartialEq)]
pub struct UseUsersActions {
    pub refresh: Callback<()>,
}

/// User administration list. Only ever refreshed for admins; the tab
/// itself is hidden for everyone else.
#[hook]
pub fn use_users(api: &ApiClient) -> UseUsersResult {
    let users = use_state(Vec::<User>::new);

    let refresh = {
        let api = api.clone();
        let users = users.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let users = users.clone();

            spawn_local(async move {
                match api.list_users().await {
                    Ok(list) => users.set(list),
                    Err(e) => Logger::error("users", &format!("Failed to load users: {}", e)),
                }
            });
        })
    };

    UseUsersResult {
        state: UsersState {
            users: (*users).clone(),
        },
        actions: UseUsersActions { refresh },
    }
}
