use shared::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::session::SessionState;

#[derive(Clone)]
pub struct SessionHookState {
    pub session: SessionState,
    pub login_error: Option<String>,
    pub logging_in: bool,
}

pub struct UseSessionResult {
    pub state: SessionHookState,
    pub actions: UseSessionActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub login: Callback<LoginRequest>,
    pub logout: Callback<()>,
}

/// Session manager: checks for an active session on mount and exposes
/// login/logout transitions.
#[hook]
pub fn use_session(api: &ApiClient) -> UseSessionResult {
    let session = use_state(SessionState::default);
    let login_error = use_state(|| Option::<String>::None);
    let logging_in = use_state(|| false);

    // Initial session check.
    use_effect_with((), {
        let api = api.clone();
        let session = session.clone();
        move |_| {
            spawn_local(async move {
                match api.check_session().await {
                    Ok(response) => session.set(SessionState::from_check(response)),
                    Err(e) => {
                        Logger::error("session", &format!("Session check failed: {}", e));
                        session.set(SessionState::Anonymous);
                    }
                }
            });
            || ()
        }
    });

    let login = {
        let api = api.clone();
        let session = session.clone();
        let login_error = login_error.clone();
        let logging_in = logging_in.clone();

        Callback::from(move |request: LoginRequest| {
            let api = api.clone();
            let session = session.clone();
            let login_error = login_error.clone();
            let logging_in = logging_in.clone();

            spawn_local(async move {
                login_error.set(None);
                logging_in.set(true);

                match api.login(&request).await {
                    Ok(user) => session.set(SessionState::Authenticated(user)),
                    // Failed login leaves the session untouched.
                    Err(message) => login_error.set(Some(message)),
                }

                logging_in.set(false);
            });
        })
    };

    let logout = {
        let api = api.clone();
        let session = session.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let session = session.clone();

            spawn_local(async move {
                // Local state is cleared no matter what the backend says;
                // the user asked to leave.
                if let Err(e) = api.logout().await {
                    Logger::warn("session", &format!("Logout request failed: {}", e));
                }
                session.set(SessionState::Anonymous);
            });
        })
    };

    UseSessionResult {
        state: SessionHookState {
            session: (*session).clone(),
            login_error: (*login_error).clone(),
            logging_in: *logging_in,
        },
        actions: UseSessionActions { login, logout },
    }
}
