mod components;
mod hooks;
mod services;
mod state;

use shared::{Pet, User, Vaccination};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::{
    ChangePasswordModal, DashboardView, Header, LoginForm, PetModal, PetsView, ReportsView,
    TabNav, UserModal, UsersView, VaccinationModal, VaccinationsView,
};
use hooks::use_dashboard::use_dashboard;
use hooks::use_pets::use_pets;
use hooks::use_schedule::use_schedule;
use hooks::use_session::use_session;
use hooks::use_users::use_users;
use hooks::use_vaccinations::use_vaccinations;
use services::api::ApiClient;
use services::logging::Logger;
use state::context::RequestContext;
use state::editing::FormMode;
use state::routing::{Tab, TabLoad};
use state::session::SessionState;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

#[function_component(App)]
fn app() -> Html {
    let api = ApiClient::new();
    let session = use_session(&api);

    match session.state.session.clone() {
        SessionState::Checking => html! {
            <div class="loading">{"Checking session..."}</div>
        },
        SessionState::Anonymous => html! {
            <LoginForm
                on_login={session.actions.login.clone()}
                error={session.state.login_error.clone()}
                logging_in={session.state.logging_in}
            />
        },
        SessionState::Authenticated(user) => html! {
            <AuthenticatedApp {user} on_logout={session.actions.logout.clone()} />
        },
    }
}

#[derive(Properties, PartialEq)]
struct AuthenticatedAppProps {
    user: User,
    on_logout: Callback<()>,
}

#[function_component(AuthenticatedApp)]
fn authenticated_app(props: &AuthenticatedAppProps) -> Html {
    let api = ApiClient::new();
    let user = props.user.clone();

    // Live view context shared with the data hooks; in-flight responses
    // are checked against it before being applied.
    let ctx = use_mut_ref(RequestContext::default);
    let active_tab = use_state(|| Tab::Dashboard);

    let pets = use_pets(&api);
    let vaccinations = use_vaccinations(&api, &ctx);
    let users = use_users(&api);
    let dashboard = use_dashboard(&api, &ctx, &user);
    let schedule = use_schedule(&api);

    let pet_modal = use_state(|| Option::<(FormMode, Option<Pet>)>::None);
    let vaccination_modal = use_state(|| Option::<(FormMode, Option<Vaccination>)>::None);
    let user_modal = use_state(|| Option::<(FormMode, Option<User>)>::None);
    let show_change_password = use_state(|| false);

    // The dashboard is the landing tab; load its counters once on entry.
    use_effect_with((), {
        let refresh = dashboard.actions.refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let on_select_tab = {
        let ctx = ctx.clone();
        let active_tab = active_tab.clone();
        let user = user.clone();
        let refresh_dashboard = dashboard.actions.refresh.clone();
        let refresh_pets = pets.actions.refresh.clone();
        let refresh_pet_select = vaccinations.actions.refresh_pets.clone();
        let refresh_users = users.actions.refresh.clone();

        Callback::from(move |tab: Tab| {
            active_tab.set(tab);
            ctx.borrow_mut().tab = tab;
            match tab.load_on_activate(&user) {
                Some(TabLoad::Dashboard) => refresh_dashboard.emit(()),
                Some(TabLoad::Pets) => refresh_pets.emit(()),
                Some(TabLoad::PetSelect) => refresh_pet_select.emit(()),
                Some(TabLoad::Users) => refresh_users.emit(()),
                None => {}
            }
        })
    };

    // --- Pet actions ---

    let open_add_pet = {
        let pet_modal = pet_modal.clone();
        Callback::from(move |_| pet_modal.set(Some((FormMode::Create, None))))
    };

    let open_edit_pet = {
        let api = api.clone();
        let pet_modal = pet_modal.clone();
        Callback::from(move |id: i64| {
            let api = api.clone();
            let pet_modal = pet_modal.clone();
            spawn_local(async move {
                match api.get_pet(id).await {
                    Ok(pet) => pet_modal.set(Some((FormMode::Edit(id), Some(pet)))),
                    Err(e) => Logger::error("pets", &format!("Failed to load pet {}: {}", id, e)),
                }
            });
        })
    };

    let close_pet_modal = {
        let pet_modal = pet_modal.clone();
        Callback::from(move |_| pet_modal.set(None))
    };

    // A pet change touches the pets table, the vaccination pet selector
    // and the dashboard counters.
    let pet_saved = {
        let refresh_pets = pets.actions.refresh.clone();
        let refresh_pet_select = vaccinations.actions.refresh_pets.clone();
        let refresh_dashboard = dashboard.actions.refresh.clone();
        Callback::from(move |_| {
            refresh_pets.emit(());
            refresh_pet_select.emit(());
            refresh_dashboard.emit(());
        })
    };

    let delete_pet = {
        let api = api.clone();
        let pet_saved = pet_saved.clone();
        Callback::from(move |id: i64| {
            if !confirm("Delete this pet?") {
                return;
            }
            let api = api.clone();
            let pet_saved = pet_saved.clone();
            spawn_local(async move {
                match api.delete_pet(id).await {
                    Ok(()) => pet_saved.emit(()),
                    Err(e) => {
                        Logger::error("pets", &format!("Failed to delete pet {}: {}", id, e))
                    }
                }
            });
        })
    };

    // --- Vaccination actions ---

    let open_add_vaccination = {
        let vaccination_modal = vaccination_modal.clone();
        Callback::from(move |_| vaccination_modal.set(Some((FormMode::Create, None))))
    };

    let open_edit_vaccination = {
        let vaccination_modal = vaccination_modal.clone();
        Callback::from(move |record: Vaccination| {
            vaccination_modal.set(Some((FormMode::Edit(record.id), Some(record))));
        })
    };

    let close_vaccination_modal = {
        let vaccination_modal = vaccination_modal.clone();
        Callback::from(move |_| vaccination_modal.set(None))
    };

    let vaccination_saved = {
        let refresh_vaccinations = vaccinations.actions.refresh_vaccinations.clone();
        let refresh_dashboard = dashboard.actions.refresh.clone();
        Callback::from(move |_| {
            refresh_vaccinations.emit(());
            refresh_dashboard.emit(());
        })
    };

    let delete_vaccination = {
        let api = api.clone();
        let vaccination_saved = vaccination_saved.clone();
        Callback::from(move |id: i64| {
            if !confirm("Delete this vaccination?") {
                return;
            }
            let api = api.clone();
            let vaccination_saved = vaccination_saved.clone();
            spawn_local(async move {
                match api.delete_vaccination(id).await {
                    Ok(()) => vaccination_saved.emit(()),
                    Err(e) => Logger::error(
                        "vaccinations",
                        &format!("Failed to delete vaccination {}: {}", id, e),
                    ),
                }
            });
        })
    };

    // --- User actions ---

    let open_add_user = {
        let user_modal = user_modal.clone();
        Callback::from(move |_| user_modal.set(Some((FormMode::Create, None))))
    };

    let open_edit_user = {
        let api = api.clone();
        let user_modal = user_modal.clone();
        Callback::from(move |id: i64| {
            let api = api.clone();
            let user_modal = user_modal.clone();
            spawn_local(async move {
                match api.get_user(id).await {
                    Ok(record) => user_modal.set(Some((FormMode::Edit(id), Some(record)))),
                    Err(e) => {
                        Logger::error("users", &format!("Failed to load user {}: {}", id, e))
                    }
                }
            });
        })
    };

    let close_user_modal = {
        let user_modal = user_modal.clone();
        Callback::from(move |_| user_modal.set(None))
    };

    let user_saved = {
        let refresh_users = users.actions.refresh.clone();
        let refresh_dashboard = dashboard.actions.refresh.clone();
        Callback::from(move |_| {
            refresh_users.emit(());
            refresh_dashboard.emit(());
        })
    };

    let delete_user = {
        let api = api.clone();
        let user_saved = user_saved.clone();
        Callback::from(move |id: i64| {
            if !confirm("Delete this user?") {
                return;
            }
            let api = api.clone();
            let user_saved = user_saved.clone();
            spawn_local(async move {
                match api.delete_user(id).await {
                    Ok(()) => user_saved.emit(()),
                    // The backend refuses some deletions (e.g. your own
                    // account); show its reason.
                    Err(message) => alert(&message),
                }
            });
        })
    };

    let open_change_password = {
        let show_change_password = show_change_password.clone();
        Callback::from(move |_| show_change_password.set(true))
    };

    let close_change_password = {
        let show_change_password = show_change_password.clone();
        Callback::from(move |_| show_change_password.set(false))
    };

    let visible_tabs: Vec<Tab> = Tab::ALL
        .into_iter()
        .filter(|tab| tab.visible_to(&user))
        .collect();

    let content = match *active_tab {
        Tab::Dashboard => html! {
            <DashboardView
                state={dashboard.state.clone()}
                show_users={user.is_admin()}
                show_upcoming={user.can_access_reports()}
            />
        },
        Tab::Pets => html! {
            <PetsView
                pets={pets.state.pets.clone()}
                loading={pets.state.loading}
                on_add={open_add_pet.clone()}
                on_edit={open_edit_pet.clone()}
                on_delete={delete_pet.clone()}
            />
        },
        Tab::Vaccinations => html! {
            <VaccinationsView
                pets={vaccinations.state.pets.clone()}
                current_pet_id={vaccinations.state.current_pet_id}
                vaccinations={vaccinations.state.vaccinations.clone()}
                on_select_pet={vaccinations.actions.select_pet.clone()}
                on_add={open_add_vaccination.clone()}
                on_edit={open_edit_vaccination.clone()}
                on_delete={delete_vaccination.clone()}
            />
        },
        Tab::Users => html! {
            <UsersView
                users={users.state.users.clone()}
                current_user_id={user.id}
                on_add={open_add_user.clone()}
                on_edit={open_edit_user.clone()}
                on_delete={delete_user.clone()}
            />
        },
        Tab::Reports => html! {
            <ReportsView
                state={schedule.state.clone()}
                on_load={schedule.actions.load.clone()}
            />
        },
    };

    html! {
        <div class="app">
            <Header
                username={user.username.clone()}
                on_change_password={open_change_password}
                on_logout={props.on_logout.clone()}
            />

            <main class="main">
                <div class="container">
                    <TabNav
                        tabs={visible_tabs}
                        active={*active_tab}
                        on_select={on_select_tab}
                    />
                    {content}
                </div>
            </main>

            <PetModal
                is_open={pet_modal.is_some()}
                mode={pet_modal.as_ref().map(|(mode, _)| *mode).unwrap_or_default()}
                initial={pet_modal.as_ref().and_then(|(_, pet)| pet.clone())}
                on_saved={pet_saved}
                on_close={close_pet_modal}
            />
            <VaccinationModal
                is_open={vaccination_modal.is_some()}
                mode={vaccination_modal.as_ref().map(|(mode, _)| *mode).unwrap_or_default()}
                initial={vaccination_modal.as_ref().and_then(|(_, record)| record.clone())}
                current_pet_id={vaccinations.state.current_pet_id}
                on_saved={vaccination_saved}
                on_close={close_vaccination_modal}
            />
            <UserModal
                is_open={user_modal.is_some()}
                mode={user_modal.as_ref().map(|(mode, _)| *mode).unwrap_or_default()}
                initial={user_modal.as_ref().and_then(|(_, record)| record.clone())}
                on_saved={user_saved}
                on_close={close_user_modal}
            />
            <ChangePasswordModal
                is_open={*show_change_password}
                on_close={close_change_password}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
