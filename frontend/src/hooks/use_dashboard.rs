use std::cell::RefCell;
use std::rc::Rc;

use shared::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::context::RequestContext;

/// Aggregate counters for the dashboard. `None` means not loaded or not
/// visible to this user.
#[derive(Clone, Default, PartialEq)]
pub struct DashboardState {
    pub total_pets: Option<usize>,
    pub total_vaccinations: Option<usize>,
    /// Admin only.
    pub active_users: Option<usize>,
    /// Upcoming doses within the backend's 30-day window; admins and
    /// users with report access only.
    pub upcoming_vaccinations: Option<usize>,
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDashboardActions {
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_dashboard(
    api: &ApiClient,
    ctx: &Rc<RefCell<RequestContext>>,
    user: &User,
) -> UseDashboardResult {
    let state = use_state(DashboardState::default);

    let refresh = {
        let api = api.clone();
        let ctx = ctx.clone();
        let user = user.clone();
        let state = state.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let ctx = ctx.clone();
            let user = user.clone();
            let state = state.clone();
            let issued = *ctx.borrow();

            spawn_local(async move {
                let mut counters = DashboardState::default();

                match api.list_pets().await {
                    Ok(pets) => {
                        counters.total_pets = Some(pets.len());

                        // No bulk count endpoint exists, so this walks
                        // every pet's vaccination list and sums lengths.
                        // Fine for small clinics, N+1 beyond that.
                        let mut total = 0;
                        for pet in &pets {
                            match api.list_vaccinations(pet.id).await {
                                Ok(list) => total += list.len(),
                                Err(e) => Logger::warn(
                                    "dashboard",
                                    &format!("Vaccination count for pet {} failed: {}", pet.id, e),
                                ),
                            }
                        }
                        counters.total_vaccinations = Some(total);
                    }
                    Err(e) => {
                        Logger::error("dashboard", &format!("Failed to load pets: {}", e))
                    }
                }

                if user.is_admin() {
                    match api.list_users().await {
                        Ok(users) => {
                            counters.active_users =
                                Some(users.iter().filter(|u| u.active).count());
                        }
                        Err(e) => {
                            Logger::error("dashboard", &format!("Failed to load users: {}", e))
                        }
                    }
                }

                if user.can_access_reports() {
                    match api.vaccination_schedule().await {
                        Ok(schedule) => counters.upcoming_vaccinations = Some(schedule.len()),
                        Err(e) => {
                            Logger::error("dashboard", &format!("Failed to load schedule: {}", e))
                        }
                    }
                }

                // A tab switch while the counts were in flight makes the
                // whole batch stale.
                if ctx.borrow().accepts(issued) {
                    state.set(counters);
                } else {
                    Logger::debug("dashboard", "Discarding stale dashboard counters");
                }
            });
        })
    };

    UseDashboardResult {
        state: (*state).clone(),
        actions: UseDashboardActions { refresh },
    }
}
