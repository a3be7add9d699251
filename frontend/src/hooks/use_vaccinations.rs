use std::cell::RefCell;
use std::rc::Rc;

use shared::{Pet, Vaccination};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::context::RequestContext;

#[derive(Clone, PartialEq)]
pub struct VaccinationsState {
    /// Pets offered in the selector on the vaccinations tab.
    pub pets: Vec<Pet>,
    pub current_pet_id: Option<i64>,
    /// Vaccinations of the selected pet; empty until one is chosen.
    pub vaccinations: Vec<Vaccination>,
}

pub struct UseVaccinationsResult {
    pub state: VaccinationsState,
    pub actions: UseVaccinationsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseVaccinationsActions {
    /// Reload the pet selector (tab activation, pet create/delete).
    pub refresh_pets: Callback<()>,
    pub select_pet: Callback<Option<i64>>,
    /// Reload the selected pet's vaccinations.
    pub refresh_vaccinations: Callback<()>,
}

#[hook]
pub fn use_vaccinations(
    api: &ApiClient,
    ctx: &Rc<RefCell<RequestContext>>,
) -> UseVaccinationsResult {
    let pets = use_state(Vec::<Pet>::new);
    let current_pet_id = use_state(|| Option::<i64>::None);
    let vaccinations = use_state(Vec::<Vaccination>::new);

    let refresh_pets = {
        let api = api.clone();
        let pets = pets.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let pets = pets.clone();

            spawn_local(async move {
                match api.list_pets().await {
                    Ok(list) => pets.set(list),
                    Err(e) => {
                        Logger::error("vaccinations", &format!("Failed to load pets: {}", e))
                    }
                }
            });
        })
    };

    let refresh_vaccinations = {
        let api = api.clone();
        let ctx = ctx.clone();
        let vaccinations = vaccinations.clone();

        Callback::from(move |_| {
            // The live context, not the render-time snapshot, decides
            // which pet to load.
            let pet_id = match ctx.borrow().pet {
                Some(id) => id,
                None => return,
            };
            let issued = *ctx.borrow();

            let api = api.clone();
            let ctx = ctx.clone();
            let vaccinations = vaccinations.clone();

            spawn_local(async move {
                match api.list_vaccinations(pet_id).await {
                    Ok(list) => {
                        if ctx.borrow().accepts(issued) {
                            vaccinations.set(list);
                        } else {
                            Logger::debug("vaccinations", "Discarding stale vaccination list");
                        }
                    }
                    Err(e) => Logger::error(
                        "vaccinations",
                        &format!("Failed to load vaccinations: {}", e),
                    ),
                }
            });
        })
    };

    let select_pet = {
        let ctx = ctx.clone();
        let current_pet_id = current_pet_id.clone();
        let vaccinations = vaccinations.clone();
        let refresh_vaccinations = refresh_vaccinations.clone();

        Callback::from(move |pet: Option<i64>| {
            ctx.borrow_mut().pet = pet;
            current_pet_id.set(pet);
            vaccinations.set(Vec::new());
            if pet.is_some() {
                refresh_vaccinations.emit(());
            }
        })
    };

    UseVaccinationsResult {
        state: VaccinationsState {
            pets: (*pets).clone(),
            current_pet_id: *current_pet_id,
            vaccinations: (*vaccinations).clone(),
        },
        actions: UseVaccinationsActions {
            refresh_pets,
            select_pet,
            refresh_vaccinations,
        },
    }
}
