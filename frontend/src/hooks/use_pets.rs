use shared::Pet;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct PetsState {
    pub pets: Vec<Pet>,
    /// The pets table is the one view with an explicit loading indicator.
    pub loading: bool,
}

pub struct UsePetsResult {
    pub state: PetsState,
    pub actions: UsePetsActions,
}

#[derive(Clone, PartialEq)]
pub struct UsePetsActions {
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_pets(api: &ApiClient) -> UsePetsResult {
    let pets = use_state(Vec::<Pet>::new);
    let loading = use_state(|| false);

    let refresh = {
        let api = api.clone();
        let pets = pets.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let pets = pets.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api.list_pets().await {
                    Ok(list) => pets.set(list),
                    Err(e) => Logger::error("pets", &format!("Failed to load pets: {}", e)),
                }
                loading.set(false);
            });
        })
    };

    UsePetsResult {
        state: PetsState {
            pets: (*pets).clone(),
            loading: *loading,
        },
        actions: UsePetsActions { refresh },
    }
}
