use shared::ScheduleEntry;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, Default, PartialEq)]
pub struct ScheduleState {
    /// `None` until the user explicitly asks for the report.
    pub entries: Option<Vec<ScheduleEntry>>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseScheduleResult {
    pub state: ScheduleState,
    pub actions: UseScheduleActions,
}

#[derive(Clone, PartialEq)]
pub struct UseScheduleActions {
    pub load: Callback<()>,
}

/// Vaccination-schedule report. Lazy: nothing is fetched until `load`.
#[hook]
pub fn use_schedule(api: &ApiClient) -> UseScheduleResult {
    let entries = use_state(|| Option::<Vec<ScheduleEntry>>::None);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let load = {
        let api = api.clone();
        let entries = entries.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let entries = entries.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);
                error.set(None);
                match api.vaccination_schedule().await {
                    Ok(list) => entries.set(Some(list)),
                    Err(message) => error.set(Some(message)),
                }
                loading.set(false);
            });
        })
    };

    UseScheduleResult {
        state: ScheduleState {
            entries: (*entries).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        actions: UseScheduleActions { load },
    }
}
