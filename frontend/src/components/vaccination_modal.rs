use gloo::timers::future::TimeoutFuture;
use shared::Vaccination;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::state::editing::{vaccination_submit_plan, FormMode};
use crate::state::forms::VaccinationForm;

#[derive(Properties, PartialEq)]
pub struct VaccinationModalProps {
    pub is_open: bool,
    pub mode: FormMode,
    pub initial: Option<Vaccination>,
    /// Create posts under this pet; edit ignores it.
    pub current_pet_id: Option<i64>,
    pub on_saved: Callback<()>,
    pub on_close: Callback<()>,
}

fn field<F>(form: &UseStateHandle<VaccinationForm>, apply: F) -> Callback<Event>
where
    F: Fn(&mut VaccinationForm, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(VaccinationModal)]
pub fn vaccination_modal(props: &VaccinationModalProps) -> Html {
    let form = use_state(VaccinationForm::default);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let success = use_state(|| false);
    let api = ApiClient::new();

    use_effect_with((props.is_open, props.initial.clone()), {
        let form = form.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let success = success.clone();
        move |(is_open, initial): &(bool, Option<Vaccination>)| {
            if *is_open {
                form.set(
                    initial
                        .as_ref()
                        .map(VaccinationForm::from_vaccination)
                        .unwrap_or_default(),
                );
                submitting.set(false);
                error.set(None);
                success.set(false);
            }
            || ()
        }
    });

    let on_observations_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.observations = area.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let success = success.clone();
        let mode = props.mode;
        let current_pet_id = props.current_pet_id;
        let on_saved = props.on_saved.clone();
        let on_close = props.on_close.clone();
        let api = api.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let plan = match vaccination_submit_plan(mode, current_pet_id) {
                Some(plan) => plan,
                None => {
                    error.set(Some("Select a pet before adding a vaccination".to_string()));
                    return;
                }
            };
            let payload = (*form).to_payload();

            let submitting = submitting.clone();
            let error = error.clone();
            let success = success.clone();
            let on_saved = on_saved.clone();
            let on_close = on_close.clone();
            let api = api.clone();

            spawn_local(async move {
                submitting.set(true);
                error.set(None);

                match api
                    .submit(&plan, &payload, "Failed to save vaccination")
                    .await
                {
                    Ok(()) => {
                        success.set(true);
                        on_saved.emit(());
                        TimeoutFuture::new(1500).await;
                        on_close.emit(());
                    }
                    Err(message) => error.set(Some(message)),
                }

                submitting.set(false);
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3>{props.mode.title("Vaccination")}</h3>

                {if let Some(error) = (*error).as_ref() {
                    html! { <div class="alert alert-error">{error}</div> }
                } else { html! {} }}
                {if *success {
                    html! { <div class="alert alert-success">{"Vaccination saved successfully!"}</div> }
                } else { html! {} }}

                <form onsubmit={on_submit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="vaccination-name">{"Vaccine"}</label>
                            <input
                                type="text"
                                id="vaccination-name"
                                required=true
                                value={form.vaccine_name.clone()}
                                onchange={field(&form, |f, v| f.vaccine_name = v)}
                            />
                        </div>
                        <div class="form-group">
                            <label for="vaccination-type">{"Type"}</label>
                            <input
                                type="text"
                                id="vaccination-type"
                                value={form.vaccine_type.clone()}
                                onchange={field(&form, |f, v| f.vaccine_type = v)}
                            />
                        </div>
                        <div class="form-group">
                            <label for="vaccination-dose">{"Dose #"}</label>
                            <input
                                type="number"
                                id="vaccination-dose"
                                min="1"
                                value={form.dose_number.clone()}
                                onchange={field(&form, |f, v| f.dose_number = v)}
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="vaccination-applied">{"Application Date"}</label>
                            <input
                                type="date"
                                id="vaccination-applied"
                                required=true
                                value={form.application_date.clone()}
                                onchange={field(&form, |f, v| f.application_date = v)}
                            />
                        </div>
                        <div class="form-group">
                            <label for="vaccination-next">{"Next Dose"}</label>
                            <input
                                type="date"
                                id="vaccination-next"
                                value={form.next_dose_date.clone()}
                                onchange={field(&form, |f, v| f.next_dose_date = v)}
                            />
                        </div>
                        <div class="form-group">
                            <label for="vaccination-weight">{"Weight (kg)"}</label>
                            <input
                                type="number"
                                id="vaccination-weight"
                                step="0.1"
                                min="0"
                                value={form.weight_at_vaccination.clone()}
                                onchange={field(&form, |f, v| f.weight_at_vaccination = v)}
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="vaccination-vet">{"Veterinarian"}</label>
                            <input
                                type="text"
                                id="vaccination-vet"
                                value={form.veterinarian.clone()}
                                onchange={field(&form, |f, v| f.veterinarian = v)}
                            />
                        </div>
                        <div class="form-group">
                            <label for="vaccination-batch">{"Batch Number"}</label>
                            <input
                                type="text"
                                id="vaccination-batch"
                                value={form.batch_number.clone()}
                                onchange={field(&form, |f, v| f.batch_number = v)}
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="vaccination-observations">{"Observations"}</label>
                        <textarea
                            id="vaccination-observations"
                            value={form.observations.clone()}
                            onchange={on_observations_change}
                        />
                    </div>

                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={*submitting}>
                            {if *submitting { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
