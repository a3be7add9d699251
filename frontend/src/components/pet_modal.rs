use gloo::timers::future::TimeoutFuture;
use shared::{Pet, Species};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::state::editing::{pet_submit_plan, FormMode};
use crate::state::forms::PetForm;

#[derive(Properties, PartialEq)]
pub struct PetModalProps {
    pub is_open: bool,
    pub mode: FormMode,
    /// Record to populate from when editing.
    pub initial: Option<Pet>,
    /// Emitted immediately on a successful save, before the auto-close.
    pub on_saved: Callback<()>,
    pub on_close: Callback<()>,
}

fn field<F>(form: &UseStateHandle<PetForm>, apply: F) -> Callback<Event>
where
    F: Fn(&mut PetForm, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(PetModal)]
pub fn pet_modal(props: &PetModalProps) -> Html {
    let form = use_state(PetForm::default);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let success = use_state(|| false);
    let api = ApiClient::new();

    // Reset state when the modal opens.
    use_effect_with((props.is_open, props.initial.clone()), {
        let form = form.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let success = success.clone();
        move |(is_open, initial): &(bool, Option<Pet>)| {
            if *is_open {
                form.set(
                    initial
                        .as_ref()
                        .map(PetForm::from_pet)
                        .unwrap_or_default(),
                );
                submitting.set(false);
                error.set(None);
                success.set(false);
            }
            || ()
        }
    });

    let on_species_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(species) = Species::parse(&select.value()) {
                let mut next = (*form).clone();
                next.species = species;
                form.set(next);
            }
        })
    };

    let on_gender_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.gender = select.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let success = success.clone();
        let mode = props.mode;
        let on_saved = props.on_saved.clone();
        let on_close = props.on_close.clone();
        let api = api.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let plan = pet_submit_plan(mode);
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

                match api.submit(&plan, &payload, "Failed to save pet").await {
                    Ok(()) => {
                        success.set(true);
                        on_saved.emit(());
                        // Leave the confirmation readable before closing.
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
                <h3>{props.mode.title("Pet")}</h3>

                {if let Some(error) = (*error).as_ref() {
                    html! { <div class="alert alert-error">{error}</div> }
                } else { html! {} }}
                {if *success {
                    html! { <div class="alert alert-success">{"Pet saved successfully!"}</div> }
                } else { html! {} }}

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="pet-name">{"Name"}</label>
                        <input
                            type="text"
                            id="pet-name"
                            required=true
                            value={form.name.clone()}
                            onchange={field(&form, |f, v| f.name = v)}
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="pet-species">{"Species"}</label>
                            <select id="pet-species" onchange={on_species_change}>
                                <option value="dog" selected={form.species == Species::Dog}>{"Dog"}</option>
                                <option value="cat" selected={form.species == Species::Cat}>{"Cat"}</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="pet-breed">{"Breed"}</label>
                            <input
                                type="text"
                                id="pet-breed"
                                value={form.breed.clone()}
                                onchange={field(&form, |f, v| f.breed = v)}
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="pet-birth-date">{"Birth Date"}</label>
                            <input
                                type="date"
                                id="pet-birth-date"
                                value={form.birth_date.clone()}
                                onchange={field(&form, |f, v| f.birth_date = v)}
                            />
                        </div>
                        <div class="form-group">
                            <label for="pet-gender">{"Gender"}</label>
                            <select id="pet-gender" onchange={on_gender_change}>
                                <option value="" selected={form.gender.is_empty()}>{"-"}</option>
                                <option value="male" selected={form.gender == "male"}>{"Male"}</option>
                                <option value="female" selected={form.gender == "female"}>{"Female"}</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="pet-weight">{"Weight (kg)"}</label>
                            <input
                                type="number"
                                id="pet-weight"
                                step="0.1"
                                min="0"
                                value={form.weight.clone()}
                                onchange={field(&form, |f, v| f.weight = v)}
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="pet-owner-name">{"Owner Name"}</label>
                        <input
                            type="text"
                            id="pet-owner-name"
                            value={form.owner_name.clone()}
                            onchange={field(&form, |f, v| f.owner_name = v)}
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="pet-owner-phone">{"Owner Phone"}</label>
                            <input
                                type="tel"
                                id="pet-owner-phone"
                                value={form.owner_phone.clone()}
                                onchange={field(&form, |f, v| f.owner_phone = v)}
                            />
                        </div>
                        <div class="form-group">
                            <label for="pet-owner-email">{"Owner Email"}</label>
                            <input
                                type="email"
                                id="pet-owner-email"
                                value={form.owner_email.clone()}
                                onchange={field(&form, |f, v| f.owner_email = v)}
                            />
                        </div>
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
