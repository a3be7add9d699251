use shared::{format_date, Pet, Vaccination};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VaccinationsViewProps {
    /// Pets offered in the selector.
    pub pets: Vec<Pet>,
    pub current_pet_id: Option<i64>,
    pub vaccinations: Vec<Vaccination>,
    pub on_select_pet: Callback<Option<i64>>,
    pub on_add: Callback<()>,
    /// Edit works off the already-loaded record; there is no
    /// vaccination get-by-id endpoint.
    pub on_edit: Callback<Vaccination>,
    pub on_delete: Callback<i64>,
}

fn dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[function_component(VaccinationsView)]
pub fn vaccinations_view(props: &VaccinationsViewProps) -> Html {
    let on_pet_change = {
        let on_select_pet = props.on_select_pet.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select_pet.emit(select.value().parse::<i64>().ok());
        })
    };

    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <section class="vaccinations-section">
            <div class="section-header">
                <h2>{"Vaccinations"}</h2>
                <button
                    class="btn btn-primary"
                    onclick={on_add}
                    disabled={props.current_pet_id.is_none()}
                >
                    {"💉 Add Vaccination"}
                </button>
            </div>

            <div class="form-group">
                <label for="pet-select">{"Pet"}</label>
                <select id="pet-select" onchange={on_pet_change}>
                    <option value="" selected={props.current_pet_id.is_none()}>
                        {"Select a pet..."}
                    </option>
                    {for props.pets.iter().map(|pet| {
                        html! {
                            <option
                                value={pet.id.to_string()}
                                selected={props.current_pet_id == Some(pet.id)}
                            >
                                {format!("{} ({})", pet.name, pet.species.label())}
                            </option>
                        }
                    })}
                </select>
            </div>

            {if props.current_pet_id.is_some() {
                html! {
                    <div class="table-container">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Pet"}</th>
                                    <th>{"Vaccine"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Dose"}</th>
                                    <th>{"Applied"}</th>
                                    <th>{"Next Dose"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.vaccinations.iter().map(|vaccination| {
                                    let edit = {
                                        let on_edit = props.on_edit.clone();
                                        let record = vaccination.clone();
                                        Callback::from(move |_: MouseEvent| on_edit.emit(record.clone()))
                                    };
                                    let delete = {
                                        let on_delete = props.on_delete.clone();
                                        let id = vaccination.id;
                                        Callback::from(move |_: MouseEvent| on_delete.emit(id))
                                    };
                                    let pet_name = vaccination
                                        .pet
                                        .as_ref()
                                        .map(|p| p.name.clone())
                                        .unwrap_or_else(|| "N/A".to_string());
                                    let dose = vaccination
                                        .dose_number
                                        .map(|d| d.to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    let next_dose = vaccination
                                        .next_dose_date
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".to_string());
                                    html! {
                                        <tr key={vaccination.id}>
                                            <td>{pet_name}</td>
                                            <td>{&vaccination.vaccine_name}</td>
                                            <td>{dash(&vaccination.vaccine_type)}</td>
                                            <td>{dose}</td>
                                            <td>{format_date(&vaccination.application_date)}</td>
                                            <td>{next_dose}</td>
                                            <td>
                                                <button class="btn" onclick={edit}>{"✏️ Edit"}</button>
                                                <button class="btn btn-danger" onclick={delete}>{"🗑️ Delete"}</button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            } else {
                html! { <div class="empty-hint">{"Choose a pet to see its vaccinations."}</div> }
            }}
        </section>
    }
}
