use shared::Pet;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PetsViewProps {
    pub pets: Vec<Pet>,
    pub loading: bool,
    pub on_add: Callback<()>,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

fn dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[function_component(PetsView)]
pub fn pets_view(props: &PetsViewProps) -> Html {
    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <section class="pets-section">
            <div class="section-header">
                <h2>{"Pets"}</h2>
                <button class="btn btn-primary" onclick={on_add}>{"➕ Add Pet"}</button>
            </div>

            {if props.loading {
                html! { <div class="loading">{"Loading pets..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Species"}</th>
                                    <th>{"Breed"}</th>
                                    <th>{"Owner"}</th>
                                    <th>{"Phone"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.pets.iter().map(|pet| {
                                    let edit = {
                                        let on_edit = props.on_edit.clone();
                                        let id = pet.id;
                                        Callback::from(move |_: MouseEvent| on_edit.emit(id))
                                    };
                                    let delete = {
                                        let on_delete = props.on_delete.clone();
                                        let id = pet.id;
                                        Callback::from(move |_: MouseEvent| on_delete.emit(id))
                                    };
                                    html! {
                                        <tr key={pet.id}>
                                            <td>{&pet.name}</td>
                                            <td>{pet.species.label()}</td>
                                            <td>{dash(&pet.breed)}</td>
                                            <td>{dash(&pet.owner_name)}</td>
                                            <td>{dash(&pet.owner_phone)}</td>
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
            }}
        </section>
    }
}
