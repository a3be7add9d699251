use shared::format_date;
use yew::prelude::*;

use crate::hooks::use_schedule::ScheduleState;

#[derive(Properties, PartialEq)]
pub struct ReportsViewProps {
    pub state: ScheduleState,
    pub on_load: Callback<()>,
}

#[function_component(ReportsView)]
pub fn reports_view(props: &ReportsViewProps) -> Html {
    let on_load = {
        let on_load = props.on_load.clone();
        Callback::from(move |_: MouseEvent| on_load.emit(()))
    };

    html! {
        <section class="reports-section">
            <div class="section-header">
                <h2>{"Reports"}</h2>
                <button class="btn btn-primary" onclick={on_load} disabled={props.state.loading}>
                    {if props.state.loading { "Loading..." } else { "📅 Vaccination Schedule" }}
                </button>
            </div>

            {if let Some(error) = props.state.error.as_ref() {
                html! { <div class="alert alert-error">{error}</div> }
            } else { html! {} }}

            {match props.state.entries.as_ref() {
                None => html! {
                    <div class="empty-hint">{"Run the report to see vaccinations due in the next 30 days."}</div>
                },
                Some(entries) if entries.is_empty() => html! {
                    <div class="alert alert-success">{"No vaccinations scheduled for the next 30 days."}</div>
                },
                Some(entries) => html! {
                    <div class="table-container">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Pet"}</th>
                                    <th>{"Vaccine"}</th>
                                    <th>{"Due Date"}</th>
                                    <th>{"Owner"}</th>
                                    <th>{"Phone"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for entries.iter().map(|entry| {
                                    html! {
                                        <tr>
                                            <td>{&entry.pet_name}</td>
                                            <td>{&entry.vaccine_name}</td>
                                            <td>{format_date(&entry.next_dose_date)}</td>
                                            <td>{entry.owner_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{entry.owner_phone.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                },
            }}
        </section>
    }
}
