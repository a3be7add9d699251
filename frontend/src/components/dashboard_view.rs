use yew::prelude::*;

use crate::hooks::use_dashboard::DashboardState;

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub state: DashboardState,
    /// Admin only.
    pub show_users: bool,
    /// Admin or report access.
    pub show_upcoming: bool,
}

fn stat_card(icon: &str, label: &str, value: Option<usize>) -> Html {
    let display = value.map(|v| v.to_string()).unwrap_or_else(|| "–".to_string());
    html! {
        <div class="stat-card">
            <span class="stat-icon">{icon}</span>
            <div class="stat-value">{display}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    html! {
        <section class="dashboard-section">
            <h2>{"Dashboard"}</h2>
            <div class="stats-grid">
                {stat_card("🐾", "Pets", props.state.total_pets)}
                {stat_card("💉", "Vaccinations", props.state.total_vaccinations)}
                {if props.show_users {
                    stat_card("👥", "Active Users", props.state.active_users)
                } else { html! {} }}
                {if props.show_upcoming {
                    stat_card("📅", "Upcoming Vaccinations", props.state.upcoming_vaccinations)
                } else { html! {} }}
            </div>
        </section>
    }
}
