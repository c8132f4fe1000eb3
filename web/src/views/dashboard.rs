use super::components::MetricCard;
use crate::{use_api, use_toast};
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let mut toast = use_toast();

    let stats = use_resource(move || {
        let api = api.clone();
        async move {
            match api.lead_stats().await {
                Ok(stats) => Some(stats),
                Err(e) => {
                    toast.api_error("Failed to fetch stats", &e);
                    None
                }
            }
        }
    });

    let stats = stats.cloned().flatten().unwrap_or_default();

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard Overview" }
            }
            div { class: "metric-grid",
                MetricCard { title: "Total Leads", icon: "📊", value: stats.total_leads }
                MetricCard { title: "New Leads", icon: "🆕", value: stats.new_leads }
                MetricCard { title: "Converted Leads", icon: "✅", value: stats.converted_leads }
                MetricCard { title: "Pending Follow-ups", icon: "⏳", value: stats.pending_follow_ups }
            }
        }
    }
}
