use shared::InsightsView;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "ai-insights";

pub struct UseAiInsightsResult {
    pub view: InsightsView,
    pub request_insights: Callback<()>,
}

/// Fetches AI insights on demand.
///
/// The placeholder is set before the request goes out. Requests are never
/// cancelled or serialized, so with overlapping clicks the response that
/// resolves last is the one left on screen.
#[hook]
pub fn use_ai_insights(api_client: &ApiClient) -> UseAiInsightsResult {
    let view = use_state(InsightsView::default);

    let request_insights = {
        let api_client = api_client.clone();
        let view = view.clone();

        use_callback((), move |_, _| {
            view.set(InsightsView::Thinking);

            let api_client = api_client.clone();
            let view = view.clone();
            spawn_local(async move {
                match api_client.get_insights().await {
                    Ok(response) => view.set(InsightsView::from_response(&response)),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("AI insights failed: {}", e));
                        view.set(InsightsView::Failed);
                    }
                }
            });
        })
    };

    UseAiInsightsResult {
        view: (*view).clone(),
        request_insights,
    }
}
