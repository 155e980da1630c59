use shared::{FlowStatus, FormAction, ParseTextRequest, PARSE_ERROR, PARSE_PROMPT};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_expense_form::ExpenseFormState;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "ai-parser";

pub struct UseAiParserResult {
    pub text: String,
    pub result: String,
    pub status: FlowStatus,
    pub actions: UseAiParserActions,
}

#[derive(Clone)]
pub struct UseAiParserActions {
    pub on_text_input: Callback<String>,
    pub parse: Callback<()>,
}

/// Sends free text to the parse endpoint, shows the raw response and fills
/// the expense form from whichever suggested fields came back.
#[hook]
pub fn use_ai_parser(
    api_client: &ApiClient,
    form_dispatcher: UseReducerDispatcher<ExpenseFormState>,
) -> UseAiParserResult {
    let text = use_state(String::new);
    let result = use_state(String::new);
    let status = use_state(FlowStatus::default);

    let on_text_input = {
        let text = text.clone();
        use_callback((), move |value: String, _| {
            text.set(value);
        })
    };

    let parse = {
        let api_client = api_client.clone();
        let result = result.clone();
        let status = status.clone();

        use_callback((*text).clone(), move |_, text: &String| {
            let Some(request) = ParseTextRequest::from_input(text) else {
                result.set(PARSE_PROMPT.to_string());
                status.set(FlowStatus::Rendered);
                return;
            };

            let api_client = api_client.clone();
            let result = result.clone();
            let status = status.clone();
            let form_dispatcher = form_dispatcher.clone();
            status.set(FlowStatus::Requesting);

            spawn_local(async move {
                match api_client.parse_text(&request).await {
                    Ok(parsed) => {
                        result.set(parsed.pretty());
                        form_dispatcher.dispatch(FormAction::ApplySuggestion(parsed.suggestion()));
                        status.set(FlowStatus::Rendered);
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("AI parse failed: {}", e));
                        result.set(PARSE_ERROR.to_string());
                        status.set(FlowStatus::ErrorDisplayed);
                    }
                }
            });
        })
    };

    UseAiParserResult {
        text: (*text).clone(),
        result: (*result).clone(),
        status: *status,
        actions: UseAiParserActions { on_text_input, parse },
    }
}
