use shared::{CreateExpenseRequest, Expense, ExpenseForm, FormAction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_expense_form::ExpenseFormState;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "expenses";

pub struct UseExpensesResult {
    pub expenses: Vec<Expense>,
    pub actions: UseExpensesActions,
}

#[derive(Clone)]
pub struct UseExpensesActions {
    pub submit_expense: Callback<()>,
}

/// Owns the expense table and the submit flow.
///
/// The table is loaded on mount and replaced wholesale on every refresh.
/// A submission that reaches the server clears amount and description and
/// refreshes the table, whatever status the server answered with.
#[hook]
pub fn use_expenses(
    api_client: &ApiClient,
    form: &ExpenseForm,
    form_dispatcher: UseReducerDispatcher<ExpenseFormState>,
) -> UseExpensesResult {
    let expenses = use_state(Vec::<Expense>::new);

    let refresh_expenses = {
        let api_client = api_client.clone();
        let expenses = expenses.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let expenses = expenses.clone();

            spawn_local(async move {
                Logger::debug_with_component(COMPONENT, "Loading expenses");

                match api_client.list_expenses().await {
                    Ok(data) => {
                        Logger::info_with_component(COMPONENT, &format!("Loaded {} expenses", data.len()));
                        expenses.set(data);
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to load expenses: {}", e));
                    }
                }
            });
        })
    };

    let submit_expense = {
        let api_client = api_client.clone();
        let refresh_expenses = refresh_expenses.clone();

        use_callback(form.to_request(), move |_, request: &CreateExpenseRequest| {
            let api_client = api_client.clone();
            let refresh_expenses = refresh_expenses.clone();
            let form_dispatcher = form_dispatcher.clone();
            let request = request.clone();

            spawn_local(async move {
                Logger::debug_with_component(COMPONENT, "Saving expense");

                match api_client.create_expense(&request).await {
                    Ok(()) => {
                        form_dispatcher.dispatch(FormAction::ClearAfterSubmit);
                        refresh_expenses.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to save expense: {}", e));
                    }
                }
            });
        })
    };

    // Load initial data
    use_effect_with((), {
        let refresh_expenses = refresh_expenses.clone();
        move |_| {
            refresh_expenses.emit(());
            || ()
        }
    });

    UseExpensesResult {
        expenses: (*expenses).clone(),
        actions: UseExpensesActions { submit_expense },
    }
}
