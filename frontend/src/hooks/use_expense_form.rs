use std::rc::Rc;

use shared::{ExpenseForm, FormAction, FormField};
use yew::prelude::*;

/// Reducer state behind the expense form inputs. Actions are applied to the
/// latest state, so async completions never write back a stale snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseFormState {
    pub form: ExpenseForm,
}

impl Reducible for ExpenseFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.form.clone();
        form.apply(action);
        Rc::new(Self { form })
    }
}

pub struct UseExpenseFormResult {
    pub form: ExpenseForm,
    pub dispatcher: UseReducerDispatcher<ExpenseFormState>,
    pub on_field_input: Callback<(FormField, String)>,
}

#[hook]
pub fn use_expense_form() -> UseExpenseFormResult {
    let state = use_reducer(ExpenseFormState::default);
    let dispatcher = state.dispatcher();

    let on_field_input = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |(field, value): (FormField, String), _| {
            dispatcher.dispatch(FormAction::SetField(field, value));
        })
    };

    UseExpenseFormResult {
        form: state.form.clone(),
        dispatcher,
        on_field_input,
    }
}
