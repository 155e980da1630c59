use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Shown in the parser result area when there is no text to send
pub const PARSE_PROMPT: &str = "Type something first.";
pub const PARSE_ERROR: &str = "Error talking to AI.";
/// Placeholder set on the insights box while a request is in flight
pub const INSIGHTS_PLACEHOLDER: &str = "Thinking...";
pub const INSIGHTS_FALLBACK: &str = "No insights.";
pub const INSIGHTS_ERROR: &str = "Error getting AI insights.";

/// A single expense as returned by `GET /api/expense`.
///
/// Fields are kept as raw JSON so that one oddly typed row never rejects the
/// whole list. Keys the table does not show (such as `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub date: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub amount: Value,
}

impl Expense {
    /// Table cells in display order: date, description, category, amount
    pub fn cells(&self) -> [String; 4] {
        [
            cell_text(&self.date),
            cell_text(&self.description),
            cell_text(&self.category),
            cell_text(&self.amount),
        ]
    }
}

/// Body of `POST /api/expense`. Values are sent exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

impl ParseTextRequest {
    /// Builds a request for the given input, or `None` when the input is blank.
    /// The text is sent untrimmed.
    pub fn from_input(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            None
        } else {
            Some(Self {
                text: text.to_string(),
            })
        }
    }
}

/// Response of `POST /api/ai/parse-text`, kept as raw JSON so it can be shown verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParseTextResponse(pub Value);

impl ParseTextResponse {
    /// Two-space indented JSON in server key order
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// Form values suggested by the response.
    ///
    /// `amount` is taken whenever the key exists, even when it is `null`.
    /// `category` and `description` are only taken when truthy.
    pub fn suggestion(&self) -> FieldSuggestion {
        let amount = self.0.get("amount").map(display_value);
        let category = self
            .0
            .get("category")
            .filter(|v| is_truthy(v))
            .map(display_value);
        let description = self
            .0
            .get("description")
            .filter(|v| is_truthy(v))
            .map(display_value);

        FieldSuggestion {
            amount,
            category,
            description,
        }
    }
}

/// Response of `GET /api/ai/insights`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightsResponse(pub Value);

impl InsightsResponse {
    pub fn text(&self) -> String {
        self.0
            .get("insights")
            .filter(|v| is_truthy(v))
            .map(display_value)
            .unwrap_or_else(|| INSIGHTS_FALLBACK.to_string())
    }
}

/// Field values to overwrite after an AI parse. `None` leaves the field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSuggestion {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Input fields of the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Amount,
    Category,
    Description,
}

impl FormField {
    /// DOM id (and input name) of the field
    pub fn id(&self) -> &'static str {
        match self {
            FormField::Date => "date",
            FormField::Amount => "amount",
            FormField::Category => "category",
            FormField::Description => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetField(FormField, String),
    /// Clears amount and description after a submission; date and category stay
    ClearAfterSubmit,
    ApplySuggestion(FieldSuggestion),
}

/// Current contents of the expense form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl ExpenseForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Date => &self.date,
            FormField::Amount => &self.amount,
            FormField::Category => &self.category,
            FormField::Description => &self.description,
        }
    }

    pub fn to_request(&self) -> CreateExpenseRequest {
        CreateExpenseRequest {
            date: self.date.clone(),
            amount: self.amount.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetField(field, value) => {
                let slot = match field {
                    FormField::Date => &mut self.date,
                    FormField::Amount => &mut self.amount,
                    FormField::Category => &mut self.category,
                    FormField::Description => &mut self.description,
                };
                *slot = value;
            }
            FormAction::ClearAfterSubmit => {
                self.amount.clear();
                self.description.clear();
            }
            FormAction::ApplySuggestion(suggestion) => {
                if let Some(amount) = suggestion.amount {
                    self.amount = amount;
                }
                if let Some(category) = suggestion.category {
                    self.category = category;
                }
                if let Some(description) = suggestion.description {
                    self.description = description;
                }
            }
        }
    }
}

/// Lifecycle shared by every request flow. There is no cancelled state:
/// a request, once issued, always runs to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowStatus {
    #[default]
    Idle,
    Requesting,
    Rendered,
    ErrorDisplayed,
}

impl FlowStatus {
    pub fn is_requesting(&self) -> bool {
        matches!(self, FlowStatus::Requesting)
    }
}

/// What the insights box currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InsightsView {
    #[default]
    Idle,
    Thinking,
    Rendered(String),
    Failed,
}

impl InsightsView {
    pub fn from_response(response: &InsightsResponse) -> Self {
        InsightsView::Rendered(response.text())
    }

    pub fn status(&self) -> FlowStatus {
        match self {
            InsightsView::Idle => FlowStatus::Idle,
            InsightsView::Thinking => FlowStatus::Requesting,
            InsightsView::Rendered(_) => FlowStatus::Rendered,
            InsightsView::Failed => FlowStatus::ErrorDisplayed,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            InsightsView::Idle => "",
            InsightsView::Thinking => INSIGHTS_PLACEHOLDER,
            InsightsView::Rendered(text) => text,
            InsightsView::Failed => INSIGHTS_ERROR,
        }
    }
}

/// Truthiness of a JSON value the way a browser script would judge it
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text written into an input or text node for a JSON value.
/// `null` becomes an empty string; arrays and objects are written as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Text of a table cell. Unlike [`display_value`], `null` is spelled out.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => display_value(other),
    }
}

/// Formats a JSON number without a trailing `.0` on whole floats (`12.0` -> `12`)
pub fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_expenses() -> Vec<Expense> {
        serde_json::from_value(json!([
            {"id": 3, "date": "2024-01-03", "amount": 12.0, "category": "Food", "description": "Lunch"},
            {"id": 2, "date": "2024-01-02", "amount": "7.25", "category": "Travel", "description": "Bus"},
            {"id": 1, "date": "2024-01-01", "amount": 100, "category": "Rent", "description": null}
        ]))
        .unwrap()
    }

    #[test]
    fn test_expense_cells_in_display_order() {
        let expenses = sample_expenses();
        assert_eq!(expenses.len(), 3);
        assert_eq!(expenses[0].cells(), ["2024-01-03", "Lunch", "Food", "12"]);
        assert_eq!(expenses[1].cells(), ["2024-01-02", "Bus", "Travel", "7.25"]);
        assert_eq!(expenses[2].cells(), ["2024-01-01", "null", "Rent", "100"]);
    }

    #[test]
    fn test_expense_list_preserves_server_order() {
        let dates: Vec<String> = sample_expenses().iter().map(|e| e.cells()[0].clone()).collect();
        assert_eq!(dates, vec!["2024-01-03", "2024-01-02", "2024-01-01"]);
    }

    #[test]
    fn test_expense_list_tolerates_odd_field_types() {
        let expenses: Vec<Expense> = serde_json::from_value(json!([
            {"id": "a1b2", "date": "2024-02-01", "amount": 3.5, "category": "Misc", "description": 42},
            {"date": "2024-02-02", "amount": "1", "category": null}
        ]))
        .unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].cells(), ["2024-02-01", "42", "Misc", "3.5"]);
        assert_eq!(expenses[1].cells(), ["2024-02-02", "null", "null", "1"]);
    }

    #[test]
    fn test_non_list_body_is_not_an_expense_list() {
        let body = json!({"error": "Not logged in"});
        assert!(serde_json::from_value::<Vec<Expense>>(body).is_err());
    }

    #[test]
    fn test_create_request_body_matches_form() {
        let mut form = ExpenseForm::default();
        form.apply(FormAction::SetField(FormField::Date, "2024-01-01".to_string()));
        form.apply(FormAction::SetField(FormField::Amount, "12.50".to_string()));
        form.apply(FormAction::SetField(FormField::Category, "Food".to_string()));
        form.apply(FormAction::SetField(FormField::Description, "Lunch".to_string()));

        let body = serde_json::to_string(&form.to_request()).unwrap();
        assert_eq!(
            body,
            r#"{"date":"2024-01-01","amount":"12.50","category":"Food","description":"Lunch"}"#
        );
    }

    #[test]
    fn test_empty_form_is_sent_verbatim() {
        let body = serde_json::to_string(&ExpenseForm::default().to_request()).unwrap();
        assert_eq!(body, r#"{"date":"","amount":"","category":"","description":""}"#);
    }

    #[test]
    fn test_clear_after_submit_keeps_date_and_category() {
        let mut form = ExpenseForm {
            date: "2024-01-01".to_string(),
            amount: "12.50".to_string(),
            category: "Food".to_string(),
            description: "Lunch".to_string(),
        };
        form.apply(FormAction::ClearAfterSubmit);

        assert_eq!(form.date, "2024-01-01");
        assert_eq!(form.category, "Food");
        assert!(form.amount.is_empty());
        assert!(form.description.is_empty());
    }

    #[test]
    fn test_parse_request_skips_blank_input() {
        assert_eq!(ParseTextRequest::from_input(""), None);
        assert_eq!(ParseTextRequest::from_input("   \n\t"), None);

        let request = ParseTextRequest::from_input("  spent 200 on rent ").unwrap();
        assert_eq!(request.text, "  spent 200 on rent ");
    }

    #[test]
    fn test_suggestion_leaves_missing_description_alone() {
        let response = ParseTextResponse(json!({"amount": 42, "category": "Travel"}));
        let mut form = ExpenseForm {
            date: "2024-01-01".to_string(),
            amount: "1".to_string(),
            category: "Food".to_string(),
            description: "Keep me".to_string(),
        };
        form.apply(FormAction::ApplySuggestion(response.suggestion()));

        assert_eq!(form.amount, "42");
        assert_eq!(form.category, "Travel");
        assert_eq!(form.description, "Keep me");
        assert_eq!(form.date, "2024-01-01");
    }

    #[test]
    fn test_suggestion_presence_and_truthiness() {
        let suggestion = ParseTextResponse(json!({
            "amount": null,
            "category": "",
            "description": 0
        }))
        .suggestion();
        assert_eq!(suggestion.amount, Some(String::new()));
        assert_eq!(suggestion.category, None);
        assert_eq!(suggestion.description, None);

        let suggestion = ParseTextResponse(json!({"amount": 0, "description": "Chai"})).suggestion();
        assert_eq!(suggestion.amount, Some("0".to_string()));
        assert_eq!(suggestion.description, Some("Chai".to_string()));
    }

    #[test]
    fn test_non_object_parse_response_suggests_nothing() {
        let suggestion = ParseTextResponse(json!(["amount", 5])).suggestion();
        assert_eq!(suggestion, FieldSuggestion::default());
    }

    #[test]
    fn test_pretty_print_keeps_server_key_order() {
        let response: ParseTextResponse =
            serde_json::from_str(r#"{"category":"Travel","amount":42}"#).unwrap();
        assert_eq!(response.pretty(), "{\n  \"category\": \"Travel\",\n  \"amount\": 42\n}");
    }

    #[test]
    fn test_insights_text_and_fallback() {
        let response = InsightsResponse(json!({"insights": "- Rent is high"}));
        assert_eq!(response.text(), "- Rent is high");

        for body in [json!({}), json!({"insights": ""}), json!({"insights": null}), json!([])] {
            assert_eq!(InsightsResponse(body).text(), INSIGHTS_FALLBACK);
        }
    }

    #[test]
    fn test_insights_view_transitions() {
        let mut view = InsightsView::default();
        assert_eq!(view.status(), FlowStatus::Idle);

        view = InsightsView::Thinking;
        assert_eq!(view.text(), INSIGHTS_PLACEHOLDER);
        assert!(view.status().is_requesting());

        view = InsightsView::from_response(&InsightsResponse(json!({"insights": "Spend less"})));
        assert_eq!(view.status(), FlowStatus::Rendered);
        assert_eq!(view.text(), "Spend less");

        view = InsightsView::Failed;
        assert_eq!(view.status(), FlowStatus::ErrorDisplayed);
        assert_eq!(view.text(), INSIGHTS_ERROR);
    }

    #[test]
    fn test_format_number() {
        let cases = [
            (json!(42), "42"),
            (json!(12.0), "12"),
            (json!(12.5), "12.5"),
            (json!(-3), "-3"),
            (json!(-0.0), "0"),
            (json!(0.1), "0.1"),
        ];
        for (value, expected) in cases {
            assert_eq!(display_value(&value), expected);
        }
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1.5)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_form_field_ids() {
        assert_eq!(FormField::Date.id(), "date");
        assert_eq!(FormField::Amount.id(), "amount");
        assert_eq!(FormField::Category.id(), "category");
        assert_eq!(FormField::Description.id(), "description");
    }
}
