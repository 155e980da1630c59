pub mod use_ai_insights;
pub mod use_ai_parser;
pub mod use_expense_form;
pub mod use_expenses;
