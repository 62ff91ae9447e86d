//! Finance display formatting

use crate::models::FinanceRecord;
use crate::models::date::format_date;
use crate::reports::FinanceReport;

/// Format a list of finance records as a table
pub fn format_finance_list(records: &[&FinanceRecord], currency: &str) -> String {
    if records.is_empty() {
        return "No finance records found.\n".to_string();
    }

    let category_width = records
        .iter()
        .map(|r| r.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<7}  {:>12}  {:<category_width$}  {:<10}  {}\n",
        "ID",
        "Type",
        "Amount",
        "Category",
        "Date",
        "Description",
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:->4}  {:-<7}  {:->12}  {:-<category_width$}  {:-<10}  {:-<20}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        category_width = category_width,
    ));

    for record in records {
        output.push_str(&format!(
            "{:>4}  {:<7}  {:>12}  {:<category_width$}  {:<10}  {}\n",
            record.id,
            record.entry_type,
            format!("{}{:.2}", currency, record.amount),
            record.category,
            format_date(record.date),
            record.description,
            category_width = category_width,
        ));
    }

    output
}

/// Format a finance report: the records in the window plus the aggregates.
/// The empty window renders a distinct message instead of an empty table.
pub fn format_report(report: &FinanceReport, currency: &str) -> String {
    let mut output = format!(
        "Report for {} to {}:\n\n",
        format_date(report.start_date),
        format_date(report.end_date)
    );

    if report.is_empty() {
        output.push_str("No records in this period.\n");
        return output;
    }

    let refs: Vec<&FinanceRecord> = report.records.iter().collect();
    output.push_str(&format_finance_list(&refs, currency));
    output.push('\n');
    output.push_str(&format!(
        "Income:  {}{:.2}\nExpense: {}{:.2}\nBalance: {}{:.2}\n",
        currency,
        report.total_income,
        currency,
        report.total_expense,
        currency,
        report.balance
    ));

    output
}
