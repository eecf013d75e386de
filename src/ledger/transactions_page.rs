//! The ledger page: the add-transaction form, the transaction table, the
//! running total, and the detail panel.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{OffsetDateTime, UtcOffset};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    ledger::Ledger,
    timezone::get_local_offset,
};

use super::{
    details_endpoint::details_panel,
    form::{TransactionFormDefaults, transaction_form_fields},
    format::datetime_attr,
    models::TransactionTableRow,
};

fn amount_class(amount: f64) -> &'static str {
    // Strictly positive amounts read as income, everything else as expense.
    if amount > 0.0 {
        "text-green-700 dark:text-green-300"
    } else {
        "text-red-700 dark:text-red-300"
    }
}

/// The state needed to render the ledger page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The display timezone as a canonical timezone name.
    pub local_timezone: String,
    /// The in-memory transaction ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for rendering the ledger page.
///
/// # Panics
///
/// Panics if the lock for the ledger is already held by the same thread.
pub async fn get_transactions_page(State(state): State<TransactionsPageState>) -> Response {
    let offset = match get_local_offset(&state.local_timezone) {
        Some(offset) => offset,
        None => return Error::InvalidTimezone(state.local_timezone).into_response(),
    };

    let ledger = state.ledger.lock().unwrap();
    let rows: Vec<TransactionTableRow> = ledger
        .entries()
        .iter()
        .map(|transaction| TransactionTableRow::new_from_transaction(transaction, offset))
        .collect();
    let total = ledger.total();
    drop(ledger);

    transactions_view(&rows, total, offset).into_response()
}

fn transactions_view(rows: &[TransactionTableRow], total: f64, offset: UtcOffset) -> Markup {
    let form_defaults = TransactionFormDefaults {
        max_timestamp: datetime_attr(OffsetDateTime::now_utc(), offset),
    };

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 lg:max-w-5xl lg:w-full lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }
                }

                section class="rounded bg-gray-50 dark:bg-gray-800 p-4"
                {
                    h2 class="text-lg font-semibold mb-3" { "Add Transaction" }

                    form
                        hx-post=(endpoints::TRANSACTIONS_API)
                        hx-target-error="#alert-container"
                        class="grid gap-4 lg:grid-cols-5 items-end"
                    {
                        (transaction_form_fields(&form_defaults))

                        button type="submit" class=(BUTTON_PRIMARY_STYLE)
                        {
                            "Add Transaction"
                        }
                    }
                }

                section class="rounded bg-gray-50 dark:bg-gray-800 overflow-hidden"
                {
                    table class="w-full my-2 text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for row in rows {
                                (transaction_row_view(row))
                            }

                            @if rows.is_empty() {
                                tr
                                {
                                    td
                                        colspan="6"
                                        data-empty-state="true"
                                        class="px-6 py-4 text-center"
                                    {
                                        "No transactions in the ledger."
                                    }
                                }
                            }
                        }
                    }

                    div class="flex justify-end gap-2 px-6 py-3 font-semibold text-gray-900 dark:text-white"
                    {
                        span { "Total:" }
                        span id="total-amount" { (format_currency(total)) }
                    }
                }

                aside class="rounded bg-gray-50 dark:bg-gray-800 p-4"
                {
                    h2 class="text-lg font-semibold mb-2" { "Details" }

                    (details_panel(""))
                }
            }
        }
    };

    base("Transactions", &content)
}

fn transaction_row_view(row: &TransactionTableRow) -> Markup {
    let amount_str = format_currency(row.amount);
    let confirm_message = format!(
        "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
        row.short_description
    );

    html! {
        tr
            class={ (TABLE_ROW_STYLE) " " (amount_class(row.amount)) }
            data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE) { (row.id) }
            td class=(TABLE_CELL_STYLE)
            {
                time datetime=(row.timestamp_attr) { (row.timestamp_label) }
            }
            td class="px-6 py-4 text-right" { (amount_str) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(CATEGORY_BADGE_STYLE) { (row.category) }
            }
            td
                class={ (TABLE_CELL_STYLE) " cursor-pointer" }
                title=[row.tooltip.as_deref()]
                hx-get=(row.details_url)
                hx-target="#transaction-details"
                hx-swap="outerHTML"
            {
                (row.short_description)
            }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    hx-delete=(row.delete_url)
                    hx-target="closest tr"
                    hx-swap="delete"
                    hx-confirm=(confirm_message)
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod view_tests {
    use std::sync::{Arc, Mutex};

    use axum::{body::Body, extract::State, http::StatusCode, response::Response};
    use scraper::{ElementRef, Html, Selector};
    use time::{Duration, OffsetDateTime};

    use crate::{
        endpoints,
        ledger::{Ledger, NewTransaction},
    };

    use super::{TransactionsPageState, get_transactions_page};

    fn get_test_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        let timestamp = OffsetDateTime::now_utc() - Duration::hours(1);

        let seed = [
            (1, "Food", "Dinner at a restaurant", 50.0),
            (2, "Transport", "Taxi fare", -20.0),
            (3, "Utilities", "Electricity bill for the whole month", 30.0),
        ];
        for (id, category, description, amount) in seed {
            ledger
                .add(NewTransaction {
                    id,
                    timestamp,
                    category: category.to_owned(),
                    description: description.to_owned(),
                    amount,
                })
                .expect("Could not add transaction");
        }

        ledger
    }

    fn get_test_state(ledger: Ledger) -> TransactionsPageState {
        TransactionsPageState {
            local_timezone: "Etc/UTC".to_owned(),
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    #[tokio::test]
    async fn page_renders_form_table_and_total() {
        let state = get_test_state(get_test_ledger());

        let response = get_transactions_page(State(state)).await;

        assert_status_ok(&response);
        assert_html_content_type(&response);
        let document = parse_html(response).await;
        assert_valid_html(&document);
        assert_correct_form(&document);
        assert_row_count(&document, 3);
        assert_total(&document, "$60.00");
    }

    #[tokio::test]
    async fn page_renders_empty_state_without_transactions() {
        let state = get_test_state(Ledger::new());

        let response = get_transactions_page(State(state)).await;

        let document = parse_html(response).await;
        assert_row_count(&document, 0);
        assert_total(&document, "$0.00");

        let empty_state_selector = Selector::parse("td[data-empty-state=true]").unwrap();
        assert_eq!(document.select(&empty_state_selector).count(), 1);
    }

    #[tokio::test]
    async fn rows_are_colour_coded_by_amount_sign() {
        let state = get_test_state(get_test_ledger());

        let response = get_transactions_page(State(state)).await;

        let document = parse_html(response).await;
        let rows = select_rows(&document);

        assert_row_class_contains(&rows[0], "text-green-700");
        assert_row_class_contains(&rows[1], "text-red-700");
        assert_row_class_contains(&rows[2], "text-green-700");
    }

    #[tokio::test]
    async fn long_descriptions_are_shortened_with_tooltip() {
        let state = get_test_state(get_test_ledger());

        let response = get_transactions_page(State(state)).await;

        let document = parse_html(response).await;
        let rows = select_rows(&document);
        let description_cell = description_cell(&rows[2]);

        let text = description_cell.text().collect::<String>();
        assert_eq!(text.trim(), "Electricity bill for the");
        assert_eq!(
            description_cell.value().attr("title"),
            Some("Electricity bill for the whole month")
        );
    }

    #[tokio::test]
    async fn rows_request_details_and_deletion() {
        let state = get_test_state(get_test_ledger());

        let response = get_transactions_page(State(state)).await;

        let document = parse_html(response).await;
        let rows = select_rows(&document);
        let description_cell = description_cell(&rows[1]);

        assert_eq!(
            description_cell.value().attr("hx-get"),
            Some("/transactions/2/details")
        );
        assert_eq!(
            description_cell.value().attr("hx-target"),
            Some("#transaction-details")
        );

        let button_selector = Selector::parse("button[hx-delete]").unwrap();
        let delete_button = rows[1]
            .select(&button_selector)
            .next()
            .expect("want a delete button in the row");
        assert_eq!(
            delete_button.value().attr("hx-delete"),
            Some("/api/transactions/2")
        );
    }

    #[track_caller]
    fn assert_status_ok(response: &Response<Body>) {
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[track_caller]
    fn assert_html_content_type(response: &Response<Body>) {
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .unwrap()
                .to_str()
                .unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[track_caller]
    fn assert_correct_form(document: &Html) {
        let form_selector = Selector::parse("form").unwrap();
        let forms = document.select(&form_selector).collect::<Vec<_>>();
        assert_eq!(forms.len(), 1, "want 1 form, got {}", forms.len());

        let form = forms.first().unwrap();
        let hx_post = form.value().attr("hx-post");
        assert_eq!(
            hx_post,
            Some(endpoints::TRANSACTIONS_API),
            "want form with attribute hx-post=\"{}\", got {hx_post:?}",
            endpoints::TRANSACTIONS_API,
        );
    }

    #[track_caller]
    fn assert_row_count(document: &Html, expected: usize) {
        let rows = Selector::parse("tr[data-transaction-row=true]").unwrap();
        let row_count = document.select(&rows).count();
        assert_eq!(
            row_count, expected,
            "want {expected} transaction rows, got {row_count}"
        );
    }

    #[track_caller]
    fn assert_total(document: &Html, expected: &str) {
        let total_selector = Selector::parse("#total-amount").unwrap();
        let total = document
            .select(&total_selector)
            .next()
            .expect("want an element with the id total-amount");
        let text = total.text().collect::<String>();
        assert_eq!(text.trim(), expected);
    }

    fn select_rows<'a>(document: &'a Html) -> Vec<ElementRef<'a>> {
        let rows = Selector::parse("tr[data-transaction-row=true]").unwrap();
        document.select(&rows).collect()
    }

    fn description_cell<'a>(row: &ElementRef<'a>) -> ElementRef<'a> {
        let selector = Selector::parse("td[hx-get]").unwrap();
        row.select(&selector)
            .next()
            .expect("want a description cell that requests details")
    }

    #[track_caller]
    fn assert_row_class_contains(row: &ElementRef, class: &str) {
        let row_class = row.value().attr("class").unwrap_or_default();
        assert!(
            row_class.contains(class),
            "want row class to contain {class}, got {row_class:?}"
        );
    }

    async fn parse_html(response: Response) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }
}
