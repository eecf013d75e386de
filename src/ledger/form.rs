use maud::{Markup, html};

use crate::html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE};

/// Prefilled values and limits for the add-transaction form.
pub(crate) struct TransactionFormDefaults {
    /// The latest timestamp the date input accepts, in `datetime-local`
    /// format.
    pub(crate) max_timestamp: String,
}

pub(crate) fn transaction_form_fields(defaults: &TransactionFormDefaults) -> Markup {
    html! {
        div
        {
            label
                for="id"
                class=(FORM_LABEL_STYLE)
            {
                "ID"
            }

            input
                name="id"
                id="id"
                type="number"
                step="1"
                min="1"
                placeholder="1"
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="datetime-local"
                step="1"
                max=(defaults.max_timestamp)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            input
                name="amount"
                id="amount"
                type="number"
                step="0.01"
                placeholder="-20.00"
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            input
                name="category"
                id="category"
                type="text"
                placeholder="Transport"
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Description"
            }

            input
                name="description"
                id="description"
                type="text"
                placeholder="Taxi fare"
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
