//! Alert partials for surfacing blocking notices to the user.
//!
//! Validation failures are rendered into the page's alert container via the
//! htmx response-targets extension, so the offending form submission leaves
//! the rest of the page untouched.

use maud::{Markup, html};

/// Render an error alert with a `message` headline and a `details` body.
pub fn alert_error(message: &str, details: &str) -> Markup {
    html! {
        div
            class="w-full rounded border border-red-300 bg-red-50 px-4 py-3 \
                text-sm text-red-800 shadow-lg dark:border-red-800 \
                dark:bg-gray-800 dark:text-red-300"
            role="alert"
        {
            div class="flex items-start justify-between gap-3"
            {
                div
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    class="font-bold cursor-pointer"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "✕"
                }
            }
        }
    }
}
