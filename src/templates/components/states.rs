use maud::{html, Markup};

pub fn loading() -> Markup {
    html! {
        div class="loading" role="status" aria-live="polite" {
            @for _ in 0..6 {
                div class="card skeleton" {
                    div class="skeleton-image" {}
                    div class="skeleton-line" {}
                    div class="skeleton-line short" {}
                }
            }
            span class="sr-only" { "Loading properties..." }
        }
    }
}

/// Zero-result view with one call to action.
pub fn empty_state(title: &str, message: &str, action_text: &str, action_href: &str) -> Markup {
    html! {
        div class="empty-state text-center" {
            h2 class="text-xl font-display font-semibold" { (title) }
            p class="text-gray-600" { (message) }
            a class="btn primary" href=(action_href) { (action_text) }
        }
    }
}

/// Failure view; retrying is a reload of the same URL.
pub fn error_view(message: &str, retry_href: &str) -> Markup {
    html! {
        div class="error-view text-center" role="alert" {
            h2 class="text-xl font-display font-semibold" { "Something went wrong" }
            p class="text-gray-600" { (message) }
            a class="btn primary" href=(retry_href) { "Try Again" }
        }
    }
}
