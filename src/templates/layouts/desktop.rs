use crate::templates::components::badge;
use crate::view_state::ViewState;
use maud::{html, Markup, DOCTYPE};

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Browse,
    Map,
    Favorites,
    None,
}

pub fn desktop_layout(title: &str, view: &ViewState, active: Nav, content: Markup) -> Markup {
    let nav_class = |item: Nav| {
        if item == active {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Haven Browse" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#1e40af"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      span class="font-display font-bold" { "Haven Browse" }
                  }

                  // Submitting a new search keeps the sidebar filters.
                  form method="get" action="/" class="search-bar" role="search" {
                      @for (k, v) in view.query_pairs() {
                          @if k != "q" {
                              input type="hidden" name=(k) value=(v);
                          }
                      }
                      input
                          type="search"
                          name="q"
                          value=(view.search_term)
                          placeholder="Search by city, state, address or ZIP"
                          aria-label="Search listings";
                      button type="submit" class="btn" { "Search" }
                  }

                  nav {
                      ul {
                          li { a class=(nav_class(Nav::Browse)) href=(view.href("/", &[])) { "Browse" } }
                          li { a class=(nav_class(Nav::Map)) href=(view.href("/map", &[])) { "Map" } }
                          li {
                              a class=(nav_class(Nav::Favorites)) href="/favorites" id="favorites-link" {
                                  "Favorites"
                                  @if view.favorites_count > 0 {
                                      " " (badge("accent", &view.favorites_count.to_string()))
                                  }
                              }
                          }
                      }
                  }
              }
                (content)
            }
        }
    }
}
