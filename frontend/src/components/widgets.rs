//! Markup fragments repeated across pages.

use yew::{html, Callback, Html, MouseEvent};
use yew_router::prelude::Link;

use crate::routes::Route;

/// Button with a Material icon and a label.
pub fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>, outline: bool) -> Html {
    let class = if outline { "btn outline icon-btn" } else { "btn icon-btn" };
    html! {
        <button class={class} onclick={on_click}>
            <i class="material-icons">{icon_name}</i>
            <span>{label}</span>
        </button>
    }
}

/// Link styled as a button.
pub fn link_button(to: Route, icon_name: &str, label: &str, outline: bool) -> Html {
    let class = if outline { "btn outline icon-btn" } else { "btn icon-btn" };
    html! {
        <Link<Route> to={to} classes={class}>
            <i class="material-icons">{icon_name}</i>
            <span>{label}</span>
        </Link<Route>>
    }
}

/// Page title with a subtitle and an optional action on the right.
pub fn page_header(title: &str, subtitle: &str, back: Option<Route>, action: Html) -> Html {
    html! {
        <div class="page-header">
            <div style="display:flex;align-items:center;gap:16px;">
                {
                    match back {
                        Some(route) => html! {
                            <Link<Route> to={route} classes="btn outline icon-btn">
                                <i class="material-icons">{"arrow_back"}</i>
                            </Link<Route>>
                        },
                        None => html! {},
                    }
                }
                <div>
                    <h2>{title}</h2>
                    <p class="muted">{subtitle}</p>
                </div>
            </div>
            { action }
        </div>
    }
}

/// Card shown while a record is missing (or not yet readable).
pub fn missing_card(message: &str) -> Html {
    html! {
        <div class="card placeholder">
            <p>{message}</p>
        </div>
    }
}
