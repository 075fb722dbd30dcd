use yew::{classes, html, Html};
use yew_router::prelude::Link;

use crate::routes::Route;

#[derive(Clone, PartialEq)]
pub struct SidebarEntry {
    pub route: Route,
    pub icon: &'static str,
    pub label: String,
}

impl SidebarEntry {
    pub fn new(route: Route, icon: &'static str, label: impl Into<String>) -> Self {
        Self {
            route,
            icon,
            label: label.into(),
        }
    }
}

pub fn sidebar(entries: &[SidebarEntry], current: Option<&Route>, open: bool) -> Html {
    let state = if open { "open" } else { "closed" };
    html! {
        <nav class={classes!("sidebar", state)}>
            {
                for entries.iter().map(|entry| {
                    let active = current == Some(&entry.route);
                    html! {
                        <Link<Route>
                            to={entry.route.clone()}
                            classes={classes!("sidebar-item", active.then_some("active"))}
                        >
                            <i class="material-icons">{entry.icon}</i>
                            <span class="sidebar-label">{entry.label.clone()}</span>
                        </Link<Route>>
                    }
                })
            }
        </nav>
    }
}
