//! Application shell: a fixed header with the menu toggle, a collapsible
//! sidebar, and the routed page in the main area.
//!
//! The shell listens to location changes so the sidebar highlights the
//! current page and picks up projects created since the last render.

mod sidebar;

use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::scope_ext::LocationHandle;

use crate::routes::Route;
use crate::storage;
use sidebar::{sidebar, SidebarEntry};

pub enum Msg {
    ToggleSidebar,
    LocationChanged,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

pub struct Layout {
    sidebar_open: bool,
    entries: Vec<SidebarEntry>,
    _location: Option<LocationHandle>,
}

impl Layout {
    fn load_entries() -> Vec<SidebarEntry> {
        let mut entries = vec![SidebarEntry::new(Route::Home, "home", "Home")];
        entries.extend(storage::workspace().projects().into_iter().map(|project| {
            SidebarEntry::new(Route::ProjectDetail { id: project.id }, "folder", project.name)
        }));
        entries
    }
}

impl Component for Layout {
    type Message = Msg;
    type Properties = LayoutProps;

    fn create(ctx: &Context<Self>) -> Self {
        let listener = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| Msg::LocationChanged));
        Self {
            sidebar_open: true,
            entries: Self::load_entries(),
            _location: listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
            }
            Msg::LocationChanged => {
                self.entries = Self::load_entries();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = if self.sidebar_open { "open" } else { "closed" };
        let current = ctx.link().route::<Route>();

        html! {
            <>
                <header class="app-header">
                    <button class="btn ghost" onclick={ctx.link().callback(|_| Msg::ToggleSidebar)}>
                        <i class="material-icons">{"menu"}</i>
                    </button>
                    <h1>{"FormKeep"}</h1>
                </header>
                { sidebar(&self.entries, current.as_ref(), self.sidebar_open) }
                <main class={classes!("main", state)}>
                    { for ctx.props().children.iter() }
                </main>
            </>
        }
    }
}
