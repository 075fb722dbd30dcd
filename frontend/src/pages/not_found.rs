use yew::prelude::*;

use crate::components::widgets::link_button;
use crate::routes::Route;

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="card dashed">
                <p class="card-title">{"Page not found"}</p>
                <p class="muted">{"The page you are looking for does not exist."}</p>
                <div class="card-footer" style="justify-content:center;">
                    { link_button(Route::Home, "home", "Back to Home", true) }
                </div>
            </div>
        }
    }
}
