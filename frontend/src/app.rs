use yew::{html, Component, Context, Html};
use yew_router::{BrowserRouter, Switch};

use crate::components::layout::Layout;
use crate::routes::{switch, Route};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        }
    }
}
