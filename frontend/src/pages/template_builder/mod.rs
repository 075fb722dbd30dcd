//! Template builder page.
//!
//! The page edits a `TemplateDraft` from `common`: a name and description,
//! the list of fields added so far, and one field in progress with its
//! options. Saving stores the template and returns to the template list.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::TemplateBuilderPage;

impl Component for TemplateBuilderPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TemplateBuilderPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
