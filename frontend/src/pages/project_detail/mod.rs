//! Project detail page: the submissions table with an inline entry row.
//!
//! Each template field is a column. The last row holds one control per
//! field and a submit button; a stored submission is appended to the table
//! and the row is cleared. Files kept for a submission this session can be
//! previewed from the actions column.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ProjectDetailPage;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub id: String,
}

impl Component for ProjectDetailPage {
    type Message = Msg;
    type Properties = ProjectDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        ProjectDetailPage::load(&ctx.props().id)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            self.close_preview();
            *self = ProjectDetailPage::load(&ctx.props().id);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.close_preview();
    }
}
