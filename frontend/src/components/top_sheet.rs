use yew::{classes, html, Callback, Children, Component, Context, Html, MouseEvent, Properties};

/// Full-screen overlay sheet. Visibility follows the `open` prop through the
/// `show` class so the fade transition in the stylesheet applies.
pub struct TopSheet;

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    pub open: bool,
    pub on_close: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class={classes!("top-sheet", props.open.then_some("show"))}>
                <div class="top-sheet-body">
                    <button class="btn ghost top-sheet-close" onclick={props.on_close.clone()}>
                        <i class="material-icons">{"close"}</i>
                    </button>
                    { for props.children.iter() }
                </div>
            </div>
        }
    }
}
