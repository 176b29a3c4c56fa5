use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

/// Panel sliding in from the right edge, shown while `open` is set.
pub struct SideSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for SideSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <aside class={classes!("side-sheet", props.open.then_some("show"))}>
                <header class="side-sheet-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="link-btn" onclick={props.on_close.clone()}>{ "Close" }</button>
                </header>
                <div class="side-sheet-body">
                    { props.children.clone() }
                </div>
            </aside>
        }
    }
}
