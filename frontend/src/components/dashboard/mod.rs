//! The talent members page. The component here only forwards lifecycle calls;
//! its state, messages and rendering live in the sibling files.
//!
//! On first render the component activates once: the listing goes back to
//! `Loading` and a single request for the first page is issued with the
//! session token. Everything after that (search, filter panel, comments,
//! export) works on the fetched records without further requests.

use yew::prelude::*;

mod helpers;
mod messages;
mod panels;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DashboardProps;
pub use state::DashboardComponent;

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.activated {
            self.activated = true;
            ctx.link().send_message(Msg::Activate);
        }
    }
}
