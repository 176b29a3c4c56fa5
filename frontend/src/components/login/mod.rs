//! Login page.
//!
//! The form validates the email and password locally, sends the salted hash
//! to the auth endpoint and, on success, stores the token in the session and
//! navigates to the dashboard. Every failure shows one generic message so the
//! form never reveals which part was wrong.

use yew::prelude::*;

use crate::session::SessionHandle;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::LoginComponent;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub session: SessionHandle,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LoginComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
