use yew::{html, Callback, Component, Context, Html};
use yew_router::prelude::*;

use crate::components::dashboard::DashboardComponent;
use crate::components::login::LoginComponent;
use crate::session::SessionHandle;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, session: &SessionHandle) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardComponent session={session.clone()} /> },
        Route::Root | Route::Login | Route::NotFound => {
            html! { <LoginComponent session={session.clone()} /> }
        }
    }
}

/// Root component: owns the session handle and hands it to every page.
pub struct App {
    session: SessionHandle,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: SessionHandle::default(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let session = self.session.clone();
        let render = Callback::from(move |route: Route| switch(route, &session));
        html! {
            <BrowserRouter>
                <Switch<Route> render={render} />
            </BrowserRouter>
        }
    }
}
