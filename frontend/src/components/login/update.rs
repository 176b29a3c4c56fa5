use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;

use super::messages::Msg;
use super::state::LoginComponent;

pub fn update(component: &mut LoginComponent, ctx: &Context<LoginComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetEmail(email) => {
            component.credentials.email = email;
            true
        }
        Msg::SetPassword(password) => {
            component.credentials.password = password;
            true
        }
        Msg::ToggleRemember => {
            component.remember = !component.remember;
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            if let Err(err) = component.credentials.validate() {
                component.error = Some(err.to_string());
                return true;
            }

            component.submitting = true;
            component.error = None;
            let credentials = component.credentials.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::login(credentials).await;
                link.send_message(Msg::LoginFinished(result));
            });
            true
        }
        Msg::LoginFinished(result) => {
            component.submitting = false;
            let token = match result {
                Ok(token) => token,
                Err(err) => {
                    component.error = Some(err.to_string());
                    return true;
                }
            };

            if let Err(err) = ctx.props().session.login(&token) {
                error!(err.to_string());
                component.error = Some(err.to_string());
                return true;
            }
            component.credentials.password.clear();
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Dashboard);
            }
            true
        }
    }
}
