use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LoginComponent;

pub fn view(component: &LoginComponent, ctx: &Context<LoginComponent>) -> Html {
    let link = ctx.link();
    let invalid = component.error.is_some().then_some("invalid");

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="login-page">
            <form class="login-card" {onsubmit} novalidate={true}>
                <h1 class="login-title">{ "TALENTX" }</h1>

                <div class="form-row">
                    <input
                        type="email"
                        class={classes!("text-input", invalid)}
                        placeholder="Enter your email"
                        value={component.credentials.email.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>

                <div class="form-row">
                    <input
                        type="password"
                        class={classes!("text-input", invalid)}
                        placeholder="••••••••"
                        value={component.credentials.password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>

                if let Some(error) = &component.error {
                    <p class="form-error">{ error.clone() }</p>
                }

                <div class="form-row form-options">
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            checked={component.remember}
                            onchange={link.callback(|_| Msg::ToggleRemember)}
                        />
                        { "Remember for 30 days" }
                    </label>
                    <a class="link" href="#">{ "Forgot password" }</a>
                </div>

                <button type="submit" class="primary-btn" disabled={component.submitting}>
                    { if component.submitting { "Signing in…" } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
