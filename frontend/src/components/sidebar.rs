//! Collapsible navigation rail shown next to the dashboard.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::session::SessionHandle;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("group", "Talents"),
    ("redeem", "Clients"),
    ("work", "Resellers"),
    ("settings", "Settings"),
];

pub enum Msg {
    Hover(bool),
    LogOut,
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub session: SessionHandle,
}

pub struct Sidebar {
    expanded: bool,
}

impl Component for Sidebar {
    type Message = Msg;
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { expanded: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Hover(expanded) => {
                let changed = self.expanded != expanded;
                self.expanded = expanded;
                changed
            }
            Msg::LogOut => {
                ctx.props().session.logout();
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <nav
                class={classes!("sidebar", self.expanded.then_some("expanded"))}
                onmouseenter={link.callback(|_| Msg::Hover(true))}
                onmouseleave={link.callback(|_| Msg::Hover(false))}
            >
                <div class="sidebar-logo">{ "TalentX" }</div>
                <ul class="sidebar-menu">
                    { for NAV_ITEMS.iter().map(|(icon, label)| self.nav_item(icon, label)) }
                </ul>
                <footer class="sidebar-footer">
                    <div class="avatar">{ "AD" }</div>
                    if self.expanded {
                        <div class="sidebar-account">
                            <div class="sidebar-account-name">{ "Administrator" }</div>
                            <button class="link-btn" onclick={link.callback(|_| Msg::LogOut)}>
                                <i class="material-icons">{ "logout" }</i>
                                { "Log out" }
                            </button>
                        </div>
                    }
                </footer>
            </nav>
        }
    }
}

impl Sidebar {
    /// Only "Talents" has a page; the other entries render disabled.
    fn nav_item(&self, icon: &'static str, label: &'static str) -> Html {
        let content = html! {
            <>
                <i class="material-icons">{ icon }</i>
                if self.expanded {
                    <span class="nav-label">{ label }</span>
                }
            </>
        };
        if label == "Talents" {
            html! {
                <li class="nav-item active">
                    <Link<Route> to={Route::Dashboard}>{ content }</Link<Route>>
                </li>
            }
        } else {
            html! {
                <li class="nav-item disabled" title="Coming soon">{ content }</li>
            }
        }
    }
}
