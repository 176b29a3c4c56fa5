//! View rendering for the dashboard: sidebar, header toolbar, the talent
//! table, and the two slide-in panels (filters on the left, comments on the
//! right).

use common::export::ExportRow;
use common::listing::{DisplayState, TableRow};
use common::model::talent::TalentRecord;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::sidebar::Sidebar;

use super::helpers::status_class;
use super::messages::Msg;
use super::panels::comments::comment_panel;
use super::panels::filters::filter_panel;
use super::state::DashboardComponent;

const TABLE_COLUMNS: [&str; 8] = [
    "Name",
    "Level",
    "Skills",
    "YoE",
    "Availability",
    "Profile Feedback",
    "Partner",
    "Status",
];

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();
    let display = component.listing.display(&component.criteria);

    html! {
        <div class="app-shell">
            <Sidebar session={ctx.props().session.clone()} />
            <main class="dashboard">
                if component.show_filters {
                    { filter_panel(component, link) }
                }
                <section class="dashboard-content">
                    { build_header(component, link, &display) }
                    if let Some(message) = display.error() {
                        <p class="list-error" role="alert">{ message }</p>
                    }
                    { build_table(component, link, &display) }
                </section>
                { comment_panel(component, link) }
            </main>
        </div>
    }
}

fn build_header(
    component: &DashboardComponent,
    link: &Scope<DashboardComponent>,
    display: &DisplayState<'_>,
) -> Html {
    let active_filters = component.criteria.active_filter_count();
    html! {
        <header class="dashboard-header">
            <div class="dashboard-title">
                <button
                    class={classes!("icon-btn", component.show_filters.then_some("active"))}
                    title="Filters"
                    onclick={link.callback(|_| Msg::ToggleFilters)}
                >
                    <i class="material-icons">{ "filter_list" }</i>
                    if active_filters > 0 {
                        <span class="badge">{ active_filters }</span>
                    }
                </button>
                <h1>{ "Talent Members" }</h1>
                <span class="count-pill">{ format!("{} users", display.talent_count()) }</span>
            </div>
            <div class="dashboard-actions">
                <input
                    type="search"
                    class="text-input search"
                    placeholder="Search by Email/Name"
                    value={component.criteria.search().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button class="outline-btn" onclick={link.callback(|_| Msg::Export)}>
                    <i class="material-icons">{ "file_download" }</i>
                    <span>{ "Export" }</span>
                </button>
            </div>
        </header>
    }
}

fn build_table(
    component: &DashboardComponent,
    link: &Scope<DashboardComponent>,
    display: &DisplayState<'_>,
) -> Html {
    html! {
        <div class="table-wrap">
            <table class="talent-table">
                <thead>
                    <tr>
                        { for TABLE_COLUMNS.iter().map(|title| html! { <th>{ *title }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for display.rows().into_iter().map(|row| match row {
                        TableRow::Talent(record) => talent_row(component, link, record),
                        TableRow::Notice(text) => html! {
                            <tr class="notice-row">
                                <td colspan={TABLE_COLUMNS.len().to_string()}>{ text }</td>
                            </tr>
                        },
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn talent_row(
    component: &DashboardComponent,
    link: &Scope<DashboardComponent>,
    record: &TalentRecord,
) -> Html {
    let cells = ExportRow::from(record);
    let copy_email = {
        let email = record.email.clone();
        link.callback(move |_| Msg::CopyEmail(email.clone()))
    };
    let open_comments = {
        let id = record.id.clone();
        link.callback(move |_| Msg::OpenComments(id.clone()))
    };
    let copied = component.copied.as_deref() == Some(record.email.as_str());

    html! {
        <tr key={record.id.to_string()}>
            <td>
                <div class="talent-cell">
                    <div class="avatar">{ record.initials() }</div>
                    <div class="talent-identity">
                        <div class="talent-name">{ cells.name.clone() }</div>
                        <div class="talent-email">{ cells.email.clone() }</div>
                    </div>
                    <button class="icon-btn small" title="Copy email" onclick={copy_email}>
                        <i class="material-icons">{ "content_copy" }</i>
                        if copied {
                            <span class="copied">{ "Copied!" }</span>
                        }
                    </button>
                    <button class="icon-btn small comment-count" title="Comments" onclick={open_comments}>
                        <span>{ component.comments.count(&record.id) }</span>
                        <i class="material-icons">{ "chat_bubble_outline" }</i>
                    </button>
                </div>
            </td>
            <td>{ cells.level.clone() }</td>
            <td>{ cells.skills.clone() }</td>
            <td>{ cells.years_of_experience.clone() }</td>
            <td>{ cells.availability.clone() }</td>
            <td>{ cells.profile_feedback.clone() }</td>
            <td>{ cells.partner.clone() }</td>
            <td>
                <span class={classes!("status-pill", status_class(&cells.status))}>
                    { cells.status.clone() }
                </span>
            </td>
        </tr>
    }
}
