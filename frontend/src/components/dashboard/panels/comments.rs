//! Right-hand side sheet for one talent: free-form comments plus the
//! read-only Job Comments and Logs activity tabs.

use common::comments::PanelTab;
use common::model::talent::TalentRecord;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dashboard::helpers::find_talent;
use crate::components::dashboard::{DashboardComponent, Msg};
use crate::side_sheet::SideSheet;

pub fn comment_panel(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let talent = component
        .panel
        .active()
        .and_then(|id| find_talent(component, id));
    let title = talent
        .map(|record| format!("Comments for {}", record.name))
        .unwrap_or_default();

    html! {
        <SideSheet
            open={talent.is_some()}
            title={title}
            on_close={link.callback(|_| Msg::CloseComments)}
        >
            if let Some(record) = talent {
                { tab_bar(component, link) }
                {
                    match component.panel.tab() {
                        PanelTab::Comments => comments_tab(component, link, record),
                        PanelTab::JobComments => job_comments_tab(record),
                        PanelTab::Logs => logs_tab(record),
                    }
                }
            }
        </SideSheet>
    }
}

fn tab_bar(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <div class="tab-bar">
            { for PanelTab::ALL.into_iter().map(|tab| html! {
                <button
                    class={classes!("tab-btn", (component.panel.tab() == tab).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SelectTab(tab))}
                >
                    { tab.label() }
                </button>
            }) }
        </div>
    }
}

fn comments_tab(
    component: &DashboardComponent,
    link: &Scope<DashboardComponent>,
    record: &TalentRecord,
) -> Html {
    let thread = component.comments.comments(&record.id);
    html! {
        <>
            if thread.is_empty() {
                <p class="empty-note">{ "No comments yet." }</p>
            } else {
                <ul class="comment-list">
                    { for thread.iter().map(|comment| html! {
                        <li class="comment">
                            { comment.clone() }
                            <div class="comment-reply">{ "Reply" }</div>
                        </li>
                    }) }
                </ul>
            }
            <input
                type="text"
                class="text-input"
                placeholder="Add a comment..."
                value={component.panel.draft().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateDraft(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    (e.key() == "Enter").then_some(Msg::SubmitComment)
                })}
            />
        </>
    }
}

fn job_comments_tab(record: &TalentRecord) -> Html {
    if record.job_comments.is_empty() {
        return html! { <p class="empty-note">{ "No job comments yet." }</p> };
    }
    html! {
        <div class="activity-list">
            { for record.job_comments.iter().map(|comment| html! {
                <div class="activity-card">
                    <div class="activity-title">
                        <span class="strong">{ comment.company_name.clone() }</span>
                        <span class="muted">{ format!("• {}", comment.position) }</span>
                    </div>
                    <div class="activity-meta">
                        <span>{ format!("From: {}", comment.status.from) }</span>
                        <span>{ format!("To: {}", comment.status.to) }</span>
                        <span class="muted">{ format!("• Duration: {}", comment.duration) }</span>
                    </div>
                </div>
            }) }
        </div>
    }
}

fn logs_tab(record: &TalentRecord) -> Html {
    if record.logs.is_empty() {
        return html! { <p class="empty-note">{ "No activity logged." }</p> };
    }
    html! {
        <div class="activity-list">
            { for record.logs.iter().map(|log| html! {
                <div class="activity-card">
                    <div class="activity-title spread">
                        <span class="strong">{ log.position.clone() }</span>
                        <span class="status-pill status-active">{ log.status.clone() }</span>
                    </div>
                    { detail_line("Company name", &log.company_name) }
                    { detail_line("Expected salary", &log.expected_salary) }
                    { detail_line("Skills", &log.skills) }
                    { detail_line("Expert domains", &log.expert_domains) }
                </div>
            }) }
        </div>
    }
}

fn detail_line(label: &'static str, value: &str) -> Html {
    html! {
        <div class="detail-line">
            <span class="muted">{ label }</span>
            <span>{ value.to_string() }</span>
        </div>
    }
}
