//! Update function for the dashboard, Elm style: mutate the state for `msg`
//! and return whether the view must re-render.
//!
//! Asynchronous work (the listing request, clipboard writes, the "Copied!"
//! timer) is spawned here and reports back through further messages.

use common::comments::CommentError;
use common::export::{export, EXPORT_FILE_NAME, XLSX_MIME_TYPE};
use common::filter::MAX_EXPERIENCE;
use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::config::COPY_FEEDBACK_MS;
use crate::download::{copy_to_clipboard, download_bytes};
use crate::toast::{show_toast, ToastKind};

use super::helpers::{parse_years, visible_talents};
use super::messages::Msg;
use super::state::DashboardComponent;

pub fn update(
    component: &mut DashboardComponent,
    ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Activate => {
            let activation = component.listing.activate();
            let token = ctx.props().session.token();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::fetch_talents(token).await;
                link.send_message(Msg::FetchCompleted(activation, result));
            });
            true
        }
        Msg::FetchCompleted(activation, result) => component.listing.complete(activation, result),
        Msg::SetSearch(search) => {
            component.criteria.set_search(search);
            true
        }
        Msg::ToggleFilters => {
            component.show_filters = !component.show_filters;
            true
        }
        Msg::ToggleSection(section) => {
            component.open_section = if component.open_section == Some(section) {
                None
            } else {
                Some(section)
            };
            true
        }
        Msg::TogglePosition(position) => {
            component.criteria.toggle_position(position);
            true
        }
        Msg::RemovePosition(position) => {
            component.criteria.remove_position(position);
            true
        }
        Msg::ToggleLevel(choice) => {
            component.criteria.toggle_level(choice);
            true
        }
        Msg::SetMinExperience(value) => {
            component.criteria.set_min_experience(parse_years(&value, 0));
            true
        }
        Msg::SetMaxExperience(value) => {
            component
                .criteria
                .set_max_experience(parse_years(&value, MAX_EXPERIENCE));
            true
        }
        Msg::QuickSelectExperience(years) => {
            component.criteria.quick_select(years);
            true
        }
        Msg::ClearFilters => {
            component.criteria.clear();
            true
        }
        Msg::Export => {
            let visible = visible_talents(component);
            if visible.is_empty() {
                show_toast("There are no talents to export.", ToastKind::Error);
                return false;
            }

            let count = visible.len();
            let result = export(visible)
                .map_err(|err| err.to_string())
                .and_then(|bytes| {
                    download_bytes(&bytes, EXPORT_FILE_NAME, XLSX_MIME_TYPE)
                        .map_err(|err| format!("{err:?}"))
                });
            match result {
                Ok(()) => show_toast(
                    &format!("Exported {count} talents to {EXPORT_FILE_NAME}."),
                    ToastKind::Success,
                ),
                Err(detail) => {
                    error!(format!("export failed: {detail}"));
                    show_toast("Export failed. Please try again.", ToastKind::Error);
                }
            }
            false
        }
        Msg::CopyEmail(email) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match copy_to_clipboard(&email).await {
                    Ok(()) => link.send_message(Msg::CopyConfirmed(email)),
                    Err(err) => {
                        error!(format!("clipboard write failed: {err:?}"));
                        show_toast("Could not copy the email.", ToastKind::Error);
                    }
                }
            });
            false
        }
        Msg::CopyConfirmed(email) => {
            component.copy_generation += 1;
            component.copied = Some(email);
            let generation = component.copy_generation;
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                link.send_message(Msg::CopyExpired(generation));
            });
            true
        }
        Msg::CopyExpired(generation) => {
            if generation != component.copy_generation {
                return false;
            }
            component.copied = None;
            true
        }
        Msg::OpenComments(talent) => {
            component.panel.open(talent);
            true
        }
        Msg::CloseComments => {
            component.panel.close();
            true
        }
        Msg::SelectTab(tab) => {
            component.panel.select_tab(tab);
            true
        }
        Msg::UpdateDraft(draft) => {
            component.panel.set_draft(draft);
            true
        }
        Msg::SubmitComment => match component.panel.submit(&mut component.comments) {
            Ok(()) => true,
            Err(CommentError::Empty) => false,
            Err(err) => {
                error!(err.to_string());
                false
            }
        },
    }
}
