//! Left-hand filter panel: an accordion of Position, Total Experience and
//! Level sections editing the dashboard's `FilterCriteria`.

use common::filter::{LevelChoice, EXPERIENCE_QUICK_PICKS, MAX_EXPERIENCE};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dashboard::helpers::max_experience_hint;
use crate::components::dashboard::state::FilterSection;
use crate::components::dashboard::{DashboardComponent, Msg};

pub fn filter_panel(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <aside class="filter-panel">
            <header class="filter-header">
                <h2>{ "Filter" }</h2>
                <button class="link-btn" onclick={link.callback(|_| Msg::ClearFilters)}>
                    { "Clear All" }
                </button>
            </header>
            { for FilterSection::ALL.into_iter().map(|section| accordion(component, link, section)) }
        </aside>
    }
}

fn accordion(
    component: &DashboardComponent,
    link: &Scope<DashboardComponent>,
    section: FilterSection,
) -> Html {
    let open = component.open_section == Some(section);
    html! {
        <div class="filter-section">
            <button
                class="filter-section-toggle"
                onclick={link.callback(move |_| Msg::ToggleSection(section))}
            >
                { section.label() }
                <i class={classes!("material-icons", open.then_some("rotated"))}>{ "expand_more" }</i>
            </button>
            if open {
                <div class="filter-section-body">
                    {
                        match section {
                            FilterSection::Position => position_section(component, link),
                            FilterSection::TotalExperience => experience_section(component, link),
                            FilterSection::Level => level_section(component, link),
                        }
                    }
                </div>
            }
        </div>
    }
}

/// Search box narrowing the checklist, chips for the current picks, then the checklist.
fn position_section(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let criteria = &component.criteria;
    html! {
        <>
            <input
                type="text"
                class="text-input"
                placeholder="Search"
                value={criteria.search().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            if !criteria.positions().is_empty() {
                <div class="chips">
                    { for criteria.positions().iter().copied().map(|position| html! {
                        <span class="chip" key={position}>
                            { position }
                            <button
                                class="chip-remove"
                                title="Remove"
                                onclick={link.callback(move |_| Msg::RemovePosition(position))}
                            >
                                { "×" }
                            </button>
                        </span>
                    }) }
                </div>
            }
            <div class="checklist">
                { for criteria.visible_positions().into_iter().map(|position| html! {
                    <label class="checkbox" key={position}>
                        <input
                            type="checkbox"
                            checked={criteria.is_position_selected(position)}
                            onchange={link.callback(move |_| Msg::TogglePosition(position))}
                        />
                        <span>{ position }</span>
                    </label>
                }) }
            </div>
        </>
    }
}

fn experience_section(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let criteria = &component.criteria;
    html! {
        <>
            <div class="range-inputs">
                <input
                    type="number"
                    class="text-input"
                    placeholder="Min"
                    min="0"
                    max={criteria.max_experience().to_string()}
                    value={criteria.min_experience().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetMinExperience(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <input
                    type="number"
                    class="text-input"
                    placeholder="Max"
                    min={criteria.min_experience().to_string()}
                    max={MAX_EXPERIENCE.to_string()}
                    value={criteria.max_experience().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetMaxExperience(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <p class="hint">{ max_experience_hint(criteria.max_experience()) }</p>
            <div class="quick-picks">
                { for EXPERIENCE_QUICK_PICKS.into_iter().map(|years| html! {
                    <button
                        class="outline-btn small"
                        onclick={link.callback(move |_| Msg::QuickSelectExperience(years))}
                    >
                        { years }
                    </button>
                }) }
            </div>
        </>
    }
}

fn level_section(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <div class="checklist">
            { for LevelChoice::options().map(|choice| html! {
                <label class="checkbox" key={choice.label()}>
                    <input
                        type="checkbox"
                        checked={component.criteria.is_level_selected(choice)}
                        onchange={link.callback(move |_| Msg::ToggleLevel(choice))}
                    />
                    <span>{ choice.label() }</span>
                </label>
            }) }
        </div>
    }
}
