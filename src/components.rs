//! Pure Yew view components for the site widgets.
//!
//! These render from props only; state lives in `main.rs`.

use kif_realty_web::api::{PropertyDetail, Suggestion};
use kif_realty_web::comparison::badge_text;
use kif_realty_web::config::SALES_PHONE;
use kif_realty_web::forms::FieldState;
use kif_realty_web::notify::{NoticeId, Notification};
use kif_realty_web::property::price_label;
use kif_realty_web::search::SuggestionPanel;
use kif_realty_web::PropertyId;
use yew::prelude::*;

/// Dropdown under the search input.
#[derive(Properties, PartialEq)]
pub struct SuggestionListProps {
    pub panel: SuggestionPanel,
    pub onpick: Callback<PropertyId>,
}

#[function_component(SuggestionList)]
pub fn suggestion_list(props: &SuggestionListProps) -> Html {
    let SuggestionPanel::Visible(items) = &props.panel else {
        return html! {};
    };

    html! {
        <div class="search-suggestion" style="display: block">
            { items.iter().map(|s| render_suggestion(s, &props.onpick)).collect::<Html>() }
        </div>
    }
}

fn render_suggestion(suggestion: &Suggestion, onpick: &Callback<PropertyId>) -> Html {
    let onclick = {
        let onpick = onpick.clone();
        let id = suggestion.id.clone();
        Callback::from(move |_: MouseEvent| onpick.emit(id.clone()))
    };
    html! {
        <div class="suggestion-item" {onclick}>
            <strong>{ suggestion.title.as_deref().unwrap_or("Property") }</strong><br />
            <small class="text-muted">
                { suggestion.location.as_deref().unwrap_or("Location not specified") }
            </small>
        </div>
    }
}

/// Counter next to the "Compare" nav link; hidden at zero.
#[derive(Properties, PartialEq)]
pub struct ComparisonBadgeProps {
    pub count: usize,
}

#[function_component(ComparisonBadge)]
pub fn comparison_badge(props: &ComparisonBadgeProps) -> Html {
    match badge_text(props.count) {
        Some(text) => html! {
            <span id="comparison-badge" class="badge bg-primary" style="display: inline">{ text }</span>
        },
        None => html! {
            <span id="comparison-badge" class="badge bg-primary" style="display: none"></span>
        },
    }
}

/// Fixed-position alert stack in the top-right corner.
#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
    pub entries: Vec<(NoticeId, Notification)>,
    pub ondismiss: Callback<NoticeId>,
}

#[function_component(NotificationStack)]
pub fn notification_stack(props: &NotificationStackProps) -> Html {
    html! {
        <div class="notification-stack position-fixed" style="top: 20px; right: 20px; z-index: 9999; min-width: 300px">
            { props.entries.iter().map(|(id, notice)| {
                let ondismiss = props.ondismiss.clone();
                let id = *id;
                html! {
                    <div key={id} class={classes!("alert", format!("alert-{}", notice.level.alert_class()), "alert-dismissible", "fade", "show")}>
                        { notice.message.clone() }
                        <button type="button" class="btn-close"
                            onclick={Callback::from(move |_: MouseEvent| ondismiss.emit(id))}></button>
                    </div>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// Labelled input with inline error feedback.
#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    pub name: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub state: FieldState,
    pub oninput: Callback<InputEvent>,
    pub onblur: Callback<FocusEvent>,
}

#[function_component(FieldInput)]
pub fn field_input(props: &FieldInputProps) -> Html {
    let class = classes!("form-control", props.state.css_state());
    html! {
        <div class="form-group mb-2">
            <label for={props.name.clone()}>{ props.label.clone() }</label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.state.value.clone()}
                {class}
                required=true
                oninput={props.oninput.clone()}
                onblur={props.onblur.clone()}
            />
            if let Some(err) = props.state.error {
                <div class="invalid-feedback field-error">{ err.to_string() }</div>
            }
        </div>
    }
}

/// Body of the property modal once details have loaded. Inquiry and viewing
/// actions are rendered by the caller and passed in as `actions`.
pub fn render_property_detail(detail: &PropertyDetail, actions: Html) -> Html {
    html! {
        <>
            <div class="property-gallery mb-4">
                <img src={detail.cover_image().to_string()} alt={detail.display_title().to_string()} class="img-fluid rounded" />
            </div>
            <div class="row">
                <div class="col-md-8">
                    <h3>{ detail.display_title() }</h3>
                    <p class="text-muted mb-3">
                        <i class="fas fa-map-marker-alt me-2"></i>
                        { detail.display_location() }
                    </p>
                    <p>{ detail.display_description() }</p>
                    <div class="row mt-4">
                        { detail.stats().into_iter().map(|(label, value)| html! {
                            <div class="col-sm-3 text-center">
                                <p class="mb-0"><strong>{ value }</strong><br />{ label }</p>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>
                <div class="col-md-4">
                    <div class="card bg-light">
                        <div class="card-body">
                            <h4 class="text-primary mb-3">{ price_label(detail.price.as_ref()) }</h4>
                            <div class="d-grid gap-2">
                                <a href={format!("tel:{}", SALES_PHONE)} class="btn btn-primary">{ "Call Now" }</a>
                                <a href="/contact/" class="btn btn-outline-primary">{ "Send Inquiry" }</a>
                            </div>
                            <hr />
                            { actions }
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}

pub fn render_loading() -> Html {
    html! {
        <div class="text-center py-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">{ "Loading..." }</span>
            </div>
            <p class="mt-3">{ "Loading property details..." }</p>
        </div>
    }
}
