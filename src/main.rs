//! Main module for the KIF Realty site widgets using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use gloo_timers::callback::Timeout;
use kif_realty_web::{
    api::FetchBackend,
    bus::{self, AppEvent},
    comparison::{BrowserStore, ComparisonList, ADDED_MESSAGE, REMOVED_MESSAGE},
    config::*,
    contact::{self, ContactField, ContactOutcome, ContactSubmission},
    filters::{page_query, price_range_error, FilterSubmitter, FilterValues},
    forms::{FieldKind, FieldRule},
    logger,
    newsletter,
    notify::{NoticeId, Notification, NotificationQueue},
    property::{DetailLoader, DetailView, INQUIRY_SENT, LOAD_FAILED, VIEWING_SOON},
    search::{DebounceAction, Debouncer, SuggestionFetcher, SuggestionPanel},
    utils::format_phone_input,
    PropertyId,
};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

mod components;
mod hooks;

use components::{
    render_loading, render_property_detail, ComparisonBadge, FieldInput, NotificationStack,
    SuggestionList,
};
use hooks::use_validated_field;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Notification sink provided to every widget through context.
#[hook]
fn use_notifier() -> Callback<Notification> {
    use_context::<Callback<Notification>>().unwrap_or_default()
}

/// Navigate the current tab, logging rather than failing.
fn navigate(href: &str) {
    if let Err(e) = gloo_utils::window().location().set_href(href) {
        log::error!("navigation to {} failed: {:?}", href, e);
    }
}

fn current_search() -> String {
    gloo_utils::window()
        .location()
        .search()
        .unwrap_or_default()
}

/// Submit a form natively, honouring constraint validation.
fn submit_natively(form: &HtmlFormElement) -> bool {
    if !form.check_validity() {
        form.report_validity();
        return false;
    }
    match form.submit() {
        Ok(()) => true,
        Err(e) => {
            log::error!("native form submit failed: {:?}", e);
            false
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Search suggestions

#[function_component(SearchBox)]
fn search_box() -> Html {
    let panel = use_state_eq(SuggestionPanel::default);
    let debouncer = use_mut_ref(Debouncer::new);
    // Replacing the handle drops (and so cancels) the previous timer.
    let timer = use_mut_ref(|| None::<Timeout>);
    let fetcher = use_memo((), |_| SuggestionFetcher::new(FetchBackend::default()));
    let container = use_node_ref();

    let oninput = {
        let panel = panel.clone();
        let debouncer = debouncer.clone();
        let timer = timer.clone();
        let fetcher = fetcher.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let action = debouncer.borrow_mut().on_input(&input.value());
            match action {
                DebounceAction::Clear => {
                    timer.borrow_mut().take();
                    fetcher.cancel();
                    panel.set(SuggestionPanel::Hidden);
                }
                DebounceAction::Schedule { ticket, .. } => {
                    let debouncer = debouncer.clone();
                    let fetcher = fetcher.clone();
                    let panel = panel.clone();
                    let handle = Timeout::new(DEBOUNCE_MS, move || {
                        let Some(query) = debouncer.borrow_mut().fire(ticket) else {
                            return;
                        };
                        wasm_bindgen_futures::spawn_local(async move {
                            if let Some(next) = fetcher.lookup(&query).await {
                                panel.set(next);
                            }
                        });
                    });
                    *timer.borrow_mut() = Some(handle);
                }
            }
        })
    };

    let onpick = {
        let panel = panel.clone();
        Callback::from(move |id: PropertyId| {
            panel.set(SuggestionPanel::Hidden);
            navigate(&id.anchor());
        })
    };

    // Hide the panel on clicks outside the search box.
    {
        let container = container.clone();
        let panel = panel.clone();
        use_effect_with((), move |_| {
            let document = gloo_utils::document();
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |e: web_sys::Event| {
                let inside = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .zip(container.get())
                    .map(|(target, root)| root.contains(Some(&target)))
                    .unwrap_or(false);
                if !inside {
                    panel.set(SuggestionPanel::Hidden);
                }
            });
            let registered = document
                .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                .is_ok();
            move || {
                if registered {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    html! {
        <div class="search-box" style="position: relative" ref={container}>
            <input type="text" name="search" class="form-control"
                placeholder="Search by project, community or city"
                autocomplete="off"
                {oninput} />
            <SuggestionList panel={(*panel).clone()} {onpick} />
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Listing filters

#[function_component(FilterForm)]
fn filter_form() -> Html {
    let initial = use_memo((), |_| FilterValues::from_query(&current_search()));
    let submitter = use_state_eq(FilterSubmitter::default);
    let submit_timer = use_mut_ref(|| None::<Timeout>);
    let form_ref = use_node_ref();
    let min_ref = use_node_ref();
    let max_ref = use_node_ref();

    let onchange = {
        let submitter = submitter.clone();
        let submit_timer = submit_timer.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |_: Event| {
            let mut next = (*submitter).clone();
            let Some(delay) = next.on_change() else {
                return;
            };
            submitter.set(next);

            let form_ref = form_ref.clone();
            let submitter = submitter.clone();
            *submit_timer.borrow_mut() = Some(Timeout::new(delay, move || {
                let submitted = form_ref
                    .cast::<HtmlFormElement>()
                    .map(|form| submit_natively(&form))
                    .unwrap_or(false);
                if !submitted {
                    submitter.set(FilterSubmitter::default());
                }
            }));
        })
    };

    let onprice = {
        let min_ref = min_ref.clone();
        let max_ref = max_ref.clone();
        Callback::from(move |_: InputEvent| {
            let (Some(min), Some(max)) = (
                min_ref.cast::<HtmlInputElement>(),
                max_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let message = price_range_error(&min.value(), &max.value()).unwrap_or("");
            max.set_custom_validity(message);
        })
    };

    let type_option = |value: &'static str, label: &'static str| {
        html! {
            <option {value} selected={initial.property_type == value}>{ label }</option>
        }
    };

    html! {
        <form method="GET" class="filters-form row g-2" ref={form_ref}>
            <div class="col-md-3">
                <select name="property_type" class="form-select" onchange={onchange.clone()}>
                    { type_option("", "All Types") }
                    { type_option("residential", "Residential") }
                    { type_option("commercial", "Commercial") }
                </select>
            </div>
            <div class="col-md-3">
                <input type="text" name="city" class="form-control" placeholder="City"
                    value={initial.city.clone()} />
            </div>
            <div class="col-md-2">
                <input type="number" name="min_price" class="form-control" placeholder="Min Price"
                    min="0" ref={min_ref} value={initial.min_price.clone()}
                    oninput={onprice.clone()} onchange={onchange.clone()} />
            </div>
            <div class="col-md-2">
                <input type="number" name="max_price" class="form-control" placeholder="Max Price"
                    min="0" ref={max_ref} value={initial.max_price.clone()}
                    oninput={onprice} onchange={onchange} />
            </div>
            if !initial.district.is_empty() {
                <input type="hidden" name="district" value={initial.district.clone()} />
            }
            <div class="col-md-2 d-grid">
                <button type="submit" class="btn btn-primary filter-btn" disabled={submitter.is_pending()}>
                    if submitter.is_pending() {
                        <span class="spinner-border spinner-border-sm me-2"></span>
                    }
                    { submitter.button_label() }
                </button>
            </div>
        </form>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Newsletter

#[function_component(NewsletterForm)]
fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let busy = use_state_eq(|| false);
    let notify = use_notifier();

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            if let Err(notice) = newsletter::precheck(&email) {
                notify.emit(notice);
                return;
            }

            busy.set(true);
            let value = (*email).clone();
            let email = email.clone();
            let busy = busy.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = newsletter::subscribe(&FetchBackend::default(), &value).await;
                if outcome.subscribed {
                    email.set(String::new());
                }
                notify.emit(outcome.notification);
                busy.set(false);
            });
        })
    };

    html! {
        <form class="newsletter-form d-flex gap-2" {onsubmit}>
            <input type="email" id="newsletter-email" class="newsletter-input form-control"
                placeholder="Your email address" value={(*email).clone()} {oninput} />
            <button type="submit" class="btn btn-primary" disabled={*busy}>
                if *busy {
                    <span class="spinner-border spinner-border-sm me-1"></span>{ "Subscribing..." }
                } else {
                    { "Subscribe" }
                }
            </button>
        </form>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Contact form

/// Optional contact fields straight from the form.
fn optional_contact_fields(form: &HtmlFormElement) -> ContactSubmission {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactSubmission::default();
    };
    let text = |name: &str| data.get(name).as_string().unwrap_or_default();
    ContactSubmission {
        investment_budget: text("investmentBudget"),
        investment_type: text("investmentType"),
        preferred_location: text("preferredLocation"),
        timeline: text("timeline"),
        message: text("message"),
        property_interests: data
            .get_all("propertyInterest")
            .iter()
            .filter_map(|v| v.as_string())
            .collect(),
        ..ContactSubmission::default()
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let first = use_validated_field(ContactField::FirstName.rule(), None);
    let last = use_validated_field(ContactField::LastName.rule(), None);
    let email = use_validated_field(ContactField::Email.rule(), None);
    let phone = use_validated_field(ContactField::Phone.rule(), Some(format_phone_input));
    let busy = use_state_eq(|| false);
    let form_ref = use_node_ref();
    let notify = use_notifier();

    let onsubmit = {
        let fields = [first.clone(), last.clone(), email.clone(), phone.clone()];
        let busy = busy.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            fields.iter().for_each(|f| f.touch.emit(()));
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };

            let [first, last, email, phone] = &fields;
            let submission = ContactSubmission {
                first_name: first.state.value.clone(),
                last_name: last.state.value.clone(),
                email: email.state.value.clone(),
                phone: phone.state.value.clone(),
                ..optional_contact_fields(&form)
            };
            if !submission.validate().is_empty() {
                return;
            }

            busy.set(true);
            let action = form.action();
            let resets: Vec<Callback<()>> = fields.iter().map(|f| f.reset.clone()).collect();
            let busy = busy.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match contact::submit(&FetchBackend::default(), &action, &submission).await {
                    ContactOutcome::Redirect(url) => navigate(&url),
                    ContactOutcome::Sent(message) => {
                        notify.emit(Notification::success(message));
                        form.reset();
                        resets.iter().for_each(|r| r.emit(()));
                    }
                    ContactOutcome::Refused(message) => notify.emit(Notification::error(message)),
                    ContactOutcome::Silent | ContactOutcome::Invalid(_) => {}
                    ContactOutcome::Fallback(_) => {
                        submit_natively(&form);
                    }
                }
                busy.set(false);
            });
        })
    };

    let interest = |value: &'static str, label: &'static str| {
        html! {
            <label class="form-check-label me-3">
                <input class="form-check-input me-1" type="checkbox" name="propertyInterest" {value} />
                { label }
            </label>
        }
    };

    html! {
        <form id="contactForm" method="POST" action={CONTACT_ACTION} ref={form_ref} {onsubmit} novalidate=true>
            <div class="row">
                <div class="col-md-6">
                    <FieldInput name="firstName" label="First Name *" state={first.state.clone()}
                        oninput={first.oninput.clone()} onblur={first.onblur.clone()} />
                </div>
                <div class="col-md-6">
                    <FieldInput name="lastName" label="Last Name *" state={last.state.clone()}
                        oninput={last.oninput.clone()} onblur={last.onblur.clone()} />
                </div>
                <div class="col-md-6">
                    <FieldInput name="email" label="Email *" input_type="email" state={email.state.clone()}
                        oninput={email.oninput.clone()} onblur={email.onblur.clone()} />
                </div>
                <div class="col-md-6">
                    <FieldInput name="phone" label="Phone *" input_type="tel" placeholder="+971 50 123 4567"
                        state={phone.state.clone()}
                        oninput={phone.oninput.clone()} onblur={phone.onblur.clone()} />
                </div>
            </div>
            <div class="row">
                <div class="col-md-6 mb-2">
                    <select name="investmentBudget" class="form-select">
                        <option value="">{ "Investment Budget" }</option>
                        <option value="under-1m">{ "Under AED 1M" }</option>
                        <option value="1m-3m">{ "AED 1M - 3M" }</option>
                        <option value="3m-5m">{ "AED 3M - 5M" }</option>
                        <option value="above-5m">{ "Above AED 5M" }</option>
                    </select>
                </div>
                <div class="col-md-6 mb-2">
                    <select name="investmentType" class="form-select">
                        <option value="">{ "Investment Type" }</option>
                        <option value="off-plan">{ "Off-plan" }</option>
                        <option value="ready">{ "Ready" }</option>
                    </select>
                </div>
                <div class="col-md-6 mb-2">
                    <input type="text" name="preferredLocation" class="form-control" placeholder="Preferred Location" />
                </div>
                <div class="col-md-6 mb-2">
                    <select name="timeline" class="form-select">
                        <option value="">{ "Timeline" }</option>
                        <option value="immediate">{ "Immediately" }</option>
                        <option value="3-months">{ "Within 3 months" }</option>
                        <option value="6-months">{ "Within 6 months" }</option>
                    </select>
                </div>
            </div>
            <div class="mb-2">
                { interest("apartment", "Apartment") }
                { interest("villa", "Villa") }
                { interest("townhouse", "Townhouse") }
                { interest("commercial", "Commercial") }
            </div>
            <textarea name="message" class="form-control mb-2" rows="4" placeholder="Message"></textarea>
            <button type="submit" class="btn btn-primary submit-btn" disabled={*busy}>
                if *busy { { "Sending..." } } else { { "Send Message" } }
            </button>
        </form>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Property modal

#[derive(Properties, PartialEq)]
struct QuickInquiryProps {
    property: PropertyId,
}

#[function_component(QuickInquiry)]
fn quick_inquiry(props: &QuickInquiryProps) -> Html {
    let name = use_validated_field(FieldRule::required(FieldKind::Text), None);
    let email = use_validated_field(FieldRule::required(FieldKind::Email), None);
    let phone = use_validated_field(FieldRule::required(FieldKind::Phone), None);
    let busy = use_state_eq(|| false);
    let notify = use_notifier();

    let onsubmit = {
        let fields = [
            (name.clone(), FieldRule::required(FieldKind::Text)),
            (email.clone(), FieldRule::required(FieldKind::Email)),
            (phone.clone(), FieldRule::required(FieldKind::Phone)),
        ];
        let busy = busy.clone();
        let property = props.property.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            fields.iter().for_each(|(f, _)| f.touch.emit(()));
            if fields.iter().any(|(f, rule)| rule.check(&f.state.value).is_err()) {
                return;
            }

            log::info!("quick inquiry for property {}", property);
            busy.set(true);
            let resets: Vec<Callback<()>> = fields.iter().map(|(f, _)| f.reset.clone()).collect();
            let busy = busy.clone();
            let notify = notify.clone();
            Timeout::new(QUICK_INQUIRY_DELAY_MS, move || {
                notify.emit(Notification::success(INQUIRY_SENT));
                resets.iter().for_each(|r| r.emit(()));
                busy.set(false);
            })
            .forget();
        })
    };

    let onviewing = {
        let property = props.property.clone();
        Callback::from(move |_: MouseEvent| bus::dispatch(AppEvent::ScheduleViewing(property.clone())))
    };

    html! {
        <>
            <button type="button" class="btn btn-outline-secondary w-100 mb-3" onclick={onviewing}>
                { "Schedule Viewing" }
            </button>
            <h6>{ "Quick Contact" }</h6>
            <form {onsubmit} novalidate=true>
                <FieldInput name="quick-name" label="Your Name" state={name.state.clone()}
                    oninput={name.oninput.clone()} onblur={name.onblur.clone()} />
                <FieldInput name="quick-email" label="Your Email" input_type="email" state={email.state.clone()}
                    oninput={email.oninput.clone()} onblur={email.onblur.clone()} />
                <FieldInput name="quick-phone" label="Your Phone" input_type="tel" state={phone.state.clone()}
                    oninput={phone.oninput.clone()} onblur={phone.onblur.clone()} />
                <button type="submit" class="btn btn-sm btn-primary w-100" disabled={*busy}>
                    if *busy { { "Sending..." } } else { { "Send Inquiry" } }
                </button>
            </form>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct PropertyModalProps {
    view: DetailView,
    onclose: Callback<()>,
}

#[function_component(PropertyModal)]
fn property_modal(props: &PropertyModalProps) -> Html {
    let body = match &props.view {
        DetailView::Closed => return html! {},
        DetailView::Loading(_) => render_loading(),
        DetailView::Loaded(detail) => render_property_detail(
            detail,
            html! { <QuickInquiry key={detail.id.to_string()} property={detail.id.clone()} /> },
        ),
        DetailView::Failed => html! {
            <div class="alert alert-danger">
                <i class="fas fa-exclamation-triangle me-2"></i>{ LOAD_FAILED }
            </div>
        },
    };
    let onclose = {
        let onclose = props.onclose.clone();
        Callback::from(move |_: MouseEvent| onclose.emit(()))
    };

    html! {
        <>
            <div class="modal fade show" id="propertyModal" tabindex="-1" style="display: block">
                <div class="modal-dialog modal-lg modal-dialog-scrollable">
                    <div class="modal-content">
                        <div class="modal-header">
                            <button type="button" class="btn-close" onclick={onclose}></button>
                        </div>
                        <div class="modal-body">{ body }</div>
                    </div>
                </div>
            </div>
            <div class="modal-backdrop fade show"></div>
        </>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Application root

/// Shared handles the JS bridge and header widgets act through.
#[derive(Clone)]
struct AppHandles {
    comparison: Rc<ComparisonList<BrowserStore>>,
    compared: UseStateHandle<Vec<PropertyId>>,
    detail: UseStateHandle<DetailView>,
    loader: Rc<DetailLoader<FetchBackend>>,
    notify: Callback<Notification>,
}

impl AppHandles {
    fn handle(&self, event: AppEvent) {
        match event {
            AppEvent::Compare(id) => self.compare(id),
            AppEvent::Uncompare(id) => self.uncompare(&id),
            AppEvent::ShowProperty(id) => self.show(id),
            AppEvent::ScheduleViewing(_) => self.notify.emit(Notification::info(VIEWING_SOON)),
            AppEvent::GoToPage(page) => {
                let query = page_query(&current_search(), &page);
                if let Err(e) = gloo_utils::window().location().set_search(&query) {
                    log::error!("could not open page {}: {:?}", page, e);
                }
            }
        }
    }

    fn compare(&self, id: PropertyId) {
        match self.comparison.add(id) {
            Ok(_) => {
                self.compared.set(self.comparison.ids());
                self.notify.emit(Notification::success(ADDED_MESSAGE));
            }
            Err(e) => self.notify.emit(e.notification()),
        }
    }

    fn uncompare(&self, id: &PropertyId) {
        match self.comparison.remove(id) {
            Ok(true) => {
                self.compared.set(self.comparison.ids());
                self.notify.emit(Notification::info(REMOVED_MESSAGE));
            }
            Ok(false) => {}
            Err(e) => self.notify.emit(e.notification()),
        }
    }

    fn show(&self, id: PropertyId) {
        self.detail.set(DetailView::Loading(id.clone()));
        let loader = self.loader.clone();
        let detail = self.detail.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(view) = loader.load(&id).await {
                detail.set(view);
            }
        });
    }

    fn close_detail(&self) {
        self.loader.abandon();
        self.detail.set(DetailView::Closed);
    }
}

/// Root component: notification center, comparison list, property modal and
/// the JS bridge, plus the individual widgets.
#[function_component]
pub fn App() -> Html {
    let queue = use_mut_ref(NotificationQueue::default);
    let force_update = use_force_update();
    let notify = use_memo((), {
        let queue = queue.clone();
        let force_update = force_update.clone();
        move |_| {
            Callback::from(move |notice: Notification| {
                let id = queue.borrow_mut().push(notice);
                force_update.force_update();
                let queue = queue.clone();
                let force_update = force_update.clone();
                Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
                    if queue.borrow_mut().dismiss(id) {
                        force_update.force_update();
                    }
                })
                .forget();
            })
        }
    });
    let ondismiss = {
        let queue = queue.clone();
        let force_update = force_update.clone();
        Callback::from(move |id: NoticeId| {
            if queue.borrow_mut().dismiss(id) {
                force_update.force_update();
            }
        })
    };

    let comparison = use_memo((), |_| ComparisonList::new(BrowserStore::open()));
    let compared = {
        let comparison = comparison.clone();
        use_state(move || comparison.ids())
    };
    let detail = use_state(DetailView::default);
    let loader = use_memo((), |_| DetailLoader::new(FetchBackend::default()));

    let handles = AppHandles {
        comparison: comparison.clone(),
        compared: compared.clone(),
        detail: detail.clone(),
        loader: loader.clone(),
        notify: (*notify).clone(),
    };

    // Route JS-bridge events into the app for as long as it is mounted.
    {
        let handles = handles.clone();
        use_effect_with((), move |_| {
            bus::set_listener(move |event| handles.handle(event));
            log::info!("site widgets mounted");
            bus::clear_listener
        });
    }

    let onclose = {
        let handles = handles.clone();
        Callback::from(move |_: ()| handles.close_detail())
    };

    let entries: Vec<(NoticeId, Notification)> = queue.borrow().entries().to_vec();

    html! {
        <ContextProvider<Callback<Notification>> context={(*notify).clone()}>
            <header class="site-header">
                <SearchBox />
                <div class="comparison-menu">
                    <span>{ "Compare " }</span>
                    <ComparisonBadge count={compared.len()} />
                    <ul class="comparison-list list-unstyled">
                        { compared.iter().map(|id| {
                            let handles = handles.clone();
                            let remove_id = id.clone();
                            let view_id = id.clone();
                            let view = {
                                let handles = handles.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    handles.show(view_id.clone());
                                })
                            };
                            html! {
                                <li key={id.to_string()}>
                                    <a href="#" onclick={view}>{ format!("Property {}", id) }</a>
                                    <button type="button" class="btn btn-sm btn-link"
                                        onclick={Callback::from(move |_: MouseEvent| handles.uncompare(&remove_id))}>
                                        { "Remove" }
                                    </button>
                                </li>
                            }
                        }).collect::<Html>() }
                    </ul>
                </div>
            </header>
            <section class="filters-section">
                <FilterForm />
            </section>
            <section class="contact-section">
                <ContactForm />
            </section>
            <footer class="site-footer">
                <NewsletterForm />
            </footer>
            <PropertyModal view={(*detail).clone()} {onclose} />
            <NotificationStack {entries} {ondismiss} />
        </ContextProvider<Callback<Notification>>>
    }
}

/// Entry point: installs logging and the panic hook, then renders the app.
fn main() {
    console_error_panic_hook::set_once();
    logger::init(logger::default_level());
    yew::Renderer::<App>::new().render();
}
