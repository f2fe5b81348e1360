//! Browser-side behaviour for the KIF Realty site: search suggestions, the
//! filter form, the comparison list, newsletter signup, the contact form and
//! the property detail modal.
//!
//! Modules here hold the decision logic and stay free of rendering concerns;
//! the Yew binary binds them to the page.

use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod bus;
pub mod comparison;
pub mod config;
pub mod contact;
pub mod error;
pub mod filters;
pub mod forms;
pub mod logger;
pub mod newsletter;
pub mod notify;
pub mod property;
pub mod search;
pub mod utils;

use bus::AppEvent;

/// Identifier of a listing. The API and server-rendered markup use numbers
/// and strings interchangeably, so both are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawPropertyId", into = "String")]
pub struct PropertyId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPropertyId {
    Integer(i64),
    Text(String),
}

impl From<RawPropertyId> for PropertyId {
    fn from(raw: RawPropertyId) -> Self {
        match raw {
            RawPropertyId::Integer(n) => PropertyId(n.to_string()),
            RawPropertyId::Text(s) => PropertyId(s),
        }
    }
}

impl From<PropertyId> for String {
    fn from(id: PropertyId) -> Self {
        id.0
    }
}

impl PropertyId {
    pub fn new(id: impl Into<String>) -> Self {
        PropertyId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accept an id handed over from JavaScript (number or string).
    pub fn from_js(value: JsValue) -> Option<Self> {
        match serde_wasm_bindgen::from_value::<PropertyId>(value) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("ignoring unusable property id: {}", e);
                None
            }
        }
    }

    /// Fragment the suggestion list links to.
    pub fn anchor(&self) -> String {
        format!("#property-{}", self.0)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Entry points for server-rendered markup (`onclick="addToComparison(12)"`).

#[wasm_bindgen(js_name = addToComparison)]
pub fn add_to_comparison(id: JsValue) {
    if let Some(id) = PropertyId::from_js(id) {
        bus::dispatch(AppEvent::Compare(id));
    }
}

#[wasm_bindgen(js_name = removeFromComparison)]
pub fn remove_from_comparison(id: JsValue) {
    if let Some(id) = PropertyId::from_js(id) {
        bus::dispatch(AppEvent::Uncompare(id));
    }
}

#[wasm_bindgen(js_name = showPropertyModal)]
pub fn show_property_modal(id: JsValue) {
    if let Some(id) = PropertyId::from_js(id) {
        bus::dispatch(AppEvent::ShowProperty(id));
    }
}

#[wasm_bindgen(js_name = scheduleViewing)]
pub fn schedule_viewing(id: JsValue) {
    if let Some(id) = PropertyId::from_js(id) {
        bus::dispatch(AppEvent::ScheduleViewing(id));
    }
}

#[wasm_bindgen(js_name = goToPage)]
pub fn go_to_page(page: JsValue) {
    match page_label(page.as_string(), page.as_f64()) {
        Some(page) => bus::dispatch(AppEvent::GoToPage(page)),
        None => log::warn!("ignoring goToPage with unusable page {:?}", page),
    }
}

/// Page number as it appears in the query string. Markup passes either the
/// text of a link or a plain number.
fn page_label(text: Option<String>, number: Option<f64>) -> Option<String> {
    if let Some(text) = text {
        let text = text.trim();
        return (!text.is_empty()).then(|| text.to_string());
    }
    number
        .filter(|n| n.is_finite() && *n >= 1.0 && n.fract() == 0.0)
        .map(|n| format!("{}", n as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_accepts_numbers_and_strings() {
        assert_eq!(page_label(None, Some(2.0)), Some("2".to_string()));
        assert_eq!(page_label(Some(" 3 ".into()), None), Some("3".to_string()));
        assert_eq!(page_label(None, Some(1.5)), None);
        assert_eq!(page_label(None, Some(f64::NAN)), None);
        assert_eq!(page_label(Some(String::new()), None), None);
        assert_eq!(page_label(None, None), None);
    }

    #[test]
    fn property_id_accepts_numbers_and_strings() {
        let ids: Vec<PropertyId> = serde_json::from_str(r#"[12, "ab-3"]"#).unwrap();
        assert_eq!(ids, vec![PropertyId::new("12"), PropertyId::new("ab-3")]);
    }

    #[test]
    fn property_id_serializes_as_text() {
        let json = serde_json::to_string(&vec![PropertyId::new("12")]).unwrap();
        assert_eq!(json, r#"["12"]"#);
    }

    #[test]
    fn anchor_targets_listing_card() {
        assert_eq!(PropertyId::new("41").anchor(), "#property-41");
    }
}
