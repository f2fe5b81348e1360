//! Property detail modal: sequenced detail fetches and display helpers.

use crate::api::{Backend, PropertyDetail};
use crate::config::{FALLBACK_IMAGE_URL, PROPERTY_PATH};
use crate::error::ApiError;
use crate::search::RequestSequencer;
use crate::utils::{encode_component, format_inr, parse_leading_int};
use crate::PropertyId;
use serde_json::Value;

pub const LOAD_FAILED: &str = "Unable to load property details. Please try again.";
pub const VIEWING_SOON: &str =
    "Feature coming soon! Please contact us directly to schedule a viewing.";
pub const INQUIRY_SENT: &str = "Inquiry sent successfully! We will contact you soon.";

/// Modal body state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailView {
    #[default]
    Closed,
    Loading(PropertyId),
    Loaded(Box<PropertyDetail>),
    Failed,
}

pub fn detail_path(id: &PropertyId) -> String {
    format!("{}{}/", PROPERTY_PATH, encode_component(id.as_str()))
}

/// Fetch one listing; any non-2xx status counts as not found.
pub async fn fetch_detail<B: Backend>(
    backend: &B,
    id: &PropertyId,
) -> Result<PropertyDetail, ApiError> {
    backend.get(&detail_path(id)).await?.success_json()
}

/// Detail loads where only the most recently requested listing may land.
pub struct DetailLoader<B> {
    backend: B,
    sequencer: RequestSequencer,
}

impl<B: Backend> DetailLoader<B> {
    pub fn new(backend: B) -> Self {
        DetailLoader {
            backend,
            sequencer: RequestSequencer::new(),
        }
    }

    /// `None` when another listing was requested (or the modal closed) while
    /// this one was loading.
    pub async fn load(&self, id: &PropertyId) -> Option<DetailView> {
        let request = self.sequencer.issue();
        let result = fetch_detail(&self.backend, id).await;
        if !self.sequencer.is_current(request) {
            log::debug!("dropping stale detail for property {}", id);
            return None;
        }
        Some(match result {
            Ok(detail) => DetailView::Loaded(Box::new(detail)),
            Err(e) => {
                log::warn!("property {} unavailable: {}", id, e);
                DetailView::Failed
            }
        })
    }

    /// Called when the modal closes.
    pub fn abandon(&self) {
        self.sequencer.invalidate();
    }
}

/// Text for a stat if it is "truthy": non-null, non-zero, non-empty.
pub fn stat_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().to_string()),
        Value::Bool(true) => Some("Yes".to_string()),
        _ => None,
    }
}

/// Price label: rupees with Indian grouping, or "Contact for Price".
pub fn price_label(value: Option<&Value>) -> String {
    let amount = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => parse_leading_int(s),
        _ => None,
    };
    match amount {
        Some(amount) if amount != 0 => format_inr(amount),
        _ => "Contact for Price".to_string(),
    }
}

impl PropertyDetail {
    pub fn display_title(&self) -> &str {
        non_blank(&self.title).unwrap_or("Beautiful Property")
    }

    pub fn display_location(&self) -> &str {
        non_blank(&self.location).unwrap_or("Location not specified")
    }

    pub fn display_description(&self) -> &str {
        non_blank(&self.description).unwrap_or("No description available.")
    }

    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(|img| img.url.as_str())
            .unwrap_or(FALLBACK_IMAGE_URL)
    }

    /// (label, value) pairs for the stats row, skipping absent ones.
    pub fn stats(&self) -> Vec<(&'static str, String)> {
        [
            ("Bedrooms", self.bedrooms.as_ref()),
            ("Bathrooms", self.bathrooms.as_ref()),
            ("Sq Ft", self.area.as_ref()),
            ("Parking", self.parking.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| stat_text(value).map(|text| (label, text)))
        .collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{ScriptedBackend, Sent};
    use crate::api::HttpReply;
    use futures::executor::block_on;
    use serde_json::json;

    const DETAIL: &str = r#"{"id":42,"title":"Palm Villa","location":"Palm Jumeirah",
        "bedrooms":4,"bathrooms":"3","area":0,"parking":null,"price":"12500000.00",
        "images":[]}"#;

    #[test]
    fn loads_detail_from_listing_path() {
        let loader = DetailLoader::new(ScriptedBackend::new().reply_json(DETAIL));
        let view = block_on(loader.load(&PropertyId::new("42"))).unwrap();
        let DetailView::Loaded(detail) = view else {
            panic!("expected loaded detail");
        };
        assert_eq!(detail.display_title(), "Palm Villa");
        assert_eq!(loader.backend.sent(), vec![Sent::Get("/property/42/".into())]);
    }

    #[test]
    fn non_success_status_fails() {
        let loader = DetailLoader::new(ScriptedBackend::new().reply(Ok(HttpReply {
            status: 404,
            redirected_to: None,
            body: r#"{"detail":"Not found."}"#.into(),
        })));
        assert_eq!(
            block_on(loader.load(&PropertyId::new("9"))),
            Some(DetailView::Failed)
        );
    }

    #[test]
    fn abandoned_load_is_dropped() {
        let sequencer_probe = std::rc::Rc::new(std::cell::RefCell::new(None::<RequestSequencer>));
        let probe = sequencer_probe.clone();
        let backend = ScriptedBackend::new()
            .reply_json(DETAIL)
            .during_request(move || {
                if let Some(seq) = probe.borrow().as_ref() {
                    seq.invalidate();
                }
            });
        let loader = DetailLoader::new(backend);
        *sequencer_probe.borrow_mut() = Some(loader.sequencer.clone());
        assert_eq!(block_on(loader.load(&PropertyId::new("42"))), None);
    }

    #[test]
    fn stats_skip_falsy_values() {
        let detail: PropertyDetail = serde_json::from_str(DETAIL).unwrap();
        assert_eq!(
            detail.stats(),
            vec![("Bedrooms", "4".to_string()), ("Bathrooms", "3".to_string())]
        );
        assert_eq!(detail.cover_image(), FALLBACK_IMAGE_URL);
        assert_eq!(detail.display_description(), "No description available.");
    }

    #[test]
    fn price_labels() {
        assert_eq!(price_label(Some(&json!("12500000.00"))), "₹1,25,00,000");
        assert_eq!(price_label(Some(&json!(850000))), "₹8,50,000");
        assert_eq!(price_label(Some(&json!(0))), "Contact for Price");
        assert_eq!(price_label(None), "Contact for Price");
        assert_eq!(price_label(Some(&json!("on request"))), "Contact for Price");
    }
}
