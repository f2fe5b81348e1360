//! Listing filter form: price range checking, delayed auto-submit and
//! pagination links.

use crate::config::{FILTER_BUSY_LABEL, FILTER_IDLE_LABEL, FILTER_SUBMIT_DELAY_MS};
use crate::utils::parse_leading_int;
use url::form_urlencoded;

pub const PRICE_RANGE_MESSAGE: &str = "Maximum price must be greater than minimum price";

/// Custom-validity message for the max price field, or `None` when the range
/// is fine. Blank or non-numeric bounds are open-ended. A max of "0" is a
/// real bound of zero, not an open end.
pub fn price_range_error(min_text: &str, max_text: &str) -> Option<&'static str> {
    let min = parse_leading_int(min_text).unwrap_or(0);
    let max = parse_leading_int(max_text)?;
    (min > max).then_some(PRICE_RANGE_MESSAGE)
}

/// Submit-button state of the filter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSubmitter {
    pending: bool,
}

impl FilterSubmitter {
    /// A filter input changed. Returns the delay after which the form should
    /// be submitted, or `None` when a submit is already scheduled.
    pub fn on_change(&mut self) -> Option<u32> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(FILTER_SUBMIT_DELAY_MS)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn button_label(&self) -> &'static str {
        if self.pending {
            FILTER_BUSY_LABEL
        } else {
            FILTER_IDLE_LABEL
        }
    }
}

/// Current filter selection as carried in the listing URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterValues {
    pub property_type: String,
    pub city: String,
    pub district: String,
    pub min_price: String,
    pub max_price: String,
}

impl FilterValues {
    /// Read the selection from a `location.search` string (leading `?`
    /// optional). Unknown parameters are ignored.
    pub fn from_query(search: &str) -> Self {
        let mut values = FilterValues::default();
        for (key, value) in form_urlencoded::parse(search.trim_start_matches('?').as_bytes()) {
            let slot = match key.as_ref() {
                "property_type" => &mut values.property_type,
                "city" => &mut values.city,
                "district" => &mut values.district,
                "min_price" => &mut values.min_price,
                "max_price" => &mut values.max_price,
                _ => continue,
            };
            *slot = value.into_owned();
        }
        values
    }
}

/// Query string for `page` of the current listing: any existing `page`
/// parameter is replaced, and page 1 is expressed by leaving it out.
pub fn page_query(search: &str, page: &str) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(search.trim_start_matches('?').as_bytes()) {
        if key != "page" {
            out.append_pair(&key, &value);
        }
    }
    let page = page.trim();
    if !page.is_empty() && page != "1" {
        out.append_pair("page", page);
    }
    let query = out.finish();
    if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_flags_max_field() {
        assert_eq!(price_range_error("5000", "3000"), Some(PRICE_RANGE_MESSAGE));
        assert_eq!(price_range_error("3000", "5000"), None);
        assert_eq!(price_range_error("5000", "5000"), None);
    }

    #[test]
    fn blank_bounds_are_open_ended() {
        assert_eq!(price_range_error("", "3000"), None);
        assert_eq!(price_range_error("5000", ""), None);
        assert_eq!(price_range_error("abc", "xyz"), None);
        assert_eq!(price_range_error("5000", "0"), Some(PRICE_RANGE_MESSAGE));
    }

    #[test]
    fn only_first_change_schedules_submit() {
        let mut submitter = FilterSubmitter::default();
        assert_eq!(submitter.button_label(), FILTER_IDLE_LABEL);
        assert_eq!(submitter.on_change(), Some(FILTER_SUBMIT_DELAY_MS));
        assert_eq!(submitter.on_change(), None);
        assert!(submitter.is_pending());
        assert_eq!(submitter.button_label(), FILTER_BUSY_LABEL);
    }

    #[test]
    fn filter_values_from_url() {
        let values = FilterValues::from_query("?city=Dubai&min_price=1000&page=3&utm=x");
        assert_eq!(values.city, "Dubai");
        assert_eq!(values.min_price, "1000");
        assert_eq!(values.max_price, "");
    }

    #[test]
    fn page_query_replaces_existing_page() {
        assert_eq!(
            page_query("?city=Abu+Dhabi&page=2", "4"),
            "?city=Abu+Dhabi&page=4"
        );
    }

    #[test]
    fn first_page_drops_parameter() {
        assert_eq!(page_query("?page=5&city=Dubai", "1"), "?city=Dubai");
        assert_eq!(page_query("?page=5", "1"), "");
        assert_eq!(page_query("", "2"), "?page=2");
    }
}
