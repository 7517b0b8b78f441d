//! Property Filters
//!
//! The listing filter form re-navigates as soon as any field changes,
//! carrying only the fields that have a value.

use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::context::PageContext;
use crate::dom::{Dom, DomEvent};

pub const FILTER_FORM_ID: &str = "propertySearchForm";
const FILTER_FIELDS_SELECTOR: &str = "input, select";

/// `application/x-www-form-urlencoded` keeps `*-._` and alphanumerics
const FORM_URLENCODED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'*').remove(b'-').remove(b'.').remove(b'_');

fn encode_component(value: &str) -> String {
    value
        .split(' ')
        .map(|part| utf8_percent_encode(part, FORM_URLENCODED).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Serialize non-blank fields in order, values trimmed
pub fn build_query_string<K, V>(entries: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries
        .iter()
        .filter_map(|(key, value)| {
            let value = value.as_ref().trim();
            (!value.is_empty()).then(|| format!("{}={}", encode_component(key.as_ref()), encode_component(value)))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Replace the query part of `url`, keeping any fragment
pub fn with_query(url: &str, query: &str) -> String {
    let (without_fragment, fragment) = match url.find('#') {
        Some(pos) => url.split_at(pos),
        None => (url, ""),
    };
    let base = without_fragment.split('?').next().unwrap_or(without_fragment);
    if query.is_empty() {
        format!("{}{}", base, fragment)
    } else {
        format!("{}?{}{}", base, query, fragment)
    }
}

/// Navigate to the current page filtered by the form's values.
/// Returns the target URL, or `None` when the page has no filter form.
pub fn update_property_filters<D: Dom>(dom: &D) -> Option<String> {
    let form = dom.get_by_id(FILTER_FORM_ID)?;
    let query = build_query_string(&dom.form_entries(&form));
    let url = with_query(&dom.location(), &query);
    dom.navigate(&url);
    Some(url)
}

/// Re-run the filter on every field change (submit controls excluded)
pub fn bind_filter_autosubmit<D: Dom>(ctx: &PageContext<D>) -> usize {
    let Some(form) = ctx.dom.get_by_id(FILTER_FORM_ID) else {
        return 0;
    };
    let fields = ctx.dom.query_all_within(&form, FILTER_FIELDS_SELECTOR);
    for field in &fields {
        let dom = Rc::clone(&ctx.dom);
        let target = field.clone();
        ctx.dom.listen(
            field,
            "change",
            Rc::new(move |_: &dyn DomEvent| {
                if dom.attribute(&target, "type").as_deref() != Some("submit") {
                    update_property_filters(&*dom);
                }
            }),
        );
    }
    fields.len()
}
