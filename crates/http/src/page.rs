//! Readings page: embedded HTML table filled client-side from a JSON array.
//!
//! The client script HTML-escapes every value and fills each row in one pass
//! over the `{!field!}` tokens.

use homesense_core::DisplayRecord;

/// Embedded HTML skeleton. `MEASUREMENT_DATA` marks where the records go.
const PAGE_TEMPLATE: &str = include_str!("page.html");

const DATA_PLACEHOLDER: &str = "MEASUREMENT_DATA";

/// Header value sent with every rendered page.
pub const HTML_CONTENT_TYPE: &str = "text/html;charset=utf-8";

/// Render the full page with `records` in the given order.
pub fn render_page(records: &[DisplayRecord]) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(records)?;
    Ok(PAGE_TEMPLATE.replacen(DATA_PLACEHOLDER, &escape_for_script(&json), 1))
}

/// Escape characters that could close the script element or break a JS
/// string literal. Output is still valid JSON.
fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use super::*;

    fn record(location: &str) -> DisplayRecord {
        DisplayRecord {
            location: location.to_owned(),
            temperature: "21.3".to_owned(),
            humidity: "55.2".to_owned(),
            absolute_humidity: "10.3".to_owned(),
            last_modified_time: "14/11/2023, 22:13:20".to_owned(),
        }
    }

    fn embedded(page: &str) -> Vec<DisplayRecord> {
        let start = page.find("var data = ").unwrap() + "var data = ".len();
        serde_json::Deserializer::from_str(&page[start..])
            .into_iter::<Vec<DisplayRecord>>()
            .next()
            .unwrap()
            .unwrap()
    }

    #[test]
    fn embeds_records_in_order() {
        let records = vec![record("Kitchen"), record("Loft")];
        let page = render_page(&records).unwrap();

        assert!(page.contains("<title>Home Measurements</title>"));
        assert!(!page.contains(DATA_PLACEHOLDER));
        assert_eq!(embedded(&page), records);
    }

    #[test]
    fn empty_records_render_empty_array() {
        let page = render_page(&[]).unwrap();
        assert!(page.contains("var data = [];"));
    }

    #[test]
    fn script_breaking_values_are_escaped() {
        let hostile = record("</script><script>alert(1)</script>&\u{2028}");
        let page = render_page(std::slice::from_ref(&hostile)).unwrap();

        assert_eq!(page.matches("</script>").count(), 1);
        assert!(page.contains("\\u003c/script\\u003e"));
        assert!(page.contains("\\u2028"));
        assert_eq!(embedded(&page), vec![hostile]);
    }

    #[test]
    fn template_carries_all_field_tokens() {
        for token in
            ["{!location!}", "{!temperature!}", "{!humidity!}", "{!absoluteHumidity!}", "{!lastModifiedTime!}"]
        {
            assert!(PAGE_TEMPLATE.contains(token), "missing {token}");
        }
        assert_eq!(PAGE_TEMPLATE.matches(DATA_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn rows_are_filled_in_a_single_pass() {
        // A value that looks like a token must not be expanded by a later key.
        assert!(PAGE_TEMPLATE.contains(r"rowTemplate.replace(/\{!(\w+)!\}/g, function (token, key)"));
        assert!(!PAGE_TEMPLATE.contains(".split("));
    }

    #[test]
    fn token_lookalike_values_survive_embedding() {
        let mut tricky = record("{!temperature!}");
        tricky.humidity = "{!location!}".to_owned();
        let page = render_page(std::slice::from_ref(&tricky)).unwrap();
        assert_eq!(embedded(&page), vec![tricky]);
    }
}
