use crate::domain::model::VenueControl;
use regex::Regex;

/// Scans listing markup for delete controls: elements whose `class`
/// attribute contains the marker class as a whole token.
///
/// Elements without the id attribute are skipped rather than rejected;
/// the page contract says the identifier should be there, but nothing
/// enforces it. An optional `data-next-show` timestamp is carried along
/// verbatim when present.
pub fn scan_controls(html: &str, marker_class: &str, id_attribute: &str) -> Vec<VenueControl> {
    let tag_pattern = Regex::new(r"<[A-Za-z][^>]*>").unwrap();
    let class_pattern = attribute_pattern("class");
    let id_pattern = attribute_pattern(id_attribute);
    let next_show_pattern = attribute_pattern("data-next-show");

    let mut controls = Vec::new();

    for tag in tag_pattern.find_iter(html) {
        let tag = tag.as_str();

        let Some(classes) = capture_value(&class_pattern, tag) else {
            continue;
        };
        if !classes.split_whitespace().any(|c| c == marker_class) {
            continue;
        }

        let Some(venue_id) = capture_value(&id_pattern, tag) else {
            tracing::debug!("Marker element without {} attribute, skipping", id_attribute);
            continue;
        };

        controls.push(VenueControl {
            venue_id,
            next_show: capture_value(&next_show_pattern, tag),
        });
    }

    controls
}

/// Matches `name="value"` or `name='value'` inside a single opening tag.
fn attribute_pattern(name: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)\s{}\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
        regex::escape(name)
    ))
    .unwrap()
}

fn capture_value(pattern: &Regex, tag: &str) -> Option<String> {
    let caps = pattern.captures(tag)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}
