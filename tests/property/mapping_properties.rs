use event_mapper::mapping::tags::normalize_tags;
use event_mapper::{EbiletMapper, EventMapper};
use proptest::prelude::*;
use serde_json::{json, Value};

fn listing(title: Option<&str>) -> Value {
    let mut record = json!({
        "imageLandscape": "/img/x.jpg",
        "linkTo": "https://www.ebilet.pl/muzyka/rock/x",
        "categoryName": "Muzyka",
        "metaDescription": "Opis"
    });
    if let Some(title) = title {
        record["title"] = json!(title);
    }
    record
}

proptest! {
    #[test]
    fn tag_normalization_is_idempotent(s in ".*") {
        let once = normalize_tags(s.as_str());
        prop_assert_eq!(normalize_tags(once.as_str()), once);
    }

    #[test]
    fn tag_normalization_is_idempotent_on_tag_like_input(s in "[A-Za-ząćęłńóśźżĄĆĘŁŃÓŚŹŻ0-9 ,_\\-!/\t]{0,60}") {
        let once = normalize_tags(s.as_str());
        prop_assert_eq!(normalize_tags(once.as_str()), once);
    }

    #[test]
    fn normalized_tags_only_use_tag_charset(s in ".*") {
        let normalized = normalize_tags(s.as_str());
        for piece in normalized.split(", ") {
            prop_assert!(!piece.starts_with(' ') && !piece.ends_with(' '));
            prop_assert!(!piece.contains("  "));
            prop_assert!(piece.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == ' '
                || "ąćęłńóśźż".contains(c)));
        }
    }

    #[test]
    fn batch_keeps_titled_records_in_order(
        titles in prop::collection::vec(prop::option::of("[A-Za-z][A-Za-z ]{0,15}"), 0..40)
    ) {
        let titles: Vec<Option<String>> = titles
            .into_iter()
            .map(|t| t.map(|t| format!("Event {t}")))
            .collect();
        let records: Vec<Value> = titles.iter().map(|t| listing(t.as_deref())).collect();

        let report = EbiletMapper::new().map_batch_with_report(&records);

        prop_assert!(report.events.len() <= records.len());
        prop_assert_eq!(report.total(), records.len());

        let expected: Vec<&str> = titles.iter().filter_map(|t| t.as_deref()).collect();
        let mapped: Vec<&str> = report.events.iter().map(|e| e.event_name.as_str()).collect();
        prop_assert_eq!(mapped, expected);
    }
}
