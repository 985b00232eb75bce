use serde_json::Value;

use super::fields::{present_text, required_text};
use crate::error::Result;

const LINK_FIELD: &str = "linkTo";
const CATEGORY_FIELD: &str = "category";
const SUBCATEGORY_FIELD: &str = "subcategory";
const SLUG_FIELD: &str = "slug";

/// Detail-page URL of a record.
///
/// A usable `linkTo` is returned verbatim. Otherwise the URL is rebuilt from
/// `category`, `subcategory` and `slug`, all of which are then required.
pub fn resolve_url(record: &Value, base_site: &str) -> Result<String> {
    if let Some(link) = present_text(record, LINK_FIELD) {
        return Ok(link.into_owned());
    }

    let category = required_text(record, CATEGORY_FIELD)?;
    let subcategory = required_text(record, SUBCATEGORY_FIELD)?;
    let slug = required_text(record, SLUG_FIELD)?;

    Ok(build_detail_url(base_site, &category, &subcategory, &slug))
}

/// Join URL components under `base_site`, dropping quotes from the subcategory
pub fn build_detail_url(base_site: &str, category: &str, subcategory: &str, slug: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        base_site.trim_end_matches('/'),
        category,
        subcategory.replace('"', ""),
        slug
    )
}
