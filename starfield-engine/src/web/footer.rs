// footer.rs - Current year into #year

use web_sys::Document;

use crate::footer::year_text;

pub const YEAR_ID: &str = "year";

/// Returns false when the page has no year slot.
pub fn set_year(document: &Document) -> bool {
    let Some(el) = document.get_element_by_id(YEAR_ID) else { return false };
    el.set_text_content(Some(&year_text(&chrono::Local::now())));
    true
}
