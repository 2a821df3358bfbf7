// Helper method for parsing tags
//
// Splits a comma-separated list, trims each entry, and drops empties and
// duplicates (first occurrence wins) so drafts enter the store distinct.
pub fn parse_tags(tags: Option<String>) -> Vec<String> {
    let mut parsed: Vec<String> = Vec::new();

    for tag in tags.as_deref().unwrap_or_default().split(',') {
        let tag = tag.trim();
        if !tag.is_empty() && !parsed.iter().any(|existing| existing == tag) {
            parsed.push(tag.to_string());
        }
    }

    parsed
}
