//! Case-insensitive substring search helpers.

/// Build an `ILIKE` pattern that matches `term` anywhere in a column.
///
/// LIKE metacharacters in the term are escaped with PostgreSQL's default
/// escape character (`\`) so they match literally. An empty term yields
/// `%%`, which matches every row.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
