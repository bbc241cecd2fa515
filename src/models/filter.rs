/// Something a list page can search through.
pub trait Searchable {
    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

/// Case-insensitive, unanchored substring search over `list`.
///
/// Always runs over the full list it is given and keeps the original
/// order; an empty term matches everything.
pub fn filter<'a, T: Searchable>(list: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    list.iter()
        .filter(|item| {
            needle.is_empty()
                || item
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
