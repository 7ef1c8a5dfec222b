use std::collections::BTreeSet;

/// Trailing path segment of a reference URL, ignoring a trailing `/`.
pub fn trailing_id(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Unique identifiers referenced by `urls`.
pub fn extract_ids<'a, I>(urls: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    urls.into_iter()
        .filter_map(|url| trailing_id(url))
        .map(str::to_string)
        .collect()
}
