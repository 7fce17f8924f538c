//! Slug and keyword text helpers.

use rustc_hash::FxHashSet;

/// Turn a URL slug into words: every `-` becomes a space.
///
/// `task-management-tips` -> `task management tips`
#[inline]
pub fn humanize(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Humanize a slug, then upper-case the first character of every
/// whitespace-delimited word. The rest of each word is left as is, so
/// acronyms are not special-cased (`api` -> `Api`, `SSO` -> `SSO`).
pub fn title_case(slug: &str) -> String {
    let words = humanize(slug);
    let mut out = String::with_capacity(words.len());
    let mut at_word_start = true;

    for c in words.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Concatenate keyword lists, keeping the first occurrence of each entry.
///
/// Comparison is case-sensitive.
pub fn merge_unique<'a, I>(lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for keyword in lists.into_iter().flatten() {
        if seen.insert(keyword.as_str()) {
            out.push(keyword.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("task-management-tips"), "task management tips");
        assert_eq!(humanize("plain"), "plain");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("task-management-tips"), "Task Management Tips");
        assert_eq!(title_case("pro-plan"), "Pro Plan");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_keeps_rest_of_word() {
        assert_eq!(title_case("rest-api"), "Rest Api");
        assert_eq!(title_case("SSO-setup"), "SSO Setup");
        assert_eq!(title_case("don't-panic"), "Don't Panic");
    }

    #[test]
    fn test_title_case_repeated_separators() {
        assert_eq!(title_case("a--b"), "A  B");
        assert_eq!(title_case("-lead"), " Lead");
    }

    #[test]
    fn test_title_case_unicode() {
        assert_eq!(title_case("über-cool"), "Über Cool");
    }

    #[test]
    fn test_merge_unique() {
        let page = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let site = vec!["b".to_string(), "c".to_string()];
        assert_eq!(
            merge_unique([page.as_slice(), site.as_slice()]),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_merge_unique_case_sensitive() {
        let page = vec!["SaaS".to_string()];
        let site = vec!["saas".to_string(), "SaaS".to_string()];
        assert_eq!(
            merge_unique([page.as_slice(), site.as_slice()]),
            vec!["SaaS", "saas"]
        );
    }
}
