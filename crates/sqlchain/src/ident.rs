//! Backtick identifier quoting.
//!
//! Table and column names inside SET/INSERT lists are wrapped in backticks.
//! Unless escaping is enabled, the name is inserted verbatim.

/// Quote an identifier with backticks.
///
/// With `escape` set, embedded backticks are doubled.
pub fn quote_ident(name: &str, escape: bool) -> String {
    if escape {
        format!("`{}`", name.replace('`', "``"))
    } else {
        format!("`{name}`")
    }
}

/// Quote and join identifiers with `", "`.
pub(crate) fn quote_ident_list<'a>(names: impl IntoIterator<Item = &'a str>, escape: bool) -> String {
    names
        .into_iter()
        .map(|n| quote_ident(n, escape))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote_ident("users", false), "`users`");
    }

    #[test]
    fn test_quote_escape() {
        assert_eq!(quote_ident("we`ird", false), "`we`ird`");
        assert_eq!(quote_ident("we`ird", true), "`we``ird`");
    }

    #[test]
    fn test_quote_list() {
        assert_eq!(quote_ident_list(["id", "username"], false), "`id`, `username`");
    }
}
