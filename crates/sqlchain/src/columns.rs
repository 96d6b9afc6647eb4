//! Column list accepted by `fetch`/`columns`.

/// A normalized list of SELECT columns.
///
/// Built from a single column (`"*"`), an array (`["id", "name"]`), a slice,
/// or a `Vec`, so callers can pass whichever form is at hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Columns(Vec<String>);

impl Columns {
    /// All columns (`*`).
    pub fn all() -> Self {
        Columns(vec!["*".to_string()])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Columns {
    fn from(col: &str) -> Self {
        Columns(vec![col.to_string()])
    }
}

impl From<String> for Columns {
    fn from(col: String) -> Self {
        Columns(vec![col])
    }
}

impl<S: AsRef<str>> From<&[S]> for Columns {
    fn from(cols: &[S]) -> Self {
        Columns(cols.iter().map(|c| c.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Columns {
    fn from(cols: [S; N]) -> Self {
        Columns(cols.iter().map(|c| c.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Columns {
    fn from(cols: Vec<S>) -> Self {
        Columns(cols.iter().map(|c| c.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Columns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Columns(iter.into_iter().map(|c| c.as_ref().to_string()).collect())
    }
}
