//! ManifestDialect port - target-language boilerplate
//!
//! Entry lines are identical across languages. A dialect supplies what
//! surrounds them and how names become string literals.

use crate::domain::value_objects::Dialect;

/// Boilerplate and quoting rules for one target language
pub trait ManifestDialect {
    /// The dialect this adapter emits
    fn dialect(&self) -> Dialect;

    /// Accessor function plus the opening of the map literal
    ///
    /// The accessor must rewrite `\` to `/` before lookup and fail with an
    /// error naming the queried asset on a miss.
    fn header(&self) -> &'static str;

    /// Closing delimiter of the map literal and a trailing blank line
    fn footer(&self) -> &'static str;

    /// Render `s` as a double-quoted string literal
    fn quote(&self, s: &str) -> String {
        crate::escaping::quote(s, self.dialect())
    }
}
