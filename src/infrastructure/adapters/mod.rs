//! Dialect Adapters
//!
//! These adapters implement the ManifestDialect port from the domain layer.
//! Each one carries the accessor boilerplate for one target language.

pub mod go;
pub mod javascript;
pub mod python;

pub use go::GoDialect;
pub use javascript::JavaScriptDialect;
pub use python::PythonDialect;

use crate::domain::ports::ManifestDialect;
use crate::domain::value_objects::Dialect;

/// Get all available dialect adapters
pub fn all_dialects() -> Vec<Box<dyn ManifestDialect>> {
    Dialect::ALL.into_iter().map(get_dialect).collect()
}

/// Get the adapter for a dialect
pub fn get_dialect(dialect: Dialect) -> Box<dyn ManifestDialect> {
    match dialect {
        Dialect::Go => Box::new(GoDialect::new()),
        Dialect::JavaScript => Box::new(JavaScriptDialect::new()),
        Dialect::Python => Box::new(PythonDialect::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_dialects_returns_one_per_dialect() {
        let adapters = all_dialects();
        let dialects: Vec<Dialect> = adapters.iter().map(|a| a.dialect()).collect();

        assert_eq!(dialects, Dialect::ALL.to_vec());
    }

    #[test]
    fn get_dialect_matches_request() {
        for dialect in Dialect::ALL {
            assert_eq!(get_dialect(dialect).dialect(), dialect);
        }
    }

    #[test]
    fn no_header_line_looks_like_an_entry() {
        for adapter in all_dialects() {
            for text in [adapter.header(), adapter.footer()] {
                assert!(
                    !text.lines().any(|l| l.starts_with("  \"")),
                    "{} boilerplate contains an entry-like line",
                    adapter.dialect()
                );
            }
        }
    }

    #[test]
    fn every_footer_ends_with_blank_line() {
        for adapter in all_dialects() {
            assert!(adapter.footer().ends_with("\n\n"));
        }
    }

    #[test]
    fn every_header_opens_the_binhash_table() {
        for adapter in all_dialects() {
            assert!(adapter.header().contains("_binhash"));
            assert!(adapter.header().ends_with("{\n"));
        }
    }
}
