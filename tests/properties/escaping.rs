//! Property tests for string literal escaping.

use proptest::prelude::*;

use assetdigest::escaping::{quote, unquote};
use assetdigest::Dialect;

fn dialect() -> impl Strategy<Value = Dialect> {
    prop_oneof![
        Just(Dialect::Go),
        Just(Dialect::JavaScript),
        Just(Dialect::Python),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: quoting then unquoting any string is the identity.
    #[test]
    fn property_quote_round_trip(s in "(?s).{0,64}", dialect in dialect()) {
        let quoted = quote(&s, dialect);
        let (value, rest) = unquote(&quoted).unwrap();

        prop_assert_eq!(value, s);
        prop_assert!(rest.is_empty());
    }

    /// PROPERTY: quoted literals never contain raw control characters.
    #[test]
    fn property_quote_is_single_line(s in "(?s).{0,64}", dialect in dialect()) {
        let quoted = quote(&s, dialect);

        prop_assert!(!quoted.chars().any(|c| c.is_control()));
    }

    /// PROPERTY: unquote never panics on arbitrary input.
    #[test]
    fn property_unquote_never_panics(s in "(?s).{0,128}") {
        let _ = unquote(&s);
    }
}
