//! Property tests for content digests.

use std::io::Cursor;

use proptest::prelude::*;

use assetdigest::ContentDigest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every digest is 64 lowercase hex characters.
    #[test]
    fn property_digest_shape(content in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let digest = ContentDigest::from_bytes(&content);

        prop_assert_eq!(digest.as_str().len(), ContentDigest::HEX_LEN);
        prop_assert!(digest.as_str().bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        prop_assert!(ContentDigest::parse(digest.as_str()).is_ok());
    }

    /// PROPERTY: streaming and one-shot digests agree.
    #[test]
    fn property_streaming_matches_buffered(content in proptest::collection::vec(any::<u8>(), 0..65536)) {
        let streamed = ContentDigest::from_reader(Cursor::new(&content)).unwrap();

        prop_assert_eq!(streamed, ContentDigest::from_bytes(&content));
    }

    /// PROPERTY: distinct content yields distinct digests.
    #[test]
    fn property_distinct_content_distinct_digest(
        a in proptest::collection::vec(any::<u8>(), 0..256),
        b in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        prop_assume!(a != b);

        prop_assert_ne!(ContentDigest::from_bytes(&a), ContentDigest::from_bytes(&b));
    }
}
