//! Property tests for rendered manifests.

use std::collections::BTreeSet;

use proptest::prelude::*;

use assetdigest::infrastructure::MemoryAssets;
use assetdigest::{Asset, ContentDigest, Dialect, ManifestGenerator, ManifestIndex, ManifestOptions};

/// Unique names paired with arbitrary contents, in random order
fn asset_set() -> impl Strategy<Value = Vec<(String, Vec<u8>)>> {
    let name = proptest::string::string_regex("[a-z0-9]{1,8}(/[a-z0-9._-]{1,8}){0,3}").unwrap();
    proptest::collection::btree_map(name, proptest::collection::vec(any::<u8>(), 0..64), 0..12)
        .prop_map(|map| map.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn build(entries: &[(String, Vec<u8>)]) -> (MemoryAssets, Vec<Asset>) {
    let mut sources = MemoryAssets::new();
    let mut assets = Vec::new();
    for (i, (name, content)) in entries.iter().enumerate() {
        let path = format!("/src/{}", i);
        sources.insert(path.as_str(), content.clone());
        assets.push(Asset::new(name.as_str(), path));
    }
    (sources, assets)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: entries come out in input order and resolve to their digests.
    #[test]
    fn property_order_and_round_trip(entries in asset_set(), align in any::<bool>()) {
        let (sources, assets) = build(&entries);

        for dialect in Dialect::ALL {
            let options = ManifestOptions::new(dialect).with_alignment(align);
            let text = ManifestGenerator::with_reader(&sources, &options).render(&assets).unwrap();
            let index = ManifestIndex::parse(&text).unwrap();

            let names: Vec<&str> = index.names().collect();
            let expected: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
            prop_assert_eq!(names, expected);

            for (name, content) in &entries {
                prop_assert_eq!(index.get(name).unwrap(), &ContentDigest::from_bytes(content));
                prop_assert!(index.get(&name.replace('/', "\\")).is_ok());
            }
        }
    }

    /// PROPERTY: names absent from the input never resolve.
    #[test]
    fn property_unknown_names_not_found(entries in asset_set(), probe in "[A-Z]{1,8}") {
        let (sources, assets) = build(&entries);
        let known: BTreeSet<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
        prop_assume!(!known.contains(probe.as_str()));

        let text = ManifestGenerator::with_reader(&sources, &ManifestOptions::default())
            .render(&assets)
            .unwrap();

        prop_assert!(ManifestIndex::parse(&text).unwrap().get(&probe).is_err());
    }
}
