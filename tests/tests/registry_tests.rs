//! Variant registry seen from a host dispatch layer

use std::collections::BTreeMap;

use keywrap_symmetric::{
    find, register_all, CipherMode, CipherRegistrar, WrapVariant, VARIANTS,
};
use keywrap_tests::logging;

/// Host that indexes variants under every identifier they advertise
#[derive(Default)]
struct Dispatch {
    by_id: BTreeMap<String, &'static WrapVariant>,
}

impl CipherRegistrar for Dispatch {
    type Error = String;

    fn register(&mut self, variant: &'static WrapVariant) -> Result<(), String> {
        let ids = std::iter::once(variant.name)
            .chain(variant.aliases.iter().copied())
            .chain(std::iter::once(variant.oid));
        for id in ids {
            if self.by_id.insert(id.to_ascii_lowercase(), variant).is_some() {
                return Err(format!("duplicate identifier {id}"));
            }
        }
        Ok(())
    }
}

#[test]
fn every_identifier_is_unique_and_resolves() {
    logging::init();
    let mut host = Dispatch::default();
    assert_eq!(register_all(&mut host).unwrap(), 6);
    assert_eq!(host.by_id.len(), 6 * 4);

    for (id, v) in &host.by_id {
        assert_eq!(find(id).map(|f| f.name), Some(v.name));
    }
}

#[test]
fn advertised_parameters() {
    for v in VARIANTS.iter() {
        let p = v.algorithm_params();
        assert_eq!(p.mode, CipherMode::Wrap);
        assert_eq!(p.key_len * 8, v.key_bits);
        assert_eq!(p.block_size, 8);
        assert_eq!(p.iv_len, if v.padding() { 4 } else { 8 });
        assert!(p.flags.custom_iv && p.flags.always_call_init && !p.flags.streaming);
    }
}
