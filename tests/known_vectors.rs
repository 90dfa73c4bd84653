use keycheck::secp256k1::{Scalar, G};
use keycheck::wif::encode_wif;
use keycheck::{derive_addresses, matches_target, KeyKind};

/// (private key hex, uncompressed address, compressed address)
const VECTORS: &[(&str, &str, &str)] = &[
    (
        "0000000000000000000000000000000000000000000000000000000000000001",
        "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm",
        "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH",
    ),
    // Bitcoin wiki "technical background" example key
    (
        "18e14a7b6a307f426a94f8114701e7c8e774e7f9a47e2c2035db29a206321725",
        "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM",
        "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs",
    ),
];

#[test]
fn test_derive_addresses_known_vectors() {
    for (priv_hex, uncompressed, compressed) in VECTORS {
        let addrs = derive_addresses(priv_hex).unwrap();

        assert_eq!(addrs[0].0, KeyKind::Uncompressed);
        assert_eq!(&addrs[0].1, uncompressed, "uncompressed mismatch for {}", priv_hex);
        assert_eq!(addrs[1].0, KeyKind::Compressed);
        assert_eq!(&addrs[1].1, compressed, "compressed mismatch for {}", priv_hex);
    }
}

#[test]
fn test_scalar_one_yields_generator() {
    let key = Scalar::from_hex(VECTORS[0].0).unwrap();
    let point = G.mul(&key);
    assert_eq!(point, G);
    assert_eq!(
        hex::encode_upper(point.x.to_bytes()),
        "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"
    );
}

#[test]
fn test_matches_target_end_to_end() {
    let (key, uncompressed, compressed) = VECTORS[0];
    assert!(matches_target(key, compressed));
    assert!(matches_target(key, uncompressed));
    assert!(!matches_target(key, "1GSMG1JC9wtdSwfwApgj2xcmJPAwx7prBe"));
}

#[test]
fn test_uppercase_key_derives_same_addresses() {
    let lower = "2233181ac0da99dc48737c256ee44dc6faf3ff1c9ae3ec4a42053540b0ef7ebd";
    let upper = lower.to_uppercase();
    assert_eq!(derive_addresses(lower).unwrap(), derive_addresses(&upper).unwrap());
}

#[test]
fn test_wif_known_vectors() {
    let key = Scalar::from_hex(VECTORS[0].0).unwrap();
    assert_eq!(
        encode_wif(&key, true, true),
        "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"
    );
    assert_eq!(
        encode_wif(&key, false, true),
        "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf"
    );
}
