use std::collections::{HashMap, HashSet};
use std::thread;

use randomizer::rng::secure;
use randomizer::{Charset, SecureError, charset};

#[test]
fn u64_n_rejects_zero_bound() {
    assert!(matches!(secure::u64_n(0), Err(SecureError::ZeroBound)));
    assert!(matches!(secure::int_n(0), Err(SecureError::ZeroBound)));
}

#[test]
fn u64_n_is_in_range() {
    for n in [1u64, 2, 3, 10, 1000, u64::MAX] {
        for _ in 0..200 {
            assert!(secure::u64_n(n).unwrap() < n);
        }
    }
}

#[test]
fn int_reports_inverted_range() {
    let err = secure::int(10, 1).unwrap_err();

    assert!(matches!(err, SecureError::InvalidRange { .. }));
    assert_eq!(err.to_string(), "randomizer: invalid secure range [10, 1]");
}

#[test]
fn number_dispatches_per_kind() {
    for _ in 0..500 {
        let _: i8 = secure::number(-128, 127).unwrap();

        let b: u32 = secure::number(7, 9).unwrap();
        assert!((7..=9).contains(&b));

        let c: f32 = secure::number(0.5, 0.75).unwrap();
        assert!((0.5..=0.75).contains(&c));
    }

    assert!(secure::number(2.0f64, 1.0).is_err());
    assert!(secure::number_n(-1i32).is_err());
    assert_eq!(secure::number(4u16, 4).unwrap(), 4);
}

#[test]
fn string_validates_arguments() {
    let set = Charset::from_static(charset::ALPHABET_UPPER);

    let s = secure::string(32, &set).unwrap();
    assert_eq!(s.len(), 32);
    assert!(s.bytes().all(|b| b.is_ascii_uppercase()));

    assert!(matches!(secure::string(0, &set), Err(SecureError::ZeroLength)));
    assert!(matches!(
        secure::string_from(4, b""),
        Err(SecureError::EmptyCharset)
    ));
}

#[test]
fn bytes_and_hex_lengths() {
    assert!(secure::bytes(0).unwrap().is_empty());
    assert_eq!(secure::bytes(33).unwrap().len(), 33);
    assert_eq!(secure::hex(5).unwrap().len(), 10);
}

#[test]
fn choice_from_empty_is_an_error() {
    let empty: [u32; 0] = [];

    assert!(matches!(secure::choice(&empty), Err(SecureError::EmptyChoice)));
    assert_eq!(*secure::choice(&[9]).unwrap(), 9);
}

#[test]
fn choice_multiple_picks_distinct_elements() {
    let items: Vec<char> = ('a'..='z').collect();

    let picked = secure::choice_multiple(&items, 5);
    assert_eq!(picked.len(), 5);
    assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 5);

    let mut all = secure::choice_multiple(&items, 0);
    all.sort_unstable();
    assert_eq!(all, items);

    assert!(secure::choice_multiple::<char>(&[], 2).is_empty());
}

#[test]
fn choice_key_reports_empty_map() {
    let empty: HashMap<String, ()> = HashMap::new();
    assert!(matches!(secure::choice_key(&empty), Err(SecureError::EmptyChoice)));

    let items: HashMap<u8, &str> = [(1, "one"), (2, "two")].into_iter().collect();
    for _ in 0..50 {
        assert!(items.contains_key(secure::choice_key(&items).unwrap()));
    }
}

#[test]
fn perm_is_a_permutation() {
    let mut p = secure::perm(64);
    p.sort_unstable();

    assert_eq!(p, (0..64).collect::<Vec<_>>());
    assert!(secure::perm(0).is_empty());
}

#[test]
fn uuid_has_version_and_variant() {
    let u = secure::uuid();

    assert_eq!(u[6] & 0xf0, 0x40);
    assert_eq!(u[8] & 0xc0, 0x80);
}

#[test]
fn concurrent_draws_are_serialized() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| (0..2000).map(|_| secure::u64()).collect::<Vec<_>>()))
        .collect();

    let mut all: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    let total = all.len();
    all.sort_unstable();
    all.dedup();

    assert_eq!(all.len(), total);
}
