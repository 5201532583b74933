use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::thread;

use randomizer::Charset;
use randomizer::charset;
use randomizer::rng::{self, fast};

/// Chi-square statistic of `counts` against a uniform expectation.
fn chi_square(counts: &[u64], samples: u64) -> f64 {
    let expected = samples as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn u64_n_is_in_range_and_uniform() {
    // Critical values at p = 0.001 for n - 1 degrees of freedom.
    for (n, critical) in [(2u64, 10.83), (7, 22.46), (10, 27.88), (37, 67.99)] {
        let samples = 200_000u64;
        let mut counts = vec![0u64; n as usize];

        for _ in 0..samples {
            let v = fast::u64_n(n);
            assert!(v < n);
            counts[v as usize] += 1;
        }

        let stat = chi_square(&counts, samples);
        assert!(stat < critical, "n = {n}: chi-square {stat} >= {critical}");
    }
}

#[test]
fn u64_n_of_one_is_zero() {
    for _ in 0..100 {
        assert_eq!(fast::u64_n(1), 0);
    }
}

#[test]
#[should_panic(expected = "must be positive")]
fn u64_n_of_zero_panics() {
    fast::u64_n(0);
}

#[test]
fn int_covers_inclusive_bounds() {
    let mut seen = [false; 7];
    for _ in 0..10_000 {
        let v = fast::int(-3, 3);
        assert!((-3..=3).contains(&v));
        seen[(v + 3) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
    assert_eq!(fast::int(5, 5), 5);
}

#[test]
#[should_panic(expected = "invalid number range")]
fn int_with_inverted_range_panics() {
    fast::int(3, -3);
}

#[test]
fn number_dispatches_per_kind() {
    for _ in 0..1000 {
        let a: u8 = fast::number(250, 255);
        assert!(a >= 250);

        let b: i16 = fast::number(-300, -200);
        assert!((-300..=-200).contains(&b));

        let c: f64 = fast::number(10.0, 20.0);
        assert!((10.0..=20.0).contains(&c));

        let d: usize = fast::number_n(3);
        assert!(d <= 3);
    }
}

#[test]
fn float64_is_unit_interval() {
    for _ in 0..10_000 {
        let f = fast::float64();
        assert!((0.0..1.0).contains(&f));
    }
}

#[test]
fn bytes_have_requested_length() {
    for len in [0usize, 1, 7, 8, 9, 15, 16, 17, 64, 1000] {
        assert_eq!(fast::bytes(len).len(), len);
    }
    assert!(fast::bytes(0).is_empty());
}

#[test]
fn reader_fills_whole_buffer() {
    let mut buf = [0u8; 1027];
    let n = rng::fast_reader().read(&mut buf).unwrap();

    assert_eq!(n, buf.len());
    assert!(buf.iter().any(|&b| b != 0));
}

#[test]
fn hex_doubles_length() {
    let h = fast::hex(12);

    assert_eq!(h.len(), 24);
    assert!(h.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    assert_eq!(fast::hex(0), "");
}

#[test]
fn string_uses_only_charset() {
    let set = Charset::from_static(charset::DIGITS);
    let s = fast::string(64, &set);

    assert_eq!(s.len(), 64);
    assert!(s.bytes().all(|b| b.is_ascii_digit()));
}

#[test]
#[should_panic(expected = "length must be positive")]
fn string_of_zero_length_panics() {
    fast::string(0, &Charset::from_static(charset::ALPHABET));
}

#[test]
fn uuid_has_version_and_variant() {
    for _ in 0..1000 {
        let u = fast::uuid();
        assert_eq!(u[6] >> 4, 0x4);
        assert_eq!(u[8] >> 6, 0b10);
    }
}

#[test]
fn uuid_text_is_version_four() {
    for _ in 0..100 {
        let text = randomizer::uuid::to_string(&fast::uuid());
        let parsed = uuid::Uuid::parse_str(&text).unwrap();

        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
    }

    assert_eq!(
        randomizer::uuid::to_string(&[0xab; 16]),
        "abababab-abab-abab-abab-abababababab"
    );
}

#[test]
fn choice_multiple_returns_distinct_elements() {
    let items: Vec<u32> = (0..10).collect();

    for _ in 0..100 {
        let picked = fast::choice_multiple(&items, 4);
        assert_eq!(picked.len(), 4);
        assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 4);
        assert!(picked.iter().all(|v| items.contains(v)));
    }
}

#[test]
fn choice_multiple_out_of_range_counts_shuffle_everything() {
    let items: Vec<u32> = (0..10).collect();

    for count in [0, 10, 25] {
        let mut all = fast::choice_multiple(&items, count);
        all.sort_unstable();
        assert_eq!(all, items);
    }

    assert!(fast::choice_multiple::<u32>(&[], 3).is_empty());
}

#[test]
fn choice_key_covers_every_key() {
    let items: HashMap<&str, u32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    let mut seen = HashSet::new();

    for _ in 0..300 {
        let key = fast::choice_key(&items);
        assert!(items.contains_key(key));
        seen.insert(*key);
    }

    assert_eq!(seen.len(), 3);
}

#[test]
#[should_panic(expected = "empty map")]
fn choice_key_from_empty_panics() {
    let empty: HashMap<u8, u8> = HashMap::new();
    fast::choice_key(&empty);
}

#[test]
fn choice_and_perm() {
    let items = ["a", "b", "c"];
    for _ in 0..100 {
        assert!(items.contains(fast::choice(&items)));
    }

    let mut p = fast::perm(20);
    p.sort_unstable();
    assert_eq!(p, (0..20).collect::<Vec<_>>());
}

#[test]
#[should_panic(expected = "empty slice")]
fn choice_from_empty_panics() {
    let empty: [u8; 0] = [];
    fast::choice(&empty);
}

#[test]
fn concurrent_draws_never_repeat() {
    const THREADS: usize = 8;
    const DRAWS: usize = 20_000;

    let handles: Vec<_> = (0..THREADS)
        .map(|_| thread::spawn(|| (0..DRAWS).map(|_| fast::u64()).collect::<Vec<_>>()))
        .collect();

    let seen: HashSet<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    // The output mix is a bijection, so distinct counter values give
    // distinct outputs.
    assert_eq!(seen.len(), THREADS * DRAWS);
}
