use randomizer::rng::Csprng;

#[test]
fn test_csprng_deterministic_from_seed() {
    let seed = [0x42u8; 32];

    let mut rng1 = Csprng::from_seed(seed);
    let mut rng2 = Csprng::from_seed(seed);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
    assert_eq!(rng1.next_u64(), rng2.next_u64());
}

#[test]
fn test_csprng_rekey_changes_output() {
    let seed = [0xAAu8; 32];
    let mut rng = Csprng::from_seed(seed);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_not_all_zero() {
    let seed = [0u8; 32];
    let mut rng = Csprng::from_seed(seed);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_csprng_words_do_not_repeat() {
    let mut rng = Csprng::from_seed([0x17u8; 32]);

    let mut words: Vec<u64> = (0..4096).map(|_| rng.next_u64()).collect();
    words.sort_unstable();
    words.dedup();

    assert_eq!(words.len(), 4096);
}

#[test]
fn test_csprng_from_os_differs() {
    let mut a = Csprng::try_from_os().unwrap();
    let mut b = Csprng::from_os();

    assert_ne!(a.next_u64(), b.next_u64());
}
