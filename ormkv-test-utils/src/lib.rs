use std::sync::Once;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static INIT: Once = Once::new();

/// Initialize tracing for test binaries. Safe to call multiple times.
///
/// Filters with `RUST_LOG` (default `info`). Output goes through the test
/// writer so libtest captures it per test and only prints it for failures.
pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        use tracing_subscriber::filter::EnvFilter;
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));
        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic RNG so randomized tests reproduce across runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random payload of `0..=max_len` bytes. Zero bytes are deliberately common
/// so framing bugs around `0x00` surface quickly.
pub fn random_bytes(rng: &mut StdRng, max_len: usize) -> Vec<u8> {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| {
            if rng.random_bool(0.2) {
                0
            } else {
                rng.random::<u8>()
            }
        })
        .collect()
}

/// Random UTF-8 string of at most `max_bytes` bytes with no `0x00` in it.
///
/// Mixes ASCII with multi-byte characters so byte order and char order both
/// get exercised.
pub fn random_string(rng: &mut StdRng, max_bytes: usize) -> String {
    const ALPHABET: &[char] = &[
        'a', 'b', 'z', 'A', 'Z', '0', '~', ' ', 'é', 'ß', 'ж', '中', '🦀',
    ];
    let mut out = String::new();
    let target = rng.random_range(0..=max_bytes);
    while out.len() < target {
        let c = ALPHABET[rng.random_range(0..ALPHABET.len())];
        if out.len() + c.len_utf8() > max_bytes {
            break;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_string_respects_bound_and_has_no_nul() {
        let mut rng = seeded_rng(7);
        for _ in 0..500 {
            let s = random_string(&mut rng, 16);
            assert!(s.len() <= 16);
            assert!(!s.as_bytes().contains(&0));
        }
    }

    #[test]
    fn tracing_init_is_idempotent() {
        init_tracing_for_tests();
        init_tracing_for_tests();
        tracing::info!("subscriber installed once");
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let a = random_bytes(&mut seeded_rng(42), 64);
        let b = random_bytes(&mut seeded_rng(42), 64);
        assert_eq!(a, b);
    }
}
