//! Random ticket generation.
//!
//! Whites are sampled uniformly without replacement from 1-69, the powerball
//! independently from 1-26. All entry points are generic over [`rand::Rng`]
//! so tests can drive them with a seeded `ChaCha8Rng`.

use rand::Rng;

use crate::models::{Ticket, POWERBALL_MAX, POWERBALL_MIN, WHITES_PER_TICKET, WHITE_MAX, WHITE_MIN};

/// Generates one uniformly random ticket.
///
/// Always terminates: the whites are drawn without replacement from a finite
/// pool, never by rejection.
pub fn generate_ticket<R: Rng + ?Sized>(rng: &mut R) -> Ticket {
    let indices = rand::seq::index::sample(rng, WHITE_MAX as usize, WHITES_PER_TICKET);
    let mut whites = [0u8; WHITES_PER_TICKET];
    for (slot, index) in whites.iter_mut().zip(indices.iter()) {
        *slot = index as u8 + WHITE_MIN;
    }
    whites.sort_unstable();

    let powerball = rng.gen_range(POWERBALL_MIN..=POWERBALL_MAX);
    Ticket { whites, powerball }
}

/// Convenience wrapper over the thread-local RNG.
pub fn random_ticket() -> Ticket {
    generate_ticket(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generated_ticket_is_well_formed() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1_000 {
            let ticket = generate_ticket(&mut rng);
            assert!(ticket.whites.iter().all(|w| (1..=69).contains(w)));
            assert!(ticket.whites.windows(2).all(|w| w[0] < w[1]), "sorted and distinct");
            assert!((1..=26).contains(&ticket.powerball));
        }
    }

    #[test]
    fn test_same_seed_same_ticket() {
        let a = generate_ticket(&mut ChaCha8Rng::seed_from_u64(7));
        let b = generate_ticket(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_domain_is_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut white_seen = [false; 70];
        let mut pb_seen = [false; 27];
        for _ in 0..10_000 {
            let ticket = generate_ticket(&mut rng);
            for &w in &ticket.whites {
                white_seen[w as usize] = true;
            }
            pb_seen[ticket.powerball as usize] = true;
        }
        assert!(white_seen[1..=69].iter().all(|&s| s), "every white value drawn");
        assert!(pb_seen[1..=26].iter().all(|&s| s), "every powerball value drawn");
    }

    proptest! {
        #[test]
        fn prop_ticket_invariants_hold_for_any_seed(seed: u64) {
            let ticket = generate_ticket(&mut ChaCha8Rng::seed_from_u64(seed));
            prop_assert!(ticket.whites.iter().all(|w| (1..=69).contains(w)));
            prop_assert!(ticket.whites.windows(2).all(|w| w[0] < w[1]));
            prop_assert!((1..=26).contains(&ticket.powerball));
        }
    }
}
