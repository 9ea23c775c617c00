//! The scripted milestone narration.
//!
//! Narrative content is data, not control flow: a static ordered table of
//! (iteration counter, message lines) entries. The realistic engine fires
//! each block exactly once when its counter value is reached. Thresholds and
//! text are load-bearing for output fidelity; do not edit casually.

/// One scripted narration block.
#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    /// Iteration counter value (post-increment) at which the block fires.
    pub at: u64,
    /// Message lines, emitted in order with inter-line pacing.
    pub lines: &'static [&'static str],
}

/// The full narration script, ordered by ascending counter.
pub const MILESTONES: &[Milestone] = &[
    Milestone {
        at: 3_500_001,
        lines: &[
            "This mode checks one ticket against random drawings, simulating real odds.",
            "This is opposed to the other mode that checks 15 years of real drawings per ticket.",
            "AKA this mode is WAY slower.",
        ],
    },
    Milestone {
        at: 5_230_000,
        lines: &["If you want to stop at any time, click the Stop button"],
    },
    Milestone {
        at: 12_000_000,
        lines: &[
            "Probability wise, it will take 292 million tickets on average to win.",
            "that's about 30 times longer than you've been waiting already.",
            "Now realize that each of the the tens of millions of tickets being generated would cost $2...",
        ],
    },
    Milestone {
        at: 51_390_000,
        lines: &[
            "At this point, you've spent over $100 million on lottery tickets.",
            "I admire your dedication, but...",
            "it's still going to be a while.",
        ],
    },
    Milestone {
        at: 102_000_000,
        lines: &[
            "After $200 million spent on powerball tickets at 7/11,",
            "And over 821,000 years of waiting for drawings,",
            "You are just over a third of the way to the average expected time to win.",
        ],
    },
    Milestone {
        at: 150_900_000,
        lines: &[
            "It's been 1.2 million years of drawings so far.",
            "And you've spent $300 million on tickets.",
            "And if you won right now (still leaving you in debt at this point)...",
            "You would be statistically LUCKY to have won this early.",
        ],
    },
    Milestone {
        at: 180_050_000,
        lines: &[
            "Still you haven't won.",
            "This is why you won't win the lottery.",
        ],
    },
    Milestone {
        at: 292_000_000,
        lines: &[
            "It has been an estimated 2.3 million years of drawings.",
            "And you've spent $584 million on tickets.",
            "On average, this is when you'd expect to win the lottery.",
        ],
    },
    Milestone {
        at: 320_000_000,
        lines: &[
            "Unfortunately, expected is not guaranteed.",
            "You still haven't won your 1 in 292 million chance after 300 million chances",
            "And that isn't even (statistically speaking) THAT unlucky",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_strictly_ascending() {
        for pair in MILESTONES.windows(2) {
            assert!(pair[0].at < pair[1].at, "{} before {}", pair[0].at, pair[1].at);
        }
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(MILESTONES.len(), 9);
        assert!(MILESTONES.iter().all(|m| !m.lines.is_empty()));
        assert_eq!(MILESTONES[0].at, 3_500_001);
        assert_eq!(MILESTONES[MILESTONES.len() - 1].at, 320_000_000);
    }

    #[test]
    fn test_no_threshold_collides_with_progress_messages() {
        // Progress status lines fire on 1,000,000 boundaries; a few blocks
        // intentionally share one (the status line precedes the block).
        let on_boundary: Vec<u64> = MILESTONES
            .iter()
            .map(|m| m.at)
            .filter(|at| at % 1_000_000 == 0)
            .collect();
        assert_eq!(
            on_boundary,
            vec![12_000_000, 102_000_000, 292_000_000, 320_000_000]
        );
    }
}
