use proptest::prelude::*;
use fathom_readability::{FogBand, fog, flesch, kincaid, readability_report, syllables_per_word};
use fathom_types::Stats;

fn stats_strategy() -> impl Strategy<Value = Stats> {
    (1usize..200, 1usize..20, 0usize..=100).prop_flat_map(|(words, sentences, complex_pct)| {
        prop::collection::vec(1usize..6, words).prop_map(move |syllables| {
            let complex = words * complex_pct / 100;
            let mut stats = Stats::new();
            for (i, s) in syllables.iter().enumerate() {
                stats.record_word(&format!("w{i}"), *s, i < complex);
            }
            stats.add_sentences(sentences);
            stats
        })
    })
}

proptest! {
    #[test]
    fn scores_are_finite_for_non_zero_divisors(stats in stats_strategy()) {
        prop_assert!(fog(&stats).is_finite());
        prop_assert!(flesch(&stats).is_finite());
        prop_assert!(kincaid(&stats).is_finite());
    }

    #[test]
    fn fog_is_non_negative(stats in stats_strategy()) {
        prop_assert!(fog(&stats) >= 0.0);
    }

    #[test]
    fn flesch_and_kincaid_move_in_opposite_directions(stats in stats_strategy()) {
        // Both are affine in the same two ratios with opposite signs.
        let spw = syllables_per_word(&stats);
        prop_assert!(spw >= 1.0);
        prop_assert!(flesch(&stats) <= 206.835 - 84.6);
        prop_assert!(kincaid(&stats) >= 11.8 - 15.59);
    }

    #[test]
    fn report_is_deterministic(stats in stats_strategy()) {
        prop_assert_eq!(readability_report(&stats), readability_report(&stats));
    }

    #[test]
    fn fog_band_is_monotonic(a in 0.0f64..40.0, b in 0.0f64..40.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |band: FogBand| band as u8;
        prop_assert!(rank(FogBand::for_score(lo)) <= rank(FogBand::for_score(hi)));
    }
}
