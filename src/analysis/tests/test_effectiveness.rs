// In: src/analysis/tests/test_effectiveness.rs

#[cfg(test)]
mod tests {
    use crate::analysis::effectiveness::TypeChart;
    use crate::analysis::tests::common::{gen1_chart, type_data};
    use rstest::rstest;

    fn spec_fire_chart() -> TypeChart {
        TypeChart::from_types(&[
            type_data("fire", &["grass", "bug"], &["fire", "water"], &[]),
            type_data("grass", &[], &[], &[]),
            type_data("water", &[], &[], &[]),
            type_data("rock", &[], &[], &[]),
            type_data("bug", &[], &[], &[]),
        ])
    }

    #[rstest]
    #[case("grass", 2.0)]
    #[case("bug", 2.0)]
    #[case("water", 0.5)]
    #[case("fire", 0.5)]
    #[case("rock", 1.0)] // unmentioned in any relation list
    fn single_type_effectiveness(#[case] defending: &str, #[case] expected: f64) {
        let chart = spec_fire_chart();
        assert_eq!(chart.effectiveness("fire", &[defending]), expected);
    }

    #[test]
    fn dual_type_effectiveness_is_the_pairwise_product() {
        let chart = gen1_chart();

        // 2.0 * 2.0
        assert_eq!(chart.effectiveness("electric", &["water", "flying"]), 4.0);
        // 0.5 * 0.5
        assert_eq!(chart.effectiveness("grass", &["fire", "flying"]), 0.25);
        // 2.0 * 0.5
        assert_eq!(chart.effectiveness("ice", &["grass", "fire"]), 1.0);
        // an immunity zeroes the whole combination
        assert_eq!(chart.effectiveness("electric", &["ground", "water"]), 0.0);
    }

    #[test]
    fn every_pair_lands_on_a_known_multiplier() {
        let chart = gen1_chart();
        let allowed = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];

        for attacking in chart.type_names() {
            for first in chart.type_names() {
                for second in chart.type_names() {
                    let composed = chart.effectiveness(attacking, &[first, second]);
                    assert!(
                        allowed.contains(&composed),
                        "{} vs {}/{} gave {}",
                        attacking,
                        first,
                        second,
                        composed
                    );
                    assert_eq!(
                        composed,
                        chart.multiplier(attacking, first) * chart.multiplier(attacking, second)
                    );
                }
            }
        }
    }

    #[test]
    fn dragon_is_neutral_against_everything_it_does_not_mention() {
        let chart = gen1_chart();
        for defending in chart.type_names() {
            let expected = if defending == "dragon" { 2.0 } else { 1.0 };
            assert_eq!(chart.effectiveness("dragon", &[defending]), expected);
        }
    }

    #[test]
    fn no_defending_types_means_neutral() {
        let chart = gen1_chart();
        let no_types: [&str; 0] = [];
        assert_eq!(chart.effectiveness("fire", &no_types), 1.0);
    }

    #[test]
    fn unknown_attacker_and_defender_are_neutral() {
        let chart = gen1_chart();
        assert_eq!(chart.effectiveness("fairy", &["water"]), 1.0);
        assert_eq!(chart.effectiveness("fire", &["fairy"]), 1.0);
    }
}
