// In: src/analysis/tests/test_comparator.rs

#[cfg(test)]
mod tests {
    use crate::analysis::comparator::{classify_role, compare, Winner};
    use crate::analysis::tests::common::TestPokemonBuilder;
    use crate::errors::AnalysisError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Role, Stat};

    #[rstest]
    // offense 96.5 > defense 81.5 > hp 78
    #[case("charizard-profile", 78, 84, 78, 109, 85, Role::Offensive)]
    // defense 140 beats offense 52.5 and hp 70
    #[case("wall-profile", 70, 45, 160, 60, 120, Role::Defensive)]
    // hp dominates both aggregates
    #[case("sponge-profile", 250, 5, 5, 35, 105, Role::Tank)]
    // all three aggregates equal
    #[case("flat-profile", 80, 80, 80, 80, 80, Role::Balanced)]
    // offense ties hp at 100: no strict winner, falls through to Balanced
    #[case("offense-ties-hp", 100, 100, 50, 100, 50, Role::Balanced)]
    // defense ties hp at 90 with offense below: still Balanced
    #[case("defense-ties-hp", 90, 40, 90, 40, 90, Role::Balanced)]
    fn role_classification(
        #[case] name: &str,
        #[case] hp: u32,
        #[case] atk: u32,
        #[case] def: u32,
        #[case] spa: u32,
        #[case] spd: u32,
        #[case] expected: Role,
    ) {
        let pokemon = TestPokemonBuilder::new(1, name)
            .with_stats(hp, atk, def, spa, spd, 100)
            .build();
        let stats = pokemon.stats.unwrap().complete().unwrap();
        assert_eq!(classify_role(&stats), expected, "case: {}", name);
    }

    #[test]
    fn per_stat_winners_and_overall() {
        let pikachu = TestPokemonBuilder::new(25, "pikachu")
            .with_types(&["electric"])
            .with_stats(35, 55, 40, 50, 50, 90)
            .build();
        let charizard = TestPokemonBuilder::new(6, "charizard")
            .with_types(&["fire", "flying"])
            .with_stats(78, 84, 78, 109, 85, 100)
            .build();

        let report = compare(&pikachu, &charizard).unwrap();

        assert_eq!(report.first_name, "pikachu");
        assert_eq!(report.stats.len(), 6);
        // Charizard is strictly ahead on every field
        for line in &report.stats {
            assert_eq!(line.winner, Winner::Pokemon("charizard".to_string()));
        }
        assert_eq!(report.total.first, 320);
        assert_eq!(report.total.second, 534);
        assert_eq!(report.overall_winner, Winner::Pokemon("charizard".to_string()));
        assert_eq!(report.overall_winner, report.total.winner);
    }

    #[test]
    fn equal_values_declare_a_tie() {
        let first = TestPokemonBuilder::new(1, "plusle")
            .with_stats(60, 50, 40, 85, 75, 95)
            .build();
        let second = TestPokemonBuilder::new(2, "minun")
            .with_stats(60, 40, 50, 75, 85, 95)
            .build();

        let report = compare(&first, &second).unwrap();

        // hp and speed are equal field-for-field
        let hp_line = report.stats.iter().find(|l| l.stat == Stat::Hp).unwrap();
        assert_eq!(hp_line.winner, Winner::Tie);
        let speed_line = report.stats.iter().find(|l| l.stat == Stat::Speed).unwrap();
        assert_eq!(speed_line.winner, Winner::Tie);

        // attack goes to plusle, defense to minun
        let attack_line = report.stats.iter().find(|l| l.stat == Stat::Attack).unwrap();
        assert_eq!(attack_line.winner, Winner::Pokemon("plusle".to_string()));
        let defense_line = report.stats.iter().find(|l| l.stat == Stat::Defense).unwrap();
        assert_eq!(defense_line.winner, Winner::Pokemon("minun".to_string()));

        // identical totals tie the total and the overall result
        assert_eq!(report.total.winner, Winner::Tie);
        assert_eq!(report.overall_winner, Winner::Tie);
    }

    #[test]
    fn missing_stats_are_rejected() {
        let complete = TestPokemonBuilder::new(1, "rattata")
            .with_stats(30, 56, 35, 25, 35, 72)
            .build();
        let statless = TestPokemonBuilder::new(2, "missingno").build();

        let err = compare(&complete, &statless).unwrap_err();
        assert_eq!(err, AnalysisError::MissingStats("missingno".to_string()));

        let err = compare(&statless, &complete).unwrap_err();
        assert_eq!(err, AnalysisError::MissingStats("missingno".to_string()));
    }

    #[test]
    fn winner_display_matches_request_wire_format() {
        assert_eq!(Winner::Tie.to_string(), "tie");
        assert_eq!(
            Winner::Pokemon("pikachu".to_string()).to_string(),
            "pikachu"
        );
    }
}
