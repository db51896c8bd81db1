#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use setlayout::entities::{Rule, Set};
    use setlayout::geometry::Rotation;
    use setlayout::opt::score::{score_arrangement_with, score_breakdown};
    use setlayout::opt::score_arrangement;
    use setlayout::util::ScoreWeights;
    use test_case::test_case;

    fn square(id: &str, x: f64, y: f64) -> Set {
        Set::new(id, 10.0, 10.0).at(x, y)
    }

    #[test]
    fn identical_sets_on_top_of_each_other() {
        let sets = [square("a", 0.0, 0.0), square("b", 0.0, 0.0)];
        assert_eq!(score_arrangement(&sets, &[], 1.0), 1000.0);
    }

    #[test]
    fn overlap_is_counted_for_every_pair() {
        let sets = [
            square("a", 0.0, 0.0),
            square("b", 5.0, 0.0),
            square("c", 0.0, 5.0),
        ];
        // a-b: 50, a-c: 50, b-c: 25
        assert_eq!(score_arrangement(&sets, &[], 1.0), 1250.0);
    }

    #[test]
    fn overlap_is_measured_in_pixels() {
        let sets = [square("a", 0.0, 0.0), square("b", 10.0, 10.0)];
        assert_eq!(score_arrangement(&sets, &[], 2.0), 100.0 * 10.0);
    }

    #[test]
    fn score_grows_with_overlap() {
        let mut previous = None;
        for x in (0..=10).rev() {
            let sets = [square("a", 0.0, 0.0), square("b", x as f64, 0.0)];
            let score = score_arrangement(&sets, &[], 1.0);
            if let Some(previous) = previous {
                assert!(score > previous, "score {score} at x={x} should exceed {previous}");
            }
            previous = Some(score);
        }
    }

    #[test]
    fn rotation_is_taken_into_account() {
        let wide = Set::new("wide", 4.0, 2.0).rotated(Rotation::R90);
        let aabb = wide.aabb(3.0);
        assert_eq!((aabb.width(), aabb.height()), (6.0, 12.0));

        // rotated, the 2x4 footprint no longer reaches the set placed at x = 3
        let sets = [wide, Set::new("other", 1.0, 1.0).at(3.0, 0.0)];
        assert_eq!(score_arrangement(&sets, &[], 1.0), 0.0);
    }

    // centers are 30 pixels apart
    #[test_case(30.0, 0.0; "at the threshold")]
    #[test_case(40.0, 0.0; "well within")]
    #[test_case(29.5, 1.0; "just beyond")]
    #[test_case(0.0, 60.0; "zero distance")]
    fn near_rule(distance: f64, expected: f64) {
        let sets = [square("a", 0.0, 0.0), square("b", 30.0, 0.0)];
        let rules = [Rule::near("r", "a", "b", distance)];
        assert!(approx_eq!(f64, score_arrangement(&sets, &rules, 1.0), expected));
    }

    #[test_case(30.0, 0.0; "at the threshold")]
    #[test_case(20.0, 0.0; "well beyond")]
    #[test_case(30.5, 1.5; "just within")]
    #[test_case(40.0, 30.0; "far within")]
    fn separate_rule(distance: f64, expected: f64) {
        let sets = [square("a", 0.0, 0.0), square("b", 30.0, 0.0)];
        let rules = [Rule::separate("r", "a", "b", distance)];
        assert!(approx_eq!(f64, score_arrangement(&sets, &rules, 1.0), expected));
    }

    #[test]
    fn distances_are_scaled() {
        // 1x1 sets are 3 pixels wide, their centers are 30 pixels (10 units) apart
        let sets = [Set::new("a", 1.0, 1.0), Set::new("b", 1.0, 1.0).at(30.0, 0.0)];
        let near = [Rule::near("r", "a", "b", 10.0)];
        let separate = [Rule::separate("r", "a", "b", 10.0)];
        assert_eq!(score_arrangement(&sets, &near, 3.0), 0.0);
        assert_eq!(score_arrangement(&sets, &separate, 3.0), 0.0);
        assert!(score_arrangement(&sets, &near, 2.9) > 0.0);
        assert!(score_arrangement(&sets, &separate, 3.1) > 0.0);
    }

    #[test_case(15.0, 0.0; "touching")]
    #[test_case(10.0, 0.0; "overlapping")]
    #[test_case(20.0, 0.0; "within tolerance")]
    #[test_case(30.0, 75.0; "apart")]
    fn connect_rule(x_b: f64, expected: f64) {
        let sets = [
            Set::new("a", 15.0, 10.0),
            Set::new("b", 10.0, 10.0).at(x_b, 0.0),
        ];
        let rules = [Rule::connect("r", "a", "b")];
        let breakdown = score_breakdown(&sets, &rules, 1.0, &ScoreWeights::default());
        assert!(approx_eq!(f64, breakdown.connect, expected));
    }

    #[test]
    fn connect_gap_is_measured_diagonally() {
        let sets = [square("a", 0.0, 0.0), square("b", 16.0, 18.0)];
        let rules = [Rule::connect("r", "a", "b")];
        // gap of (6, 8)
        assert!(approx_eq!(f64, score_arrangement(&sets, &rules, 1.0), 50.0));
    }

    #[test]
    fn fixed_rules_do_not_contribute() {
        let sets = [square("a", 0.0, 0.0), square("b", 50.0, 0.0)];
        let rules = [Rule::fixed("f", "a")];
        assert_eq!(score_arrangement(&sets, &rules, 1.0), 0.0);
    }

    #[test]
    fn dangling_rules_are_skipped() {
        let sets = [square("a", 0.0, 0.0), square("b", 50.0, 0.0)];
        let rules = [
            Rule::near("r1", "a", "ghost", 1.0),
            Rule::separate("r2", "ghost", "b", 100.0),
            Rule::connect("r3", "ghost", "phantom"),
        ];
        assert_eq!(score_arrangement(&sets, &rules, 1.0), 0.0);
    }

    #[test]
    fn custom_weights() {
        let sets = [square("a", 0.0, 0.0), square("b", 5.0, 30.0)];
        let rules = [Rule::near("r", "a", "b", 10.0)];
        let weights = ScoreWeights {
            overlap: 1.0,
            near: 1.0,
            ..ScoreWeights::default()
        };
        let default_score = score_arrangement(&sets, &rules, 1.0);
        let custom_score = score_arrangement_with(&sets, &rules, 1.0, &weights);
        assert!(approx_eq!(f64, default_score, 2.0 * custom_score, epsilon = 1e-9));
    }

    #[test]
    fn breakdown_adds_up() {
        let sets = [
            square("a", 0.0, 0.0),
            square("b", 5.0, 5.0),
            square("c", 100.0, 0.0),
        ];
        let rules = [
            Rule::near("r1", "a", "c", 20.0),
            Rule::separate("r2", "a", "b", 50.0),
            Rule::connect("r3", "b", "c"),
        ];
        let weights = ScoreWeights::default();
        let breakdown = score_breakdown(&sets, &rules, 1.0, &weights);
        assert!(breakdown.overlap > 0.0);
        assert!(breakdown.near > 0.0);
        assert!(breakdown.separate > 0.0);
        assert!(breakdown.connect > 0.0);
        assert_eq!(breakdown.total(), score_arrangement(&sets, &rules, 1.0));
    }
}
