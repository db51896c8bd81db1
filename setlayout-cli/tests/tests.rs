#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use setlayout::io::ext_repr::{ExtPlan, ExtSet};
    use setlayout::io::import;
    use setlayout_cli::commands::run;
    use setlayout_cli::config::CliConfig;
    use setlayout_cli::io;
    use setlayout_cli::io::cli::Command;
    use test_case::test_case;

    const APARTMENT: &str = "../assets/apartment.json";

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    fn seeded_config(seed: u64) -> CliConfig {
        CliConfig {
            prng_seed: Some(seed),
            ..CliConfig::default()
        }
    }

    fn find<'a>(sets: &'a [ExtSet], id: &str) -> &'a ExtSet {
        sets.iter().find(|s| s.id == id).unwrap()
    }

    #[test_case(Command::Layout; "layout")]
    #[test_case(Command::Alternate; "alternate")]
    fn layout_commands(command: Command) {
        init_logger();
        let ext_plan = io::read_plan(Path::new(APARTMENT)).unwrap();
        let output = run(&command, &ext_plan, &seeded_config(0)).unwrap();

        let sets = &output.solution.sets;
        assert_eq!(sets.len(), ext_plan.sets.len());
        // fixed by rule, locked and off-plan sets stay where they are
        for id in ["living", "wall-north", "spare-chair"] {
            let (before, after) = (find(&ext_plan.sets, id), find(sets, id));
            assert_eq!((before.x, before.y), (after.x, after.y), "{id} moved");
        }
        assert_eq!(sets.last().unwrap().id, "spare-chair");

        let initial_score = output.solution.initial_score.unwrap();
        assert!(output.solution.score.total.is_finite());
        assert!(initial_score >= 0.0);
        assert_eq!(output.plan.sets, output.solution.sets);
    }

    #[test]
    fn same_seed_same_layout() {
        let ext_plan = io::read_plan(Path::new(APARTMENT)).unwrap();
        let first = run(&Command::Layout, &ext_plan, &seeded_config(9)).unwrap();
        let second = run(&Command::Layout, &ext_plan, &seeded_config(9)).unwrap();
        assert_eq!(first.plan.sets, second.plan.sets);
        assert_eq!(first.solution.score, second.solution.score);
    }

    #[test]
    fn score_leaves_the_plan_unchanged() {
        let ext_plan = io::read_plan(Path::new(APARTMENT)).unwrap();
        let output = run(&Command::Score, &ext_plan, &CliConfig::default()).unwrap();
        assert_eq!(output.plan.sets, ext_plan.sets);
        assert_eq!(output.solution.initial_score, None);
        assert!(output.solution.score.overlap > 0.0);
    }

    #[test]
    fn cut_and_restore() {
        init_logger();
        let ext_plan = io::read_plan(Path::new(APARTMENT)).unwrap();
        let cut = Command::Cut {
            cutter: "door".into(),
            target: "living".into(),
        };
        let output = run(&cut, &ext_plan, &CliConfig::default()).unwrap();

        let living = find(&output.plan.sets, "living");
        assert_eq!(living.cutouts.len(), 1);
        let outline = living.outline.as_ref().unwrap();
        assert_eq!(outline.len(), 8);
        assert_eq!(find(&output.plan.sets, "door"), find(&ext_plan.sets, "door"));

        let instance = import(&output.plan).unwrap();
        let area = instance.set("living").unwrap().outline().area();
        assert!(approx_eq!(f64, area, 120.0 * 80.0 - 2.5 * 10.0));

        let restore = Command::Restore {
            target: "living".into(),
        };
        let restored = run(&restore, &output.plan, &CliConfig::default()).unwrap();
        let living = find(&restored.plan.sets, "living");
        assert!(living.cutouts.is_empty());
        assert_eq!(living.outline, None);
    }

    #[test_case(Command::Cut { cutter: "ghost".into(), target: "living".into() }; "unknown cutter")]
    #[test_case(Command::Cut { cutter: "living".into(), target: "living".into() }; "self cut")]
    #[test_case(Command::Restore { target: "ghost".into() }; "unknown target")]
    fn invalid_commands_fail(command: Command) {
        let ext_plan = io::read_plan(Path::new(APARTMENT)).unwrap();
        assert!(run(&command, &ext_plan, &CliConfig::default()).is_err());
    }

    #[test]
    fn solution_files_can_be_read_back_as_plans() {
        let ext_plan = io::read_plan(Path::new(APARTMENT)).unwrap();
        let output = run(&Command::Layout, &ext_plan, &seeded_config(1)).unwrap();
        let json = serde_json::to_string(&output).unwrap();
        let plan: ExtPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan.sets, output.plan.sets);
        assert!(import(&plan).is_ok());
    }

    #[test_case(r#"{ "layout": { "max_magnitude": -10.0, "min_magnitude": -20.0 } }"#; "negative magnitudes")]
    #[test_case(r#"{ "layout": { "min_magnitude": 500.0 } }"#; "min above max")]
    #[test_case(r#"{ "layout": { "padding": -5.0 } }"#; "negative padding")]
    #[test_case(r#"{ "layout": { "weights": { "overlap": -1.0 } } }"#; "negative weight")]
    fn invalid_config_files_are_rejected(json: &str) {
        let file_name = format!("setlayout_config_{}_{}.json", std::process::id(), json.len());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, json).unwrap();
        let result = io::read_config(Some(&path));
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());

        let config: CliConfig = serde_json::from_str(json).unwrap();
        let ext_plan = io::read_plan(Path::new(APARTMENT)).unwrap();
        assert!(run(&Command::Layout, &ext_plan, &config).is_err());
    }

    #[test]
    fn partial_config_files() {
        let config: CliConfig = serde_json::from_str(r#"{ "prng_seed": 3 }"#).unwrap();
        assert_eq!(config.prng_seed, Some(3));
        assert_eq!(config.layout, CliConfig::default().layout);
        assert!(io::read_config(None).unwrap().prng_seed.is_none());

        let config: CliConfig = serde_json::from_str(r#"{ "layout": { "n_iterations": 500 } }"#).unwrap();
        assert_eq!(config.layout.n_iterations, 500);
        assert_eq!(config.layout.weights, CliConfig::default().layout.weights);
    }

    #[test_case("setlayout::opt::optimizer", "opt::optimizer"; "library module")]
    #[test_case("setlayout_cli::commands", "setlayout_cli::commands"; "cli module")]
    #[test_case("setlayout", "setlayout"; "library root")]
    fn log_targets_are_shortened(target: &str, expected: &str) {
        assert_eq!(io::short_target(target), expected);
    }
}
