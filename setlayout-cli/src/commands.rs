use anyhow::Result;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use setlayout::entities::Plan;
use setlayout::io::ext_repr::ExtPlan;
use setlayout::io::{export, export_plan, import};
use setlayout::opt::LayoutOptimizer;
use setlayout::opt::score::score_breakdown;
use thousands::Separable;

use crate::EPOCH;
use crate::config::CliConfig;
use crate::io::cli::Command;
use crate::io::output::PlanOutput;

/// Seeded from the config if a seed is present, from OS entropy otherwise
pub fn create_rng(config: &CliConfig) -> SmallRng {
    match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// Executes a single command on a plan and returns the resulting plan together with its score.
pub fn run(command: &Command, ext_plan: &ExtPlan, config: &CliConfig) -> Result<PlanOutput> {
    config.layout.validate()?;
    let mut instance = import(ext_plan)?;
    let weights = config.layout.weights;
    let scale = instance.canvas.scale;

    info!(
        "[MAIN] plan {:?}: {} sets, {} rules",
        instance.name,
        instance.sets.len(),
        instance.rules.len()
    );

    let stats = match command {
        Command::Layout | Command::Alternate => {
            let mut optimizer = LayoutOptimizer::new(config.layout, create_rng(config));
            let solution = match command {
                Command::Alternate => optimizer.solve_alternate(&instance.sets, &instance.rules, instance.canvas),
                _ => optimizer.solve(&instance.sets, &instance.rules, instance.canvas),
            };
            info!(
                "[MAIN] {} arrangements evaluated",
                optimizer.n_evaluations.separate_with_commas()
            );
            instance.sets = solution.sets;
            Some(solution.stats)
        }
        Command::Score => None,
        Command::Cut { cutter, target } => {
            let mut plan = Plan::from_parts(std::mem::take(&mut instance.sets), vec![])?;
            if plan.cut(cutter, target, scale)?.is_none() {
                warn!("[MAIN] {cutter} and {target} do not overlap, plan left unchanged");
            }
            instance.sets = plan.sets().to_vec();
            None
        }
        Command::Restore { target } => {
            let mut plan = Plan::from_parts(std::mem::take(&mut instance.sets), vec![])?;
            let removed = plan.restore(target)?;
            info!("[MAIN] removed {} cutouts from {target}", removed.len());
            instance.sets = plan.sets().to_vec();
            None
        }
    };

    info!(
        "[MAIN] score: {}",
        score_breakdown(&instance.sets, &instance.rules, scale, &weights)
    );

    Ok(PlanOutput {
        plan: export_plan(&instance),
        solution: export(&instance, &instance.sets, &weights, stats.as_ref(), *EPOCH),
        config: *config,
    })
}
