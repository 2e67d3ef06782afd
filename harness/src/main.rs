use anyhow::Context;
use log::debug;
use slipstream_core::prelude::{default_catalog, default_registry};
use slipstream_runner::prelude::{ArgumentParser, RunConfiguration, WorkloadCatalog};
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Environment variable name to set a custom workload definition file path
const WORKLOADS_PATH_ENV: &str = "SLIPSTREAM_WORKLOADS_PATH";
/// Default path for the workload definition file
const DEFAULT_WORKLOADS_PATH: &str = "workloads.yaml";

#[derive(Tabled)]
struct RunRow {
    scenario: String,
    tab: String,
    duration_s: u64,
    behaviour: &'static str,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let registry = default_registry().context("Failed to build the scenario registry")?;
    let measure_sets = default_catalog();

    let workloads_path = std::env::var(WORKLOADS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORKLOADS_PATH));
    debug!("Loading workloads from {}", workloads_path.display());
    let workloads =
        WorkloadCatalog::load(&workloads_path).context("Failed to load workload definitions")?;

    let parser = ArgumentParser::new(&registry, &workloads, &measure_sets);
    let config = parser
        .parse(std::env::args().skip(1))
        .context("Failed to interpret the harness command line")?;

    print_run_plan(&config);

    Ok(())
}

fn print_run_plan(config: &RunConfiguration) {
    if config.display_name.is_empty() {
        println!("\nRun plan");
    } else {
        println!("\nRun plan for {}", config.display_name);
    }

    if config.run_list.is_empty() {
        println!("No scenarios selected");
    } else {
        let rows = config
            .run_list
            .iter()
            .map(|scenario| RunRow {
                scenario: scenario.scenario_name.clone(),
                tab: scenario.tab.clone(),
                duration_s: scenario.duration_s,
                behaviour: scenario.behaviour.id(),
            })
            .collect::<Vec<_>>();

        let mut table = Table::new(rows);
        table.with(Style::modern());
        println!("{table}");
    }

    let browsers = config
        .browsers
        .iter()
        .map(|browser| browser.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "Browsers: [{}], iterations: {}, attempts per iteration: {}",
        browsers, config.iterations, config.max_attempts
    );

    match &config.trace_output {
        Some(trace_output) => {
            let selected = config
                .measure_sets
                .iter()
                .map(|set| set.name())
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "Trace capture -> {} with measure sets [{}]",
                trace_output.display(),
                selected
            );
        }
        None => println!("Trace capture disabled"),
    }

    if let Some(profile_dir) = &config.profile_dir {
        println!("Browser profile: {}", profile_dir.display());
    }
    if config.warmup {
        println!("Warmup pass enabled");
    }
    if config.no_timeout {
        println!("Execution timeout disabled");
    }
    if !config.post_processing {
        println!("Post-processing disabled");
    }
}
