use anyhow::{Context, Result, anyhow};
use tracing::info_span;

use sis_cli::pipeline::{PipelineError, PipelineInputs, run_pipeline};
use sis_map::{AliasRegistry, OperatorOverrides, load_overrides};
use sis_report::{render_halt_json, render_halt_text, render_report_json, render_report_text};

use crate::cli::{Cli, OutputFormatArg};
use crate::preview::{print_aliases, print_preview};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// A structured halt: the input needs operator attention.
pub const EXIT_HALT: i32 = 2;

pub fn list_aliases() -> Result<i32> {
    let registry = AliasRegistry::builtin().context("build alias registry")?;
    print_aliases(&registry);
    Ok(EXIT_SUCCESS)
}

pub fn run_check(cli: &Cli) -> Result<i32> {
    let (Some(incident_path), Some(consequence_path)) = (&cli.incident, &cli.consequence) else {
        return Err(anyhow!("both INCIDENT_CSV and CONSEQUENCE_CSV are required"));
    };
    let _run_guard = info_span!(
        "readiness",
        incident = %incident_path.display(),
        consequence = %consequence_path.display()
    )
    .entered();

    let registry = AliasRegistry::builtin().context("build alias registry")?;
    let overrides = match &cli.overrides {
        Some(path) => load_overrides(path).context("load operator overrides")?,
        None => OperatorOverrides::default(),
    };
    let inputs = PipelineInputs {
        incident_path: incident_path.clone(),
        consequence_path: consequence_path.clone(),
        overrides,
    };

    match run_pipeline(&registry, &inputs) {
        Ok(output) => {
            match cli.format {
                OutputFormatArg::Text => {
                    println!("{}", render_report_text(&output.report));
                    println!();
                    println!("Joined rows ready for analysis: {}", output.data.height());
                }
                OutputFormatArg::Json => {
                    println!(
                        "{}",
                        render_report_json(&output.report).context("serialize report")?
                    );
                }
            }
            if let Some(limit) = cli.preview {
                print_preview(&output.data, limit);
            }
            Ok(EXIT_SUCCESS)
        }
        Err(PipelineError::Halted(halt)) => {
            match cli.format {
                OutputFormatArg::Text => println!("{}", render_halt_text(&halt)),
                OutputFormatArg::Json => {
                    println!("{}", render_halt_json(&halt).context("serialize halt")?);
                }
            }
            Ok(EXIT_HALT)
        }
        Err(err @ PipelineError::Internal(_)) => Err(err.into()),
    }
}
