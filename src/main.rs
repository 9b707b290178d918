mod cli;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use tracing::{debug, error, info};

use crate::cli::{Cli, parse_cli};
use crate::error::Result;
use crate::input::{
    check_dimensions, parse_impacts, parse_weights, read_table, validate_input_path,
    validate_output_path,
};
use crate::model::Criteria;
use crate::pipeline::run_topsis;
use crate::pipeline::stage5_report::{write_result_csv, write_summary_json};
use crate::report::build_summary;

fn main() {
    let cli = match parse_cli(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    validate_input_path(&cli.input)?;
    validate_output_path(&cli.output)?;
    let criteria = Criteria {
        weights: parse_weights(&cli.weights)?,
        impacts: parse_impacts(&cli.impacts)?,
    };

    let table = read_table(&cli.input)?;
    check_dimensions(&table, &criteria)?;
    if table.coerced_cells > 0 {
        info!(
            "replaced {} non-numeric cells with their column mean",
            table.coerced_cells
        );
    }

    let outcome = run_topsis(&table, &criteria, cli.row_policy())?;
    if !outcome.degenerate_rows.is_empty() {
        info!(
            "{} rows coincide with both ideal solutions and were scored 0.5",
            outcome.degenerate_rows.len()
        );
    }
    debug!("ranks: {:?}", outcome.ranks);

    write_result_csv(&table, &outcome, &cli.output)?;

    if let Some(path) = &cli.summary {
        let summary = build_summary(
            &table,
            &criteria,
            &outcome,
            &cli.input.display().to_string(),
            &cli.output.display().to_string(),
        );
        write_summary_json(&summary, path)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
