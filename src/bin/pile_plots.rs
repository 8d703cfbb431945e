//! Runs the pile simulation and shows displacement, velocity and acceleration
//! of every node as three stacked time-series charts.

use anyhow::Context;
use clap::Parser;
use pile_viewer::charts::StaticChartRenderer;
use pile_viewer::cli::{init_logging, CliArgs};
use pile_viewer::{gui, prepare_with};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();
    let config = args.to_config()?;

    let run = prepare_with(&config, !args.skip_run)?;

    match &args.export {
        Some(path) => {
            StaticChartRenderer::render_stacked_png(&run.output, path)
                .with_context(|| format!("exporting {}", path.display()))?;
            if args.open {
                open::that(path).with_context(|| format!("opening {}", path.display()))?;
            }
        }
        None => gui::show_stacked_plots(run.output)
            .map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))?,
    }

    Ok(())
}
