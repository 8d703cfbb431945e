//! Runs the pile simulation and animates the displacement of the pile over time.

use anyhow::Context;
use clap::Parser;
use pile_viewer::charts::{PileAnimation, StaticChartRenderer};
use pile_viewer::cli::{init_logging, CliArgs};
use pile_viewer::{gui, prepare_with};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();
    let config = args.to_config()?;

    let run = prepare_with(&config, !args.skip_run)?;
    let animation = Arc::new(PileAnimation::new(
        run.output.into_displacement(),
        run.pile_length,
    ));
    log::info!(
        "Animating {} frames, horizontal bound ±{:.4} m",
        animation.frame_count(),
        animation.axis_bound()
    );

    match &args.export {
        Some(path) => {
            StaticChartRenderer::render_animation_gif(&animation, path)
                .with_context(|| format!("exporting {}", path.display()))?;
            if args.open {
                open::that(path).with_context(|| format!("opening {}", path.display()))?;
            }
        }
        None => gui::show_animation(animation)
            .map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))?,
    }

    Ok(())
}
