use clap::Parser;
use image::RgbaImage;
use retrograde::prelude::*;
use std::path::PathBuf;
use viz::composite::composite;
use viz::encode::encoder_for;
use viz::raster::{draw_global_view, draw_observer_view, draw_trail_view};

/// Records one full outer-body period of the retrograde animation to a
/// GIF or a PNG contact sheet
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Scenario YAML; baked-in Mercury/Earth defaults when omitted
    #[arg(long, short)]
    pub scenario: Option<PathBuf>,

    /// Output format: gif or sheet
    #[arg(long, short, default_value = "gif")]
    pub format: String,

    /// Playback speed multiplier
    #[arg(long, default_value = "1.0")]
    pub speed: f32,

    /// Reproduce the original wall-clock capture deadline instead of
    /// stopping on accumulated simulated time
    #[arg(long)]
    pub legacy_timer: bool,

    /// Destination file stem; the extension comes from the format
    #[arg(long, short, default_value = "mercury-retrograde")]
    pub out: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => Scenario::default(),
    };

    let format = match args.format.as_str() {
        "gif" => OutputFormat::Gif,
        "sheet" => OutputFormat::Sheet,
        other => return Err(format!("unknown format: {}", other).into()),
    };

    let mut scene: Scene<RgbaImage> = Scene::new(scenario.clone())?;
    scene.set_speed(args.speed)?;

    let stop = if args.legacy_timer {
        scene.legacy_stop_rule()
    } else {
        StopRule::SimulatedPeriod
    };
    scene.start_recording(format, stop);

    let encoder = encoder_for(format, scenario.frame_rate);

    loop {
        let out = scene.step();
        if out.capture {
            let global = draw_global_view(&scenario, &out);
            let observer = draw_observer_view(&scenario, &out);
            let trail = draw_trail_view(scene.trail());
            scene
                .session_mut()
                .push_frame(composite([&global, &observer, &trail]));
        }
        if out.finalize {
            let frames = scene.session().frame_count();
            let file = scene.finish(encoder.as_ref())?;
            let path = args.out.with_extension(file.extension);
            std::fs::write(&path, &file.data)?;
            println!("encoded {} frames to {}", frames, path.display());
            break;
        }
    }

    Ok(())
}
