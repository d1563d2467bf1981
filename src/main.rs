use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use clap::{Parser, ValueEnum};
use fractal_navigator::{
    FilePresenterPort, FrameData, FrameSink, Navigator, NavigatorConfig, PpmFilePresenter, Preset,
    Region, StepPolicy,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    Original,
    Minibrot,
    Bulb,
    Tentacle,
    JuliaIsland,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Original => Preset::Original,
            PresetArg::Minibrot => Preset::Minibrot,
            PresetArg::Bulb => Preset::Bulb,
            PresetArg::Tentacle => Preset::Tentacle,
            PresetArg::JuliaIsland => Preset::JuliaIsland,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "fractal_navigator",
    version,
    about = "Fly from the classic Mandelbrot view to a target region and save the final frame"
)]
struct Cli {
    #[arg(long, value_enum, conflicts_with = "bounds")]
    preset: Option<PresetArg>,

    /// Target region as x_min,x_max,y_min,y_max.
    #[arg(
        long,
        value_name = "X_MIN,X_MAX,Y_MIN,Y_MAX",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    bounds: Option<Vec<f64>>,

    #[arg(long, default_value_t = 60)]
    steps: u32,

    #[arg(long, default_value_t = 1000)]
    max_iter: u32,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Derive step count and delay from the zoom depth.
    #[arg(long, default_value_t = false)]
    adaptive: bool,

    /// Run the animation without sleeping between frames.
    #[arg(long, default_value_t = false)]
    no_delay: bool,

    #[arg(long, value_name = "PPM", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl Cli {
    fn target_region(&self) -> Result<Region, Box<dyn std::error::Error>> {
        if let Some(bounds) = &self.bounds {
            let &[x_min, x_max, y_min, y_max] = bounds.as_slice() else {
                return Err(format!("--bounds takes 4 values, got {}", bounds.len()).into());
            };

            return Ok(Region::new(x_min, x_max, y_min, y_max)?);
        }

        let preset = self.preset.map_or(Preset::Minibrot, Preset::from);

        Ok(preset.region())
    }

    fn navigator_config(&self) -> Result<NavigatorConfig, Box<dyn std::error::Error>> {
        if self.width == 0 || self.height == 0 {
            return Err("--width and --height must be >= 1".into());
        }

        Ok(NavigatorConfig {
            initial_max_iterations: self.max_iter,
            step_policy: if self.adaptive {
                StepPolicy::Adaptive
            } else {
                StepPolicy::Fixed
            },
            full_width: self.width,
            full_height: self.height,
            ..NavigatorConfig::default()
        })
    }
}

/// Keeps the newest full-resolution frame.
#[derive(Default)]
struct LastFrameSink {
    last_final: Mutex<Option<FrameData>>,
}

impl LastFrameSink {
    fn take(&self) -> Option<FrameData> {
        self.last_final
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl FrameSink for LastFrameSink {
    fn present(&self, frame: FrameData) {
        debug!(
            generation = frame.generation,
            is_final = frame.is_final,
            region = %frame.region,
            render_ms = frame.render_duration.as_secs_f64() * 1000.0,
            "frame"
        );

        if frame.is_final {
            *self
                .last_final
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(frame);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let target = cli.target_region()?;
    let config = cli.navigator_config()?;

    let sink = Arc::new(LastFrameSink::default());
    let mut navigator = Navigator::new(config, Arc::clone(&sink) as Arc<dyn FrameSink>);

    info!(
        width = config.full_width,
        height = config.full_height,
        max_iterations = navigator.max_iterations(),
        region = %target,
        "rendering"
    );

    navigator.refresh();
    navigator.request_animated_transition(target, cli.steps, config.preset_delay);

    let no_delay = cli.no_delay;
    let ticks = navigator.settle(|delay| {
        if !no_delay {
            thread::sleep(delay);
        }
    });

    let frame = sink.take().ok_or("no final frame was rendered")?;
    info!(
        ticks,
        generation = frame.generation,
        region = %frame.region,
        "settled"
    );

    if let Some(parent) = cli.output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    PpmFilePresenter::new().present(&frame.raster, navigator.max_iterations(), &cli.output)?;
    info!(path = %cli.output.display(), "saved");

    Ok(())
}
