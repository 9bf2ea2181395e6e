//! Sunport CLI: terminal playback or PNG frame export.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use sunport::anim::{ControlMode, SceneConfig, SceneState};
use sunport::framebuffer::Framebuffer;
use sunport::output::PngEncoder;
use sunport::scene::{Scene, CANVAS_HEIGHT, CANVAS_WIDTH};
use sunport::viewer::Viewer;

/// Airport sunset scene, rendered in software.
#[derive(Parser, Debug)]
#[command(name = "sunport", version, about)]
struct Args {
    /// Render the still daytime variant instead of the animated sunset
    #[arg(long)]
    still: bool,

    /// Plane control scheme (defaults to the variant's native scheme)
    #[arg(long, value_enum)]
    control: Option<ControlArg>,

    /// Title shown under the frame
    #[arg(long)]
    title: Option<String>,

    /// Export frames as PNG files into this directory instead of playing
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Number of frames to export (one full cycle by default)
    #[arg(long, default_value_t = 360)]
    frames: u32,

    /// Playback width in terminal columns
    #[arg(long, default_value_t = 100)]
    columns: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ControlArg {
    /// Inputs set vertical speed; damping integrates it
    Velocity,
    /// Inputs move the plane directly with immediate clamping
    Direct,
}

impl From<ControlArg> for ControlMode {
    fn from(arg: ControlArg) -> Self {
        match arg {
            ControlArg::Velocity => ControlMode::Velocity,
            ControlArg::Direct => ControlMode::Direct,
        }
    }
}

impl Args {
    fn config(&self) -> SceneConfig {
        let mut config = if self.still {
            SceneConfig::still()
        } else {
            SceneConfig::sunset()
        };
        if let Some(control) = self.control {
            config = config.with_control(control.into());
        }
        if let Some(title) = &self.title {
            config = config.with_title(title.clone());
        }
        config
    }
}

fn export_frames(config: &SceneConfig, dir: &Path, frames: u32) -> sunport::Result<()> {
    std::fs::create_dir_all(dir)?;

    let scene = Scene::airport();
    let mut state = SceneState::new(config);
    let mut fb = Framebuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT)?;

    for frame in 0..frames {
        scene.render(&state, &mut fb);
        PngEncoder::write_to_file(&fb, dir.join(format!("frame_{frame:04}.png")))?;
        state.tick(config);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();

    let result = match &args.export {
        Some(dir) => export_frames(&config, dir, args.frames),
        None => Viewer::new(config).columns(args.columns).run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sunport: {err}");
            ExitCode::FAILURE
        }
    }
}
