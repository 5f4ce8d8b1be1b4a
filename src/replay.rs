//! Headless replay of a scripted intent sequence.
//!
//! `pixel-walker replay <script.json> [--width N] [--height N]` runs the
//! [`App`] against a [`ScriptedIntents`] source on a virtual clock, then
//! reports the final world state as JSON. The clock advances one frame
//! interval per iteration while a glide is in flight; when the world is idle
//! it jumps straight to the frame boundary at or after the next scripted
//! intent, so long pauses in a script cost no frames. Runs are deterministic: the same script always produces the
//! same report.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::app::{App, Flow};
use crate::core::WorldConfig;
use crate::input::{IntentSource, ScriptedIntents};
use crate::term::{FrameBuffer, Viewport};
use crate::types::{Intent, FRAME_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub script: PathBuf,
    pub width: u16,
    pub height: u16,
}

/// One scripted step as it appears in the JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayStep {
    pub at_ms: u64,
    pub intent: String,
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub height: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    pub steps: Vec<ReplayStep>,
}

impl ReplayStep {
    pub fn to_intent(&self) -> Result<Intent> {
        if let Some(intent) = Intent::from_str(&self.intent) {
            return Ok(intent);
        }
        match self.intent.to_lowercase().as_str() {
            "click" => match (self.x, self.y) {
                (Some(x), Some(y)) => Ok(Intent::Click { x, y }),
                _ => Err(anyhow!("replay: click at {}ms needs x and y", self.at_ms)),
            },
            "resize" => match (self.width, self.height) {
                (Some(width), Some(height)) => Ok(Intent::Resize { width, height }),
                _ => Err(anyhow!(
                    "replay: resize at {}ms needs width and height",
                    self.at_ms
                )),
            },
            other => Err(anyhow!("replay: unknown intent: {}", other)),
        }
    }
}

/// Final state of a replay run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub mode: &'static str,
    pub x: i32,
    pub y: i32,
    pub move_count: u32,
    pub camera_x: f32,
    pub camera_y: f32,
    pub animating: bool,
    pub show_menu: bool,
    pub tile_size: u32,
    pub frames: u64,
    pub elapsed_ms: u64,
}

pub fn parse_replay_args(args: &[String]) -> Result<Option<ReplayConfig>> {
    if args.is_empty() || args[0] != "replay" {
        return Ok(None);
    }

    let mut script: Option<PathBuf> = None;
    let mut width: u16 = 80;
    let mut height: u16 = 24;
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("replay: missing value for --width"))?;
                width = v
                    .parse::<u16>()
                    .map_err(|_| anyhow!("replay: invalid --width value: {}", v))?;
            }
            "--height" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("replay: missing value for --height"))?;
                height = v
                    .parse::<u16>()
                    .map_err(|_| anyhow!("replay: invalid --height value: {}", v))?;
            }
            other if other.starts_with("--") => {
                return Err(anyhow!("replay: unknown argument: {}", other));
            }
            path => {
                if script.is_some() {
                    return Err(anyhow!("replay: unexpected extra argument: {}", path));
                }
                script = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    let script = script.ok_or_else(|| anyhow!("replay: missing script path"))?;
    Ok(Some(ReplayConfig {
        script,
        width,
        height,
    }))
}

/// Parse a JSON script into `(at_ms, intent)` pairs.
pub fn parse_script(json: &str) -> Result<Vec<(u64, Intent)>> {
    let script: ReplayScript = serde_json::from_str(json).context("replay: invalid script")?;
    script
        .steps
        .iter()
        .map(|step| -> Result<(u64, Intent)> { Ok((step.at_ms, step.to_intent()?)) })
        .collect()
}

/// Run `steps` to completion: every intent delivered and no glide in flight.
pub fn run_replay(
    steps: Vec<(u64, Intent)>,
    config: WorldConfig,
    viewport: Viewport,
) -> Result<ReplayReport> {
    let mut source = ScriptedIntents::from_steps(steps);
    let mut app = App::new(config, viewport);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut frames = 0u64;
    let mut now = 0u64;

    'run: loop {
        source.set_now(now);
        loop {
            let batch = source.poll_batch(Duration::ZERO)?;
            if batch.is_empty() {
                break;
            }
            for intent in batch {
                if app.handle_intent(intent, now) == Flow::Quit {
                    break 'run;
                }
            }
        }

        if app.frame(now, &mut fb) {
            frames += 1;
        }
        if source.is_empty() && !app.world().is_animating() {
            break;
        }
        now = next_clock(now, app.world().is_animating(), source.next_at());
    }

    tracing::info!(frames, elapsed_ms = now, "replay finished");
    Ok(report(&app, frames, now))
}

/// Load the script named by `config` and run it with env-derived world config.
pub fn run_replay_file(config: &ReplayConfig) -> Result<ReplayReport> {
    let json = std::fs::read_to_string(&config.script)
        .with_context(|| format!("replay: cannot read {}", config.script.display()))?;
    let steps = parse_script(&json)?;
    run_replay(
        steps,
        WorldConfig::from_env(),
        Viewport::new(config.width, config.height),
    )
}

/// Next virtual time: one frame on, or the first frame boundary at or after
/// `next_at` when the world is idle and that intent lies further out.
fn next_clock(now: u64, animating: bool, next_at: Option<u64>) -> u64 {
    let step = FRAME_MS as u64;
    let next = now + step;
    match next_at {
        Some(at) if !animating && at > next => at.div_ceil(step) * step,
        _ => next,
    }
}

fn report(app: &App, frames: u64, elapsed_ms: u64) -> ReplayReport {
    let snap = app.snapshot();
    ReplayReport {
        mode: snap.mode.as_str(),
        x: snap.position.x,
        y: snap.position.y,
        move_count: snap.move_count,
        camera_x: snap.camera_offset.x,
        camera_y: snap.camera_offset.y,
        animating: snap.animating,
        show_menu: app.show_menu(),
        tile_size: snap.tile_size,
        frames,
        elapsed_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn non_replay_args_are_ignored() {
        assert_eq!(parse_replay_args(&[]).unwrap(), None);
        assert_eq!(parse_replay_args(&args(&["observe"])).unwrap(), None);
    }

    #[test]
    fn replay_args_parse_size_flags() {
        let cfg = parse_replay_args(&args(&["replay", "walk.json", "--width", "100"]))
            .unwrap()
            .unwrap();
        assert_eq!(cfg.script, PathBuf::from("walk.json"));
        assert_eq!((cfg.width, cfg.height), (100, 24));

        assert!(parse_replay_args(&args(&["replay"])).is_err());
        assert!(parse_replay_args(&args(&["replay", "a.json", "--height", "x"])).is_err());
        assert!(parse_replay_args(&args(&["replay", "a.json", "--bogus"])).is_err());
    }

    #[test]
    fn script_steps_map_to_intents() {
        let steps = parse_script(
            r#"{"steps":[
                {"at_ms":0,"intent":"startGame"},
                {"at_ms":10,"intent":"moveUp"},
                {"at_ms":20,"intent":"click","x":1.5,"y":3.0},
                {"at_ms":30,"intent":"resize","width":100,"height":30}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                (0, Intent::StartGame),
                (10, Intent::Move(Direction::Up)),
                (20, Intent::Click { x: 1.5, y: 3.0 }),
                (30, Intent::Resize { width: 100, height: 30 }),
            ]
        );
    }

    #[test]
    fn idle_clock_jumps_to_the_next_intent_on_the_frame_grid() {
        assert_eq!(next_clock(0, false, None), 16);
        assert_eq!(next_clock(0, false, Some(10)), 16);
        assert_eq!(next_clock(0, false, Some(3_600_000)), 3_600_000);
        assert_eq!(next_clock(32, false, Some(1_000)), 1_008);
        // A glide in flight is stepped frame by frame.
        assert_eq!(next_clock(32, true, Some(1_000)), 48);
    }

    #[test]
    fn malformed_steps_are_rejected() {
        assert!(parse_script(r#"{"steps":[{"at_ms":0,"intent":"jump"}]}"#).is_err());
        assert!(parse_script(r#"{"steps":[{"at_ms":0,"intent":"click","x":1.0}]}"#).is_err());
        assert!(parse_script("not json").is_err());
    }
}
