/// Interactive terminal front-end for the wireframe pipeline
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{FrameInput, FrameOutput, Parameter, SceneState};

pub mod renderer;

pub use renderer::WireRenderer;

/// One entry of the control panel: a named parameter with the bounds
/// this layer enforces before anything reaches the core.
struct Control {
    parameter: Parameter,
    label: &'static str,
    min: f64,
    max: f64,
    step: f64,
    default: f64,
}

const CONTROLS: &[Control] = &[
    Control { parameter: Parameter::RotateX, label: "rotate x", min: 0.0, max: 360.0, step: 5.0, default: 0.0 },
    Control { parameter: Parameter::RotateY, label: "rotate y", min: 0.0, max: 360.0, step: 5.0, default: 0.0 },
    Control { parameter: Parameter::RotateZ, label: "rotate z", min: 0.0, max: 360.0, step: 5.0, default: 0.0 },
    Control { parameter: Parameter::TranslateX, label: "translate x", min: -10.0, max: 10.0, step: 0.25, default: 0.0 },
    Control { parameter: Parameter::TranslateY, label: "translate y", min: -10.0, max: 10.0, step: 0.25, default: 0.0 },
    Control { parameter: Parameter::TranslateZ, label: "translate z", min: -10.0, max: 10.0, step: 0.25, default: 0.0 },
    Control { parameter: Parameter::ScaleX, label: "scale x", min: 0.1, max: 3.0, step: 0.05, default: 1.0 },
    Control { parameter: Parameter::ScaleY, label: "scale y", min: 0.1, max: 3.0, step: 0.05, default: 1.0 },
    Control { parameter: Parameter::ScaleZ, label: "scale z", min: 0.1, max: 3.0, step: 0.05, default: 1.0 },
    Control { parameter: Parameter::CamRotateX, label: "cam rotate x", min: 0.0, max: 360.0, step: 5.0, default: 0.0 },
    Control { parameter: Parameter::CamRotateY, label: "cam rotate y", min: 0.0, max: 360.0, step: 5.0, default: 0.0 },
    Control { parameter: Parameter::CamRotateZ, label: "cam rotate z", min: 0.0, max: 360.0, step: 5.0, default: 0.0 },
    Control { parameter: Parameter::CamTranslateX, label: "cam translate x", min: -10.0, max: 10.0, step: 0.25, default: 0.0 },
    Control { parameter: Parameter::CamTranslateY, label: "cam translate y", min: -10.0, max: 10.0, step: 0.25, default: 0.0 },
    Control { parameter: Parameter::CamTranslateZ, label: "cam translate z", min: -10.0, max: 10.0, step: 0.25, default: 0.0 },
    Control { parameter: Parameter::Fov, label: "fov", min: 15.0, max: 180.0, step: 5.0, default: 90.0 },
];

/// Main application struct for the interactive viewer
pub struct TerminalApp {
    scene: SceneState,
    initial: SceneState,
    values: Vec<f64>,
    selected: usize,
    pending: Option<FrameInput>,
    output: Option<FrameOutput>,
    renderer: WireRenderer,
    target_frame_time: Duration,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: SceneState, target_fps: u64) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let mut values: Vec<f64> = CONTROLS.iter().map(|c| c.default).collect();
        if let Some(idx) = CONTROLS.iter().position(|c| c.parameter == Parameter::Fov) {
            values[idx] = scene.fov_deg;
        }

        Ok(Self {
            initial: scene.clone(),
            scene,
            values,
            selected: 0,
            pending: None,
            output: None,
            renderer: WireRenderer::new(width as usize, height as usize),
            target_frame_time: Duration::from_millis(1000 / target_fps.max(1)),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.target_frame_time {
                std::thread::sleep(self.target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Tab | KeyCode::Char(']') => {
                    self.selected = (self.selected + 1) % CONTROLS.len();
                }
                KeyCode::BackTab | KeyCode::Char('[') => {
                    self.selected = (self.selected + CONTROLS.len() - 1) % CONTROLS.len();
                }
                KeyCode::Left | KeyCode::Char('-') => {
                    self.nudge(-1.0);
                }
                KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.nudge(1.0);
                }
                KeyCode::Char('r') => {
                    self.reset();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Step the selected control, clamped to its bounds, and queue the
    /// change for the next frame.
    fn nudge(&mut self, direction: f64) {
        let control = &CONTROLS[self.selected];
        let value = (self.values[self.selected] + direction * control.step).clamp(control.min, control.max);
        self.values[self.selected] = value;
        self.pending = Some(FrameInput {
            parameter: control.parameter,
            value,
        });
    }

    fn reset(&mut self) {
        self.scene = self.initial.clone();
        self.values = CONTROLS.iter().map(|c| c.default).collect();
        if let Some(idx) = CONTROLS.iter().position(|c| c.parameter == Parameter::Fov) {
            self.values[idx] = self.initial.fov_deg;
        }
        self.pending = Some(FrameInput::none());
    }

    /// One synchronous pass: apply the queued change (or re-project as
    /// is) and stash the frame outputs. A math error aborts the frame
    /// and the previous one stays on screen.
    fn update(&mut self) {
        let input = self.pending.take().unwrap_or_else(FrameInput::none);
        match self.scene.advance(input) {
            Ok((next, output)) => {
                self.scene = next;
                self.output = Some(output);
            }
            Err(err) => {
                tracing::error!(error = %err, "frame aborted");
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        if let Some(output) = &self.output {
            self.renderer.render_wireframe(&output.projected);
        }

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        // Status line overlay
        let control = &CONTROLS[self.selected];
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "wire3d | {} = {:.2} | FPS: {:.1} | Tab=Next [ ]=Select Arrows=Adjust R=Reset Q=Quit",
                control.label, self.values[self.selected], self.fps
            )),
            ResetColor
        )?;

        // Vertex readout overlay
        if let Some(output) = &self.output {
            queue!(
                stdout,
                cursor::MoveTo(0, 1),
                SetForegroundColor(Color::DarkGrey),
                Print(format!("{:>7} {:>7} {:>7}", "x", "y", "z"))
            )?;
            for (row, v) in output.world_vertices.iter().enumerate() {
                queue!(
                    stdout,
                    cursor::MoveTo(0, (row + 2) as u16),
                    Print(format!("{:7.2} {:7.2} {:7.2}", v.x, v.y, v.z))
                )?;
            }
            queue!(stdout, ResetColor)?;
        }

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_cover_every_parameter() {
        // every adjustable parameter appears exactly once
        for parameter in [
            Parameter::RotateX,
            Parameter::TranslateY,
            Parameter::ScaleZ,
            Parameter::CamRotateY,
            Parameter::CamTranslateZ,
            Parameter::Fov,
        ] {
            assert_eq!(
                CONTROLS.iter().filter(|c| c.parameter == parameter).count(),
                1
            );
        }
        assert_eq!(CONTROLS.len(), 16);
    }

    #[test]
    fn test_control_bounds_match_contract() {
        for control in CONTROLS {
            let (min, max) = match control.parameter {
                Parameter::RotateX
                | Parameter::RotateY
                | Parameter::RotateZ
                | Parameter::CamRotateX
                | Parameter::CamRotateY
                | Parameter::CamRotateZ => (0.0, 360.0),
                Parameter::TranslateX
                | Parameter::TranslateY
                | Parameter::TranslateZ
                | Parameter::CamTranslateX
                | Parameter::CamTranslateY
                | Parameter::CamTranslateZ => (-10.0, 10.0),
                Parameter::ScaleX | Parameter::ScaleY | Parameter::ScaleZ => (0.1, 3.0),
                Parameter::Fov => (15.0, 180.0),
                Parameter::None => unreachable!("no control targets None"),
            };
            assert_eq!(control.min, min, "{}", control.label);
            assert_eq!(control.max, max, "{}", control.label);
            assert!(control.default >= min && control.default <= max);
        }
    }

    #[test]
    fn test_scale_bounds_exclude_zero() {
        // the core's zero-scale contract is unreachable through the panel
        for control in CONTROLS {
            if matches!(
                control.parameter,
                Parameter::ScaleX | Parameter::ScaleY | Parameter::ScaleZ
            ) {
                assert!(control.min > 0.0);
            }
        }
    }
}
