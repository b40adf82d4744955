//! Input-source commands.
//!
//! An input source speaks in clicks, numeric selections and parameter
//! strings. [`Scene::handle`] runs one [`Command`], redraws the sink on
//! success and reports either a short summary or the warning on its
//! status line.

use tracing::warn;

use crate::clip_rect::ClipAlgorithm;
use crate::error::Result;
use crate::render_sink::RenderSink;
use crate::scene::Scene;
use crate::shape::{DrawAlgorithm, ShapeKind};
use crate::trans_affine::TransformKind;

/// One user action. Selection codes follow the numeric codes of
/// [`DrawAlgorithm`], [`ShapeKind`], [`ClipAlgorithm`] and
/// [`TransformKind`]; `0` means nothing selected.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Click in scene coordinates.
    Click { x: f64, y: f64 },
    SelectDrawAlgorithm(u32),
    Draw(u32),
    SelectClipAlgorithm(u32),
    CreateClipRect,
    Clip,
    Transform { kind: u32, params: String },
    Clear,
}

impl Scene {
    /// Run `command` and return the status summary, if it has one.
    pub fn execute(&mut self, command: &Command) -> Result<Option<String>> {
        let status = match command {
            Command::Click { x, y } => {
                self.add_point(*x, *y)?;
                None
            }
            Command::SelectDrawAlgorithm(code) => {
                self.set_draw_algorithm(DrawAlgorithm::from_selection(*code)?);
                None
            }
            Command::SelectClipAlgorithm(code) => {
                self.set_clip_mode(ClipAlgorithm::from_selection(*code)?);
                None
            }
            Command::Draw(0) => None,
            Command::Draw(code) => {
                let kind = ShapeKind::try_from(*code)?;
                let built = self.build(kind)?;
                Some(format!("Drew {} {}(s).", built, kind))
            }
            Command::CreateClipRect => {
                let bounds = self.create_clip_rect()?.bounds();
                Some(format!(
                    "Clip window x: [{}, {}] y: [{}, {}].",
                    bounds.xmin(),
                    bounds.xmax(),
                    bounds.ymin(),
                    bounds.ymax()
                ))
            }
            Command::Clip => {
                let summary = self.clip()?;
                Some(format!(
                    "Clipped {} object(s), {} invisible.",
                    summary.clipped, summary.invisible
                ))
            }
            Command::Transform { kind: 0, .. } => None,
            Command::Transform { kind, params } => {
                let kind = TransformKind::try_from(*kind)?;
                let moved = self.transform(kind, params)?;
                Some(format!("{} applied to {} object(s).", kind, moved))
            }
            Command::Clear => {
                self.clear();
                None
            }
        };
        Ok(status)
    }

    /// Run `command` against `sink`.
    ///
    /// On success the scene is redrawn and the summary, if any, becomes
    /// the status line. On failure nothing is redrawn and the status line
    /// reads `WARNING: <message>`.
    pub fn handle<S: RenderSink + ?Sized>(&mut self, command: &Command, sink: &mut S) -> Result<()> {
        match self.execute(command) {
            Ok(status) => {
                self.render(sink);
                if let Some(status) = status {
                    sink.status(&status);
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, ?command, "command rejected");
                sink.status(&format!("WARNING: {}", e));
                Err(e)
            }
        }
    }
}
