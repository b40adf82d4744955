//! Headless front end for vector-canvas.
//!
//! Reads a scene script, feeds it through [`Scene::handle`] and paints the
//! result into an RGBA buffer that can be written as BMP or raw RGBA.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context};
use tracing::{debug, info};
use vector_canvas::color::Color;
use vector_canvas::command::Command;
use vector_canvas::config::Canvas;
use vector_canvas::render_sink::RenderSink;
use vector_canvas::scene::Scene;

/// Side of the square brush used for point marks.
pub const BRUSH_SIZE: i32 = 6;

// ============================================================================
// Pixel Buffer
// ============================================================================

/// An RGBA pixel buffer, row-major, top-to-bottom.
#[derive(Clone)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width * height * 4) as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Set a pixel in screen coordinates. Out-of-bounds writes are dropped.
    pub fn put(&mut self, x: i32, y: i32, rgba: [u8; 4]) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.data[i..i + 4].copy_from_slice(&rgba);
        true
    }
}

// ============================================================================
// Image I/O
// ============================================================================

/// Write a 32-bit top-down BMP.
pub fn write_bmp<W: Write>(out: &mut W, buf: &PixelBuffer) -> io::Result<()> {
    let w = buf.width;
    let h = buf.height;
    let row_size = w * 4;
    let image_size = row_size * h;
    let file_size = 14 + 40 + image_size;

    // File header
    out.write_all(b"BM")?;
    out.write_all(&file_size.to_le_bytes())?;
    out.write_all(&[0u8; 4])?;
    out.write_all(&(14u32 + 40).to_le_bytes())?;

    // BITMAPINFOHEADER
    out.write_all(&40u32.to_le_bytes())?;
    out.write_all(&w.to_le_bytes())?;
    out.write_all(&(-(h as i32)).to_le_bytes())?; // top-down
    out.write_all(&1u16.to_le_bytes())?;
    out.write_all(&32u16.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;
    out.write_all(&image_size.to_le_bytes())?;
    out.write_all(&[0u8; 8])?;
    out.write_all(&0u32.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;

    let mut row = vec![0u8; row_size as usize];
    for line in buf.data.chunks_exact(row_size as usize) {
        for (src, dst) in line.chunks_exact(4).zip(row.chunks_exact_mut(4)) {
            dst.copy_from_slice(&[src[2], src[1], src[0], src[3]]);
        }
        out.write_all(&row)?;
    }
    Ok(())
}

/// Write `[width: u32 LE][height: u32 LE]` followed by RGBA rows.
pub fn write_raw<W: Write>(out: &mut W, buf: &PixelBuffer) -> io::Result<()> {
    out.write_all(&buf.width.to_le_bytes())?;
    out.write_all(&buf.height.to_le_bytes())?;
    out.write_all(&buf.data)
}

/// Save an image file, detecting format by extension.
pub fn save_image(path: &Path, buf: &PixelBuffer) -> anyhow::Result<()> {
    let ext = path.extension().and_then(|e| e.to_str());
    if !matches!(ext, Some("bmp") | Some("raw") | Some("rgba")) {
        bail!("unsupported image format: {}", path.display());
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    match ext {
        Some("bmp") => write_bmp(&mut out, buf)?,
        _ => write_raw(&mut out, buf)?,
    }
    out.flush()?;
    Ok(())
}

// ============================================================================
// Canvas sink
// ============================================================================

/// [`RenderSink`] painting into a [`PixelBuffer`] on a white background.
pub struct CanvasSink {
    canvas: Canvas,
    buffer: PixelBuffer,
    statuses: Vec<String>,
}

impl CanvasSink {
    pub fn new(canvas: Canvas) -> Self {
        let mut buffer = PixelBuffer::new(canvas.width, canvas.height);
        buffer.fill(Color::WHITE.to_rgba8());
        Self {
            canvas,
            buffer,
            statuses: Vec::new(),
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }
}

impl RenderSink for CanvasSink {
    fn clear(&mut self) {
        self.buffer.fill(Color::WHITE.to_rgba8());
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: &Color) {
        let (sx, sy) = self.canvas.pixel_to_screen(x, y);
        self.buffer.put(sx, sy, color.to_rgba8());
    }

    fn mark_point(&mut self, x: i32, y: i32, color: &Color) {
        let (sx, sy) = self.canvas.pixel_to_screen(x, y);
        let rgba = color.to_rgba8();
        let half = BRUSH_SIZE / 2;
        for dy in -half..BRUSH_SIZE - half {
            for dx in -half..BRUSH_SIZE - half {
                self.buffer.put(sx + dx, sy + dy, rgba);
            }
        }
    }

    fn status(&mut self, message: &str) {
        info!("{}", message);
        self.statuses.push(message.to_string());
    }
}

// ============================================================================
// Script
// ============================================================================

/// Parse one script line. Blank lines and `#` comments yield `None`.
///
/// ```text
/// click X Y            point in scene coordinates
/// screen-click X Y     point in screen coordinates
/// algorithm N          1 = DDA, 2 = Bresenham
/// draw N               1 = line, 2 = polygon, 3 = circle
/// clip-mode N          1 = Cohen-Sutherland, 2 = Liang-Barsky
/// clip-rect
/// clip
/// transform N [PARAMS] 1..6, e.g. `transform 1 (10,-5)`
/// clear
/// ```
pub fn parse_line(line: &str, canvas: &Canvas) -> anyhow::Result<Option<Command>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match word {
        "click" | "screen-click" => {
            let [x, y] = args[..] else {
                bail!("{} expects two coordinates", word);
            };
            let x: f64 = x.parse().with_context(|| format!("bad x coordinate {:?}", x))?;
            let y: f64 = y.parse().with_context(|| format!("bad y coordinate {:?}", y))?;
            let (x, y) = if word == "screen-click" {
                canvas.to_scene(x, y)
            } else {
                (x, y)
            };
            Command::Click { x, y }
        }
        "algorithm" => Command::SelectDrawAlgorithm(selection(word, &args)?),
        "draw" => Command::Draw(selection(word, &args)?),
        "clip-mode" => Command::SelectClipAlgorithm(selection(word, &args)?),
        "clip-rect" => Command::CreateClipRect,
        "clip" => Command::Clip,
        "clear" => Command::Clear,
        "transform" => {
            let (kind, params) = match rest.split_once(char::is_whitespace) {
                Some((k, p)) => (k, p.trim()),
                None => (rest, ""),
            };
            let kind = kind
                .parse()
                .with_context(|| format!("bad transform selection {:?}", kind))?;
            Command::Transform {
                kind,
                params: params.to_string(),
            }
        }
        other => bail!("unknown command {:?}", other),
    };
    Ok(Some(command))
}

fn selection(word: &str, args: &[&str]) -> anyhow::Result<u32> {
    let [code] = args[..] else {
        bail!("{} expects one selection code", word);
    };
    code.parse()
        .with_context(|| format!("bad selection code {:?}", code))
}

// ============================================================================
// Replay
// ============================================================================

/// Outcome of a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub commands: usize,
    pub warnings: usize,
}

/// Run every command of `script` against `scene`, painting into `sink`.
///
/// Syntax errors abort with the offending line number. Commands the scene
/// rejects show up as warnings on the status line; with `keep_going` unset
/// the first one aborts the replay.
pub fn replay(
    script: &str,
    scene: &mut Scene,
    sink: &mut CanvasSink,
    keep_going: bool,
) -> anyhow::Result<ReplayReport> {
    let canvas = scene.config().canvas;
    let mut report = ReplayReport::default();
    for (n, line) in script.lines().enumerate() {
        let lineno = n + 1;
        let Some(command) =
            parse_line(line, &canvas).with_context(|| format!("line {}", lineno))?
        else {
            continue;
        };
        debug!(line = lineno, ?command, "replaying");
        report.commands += 1;
        if let Err(e) = scene.handle(&command, sink) {
            report.warnings += 1;
            if !keep_going {
                return Err(e).with_context(|| format!("line {}", lineno));
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vector_canvas::config::SceneConfig;

    fn scene(width: u32, height: u32) -> Scene {
        Scene::new(SceneConfig {
            canvas: Canvas::new(width, height),
            ..SceneConfig::default()
        })
    }

    #[test]
    fn test_parse_commands() {
        let canvas = Canvas::default();
        assert_eq!(parse_line("  # note", &canvas).unwrap(), None);
        assert_eq!(parse_line("", &canvas).unwrap(), None);
        assert_eq!(
            parse_line("click -10 2.5", &canvas).unwrap(),
            Some(Command::Click { x: -10.0, y: 2.5 })
        );
        assert_eq!(
            parse_line("screen-click 400 300", &canvas).unwrap(),
            Some(Command::Click { x: 0.0, y: 0.0 })
        );
        assert_eq!(
            parse_line("draw 3 # circle", &canvas).unwrap(),
            Some(Command::Draw(3))
        );
        assert_eq!(
            parse_line("transform 1 (10, -5)", &canvas).unwrap(),
            Some(Command::Transform {
                kind: 1,
                params: "(10, -5)".to_string()
            })
        );
        assert_eq!(
            parse_line("transform 4", &canvas).unwrap(),
            Some(Command::Transform {
                kind: 4,
                params: String::new()
            })
        );
        assert_eq!(parse_line("clip", &canvas).unwrap(), Some(Command::Clip));
    }

    #[test]
    fn test_parse_errors() {
        let canvas = Canvas::default();
        assert!(parse_line("click 1", &canvas).is_err());
        assert!(parse_line("draw x", &canvas).is_err());
        assert!(parse_line("paint 1", &canvas).is_err());
    }

    #[test]
    fn test_replay_paints_line() {
        let mut scene = scene(40, 40);
        let mut sink = CanvasSink::new(scene.config().canvas);
        let script = "algorithm 2\nclick -10 0\nclick 10 0\ndraw 1\n";
        let report = replay(script, &mut scene, &mut sink, false).unwrap();
        assert_eq!(report, ReplayReport { commands: 4, warnings: 0 });
        assert_eq!(sink.last_status(), Some("Drew 1 Line(s)."));
        // Scene (0, 0) is screen (20, 20).
        assert_eq!(sink.buffer().pixel(20, 20), [0, 0, 0, 255]);
        assert_eq!(sink.buffer().pixel(20, 5), [255, 255, 255, 255]);
    }

    #[test]
    fn test_replay_warnings() {
        let mut scene = scene(40, 40);
        let mut sink = CanvasSink::new(scene.config().canvas);
        let script = "click 0 0\ndraw 1\nclear\n";
        assert!(replay(script, &mut scene, &mut sink, false).is_err());

        let mut scene = self::scene(40, 40);
        let mut sink = CanvasSink::new(scene.config().canvas);
        let report = replay(script, &mut scene, &mut sink, true).unwrap();
        assert_eq!(report, ReplayReport { commands: 3, warnings: 1 });
        assert_eq!(
            sink.statuses(),
            &["WARNING: You must provide the drawing algorithm.".to_string()]
        );
    }

    #[test]
    fn test_brush_clipped_at_border() {
        let mut sink = CanvasSink::new(Canvas::new(10, 10));
        sink.mark_point(-5, 5, &Color::RED);
        assert_eq!(sink.buffer().pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(sink.buffer().pixel(2, 2), [255, 0, 0, 255]);
        assert_eq!(sink.buffer().pixel(3, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn test_bmp_header() {
        let mut buf = PixelBuffer::new(2, 1);
        buf.put(0, 0, [1, 2, 3, 4]);
        let mut out = Vec::new();
        write_bmp(&mut out, &buf).unwrap();
        assert_eq!(&out[..2], b"BM");
        assert_eq!(out.len(), 54 + 8);
        assert_eq!(&out[54..58], &[3, 2, 1, 4]);
    }

    #[test]
    fn test_raw_layout() {
        let buf = PixelBuffer::new(3, 2);
        let mut out = Vec::new();
        write_raw(&mut out, &buf).unwrap();
        assert_eq!(&out[..4], &3u32.to_le_bytes());
        assert_eq!(&out[4..8], &2u32.to_le_bytes());
        assert_eq!(out.len(), 8 + 24);
    }
}
