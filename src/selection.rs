// src/selection.rs
// Drag tracking and the one-line report. No window types beyond druid's geometry.

use std::fmt;
use std::str::FromStr;

use druid::{Point, Rect};

use crate::error::{Error, Result};

const REPORT_PREFIX: &str = "Selection:";
const NO_SELECTION: &str = "No selection was made";

/// Normalized rectangle spanned by two points, whatever the drag direction.
pub fn normalize(a: Point, b: Point) -> Rect {
    Rect::from_points(a, b).abs()
}

/// Where the pointer interaction currently stands.
///
/// `NotStarted -> Dragging -> Finished`; `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    NotStarted,
    Dragging {
        start: Point,
        /// `None` until the first drag event arrives.
        current: Option<Rect>,
    },
    Finished(Option<Rect>),
}

impl DragState {
    pub fn press(&mut self, pos: Point) {
        if let DragState::NotStarted = self {
            *self = DragState::Dragging { start: pos, current: None };
        }
    }

    /// Returns the updated rectangle when a redraw is needed.
    pub fn drag(&mut self, pos: Point) -> Option<Rect> {
        match self {
            DragState::Dragging { start, current } => {
                let rect = normalize(*start, pos);
                *current = Some(rect);
                Some(rect)
            }
            _ => None,
        }
    }

    /// Returns `true` when the event loop should stop. The last dragged rectangle is kept;
    /// the release point itself does not move it.
    pub fn release(&mut self) -> bool {
        match *self {
            DragState::Dragging { current, .. } => {
                // a press without any movement is a click, not a selection
                *self = DragState::Finished(current);
                true
            }
            DragState::NotStarted => {
                *self = DragState::Finished(None);
                true
            }
            DragState::Finished(_) => false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Rectangle to outline on the next paint.
    pub fn visible_rect(&self) -> Option<Rect> {
        match *self {
            DragState::Dragging { current, .. } => current,
            DragState::Finished(rect) => rect,
            DragState::NotStarted => None,
        }
    }

    /// The finalized selection, only once the pointer has been released.
    pub fn selection(&self) -> Option<Selection> {
        match *self {
            DragState::Finished(rect) => rect.map(Selection::from),
            _ => None,
        }
    }
}

/// Integer geometry of a finished selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl From<Rect> for Selection {
    fn from(rect: Rect) -> Self {
        // `as` truncates toward zero
        Selection {
            x: rect.x0 as i64,
            y: rect.y0 as i64,
            width: rect.width() as i64,
            height: rect.height() as i64,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {}",
            REPORT_PREFIX, self.x, self.y, self.width, self.height
        )
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let body = line
            .trim()
            .strip_prefix(REPORT_PREFIX)
            .ok_or_else(|| Error::Parse(format!("missing `{REPORT_PREFIX}` prefix: {line:?}")))?;

        let fields = body
            .split(',')
            .map(|f| {
                f.trim()
                    .parse::<i64>()
                    .map_err(|e| Error::Parse(format!("bad field {:?}: {e}", f.trim())))
            })
            .collect::<Result<Vec<_>>>()?;

        match fields[..] {
            [x, y, width, height] => Ok(Selection { x, y, width, height }),
            _ => Err(Error::Parse(format!(
                "expected 4 fields, got {}: {line:?}",
                fields.len()
            ))),
        }
    }
}

impl Selection {
    /// Reads the selection back out of this program's stdout. Trace lines may come first, so
    /// the last `Selection:` line wins.
    pub fn from_output(output: &str) -> Result<Self> {
        output
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| line.starts_with(REPORT_PREFIX))
            .ok_or_else(|| Error::Parse("no selection line in output".to_string()))?
            .parse()
    }
}

/// The final stdout line.
pub fn report(selection: Option<Selection>) -> String {
    match selection {
        Some(sel) => sel.to_string(),
        None => NO_SELECTION.to_string(),
    }
}
