//! Page recorder and content-stream emission.
//!
//! Page numbering needs the total page count, which is only known after the
//! whole document has been laid out. The recorder therefore runs in two
//! passes: while **recording**, every page advance snapshots the current
//! page's draw commands and starts a fresh page; when **finalizing**, each
//! snapshot is replayed with the header/footer chrome and a "Page X of N"
//! stamp bound against the now-known total.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

use super::metrics::{self, FontId};

/// A single recorded draw command. Coordinates are millimeters from the
/// bottom-left page corner; conversion to points happens at emission.
#[derive(Debug, Clone)]
pub(crate) enum DrawCmd {
    /// Text at a fixed baseline position.
    Text {
        x: f64,
        y: f64,
        font: FontId,
        size: f64,
        text: String,
    },
    /// Stroked line.
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width_pt: f64,
        gray: f64,
    },
    /// Filled rectangle (x, y is the lower-left corner).
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        gray: f64,
    },
    /// The logo XObject (/Im1) scaled into the given box.
    Image { x: f64, y: f64, w: f64, h: f64 },
}

/// Repeating per-page decoration: seller name top-left, document title
/// top-right, separator rule, contact line in the footer.
#[derive(Debug, Clone)]
pub(crate) struct PageChrome {
    pub company: String,
    pub title: String,
    pub footer: String,
}

/// Records draw commands per page, then stamps page numbers on finalize.
#[derive(Debug, Default)]
pub(crate) struct PageRecorder {
    pages: Vec<Vec<DrawCmd>>,
    current: Vec<DrawCmd>,
}

impl PageRecorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, cmd: DrawCmd) {
        self.current.push(cmd);
    }

    /// Snapshot the current page and start a fresh one.
    pub(crate) fn advance_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
    }

    /// Pages committed so far plus the one being recorded.
    pub(crate) fn page_count(&self) -> usize {
        self.pages.len() + if self.current.is_empty() { 0 } else { 1 }
    }

    /// Replay every snapshot with chrome and a "Page X of N" stamp.
    pub(crate) fn finalize(mut self, chrome: &PageChrome) -> Vec<Vec<DrawCmd>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
        }

        let total = self.pages.len();
        for (i, page) in self.pages.iter_mut().enumerate() {
            let mut decorated = chrome_cmds(chrome);
            decorated.append(page);
            decorated.push(page_number_cmd(i + 1, total));
            *page = decorated;
        }
        self.pages
    }
}

fn chrome_cmds(chrome: &PageChrome) -> Vec<DrawCmd> {
    vec![
        DrawCmd::Text {
            x: 25.0,
            y: 285.0,
            font: FontId::Regular,
            size: 9.0,
            text: chrome.company.clone(),
        },
        DrawCmd::Text {
            x: 190.0 - metrics::text_width_mm(&chrome.title, FontId::Regular, 9.0),
            y: 285.0,
            font: FontId::Regular,
            size: 9.0,
            text: chrome.title.clone(),
        },
        DrawCmd::Line {
            x1: 25.0,
            y1: 280.0,
            x2: 190.0,
            y2: 280.0,
            width_pt: 0.7,
            gray: 0.0,
        },
        DrawCmd::Text {
            x: 25.0,
            y: 12.0,
            font: FontId::Regular,
            size: 8.0,
            text: chrome.footer.clone(),
        },
    ]
}

fn page_number_cmd(page: usize, total: usize) -> DrawCmd {
    let text = format!("Page {page} of {total}");
    DrawCmd::Text {
        x: 190.0 - metrics::text_width_mm(&text, FontId::Regular, 9.0),
        y: 15.0,
        font: FontId::Regular,
        size: 9.0,
        text,
    }
}

const PT_PER_MM: f64 = 72.0 / 25.4;

fn pt(mm: f64) -> Object {
    Object::Real((mm * PT_PER_MM) as f32)
}

/// Encode one page's commands into a PDF content stream.
pub(crate) fn encode_page(cmds: &[DrawCmd]) -> Result<Vec<u8>, lopdf::Error> {
    let mut operations = Vec::new();

    for cmd in cmds {
        match cmd {
            DrawCmd::Text {
                x,
                y,
                font,
                size,
                text,
            } => {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![
                        Object::Name(font.resource_name().as_bytes().to_vec()),
                        Object::Real(*size as f32),
                    ],
                ));
                operations.push(Operation::new("Td", vec![pt(*x), pt(*y)]));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(
                        metrics::encode_win_ansi(text),
                        StringFormat::Literal,
                    )],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            DrawCmd::Line {
                x1,
                y1,
                x2,
                y2,
                width_pt,
                gray,
            } => {
                operations.push(Operation::new("q", vec![]));
                operations.push(Operation::new("G", vec![Object::Real(*gray as f32)]));
                operations.push(Operation::new("w", vec![Object::Real(*width_pt as f32)]));
                operations.push(Operation::new("m", vec![pt(*x1), pt(*y1)]));
                operations.push(Operation::new("l", vec![pt(*x2), pt(*y2)]));
                operations.push(Operation::new("S", vec![]));
                operations.push(Operation::new("Q", vec![]));
            }
            DrawCmd::Rect { x, y, w, h, gray } => {
                operations.push(Operation::new("q", vec![]));
                operations.push(Operation::new("g", vec![Object::Real(*gray as f32)]));
                operations.push(Operation::new("re", vec![pt(*x), pt(*y), pt(*w), pt(*h)]));
                operations.push(Operation::new("f", vec![]));
                operations.push(Operation::new("Q", vec![]));
            }
            DrawCmd::Image { x, y, w, h } => {
                operations.push(Operation::new("q", vec![]));
                operations.push(Operation::new(
                    "cm",
                    vec![
                        pt(*w),
                        Object::Real(0.0),
                        Object::Real(0.0),
                        pt(*h),
                        pt(*x),
                        pt(*y),
                    ],
                ));
                operations.push(Operation::new("Do", vec![Object::Name(b"Im1".to_vec())]));
                operations.push(Operation::new("Q", vec![]));
            }
        }
    }

    Content { operations }.encode()
}
