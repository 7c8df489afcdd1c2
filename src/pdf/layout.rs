//! Block model and pagination.
//!
//! The document is composed as a flat ordered list of [`Block`]s: paragraphs,
//! spacers, tables, conditional page breaks, an image. The layout loop walks
//! the list with a cursor,
//! measures each piece against the remaining page height, splits tables at
//! row boundaries re-emitting the header row, and records draw commands
//! through the [`PageRecorder`].

use super::canvas::{DrawCmd, PageRecorder};
use super::metrics::{self, FontId};

pub(crate) const PAGE_WIDTH_MM: f64 = 210.0;
pub(crate) const PAGE_HEIGHT_MM: f64 = 297.0;
pub(crate) const MARGIN_LEFT: f64 = 25.0;
pub(crate) const MARGIN_RIGHT: f64 = 25.0;

/// Content flows from just below the header separator down to the bottom
/// margin.
const CONTENT_TOP: f64 = 276.0;
const CONTENT_BOTTOM: f64 = 20.0;

const MM_PER_PT: f64 = 25.4 / 72.0;

/// Cell padding inside tables, millimeters.
const CELL_H_PAD: f64 = 1.5;
const CELL_V_PAD: f64 = 1.6;

const GRID_GRAY: f64 = 0.6;
const GRID_WIDTH_PT: f64 = 0.25;
const HEADER_FILL_GRAY: f64 = 0.92;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
}

/// Paragraph style: font, size in points, horizontal alignment.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyle {
    pub font: FontId,
    pub size: f64,
    pub align: Align,
}

impl TextStyle {
    pub(crate) fn normal() -> Self {
        Self {
            font: FontId::Regular,
            size: 10.0,
            align: Align::Left,
        }
    }

    pub(crate) fn bold() -> Self {
        Self {
            font: FontId::Bold,
            size: 11.0,
            align: Align::Left,
        }
    }

    pub(crate) fn right(self) -> Self {
        Self {
            align: Align::Right,
            ..self
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Paragraph {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Column {
    pub width: f64,
    pub align: Align,
}

#[derive(Debug, Clone)]
pub(crate) struct Table {
    pub columns: Vec<Column>,
    /// Header row, re-emitted after every page break when `repeat_header`.
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    pub repeat_header: bool,
    pub grid: bool,
    /// Render the last row bold (totals row).
    pub bold_last_row: bool,
    pub font_size: f64,
}

/// The logo box, anchored at the left margin.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ImageBlock {
    pub width: f64,
    pub height: f64,
}

/// One flowable element of the document.
#[derive(Debug, Clone)]
pub(crate) enum Block {
    Paragraph(Paragraph),
    /// Vertical gap in millimeters.
    Spacer(f64),
    Table(Table),
    /// Break to a new page unless at least this many millimeters remain.
    CondPageBreak(f64),
    Image(ImageBlock),
}

pub(crate) fn content_width() -> f64 {
    PAGE_WIDTH_MM - MARGIN_LEFT - MARGIN_RIGHT
}

/// Line height in millimeters for a font size in points.
fn leading(size_pt: f64) -> f64 {
    size_pt * 1.25 * MM_PER_PT
}

/// Baseline offset from the top of a line box.
fn baseline_drop(size_pt: f64) -> f64 {
    leading(size_pt) - 0.25 * size_pt * MM_PER_PT
}

/// Walks the blocks and records positioned draw commands, breaking pages as
/// needed. The recorder stays in its recording state; the caller finalizes.
pub(crate) fn lay_out(blocks: &[Block], rec: &mut PageRecorder) {
    let mut cursor = Cursor::new(rec);
    for block in blocks {
        match block {
            Block::Paragraph(p) => cursor.paragraph(p),
            Block::Spacer(h) => cursor.space(*h),
            Block::Table(t) => cursor.table(t),
            Block::CondPageBreak(min) => {
                if cursor.remaining() < *min {
                    cursor.advance_page();
                }
            }
            Block::Image(img) => cursor.image(img),
        }
    }
}

struct Cursor<'a> {
    rec: &'a mut PageRecorder,
    /// Distance of the next free position from the page bottom, millimeters.
    y: f64,
}

impl<'a> Cursor<'a> {
    fn new(rec: &'a mut PageRecorder) -> Self {
        Self {
            rec,
            y: CONTENT_TOP,
        }
    }

    fn remaining(&self) -> f64 {
        self.y - CONTENT_BOTTOM
    }

    fn advance_page(&mut self) {
        self.rec.advance_page();
        self.y = CONTENT_TOP;
    }

    fn ensure(&mut self, height: f64) {
        if self.remaining() < height && self.y < CONTENT_TOP {
            self.advance_page();
        }
    }

    fn space(&mut self, height: f64) {
        // A spacer never starts a page; it just collapses at a break.
        self.y = (self.y - height).max(CONTENT_BOTTOM);
    }

    fn paragraph(&mut self, p: &Paragraph) {
        let lh = leading(p.style.size);
        for line in metrics::wrap(&p.text, p.style.font, p.style.size, content_width()) {
            self.ensure(lh);
            let x = match p.style.align {
                Align::Left => MARGIN_LEFT,
                Align::Right => {
                    PAGE_WIDTH_MM
                        - MARGIN_RIGHT
                        - metrics::text_width_mm(&line, p.style.font, p.style.size)
                }
            };
            self.rec.push(DrawCmd::Text {
                x,
                y: self.y - baseline_drop(p.style.size),
                font: p.style.font,
                size: p.style.size,
                text: line,
            });
            self.y -= lh;
        }
    }

    fn image(&mut self, img: &ImageBlock) {
        self.ensure(img.height);
        self.rec.push(DrawCmd::Image {
            x: MARGIN_LEFT,
            y: self.y - img.height,
            w: img.width,
            h: img.height,
        });
        self.y -= img.height;
    }

    fn table(&mut self, table: &Table) {
        let header_h = table
            .header
            .as_ref()
            .map(|cells| row_height(table, cells, FontId::Bold))
            .unwrap_or(0.0);

        let mut header_pending = table.header.is_some();
        for (i, cells) in table.rows.iter().enumerate() {
            let bold = table.bold_last_row && i + 1 == table.rows.len();
            let font = if bold { FontId::Bold } else { FontId::Regular };
            let row_h = row_height(table, cells, font);

            let needed = if header_pending { header_h + row_h } else { row_h };
            if self.remaining() < needed && self.y < CONTENT_TOP {
                self.advance_page();
                if table.repeat_header && table.header.is_some() {
                    header_pending = true;
                }
            }

            if header_pending {
                if let Some(header_cells) = &table.header {
                    self.emit_row(table, header_cells, FontId::Bold, header_h, true);
                }
                header_pending = false;
            }
            self.emit_row(table, cells, font, row_h, false);
        }
    }

    fn emit_row(
        &mut self,
        table: &Table,
        cells: &[String],
        font: FontId,
        row_h: f64,
        is_header: bool,
    ) {
        let top = self.y;
        let bottom = top - row_h;
        let table_w: f64 = table.columns.iter().map(|c| c.width).sum();

        if is_header {
            self.rec.push(DrawCmd::Rect {
                x: MARGIN_LEFT,
                y: bottom,
                w: table_w,
                h: row_h,
                gray: HEADER_FILL_GRAY,
            });
        }

        let mut col_x = MARGIN_LEFT;
        for (column, cell) in table.columns.iter().zip(cells) {
            let avail = column.width - 2.0 * CELL_H_PAD;
            let mut line_y = top - CELL_V_PAD;
            for line in metrics::wrap(cell, font, table.font_size, avail) {
                let x = match column.align {
                    Align::Left => col_x + CELL_H_PAD,
                    Align::Right => {
                        col_x + column.width
                            - CELL_H_PAD
                            - metrics::text_width_mm(&line, font, table.font_size)
                    }
                };
                self.rec.push(DrawCmd::Text {
                    x,
                    y: line_y - baseline_drop(table.font_size),
                    font,
                    size: table.font_size,
                    text: line,
                });
                line_y -= leading(table.font_size);
            }
            col_x += column.width;
        }

        if table.grid {
            self.grid_lines(table, top, bottom, table_w);
        }
        self.y = bottom;
    }

    fn grid_lines(&mut self, table: &Table, top: f64, bottom: f64, table_w: f64) {
        for y in [top, bottom] {
            self.rec.push(DrawCmd::Line {
                x1: MARGIN_LEFT,
                y1: y,
                x2: MARGIN_LEFT + table_w,
                y2: y,
                width_pt: GRID_WIDTH_PT,
                gray: GRID_GRAY,
            });
        }
        let mut x = MARGIN_LEFT;
        for column in &table.columns {
            for edge in [x, x + column.width] {
                self.rec.push(DrawCmd::Line {
                    x1: edge,
                    y1: top,
                    x2: edge,
                    y2: bottom,
                    width_pt: GRID_WIDTH_PT,
                    gray: GRID_GRAY,
                });
            }
            x += column.width;
        }
    }
}

fn row_height(table: &Table, cells: &[String], font: FontId) -> f64 {
    let mut max_lines = 1usize;
    for (column, cell) in table.columns.iter().zip(cells) {
        let avail = column.width - 2.0 * CELL_H_PAD;
        max_lines = max_lines.max(metrics::wrap(cell, font, table.font_size, avail).len());
    }
    max_lines as f64 * leading(table.font_size) + 2.0 * CELL_V_PAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::canvas::PageChrome;

    fn chrome() -> PageChrome {
        PageChrome {
            company: "Atlantic Services Lda".into(),
            title: "Invoice".into(),
            footer: "test".into(),
        }
    }

    fn items_table(rows: usize) -> Table {
        Table {
            columns: vec![
                Column {
                    width: 86.0,
                    align: Align::Left,
                },
                Column {
                    width: 18.0,
                    align: Align::Right,
                },
                Column {
                    width: 28.0,
                    align: Align::Right,
                },
                Column {
                    width: 28.0,
                    align: Align::Right,
                },
            ],
            header: Some(vec![
                "Description".into(),
                "Qty".into(),
                "Unit Price (\u{20AC})".into(),
                "Total (\u{20AC})".into(),
            ]),
            rows: (0..rows)
                .map(|i| {
                    vec![
                        format!("Service {i}"),
                        "2".into(),
                        "40.00".into(),
                        "80.00".into(),
                    ]
                })
                .collect(),
            repeat_header: true,
            grid: true,
            bold_last_row: false,
            font_size: 10.0,
        }
    }

    fn header_stamps(pages: &[Vec<DrawCmd>]) -> usize {
        pages
            .iter()
            .flat_map(|p| p.iter())
            .filter(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "Description"))
            .count()
    }

    #[test]
    fn fifty_rows_span_multiple_pages() {
        let mut rec = PageRecorder::new();
        lay_out(&[Block::Table(items_table(50))], &mut rec);
        let pages = rec.finalize(&chrome());
        assert!(pages.len() >= 2, "expected a page break, got {} page(s)", pages.len());
        // Repeated header row: once per page the table touches.
        assert_eq!(header_stamps(&pages), pages.len());
    }

    #[test]
    fn few_rows_fit_on_one_page() {
        let mut rec = PageRecorder::new();
        lay_out(&[Block::Table(items_table(5))], &mut rec);
        let pages = rec.finalize(&chrome());
        assert_eq!(pages.len(), 1);
        assert_eq!(header_stamps(&pages), 1);
    }

    #[test]
    fn cond_page_break_honors_remaining_space() {
        // Fill most of the page, then require 80mm: must break.
        let filler = Block::Table(items_table(28));
        let mut rec = PageRecorder::new();
        lay_out(
            &[
                filler,
                Block::CondPageBreak(80.0),
                Block::Paragraph(Paragraph {
                    text: "Payment Details".into(),
                    style: TextStyle::bold(),
                }),
            ],
            &mut rec,
        );
        let pages = rec.finalize(&chrome());
        assert_eq!(pages.len(), 2);
        let last_page_has_payment = pages[1]
            .iter()
            .any(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "Payment Details"));
        assert!(last_page_has_payment);
    }

    #[test]
    fn cond_page_break_is_noop_with_enough_space() {
        let mut rec = PageRecorder::new();
        lay_out(
            &[
                Block::Paragraph(Paragraph {
                    text: "Totals".into(),
                    style: TextStyle::normal(),
                }),
                Block::CondPageBreak(80.0),
                Block::Paragraph(Paragraph {
                    text: "Payment Details".into(),
                    style: TextStyle::bold(),
                }),
            ],
            &mut rec,
        );
        let pages = rec.finalize(&chrome());
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn right_aligned_paragraph_ends_at_right_margin() {
        let mut rec = PageRecorder::new();
        lay_out(
            &[Block::Paragraph(Paragraph {
                text: "Bill To:".into(),
                style: TextStyle::bold().right(),
            })],
            &mut rec,
        );
        let pages = rec.finalize(&chrome());
        let cmd = pages[0]
            .iter()
            .find(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "Bill To:"))
            .expect("paragraph rendered");
        if let DrawCmd::Text { x, font, size, text, .. } = cmd {
            let right_edge = x + metrics::text_width_mm(text, *font, *size);
            assert!((right_edge - (PAGE_WIDTH_MM - MARGIN_RIGHT)).abs() < 0.01);
        }
    }
}
