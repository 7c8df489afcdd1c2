//! PDF rendering: compose the invoice into content blocks, paginate them,
//! stamp page numbers, and assemble the final document.
//!
//! Output is A4 with 25mm side margins, 15mm top, 20mm bottom. Every page
//! carries the seller name top-left, "Invoice" top-right, a separator rule,
//! a footer contact line, and a right-aligned "Page X of N".

mod canvas;
mod image;
mod layout;
mod metrics;

use std::path::{Path, PathBuf};

use lopdf::{Document, Object, Stream, dictionary};
use tracing::{debug, info};

use crate::core::{Invoice, InvoiceError, Totals, verify_totals};
use canvas::{DrawCmd, PageChrome, PageRecorder};
use layout::{Align, Block, Column, ImageBlock, Paragraph, Table, TextStyle};

/// A4 in points.
const PAGE_WIDTH_PT: f32 = 595.28;
const PAGE_HEIGHT_PT: f32 = 841.89;

/// Logo box, millimeters.
const LOGO_WIDTH: f64 = 60.0;
const LOGO_HEIGHT: f64 = 40.0;

/// Minimum space to keep the payment section together, millimeters.
const PAYMENT_BLOCK_RESERVE: f64 = 80.0;

/// Rendering options.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Path to a JPEG logo drawn above the company block. When set but
    /// unreadable, rendering aborts before any output is produced.
    pub logo: Option<PathBuf>,
}

/// Render the invoice to PDF bytes.
///
/// Fails if totals are missing or inconsistent with the line items, or if a
/// configured logo cannot be read.
pub fn render(invoice: &Invoice, options: &RenderOptions) -> Result<Vec<u8>, InvoiceError> {
    let totals = invoice
        .totals
        .as_ref()
        .ok_or_else(|| InvoiceError::Render("invoice totals are not calculated".into()))?;
    verify_totals(&invoice.items, totals)?;

    // Load assets first so a missing logo aborts before layout starts.
    let logo = options
        .logo
        .as_deref()
        .map(image::load_logo)
        .transpose()?;

    let blocks = compose(invoice, totals, logo.is_some());
    let mut recorder = PageRecorder::new();
    layout::lay_out(&blocks, &mut recorder);
    debug!(pages = recorder.page_count(), items = invoice.items.len(), "invoice laid out");

    let chrome = PageChrome {
        company: invoice.seller.name.clone(),
        title: "Invoice".into(),
        footer: match &invoice.seller.email {
            Some(email) => format!("{} - {}", invoice.seller.name, email),
            None => invoice.seller.name.clone(),
        },
    };
    let pages = recorder.finalize(&chrome);

    let bytes = assemble(&pages, logo)?;
    info!(bytes = bytes.len(), pages = pages.len(), number = %invoice.number, "invoice rendered");
    Ok(bytes)
}

/// Render and write to `path`. The file either contains a complete PDF or is
/// not written at all; write failures surface as `InvoiceError::Io`.
pub fn render_to_file(
    invoice: &Invoice,
    options: &RenderOptions,
    path: impl AsRef<Path>,
) -> Result<(), InvoiceError> {
    let bytes = render(invoice, options)?;
    std::fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Build the flat block sequence: company block, client block, metadata
/// table, itemized table, totals, conditional break, payment details,
/// disclaimer.
fn compose(invoice: &Invoice, totals: &Totals, with_logo: bool) -> Vec<Block> {
    let mut blocks = Vec::new();

    if with_logo {
        blocks.push(Block::Image(ImageBlock {
            width: LOGO_WIDTH,
            height: LOGO_HEIGHT,
        }));
        blocks.push(Block::Spacer(4.0));
    }

    // Seller block
    blocks.push(paragraph(&invoice.seller.name, TextStyle::bold()));
    if let Some(street) = &invoice.seller.address.street {
        blocks.push(paragraph(street, TextStyle::normal()));
    }
    blocks.push(paragraph(&invoice.seller.address.city_line(), TextStyle::normal()));
    if let Some(email) = &invoice.seller.email {
        blocks.push(paragraph(&format!("Email: {email}"), TextStyle::normal()));
    }
    if let Some(tax) = &invoice.seller.tax_id {
        blocks.push(paragraph(&format!("{}: {}", tax.scheme, tax.value), TextStyle::normal()));
    }
    blocks.push(Block::Spacer(4.0));

    // Buyer block, right-aligned
    blocks.push(paragraph("Bill To:", TextStyle::bold().right()));
    blocks.push(paragraph(&invoice.buyer.name, TextStyle::normal().right()));
    if let Some(street) = &invoice.buyer.address.street {
        blocks.push(paragraph(street, TextStyle::normal().right()));
    }
    blocks.push(paragraph(&invoice.buyer.address.city_line(), TextStyle::normal().right()));
    if let Some(tax) = &invoice.buyer.tax_id {
        blocks.push(paragraph(
            &format!("{}: {}", tax.scheme, tax.value),
            TextStyle::normal().right(),
        ));
    }
    blocks.push(Block::Spacer(9.0));

    // Invoice metadata
    blocks.push(Block::Table(Table {
        columns: vec![
            Column { width: 45.0, align: Align::Left },
            Column { width: 70.0, align: Align::Right },
        ],
        header: None,
        rows: vec![
            vec!["Invoice Number:".into(), invoice.number.clone()],
            vec!["Invoice Date:".into(), invoice.issue_date.to_string()],
            vec!["Due Date:".into(), invoice.due_date.to_string()],
        ],
        repeat_header: false,
        grid: false,
        bold_last_row: false,
        font_size: 10.0,
    }));
    blocks.push(Block::Spacer(7.0));

    // Itemized table
    blocks.push(Block::Table(Table {
        columns: vec![
            Column { width: 86.0, align: Align::Left },
            Column { width: 18.0, align: Align::Right },
            Column { width: 28.0, align: Align::Right },
            Column { width: 28.0, align: Align::Right },
        ],
        header: Some(vec![
            "Description".into(),
            "Qty".into(),
            "Unit Price (\u{20AC})".into(),
            "Total (\u{20AC})".into(),
        ]),
        rows: invoice
            .items
            .iter()
            .map(|item| {
                vec![
                    item.description.clone(),
                    item.quantity.to_string(),
                    format!("{:.2}", item.unit_price),
                    format!("{:.2}", item.line_total),
                ]
            })
            .collect(),
        repeat_header: true,
        grid: true,
        bold_last_row: false,
        font_size: 10.0,
    }));
    blocks.push(Block::Spacer(7.0));

    // Totals
    blocks.push(Block::Table(Table {
        columns: vec![
            Column { width: 125.0, align: Align::Left },
            Column { width: 35.0, align: Align::Right },
        ],
        header: None,
        rows: vec![
            vec!["Subtotal:".into(), format!("{:.2} \u{20AC}", totals.subtotal)],
            vec!["VAT (23%):".into(), format!("{:.2} \u{20AC}", totals.vat_amount)],
            vec!["Total:".into(), format!("{:.2} \u{20AC}", totals.grand_total)],
        ],
        repeat_header: false,
        grid: false,
        bold_last_row: true,
        font_size: 10.0,
    }));
    blocks.push(Block::Spacer(8.0));

    // Keep the payment section together
    blocks.push(Block::CondPageBreak(PAYMENT_BLOCK_RESERVE));

    blocks.push(paragraph("Payment Details", TextStyle::bold()));
    blocks.push(paragraph(&format!("IBAN: {}", invoice.payment.iban), TextStyle::normal()));
    blocks.push(paragraph(&format!("BIC/SWIFT: {}", invoice.payment.bic), TextStyle::normal()));
    blocks.push(Block::Spacer(8.0));

    if let Some(disclaimer) = &invoice.disclaimer {
        blocks.push(paragraph(disclaimer, TextStyle::normal().right()));
    }

    blocks
}

fn paragraph(text: &str, style: TextStyle) -> Block {
    Block::Paragraph(Paragraph {
        text: text.into(),
        style,
    })
}

/// Assemble the recorded pages into a lopdf document and serialize it.
///
/// No timestamps are written, so the same invoice always produces the same
/// bytes.
fn assemble(pages: &[Vec<DrawCmd>], logo: Option<image::Logo>) -> Result<Vec<u8>, InvoiceError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut resources = dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(font_regular),
            "F2" => Object::Reference(font_bold),
        },
    };
    if let Some(logo) = logo {
        let image_id = doc.add_object(Object::Stream(logo.stream));
        resources.set(
            "XObject",
            dictionary! { "Im1" => Object::Reference(image_id) },
        );
    }
    let resources_id = doc.add_object(resources);

    let mut kids = Vec::with_capacity(pages.len());
    for cmds in pages {
        let content = canvas::encode_page(cmds)?;
        let content_id = doc.add_object(Object::Stream(Stream::new(dictionary! {}, content)));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "Contents" => Object::Reference(content_id),
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(PAGE_WIDTH_PT),
                Object::Real(PAGE_HEIGHT_PT),
            ],
            "Resources" => Object::Reference(resources_id),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Invoice Sample"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}
