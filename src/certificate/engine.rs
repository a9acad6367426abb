//! PDF rendering engine.
//!
//! Converts a [`CertificateDocument`] into a single-page PDF using the base-14
//! Helvetica faces, so no font files are embedded.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use super::common::certificate_filename;
use super::form::FormState;
use super::layout::{CertificateDocument, Color, DrawOp, FontWeight, PageGeometry, TextStyle};
use super::metrics::{text_width_pt, win_ansi_byte};
use super::traits::Generator;
use super::{GeneratedDocument, GeneratorError};

const PT_PER_MM: f32 = 72.0 / 25.4;
const FONT_NORMAL: &str = "F1";
const FONT_BOLD: &str = "F2";

fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

/// Stateless engine for rendering certificate layouts to PDF.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfRenderEngine;

impl PdfRenderEngine {
    pub fn new() -> Self {
        Self
    }

    /// Render the document to PDF bytes.
    pub fn render(&self, document: &CertificateDocument) -> Result<Vec<u8>, GeneratorError> {
        let page = document.page;
        let mut operations = Vec::new();
        for op in &document.ops {
            emit(&mut operations, op, &page);
        }

        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| GeneratorError::EncodeContent(e.to_string()))?;

        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let normal_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_NORMAL => normal_id,
                FONT_BOLD => bold_id,
            },
        });
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![
                real(0.0),
                real(0.0),
                real(mm(page.width_mm)),
                real(mm(page.height_mm)),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut pdf = Vec::new();
        doc.save_to(&mut pdf)
            .map_err(|e| GeneratorError::WritePdf(e.to_string()))?;

        log::debug!(
            "Rendered certificate: {} drawing ops, {} bytes",
            document.ops.len(),
            pdf.len()
        );
        Ok(pdf)
    }
}

impl Generator<&FormState> for PdfRenderEngine {
    /// Compose and render the certificate for `state`.
    fn generate(&self, state: &FormState) -> Result<GeneratedDocument, GeneratorError> {
        let document = CertificateDocument::compose(state);
        let pdf = self.render(&document)?;
        Ok(GeneratedDocument {
            filename: certificate_filename(&state.participant_name, &state.issue_date),
            pdf,
        })
    }
}

fn fill_color(ops: &mut Vec<Operation>, color: Color) {
    let [r, g, b] = color.unit();
    ops.push(Operation::new("rg", vec![real(r), real(g), real(b)]));
}

fn stroke_color(ops: &mut Vec<Operation>, color: Color) {
    let [r, g, b] = color.unit();
    ops.push(Operation::new("RG", vec![real(r), real(g), real(b)]));
}

/// PDF user space has its origin bottom-left; layout uses top-left.
fn flip_y(page: &PageGeometry, y_mm: f32) -> f32 {
    mm(page.height_mm - y_mm)
}

fn emit(ops: &mut Vec<Operation>, op: &DrawOp, page: &PageGeometry) {
    match op {
        DrawOp::FillRect {
            x_mm,
            y_mm,
            width_mm,
            height_mm,
            color,
        } => {
            fill_color(ops, *color);
            ops.push(Operation::new(
                "re",
                vec![
                    real(mm(*x_mm)),
                    real(flip_y(page, y_mm + height_mm)),
                    real(mm(*width_mm)),
                    real(mm(*height_mm)),
                ],
            ));
            ops.push(Operation::new("f", vec![]));
        }
        DrawOp::StrokeRect {
            x_mm,
            y_mm,
            width_mm,
            height_mm,
            color,
            line_width_mm,
        } => {
            stroke_color(ops, *color);
            ops.push(Operation::new("w", vec![real(mm(*line_width_mm))]));
            ops.push(Operation::new(
                "re",
                vec![
                    real(mm(*x_mm)),
                    real(flip_y(page, y_mm + height_mm)),
                    real(mm(*width_mm)),
                    real(mm(*height_mm)),
                ],
            ));
            ops.push(Operation::new("S", vec![]));
        }
        DrawOp::Line {
            from,
            to,
            color,
            line_width_mm,
        } => {
            stroke_color(ops, *color);
            ops.push(Operation::new("w", vec![real(mm(*line_width_mm))]));
            ops.push(Operation::new(
                "m",
                vec![real(mm(from.0)), real(flip_y(page, from.1))],
            ));
            ops.push(Operation::new(
                "l",
                vec![real(mm(to.0)), real(flip_y(page, to.1))],
            ));
            ops.push(Operation::new("S", vec![]));
        }
        DrawOp::CenteredText {
            text,
            x_mm,
            y_mm,
            style,
        } => emit_text(ops, text, *x_mm, *y_mm, style, page),
    }
}

fn emit_text(
    ops: &mut Vec<Operation>,
    text: &str,
    x_mm: f32,
    y_mm: f32,
    style: &TextStyle,
    page: &PageGeometry,
) {
    let font = match style.weight {
        FontWeight::Normal => FONT_NORMAL,
        FontWeight::Bold => FONT_BOLD,
    };
    let width = text_width_pt(text, style.weight, style.size_pt);
    let x = mm(x_mm) - width / 2.0;

    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), real(style.size_pt)]));
    fill_color(ops, style.color);
    ops.push(Operation::new("Td", vec![real(x), real(flip_y(page, y_mm))]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(win_ansi_bytes(text), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}
