//! Certificate page composition.
//!
//! Turns a [`FormState`] into an ordered list of drawing primitives. All
//! coordinates are millimetres from the top-left corner of the page; text is
//! positioned by its baseline and centered horizontally on `x_mm`.

use super::common::issue_date_line;
use super::form::FormState;

pub const TITLE: &str = "CERTIFICATE OF COMPLETION";
pub const COURSE_NAME: &str = "Data Literacy for University Students";
pub const PROGRAM_NAME: &str = "DATA & CLOUD";
pub const CERTIFY_LINE: &str = "This is to certify that";
pub const COMPLETION_LINE: &str = "has successfully completed the course";
pub const ORGANIZATION: &str = "Korean Process Innovation Association";
pub const FOUNDER: &str = "Founder Kang Seung-Won";

/// A4 in landscape orientation.
pub const A4_LANDSCAPE: PageGeometry = PageGeometry {
    width_mm: 297.0,
    height_mm: 210.0,
};

const BORDER_INSET_MM: f32 = 10.0;
const BORDER_WIDTH_MM: f32 = 2.0;
const DIVIDER_INSET_MM: f32 = 30.0;
const DIVIDER_WIDTH_MM: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageGeometry {
    pub fn center_x(&self) -> f32 {
        self.width_mm / 2.0
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const BACKGROUND: Color = Color(245, 245, 245);
    pub const BORDER: Color = Color(100, 100, 100);
    pub const DIVIDER: Color = Color(150, 150, 150);
    pub const MUTED: Color = Color(50, 50, 50);
    pub const ACCENT: Color = Color(0, 0, 139);

    /// Components scaled to `0.0..=1.0`.
    pub fn unit(&self) -> [f32; 3] {
        [
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Font, size and color of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub weight: FontWeight,
    pub size_pt: f32,
    pub color: Color,
}

pub const TITLE_STYLE: TextStyle = TextStyle {
    weight: FontWeight::Bold,
    size_pt: 28.0,
    color: Color::BLACK,
};
pub const SUBTITLE_STYLE: TextStyle = TextStyle {
    weight: FontWeight::Bold,
    size_pt: 18.0,
    color: Color::MUTED,
};
pub const NAME_STYLE: TextStyle = TextStyle {
    weight: FontWeight::Bold,
    size_pt: 20.0,
    color: Color::ACCENT,
};
pub const BODY_STYLE: TextStyle = TextStyle {
    weight: FontWeight::Normal,
    size_pt: 12.0,
    color: Color::BLACK,
};
pub const DATE_STYLE: TextStyle = TextStyle {
    weight: FontWeight::Normal,
    size_pt: 11.0,
    color: Color::MUTED,
};
pub const FOOTER_STYLE: TextStyle = TextStyle {
    weight: FontWeight::Normal,
    size_pt: 10.0,
    color: Color::BLACK,
};

/// One drawing primitive handed to the rendering engine.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x_mm: f32,
        y_mm: f32,
        width_mm: f32,
        height_mm: f32,
        color: Color,
    },
    StrokeRect {
        x_mm: f32,
        y_mm: f32,
        width_mm: f32,
        height_mm: f32,
        color: Color,
        line_width_mm: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        line_width_mm: f32,
    },
    CenteredText {
        text: String,
        x_mm: f32,
        y_mm: f32,
        style: TextStyle,
    },
}

/// The ephemeral certificate: page geometry plus ordered primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateDocument {
    pub page: PageGeometry,
    pub ops: Vec<DrawOp>,
}

impl CertificateDocument {
    /// Lay out the certificate for `state` on an A4 landscape page.
    pub fn compose(state: &FormState) -> Self {
        let page = A4_LANDSCAPE;
        let cx = page.center_x();
        let text = |text: &str, y_mm: f32, style: TextStyle| DrawOp::CenteredText {
            text: text.to_string(),
            x_mm: cx,
            y_mm,
            style,
        };

        let ops = vec![
            DrawOp::FillRect {
                x_mm: 0.0,
                y_mm: 0.0,
                width_mm: page.width_mm,
                height_mm: page.height_mm,
                color: Color::BACKGROUND,
            },
            DrawOp::StrokeRect {
                x_mm: BORDER_INSET_MM,
                y_mm: BORDER_INSET_MM,
                width_mm: page.width_mm - 2.0 * BORDER_INSET_MM,
                height_mm: page.height_mm - 2.0 * BORDER_INSET_MM,
                color: Color::BORDER,
                line_width_mm: BORDER_WIDTH_MM,
            },
            text(TITLE, 40.0, TITLE_STYLE),
            text(COURSE_NAME, 55.0, SUBTITLE_STYLE),
            text(PROGRAM_NAME, 65.0, SUBTITLE_STYLE),
            DrawOp::Line {
                from: (DIVIDER_INSET_MM, 75.0),
                to: (page.width_mm - DIVIDER_INSET_MM, 75.0),
                color: Color::DIVIDER,
                line_width_mm: DIVIDER_WIDTH_MM,
            },
            text(CERTIFY_LINE, 90.0, BODY_STYLE),
            text(&state.participant_name, 105.0, NAME_STYLE),
            text(COMPLETION_LINE, 120.0, BODY_STYLE),
            text(&issue_date_line(&state.issue_date), 140.0, DATE_STYLE),
            text(ORGANIZATION, 160.0, FOOTER_STYLE),
            text(FOUNDER, 168.0, FOOTER_STYLE),
        ];

        Self { page, ops }
    }

    /// Every text run in drawing order.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::CenteredText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_lines().any(|line| line == needle)
    }
}
