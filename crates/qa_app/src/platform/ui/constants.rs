use iced::Color;

pub const WINDOW_TITLE: &str = "Web Content Q&A Tool";
pub const TAGLINE: &str = "Ask questions about web content";

pub const URL_PLACEHOLDER: &str = "Enter URL (e.g., https://example.com)";
pub const QUESTION_PLACEHOLDER: &str = "Enter your question about the extracted content";

pub const TITLE_SIZE: u16 = 24;
pub const HEADING_SIZE: u16 = 18;
pub const BODY_SIZE: u16 = 15;
pub const SMALL_SIZE: u16 = 13;

pub const PAGE_PADDING: u16 = 16;
pub const SECTION_SPACING: u16 = 14;
pub const INNER_SPACING: u16 = 8;

pub const TIER_HIGH: Color = Color {
    r: 0.16,
    g: 0.65,
    b: 0.27,
    a: 1.0,
};
pub const TIER_MEDIUM: Color = Color {
    r: 0.96,
    g: 0.65,
    b: 0.14,
    a: 1.0,
};
pub const TIER_LOW: Color = Color {
    r: 0.86,
    g: 0.21,
    b: 0.27,
    a: 1.0,
};
pub const MUTED: Color = Color {
    r: 0.55,
    g: 0.58,
    b: 0.65,
    a: 1.0,
};
