//! Row colors for each match category

use crossterm::style::Color;

use crate::deduce::MatchCategory;

/// Background color for a row classified as `category`
pub fn category_color(category: MatchCategory) -> Color {
    match category {
        MatchCategory::Exact => Color::Rgb { r: 0x00, g: 0xff, b: 0x80 },        // Green
        MatchCategory::TargetHigher => Color::Rgb { r: 0x00, g: 0xf0, b: 0xff }, // Cyan
        MatchCategory::TargetLower => Color::Rgb { r: 0xff, g: 0x80, b: 0x00 },  // Orange
        MatchCategory::NoMatch => Color::Rgb { r: 0xcc, g: 0xcc, b: 0xcc },      // Grey
        MatchCategory::ByMachine => Color::Rgb { r: 0xe6, g: 0x99, b: 0xff },    // Lilac
        MatchCategory::ByEgg => Color::Rgb { r: 0xff, g: 0x99, b: 0xb3 },        // Pink
        MatchCategory::ByTutor => Color::Rgb { r: 0xff, g: 0x99, b: 0x99 },      // Salmon
    }
}

/// Text drawn on top of category backgrounds
pub const ROW_TEXT: Color = Color::Black;
