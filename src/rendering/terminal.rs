//! Renderer for colourizing CL source in a terminal

use owo_colors::OwoColorize;

use super::renderer::{Render, Syntax};

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Label => content // entity.name.tag - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(173, 127, 168))
                .bold()
                .to_string(),
            Syntax::Command => content // entity.name.function - #3465a4 (blue) bold
                .color(owo_colors::Rgb(52, 101, 164))
                .bold()
                .to_string(),
            Syntax::Keyword => content // keyword.other - #75507b (plum) bold
                .color(owo_colors::Rgb(117, 80, 123))
                .bold()
                .to_string(),
            Syntax::Variable => content // variable.parameter - #729fcf (light blue) bold
                .color(owo_colors::Rgb(114, 159, 207))
                .bold()
                .to_string(),
            Syntax::Symbolic => content // constant.language - #8f5902 (brown) bold
                .color(owo_colors::Rgb(143, 89, 2))
                .bold()
                .to_string(),
            Syntax::Function => content // support.function - #3465a4 (blue)
                .color(owo_colors::Rgb(52, 101, 164))
                .to_string(),
            Syntax::String => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(78, 154, 6))
                .bold()
                .to_string(),
            Syntax::Numeric => content // constant.numeric - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(173, 127, 168))
                .bold()
                .to_string(),
            Syntax::Structure => content // punctuation - #999999 (grey)
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Continuation => content // keyword.operator - #cc0000 (red) bold
                .color(owo_colors::Rgb(204, 0, 0))
                .bold()
                .to_string(),
            Syntax::Comment => content // comment - #888a85 (grey) italic
                .color(owo_colors::Rgb(136, 138, 133))
                .italic()
                .to_string(),
        }
    }
}
