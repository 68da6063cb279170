use colored::Color;

pub const TIMESTAMP: Color = Color::BrightBlack;

pub mod levels {
    use colored::Color;

    pub const DEBUG: Color = Color::BrightMagenta;
    pub const INFO: Color = Color::Blue;
    pub const WARN: Color = Color::Yellow;
    pub const ERROR: Color = Color::Magenta;
    pub const FATAL: Color = Color::Red;
}

const RESET: &str = "\x1b[0m";

/// Wraps `text` in the foreground sequence of `color`.
///
/// Unlike `colored::Colorize`, this never looks at the terminal or the environment.
#[extend::ext(pub, name = Paint)]
impl str {
    fn paint(&self, color: Color) -> String {
        format!("\x1b[{}m{}{RESET}", color.to_fg_str(), self)
    }
}
