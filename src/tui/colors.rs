use ratatui::style::Color;

pub fn color_for_language(language: Option<&str>) -> Color {
    match language {
        Some("Rust") => Color::LightRed,
        Some("Go") => Color::Cyan,
        Some("Python") => Color::Yellow,
        Some("JavaScript") => Color::LightYellow,
        Some("TypeScript") => Color::Blue,
        Some("Java" | "Kotlin" | "Scala") => Color::Red,
        Some("C" | "C++" | "C#" | "Objective-C") => Color::Magenta,
        Some("Ruby") => Color::LightMagenta,
        Some("PHP") => Color::LightBlue,
        Some("Swift") => Color::LightRed,
        Some("Shell" | "PowerShell") => Color::Green,
        Some("HTML" | "CSS" | "SCSS") => Color::LightGreen,
        Some("Elixir" | "Erlang") => Color::Magenta,
        Some("Haskell" | "OCaml" | "F#") => Color::LightCyan,
        Some("Lua" | "Vim Script") => Color::Blue,
        Some("Dart") => Color::Cyan,
        Some("Zig") => Color::Yellow,
        Some(_) => Color::White,
        None => Color::DarkGray,
    }
}

pub fn language_label(language: Option<&str>) -> &str {
    language.unwrap_or("-")
}
