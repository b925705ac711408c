use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub index: Style,
    pub title: Style,
    pub preview: Style,
    pub time: Style,
    pub editing: Style,
    pub link: Style,
    pub info: Style,
    pub success: Style,
    pub error: Style,
}

pub static NOTEZ_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    index: Style::new().yellow(),
    title: Style::new().bold(),
    preview: Style::new().color256(246),
    time: Style::new().color256(246).italic(),
    editing: Style::new().cyan(),
    link: Style::new().underlined(),
    info: Style::new().dim(),
    success: Style::new().green(),
    error: Style::new().red(),
});

/// Applies `style` when `use_color` is set, otherwise returns the plain text.
pub fn paint(style: &Style, text: &str, use_color: bool) -> String {
    style
        .clone()
        .force_styling(use_color)
        .apply_to(text)
        .to_string()
}
