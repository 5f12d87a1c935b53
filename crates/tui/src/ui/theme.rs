use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(140, 140, 140),
            border: Color::Rgb(70, 78, 86),
            accent: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(110, 190, 120),
            negative: Color::Rgb(220, 110, 100),
            error: Color::Rgb(200, 80, 80),
        }
    }
}
