use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    /// Colors output when the attached terminal supports it.
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Never colors anything.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors the command word cyan when `is_known` accepts it and red
    /// otherwise; flags are yellow. Whitespace is kept as typed so the cursor
    /// position of the line editor stays valid.
    pub fn highlight_command(&self, input: &str, is_known: impl Fn(&str) -> bool) -> String {
        if !self.is_enabled() {
            return input.to_string();
        }

        let mut highlighted = String::with_capacity(input.len());
        let mut rest = input;
        let mut first = true;

        while !rest.is_empty() {
            let word_start = rest.len() - rest.trim_start().len();
            highlighted.push_str(&rest[..word_start]);
            rest = &rest[word_start..];
            if rest.is_empty() {
                break;
            }

            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_end];
            highlighted.push_str(&self.highlight_word(word, first, &is_known));
            rest = &rest[word_end..];
            first = false;
        }

        highlighted
    }

    fn highlight_word(&self, word: &str, is_command: bool, is_known: &impl Fn(&str) -> bool) -> String {
        if is_command {
            let color = if is_known(word) { Color::Cyan } else { Color::Red };
            let command_style = Style::builder().foreground(color).bold().build();
            word.style(command_style).to_string()
        } else if word.starts_with('-') {
            let flag_style = Style::builder().foreground(Color::Yellow).build();
            word.style(flag_style).to_string()
        } else {
            word.to_string()
        }
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.is_enabled() {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if !self.is_enabled() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}
