use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn fighter_name(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn method(&self, text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn url(&self, text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn rating(&self, text: &str) -> ColoredString {
        text.magenta()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
