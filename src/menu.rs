use std::fmt;

// The status-bar host consumes plain text: status lines first, a `---`
// separator, then the dropdown menu, with per-line attributes after a `|`.
// Only the attributes this plugin actually emits are modeled.

#[derive(Debug, Default)]
pub struct Line {
    text: String,
    color: Option<String>,
    href: Option<String>,
    alternate: bool,
    dropdown: Option<bool>,
}

impl Line {
    fn new(text: &str) -> Self {
        Line {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn color(&mut self, color: &str) -> &mut Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn href(&mut self, href: &str) -> &mut Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn alternate(&mut self, alternate: bool) -> &mut Self {
        self.alternate = alternate;
        self
    }

    pub fn dropdown(&mut self, dropdown: bool) -> &mut Self {
        self.dropdown = Some(dropdown);
        self
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut attributes = Vec::new();
        if let Some(ref color) = self.color {
            attributes.push(format!("color={}", color));
        }
        if let Some(ref href) = self.href {
            attributes.push(format!("href={}", href));
        }
        if self.alternate {
            attributes.push("alternate=true".to_string());
        }
        if let Some(dropdown) = self.dropdown {
            attributes.push(format!("dropdown={}", dropdown));
        }
        if attributes.is_empty() {
            write!(f, "{}", self.text)
        } else {
            write!(f, "{} | {}", self.text, attributes.join(" "))
        }
    }
}

#[derive(Debug, Default)]
pub struct Plugin {
    status: Vec<Line>,
    menu: Vec<Line>,
}

impl Plugin {
    pub fn new() -> Self {
        Plugin::default()
    }

    /// Adds a line to the status-bar section, above the separator.
    pub fn status_line(&mut self, text: &str) -> &mut Line {
        self.status.push(Line::new(text));
        // just pushed, cannot be empty
        self.status.last_mut().unwrap()
    }

    /// Adds a line to the dropdown menu section.
    pub fn line(&mut self, text: &str) -> &mut Line {
        self.menu.push(Line::new(text));
        self.menu.last_mut().unwrap()
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.status {
            writeln!(f, "{}", line)?;
        }
        if !self.menu.is_empty() {
            writeln!(f, "---")?;
            for line in &self.menu {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_without_attributes() {
        let line = Line::new("Markets closed");
        assert_eq!("Markets closed", format!("{}", line));
    }

    #[test]
    fn test_line_attributes_follow_pipe() {
        let mut line = Line::new("EURUSD: 1.0832 +0.12%");
        line.color("green").dropdown(false);
        assert_eq!(
            "EURUSD: 1.0832 +0.12% | color=green dropdown=false",
            format!("{}", line)
        );
    }

    #[test]
    fn test_line_with_href_and_alternate() {
        let mut line = Line::new("detail");
        line.href("https://example.com?a=EURUSD").alternate(true);
        assert_eq!(
            "detail | href=https://example.com?a=EURUSD alternate=true",
            format!("{}", line)
        );
    }

    #[test]
    fn test_plugin_renders_separator_before_menu() {
        let mut plugin = Plugin::new();
        plugin.status_line("top").color("green");
        plugin.line("below");
        assert_eq!("top | color=green\n---\nbelow\n", format!("{}", plugin));
    }

    #[test]
    fn test_plugin_without_menu_has_no_separator() {
        let mut plugin = Plugin::new();
        plugin.status_line("Markets closed").dropdown(false);
        assert_eq!("Markets closed | dropdown=false\n", format!("{}", plugin));
    }
}
