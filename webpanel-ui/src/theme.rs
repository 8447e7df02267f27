//! Theme
//!
//! Two mutually exclusive visual modes, encoded as a class on `<body>`.

/// Visual theme of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class put on `<body>` while this theme is active
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button label: always the theme a click switches *to*
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Dark",
            Theme::Dark => "Light",
        }
    }

    /// Theme encoded by a body class attribute. Anything without
    /// `dark-theme` counts as light.
    pub fn from_class_list(classes: &str) -> Self {
        if classes.split_whitespace().any(|c| c == Theme::Dark.class_name()) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Theme the document currently shows
    pub fn from_body() -> Self {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| Self::from_class_list(&body.class_name()))
            .unwrap_or_default()
    }
}

/// Put exactly one theme class on `<body>`
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let classes = body.class_list();
    let _ = classes.remove_1(theme.toggled().class_name());
    let _ = classes.add_1(theme.class_name());

    web_sys::console::log_1(&format!("current class name: {}", body.class_name()).into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_clicks_from_light() {
        let theme = Theme::default();
        assert_eq!(theme.label(), "Dark");

        let theme = theme.toggled();
        assert_eq!(theme.class_name(), "dark-theme");
        assert_eq!(theme.label(), "Light");

        let theme = theme.toggled();
        assert_eq!(theme.class_name(), "light-theme");
        assert_eq!(theme.label(), "Dark");
    }

    #[test]
    fn test_label_names_inactive_theme() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.label().to_lowercase(), theme.toggled().class_name().trim_end_matches("-theme"));
        }
    }

    #[test]
    fn test_clicks_alternate_strictly() {
        let mut theme = Theme::Light;
        for click in 1..=10 {
            theme = theme.toggled();
            let expected = if click % 2 == 1 { Theme::Dark } else { Theme::Light };
            assert_eq!(theme, expected);
        }
    }

    #[test]
    fn test_from_class_list() {
        assert_eq!(Theme::from_class_list(""), Theme::Light);
        assert_eq!(Theme::from_class_list("light-theme"), Theme::Light);
        assert_eq!(Theme::from_class_list("dark-theme"), Theme::Dark);
        assert_eq!(Theme::from_class_list("page dark-theme"), Theme::Dark);
        assert_eq!(Theme::from_class_list("dark-themed"), Theme::Light);
    }
}
