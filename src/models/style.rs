use serde::{Deserialize, Serialize};

/// One entry of the remote style catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOption {
    /// Identifier sent to the backend.
    pub name: String,
    /// Human-readable label.
    pub title: String,
}

/// An entry of the style selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The leading "no style" entry, whose value is the empty string.
    pub fn no_style(label: impl Into<String>) -> Self {
        Self::new("", label)
    }
}

impl From<&StyleOption> for SelectOption {
    fn from(style: &StyleOption) -> Self {
        Self::new(style.name.clone(), style.title.clone())
    }
}

/// Builds the full option list: the default entry followed by the catalog in order.
pub fn style_select_options(no_style_label: &str, styles: &[StyleOption]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::no_style(no_style_label))
        .chain(styles.iter().map(SelectOption::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ignores_extra_fields() {
        let body = r#"[
            {"name":"KANDINSKY","title":"Kandinsky","titleEn":"Kandinsky","image":"k.jpg"},
            {"name":"UHD","title":"Detailed photo"}
        ]"#;
        let styles: Vec<StyleOption> = serde_json::from_str(body).unwrap();
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[1].name, "UHD");
        assert_eq!(styles[1].title, "Detailed photo");
    }

    #[test]
    fn test_catalog_rejects_missing_name() {
        let body = r#"[{"title":"Anime"}]"#;
        assert!(serde_json::from_str::<Vec<StyleOption>>(body).is_err());
    }

    #[test]
    fn test_select_options_keep_catalog_order() {
        let styles = vec![
            StyleOption {
                name: "ANIME".into(),
                title: "Anime".into(),
            },
            StyleOption {
                name: "DEFAULT".into(),
                title: "Default".into(),
            },
        ];
        let options = style_select_options("Standard", &styles);
        assert_eq!(
            options,
            vec![
                SelectOption::new("", "Standard"),
                SelectOption::new("ANIME", "Anime"),
                SelectOption::new("DEFAULT", "Default"),
            ]
        );
    }
}
