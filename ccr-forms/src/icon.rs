//! Icon picker for the category form.

/// Shown when the icon input is empty.
pub const DEFAULT_ICON: &str = "fas fa-tag";

/// Offered when the page does not list its own icon buttons.
pub const DEFAULT_CHOICES: &[&str] = &[
    "fas fa-tag",
    "fas fa-utensils",
    "fas fa-shopping-cart",
    "fas fa-gas-pump",
    "fas fa-plane",
    "fas fa-hotel",
    "fas fa-film",
    "fas fa-bus",
    "fas fa-shopping-bag",
    "fas fa-pills",
    "fas fa-bolt",
    "fas fa-wifi",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPicker {
    value: String,
    choices: Vec<String>,
}

impl IconPicker {
    pub fn new(value: impl Into<String>, choices: Vec<String>) -> Self {
        let choices = if choices.is_empty() {
            DEFAULT_CHOICES.iter().map(|c| c.to_string()).collect()
        } else {
            choices
        };
        Self {
            value: value.into(),
            choices,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Class list for the preview `<i>`.
    pub fn preview_class(&self) -> &str {
        if self.value.is_empty() {
            DEFAULT_ICON
        } else {
            &self.value
        }
    }

    /// Typed into the icon input.
    pub fn on_input(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Clicked an icon button.
    pub fn select(&mut self, icon: &str) {
        self.value = icon.to_string();
    }

    pub fn is_selected(&self, icon: &str) -> bool {
        self.value == icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_previews_default() {
        let mut picker = IconPicker::new("", Vec::new());
        assert_eq!(picker.preview_class(), DEFAULT_ICON);
        picker.on_input("fas fa-plane");
        assert_eq!(picker.preview_class(), "fas fa-plane");
        picker.on_input("");
        assert_eq!(picker.preview_class(), DEFAULT_ICON);
    }

    #[test]
    fn button_sets_input_and_preview() {
        let mut picker = IconPicker::new(
            "fas fa-tag",
            vec!["fas fa-film".to_string(), "fas fa-bus".to_string()],
        );
        assert_eq!(picker.choices().len(), 2);
        picker.select("fas fa-bus");
        assert_eq!(picker.value(), "fas fa-bus");
        assert_eq!(picker.preview_class(), "fas fa-bus");
        assert!(picker.is_selected("fas fa-bus"));
    }

    #[test]
    fn falls_back_to_default_choices() {
        let picker = IconPicker::new("", Vec::new());
        assert_eq!(picker.choices().len(), DEFAULT_CHOICES.len());
    }
}
