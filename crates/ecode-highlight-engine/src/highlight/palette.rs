use crate::error::HighlightError;

use super::category::Category;

/// Colour table keyed by [`Category`].
///
/// Built once at startup (optionally with overrides from user config) and
/// shared by reference with every renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [String; Category::ALL.len()],
}

impl Palette {
    pub fn color(&self, category: Category) -> &str {
        &self.colors[category.index()]
    }

    /// Overrides one category's colour.
    ///
    /// Accepts `#RRGGBB` or an alphabetic colour name such as `gray`.
    pub fn set(&mut self, category: Category, color: &str) -> Result<(), HighlightError> {
        if !is_valid_color(color) {
            return Err(HighlightError::InvalidColor(color.to_string()));
        }
        self.colors[category.index()] = color.to_string();
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors: [String; Category::ALL.len()] = Default::default();
        for category in Category::ALL {
            colors[category.index()] = default_color(category).to_string();
        }
        Self { colors }
    }
}

fn default_color(category: Category) -> &'static str {
    match category {
        Category::String => "#A31515",
        Category::Number => "#098658",
        Category::DataType => "#DECB6B",
        Category::Constant => "#0070C1",
        Category::Function => "#795E26",
        Category::Remark => "#008000",
        Category::SysCommand => "#0000FF",
        Category::SysCommandIgnore => "#808080",
        Category::FlowLine => "#000080",
    }
}

fn is_valid_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_six_digit_hex() {
        let palette = Palette::default();
        for category in Category::ALL {
            let color = palette.color(category);
            assert!(color.starts_with('#') && color.len() == 7, "{category}: {color}");
        }
    }

    #[rstest]
    #[case("#FFAA00")]
    #[case("#0a0b0c")]
    #[case("gray")]
    fn accepts_hex_and_named_colors(#[case] color: &str) {
        let mut palette = Palette::default();
        palette.set(Category::Remark, color).unwrap();
        assert_eq!(palette.color(Category::Remark), color);
    }

    #[rstest]
    #[case("#FFF")]
    #[case("#GGGGGG")]
    #[case("")]
    #[case("red'><script>")]
    fn rejects_malformed_colors(#[case] color: &str) {
        let mut palette = Palette::default();
        assert!(palette.set(Category::Number, color).is_err());
        assert_eq!(palette.color(Category::Number), "#098658");
    }
}
