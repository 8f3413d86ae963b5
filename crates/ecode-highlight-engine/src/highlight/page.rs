//! Standalone HTML page around rendered markup.

/// Display settings for a standalone page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStyle {
    pub dark: bool,
    pub font_size_px: u16,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            dark: false,
            font_size_px: 14,
        }
    }
}

/// Wraps `markup` in a complete document with the surface and guide styles.
pub fn standalone_page(markup: &str, style: &PageStyle) -> String {
    let (background, foreground, guide) = if style.dark {
        ("#1E1E1E", "#D4D4D4", "rgba(255,255,255,0.15)")
    } else {
        ("#FFFFFF", "#1F1F1F", "rgba(0,0,0,0.12)")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
body {{ margin: 0; background-color: {background}; }}
.highlight {{
  padding: 12px;
  color: {foreground};
  font-family: 'Consola', 'Courier New', Courier, monospace;
  font-size: {size}px;
  white-space: pre-wrap;
}}
.indent-guide {{
  position: absolute;
  top: 0;
  bottom: 0;
  border-left: 1px solid {guide};
}}
</style>
</head>
<body>
<div class="highlight">{markup}</div>
</body>
</html>
"#,
        size = style.font_size_px,
    )
}
