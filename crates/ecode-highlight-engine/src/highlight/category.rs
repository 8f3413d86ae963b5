use std::{fmt, str::FromStr};

use crate::error::HighlightError;

/// Highlighting category of a colorized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    String,
    Number,
    DataType,
    Constant,
    Function,
    Remark,
    SysCommand,
    SysCommandIgnore,
    FlowLine,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::String,
        Category::Number,
        Category::DataType,
        Category::Constant,
        Category::Function,
        Category::Remark,
        Category::SysCommand,
        Category::SysCommandIgnore,
        Category::FlowLine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::String => "string",
            Category::Number => "number",
            Category::DataType => "data-type",
            Category::Constant => "constant",
            Category::Function => "function",
            Category::Remark => "remark",
            Category::SysCommand => "sys-command",
            Category::SysCommandIgnore => "sys-command-ignore",
            Category::FlowLine => "flow-line",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| HighlightError::UnknownCategory(s.to_string()))
    }
}
