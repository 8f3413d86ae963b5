/// What a leading `.command` token turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Block openers and variable/parameter declarations.
    Bracketed,
    /// Closers matching a bracketed block opener.
    Terminator,
    /// Program-unit declarations (`程序集`, `子程序`).
    FlowLine,
    /// Version and library-support declarations.
    FlowLineIgnore,
}

/// The fixed keyword sets of the language.
///
/// Kept as data so the colorizers never hardcode keywords into control flow.
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSets {
    /// Block-opening commands that may carry a parenthesized argument list.
    pub bracketed: Vec<String>,
    /// Variable and parameter declaration commands.
    pub declarations: Vec<String>,
    /// Block-closing commands that may carry a parenthesized argument list.
    pub terminators: Vec<String>,
    pub flow_lines: Vec<String>,
    pub flow_line_ignores: Vec<String>,
    pub data_types: Vec<String>,
}

impl KeywordSets {
    pub fn e_language() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        Self {
            bracketed: owned(&[
                "如果真",
                "如果",
                "判断开始",
                "计次循环首",
                "判断循环首",
                "变量循环首",
            ]),
            declarations: owned(&["程序集变量", "局部变量", "参数"]),
            terminators: owned(&[
                "如果真结束",
                "如果结束",
                "判断结束",
                "计次循环尾",
                "判断循环尾",
                "变量循环尾",
            ]),
            flow_lines: owned(&["程序集", "子程序"]),
            flow_line_ignores: owned(&["版本", "支持库"]),
            data_types: owned(&[
                "整数型",
                "文本型",
                "子程序指针",
                "逻辑型",
                "双精度小数型",
                "小数型",
                "长整数型",
                "短整数型",
                "字节型",
            ]),
        }
    }

    /// Classifies a command name (the leading `.` already stripped).
    pub fn classify(&self, name: &str) -> Option<CommandKind> {
        if contains(&self.bracketed, name) || contains(&self.declarations, name) {
            Some(CommandKind::Bracketed)
        } else if contains(&self.terminators, name) {
            Some(CommandKind::Terminator)
        } else if contains(&self.flow_lines, name) {
            Some(CommandKind::FlowLine)
        } else if contains(&self.flow_line_ignores, name) {
            Some(CommandKind::FlowLineIgnore)
        } else {
            None
        }
    }

    /// Commands that are written like calls (`如果真 (条件)`) and must not be
    /// colorized as functions.
    pub fn is_parenthesized_command(&self, name: &str) -> bool {
        contains(&self.bracketed, name) || contains(&self.terminators, name)
    }
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self::e_language()
    }
}

fn contains(set: &[String], name: &str) -> bool {
    set.iter().any(|k| k == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("如果真", Some(CommandKind::Bracketed))]
    #[case("局部变量", Some(CommandKind::Bracketed))]
    #[case("参数", Some(CommandKind::Bracketed))]
    #[case("计次循环尾", Some(CommandKind::Terminator))]
    #[case("子程序", Some(CommandKind::FlowLine))]
    #[case("程序集", Some(CommandKind::FlowLine))]
    #[case("版本", Some(CommandKind::FlowLineIgnore))]
    #[case("支持库", Some(CommandKind::FlowLineIgnore))]
    #[case("信息框", None)]
    #[case("", None)]
    fn classifies_command_names(#[case] name: &str, #[case] expected: Option<CommandKind>) {
        assert_eq!(KeywordSets::e_language().classify(name), expected);
    }

    #[test]
    fn declarations_are_not_parenthesized_commands() {
        let keywords = KeywordSets::e_language();
        assert!(keywords.is_parenthesized_command("判断循环首"));
        assert!(keywords.is_parenthesized_command("如果结束"));
        assert!(!keywords.is_parenthesized_command("局部变量"));
        assert!(!keywords.is_parenthesized_command("子程序"));
    }
}
