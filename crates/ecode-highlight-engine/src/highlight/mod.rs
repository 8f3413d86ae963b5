//! # Highlighting
//!
//! Turns a document into colorized markup.
//!
//! The document is partitioned into prose and fenced blocks (see
//! [`crate::parsing`]). Each content line of a block becomes a [`StyledLine`]
//! and runs through an ordered pipeline:
//!
//! 1. the text from the comment marker `'` on is claimed as a remark
//! 2. colorizer passes over the unclaimed gaps: quotes, numbers, data types,
//!    constants, function calls (parameter lines get data types only)
//! 3. a leading `.command` is classified; declaration comments are marked and
//!    the command itself is coloured
//!
//! Lines are then wrapped with their indentation guides and serialized. The
//! markup strips back to the exact document text, so character offsets in the
//! rendered view equal offsets in the document.

pub mod category;
pub mod chars;
pub mod classify;
pub mod declaration;
pub mod guides;
pub mod keywords;
pub mod markup;
pub mod page;
pub mod palette;
pub mod quotes;
pub mod rendered;
pub mod styled;
pub mod tokens;

use std::ops::Range;

use xi_rope::Rope;

use crate::{
    error::HighlightError,
    parsing::{
        Part, partition,
        rope::{LineRef, Span, lines_with_spans},
    },
};

pub use category::Category;
pub use declaration::{Declaration, DeclarationGrammar};
pub use keywords::{CommandKind, KeywordSets};
pub use page::{PageStyle, standalone_page};
pub use palette::Palette;
pub use rendered::{LineKind, Rendered, RenderedLine};
pub use styled::{ColorSpan, Segment, StyledLine};

use quotes::QuoteScanner;
use tokens::{ConstantColorizer, DataTypeColorizer, FunctionColorizer, NumberColorizer};

/// One lexical pass over the unclaimed gaps of a line.
pub trait Colorizer {
    fn category(&self) -> Category;

    /// Ranges to claim, relative to `gap`.
    fn find(&self, gap: &str) -> Vec<Range<usize>>;

    fn colorize(&self, line: &mut StyledLine) {
        line.colorize_gaps(self.category(), |gap| self.find(gap));
    }
}

/// The colorizer pipeline, built once and reused for every render.
#[derive(Debug, Clone)]
pub struct Highlighter {
    keywords: KeywordSets,
    palette: Palette,
    quotes: QuoteScanner,
    numbers: NumberColorizer,
    data_types: DataTypeColorizer,
    constants: ConstantColorizer,
    functions: FunctionColorizer,
    subroutine: DeclarationGrammar,
    parameter: DeclarationGrammar,
}

impl Highlighter {
    pub fn new(keywords: KeywordSets, palette: Palette) -> Result<Self, HighlightError> {
        Ok(Self {
            data_types: DataTypeColorizer::new(&keywords)?,
            functions: FunctionColorizer::new(&keywords),
            subroutine: DeclarationGrammar::subroutine()?,
            parameter: DeclarationGrammar::parameter()?,
            quotes: QuoteScanner::new(),
            numbers: NumberColorizer,
            constants: ConstantColorizer,
            keywords,
            palette,
        })
    }

    /// The built-in keyword sets with the default palette.
    pub fn e_language() -> Result<Self, HighlightError> {
        Self::new(KeywordSets::e_language(), Palette::default())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn keywords(&self) -> &KeywordSets {
        &self.keywords
    }

    /// Colorizes one code line (no trailing newline).
    pub fn highlight_line(&self, text: &str) -> StyledLine {
        let mut line = StyledLine::new(text);
        let code_len = classify::comment_start(text).unwrap_or(text.len());
        line.claim(Span::new(code_len, text.len()), Category::Remark);

        if classify::is_parameter_line(text) {
            self.data_types.colorize(&mut line);
        } else {
            let passes: [&dyn Colorizer; 5] = [
                &self.quotes,
                &self.numbers,
                &self.data_types,
                &self.constants,
                &self.functions,
            ];
            for pass in passes {
                pass.colorize(&mut line);
            }
        }

        let code = &text[..code_len];
        if let Some(command) = classify::leading_command(code, &self.keywords) {
            match command.kind {
                CommandKind::Bracketed => {
                    self.parameter.mark_comment(&mut line, code_len);
                    line.overwrite(command.span, Category::SysCommand);
                }
                CommandKind::Terminator => {
                    line.overwrite(command.span, Category::SysCommandIgnore);
                }
                CommandKind::FlowLine => {
                    self.subroutine.mark_comment(&mut line, code_len);
                    line.overwrite(command.span, Category::FlowLine);
                }
                CommandKind::FlowLineIgnore => {
                    line.retain(|s| s.category == Category::Remark);
                    line.overwrite(command.span, Category::SysCommandIgnore);
                }
            }
        }

        line
    }

    /// Renders a whole document.
    pub fn render(&self, document: &str) -> Rendered {
        let rope = Rope::from(document);
        let mut lines = lines_with_spans(&rope).peekable();
        let mut out = Vec::new();

        for part in partition(&rope) {
            match part {
                Part::Prose(span) => {
                    while let Some(l) = lines.next_if(|l| l.span.end <= span.end) {
                        out.push(plain_line(LineKind::Prose, &l));
                    }
                }
                Part::Fenced(block) => {
                    if let Some(l) = lines.next_if(|l| l.span.end <= block.open.end) {
                        out.push(plain_line(LineKind::Fence, &l));
                    }
                    let mut content = vec![];
                    while let Some(l) = lines.next_if(|l| l.span.end <= block.content.end) {
                        content.push(l);
                    }
                    out.extend(self.render_block(&content));
                    if let Some(l) = lines.next_if(|l| l.span.end <= block.close.end) {
                        out.push(plain_line(LineKind::Fence, &l));
                    }
                }
            }
        }

        let markup = markup::to_markup(&out, &self.palette);
        Rendered::new(out, markup)
    }

    pub fn render_markup(&self, document: &str) -> String {
        self.render(document).into_markup()
    }

    fn render_block(&self, content: &[LineRef]) -> Vec<RenderedLine> {
        let texts: Vec<&str> = content.iter().map(LineRef::content).collect();
        let levels = guides::guide_levels(&texts);

        content
            .iter()
            .zip(levels)
            .map(|(l, guides)| RenderedLine {
                kind: LineKind::Code { guides },
                line: self.highlight_line(l.content()),
                newline: l.has_newline(),
            })
            .collect()
    }
}

fn plain_line(kind: LineKind, l: &LineRef) -> RenderedLine {
    RenderedLine {
        kind,
        line: StyledLine::new(l.content()),
        newline: l.has_newline(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::strip_markup;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn highlighter() -> Highlighter {
        Highlighter::e_language().unwrap()
    }

    fn spans_of(line: &StyledLine) -> Vec<(Category, &str)> {
        line.spans()
            .iter()
            .map(|s| (s.category, &line.text()[s.span.range()]))
            .collect()
    }

    #[test]
    fn declaration_with_number() {
        let line = highlighter().highlight_line("整数型 变量 = 100");
        assert_eq!(
            spans_of(&line),
            vec![(Category::DataType, "整数型 "), (Category::Number, "100")]
        );
    }

    #[test]
    fn subroutine_comment_and_flow_line() {
        let line = highlighter().highlight_line(".子程序 测试, , , 这是注释");
        assert_eq!(
            spans_of(&line),
            vec![(Category::FlowLine, ".子程序"), (Category::Remark, "这是注释")]
        );
    }

    #[test]
    fn number_inside_string_is_not_separate() {
        let line = highlighter().highlight_line("“字符串内容100”");
        assert_eq!(spans_of(&line), vec![(Category::String, "“字符串内容100”")]);
    }

    #[test]
    fn comment_claims_rest_of_line() {
        let line = highlighter().highlight_line("a = f(1) ' f(2) “x”");
        assert_eq!(
            spans_of(&line),
            vec![
                (Category::Function, "f"),
                (Category::Number, "1"),
                (Category::Remark, "' f(2) “x”"),
            ]
        );
    }

    #[test]
    fn parameter_line_gets_data_types_and_comment_only() {
        let line = highlighter().highlight_line("    .参数 次数, 整数型, , 循环 10 次");
        assert_eq!(
            spans_of(&line),
            vec![
                (Category::SysCommand, ".参数"),
                (Category::DataType, " 整数型"),
                (Category::Remark, "循环 10 次"),
            ]
        );
    }

    #[rstest]
    #[case(".参数 甲, 整数型, 10")]
    #[case(".参数 甲, 文本型, “x”")]
    #[case(".参数 甲, 整数型, #真 取值(1)")]
    fn parameter_line_skips_lexical_tokens(#[case] text: &str) {
        let line = highlighter().highlight_line(text);
        let data_type = &text[text.find(',').unwrap() + 1..text.rfind(',').unwrap()];
        assert_eq!(
            spans_of(&line),
            vec![(Category::SysCommand, ".参数"), (Category::DataType, data_type)]
        );
    }

    #[rstest]
    #[case("    .如果真 (a ＞ 1)", vec![(Category::SysCommand, ".如果真"), (Category::Number, "1")])]
    #[case("    .如果真结束", vec![(Category::SysCommandIgnore, ".如果真结束")])]
    #[case(".计次循环首 (10, )", vec![(Category::SysCommand, ".计次循环首"), (Category::Number, "10")])]
    #[case(".局部变量 名字, 文本型", vec![(Category::SysCommand, ".局部变量"), (Category::DataType, " 文本型")])]
    #[case(".程序集 窗口程序集_启动窗口", vec![(Category::FlowLine, ".程序集")])]
    #[case(".版本 2", vec![(Category::SysCommandIgnore, ".版本")])]
    #[case(".支持库 krnln ' 核心库", vec![(Category::SysCommandIgnore, ".支持库"), (Category::Remark, "' 核心库")])]
    fn leading_commands(#[case] text: &str, #[case] expected: Vec<(Category, &str)>) {
        assert_eq!(spans_of(&highlighter().highlight_line(text)), expected);
    }

    #[test]
    fn call_before_command_keyword_is_not_a_function() {
        let line = highlighter().highlight_line(".判断循环首(真)");
        assert_eq!(spans_of(&line), vec![(Category::SysCommand, ".判断循环首")]);
    }

    #[test]
    fn render_keeps_fences_and_prose() {
        let document = "说明 <b>\n```e\n.版本 2\n```\n尾";
        let rendered = highlighter().render(document);

        let kinds: Vec<LineKind> = rendered.lines().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Prose,
                LineKind::Fence,
                LineKind::Code { guides: 0 },
                LineKind::Fence,
                LineKind::Prose,
            ]
        );
        assert_eq!(rendered.text(), document);
        assert_eq!(
            rendered.markup(),
            "说明 &lt;b&gt;\n```e\n<div style=\"position:relative\"><span style='color:#808080'>.版本</span> 2\n</div>```\n尾"
        );
    }

    #[test]
    fn unterminated_fence_is_prose() {
        let rendered = highlighter().render("```e\n整数型 a\n");
        assert!(rendered.lines().iter().all(|l| l.kind == LineKind::Prose));
        assert_eq!(rendered.markup(), "```e\n整数型 a\n");
    }

    #[test]
    fn whitespace_line_between_nested_lines_gets_guides() {
        let rendered = highlighter().render("```e\n        a = 1\n\n        b = 2\n```\n");
        let guides: Vec<LineKind> = rendered.lines()[1..4].iter().map(|l| l.kind).collect();
        assert_eq!(guides, vec![LineKind::Code { guides: 2 }; 3]);
        assert!(rendered.markup().contains(
            "<div style=\"position:relative\"><div class=\"indent-guide\" style=\"left:0.5em\"></div><div class=\"indent-guide\" style=\"left:3em\"></div>\n</div>"
        ));
    }

    #[test]
    fn stripped_markup_is_the_document() {
        let document = "前言 & 'x'\n```e\n.子程序 取值, 文本型, , 返回 <结果>\n    信息框 (“a&b” + #常量, 0, )\n```\n";
        let markup = highlighter().render_markup(document);
        assert_eq!(strip_markup(&markup), document);
    }

    #[test]
    fn custom_palette_is_used() {
        let mut palette = Palette::default();
        palette.set(Category::Number, "red").unwrap();
        let highlighter = Highlighter::new(KeywordSets::e_language(), palette).unwrap();
        let markup = highlighter.render_markup("```e\n1\n```");
        assert!(markup.contains("<span style='color:red'>1</span>"));
    }
}
