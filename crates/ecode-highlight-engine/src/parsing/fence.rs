/// What a line looks like on its own, with respect to code fences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    /// ```` ```e ```` - starts a colorized block.
    Open,
    /// ```` ``` ```` - ends the current block.
    Close,
}

pub struct CodeFence;

impl CodeFence {
    pub const OPEN: &'static str = "```e";
    pub const CLOSE: &'static str = "```";

    /// Classifies a line (newline stripped or not). Surrounding whitespace is ignored.
    pub fn sig(line: &str) -> Option<FenceSig> {
        match line.trim() {
            Self::OPEN => Some(FenceSig::Open),
            Self::CLOSE => Some(FenceSig::Close),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_open_fence() {
        assert_eq!(CodeFence::sig("```e"), Some(FenceSig::Open));
        assert_eq!(CodeFence::sig("  ```e \n"), Some(FenceSig::Open));
    }

    #[test]
    fn detect_close_fence() {
        assert_eq!(CodeFence::sig("```"), Some(FenceSig::Close));
        assert_eq!(CodeFence::sig("\t```\r\n"), Some(FenceSig::Close));
    }

    #[test]
    fn other_languages_are_not_fences() {
        assert_eq!(CodeFence::sig("```rust"), None);
        assert_eq!(CodeFence::sig("```e extra"), None);
        assert_eq!(CodeFence::sig("hello"), None);
    }
}
