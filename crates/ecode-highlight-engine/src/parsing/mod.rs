//! # Document Partitioning
//!
//! Splits a document into an ordered sequence of prose and fenced parts.
//!
//! - **`fence`**: `CodeFence` recognizes opening (```` ```e ````) and closing
//!   (```` ``` ````) fence lines
//! - **`builder`**: `PartitionBuilder` state machine fed one line at a time
//! - **`types`**: `Part` and `FencedBlock`
//! - **`rope`**: line iteration with byte spans over an `xi_rope::Rope`
//!
//! ## Key Invariants
//!
//! - The partition is total: part spans are contiguous, start at 0 and end at
//!   the document length, so slicing every part in order reproduces the document
//! - Fence lines belong to their block; only the content span is colorized

pub mod builder;
pub mod fence;
pub mod rope;
pub mod types;

use xi_rope::Rope;

pub use builder::PartitionBuilder;
pub use fence::{CodeFence, FenceSig};
pub use types::{FencedBlock, Part};

use rope::lines_with_spans;

pub fn partition(rope: &Rope) -> Vec<Part> {
    let mut builder = PartitionBuilder::new();

    for lr in lines_with_spans(rope) {
        builder.push(&lr);
    }

    let parts = builder.finish(rope.len());
    log::debug!("partitioned {} bytes into {} parts", rope.len(), parts.len());
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rope::{Span, slice_to_string};
    use pretty_assertions::assert_eq;

    fn parts_of(text: &str) -> (Rope, Vec<Part>) {
        let rope = Rope::from(text);
        let parts = partition(&rope);
        (rope, parts)
    }

    #[test]
    fn empty_document_has_no_parts() {
        let (_, parts) = parts_of("");
        assert!(parts.is_empty());
    }

    #[test]
    fn prose_only_document_is_one_part() {
        let (_, parts) = parts_of("just words\nand more\n");
        assert_eq!(parts, vec![Part::Prose(Span::new(0, 20))]);
    }

    #[test]
    fn fenced_block_between_prose() {
        let text = "intro\n```e\n变量 = 1\n```\noutro";
        let (rope, parts) = parts_of(text);

        assert_eq!(parts.len(), 3);
        assert_eq!(slice_to_string(&rope, parts[0].span()), "intro\n");
        let Part::Fenced(block) = parts[1] else {
            panic!("expected fenced block, got {:?}", parts[1]);
        };
        assert_eq!(slice_to_string(&rope, block.open), "```e\n");
        assert_eq!(slice_to_string(&rope, block.content), "变量 = 1\n");
        assert_eq!(slice_to_string(&rope, block.close), "```\n");
        assert_eq!(slice_to_string(&rope, parts[2].span()), "outro");
    }

    #[test]
    fn fences_ignore_surrounding_whitespace() {
        let (_, parts) = parts_of("  ```e  \na\n\t```\n");
        assert_eq!(parts.len(), 1);
        assert!(matches!(parts[0], Part::Fenced(_)));
    }

    #[test]
    fn unterminated_fence_is_prose() {
        let text = "a\n```e\n.版本 2\n";
        let (_, parts) = parts_of(text);
        assert_eq!(parts, vec![Part::Prose(Span::new(0, text.len()))]);
    }

    #[test]
    fn empty_fenced_block() {
        let (_, parts) = parts_of("```e\n```");
        let Part::Fenced(block) = parts[0] else {
            panic!("expected fenced block");
        };
        assert!(block.content.is_empty());
        assert_eq!(block.close, Span::new(5, 8));
    }

    #[test]
    fn nested_open_marker_is_content() {
        let text = "```e\n```e\n```\n";
        let (rope, parts) = parts_of(text);
        assert_eq!(parts.len(), 1);
        let Part::Fenced(block) = parts[0] else {
            panic!("expected fenced block");
        };
        assert_eq!(slice_to_string(&rope, block.content), "```e\n");
    }

    #[test]
    fn partition_is_total_and_ordered() {
        let text = "p1\n```e\na\n```\n\n```e\nb\n```\np2\n```e\nunclosed";
        let (rope, parts) = parts_of(text);

        let mut cursor = 0;
        let mut rebuilt = String::new();
        for part in &parts {
            assert_eq!(part.span().start, cursor, "parts must be contiguous");
            cursor = part.span().end;
            rebuilt.push_str(&slice_to_string(&rope, part.span()));
        }
        assert_eq!(cursor, text.len());
        assert_eq!(rebuilt, text);
    }
}
