use crate::parsing::rope::{LineRef, span::Span};

use super::{
    fence::{CodeFence, FenceSig},
    types::{FencedBlock, Part},
};

/// Line-by-line state machine producing the prose / fenced partition.
///
/// Prose is never buffered line by line: everything between the end of the
/// last emitted part and the start of the next fenced block is one prose part.
pub struct PartitionBuilder {
    /// End of the last emitted part.
    emitted: usize,
    /// The opening fence line of the block currently being read.
    open: Option<Span>,
    out: Vec<Part>,
}

impl PartitionBuilder {
    pub fn new() -> Self {
        Self {
            emitted: 0,
            open: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &LineRef) {
        let sig = CodeFence::sig(line.content());

        match self.open {
            Some(open) => {
                if sig == Some(FenceSig::Close) {
                    self.close_fence(open, line.span);
                }
            }
            None => {
                if sig == Some(FenceSig::Open) {
                    self.open = Some(line.span);
                }
            }
        }
    }

    /// Finishes the partition for a document of `len` bytes.
    ///
    /// An opening fence that never closed does not form a block; its lines
    /// become part of the trailing prose.
    pub fn finish(mut self, len: usize) -> Vec<Part> {
        if let Some(open) = self.open.take() {
            log::debug!("unterminated fence at byte {} treated as prose", open.start);
        }
        self.flush_prose(len);
        self.out
    }

    fn close_fence(&mut self, open: Span, close: Span) {
        self.flush_prose(open.start);
        self.out.push(Part::Fenced(FencedBlock {
            open,
            content: Span::new(open.end, close.start),
            close,
        }));
        self.emitted = close.end;
        self.open = None;
    }

    fn flush_prose(&mut self, until: usize) {
        if until > self.emitted {
            self.out.push(Part::Prose(Span::new(self.emitted, until)));
            self.emitted = until;
        }
    }
}

impl Default for PartitionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
