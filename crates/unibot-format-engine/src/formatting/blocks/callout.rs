use super::{
    kinds::{Severity, lead_label},
    types::{BlockKind, RawBlock},
};

/// Reclassifies blocks that open with a severity label as callouts.
///
/// Runs on the classifier's output. A paragraph or heading whose leading
/// label, emphasis interpreted, is exactly `Note`, `Important` or `Warning`
/// followed by a colon becomes a callout holding the remainder of the block.
/// List blocks are never touched.
pub struct CalloutDetector;

impl CalloutDetector {
    pub fn detect(&self, block: RawBlock) -> RawBlock {
        if !matches!(block.kind, BlockKind::Paragraph | BlockKind::Heading { .. }) {
            return block;
        }

        let Some(lead) = lead_label(&block.text) else {
            return block;
        };
        let Some(severity) = Severity::from_label(block.slice(lead.label)) else {
            return block;
        };

        log::trace!("callout {severity:?} detected");
        RawBlock {
            kind: BlockKind::Callout {
                severity,
                body: lead.rest,
            },
            ..block
        }
    }
}
