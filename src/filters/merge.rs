use crate::surface_utils::shared_surface::{Operator, SharedFilterImage};

use super::context::FilterContext;
use super::{FilterError, Input};

/// Resolved `feMerge` primitive for rendering.
#[derive(Clone, Default)]
pub struct Merge {
    pub merge_nodes: Vec<MergeNode>,
}

/// Resolved `feMergeNode` for rendering.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MergeNode {
    pub in1: Input,
}

impl MergeNode {
    fn render(
        &self,
        ctx: &FilterContext,
        output_surface: &SharedFilterImage,
    ) -> Result<SharedFilterImage, FilterError> {
        let input = ctx.get_input(&self.in1)?;

        Ok(input.compose(output_surface, Operator::Over))
    }
}

impl Merge {
    pub fn render(&self, ctx: &FilterContext) -> Result<SharedFilterImage, FilterError> {
        let source = ctx.source_graphic();
        let mut output_surface = SharedFilterImage::empty(source.width(), source.height());

        for merge_node in &self.merge_nodes {
            // Merge nodes referencing missing results are skipped silently.
            if let Ok(surface) = merge_node.render(ctx, &output_surface) {
                output_surface = surface;
            }
        }

        Ok(output_surface)
    }
}
