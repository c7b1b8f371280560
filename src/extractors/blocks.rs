use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::debug;

use crate::error::{CatalogError, Result};

/// One rule of the selector cascade. Lower `priority` is tried first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTier {
    pub name: &'static str,
    pub css: &'static str,
    pub priority: u8,
}

/// Known catalog templates, most specific first. The bare `li` tier is a
/// last resort: high recall, poor precision.
pub const DEFAULT_TIERS: &[BlockTier] = &[
    BlockTier { name: "item-row", css: "div.item.row", priority: 0 },
    BlockTier { name: "book-area", css: "div.bookArea", priority: 1 },
    BlockTier { name: "book-data-wrap", css: "dl.bookDataWrap", priority: 2 },
    BlockTier { name: "list-wrap", css: "ul.listWrap > li", priority: 3 },
    BlockTier { name: "any-list-item", css: "li", priority: 4 },
];

/// Finds item blocks using the first tier that matches anything.
#[derive(Debug)]
pub struct BlockLocator {
    tiers: Vec<(BlockTier, Selector)>,
}

impl BlockLocator {
    pub fn new(tiers: &[BlockTier]) -> Result<Self> {
        let mut compiled = tiers
            .iter()
            .map(|tier| {
                Selector::parse(tier.css)
                    .map(|selector| (*tier, selector))
                    .map_err(|e| CatalogError::Selector {
                        css: tier.css.to_string(),
                        reason: format!("{:?}", e),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        compiled.sort_by_key(|(tier, _)| tier.priority);

        Ok(Self { tiers: compiled })
    }

    pub fn tiers(&self) -> impl Iterator<Item = &BlockTier> {
        self.tiers.iter().map(|(tier, _)| tier)
    }

    /// Blocks of the highest-priority tier with any match, in document order.
    /// Lower tiers are never consulted once a tier has matched.
    pub fn locate<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        for (tier, selector) in &self.tiers {
            let mut seen = HashSet::new();
            let blocks: Vec<ElementRef<'a>> = document
                .select(selector)
                .filter(|el| seen.insert(el.id()))
                .collect();

            if !blocks.is_empty() {
                debug!("Tier '{}' matched {} item blocks", tier.name, blocks.len());
                return blocks;
            }
        }
        Vec::new()
    }
}

impl Default for BlockLocator {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS
                .iter()
                .filter_map(|tier| Selector::parse(tier.css).ok().map(|s| (*tier, s)))
                .collect(),
        }
    }
}
