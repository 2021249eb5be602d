use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Glyph {
    pub symbol: char,
    pub width: usize,
}

/// Hands out one shared [`Glyph`] per character.
#[derive(Debug, Default)]
pub struct GlyphCache {
    glyphs: HashMap<char, Arc<Glyph>>,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyph(&mut self, symbol: char) -> Arc<Glyph> {
        let glyph = self.glyphs.entry(symbol).or_insert_with(|| {
            Arc::new(Glyph {
                symbol,
                width: unicode_width::UnicodeWidthChar::width(symbol).unwrap_or(0),
            })
        });
        Arc::clone(glyph)
    }

    pub fn render(&mut self, text: &str) -> Vec<Arc<Glyph>> {
        text.chars().map(|c| self.glyph(c)).collect()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

pub fn run(ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Flyweight);

    let first = ctx.registry.shared_house(3);
    let second = ctx.registry.shared_house(8);
    result.add_message(CmdMessage::info(format!(
        "asked for 3 then 8 rooms, got {} and {} (shared: {})",
        first.rooms,
        second.rooms,
        Arc::ptr_eq(&first, &second)
    )));
    result.exhibit("house", &*second)?;

    let mut cache = GlyphCache::new();
    let rendered = cache.render("hello");
    result.add_message(CmdMessage::info(format!(
        "rendered {} glyphs from {} shared instances",
        rendered.len(),
        cache.len()
    )));
    result.exhibit("glyphs_rendered", &rendered.len())?;
    result.exhibit("glyphs_allocated", &cache.len())?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;

    #[test]
    fn repeated_characters_share_a_glyph() {
        let mut cache = GlyphCache::new();
        let rendered = cache.render("hello");
        assert_eq!(rendered.len(), 5);
        assert_eq!(cache.len(), 4);
        assert!(Arc::ptr_eq(&rendered[2], &rendered[3]));
    }

    #[test]
    fn wide_glyphs_report_their_width() {
        let mut cache = GlyphCache::new();
        assert_eq!(cache.glyph('a').width, 1);
        assert_eq!(cache.glyph('日').width, 2);
    }

    #[test]
    fn run_reuses_the_held_house() {
        let fixture = Fixture::new();
        let result = run(&fixture.ctx()).unwrap();
        assert_eq!(result.exhibit_value("house").unwrap()["rooms"], 3);
        assert_eq!(result.exhibit_value("glyphs_allocated").unwrap(), 4);
    }

    #[test]
    fn flyweight_holder_does_not_touch_singleton() {
        let fixture = Fixture::new();
        run(&fixture.ctx()).unwrap();
        assert!(fixture.registry.held_house().is_none());
    }
}
