//! Skill bars.
//!
//! The bar width is driven by the `--level` custom property on each
//! `.skill-card__fill`; CSS animates the change.

use crate::dom::{self, Elements};
use crate::events;
use crate::state::Page;
use folio_core::SkillBoard;
use folio_core::skills::EMPTY_FILL;
use std::rc::Rc;

const FILL: &str = ".skill-card__fill";

/// Empty every bar and read each card's target level.
pub fn read_board(els: &Elements) -> SkillBoard {
    let levels: Vec<Option<String>> = els
        .skill_cards
        .iter()
        .map(|card| {
            let fill = dom::query_within(card, FILL)?;
            dom::set_style(&fill, "--level", EMPTY_FILL);
            fill.get_attribute("data-level")
        })
        .collect();

    SkillBoard::from_markup(levels.iter().map(Option::as_deref))
}

/// Fill each bar to its level the first time its card is visible enough.
pub fn observe(page: &Rc<Page>) {
    events::on_visible(
        page,
        &page.els.skill_cards,
        None,
        page.config.skill_threshold,
        |page, index, card| {
            let fill = page.skills.borrow_mut().reveal(index);
            if let (Some(value), Some(el)) = (fill, dom::query_within(card, FILL)) {
                dom::set_style(&el, "--level", &value);
            }
            dom::add_class(card, "visible");
            true
        },
    );
}
