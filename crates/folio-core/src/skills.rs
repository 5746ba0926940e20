//! Skill bar fill levels.
//!
//! Every bar starts at `0%` and jumps to its target (letting the CSS
//! transition animate it) the first time its card scrolls into view.

use crate::error::FolioError;

pub const EMPTY_FILL: &str = "0%";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillLevel {
    pub target_percent: f64,
}

impl SkillLevel {
    /// Parse a `data-level` attribute such as `"75"`.
    pub fn parse(raw: &str) -> Result<Self, FolioError> {
        let invalid = || FolioError::InvalidSkillLevel(raw.to_owned());
        let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(invalid());
        }
        Ok(Self {
            target_percent: value,
        })
    }

    /// Value for the `--level` custom property.
    pub fn css_value(self) -> String {
        format!("{}%", self.target_percent)
    }
}

#[derive(Debug)]
struct SkillCard {
    level: Option<SkillLevel>,
    visible: bool,
}

#[derive(Debug, Default)]
pub struct SkillBoard {
    cards: Vec<SkillCard>,
}

impl SkillBoard {
    /// Build from each card's raw `data-level`, in document order. `None`
    /// stands for a card without a fill element or attribute.
    pub fn from_markup<'a, I>(levels: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let cards = levels
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let level = raw.and_then(|raw| match SkillLevel::parse(raw) {
                    Ok(level) => Some(level),
                    Err(err) => {
                        tracing::warn!(index, %err, "skill card left unanimated");
                        None
                    }
                });
                SkillCard {
                    level,
                    visible: false,
                }
            })
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|card| card.visible)
    }

    /// Current `--level` value for card `index`.
    pub fn fill(&self, index: usize) -> String {
        match self.cards.get(index) {
            Some(SkillCard {
                level: Some(level),
                visible: true,
            }) => level.css_value(),
            _ => EMPTY_FILL.to_owned(),
        }
    }

    /// Card `index` intersected the viewport. Returns the fill to apply the
    /// first time a card with a valid level is seen, `None` afterwards.
    pub fn reveal(&mut self, index: usize) -> Option<String> {
        let card = self.cards.get_mut(index)?;
        if card.visible {
            return None;
        }
        card.visible = true;
        let fill = card.level.map(SkillLevel::css_value);
        tracing::debug!(index, fill = fill.as_deref().unwrap_or("-"), "skill card visible");
        fill
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() -> anyhow::Result<()> {
        assert_eq!(SkillLevel::parse("75")?.css_value(), "75%");
        assert_eq!(SkillLevel::parse(" 92.5 ")?.css_value(), "92.5%");
        assert_eq!(SkillLevel::parse("0")?.css_value(), "0%");
        assert!(SkillLevel::parse("101").is_err());
        assert!(SkillLevel::parse("-5").is_err());
        assert!(SkillLevel::parse("high").is_err());
        assert!(SkillLevel::parse("NaN").is_err());
        Ok(())
    }

    #[test]
    fn fills_once_and_stays() {
        let mut board = SkillBoard::from_markup([Some("75")]);
        assert_eq!(board.fill(0), EMPTY_FILL);

        assert_eq!(board.reveal(0).as_deref(), Some("75%"));
        assert_eq!(board.fill(0), "75%");

        assert_eq!(board.reveal(0), None);
        assert_eq!(board.reveal(0), None);
        assert_eq!(board.fill(0), "75%");
    }

    #[test]
    fn cards_are_independent() {
        let mut board = SkillBoard::from_markup([Some("40"), Some("90")]);

        assert_eq!(board.reveal(1).as_deref(), Some("90%"));
        assert!(!board.is_visible(0));
        assert_eq!(board.fill(0), EMPTY_FILL);

        assert_eq!(board.reveal(0).as_deref(), Some("40%"));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn missing_or_bad_level_still_becomes_visible() {
        let mut board = SkillBoard::from_markup([None, Some("lots")]);

        assert_eq!(board.reveal(0), None);
        assert_eq!(board.reveal(1), None);
        assert!(board.is_visible(0));
        assert!(board.is_visible(1));
        assert_eq!(board.fill(1), EMPTY_FILL);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut board = SkillBoard::from_markup(std::iter::empty::<Option<&str>>());
        assert!(board.is_empty());
        assert_eq!(board.reveal(3), None);
        assert!(!board.is_visible(3));
    }
}
