use super::{CardScraper, Selectors};
use crate::domain::{CharacterRecord, Rarity, Ratings, Role};
use crate::error::CardError;
use crate::services::rating::parse_rating;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::ops::Range;
use tracing::debug;

static DIV: Lazy<Selector> = Lazy::new(|| Selector::parse("div").unwrap());

// Fixed image layout of the Prydwen popover.
const MIN_IMAGES: usize = 8;
const NAME_IMAGE: usize = 1;
const ELEMENT_IMAGE: usize = 4;
const PATH_IMAGE: usize = 7;

// 5★ cards list their ratings first; 4★ cards follow the E0 set with the E6 set.
const FIVE_STAR_WINDOW: Range<usize> = 0..3;
const FOUR_STAR_WINDOW: Range<usize> = 3..6;

pub struct PrydwenCardScraper {
    selectors: Selectors,
}

impl PrydwenCardScraper {
    pub fn new(selectors: Selectors) -> Self {
        Self { selectors }
    }

    fn rarity(&self, fragment: &Html) -> Rarity {
        if fragment.select(&self.selectors.five_star).next().is_some() {
            Rarity::FiveStar
        } else if fragment.select(&self.selectors.four_star).next().is_some() {
            Rarity::FourStar
        } else {
            Rarity::Unknown
        }
    }

    fn rating_texts(&self, fragment: &Html) -> Vec<String> {
        fragment
            .select(&DIV)
            .filter(|div| {
                div.value()
                    .classes()
                    .any(|class| self.selectors.rating_class.is_match(class))
            })
            .map(|div| {
                div.text()
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty())
                    .collect::<String>()
            })
            .collect()
    }

    fn ratings(&self, fragment: &Html, rarity: Rarity) -> Ratings {
        let window = match rarity {
            Rarity::FiveStar => FIVE_STAR_WINDOW,
            Rarity::FourStar => FOUR_STAR_WINDOW,
            Rarity::Unknown => return Ratings::default(),
        };

        let texts = self.rating_texts(fragment);
        if texts.len() < window.end {
            debug!(
                "Only {} rating divs for a {} card, leaving ratings empty",
                texts.len(),
                rarity
            );
            return Ratings::default();
        }

        let parsed: Vec<Option<f64>> = texts[window].iter().map(|t| parse_rating(t)).collect();
        Ratings {
            moc: parsed[0],
            pf: parsed[1],
            as_: parsed[2],
        }
    }
}

fn alt_at(images: &[ElementRef<'_>], index: usize) -> Result<String, CardError> {
    images[index]
        .value()
        .attr("alt")
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(str::to_string)
        .ok_or(CardError::MissingAlt { index })
}

/// First label in `Role::PRIORITY` found anywhere in the text.
///
/// `DPS` is checked before `Support DPS`, so any text containing "Support DPS"
/// classifies as `DPS`.
pub fn classify_role(text: &str) -> Role {
    Role::PRIORITY
        .into_iter()
        .find(|role| text.contains(role.label()))
        .unwrap_or(Role::Unknown)
}

impl CardScraper for PrydwenCardScraper {
    fn extract_card(&self, popover_html: &str) -> Result<CharacterRecord, CardError> {
        let fragment = Html::parse_fragment(popover_html);

        let images: Vec<ElementRef<'_>> = fragment.select(&self.selectors.image).collect();
        if images.len() < MIN_IMAGES {
            return Err(CardError::InsufficientImages {
                found: images.len(),
            });
        }

        let name = alt_at(&images, NAME_IMAGE)?;
        let element = alt_at(&images, ELEMENT_IMAGE)?;
        let path = alt_at(&images, PATH_IMAGE)?;

        let rarity = self.rarity(&fragment);
        let text = fragment.root_element().text().collect::<Vec<_>>().join(" ");
        let role = classify_role(&text);
        let ratings = self.ratings(&fragment, rarity);

        debug!(
            "Extracted {} ({}, {}, {}, {}) ratings {:?}",
            name, element, path, rarity, role, ratings
        );

        Ok(CharacterRecord::new(
            name, element, path, rarity, role, ratings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteProfile;

    fn scraper() -> PrydwenCardScraper {
        PrydwenCardScraper::new(Selectors::new(&SiteProfile::default()).unwrap())
    }

    fn popover(rarity_class: &str, role: &str, ratings: &[&str]) -> String {
        let alts = [
            "frame", "Acheron", "icon", "banner", "Lightning", "spacer", "badge", "Nihility",
        ];
        let images: String = alts
            .iter()
            .map(|alt| format!(r#"<img src="/{alt}.webp" alt="{alt}">"#))
            .collect();
        let ratings: String = ratings
            .iter()
            .enumerate()
            .map(|(i, r)| format!(r#"<div class="rating-hsr-{} tier"> {r} </div>"#, i + 1))
            .collect();

        format!(
            r#"<div class="character-popover {rarity_class}">{images}
               <div class="role"><span>{role}</span></div>
               <div class="ratings">{ratings}</div></div>"#
        )
    }

    #[test]
    fn five_star_uses_first_three_ratings() {
        let html = popover("rar-5", "DPS", &["T1", "T2", "T3"]);

        let record = scraper().extract_card(&html).unwrap();

        assert_eq!(record.name, "Acheron");
        assert_eq!(record.element, "Lightning");
        assert_eq!(record.path, "Nihility");
        assert_eq!(record.rarity, Rarity::FiveStar);
        assert_eq!(record.role, Role::Dps);
        assert_eq!(record.moc_rating, Some(1.0));
        assert_eq!(record.pf_rating, Some(2.0));
        assert_eq!(record.as_rating, Some(3.0));
        assert_eq!(record.average_rating, Some(2.0));
    }

    #[test]
    fn four_star_uses_e6_ratings() {
        let html = popover("rar-4", "Amplifier", &["N/A", "N/A", "N/A", "T0", "T1.5", "T3"]);

        let record = scraper().extract_card(&html).unwrap();

        assert_eq!(record.rarity, Rarity::FourStar);
        assert_eq!(record.role, Role::Amplifier);
        assert_eq!(record.moc_rating, Some(0.0));
        assert_eq!(record.pf_rating, Some(1.5));
        assert_eq!(record.as_rating, Some(3.0));
        assert_eq!(record.average_rating, Some(1.5));
    }

    #[test]
    fn four_star_with_only_base_ratings_has_none() {
        let html = popover("rar-4", "Sustain", &["T1", "T2", "T3"]);

        let record = scraper().extract_card(&html).unwrap();

        assert_eq!(record.ratings(), Ratings::default());
        assert_eq!(record.average_rating, None);
    }

    #[test]
    fn five_star_with_too_few_ratings_has_none() {
        let html = popover("rar-5", "Sustain", &["T1", "T2"]);

        let record = scraper().extract_card(&html).unwrap();

        assert_eq!(record.ratings(), Ratings::default());
    }

    #[test]
    fn unknown_rarity_ignores_ratings() {
        let html = popover("rar-3", "Sustain", &["T1", "T2", "T3"]);

        let record = scraper().extract_card(&html).unwrap();

        assert_eq!(record.rarity, Rarity::Unknown);
        assert_eq!(record.role, Role::Sustain);
        assert_eq!(record.average_rating, None);
    }

    #[test]
    fn unparsable_rating_degrades_to_none() {
        let html = popover("rar-5", "DPS", &["T1", "soon", "T3"]);

        let record = scraper().extract_card(&html).unwrap();

        assert_eq!(record.pf_rating, None);
        assert_eq!(record.average_rating, Some(2.0));
    }

    #[test]
    fn too_few_images_is_skipped() {
        let html = r#"<div class="rar-5"><img alt="a"><img alt="b"><img alt="c"></div>"#;

        assert_eq!(
            scraper().extract_card(html),
            Err(CardError::InsufficientImages { found: 3 })
        );
    }

    #[test]
    fn missing_alt_is_skipped() {
        let html = popover("rar-5", "DPS", &[]).replace(r#"alt="Lightning""#, "");

        assert_eq!(
            scraper().extract_card(&html),
            Err(CardError::MissingAlt { index: 4 })
        );
    }

    #[test]
    fn role_priority_is_fixed() {
        assert_eq!(classify_role("Role: Amplifier"), Role::Amplifier);
        assert_eq!(classify_role("Sustain Amplifier"), Role::Amplifier);
        // "Support DPS" contains "DPS", which is checked first.
        assert_eq!(classify_role("Support DPS"), Role::Dps);
        assert_eq!(classify_role("Healer"), Role::Unknown);
    }
}
