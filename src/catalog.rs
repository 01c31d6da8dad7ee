//! Vocabulary catalog: seed format, template expansion, builtin deck.
//!
//! Seeds are authored once; templates carrying a `{CITY}`, `{PLACE}` or
//! `{NAME}` placeholder are expanded against substitution tables into one
//! concrete item per value. The result is validated and immutable for the
//! life of the program.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::types::{ItemKind, VocabItem};

/// Placeholder markers recognized in seed templates.
const PLACEHOLDERS: [&str; 3] = ["{CITY}", "{PLACE}", "{NAME}"];

/// A seed entry as authored; `template` holds exactly one placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub id: String,
    pub target_text: String,
    pub gloss_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    pub kind: ItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Seed {
    pub fn new(id: &str, target_text: &str, gloss_text: &str, kind: ItemKind) -> Self {
        Self {
            id: id.to_string(),
            target_text: target_text.to_string(),
            gloss_text: gloss_text.to_string(),
            ipa: None,
            kind,
            template: None,
        }
    }

    pub fn with_ipa(mut self, ipa: &str) -> Self {
        self.ipa = Some(ipa.to_string());
        self
    }

    pub fn with_template(mut self, template: &str) -> Self {
        self.template = Some(template.to_string());
        self
    }
}

/// Value tables the catalog substitutes into seed templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionTables {
    pub cities: Vec<String>,
    pub places: Vec<String>,
    pub names: Vec<String>,
}

impl Default for SubstitutionTables {
    fn default() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }
        Self {
            cities: owned(&["Paris", "Lyon", "Marseille", "Bordeaux", "Lille"]),
            places: owned(&[
                "la gare",
                "les toilettes",
                "le musée",
                "la pharmacie",
                "l’hôtel",
            ]),
            names: owned(&["Anna", "Emily", "Sarah", "Jessica", "Kate"]),
        }
    }
}

impl SubstitutionTables {
    /// Find the placeholder a template uses and the table serving it.
    fn table_for<'a>(&'a self, template: &str) -> Option<(&'static str, &'a [String])> {
        PLACEHOLDERS
            .into_iter()
            .find(|marker| template.contains(marker))
            .map(|marker| {
                let table = match marker {
                    "{CITY}" => &self.cities,
                    "{PLACE}" => &self.places,
                    _ => &self.names,
                };
                (marker, table.as_slice())
            })
    }
}

/// Immutable, validated collection of vocabulary items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<VocabItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Expand seeds into concrete items.
    ///
    /// Template seeds yield one item per table value, with id
    /// `<baseId>-<value>` and the placeholder substituted into the surface
    /// text. Plain seeds pass through unchanged. Output order follows seed
    /// order, then table order, so ids and ordering are stable across
    /// runs.
    pub fn expand(seeds: Vec<Seed>, tables: &SubstitutionTables) -> Result<Self> {
        let mut items = Vec::with_capacity(seeds.len());

        for seed in seeds {
            match &seed.template {
                Some(template) => {
                    let (marker, values) = tables.table_for(template).ok_or_else(|| {
                        CatalogError::UnknownPlaceholder {
                            id: seed.id.clone(),
                            template: template.clone(),
                        }
                    })?;
                    if values.is_empty() {
                        return Err(CatalogError::EmptyTable {
                            id: seed.id.clone(),
                            placeholder: marker.to_string(),
                        });
                    }
                    for value in values {
                        items.push(VocabItem {
                            id: format!("{}-{}", seed.id, value),
                            target_text: template.replace(marker, value),
                            gloss_text: seed.gloss_text.clone(),
                            ipa: seed.ipa.clone(),
                            kind: seed.kind,
                        });
                    }
                }
                None => items.push(VocabItem {
                    id: seed.id,
                    target_text: seed.target_text,
                    gloss_text: seed.gloss_text,
                    ipa: seed.ipa,
                    kind: seed.kind,
                }),
            }
        }

        Self::from_items(items)
    }

    fn from_items(items: Vec<VocabItem>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }
        Ok(Self { items, index })
    }

    /// The builtin A2–B1 travel deck.
    pub fn builtin() -> Self {
        Self::expand(builtin_seeds(), &SubstitutionTables::default())
            .expect("builtin seed data is valid")
    }

    pub fn get(&self, id: &str) -> Option<&VocabItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[VocabItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Builtin seed list: common A2–B1 words and phrases, with IPA samples
/// where the pronunciation is worth hinting.
pub fn builtin_seeds() -> Vec<Seed> {
    use ItemKind::{Phrase, Verb, Word};

    vec![
        Seed::new("w1", "bonjour", "hello", Word).with_ipa("/bɔ̃.ʒuʁ/"),
        Seed::new("w2", "merci", "thank you", Word).with_ipa("/mɛʁ.si/"),
        Seed::new("w3", "s’il vous plaît", "please", Phrase).with_ipa("/sil vu plɛ/"),
        Seed::new("w4", "je m’appelle", "my name is", Phrase)
            .with_ipa("/ʒə ma.pɛl/")
            .with_template("je m’appelle {NAME}"),
        Seed::new("w5", "j’habite à", "I live in", Phrase)
            .with_ipa("/ʒa.bit a/")
            .with_template("j’habite à {CITY}"),
        Seed::new("w6", "pouvez-vous répéter", "can you repeat", Phrase)
            .with_ipa("/pu.ve vu ʁe.pe.te/"),
        Seed::new("w7", "hier", "yesterday", Word),
        Seed::new("w8", "demain", "tomorrow", Word),
        Seed::new("w9", "toujours", "always", Word),
        Seed::new("w10", "souvent", "often", Word),
        Seed::new("w11", "parler", "to speak", Verb),
        Seed::new("w12", "manger", "to eat", Verb),
        Seed::new("w13", "boire", "to drink", Verb),
        Seed::new("w14", "aller", "to go", Verb),
        Seed::new("w15", "venir", "to come", Verb),
        Seed::new("w16", "je voudrais", "I would like", Phrase),
        Seed::new("w17", "combien ça coûte", "how much is it", Phrase),
        Seed::new("w18", "où est", "where is", Phrase).with_template("où est {PLACE}"),
        Seed::new("w19", "aujourd’hui", "today", Word),
        Seed::new("w20", "désolé", "sorry", Word).with_ipa("/de.zo.le/"),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_seeds_pass_through() {
        let seeds = vec![Seed::new("w1", "bonjour", "hello", ItemKind::Word)];
        let catalog = Catalog::expand(seeds, &SubstitutionTables::default()).unwrap();
        assert_eq!(catalog.len(), 1);
        let item = catalog.get("w1").unwrap();
        assert_eq!(item.target_text, "bonjour");
        assert_eq!(item.kind, ItemKind::Word);
    }

    #[test]
    fn city_template_expands_to_one_item_per_city() {
        let seeds = vec![
            Seed::new("w5", "j'habite à", "I live in", ItemKind::Phrase)
                .with_template("j'habite à {CITY}"),
        ];
        let catalog = Catalog::expand(seeds, &SubstitutionTables::default()).unwrap();

        assert_eq!(catalog.len(), 5);
        let ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["w5-Paris", "w5-Lyon", "w5-Marseille", "w5-Bordeaux", "w5-Lille"]
        );
        for item in catalog.items() {
            assert!(!item.target_text.contains("{CITY}"));
        }
        assert_eq!(
            catalog.get("w5-Paris").unwrap().target_text,
            "j'habite à Paris"
        );
    }

    #[test]
    fn expansion_keeps_gloss_ipa_and_kind() {
        let seeds = vec![
            Seed::new("w4", "je m'appelle", "my name is", ItemKind::Phrase)
                .with_ipa("/ʒə ma.pɛl/")
                .with_template("je m'appelle {NAME}"),
        ];
        let catalog = Catalog::expand(seeds, &SubstitutionTables::default()).unwrap();
        let item = catalog.get("w4-Anna").unwrap();
        assert_eq!(item.gloss_text, "my name is");
        assert_eq!(item.ipa.as_deref(), Some("/ʒə ma.pɛl/"));
        assert_eq!(item.kind, ItemKind::Phrase);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let seeds = vec![
            Seed::new("w1", "bonjour", "hello", ItemKind::Word),
            Seed::new("w1", "salut", "hi", ItemKind::Word),
        ];
        let err = Catalog::expand(seeds, &SubstitutionTables::default()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id } if id == "w1"));
    }

    #[test]
    fn unknown_placeholder_is_rejected() {
        let seeds = vec![
            Seed::new("w9", "je mange", "I eat", ItemKind::Phrase)
                .with_template("je mange {FOOD}"),
        ];
        let err = Catalog::expand(seeds, &SubstitutionTables::default()).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownPlaceholder { .. }));
    }

    #[test]
    fn empty_table_is_rejected() {
        let tables = SubstitutionTables {
            cities: vec![],
            ..SubstitutionTables::default()
        };
        let seeds = vec![
            Seed::new("w5", "j'habite à", "I live in", ItemKind::Phrase)
                .with_template("j'habite à {CITY}"),
        ];
        let err = Catalog::expand(seeds, &tables).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTable { .. }));
    }

    #[test]
    fn builtin_deck_expands_deterministically() {
        let a = Catalog::builtin();
        let b = Catalog::builtin();
        // 17 plain seeds + 3 templates x 5 values
        assert_eq!(a.len(), 32);
        assert_eq!(a.items(), b.items());
        assert!(a.get("w18-la gare").is_some());
        assert!(a.get("w4-Kate").is_some());
    }
}
