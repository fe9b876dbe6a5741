use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use bevy::color::palettes::css::{GOLD, RED};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::BiomeEntry;
use crate::error::HudResult;

/// Tag naming a game zone. The set of tags is open: hosts may hand the HUD any
/// string, known or not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BiomeId(Cow<'static, str>);

impl BiomeId {
    pub const NORMAL: BiomeId = BiomeId(Cow::Borrowed("NORMAL"));
    pub const HADES: BiomeId = BiomeId(Cow::Borrowed("HADES"));

    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BiomeId {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<&'static str> for BiomeId {
    fn from(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }
}

impl From<String> for BiomeId {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

impl fmt::Display for BiomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static NORMAL_ID: BiomeId = BiomeId::NORMAL;

/// How a biome shows up in the badge.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomePresentation {
    pub color: Color,
    pub label: String,
}

impl BiomePresentation {
    pub fn new(color: impl Into<Color>, label: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            label: label.into(),
        }
    }
}

/// Read-only lookup from biome tag to presentation.
///
/// Built once when the plugin is added and never mutated by HUD systems. The
/// NORMAL entry is always present and doubles as the fallback for tags the
/// table does not know about.
#[derive(Resource, Debug, Clone)]
pub struct BiomeTable {
    normal: BiomePresentation,
    others: BTreeMap<BiomeId, BiomePresentation>,
}

impl Default for BiomeTable {
    fn default() -> Self {
        let mut others = BTreeMap::new();
        others.insert(BiomeId::HADES, BiomePresentation::new(RED, "ENFERS"));
        Self {
            normal: BiomePresentation::new(GOLD, "OLYMPE"),
            others,
        }
    }
}

impl BiomeTable {
    /// Default table with `entries` layered on top. Later entries win over
    /// earlier ones and over the defaults.
    pub fn from_entries(entries: &[BiomeEntry]) -> HudResult<Self> {
        let mut table = Self::default();
        for entry in entries {
            entry.validate()?;
            let [r, g, b] = entry.color;
            let replaced = table.insert(
                BiomeId::from(entry.id.clone()),
                BiomePresentation::new(Color::srgb(r, g, b), entry.label.clone()),
            );
            debug!(
                biome = %entry.id,
                label = %entry.label,
                replaced = replaced.is_some(),
                "registered biome presentation"
            );
        }
        Ok(table)
    }

    /// Presentation for `id`, or the NORMAL entry when `id` is unknown.
    pub fn resolve(&self, id: &BiomeId) -> &BiomePresentation {
        self.get(id).unwrap_or(&self.normal)
    }

    pub fn get(&self, id: &BiomeId) -> Option<&BiomePresentation> {
        if *id == BiomeId::NORMAL {
            Some(&self.normal)
        } else {
            self.others.get(id)
        }
    }

    pub fn contains(&self, id: &BiomeId) -> bool {
        self.get(id).is_some()
    }

    /// Known tags, NORMAL first and the rest in lexical order.
    pub fn ids(&self) -> impl Iterator<Item = &BiomeId> {
        std::iter::once(&NORMAL_ID).chain(self.others.keys())
    }

    fn insert(
        &mut self,
        id: BiomeId,
        presentation: BiomePresentation,
    ) -> Option<BiomePresentation> {
        if id == BiomeId::NORMAL {
            Some(std::mem::replace(&mut self.normal, presentation))
        } else {
            self.others.insert(id, presentation)
        }
    }
}
