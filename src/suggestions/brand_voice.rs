//! Brand voice guidelines injected into revision prompts

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const DEFAULT_FORMALITY: &str = "balanced";
const DEFAULT_EMOTION: &str = "professional";
const DEFAULT_VOICE: &str = "active";
const DEFAULT_PERSPECTIVE: &str = "second person";

/// Brand guidelines as `category -> guideline`, kept in the order they were given.
///
/// Deserializes from a JSON object, e.g. the `brandVoice` config key:
/// `{ "formality": "casual", "audience": "engineering leads" }`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandVoice {
    guidelines: Vec<(String, String)>,
}

/// Tone characteristics, with defaults for categories the brand leaves unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneProfile {
    pub formality: String,
    pub emotion: String,
    pub voice: String,
    pub perspective: String,
}

impl BrandVoice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a guideline. A category that already exists keeps its position and
    /// takes the new guideline.
    pub fn add_guideline(&mut self, category: impl Into<String>, guideline: impl Into<String>) {
        let category = category.into();
        let guideline = guideline.into();
        match self.guidelines.iter_mut().find(|(c, _)| *c == category) {
            Some(entry) => entry.1 = guideline,
            None => self.guidelines.push((category, guideline)),
        }
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        self.guidelines
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, g)| g.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.guidelines.iter().map(|(c, g)| (c.as_str(), g.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.guidelines.is_empty()
    }

    /// Fill categories missing here from `base`, after this voice's own entries
    pub fn merge_from(&mut self, base: BrandVoice) {
        for (category, guideline) in base.guidelines {
            if self.get(&category).is_none() {
                self.guidelines.push((category, guideline));
            }
        }
    }

    pub fn tone_profile(&self) -> ToneProfile {
        let pick = |category: &str, default: &str| {
            self.get(category).unwrap_or(default).to_string()
        };
        ToneProfile {
            formality: pick("formality", DEFAULT_FORMALITY),
            emotion: pick("emotion", DEFAULT_EMOTION),
            voice: pick("voice", DEFAULT_VOICE),
            perspective: pick("perspective", DEFAULT_PERSPECTIVE),
        }
    }

    /// Markdown section for a prompt: each guideline, then the tone profile
    pub fn prompt_section(&self) -> String {
        let mut out = String::from("## Brand Voice Guidelines\n");
        for (category, guideline) in self.iter() {
            out.push_str(&format!("- {}: {}\n", category, guideline));
        }
        let tone = self.tone_profile();
        out.push_str(&format!(
            "**Tone:** {} formality, {} emotion, {} voice, written in the {}.\n\n",
            tone.formality, tone.emotion, tone.voice, tone.perspective
        ));
        out
    }
}

impl Serialize for BrandVoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.guidelines.len()))?;
        for (category, guideline) in &self.guidelines {
            map.serialize_entry(category, guideline)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BrandVoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BrandVoiceVisitor;

        impl<'de> Visitor<'de> for BrandVoiceVisitor {
            type Value = BrandVoice;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of brand voice category to guideline")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<BrandVoice, M::Error> {
                let mut voice = BrandVoice::new();
                while let Some((category, guideline)) = access.next_entry::<String, String>()? {
                    voice.add_guideline(category, guideline);
                }
                Ok(voice)
            }
        }

        deserializer.deserialize_map(BrandVoiceVisitor)
    }
}
