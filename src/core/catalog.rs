use fnv::FnvHashMap;

use super::constants::DEFAULT_TOPIC;

/// Title and HTML body shown in the info panel for one topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentEntry {
    pub title: &'static str,
    pub body_markup: &'static str,
}

/// Immutable topic table backing the info panel.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: FnvHashMap<&'static str, ContentEntry>,
    order: Vec<&'static str>,
    default_topic: &'static str,
}

impl Catalog {
    pub fn new(default_topic: &'static str) -> Self {
        Self {
            entries: FnvHashMap::default(),
            order: Vec::new(),
            default_topic,
        }
    }

    pub fn with_entry(mut self, key: &'static str, title: &'static str, body: &'static str) -> Self {
        if self
            .entries
            .insert(key, ContentEntry { title, body_markup: body })
            .is_none()
        {
            self.order.push(key);
        }
        self
    }

    /// The shipped African penguin fact sheets.
    pub fn penguins() -> Self {
        Self::new(DEFAULT_TOPIC)
            .with_entry("general", "African Penguin Facts", GENERAL_BODY)
            .with_entry("habitat", "Habitat & Distribution", HABITAT_BODY)
            .with_entry("behavior", "Behavior & Adaptations", BEHAVIOR_BODY)
    }

    pub fn default_topic(&self) -> &'static str {
        self.default_topic
    }

    pub fn get(&self, key: &str) -> Option<&ContentEntry> {
        self.entries.get(key)
    }

    /// Look up `key`, falling back to the default topic when it is unknown.
    ///
    /// Returns the key that was actually used alongside the entry. `None`
    /// means the default topic itself is absent.
    pub fn resolve(&self, key: &str) -> Option<(&'static str, &ContentEntry)> {
        if let Some((k, entry)) = self.entries.get_key_value(key) {
            return Some((*k, entry));
        }
        self.entries
            .get_key_value(self.default_topic)
            .map(|(k, entry)| (*k, entry))
    }

    pub fn topics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::penguins()
    }
}

const GENERAL_BODY: &str = r#"
<p><strong>Scientific Name:</strong> Spheniscus demersus</p>
<p><strong>Height:</strong> 60-70 cm (24-28 inches)</p>
<p><strong>Weight:</strong> 2.2-3.5 kg (4.9-7.7 lbs)</p>
<p><strong>Habitat:</strong> Coastal waters and islands of southern Africa</p>
<p><strong>Diet:</strong> Fish, squid, and small crustaceans</p>
<p><strong>Conservation Status:</strong> Endangered</p>
<p><strong>Lifespan:</strong> 10-15 years in the wild</p>
<p><strong>Special Features:</strong> Distinctive black and white plumage with a horseshoe-shaped black band across the chest. They're excellent swimmers and can dive up to 130 meters deep!</p>
"#;

const HABITAT_BODY: &str = r#"
<p><strong>Native Range:</strong> Found only along the coast of South Africa and Namibia</p>
<p><strong>Breeding Sites:</strong> 24 islands and 4 mainland sites</p>
<p><strong>Ocean Environment:</strong> Cold, nutrient-rich waters of the Benguela Current</p>
<p><strong>Nesting:</strong> Burrows in guano, under bushes, or in artificial nest boxes</p>
<p><strong>Temperature:</strong> Adapted to temperatures ranging from 5°C to 40°C</p>
<p><strong>Threats:</strong> Oil spills, overfishing, habitat destruction, and climate change</p>
"#;

const BEHAVIOR_BODY: &str = r#"
<p><strong>Swimming:</strong> Can reach speeds of 20 km/h underwater</p>
<p><strong>Diving:</strong> Typically dive 30m deep, but can go up to 130m</p>
<p><strong>Communication:</strong> Use various calls for mate recognition and territory defense</p>
<p><strong>Social Structure:</strong> Form large colonies during breeding season</p>
<p><strong>Parenting:</strong> Both parents incubate eggs and feed chicks</p>
<p><strong>Molting:</strong> Annual molt where they cannot swim for 3 weeks</p>
"#;
