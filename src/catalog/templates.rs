use std::fmt;

use serde::de::{MapAccess, Visitor};

use crate::foundation::error::{FolioError, FolioResult};

/// Slot rectangle of a template, in percent of the page box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TemplateSlot {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

/// Named curated layout for a fixed photo count.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    /// Unique name, prefixed by the photo count it applies to (`"3-hero-left"`).
    pub name: String,
    /// Photo count parsed from the name prefix.
    pub count: usize,
    /// Slot rectangles in assignment order.
    pub slots: Vec<TemplateSlot>,
}

impl Template {
    /// Build a template, deriving `count` from the name prefix.
    pub fn new(name: impl Into<String>, slots: Vec<TemplateSlot>) -> FolioResult<Self> {
        let name = name.into();
        let count = count_prefix(&name);
        if count == 0 {
            return Err(FolioError::layout(format!(
                "template '{name}' must start with its photo count (e.g. '3-hero-left')"
            )));
        }
        if slots.is_empty() {
            return Err(FolioError::layout(format!("template '{name}' has no slots")));
        }
        for (i, s) in slots.iter().enumerate() {
            let ok = [s.x, s.y, s.w, s.h].iter().all(|v| v.is_finite()) && s.w >= 0.0 && s.h >= 0.0;
            if !ok {
                return Err(FolioError::layout(format!(
                    "template '{name}' slot {i} has invalid geometry"
                )));
            }
        }
        Ok(Self { name, count, slots })
    }
}

/// Ordered collection of templates. Declaration order drives remix cycling.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Build from templates; names must be unique.
    pub fn new(templates: Vec<Template>) -> FolioResult<Self> {
        for (i, t) in templates.iter().enumerate() {
            if t.slots.is_empty() {
                return Err(FolioError::layout(format!("template '{}' has no slots", t.name)));
            }
            if templates[..i].iter().any(|o| o.name == t.name) {
                return Err(FolioError::layout(format!(
                    "duplicate template name '{}'",
                    t.name
                )));
            }
        }
        Ok(Self { templates })
    }

    /// Curated set shipped with the engine.
    pub fn builtin() -> Self {
        let templates = BUILTIN
            .iter()
            .map(|(name, slots)| Template {
                name: (*name).to_owned(),
                count: count_prefix(name),
                slots: slots
                    .iter()
                    .map(|&[x, y, w, h]| TemplateSlot { x, y, w, h })
                    .collect(),
            })
            .collect();
        Self { templates }
    }

    /// Load the `name -> {slots: [{x,y,w,h}]}` format, keeping the document's key order.
    pub fn from_json(s: &str) -> FolioResult<Self> {
        let doc: OrderedTemplates = serde_json::from_str(s)?;
        let templates = doc
            .0
            .into_iter()
            .map(|(name, body)| Template::new(name, body.slots))
            .collect::<FolioResult<Vec<_>>>()?;
        Self::new(templates)
    }

    /// Every template, in declaration order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Template by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Templates applicable to `count` photos, in declaration order.
    pub fn candidates(&self, count: usize) -> Vec<&Template> {
        self.templates.iter().filter(|t| t.count == count).collect()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn count_prefix(name: &str) -> usize {
    name.split('-')
        .next()
        .and_then(|p| p.parse().ok())
        .unwrap_or(0)
}

#[derive(serde::Deserialize)]
struct TemplateBody {
    slots: Vec<TemplateSlot>,
}

struct OrderedTemplates(Vec<(String, TemplateBody)>);

impl<'de> serde::Deserialize<'de> for OrderedTemplates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = OrderedTemplates;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of template name to {slots: [...]}")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((k, v)) = map.next_entry::<String, TemplateBody>()? {
                    out.push((k, v));
                }
                Ok(OrderedTemplates(out))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

type SlotRow = [f64; 4];

const BUILTIN: &[(&str, &[SlotRow])] = &[
    ("1-landscape", &[[10.0, 10.0, 80.0, 60.0]]),
    ("1-portrait", &[[25.0, 5.0, 50.0, 90.0]]),
    ("1-full", &[[0.0, 0.0, 100.0, 100.0]]),
    ("1-square", &[[25.0, 25.0, 50.0, 50.0]]),
    (
        "2-landscape-stack",
        &[[10.0, 10.0, 80.0, 38.0], [10.0, 52.0, 80.0, 38.0]],
    ),
    (
        "2-side-by-side",
        &[[5.0, 20.0, 42.5, 60.0], [52.5, 20.0, 42.5, 60.0]],
    ),
    (
        "2-diagonal",
        &[[5.0, 5.0, 55.0, 55.0], [40.0, 40.0, 55.0, 55.0]],
    ),
    (
        "3-hero-left",
        &[
            [5.0, 5.0, 45.0, 90.0],
            [55.0, 5.0, 40.0, 42.5],
            [55.0, 52.5, 40.0, 42.5],
        ],
    ),
    (
        "3-grid-uniform",
        &[
            [5.0, 30.0, 28.0, 40.0],
            [36.0, 30.0, 28.0, 40.0],
            [67.0, 30.0, 28.0, 40.0],
        ],
    ),
    (
        "3-stack-left",
        &[
            [5.0, 5.0, 40.0, 28.0],
            [5.0, 36.0, 40.0, 28.0],
            [5.0, 67.0, 40.0, 28.0],
        ],
    ),
    (
        "3-row-stack",
        &[
            [5.0, 5.0, 90.0, 28.0],
            [5.0, 36.0, 90.0, 28.0],
            [5.0, 67.0, 90.0, 28.0],
        ],
    ),
    (
        "4-grid",
        &[
            [5.0, 5.0, 42.5, 42.5],
            [52.5, 5.0, 42.5, 42.5],
            [5.0, 52.5, 42.5, 42.5],
            [52.5, 52.5, 42.5, 42.5],
        ],
    ),
    (
        "4-hero-center",
        &[
            [25.0, 15.0, 50.0, 70.0],
            [5.0, 5.0, 15.0, 25.0],
            [80.0, 5.0, 15.0, 25.0],
            [42.5, 90.0, 15.0, 10.0],
        ],
    ),
    (
        "5-collage",
        &[
            [5.0, 5.0, 45.0, 45.0],
            [50.0, 5.0, 45.0, 45.0],
            [5.0, 50.0, 30.0, 45.0],
            [35.0, 50.0, 30.0, 45.0],
            [65.0, 50.0, 30.0, 45.0],
        ],
    ),
];

#[cfg(test)]
#[path = "../../tests/unit/catalog/templates.rs"]
mod tests;
