//! Domain preset labels for geoscience annotation.
//!
//! Presets are grouped into categories (seismic facies, sedimentary facies,
//! lithofacies). Picking a preset overwrites an annotation's label with the
//! tag string verbatim.

/// A named group of preset label strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetCategory {
    /// Display name of the category
    pub name: &'static str,
    /// Preset tags in display order
    pub tags: &'static [&'static str],
}

impl PresetCategory {
    /// Check whether this category offers the given tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

const DOMAIN_PRESETS: &[PresetCategory] = &[
    PresetCategory {
        name: "地震相",
        tags: &["平行反射", "前积反射", "杂乱反射", "空白反射", "丘状反射", "断层带"],
    },
    PresetCategory {
        name: "沉积相",
        tags: &[
            "三角洲前缘",
            "水下分流河道",
            "滨浅湖",
            "深湖浊积扇",
            "滑塌沉积",
            "决口扇",
        ],
    },
    PresetCategory {
        name: "岩相",
        tags: &["细砂岩", "粉砂岩", "泥岩", "生物灰岩", "砾岩", "油页岩"],
    },
];

/// The preset catalog in display order.
pub fn default_presets() -> &'static [PresetCategory] {
    DOMAIN_PRESETS
}

/// Find the category that offers `tag`, if any.
pub fn category_of(tag: &str) -> Option<&'static PresetCategory> {
    DOMAIN_PRESETS.iter().find(|c| c.contains(tag))
}

/// Find a category index by name.
pub fn category_index(name: &str) -> Option<usize> {
    DOMAIN_PRESETS.iter().position(|c| c.name == name)
}

/// A canned AI-assist hint shown beside the annotation list.
///
/// There is no inference behind it; applying it changes nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssistSuggestion {
    /// Human-readable hint
    pub text: &'static str,
    /// The preset tag the hint refers to
    pub preset: &'static str,
    /// Reported confidence in 0.0-1.0
    pub confidence: f32,
}

/// The static suggestion the workspace displays.
pub const ASSIST_SUGGESTION: AssistSuggestion = AssistSuggestion {
    text: "系统在右侧区域识别出【三角洲前缘】沉积特征 (置信度 89%)。",
    preset: "三角洲前缘",
    confidence: 0.89,
};
