// ABOUTME: Keyword-based job title classification into canonical role categories.
// ABOUTME: Rules form an ordered decision list; the first matching rule wins.

use std::fmt;

/// Canonical role categories a scraped title can be folded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleCategory {
    Leadership,
    SoftwareEngineer,
    DataScientist,
    DataEngineer,
    DataAnalyst,
    BiEngineer,
    MachineLearningEngineer,
    Statistician,
}

impl TitleCategory {
    pub const ALL: [TitleCategory; 8] = [
        TitleCategory::Leadership,
        TitleCategory::SoftwareEngineer,
        TitleCategory::DataScientist,
        TitleCategory::DataEngineer,
        TitleCategory::DataAnalyst,
        TitleCategory::BiEngineer,
        TitleCategory::MachineLearningEngineer,
        TitleCategory::Statistician,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TitleCategory::Leadership => "Leadership",
            TitleCategory::SoftwareEngineer => "Software Engineer",
            TitleCategory::DataScientist => "Data Scientist",
            TitleCategory::DataEngineer => "Data Engineer",
            TitleCategory::DataAnalyst => "Data Analyst",
            TitleCategory::BiEngineer => "BI Engineer",
            TitleCategory::MachineLearningEngineer => "Machine Learning Engineer",
            TitleCategory::Statistician => "Statistician",
        }
    }
}

impl fmt::Display for TitleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const LEADERSHIP_WORDS: [&str; 5] = ["headof", "chief", "president", "director", "manager"];
const DATA_ENGINEER_WORDS: [&str; 4] = ["engineer", "warehouse", "architect", "base"];

/// Classifies a title, or returns `None` when no rule applies.
///
/// Titles are compared lower-cased with spaces removed, so "Head of Data"
/// and "headofdata" match the same rules. The one exception is the "bi "
/// check, which needs the trailing space and so looks at the lower-cased
/// title with spaces intact. A "data" title that names none of the known
/// data roles stays unclassified and never reaches the later rules.
pub fn classify_title(title: &str) -> Option<TitleCategory> {
    let spaced = title.to_lowercase();
    let t = spaced.replace(' ', "");
    let has = |needle: &str| t.contains(needle);

    if LEADERSHIP_WORDS.iter().any(|w| has(w)) {
        return Some(TitleCategory::Leadership);
    }
    if has("software") && (has("engineer") || has("developer")) {
        return Some(TitleCategory::SoftwareEngineer);
    }
    if has("data") {
        if has("scientist") || has("science") {
            return Some(TitleCategory::DataScientist);
        }
        if DATA_ENGINEER_WORDS.iter().any(|w| has(w)) {
            return Some(TitleCategory::DataEngineer);
        }
        if has("analyst") {
            return Some(TitleCategory::DataAnalyst);
        }
        return None;
    }
    if (has("business") && (has("intelligence") || has("analyst"))) || spaced.contains("bi ") {
        return Some(TitleCategory::BiEngineer);
    }
    if has("machine") && has("learning") && (has("engineer") || has("scientist")) {
        return Some(TitleCategory::MachineLearningEngineer);
    }
    if has("analyst") {
        return Some(TitleCategory::DataAnalyst);
    }
    if has("statistician") {
        return Some(TitleCategory::Statistician);
    }
    if has("hadoop") {
        return Some(TitleCategory::DataEngineer);
    }
    None
}

/// Returns the category label for a title, or the title itself if unclassified.
pub fn clean_title(title: &str) -> String {
    match classify_title(title) {
        Some(category) => category.as_str().to_string(),
        None => title.to_string(),
    }
}
