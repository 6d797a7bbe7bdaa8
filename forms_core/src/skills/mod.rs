//! Static bilingual skill taxonomy and bounded selection.
//!
//! One canonical data shape: a bilingual record per skill, grouped in
//! four categories. The taxonomy is read-only; the beta-signup
//! validator does not cross-check submitted ids against it.

use crate::i18n::Lang;

pub const MAX_SELECTED_SKILLS: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct LocalizedText {
    pub fr: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Fr => self.fr,
            Lang::En => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub id: &'static str,
    pub name: LocalizedText,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub id: &'static str,
    pub name: LocalizedText,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

macro_rules! skill {
    ($id:literal, $fr:literal, $en:literal) => {
        Skill {
            id: $id,
            name: LocalizedText { fr: $fr, en: $en },
        }
    };
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "tech",
        name: LocalizedText { fr: "Tech", en: "Tech" },
        icon: "💻",
        skills: &[
            skill!("cloud", "Cloud & Infrastructure", "Cloud & Infrastructure"),
            skill!("devops", "DevOps & CI/CD", "DevOps & CI/CD"),
            skill!("security", "Cybersécurité", "Cybersecurity"),
            skill!("data", "Data & Analytics", "Data & Analytics"),
            skill!("ai", "IA & Machine Learning", "AI & Machine Learning"),
            skill!("web", "Développement Web", "Web Development"),
        ],
    },
    SkillCategory {
        id: "leadership",
        name: LocalizedText { fr: "Leadership", en: "Leadership" },
        icon: "🎯",
        skills: &[
            skill!("management", "Management d'équipe", "Team Management"),
            skill!("communication", "Communication", "Communication"),
            skill!("agile", "Agilité & Scrum", "Agile & Scrum"),
            skill!("coaching", "Coaching", "Coaching"),
            skill!("strategy", "Stratégie", "Strategy"),
            skill!("change", "Conduite du changement", "Change Management"),
        ],
    },
    SkillCategory {
        id: "business",
        name: LocalizedText { fr: "Business", en: "Business" },
        icon: "📊",
        skills: &[
            skill!("finance", "Finance", "Finance"),
            skill!("marketing", "Marketing Digital", "Digital Marketing"),
            skill!("sales", "Vente & Négociation", "Sales & Negotiation"),
            skill!("product", "Product Management", "Product Management"),
            skill!("analytics", "Business Analytics", "Business Analytics"),
            skill!("compliance", "Conformité & RGPD", "Compliance & GDPR"),
        ],
    },
    SkillCategory {
        id: "personal",
        name: LocalizedText { fr: "Personnel", en: "Personal" },
        icon: "🧠",
        skills: &[
            skill!("productivity", "Productivité", "Productivity"),
            skill!("presentation", "Prise de parole", "Public Speaking"),
            skill!("writing", "Écriture professionnelle", "Professional Writing"),
            skill!("critical", "Pensée critique", "Critical Thinking"),
            skill!("emotional", "Intelligence émotionnelle", "Emotional Intelligence"),
            skill!("learning", "Apprendre à apprendre", "Learning to Learn"),
        ],
    },
];

pub fn find_skill(id: &str) -> Option<&'static Skill> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|category| category.skills)
        .find(|skill| skill.id == id)
}

/// A bounded set of selected skill ids, capped at
/// [`MAX_SELECTED_SKILLS`]. Pure value semantics: `toggle` returns a
/// new selection, so callers pass state explicitly instead of sharing
/// mutable cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSelection {
    ids: Vec<String>,
}

impl SkillSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTED_SKILLS
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Whether a toggle on `id` would select it or deselect it; a full
    /// selection still allows deselecting its own members.
    pub fn can_select(&self, id: &str) -> bool {
        self.contains(id) || !self.is_full()
    }

    /// Returns the selection with `id` toggled, preserving insertion
    /// order. Selecting a new id while full is a no-op.
    pub fn toggle(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        if let Some(pos) = ids.iter().position(|s| s == id) {
            ids.remove(pos);
        } else if ids.len() < MAX_SELECTED_SKILLS {
            ids.push(id.to_string());
        }
        Self { ids }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}
