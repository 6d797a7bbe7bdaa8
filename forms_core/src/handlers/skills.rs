//! Read-only skill taxonomy endpoint.

use axum::{extract::Query, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::{
    i18n::Lang,
    skills::{MAX_SELECTED_SKILLS, SKILL_CATEGORIES},
};

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    lang: Option<String>,
}

/// GET /api/skills?lang=fr|en
pub async fn handle_skills(Query(params): Query<SkillsQuery>) -> impl IntoResponse {
    let lang = Lang::from_tag(params.lang.as_deref());

    let categories: Vec<_> = SKILL_CATEGORIES
        .iter()
        .map(|category| {
            json!({
                "id": category.id,
                "name": category.name.get(lang),
                "icon": category.icon,
                "skills": category
                    .skills
                    .iter()
                    .map(|skill| json!({"id": skill.id, "name": skill.name.get(lang)}))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    Json(json!({
        "lang": lang,
        "max_selection": MAX_SELECTED_SKILLS,
        "categories": categories,
    }))
}
