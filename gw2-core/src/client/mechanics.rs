//! Game-mechanics endpoints: skills, specializations, traits, masteries,
//! plus the profession-filter helpers built on top of them.

use futures::future::try_join_all;
use serde_json::Value;

use crate::error::ApiError;
use crate::resolver::{resolve_deeper, DEFAULT_BATCH_SIZE};
use crate::selector::{IdSelector, ResourceId};

use super::Gw2Client;

/// Batch size for the full-skill sweep in
/// [`Gw2Client::get_profession_skills`]; skill records are large, so this
/// stays below the generic page size.
const SKILL_SWEEP_BATCH: usize = 50;

impl Gw2Client {
    /// Gets skills.
    pub async fn get_skills(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/skills", selector, false, None).await
    }

    /// Gets specializations.
    pub async fn get_specializations(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/specializations", selector, false, None)
            .await
    }

    /// Gets traits.
    pub async fn get_traits(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/traits", selector, false, None).await
    }

    /// Gets masteries.
    pub async fn get_masteries(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/masteries", selector, false, None).await
    }

    /// Sweeps the full skill list and keeps the skills usable by
    /// `profession`, optionally narrowed to one skill type. Bundle skills
    /// are excluded unless requested; the filter is meaningless when
    /// `skill_type` is already `"Bundle"`.
    pub async fn get_profession_skills(
        &self,
        profession: &str,
        skill_type: Option<&str>,
        include_bundles: bool,
    ) -> Result<Value, ApiError> {
        let ids = self.get_skills(IdSelector::All).await?;
        let ids: Vec<ResourceId> = ids
            .as_array()
            .ok_or_else(|| {
                ApiError::Usage("skill enumeration is not a JSON array".to_string())
            })?
            .iter()
            .filter_map(ResourceId::from_value)
            .collect();

        let sweeps = ids
            .chunks(SKILL_SWEEP_BATCH)
            .map(|batch| self.get_skills(IdSelector::Many(batch.to_vec())));
        let pages = try_join_all(sweeps).await?;

        let mut skills = Vec::new();
        for page in pages {
            let page = page.as_array().cloned().unwrap_or_default();
            for skill in page {
                if !skill_matches(&skill, profession, skill_type, include_bundles) {
                    continue;
                }
                skills.push(skill);
            }
        }

        Ok(Value::Array(skills))
    }

    /// Gets the fully-detailed specializations belonging to `profession`.
    pub async fn get_profession_specializations(
        &self,
        profession: &str,
    ) -> Result<Value, ApiError> {
        let ids = self.get_specializations(IdSelector::All).await?;
        let ids = match ids {
            Value::Array(ids) => ids,
            _ => {
                return Err(ApiError::Usage(
                    "specialization enumeration is not a JSON array".to_string(),
                ))
            }
        };

        // The resolver gives us the chunked fan-out for free.
        let full = resolve_deeper(
            |ids| self.get_specializations(IdSelector::Many(ids)),
            ids,
            DEFAULT_BATCH_SIZE,
        )
        .await?;

        let specs: Vec<Value> = full
            .into_iter()
            .filter(|spec| spec["profession"].as_str() == Some(profession))
            .collect();

        Ok(Value::Array(specs))
    }
}

fn skill_matches(
    skill: &Value,
    profession: &str,
    skill_type: Option<&str>,
    include_bundles: bool,
) -> bool {
    let Some(professions) = skill["professions"].as_array() else {
        return false;
    };
    if !professions.iter().any(|p| p.as_str() == Some(profession)) {
        return false;
    }

    if !include_bundles && skill["type"].as_str() == Some("Bundle") {
        return false;
    }

    match skill_type {
        Some(wanted) => skill["type"].as_str() == Some(wanted),
        None => true,
    }
}
