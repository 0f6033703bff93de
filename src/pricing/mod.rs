/**
 * Pricing Module
 *
 * Static pricing catalog and its two endpoints. The catalog is an
 * injected read-only value held in `AppState` rather than module-level
 * state, so tests can substitute their own plan list.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::auth::handlers::types::MessageResponse;
use crate::error::ApiError;
use crate::server::state::AppState;

/// One pricing plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
}

/// Read-only plan catalog
#[derive(Debug, Clone)]
pub struct PricingCatalog {
    plans: Vec<PricingPlan>,
}

impl PricingCatalog {
    pub fn new(plans: Vec<PricingPlan>) -> Self {
        Self { plans }
    }

    pub fn plans(&self) -> &[PricingPlan] {
        &self.plans
    }

    pub fn contains(&self, plan_id: &str) -> bool {
        self.plans.iter().any(|p| p.id == plan_id)
    }

    /// Validate a plan selection
    ///
    /// # Errors
    ///
    /// * `Validation` - `plan_id` absent
    /// * `NotFound` - no plan with that ID
    pub fn select<'a>(&self, plan_id: Option<&'a str>) -> Result<&'a str, ApiError> {
        let plan_id = plan_id.ok_or_else(|| ApiError::validation("El planId es requerido"))?;
        if !self.contains(plan_id) {
            return Err(ApiError::not_found("Plan no encontrado"));
        }
        Ok(plan_id)
    }
}

impl Default for PricingCatalog {
    /// The standard three-plan catalog
    fn default() -> Self {
        let plan = |id: &str, name: &str, price: &str, features: &[&str]| PricingPlan {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        };

        Self::new(vec![
            plan(
                "startup",
                "Startup",
                "$10/month",
                &["10 projects", "5 users", "Basic analytics"],
            ),
            plan(
                "business",
                "Business",
                "$50/month",
                &[
                    "Unlimited projects",
                    "20 users",
                    "Advanced analytics",
                    "Support",
                ],
            ),
            plan(
                "enterprise",
                "Enterprise",
                "Contact us",
                &[
                    "Unlimited everything",
                    "Dedicated support",
                    "Custom integrations",
                ],
            ),
        ])
    }
}

/// Body for POST /pricing/select
///
/// `plan_id` is optional at the serde level so a missing field becomes
/// a domain 400 with its contract message instead of a framework 422.
#[derive(Debug, Deserialize)]
pub struct SelectPlanRequest {
    #[serde(rename = "planId")]
    pub plan_id: Option<String>,
}

/// GET /pricing - the plan catalog
pub async fn get_pricing_plans(State(state): State<AppState>) -> Json<Vec<PricingPlan>> {
    Json(state.pricing.plans().to_vec())
}

/// POST /pricing/select - acknowledge a plan selection
pub async fn select_plan(
    State(state): State<AppState>,
    Json(request): Json<SelectPlanRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let plan_id = state.pricing.select(request.plan_id.as_deref())?;

    Ok(Json(MessageResponse {
        message: format!("Plan seleccionado exitosamente: {plan_id}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_catalog_has_three_plans() {
        let catalog = PricingCatalog::default();
        assert_eq!(catalog.plans().len(), 3);
        assert!(catalog.contains("startup"));
        assert!(catalog.contains("business"));
        assert!(catalog.contains("enterprise"));
    }

    #[test]
    fn test_select_requires_plan_id() {
        let catalog = PricingCatalog::default();
        assert_matches!(
            catalog.select(None),
            Err(ApiError::Validation(m)) if m == "El planId es requerido"
        );
    }

    #[test]
    fn test_select_unknown_plan() {
        let catalog = PricingCatalog::default();
        assert_matches!(
            catalog.select(Some("nope")),
            Err(ApiError::NotFound(m)) if m == "Plan no encontrado"
        );
    }

    #[test]
    fn test_select_known_plan() {
        let catalog = PricingCatalog::default();
        assert_eq!(catalog.select(Some("business")).unwrap(), "business");
    }

    #[test]
    fn test_catalog_is_substitutable() {
        let catalog = PricingCatalog::new(vec![PricingPlan {
            id: "trial".to_string(),
            name: "Trial".to_string(),
            price: "$0".to_string(),
            features: vec![],
        }]);
        assert!(catalog.contains("trial"));
        assert!(!catalog.contains("business"));
    }

    #[test]
    fn test_select_request_missing_field_parses() {
        let request: SelectPlanRequest = serde_json::from_str("{}").unwrap();
        assert!(request.plan_id.is_none());
    }
}
