//! Sequenced audit step recording shared by the calculators.

use crate::models::AuditStep;

/// Collects [`AuditStep`]s and numbers them in the order they are recorded.
#[derive(Debug, Default)]
pub(crate) struct AuditTrail {
    steps: Vec<AuditStep>,
}

impl AuditTrail {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        legal_ref: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            legal_ref: legal_ref.to_string(),
            input,
            output,
            reasoning,
        });
    }

    pub(crate) fn into_steps(self) -> Vec<AuditStep> {
        self.steps
    }
}
