//! Fixed default collection used on first load and on explicit reset.

use crate::incident::{Incident, IncidentNumber, Priority, Status};

/// Number of records in the seed set.
pub const SEED_LEN: usize = 2;

/// The two seed incidents, stamped with `created_at`.
#[must_use]
pub fn seed_incidents(created_at: &str) -> Vec<Incident> {
    let seed: [Incident; SEED_LEN] = [
        Incident {
            number: IncidentNumber::from("INC001001"),
            short_description: "VPN access failing for remote sales team".to_owned(),
            description: "Multiple users report auth failures after MFA prompt.".to_owned(),
            category: "Network".to_owned(),
            priority: Priority::High,
            assignment_group: "Network Operations".to_owned(),
            requested_by: "Dana Rivers".to_owned(),
            status: Status::InProgress,
            created_at: created_at.to_owned(),
        },
        Incident {
            number: IncidentNumber::from("INC001002"),
            short_description: "New hire cannot access CRM dashboard".to_owned(),
            description: "Account provisioned but SSO group membership appears missing.".to_owned(),
            category: "Access".to_owned(),
            priority: Priority::Moderate,
            assignment_group: "Identity Management".to_owned(),
            requested_by: "Jordan Lee".to_owned(),
            status: Status::New,
            created_at: created_at.to_owned(),
        },
    ];
    Vec::from(seed)
}
