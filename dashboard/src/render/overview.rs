//! Platform overview

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::render::badge::{online_badge, status_badge, Badge};
use crate::state::DashboardSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedBadge {
    pub name: String,
    pub badge: Badge,
}

impl NamedBadge {
    fn new(name: impl Into<String>, badge: Badge) -> Self {
        Self {
            name: name.into(),
            badge,
        }
    }
}

/// Everything the overview shows for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub online: bool,
    pub indicator: Badge,
    pub integrations: Vec<NamedBadge>,
    pub health: Option<Badge>,
    pub health_services: Vec<NamedBadge>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn flag_badge(flag: bool) -> Badge {
    status_badge(if flag { "connected" } else { "disconnected" })
}

pub fn overview(snapshot: &DashboardSnapshot) -> Overview {
    let platform = snapshot.platform.as_ref();

    let integrations = match platform {
        Some(status) => status
            .integrations()
            .iter()
            .map(|(name, flag)| NamedBadge::new(*name, flag_badge(*flag)))
            .collect(),
        None => Vec::new(),
    };

    let (health, health_services) = match &snapshot.health {
        Some(summary) => (
            Some(status_badge(&summary.status)),
            summary
                .services
                .iter()
                .map(|(name, state)| NamedBadge::new(name.clone(), status_badge(state)))
                .collect(),
        ),
        None => (None, Vec::new()),
    };

    Overview {
        online: snapshot.is_online(),
        indicator: online_badge(platform),
        integrations,
        health,
        health_services,
        updated_at: snapshot.updated_at,
    }
}
