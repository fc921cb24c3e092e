//! Roster records - raw JSON paired with its typed projection
//!
//! The raw value is what `/roster` serves. The projection is computed once
//! at load time so requests never walk the JSON tree.

use legion_domain::{Agent, Bloc, TriarchicIq};
use serde_json::Value;

/// One entry of the roster
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRecord {
    raw: Value,
    agent: Agent,
}

impl RosterRecord {
    pub fn new(raw: Value) -> Self {
        let agent = project_agent(&raw);
        Self { raw, agent }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }
}

/// Build the typed view of a raw record.
///
/// - `name` must be a string, otherwise the agent is unnamed
/// - `bloc` must be a string, otherwise `Unknown`
/// - `triarchic_iq.analytical` must be a number, otherwise the default applies
///
/// Non-object values project to an unnamed agent.
pub fn project_agent(raw: &Value) -> Agent {
    let Some(fields) = raw.as_object() else {
        return Agent::unnamed();
    };

    let agent = match fields.get("name").and_then(Value::as_str) {
        Some(name) => Agent::new(name),
        None => Agent::unnamed(),
    };

    let bloc = fields
        .get("bloc")
        .and_then(Value::as_str)
        .map(Bloc::parse)
        .unwrap_or_default();

    let analytical = fields
        .get("triarchic_iq")
        .and_then(|iq| iq.get("analytical"))
        .and_then(Value::as_f64);

    agent
        .with_bloc(bloc)
        .with_triarchic_iq(TriarchicIq::new(analytical))
}
