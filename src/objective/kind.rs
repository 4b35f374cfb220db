//! Objective selection by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    CompanyObjective, DriverObjective, FairnessObjective, FatigueObjective, Objective,
    PriorityObjective,
};
use crate::config::RoutingConfig;
use crate::error::RoutingError;

/// The three ethical modifiers of the driver objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EthicalRule {
    Fairness,
    Fatigue,
    Priority,
}

impl EthicalRule {
    pub const ALL: [EthicalRule; 3] = [Self::Fairness, Self::Fatigue, Self::Priority];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fairness => "fairness",
            Self::Fatigue => "fatigue",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for EthicalRule {
    type Err = RoutingError;

    /// Unknown names are an error; there is no fallback rule.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fairness" => Ok(Self::Fairness),
            "fatigue" => Ok(Self::Fatigue),
            "priority" => Ok(Self::Priority),
            _ => Err(RoutingError::UnsupportedObjective { name: s.to_string() }),
        }
    }
}

impl fmt::Display for EthicalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one of the five objective variants.
///
/// # Examples
///
/// ```
/// use u_dispatch::objective::{EthicalRule, ObjectiveKind};
///
/// let kind: ObjectiveKind = "fatigue".parse().unwrap();
/// assert_eq!(kind, ObjectiveKind::Fatigue);
/// assert_eq!(ObjectiveKind::from(EthicalRule::Priority), ObjectiveKind::Priority);
/// assert!("kindness".parse::<ObjectiveKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveKind {
    Company,
    Driver,
    Fairness,
    Fatigue,
    Priority,
}

impl ObjectiveKind {
    pub const ALL: [ObjectiveKind; 5] = [
        Self::Company,
        Self::Driver,
        Self::Fairness,
        Self::Fatigue,
        Self::Priority,
    ];

    /// Resolves an ethical rule name.
    pub fn ethical(rule: &str) -> Result<Self, RoutingError> {
        rule.parse::<EthicalRule>().map(Self::from)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Driver => "driver",
            Self::Fairness => "fairness",
            Self::Fatigue => "fatigue",
            Self::Priority => "priority",
        }
    }

    /// The ethical rule behind this kind, if it is one.
    pub fn ethical_rule(&self) -> Option<EthicalRule> {
        match self {
            Self::Fairness => Some(EthicalRule::Fairness),
            Self::Fatigue => Some(EthicalRule::Fatigue),
            Self::Priority => Some(EthicalRule::Priority),
            Self::Company | Self::Driver => None,
        }
    }

    /// Creates a fresh objective with empty per-run memory.
    pub fn objective(&self, config: &RoutingConfig) -> Box<dyn Objective> {
        match self {
            Self::Company => Box::new(CompanyObjective),
            Self::Driver => Box::new(DriverObjective),
            Self::Fairness => Box::new(FairnessObjective::new(config)),
            Self::Fatigue => Box::new(FatigueObjective::new(config)),
            Self::Priority => Box::new(PriorityObjective::new(config)),
        }
    }
}

impl From<EthicalRule> for ObjectiveKind {
    fn from(rule: EthicalRule) -> Self {
        match rule {
            EthicalRule::Fairness => Self::Fairness,
            EthicalRule::Fatigue => Self::Fatigue,
            EthicalRule::Priority => Self::Priority,
        }
    }
}

impl FromStr for ObjectiveKind {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "company" => Ok(Self::Company),
            "driver" => Ok(Self::Driver),
            _ => Self::ethical(s),
        }
    }
}

impl fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
