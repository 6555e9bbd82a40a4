//! Rule-based symptom risk classifier.
//!
//! Symptom text is matched against an ordered [`RULES`] table. Each rule
//! that fires contributes a candidate condition and may *assign* the running
//! risk score. Assignments overwrite each other in table order; they are
//! never summed or maxed. An age adjustment is applied after all rules, and
//! the result is clamped to `[MIN_RISK_SCORE, MAX_RISK_SCORE]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Score every assessment starts from before any rule fires.
pub const BASE_RISK_SCORE: i32 = 20;

pub const MIN_RISK_SCORE: i32 = 0;
pub const MAX_RISK_SCORE: i32 = 100;

/// Scores strictly above this are [`RiskLevel::High`].
pub const HIGH_RISK_THRESHOLD: i32 = 60;
/// Scores strictly above this (and not high) are [`RiskLevel::Medium`].
pub const MEDIUM_RISK_THRESHOLD: i32 = 30;

/// Ages strictly above this receive [`SENIOR_AGE_ADJUSTMENT`].
pub const SENIOR_AGE: i32 = 60;
pub const SENIOR_AGE_ADJUSTMENT: i32 = 10;
/// Ages strictly below this receive [`MINOR_AGE_ADJUSTMENT`].
pub const MINOR_AGE: i32 = 18;
pub const MINOR_AGE_ADJUSTMENT: i32 = 5;

/// Condition reported when no rule matches.
pub const NO_CONDITION_IDENTIFIED: &str = "No specific condition identified";

/// Prepended to the recommendations of high-risk assessments.
pub const URGENT_RECOMMENDATION: &str = "Seek immediate medical attention";

/// Recommendations present on every assessment, in order.
pub const BASE_RECOMMENDATIONS: &[&str] = &[
    "Monitor symptoms and stay hydrated",
    "Get adequate rest",
    "Consult healthcare provider if symptoms persist or worsen",
    "Take over-the-counter medications as appropriate",
];

// ---------------------------------------------------------------------------
// Risk level
// ---------------------------------------------------------------------------

/// Coarse risk tier. The classifier only produces `Low`, `Medium` and `High`;
/// `Critical` exists because the `predictions.risk_level` column allows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Map a (clamped) risk score to its tier.
    pub fn from_score(score: i32) -> Self {
        if score > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            other => Err(format!("Unknown risk level '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

const FEVER_TERMS: &[&str] = &["fever", "temperature", "hot"];
const RESPIRATORY_TERMS: &[&str] = &["cough", "throat", "sore"];
const MALAISE_TERMS: &[&str] = &["headache", "body ache", "tired"];
const HEADACHE_TERMS: &[&str] = &["headache", "head pain", "migraine"];
const MIGRAINE_TERMS: &[&str] = &["nausea", "light sensitivity"];
const CARDIAC_TERMS: &[&str] = &["chest pain", "heart", "breathing"];
const GASTRIC_TERMS: &[&str] = &["stomach", "nausea", "vomiting", "diarrhea"];

/// Additional precondition on a rule beyond its term groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGate {
    Always,
    /// Skip the rule if the named condition has already been matched.
    UnlessMatched(&'static str),
}

/// One row of the classifier rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub condition: &'static str,
    pub probability: i32,
    pub risk_level: RiskLevel,
    /// Every group must contribute at least one substring match.
    pub requires: &'static [&'static [&'static str]],
    pub gate: RuleGate,
    /// Score assigned when the rule fires; `None` leaves the score untouched.
    pub assigns_score: Option<i32>,
}

impl Rule {
    /// Whether the lowercased `text` satisfies every term group of this rule.
    pub fn matches(&self, text: &str) -> bool {
        self.requires
            .iter()
            .all(|group| group.iter().any(|term| text.contains(term)))
    }
}

/// Classifier rules in precedence order. Later score assignments win.
pub const RULES: &[Rule] = &[
    Rule {
        condition: "Common Cold/Flu",
        probability: 75,
        risk_level: RiskLevel::Low,
        requires: &[FEVER_TERMS, RESPIRATORY_TERMS],
        gate: RuleGate::Always,
        assigns_score: Some(30),
    },
    Rule {
        condition: "Viral Infection",
        probability: 65,
        risk_level: RiskLevel::Medium,
        requires: &[FEVER_TERMS, MALAISE_TERMS],
        gate: RuleGate::UnlessMatched("Common Cold/Flu"),
        assigns_score: Some(45),
    },
    Rule {
        condition: "Tension Headache",
        probability: 60,
        risk_level: RiskLevel::Low,
        requires: &[HEADACHE_TERMS],
        gate: RuleGate::Always,
        assigns_score: None,
    },
    Rule {
        condition: "Migraine",
        probability: 70,
        risk_level: RiskLevel::Medium,
        requires: &[HEADACHE_TERMS, MIGRAINE_TERMS],
        gate: RuleGate::Always,
        assigns_score: Some(40),
    },
    Rule {
        condition: "Possible Cardiac Issue",
        probability: 50,
        risk_level: RiskLevel::High,
        requires: &[CARDIAC_TERMS],
        gate: RuleGate::Always,
        assigns_score: Some(75),
    },
    Rule {
        condition: "Gastroenteritis",
        probability: 65,
        risk_level: RiskLevel::Medium,
        requires: &[GASTRIC_TERMS],
        gate: RuleGate::Always,
        assigns_score: Some(35),
    },
];

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// A candidate condition in an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub name: String,
    /// Probability in percent.
    pub probability: i32,
    pub risk_level: RiskLevel,
}

/// Classifier output, serialized as-is in API responses and persisted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub conditions: Vec<ConditionMatch>,
    pub risk_score: i32,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

/// Score adjustment contributed by the patient's age.
pub fn age_adjustment(age: Option<i32>) -> i32 {
    match age {
        Some(a) if a > SENIOR_AGE => SENIOR_AGE_ADJUSTMENT,
        Some(a) if a < MINOR_AGE => MINOR_AGE_ADJUSTMENT,
        _ => 0,
    }
}

/// Classify free-text symptoms into candidate conditions and a risk score.
pub fn classify(symptoms: &str, age: Option<i32>) -> RiskAssessment {
    let text = symptoms.to_lowercase();

    let mut matched: Vec<&Rule> = Vec::new();
    let mut score = BASE_RISK_SCORE;

    for rule in RULES {
        if let RuleGate::UnlessMatched(other) = rule.gate {
            if matched.iter().any(|m| m.condition == other) {
                continue;
            }
        }
        if !rule.matches(&text) {
            continue;
        }
        if let Some(assigned) = rule.assigns_score {
            score = assigned;
        }
        matched.push(rule);
    }

    score += age_adjustment(age);
    let risk_score = score.clamp(MIN_RISK_SCORE, MAX_RISK_SCORE);
    let risk_level = RiskLevel::from_score(risk_score);

    let conditions = if matched.is_empty() {
        vec![ConditionMatch {
            name: NO_CONDITION_IDENTIFIED.to_string(),
            probability: 0,
            risk_level: RiskLevel::Low,
        }]
    } else {
        matched
            .iter()
            .map(|rule| ConditionMatch {
                name: rule.condition.to_string(),
                probability: rule.probability,
                risk_level: rule.risk_level,
            })
            .collect()
    };

    let mut recommendations = Vec::with_capacity(BASE_RECOMMENDATIONS.len() + 1);
    if risk_score > HIGH_RISK_THRESHOLD {
        recommendations.push(URGENT_RECOMMENDATION.to_string());
    }
    recommendations.extend(BASE_RECOMMENDATIONS.iter().map(|r| r.to_string()));

    RiskAssessment {
        conditions,
        risk_score,
        risk_level,
        recommendations,
    }
}
