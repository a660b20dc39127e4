//! Business-content analysis for BRD generation. Every signal is derived
//! from named, ordered rule tables over the lower-cased input; fallback
//! values apply when no rule matches.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Low => write!(f, "Low"),
            Complexity::Medium => write!(f, "Medium"),
            Complexity::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAnalysis {
    pub project_type: &'static str,
    pub complexity: Complexity,
    pub stakeholders: Vec<&'static str>,
    pub functional_areas: Vec<&'static str>,
    pub integrations: Vec<&'static str>,
    pub business_value: &'static str,
    pub urgency: &'static str,
    pub scope: &'static str,
}

/// Project type: first matching rule wins.
const PROJECT_TYPE_RULES: &[(&[&str], &str)] = &[
    (&["mobile", "app", "ios", "android"], "Mobile Application"),
    (&["web", "website", "portal"], "Web Application"),
    (&["integration", "api", "connect"], "System Integration"),
    (&["dashboard", "analytics", "report"], "Analytics Platform"),
    (&["ecommerce", "shopping", "payment"], "E-commerce Solution"),
    (&["crm", "customer"], "CRM System"),
    (&["inventory", "warehouse", "stock"], "Inventory Management"),
];
const PROJECT_TYPE_FALLBACK: &str = "Business Application";

/// One point per matched indicator; thresholded at 5 (Medium) and 10 (High).
const COMPLEXITY_INDICATORS: &[&str] = &[
    "integration",
    "api",
    "database",
    "security",
    "authentication",
    "authorization",
    "workflow",
    "approval",
    "notification",
    "reporting",
    "analytics",
    "dashboard",
    "mobile",
    "responsive",
    "scalability",
    "performance",
    "compliance",
    "audit",
];

const STAKEHOLDER_RULES: &[(&[&str], &str)] = &[
    (&["admin", "administrator"], "System Administrator"),
    (&["user", "customer", "client"], "End Users"),
    (&["manager", "supervisor"], "Management Team"),
    (&["developer", "technical"], "Development Team"),
    (&["finance", "accounting"], "Finance Department"),
    (&["hr", "human resource"], "HR Department"),
    (&["sales", "marketing"], "Sales & Marketing"),
    (&["support", "helpdesk"], "Support Team"),
];
const STAKEHOLDER_FALLBACK: &[&str] =
    &["Business Users", "System Administrator", "Project Manager"];

const FUNCTIONAL_AREA_RULES: &[(&[&str], &str)] = &[
    (&["login", "auth", "password"], "User Authentication"),
    (&["report", "analytics", "dashboard"], "Reporting & Analytics"),
    (&["notification", "alert", "email"], "Notifications"),
    (&["payment", "transaction", "billing"], "Payment Processing"),
    (&["inventory", "stock", "product"], "Inventory Management"),
    (&["order", "purchase", "cart"], "Order Management"),
    (&["customer", "client", "contact"], "Customer Management"),
    (&["document", "file", "upload"], "Document Management"),
];
const FUNCTIONAL_AREA_FALLBACK: &[&str] =
    &["Core Business Logic", "User Management", "Data Processing"];

/// No fallback: an empty integration list is meaningful.
const INTEGRATION_RULES: &[(&[&str], &str)] = &[
    (&["api", "rest", "soap"], "External APIs"),
    (&["database", "sql", "mongodb"], "Database Systems"),
    (&["email", "smtp"], "Email Services"),
    (&["payment", "stripe", "paypal"], "Payment Gateways"),
    (&["sms", "twilio"], "SMS Services"),
    (&["cloud", "aws", "azure"], "Cloud Services"),
    (&["ldap", "active directory"], "Directory Services"),
];

const BUSINESS_VALUE_RULES: &[(&[&str], &str)] = &[
    (&["cost", "save", "reduce"], "Cost Reduction"),
    (&["efficiency", "automate", "streamline"], "Operational Efficiency"),
    (&["customer", "satisfaction", "experience"], "Customer Experience"),
    (&["revenue", "sales", "profit"], "Revenue Growth"),
    (&["compliance", "regulation", "audit"], "Regulatory Compliance"),
];
const BUSINESS_VALUE_FALLBACK: &str = "Business Process Improvement";

const URGENCY_RULES: &[(&[&str], &str)] = &[
    (&["urgent", "critical", "asap"], "High"),
    (&["soon", "priority", "important"], "Medium"),
];
const URGENCY_FALLBACK: &str = "Normal";

pub fn analyze_business_content(content: &str) -> BusinessAnalysis {
    let text = content.to_lowercase();

    BusinessAnalysis {
        project_type: first_match(&text, PROJECT_TYPE_RULES, PROJECT_TYPE_FALLBACK),
        complexity: assess_complexity(&text),
        stakeholders: all_matches(&text, STAKEHOLDER_RULES, STAKEHOLDER_FALLBACK),
        functional_areas: all_matches(&text, FUNCTIONAL_AREA_RULES, FUNCTIONAL_AREA_FALLBACK),
        integrations: all_matches(&text, INTEGRATION_RULES, &[]),
        business_value: first_match(&text, BUSINESS_VALUE_RULES, BUSINESS_VALUE_FALLBACK),
        urgency: first_match(&text, URGENCY_RULES, URGENCY_FALLBACK),
        scope: determine_scope(&text),
    }
}

fn matches_rule(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn first_match(
    text: &str,
    rules: &[(&[&str], &'static str)],
    fallback: &'static str,
) -> &'static str {
    rules
        .iter()
        .find(|(keywords, _)| matches_rule(text, keywords))
        .map(|(_, label)| *label)
        .unwrap_or(fallback)
}

/// Each rule is tested independently; the fallback set applies only when
/// nothing matched at all.
fn all_matches(
    text: &str,
    rules: &[(&[&str], &'static str)],
    fallback: &[&'static str],
) -> Vec<&'static str> {
    let matched: Vec<&'static str> = rules
        .iter()
        .filter(|(keywords, _)| matches_rule(text, keywords))
        .map(|(_, label)| *label)
        .collect();

    if matched.is_empty() {
        fallback.to_vec()
    } else {
        matched
    }
}

fn assess_complexity(text: &str) -> Complexity {
    let score = COMPLEXITY_INDICATORS
        .iter()
        .filter(|k| text.contains(**k))
        .count();

    if score >= 10 {
        Complexity::High
    } else if score >= 5 {
        Complexity::Medium
    } else {
        Complexity::Low
    }
}

fn determine_scope(text: &str) -> &'static str {
    let word_count = text.split_whitespace().count();
    if word_count > 200 {
        "Large"
    } else if word_count > 100 {
        "Medium"
    } else {
        "Small"
    }
}
