//! Settings sections and the field schemas that govern them.
//!
//! A settings document is split into eight independent sections. Each section has a
//! fixed set of known fields, each with a type rule and a default value. Unknown keys are
//! allowed through untouched; only known keys are checked. The defaults for a section are
//! built from its schema on every call, so no two documents ever share a value.

use std::{fmt, str::FromStr};

use serde_json::{Map, Number, Value};

use crate::server::error::settings::SettingsError;

/// Key/value contents of a single section.
pub type SectionData = Map<String, Value>;

/// One of the eight named sections of a settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Preferences,
    Notifications,
    Integrations,
    Billing,
    Security,
    Appearance,
    Analytics,
    Customization,
}

impl Section {
    /// Every section, in document order.
    pub const ALL: [Section; 8] = [
        Section::Preferences,
        Section::Notifications,
        Section::Integrations,
        Section::Billing,
        Section::Security,
        Section::Appearance,
        Section::Analytics,
        Section::Customization,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Preferences => "preferences",
            Section::Notifications => "notifications",
            Section::Integrations => "integrations",
            Section::Billing => "billing",
            Section::Security => "security",
            Section::Appearance => "appearance",
            Section::Analytics => "analytics",
            Section::Customization => "customization",
        }
    }

    /// Known fields of this section.
    pub fn schema(self) -> &'static [FieldSpec] {
        match self {
            Section::Preferences => PREFERENCES,
            Section::Notifications => NOTIFICATIONS,
            Section::Integrations => INTEGRATIONS,
            Section::Billing => BILLING,
            Section::Security => SECURITY,
            Section::Appearance => APPEARANCE,
            Section::Analytics => ANALYTICS,
            Section::Customization => CUSTOMIZATION,
        }
    }

    /// Builds a fresh copy of this section's default values.
    pub fn defaults(self) -> SectionData {
        self.schema()
            .iter()
            .map(|field| (field.name.to_string(), field.rule.default_value()))
            .collect()
    }

    /// Checks every known field present in `data` against its rule.
    ///
    /// Absent known fields and unknown keys are accepted.
    ///
    /// # Returns
    /// - `Ok(())` - All present known fields are valid
    /// - `Err(SettingsError::Validation)` - First field that breaks its rule
    pub fn validate(self, data: &SectionData) -> Result<(), SettingsError> {
        for field in self.schema() {
            let Some(value) = data.get(field.name) else {
                continue;
            };

            field
                .rule
                .check(value)
                .map_err(|message| SettingsError::Validation {
                    section: self.as_str().to_string(),
                    field: field.name.to_string(),
                    message,
                })?;
        }

        Ok(())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| SettingsError::InvalidSection(s.to_string()))
    }
}

/// Section selector accepted by a section update: one section or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTarget {
    One(Section),
    All,
}

impl FromStr for SectionTarget {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(SectionTarget::All);
        }

        s.parse().map(SectionTarget::One)
    }
}

/// Type rule and default value for a known field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    Boolean(bool),
    Integer {
        default: i64,
        min: i64,
        max: i64,
    },
    Number {
        default: f64,
        min: f64,
        max: f64,
    },
    /// A string, optionally restricted to `one_of` (empty means any string).
    Text {
        default: &'static str,
        one_of: &'static [&'static str],
    },
    /// An array; the default holds strings.
    List(&'static [&'static str]),
}

impl FieldRule {
    pub fn default_value(&self) -> Value {
        match *self {
            FieldRule::Boolean(default) => Value::Bool(default),
            FieldRule::Integer { default, .. } => Value::from(default),
            // Whole defaults serialize as integers, `0` rather than `0.0`
            FieldRule::Number { default, .. } if default.fract() == 0.0 => {
                Value::from(default as i64)
            }
            FieldRule::Number { default, .. } => Number::from_f64(default)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldRule::Text { default, .. } => Value::String(default.to_string()),
            FieldRule::List(items) => Value::Array(
                items
                    .iter()
                    .map(|item| Value::String(item.to_string()))
                    .collect(),
            ),
        }
    }

    /// Returns a description of the problem if `value` breaks the rule.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match *self {
            FieldRule::Boolean(_) => {
                if !value.is_boolean() {
                    return Err("must be a boolean".to_string());
                }
            }
            FieldRule::Integer { min, max, .. } => {
                let Some(number) = value.as_i64() else {
                    return Err("must be an integer".to_string());
                };
                if number < min || number > max {
                    return Err(format!("must be between {min} and {max}"));
                }
            }
            FieldRule::Number { min, max, .. } => {
                let Some(number) = value.as_f64() else {
                    return Err("must be a number".to_string());
                };
                if number < min || number > max {
                    return Err(format!("must be between {min} and {max}"));
                }
            }
            FieldRule::Text { one_of, .. } => {
                let Some(text) = value.as_str() else {
                    return Err("must be a string".to_string());
                };
                if !one_of.is_empty() && !one_of.contains(&text) {
                    return Err(format!("must be one of: {}", one_of.join(", ")));
                }
            }
            FieldRule::List(_) => {
                if !value.is_array() {
                    return Err("must be an array".to_string());
                }
            }
        }

        Ok(())
    }
}

/// A named field with its rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
}

impl FieldSpec {
    const fn new(name: &'static str, rule: FieldRule) -> Self {
        Self { name, rule }
    }
}

const fn text(default: &'static str) -> FieldRule {
    FieldRule::Text {
        default,
        one_of: &[],
    }
}

const fn integer(default: i64, min: i64, max: i64) -> FieldRule {
    FieldRule::Integer { default, min, max }
}

const PREFERENCES: &[FieldSpec] = &[
    FieldSpec::new(
        "theme",
        FieldRule::Text {
            default: "light",
            one_of: &["light", "dark", "system"],
        },
    ),
    FieldSpec::new("language", text("en")),
    FieldSpec::new("timezone", text("UTC")),
    FieldSpec::new("dateFormat", text("MM/DD/YYYY")),
    FieldSpec::new("currency", text("USD")),
    FieldSpec::new("itemsPerPage", integer(25, 1, 500)),
];

const NOTIFICATIONS: &[FieldSpec] = &[
    FieldSpec::new("emailNotifications", FieldRule::Boolean(true)),
    FieldSpec::new("pushNotifications", FieldRule::Boolean(true)),
    FieldSpec::new("smsNotifications", FieldRule::Boolean(false)),
    FieldSpec::new("lowStockAlerts", FieldRule::Boolean(true)),
    FieldSpec::new("orderUpdates", FieldRule::Boolean(true)),
    FieldSpec::new("weeklyReports", FieldRule::Boolean(false)),
    FieldSpec::new("marketingEmails", FieldRule::Boolean(false)),
];

const INTEGRATIONS: &[FieldSpec] = &[
    FieldSpec::new("apiAccess", FieldRule::Boolean(false)),
    FieldSpec::new("webhooksEnabled", FieldRule::Boolean(false)),
    FieldSpec::new("webhookUrl", text("")),
    FieldSpec::new("connectedServices", FieldRule::List(&[])),
];

const BILLING: &[FieldSpec] = &[
    FieldSpec::new("invoicePrefix", text("INV")),
    FieldSpec::new(
        "taxRate",
        FieldRule::Number {
            default: 0.0,
            min: 0.0,
            max: 100.0,
        },
    ),
    FieldSpec::new("paymentTerms", integer(30, 0, 365)),
    FieldSpec::new("autoReminders", FieldRule::Boolean(true)),
    FieldSpec::new("currencySymbol", text("$")),
];

const SECURITY: &[FieldSpec] = &[
    FieldSpec::new("twoFactorAuth", FieldRule::Boolean(false)),
    // minutes
    FieldSpec::new("sessionTimeout", integer(30, 1, 1440)),
    FieldSpec::new("maxLoginAttempts", integer(5, 1, 20)),
    // days, 0 disables expiry
    FieldSpec::new("passwordExpiry", integer(90, 0, 365)),
    FieldSpec::new("ipWhitelist", FieldRule::List(&[])),
    FieldSpec::new("loginNotifications", FieldRule::Boolean(true)),
];

const APPEARANCE: &[FieldSpec] = &[
    FieldSpec::new("primaryColor", text("#3b82f6")),
    FieldSpec::new("sidebarCollapsed", FieldRule::Boolean(false)),
    FieldSpec::new("compactMode", FieldRule::Boolean(false)),
    FieldSpec::new(
        "fontSize",
        FieldRule::Text {
            default: "medium",
            one_of: &["small", "medium", "large"],
        },
    ),
];

const ANALYTICS: &[FieldSpec] = &[
    FieldSpec::new("trackingEnabled", FieldRule::Boolean(true)),
    FieldSpec::new("dataRetentionDays", integer(365, 1, 3650)),
    FieldSpec::new("shareUsageData", FieldRule::Boolean(false)),
    FieldSpec::new(
        "reportFrequency",
        FieldRule::Text {
            default: "weekly",
            one_of: &["daily", "weekly", "monthly"],
        },
    ),
];

const CUSTOMIZATION: &[FieldSpec] = &[
    FieldSpec::new("companyName", text("")),
    FieldSpec::new("logoUrl", text("")),
    FieldSpec::new("customFields", FieldRule::List(&[])),
    FieldSpec::new(
        "dashboardWidgets",
        FieldRule::List(&["sales", "inventory", "customers"]),
    ),
];
