//! Cancellation policy tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cancellation policy attached to a listing and copied onto each booking.
///
/// Wire codes are `flexible`, `moderate`, `strict` and `non_refundable`.
/// Any other code deserializes to [`CancellationPolicy::Flexible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CancellationPolicy {
    /// Full refund up to one day before check-in.
    #[default]
    Flexible,
    /// Full refund up to five days before check-in.
    Moderate,
    /// Half refund up to seven days before check-in, nothing after.
    Strict,
    /// Never refunded.
    NonRefundable,
}

impl CancellationPolicy {
    /// All policies, most generous first.
    pub const ALL: [CancellationPolicy; 4] = [
        CancellationPolicy::Flexible,
        CancellationPolicy::Moderate,
        CancellationPolicy::Strict,
        CancellationPolicy::NonRefundable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CancellationPolicy::Flexible => "flexible",
            CancellationPolicy::Moderate => "moderate",
            CancellationPolicy::Strict => "strict",
            CancellationPolicy::NonRefundable => "non_refundable",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CancellationPolicy::Flexible => "Flexible",
            CancellationPolicy::Moderate => "Moderate",
            CancellationPolicy::Strict => "Strict",
            CancellationPolicy::NonRefundable => "Non-refundable",
        }
    }

    /// Parse a known policy code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "flexible" => Some(CancellationPolicy::Flexible),
            "moderate" => Some(CancellationPolicy::Moderate),
            "strict" => Some(CancellationPolicy::Strict),
            "non_refundable" => Some(CancellationPolicy::NonRefundable),
            _ => None,
        }
    }

    /// Parse a policy code, treating unrecognized codes as `flexible`.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::debug!(code, "unrecognized cancellation policy, using flexible");
            CancellationPolicy::Flexible
        })
    }

    /// Refund percentage for a cancellation made `days_until_check_in` days
    /// ahead. Always one of 0, 50 or 100.
    pub fn refund_percentage(&self, days_until_check_in: i64) -> u32 {
        match self {
            CancellationPolicy::Flexible => {
                if days_until_check_in >= 1 {
                    100
                } else {
                    50
                }
            }
            CancellationPolicy::Moderate => {
                if days_until_check_in >= 5 {
                    100
                } else {
                    50
                }
            }
            CancellationPolicy::Strict => {
                if days_until_check_in >= 7 {
                    50
                } else {
                    0
                }
            }
            CancellationPolicy::NonRefundable => 0,
        }
    }

    /// Guest-facing summary of the tier.
    pub fn summary(&self) -> &'static str {
        match self {
            CancellationPolicy::Flexible => {
                "Full refund until 1 day before check-in, 50% afterwards"
            }
            CancellationPolicy::Moderate => {
                "Full refund until 5 days before check-in, 50% afterwards"
            }
            CancellationPolicy::Strict => {
                "50% refund until 7 days before check-in, none afterwards"
            }
            CancellationPolicy::NonRefundable => "No refund",
        }
    }
}

impl From<String> for CancellationPolicy {
    fn from(code: String) -> Self {
        Self::from_code_or_default(&code)
    }
}

impl From<CancellationPolicy> for String {
    fn from(policy: CancellationPolicy) -> Self {
        policy.as_str().to_string()
    }
}

impl fmt::Display for CancellationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
