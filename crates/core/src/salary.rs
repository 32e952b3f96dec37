// ABOUTME: Parses free-text pay strings into annualized salary ranges.
// ABOUTME: Detects the pay cadence keyword and scales hourly or periodic figures to a year.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d.]").unwrap());

/// Values above this are taken to be annual when no cadence keyword is present.
pub const ANNUAL_THRESHOLD: f64 = 30_000.0;

/// Pay frequency named in a pay string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Year,
    Month,
    Week,
    Day,
    Hour,
}

impl Cadence {
    /// Finds the cadence keyword, checking year, month, week, day, then hour.
    ///
    /// Matching is case-sensitive on the words as boards print them.
    pub fn detect(pay: &str) -> Option<Cadence> {
        if pay.contains("year") {
            Some(Cadence::Year)
        } else if pay.contains("month") {
            Some(Cadence::Month)
        } else if pay.contains("week") {
            Some(Cadence::Week)
        } else if pay.contains("day") {
            Some(Cadence::Day)
        } else if pay.contains("hour") || pay.contains("hr") {
            Some(Cadence::Hour)
        } else {
            None
        }
    }

    /// Factor that converts one unit of this cadence into a yearly figure.
    pub fn annual_multiplier(&self) -> f64 {
        match self {
            Cadence::Year => 1.0,
            Cadence::Month => 12.0,
            Cadence::Week => 52.0,
            // working days per year
            Cadence::Day => 255.0,
            Cadence::Hour => 40.0 * 52.0,
        }
    }
}

/// An annualized salary: a single figure or a lower/upper range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualPay {
    pub lower: f64,
    pub upper: Option<f64>,
}

/// Outcome of parsing a pay string.
#[derive(Debug, Clone, PartialEq)]
pub enum PayParse {
    Annual(AnnualPay),
    /// The string could not be interpreted; carries the original text.
    Unparsed(String),
}

impl PayParse {
    pub fn annual(&self) -> Option<AnnualPay> {
        match self {
            PayParse::Annual(pay) => Some(*pay),
            PayParse::Unparsed(_) => None,
        }
    }
}

/// Parses a pay string such as `"$80,000 - $100,000 per year"`.
///
/// The string is expected to contain at least one digit. It is split on
/// `-` into at most two figures, each stripped down to digits and dots.
/// Figures are scaled by the cadence keyword; without one, a first figure
/// above [`ANNUAL_THRESHOLD`] is returned as an annual salary on its own.
/// Every failure is logged and returns [`PayParse::Unparsed`].
pub fn parse_pay(pay: &str) -> PayParse {
    let mut values = Vec::with_capacity(2);
    for part in pay.split('-') {
        let digits = NON_NUMERIC_RE.replace_all(part, "");
        match digits.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                tracing::warn!(pay = %pay, "couldn't convert pay to a number");
                return PayParse::Unparsed(pay.to_string());
            }
        }
    }

    if values.len() > 2 {
        tracing::warn!(pay = %pay, parts = values.len(), "too many pay figures");
        return PayParse::Unparsed(pay.to_string());
    }

    let Some(cadence) = Cadence::detect(pay) else {
        return match values.first() {
            Some(&lower) if lower > ANNUAL_THRESHOLD => {
                PayParse::Annual(AnnualPay { lower, upper: None })
            }
            _ => {
                tracing::warn!(pay = %pay, "unrecognized pay format");
                PayParse::Unparsed(pay.to_string())
            }
        };
    };

    let factor = cadence.annual_multiplier();
    let lower = values[0] * factor;
    let upper = values.get(1).map(|v| v * factor);
    PayParse::Annual(ordered(lower, upper))
}

fn ordered(lower: f64, upper: Option<f64>) -> AnnualPay {
    match upper {
        Some(upper) if upper < lower => AnnualPay {
            lower: upper,
            upper: Some(lower),
        },
        _ => AnnualPay { lower, upper },
    }
}
