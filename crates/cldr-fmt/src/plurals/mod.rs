//! CLDR plural rule evaluation.
//!
//! This module parses plural rule text into conditions and selects the
//! plural category of a number from its operands. Selection is exact:
//! trailing fraction zeros and decimal range literals are honored without
//! floating-point round-off.

mod category;
mod operands;
mod rule;
mod rules;
mod samples;

pub use category::{PluralCategory, RULE_COUNT_PREFIX};
pub use operands::PluralOperands;
pub use rule::{DecimalValue, Operand, RangeItem, Relation, Rule};
pub use rules::{PluralRuleSet, plural_category};
pub use samples::{SampleList, SampleRange, Samples};
