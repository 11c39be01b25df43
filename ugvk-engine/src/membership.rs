//! Field eligibility from allow/deny lists
//!
//! Lists are field names separated by `:` or `;`. Names are matched exactly,
//! surrounding whitespace included. The policy is:
//!
//! - attach-all: every field except denied ones
//! - non-empty allow list: only allowed fields (the deny list is ignored)
//! - non-empty deny list alone: every field except denied ones
//! - otherwise: no field at all

use std::collections::HashSet;

const NAME_DELIMITERS: [char; 2] = [':', ';'];

/// Set of fields the engine instruments. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldMembership {
    /// No field is instrumented
    #[default]
    Disabled,
    /// Only the listed fields
    Only(HashSet<String>),
    /// Every field except the listed ones
    AllExcept(HashSet<String>),
}

/// Split a delimited name list, dropping empty names
fn parse_names(list: &str) -> HashSet<String> {
    list.split(NAME_DELIMITERS)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

impl FieldMembership {
    /// Build the policy from raw allow/deny lists.
    pub fn from_lists(allow: &str, deny: &str, attach_all: bool) -> Self {
        let allow = parse_names(allow);
        let deny = parse_names(deny);

        if attach_all {
            Self::AllExcept(deny)
        } else if !allow.is_empty() {
            Self::Only(allow)
        } else if !deny.is_empty() {
            Self::AllExcept(deny)
        } else {
            Self::Disabled
        }
    }

    /// Instrument every field
    pub fn all() -> Self {
        Self::AllExcept(HashSet::new())
    }

    pub fn is_eligible(&self, field: &str) -> bool {
        match self {
            Self::Disabled => false,
            Self::Only(names) => names.contains(field),
            Self::AllExcept(names) => !names.contains(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lists_disable_everything() {
        let membership = FieldMembership::from_lists("", "", false);
        assert_eq!(membership, FieldMembership::Disabled);
        assert!(!membership.is_eligible("field1"));
    }

    #[test]
    fn test_allow_list() {
        let membership = FieldMembership::from_lists("field1:field2", "", false);
        assert!(membership.is_eligible("field1"));
        assert!(membership.is_eligible("field2"));
        assert!(!membership.is_eligible("field3"));
    }

    #[test]
    fn test_deny_list_alone_means_all_others() {
        let membership = FieldMembership::from_lists("", "secret;password", false);
        assert!(membership.is_eligible("comment"));
        assert!(!membership.is_eligible("secret"));
        assert!(!membership.is_eligible("password"));
    }

    #[test]
    fn test_allow_list_wins_over_deny_list() {
        let membership = FieldMembership::from_lists("field1", "field1:field2", false);
        assert!(membership.is_eligible("field1"));
        assert!(!membership.is_eligible("field2"));
        assert!(!membership.is_eligible("other"));
    }

    #[test]
    fn test_attach_all() {
        let membership = FieldMembership::from_lists("field1", "field2", true);
        assert!(membership.is_eligible("field1"));
        assert!(membership.is_eligible("other"));
        assert!(!membership.is_eligible("field2"));
        assert!(FieldMembership::all().is_eligible("anything"));
    }

    #[test]
    fn test_blank_names_ignored() {
        let membership = FieldMembership::from_lists("::a;;b:", "", false);
        assert_eq!(
            membership,
            FieldMembership::Only(["a".to_string(), "b".to_string()].into_iter().collect())
        );
        assert!(!membership.is_eligible(""));
    }

    #[test]
    fn test_names_are_not_trimmed() {
        let membership = FieldMembership::from_lists(" a:b ", "", false);
        assert!(membership.is_eligible(" a"));
        assert!(membership.is_eligible("b "));
        assert!(!membership.is_eligible("a"));
        assert!(!membership.is_eligible("b"));
    }
}
