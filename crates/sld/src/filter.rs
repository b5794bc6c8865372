//! OGC Filter Encoding 1.0 predicates used by SLD rules.

use std::fmt;
use std::ops::Add;

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    EqualTo,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
}

impl ComparisonOperator {
    /// Element name inside `ogc:Filter`.
    pub fn element_name(&self) -> &'static str {
        match self {
            ComparisonOperator::EqualTo => "PropertyIsEqualTo",
            ComparisonOperator::LessThanOrEqualTo => "PropertyIsLessThanOrEqualTo",
            ComparisonOperator::GreaterThanOrEqualTo => "PropertyIsGreaterThanOrEqualTo",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::EqualTo => "==",
            ComparisonOperator::LessThanOrEqualTo => "<=",
            ComparisonOperator::GreaterThanOrEqualTo => ">=",
        }
    }
}

/// A rule filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `property <op> literal`
    Comparison {
        operator: ComparisonOperator,
        property: String,
        literal: String,
    },

    /// All children must match
    And(Vec<Filter>),
}

impl Filter {
    pub fn compare(
        operator: ComparisonOperator,
        property: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Filter::Comparison {
            operator,
            property: property.into(),
            literal: literal.into(),
        }
    }

    pub fn equal_to(property: impl Into<String>, literal: impl Into<String>) -> Self {
        Self::compare(ComparisonOperator::EqualTo, property, literal)
    }

    /// `lower <= property <= upper`, both ends inclusive.
    pub fn between_inclusive(
        property: &str,
        lower: impl Into<String>,
        upper: impl Into<String>,
    ) -> Self {
        Self::compare(ComparisonOperator::GreaterThanOrEqualTo, property, lower)
            + Self::compare(ComparisonOperator::LessThanOrEqualTo, property, upper)
    }

    /// Comparisons in document order, flattening logical operators.
    pub fn comparisons(&self) -> Vec<(&ComparisonOperator, &str, &str)> {
        match self {
            Filter::Comparison {
                operator,
                property,
                literal,
            } => vec![(operator, property.as_str(), literal.as_str())],
            Filter::And(children) => children.iter().flat_map(Filter::comparisons).collect(),
        }
    }
}

/// `a + b` joins two filters with `ogc:And`.
impl Add for Filter {
    type Output = Filter;

    fn add(self, rhs: Filter) -> Filter {
        match self {
            Filter::And(mut children) => {
                children.push(rhs);
                Filter::And(children)
            }
            other => Filter::And(vec![other, rhs]),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Comparison {
                operator,
                property,
                literal,
            } => write!(f, "{} {} {}", property, operator.symbol(), literal),
            Filter::And(children) => {
                let parts: Vec<String> = children.iter().map(ToString::to_string).collect();
                write!(f, "({})", parts.join(" AND "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_to() {
        let filter = Filter::equal_to("TYPE", "hydrant");
        assert_eq!(filter.to_string(), "TYPE == hydrant");
        assert_eq!(
            filter.comparisons(),
            vec![(&ComparisonOperator::EqualTo, "TYPE", "hydrant")]
        );
    }

    #[test]
    fn test_between_inclusive() {
        let filter = Filter::between_inclusive("POP", "0", "10");
        assert_eq!(filter.to_string(), "(POP >= 0 AND POP <= 10)");
    }

    #[test]
    fn test_add_flattens_and() {
        let filter = Filter::equal_to("A", "1") + Filter::equal_to("B", "2") + Filter::equal_to("C", "3");
        match filter {
            Filter::And(children) => assert_eq!(children.len(), 3),
            other => panic!("Expected And, got {:?}", other),
        }
    }

    #[test]
    fn test_operator_element_names() {
        assert_eq!(ComparisonOperator::EqualTo.element_name(), "PropertyIsEqualTo");
        assert_eq!(
            ComparisonOperator::GreaterThanOrEqualTo.element_name(),
            "PropertyIsGreaterThanOrEqualTo"
        );
        assert_eq!(ComparisonOperator::LessThanOrEqualTo.symbol(), "<=");
    }
}
