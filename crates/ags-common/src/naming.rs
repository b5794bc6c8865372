//! Slug helpers for file, rule and property names.

/// Lowercase ASCII slug with runs of non-alphanumerics collapsed to `-`.
pub fn slugify(name: &str) -> String {
    ::slug::slugify(name)
}

/// Slug with `-` replaced by `_`, used for data files and icon names.
pub fn underscored(name: &str) -> String {
    slugify(name).replace('-', "_")
}

/// Property name for a label expression such as `[NAME]`.
pub fn label_property(expression: &str) -> String {
    slugify(&expression.replace(['[', ']'], ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Water Mains"), "water-mains");
        assert_eq!(slugify("  Roads / Highways (2019) "), "roads-highways-2019");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Café Zürich"), "cafe-zurich");
    }

    #[test]
    fn test_underscored() {
        assert_eq!(underscored("Bus Stops - Active"), "bus_stops_active");
    }

    #[test]
    fn test_label_property_strips_brackets() {
        assert_eq!(label_property("[NAME]"), "name");
        assert_eq!(label_property("[STREET_NAME]"), "street-name");
    }
}
