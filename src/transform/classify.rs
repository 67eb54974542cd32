//! Category assignment heuristic.
//!
//! The department column wins when one was assigned. Otherwise an ordered
//! keyword rule list is matched against the lowercased product name, first
//! match wins, and unmatched products land in the generic spare-parts bucket.

/// Department value the export uses when no department was assigned.
pub const NO_DEPARTMENT: &str = "- Sin Departamento -";

/// Category used when no rule matches.
pub const DEFAULT_CATEGORY: &str = "Repuestos";

/// Keyword rules evaluated in order against the lowercased name.
const NAME_RULES: &[(&[&str], &str)] = &[
    (&["aceite"], "Lubricantes"),
    (&["bateria"], "Eléctrico"),
    (&["foco", "luz"], "Iluminación"),
];

/// Assign a category from the department field, falling back to keyword
/// matching on the product name.
pub fn classify(name: &str, department: &str) -> String {
    if !department.is_empty() && department != NO_DEPARTMENT {
        return department.to_string();
    }

    let lowered = name.to_lowercase();
    for (keywords, category) in NAME_RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return (*category).to_string();
        }
    }

    DEFAULT_CATEGORY.to_string()
}

/// Describe the rule table for the `rules` CLI command.
pub fn rules_description() -> String {
    let mut out = String::from("Category assignment, first match wins:\n\n");
    out.push_str(&format!(
        "  department assigned (not \"{}\")  ->  department, verbatim\n",
        NO_DEPARTMENT
    ));
    for (keywords, category) in NAME_RULES {
        out.push_str(&format!(
            "  name contains {:<18}  ->  {}\n",
            keywords.join(" | "),
            category
        ));
    }
    out.push_str(&format!("  otherwise  ->  {}\n", DEFAULT_CATEGORY));
    out
}
