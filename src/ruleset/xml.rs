use std::fmt::Write;

use super::RulesetSelection;

/// Renders a PMD ruleset XML standing in for every rule set with overrides:
/// the rule set minus its overridden rules, plus those rules re-referenced
/// with their properties. `None` when nothing is overridden.
#[must_use]
pub fn render_overrides(selection: &RulesetSelection) -> Option<String> {
    let overridden: Vec<_> = selection.iter().filter(|rs| rs.has_overrides()).collect();
    if overridden.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<ruleset name=\"pmdgate-overrides\"\n");
    out.push_str("    xmlns=\"http://pmd.sourceforge.net/ruleset/2.0.0\"\n");
    out.push_str("    xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n");
    out.push_str("    xsi:schemaLocation=\"http://pmd.sourceforge.net/ruleset/2.0.0 https://pmd.sourceforge.io/ruleset_2_0_0.xsd\">\n");
    out.push_str("  <description>Property overrides generated by pmdgate</description>\n");

    for rs in overridden {
        let _ = writeln!(out, "  <rule ref=\"{}\">", escape(&rs.name));
        for rule in rs.properties.iter().filter(|(_, p)| !p.is_empty()).map(|(r, _)| r) {
            let _ = writeln!(out, "    <exclude name=\"{}\"/>", escape(rule));
        }
        out.push_str("  </rule>\n");
        for (rule, props) in &rs.properties {
            if props.is_empty() {
                continue;
            }
            let _ = writeln!(
                out,
                "  <rule ref=\"{}/{}\">",
                escape(&rs.name),
                escape(rule)
            );
            out.push_str("    <properties>\n");
            for (name, value) in props {
                let _ = writeln!(
                    out,
                    "      <property name=\"{}\" value=\"{}\"/>",
                    escape(name),
                    escape(value)
                );
            }
            out.push_str("    </properties>\n");
            out.push_str("  </rule>\n");
        }
    }
    out.push_str("</ruleset>\n");
    Some(out)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::{predefined, Ruleset};

    #[test]
    fn no_overrides_renders_nothing() {
        let sel = RulesetSelection::new().with([predefined::design()]);
        assert!(render_overrides(&sel).is_none());
    }

    #[test]
    fn overrides_reference_rule_inside_ruleset() {
        let sel = RulesetSelection::new().with([predefined::design_with_complexity(12, 60)]);
        let xml = render_overrides(&sel).unwrap();
        assert!(xml.contains("<rule ref=\"category/java/design.xml/CyclomaticComplexity\">"));
        assert!(xml.contains("<property name=\"methodReportLevel\" value=\"12\"/>"));
        assert!(xml.contains("<exclude name=\"CyclomaticComplexity\"/>"));
    }

    #[test]
    fn values_are_escaped() {
        let sel = RulesetSelection::new()
            .with([Ruleset::new("custom.xml").with_property("R", "regex", "a<b&\"c\"")]);
        let xml = render_overrides(&sel).unwrap();
        assert!(xml.contains("value=\"a&lt;b&amp;&quot;c&quot;\""));
    }
}
