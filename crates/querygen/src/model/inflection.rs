//! English singularization for table-derived struct names.
//!
//! Rules are tried in order: exclusions, a few hand-fixed words,
//! uncountable words, irregular plurals, then suffix rules (most specific
//! first). The first rule that matches wins.

use once_cell::sync::Lazy;
use regex::Regex;

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

/// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("mombie", "mombies"),
];

/// (pattern, replacement), most general first.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("s$", ""),
    ("(ss)$", "${1}"),
    ("(n)ews$", "${1}ews"),
    ("([ti])a$", "${1}um"),
    (
        "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    ),
    ("(^analy)(sis|ses)$", "${1}sis"),
    ("([^f])ves$", "${1}fe"),
    ("(hive)s$", "${1}"),
    ("(tive)s$", "${1}"),
    ("([lr])ves$", "${1}f"),
    ("([^aeiouy]|qu)ies$", "${1}y"),
    ("(s)eries$", "${1}eries"),
    ("(m)ovies$", "${1}ovie"),
    ("(x|ch|ss|sh)es$", "${1}"),
    ("^(m|l)ice$", "${1}ouse"),
    ("(bus)(es)?$", "${1}"),
    ("(o)es$", "${1}"),
    ("(shoe)s$", "${1}"),
    ("(cris|test)(is|es)$", "${1}is"),
    ("^(a)x[ie]s$", "${1}xis"),
    ("(octop|vir)(us|i)$", "${1}us"),
    ("(alias|status)(es)?$", "${1}"),
    ("^(ox)en", "${1}"),
    ("(vert|ind)ices$", "${1}ex"),
    ("(matr)ices$", "${1}ix"),
    ("(quiz)zes$", "${1}"),
    ("(database)s$", "${1}"),
];

struct Rule {
    pattern: Regex,
    replacement: String,
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = Vec::new();

    for (singular, plural) in IRREGULAR {
        rules.push(Rule {
            pattern: Regex::new(&format!("(?i){}$", plural)).unwrap(),
            replacement: (*singular).to_string(),
        });
    }

    for (pattern, replacement) in SUFFIX_RULES.iter().rev() {
        rules.push(Rule {
            pattern: Regex::new(&format!("(?i){}", pattern)).unwrap(),
            replacement: (*replacement).to_string(),
        });
    }

    rules
});

/// Singularize `name` unless it matches an entry in `exclusions`
/// (case-insensitive).
pub fn singular(name: &str, exclusions: &[String]) -> String {
    if exclusions.iter().any(|e| e.eq_ignore_ascii_case(name)) {
        return name.to_string();
    }

    let lower = name.to_lowercase();
    match lower.as_str() {
        "campus" | "meta" => return name.to_string(),
        "calories" => return preserve_case(name, "calorie"),
        "waves" => return preserve_case(name, "wave"),
        _ => {}
    }

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return name.to_string();
    }

    for rule in RULES.iter() {
        if let Some(m) = rule.pattern.find(name) {
            let tail = rule.pattern.replace(&name[m.start()..], rule.replacement.as_str());
            let head = &name[..m.start()];
            return match_leading_case(head, &name[m.start()..], &tail);
        }
    }

    name.to_string()
}

/// Return `replacement` with the first letter cased like `original`.
fn preserve_case(original: &str, replacement: &str) -> String {
    match_leading_case("", original, replacement)
}

/// Rebuild `head + tail`, where `tail` replaced `matched`, keeping the case
/// of the first character of `matched` (irregular words are stored lower
/// case).
fn match_leading_case(head: &str, matched: &str, tail: &str) -> String {
    let starts_upper = matched.chars().next().is_some_and(char::is_uppercase);
    let mut out = String::with_capacity(head.len() + tail.len());
    out.push_str(head);

    let mut chars = tail.chars();
    match chars.next() {
        Some(first) if starts_upper => {
            out.extend(first.to_uppercase());
            out.extend(chars);
        }
        Some(first) => {
            out.push(first);
            out.extend(chars);
        }
        None => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        singular(name, &[])
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(s("Users"), "User");
        assert_eq!(s("Orders"), "Order");
        assert_eq!(s("AuditLogs"), "AuditLog");
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(s("Categories"), "Category");
        assert_eq!(s("Boxes"), "Box");
        assert_eq!(s("Statuses"), "Status");
        assert_eq!(s("UserStatuses"), "UserStatus");
        assert_eq!(s("Matrices"), "Matrix");
        assert_eq!(s("Databases"), "Database");
        assert_eq!(s("Wolves"), "Wolf");
    }

    #[test]
    fn test_already_singular() {
        assert_eq!(s("User"), "User");
        assert_eq!(s("Address"), "Address");
        assert_eq!(s("Status"), "Status");
    }

    #[test]
    fn test_irregular_and_uncountable() {
        assert_eq!(s("People"), "Person");
        assert_eq!(s("Children"), "Child");
        assert_eq!(s("Sheep"), "Sheep");
        assert_eq!(s("Information"), "Information");
    }

    #[test]
    fn test_hand_fixed_words() {
        assert_eq!(s("Campus"), "Campus");
        assert_eq!(s("Meta"), "Meta");
        assert_eq!(s("Calories"), "Calorie");
        assert_eq!(s("Waves"), "Wave");
    }

    #[test]
    fn test_exclusions_case_insensitive() {
        let exclusions = vec!["users".to_string()];
        assert_eq!(singular("Users", &exclusions), "Users");
        assert_eq!(singular("Orders", &exclusions), "Order");
    }
}
