//! Candidate ordering by extension priority.
//!
//! Each candidate gets a weight; lower weights sort first and ties keep their
//! listing order. The weight is the sum over the dot-separated tokens left
//! after removing the requested basename from the candidate name:
//!
//! - a registered extension adds its index + 1
//! - an alias of the requested extension adds its alias index + 11
//! - anything else adds nothing
//!
//! Weights are additive, so `x.a.a` (1 + 1) outranks `x.c` (3) when the
//! extensions are `.a, .b, .c`.

use crate::normalize::extname;
use crate::registry::Registry;

const ALIAS_WEIGHT_BASE: usize = 11;

/// Weight of `candidate` as a match for `basename`.
pub fn weight(candidate: &str, basename: &str, extensions: &[String], aliases: &[String]) -> usize {
    let remainder = candidate.replacen(basename, "", 1);

    remainder
        .split('.')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let ext = format!(".{token}");
            if let Some(idx) = extensions.iter().position(|e| *e == ext) {
                idx + 1
            } else if let Some(idx) = aliases.iter().position(|a| *a == ext) {
                idx + ALIAS_WEIGHT_BASE
            } else {
                0
            }
        })
        .sum()
}

/// Order `matches` for `basename`, best first. The sort is stable, so
/// equally weighted candidates keep their directory listing order.
pub fn sort_matches(matches: Vec<String>, basename: &str, registry: &Registry) -> Vec<String> {
    let extensions = registry.extensions();
    let aliases = registry.aliases_for(extname(basename));

    let mut weighted: Vec<(usize, String)> = matches
        .into_iter()
        .map(|m| (weight(&m, basename, extensions, aliases), m))
        .collect();
    weighted.sort_by_key(|(w, _)| *w);

    weighted.into_iter().map(|(_, m)| m).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn exact_match_weighs_nothing() {
        let exts = strings(&[".js"]);
        assert_eq!(weight("app.js", "app.js", &exts, &[]), 0);
    }

    #[test]
    fn extension_weights_follow_priority() {
        let exts = strings(&[".js", ".coffee", ".erb"]);
        assert_eq!(weight("app.js", "app", &exts, &[]), 1);
        assert_eq!(weight("app.coffee", "app", &exts, &[]), 2);
        assert_eq!(weight("app.coffee.erb", "app", &exts, &[]), 5);
        assert_eq!(weight("app.txt", "app", &exts, &[]), 0);
    }

    #[test]
    fn canonical_extension_outranks_alias() {
        let exts = strings(&[".js", ".coffee"]);
        let aliases = strings(&[".styl"]);

        assert_eq!(weight("app.css.js", "app.css", &exts, &aliases), 1);
        assert_eq!(weight("app.styl", "app.css", &exts, &aliases), 11);
    }

    #[test]
    fn alias_weights_follow_alias_order() {
        let aliases = strings(&[".styl", ".less"]);
        assert_eq!(weight("app.styl", "app.css", &[], &aliases), 11);
        assert_eq!(weight("app.less", "app.css", &[], &aliases), 12);
    }

    #[test]
    fn additive_weights_favour_many_cheap_suffixes() {
        let exts = strings(&[".a", ".b", ".c"]);
        assert_eq!(weight("x.a.a", "x", &exts, &[]), 2);
        assert_eq!(weight("x.c", "x", &exts, &[]), 3);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut registry = Registry::new("/proj").unwrap();
        registry.append_extensions([".js", ".coffee"]).unwrap();
        registry.alias_extension(".css", [".styl"]).unwrap();

        let sorted = sort_matches(
            strings(&["app.css.coffee", "app.css.js", "app.styl", "app.css"]),
            "app.css",
            &registry,
        );
        assert_eq!(sorted, ["app.css", "app.css.js", "app.css.coffee", "app.styl"]);

        let sorted = sort_matches(strings(&["b.txt", "b", "b.md"]), "b", &registry);
        assert_eq!(sorted, ["b.txt", "b", "b.md"]);
    }
}
