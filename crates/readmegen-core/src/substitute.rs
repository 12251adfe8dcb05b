//! Substitution engine
//!
//! One pass over the template produces both outputs side by side:
//!
//! - literal lines are copied verbatim into both
//! - a magic line becomes a demo link plus an image in the static output
//!   (or nothing, when the entry has no static include)
//! - in the dynamic output it becomes a capture/include directive followed
//!   by the token itself, so the page can still reference the captured value

use crate::lines::join_lines;
use crate::magic::{MagicEntry, MagicTable};
use crate::preamble::Preambles;
use log::debug;

/// Hosted page with the interactive examples
pub const DEMO_URL: &str = "https://brmighell.github.io/rcv-entry/";

/// Both generated files, as ordered line sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub static_lines: Vec<String>,
    pub dynamic_lines: Vec<String>,
    /// Number of magic lines that were expanded
    pub expansions: usize,
}

impl Rendered {
    pub fn static_contents(&self) -> String {
        join_lines(&self.static_lines)
    }

    pub fn dynamic_contents(&self) -> String {
        join_lines(&self.dynamic_lines)
    }
}

pub fn substitute(template: &[String], table: &MagicTable, preambles: &Preambles) -> Rendered {
    let mut rendered = Rendered {
        static_lines: preambles.static_lines.clone(),
        dynamic_lines: preambles.dynamic_lines.clone(),
        expansions: 0,
    };

    for line in template {
        let Some(entry) = table.lookup(line) else {
            rendered.static_lines.push(line.clone());
            rendered.dynamic_lines.push(line.clone());
            continue;
        };

        debug!("Expanding magic token '{}'", entry.name);
        rendered.expansions += 1;
        if let Some(lines) = static_expansion(entry) {
            rendered.static_lines.extend(lines);
        }
        rendered.dynamic_lines.extend(dynamic_expansion(entry, line));
    }

    rendered
}

fn static_expansion(entry: &MagicEntry) -> Option<[String; 2]> {
    let image = entry.static_include.as_ref()?;
    Some([
        format!("\n[[interactive demo]]({DEMO_URL})\n"),
        format!("![{}]({})\n", entry.name, image),
    ])
}

fn dynamic_expansion(entry: &MagicEntry, token_line: &str) -> [String; 2] {
    [
        format!(
            "{{% capture {name} %}}{{% include_relative {path} %}}{{% endcapture %}}\n",
            name = entry.name,
            path = entry.dynamic_include
        ),
        token_line.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::split_lines;
    use crate::preamble::{DYNAMIC_PREAMBLE, STATIC_PREAMBLE};

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn with_static_preamble(body: &[&str]) -> Vec<String> {
        STATIC_PREAMBLE.iter().chain(body).map(|s| s.to_string()).collect()
    }

    fn with_dynamic_preamble(body: &[&str]) -> Vec<String> {
        DYNAMIC_PREAMBLE.iter().chain(body).map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_literal_passthrough() {
        let template = split_lines("\n## Usage\n\nSome text {{ ex0 }} inline.\n");
        let rendered = substitute(&template, &MagicTable::builtin(), &Preambles::default());

        assert_eq!(
            rendered.static_lines,
            with_static_preamble(&["\n", "## Usage\n", "\n", "Some text {{ ex0 }} inline.\n"])
        );
        assert_eq!(
            rendered.dynamic_lines,
            with_dynamic_preamble(&["\n", "## Usage\n", "\n", "Some text {{ ex0 }} inline.\n"])
        );
        assert_eq!(rendered.expansions, 0);
    }

    #[test]
    fn test_static_expansion_with_image() {
        let template = lines(&["a\n", "{{ ex0 }}\n", "b\n"]);
        let rendered = substitute(&template, &MagicTable::builtin(), &Preambles::default());

        assert_eq!(
            rendered.static_lines,
            with_static_preamble(&[
                "a\n",
                "\n[[interactive demo]](https://brmighell.github.io/rcv-entry/)\n",
                "![ex0](docs/github-pages-example-0.html)\n",
                "b\n",
            ])
        );
        assert_eq!(rendered.expansions, 1);
    }

    #[test]
    fn test_dynamic_expansion() {
        let template = lines(&["a\n", "{{ ex0 }}\n", "b\n"]);
        let rendered = substitute(&template, &MagicTable::builtin(), &Preambles::default());

        assert_eq!(
            rendered.dynamic_lines,
            with_dynamic_preamble(&[
                "a\n",
                "{% capture ex0 %}{% include_relative docs/github-pages-example-0.html %}{% endcapture %}\n",
                "{{ ex0 }}\n",
                "b\n",
            ])
        );
    }

    #[test]
    fn test_token_without_static_include_is_dropped_from_static() {
        let mut table = MagicTable::new();
        table.insert(MagicEntry::new("only_dynamic", "docs/fragment.html"));
        let template = lines(&["a\n", "{{ only_dynamic }}\n", "b\n"]);

        let rendered = substitute(&template, &table, &Preambles::default());

        assert_eq!(rendered.static_lines, with_static_preamble(&["a\n", "b\n"]));
        assert_eq!(
            rendered.dynamic_lines,
            with_dynamic_preamble(&[
                "a\n",
                "{% capture only_dynamic %}{% include_relative docs/fragment.html %}{% endcapture %}\n",
                "{{ only_dynamic }}\n",
                "b\n",
            ])
        );
        assert_eq!(rendered.expansions, 1);
    }

    #[test]
    fn test_builtin_deps_has_no_static_output() {
        let template = lines(&["{{ deps }}\n"]);
        let rendered = substitute(&template, &MagicTable::builtin(), &Preambles::default());

        assert_eq!(rendered.static_lines, with_static_preamble(&[]));
        assert_eq!(rendered.dynamic_lines.len(), DYNAMIC_PREAMBLE.len() + 2);
    }

    #[test]
    fn test_near_miss_tokens_are_literal() {
        let template = lines(&["{{ ex1 }} \n", "{{ EX1 }}\n", "{{ ex1 }}"]);
        let rendered = substitute(&template, &MagicTable::builtin(), &Preambles::default());

        assert_eq!(rendered.expansions, 0);
        assert_eq!(
            rendered.static_lines,
            with_static_preamble(&["{{ ex1 }} \n", "{{ EX1 }}\n", "{{ ex1 }}"])
        );
    }

    #[test]
    fn test_repeated_tokens_expand_each_time() {
        let template = lines(&["{{ ex2 }}\n", "between\n", "{{ ex2 }}\n"]);
        let rendered = substitute(&template, &MagicTable::builtin(), &Preambles::default());

        assert_eq!(rendered.expansions, 2);
        assert_eq!(rendered.static_lines.len(), STATIC_PREAMBLE.len() + 5);
        assert_eq!(rendered.dynamic_lines.len(), DYNAMIC_PREAMBLE.len() + 5);
    }

    #[test]
    fn test_custom_preambles() {
        let preambles = Preambles::new(lines(&["S\n"]), lines(&["D\n"]));
        let rendered = substitute(&lines(&["x\n"]), &MagicTable::new(), &preambles);

        assert_eq!(rendered.static_contents(), "S\nx\n");
        assert_eq!(rendered.dynamic_contents(), "D\nx\n");
    }

    #[test]
    fn test_badge_line_is_continued_by_template() {
        let rendered = substitute(
            &lines(&["\n", "body\n"]),
            &MagicTable::new(),
            &Preambles::default(),
        );
        assert!(rendered
            .static_contents()
            .ends_with("rcv-entry?branch=main)\nbody\n"));
    }
}
