//! The operator help catalog.

use std::collections::HashMap;

use rpncalc_eval::Evaluator;

/// Built-in help text, one blank-line-delimited block per operator.
const HELP_TEXT: &str = include_str!("help.txt");

/// One operator's help entry.
#[derive(Debug, Clone)]
pub struct HelpEntry {
    /// Canonical operator name.
    pub name: String,
    /// One-line summary.
    pub short: String,
    /// Full description lines.
    pub full: Vec<String>,
}

/// The operator help catalog, parsed from the embedded help text.
#[derive(Debug)]
pub struct HelpCatalog {
    entries: Vec<HelpEntry>,
    index: HashMap<String, usize>,
}

impl HelpCatalog {
    /// Parses the embedded help text.
    #[must_use]
    pub fn new() -> Self {
        Self::parse(HELP_TEXT)
    }

    /// Each block is delimited by a blank line. The first line of a block
    /// is the operator name followed by its one-line summary; the
    /// remaining lines are the full description.
    fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        for block in text.split("\n\n") {
            let mut lines = block.lines();
            let Some(first) = lines.next() else {
                continue;
            };
            let Some((name, short)) = first.split_once(char::is_whitespace) else {
                continue;
            };
            index.insert(name.to_string(), entries.len());
            entries.push(HelpEntry {
                name: name.to_string(),
                short: short.to_string(),
                full: lines.map(String::from).collect(),
            });
        }
        Self { entries, index }
    }

    /// Looks up the entry for a canonical operator name.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&HelpEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// All entries, in help-text order.
    pub fn entries(&self) -> impl Iterator<Item = &HelpEntry> {
        self.entries.iter()
    }

    /// Answers a help query, or returns `None` when `words` is not one.
    ///
    /// `help` alone lists every operator; `help full` includes synonyms
    /// in the listing; `help OPERATOR` shows one full description.
    #[must_use]
    pub fn respond(&self, evaluator: &Evaluator, words: &[&str]) -> Option<Vec<String>> {
        let first = words.first()?;
        if !first.eq_ignore_ascii_case("help") {
            return None;
        }
        match words.get(1) {
            None => Some(self.list(evaluator, false)),
            Some(&"full") => Some(self.list(evaluator, true)),
            Some(name) => Some(self.op_help(evaluator, name)),
        }
    }

    /// One aligned line per listed name, sorted, followed by usage hints.
    fn list(&self, evaluator: &Evaluator, show_synonyms: bool) -> Vec<String> {
        let rows: Vec<(Vec<String>, &str)> = self
            .entries
            .iter()
            .map(|entry| {
                let names = if show_synonyms {
                    let synonyms = evaluator.synonyms(&entry.name);
                    if synonyms.is_empty() {
                        vec![entry.name.clone()]
                    } else {
                        synonyms
                    }
                } else {
                    vec![entry.name.clone()]
                };
                (names, entry.short.as_str())
            })
            .collect();

        let width = rows
            .iter()
            .flat_map(|(names, _)| names.iter())
            .map(String::len)
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for (names, short) in rows {
            for name in names {
                lines.push(format!("{name:<width$} {short}"));
            }
        }
        lines.sort();
        lines.push(String::new());
        lines.push("For a full description of OPERATOR, use 'help OPERATOR'.".to_string());
        if !show_synonyms {
            lines.push(
                "Some operators have synonyms, use 'help full' for a complete list.".to_string(),
            );
        }
        lines
    }

    /// The full description of one operator, resolved through its
    /// synonym set so `help *` finds the entry filed under `x`.
    fn op_help(&self, evaluator: &Evaluator, name: &str) -> Vec<String> {
        let lowered = name.to_lowercase();
        let entry = self.entry(&lowered).or_else(|| {
            evaluator
                .synonyms(&lowered)
                .iter()
                .find_map(|synonym| self.entry(synonym))
        });
        match entry {
            Some(entry) => {
                let mut lines = vec![format!("Operator: {}", entry.name)];
                let synonyms = evaluator.synonyms(&entry.name);
                if synonyms.len() > 1 {
                    lines.push(format!("Synonyms: {}", synonyms.join(", ")));
                }
                lines.push(entry.short.clone());
                lines.push(String::new());
                lines.extend(entry.full.iter().cloned());
                lines
            }
            None => vec![format!("No help available for operator \"{name}\"")],
        }
    }
}

impl Default for HelpCatalog {
    fn default() -> Self {
        Self::new()
    }
}
