//! Case and leetspeak variant expansion for a single token

/// Lazy iterator over the variants of one base token.
///
/// Emission order is fixed: lowercase, uppercase, capitalized, one variant
/// per substitutable character (in character order), then the exhaustive
/// variant with every substitutable character replaced at once. Forms
/// identical to the token are still emitted; deduplication happens
/// globally, not here.
///
/// The iterator is restartable: it holds no state beyond the token, the
/// substitution table and a position index.
pub struct TokenVariants<'a> {
    token: &'a str,
    table: &'a [(char, char)],
    leet_positions: Vec<usize>,
    stage: usize,
}

impl<'a> TokenVariants<'a> {
    /// Create the variant sequence for a token.
    pub fn new(token: &'a str, table: &'a [(char, char)]) -> Self {
        let leet_positions = token
            .chars()
            .enumerate()
            .filter(|(_, c)| substitute(table, *c).is_some())
            .map(|(i, _)| i)
            .collect();
        Self {
            token,
            table,
            leet_positions,
            stage: 0,
        }
    }

    /// Total number of variants this iterator will emit.
    pub fn total(&self) -> usize {
        if self.leet_positions.is_empty() {
            3
        } else {
            3 + self.leet_positions.len() + 1
        }
    }

    /// Substitute characters from the table; `only` restricts the
    /// substitution to a single character position.
    fn leet(&self, only: Option<usize>) -> String {
        self.token
            .chars()
            .enumerate()
            .map(|(i, c)| match substitute(self.table, c) {
                Some(sub) if only.map_or(true, |position| position == i) => sub,
                _ => c,
            })
            .collect()
    }
}

impl Iterator for TokenVariants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let stage = self.stage;
        self.stage += 1;
        match stage {
            0 => Some(self.token.to_lowercase()),
            1 => Some(self.token.to_uppercase()),
            2 => Some(capitalize(self.token)),
            _ => {
                let singles = self.leet_positions.len();
                if singles == 0 {
                    return None;
                }
                let index = stage - 3;
                if index < singles {
                    Some(self.leet(Some(self.leet_positions[index])))
                } else if index == singles {
                    Some(self.leet(None))
                } else {
                    None
                }
            }
        }
    }
}

fn substitute(table: &[(char, char)], c: char) -> Option<char> {
    table.iter().find(|(from, _)| *from == c).map(|(_, to)| *to)
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
