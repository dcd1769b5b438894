use chrono::NaiveDate;
use std::collections::HashMap;

/// Per-cookie occurrence counts for one target date, kept in first-seen order.
#[derive(Debug, Default)]
pub struct CookieTally {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
    max_count: usize,
}

impl CookieTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, cookie: &str) {
        let slot = match self.index.get(cookie) {
            Some(&slot) => slot,
            None => {
                self.counts.push((cookie.to_string(), 0));
                self.index.insert(cookie.to_string(), self.counts.len() - 1);
                self.counts.len() - 1
            }
        };

        let count = &mut self.counts[slot].1;
        *count += 1;
        self.max_count = self.max_count.max(*count);
    }

    pub fn count(&self, cookie: &str) -> usize {
        self.index
            .get(cookie)
            .map(|&slot| self.counts[slot].1)
            .unwrap_or(0)
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Every cookie whose count equals the maximum, in first-seen order.
    pub fn most_active(&self) -> Vec<String> {
        self.counts
            .iter()
            .filter(|(_, count)| *count == self.max_count)
            .map(|(cookie, _)| cookie.clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityResult {
    pub date: NaiveDate,
    /// Empty when nothing was logged on `date`.
    pub cookies: Vec<String>,
    /// Occurrences of each returned cookie on `date`.
    pub count: usize,
    pub lines_processed: usize,
}

impl ActivityResult {
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}
