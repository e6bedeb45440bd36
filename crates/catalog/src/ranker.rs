use rplus_core::Category;

use crate::CategoryCatalog;

impl CategoryCatalog {
    /// Rank catalog members by keyword overlap with the question, for the
    /// disambiguation prompt after an `Other` classification.
    ///
    /// Score = how many of a category's similarity keywords occur as
    /// case-insensitive substrings of the question. Zero-score categories
    /// are dropped, the sort is stable descending so ties keep catalog
    /// order, and the result is cut to `top_n`.
    pub fn rank_similar(&self, text: &str, top_n: usize) -> Vec<Category> {
        let lower = text.to_lowercase();

        let mut scored: Vec<(Category, usize)> = self
            .categories()
            .iter()
            .filter_map(|&category| {
                let score = category
                    .similarity_keywords()
                    .iter()
                    .filter(|keyword| lower.contains(*keyword))
                    .count();
                (score > 0).then_some((category, score))
            })
            .collect();

        scored.sort_by(|(_, a), (_, b)| b.cmp(a));
        scored.truncate(top_n);
        scored.into_iter().map(|(category, _)| category).collect()
    }
}
