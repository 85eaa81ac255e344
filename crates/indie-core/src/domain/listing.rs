use super::Category;

/// A category merged with the number of posts filed under it.
///
/// Built per request for rendering and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub post_count: u64,
}

/// Result of loading the categories page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryListing {
    /// The store holds no categories at all.
    Empty,
    /// Categories in ascending name order, each with its post count.
    Populated(Vec<CategoryWithCount>),
}

impl CategoryListing {
    pub fn categories(&self) -> &[CategoryWithCount] {
        match self {
            CategoryListing::Empty => &[],
            CategoryListing::Populated(categories) => categories,
        }
    }

    pub fn total_categories(&self) -> usize {
        self.categories().len()
    }

    /// Sum of every displayed post count.
    pub fn total_posts(&self) -> u64 {
        self.categories().iter().map(|c| c.post_count).sum()
    }
}
