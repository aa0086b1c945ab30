use crate::models::CategoryCount;
use wq_core::{Category, Dataset, Field, Record};

/// A dataset with a WQI category attached to every record.
///
/// Records are borrowed unchanged; `categories[i]` belongs to record `i`.
#[derive(Debug, Clone)]
pub struct CategoryTable<'a> {
    dataset: &'a Dataset,
    categories: Vec<Option<Category>>,
}

impl<'a> CategoryTable<'a> {
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn categories(&self) -> &[Option<Category>] {
        &self.categories
    }

    /// Each record with its category.
    pub fn rows(&self) -> impl Iterator<Item = (&'a Record, Option<Category>)> + '_ {
        self.dataset.iter().zip(self.categories.iter().copied())
    }

    /// Records per category in bin order, followed by the uncategorised
    /// count when it is non-zero.
    pub fn counts(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = Category::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category: Some(category),
                count: self.categories.iter().filter(|c| **c == Some(category)).count(),
            })
            .collect();
        let uncategorised = self.categories.iter().filter(|c| c.is_none()).count();
        if uncategorised > 0 {
            counts.push(CategoryCount {
                category: None,
                count: uncategorised,
            });
        }
        counts
    }
}

/// Bucket every record's WQI into a [`Category`].
pub fn categorize(dataset: &Dataset) -> CategoryTable<'_> {
    let categories = dataset
        .iter()
        .map(|r| r.get(Field::Wqi).and_then(Category::from_wqi))
        .collect();
    CategoryTable {
        dataset,
        categories,
    }
}
