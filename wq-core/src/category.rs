use serde::{Deserialize, Serialize};
use std::fmt;

/// Edges of the WQI category bins. Bins are half-open: `[edge[i], edge[i+1])`.
pub const CATEGORY_BIN_EDGES: [f64; 5] = [0.0, 50.0, 100.0, 150.0, 200.0];

/// Water quality category derived from a WQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Category {
    /// Categories in bin order.
    pub const ALL: [Category; 4] = [
        Category::Poor,
        Category::Fair,
        Category::Good,
        Category::Excellent,
    ];

    /// Bucket a WQI value. Values outside `[0, 200)` and NaN have no
    /// category.
    pub fn from_wqi(wqi: f64) -> Option<Category> {
        Category::ALL
            .into_iter()
            .zip(CATEGORY_BIN_EDGES.windows(2))
            .find(|(_, edges)| edges[0] <= wqi && wqi < edges[1])
            .map(|(category, _)| category)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Poor => "Poor",
            Category::Fair => "Fair",
            Category::Good => "Good",
            Category::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn bins_are_half_open() {
        assert_eq!(Category::from_wqi(0.0), Some(Category::Poor));
        assert_eq!(Category::from_wqi(49.999), Some(Category::Poor));
        assert_eq!(Category::from_wqi(50.0), Some(Category::Fair));
        assert_eq!(Category::from_wqi(99.9), Some(Category::Fair));
        assert_eq!(Category::from_wqi(100.0), Some(Category::Good));
        assert_eq!(Category::from_wqi(150.0), Some(Category::Excellent));
        assert_eq!(Category::from_wqi(199.999), Some(Category::Excellent));
    }

    #[test]
    fn out_of_range_has_no_category() {
        assert_eq!(Category::from_wqi(200.0), None);
        assert_eq!(Category::from_wqi(-0.1), None);
        assert_eq!(Category::from_wqi(f64::NAN), None);
        assert_eq!(Category::from_wqi(f64::INFINITY), None);
    }

    #[test]
    fn every_in_range_value_gets_exactly_one_label() {
        let mut wqi = 0.0;
        while wqi < 200.0 {
            let matches = Category::ALL
                .iter()
                .filter(|c| Category::from_wqi(wqi) == Some(**c))
                .count();
            assert_eq!(matches, 1, "wqi {wqi}");
            wqi += 0.25;
        }
    }
}
