use crate::catalog::Category;
use crate::criteria::normalize;

/// Checked top to bottom; the first rule with a matching keyword decides.
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::PadangFood, &["padang", "rendang"]),
    (Category::Beverage, &["drink", "beverage", "coffee", "tea", "juice"]),
    (Category::Electronics, &["charger", "electronic", "gadget"]),
    (Category::GeneralFood, &["rice", "food", "eat", "meal"]),
];

pub const DEFAULT_CATEGORY: Category = Category::GeneralFood;

pub fn detect(text: &str) -> Category {
    detect_normalized(&normalize(text))
}

/// Category for text already passed through [`normalize`].
pub fn detect_normalized(text: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padang_wins_over_everything() {
        assert_eq!(detect("padang rice with iced tea"), Category::PadangFood);
        assert_eq!(detect("Rendang"), Category::PadangFood);
    }

    #[test]
    fn beverage_before_general_food() {
        assert_eq!(detect("a drink with my meal"), Category::Beverage);
        assert_eq!(detect("cold coffee"), Category::Beverage);
    }

    #[test]
    fn electronics() {
        assert_eq!(detect("usb-c charger"), Category::Electronics);
        assert_eq!(detect("any gadget"), Category::Electronics);
    }

    #[test]
    fn falls_back_to_general_food() {
        assert_eq!(detect(""), Category::GeneralFood);
        assert_eq!(detect("surprise me"), Category::GeneralFood);
        assert_eq!(detect("fried rice"), Category::GeneralFood);
    }

    #[test]
    fn keywords_match_inside_words() {
        assert_eq!(detect("steak"), Category::Beverage);
    }
}
