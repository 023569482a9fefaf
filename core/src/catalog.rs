use crate::{Amount, Price};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    PadangFood,
    GeneralFood,
    Beverage,
    Electronics,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::PadangFood,
        Category::GeneralFood,
        Category::Beverage,
        Category::Electronics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::PadangFood => "padang-food",
            Category::GeneralFood => "general-food",
            Category::Beverage => "beverage",
            Category::Electronics => "electronics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Portion {
    Normal,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "amount")]
pub enum DeliveryFee {
    Free,
    Flat(Price),
}

impl DeliveryFee {
    pub fn amount(self) -> Price {
        match self {
            DeliveryFee::Free => 0,
            DeliveryFee::Flat(fee) => fee,
        }
    }
}

impl fmt::Display for DeliveryFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryFee::Free => f.write_str("Free"),
            DeliveryFee::Flat(fee) if fee % 1_000 == 0 => write!(f, "{}k", fee / 1_000),
            DeliveryFee::Flat(fee) => write!(f, "{fee}"),
        }
    }
}

/// A single offer from a seller. Never mutated once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub seller: String,
    pub item: String,
    pub price: Price,
    /// 0.0 ..= 5.0
    pub rating: f32,
    pub delivery_minutes: u32,
    pub delivery: DeliveryFee,
    pub category: Category,
    pub sweetness: u8,
    pub portion: Portion,
    pub complexity: Complexity,
}

impl Product {
    /// Base price plus delivery fee. Cart totals never include the fee.
    pub fn landed_price(&self) -> Amount {
        Amount::from(self.price) + Amount::from(self.delivery.amount())
    }
}

/// Read-only product list, built once at startup and shared by handle.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in offers every session starts from.
    #[rustfmt::skip]
    pub fn seeded() -> Self {
        use Category::*;
        use Complexity::*;
        use DeliveryFee::*;
        use Portion::*;

        let products = vec![
            offer("Sederhana Restaurant", "Padang Rendang Rice", 22_000, 4.9, 20, Flat(5_000), PadangFood, 2, Large, Medium),
            offer("Padang Raya Express", "Padang Ayam Pop Rice", 18_000, 4.7, 15, Free, PadangFood, 1, Normal, Simple),
            offer("Budget Padang", "Economy Padang Rice", 15_000, 4.5, 12, Free, PadangFood, 1, Normal, Simple),
            offer("Fast Padang", "Express Padang Rice", 16_000, 4.6, 8, Free, PadangFood, 1, Normal, Simple),
            offer("Royal Padang", "Premium Rendang Set", 30_000, 4.9, 25, Flat(10_000), PadangFood, 2, Large, Medium),
            offer("Street Padang", "Street Style Padang", 13_000, 4.4, 10, Free, PadangFood, 1, Normal, Simple),
            offer("Sari Warung", "Special Fried Rice", 15_000, 4.8, 15, Free, GeneralFood, 2, Large, Simple),
            offer("Mama Kitchen", "Complete Mixed Rice", 12_000, 4.5, 25, Free, GeneralFood, 1, Normal, Simple),
            offer("Geprek Chicken House", "Jumbo Geprek Chicken", 18_000, 4.9, 20, Flat(5_000), GeneralFood, 3, Large, Medium),
            offer("Burger Station", "Double Beef Burger", 32_000, 4.8, 15, Flat(5_000), GeneralFood, 2, Normal, Simple),
            offer("Pizza Corner", "Personal Pepperoni Pizza", 35_000, 4.6, 25, Flat(10_000), GeneralFood, 2, Normal, Medium),
            offer("Sushi Express", "8pcs California Roll", 30_000, 4.9, 20, Free, GeneralFood, 1, Normal, Medium),
            offer("Juice Corner", "Fresh Fruit Ice", 8_000, 4.7, 5, Free, Beverage, 5, Large, Simple),
            offer("Our Coffee", "Palm Sugar Milk Coffee", 12_000, 4.9, 8, Flat(2_000), Beverage, 4, Normal, Simple),
            offer("Sweet Tea Shop", "Jumbo Sweet Iced Tea", 5_000, 4.4, 3, Free, Beverage, 5, Large, Simple),
            offer("Boba Time", "Brown Sugar Boba Milk", 20_000, 4.8, 12, Flat(5_000), Beverage, 5, Large, Medium),
        ];
        Self::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products of one category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Looks a product up by item name, the key the cart merges on.
    pub fn find(&self, item: &str) -> Option<&Product> {
        let item = item.trim();
        self.products.iter().find(|p| p.item == item)
    }
}

#[allow(clippy::too_many_arguments)]
fn offer(
    seller: &str,
    item: &str,
    price: Price,
    rating: f32,
    delivery_minutes: u32,
    delivery: DeliveryFee,
    category: Category,
    sweetness: u8,
    portion: Portion,
    complexity: Complexity,
) -> Product {
    Product {
        seller: seller.to_string(),
        item: item.to_string(),
        price,
        rating,
        delivery_minutes,
        delivery,
        category,
        sweetness,
        portion,
        complexity,
    }
}
