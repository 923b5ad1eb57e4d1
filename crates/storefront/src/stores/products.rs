//! Product catalog store.
//!
//! The catalog is an in-memory, effectively static list of product records
//! defined at startup and never mutated afterwards. Operations are pure
//! lookups and filters; nothing here touches the persistence bridge.

use std::collections::HashMap;
use std::sync::LazyLock;

use panther_core::{Amount, ProductId};

/// One labelled dose in a product's formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub benefit: String,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in whole rupees, snapshotted into the cart at add time.
    pub price: Amount,
    /// Emoji badge used in compact listings.
    pub image: String,
    pub image_url: String,
    pub images: Vec<String>,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub servings: u32,
    pub rating: f32,
    pub review_count: u32,
    pub in_stock: bool,
    pub available: bool,
}

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// The shipping catalog: three pre-workout formulas, one currently
    /// purchasable and two announced.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            products: vec![
                Product {
                    id: ProductId::new("panther-core"),
                    name: "Panther Core".to_owned(),
                    price: Amount::new(1999),
                    image: "🔥".to_owned(),
                    image_url:
                        "https://images.unsplash.com/photo-1593095948071-474c5cc2989d?w=400&h=400&fit=crop"
                            .to_owned(),
                    images: vec![
                        "https://images.unsplash.com/photo-1593095948071-474c5cc2989d?w=600&h=600&fit=crop"
                            .to_owned(),
                        "https://images.unsplash.com/photo-1579758682665-53a1a614eea6?w=600&h=600&fit=crop"
                            .to_owned(),
                        "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=600&h=600&fit=crop"
                            .to_owned(),
                    ],
                    description:
                        "Balanced intensity for consistent performance. Perfect for daily training."
                            .to_owned(),
                    ingredients: vec![
                        ingredient("Caffeine", "250mg", "Balanced Energy"),
                        ingredient("Citrulline Malate", "5g", "Muscle Pumps"),
                        ingredient("Beta-Alanine", "2.5g", "Extended Sets"),
                        ingredient("Creatine Monohydrate", "1.5g", "Strength"),
                    ],
                    servings: 30,
                    rating: 4.8,
                    review_count: 342,
                    in_stock: true,
                    available: true,
                },
                Product {
                    id: ProductId::new("panther-extreme"),
                    name: "Panther Extreme".to_owned(),
                    price: Amount::new(2499),
                    image: "⚡".to_owned(),
                    image_url:
                        "https://images.unsplash.com/photo-1579758682665-53a1a614eea6?w=400&h=400&fit=crop"
                            .to_owned(),
                    images: Vec::new(),
                    description: "Maximum intensity formula for extreme training sessions."
                        .to_owned(),
                    ingredients: vec![
                        ingredient("Caffeine", "400mg", "Maximum Energy"),
                        ingredient("Citrulline Malate", "8g", "Intense Pumps"),
                        ingredient("Beta-Alanine", "3.5g", "Endurance"),
                        ingredient("Creatine Monohydrate", "2.5g", "Max Strength"),
                    ],
                    servings: 30,
                    rating: 4.7,
                    review_count: 198,
                    in_stock: false,
                    available: false,
                },
                Product {
                    id: ProductId::new("panther-elite"),
                    name: "Panther Elite".to_owned(),
                    price: Amount::new(2999),
                    image: "💎".to_owned(),
                    image_url:
                        "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=400&fit=crop"
                            .to_owned(),
                    images: Vec::new(),
                    description: "Premium formula with advanced ingredients for elite athletes."
                        .to_owned(),
                    ingredients: vec![
                        ingredient("Caffeine Anhydrous", "300mg", "Pure Energy"),
                        ingredient("Citrulline Malate", "10g", "Elite Pumps"),
                        ingredient("Beta-Alanine", "4g", "Peak Performance"),
                        ingredient("Creatine Monohydrate", "3g", "Elite Strength"),
                    ],
                    servings: 40,
                    rating: 4.9,
                    review_count: 287,
                    in_stock: false,
                    available: false,
                },
            ],
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All catalog entries in display order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products currently purchasable.
    #[must_use]
    pub fn available(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.available).collect()
    }

    /// Announced products not yet purchasable.
    #[must_use]
    pub fn coming_soon(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| !p.available).collect()
    }
}

fn ingredient(name: &str, amount: &str, benefit: &str) -> Ingredient {
    Ingredient {
        name: name.to_owned(),
        amount: amount.to_owned(),
        benefit: benefit.to_owned(),
    }
}

// =============================================================================
// Ingredient glossary
// =============================================================================

/// Educational copy for a formula ingredient.
#[derive(Debug, Clone, Copy)]
pub struct IngredientInfo {
    pub title: &'static str,
    pub description: &'static str,
}

static INGREDIENT_GLOSSARY: LazyLock<HashMap<&'static str, IngredientInfo>> = LazyLock::new(|| {
    HashMap::from([
        (
            "caffeine",
            IngredientInfo {
                title: "Caffeine Anhydrous",
                description: "Pure, water-free caffeine that rapidly increases alertness, focus, \
                              and energy. Enhances physical performance by mobilizing fat stores \
                              and reducing perceived exertion during intense workouts.",
            },
        ),
        (
            "citrulline malate",
            IngredientInfo {
                title: "Citrulline Malate",
                description: "Amino acid that boosts nitric oxide production, increasing blood \
                              flow to muscles. Results in massive pumps, improved nutrient \
                              delivery, and faster recovery between sets.",
            },
        ),
        (
            "beta-alanine",
            IngredientInfo {
                title: "Beta-Alanine",
                description: "Increases muscle carnosine levels, buffering lactic acid buildup. \
                              This delays muscle fatigue, allowing you to push harder for longer. \
                              May cause harmless tingling sensation (paresthesia).",
            },
        ),
        (
            "creatine monohydrate",
            IngredientInfo {
                title: "Creatine Monohydrate",
                description: "The gold standard for strength and power. Increases ATP production \
                              for explosive movements, enhances muscle volume, and supports \
                              muscle growth. Clinically proven and safe.",
            },
        ),
        (
            "l-theanine",
            IngredientInfo {
                title: "L-Theanine",
                description: "Natural amino acid that promotes calm focus without drowsiness. \
                              Works synergistically with caffeine to provide smooth, jitter-free \
                              energy and enhanced cognitive performance.",
            },
        ),
        (
            "taurine",
            IngredientInfo {
                title: "Taurine",
                description: "Supports cellular hydration, regulates muscle contractions, and \
                              protects against oxidative stress. Enhances endurance and reduces \
                              muscle damage during intense training.",
            },
        ),
    ])
});

/// Look up glossary copy for an ingredient, case-insensitively.
#[must_use]
pub fn ingredient_info(name: &str) -> Option<&'static IngredientInfo> {
    let key = name.trim().to_lowercase();
    INGREDIENT_GLOSSARY.get(key.as_str())
}
