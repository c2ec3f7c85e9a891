//! Category intelligence — static per-category attributes.
//!
//! The per-category behavior of the whole engine (costs, growth, ease,
//! regulatory load) lives in lookup tables keyed by [`CategoryId`], a
//! closed enum. Every table is a total match with an explicit default
//! arm; an unrecognized identifier resolves to [`DEFAULT_PROFILE`]
//! instead of failing.

use crate::types::{Difficulty, Footfall, PricingSegment};
use serde::Serialize;

/// Known business-category identifiers: sector-level ids plus the venue
/// kinds the financial and regulatory tables are calibrated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    // Sector-level identifiers
    FoodBeverage,
    Retail,
    Technology,
    TechAiMl,
    TechFintech,
    TechEdtech,
    TechHealthtech,
    Education,
    HealthWellness,
    Services,
    Manufacturing,
    Logistics,
    Hospitality,
    Automotive,
    Agriculture,
    Finance,
    MediaEntertainment,
    BeautyPersonalCare,
    RealEstate,
    SportsFitness,
    HomeLifestyle,
    LegalCompliance,
    Entertainment,
    // Venue-level identifiers
    Cafe,
    Restaurant,
    Bar,
    Gym,
    Salon,
    GroceryStore,
    Pharmacy,
    Hospital,
    TechSupport,
    TutoringCenter,
    Office,
}

impl CategoryId {
    /// Resolve a raw category string. Accepts kebab-case ids
    /// ("food-beverage") and display names ("Grocery Store") alike.
    /// Returns `None` for anything unrecognized; callers fall through
    /// to the documented defaults.
    pub fn parse(raw: &str) -> Option<Self> {
        let key: String = raw
            .trim()
            .chars()
            .map(|c| if c == ' ' { '-' } else { c.to_ascii_lowercase() })
            .collect();
        let id = match key.as_str() {
            "food-beverage" => CategoryId::FoodBeverage,
            "retail" => CategoryId::Retail,
            "technology" => CategoryId::Technology,
            "tech-ai-ml" => CategoryId::TechAiMl,
            "tech-fintech" => CategoryId::TechFintech,
            "tech-edtech" => CategoryId::TechEdtech,
            "tech-healthtech" => CategoryId::TechHealthtech,
            "education" => CategoryId::Education,
            "health-wellness" => CategoryId::HealthWellness,
            "services" => CategoryId::Services,
            "manufacturing" => CategoryId::Manufacturing,
            "logistics" => CategoryId::Logistics,
            "hospitality" => CategoryId::Hospitality,
            "automotive" => CategoryId::Automotive,
            "agriculture" => CategoryId::Agriculture,
            "finance" => CategoryId::Finance,
            "media-entertainment" => CategoryId::MediaEntertainment,
            "beauty-personal-care" => CategoryId::BeautyPersonalCare,
            "real-estate" => CategoryId::RealEstate,
            "sports-fitness" => CategoryId::SportsFitness,
            "home-lifestyle" => CategoryId::HomeLifestyle,
            "legal-compliance" => CategoryId::LegalCompliance,
            "entertainment" => CategoryId::Entertainment,
            "cafe" => CategoryId::Cafe,
            "restaurant" => CategoryId::Restaurant,
            "bar" => CategoryId::Bar,
            "gym" => CategoryId::Gym,
            "salon" => CategoryId::Salon,
            "grocery-store" => CategoryId::GroceryStore,
            "pharmacy" => CategoryId::Pharmacy,
            "hospital" => CategoryId::Hospital,
            "tech-support" => CategoryId::TechSupport,
            "tutoring-center" => CategoryId::TutoringCenter,
            "office" => CategoryId::Office,
            _ => return None,
        };
        Some(id)
    }
}

/// Qualitative attributes of a business category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CategoryProfile {
    pub difficulty: Difficulty,
    pub capital_need: Difficulty,
    pub operational_complexity: Difficulty,
    pub required_footfall: Footfall,
    /// Multiplier applied to growth calculations, typically 0.8-1.5.
    pub growth_bias: f64,
    /// 0-100, inverse of difficulty. Per-category calibrated; the
    /// difficulty-only derivation is [`ease_score_for_difficulty`].
    pub ease_score: f64,
    pub pricing_segment: PricingSegment,
    pub key_success_factors: &'static [&'static str],
    pub common_challenges: &'static [&'static str],
}

/// Profile used for any category without a dedicated table entry.
pub const DEFAULT_PROFILE: CategoryProfile = CategoryProfile {
    difficulty: Difficulty::Medium,
    capital_need: Difficulty::Medium,
    operational_complexity: Difficulty::Medium,
    required_footfall: Footfall::Moderate,
    growth_bias: 1.0,
    ease_score: 65.0,
    pricing_segment: PricingSegment::MidRange,
    key_success_factors: &[
        "Quality products/services",
        "Customer satisfaction",
        "Competitive pricing",
        "Strategic location",
    ],
    common_challenges: &[
        "Competition",
        "Market volatility",
        "Customer acquisition",
        "Operational efficiency",
    ],
};

/// Total lookup from category to profile. Unknown (`None`) and
/// venue-level categories resolve to [`DEFAULT_PROFILE`].
pub fn profile_for(category: Option<CategoryId>) -> CategoryProfile {
    use CategoryId::*;
    use Difficulty::{High, Low, Medium, VeryHigh};
    let Some(id) = category else {
        return DEFAULT_PROFILE;
    };
    match id {
        FoodBeverage => CategoryProfile {
            difficulty: Medium,
            capital_need: Medium,
            operational_complexity: High,
            required_footfall: Footfall::High,
            growth_bias: 1.15,
            ease_score: 65.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Prime location with high footfall",
                "Quality & consistency",
                "Hygiene standards",
                "Quick service",
            ],
            common_challenges: &[
                "High operational costs",
                "Food safety compliance",
                "Staff management",
                "Inventory wastage",
            ],
        },
        Retail => CategoryProfile {
            difficulty: Medium,
            capital_need: High,
            operational_complexity: Medium,
            required_footfall: Footfall::Moderate,
            growth_bias: 1.0,
            ease_score: 70.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Product variety",
                "Inventory management",
                "Customer service",
                "Competitive pricing",
            ],
            common_challenges: &[
                "High initial inventory investment",
                "Managing stock turnover",
                "Competition from e-commerce",
                "Seasonal demand fluctuations",
            ],
        },
        Technology => CategoryProfile {
            difficulty: High,
            capital_need: High,
            operational_complexity: VeryHigh,
            required_footfall: Footfall::Low,
            growth_bias: 1.25,
            ease_score: 55.0,
            pricing_segment: PricingSegment::Premium,
            key_success_factors: &[
                "Technical expertise",
                "Innovation & adaptation",
                "After-sales support",
                "Strategic partnerships",
            ],
            common_challenges: &[
                "Rapid technology changes",
                "High skill requirements",
                "Intense competition",
                "High R&D costs",
            ],
        },
        TechAiMl => CategoryProfile {
            difficulty: VeryHigh,
            capital_need: VeryHigh,
            operational_complexity: VeryHigh,
            required_footfall: Footfall::Low,
            growth_bias: 1.35,
            ease_score: 40.0,
            pricing_segment: PricingSegment::Luxury,
            key_success_factors: &[
                "Deep technical expertise in AI/ML",
                "Research & development capability",
                "High-quality data access",
                "Computing infrastructure",
            ],
            common_challenges: &[
                "Extremely high skill requirements",
                "Expensive compute resources",
                "Rapidly evolving field",
                "Talent acquisition & retention",
            ],
        },
        TechFintech => CategoryProfile {
            difficulty: VeryHigh,
            capital_need: VeryHigh,
            operational_complexity: VeryHigh,
            required_footfall: Footfall::Low,
            growth_bias: 1.40,
            ease_score: 35.0,
            pricing_segment: PricingSegment::Premium,
            key_success_factors: &[
                "Regulatory compliance expertise",
                "Security & data protection",
                "Financial domain knowledge",
                "Trust & credibility",
            ],
            common_challenges: &[
                "Complex regulatory environment",
                "High compliance costs",
                "Security risks & fraud prevention",
                "Building user trust",
            ],
        },
        TechEdtech => CategoryProfile {
            difficulty: High,
            capital_need: High,
            operational_complexity: High,
            required_footfall: Footfall::Low,
            growth_bias: 1.30,
            ease_score: 50.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Quality content creation",
                "User engagement & retention",
                "Measurable learning outcomes",
                "Scalable platform",
            ],
            common_challenges: &[
                "Content development costs",
                "Competition from free resources",
                "User engagement challenges",
                "Market saturation",
            ],
        },
        TechHealthtech => CategoryProfile {
            difficulty: VeryHigh,
            capital_need: VeryHigh,
            operational_complexity: VeryHigh,
            required_footfall: Footfall::Low,
            growth_bias: 1.32,
            ease_score: 38.0,
            pricing_segment: PricingSegment::Premium,
            key_success_factors: &[
                "Healthcare regulatory compliance",
                "Data privacy standards",
                "Clinical validation",
                "Medical expertise partnerships",
            ],
            common_challenges: &[
                "Strict regulatory approvals",
                "Patient data security",
                "Medical liability concerns",
                "Long sales cycles",
            ],
        },
        Education => CategoryProfile {
            difficulty: Medium,
            capital_need: Medium,
            operational_complexity: High,
            required_footfall: Footfall::Moderate,
            growth_bias: 1.18,
            ease_score: 60.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Quality instructors",
                "Proven curriculum",
                "Certifications & outcomes",
                "Infrastructure & facilities",
            ],
            common_challenges: &[
                "Regulatory compliance",
                "Teacher retention",
                "Seasonal enrollment patterns",
                "Building reputation",
            ],
        },
        HealthWellness => CategoryProfile {
            difficulty: High,
            capital_need: VeryHigh,
            operational_complexity: VeryHigh,
            required_footfall: Footfall::Moderate,
            growth_bias: 1.20,
            ease_score: 50.0,
            pricing_segment: PricingSegment::Premium,
            key_success_factors: &[
                "Qualified professionals",
                "Certifications & licenses",
                "Hygiene & safety",
                "Trust & reputation",
            ],
            common_challenges: &[
                "Strict regulatory requirements",
                "High liability risks",
                "Equipment & maintenance costs",
                "Insurance complexities",
            ],
        },
        Services => CategoryProfile {
            difficulty: Low,
            capital_need: Low,
            operational_complexity: Low,
            required_footfall: Footfall::Low,
            growth_bias: 1.08,
            ease_score: 80.0,
            pricing_segment: PricingSegment::Budget,
            key_success_factors: &[
                "Skill & expertise",
                "Customer satisfaction",
                "Flexible scheduling",
                "Word-of-mouth referrals",
            ],
            common_challenges: &[
                "Building initial client base",
                "Managing appointments",
                "Pricing competition",
                "Scaling operations",
            ],
        },
        Manufacturing => CategoryProfile {
            difficulty: High,
            capital_need: VeryHigh,
            operational_complexity: High,
            required_footfall: Footfall::Low,
            growth_bias: 1.10,
            ease_score: 48.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Production capacity",
                "Quality control",
                "Supply chain efficiency",
                "Cost management",
            ],
            common_challenges: &[
                "High capital investment",
                "Raw material price volatility",
                "Labor management",
                "Environmental regulations",
            ],
        },
        Logistics => CategoryProfile {
            difficulty: Medium,
            capital_need: High,
            operational_complexity: High,
            required_footfall: Footfall::Low,
            growth_bias: 1.22,
            ease_score: 58.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Fleet management",
                "Technology integration",
                "Timely deliveries",
                "Cost optimization",
            ],
            common_challenges: &[
                "Fuel cost fluctuations",
                "Vehicle maintenance",
                "Route optimization",
                "Competition pricing",
            ],
        },
        Hospitality => CategoryProfile {
            difficulty: High,
            capital_need: VeryHigh,
            operational_complexity: High,
            required_footfall: Footfall::Moderate,
            growth_bias: 1.15,
            ease_score: 55.0,
            pricing_segment: PricingSegment::Premium,
            key_success_factors: &[
                "Service excellence",
                "Cleanliness & hygiene",
                "Location & accessibility",
                "Online reputation",
            ],
            common_challenges: &[
                "High fixed costs",
                "Staff training & retention",
                "Seasonal fluctuations",
                "Regulatory compliance",
            ],
        },
        Automotive => CategoryProfile {
            difficulty: Medium,
            capital_need: High,
            operational_complexity: Medium,
            required_footfall: Footfall::Moderate,
            growth_bias: 1.12,
            ease_score: 62.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Technical expertise",
                "Genuine parts availability",
                "Quick turnaround time",
                "Warranty & guarantees",
            ],
            common_challenges: &[
                "Skilled technician shortage",
                "Parts inventory management",
                "Technology upgrades",
                "Customer trust building",
            ],
        },
        Agriculture => CategoryProfile {
            difficulty: High,
            capital_need: High,
            operational_complexity: VeryHigh,
            required_footfall: Footfall::Low,
            growth_bias: 1.08,
            ease_score: 45.0,
            pricing_segment: PricingSegment::Budget,
            key_success_factors: &[
                "Agricultural knowledge",
                "Weather management",
                "Market linkages",
                "Government schemes access",
            ],
            common_challenges: &[
                "Weather dependency",
                "Market price fluctuations",
                "Storage & wastage",
                "Working capital needs",
            ],
        },
        Finance => CategoryProfile {
            difficulty: VeryHigh,
            capital_need: High,
            operational_complexity: VeryHigh,
            required_footfall: Footfall::Low,
            growth_bias: 1.28,
            ease_score: 42.0,
            pricing_segment: PricingSegment::Premium,
            key_success_factors: &[
                "Regulatory compliance",
                "Trust & credibility",
                "Financial expertise",
                "Risk management",
            ],
            common_challenges: &[
                "Strict financial regulations",
                "Capital adequacy requirements",
                "Bad-debt management",
                "Compliance costs",
            ],
        },
        MediaEntertainment => CategoryProfile {
            difficulty: Medium,
            capital_need: High,
            operational_complexity: Medium,
            required_footfall: Footfall::Low,
            growth_bias: 1.18,
            ease_score: 65.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Creative talent",
                "Content quality",
                "Audience engagement",
                "Distribution channels",
            ],
            common_challenges: &[
                "Content production costs",
                "Copyright & licensing",
                "Monetization challenges",
                "Audience retention",
            ],
        },
        BeautyPersonalCare => CategoryProfile {
            difficulty: Medium,
            capital_need: Medium,
            operational_complexity: Medium,
            required_footfall: Footfall::Moderate,
            growth_bias: 1.14,
            ease_score: 68.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Skilled professionals",
                "Hygiene standards",
                "Product quality",
                "Customer experience",
            ],
            common_challenges: &[
                "Staff training & retention",
                "Competition saturation",
                "Trend changes",
                "Client loyalty building",
            ],
        },
        RealEstate => CategoryProfile {
            difficulty: High,
            capital_need: VeryHigh,
            operational_complexity: High,
            required_footfall: Footfall::Low,
            growth_bias: 1.16,
            ease_score: 52.0,
            pricing_segment: PricingSegment::Premium,
            key_success_factors: &[
                "Market knowledge",
                "Trust & transparency",
                "Legal expertise",
                "Network & connections",
            ],
            common_challenges: &[
                "Registration compliance",
                "High transaction values",
                "Market cyclicality",
                "Payment collection",
            ],
        },
        SportsFitness => CategoryProfile {
            difficulty: Medium,
            capital_need: High,
            operational_complexity: Medium,
            required_footfall: Footfall::Moderate,
            growth_bias: 1.20,
            ease_score: 64.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Qualified trainers",
                "Quality equipment",
                "Result-oriented programs",
                "Safety protocols",
            ],
            common_challenges: &[
                "Equipment costs",
                "Trainer retention",
                "Membership churn",
                "Space requirements",
            ],
        },
        HomeLifestyle => CategoryProfile {
            difficulty: Medium,
            capital_need: High,
            operational_complexity: Medium,
            required_footfall: Footfall::Moderate,
            growth_bias: 1.10,
            ease_score: 66.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Product variety",
                "Design aesthetics",
                "Quality & durability",
                "After-sales service",
            ],
            common_challenges: &[
                "Inventory costs",
                "Trend sensitivity",
                "E-commerce competition",
                "Logistics management",
            ],
        },
        LegalCompliance => CategoryProfile {
            difficulty: VeryHigh,
            capital_need: Medium,
            operational_complexity: VeryHigh,
            required_footfall: Footfall::Low,
            growth_bias: 1.12,
            ease_score: 44.0,
            pricing_segment: PricingSegment::Premium,
            key_success_factors: &[
                "Legal expertise",
                "Professional reputation",
                "Client confidentiality",
                "Case success rate",
            ],
            common_challenges: &[
                "Long qualification period",
                "Building reputation",
                "Client acquisition costs",
                "Professional indemnity",
            ],
        },
        Entertainment => CategoryProfile {
            difficulty: Medium,
            capital_need: High,
            operational_complexity: Medium,
            required_footfall: Footfall::High,
            growth_bias: 1.12,
            ease_score: 65.0,
            pricing_segment: PricingSegment::MidRange,
            key_success_factors: &[
                "Unique experience",
                "Marketing & promotions",
                "Location accessibility",
                "Safety & comfort",
            ],
            common_challenges: &[
                "Seasonal demand",
                "High operational costs",
                "Entertainment licenses",
                "Trend sensitivity",
            ],
        },
        // Venue-level ids carry no dedicated sector profile.
        Cafe | Restaurant | Bar | Gym | Salon | GroceryStore | Pharmacy | Hospital
        | TechSupport | TutoringCenter | Office => DEFAULT_PROFILE,
    }
}

/// Canonical ease score derived from difficulty alone, usable without a
/// full profile lookup. Per-category profiles may calibrate away from
/// this baseline.
pub fn ease_score_for_difficulty(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Low => 85.0,
        Difficulty::Medium => 65.0,
        Difficulty::High => 45.0,
        Difficulty::VeryHigh => 25.0,
    }
}

/// Expected annual demand growth rate for a sector, as a fraction
/// (0.15 = +15%/year).
pub fn annual_growth_rate(category: Option<CategoryId>) -> f64 {
    match category {
        Some(CategoryId::FoodBeverage) => 0.15,
        Some(CategoryId::Retail) => 0.10,
        Some(CategoryId::Technology) => 0.25,
        Some(CategoryId::Education) => 0.18,
        Some(CategoryId::HealthWellness) => 0.20,
        Some(CategoryId::Services) => 0.12,
        Some(CategoryId::Entertainment) => 0.14,
        Some(CategoryId::Hospitality) => 0.16,
        _ => 0.12,
    }
}
