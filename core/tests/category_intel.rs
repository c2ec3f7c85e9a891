//! Category intelligence table tests.

use bizradar_core::category::{
    annual_growth_rate, ease_score_for_difficulty, profile_for, CategoryId, DEFAULT_PROFILE,
};
use bizradar_core::types::{Difficulty, Footfall, PricingSegment};

/// Known sector ids resolve to their dedicated profiles.
#[test]
fn known_sector_profiles() {
    let food = profile_for(CategoryId::parse("food-beverage"));
    assert_eq!(food.difficulty, Difficulty::Medium);
    assert_eq!(food.required_footfall, Footfall::High);
    assert_eq!(food.growth_bias, 1.15);
    assert_eq!(food.ease_score, 65.0);

    let fintech = profile_for(CategoryId::parse("tech-fintech"));
    assert_eq!(fintech.difficulty, Difficulty::VeryHigh);
    assert_eq!(fintech.ease_score, 35.0);
    assert_eq!(fintech.growth_bias, 1.40);
    assert_eq!(fintech.pricing_segment, PricingSegment::Premium);

    let services = profile_for(CategoryId::parse("services"));
    assert_eq!(services.difficulty, Difficulty::Low);
    assert_eq!(services.ease_score, 80.0);
    assert_eq!(services.pricing_segment, PricingSegment::Budget);
}

/// Unknown identifiers never fail; they resolve to the default profile.
#[test]
fn unknown_category_gets_default_profile() {
    assert_eq!(CategoryId::parse("underwater-basket-weaving"), None);
    let profile = profile_for(None);
    assert_eq!(profile, DEFAULT_PROFILE);
    assert_eq!(profile.difficulty, Difficulty::Medium);
    assert_eq!(profile.ease_score, 65.0);
    assert_eq!(profile.growth_bias, 1.0);
}

/// Venue-level ids (used by the financial tables) parse but carry the
/// default sector profile.
#[test]
fn venue_ids_parse_with_default_profile() {
    let cafe = CategoryId::parse("Cafe");
    assert_eq!(cafe, Some(CategoryId::Cafe));
    assert_eq!(profile_for(cafe), DEFAULT_PROFILE);

    assert_eq!(
        CategoryId::parse("Grocery Store"),
        Some(CategoryId::GroceryStore)
    );
    assert_eq!(
        CategoryId::parse("Tutoring Center"),
        Some(CategoryId::TutoringCenter)
    );
}

/// Canonical difficulty -> ease derivation.
#[test]
fn ease_score_mapping() {
    assert_eq!(ease_score_for_difficulty(Difficulty::Low), 85.0);
    assert_eq!(ease_score_for_difficulty(Difficulty::Medium), 65.0);
    assert_eq!(ease_score_for_difficulty(Difficulty::High), 45.0);
    assert_eq!(ease_score_for_difficulty(Difficulty::VeryHigh), 25.0);
}

/// Sector growth rates, with the documented 12% default.
#[test]
fn sector_growth_rates() {
    assert_eq!(annual_growth_rate(CategoryId::parse("technology")), 0.25);
    assert_eq!(annual_growth_rate(CategoryId::parse("retail")), 0.10);
    assert_eq!(annual_growth_rate(CategoryId::parse("hospitality")), 0.16);
    assert_eq!(annual_growth_rate(None), 0.12);
    assert_eq!(
        annual_growth_rate(CategoryId::parse("Cafe")),
        0.12,
        "venue ids take the default rate"
    );
}

/// Every profile's numeric fields stay in their documented domains.
#[test]
fn profile_fields_in_domain() {
    let ids = [
        "food-beverage",
        "retail",
        "technology",
        "tech-ai-ml",
        "tech-fintech",
        "tech-edtech",
        "tech-healthtech",
        "education",
        "health-wellness",
        "services",
        "manufacturing",
        "logistics",
        "hospitality",
        "automotive",
        "agriculture",
        "finance",
        "media-entertainment",
        "beauty-personal-care",
        "real-estate",
        "sports-fitness",
        "home-lifestyle",
        "legal-compliance",
        "entertainment",
    ];
    for id in ids {
        let parsed = CategoryId::parse(id);
        assert!(parsed.is_some(), "{id} should parse");
        let profile = profile_for(parsed);
        assert!(
            (0.0..=100.0).contains(&profile.ease_score),
            "{id} ease score out of range"
        );
        assert!(
            (0.8..=1.5).contains(&profile.growth_bias),
            "{id} growth bias out of range"
        );
        assert!(!profile.key_success_factors.is_empty());
        assert!(!profile.common_challenges.is_empty());
    }
}
