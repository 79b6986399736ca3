//! End-to-end pricing scenarios against the built-in desk tables.

use rust_decimal_macros::dec;
use syndicate_pricing::prelude::*;

// =============================================================================
// HELPERS
// =============================================================================

fn request(
    sector: Sector,
    rating: CreditRating,
    deal_size_million: u32,
    condition: MarketCondition,
) -> BondRequest {
    BondRequest::new("ABC Corporation", sector, rating, deal_size_million, condition)
}

fn analyze(request: &BondRequest) -> PricingAnalysis {
    PricingCalculator::standard().analyze(request).unwrap()
}

// =============================================================================
// WORKED EXAMPLE
// =============================================================================

#[test]
fn test_utility_aa_500_normal() {
    let analysis = analyze(&request(
        Sector::Utility,
        CreditRating::AA,
        500,
        MarketCondition::Normal,
    ));

    assert_eq!(analysis.company_name, "ABC Corporation");

    let costs: Vec<_> = analysis
        .currency_comparison
        .iter()
        .map(|p| (p.currency, p.all_in_cost_percent))
        .collect();
    assert_eq!(
        costs,
        vec![
            (Currency::GBP, dec!(5.10)),
            (Currency::EUR, dec!(4.45)),
            (Currency::USD, dec!(5.85)),
        ]
    );

    assert_eq!(analysis.direct_pricing.currency, Currency::GBP);
    assert_eq!(analysis.direct_pricing.all_in_cost_percent, dec!(5.10));

    assert_eq!(analysis.recommendations.optimal_currency, Currency::EUR);
    assert_eq!(
        analysis.recommendations.rationale,
        "Issue in EUR for lowest all-in cost"
    );
    assert!(analysis.recommendations.alternative_strategies.is_empty());

    let rec = analysis.financial_impact.recommendation.unwrap();
    assert_eq!(rec.optimal_currency, Currency::EUR);
    assert_eq!(rec.savings_vs_base_bps, BasisPoints::new(65));
    assert_eq!(rec.annual_savings_millions, dec!(3.2));
    assert_eq!(rec.ten_year_savings_millions, dec!(32.5));

    let usd = analysis.financial_impact.cost(Currency::USD).unwrap();
    assert_eq!(usd.annual_cost_millions, dec!(29.2));
    assert_eq!(usd.ten_year_cost_millions, dec!(292.5));
}

#[test]
fn test_millions_round_half_even_on_exact_values() {
    let analysis = analyze(&request(
        Sector::Utility,
        CreditRating::AAA,
        700,
        MarketCondition::QuietWeek,
    ));

    // 700 * 4.85% = 33.95 exactly
    let gbp = analysis.financial_impact.cost(Currency::GBP).unwrap();
    assert_eq!(analysis.currency_comparison[0].all_in_cost_percent, dec!(4.85));
    assert_eq!(gbp.annual_cost_millions, dec!(34.0));
    assert_eq!(gbp.ten_year_cost_millions, dec!(339.5));
}

#[test]
fn test_breakdown_strings() {
    let analysis = analyze(&request(
        Sector::Utility,
        CreditRating::AA,
        500,
        MarketCondition::QuietWeek,
    ));

    let eur = analysis.pricing_for(Currency::EUR).unwrap();
    assert_eq!(eur.breakdown.government_rate, "2.5%");
    assert_eq!(eur.breakdown.credit_spread, "+105 bps");
    assert_eq!(eur.breakdown.size_premium, "+10 bps");
    assert_eq!(eur.breakdown.market_adjustment, "-10 bps");
    assert_eq!(eur.breakdown.swap_cost, "+80 bps");
    assert_eq!(eur.breakdown.total, "4.35%");

    let gbp = analysis.pricing_for(Currency::GBP).unwrap();
    assert_eq!(gbp.breakdown.swap_cost, "0 bps");
}

#[test]
fn test_size_on_breakpoint() {
    let calc = PricingCalculator::standard();
    for (size, bps) in [(100, 0), (250, 5), (500, 10), (750, 15), (1000, 20)] {
        let terms = request(Sector::Bank, CreditRating::A, size, MarketCondition::Normal).terms();
        let pricing = calc.all_in_cost(Currency::GBP, &terms);
        assert_eq!(pricing.size_adjustment_bps, BasisPoints::new(bps), "size {size}");
    }
}

// =============================================================================
// RECOMMENDATIONS
// =============================================================================

#[test]
fn test_no_savings_block_when_base_is_cheapest() {
    let calc = PricingCalculator::standard();
    for sector in Sector::ALL {
        for rating in CreditRating::ALL {
            for condition in MarketCondition::ALL {
                let analysis = calc
                    .analyze(&request(sector, rating, 500, condition))
                    .unwrap();
                let optimal = analysis.recommendations.optimal_currency;
                let base = analysis.currency_comparison[0].currency;
                assert_eq!(
                    analysis.financial_impact.recommendation.is_some(),
                    optimal != base,
                    "{sector}/{rating}/{condition}"
                );
            }
        }
    }
}

#[test]
fn test_central_bank_meeting_large_deal() {
    let analysis = analyze(&request(
        Sector::Industrial,
        CreditRating::BBB,
        1000,
        MarketCondition::CentralBankMeeting,
    ));

    assert_eq!(
        analysis.recommendations.market_timing,
        "High uncertainty - consider waiting until after central bank decision"
    );
    assert_eq!(
        analysis.recommendations.alternative_strategies,
        vec![
            "Consider waiting until after central bank meeting to avoid 20 bps uncertainty premium"
                .to_string(),
            "Consider splitting into 2x £500m deals to improve liquidity and reduce size premium"
                .to_string(),
        ]
    );
}

#[test]
fn test_busy_week_timing() {
    let analysis = analyze(&request(
        Sector::Bank,
        CreditRating::AAA,
        250,
        MarketCondition::BusyWeek,
    ));
    assert_eq!(
        analysis.recommendations.market_timing,
        "Consider delaying - heavy issuance calendar adding 15 bps premium"
    );
    assert!(analysis.recommendations.alternative_strategies.is_empty());
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[test]
fn test_analysis_json_shape() {
    let analysis = analyze(&request(
        Sector::Utility,
        CreditRating::AA,
        500,
        MarketCondition::Normal,
    ));
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["company_name"], "ABC Corporation");
    assert_eq!(json["direct_pricing"]["currency"], "GBP");
    assert_eq!(json["direct_pricing"]["all_in_cost_percent"], 5.1);
    assert_eq!(json["currency_comparison"].as_array().unwrap().len(), 3);
    assert_eq!(json["recommendations"]["optimal_currency"], "EUR");
    assert_eq!(json["financial_impact"]["GBP"]["annual_cost_millions"], 25.5);
    assert_eq!(
        json["financial_impact"]["recommendation"]["savings_vs_base_bps"],
        65
    );
}

#[test]
fn test_analysis_is_deterministic() {
    let req = request(
        Sector::Industrial,
        CreditRating::A,
        750,
        MarketCondition::QuietWeek,
    );
    let first = serde_json::to_string(&analyze(&req)).unwrap();
    let second = serde_json::to_string(&analyze(&req)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_request_from_json() {
    let req: BondRequest = serde_json::from_str(
        r#"{
            "company_name": "ABC Corporation",
            "sector": "utility",
            "rating": "AA",
            "deal_size_million": 500,
            "preferred_currency": "GBP",
            "market_condition": "normal",
            "base_currency": "GBP"
        }"#,
    )
    .unwrap();
    assert_eq!(
        analyze(&req).recommendations.optimal_currency,
        Currency::EUR
    );
}

// =============================================================================
// CUSTOM TABLES
// =============================================================================

#[test]
fn test_calculator_over_loaded_tables() {
    let toml = include_str!("../data/standard_tables.toml").replace(
        "busy_week = 15",
        "busy_week = 40",
    );
    let data = ReferenceData::from_toml_str(&toml).unwrap();
    let calc = PricingCalculator::new(std::sync::Arc::new(data));

    let terms = request(
        Sector::Utility,
        CreditRating::AA,
        500,
        MarketCondition::BusyWeek,
    )
    .terms();
    let gbp = calc.all_in_cost(Currency::GBP, &terms);
    assert_eq!(gbp.market_adjustment_bps, BasisPoints::new(40));
    assert_eq!(gbp.all_in_cost_percent, dec!(5.50));
}
