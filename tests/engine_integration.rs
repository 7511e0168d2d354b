use greentrace_rust::api::{
    ActivityInput, BenchmarkStatus, Category, GreenPointContext, KgCo2e, Priority, Rating,
};
use greentrace_rust::services::{
    award_points, calculate_footprint, compare_to_benchmark, recommend,
};

const EPS: f64 = 1e-9;

fn sample_input() -> ActivityInput {
    ActivityInput {
        electricity: Some(5000.0),
        fuel_petrol: Some(300.0),
        transport_car_petrol: Some(2000.0),
        water: Some(100.0),
        ..Default::default()
    }
}

#[test]
fn test_full_pipeline() {
    // Calculate the footprint, then feed it through every downstream service
    // the way the platform composes them per calculation.
    let result = calculate_footprint(&sample_input()).unwrap();

    assert!((result.scope1.value() - 693.0).abs() < EPS);
    assert!((result.scope2.value() - 4600.0).abs() < EPS);
    assert!((result.scope3.value() - 418.4).abs() < EPS);
    assert!((result.total_kg.value() - 5711.4).abs() < EPS);
    assert!((result.total_tons - 5.7114).abs() < EPS);

    // Recommendations from the breakdown: electricity (4600 kg > 1000) and
    // fuel (693 kg > 500) at high priority, transportation (384 kg > 300) at
    // medium. Water contributes 34.4 kg, below its threshold.
    let recs = recommend(&result.breakdown);
    let categories: Vec<&str> = recs.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, vec!["electricity", "fuel", "transportation"]);
    assert_eq!(recs[0].priority, Priority::High);
    assert_eq!(recs[2].priority, Priority::Medium);

    // Benchmark against the technology industry average.
    let comparison =
        compare_to_benchmark(result.total_kg, KgCo2e::new(15000.0)).unwrap();
    assert_eq!(comparison.status, BenchmarkStatus::Below);
    assert_eq!(comparison.rating, Rating::A);

    // First calculation, well below the benchmark.
    let points = award_points(&GreenPointContext {
        current_footprint: result.total_kg,
        previous_footprint: None,
        industry_average: KgCo2e::new(15000.0),
        is_first_calculation: true,
    });
    // savings = (15000 - 5711.4) / 15000 * 100 = 61.924%; floor(619.24) = 619.
    assert_eq!(points, 500 + 619);
}

#[test]
fn test_breakdown_additivity_and_partition() {
    let result = calculate_footprint(&sample_input()).unwrap();

    let breakdown_sum: f64 = result.breakdown.values().map(|kg| kg.value()).sum();
    assert!((breakdown_sum - result.total_kg.value()).abs() < EPS);

    let scope_sum = result.scope1.value() + result.scope2.value() + result.scope3.value();
    assert!((scope_sum - result.total_kg.value()).abs() < EPS);

    // Rebuilding scope subtotals from the breakdown gives the same numbers,
    // so no category is counted in two scopes.
    let mut by_scope = [0.0f64; 3];
    for (category, kg) in &result.breakdown {
        let index = match category.scope() {
            greentrace_rust::api::Scope::Scope1 => 0,
            greentrace_rust::api::Scope::Scope2 => 1,
            greentrace_rust::api::Scope::Scope3 => 2,
        };
        by_scope[index] += kg.value();
    }
    assert!((by_scope[0] - result.scope1.value()).abs() < EPS);
    assert!((by_scope[1] - result.scope2.value()).abs() < EPS);
    assert!((by_scope[2] - result.scope3.value()).abs() < EPS);
}

#[test]
fn test_points_scenario() {
    let points = award_points(&GreenPointContext {
        current_footprint: KgCo2e::new(800.0),
        previous_footprint: Some(KgCo2e::new(1000.0)),
        industry_average: KgCo2e::new(1000.0),
        is_first_calculation: true,
    });
    assert_eq!(points, 1700);
}

#[test]
fn test_rating_boundaries() {
    let a = compare_to_benchmark(KgCo2e::new(700.0), KgCo2e::new(1000.0)).unwrap();
    assert_eq!(a.rating, Rating::A);
    assert!((a.percentage_diff - (-30.0)).abs() < EPS);

    let b = compare_to_benchmark(KgCo2e::new(701.0), KgCo2e::new(1000.0)).unwrap();
    assert_eq!(b.rating, Rating::B);
}

#[test]
fn test_json_request_to_json_response() {
    // The shape the REST layer hands us and the shape it expects back.
    let request = r#"{"electricity": 100, "wasteLandfill": 40, "wasteRecycled": 10}"#;
    let input: ActivityInput = serde_json::from_str(request).unwrap();
    let result = calculate_footprint(&input).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&result).unwrap()).unwrap();
    assert!((value["totalKg"].as_f64().unwrap() - (92.0 + 20.0 + 1.0)).abs() < EPS);
    assert!(value["breakdown"]["electricity"].is_f64());
    assert!(value["breakdown"].get("water").is_none());
    assert_eq!(value["scopes"]["scope2"]["color"], "#f59e0b");

    // Landfill (20 kg) exceeds recycled (1 kg): the waste rule fires.
    let recs = recommend(&result.breakdown);
    assert!(recs.iter().any(|r| r.category == "waste"));
}

#[test]
fn test_invalid_input_fails_loudly() {
    let input = ActivityInput {
        electricity: Some(-1.0),
        ..Default::default()
    };
    let err = calculate_footprint(&input).unwrap_err();
    assert!(matches!(
        err,
        greentrace_rust::error::EngineError::Validation { .. }
    ));
}

#[test]
fn test_zero_emissions_company() {
    // A company reporting nothing gets a defined result and no
    // recommendations, and still earns the first-calculation bonus.
    let result = calculate_footprint(&ActivityInput::default()).unwrap();
    assert_eq!(result.total_kg.value(), 0.0);
    assert_eq!(result.scopes.scope3.percentage, 0.0);
    assert!(recommend(&result.breakdown).is_empty());

    let points = award_points(&GreenPointContext {
        current_footprint: result.total_kg,
        previous_footprint: None,
        industry_average: KgCo2e::new(25000.0),
        is_first_calculation: true,
    });
    // 500 first + floor(100% * 10) below average.
    assert_eq!(points, 500 + 1000);
}

#[test]
fn test_category_scope_assignments() {
    use greentrace_rust::api::Scope;

    assert_eq!(Category::FuelPetrol.scope(), Scope::Scope1);
    assert_eq!(Category::FuelDiesel.scope(), Scope::Scope1);
    assert_eq!(Category::Electricity.scope(), Scope::Scope2);
    for category in [
        Category::TransportCarPetrol,
        Category::TransportCarDiesel,
        Category::TransportTruck,
        Category::WasteLandfill,
        Category::WasteRecycled,
        Category::Water,
        Category::Paper,
    ] {
        assert_eq!(category.scope(), Scope::Scope3);
    }
}
