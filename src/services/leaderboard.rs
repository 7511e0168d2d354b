//! Green-point leaderboard rankings and industry averages.

use crate::api::CompanyId;
use crate::models::{Industry, KgCo2e};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// One company's standing as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub company_id: CompanyId,
    pub company_name: String,
    pub industry: Industry,
    pub green_points: u64,
    pub total_footprint: KgCo2e,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_calculation: Option<DateTime<Utc>>,
}

/// A ranked leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRanking {
    /// 1-based position on the leaderboard.
    pub rank: u32,
    pub company_id: CompanyId,
    pub company_name: String,
    pub industry: Industry,
    pub green_points: u64,
}

/// Rank companies by green points, highest first.
///
/// The sort is stable; companies with equal points keep their input order,
/// matching the upstream linear-scan ranking.
pub fn compute_rankings(entries: Vec<LeaderboardEntry>) -> Vec<CompanyRanking> {
    let mut sorted = entries;
    sorted.sort_by(|a, b| b.green_points.cmp(&a.green_points));
    debug!("ranked {} companies", sorted.len());

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, entry)| CompanyRanking {
            rank: (index + 1) as u32,
            company_id: entry.company_id,
            company_name: entry.company_name,
            industry: entry.industry,
            green_points: entry.green_points,
        })
        .collect()
}

/// Mean total footprint over the entries of one industry.
///
/// Returns `None` when the industry has no entries.
pub fn industry_average(entries: &[LeaderboardEntry], industry: Industry) -> Option<KgCo2e> {
    let footprints: Vec<f64> = entries
        .iter()
        .filter(|e| e.industry == industry)
        .map(|e| e.total_footprint.value())
        .collect();

    if footprints.is_empty() {
        return None;
    }

    let mean = footprints.iter().sum::<f64>() / footprints.len() as f64;
    Some(KgCo2e::new(mean))
}

#[cfg(test)]
mod tests {
    use super::{compute_rankings, industry_average, LeaderboardEntry};
    use crate::api::CompanyId;
    use crate::models::{Industry, KgCo2e};

    fn entry(id: i64, name: &str, industry: Industry, points: u64, kg: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            company_id: CompanyId::new(id),
            company_name: name.to_string(),
            industry,
            green_points: points,
            total_footprint: KgCo2e::new(kg),
            last_calculation: None,
        }
    }

    #[test]
    fn test_rankings_sorted_by_points_desc() {
        let entries = vec![
            entry(1, "Acme", Industry::Technology, 1200, 9000.0),
            entry(2, "Globex", Industry::Retail, 4500, 20000.0),
            entry(3, "Initech", Industry::Technology, 300, 14000.0),
        ];
        let rankings = compute_rankings(entries);

        assert_eq!(rankings.len(), 3);
        assert_eq!(rankings[0].company_name, "Globex");
        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[1].company_name, "Acme");
        assert_eq!(rankings[1].rank, 2);
        assert_eq!(rankings[2].company_name, "Initech");
        assert_eq!(rankings[2].rank, 3);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let entries = vec![
            entry(1, "First", Industry::Other, 100, 1.0),
            entry(2, "Second", Industry::Other, 100, 2.0),
        ];
        let rankings = compute_rankings(entries);
        assert_eq!(rankings[0].company_name, "First");
        assert_eq!(rankings[1].company_name, "Second");
    }

    #[test]
    fn test_empty_leaderboard() {
        assert!(compute_rankings(vec![]).is_empty());
    }

    #[test]
    fn test_industry_average() {
        let entries = vec![
            entry(1, "Acme", Industry::Technology, 0, 10000.0),
            entry(2, "Initech", Industry::Technology, 0, 20000.0),
            entry(3, "Globex", Industry::Retail, 0, 99999.0),
        ];
        let avg = industry_average(&entries, Industry::Technology).unwrap();
        assert!((avg.value() - 15000.0).abs() < 1e-9);
    }

    #[test]
    fn test_industry_average_empty_is_none() {
        let entries = vec![entry(1, "Acme", Industry::Technology, 0, 10000.0)];
        assert!(industry_average(&entries, Industry::Finance).is_none());
    }
}
