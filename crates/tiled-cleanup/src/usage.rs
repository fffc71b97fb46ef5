use tiled_cache::L2Store;
use tiled_catalog::Result;
use timestamp::Timestamp;

use crate::report::UsageAnalysis;

const MAX_SAMPLES: u64 = 1000;

/// Samples up to [`MAX_SAMPLES`] L2 keys and computes age/TTL/size
/// distributions, producing textual recommendations (spec §4.8, grounded in
/// `cleanup_tasks.py::cleanup_analyze_usage`/`_generate_recommendations`).
/// `days` only labels the report's reported period; the sample itself is
/// whatever is currently live in L2, same as the original's Redis scan.
pub async fn analyze_usage(l2: &dyn L2Store, days: u32) -> Result<UsageAnalysis> {
    let now = Timestamp::now();
    let mut analysis = UsageAnalysis { period_days: days, ..Default::default() };
    let mut total_size = 0u64;

    for key in l2.scan_prefix("").await?.into_iter().take(MAX_SAMPLES as usize) {
        let Some(info) = l2.inspect(&key).await? else {
            continue;
        };

        analysis.samples_analyzed += 1;
        total_size += info.size;

        let age_days = info.age(now).as_secs() as i64 / 86_400;
        analysis.age_distribution.record_days(age_days);

        let ttl_days = info.ttl_remaining(now).as_secs() as i64 / 86_400;
        analysis.ttl_distribution.record_days(ttl_days);

        analysis.size_distribution.record_bytes(info.size);
    }

    if analysis.samples_analyzed > 0 {
        analysis.average_size_bytes = total_size / analysis.samples_analyzed;
    }
    analysis.recommendations = recommendations(&analysis, total_size);

    Ok(analysis)
}

fn recommendations(analysis: &UsageAnalysis, total_size: u64) -> Vec<String> {
    let mut out = Vec::new();
    let samples = analysis.samples_analyzed;
    if samples == 0 {
        return vec!["no data available for analysis".to_string()];
    }

    let old = analysis.age_distribution.over_90_days;
    if old as f64 > samples as f64 * 0.2 {
        out.push(format!("consider reducing TTL: {:.1}% of items are older than 90 days", old as f64 / samples as f64 * 100.0));
    }

    let avg_mb = (total_size as f64 / samples as f64) / (1024.0 * 1024.0);
    if avg_mb > 5.0 {
        out.push(format!("large average tile size ({avg_mb:.1}MB) -- consider compression or resolution reduction"));
    }

    let long_ttl = analysis.ttl_distribution.over_90_days;
    if long_ttl as f64 > samples as f64 * 0.8 && (old as f64) < samples as f64 * 0.1 {
        out.push("TTL may be too long -- most items expire before being that old".to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tiled_cache::InMemoryL2;

    #[tokio::test]
    async fn samples_every_live_key_and_computes_an_average_size() {
        let l2 = InMemoryL2::new();
        l2.set("tile:a", vec![0; 10], Duration::from_secs(60)).await.unwrap();
        l2.set("tile:b", vec![0; 20], Duration::from_secs(60)).await.unwrap();

        let analysis = analyze_usage(&l2, 30).await.unwrap();

        assert_eq!(analysis.samples_analyzed, 2);
        assert_eq!(analysis.average_size_bytes, 15);
        assert_eq!(analysis.age_distribution.total(), 2);
    }

    #[tokio::test]
    async fn empty_cache_gets_a_no_data_recommendation() {
        let l2 = InMemoryL2::new();
        let analysis = analyze_usage(&l2, 30).await.unwrap();
        assert_eq!(analysis.samples_analyzed, 0);
        assert_eq!(analysis.recommendations, vec!["no data available for analysis".to_string()]);
    }
}
