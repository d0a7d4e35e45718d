// lexaudit-core/src/application/distribution.rs

use tracing::{instrument, warn};

use crate::domain::schema::BILL_TABLE;
use crate::domain::stats::{Percentage, StatusBucket, StatusDistribution};
use crate::error::AuditError;
use crate::ports::gateway::QueryGateway;

const STATUS_COLUMN: &str = "bill_status";

/// Bills per status, sorted by label with the null bucket last.
#[instrument(skip_all)]
pub async fn analyze_status_distribution(
    gateway: &dyn QueryGateway,
) -> Result<StatusDistribution, AuditError> {
    let total = gateway.total_count(BILL_TABLE).await?;
    if total == 0 {
        return Ok(StatusDistribution::default());
    }

    let mut groups = gateway.group_count(BILL_TABLE, STATUS_COLUMN).await?;
    // None sorts first on Option; flip it so the null bucket lands last
    groups.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    let buckets: Vec<StatusBucket> = groups
        .into_iter()
        .map(|(status, count)| StatusBucket {
            status,
            count,
            percentage: Percentage::of(count, total),
        })
        .collect();

    let distribution = StatusDistribution {
        total_count: total,
        buckets,
    };

    let sum = distribution.bucket_sum();
    if sum != total {
        warn!(
            total,
            sum, "Status buckets do not add up to the bill total, store changed mid-run?"
        );
    }

    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::completeness::tests::MockGateway;
    use std::collections::HashMap;

    fn gateway(total: u64, groups: Vec<(Option<&str>, u64)>) -> MockGateway {
        MockGateway {
            totals: HashMap::from([(BILL_TABLE.to_string(), total)]),
            groups: groups
                .into_iter()
                .map(|(s, c)| (s.map(str::to_string), c))
                .collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_sorted_with_null_last() -> anyhow::Result<()> {
        let gw = gateway(
            11,
            vec![(Some("REJECT"), 1), (None, 1), (Some("PASS"), 8), (Some("ONGOING"), 1)],
        );

        let dist = analyze_status_distribution(&gw).await?;

        let labels: Vec<&str> = dist.buckets.iter().map(StatusBucket::label).collect();
        assert_eq!(labels, ["ONGOING", "PASS", "REJECT", "null"]);
        assert_eq!(dist.bucket_sum(), dist.total_count);
        Ok(())
    }

    #[tokio::test]
    async fn test_half_up_percentages() -> anyhow::Result<()> {
        let gw = gateway(3, vec![(Some("PASS"), 2), (Some("REJECT"), 1)]);

        let dist = analyze_status_distribution(&gw).await?;

        let pcts: Vec<String> = dist.buckets.iter().map(|b| b.percentage.to_string()).collect();
        assert_eq!(pcts, ["66.67", "33.33"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_store_gives_empty_distribution() -> anyhow::Result<()> {
        let gw = gateway(0, vec![]);
        let dist = analyze_status_distribution(&gw).await?;
        assert_eq!(dist, StatusDistribution::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_mismatched_sum_still_reports() -> anyhow::Result<()> {
        let gw = gateway(10, vec![(Some("PASS"), 9)]);
        let dist = analyze_status_distribution(&gw).await?;
        assert_eq!(dist.total_count, 10);
        assert_eq!(dist.bucket_sum(), 9);
        Ok(())
    }
}
