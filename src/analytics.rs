//! Marks analytics: grouping, per-subject averages, rankings and overall figures.
//!
//! The free functions are pure and work on any slice of records. `AnalyticsService`
//! reads the full record set through a `StudentStore` and delegates to them.

use crate::error::AppError;
use crate::model::StudentRecord;
use crate::service::StudentStore;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

pub const DEFAULT_TOP_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkStats {
    pub count: usize,
    pub average: f64,
    pub min: i32,
    pub max: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    /// `None` when there are no records.
    pub overall: Option<MarkStats>,
    pub average_by_subject: BTreeMap<String, f64>,
    pub top_students: Vec<StudentRecord>,
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(marks: impl ExactSizeIterator<Item = i32>) -> Option<f64> {
    let n = marks.len();
    if n == 0 {
        return None;
    }
    let sum: i64 = marks.map(i64::from).sum();
    Some(sum as f64 / n as f64)
}

/// Partition by exact subject string. Records keep their input order inside each group.
pub fn group_by_subject(records: &[StudentRecord]) -> BTreeMap<String, Vec<StudentRecord>> {
    let mut groups: BTreeMap<String, Vec<StudentRecord>> = BTreeMap::new();
    for r in records {
        groups.entry(r.subject.clone()).or_default().push(r.clone());
    }
    groups
}

pub fn average_marks_by_subject(records: &[StudentRecord]) -> BTreeMap<String, f64> {
    group_by_subject(records)
        .into_iter()
        .filter_map(|(subject, group)| {
            mean(group.iter().map(|r| r.marks)).map(|avg| (subject, round2(avg)))
        })
        .collect()
}

/// Highest marks first. The sort is stable, so ties keep input order.
pub fn top_students(records: &[StudentRecord], limit: usize) -> Vec<StudentRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| Reverse(r.marks));
    sorted.truncate(limit);
    sorted
}

/// `None` means "no data"; callers must not read it as zeros.
pub fn overall_stats(records: &[StudentRecord]) -> Option<MarkStats> {
    let average = mean(records.iter().map(|r| r.marks))?;
    let min = records.iter().map(|r| r.marks).min()?;
    let max = records.iter().map(|r| r.marks).max()?;
    Some(MarkStats {
        count: records.len(),
        average: round2(average),
        min,
        max,
    })
}

pub struct AnalyticsService;

impl AnalyticsService {
    pub async fn average_marks_by_subject(
        store: &dyn StudentStore,
    ) -> Result<BTreeMap<String, f64>, AppError> {
        let records = store.get_all().await?;
        Ok(average_marks_by_subject(&records))
    }

    pub async fn top_students(
        store: &dyn StudentStore,
        limit: usize,
    ) -> Result<Vec<StudentRecord>, AppError> {
        let records = store.get_all().await?;
        Ok(top_students(&records, limit))
    }

    pub async fn overall_stats(store: &dyn StudentStore) -> Result<Option<MarkStats>, AppError> {
        let records = store.get_all().await?;
        Ok(overall_stats(&records))
    }

    /// All figures from a single read of the record set.
    pub async fn summary(store: &dyn StudentStore, top_n: usize) -> Result<AnalyticsSummary, AppError> {
        let records = store.get_all().await?;
        tracing::debug!(records = records.len(), top_n, "computing analytics summary");
        Ok(AnalyticsSummary {
            overall: overall_stats(&records),
            average_by_subject: average_marks_by_subject(&records),
            top_students: top_students(&records, top_n),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MemoryStudentStore;

    fn rec(id: i32, subject: &str, marks: i32) -> StudentRecord {
        StudentRecord {
            student_id: id,
            name: format!("student-{}", id),
            age: 20,
            gender: "Female".into(),
            subject: subject.into(),
            marks,
        }
    }

    #[test]
    fn averages_per_subject() {
        let records = vec![rec(1, "Math", 80), rec(2, "Math", 90), rec(3, "Eng", 70)];
        let avg = average_marks_by_subject(&records);
        assert_eq!(avg.len(), 2);
        assert_eq!(avg["Math"], 85.0);
        assert_eq!(avg["Eng"], 70.0);
    }

    #[test]
    fn averages_round_to_two_decimals() {
        let records = vec![rec(1, "Art", 70), rec(2, "Art", 70), rec(3, "Art", 71)];
        assert_eq!(average_marks_by_subject(&records)["Art"], 70.33);
    }

    #[test]
    fn empty_input_gives_empty_results() {
        assert!(average_marks_by_subject(&[]).is_empty());
        assert!(group_by_subject(&[]).is_empty());
        assert!(top_students(&[], 3).is_empty());
        assert_eq!(overall_stats(&[]), None);
    }

    #[test]
    fn grouping_uses_exact_subject_match_and_keeps_order() {
        let records = vec![rec(1, "Math", 10), rec(2, "math", 20), rec(3, "Math", 30)];
        let groups = group_by_subject(&records);
        assert_eq!(groups.len(), 2);
        let ids: Vec<i32> = groups["Math"].iter().map(|r| r.student_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn top_students_sorted_descending_and_truncated() {
        let records = vec![rec(1, "Math", 50), rec(2, "Math", 90), rec(3, "Eng", 70)];
        let top = top_students(&records, 2);
        let marks: Vec<i32> = top.iter().map(|r| r.marks).collect();
        assert_eq!(marks, vec![90, 70]);
    }

    #[test]
    fn top_students_limit_larger_than_input() {
        let records = vec![rec(1, "Math", 50), rec(2, "Math", 50)];
        let top = top_students(&records, 10);
        let ids: Vec<i32> = top.iter().map(|r| r.student_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn overall_stats_over_all_records() {
        let records = vec![rec(1, "Math", 50), rec(2, "Math", 90), rec(3, "Eng", 71)];
        let stats = overall_stats(&records).unwrap();
        assert_eq!(
            stats,
            MarkStats {
                count: 3,
                average: 70.33,
                min: 50,
                max: 90,
            }
        );
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(85.0), 85.0);
    }

    #[tokio::test]
    async fn service_reads_through_store() {
        let store = MemoryStudentStore::with_records(vec![
            rec(1, "Math", 80),
            rec(2, "Math", 90),
            rec(3, "Eng", 70),
        ]);
        let summary = AnalyticsService::summary(&store, 1).await.unwrap();
        assert_eq!(summary.overall.as_ref().map(|s| s.count), Some(3));
        assert_eq!(summary.average_by_subject["Math"], 85.0);
        assert_eq!(summary.top_students.len(), 1);
        assert_eq!(summary.top_students[0].student_id, 2);

        let empty = MemoryStudentStore::new();
        assert_eq!(AnalyticsService::overall_stats(&empty).await.unwrap(), None);
        assert!(AnalyticsService::average_marks_by_subject(&empty)
            .await
            .unwrap()
            .is_empty());
    }
}
