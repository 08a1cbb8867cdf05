use super::*;

#[test]
fn test_alias_intervals() {
    assert_eq!(cadence_interval_seconds("@hourly"), Some(3600));
    assert_eq!(cadence_interval_seconds("@daily"), Some(86_400));
    assert_eq!(cadence_interval_seconds("@weekly"), Some(604_800));
    assert_eq!(cadence_interval_seconds("@monthly"), Some(2_592_000));
}

#[test]
fn test_five_field_intervals() {
    assert_eq!(cadence_interval_seconds("*/5 * * * *"), Some(300));
    assert_eq!(cadence_interval_seconds("*/15 * * * *"), Some(900));
    assert_eq!(cadence_interval_seconds("0 * * * *"), Some(3600));
    assert_eq!(cadence_interval_seconds("30 * * * *"), Some(3600));
    assert_eq!(cadence_interval_seconds("0 */6 * * *"), Some(21_600));
    assert_eq!(cadence_interval_seconds("0 0 * * *"), Some(86_400));
    assert_eq!(cadence_interval_seconds("15 4 * * *"), Some(86_400));
    assert_eq!(cadence_interval_seconds("0 0 * * 0"), Some(604_800));
    assert_eq!(cadence_interval_seconds("0 0 1 * *"), Some(2_592_000));
}

#[test]
fn test_unclassifiable_expressions() {
    assert_eq!(cadence_interval_seconds(""), None);
    assert_eq!(cadence_interval_seconds("not a cron"), None);
    assert_eq!(cadence_interval_seconds("* * * *"), None);
    assert_eq!(cadence_interval_seconds("1-5 * * * *"), None);
}

#[test]
fn test_recommended_expression_buckets() {
    assert_eq!(recommended_expression(300), "*/5 * * * *");
    assert_eq!(recommended_expression(900), "*/15 * * * *");
    assert_eq!(recommended_expression(1800), "*/30 * * * *");
    assert_eq!(recommended_expression(3600), "0 * * * *");
    assert_eq!(recommended_expression(21_600), "0 */6 * * *");
    assert_eq!(recommended_expression(86_400), "0 0 * * *");
    assert_eq!(recommended_expression(604_800), "0 0 * * 0");
}

#[test]
fn test_finest_cadence_dominates() {
    // An hourly model next to a daily one requires the hourly bucket
    let finest = [
        cadence_interval_seconds("@daily").unwrap(),
        cadence_interval_seconds("@hourly").unwrap(),
    ]
    .into_iter()
    .min()
    .unwrap();
    assert_eq!(recommended_expression(finest), "0 * * * *");
}
