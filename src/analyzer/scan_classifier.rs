pub struct ScanClassifier;

impl ScanClassifier {
    /// A query that neither pins the partition key nor hits a secondary
    /// index has to read every partition. Clustering restrictions and
    /// `ALLOW FILTERING` do not change that.
    pub fn is_full_table_scan(uses_partition_key: bool, uses_secondary_index: bool) -> bool {
        !uses_partition_key && !uses_secondary_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_table() {
        assert!(ScanClassifier::is_full_table_scan(false, false));
        assert!(!ScanClassifier::is_full_table_scan(true, false));
        assert!(!ScanClassifier::is_full_table_scan(false, true));
        assert!(!ScanClassifier::is_full_table_scan(true, true));
    }
}
