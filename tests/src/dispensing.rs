//! Pharmacist flow tests: the two verification paths and dispensing.

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use mediscript_dispensing::{
        DeskError, DispenseState, VerificationDesk, SCAN_DELAY_SECS,
    };
    use mediscript_shared::CodeError;

    fn noon() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn the_two_verification_paths_fabricate_different_records() {
        let mut desk = VerificationDesk::new();
        let t0 = noon();

        desk.verify_code("A3K9XZ", t0).unwrap();
        desk.start_scan(t0).unwrap();
        desk.poll_scan(t0 + Duration::seconds(SCAN_DELAY_SECS))
            .unwrap()
            .expect("scan complete");

        let patients: Vec<_> = desk.iter().map(|r| r.patient_name.as_str()).collect();
        // Newest first: the scan record leads.
        assert_eq!(patients, vec!["Jane Smith", "John Doe"]);
        assert!(desk.iter().all(|r| r.state == DispenseState::Verified));
    }

    #[test]
    fn verification_never_reads_doctor_records() {
        // Any non-empty input verifies; there is no lookup to fail.
        let mut desk = VerificationDesk::new();
        desk.verify_code("NOT-A-REAL-CODE", noon()).unwrap();
        assert_eq!(desk.len(), 1);
    }

    #[test]
    fn empty_input_surfaces_an_error_and_changes_nothing() {
        let mut desk = VerificationDesk::new();
        assert_eq!(
            desk.verify_code("", noon()).unwrap_err(),
            DeskError::Code(CodeError::Empty)
        );
        assert!(desk.is_empty());
        assert!(!desk.is_scanning());
    }

    #[test]
    fn scan_delay_is_fixed_and_polling_early_is_harmless() {
        let mut desk = VerificationDesk::new();
        let t0 = noon();
        desk.start_scan(t0).unwrap();

        for secs in 0..SCAN_DELAY_SECS {
            assert!(desk.poll_scan(t0 + Duration::seconds(secs)).unwrap().is_none());
            assert!(desk.is_empty());
            assert!(desk.is_scanning());
        }

        desk.poll_scan(t0 + Duration::seconds(SCAN_DELAY_SECS))
            .unwrap()
            .expect("scan complete");
        assert_eq!(desk.len(), 1);
        // The scanner is reusable once idle again.
        desk.start_scan(t0 + Duration::seconds(10)).unwrap();
    }

    #[test]
    fn dispensing_moves_one_record_from_verified_to_dispensed() {
        let mut desk = VerificationDesk::new();
        let t0 = noon();
        desk.verify_code("AAAAAA", t0).unwrap();
        desk.verify_code("BBBBBB", t0).unwrap();
        let id = desk.iter().next().unwrap().id;

        let dispensed = desk.dispense(&id).unwrap();
        assert_eq!(dispensed.state, DispenseState::Dispensed);

        let states: Vec<_> = desk.iter().map(|r| r.state).collect();
        assert_eq!(states, vec![DispenseState::Dispensed, DispenseState::Verified]);

        let stats = desk.stats(t0);
        assert_eq!(stats.verified_today, 2);
        assert_eq!(stats.dispensed_today, 1);
    }
}
