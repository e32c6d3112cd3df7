//! Doctor flow tests: creation, validation, and the wire shape.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mediscript_prescriptions::{
        PrescriptionDraft, PrescriptionError, PrescriptionRegistry, PrescriptionStatus,
    };
    use mediscript_shared::Frequency;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn complete_draft() -> PrescriptionDraft {
        PrescriptionDraft {
            patient_name: "John Doe".to_string(),
            patient_email: "john@example.com".to_string(),
            medication: "Amoxicillin".to_string(),
            dosage: "500mg".to_string(),
            frequency: Some(Frequency::TwiceDaily),
            duration: "7 days".to_string(),
            instructions: "Take with food".to_string(),
        }
    }

    #[test]
    fn creation_gives_every_record_distinct_codes() {
        let mut registry = PrescriptionRegistry::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let now = Utc::now();

        for _ in 0..5 {
            registry
                .create(complete_draft(), "Dr. Smith", now, &mut rng)
                .unwrap();
        }

        let ids: std::collections::HashSet<_> = registry.iter().map(|p| p.id).collect();
        let tokens: std::collections::HashSet<_> =
            registry.iter().map(|p| p.qr_code.clone()).collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn every_missing_mandatory_field_aborts_without_mutation() {
        let mut registry = PrescriptionRegistry::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let now = Utc::now();

        let mut draft = complete_draft();
        draft.patient_name.clear();
        assert_eq!(
            registry.create(draft, "Dr. Smith", now, &mut rng).unwrap_err(),
            PrescriptionError::MissingField("patient name")
        );

        let mut draft = complete_draft();
        draft.medication.clear();
        assert_eq!(
            registry.create(draft, "Dr. Smith", now, &mut rng).unwrap_err(),
            PrescriptionError::MissingField("medication")
        );

        let mut draft = complete_draft();
        draft.dosage.clear();
        assert_eq!(
            registry.create(draft, "Dr. Smith", now, &mut rng).unwrap_err(),
            PrescriptionError::MissingField("dosage")
        );

        assert!(registry.is_empty());
    }

    #[test]
    fn prescription_serializes_with_the_form_vocabulary() {
        let mut registry = PrescriptionRegistry::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();

        registry
            .create(complete_draft(), "Dr. Smith", now, &mut rng)
            .unwrap();
        let rx = registry.iter().next().unwrap();
        let value = serde_json::to_value(rx).unwrap();

        assert_eq!(value["status"], "active");
        assert_eq!(value["frequency"], "twice-daily");
        assert_eq!(
            value["qr_code"].as_str().unwrap(),
            format!("prescription_{}", rx.id)
        );
        assert_eq!(value["otp"].as_str().unwrap().len(), 6);
    }

    #[test]
    fn records_stay_active_and_untouched_after_creation() {
        let mut registry = PrescriptionRegistry::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let now = Utc::now();

        registry
            .create(complete_draft(), "Dr. Smith", now, &mut rng)
            .unwrap();
        let before: Vec<_> = registry.iter().cloned().collect();

        // Further doctor activity never mutates existing records.
        registry
            .create(complete_draft(), "Dr. Smith", now, &mut rng)
            .unwrap();
        let after: Vec<_> = registry.iter().skip(1).cloned().collect();

        assert_eq!(before, after);
        assert!(registry
            .iter()
            .all(|p| p.status == PrescriptionStatus::Active));
    }
}
