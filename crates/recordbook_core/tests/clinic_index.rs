use chrono::NaiveDate;
use recordbook_core::{ClinicService, Patient, Prescription, SecondaryIndex, Selection, SelectionError};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
}

fn seeded() -> ClinicService {
    let mut clinic = ClinicService::new();
    clinic.add_patient(Patient::new(1, "Ama Montford", 25, "Female"));
    clinic.add_patient(Patient::new(2, "Christian Agyapong", 38, "Male"));
    clinic.add_patient(Patient::new(3, "Nhyira Yawson", 28, "Female"));
    clinic.add_prescription(Prescription::new(1, 1, "Aspirin", day(1)));
    clinic.add_prescription(Prescription::new(2, 1, "Ibuprofen", day(15)));
    clinic.add_prescription(Prescription::new(3, 2, "Amoxicillin", day(10)));
    clinic.add_prescription(Prescription::new(4, 2, "Vitamin C", day(20)));
    clinic.add_prescription(Prescription::new(5, 3, "Nugel", day(25)));
    clinic
}

#[test]
fn index_groups_by_patient_preserving_order() {
    let clinic = seeded();
    let index = clinic.prescription_index();

    assert_eq!(index.len(), 3);
    let sizes: Vec<usize> = index.iter().map(|(_, group)| group.len()).collect();
    assert_eq!(sizes, [2, 2, 1]);

    let first: Vec<i32> = clinic.prescriptions_for(1).iter().map(|p| p.id).collect();
    let second: Vec<i32> = clinic.prescriptions_for(2).iter().map(|p| p.id).collect();
    assert_eq!(first, [1, 2]);
    assert_eq!(second, [3, 4]);
}

#[test]
fn build_over_plain_values_preserves_group_order() {
    let index = SecondaryIndex::build(vec![(2, 'a'), (1, 'b'), (2, 'c')], |pair| pair.0);

    assert_eq!(index.get(&2), [(2, 'a'), (2, 'c')]);
    assert_eq!(index.keys().copied().collect::<Vec<_>>(), [1, 2]);
    assert!(index.get(&7).is_empty());
}

#[test]
fn index_is_rebuilt_after_prescription_changes() {
    let mut clinic = seeded();
    clinic.add_prescription(Prescription::new(6, 3, "Paracetamol", day(28)));
    assert_eq!(clinic.prescriptions_for(3).len(), 2);

    assert!(clinic.remove_prescription(5));
    let remaining: Vec<i32> = clinic.prescriptions_for(3).iter().map(|p| p.id).collect();
    assert_eq!(remaining, [6]);
    assert!(!clinic.remove_prescription(5));
}

#[test]
fn quit_inputs_end_selection() {
    let clinic = seeded();
    for input in ["", "   ", "q", "Q", " q "] {
        assert_eq!(clinic.select_patient(input).unwrap(), Selection::Quit);
    }
}

#[test]
fn known_patient_returns_prescriptions() {
    let clinic = seeded();

    match clinic.select_patient(" 2 ").unwrap() {
        Selection::Found {
            patient,
            prescriptions,
        } => {
            assert_eq!(patient.name, "Christian Agyapong");
            assert_eq!(prescriptions.len(), 2);
            assert_eq!(prescriptions[0].medication_name, "Amoxicillin");
        }
        other => panic!("unexpected selection: {other:?}"),
    }
}

#[test]
fn patient_without_prescriptions_gets_empty_list() {
    let mut clinic = seeded();
    clinic.add_patient(Patient::new(4, "Kojo Mensah", 41, "Male"));

    let selection = clinic.select_patient("4").unwrap();
    assert!(matches!(selection, Selection::Found { prescriptions, .. } if prescriptions.is_empty()));
}

#[test]
fn invalid_and_unknown_inputs_are_errors() {
    let clinic = seeded();

    assert_eq!(
        clinic.select_patient("abc").unwrap_err(),
        SelectionError::InvalidInput("abc".to_string())
    );

    match clinic.select_patient("42").unwrap_err() {
        SelectionError::UnknownPatient { id, available } => {
            assert_eq!(id, 42);
            let ids: Vec<i32> = available.iter().map(|(id, _)| *id).collect();
            assert_eq!(ids, [1, 2, 3]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_id_is_an_unknown_patient_not_invalid_input() {
    let clinic = seeded();

    match clinic.select_patient("-1").unwrap_err() {
        SelectionError::UnknownPatient { id, available } => {
            assert_eq!(id, -1);
            assert_eq!(available.len(), 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_patient_id_is_selectable() {
    let mut clinic = seeded();
    clinic.add_patient(Patient::new(-7, "Esi Boateng", 33, "Female"));
    clinic.add_prescription(Prescription::new(9, -7, "Cetirizine", day(3)));

    match clinic.select_patient(" -7 ").unwrap() {
        Selection::Found {
            patient,
            prescriptions,
        } => {
            assert_eq!(patient.name, "Esi Boateng");
            assert_eq!(prescriptions.len(), 1);
            assert_eq!(prescriptions[0].medication_name, "Cetirizine");
        }
        Selection::Quit => panic!("expected a patient"),
    }
}
