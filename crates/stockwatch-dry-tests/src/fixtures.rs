// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed literal record fixtures.
//!
//! Fixtures never draw random numbers; every quantity and date is spelled out
//! so assertions against them stay deterministic.

use stockwatch_core::Record;
use time::macros::date;

/// Three-record inventory with one record on each side of the boundary and
/// one exactly on it: `A 5/10`, `B 20/10`, `C 10/10`.
pub fn abc_inventory() -> Vec<Record> {
    vec![
        Record::stock("A", 5.0, 10.0),
        Record::stock("B", 20.0, 10.0),
        Record::stock("C", 10.0, 10.0),
    ]
}

/// Pharmacy stock with per-medicine thresholds and expiry dates.
///
/// Low stock: Aspirin (8 <= 10), Amoxicillin (25 <= 25).
pub fn medicine_inventory() -> Vec<Record> {
    vec![
        Record::stock("Aspirin", 8.0, 10.0)
            .with_category("Analgesic")
            .with_expiry(date!(2026 - 11 - 20)),
        Record::stock("Paracetamol", 64.0, 20.0)
            .with_category("Analgesic")
            .with_expiry(date!(2027 - 03 - 01)),
        Record::stock("Ibuprofen", 16.0, 15.0)
            .with_category("Anti-inflammatory")
            .with_expiry(date!(2026 - 12 - 05)),
        Record::stock("Amoxicillin", 25.0, 25.0)
            .with_category("Antibiotic")
            .with_expiry(date!(2027 - 06 - 30)),
        Record::stock("Metformin", 91.0, 30.0)
            .with_category("Antidiabetic")
            .with_expiry(date!(2027 - 09 - 15)),
    ]
}

/// Medical equipment counts. Low stock: Ventilator, Defibrillator.
pub fn equipment_inventory() -> Vec<Record> {
    vec![
        Record::stock("Ventilator", 3.0, 5.0).with_category("Respiratory"),
        Record::stock("Infusion Pump", 40.0, 12.0).with_category("Infusion"),
        Record::stock("Defibrillator", 2.0, 2.0).with_category("Cardiac"),
        Record::stock("ECG Monitor", 14.0, 6.0).with_category("Cardiac"),
    ]
}

/// Ward beds. Occupied: ICU-1, GEN-1, GEN-3.
pub fn ward_beds() -> Vec<Record> {
    vec![
        Record::binary("ICU-1", true).with_category("ICU"),
        Record::binary("ICU-2", false).with_category("ICU"),
        Record::binary("GEN-1", true).with_category("General Ward"),
        Record::binary("GEN-2", false).with_category("General Ward"),
        Record::binary("GEN-3", true).with_category("General Ward"),
    ]
}

/// Patients, occupied when admitted, with `age` and `priority` metrics.
pub fn patients() -> Vec<Record> {
    vec![
        Record::binary("Patient 1", true)
            .with_category("Cardiology")
            .with_metric("age", 72.0)
            .with_metric("priority", 1.0),
        Record::binary("Patient 2", false)
            .with_category("Orthopedics")
            .with_metric("age", 35.0)
            .with_metric("priority", 3.0),
        Record::binary("Patient 3", true)
            .with_category("Neurology")
            .with_metric("age", 58.0)
            .with_metric("priority", 2.0),
        Record::binary("Patient 4", true)
            .with_category("Cardiology")
            .with_metric("age", 19.0)
            .with_metric("priority", 5.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_record_is_valid() {
        let all = [
            abc_inventory(),
            medicine_inventory(),
            equipment_inventory(),
            ward_beds(),
            patients(),
        ];
        for record in all.iter().flatten() {
            assert!(record.kind().is_ok(), "{} should be valid", record.identity);
        }
    }

    #[test]
    fn medicine_fixture_serializes_dates_as_iso() {
        let json = serde_json::to_value(&medicine_inventory()[0]).unwrap_or_default();
        assert_eq!(json["expiry"], "2026-11-20");
    }
}
