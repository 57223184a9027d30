//! Static vaccination-schedule catalog.
//!
//! Read-only reference data: logged vaccine events point back into this
//! table by id, they never own a copy of it.

/// One scheduled dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaccineInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Due age in months; 0 means at birth.
    pub month_due: u32,
    /// Only available through private clinics, not the public schedule.
    pub is_private_only: bool,
}

const fn dose(id: &'static str, name: &'static str, description: &'static str, month_due: u32) -> VaccineInfo {
    VaccineInfo {
        id,
        name,
        description,
        month_due,
        is_private_only: false,
    }
}

const fn private_dose(id: &'static str, name: &'static str, description: &'static str, month_due: u32) -> VaccineInfo {
    VaccineInfo {
        id,
        name,
        description,
        month_due,
        is_private_only: true,
    }
}

pub const VACCINATION_SCHEDULE: &[VaccineInfo] = &[
    // At birth
    dose("bcg", "BCG", "Tuberculosis (single dose)", 0),
    dose("hepb_0", "Hepatitis B", "At birth", 0),
    // 2 months
    dose("penta_1", "Pentavalent (D1)", "Diphtheria, tetanus, pertussis, hep B, Hib", 2),
    dose("vip_1", "IPV (Polio) (D1)", "Inactivated", 2),
    dose("rota_1", "Rotavirus (D1)", "Oral vaccine", 2),
    dose("pneumo_1", "Pneumococcal 10V (D1)", "Pneumonia/otitis prevention", 2),
    private_dose("meningo_b_1", "Meningococcal B (D1)", "Meningitis B", 2),
    private_dose("meningo_acwy_1", "Meningococcal ACWY (D1)", "Meningitis A, C, W, Y", 2),
    // 3 months
    dose("meningo_c_1", "Meningococcal C (D1)", "Meningitis C", 3),
    private_dose("meningo_b_2", "Meningococcal B (D2)", "Meningitis B", 3),
    private_dose("meningo_acwy_2", "Meningococcal ACWY (D2)", "Meningitis A, C, W, Y", 3),
    // 4 months
    dose("penta_2", "Pentavalent (D2)", "Diphtheria, tetanus, pertussis, hep B, Hib", 4),
    dose("vip_2", "IPV (Polio) (D2)", "Inactivated", 4),
    dose("rota_2", "Rotavirus (D2)", "Oral vaccine", 4),
    dose("pneumo_2", "Pneumococcal 10V (D2)", "Pneumonia/otitis prevention", 4),
    private_dose("meningo_b_3", "Meningococcal B (D3)", "Meningitis B", 4),
    private_dose("meningo_acwy_3", "Meningococcal ACWY (D3)", "Meningitis A, C, W, Y", 4),
    // 5 months
    dose("meningo_c_2", "Meningococcal C (D2)", "Meningitis C", 5),
    private_dose("meningo_b_4", "Meningococcal B (extra)", "As indicated", 5),
    private_dose("meningo_acwy_4", "Meningococcal ACWY (extra)", "As indicated", 5),
    // 6 months
    dose("penta_3", "Pentavalent (D3)", "Diphtheria, tetanus, pertussis, hep B, Hib", 6),
    dose("vip_3", "IPV (Polio) (D3)", "Inactivated", 6),
    dose("flu_1", "Influenza (flu)", "Yearly dose (start)", 6),
    // 9 months
    dose("febre_amarela", "Yellow fever", "First dose", 9),
    // 12 months
    dose("triplice_viral_1", "MMR (D1)", "Measles, mumps, rubella", 12),
    dose("pneumo_ref", "Pneumococcal 10V (booster)", "Booster", 12),
    dose("meningo_c_ref", "Meningococcal C (booster)", "Booster", 12),
    private_dose("meningo_b_ref", "Meningococcal B (booster)", "Booster", 12),
    private_dose("meningo_acwy_ref", "Meningococcal ACWY (booster)", "Booster", 12),
    // 15 months
    dose("dtp_ref1", "DTP (1st booster)", "Diphtheria, tetanus, pertussis", 15),
    dose("vop_ref1", "OPV (Polio) (1st booster)", "Oral drops", 15),
    dose("hepa", "Hepatitis A", "Single public-schedule dose", 15),
    dose("tetraviral", "MMRV", "Measles, mumps, rubella, varicella", 15),
    // 4 years (48 months)
    dose("dtp_ref2", "DTP (2nd booster)", "Diphtheria, tetanus, pertussis", 48),
    dose("vop_ref2", "OPV (Polio) (2nd booster)", "Oral drops", 48),
    dose("varicela_2", "Varicella (D2)", "Chickenpox", 48),
    dose("febre_amarela_ref", "Yellow fever (booster)", "Booster", 48),
];

/// Look a dose up by id.
pub fn find(id: &str) -> Option<&'static VaccineInfo> {
    VACCINATION_SCHEDULE.iter().find(|v| v.id == id)
}

/// Label for a due-month section header.
pub fn month_label(month_due: u32) -> String {
    match month_due {
        0 => "At birth".to_string(),
        12 => "12 months (1 year)".to_string(),
        m if m % 12 == 0 => format!("{} years", m / 12),
        m => format!("{} months", m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_ids_are_unique() {
        for (i, v) in VACCINATION_SCHEDULE.iter().enumerate() {
            assert!(
                !VACCINATION_SCHEDULE[i + 1..].iter().any(|w| w.id == v.id),
                "duplicate vaccine id {}",
                v.id
            );
        }
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find("bcg").map(|v| v.month_due), Some(0));
        assert!(find("nope").is_none());
    }

    #[test]
    fn month_labels() {
        assert_eq!(month_label(0), "At birth");
        assert_eq!(month_label(2), "2 months");
        assert_eq!(month_label(12), "12 months (1 year)");
        assert_eq!(month_label(48), "4 years");
    }
}
