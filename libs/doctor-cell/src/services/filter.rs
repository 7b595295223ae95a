use shared_models::doctor::Doctor;

/// Doctors whose speciality equals `speciality` exactly, or every doctor when
/// no speciality is given. Directory order is preserved.
pub fn filter_by_speciality<'a>(doctors: &'a [Doctor], speciality: Option<&str>) -> Vec<&'a Doctor> {
    match speciality {
        Some(tag) => doctors.iter().filter(|doctor| doctor.speciality == tag).collect(),
        None => doctors.iter().collect(),
    }
}

/// Doctors sharing `speciality`, excluding the one identified by `exclude_id`.
pub fn related_doctors<'a>(doctors: &'a [Doctor], speciality: &str, exclude_id: &str) -> Vec<&'a Doctor> {
    doctors
        .iter()
        .filter(|doctor| doctor.speciality == speciality && doctor.id != exclude_id)
        .collect()
}
