use serde::{Deserialize, Serialize};

/// A doctor record as held by the directory.
///
/// Field names on the wire follow the directory file format (`_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub speciality: String,
    pub degree: String,
    pub experience: String,
    pub about: String,
    pub fees: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Doctor {
    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Unavailable"
        }
    }

    /// Fee line as shown on the detail card, e.g. `"$ 50"`.
    pub fn fee_label(&self, currency_symbol: &str) -> String {
        format!("{} {}", currency_symbol, self.fees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_directory_record() {
        let doctor: Doctor = serde_json::from_value(json!({
            "_id": "doc1",
            "name": "Dr. Richard James",
            "image": "doc1.png",
            "speciality": "General physician",
            "degree": "MBBS",
            "experience": "4 Years",
            "about": "Dr. Davis has a strong commitment to preventive care.",
            "fees": 50
        }))
        .unwrap();

        assert_eq!(doctor.id, "doc1");
        assert!(doctor.available);
        assert_eq!(doctor.fee_label("$"), "$ 50");
        assert_eq!(doctor.availability_label(), "Available");
    }
}
