use crate::Features;

const CERTIFICATION_KEYWORD: &str = "certification";

pub fn recommendations(features: &Features, internship_code: &str, risk_index: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    if features.attendance < 75.0 {
        out.push("Improve class attendance to at least 75%".into());
    }
    if features.average_grade < 6.0 {
        out.push("Focus on improving grades in current courses".into());
    }
    if features.cgpa < 7.0 {
        out.push("Develop better study habits to improve overall CGPA".into());
    }

    if features.internship == 0.0 {
        out.push(
            "Apply for an internship to enhance practical skills and improve employment prospects"
                .into(),
        );
    } else if internship_code == "4" {
        out.push(
            "Aim for an internship at Fortune 500 companies or through institutional connections (SRM/IIT/NIT)"
                .into(),
        );
    } else if internship_code == "6" {
        out.push(
            "Consider upgrading your internship experience to Fortune 500 companies or through SRM/IIT/NIT programs"
                .into(),
        );
    }

    if features.certificates == 0.0 {
        out.push(
            "Obtain industry-recognized certifications to enhance your skills and resume".into(),
        );
    } else if features.certificates < 3.0 {
        out.push(
            "Consider higher-value certifications like CISCO, CCNA, or specialized programs through NPTEL"
                .into(),
        );
    }

    if features.certificates >= 5.0 {
        out.retain(|rec| !rec.to_lowercase().contains(CERTIFICATION_KEYWORD));
    }

    if risk_index >= 1 {
        out.push("Consider seeking academic counseling or tutoring".into());
    }

    if out.is_empty() {
        out.push("Continue with current academic performance".into());
    }

    out
}
