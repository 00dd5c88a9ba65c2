use super::*;
use client_core::{ErrorPanel, FormView, ResultPanel};

#[test]
fn course_argument_accepts_range_or_letter() {
    let (grade, credits) = parse_course("71-80:3").expect("course");
    assert_eq!(grade, GradeBand::A);
    assert_eq!(credits.get(), 3);

    let (grade, _) = parse_course("B+:2").expect("course");
    assert_eq!(grade, GradeBand::BPlus);

    assert!(parse_course("71-80").is_err());
    assert!(parse_course("71-80:9").is_err());
}

#[test]
fn certificate_argument_accepts_weight_or_label() {
    assert_eq!(parse_certificate("2"), Ok(CertificateCategory::Coursera));
    assert_eq!(parse_certificate("udemy"), Ok(CertificateCategory::Udemy));
    assert!(parse_certificate("7").is_err());
}

#[test]
fn args_parse_repeated_rows() {
    let args = Args::try_parse_from([
        "desktop",
        "--course",
        "71-80:3",
        "--course",
        "91-100:4",
        "--certificate",
        "2",
        "--attendance",
        "A",
        "--cgpa",
        "B",
        "--internship",
        "1",
    ])
    .expect("args");
    assert_eq!(args.courses.len(), 2);
    assert_eq!(args.certificates, vec![CertificateCategory::Coursera]);
    assert_eq!(args.internship, "1");
}

#[test]
fn option_listing_covers_every_choice() {
    let listing = option_listing();
    assert!(listing.contains("91-100  O"));
    assert!(listing.contains("0.5  Udemy"));
    assert!(listing.contains("cgpa: 9~10"));
}

#[test]
fn terminal_view_writes_panels_and_alerts() {
    let mut view = TerminalView::new(Vec::new(), Vec::new(), false);
    view.show_results(&ResultPanel {
        predicted_grade: "A".into(),
        performance_category: "High".into(),
        risk_level: "Low".into(),
        recommendations: vec!["Keep it up".into()],
    });
    view.show_error(&ErrorPanel::new("model unavailable"));
    view.alert("Maximum of 5 certificates allowed");

    let (out, err) = view.into_parts();
    let out = String::from_utf8(out).expect("utf8");
    let err = String::from_utf8(err).expect("utf8");
    assert!(out.contains("Risk Level: Low"));
    assert!(out.contains("model unavailable"));
    assert_eq!(err, "! Maximum of 5 certificates allowed\n");
}

#[test]
fn terminal_view_html_mode_escapes_markup() {
    let mut view = TerminalView::new(Vec::new(), Vec::new(), true);
    view.show_error(&ErrorPanel::new("<b>down</b>"));
    let (out, _) = view.into_parts();
    let out = String::from_utf8(out).expect("utf8");
    assert!(out.contains("&lt;b&gt;down&lt;/b&gt;"));
}
