use chrono::{TimeZone, Utc};
use serde_json::json;

use travel_documents::core::TableData;
use travel_documents::models::ReferenceData;
use travel_documents::pdf::{LayoutEngine, TableStyle, TextStyle};
use travel_documents::templates::helpers::{calculate_nights, format_currency};
use travel_documents::{
    apply_bulk_action, lookup, BatchError, Language, PdfConfig, Proposal, ProposalDocument, TemplateEngine,
    VoucherAction, VoucherBatchDocument, VoucherStatus,
};

fn scenario_proposal() -> Proposal {
    serde_json::from_value(json!({
        "id": "p-1",
        "reference": "PRP-2024-001",
        "clientName": "Ahmed Yilmaz",
        "agencyId": "agency-404",
        "salesPersonId": "u1",
        "adults": 2,
        "children": 0,
        "createdAt": "2024-01-02T09:30:00Z",
        "hotels": [{
            "hotelId": "hotel-404",
            "checkin": "2024-01-01",
            "checkout": "2024-01-04",
            "roomType": "Double",
            "boardType": "BB",
            "numRooms": 2,
            "pricePerNight": "100",
            "currency": "USD"
        }],
        "margin": 10,
        "commission": 5,
        "currency": "USD",
        "pdfLanguage": "English"
    }))
    .unwrap()
}

fn engine(dir: &std::path::Path) -> TemplateEngine {
    TemplateEngine::new(PdfConfig::default(), dir)
}

#[test]
fn proposal_scenario_totals() {
    let totals = scenario_proposal().totals();
    assert_eq!(totals.hotels, 600.0);
    assert_eq!(totals.subtotal, 600.0);
    assert!((totals.final_total - 690.0).abs() < 1e-9);
    assert_eq!(format_currency(totals.final_total, "USD"), "$690.00");
}

#[test]
fn final_total_matches_markup_formula() {
    let mut proposal = scenario_proposal();
    for (margin, commission) in [(0.0, 0.0), (12.5, 3.0), (100.0, 0.0)] {
        proposal.margin = margin;
        proposal.commission = commission;
        let totals = proposal.totals();
        let expected = totals.subtotal * (1.0 + margin / 100.0 + commission / 100.0);
        assert!((totals.final_total - expected).abs() < 1e-9);
    }
}

#[test]
fn nights_edge_cases() {
    assert_eq!(calculate_nights("2024-01-01", "2024-01-01"), 0);
    assert_eq!(calculate_nights("2024-01-01", ""), 0);
    assert_eq!(calculate_nights("", "2024-01-04"), 0);
    assert_eq!(calculate_nights("2024-01-04", "2024-01-01"), 0);
    assert_eq!(calculate_nights("2024-01-01T14:00:00", "2024-01-02T10:00:00"), 1);
}

#[test]
fn lookup_never_fails() {
    assert_eq!(lookup("nonexistent.key", "elvish"), "nonexistent.key");
    assert_eq!(lookup("common.not_available", "elvish"), "N/A");
}

#[test]
fn table_overflow_yields_two_numbered_pages() {
    let mut table = TableData::new(vec!["Service".into(), "Total".into()]);
    for i in 0..50 {
        table.add_row(vec![format!("Line {}", i + 1), format!("${}.00", i * 10)]);
    }

    let mut engine = LayoutEngine::new(PdfConfig::default(), Language::English);
    engine.table(&table, &TableStyle::plain());
    let doc = engine.finish("overflow");

    assert_eq!(doc.page_count(), 2);
    assert!(doc.pages[0].contains_text("Page 1 / 2"));
    assert!(doc.pages[1].contains_text("Page 2 / 2"));
    assert!(doc.pages[1].contains_text("Service"));
    assert!(doc.pages[1].contains_text("Line 50"));
}

#[test]
fn text_after_table_continues_on_last_page() {
    let mut table = TableData::new(vec!["Service".into()]);
    for i in 0..50 {
        table.add_row(vec![format!("Line {}", i + 1)]);
    }

    let mut engine = LayoutEngine::new(PdfConfig::default(), Language::English);
    engine.table(&table, &TableStyle::plain());
    engine.text_line("after the table", TextStyle::regular(9.0));
    let doc = engine.finish("after");

    assert!(doc.pages[1].contains_text("after the table"));
}

#[test]
fn missing_references_render_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let rendered = engine(dir.path())
        .generate_proposal(ProposalDocument {
            proposal: scenario_proposal(),
            company: serde_json::from_value(json!({"name": "Sky Travel"})).unwrap(),
            references: ReferenceData::default(),
            language: Some(Language::Arabic),
            generated_at: None,
        })
        .unwrap();

    assert_eq!(rendered.document.language, Language::Arabic);
    assert!(rendered.document.contains_text("غير متوفر"));
    assert!(rendered.document.contains_text("$690.00"));
}

#[test]
fn confirmed_proposal_vouchers_render_as_batch() {
    let mut proposal = scenario_proposal();
    proposal.flights = serde_json::from_value(json!([
        {"airline": "Turkish Airlines", "flightNumber": "TK1", "from": "IST", "to": "LHR", "departure": "2024-01-01T08:00:00", "pax": 2, "pricePerPax": "250", "currency": "USD"}
    ]))
    .unwrap();

    let now = Utc.with_ymd_and_hms(2024, 1, 5, 16, 20, 0).unwrap();
    let vouchers = proposal.confirm(now).unwrap();
    assert_eq!(vouchers.len(), 2);

    let batch = VoucherBatchDocument {
        proposal_reference: proposal.reference.clone(),
        vouchers,
        company: serde_json::from_value(json!({"name": "Sky Travel"})).unwrap(),
        references: ReferenceData::default(),
        language: Language::English,
        generated_at: Some(now),
    };

    let dir = tempfile::tempdir().unwrap();
    let rendered = engine(dir.path()).generate_voucher_batch(batch).unwrap();
    assert_eq!(rendered.file_name, "vouchers_PRP-2024-001_20240105162000.pdf");

    let doc = &rendered.document;
    assert_eq!(doc.page_count(), 3);
    assert!(doc.pages[1].texts().next().unwrap().contains("PRP-2024-001-V01"));
    assert!(doc.pages[2].texts().next().unwrap().contains("PRP-2024-001-V02"));
    assert!(doc.pages[2].contains_text("$500.00"));
    for (i, page) in doc.pages.iter().enumerate() {
        assert!(page.contains_text(&format!("Page {} / 3", i + 1)));
    }
}

#[test]
fn bulk_action_is_all_or_nothing() {
    let now = Utc.with_ymd_and_hms(2024, 1, 5, 16, 20, 0).unwrap();
    let mut proposal = scenario_proposal();
    proposal.flights = serde_json::from_value(json!([
        {"pax": 1, "pricePerPax": "99", "currency": "USD"}
    ]))
    .unwrap();
    let mut vouchers = proposal.confirm(now).unwrap();
    vouchers[0].status = VoucherStatus::Paid;

    let err = apply_bulk_action(&mut vouchers, VoucherAction::MarkCompleted).unwrap_err();
    let BatchError::InvalidTransition { offending_ids, .. } = err;
    assert_eq!(offending_ids, vec!["PRP-2024-001-V02".to_string()]);
    assert_eq!(vouchers[0].status, VoucherStatus::Paid);
    assert_eq!(vouchers[1].status, VoucherStatus::PendingPayment);

    apply_bulk_action(&mut vouchers[1..], VoucherAction::MarkPaid).unwrap();
    assert_eq!(apply_bulk_action(&mut vouchers, VoucherAction::MarkCompleted), Ok(2));
}

#[test]
fn typst_source_is_written_next_to_pdf_name() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine(dir.path());
    let rendered = engine
        .generate_proposal(ProposalDocument {
            proposal: scenario_proposal(),
            company: serde_json::from_value(json!({"name": "Sky Travel"})).unwrap(),
            references: ReferenceData::default(),
            language: None,
            generated_at: None,
        })
        .unwrap();

    let path = engine.save_source(&rendered).unwrap();
    assert_eq!(path, dir.path().join("proposal_PRP-2024-001.typ"));

    let source = std::fs::read_to_string(&path).unwrap();
    assert!(source.starts_with("#set document("));
    assert!(source.contains("lang: \"en\""));
    // "/" se escapa en el marcado de Typst
    assert!(source.contains("Page 1 \\/ 1"));
}
