//! Tests for lift-model types.

use lift_model::{
    Complaint, ComplaintStatus, Role, Route, Session, filter_items, normalize_label,
};
use proptest::prelude::*;

#[test]
fn route_table() {
    let table = Route::ALL
        .iter()
        .map(|r| format!("{} -> {}", r.path(), r.title()))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(table, @r"
    /login -> Login
    /register -> Register
    /dashboard -> Dashboard
    /add-complaint -> New Complaint
    /complaints -> Complaints
    /ticket-details -> Ticket Details
    /routine-maintenance -> Routine Maintenance
    /maintenance-details -> Maintenance Details
    /amc-contracts -> AMC Contracts
    /invoice -> Invoices
    /quotation -> Quotations
    /about-us -> About Us
    /create-user -> Create User
    /profile-switch -> Switch Profile
    /otp -> Verify OTP
    ");
}

#[test]
fn complaint_list_decodes_and_filters() {
    let json = r#"[
        {"id": 1, "ticket_no": "T-1", "subject": "Door jam", "site": "Tower A", "status": "open"},
        {"id": 2, "ticket_no": "T-2", "subject": "Light flicker", "site": "Tower B", "status": "closed"},
        {"id": 3, "ticket_no": "T-3", "subject": "Door noise", "site": "Tower B", "status": "In Progress"}
    ]"#;
    let complaints: Vec<Complaint> = serde_json::from_str(json).expect("decode complaints");

    let doors: Vec<_> = filter_items(&complaints, "door")
        .into_iter()
        .map(|c| c.reference())
        .collect();
    assert_eq!(doors, vec!["T-1", "T-3"]);

    let active = complaints.iter().filter(|c| c.status.is_active()).count();
    assert_eq!(active, 2);
    assert_eq!(complaints[2].status, ComplaintStatus::InProgress);
}

#[test]
fn session_serializes_canonical_role() {
    let session = Session::new("9", "Asha", Role::SubCustomer).with_customer("2");
    let json = serde_json::to_value(&session).expect("serialize session");
    assert_eq!(json["role"], "sub-customer");
    assert_eq!(json["customer_id"], "2");

    let round: Session = serde_json::from_value(json).expect("deserialize session");
    assert_eq!(round, session);
}

proptest! {
    #[test]
    fn parsed_routes_match_their_input(input in "/?[a-z\\-]{0,24}") {
        if let Ok(route) = input.parse::<Route>() {
            let name = input.strip_prefix('/').unwrap_or(&input);
            prop_assert_eq!(route.as_str(), name);
        }
    }

    #[test]
    fn role_parsing_ignores_case_and_separators(
        upper in proptest::bool::ANY,
        sep in prop_oneof![Just(""), Just("-"), Just("_"), Just(" ")],
    ) {
        let raw = format!("sub{sep}customer");
        let raw = if upper { raw.to_uppercase() } else { raw };
        prop_assert_eq!(Role::parse(&raw), Role::SubCustomer);
        prop_assert_eq!(normalize_label(&raw), "subcustomer");
    }
}
