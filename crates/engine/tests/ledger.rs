use chrono::NaiveDate;

use engine::{DeleteOutcome, Field, Ledger, SaveOutcome, SubmitOutcome};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn add(ledger: &mut Ledger, account: &str, balance: &str, date: &str) {
    ledger.update_field(Field::Account, account);
    ledger.update_field(Field::Balance, balance);
    ledger.update_field(Field::Date, date);
    assert!(matches!(ledger.submit(), SubmitOutcome::Added(_)));
}

fn rows(ledger: &Ledger) -> Vec<(String, f64, String)> {
    ledger
        .entries()
        .iter()
        .map(|e| (e.account.clone(), e.balance.value(), e.date.to_string()))
        .collect()
}

#[test]
fn add_edit_delete_scenario() {
    let today = day(2024, 6, 1);
    let mut ledger = Ledger::builder().today(today).build();

    add(&mut ledger, "Checking", "100.5", "2024-01-10");
    add(&mut ledger, "Savings", "50", "2024-01-15");
    assert_eq!(
        rows(&ledger),
        [
            ("Savings".to_string(), 50.0, "2024-01-15".to_string()),
            ("Checking".to_string(), 100.5, "2024-01-10".to_string()),
        ]
    );

    ledger.start_edit(1).unwrap();
    assert_eq!(ledger.editing_index(), Some(1));
    ledger.update_edit_field(Field::Balance, "200").unwrap();
    assert!(matches!(ledger.save_edit(), SaveOutcome::Saved(_)));
    assert_eq!(ledger.editing_index(), None);
    assert_eq!(
        rows(&ledger),
        [
            ("Savings".to_string(), 50.0, "2024-01-15".to_string()),
            ("Checking".to_string(), 200.0, "2024-01-10".to_string()),
        ]
    );

    ledger.start_edit(0).unwrap();
    assert!(matches!(
        ledger.delete(&mut |_: &str| true),
        DeleteOutcome::Deleted(_)
    ));
    assert_eq!(
        rows(&ledger),
        [("Checking".to_string(), 200.0, "2024-01-10".to_string())]
    );
    assert_eq!(ledger.editing_index(), None);
}

#[test]
fn create_draft_resets_to_build_day_after_submit() {
    let today = day(2024, 6, 1);
    let mut ledger = Ledger::builder().today(today).build();

    ledger.adjust_date(-3);
    assert_eq!(ledger.create_draft().date, "2024-05-29");
    ledger.update_field(Field::Account, "Brokerage");
    ledger.update_field(Field::Balance, "-12.75");
    assert!(matches!(ledger.submit(), SubmitOutcome::Added(_)));

    let draft = ledger.create_draft();
    assert_eq!(draft.account, "");
    assert_eq!(draft.balance, "");
    assert_eq!(draft.date, "2024-06-01");
    assert_eq!(ledger.entries()[0].date, day(2024, 5, 29));
}

#[test]
fn switching_rows_discards_uncommitted_edit() {
    let mut ledger = Ledger::builder().today(day(2024, 6, 1)).build();
    add(&mut ledger, "Checking", "100.5", "2024-01-10");
    add(&mut ledger, "Savings", "50", "2024-01-15");

    ledger.start_edit(0).unwrap();
    ledger.update_edit_field(Field::Account, "typo").unwrap();
    ledger.start_edit(1).unwrap();
    assert_eq!(ledger.editing_index(), Some(1));
    ledger.cancel_edit();

    assert_eq!(ledger.entries()[0].account, "Savings");
    assert_eq!(ledger.editing_index(), None);
}

#[test]
fn declined_delete_keeps_editing() {
    let mut ledger = Ledger::builder().today(day(2024, 6, 1)).build();
    add(&mut ledger, "Checking", "100.5", "2024-01-10");

    ledger.start_edit(0).unwrap();
    ledger.push_edit_char(Field::Balance, '1').unwrap();
    assert_eq!(ledger.delete(&mut |_: &str| false), DeleteOutcome::Declined);
    assert_eq!(ledger.editing_index(), Some(0));
    assert_eq!(ledger.edit_draft().unwrap().balance, "100.51");
    assert_eq!(ledger.entries().len(), 1);
}

#[test]
fn edit_date_arrows_cross_leap_day() {
    let mut ledger = Ledger::builder().today(day(2024, 6, 1)).build();
    add(&mut ledger, "Checking", "1", "2024-02-28");

    ledger.start_edit(0).unwrap();
    ledger.adjust_edit_date(1).unwrap();
    assert_eq!(ledger.edit_draft().unwrap().date, "2024-02-29");
    ledger.save_edit();
    assert_eq!(ledger.entries()[0].date, day(2024, 2, 29));
}
