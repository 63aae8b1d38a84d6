use goclass_core::model::{
    Attendance, Roster, ScoreField, SessionBook, SessionDate, Student, StudentId,
};
use goclass_core::seed;
use storage::repository::{LocalStore, StorageError};

use super::test_harness::{
    harness_date, setup_view_harness, setup_view_harness_with_store,
};
use crate::vm::ClassroomIntent;

async fn seeded_harness() -> super::test_harness::ViewHarness {
    setup_view_harness(seed::default_roster(), seed::default_sessions(harness_date())).await
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_smoke_renders_stats_and_rows() {
    let harness = seeded_harness().await;
    let html = harness.render();

    for expected in [
        "Total Students",
        "83%",
        "88%",
        "87%",
        "2 / 5",
        "Thursday, 1 January 2026",
        "Aditya Pratama",
        "Eko Wahyudi",
        "✓",
        "✕",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("No students found"), "unexpected placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_filters_rows_by_search() {
    let mut harness = seeded_harness().await;
    harness
        .dispatch(ClassroomIntent::Search("TKJ".to_owned()))
        .await;
    let html = harness.render();
    assert!(html.contains("Budi Santoso"), "missing match in {html}");
    assert!(html.contains("Eko Wahyudi"), "missing match in {html}");
    assert!(!html.contains("Aditya Pratama"), "unexpected row in {html}");
    // Stats stay class-wide regardless of the filter.
    assert!(html.contains("2 / 5"), "stats changed with filter in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_shows_placeholder_when_nothing_matches() {
    let mut harness = seeded_harness().await;
    harness
        .dispatch(ClassroomIntent::Search("zzz".to_owned()))
        .await;
    let html = harness.render();
    assert!(html.contains("No students found"), "missing placeholder in {html}");

    let empty = setup_view_harness(Roster::new(), SessionBook::new()).await;
    let html = empty.render();
    assert!(html.contains("No students found"), "missing placeholder in {html}");
    assert!(html.contains("0 / 0"), "missing attendance in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_selecting_a_date_does_not_create_a_session() {
    let mut harness = seeded_harness().await;
    let next_day: SessionDate = "2026-01-02".parse().unwrap();
    harness
        .dispatch(ClassroomIntent::SelectDate(next_day))
        .await;
    let html = harness.render();
    assert!(html.contains("0 / 5"), "missing empty attendance in {html}");
    assert!(html.contains("Friday, 2 January 2026"), "missing date in {html}");
    assert!(html.contains("0%"), "missing zero average in {html}");

    let book = harness.classroom.sessions().snapshot().await;
    assert_eq!(book.days().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_adjusts_and_toggles_through_intents() {
    let mut harness = seeded_harness().await;
    let date = harness_date();
    let budi = StudentId::new(2);

    harness
        .dispatch(ClassroomIntent::AdjustScore {
            student: budi,
            field: ScoreField::Disiplin,
            delta: 5,
        })
        .await;
    harness
        .dispatch(ClassroomIntent::ToggleAttendance(budi))
        .await;

    let record = harness.classroom.sessions().record(date, budi).await;
    assert_eq!(record.disiplin, 85);
    assert_eq!(record.attendance, Attendance::Absent);
    let html = harness.render();
    assert!(html.contains("1 / 5"), "attendance not refreshed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_add_dialog_requires_both_fields() {
    let mut harness = seeded_harness().await;

    harness.dispatch(ClassroomIntent::OpenAddDialog).await;
    assert!(harness.render().contains("New student"));

    harness
        .dispatch(ClassroomIntent::EditDraftName("Fajar Nugroho".to_owned()))
        .await;
    harness.dispatch(ClassroomIntent::SubmitDraft).await;
    let html = harness.render();
    assert!(html.contains("New student"), "dialog closed early in {html}");
    assert_eq!(harness.classroom.roster().len().await, 5);

    harness
        .dispatch(ClassroomIntent::EditDraftClass("X-MM-1".to_owned()))
        .await;
    harness.dispatch(ClassroomIntent::SubmitDraft).await;
    let html = harness.render();
    assert!(!html.contains("New student"), "dialog still open in {html}");
    assert!(html.contains("Fajar Nugroho"), "missing new row in {html}");

    let roster = harness.classroom.roster().list().await;
    assert_eq!(roster.len(), 6);
    let added = roster.last().unwrap().id();
    let day = harness.classroom.sessions().day(harness_date()).await;
    assert_eq!(day.get(&added).map(|r| r.attendance), Some(Attendance::Absent));
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_cancel_add_leaves_roster_alone() {
    let mut harness = seeded_harness().await;
    harness.dispatch(ClassroomIntent::OpenAddDialog).await;
    harness
        .dispatch(ClassroomIntent::EditDraftName("Gita".to_owned()))
        .await;
    harness
        .dispatch(ClassroomIntent::EditDraftClass("X-MM-3".to_owned()))
        .await;
    harness.dispatch(ClassroomIntent::CloseAddDialog).await;

    assert!(!harness.render().contains("New student"));
    assert_eq!(harness.classroom.roster().len().await, 5);

    harness.dispatch(ClassroomIntent::OpenAddDialog).await;
    let html = harness.render();
    assert!(html.contains(r#"value="Gita""#), "draft name lost in {html}");
    assert!(html.contains(r#"value="X-MM-3""#), "draft class lost in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_keeps_rows_visible_while_reloading() {
    let mut harness = seeded_harness().await;
    assert!(harness.render().contains("Aditya Pratama"));

    harness.dispatch_unsettled(ClassroomIntent::AdjustScore {
        student: StudentId::new(1),
        field: ScoreField::Rajin,
        delta: 5,
    });
    for _ in 0..4 {
        let html = harness.render();
        assert!(!html.contains("Loading..."), "table replaced during reload: {html}");
        assert!(html.contains("Aditya Pratama"), "rows hidden during reload: {html}");
        harness.drive_async().await;
    }
    let record = harness
        .classroom
        .sessions()
        .record(harness_date(), StudentId::new(1))
        .await;
    assert_eq!(record.rajin, 90);
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_delete_requires_confirmation() {
    let mut harness = seeded_harness().await;
    let aditya = StudentId::new(1);

    harness
        .dispatch(ClassroomIntent::RequestDelete(aditya))
        .await;
    let html = harness.render();
    assert!(html.contains("Delete student?"), "missing confirmation in {html}");
    harness.dispatch(ClassroomIntent::CancelDelete).await;
    assert_eq!(harness.classroom.roster().len().await, 5);
    assert!(!harness.render().contains("Delete student?"));

    harness
        .dispatch(ClassroomIntent::RequestDelete(aditya))
        .await;
    harness.dispatch(ClassroomIntent::ConfirmDelete).await;
    assert_eq!(harness.classroom.roster().len().await, 4);
    let html = harness.render();
    assert!(!html.contains("Aditya Pratama"), "row not removed in {html}");
    assert!(html.contains("/ 4"), "total not refreshed in {html}");
}

#[derive(Clone, Default)]
struct FailingStore;

#[async_trait::async_trait]
impl LocalStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_shows_error_banner_when_save_fails() {
    let roster = Roster::from_students(vec![Student::from_persisted(
        StudentId::new(1),
        "A".into(),
        "X".into(),
    )])
    .unwrap();
    let mut harness = setup_view_harness_with_store(FailingStore, roster, SessionBook::new()).await;
    assert!(!harness.render().contains("Something went wrong"));

    harness
        .dispatch(ClassroomIntent::ToggleAttendance(StudentId::new(1)))
        .await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing banner in {html}");

    harness.dispatch(ClassroomIntent::DismissError).await;
    assert!(!harness.render().contains("Something went wrong"));
}
