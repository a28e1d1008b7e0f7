use super::*;

fn result(total: u32, ok: u32, failed: u32) -> UploadResult {
    UploadResult { total_records: total, success_count: ok, failed_count: failed }
}

#[test]
fn upload_requires_selected_file() {
    let mut state = ImportState::default();
    assert!(!state.can_upload());
    assert_eq!(state.try_begin(), Err(ImportBlocked::NoFile));
    assert!(!state.busy);
}

#[test]
fn busy_flag_blocks_second_upload() {
    let mut state = ImportState::default();
    state.select(Some("users.json".to_owned()));
    assert_eq!(state.try_begin(), Ok(()));
    assert!(!state.can_upload());
    assert_eq!(state.try_begin(), Err(ImportBlocked::Busy));
}

#[test]
fn renders_exactly_the_reported_counts() {
    let mut state = ImportState::default();
    state.select(Some("users.json".to_owned()));
    state.try_begin().unwrap();
    state.finish_ok(result(5, 3, 2));

    let lines = summary_lines(state.result.as_ref().unwrap());
    assert_eq!(
        lines,
        [
            "Total Records: 5".to_owned(),
            "Successfully Imported: 3".to_owned(),
            "Failed to Import: 2".to_owned(),
        ]
    );
}

#[test]
fn new_upload_discards_prior_result() {
    let mut state = ImportState::default();
    state.select(Some("first.json".to_owned()));
    state.try_begin().unwrap();
    state.finish_ok(result(9, 9, 0));

    state.select(Some("second.json".to_owned()));
    state.try_begin().unwrap();
    assert!(state.result.is_none());

    state.finish_ok(result(5, 3, 2));
    assert_eq!(state.result, Some(result(5, 3, 2)));
}

#[test]
fn failed_upload_leaves_no_result() {
    let mut state = ImportState::default();
    state.select(Some("users.json".to_owned()));
    state.try_begin().unwrap();
    state.finish_ok(result(1, 1, 0));
    state.try_begin().unwrap();
    state.finish_err();
    assert!(state.result.is_none());
    assert!(!state.busy);
}

#[test]
fn upload_enabled_only_with_file_and_idle() {
    let mut state = ImportState::default();
    assert!(!state.can_upload());
    state.select(Some("users.json".to_owned()));
    assert!(state.can_upload());
    state.try_begin().unwrap();
    assert!(!state.can_upload());
    state.finish_err();
    assert!(state.can_upload());
    state.select(None);
    assert!(!state.can_upload());
}
