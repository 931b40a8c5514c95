use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use frontdesk_ui::table::{
    Column, Entry, Row, RowAction, SelectionMode, SortValue, TableDataset,
};

fn row(values: &[&str]) -> Row {
    values.iter().map(|value| Entry::text(*value)).collect()
}

fn name_column_values(rows: &[Row]) -> Vec<String> {
    rows.iter().map(|row| row[0].value().to_string()).collect()
}

fn people_dataset() -> TableDataset {
    let dataset = TableDataset::new(vec![Column::new("Name"), Column::new("City")]);
    dataset.set_rows(vec![
        row(&["Muller", "Berlin"]),
        row(&["Schmidt", "Hamburg"]),
        row(&["Becker", "Berlin"]),
        row(&["Wagner", "Munich"]),
    ]);
    dataset
}

#[test]
fn test_search_filters_any_column_case_insensitively() {
    let dataset = people_dataset();

    dataset.set_search_term("berlin");
    assert_eq!(
        name_column_values(&dataset.visible_rows()),
        vec!["Muller", "Becker"]
    );

    dataset.set_search_term("SCHMIDT");
    assert_eq!(name_column_values(&dataset.visible_rows()), vec!["Schmidt"]);
}

#[test]
fn test_empty_search_restores_prefilter_ordering() {
    let dataset = people_dataset();
    let before = name_column_values(&dataset.visible_rows());

    dataset.set_search_term("berlin");
    dataset.set_search_term("");

    assert_eq!(name_column_values(&dataset.visible_rows()), before);
}

#[test]
fn test_search_with_no_matches_yields_empty_page() {
    let dataset = people_dataset();
    dataset.set_search_term("nowhere");

    assert!(dataset.visible_rows().is_empty());
    assert_eq!(dataset.filtered_len(), 0);
    assert_eq!(dataset.page_count(), 1);
    assert_eq!(dataset.empty_message(), "No data has been received.");
}

#[test]
fn test_static_sort_toggles_by_reversing() {
    let dataset = people_dataset();

    dataset.sort_by_column(0);
    let ascending = name_column_values(&dataset.visible_rows());
    assert_eq!(ascending, vec!["Becker", "Muller", "Schmidt", "Wagner"]);
    assert_eq!(dataset.sort(), Some((0, true)));

    dataset.sort_by_column(0);
    let descending = name_column_values(&dataset.visible_rows());
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
    assert_eq!(dataset.sort(), Some((0, false)));

    dataset.sort_by_column(0);
    assert_eq!(name_column_values(&dataset.visible_rows()), ascending);
    assert_eq!(dataset.sort(), Some((0, true)));
}

#[test]
fn test_sorting_is_stable_for_equal_keys() {
    let dataset = TableDataset::new(vec![Column::new("Name"), Column::new("City")]);
    dataset.set_rows(vec![
        row(&["Muller", "Berlin"]),
        row(&["Becker", "Berlin"]),
        row(&["Wagner", "Aachen"]),
    ]);

    dataset.sort_by_column(1);
    // equal Berlin keys keep their relative order
    assert_eq!(
        name_column_values(&dataset.visible_rows()),
        vec!["Wagner", "Muller", "Becker"]
    );
}

#[test]
fn test_activating_another_column_clears_the_previous_sort() {
    let dataset = people_dataset();

    dataset.sort_by_column(0);
    dataset.sort_by_column(1);

    assert_eq!(dataset.sort(), Some((1, true)));
}

#[test]
fn test_static_keys_beat_display_values() {
    let dataset = TableDataset::new(vec![Column::new("Day")]);
    // display text sorts "Fri" < "Sat" lexically; the static keys say
    // otherwise
    dataset.set_rows(vec![
        vec![Entry::with_sort_value("Sat", 6i64)],
        vec![Entry::with_sort_value("Fri", 5i64)],
        vec![Entry::with_sort_value("Sun", 7i64)],
    ]);

    dataset.sort_by_column(0);
    assert_eq!(
        name_column_values(&dataset.visible_rows()),
        vec!["Fri", "Sat", "Sun"]
    );
}

#[test]
fn test_dynamic_keys_recompute_on_every_sort() {
    let a = Arc::new(AtomicI64::new(3));
    let b = Arc::new(AtomicI64::new(1));
    let c = Arc::new(AtomicI64::new(2));

    let dataset = TableDataset::new(vec![Column::new("Live")]);
    let dynamic_row = |label: &str, source: &Arc<AtomicI64>| {
        let source = Arc::clone(source);
        vec![Entry::with_dynamic_sort(label, move || {
            SortValue::Integer(source.load(Ordering::SeqCst))
        })]
    };
    dataset.set_rows(vec![
        dynamic_row("a", &a),
        dynamic_row("b", &b),
        dynamic_row("c", &c),
    ]);

    dataset.sort_by_column(0);
    assert_eq!(name_column_values(&dataset.visible_rows()), vec!["b", "c", "a"]);

    // mutate a key between requests; the repeat click must re-evaluate,
    // not just reverse the previous order
    a.store(0, Ordering::SeqCst);
    dataset.sort_by_column(0);
    assert_eq!(name_column_values(&dataset.visible_rows()), vec!["c", "b", "a"]);
}

#[test]
fn test_pagination_windows_and_clamping() {
    let dataset = TableDataset::new(vec![Column::new("N")]).with_page_size(10);
    dataset.set_rows((0..25).map(|n| row(&[format!("row-{n:02}").as_str()])).collect());

    assert_eq!(dataset.page_count(), 3);
    assert_eq!(dataset.visible_rows().len(), 10);

    dataset.set_page(3);
    assert_eq!(dataset.visible_rows().len(), 5);

    dataset.set_page(0);
    assert_eq!(dataset.page(), 1);

    dataset.set_page(99);
    assert_eq!(dataset.page(), 3);
}

#[test]
fn test_page_clamps_when_filtering_shrinks_the_dataset() {
    let dataset = TableDataset::new(vec![Column::new("N")]).with_page_size(5);
    dataset.set_rows((0..20).map(|n| row(&[format!("row-{n:02}").as_str()])).collect());

    dataset.set_page(4);
    dataset.set_search_term("row-0");

    // search resets to the first page; only rows 00-09 match
    assert_eq!(dataset.page(), 1);
    assert_eq!(dataset.filtered_len(), 10);
    assert_eq!(dataset.page_count(), 2);
}

#[test]
fn test_divisible_dataset_fills_its_last_page() {
    let dataset = TableDataset::new(vec![Column::new("N")]).with_page_size(5);
    dataset.set_rows((0..10).map(|n| row(&[format!("row-{n}").as_str()])).collect());

    assert_eq!(dataset.page_count(), 2);
    dataset.set_page(2);
    assert_eq!(dataset.visible_rows().len(), 5);
}

#[test]
fn test_single_row_load_is_auto_selected() {
    let dataset =
        TableDataset::new(vec![Column::new("Name")]).with_selection_mode(SelectionMode::Single);

    dataset.set_rows(vec![row(&["only"])]);
    assert_eq!(dataset.selected_rows(), vec![0]);

    // more than one row: nothing is preselected
    dataset.set_rows(vec![row(&["one"]), row(&["two"])]);
    assert!(dataset.selected_rows().is_empty());
}

#[test]
fn test_selection_toggles_and_replacement_clears_it() {
    let dataset =
        TableDataset::new(vec![Column::new("Name")]).with_selection_mode(SelectionMode::Single);
    dataset.set_rows(vec![row(&["one"]), row(&["two"])]);

    assert!(dataset.select_row(1));
    assert!(dataset.is_selected(1));

    // single mode moves the selection
    assert!(dataset.select_row(0));
    assert_eq!(dataset.selected_rows(), vec![0]);

    dataset.set_rows(vec![row(&["one"]), row(&["two"]), row(&["three"])]);
    assert!(dataset.selected_rows().is_empty());
}

#[test]
fn test_selection_ignores_out_of_range_rows() {
    let dataset =
        TableDataset::new(vec![Column::new("Name")]).with_selection_mode(SelectionMode::Multi);
    dataset.set_rows(vec![row(&["one"]), row(&["two"])]);

    assert!(!dataset.select_row(5));
    assert!(dataset.selected_rows().is_empty());
}

#[test]
fn test_row_actions_disable_sorting_on_the_last_column() {
    let dataset = people_dataset();
    let triggered = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&triggered);
    dataset.set_row_actions(vec![RowAction::new("Delete", move |row| {
        sink.lock().unwrap().push(row);
    })]);

    let columns = dataset.columns();
    assert!(!columns.last().unwrap().sortable);
    dataset.sort_by_column(columns.len() - 1);
    assert_eq!(dataset.sort(), None);

    assert!(dataset.trigger_action(2, 0));
    assert!(!dataset.trigger_action(0, 9));
    assert_eq!(*triggered.lock().unwrap(), vec![2]);
}

#[test]
fn test_replacing_rows_keeps_the_active_sort() {
    let dataset = people_dataset();
    dataset.sort_by_column(0);

    dataset.set_rows(vec![
        row(&["Zimmermann", "Bonn"]),
        row(&["Albrecht", "Bonn"]),
    ]);

    assert_eq!(dataset.sort(), Some((0, true)));
    assert_eq!(
        name_column_values(&dataset.visible_rows()),
        vec!["Albrecht", "Zimmermann"]
    );
}
