use datatable_selection_core::key::ItemSource;
use datatable_selection_core::key::TrackBy;
use datatable_selection_core::mode::SelectMode;
use datatable_selection_core::mode::SelectableOptions;
use datatable_selection_core::row::DataTableRow;
use datatable_selection_core::row::paginate;
use datatable_selection_core::selection::SelectableEvent;
use datatable_selection_core::selection::SelectableRows;
use datatable_selection_core::selection::SelectionChange;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Product {
    sku: u32,
    name: &'static str,
}

impl ItemSource for Product {
    type Key = u32;

    // untracked products are still identified by sku
    fn identity_key(&self) -> u32 {
        self.sku
    }

    fn field_key(&self, name: &str) -> Option<u32> {
        match name {
            "sku" => Some(self.sku),
            _ => None,
        }
    }
}

fn products() -> Vec<DataTableRow<Product>> {
    DataTableRow::from_items([
        Product { sku: 1, name: "apple" },
        Product { sku: 2, name: "banana" },
        Product { sku: 3, name: "cherry" },
    ])
}

fn as_set(keys: Vec<u32>) -> HashSet<u32> {
    keys.into_iter().collect()
}

#[test]
fn toggles_then_shift_click_merges_range() {
    let mut t = SelectableRows::<Product>::new(SelectableOptions::multiple())
        .with_track_by(TrackBy::field("sku"))
        .with_rows(products());

    t.toggle(0);
    assert_eq!(t.selected_items(), vec![1]);
    t.toggle(2);
    assert_eq!(t.selected_items(), vec![1, 3]);
    assert_eq!(t.anchor(), Some(2));

    t.range_select(1);
    assert_eq!(t.selected_items(), vec![1, 3, 2]);
    assert_eq!(as_set(t.selected_items()), HashSet::from([1, 2, 3]));
    assert_eq!(t.anchor(), None);
}

#[test]
fn header_checkbox_selects_and_clears_page() {
    let mut t = SelectableRows::new(SelectableOptions::multiple()).with_rows(products());

    t.toggle_bulk();
    assert_eq!(t.selected_items(), vec![1, 2, 3]);
    assert!(t.all_selected());
    assert!(!t.some_selected());

    t.toggle_bulk();
    assert!(t.selected_items().is_empty());
    assert!(t.none_selected());
}

#[test]
fn controlled_toggle_requests_update_without_storing_it() {
    let mut t = SelectableRows::<Product>::with_model_value(SelectableOptions::multiple(), [2])
        .with_rows(products());
    assert!(t.is_controlled());
    t.drain_events();

    t.toggle(1);
    assert_eq!(
        t.drain_events(),
        vec![SelectableEvent::UpdateModelValue(vec![])]
    );
    assert_eq!(t.selected_items(), vec![2]);
    assert!(t.is_selected(1));

    // once the host stops controlling the value, the fallback store is still empty
    t.set_model_value(None);
    assert!(t.selected_items().is_empty());
}

#[test]
fn selection_survives_pagination() {
    let all = DataTableRow::from_items((1..=10u32).collect::<Vec<_>>());
    let mut t = SelectableRows::new(SelectableOptions::multiple())
        .with_rows(paginate(&all, 4, 1).to_vec());

    t.toggle_bulk();
    t.toggle(0);
    assert_eq!(t.anchor(), Some(0));

    t.set_rows(paginate(&all, 4, 2).to_vec());
    assert_eq!(t.anchor(), None);
    assert!(t.none_selected());
    t.toggle(3);
    assert_eq!(t.selected_items(), vec![2, 3, 4, 8]);

    t.set_rows(paginate(&all, 4, 1).to_vec());
    assert!(t.some_selected());
    t.unselect_all();
    assert_eq!(t.selected_items(), vec![8]);
}

#[test]
fn extractor_keys_and_mode_switch() {
    let mut t = SelectableRows::new(SelectableOptions::multiple())
        .with_track_by(TrackBy::extractor(|p: &Product| p.sku * 100))
        .with_rows(products());
    t.toggle(0);
    t.toggle(1);
    assert_eq!(t.selected_items(), vec![100, 200]);
    t.drain_events();

    t.set_options(SelectableOptions::single());
    assert!(t.selected_items().is_empty());
    assert_eq!(t.anchor(), None);
    assert_eq!(
        t.drain_events(),
        vec![
            SelectableEvent::UpdateModelValue(vec![]),
            SelectableEvent::SelectionChange(SelectionChange {
                current: vec![],
                previous: vec![100, 200],
            }),
        ]
    );

    t.toggle(2);
    t.toggle(1);
    assert_eq!(t.selected_items(), vec![200]);
    assert_eq!(t.options().select_mode, SelectMode::Single);
    assert_eq!(t.rows()[1].source.name, "banana");
}
