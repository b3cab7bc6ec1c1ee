//! Drives a table through a scripted sequence of clicks and prints what the host would see.
//!
//! Run with `RUST_LOG=debug` to see anchor resets and mode changes.
use datatable_selection::DataTableRow;
use datatable_selection::ItemSource;
use datatable_selection::SelectMode;
use datatable_selection::SelectableEvent;
use datatable_selection::SelectableOptions;
use datatable_selection::SelectableRows;
use datatable_selection::TrackBy;
use datatable_selection::input::HitTarget;
use datatable_selection::input::InputEvent;
use datatable_selection::input::KeyModifiers;
use datatable_selection::interaction::SelectionBindings;
use datatable_selection::row::paginate;

#[derive(Clone, Debug)]
struct User {
    id: u32,
    name: String,
}

impl ItemSource for User {
    type Key = u32;

    fn identity_key(&self) -> u32 {
        self.id
    }

    fn field_key(&self, name: &str) -> Option<u32> {
        (name == "id").then_some(self.id)
    }
}

fn print_events(table: &mut SelectableRows<User>) {
    for ev in table.drain_events() {
        match ev {
            SelectableEvent::UpdateModelValue(v) => println!("  update:model-value {v:?}"),
            SelectableEvent::SelectionChange(c) => {
                println!("  selection-change {:?} -> {:?}", c.previous, c.current)
            }
        }
    }
}

fn print_page(table: &SelectableRows<User>) {
    for (i, row) in table.rows().iter().enumerate() {
        let mark = if table.is_selected(i) { "[x]" } else { "[ ]" };
        println!("  {mark} {}", row.source.name);
    }
    let header = if table.all_selected() {
        "all"
    } else if table.some_selected() {
        "some"
    } else {
        "none"
    };
    println!("  header checkbox: {header}");
}

fn main() {
    env_logger::init();

    let users: Vec<User> = ["ada", "grace", "linus", "ken", "barbara", "dennis"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| User {
            id: 100 + i as u32,
            name: name.to_string(),
        })
        .collect();
    let all = DataTableRow::from_items(users);

    let bindings = SelectionBindings::default();
    let mut table = SelectableRows::new(SelectableOptions::multiple())
        .with_track_by(TrackBy::field("id"))
        .with_rows(paginate(&all, 4, 1).to_vec());
    print_events(&mut table);

    let script = [
        ("click grace", InputEvent::from_hit(HitTarget::Row(1), KeyModifiers::none())),
        ("shift+click ken", InputEvent::from_hit(HitTarget::Row(3), KeyModifiers::shift())),
        ("ctrl+click linus", InputEvent::from_hit(HitTarget::Row(2), KeyModifiers::ctrl())),
        ("header checkbox", InputEvent::HeaderToggle),
    ];
    for (label, event) in script {
        println!("{label}");
        bindings.handle(&mut table, &event, None);
        print_events(&mut table);
        print_page(&table);
    }

    println!("next page");
    table.set_rows(paginate(&all, 4, 2).to_vec());
    bindings.handle(&mut table, &InputEvent::HeaderToggle, None);
    print_events(&mut table);
    print_page(&table);

    println!("switch to single mode");
    table.set_select_mode(SelectMode::Single);
    print_events(&mut table);
    log::info!("selected after downgrade: {:?}", table.selected_items());
}
