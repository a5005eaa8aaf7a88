//! Settings Form Example
//!
//! Drives the navigation flows without a UI:
//! - An option picker pushing its picker screen
//! - Option rows acting as a radio group
//! - A push-screen row with a will-pop hook
//! - Stepper and slider rows

use std::any::Any;
use std::fs::File;
use std::sync::{Arc, Mutex};

use formdom::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// Screen stack standing in for the host's navigation controller.
#[derive(Default)]
struct StackNavigator {
    stack: Mutex<Vec<Box<dyn FormScreen>>>,
    radio_group: Mutex<Vec<OptionRowItem>>,
}

impl StackNavigator {
    /// The host renderer takes ownership of the screen it presents.
    fn take_top(&self) -> Option<Box<dyn FormScreen>> {
        self.stack.lock().ok().and_then(|mut stack| stack.pop())
    }
}

impl ScreenNavigator for StackNavigator {
    fn push(&self, screen: Box<dyn FormScreen>) {
        println!("-> {}", screen.title());
        if let Ok(mut stack) = self.stack.lock() {
            stack.push(screen);
        }
    }

    fn pop(&self) {
        println!("<- back");
        if let Ok(mut stack) = self.stack.lock() {
            stack.pop();
        }
    }

    fn will_select_option(&self, item: &OptionRowItem) {
        println!("text size: {}", item.title());
        if let Ok(group) = self.radio_group.lock() {
            for row in group.iter() {
                row.set_selected(row.title() == item.title());
            }
        }
    }
}

struct AboutScreen {
    command: DismissCommand,
}

impl FormScreen for AboutScreen {
    fn title(&self) -> String {
        "About".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn main() {
    if let Ok(log_file) = File::create("settings_form.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let navigator = Arc::new(StackNavigator::default());

    let theme = OptionPickerItem::new()
        .with_title("Theme")
        .with_placeholder("System")
        .with_option("Light")
        .with_option("Dark")
        .with_option("System")
        .with_on_change(|option| {
            let title = option.map(|option| option.title.as_str()).unwrap_or("none");
            println!("theme: {title}");
        });
    let small = OptionRowItem::new().with_title("Small");
    let medium = OptionRowItem::new().with_title("Medium").with_selected(true);
    let large = OptionRowItem::new().with_title("Large");
    if let Ok(mut group) = navigator.radio_group.lock() {
        group.extend([small.clone(), medium.clone(), large.clone()]);
    }

    let volume = SliderItem::new()
        .with_maximum_value(100.0)
        .with_value(40.0)
        .with_on_change(|value| println!("volume: {value}"));
    let devices = StepperItem::new()
        .with_title("Devices")
        .with_value(1)
        .with_on_change(|value| println!("devices: {value}"));

    let about = PushScreenItem::new()
        .with_title("About")
        .with_screen_factory(|command| Box::new(AboutScreen { command }))
        .with_will_pop(|context| {
            let note = context
                .returned
                .and_then(|value| value.downcast::<String>().ok())
                .map(|value| *value);
            match note {
                Some(note) => println!("leaving {} ({note})", context.child.title()),
                None => println!("leaving {}", context.child.title()),
            }
        });

    let items: Vec<FormItem> = vec![
        SectionHeaderTitleItem::new().with_title("Appearance").into(),
        theme.clone().into(),
        small.into(),
        medium.into(),
        large.into(),
        SectionHeaderTitleItem::new().with_title("Playback").into(),
        volume.into(),
        devices.into(),
        SectionHeaderTitleItem::new().with_title("General").into(),
        about.into(),
        SectionFooterTitleItem::new()
            .with_title("Settings are saved immediately")
            .into(),
    ];

    let config = CompileConfig {
        navigator: Some(navigator.clone() as Arc<dyn ScreenNavigator>),
        toolbar_mode: ToolbarMode::Simple,
    };
    let list = ListSectionArray::new(compile(&items, config));
    println!("compiled {} sections", list.number_of_sections());

    // Open the theme picker and choose "Dark".
    list.did_select(RowPath::new(0, 0));
    if let Some(screen) = navigator.take_top() {
        if let Some(picker) = screen.as_any().downcast_ref::<OptionPickerScreen>() {
            picker.pick(1);
        }
    }

    // Flip the text size radio group to "Large".
    list.did_select(RowPath::new(0, 3));
    if let Some(row) = list.cell_at(RowPath::new(0, 2)) {
        if let Some(cell) = row.as_any().downcast_ref::<OptionRowCell>() {
            println!("medium still selected: {}", cell.is_selected());
        }
    }

    // Turn the volume up and add a device.
    if let Some(row) = list.cell_at(RowPath::new(1, 0)) {
        if let Some(cell) = row.as_any().downcast_ref::<SliderCell>() {
            cell.slide_to(65.0);
        }
    }
    if let Some(row) = list.cell_at(RowPath::new(1, 1)) {
        if let Some(cell) = row.as_any().downcast_ref::<StepperCell>() {
            cell.increment();
        }
    }

    // Visit the about screen and come back with a note for the parent.
    list.did_select(RowPath::new(2, 0));
    if let Some(screen) = navigator.take_top() {
        let command = screen
            .as_any()
            .downcast_ref::<AboutScreen>()
            .map(|about| about.command.clone());
        if let Some(command) = command {
            command.execute(screen, Some(Box::new("viewed".to_string())));
        }
    }

    let selected = theme.selected().map(|option| option.title);
    println!("final theme: {}", selected.unwrap_or_else(|| "none".to_string()));
}
